//! lessonplan-gemini
//!
//! Prompt construction and Gemini text generation for lesson plan drafts.

pub mod client;
pub mod error;
pub mod generator;
pub mod prompt;
