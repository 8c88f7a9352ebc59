//! lessonplan-export
//!
//! Paginated layout of lesson plans and PDF serialization.

pub mod document;
pub mod error;
pub mod layout;
pub mod metrics;
pub mod pdf;
pub mod styles;
