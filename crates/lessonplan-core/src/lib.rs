//! lessonplan-core
//!
//! Pure domain types for lesson plans and the export filename convention.
//! No network or rendering dependency; the other crates build on these types.

pub mod error;
pub mod filename;
pub mod models;
