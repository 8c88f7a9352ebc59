//! lessonplan-cli library root.
//!
//! Exposes the form, config and command layers so that examples and
//! integration tests can drive them without going through argument parsing.

pub mod commands;
pub mod config;
pub mod form;
