//! Expose blogdoc's internal API for use in integration tests. It is not meant
//! as a stable library interface; use `blogdoc-convert` for that.
pub mod batch;
pub mod cli;
pub mod commands;
pub mod utils;
