//! Quill driver.
//!
//! Glues the phases together for the `quill` binary:
//!
//! ```text
//! source -> quill_lexer::lex -> quill_parse::parse -> Interpreter::run_top_level (per statement)
//! ```
//!
//! Lexer errors are reported and skipped, a parse error stops the run before
//! anything executes, and an execution error only abandons the top-level
//! statement it happened in. A [`Session`] keeps one interpreter alive so the
//! console can run chunk after chunk against the same globals.

pub mod commands;
mod config;
mod session;
mod tracing_setup;

pub use config::RunConfig;
pub use session::{run_source, RunReport, Session};
pub use tracing_setup::{init_tracing, LOG_ENV};
