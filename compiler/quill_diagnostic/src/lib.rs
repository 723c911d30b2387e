//! Diagnostic reporting.
//!
//! Every phase reports problems on one stream, separate from program
//! output. A diagnostic names the phase that produced it:
//!
//! - `Lexer Error: ...` for input the lexer skipped (scanning continues)
//! - `Parse Error: ...` for malformed syntax (nothing runs)
//! - `Execution Error: ...` for a failed top-level statement (the next
//!   statement still runs)
//!
//! Diagnostics are pushed into a [`DiagnosticQueue`], which forwards each
//! one to an [`Emitter`] as it arrives and keeps a record for the caller.

mod diagnostic;
pub mod emitter;
pub mod queue;

pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use emitter::{buffer_emitter, stderr_emitter, Emitter, SharedEmitter};
pub use queue::DiagnosticQueue;
