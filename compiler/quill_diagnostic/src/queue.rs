//! Collects diagnostics for one run while forwarding them to an emitter.

use crate::{Diagnostic, DiagnosticKind, SharedEmitter};

/// Reported diagnostics, in order.
///
/// Each diagnostic reaches the emitter at the moment it is reported, so
/// execution errors interleave with program output in real time.
pub struct DiagnosticQueue {
    emitter: SharedEmitter,
    reported: Vec<Diagnostic>,
}

impl DiagnosticQueue {
    pub fn new(emitter: SharedEmitter) -> Self {
        DiagnosticQueue {
            emitter,
            reported: Vec::new(),
        }
    }

    /// Emit `diagnostic` and record it.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.emitter.emit(&diagnostic);
        self.reported.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.reported
    }

    /// Number of reported diagnostics of `kind`.
    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.reported.iter().filter(|d| d.kind == kind).count()
    }

    /// Whether anything other than lexer errors was reported.
    pub fn has_errors(&self) -> bool {
        self.reported
            .iter()
            .any(|d| d.kind != DiagnosticKind::Lexer)
    }

    pub fn is_empty(&self) -> bool {
        self.reported.is_empty()
    }

    /// Forget recorded diagnostics; the emitter keeps what it already wrote.
    pub fn clear(&mut self) {
        self.reported.clear();
    }
}
