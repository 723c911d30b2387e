//! Diagnostic output destinations.
//!
//! Enum dispatch, same shape as the evaluator's print handler: the set of
//! destinations is closed, so a `match` beats a trait object here.

// Arc lets the driver keep a handle on a buffer emitter it gave away.
#![expect(
    clippy::disallowed_types,
    reason = "Arc required for SharedEmitter"
)]

use parking_lot::Mutex;
use std::sync::Arc;

use crate::Diagnostic;

/// Where diagnostics are written.
pub enum Emitter {
    /// One line per diagnostic on standard error.
    Stderr,
    /// Captured in memory (tests, embedding).
    Buffer(Mutex<String>),
}

impl Emitter {
    /// Write one diagnostic, followed by a newline.
    pub fn emit(&self, diagnostic: &Diagnostic) {
        match self {
            Emitter::Stderr => eprintln!("{diagnostic}"),
            Emitter::Buffer(buf) => {
                let mut buf = buf.lock();
                buf.push_str(&diagnostic.to_string());
                buf.push('\n');
            }
        }
    }

    /// Everything captured so far. Always empty for `Stderr`.
    pub fn output(&self) -> String {
        match self {
            Emitter::Stderr => String::new(),
            Emitter::Buffer(buf) => buf.lock().clone(),
        }
    }

    pub fn clear(&self) {
        if let Emitter::Buffer(buf) = self {
            buf.lock().clear();
        }
    }
}

pub type SharedEmitter = Arc<Emitter>;

pub fn stderr_emitter() -> SharedEmitter {
    Arc::new(Emitter::Stderr)
}

pub fn buffer_emitter() -> SharedEmitter {
    Arc::new(Emitter::Buffer(Mutex::new(String::new())))
}
