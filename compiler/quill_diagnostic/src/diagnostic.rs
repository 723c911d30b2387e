use quill_ir::Span;
use std::fmt;

/// The phase that produced a diagnostic.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DiagnosticKind {
    Lexer,
    Parse,
    Execution,
}

impl DiagnosticKind {
    /// Prefix printed before the message.
    pub fn label(self) -> &'static str {
        match self {
            DiagnosticKind::Lexer => "Lexer Error",
            DiagnosticKind::Parse => "Parse Error",
            DiagnosticKind::Execution => "Execution Error",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single reported problem.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    /// Where in the source the problem was found, when known.
    pub span: Option<Span>,
}

impl Diagnostic {
    pub fn lexer(message: impl Into<String>, span: Span) -> Self {
        Diagnostic {
            kind: DiagnosticKind::Lexer,
            message: message.into(),
            span: Some(span),
        }
    }

    pub fn parse(message: impl Into<String>, span: Span) -> Self {
        Diagnostic {
            kind: DiagnosticKind::Parse,
            message: message.into(),
            span: Some(span),
        }
    }

    /// Execution errors carry no span; the tree does not record positions.
    pub fn execution(message: impl Into<String>) -> Self {
        Diagnostic {
            kind: DiagnosticKind::Execution,
            message: message.into(),
            span: None,
        }
    }

    /// Render with a `line:column` suffix resolved against `source`.
    pub fn render_with_source(&self, source: &str) -> String {
        match self.span {
            Some(span) => format!("{self} (at {})", span.line_col(source)),
            None => self.to_string(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}
