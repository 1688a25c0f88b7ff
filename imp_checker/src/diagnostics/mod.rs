//! Diagnostic model and per-run collector
//!
//! Both phases report findings through the same shape: a message and the
//! 1-based line it blames, with line 0 standing for "no specific line"
//! (end of input). Findings never abort a run; they are accumulated and
//! handed back sorted by line.

pub mod collector;

pub use collector::DiagnosticCollector;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which phase produced a diagnostic. Metadata only; the shape is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticKind {
    Lexical,
    Syntax,
}

impl DiagnosticKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lexical => "lexical",
            Self::Syntax => "syntax",
        }
    }
}

/// One collected finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    message: String,
    line: u32,
    kind: DiagnosticKind,
}

impl Diagnostic {
    /// Create a lexical-phase diagnostic
    pub fn lexical(message: impl Into<String>, line: u32) -> Self {
        Self {
            message: message.into(),
            line,
            kind: DiagnosticKind::Lexical,
        }
    }

    /// Create a syntax-phase diagnostic
    pub fn syntax(message: impl Into<String>, line: u32) -> Self {
        Self {
            message: message.into(),
            line,
            kind: DiagnosticKind::Syntax,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Blamed line, 0 when the finding has no specific line
    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
