//! Result type carried out of one checker run

use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::lexical::LexicalMetrics;
use crate::syntax::Confirmation;
use crate::tokens::Token;
use serde::{Deserialize, Serialize};

/// The core's contract with its caller: the token sequence, the confirmation
/// events, and the line-sorted diagnostic sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    tokens: Vec<Token>,
    confirmations: Vec<Confirmation>,
    diagnostics: Vec<Diagnostic>,
    metrics: LexicalMetrics,
}

impl CheckResult {
    pub fn new(
        tokens: Vec<Token>,
        confirmations: Vec<Confirmation>,
        diagnostics: Vec<Diagnostic>,
        metrics: LexicalMetrics,
    ) -> Self {
        Self {
            tokens,
            confirmations,
            diagnostics,
            metrics,
        }
    }

    /// Token sequence in source order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Confirmation events in emission order
    pub fn confirmations(&self) -> &[Confirmation] {
        &self.confirmations
    }

    /// All diagnostics from both phases, sorted ascending by line
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Lexical metrics for the run
    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    /// Check if the run produced no findings at all
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn lexical_diagnostic_count(&self) -> usize {
        self.count_kind(DiagnosticKind::Lexical)
    }

    pub fn syntax_diagnostic_count(&self) -> usize {
        self.count_kind(DiagnosticKind::Syntax)
    }

    fn count_kind(&self, kind: DiagnosticKind) -> usize {
        self.diagnostics
            .iter()
            .filter(|diagnostic| diagnostic.kind() == kind)
            .count()
    }
}
