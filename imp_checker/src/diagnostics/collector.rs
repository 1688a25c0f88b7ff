//! Accumulates diagnostics from both phases and orders them for reporting

use super::Diagnostic;

/// Per-run accumulator for lexical and syntax diagnostics.
///
/// Owned by a single run and threaded explicitly through it; there is no
/// shared or global error list. The final ordering is a stable ascending
/// sort by line, so diagnostics sharing a line keep their detection order
/// (lexical findings for a line precede syntax findings, since lexing fully
/// precedes parsing).
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one finding
    pub fn record(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Record a batch of findings in detection order
    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Findings in detection order, before sorting
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Finish the run: stable sort ascending by line and yield the sequence
    pub fn into_sorted(mut self) -> Vec<Diagnostic> {
        self.diagnostics.sort_by_key(Diagnostic::line);
        self.diagnostics
    }
}
