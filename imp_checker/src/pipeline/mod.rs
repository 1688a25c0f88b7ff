//! Checker pipeline: text -> tokens -> parse -> sorted diagnostics
//!
//! One run processes one input text to completion. Lexing finishes and the
//! whole token sequence is materialized before parsing starts; the stream,
//! cursor and diagnostics all belong to the run, so independent inputs can
//! be processed in any order (or in parallel by a caller) without shared
//! state.

mod error;
mod result;

pub use error::PipelineError;
pub use result::CheckResult;

use crate::diagnostics::DiagnosticCollector;
use crate::file_processor;
use crate::lexical::LexicalAnalyzer;
use crate::logging::codes;
use crate::{log_error, log_success};
use crate::syntax::Parser;
use crate::tokens::TokenStream;
use std::path::Path;

/// Check one in-memory source text.
///
/// Never fails: the worst outcome is zero confirmations and a full
/// diagnostic list.
pub fn check_source(source: &str) -> CheckResult {
    let mut analyzer = LexicalAnalyzer::new();
    let (tokens, lexical_diagnostics) = analyzer.tokenize(source);

    let report = Parser::new(TokenStream::new(tokens.clone())).parse();
    let (confirmations, syntax_diagnostics) = report.into_parts();

    // Lexical findings go in first so same-line syntax findings sort after
    // them; the sort itself is stable.
    let mut collector = DiagnosticCollector::new();
    collector.extend(lexical_diagnostics);
    collector.extend(syntax_diagnostics);
    let diagnostics = collector.into_sorted();

    log_success!(codes::success::CHECK_COMPLETE,
        "Check completed",
        "tokens" => tokens.len(),
        "confirmations" => confirmations.len(),
        "diagnostics" => diagnostics.len()
    );

    CheckResult::new(tokens, confirmations, diagnostics, analyzer.metrics().clone())
}

/// Load a file and check its contents
pub fn process_file(path: &Path) -> Result<CheckResult, PipelineError> {
    let file = file_processor::load_source(path).map_err(|error| {
        log_error!(error.error_code(), &error.to_string(),
            "file" => path.display()
        );
        PipelineError::from(error)
    })?;
    Ok(check_source(file.source()))
}
