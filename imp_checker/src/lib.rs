// Internal modules
pub mod config;
pub mod diagnostics;
pub mod file_processor;
pub mod grammar;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod pipeline;
pub mod syntax;
pub mod tokens;

// Re-export key types for library consumers
pub use diagnostics::{Diagnostic, DiagnosticCollector, DiagnosticKind};
pub use pipeline::{check_source, process_file, CheckResult, PipelineError};
pub use syntax::{Confirmation, StatementKind};
pub use tokens::{Token, TokenType};
