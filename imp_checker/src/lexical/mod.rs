//! Lexical analysis module

pub mod analyzer;

pub use analyzer::{tokenize, LexicalAnalyzer, LexicalError, LexicalMetrics};
