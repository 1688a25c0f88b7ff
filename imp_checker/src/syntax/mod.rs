//! Syntax analysis module

pub mod error;
pub mod parser;

pub use error::{SyntaxError, SyntaxResult};
pub use parser::{Confirmation, ParseReport, Parser, StatementKind};

use crate::tokens::TokenStream;

/// Parse a token stream, collecting confirmations and syntax diagnostics
pub fn parse(stream: TokenStream) -> ParseReport {
    Parser::new(stream).parse()
}
