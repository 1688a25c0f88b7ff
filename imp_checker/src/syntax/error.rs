//! Error types for syntax analysis
//!
//! Every error carries the line of the token it blames; end-of-input errors
//! report line 0 ("no specific line"). Errors never terminate a run: the
//! top-level parse loop records them and synchronizes.

use crate::diagnostics::Diagnostic;
use crate::logging::{codes, Code};
use crate::tokens::Token;

pub type SyntaxResult<T> = Result<T, SyntaxError>;

/// A violated grammar expectation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    #[error("Unexpected token {found} at line {line}")]
    UnexpectedToken { found: String, line: u32 },

    #[error("Expected {expected} but found {found} at line {line}")]
    ExpectationMismatch {
        expected: String,
        found: String,
        line: u32,
    },

    #[error("Expected comparison operator but found {found} at line {line}")]
    ExpectedComparison { found: String, line: u32 },

    #[error("Expected {expected} but input ended")]
    UnexpectedEndOfInput { expected: String },
}

impl SyntaxError {
    /// Create an unexpected-token error from the offending token
    pub fn unexpected_token(token: &Token) -> Self {
        Self::UnexpectedToken {
            found: token.value().to_string(),
            line: token.line(),
        }
    }

    /// Create an expectation mismatch; `found` reports the token's type tag
    pub fn expectation_mismatch(expected: impl Into<String>, token: &Token) -> Self {
        Self::ExpectationMismatch {
            expected: expected.into(),
            found: token.kind().as_str().to_string(),
            line: token.line(),
        }
    }

    /// Create a comparator expectation failure naming the found token
    pub fn expected_comparison(token: &Token) -> Self {
        Self::ExpectedComparison {
            found: token.value().to_string(),
            line: token.line(),
        }
    }

    /// Create an end-of-input error; reports line 0
    pub fn end_of_input(expected: impl Into<String>) -> Self {
        Self::UnexpectedEndOfInput {
            expected: expected.into(),
        }
    }

    /// Blamed line; 0 when the input ended with no token to blame
    pub fn line(&self) -> u32 {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::ExpectationMismatch { line, .. }
            | Self::ExpectedComparison { line, .. } => *line,
            Self::UnexpectedEndOfInput { .. } => 0,
        }
    }

    /// Get error code for the logging system
    pub fn error_code(&self) -> Code {
        match self {
            Self::UnexpectedToken { .. } => codes::syntax::UNEXPECTED_TOKEN,
            Self::ExpectationMismatch { .. } | Self::ExpectedComparison { .. } => {
                codes::syntax::GRAMMAR_VIOLATION
            }
            Self::UnexpectedEndOfInput { .. } => codes::syntax::UNEXPECTED_END_OF_INPUT,
        }
    }
}

impl From<SyntaxError> for Diagnostic {
    fn from(error: SyntaxError) -> Self {
        let line = error.line();
        Diagnostic::syntax(error.to_string(), line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticKind;
    use crate::tokens::TokenType;

    #[test]
    fn test_unexpected_token_message() {
        let token = Token::new(";", TokenType::End, 4);
        let error = SyntaxError::unexpected_token(&token);

        assert_eq!(error.to_string(), "Unexpected token ; at line 4");
        assert_eq!(error.line(), 4);
        assert_eq!(error.error_code().as_str(), "E050");
    }

    #[test]
    fn test_expectation_mismatch_names_the_type_tag() {
        let token = Token::new("x", TokenType::Variable, 2);
        let error = SyntaxError::expectation_mismatch("'then'", &token);

        assert_eq!(
            error.to_string(),
            "Expected 'then' but found VARIABLE at line 2"
        );
    }

    #[test]
    fn test_end_of_input_reports_line_zero() {
        let error = SyntaxError::end_of_input("';'");

        assert_eq!(error.to_string(), "Expected ';' but input ended");
        assert_eq!(error.line(), 0);
        assert_eq!(error.error_code().as_str(), "E040");
    }

    #[test]
    fn test_conversion_to_diagnostic() {
        let token = Token::new("!=", TokenType::ComparisonOperand, 5);
        let diagnostic = Diagnostic::from(SyntaxError::expected_comparison(&token));

        assert_eq!(diagnostic.kind(), DiagnosticKind::Syntax);
        assert_eq!(diagnostic.line(), 5);
        assert_eq!(
            diagnostic.message(),
            "Expected comparison operator but found != at line 5"
        );
    }
}
