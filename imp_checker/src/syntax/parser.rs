//! Recursive-descent parser with panic-mode error recovery
//!
//! Single-token-lookahead descent over a materialized token stream. The
//! grammar:
//!
//! ```text
//! program    := statement*
//! statement  := assignment | if_stmt | while_stmt
//! assignment := VARIABLE '=' expression ';'
//! if_stmt    := 'if' condition 'then' statement* ('else' statement*)? 'endif'
//! while_stmt := 'while' condition 'do' statement* 'endwhile'
//! condition  := '(' expression cmp_op expression ')'
//! cmp_op     := '<' | '<=' | '>' | '>=' | '=='
//! expression := term (('+'|'-') term)*
//! term       := factor (('*'|'/') factor)*
//! factor     := NUMBER | VARIABLE | '(' expression ')'
//! ```
//!
//! A syntax error abandons the enclosing statement only: the top-level loop
//! records the diagnostic and synchronizes to the next `if`/`while` lexeme
//! (or end of input) before resuming. Expression and condition trees are
//! built as a byproduct of recognition and dropped once the statement is
//! confirmed; the parser never inspects them.

use crate::diagnostics::Diagnostic;
use crate::grammar::ast::nodes::{Condition, Expression};
use crate::grammar::keywords::Lexeme;
use crate::log_debug;
use crate::syntax::error::{SyntaxError, SyntaxResult};
use crate::tokens::{Token, TokenStream, TokenType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Statement forms the grammar can confirm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatementKind {
    Assignment,
    IfThen,
    While,
}

impl StatementKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Assignment => "assignment",
            Self::IfThen => "if then",
            Self::While => "while",
        }
    }
}

/// Confirmation event emitted when a statement parses cleanly.
///
/// Purely observational: the line is that of the statement's last consumed
/// token, and later parsing never depends on these events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    kind: StatementKind,
    line: u32,
}

impl Confirmation {
    pub fn new(kind: StatementKind, line: u32) -> Self {
        Self { kind, line }
    }

    pub fn kind(&self) -> StatementKind {
        self.kind
    }

    pub fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Valid {} statement at line {}",
            self.kind.as_str(),
            self.line
        )
    }
}

/// Everything one parse run produced
#[derive(Debug, Clone)]
pub struct ParseReport {
    confirmations: Vec<Confirmation>,
    diagnostics: Vec<Diagnostic>,
}

impl ParseReport {
    pub fn confirmations(&self) -> &[Confirmation] {
        &self.confirmations
    }

    /// Syntax diagnostics in detection order
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn into_parts(self) -> (Vec<Confirmation>, Vec<Diagnostic>) {
        (self.confirmations, self.diagnostics)
    }
}

/// Recursive-descent engine over one token stream
pub struct Parser {
    stream: TokenStream,
    confirmations: Vec<Confirmation>,
    diagnostics: Vec<Diagnostic>,
}

impl Parser {
    pub fn new(stream: TokenStream) -> Self {
        Self {
            stream,
            confirmations: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Parse the whole stream, collecting diagnostics instead of aborting.
    ///
    /// The catch-and-synchronize step lives here, at the top level: each
    /// failed statement is recorded and the cursor skips to the next
    /// recognized statement boundary.
    pub fn parse(mut self) -> ParseReport {
        while !self.stream.is_at_end() {
            if let Err(error) = self.parse_statement() {
                log_debug!("Statement abandoned, synchronizing",
                    "error" => error,
                    "position" => self.stream.position()
                );
                self.diagnostics.push(Diagnostic::from(error));
                self.synchronize();
            }
        }

        ParseReport {
            confirmations: self.confirmations,
            diagnostics: self.diagnostics,
        }
    }

    /// Skip tokens until the next statement boundary (`if`/`while` lexeme)
    /// or end of input. Advances monotonically, so recovery always
    /// terminates.
    fn synchronize(&mut self) {
        while let Some(token) = self.stream.current() {
            if token.lexeme().map_or(false, Lexeme::is_statement_boundary) {
                return;
            }
            self.stream.advance();
        }
    }

    /// Dispatch on the current token: VARIABLE type routes to assignment,
    /// otherwise the lexeme picks the statement form.
    fn parse_statement(&mut self) -> SyntaxResult<()> {
        let current = match self.stream.current() {
            Some(token) => token.clone(),
            None => return Err(SyntaxError::end_of_input("statement")),
        };

        if current.is_kind(TokenType::Variable) {
            return self.parse_assignment();
        }

        match current.lexeme() {
            Some(Lexeme::While) => self.parse_while(),
            Some(Lexeme::If) => self.parse_if(),
            // Any other lexeme, and tokens with no lexeme at all (numbers,
            // booleans, `<>`), cannot open a statement
            _ => Err(SyntaxError::unexpected_token(&current)),
        }
    }

    fn parse_assignment(&mut self) -> SyntaxResult<()> {
        self.consume_kind(TokenType::Variable)?;
        self.consume_lexeme(Lexeme::Assign)?;
        self.parse_expression()?;
        let end = self.consume_lexeme(Lexeme::Semicolon)?;

        self.confirm(StatementKind::Assignment, end.line());
        Ok(())
    }

    fn parse_if(&mut self) -> SyntaxResult<()> {
        self.consume_lexeme(Lexeme::If)?;
        self.parse_condition()?;
        self.consume_lexeme(Lexeme::Then)?;

        while !self.stream.check_lexeme(Lexeme::Endif) && !self.stream.check_lexeme(Lexeme::Else) {
            self.parse_statement()?;
        }

        if self.stream.check_lexeme(Lexeme::Else) {
            self.consume_lexeme(Lexeme::Else)?;
            while !self.stream.check_lexeme(Lexeme::Endif) {
                self.parse_statement()?;
            }
        }

        let end = self.consume_lexeme(Lexeme::Endif)?;
        self.confirm(StatementKind::IfThen, end.line());
        Ok(())
    }

    fn parse_while(&mut self) -> SyntaxResult<()> {
        self.consume_lexeme(Lexeme::While)?;
        self.parse_condition()?;
        self.consume_lexeme(Lexeme::Do)?;

        while !self.stream.check_lexeme(Lexeme::Endwhile) {
            self.parse_statement()?;
        }

        let end = self.consume_lexeme(Lexeme::Endwhile)?;
        self.confirm(StatementKind::While, end.line());
        Ok(())
    }

    /// condition := '(' expression cmp_op expression ')'
    ///
    /// Only `<`, `<=`, `>`, `>=` and `==` are accepted comparators; `!=` and
    /// `<>` tokenize but are rejected here.
    fn parse_condition(&mut self) -> SyntaxResult<Condition> {
        self.consume_lexeme(Lexeme::OpenParenthesis)?;
        let left = self.parse_expression()?;

        let operator = match self.stream.current() {
            Some(token) => token.clone(),
            None => return Err(SyntaxError::end_of_input("comparison operator")),
        };
        if !operator.lexeme().map_or(false, Lexeme::is_comparison) {
            return Err(SyntaxError::expected_comparison(&operator));
        }
        self.stream.advance();

        let right = self.parse_expression()?;
        self.consume_lexeme(Lexeme::CloseParenthesis)?;

        Ok(Condition::new(left, operator, right))
    }

    fn parse_expression(&mut self) -> SyntaxResult<Expression> {
        self.parse_addition_subtraction()
    }

    /// expression := term (('+'|'-') term)*
    fn parse_addition_subtraction(&mut self) -> SyntaxResult<Expression> {
        let mut expression = self.parse_multiplication_division()?;

        while let Some(operator) = self.match_operator(Lexeme::is_additive) {
            let right = self.parse_multiplication_division()?;
            expression = Expression::binary(expression, operator, right);
        }

        Ok(expression)
    }

    /// term := factor (('*'|'/') factor)*
    fn parse_multiplication_division(&mut self) -> SyntaxResult<Expression> {
        let mut expression = self.parse_primary()?;

        while let Some(operator) = self.match_operator(Lexeme::is_multiplicative) {
            let right = self.parse_primary()?;
            expression = Expression::binary(expression, operator, right);
        }

        Ok(expression)
    }

    /// factor := NUMBER | VARIABLE | '(' expression ')'
    fn parse_primary(&mut self) -> SyntaxResult<Expression> {
        let current = match self.stream.current() {
            Some(token) => token.clone(),
            None => return Err(SyntaxError::end_of_input("expression")),
        };

        if current.is_kind(TokenType::Number) || current.is_kind(TokenType::Variable) {
            self.stream.advance();
            return Ok(Expression::literal(current));
        }

        if current.has_lexeme(Lexeme::OpenParenthesis) {
            self.stream.advance();
            let inner = self.parse_expression()?;
            self.consume_lexeme(Lexeme::CloseParenthesis)?;
            return Ok(Expression::grouping(inner));
        }

        Err(SyntaxError::unexpected_token(&current))
    }

    /// Consume and return the current token if its lexeme satisfies the
    /// predicate
    fn match_operator(&mut self, accepts: fn(Lexeme) -> bool) -> Option<Token> {
        let token = self.stream.current()?.clone();
        if token.lexeme().map_or(false, accepts) {
            self.stream.advance();
            Some(token)
        } else {
            None
        }
    }

    /// Consume the current token if it carries the expected lexeme
    fn consume_lexeme(&mut self, expected: Lexeme) -> SyntaxResult<Token> {
        let current = match self.stream.current() {
            Some(token) => token.clone(),
            None => {
                return Err(SyntaxError::end_of_input(format!(
                    "'{}'",
                    expected.as_str()
                )))
            }
        };

        if current.has_lexeme(expected) {
            self.stream.advance();
            Ok(current)
        } else {
            Err(SyntaxError::expectation_mismatch(
                format!("'{}'", expected.as_str()),
                &current,
            ))
        }
    }

    /// Consume the current token if it carries the expected type tag
    fn consume_kind(&mut self, expected: TokenType) -> SyntaxResult<Token> {
        let current = match self.stream.current() {
            Some(token) => token.clone(),
            None => return Err(SyntaxError::end_of_input(expected.as_str())),
        };

        if current.is_kind(expected) {
            self.stream.advance();
            Ok(current)
        } else {
            Err(SyntaxError::expectation_mismatch(
                expected.as_str(),
                &current,
            ))
        }
    }

    fn confirm(&mut self, kind: StatementKind, line: u32) {
        log_debug!("Statement validated",
            "kind" => kind.as_str(),
            "line" => line
        );
        self.confirmations.push(Confirmation::new(kind, line));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::tokenize;
    use assert_matches::assert_matches;

    fn parse_source(source: &str) -> ParseReport {
        let (tokens, lexical_diagnostics) = tokenize(source);
        assert!(
            lexical_diagnostics.is_empty(),
            "test source must tokenize cleanly"
        );
        Parser::new(TokenStream::new(tokens)).parse()
    }

    fn parse_expression_of(source: &str) -> Expression {
        let (tokens, _) = tokenize(source);
        let mut parser = Parser::new(TokenStream::new(tokens));
        parser.parse_expression().expect("expression parses")
    }

    #[test]
    fn test_valid_assignment_confirms_at_semicolon_line() {
        let report = parse_source("x = 1 + 2 ;");

        assert!(report.is_clean());
        assert_eq!(report.confirmations().len(), 1);
        let confirmation = report.confirmations()[0];
        assert_eq!(confirmation.kind(), StatementKind::Assignment);
        assert_eq!(confirmation.line(), 1);
        assert_eq!(
            confirmation.to_string(),
            "Valid assignment statement at line 1"
        );
    }

    #[test]
    fn test_valid_if_confirms_inner_then_outer() {
        let report = parse_source("if ( a < b ) then x = 1 ; endif");

        assert!(report.is_clean());
        let kinds: Vec<StatementKind> = report
            .confirmations()
            .iter()
            .map(Confirmation::kind)
            .collect();
        assert_eq!(kinds, vec![StatementKind::Assignment, StatementKind::IfThen]);
        assert!(report
            .confirmations()
            .iter()
            .all(|confirmation| confirmation.line() == 1));
    }

    #[test]
    fn test_if_else_and_while_statements() {
        let report = parse_source(
            "if ( a <= 10 ) then\n\
             x = 1 ;\n\
             else\n\
             y = 2 ;\n\
             endif\n\
             while ( y > 0 ) do\n\
             y = y - 1 ;\n\
             endwhile",
        );

        assert!(report.is_clean());
        let kinds: Vec<StatementKind> = report
            .confirmations()
            .iter()
            .map(Confirmation::kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                StatementKind::Assignment,
                StatementKind::Assignment,
                StatementKind::IfThen,
                StatementKind::Assignment,
                StatementKind::While,
            ]
        );
        assert_eq!(report.confirmations()[2].line(), 5);
        assert_eq!(report.confirmations()[4].line(), 8);
    }

    #[test]
    fn test_missing_then_recovers_at_next_statement() {
        let report = parse_source("if ( a < b ) x = 1 ; endif\nwhile ( a < b ) do y = 2 ; endwhile");

        assert_eq!(report.diagnostics().len(), 1);
        assert_eq!(
            report.diagnostics()[0].message(),
            "Expected 'then' but found VARIABLE at line 1"
        );

        // Recovery lands on the `while` boundary and validates it fully
        let kinds: Vec<StatementKind> = report
            .confirmations()
            .iter()
            .map(Confirmation::kind)
            .collect();
        assert_eq!(kinds, vec![StatementKind::Assignment, StatementKind::While]);
        assert_eq!(report.confirmations()[1].line(), 2);
    }

    #[test]
    fn test_unexpected_token_at_statement_position() {
        let report = parse_source("; x = 1 ;");

        assert_eq!(report.diagnostics().len(), 1);
        assert_eq!(
            report.diagnostics()[0].message(),
            "Unexpected token ; at line 1"
        );
        // No boundary follows, so the assignment is skipped by recovery
        assert!(report.confirmations().is_empty());
    }

    #[test]
    fn test_boolean_in_statement_position_is_reported_not_a_crash() {
        let report = parse_source("true");

        assert_eq!(report.diagnostics().len(), 1);
        assert_eq!(
            report.diagnostics()[0].message(),
            "Unexpected token true at line 1"
        );
    }

    #[test]
    fn test_not_equal_comparator_is_rejected() {
        let report = parse_source("if ( a != b ) then x = 1 ; endif");

        assert_eq!(report.diagnostics().len(), 1);
        assert_eq!(
            report.diagnostics()[0].message(),
            "Expected comparison operator but found != at line 1"
        );
        assert!(report.confirmations().is_empty());
    }

    #[test]
    fn test_input_ending_mid_construct_blames_line_zero() {
        let report = parse_source("x = 1");

        assert_eq!(report.diagnostics().len(), 1);
        let diagnostic = &report.diagnostics()[0];
        assert_eq!(diagnostic.line(), 0);
        assert_eq!(diagnostic.message(), "Expected ';' but input ended");
    }

    #[test]
    fn test_input_ending_in_condition_blames_line_zero() {
        let report = parse_source("while ( a");

        assert_eq!(report.diagnostics().len(), 1);
        assert_eq!(
            report.diagnostics()[0].message(),
            "Expected comparison operator but input ended"
        );
        assert_eq!(report.diagnostics()[0].line(), 0);
    }

    #[test]
    fn test_multiple_independent_errors_in_one_pass() {
        let report = parse_source(
            "if ( a < b ) x = 1 ; endif\n\
             while ( a == b ) do\n\
             y = 2 ;\n\
             endwhile\n\
             if ( a > b ) endif",
        );

        assert_eq!(report.diagnostics().len(), 2);
        assert_eq!(report.diagnostics()[0].line(), 1);
        assert_eq!(report.diagnostics()[1].line(), 5);

        let kinds: Vec<StatementKind> = report
            .confirmations()
            .iter()
            .map(Confirmation::kind)
            .collect();
        assert_eq!(kinds, vec![StatementKind::Assignment, StatementKind::While]);
    }

    #[test]
    fn test_precedence_multiplication_binds_tighter() {
        let expression = parse_expression_of("2 + 3 * 4");

        assert_matches!(expression, Expression::Binary { ref left, ref operator, ref right } => {
            assert_eq!(operator.value(), "+");
            assert_matches!(**left, Expression::Literal(ref token) if token.value() == "2");
            assert_matches!(**right, Expression::Binary { ref left, ref operator, ref right } => {
                assert_eq!(operator.value(), "*");
                assert_matches!(**left, Expression::Literal(ref token) if token.value() == "3");
                assert_matches!(**right, Expression::Literal(ref token) if token.value() == "4");
            });
        });
    }

    #[test]
    fn test_grouping_overrides_precedence() {
        let expression = parse_expression_of("( 2 + 3 ) * 4");

        assert_matches!(expression, Expression::Binary { ref left, ref operator, ref right } => {
            assert_eq!(operator.value(), "*");
            assert_matches!(**right, Expression::Literal(ref token) if token.value() == "4");
            assert_matches!(**left, Expression::Grouping(ref inner) => {
                assert_matches!(**inner, Expression::Binary { ref operator, .. } => {
                    assert_eq!(operator.value(), "+");
                });
            });
        });
    }

    #[test]
    fn test_same_tier_operators_left_associate() {
        let expression = parse_expression_of("1 - 2 - 3");

        // (1 - 2) - 3
        assert_matches!(expression, Expression::Binary { ref left, ref operator, ref right } => {
            assert_eq!(operator.value(), "-");
            assert_matches!(**right, Expression::Literal(ref token) if token.value() == "3");
            assert_matches!(**left, Expression::Binary { ref left, ref right, .. } => {
                assert_matches!(**left, Expression::Literal(ref token) if token.value() == "1");
                assert_matches!(**right, Expression::Literal(ref token) if token.value() == "2");
            });
        });
    }

    #[test]
    fn test_empty_input_parses_to_nothing() {
        let report = parse_source("");

        assert!(report.is_clean());
        assert!(report.confirmations().is_empty());
    }

    #[test]
    fn test_nested_blocks_confirm_innermost_first() {
        let report = parse_source(
            "while ( i < 10 ) do\n\
             if ( i > 5 ) then\n\
             i = i + 1 ;\n\
             endif\n\
             endwhile",
        );

        assert!(report.is_clean());
        let kinds: Vec<StatementKind> = report
            .confirmations()
            .iter()
            .map(Confirmation::kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                StatementKind::Assignment,
                StatementKind::IfThen,
                StatementKind::While,
            ]
        );
    }
}
