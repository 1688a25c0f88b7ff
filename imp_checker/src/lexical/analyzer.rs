//! Core lexical analyzer for Imp source text
//!
//! Tokenization is word-level: each line is split on whitespace and every
//! word is matched whole against the token pattern table, so multi-word
//! sequences are never combined into one token. An unrecognized word is
//! recorded as a lexical diagnostic and skipped; lexing never halts.

use crate::diagnostics::Diagnostic;
use crate::logging::codes;
use crate::tokens::{Token, TokenType};
use crate::{log_debug, log_success};

/// Lexical analysis error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexicalError {
    #[error("Token {word} not recognized at line {line}")]
    UnrecognizedWord { word: String, line: u32 },
}

impl LexicalError {
    pub fn unrecognized_word(word: &str, line: u32) -> Self {
        Self::UnrecognizedWord {
            word: word.to_string(),
            line,
        }
    }

    pub fn line(&self) -> u32 {
        match self {
            Self::UnrecognizedWord { line, .. } => *line,
        }
    }

    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            Self::UnrecognizedWord { .. } => codes::lexical::UNRECOGNIZED_TOKEN,
        }
    }
}

impl From<LexicalError> for Diagnostic {
    fn from(error: LexicalError) -> Self {
        let line = error.line();
        Diagnostic::lexical(error.to_string(), line)
    }
}

/// Essential lexical analysis metrics
#[derive(Debug, Default, Clone, serde::Serialize, serde::Deserialize)]
pub struct LexicalMetrics {
    pub total_tokens: usize,
    pub number_tokens: usize,
    pub keyword_tokens: usize,
    pub variable_tokens: usize,
    pub operator_tokens: usize,
    pub punctuation_tokens: usize,
    pub unrecognized_words: usize,
}

impl LexicalMetrics {
    fn record_token(&mut self, token: &Token) {
        self.total_tokens += 1;

        match token.kind() {
            TokenType::Number => self.number_tokens += 1,
            TokenType::ConditionalOperand | TokenType::Loop | TokenType::BooleanValue => {
                self.keyword_tokens += 1
            }
            TokenType::Variable => self.variable_tokens += 1,
            TokenType::MathOperand
            | TokenType::ComparisonOperand
            | TokenType::AssignationOperand => self.operator_tokens += 1,
            TokenType::Parenthesis | TokenType::End => self.punctuation_tokens += 1,
        }
    }

    fn record_unrecognized(&mut self) {
        self.unrecognized_words += 1;
    }
}

/// Core lexical analyzer
pub struct LexicalAnalyzer {
    metrics: LexicalMetrics,
}

impl LexicalAnalyzer {
    pub fn new() -> Self {
        Self {
            metrics: LexicalMetrics::default(),
        }
    }

    /// Get metrics from the most recent tokenization
    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    /// Tokenize source text into an ordered token sequence plus the lexical
    /// diagnostics found along the way.
    ///
    /// Line numbers are 1-based and non-decreasing across the sequence.
    pub fn tokenize(&mut self, source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
        // Reset metrics for this tokenization
        self.metrics = LexicalMetrics::default();

        let mut tokens = Vec::new();
        let mut diagnostics = Vec::new();

        for (index, line) in source.lines().enumerate() {
            let line_number = (index + 1) as u32;

            for word in line.split_whitespace() {
                match classify_word(word) {
                    Some(kind) => {
                        let token = Token::new(word, kind, line_number);
                        self.metrics.record_token(&token);
                        tokens.push(token);
                    }
                    None => {
                        let error = LexicalError::unrecognized_word(word, line_number);
                        log_debug!("Word rejected by every token pattern",
                            "word" => word,
                            "line" => line_number
                        );
                        self.metrics.record_unrecognized();
                        diagnostics.push(Diagnostic::from(error));
                    }
                }
            }
        }

        log_success!(codes::success::TOKENIZATION_COMPLETE,
            "Lexical analysis completed",
            "tokens" => tokens.len(),
            "keywords" => self.metrics.keyword_tokens,
            "variables" => self.metrics.variable_tokens,
            "operators" => self.metrics.operator_tokens,
            "unrecognized" => self.metrics.unrecognized_words
        );

        (tokens, diagnostics)
    }
}

impl Default for LexicalAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Match one pre-split word against the pattern table.
///
/// Every type except `Variable` is tried in declaration order and the first
/// whole-word match wins; `Variable` is the fallback and excludes reserved
/// words.
fn classify_word(word: &str) -> Option<TokenType> {
    for kind in TokenType::MATCH_ORDER {
        if kind.matches_word(word) {
            return Some(kind);
        }
    }

    if TokenType::Variable.matches_word(word) {
        return Some(TokenType::Variable);
    }

    None
}

/// Tokenize source text without keeping the analyzer around
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
    LexicalAnalyzer::new().tokenize(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::keywords::Lexeme;
    use assert_matches::assert_matches;

    #[test]
    fn test_assignment_tokenizes_exactly() {
        let (tokens, diagnostics) = tokenize("x = 1 + 2 ;");

        assert!(diagnostics.is_empty());
        let kinds: Vec<TokenType> = tokens.iter().map(Token::kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenType::Variable,
                TokenType::AssignationOperand,
                TokenType::Number,
                TokenType::MathOperand,
                TokenType::Number,
                TokenType::End,
            ]
        );

        let lexemes: Vec<Option<Lexeme>> = tokens.iter().map(Token::lexeme).collect();
        assert_eq!(
            lexemes,
            vec![
                None,
                Some(Lexeme::Assign),
                None,
                Some(Lexeme::Plus),
                None,
                Some(Lexeme::Semicolon),
            ]
        );

        assert!(tokens.iter().all(|token| token.line() == 1));
    }

    #[test]
    fn test_unrecognized_word_is_reported_and_skipped() {
        let (tokens, diagnostics) = tokenize("x = 1 ;\n$\ny = 2 ;");

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message(), "Token $ not recognized at line 2");
        assert_eq!(diagnostics[0].line(), 2);

        // Tokens on surrounding lines are still produced
        assert_eq!(tokens.len(), 8);
        assert_eq!(tokens[4].value(), "y");
        assert_eq!(tokens[4].line(), 3);
    }

    #[test]
    fn test_keywords_win_over_variable_fallback() {
        let (tokens, diagnostics) = tokenize("while do endwhile if then else endif true false");

        assert!(diagnostics.is_empty());
        assert_matches!(tokens[0].kind(), TokenType::Loop);
        assert_matches!(tokens[3].kind(), TokenType::ConditionalOperand);
        assert_matches!(tokens[7].kind(), TokenType::BooleanValue);
        assert!(tokens.iter().all(|token| !token.is_kind(TokenType::Variable)));
    }

    #[test]
    fn test_glued_words_are_not_split() {
        // Word-level matching: "x=1" is one unrecognized word, not three tokens
        let (tokens, diagnostics) = tokenize("x=1 ;");

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].value(), ";");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message(),
            "Token x=1 not recognized at line 1"
        );
    }

    #[test]
    fn test_line_numbers_are_non_decreasing() {
        let (tokens, _) = tokenize("a = 1 ;\n\nb = 2 ;\nc = 3 ;");

        let lines: Vec<u32> = tokens.iter().map(Token::line).collect();
        let mut sorted = lines.clone();
        sorted.sort_unstable();
        assert_eq!(lines, sorted);
        assert_eq!(tokens[4].line(), 3);
    }

    #[test]
    fn test_equality_and_assign_are_distinguished() {
        let (tokens, diagnostics) = tokenize("= ==");

        assert!(diagnostics.is_empty());
        assert_matches!(tokens[0].kind(), TokenType::AssignationOperand);
        assert_matches!(tokens[0].lexeme(), Some(Lexeme::Assign));
        assert_matches!(tokens[1].kind(), TokenType::ComparisonOperand);
        assert_matches!(tokens[1].lexeme(), Some(Lexeme::EqualTo));
    }

    #[test]
    fn test_metrics_are_collected() {
        let mut analyzer = LexicalAnalyzer::new();
        let (_, _) = analyzer.tokenize("while ( a < 1 ) do x = 2 ; endwhile @");

        let metrics = analyzer.metrics();
        assert_eq!(metrics.total_tokens, 12);
        assert_eq!(metrics.keyword_tokens, 3);
        assert_eq!(metrics.number_tokens, 2);
        assert_eq!(metrics.variable_tokens, 2);
        assert_eq!(metrics.operator_tokens, 2);
        assert_eq!(metrics.punctuation_tokens, 3);
        assert_eq!(metrics.unrecognized_words, 1);
    }

    #[test]
    fn test_empty_and_blank_input() {
        let (tokens, diagnostics) = tokenize("");
        assert!(tokens.is_empty());
        assert!(diagnostics.is_empty());

        let (tokens, diagnostics) = tokenize("   \n\t\n   ");
        assert!(tokens.is_empty());
        assert!(diagnostics.is_empty());
    }
}
