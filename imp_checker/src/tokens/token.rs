//! Token model for the Imp lexical analyzer
//!
//! A token pairs the exact source word with a coarse type tag, an optional
//! fixed-spelling lexeme tag and the 1-based line it was found on. Tokens are
//! immutable once created and owned by the stream handed to the parser.
use crate::grammar::keywords::{self, Lexeme};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Coarse lexical categories, one per token.
///
/// Variant order is the matching order: the tokenizer tries every pattern
/// except `Variable` top to bottom and takes the first whole-word match,
/// falling back to `Variable` last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    Number,
    MathOperand,
    ComparisonOperand,
    AssignationOperand,
    ConditionalOperand,
    BooleanValue,
    Loop,
    Parenthesis,
    End,
    Variable,
}

impl TokenType {
    /// Non-variable types in declaration order, as tried by the tokenizer
    pub const MATCH_ORDER: [TokenType; 9] = [
        Self::Number,
        Self::MathOperand,
        Self::ComparisonOperand,
        Self::AssignationOperand,
        Self::ConditionalOperand,
        Self::BooleanValue,
        Self::Loop,
        Self::Parenthesis,
        Self::End,
    ];

    const ALL: [TokenType; 10] = [
        Self::Number,
        Self::MathOperand,
        Self::ComparisonOperand,
        Self::AssignationOperand,
        Self::ConditionalOperand,
        Self::BooleanValue,
        Self::Loop,
        Self::Parenthesis,
        Self::End,
        Self::Variable,
    ];

    /// Get the type tag as it appears in token dumps and error messages
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Number => "NUMBER",
            Self::MathOperand => "MATH_OPERAND",
            Self::ComparisonOperand => "COMPARISON_OPERAND",
            Self::AssignationOperand => "ASSIGNATION_OPERAND",
            Self::ConditionalOperand => "CONDITIONAL_OPERAND",
            Self::BooleanValue => "BOOLEAN_VALUE",
            Self::Loop => "LOOP",
            Self::Parenthesis => "PARENTHESIS",
            Self::End => "END",
            Self::Variable => "VARIABLE",
        }
    }

    /// Anchored whole-word pattern for this type.
    ///
    /// `Variable` additionally excludes the reserved vocabulary; the `regex`
    /// crate has no lookaround, so that check lives in [`matches_word`].
    ///
    /// [`matches_word`]: TokenType::matches_word
    const fn pattern_source(self) -> &'static str {
        match self {
            Self::Number => r"^[0-9]+$",
            Self::MathOperand => r"^[+\-*/]$",
            Self::ComparisonOperand => r"^(?:==|<|<=|>|>=|<>|!=)$",
            Self::AssignationOperand => r"^=$",
            Self::ConditionalOperand => r"^(?:if|then|endif|else)$",
            Self::BooleanValue => r"^(?:true|false)$",
            Self::Loop => r"^(?:while|do|endwhile)$",
            Self::Parenthesis => r"^[()]$",
            Self::End => r"^;$",
            Self::Variable => r"^[a-zA-Z_][a-zA-Z0-9_]*$",
        }
    }

    fn compiled_patterns() -> &'static [Regex] {
        static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
        PATTERNS.get_or_init(|| {
            TokenType::ALL
                .iter()
                .map(|token_type| {
                    Regex::new(token_type.pattern_source()).expect("token pattern is valid")
                })
                .collect()
        })
    }

    /// Get the compiled pattern for this type
    pub fn pattern(self) -> &'static Regex {
        &Self::compiled_patterns()[self as usize]
    }

    /// Check a pre-split word against this type (whole-word match)
    pub fn matches_word(self, word: &str) -> bool {
        if self == Self::Variable && keywords::is_reserved_word(word) {
            return false;
        }
        self.pattern().is_match(word)
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single token: exact source word, type tag, optional lexeme tag, line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    value: String,
    kind: TokenType,
    lexeme: Option<Lexeme>,
    line: u32,
}

impl Token {
    /// Create a token, attaching the lexeme tag when the word's exact text
    /// is in the fixed spelling table
    pub fn new(value: impl Into<String>, kind: TokenType, line: u32) -> Self {
        let value = value.into();
        let lexeme = Lexeme::from_word(&value);
        Self {
            value,
            kind,
            lexeme,
            line,
        }
    }

    /// Exact source text of the token
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Coarse lexical category
    pub fn kind(&self) -> TokenType {
        self.kind
    }

    /// Fixed-spelling tag, absent for numbers and variables
    pub fn lexeme(&self) -> Option<Lexeme> {
        self.lexeme
    }

    /// 1-based source line
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Check the token's type tag
    pub fn is_kind(&self, kind: TokenType) -> bool {
        self.kind == kind
    }

    /// Check the token's lexeme tag
    pub fn has_lexeme(&self, lexeme: Lexeme) -> bool {
        self.lexeme == Some(lexeme)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
