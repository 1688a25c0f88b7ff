//! Fixed-spelling lexeme vocabulary for the Imp language
//!
//! A lexeme tag is attached to a token only when the token's exact text is
//! drawn from this closed vocabulary. Numbers and variables never carry one.
use serde::{Deserialize, Serialize};

/// Every fixed spelling the language knows: keywords, operators, punctuation.
///
/// Note that `<>` is recognized by the comparison token pattern but has no
/// entry here, so a `<>` token carries no lexeme tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lexeme {
    // === PUNCTUATION ===
    OpenParenthesis,
    CloseParenthesis,
    Semicolon,

    // === KEYWORDS ===
    While,
    Do,
    Endwhile,
    If,
    Then,
    Else,
    Endif,

    // === OPERATORS ===
    Assign,
    Plus,
    Minus,
    Multiply,
    Divide,
    EqualTo,
    NotEqualTo,
    LessThan,
    LessEqualThan,
    GreaterThan,
    GreaterEqualThan,
}

impl Lexeme {
    /// Get the exact string representation as it appears in Imp source
    pub const fn as_str(self) -> &'static str {
        match self {
            // Punctuation
            Self::OpenParenthesis => "(",
            Self::CloseParenthesis => ")",
            Self::Semicolon => ";",

            // Keywords
            Self::While => "while",
            Self::Do => "do",
            Self::Endwhile => "endwhile",
            Self::If => "if",
            Self::Then => "then",
            Self::Else => "else",
            Self::Endif => "endif",

            // Operators
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::EqualTo => "==",
            Self::NotEqualTo => "!=",
            Self::LessThan => "<",
            Self::LessEqualThan => "<=",
            Self::GreaterThan => ">",
            Self::GreaterEqualThan => ">=",
        }
    }

    /// Look a word up in the spelling table with exact matching
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "(" => Some(Self::OpenParenthesis),
            ")" => Some(Self::CloseParenthesis),
            ";" => Some(Self::Semicolon),
            "while" => Some(Self::While),
            "do" => Some(Self::Do),
            "endwhile" => Some(Self::Endwhile),
            "if" => Some(Self::If),
            "then" => Some(Self::Then),
            "else" => Some(Self::Else),
            "endif" => Some(Self::Endif),
            "=" => Some(Self::Assign),
            "+" => Some(Self::Plus),
            "-" => Some(Self::Minus),
            "*" => Some(Self::Multiply),
            "/" => Some(Self::Divide),
            "==" => Some(Self::EqualTo),
            "!=" => Some(Self::NotEqualTo),
            "<" => Some(Self::LessThan),
            "<=" => Some(Self::LessEqualThan),
            ">" => Some(Self::GreaterThan),
            ">=" => Some(Self::GreaterEqualThan),
            _ => None,
        }
    }

    /// Check if this lexeme is an accepted condition comparator.
    ///
    /// `!=` is tokenizable but deliberately NOT accepted here; the condition
    /// grammar only admits `<`, `<=`, `>`, `>=` and `==`.
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            Self::LessThan
                | Self::LessEqualThan
                | Self::GreaterThan
                | Self::GreaterEqualThan
                | Self::EqualTo
        )
    }

    /// Check if this lexeme opens a statement, making it a safe point to
    /// resume parsing after a syntax error
    pub fn is_statement_boundary(self) -> bool {
        matches!(self, Self::If | Self::While)
    }

    /// Check if this lexeme is a `+`/`-` tier operator
    pub fn is_additive(self) -> bool {
        matches!(self, Self::Plus | Self::Minus)
    }

    /// Check if this lexeme is a `*`/`/` tier operator
    pub fn is_multiplicative(self) -> bool {
        matches!(self, Self::Multiply | Self::Divide)
    }
}

impl std::fmt::Display for Lexeme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Words a variable name is never allowed to shadow
pub const RESERVED_WORDS: [&str; 9] = [
    "if", "then", "endif", "else", "while", "do", "endwhile", "true", "false",
];

/// Check a word against the reserved vocabulary
pub fn is_reserved_word(word: &str) -> bool {
    RESERVED_WORDS.contains(&word)
}
