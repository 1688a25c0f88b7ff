//! Grammar vocabulary and AST for the Imp language

pub mod ast;
pub mod keywords;

pub use ast::{Condition, Expression};
pub use keywords::Lexeme;
