//! AST node definitions

pub mod nodes;

pub use nodes::{Condition, Expression};
