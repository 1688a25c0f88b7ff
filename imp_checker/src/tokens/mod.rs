//! Token model and token stream for the Imp checker

pub mod token;
pub mod token_stream;

pub use token::{Token, TokenType};
pub use token_stream::TokenStream;
