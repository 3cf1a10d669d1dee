//! Lexer module.
//!
//! The lexer implementation is split by token grammar:
//! - `core` - Lexer struct, dispatch loop and spans
//! - `comment` - whitespace and `#` comments
//! - `number` - integer, radix and real literals
//! - `string` - string and character literals
//! - `operator` - keywords and punctuators
//! - `identifier` - identifiers

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use core::Lexer;
