//! Parser module for command lines
//!
//! Turns one raw line into the command word and its arguments.

pub mod lexer;

pub use lexer::{split_words, Lexer, ParseError};
