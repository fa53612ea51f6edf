//! Lexer for command lines
//!
//! Splits one input line into words the way a POSIX shell does for simple
//! commands:
//! - Whitespace separates words
//! - Single quotes keep everything literally
//! - Double quotes group words; backslash escapes `"`, `\`, `$` and `` ` ``
//! - A backslash outside quotes escapes the next character

use thiserror::Error;

/// Malformed command line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("no closing quotation for {quote} opened at column {column}")]
    UnterminatedQuote { quote: char, column: usize },

    #[error("no escaped character after trailing backslash")]
    TrailingEscape,
}

pub struct Lexer {
    input: Vec<char>,
    pos: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self { input: input.chars().collect(), pos: 0 }
    }

    fn current(&self) -> Option<char> {
        self.input.get(self.pos).copied()
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.input.get(self.pos + offset).copied()
    }

    pub fn tokenize(mut self) -> Result<Vec<String>, ParseError> {
        let mut words = Vec::new();
        loop {
            while matches!(self.current(), Some(c) if c.is_whitespace()) {
                self.pos += 1;
            }
            if self.current().is_none() {
                break;
            }
            words.push(self.read_word()?);
        }
        Ok(words)
    }

    fn read_word(&mut self) -> Result<String, ParseError> {
        let mut value = String::new();
        while let Some(c) = self.current() {
            match c {
                c if c.is_whitespace() => break,
                '\\' => {
                    let escaped = self.peek(1).ok_or(ParseError::TrailingEscape)?;
                    value.push(escaped);
                    self.pos += 2;
                }
                '\'' => self.read_single_quoted(&mut value)?,
                '"' => self.read_double_quoted(&mut value)?,
                _ => {
                    value.push(c);
                    self.pos += 1;
                }
            }
        }
        Ok(value)
    }

    fn read_single_quoted(&mut self, value: &mut String) -> Result<(), ParseError> {
        let column = self.pos + 1;
        self.pos += 1;
        loop {
            match self.current() {
                Some('\'') => {
                    self.pos += 1;
                    return Ok(());
                }
                Some(c) => {
                    value.push(c);
                    self.pos += 1;
                }
                None => return Err(ParseError::UnterminatedQuote { quote: '\'', column }),
            }
        }
    }

    fn read_double_quoted(&mut self, value: &mut String) -> Result<(), ParseError> {
        let column = self.pos + 1;
        self.pos += 1;
        loop {
            match self.current() {
                Some('"') => {
                    self.pos += 1;
                    return Ok(());
                }
                Some('\\') => match self.peek(1) {
                    Some(next @ ('"' | '\\' | '$' | '`')) => {
                        value.push(next);
                        self.pos += 2;
                    }
                    Some(next) => {
                        value.push('\\');
                        value.push(next);
                        self.pos += 2;
                    }
                    None => return Err(ParseError::UnterminatedQuote { quote: '"', column }),
                },
                Some(c) => {
                    value.push(c);
                    self.pos += 1;
                }
                None => return Err(ParseError::UnterminatedQuote { quote: '"', column }),
            }
        }
    }
}

/// Split a line into words.
pub fn split_words(line: &str) -> Result<Vec<String>, ParseError> {
    Lexer::new(line).tokenize()
}
