//! Crate-wide error hierarchy: hand-written `Display`/`std::error::Error`
//! impls rather than an error macro crate.

use std::{error::Error, fmt};

use crate::token::SourceLocation;

/// A fatal lexical error: unterminated string/char literal, unclosed block
/// comment, or file-open failure. Aborts compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub message: String,
    pub location: Option<SourceLocation>,
}

impl LexError {
    pub fn new(message: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            message: message.into(),
            location: Some(location),
        }
    }

    pub fn without_location(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: None,
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(loc) => write!(f, "{loc}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl Error for LexError {}

/// A parse error: an unexpected token where a specific kind was required.
/// Recorded on the parser rather than raised; the production that hit it
/// continues best-effort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub location: Option<SourceLocation>,
}

impl ParseError {
    pub fn new(message: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            message: message.into(),
            location: Some(location),
        }
    }

    pub fn eof(expected: &str) -> Self {
        Self {
            message: format!("hit EOF while expecting {expected}"),
            location: None,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(loc) => write!(f, "{loc}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl Error for ParseError {}

/// Top-level error the CLI driver matches on to pick an exit code.
#[derive(Debug)]
pub enum CompileError {
    Io(std::io::Error),
    Lex(LexError),
    Parse(ParseError),
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::Io(e) => write!(f, "could not read source file: {e}"),
            CompileError::Lex(e) => write!(f, "lexical error: {e}"),
            CompileError::Parse(e) => write!(f, "parse error: {e}"),
        }
    }
}

impl Error for CompileError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CompileError::Io(e) => Some(e),
            CompileError::Lex(e) => Some(e),
            CompileError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for CompileError {
    fn from(value: std::io::Error) -> Self {
        CompileError::Io(value)
    }
}

impl From<LexError> for CompileError {
    fn from(value: LexError) -> Self {
        CompileError::Lex(value)
    }
}

impl From<ParseError> for CompileError {
    fn from(value: ParseError) -> Self {
        CompileError::Parse(value)
    }
}
