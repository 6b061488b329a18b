use std::fmt;

use crate::parser::Rule;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure while reading a single date.
#[derive(Clone, Debug)]
pub enum Error {
    Parser(Box<pest::error::Error<Rule>>),
    InvalidDate(String),
}

impl From<pest::error::Error<Rule>> for Error {
    fn from(pest_err: pest::error::Error<Rule>) -> Self {
        Self::Parser(Box::new(pest_err))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parser(pest_err) => write!(f, "{pest_err}"),
            Self::InvalidDate(raw) => write!(f, "{raw} is not a day of the calendar"),
        }
    }
}

impl std::error::Error for Error {}

// ParseError

/// What went wrong on a rejected line.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum ErrorKind {
    TooFewTokens,
    TooManyTokens,
    InvalidOperation(String),
    InvalidStartDate(String),
    InvalidEndDate(String),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewTokens => write!(f, "Too few tokens"),
            Self::TooManyTokens => {
                write!(f, "Too many tokens, the weekday mask must be a single token")
            }
            Self::InvalidOperation(found) => {
                write!(f, "The second token must be 'include' or 'exclude'. Found '{found}'")
            }
            Self::InvalidStartDate(raw) => write!(f, "Invalid start date: {raw}"),
            Self::InvalidEndDate(raw) => write!(f, "Invalid end date: {raw}"),
        }
    }
}

/// A line of input that could not be turned into a rule.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct ParseError {
    /// The offending line, trimmed.
    pub line: String,
    pub kind: ErrorKind,
}

impl ParseError {
    pub fn new(line: impl Into<String>, kind: ErrorKind) -> Self {
        Self { line: line.into(), kind }
    }

    /// Human readable description of the error, without the line.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: `{}`", self.kind, self.line)
    }
}

impl std::error::Error for ParseError {}
