use std::fmt::Display;

use thiserror::Error;

/// A lexical error tagged with the line the scanner had reached.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("[line {line}] Error: {internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    line: usize,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: usize) -> Self {
        Error {
            internal_error: error_impl,
            line,
        }
    }

    pub fn get_line(&self) -> usize {
        self.line
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The bare message, without the line prefix.
    pub fn message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
            ErrorImpl::UnknownCharacter { .. } => "UnknownCharacter",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("missing closing `\"` before end of input"))
            }
            ErrorImpl::UnterminatedComment => ErrorTip::None,
            ErrorImpl::UnknownCharacter { character } if character.is_control() => {
                ErrorTip::Suggestion(format!("unexpected character {:?}", character))
            }
            ErrorImpl::UnknownCharacter { character } => {
                ErrorTip::Suggestion(format!("unexpected character `{}`", character))
            }
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("Unterminated string")]
    UnterminatedString,
    #[error("Unterminated comment")]
    UnterminatedComment,
    #[error("Unknown character")]
    UnknownCharacter { character: char },
}

/// Receives lexical errors while a scan is running.
///
/// Implementations must not panic or otherwise unwind: the scanner keeps
/// going after every report.
pub trait Reporter {
    fn report(&mut self, error: Error);
}

/// Ordered accumulator of every error reported during one scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    errors: Vec<Error>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics { errors: vec![] }
    }

    pub fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Error> {
        self.errors.iter()
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

impl Reporter for Diagnostics {
    fn report(&mut self, error: Error) {
        self.errors.push(error);
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Error;
    type IntoIter = std::slice::Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
