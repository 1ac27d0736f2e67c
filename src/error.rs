use crate::token::Token;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MyLangError {
    #[error("FileNotFoundError: {0}")]
    FileNotFound(String),
    #[error("IOError: {0}")]
    IO(#[from] std::io::Error),
    #[error("ConfigError: {0}")]
    Config(#[from] serde_json::Error),
    #[error("{0}")]
    Lexing(#[from] LexingError),
}

/// Raised only by strict tokenizing; the lexer itself never fails.
#[derive(Debug)]
pub struct LexingError {
    pub(crate) path: PathBuf,
    pub(crate) message: String,
    pub(crate) line: usize,
    pub(crate) column: usize,
}

impl std::error::Error for LexingError {}

impl LexingError {
    pub fn new(path: PathBuf, message: String, line: usize, column: usize) -> Self {
        Self {
            path,
            message,
            line,
            column,
        }
    }

    pub fn from_token(path: PathBuf, token: &Token, message: String) -> Self {
        Self::new(path, message, token.line, token.column)
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }
}

impl fmt::Display for LexingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "LexingError: {}\n  --> {}:{}:{}",
            self.message,
            self.path.display(),
            self.line,
            self.column,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Kind;

    #[test]
    fn lexing_error_points_at_file_position() {
        let token = Token::new(Kind::Illegal, "@", 3, 7);
        let err = LexingError::from_token(
            PathBuf::from("main.my"),
            &token,
            "Unrecognized character @".to_string(),
        );
        assert_eq!(
            err.to_string(),
            "LexingError: Unrecognized character @\n  --> main.my:3:7"
        );
    }

    #[test]
    fn wrapped_lexing_error_keeps_its_message() {
        let err = MyLangError::from(LexingError::new(
            PathBuf::from("a.my"),
            "bad".to_string(),
            1,
            2,
        ));
        assert_eq!(err.to_string(), "LexingError: bad\n  --> a.my:1:2");
    }
}
