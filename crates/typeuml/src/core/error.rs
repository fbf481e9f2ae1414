//! Core error types for symbol graph loading
//!
//! Rendering itself is total and never fails. Errors only arise while a
//! symbol graph is read and validated before it reaches the pipeline.

use thiserror::Error;

/// Errors raised while loading a symbol graph
#[derive(Error, Debug)]
pub enum DiagramError {
    #[error("Parse error: {message} at line {line}, column {column}")]
    ParseError {
        message: String,
        line: usize,
        column: usize,
    },

    #[error("Invalid symbol: {message}")]
    InvalidSymbol { message: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl DiagramError {
    /// Create a new parse error
    pub fn parse_error(message: String, line: usize, column: usize) -> Self {
        Self::ParseError {
            message,
            line,
            column,
        }
    }

    /// Create a new invalid symbol error
    pub fn invalid_symbol(message: String) -> Self {
        Self::InvalidSymbol { message }
    }
}

impl From<serde_json::Error> for DiagramError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            return Self::IoError {
                source: std::io::Error::from(err),
            };
        }
        // serde_json appends its own position; keep only the message
        let mut message = err.to_string();
        if let Some(at) = message.rfind(" at line ") {
            message.truncate(at);
        }
        Self::parse_error(message, err.line(), err.column())
    }
}
