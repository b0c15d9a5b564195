//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for bigomap operations
#[derive(Debug, Error)]
pub enum Error {
    /// The target source file could not be opened or read
    #[error("failed to read {}: {source}", .path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The parser rejected the source text
    #[error("syntax error in {}: {message}", .path.display())]
    Syntax { path: PathBuf, message: String },
}

impl Error {
    pub fn syntax(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Syntax {
            path: path.into(),
            message: message.into(),
        }
    }
}
