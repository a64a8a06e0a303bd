//! Error type shared by every stage of the index pipeline.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("wordlist fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("wordlist fetch from {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("invalid wordlist URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("page delimiter must not be empty")]
    EmptyDelimiter,

    #[error("common-word list from {0} is empty")]
    EmptyWordlist(String),
}

impl IndexError {
    /// Wrap an IO error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IndexError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, IndexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IndexError::HttpStatus {
            url: "https://example.com/words.txt".to_string(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "wordlist fetch from https://example.com/words.txt returned HTTP 404"
        );

        let err = IndexError::io(
            "missing.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert!(err.to_string().contains("missing.txt"));
    }
}
