use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or writing a map file
#[derive(Error, Debug)]
pub enum MapError {
    /// No map file at the given path
    #[error("no map file at {}", path.display())]
    NotFound { path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Malformed map contents; `line` is 1-based
    #[error("line {line}: {kind}")]
    Parse { line: usize, kind: ParseErrorKind },
}

impl MapError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, MapError::NotFound { .. })
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    #[error("missing square count")]
    MissingCount,

    #[error("invalid square count {0:?}")]
    InvalidCount(String),

    #[error("expected {expected} squares, found {found}")]
    UnexpectedEof { expected: usize, found: usize },

    #[error("expected 8 fields, found {0}")]
    FieldCount(usize),

    #[error("invalid number {0:?}")]
    InvalidFloat(String),

    #[error("non-finite number {0:?}")]
    NonFiniteFloat(String),

    #[error("size must be positive, got {0:?}")]
    NonPositiveSize(String),

    #[error("color channel {0:?} is not an integer in 0..=255")]
    InvalidChannel(String),
}

/// Errors raised while loading the configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, MapError>;
