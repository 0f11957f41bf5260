//! Crate error type
//!
//! Only the edges (config and content loading) can fail. The wheel math and
//! the spin controller are infallible for well-formed input.

use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// Reading a config or content file failed
    Io(std::io::Error),
    /// JSON was malformed or didn't match the expected shape
    Json(serde_json::Error),
    /// Config parsed but violates a wheel constraint
    InvalidConfig(String),
    /// A banger catalog needs at least one entry
    EmptyCatalog,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Json(e) => write!(f, "json error: {}", e),
            Error::InvalidConfig(msg) => write!(f, "invalid wheel config: {}", msg),
            Error::EmptyCatalog => write!(f, "banger catalog is empty"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}
