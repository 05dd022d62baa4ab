//! Persistence error types.
//!
//! Propagated with `?` inside this crate and absorbed at the public
//! best-effort boundary, where they are logged instead of returned.

use std::fmt;

#[derive(Debug)]
pub enum PersistError {
    /// Reading or writing the backing file failed.
    Io(std::io::Error),
    /// The file exists but does not parse as the expected JSON shape.
    Parse(serde_json::Error),
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistError::Io(err) => write!(f, "persistence io error: {err}"),
            PersistError::Parse(err) => write!(f, "persistence parse error: {err}"),
        }
    }
}

impl std::error::Error for PersistError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PersistError::Io(err) => Some(err),
            PersistError::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for PersistError {
    fn from(err: std::io::Error) -> Self {
        PersistError::Io(err)
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(err: serde_json::Error) -> Self {
        PersistError::Parse(err)
    }
}
