use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookError {
    #[error("Invalid name: {0:?} (must be non-empty and not only digits)")]
    InvalidName(String),

    #[error("Invalid {field}: {value:?}")]
    InvalidFormat { field: &'static str, value: String },

    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    #[error("Phone not found: {0}")]
    PhoneNotFound(String),

    #[error("No address book at {}", .0.display())]
    SnapshotNotFound(PathBuf),

    #[error("Corrupt data: {0}")]
    CorruptData(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification callers use to decide how to react to a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidFormat,
    NotFound,
    CorruptData,
    Io,
}

impl BookError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BookError::InvalidName(_) | BookError::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            BookError::ContactNotFound(_)
            | BookError::PhoneNotFound(_)
            | BookError::SnapshotNotFound(_) => ErrorKind::NotFound,
            BookError::CorruptData(_) => ErrorKind::CorruptData,
            BookError::Io(_) => ErrorKind::Io,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    /// Serializing outgoing data failed. Reported as I/O: nothing stored was read or damaged.
    pub(crate) fn encode(err: serde_json::Error) -> Self {
        BookError::Io(std::io::Error::other(err))
    }
}

impl From<serde_json::Error> for BookError {
    fn from(err: serde_json::Error) -> Self {
        BookError::CorruptData(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BookError>;
