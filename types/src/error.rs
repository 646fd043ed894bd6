use serde::{Deserialize, Serialize};

use crate::EntityKind;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// The operation referenced an id that is not in the collection.
    NotFound,
    /// The record is not in a state that allows the operation.
    Conflict,
    /// The input failed validation.
    Invalid,
    Internal,
}

/// A serializable error for client rendering.
///
/// When `RUST_BACKTRACE=1` is set, internal errors include the full backtrace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
}

impl Error {
    pub fn not_found(entity: EntityKind) -> Self {
        Self {
            kind: ErrorKind::NotFound,
            message: format!("{entity} not found"),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Conflict,
            message: message.into(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Invalid,
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

impl From<anyhow::Error> for Error {
    fn from(report: anyhow::Error) -> Self {
        // The Debug representation includes the error chain and backtrace
        Self {
            kind: ErrorKind::Internal,
            message: format!("{:?}", report),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        anyhow::Error::from(error).into()
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self {
            kind: ErrorKind::Internal,
            message: s.to_string(),
        }
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self {
            kind: ErrorKind::Internal,
            message: s,
        }
    }
}

/// Build an internal [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from($crate::internal_anyhow_dont_use!($($arg)*))
    };
}
