use derive_more::Display;
use fracdex_core::{ErrorClass, KeyError, SequenceError};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// Error
/// Public error type with a stable kind taxonomy.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<KeyError> for Error {
    fn from(err: KeyError) -> Self {
        let kind = match &err {
            KeyError::Empty | KeyError::InvalidDigit { .. } | KeyError::OutOfRange { .. } => {
                ErrorKind::InvalidKey
            }
            KeyError::Exhausted { .. } => ErrorKind::Exhausted,
            KeyError::IndexOutOfBounds { .. } => ErrorKind::InvalidIndex,
            KeyError::InvalidOrder { .. } => ErrorKind::InvalidOrder,
        };

        Self::new(kind, err.to_string())
    }
}

impl From<SequenceError> for Error {
    fn from(err: SequenceError) -> Self {
        let message = err.to_string();

        Self::new(Self::from(err.source).kind, message)
    }
}

///
/// ErrorKind
/// Public error kind, independent of the internal variant layout.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    #[display("exhausted")]
    Exhausted,

    #[display("invalid_index")]
    InvalidIndex,

    #[display("invalid_key")]
    InvalidKey,

    #[display("invalid_order")]
    InvalidOrder,
}

impl ErrorKind {
    /// Coarse class the kind falls under.
    #[must_use]
    pub const fn class(self) -> ErrorClass {
        match self {
            Self::Exhausted => ErrorClass::Unsupported,
            Self::InvalidIndex | Self::InvalidOrder => ErrorClass::InvariantViolation,
            Self::InvalidKey => ErrorClass::Corruption,
        }
    }
}

///
/// TESTS
///
