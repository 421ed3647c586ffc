use fracdex_primitives::DigitError;
use std::fmt;
use thiserror::Error as ThisError;

///
/// KeyError
///
/// Failures raised while decoding, ordering, or generating order keys.
/// All of them are local and synchronous; none is transient.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum KeyError {
    #[error("order key is empty")]
    Empty,

    #[error("no order key sorts below the all-zero key '{key}'")]
    Exhausted { key: String },

    #[error("slot {index} is outside a list of {len} keys")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("invalid order-key digit {ch:?} at position {position}")]
    InvalidDigit { ch: char, position: usize },

    #[error("invalid neighbor order: '{before}' must sort strictly before '{after}' with room between them")]
    InvalidOrder { before: String, after: String },

    #[error("digit value {value} is outside [0, 62)")]
    OutOfRange { value: u8 },
}

impl KeyError {
    /// Attach the character position to a codec failure.
    pub(crate) const fn digit(err: DigitError, position: usize) -> Self {
        match err {
            DigitError::InvalidDigit { ch } => Self::InvalidDigit { ch, position },
            DigitError::OutOfRange { value } => Self::OutOfRange { value },
        }
    }

    pub(crate) fn invalid_order(before: &str, after: &str) -> Self {
        Self::InvalidOrder {
            before: before.to_string(),
            after: after.to_string(),
        }
    }

    /// Classify this error for callers that fold allocator failures into
    /// their own taxonomy.
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Empty | Self::InvalidDigit { .. } => ErrorClass::Corruption,
            Self::Exhausted { .. } => ErrorClass::Unsupported,
            Self::IndexOutOfBounds { .. } | Self::InvalidOrder { .. } => {
                ErrorClass::InvariantViolation
            }
            Self::OutOfRange { .. } => ErrorClass::Internal,
        }
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}: {self}", self.class())
    }
}

///
/// SequenceError
///
/// First violation found while checking an ordered run of keys.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("order key #{index}: {source}")]
pub struct SequenceError {
    pub index: usize,
    pub source: KeyError,
}

///
/// ErrorClass
/// Coarse classification of allocator failures.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    Corruption,
    Internal,
    InvariantViolation,
    Unsupported,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Corruption => "corruption",
            Self::Internal => "internal",
            Self::InvariantViolation => "invariant_violation",
            Self::Unsupported => "unsupported",
        };
        write!(f, "{label}")
    }
}

///
/// TESTS
///
