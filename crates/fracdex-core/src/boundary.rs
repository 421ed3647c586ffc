//! Module: boundary
//! Responsibility: keys beyond the open ends of a list (no neighbor on one side).
//! Does not own: two-sided midpoints (see `midpoint`).

use crate::{
    error::KeyError,
    key::{OrderKey, decode, encode},
};
use fracdex_primitives::{MAX_VALUE, MID_VALUE, ZERO_VALUE};

/// A key strictly less than `after`, for inserting at the very start of a list.
///
/// Fails with [`KeyError::Exhausted`] when `after` is made only of zero digits:
/// every shorter all-zero string reads as the same fraction, so no key below
/// it keeps room for later inserts.
pub fn key_before(after: &str) -> Result<OrderKey, KeyError> {
    let digits = decode(after)?;
    let out = before_digits(&digits).ok_or_else(|| KeyError::Exhausted {
        key: after.to_string(),
    })?;

    encode(&out)
}

/// A key strictly greater than `before`, for appending at the end of a list.
pub fn key_after(before: &str) -> Result<OrderKey, KeyError> {
    let digits = decode(before)?;

    encode(&after_digits(&digits))
}

fn before_digits(after: &[u8]) -> Option<Vec<u8>> {
    let last = after.iter().rposition(|&digit| digit > ZERO_VALUE)?;

    let mut out = after[..=last].to_vec();
    out[last] -= 1;

    // trailing zeros were dropped, or the decrement hit the bottom key:
    // leave room below by growing one mid digit
    let trimmed = last + 1 < after.len();
    if trimmed || out.iter().all(|&digit| digit == ZERO_VALUE) {
        out.push(MID_VALUE);
    }

    Some(out)
}

fn after_digits(before: &[u8]) -> Vec<u8> {
    match before.iter().rposition(|&digit| digit < MAX_VALUE) {
        Some(last) => {
            let mut out = before[..=last].to_vec();
            out[last] += 1;
            out
        }
        None => {
            let mut out = Vec::with_capacity(before.len() + 1);
            out.extend_from_slice(before);
            out.push(MID_VALUE);
            out
        }
    }
}

///
/// TESTS
///
