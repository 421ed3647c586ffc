//! Module: validate
//! Responsibility: syntactic key checks and ordered-run checks for consumers.
//! Does not own: key generation; nothing here allocates new keys.

use crate::{
    error::{KeyError, SequenceError},
    key::decode,
};
use fracdex_primitives::{ZERO_DIGIT, is_digit};

/// Returns `true` iff `key` is non-empty and every character is in the alphabet.
#[must_use]
pub fn is_valid(key: &str) -> bool {
    !key.is_empty() && key.chars().all(is_digit)
}

/// Like [`is_valid`], but says what is wrong.
pub fn check(key: &str) -> Result<(), KeyError> {
    decode(key).map(|_| ())
}

/// Returns `true` if a key can be generated strictly between `before` and `after`.
///
/// Requires `before < after` and that `after` is not `before` extended only by
/// zero digits.
#[must_use]
pub fn has_room(before: &str, after: &str) -> bool {
    before < after && before.trim_end_matches(ZERO_DIGIT) != after.trim_end_matches(ZERO_DIGIT)
}

/// Check that `keys` are all valid, strictly ascending, and leave room between
/// every pair of neighbors. Reports the first offending index.
pub fn check_sequence<K: AsRef<str>>(keys: &[K]) -> Result<(), SequenceError> {
    for (index, key) in keys.iter().enumerate() {
        let key = key.as_ref();
        check(key).map_err(|source| SequenceError { index, source })?;

        if let Some(prev) = index.checked_sub(1).map(|i| keys[i].as_ref())
            && !has_room(prev, key)
        {
            return Err(SequenceError {
                index,
                source: KeyError::invalid_order(prev, key),
            });
        }
    }

    Ok(())
}

///
/// TESTS
///
