//! Module: placement
//! Responsibility: translate list positions into neighbor pairs for `key_between`.
//! Does not own: the list itself; callers pass the ascending keys they hold.

use crate::{between::key_between, error::KeyError, key::OrderKey};

/// Key for a new element inserted at slot `index` of the ascending `keys`.
///
/// Slot `0` is the front, slot `keys.len()` is the back.
pub fn insert_at<K: AsRef<str>>(keys: &[K], index: usize) -> Result<OrderKey, KeyError> {
    if index > keys.len() {
        return Err(KeyError::IndexOutOfBounds {
            index,
            len: keys.len(),
        });
    }

    let before = index.checked_sub(1).map(|i| keys[i].as_ref());
    let after = keys.get(index).map(AsRef::as_ref);

    key_between(before, after)
}

/// Key for a new element placed directly after the element at `anchor`;
/// `None` places it at the front.
pub fn insert_after<K: AsRef<str>>(keys: &[K], anchor: Option<usize>) -> Result<OrderKey, KeyError> {
    match anchor {
        None => insert_at(keys, 0),
        Some(anchor) if anchor < keys.len() => insert_at(keys, anchor + 1),
        Some(anchor) => Err(KeyError::IndexOutOfBounds {
            index: anchor,
            len: keys.len(),
        }),
    }
}

/// New key for the element at `from` so that it ends up at position `to`.
///
/// `to` is the element's index once the move is done, as with
/// `Vec::remove(from)` followed by `Vec::insert(to, ..)`. The moved element
/// never counts as its own neighbor; its old key is simply discarded.
pub fn move_to<K: AsRef<str>>(keys: &[K], from: usize, to: usize) -> Result<OrderKey, KeyError> {
    let len = keys.len();
    if from >= len {
        return Err(KeyError::IndexOutOfBounds { index: from, len });
    }
    if to >= len {
        return Err(KeyError::IndexOutOfBounds { index: to, len });
    }

    // index into the list with `from` removed
    let remaining = |i: usize| {
        let original = if i < from { i } else { i + 1 };
        keys.get(original).map(AsRef::as_ref)
    };

    let before = to.checked_sub(1).and_then(remaining);
    let after = remaining(to);

    key_between(before, after)
}

///
/// TESTS
///
