use crate::{
    boundary::{key_after, key_before},
    error::KeyError,
    key::{OrderKey, decode, encode},
    midpoint::midpoint,
};
use tracing::{debug, trace};

/// The canonical key for the first element ever inserted.
#[must_use]
pub fn initial() -> OrderKey {
    OrderKey::initial()
}

/// Generate a key strictly between two optional neighbors.
///
/// - `(None, None)` → the canonical initial key
/// - `(None, Some(after))` → a key before `after`
/// - `(Some(before), None)` → a key after `before`
/// - `(Some(before), Some(after))` → a key strictly between them
///
/// Deterministic: callers holding the same neighbors get the same key.
/// Uniqueness across concurrent callers is the caller's job (see
/// [`ActorTag`](crate::tag::ActorTag)).
pub fn key_between(before: Option<&str>, after: Option<&str>) -> Result<OrderKey, KeyError> {
    let key = match (before, after) {
        (None, None) => OrderKey::initial(),
        (None, Some(after)) => key_before(after).inspect_err(|err| {
            debug!(after, error = %err, "no order key before neighbor");
        })?,
        (Some(before), None) => key_after(before)?,
        (Some(before), Some(after)) => between_pair(before, after)?,
    };

    trace!(?before, ?after, key = %key, "generated order key");

    Ok(key)
}

// Both neighbors present: validate, reject bad order, then take the midpoint.
fn between_pair(before: &str, after: &str) -> Result<OrderKey, KeyError> {
    let low = decode(before)?;
    let high = decode(after)?;

    // covers equal keys and `after` being a strict prefix of `before`
    if before >= after {
        debug!(before, after, "rejected out-of-order neighbors");
        return Err(KeyError::invalid_order(before, after));
    }

    // `before < after` yet no midpoint: `after` is `before` plus zero digits
    let Some(out) = midpoint(&low, &high) else {
        debug!(before, after, "rejected neighbors with no room between them");
        return Err(KeyError::invalid_order(before, after));
    };

    encode(&out)
}

///
/// TESTS
///
