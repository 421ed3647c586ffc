use crate::{INITIAL_KEY, boundary, error::KeyError, validate};
use derive_more::{Deref, Display};
use fracdex_primitives::{digit_value, value_to_digit};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{cmp::Ordering, str::FromStr};

///
/// OrderKey
///
/// Validated fractional-index key.
/// Non-empty and drawn solely from the 62-symbol alphabet, so the derived
/// `Ord` (plain string order) is also the list order.
///

#[derive(Clone, Debug, Deref, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[deref(forward)]
#[repr(transparent)]
pub struct OrderKey(String);

impl OrderKey {
    /// Validate and wrap a key.
    pub fn new(key: impl Into<String>) -> Result<Self, KeyError> {
        let key = key.into();
        validate::check(&key)?;

        Ok(Self(key))
    }

    /// Canonical key for the first element of an empty list.
    #[must_use]
    pub fn initial() -> Self {
        Self(INITIAL_KEY.to_string())
    }

    // Caller has already produced the key from alphabet digits.
    pub(crate) const fn from_trusted(key: String) -> Self {
        Self(key)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns `true` for keys made only of zero-symbols; nothing sorts below them.
    #[must_use]
    pub fn is_bottom(&self) -> bool {
        self.0.bytes().all(|byte| byte == b'0')
    }

    /// A key strictly less than this one.
    pub fn before(&self) -> Result<Self, KeyError> {
        boundary::key_before(&self.0)
    }

    /// A key strictly greater than this one.
    pub fn after(&self) -> Result<Self, KeyError> {
        boundary::key_after(&self.0)
    }
}

impl AsRef<str> for OrderKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<OrderKey> for String {
    fn from(key: OrderKey) -> Self {
        key.0
    }
}

impl FromStr for OrderKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl PartialEq<str> for OrderKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for OrderKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl TryFrom<&str> for OrderKey {
    type Error = KeyError;

    fn try_from(key: &str) -> Result<Self, Self::Error> {
        Self::new(key)
    }
}

impl TryFrom<String> for OrderKey {
    type Error = KeyError;

    fn try_from(key: String) -> Result<Self, Self::Error> {
        Self::new(key)
    }
}

// Keys travel as plain strings; deserialization re-validates them.
impl Serialize for OrderKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for OrderKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;

        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

/// Compare two keys in list order.
#[must_use]
pub fn compare(a: &str, b: &str) -> Ordering {
    a.cmp(b)
}

// Decode a key into digit values, reporting the first foreign character.
pub(crate) fn decode(key: &str) -> Result<Vec<u8>, KeyError> {
    if key.is_empty() {
        return Err(KeyError::Empty);
    }

    key.chars()
        .enumerate()
        .map(|(position, ch)| digit_value(ch).map_err(|err| KeyError::digit(err, position)))
        .collect()
}

// Encode digit values back into a key.
pub(crate) fn encode(digits: &[u8]) -> Result<OrderKey, KeyError> {
    if digits.is_empty() {
        return Err(KeyError::Empty);
    }

    let key = digits
        .iter()
        .enumerate()
        .map(|(position, &value)| {
            value_to_digit(value).map_err(|err| KeyError::digit(err, position))
        })
        .collect::<Result<String, _>>()?;

    Ok(OrderKey::from_trusted(key))
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_empty_and_foreign_keys() {
        assert_eq!(OrderKey::new(""), Err(KeyError::Empty));
        assert_eq!(
            OrderKey::new("a0-1"),
            Err(KeyError::InvalidDigit { ch: '-', position: 2 })
        );
        assert!(OrderKey::new("a0").is_ok());
    }

    #[test]
    fn compare_is_plain_string_order() {
        assert_eq!(compare("a0", "a1"), Ordering::Less);
        assert_eq!(compare("a1", "a1"), Ordering::Equal);
        assert_eq!(compare("b", "a0V"), Ordering::Greater);
        assert_eq!(compare("Z", "a"), Ordering::Less);
        assert_eq!(compare("9", "A"), Ordering::Less);
        assert_eq!(compare("a", "a0"), Ordering::Less);
    }

    #[test]
    fn ord_matches_compare() {
        let lo = OrderKey::new("ZzV").unwrap();
        let hi = OrderKey::new("a0").unwrap();

        assert!(lo < hi);
        assert_eq!(lo.cmp(&hi), compare(&lo, &hi));
    }

    #[test]
    fn decode_and_encode_are_inverse() {
        let digits = decode("a0Vz").unwrap();
        assert_eq!(digits, vec![36, 0, 31, 61]);
        assert_eq!(encode(&digits).unwrap(), "a0Vz");
    }

    #[test]
    fn encode_rejects_values_past_the_alphabet() {
        assert_eq!(encode(&[1, 62]), Err(KeyError::OutOfRange { value: 62 }));
        assert_eq!(encode(&[]), Err(KeyError::Empty));
    }

    #[test]
    fn bottom_keys_are_all_zero() {
        assert!(OrderKey::new("000").unwrap().is_bottom());
        assert!(!OrderKey::new("001").unwrap().is_bottom());
    }

    #[test]
    fn serde_round_trips_as_a_plain_string() {
        let key = OrderKey::new("a0V").unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"a0V\"");

        let back: OrderKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }

    #[test]
    fn deserialize_rejects_invalid_keys() {
        let err = serde_json::from_str::<OrderKey>("\"a 0\"").unwrap_err();
        assert!(err.to_string().contains("invalid order-key digit"));

        assert!(serde_json::from_str::<OrderKey>("\"\"").is_err());
    }
}
