//! Module: tag
//! Responsibility: per-actor suffixes that keep concurrent inserts into one gap distinct.
//! Does not own: arbitration of true collisions; that stays with the store.

use crate::{between::key_between, error::KeyError, key::OrderKey};
use fracdex_primitives::ALPHABET;
use xxhash_rust::xxh3::xxh3_64;

///
/// ActorTag
///
/// Short base-62 suffix derived from an actor identifier.
/// Digits are drawn from `1..=61`, so a tagged key never ends in a zero digit
/// and always keeps room on both sides.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ActorTag(String);

impl ActorTag {
    pub const DEFAULT_LEN: usize = 3;
    pub const MAX_LEN: usize = 8;

    /// Derive a tag of `len` digits (clamped to `1..=MAX_LEN`) from `actor`.
    #[must_use]
    pub fn derive(actor: impl AsRef<[u8]>, len: usize) -> Self {
        let len = len.clamp(1, Self::MAX_LEN);
        let mut hash = xxh3_64(actor.as_ref());
        let mut tag = String::with_capacity(len);

        // 61^8 < 2^64, so eight digits never run out of entropy
        for _ in 0..len {
            #[expect(clippy::cast_possible_truncation)]
            let digit = 1 + (hash % 61) as usize;
            tag.push(char::from(ALPHABET[digit]));
            hash /= 61;
        }

        Self(tag)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Append this tag to a freshly generated key.
    ///
    /// The result still sorts strictly between the neighbors the key was
    /// generated from: generated keys sit strictly below their upper neighbor
    /// at some digit, so any suffix keeps them there.
    #[must_use]
    pub fn apply(&self, key: &OrderKey) -> OrderKey {
        let mut tagged = String::with_capacity(key.len() + self.0.len());
        tagged.push_str(key);
        tagged.push_str(&self.0);

        OrderKey::from_trusted(tagged)
    }
}

///
/// TaggedAllocator
///
/// Pairwise generator that tags every key with one actor's suffix.
///

#[derive(Clone, Debug)]
pub struct TaggedAllocator {
    tag: ActorTag,
}

impl TaggedAllocator {
    #[must_use]
    pub const fn new(tag: ActorTag) -> Self {
        Self { tag }
    }

    #[must_use]
    pub fn for_actor(actor: impl AsRef<[u8]>) -> Self {
        Self::new(ActorTag::derive(actor, ActorTag::DEFAULT_LEN))
    }

    #[must_use]
    pub const fn tag(&self) -> &ActorTag {
        &self.tag
    }

    pub fn between(&self, before: Option<&str>, after: Option<&str>) -> Result<OrderKey, KeyError> {
        key_between(before, after).map(|key| self.tag.apply(&key))
    }

    /// Tagged counterpart of [`generate_many`](crate::bulk::generate_many).
    pub fn generate_many(
        &self,
        count: usize,
        before: Option<&str>,
        after: Option<&str>,
    ) -> Result<Vec<OrderKey>, KeyError> {
        let mut keys: Vec<OrderKey> = Vec::with_capacity(count);

        for _ in 0..count {
            let prev = keys.last().map(OrderKey::as_str).or(before);
            let key = self.between(prev, after)?;
            keys.push(key);
        }

        Ok(keys)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::is_valid;

    #[test]
    fn derive_is_stable_for_one_actor() {
        let a = ActorTag::derive("laptop-7", 3);
        let b = ActorTag::derive("laptop-7", 3);

        assert_eq!(a, b);
        assert_eq!(a.as_str().len(), 3);
    }

    #[test]
    fn tag_digits_are_valid_and_never_zero() {
        for actor in ["a", "b", "runtime-agent", "", "0"] {
            let tag = ActorTag::derive(actor, ActorTag::MAX_LEN);

            assert!(is_valid(tag.as_str()));
            assert!(!tag.as_str().contains('0'), "{} contains a zero digit", tag.as_str());
        }
    }

    #[test]
    fn tag_length_is_clamped() {
        assert_eq!(ActorTag::derive("x", 0).as_str().len(), 1);
        assert_eq!(ActorTag::derive("x", 99).as_str().len(), ActorTag::MAX_LEN);
    }

    #[test]
    fn different_actors_split_a_shared_gap() {
        let left = TaggedAllocator::for_actor("alice");
        let right = TaggedAllocator::for_actor("bob");
        assert_ne!(left.tag(), right.tag());

        let a = left.between(Some("a0"), Some("a1")).unwrap();
        let b = right.between(Some("a0"), Some("a1")).unwrap();

        assert_ne!(a, b);
        for key in [&a, &b] {
            assert!(key.as_str() > "a0" && key.as_str() < "a1", "{key} left the gap");
        }
    }

    #[test]
    fn tagged_runs_stay_ascending_and_bounded() {
        let alloc = TaggedAllocator::for_actor("runtime-agent");
        let keys = alloc.generate_many(20, Some("a0"), Some("a1")).unwrap();

        for pair in keys.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert!(keys.iter().all(|k| k.as_str() > "a0" && k.as_str() < "a1"));
    }

    #[test]
    fn tagged_first_key_extends_the_initial_key() {
        let alloc = TaggedAllocator::for_actor("alice");
        let key = alloc.between(None, None).unwrap();

        assert!(key.starts_with("a0"));
        assert_eq!(key.len(), 2 + ActorTag::DEFAULT_LEN);
    }
}
