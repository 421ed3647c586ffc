use crate::{between::key_between, error::KeyError, key::OrderKey};
use tracing::debug;

/// Generate `count` ascending keys between two optional bounds.
///
/// Each key is produced by the pairwise generator with the previous key as
/// its lower neighbor and `after` as its upper neighbor, so the whole run
/// stays inside `(before, after)`. Spacing follows the midpoint rule rather
/// than an even split of the gap.
pub fn generate_many(
    count: usize,
    before: Option<&str>,
    after: Option<&str>,
) -> Result<Vec<OrderKey>, KeyError> {
    let mut keys: Vec<OrderKey> = Vec::with_capacity(count);

    for _ in 0..count {
        let prev = keys.last().map(OrderKey::as_str).or(before);
        let key = key_between(prev, after)?;
        keys.push(key);
    }

    debug!(count, ?before, ?after, "generated bulk order keys");

    Ok(keys)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_ascending(keys: &[OrderKey]) {
        for pair in keys.windows(2) {
            assert!(pair[0] < pair[1], "{} should sort before {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn zero_count_is_empty() {
        assert!(generate_many(0, None, None).unwrap().is_empty());
        assert!(generate_many(0, Some("b"), Some("a")).unwrap().is_empty());
    }

    #[test]
    fn open_run_starts_at_the_initial_key() {
        let keys = generate_many(3, None, None).unwrap();

        assert_eq!(keys.len(), 3);
        assert_eq!(keys[0], "a0");
        assert_ascending(&keys);
    }

    #[test]
    fn closed_run_stays_inside_the_bounds() {
        let keys = generate_many(50, Some("a0"), Some("a1")).unwrap();

        assert_eq!(keys.len(), 50);
        assert_ascending(&keys);
        assert!(keys.iter().all(|k| k.as_str() > "a0" && k.as_str() < "a1"));
    }

    #[test]
    fn lower_open_run_stays_below_after() {
        let keys = generate_many(5, None, Some("b")).unwrap();

        assert_ascending(&keys);
        assert!(keys.iter().all(|k| k.as_str() < "b"));
    }

    #[test]
    fn upper_open_run_stays_above_before() {
        let keys = generate_many(5, Some("zz"), None).unwrap();

        assert_ascending(&keys);
        assert!(keys[0].as_str() > "zz");
    }

    #[test]
    fn bad_bounds_fail_like_between() {
        assert_eq!(
            generate_many(2, Some("b"), Some("a")),
            Err(KeyError::invalid_order("b", "a"))
        );
    }
}
