//! Module: midpoint
//! Responsibility: digit-level midpoint between two keys read as base-62 fractions.
//! Does not own: input validation or neighbor-order policy (see `between`).

use fracdex_primitives::{BASE, MAX_VALUE, MID_VALUE, ZERO_VALUE};

/// Digits strictly between `low` and `high`, shortest first.
///
/// Both sides are read as fractions `0.d1d2…`, the shorter one padded with
/// zero digits. Returns `None` when
/// `low` is not strictly below `high` as a fraction, which includes pairs that
/// only differ by trailing zero digits (`"a"` and `"a00"`).
///
/// The result never ends with a zero digit.
pub(crate) fn midpoint(low: &[u8], high: &[u8]) -> Option<Vec<u8>> {
    let width = low.len().max(high.len());
    let mut out = Vec::with_capacity(width + 1);

    for i in 0..width {
        let lo = low.get(i).copied().unwrap_or(ZERO_VALUE);
        let hi = high.get(i).copied().unwrap_or(ZERO_VALUE);

        if lo == hi {
            out.push(lo);
            continue;
        }
        if lo > hi {
            return None;
        }

        if hi - lo > 1 {
            out.push(lo + (hi - lo) / 2);
        } else {
            // adjacent digits: keep `lo` here, then grow past the rest of `low`
            out.push(lo);
            out.extend(above(low.get(i + 1..).unwrap_or_default()));
        }

        return Some(out);
    }

    None
}

/// Shortest digits strictly above `suffix` with no upper bound.
///
/// Stops at the first digit below the alphabet maximum; an all-max (or empty)
/// suffix grows by the mid digit.
fn above(suffix: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(suffix.len() + 1);

    for &digit in suffix {
        if digit < MAX_VALUE {
            out.push(digit + (BASE - digit) / 2);
            return out;
        }
        out.push(digit);
    }
    out.push(MID_VALUE);

    out
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::{decode, encode};

    fn digits(key: &str) -> Vec<u8> {
        if key.is_empty() {
            Vec::new()
        } else {
            decode(key).unwrap()
        }
    }

    fn mid(low: &str, high: &str) -> Option<String> {
        midpoint(&digits(low), &digits(high)).map(|d| encode(&d).unwrap().into_string())
    }

    fn above_of(suffix: &str) -> String {
        encode(&above(&digits(suffix))).unwrap().into_string()
    }

    #[test]
    fn wide_gap_takes_the_middle_digit() {
        // '0' = 0, 'z' = 61
        assert_eq!(mid("0", "z").as_deref(), Some("U"));
        assert_eq!(mid("a", "c").as_deref(), Some("b"));
    }

    #[test]
    fn shared_prefix_is_kept() {
        assert_eq!(mid("ab0", "ab4").as_deref(), Some("ab2"));
    }

    #[test]
    fn adjacent_digits_extend_with_the_mid_digit() {
        assert_eq!(mid("a0", "a1").as_deref(), Some("a0V"));
        assert_eq!(mid("a", "b").as_deref(), Some("aV"));
    }

    #[test]
    fn adjacent_digits_grow_past_the_low_suffix() {
        // 'Z' and 'a' are adjacent; the low suffix "z" is already maximal
        assert_eq!(mid("Zz", "a0").as_deref(), Some("ZzV"));
        assert_eq!(mid("Z5", "a").as_deref(), Some("ZX"));
    }

    #[test]
    fn empty_low_reads_as_zero() {
        assert_eq!(mid("", "1").as_deref(), Some("0V"));
        assert_eq!(mid("", "z").as_deref(), Some("U"));
    }

    #[test]
    fn above_stops_at_the_first_non_max_digit() {
        assert_eq!(above_of(""), "V");
        assert_eq!(above_of("a0"), "n");
        assert_eq!(above_of("zz"), "zzV");
        assert_eq!(above_of("zy5"), "zz");
    }

    #[test]
    fn equal_fractions_have_no_midpoint() {
        assert_eq!(mid("a", "a"), None);
        assert_eq!(mid("a", "a00"), None);
        assert_eq!(mid("", "000"), None);
    }

    #[test]
    fn reversed_bounds_have_no_midpoint() {
        assert_eq!(mid("b", "a"), None);
        assert_eq!(mid("a1", "a0z"), None);
    }

    #[test]
    fn results_never_end_in_a_zero_digit() {
        for (low, high) in [("a0", "a1"), ("", "1"), ("0", "2"), ("Zz", "a0")] {
            let key = mid(low, high).unwrap();
            assert!(!key.ends_with('0'), "{key} ends with a zero digit");
        }
    }
}
