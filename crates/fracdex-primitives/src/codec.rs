use crate::{ALPHABET, BASE};
use thiserror::Error as ThisError;

///
/// DigitError
///
/// Failures of the character <-> digit-value mapping.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum DigitError {
    #[error("invalid order-key digit {ch:?}")]
    InvalidDigit { ch: char },

    #[error("digit value {value} is outside [0, 62)")]
    OutOfRange { value: u8 },
}

/// Decode one alphabet byte into its digit value.
#[must_use]
pub const fn digit_value_of(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'A'..=b'Z' => Some(byte - b'A' + 10),
        b'a'..=b'z' => Some(byte - b'a' + 36),
        _ => None,
    }
}

/// Encode one digit value as its alphabet byte.
#[must_use]
pub const fn digit_of(value: u8) -> Option<u8> {
    if value < BASE {
        Some(ALPHABET[value as usize])
    } else {
        None
    }
}

/// Return `true` if `ch` belongs to the alphabet.
#[must_use]
pub fn is_digit(ch: char) -> bool {
    u8::try_from(ch).is_ok_and(|byte| digit_value_of(byte).is_some())
}

/// Map a character to its digit value.
pub fn digit_value(ch: char) -> Result<u8, DigitError> {
    u8::try_from(ch)
        .ok()
        .and_then(digit_value_of)
        .ok_or(DigitError::InvalidDigit { ch })
}

/// Map a digit value back to its character.
pub fn value_to_digit(value: u8) -> Result<char, DigitError> {
    digit_of(value)
        .map(char::from)
        .ok_or(DigitError::OutOfRange { value })
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MAX_DIGIT, MAX_VALUE, MID_DIGIT, MID_VALUE, ZERO_DIGIT, ZERO_VALUE};

    #[test]
    fn alphabet_order_matches_byte_order() {
        for pair in ALPHABET.windows(2) {
            assert!(pair[0] < pair[1], "{} must sort before {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn every_value_round_trips_through_its_digit() {
        for value in 0..BASE {
            let ch = value_to_digit(value).expect("in-range value should encode");
            assert_eq!(digit_value(ch), Ok(value));
        }
    }

    #[test]
    fn named_digits_match_their_values() {
        assert_eq!(digit_value(ZERO_DIGIT), Ok(ZERO_VALUE));
        assert_eq!(digit_value(MID_DIGIT), Ok(MID_VALUE));
        assert_eq!(digit_value(MAX_DIGIT), Ok(MAX_VALUE));
        assert_eq!(digit_value('A'), Ok(10));
        assert_eq!(digit_value('a'), Ok(36));
    }

    #[test]
    fn foreign_characters_are_rejected() {
        for ch in ['-', '_', ' ', '/', ':', '@', '[', '`', '{', 'é', '\0'] {
            assert_eq!(digit_value(ch), Err(DigitError::InvalidDigit { ch }));
            assert!(!is_digit(ch));
        }
    }

    #[test]
    fn values_past_the_alphabet_are_out_of_range() {
        assert_eq!(value_to_digit(62), Err(DigitError::OutOfRange { value: 62 }));
        assert_eq!(
            value_to_digit(u8::MAX),
            Err(DigitError::OutOfRange { value: u8::MAX })
        );
        assert_eq!(digit_of(BASE), None);
    }
}
