//! Digit alphabet and codec shared by every fracdex layer.
//!
//! Order keys are strings over a 62-symbol alphabet whose digit order matches
//! byte order, so plain string comparison is also digit comparison.

mod codec;

pub use codec::{DigitError, digit_of, digit_value, digit_value_of, is_digit, value_to_digit};

///
/// CONSTANTS
///

/// Ordered digit alphabet: `0-9`, then `A-Z`, then `a-z`.
pub const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Number of symbols in the alphabet.
pub const BASE: u8 = 62;

/// Value of the lowest digit.
pub const ZERO_VALUE: u8 = 0;

/// Value of the highest digit.
pub const MAX_VALUE: u8 = BASE - 1;

/// Mid-alphabet value used when a key has to grow by one position.
pub const MID_VALUE: u8 = BASE / 2;

pub const ZERO_DIGIT: char = '0';
pub const MAX_DIGIT: char = 'z';
pub const MID_DIGIT: char = 'V';
