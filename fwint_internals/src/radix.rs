//! The radix alphabet and error taxonomy shared by parsing and formatting

use core::fmt;

/// Smallest supported base for string conversion
pub const MIN_BASE: u16 = 2;

/// Largest supported base for string conversion
pub const MAX_BASE: u16 = 256;

/// A string parsing or formatting error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RadixError {
    /// A base is not in the range `2..=256`
    InvalidBase,
    /// There is a character that does not map to a digit value below the
    /// base, or the input is empty
    InvalidDigit,
}

impl fmt::Display for RadixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// The code point following `'z'`, where digit values `62..=255` continue
const EXT_ALPHABET_START: u32 = ('z' as u32) + 1;

/// Maps a digit value to its character in the conversion alphabet:
/// `'0'..='9'` for 0..=9, `'A'..='Z'` for 10..=35, `'a'..='z'` for 36..=61,
/// and consecutive code points above `'z'` for 62..=255, so that every digit
/// of every supported base has a distinct character.
pub fn digit_to_char(digit: u8) -> char {
    match digit {
        0..=9 => (b'0' + digit) as char,
        10..=35 => (b'A' + (digit - 10)) as char,
        36..=61 => (b'a' + (digit - 36)) as char,
        // the extension stays far below the surrogate range, `from_u32`
        // cannot fail
        _ => match char::from_u32(EXT_ALPHABET_START + ((digit - 62) as u32)) {
            Some(c) => c,
            None => unreachable!(),
        },
    }
}

/// Maps a character back to its digit value, the inverse of
/// [digit_to_char]. Returns `None` for characters outside the alphabet. Note
/// that this does not know the base; callers must still check the digit value
/// against their base.
pub fn char_to_digit(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some((c as u32 as u8) - b'0'),
        'A'..='Z' => Some((c as u32 as u8) - b'A' + 10),
        'a'..='z' => Some((c as u32 as u8) - b'a' + 36),
        _ => {
            let x = c as u32;
            if x >= EXT_ALPHABET_START && (x - EXT_ALPHABET_START) <= (255 - 62) {
                Some((x - EXT_ALPHABET_START) as u8 + 62)
            } else {
                None
            }
        }
    }
}

/// Returns the number of bits needed per digit in `base`, rounded up
const fn bits_per_digit(base: u16) -> usize {
    16 - ((base - 1).leading_zeros() as usize)
}

/// This is used for quickly calculating the maximum number of bits needed for
/// a string representation of a number in some base to be represented. This
/// may give more bits than needed, but is guaranteed to never underestimate
/// the number of bits needed. Saturates on extreme string lengths approaching
/// memory exhaustion.
pub const fn bits_upper_bound(len: usize, base: u16) -> Result<usize, RadixError> {
    if base < MIN_BASE || base > MAX_BASE {
        return Err(RadixError::InvalidBase)
    }
    Ok(len.saturating_mul(bits_per_digit(base)))
}

/// This takes an input of significant bits and gives an upper bound for the
/// number of characters in the given `base` needed to represent those bits.
pub const fn chars_upper_bound(significant_bits: usize, base: u16) -> Result<usize, RadixError> {
    if base < MIN_BASE || base > MAX_BASE {
        return Err(RadixError::InvalidBase)
    }
    // dividing by the floored binary logarithm never underestimates
    let lb_floor = 15 - (base.leading_zeros() as usize);
    Ok((significant_bits / lb_floor).saturating_add(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_round_trip() {
        for d in 0..=255u8 {
            let c = digit_to_char(d);
            assert_eq!(char_to_digit(c), Some(d));
        }
        // spot checks against the historical alphabet
        assert_eq!(digit_to_char(0), '0');
        assert_eq!(digit_to_char(9), '9');
        assert_eq!(digit_to_char(10), 'A');
        assert_eq!(digit_to_char(35), 'Z');
        assert_eq!(digit_to_char(36), 'a');
        assert_eq!(digit_to_char(61), 'z');
        assert_eq!(char_to_digit('#'), None);
        assert_eq!(char_to_digit(' '), None);
    }

    #[test]
    fn upper_bounds() {
        assert_eq!(bits_upper_bound(9, 10), Ok(36));
        assert_eq!(bits_upper_bound(16, 2), Ok(16));
        assert_eq!(bits_upper_bound(4, 256), Ok(32));
        assert_eq!(bits_upper_bound(3, 1), Err(RadixError::InvalidBase));
        // 64 bits of value needs at most 20 decimal digits
        assert!(chars_upper_bound(64, 10).unwrap() >= 20);
        assert_eq!(chars_upper_bound(64, 300), Err(RadixError::InvalidBase));
    }
}
