use alloc::{string::String, vec::Vec};
use core::num::NonZeroUsize;

use fwint_internals::*;

use crate::FixedUint;

/// # String representation conversion
impl FixedUint {
    /// Creates a `FixedUint` with bitwidth `w` from the digit string `src` in
    /// `base`, most significant digit first. Digits map through the alphabet
    /// of [fwint_internals::char_to_digit]: `'0'..='9'` are 0..=9,
    /// `'A'..='Z'` are 10..=35, `'a'..='z'` are 36..=61, with consecutive
    /// code points above `'z'` covering the digit values of bases up to 256.
    /// Leading zero digits are allowed and ignored.
    ///
    /// A magnitude exceeding `w` bits is silently truncated to the low `w`
    /// bits, the same policy as [FixedUint::from_u64]. Callers that need to
    /// detect this can parse at a width from
    /// [fwint_internals::bits_upper_bound] and then check
    /// [FixedUint::zero_resize].
    ///
    /// # Errors
    ///
    /// `RadixError::InvalidBase` if `base` is not in `2..=256`.
    /// `RadixError::InvalidDigit` if `src` is empty or contains a character
    /// that does not map to a digit value below `base`. No value is produced
    /// on error.
    pub fn from_str_radix(src: &str, base: u16, w: NonZeroUsize) -> Result<Self, RadixError> {
        if base < MIN_BASE || base > MAX_BASE {
            return Err(RadixError::InvalidBase)
        }
        if src.is_empty() {
            return Err(RadixError::InvalidDigit)
        }
        let mut res = Self::zero(w);
        for c in src.chars() {
            let d = match char_to_digit(c) {
                Some(d) if (d as u16) < base => d,
                _ => return Err(RadixError::InvalidDigit),
            };
            // `acc = acc * base + d` in one limb pass; the returned high part
            // is the truncated overflow
            let _ = res.short_cin_mul(d as Digit, base as Digit);
        }
        Ok(res)
    }

    /// Returns the digit values of the magnitude in `base`, most significant
    /// first with no leading zeros, by repeated short division of a scratch
    /// copy of the significant limbs. The zero value is a single zero digit.
    ///
    /// # Errors
    ///
    /// `RadixError::InvalidBase` if `base` is not in `2..=256`.
    pub fn to_digits_radix(&self, base: u16) -> Result<Vec<u8>, RadixError> {
        if base < MIN_BASE || base > MAX_BASE {
            return Err(RadixError::InvalidBase)
        }
        let sig = self.sig_limbs();
        let mut digits = Vec::with_capacity(chars_upper_bound(self.sig_bits(), base)?);
        if sig == 0 {
            digits.push(0);
            return Ok(digits)
        }
        // short division mangles the limbs, so work on a copy
        let mut scratch: Vec<Digit> = Vec::from(&self.as_slice()[..sig]);
        let mut len = sig;
        while len > 0 {
            let mut rem = 0;
            for i in (0..len).rev() {
                let tmp = dd_short_division(scratch[i], rem, base as Digit);
                scratch[i] = tmp.0;
                rem = tmp.1;
            }
            // remainders are below the base, which never exceeds 256
            digits.push(rem as u8);
            while len > 0 && scratch[len - 1] == 0 {
                len -= 1;
            }
        }
        digits.reverse();
        Ok(digits)
    }

    /// Creates a string representing the magnitude of `self` in `base`, most
    /// significant digit first with no leading zeros, using the inverse
    /// alphabet of [FixedUint::from_str_radix]. The zero value is `"0"` in
    /// every base.
    ///
    /// For every valid `base`, parsing the result at the same bitwidth
    /// reproduces `self` exactly.
    ///
    /// # Errors
    ///
    /// `RadixError::InvalidBase` if `base` is not in `2..=256`.
    pub fn to_string_radix(&self, base: u16) -> Result<String, RadixError> {
        let digits = self.to_digits_radix(base)?;
        let mut s = String::with_capacity(digits.len());
        for d in &digits {
            s.push(digit_to_char(*d));
        }
        Ok(s)
    }
}
