use crate::{Digit, BITS};

/// Computes x + y + z and returns the widened result as a tuple.
#[inline]
pub const fn widen_add(x: Digit, y: Digit, z: Digit) -> (Digit, Digit) {
    let (sum, carry0) = x.overflowing_add(y);
    let (sum, carry1) = sum.overflowing_add(z);
    (sum, (carry0 as Digit) + (carry1 as Digit))
}

/// Computes (x * y) + z. This cannot overflow, because it returns the value
/// widened into a tuple, where the first element is the least significant part
/// of the integer and the second is the most significant.
#[inline]
pub const fn widen_mul_add(x: Digit, y: Digit, z: Digit) -> (Digit, Digit) {
    let tmp = (x as u128)
        .wrapping_mul(y as u128)
        .wrapping_add(z as u128);
    (tmp as Digit, tmp.wrapping_shr(BITS as u32) as Digit)
}

/// Divides the double digit `duo_hi * 2^BITS + duo_lo` by `div` and returns
/// the quotient and remainder. This is the step of a multi-limb short
/// division, which maintains `duo_hi < div`, so the quotient always fits in a
/// single `Digit`.
///
/// # Panics
///
/// If `div == 0`, this function will panic.
#[inline]
pub const fn dd_short_division(duo_lo: Digit, duo_hi: Digit, div: Digit) -> (Digit, Digit) {
    debug_assert!(duo_hi < div);
    let duo = (duo_lo as u128) | ((duo_hi as u128) << BITS);
    (
        duo.wrapping_div(div as u128) as Digit,
        duo.wrapping_rem(div as u128) as Digit,
    )
}
