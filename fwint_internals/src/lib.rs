//! This crate contains common developer utilities for crates within the
//! `fwint` system: the limb type, limb-count helpers, the widening arithmetic
//! primitives that the carry chains are built on, and the radix alphabet
//! shared by string parsing and formatting. In rare circumstances, someone
//! might want to use the items here for highly optimized routines, but most
//! users should use the main `fwint` crate and never interact with this.

#![no_std]
// not const and tends to be longer
#![allow(clippy::manual_range_contains)]
#![allow(clippy::needless_range_loop)]

mod radix;
mod widening;

use core::num::NonZeroUsize;

pub use radix::{
    bits_upper_bound, char_to_digit, chars_upper_bound, digit_to_char, RadixError, MAX_BASE,
    MIN_BASE,
};
pub use widening::{dd_short_division, widen_add, widen_mul_add};

/// The basic element of the limb slice in `FixedUint`. This is a type alias
/// of the unsigned integer of the architecture's registers, so that the carry
/// chains work on whole machine words.
pub type Digit = usize;

/// Bitwidth of a `Digit`
pub const BITS: usize = Digit::BITS as usize;

/// Maximum value of a `Digit`
pub const MAX: Digit = Digit::MAX;

// the widening primitives funnel through `u128`
const _: () = assert!(BITS <= 64);

/// Utility free function for converting a `usize` to a `NonZeroUsize`. This is
/// mainly intended for usage with literals, and shouldn't be used for fallible
/// conversions.
///
/// # Panics
///
/// If `w == 0`, this function will panic.
#[inline]
#[track_caller]
#[must_use]
pub const fn bw(w: usize) -> NonZeroUsize {
    match NonZeroUsize::new(w) {
        None => {
            panic!("tried to construct an invalid bitwidth of 0 using the `fwint::bw` function")
        }
        Some(w) => w,
    }
}

/// Returns the number of extra bits beyond the last whole digit given `w`
#[inline]
pub const fn extra(w: NonZeroUsize) -> usize {
    w.get() & (BITS - 1)
}

/// Returns the number of _whole_ digits (not including a digit with unused
/// bits) given `w`
#[inline]
pub const fn digits(w: NonZeroUsize) -> usize {
    w.get().wrapping_shr(BITS.trailing_zeros())
}

/// Returns the number of `Digit`s needed to represent `w`, including any
/// digit with unused bits
#[inline]
pub const fn total_digits(w: NonZeroUsize) -> NonZeroUsize {
    // Safety: if `digits(w)` is zero, `extra(w)` must be nonzero
    unsafe { NonZeroUsize::new_unchecked(digits(w).wrapping_add((extra(w) != 0) as usize)) }
}
