//! ## Basic Invariants
//!
//! - A `FixedUint` has a nonzero bitwidth specified in a `NonZeroUsize`.
//!   Being nonzero, it eliminates several edge cases and ambiguities this
//!   crate would have to handle.
//! - The limbs are stored in little endian order. The number of `Digit`s is
//!   the minimum needed to store all bits. If the bitwidth is not a multiple
//!   of `Digit::BITS`, there are some unused bits in the last limb.
//! - Unused bits are zeroed after every operation, so two values of the same
//!   bitwidth are numerically equal exactly when their limbs are equal.
//! - The magnitude is unsigned; there is no sign representation.

use alloc::{boxed::Box, vec};
use core::{
    cmp,
    fmt,
    hash::{Hash, Hasher},
    num::NonZeroUsize,
};

use fwint_internals::*;

/// A fixed-width unsigned multi-precision integer.
///
/// The bitwidth is chosen at construction and the limb buffer is never
/// resized afterwards: every operation writes into storage whose size is a
/// deterministic function of the operand bitwidths, which preserves the
/// zero-reallocation, predictable-latency property of hardware-register-like
/// arithmetic. Values are never mutated by arithmetic; `add`, `sub`, and
/// `mul` return new instances along with their carry, borrow, and overflow
/// flags.
///
/// ```
/// use fwint_core::{bw, FixedUint};
///
/// let a = FixedUint::from_u64(bw(256), 123456789);
/// let b = FixedUint::from_str_radix("987654321", 10, bw(256)).unwrap();
/// let (sum, carry) = a.add(&b);
/// assert!(!carry);
/// assert_eq!(sum.to_string_radix(10).unwrap(), "1111111110");
/// ```
#[derive(Clone)]
pub struct FixedUint {
    w: NonZeroUsize,
    limbs: Box<[Digit]>,
}

impl FixedUint {
    /// Zero-value construction with bitwidth `w`
    pub fn zero(w: NonZeroUsize) -> Self {
        Self {
            w,
            limbs: vec![0; total_digits(w).get()].into_boxed_slice(),
        }
    }

    /// Creates a `FixedUint` with bitwidth `w` from the value of `x`. Bits of
    /// `x` at or above `w` are silently truncated, consistent with the fixed
    /// capacity of the type; see [FixedUint::from_str_radix] for the same
    /// policy on strings.
    pub fn from_u64(w: NonZeroUsize, x: u64) -> Self {
        let mut res = Self::zero(w);
        let mut x = x;
        for i in 0..res.limbs.len() {
            res.limbs[i] = x as Digit;
            x = x.checked_shr(BITS as u32).unwrap_or(0);
            if x == 0 {
                break
            }
        }
        res.clear_unused_bits();
        res
    }

    /// Returns the low 64 bits of the value, truncating any higher bits
    #[must_use]
    pub fn to_u64(&self) -> u64 {
        let mut x: u64 = 0;
        for i in (0..self.limbs.len()).rev() {
            x = x.checked_shl(BITS as u32).unwrap_or(0);
            x |= self.limbs[i] as u64;
        }
        x
    }

    /// Returns the bitwidth of this `FixedUint` as a `NonZeroUsize`
    #[inline]
    #[must_use]
    pub const fn nzbw(&self) -> NonZeroUsize {
        self.w
    }

    /// Returns the bitwidth of this `FixedUint` as a `usize`
    #[inline]
    #[must_use]
    pub const fn bw(&self) -> usize {
        self.w.get()
    }

    /// Returns the exact number of `Digit` limbs needed to store all bits
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.limbs.len()
    }

    /// Returns the little-endian limbs. Most end users should not need this,
    /// since it has a strong dependence on the size of `Digit`.
    #[doc(hidden)]
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Digit] {
        &self.limbs
    }

    #[inline]
    pub(crate) fn limbs_mut(&mut self) -> &mut [Digit] {
        &mut self.limbs
    }

    /// Returns limb `i`, or zero beyond the end of the limb slice. The carry
    /// chains use this for zero-extension of the shorter operand.
    #[inline]
    pub(crate) fn limb_or_zero(&self, i: usize) -> Digit {
        if i < self.limbs.len() {
            self.limbs[i]
        } else {
            0
        }
    }

    /// Returns the number of unused bits in the last limb, zero if the
    /// bitwidth is a multiple of `BITS`
    #[inline]
    pub(crate) fn extra(&self) -> usize {
        extra(self.w)
    }

    /// Zeroes any bits of the last limb at or above the bitwidth, restoring
    /// the unused-bits invariant
    pub(crate) fn clear_unused_bits(&mut self) {
        let e = self.extra();
        if e != 0 {
            let last = self.limbs.len() - 1;
            self.limbs[last] &= MAX >> (BITS - e);
        }
    }

    /// Zeroes all limbs in place. The bitwidth is unchanged.
    pub fn clear(&mut self) {
        self.limbs.fill(0);
    }

    /// Returns the number of significant limbs, which is zero exactly for the
    /// zero value
    #[must_use]
    pub fn sig_limbs(&self) -> usize {
        let mut n = self.limbs.len();
        while n > 0 && self.limbs[n - 1] == 0 {
            n -= 1;
        }
        n
    }

    /// Returns the number of significant bits
    #[must_use]
    pub fn sig_bits(&self) -> usize {
        let n = self.sig_limbs();
        if n == 0 {
            0
        } else {
            n * BITS - (self.limbs[n - 1].leading_zeros() as usize)
        }
    }

    /// Returns if the value is zero
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.sig_limbs() == 0
    }

    /// Returns a copy of `self` with bitwidth `w`, zero-extending or
    /// truncating, and whether any set bits were lost to truncation. Callers
    /// that need to detect values exceeding a target width can convert at a
    /// generous width first (see [fwint_internals::bits_upper_bound]) and
    /// then resize with this.
    #[must_use]
    pub fn zero_resize(&self, w: NonZeroUsize) -> (Self, bool) {
        let mut res = Self::zero(w);
        let n = cmp::min(res.limbs.len(), self.limbs.len());
        res.limbs[..n].copy_from_slice(&self.limbs[..n]);
        res.clear_unused_bits();
        (res, self.sig_bits() > w.get())
    }
}

/// If `self` and `rhs` have unmatching bitwidths, `false` will be returned.
impl PartialEq for FixedUint {
    fn eq(&self, rhs: &Self) -> bool {
        self.w == rhs.w && self.limbs == rhs.limbs
    }
}

impl Eq for FixedUint {}

impl Hash for FixedUint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.w.hash(state);
        self.limbs.hash(state);
    }
}

/// Writes the value as hexadecimal with a "0x" prefix and a bitwidth suffix,
/// because it is confusing in `assert_` debugging otherwise.
impl fmt::Debug for FixedUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.to_string_radix(16).map_err(|_| fmt::Error)?;
        write!(f, "0x{}_u{}", s, self.bw())
    }
}

/// Writes the value in decimal
impl fmt::Display for FixedUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.to_string_radix(10).map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

impl fmt::LowerHex for FixedUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = self.to_string_radix(16).map_err(|_| fmt::Error)?;
        s.make_ascii_lowercase();
        f.write_str(&s)
    }
}

impl fmt::UpperHex for FixedUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.to_string_radix(16).map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

impl fmt::Binary for FixedUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.to_string_radix(2).map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

#[cfg(feature = "zeroize_support")]
impl zeroize::Zeroize for FixedUint {
    fn zeroize(&mut self) {
        self.limbs.zeroize()
    }
}
