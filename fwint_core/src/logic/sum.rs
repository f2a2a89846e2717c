use core::cmp;

use fwint_internals::*;

use crate::FixedUint;

/// # Addition and subtraction
impl FixedUint {
    /// Computes `self + rhs` into a result whose bitwidth is the maximum of
    /// the operand bitwidths, zero-extending the shorter operand. The boolean
    /// is the carry out of the result width. The carry is never stored back
    /// into the result: the result stays within its fixed capacity and
    /// callers must check the flag.
    #[must_use]
    pub fn add(&self, rhs: &Self) -> (Self, bool) {
        let mut res = Self::zero(cmp::max(self.nzbw(), rhs.nzbw()));
        let mut carry = 0;
        for i in 0..res.len() {
            let tmp = widen_add(self.limb_or_zero(i), rhs.limb_or_zero(i), carry);
            res.limbs_mut()[i] = tmp.0;
            carry = tmp.1;
        }
        let e = res.extra();
        let oflow = if e == 0 {
            carry != 0
        } else {
            let last_i = res.len() - 1;
            let last = res.as_slice()[last_i];
            res.limbs_mut()[last_i] = last & (MAX >> (BITS - e));
            (carry != 0) || ((last >> e) != 0)
        };
        (res, oflow)
    }

    /// Computes `self - rhs` into a result whose bitwidth is the maximum of
    /// the operand bitwidths, zero-extending the shorter operand. The boolean
    /// is the borrow, true exactly when the minuend is smaller than the
    /// subtrahend; in that case the stored result is the difference wrapped
    /// modulo `2^R` for result width `R`, the usual unsigned
    /// subtract-with-borrow semantics.
    #[must_use]
    pub fn sub(&self, rhs: &Self) -> (Self, bool) {
        let mut res = Self::zero(cmp::max(self.nzbw(), rhs.nzbw()));
        // `a - b` as `a + !b + 1`, so the carry chain is shared with `add`
        let mut carry: Digit = 1;
        for i in 0..res.len() {
            let tmp = widen_add(self.limb_or_zero(i), !rhs.limb_or_zero(i), carry);
            res.limbs_mut()[i] = tmp.0;
            carry = tmp.1;
        }
        // the complement filled the unused bits of the last limb with ones
        res.clear_unused_bits();
        (res, carry == 0)
    }
}
