use core::cmp;

use fwint_internals::*;

use crate::FixedUint;

/// # Multiplication
impl FixedUint {
    /// Assigns `cin + (self * rhs)` to `self` and returns the overflow, the
    /// part of the true result at or above the bitwidth. This is the
    /// multiply-by-small-constant and add-small-constant primitive that the
    /// base accumulation of string parsing is built on.
    pub fn short_cin_mul(&mut self, cin: Digit, rhs: Digit) -> Digit {
        let mut carry = cin;
        for i in 0..self.len() {
            let tmp = widen_mul_add(self.as_slice()[i], rhs, carry);
            self.limbs_mut()[i] = tmp.0;
            carry = tmp.1;
        }
        let e = self.extra();
        let oflow = if e == 0 {
            carry
        } else {
            let last_i = self.len() - 1;
            (self.as_slice()[last_i] >> e) | (carry << (BITS - e))
        };
        self.clear_unused_bits();
        oflow
    }

    /// Computes `self * rhs` into a result whose bitwidth is the sum of the
    /// operand bitwidths, so the product of canonical operands always fits.
    /// The boolean reports partial products escaping the result storage,
    /// which can only happen for non-canonical operand storage with set bits
    /// at or above the operand bitwidth; callers passing ordinary values will
    /// always observe `false`.
    #[must_use]
    pub fn mul(&self, rhs: &Self) -> (Self, bool) {
        let mut res = Self::zero(bw(self.bw() + rhs.bw()));
        // keep the outer loop over the shorter operand
        let (x0, x1) = if self.len() <= rhs.len() {
            (self, rhs)
        } else {
            (rhs, self)
        };
        let mut oflow = false;
        for i in 0..cmp::min(x0.len(), res.len()) {
            // carries from the short multiplication and from the addition
            let mut carry0 = 0;
            let mut carry1 = 0;
            let mut j = 0;
            let mut k = i;
            while j < x1.len() && k < res.len() {
                let tmp0 = widen_mul_add(x0.as_slice()[i], x1.as_slice()[j], carry0);
                carry0 = tmp0.1;
                let tmp1 = widen_add(res.as_slice()[k], tmp0.0, carry1);
                carry1 = tmp1.1;
                res.limbs_mut()[k] = tmp1.0;
                j += 1;
                k += 1;
            }
            // partial products landing outside the result storage are nonzero
            // only if an operand had set bits at or above its bitwidth
            while j < x1.len() {
                if x0.as_slice()[i] != 0 && x1.as_slice()[j] != 0 {
                    oflow = true;
                }
                j += 1;
            }
            if k < res.len() {
                // the last short multiplication carry, then arbitrarily many
                // addition carries
                let tmp = widen_add(res.as_slice()[k], carry0, carry1);
                res.limbs_mut()[k] = tmp.0;
                carry1 = tmp.1;
                k += 1;
                while k < res.len() && carry1 != 0 {
                    let tmp = widen_add(res.as_slice()[k], carry1, 0);
                    res.limbs_mut()[k] = tmp.0;
                    carry1 = tmp.1;
                    k += 1;
                }
                if carry1 != 0 {
                    oflow = true;
                }
            } else if (carry0 != 0) || (carry1 != 0) {
                oflow = true;
            }
        }
        let e = res.extra();
        if e != 0 {
            let last_i = res.len() - 1;
            if (res.as_slice()[last_i] >> e) != 0 {
                oflow = true;
            }
            res.clear_unused_bits();
        }
        (res, oflow)
    }
}
