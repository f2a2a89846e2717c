//! This crate compiles all the interfaces of the `fwint` system of crates.
//!
//! [FixedUint] is an unsigned multi-precision integer with a bitwidth fixed
//! at construction. It can be constructed from unsigned integers or from
//! digit strings in any base from 2 to 256, formatted back to digit strings,
//! and combined with pure `add`/`sub`/`mul` operations that report their
//! carry, borrow, and overflow explicitly and promote the result width
//! deterministically.
//!
//! ```
//! use fwint::{bw, FixedUint};
//!
//! let a = FixedUint::from_u64(bw(128), 123456);
//! let b = FixedUint::from_u64(bw(64), 7890);
//! let (product, oflow) = a.mul(&b);
//! assert!(!oflow);
//! // `mul` widens to the sum of the operand widths
//! assert_eq!(product.bw(), 192);
//! assert_eq!(product.to_string_radix(10).unwrap(), "974067840");
//! ```

#![no_std]

pub use fwint_core::{
    bits_upper_bound, bw, char_to_digit, chars_upper_bound, digit_to_char, FixedUint, RadixError,
    MAX_BASE, MIN_BASE,
};

pub mod prelude {
    pub use crate::*;
}
