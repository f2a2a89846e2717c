//! Fixed width integers library
//!
//! This is the core library of the `fwint` system of crates. It supplies the
//! [FixedUint] storage type: an unsigned multi-precision integer whose
//! bitwidth is fixed at construction, stored as little-endian machine-word
//! limbs, with string conversion in any base from 2 to 256 and pure
//! arithmetic with explicit carry/borrow/overflow reporting.
//!
//! Almost all fallible functions in this crate return a handleable `Result`.
//! The only exception is the `bw` convenience function.

#![no_std]
// There are many guaranteed nonzero lengths
#![allow(clippy::len_without_is_empty)]
// We are using special indexing everywhere
#![allow(clippy::needless_range_loop)]
// not const and tends to be longer
#![allow(clippy::manual_range_contains)]

extern crate alloc;

pub use fwint_internals::{
    bits_upper_bound, bw, char_to_digit, chars_upper_bound, digit_to_char, RadixError, MAX_BASE,
    MIN_BASE,
};

mod fixed;
pub use fixed::FixedUint;

mod logic;

#[cfg(feature = "serde_support")]
mod serde;

pub mod prelude {
    pub use crate::{bw, FixedUint, RadixError};
}
