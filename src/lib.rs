//! Multi-precision integers \
//! This crate provides:
//! - [`Mpuint`]: arbitrary-precision unsigned integers with arithmetic, bit and byte access, and conversion to and from text in bases 2 to 36.
//! - [`Mpint`]: arbitrary-precision signed integers built on [`Mpuint`]. Division is Euclidean: the remainder is never negative.
//!
//! Fallible operations return [`Result`]; the arithmetic operators panic on
//! division by zero or unsigned underflow, like the primitive integer types.

#[macro_use]
mod macros;

mod error;
mod mp_int;
mod mp_num_cache;
mod mp_num_constants;
mod mp_uint;
mod radix;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use mp_int::Mpint;
pub use mp_uint::Mpuint;
pub use radix::FormatOptions;
