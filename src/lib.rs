//! Arbitrary-precision unsigned integer arithmetic from first principles.
//!
//! This crate implements non-negative integers of unbounded size on top of a
//! raw growable bit vector, without relying on any native big-integer type.
//! It is a self-contained numeric core: big enough numbers for modular
//! exponentiation in key-exchange protocols, built out of nothing but
//! bit-addressed reads, writes, and shifts.
//!
//! # Layering
//!
//! Two components, strictly layered:
//!
//! * A crate-private bit store: a little-endian, dynamically growing vector
//!   of 64-bit words with bit-addressed access, single-bit shifts in both
//!   directions, and a word-granular fast left shift.
//! * [`UnsignedBigInt`], the arithmetic engine, expressed purely in terms of
//!   the store's bit interface: ripple-carry addition, borrow-propagating
//!   subtraction, schoolbook and Karatsuba multiplication, binary long
//!   division, and binary (modular) exponentiation.
//!
//! # Examples
//!
//! ```
//! use bignum::UnsignedBigInt;
//!
//! let a = UnsignedBigInt::from_decimal_str("12341234")?;
//! let b = UnsignedBigInt::from_decimal_str(
//!     "12341234123412341234123412341234123412341234",
//! )?;
//!
//! assert_eq!(
//!     a.add(&b).to_string(),
//!     "12341234123412341234123412341234123424682468",
//! );
//! assert_eq!(b.divide(&a)?.to_string(), "1000000010000000100000001000000010000");
//! assert_eq!(b.rem(&a)?.to_string(), "1234");
//! # Ok::<(), bignum::Error>(())
//! ```
//!
//! Modular exponentiation keeps intermediates bounded by the modulus no
//! matter how large the exponent grows:
//!
//! ```
//! use bignum::UnsignedBigInt;
//!
//! let base = UnsignedBigInt::from(4u64);
//! let exponent = UnsignedBigInt::from(13u64);
//! let modulus = UnsignedBigInt::from(497u64);
//! assert_eq!(base.mod_pow(&exponent, &modulus)?.to_u64()?, 445);
//! # Ok::<(), bignum::Error>(())
//! ```
//!
//! # Errors
//!
//! Malformed decimal input, subtraction that would underflow, division by
//! zero, and narrowing conversions that do not fit are reported through
//! [`Error`]; see [`ErrorCode`] for the full taxonomy. No operation panics
//! on bad input and none silently wraps.
//!
//! # Threading
//!
//! Every value exclusively owns its storage and every operation runs to
//! completion on the caller's thread. Distinct values may be used freely
//! from distinct threads; sharing one value across threads needs external
//! synchronization, as with any `Vec`-backed type.

mod bits;
mod error;
mod uint;

pub use crate::error::{Category, Error, ErrorCode, Result};
pub use crate::uint::UnsignedBigInt;
