//! Arbitrary-precision unsigned integers and their arithmetic.
//!
//! Every value owns one [`BitArray`] holding its unsigned binary
//! representation, and every operation below is expressed purely in terms of
//! the store's bit-addressed interface: carries, borrows, and comparisons
//! are threaded bit position by bit position through explicit accumulator
//! variables. Operations return freshly allocated results and never mutate
//! their operands; `pow` and `mod_pow` mutate only private local copies.

use crate::bits::{BitArray, WORD_BITS};
use crate::error::{Error, ErrorCode, Result};
use core::cmp::Ordering;
use core::fmt::{self, Debug, Display};
use core::str::FromStr;

/// Operand sizes below this many bits fall back from Karatsuba to schoolbook
/// multiplication; recursion overhead dominates under the cutoff. Tunable
/// for speed, never for correctness.
const KARATSUBA_CUTOFF: usize = 512;

/// An arbitrary-precision non-negative integer.
///
/// Construct one from a machine word or a decimal string, then combine
/// values with the non-mutating arithmetic methods:
///
/// ```
/// use bignum::UnsignedBigInt;
///
/// let a = UnsignedBigInt::from_decimal_str("12341234")?;
/// let b = UnsignedBigInt::from(2u64);
/// assert_eq!(a.multiply(&b).to_string(), "24682468");
/// # Ok::<(), bignum::Error>(())
/// ```
#[derive(Clone)]
pub struct UnsignedBigInt {
    bits: BitArray,
}

impl UnsignedBigInt {
    /// The additive identity.
    pub fn zero() -> Self {
        UnsignedBigInt {
            bits: BitArray::new(),
        }
    }

    /// The multiplicative identity.
    pub fn one() -> Self {
        UnsignedBigInt {
            bits: BitArray::from_word(1),
        }
    }

    fn ten() -> Self {
        UnsignedBigInt {
            bits: BitArray::from_word(10),
        }
    }

    /// Parses a base-10 string of ASCII digits. No sign, no leading `+`, no
    /// whitespace; the empty string is an error.
    ///
    /// # Errors
    ///
    /// `ErrorCode::EmptyDecimalString` for `""`, `ErrorCode::InvalidDigit`
    /// for any character outside `0..=9`.
    pub fn from_decimal_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::new(ErrorCode::EmptyDecimalString));
        }
        let ten = Self::ten();
        let mut value = Self::zero();
        for ch in s.chars() {
            let digit = match ch.to_digit(10) {
                Some(digit) => digit,
                None => return Err(Error::new(ErrorCode::InvalidDigit(ch))),
            };
            value = value.multiply(&ten).add(&Self::from(u64::from(digit)));
        }
        Ok(value)
    }

    /// Significant length in bits: index of the highest set bit plus one,
    /// or 0 for the value zero.
    pub fn bit_length(&self) -> usize {
        self.bits.length()
    }

    /// Whether this value is zero.
    pub fn is_zero(&self) -> bool {
        self.bits.length() == 0
    }

    fn is_odd(&self) -> bool {
        self.bits.get(0)
    }

    /// The value as a `u64`.
    ///
    /// # Errors
    ///
    /// `ErrorCode::NumberOutOfRange` if the value is wider than 64 bits.
    /// Use [`low_u64`](Self::low_u64) for a deliberately truncating read.
    pub fn to_u64(&self) -> Result<u64> {
        if self.bits.length() > WORD_BITS {
            return Err(Error::new(ErrorCode::NumberOutOfRange));
        }
        Ok(self.bits.low_word())
    }

    /// The lowest 64 bits of the value. This is a narrowing read: anything
    /// above bit 63 is silently discarded.
    pub fn low_u64(&self) -> u64 {
        self.bits.low_word()
    }

    /// Compares bit positions from `max(length(self), length(other))` down
    /// to 0, deciding at the first differing bit. Most significant first is
    /// the only correct order for variable-length binary values.
    fn compare(&self, other: &Self) -> Ordering {
        let top = usize::max(self.bits.length(), other.bits.length());
        for i in (0..=top).rev() {
            let a = self.bits.get(i);
            let b = other.bits.get(i);
            if a != b {
                return if a { Ordering::Greater } else { Ordering::Less };
            }
        }
        Ordering::Equal
    }

    /// Whether `self > other`.
    pub fn greater_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Greater
    }

    /// Whether `self < other`.
    pub fn smaller_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Less
    }

    /// Whether `self == other`. Robust to trailing zero words in either
    /// operand's storage.
    pub fn equals(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }

    /// Returns `self + addend`.
    ///
    /// Ripple-carry addition from bit 0 through one position past both
    /// operands' significant lengths, where a final carry may land.
    pub fn add(&self, addend: &Self) -> Self {
        let top = usize::max(self.bits.length(), addend.bits.length());
        let mut sum = Self::zero();
        let mut carry = 0u8;
        for i in 0..=top {
            let mut s = u8::from(self.bits.get(i)) + u8::from(addend.bits.get(i)) + carry;
            carry = 0;
            if s >= 2 {
                carry = 1;
                s -= 2;
            }
            sum.bits.set(i, s == 1);
        }
        sum
    }

    /// Returns `self - subtrahend`.
    ///
    /// # Errors
    ///
    /// `ErrorCode::SubtractionUnderflow` if `subtrahend > self`; the
    /// difference of unsigned values must be non-negative, and a wrapped
    /// result is never produced.
    pub fn subtract(&self, subtrahend: &Self) -> Result<Self> {
        if subtrahend.greater_than(self) {
            return Err(Error::new(ErrorCode::SubtractionUnderflow));
        }
        Ok(self.sub_unchecked(subtrahend))
    }

    /// Borrow-propagating subtraction. Callers must have established
    /// `self >= subtrahend`.
    fn sub_unchecked(&self, subtrahend: &Self) -> Self {
        debug_assert!(!subtrahend.greater_than(self));
        let top = usize::max(self.bits.length(), subtrahend.bits.length());
        let mut difference = Self::zero();
        let mut borrow = 0i8;
        for i in 0..=top {
            let mut s = i8::from(self.bits.get(i)) - i8::from(subtrahend.bits.get(i)) + borrow;
            borrow = 0;
            if s < 0 {
                borrow = -1;
                s += 2;
            }
            difference.bits.set(i, s == 1);
        }
        difference
    }

    /// Returns `self * multiplier` by schoolbook shift-and-add.
    ///
    /// For each set bit of the multiplier, a copy of `self` shifted to that
    /// position is added into the accumulator. The shifted copy advances
    /// incrementally, taking word-granular strides while the gap to the
    /// next set bit allows; O(length(self) * length(multiplier)) bit
    /// operations either way.
    pub fn multiply(&self, multiplier: &Self) -> Self {
        let mut product = Self::zero();
        let mut shifted = self.clone();
        let mut position = 0;
        for i in 0..multiplier.bits.length() {
            if multiplier.bits.get(i) {
                let mut gap = i - position;
                while gap >= WORD_BITS {
                    shifted.bits.shift_left_by_word();
                    gap -= WORD_BITS;
                }
                for _ in 0..gap {
                    shifted.bits.shift_left();
                }
                position = i;
                product = product.add(&shifted);
            }
        }
        product
    }

    /// Returns `self * multiplier` by recursive divide and conquer.
    ///
    /// Splits both operands at `m = ceil(min(length) / 2)` bits and
    /// combines three recursive products instead of four:
    /// `z1 = (a0 + a1)(b0 + b1) - z2 - z0`, then
    /// `z0 + z1 * 2^m + z2 * 2^(2m)`. Operands under the crossover fall
    /// back to [`multiply`](Self::multiply). Identical results to
    /// schoolbook for every input.
    pub fn karatsuba_multiply(&self, multiplier: &Self) -> Self {
        let m = usize::min(self.bits.length(), multiplier.bits.length()).div_ceil(2);
        if m < KARATSUBA_CUTOFF {
            return self.multiply(multiplier);
        }

        let (a0, a1) = self.split_at_bit(m);
        let (b0, b1) = multiplier.split_at_bit(m);

        let z0 = a0.karatsuba_multiply(&b0);
        let z2 = a1.karatsuba_multiply(&b1);
        // (a0 + a1)(b0 + b1) >= z0 + z2, so neither subtraction underflows.
        let mut z1 = a0
            .add(&a1)
            .karatsuba_multiply(&b0.add(&b1))
            .sub_unchecked(&z2)
            .sub_unchecked(&z0);

        let mut z2_shifted = z2;
        z1.bits.shift_left_by(m);
        z2_shifted.bits.shift_left_by(2 * m);
        z0.add(&z1).add(&z2_shifted)
    }

    /// Splits into (low `m` bits, remaining high bits); the pair of
    /// quotient and remainder of division by `2^m`.
    fn split_at_bit(&self, m: usize) -> (Self, Self) {
        let length = self.bits.length();
        let mut low = Self::zero();
        let mut high = Self::zero();
        for i in 0..usize::min(m, length) {
            if self.bits.get(i) {
                low.bits.set(i, true);
            }
        }
        for i in m..length {
            if self.bits.get(i) {
                high.bits.set(i - m, true);
            }
        }
        (low, high)
    }

    /// Returns `(self / divisor, self % divisor)` by binary long division.
    ///
    /// Scans the dividend's bits most significant first, shifting each into
    /// a running remainder and subtracting the divisor whenever the
    /// remainder reaches it.
    ///
    /// # Errors
    ///
    /// `ErrorCode::DivisionByZero` if `divisor` is zero.
    pub fn divide_with_remainder(&self, divisor: &Self) -> Result<(Self, Self)> {
        if divisor.is_zero() {
            return Err(Error::new(ErrorCode::DivisionByZero));
        }
        Ok(self.div_rem(divisor))
    }

    fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        debug_assert!(!divisor.is_zero());
        let mut quotient = Self::zero();
        let mut remainder = Self::zero();
        for i in (0..self.bits.length()).rev() {
            remainder.bits.shift_left();
            remainder.bits.set(0, self.bits.get(i));
            if remainder.compare(divisor) != Ordering::Less {
                remainder = remainder.sub_unchecked(divisor);
                quotient.bits.set(i, true);
            }
        }
        (quotient, remainder)
    }

    /// Returns `floor(self / divisor)`.
    ///
    /// # Errors
    ///
    /// `ErrorCode::DivisionByZero` if `divisor` is zero.
    pub fn divide(&self, divisor: &Self) -> Result<Self> {
        let (quotient, _) = self.divide_with_remainder(divisor)?;
        Ok(quotient)
    }

    /// Returns `self mod divisor`.
    ///
    /// # Errors
    ///
    /// `ErrorCode::DivisionByZero` if `divisor` is zero.
    pub fn rem(&self, divisor: &Self) -> Result<Self> {
        let (_, remainder) = self.divide_with_remainder(divisor)?;
        Ok(remainder)
    }

    /// Returns `self ^ exponent` by square and multiply.
    ///
    /// Consumes a private copy of the exponent one bit at a time from the
    /// least significant end, squaring a running base each step and
    /// multiplying it into the result when the bit is set: O(log(exponent))
    /// multiplications. `pow(0)` is one for every base.
    pub fn pow(&self, exponent: &Self) -> Self {
        let mut base = self.clone();
        let mut exp = exponent.clone();
        let mut result = Self::one();
        while !exp.is_zero() {
            if exp.is_odd() {
                result = result.karatsuba_multiply(&base);
            }
            exp.bits.shift_right();
            base = base.karatsuba_multiply(&base);
        }
        result
    }

    /// Returns `self ^ exponent mod modulus`.
    ///
    /// Same square-and-multiply loop as [`pow`](Self::pow), with the
    /// running base and running result reduced after every multiplication
    /// so intermediates never outgrow the modulus. The base is reduced once
    /// up front as well.
    ///
    /// # Errors
    ///
    /// `ErrorCode::DivisionByZero` if `modulus` is zero.
    pub fn mod_pow(&self, exponent: &Self, modulus: &Self) -> Result<Self> {
        if modulus.is_zero() {
            return Err(Error::new(ErrorCode::DivisionByZero));
        }
        let mut base = self.div_rem(modulus).1;
        let mut exp = exponent.clone();
        let mut result = Self::one().div_rem(modulus).1;
        while !exp.is_zero() {
            if exp.is_odd() {
                result = result.karatsuba_multiply(&base).div_rem(modulus).1;
            }
            exp.bits.shift_right();
            base = base.karatsuba_multiply(&base).div_rem(modulus).1;
        }
        Ok(result)
    }
}

impl From<u64> for UnsignedBigInt {
    fn from(value: u64) -> Self {
        UnsignedBigInt {
            bits: BitArray::from_word(value),
        }
    }
}

impl FromStr for UnsignedBigInt {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_decimal_str(s)
    }
}

impl Default for UnsignedBigInt {
    fn default() -> Self {
        Self::zero()
    }
}

impl Display for UnsignedBigInt {
    /// Canonical base-10 rendering: repeated division by ten, least
    /// significant digit out first, no leading zeros, `"0"` for zero.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let ten = Self::ten();
        let mut digits = Vec::new();
        let mut quotient = self.clone();
        loop {
            let (next, remainder) = quotient.div_rem(&ten);
            digits.push(b'0' + remainder.low_u64() as u8);
            if next.is_zero() {
                break;
            }
            quotient = next;
        }
        for &digit in digits.iter().rev() {
            fmt::Write::write_char(f, char::from(digit))?;
        }
        Ok(())
    }
}

impl Debug for UnsignedBigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl PartialEq for UnsignedBigInt {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for UnsignedBigInt {}

impl Ord for UnsignedBigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for UnsignedBigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identities() {
        assert!(UnsignedBigInt::zero().is_zero());
        assert_eq!(UnsignedBigInt::zero().bit_length(), 0);
        assert_eq!(UnsignedBigInt::one().bit_length(), 1);
        assert_eq!(UnsignedBigInt::ten().low_u64(), 10);
        assert_eq!(UnsignedBigInt::default(), UnsignedBigInt::zero());
    }

    #[test]
    fn parity() {
        assert!(!UnsignedBigInt::zero().is_odd());
        assert!(UnsignedBigInt::one().is_odd());
        assert!(UnsignedBigInt::from(12341235u64).is_odd());
        assert!(!UnsignedBigInt::from(12341234u64).is_odd());
    }

    #[test]
    fn compare_ignores_storage_width() {
        // Force one operand to carry trailing zero words.
        let mut wide = UnsignedBigInt::from(7u64);
        wide.bits.set(500, true);
        wide.bits.set(500, false);
        let narrow = UnsignedBigInt::from(7u64);
        assert!(wide.equals(&narrow));
        assert_eq!(wide.cmp(&narrow), Ordering::Equal);
        assert!(!wide.greater_than(&narrow));
        assert!(!wide.smaller_than(&narrow));
    }

    #[test]
    fn split_at_bit_is_division_by_power_of_two() {
        // 0b1101_0110 split at 4: low 0b0110, high 0b1101.
        let value = UnsignedBigInt::from(0b1101_0110u64);
        let (low, high) = value.split_at_bit(4);
        assert_eq!(low.low_u64(), 0b0110);
        assert_eq!(high.low_u64(), 0b1101);

        // Split beyond the significant length leaves the high half empty.
        let (low, high) = value.split_at_bit(64);
        assert_eq!(low.low_u64(), 0b1101_0110);
        assert!(high.is_zero());
    }

    #[test]
    fn to_u64_checks_width() {
        let small = UnsignedBigInt::from(u64::MAX);
        assert_eq!(small.to_u64().unwrap(), u64::MAX);

        let big = small.add(&UnsignedBigInt::one());
        assert_eq!(
            *big.to_u64().unwrap_err().code(),
            ErrorCode::NumberOutOfRange
        );
        // The named narrowing accessor truncates to the low word.
        assert_eq!(big.low_u64(), 0);
    }

    #[test]
    fn sub_unchecked_handles_long_borrow_chains() {
        let a = UnsignedBigInt::from(1u64 << 40);
        let b = UnsignedBigInt::one();
        assert_eq!(a.sub_unchecked(&b).low_u64(), (1u64 << 40) - 1);
    }
}
