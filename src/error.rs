//! When an arithmetic operation or a conversion goes wrong.

use core::fmt::{self, Debug, Display};
use core::result;
use std::error;

/// This type represents all possible errors that can occur when
/// constructing, converting, or operating on an [`UnsignedBigInt`].
///
/// Every failure is a deterministic function of the operation's inputs and
/// is surfaced synchronously; nothing is retried, logged, or swallowed.
///
/// [`UnsignedBigInt`]: crate::UnsignedBigInt
pub struct Error {
    code: ErrorCode,
}

/// Alias for a `Result` with the error type `bignum::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// Specifies the cause of this error.
    pub fn code(&self) -> &ErrorCode {
        &self.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::InvalidInput` - a malformed decimal string
    /// - `Category::Precondition` - an operation called outside its domain,
    ///   such as subtraction that would underflow
    /// - `Category::DivisionByZero` - a zero divisor or modulus
    /// - `Category::Narrowing` - a checked conversion to a machine integer
    ///   that does not fit
    pub fn classify(&self) -> Category {
        match self.code {
            ErrorCode::InvalidDigit(_) | ErrorCode::EmptyDecimalString => Category::InvalidInput,
            ErrorCode::SubtractionUnderflow => Category::Precondition,
            ErrorCode::DivisionByZero => Category::DivisionByZero,
            ErrorCode::NumberOutOfRange => Category::Narrowing,
        }
    }

    #[cold]
    pub(crate) fn new(code: ErrorCode) -> Self {
        Error { code }
    }
}

/// Categorizes the cause of a `bignum::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The error was caused by input that is not a valid decimal number.
    InvalidInput,

    /// The error was caused by calling an operation outside its documented
    /// domain.
    Precondition,

    /// The error was caused by a zero divisor or modulus.
    DivisionByZero,

    /// The error was caused by narrowing a value to a machine integer it
    /// does not fit in.
    Narrowing,
}

/// This type describes all possible errors that can occur when operating on
/// an unsigned big integer.
#[derive(Clone, PartialEq, Eq)]
pub enum ErrorCode {
    /// Decimal string contains a character that is not an ASCII digit.
    InvalidDigit(char),

    /// Decimal string is empty.
    EmptyDecimalString,

    /// Subtraction with a minuend smaller than the subtrahend; the result
    /// would be negative.
    SubtractionUnderflow,

    /// Division or reduction by zero.
    DivisionByZero,

    /// Value is bigger than the maximum value of a 64-bit integer.
    NumberOutOfRange,
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::InvalidDigit(ch) => {
                f.write_fmt(format_args!("invalid digit `{}` in decimal string", ch))
            }
            ErrorCode::EmptyDecimalString => f.write_str("empty decimal string"),
            ErrorCode::SubtractionUnderflow => {
                f.write_str("subtraction underflow: minuend is smaller than subtrahend")
            }
            ErrorCode::DivisionByZero => f.write_str("division by zero"),
            ErrorCode::NumberOutOfRange => f.write_str("number out of range of u64"),
        }
    }
}

impl Debug for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::InvalidDigit(ch) => f.debug_tuple("InvalidDigit").field(ch).finish(),
            ErrorCode::EmptyDecimalString => f.write_str("EmptyDecimalString"),
            ErrorCode::SubtractionUnderflow => f.write_str("SubtractionUnderflow"),
            ErrorCode::DivisionByZero => f.write_str("DivisionByZero"),
            ErrorCode::NumberOutOfRange => f.write_str("NumberOutOfRange"),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.code, f)
    }
}

// Remove a layer of verbosity from the debug representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error({:?})", self.code)
    }
}

impl error::Error for Error {}
