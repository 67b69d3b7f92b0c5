//! Error types for the value type and its host surface

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Why a string failed to decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringFault {
    /// Zero or more than 64 characters after the sign
    BadLength,
    /// Only a sign, no digits
    NoDigits,
    /// A character that is not a digit of the requested base
    BadDigit,
    /// The magnitude does not fit in 64 bits
    Overflow,
}

/// Kinds of errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required operand was not supplied
    MissingOperand,
    /// An operand has the wrong kind, or a number is not an integer
    InvalidOperandType,
    /// Division or modulo by zero
    DivideByZero,
    /// A conversion would cross the 53-bit safe integer boundary
    UnsafeConversion,
    /// Unsupported radix for string encoding or decoding
    InvalidBase,
    /// A string could not be decoded
    InvalidString(StringFault),
    /// The host surface has no operation by that name
    UnknownMethod,
}

/// Error raised by an operation on a 64-bit value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Error {
            kind,
            message: message.into(),
        }
    }

    pub fn missing_operand(method: &str, expected: usize) -> Self {
        Error::new(
            ErrorKind::MissingOperand,
            format!("{method} requires {expected} argument(s)"),
        )
    }

    pub fn invalid_type(name: &str, expected: &str) -> Self {
        Error::new(
            ErrorKind::InvalidOperandType,
            format!("`{name}` must be a(n) {expected}"),
        )
    }

    pub fn divide_by_zero() -> Self {
        Error::new(ErrorKind::DivideByZero, "cannot divide by zero")
    }

    pub fn unsafe_conversion() -> Self {
        Error::new(ErrorKind::UnsafeConversion, "number exceeds 53 bits")
    }

    pub fn invalid_base(base: u32) -> Self {
        Error::new(
            ErrorKind::InvalidBase,
            format!("base must be one of 2, 8, 10 or 16, got {base}"),
        )
    }

    pub fn invalid_string(fault: StringFault) -> Self {
        let detail = match fault {
            StringFault::BadLength => "bad length",
            StringFault::NoDigits => "no digits",
            StringFault::BadDigit => "parse error",
            StringFault::Overflow => "overflow",
        };
        Error::new(
            ErrorKind::InvalidString(fault),
            format!("invalid string ({detail})"),
        )
    }

    pub fn unknown_method(name: &str) -> Self {
        Error::new(ErrorKind::UnknownMethod, format!("no such method: {name}"))
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
