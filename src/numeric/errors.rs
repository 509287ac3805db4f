// ============================================================================
// Numeric Errors
// Error types for fixed-width integer operations
// ============================================================================

use std::fmt;

/// Errors that can occur on the checked, parsing and conversion paths.
///
/// The operator path never produces these: `+`, `-` and `*` wrap, and
/// division by zero yields `(0, dividend)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result does not fit in the target width
    Overflow,
    /// Result would be negative in an unsigned type
    Underflow,
    /// Attempted division by zero
    DivisionByZero,
    /// Input string is empty
    InvalidInput,
    /// Character is not a digit of the active radix
    InvalidDigit,
    /// Radix outside 2..=36
    InvalidRadix,
    /// Conversion would lose a fractional part
    PrecisionLoss,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
            NumericError::Underflow => {
                write!(f, "arithmetic underflow: result below minimum value")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::InvalidInput => write!(f, "invalid input: empty number string"),
            NumericError::InvalidDigit => write!(f, "invalid digit for the given radix"),
            NumericError::InvalidRadix => write!(f, "radix must be in the range 2..=36"),
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would drop a fractional part"
            ),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
