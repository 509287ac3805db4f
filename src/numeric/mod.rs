// ============================================================================
// Numeric Module
// Fixed-width multi-word integers built from 32-bit words
// ============================================================================
//
// This module provides:
// - LongUnsigned<N>: N-word unsigned integer with wrapping arithmetic
// - LongSigned<N>: sign-magnitude integer over LongUnsigned<N>
// - NumericError: Error types for the checked, parsing and conversion paths
// - Width aliases for common sizes
//
// Design principles:
// - Stack-only storage ([u32; N]), Copy value semantics
// - Operators wrap; checked_* methods return Result
// - Division by zero yields (0, dividend)
// - Compile-time word count via const generics

mod conversions;
mod errors;
mod long_signed;
mod long_unsigned;
pub(crate) mod radix;
mod word;

#[cfg(test)]
mod proptests;

pub use errors::{NumericError, NumericResult};
pub use long_signed::LongSigned;
pub use long_unsigned::LongUnsigned;
pub use radix::{MAX_RADIX, MIN_RADIX};
pub use word::{DoubleWord, Word, WORD_BITS};

// ============================================================================
// Type Aliases for Common Use Cases
// ============================================================================

/// Unsigned integer of a fixed word count
pub type FixedWidthInteger<const N: usize> = LongUnsigned<N>;

/// Signed integer of a fixed word count
pub type SignedLongInteger<const N: usize> = LongSigned<N>;

/// 64-bit unsigned (2 words)
pub type U64 = LongUnsigned<2>;

/// 128-bit unsigned (4 words)
pub type U128 = LongUnsigned<4>;

/// 256-bit unsigned (8 words)
pub type U256 = LongUnsigned<8>;

/// 512-bit unsigned (16 words)
pub type U512 = LongUnsigned<16>;

/// 128-bit magnitude signed
pub type I128 = LongSigned<4>;

/// 256-bit magnitude signed
pub type I256 = LongSigned<8>;
