// ============================================================================
// Long Numbers Library
// Fixed-width multi-word integers with wrapping arithmetic
// ============================================================================

//! # Long Numbers
//!
//! Unsigned and signed integers of a compile-time word count, built from
//! 32-bit words without any big-integer primitive.
//!
//! ## Features
//!
//! - **Fixed width**: `LongUnsigned<N>` is `[u32; N]` on the stack, `Copy`
//! - **Wrapping operators**: `+ - *` wrap modulo `2^(32 * N)`; `checked_*` report overflow
//! - **Restoring long division**: `divide` returns `(quotient, remainder)`;
//!   a zero divisor yields `(0, dividend)`
//! - **Radix conversion**: parse and render in bases 2..=36, `{:x}`/`{:b}`/`{:o}` formatting
//! - **Mixed-width comparison**: `LongUnsigned<2> == LongUnsigned<8>` compares values
//! - **Sign-magnitude signed variant**: `LongSigned<N>`
//!
//! ## Example
//!
//! ```rust
//! use long_numbers::prelude::*;
//!
//! let a: U64 = "4294967296".parse().unwrap();
//! let b = U64::from(1u32);
//! assert_eq!((a + b).to_string(), "4294967297");
//!
//! let (q, r) = LongUnsigned::<1>::from(10u32).divide(&LongUnsigned::<1>::from(3u32));
//! assert_eq!((q.to_string(), r.to_string()), ("3".to_string(), "1".to_string()));
//!
//! let x: U64 = "255".parse().unwrap();
//! assert_eq!(x.to_string_radix(16), "ff");
//! ```

pub mod config;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::config::NumberFormat;
    pub use crate::numeric::{
        FixedWidthInteger, LongSigned, LongUnsigned, NumericError, NumericResult,
        SignedLongInteger, I128, I256, U128, U256, U512, U64,
    };
}
