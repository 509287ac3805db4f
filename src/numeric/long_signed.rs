// ============================================================================
// Long Signed
// Sign-magnitude integer over a fixed-width unsigned magnitude
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::long_unsigned::LongUnsigned;
use crate::config::NumberFormat;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};
use std::str::FromStr;

/// Signed integer stored as a `LongUnsigned<N>` magnitude plus a sign flag.
///
/// The range is symmetric: `-MAX..=MAX`. A zero magnitude is always
/// non-negative. Magnitude overflow wraps the same way the unsigned type
/// does; the sign is resolved before the magnitude is touched.
#[derive(Clone, Copy)]
pub struct LongSigned<const N: usize> {
    magnitude: LongUnsigned<N>,
    negative: bool,
}

impl<const N: usize> LongSigned<N> {
    /// Zero value
    pub const ZERO: Self = Self {
        magnitude: LongUnsigned::ZERO,
        negative: false,
    };

    /// One
    pub const ONE: Self = Self {
        magnitude: LongUnsigned::ONE,
        negative: false,
    };

    /// Largest representable value
    pub const MAX: Self = Self {
        magnitude: LongUnsigned::MAX,
        negative: false,
    };

    /// Smallest representable value
    pub const MIN: Self = Self {
        magnitude: LongUnsigned::MAX,
        negative: true,
    };

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a magnitude and a sign. A zero magnitude drops the sign.
    #[inline]
    pub fn from_parts(magnitude: LongUnsigned<N>, negative: bool) -> Self {
        Self {
            magnitude,
            negative: negative && !magnitude.is_zero(),
        }
    }

    /// Parse an optionally signed number in the given radix.
    ///
    /// Surrounding whitespace is ignored; whitespace after the sign is not.
    ///
    /// # Errors
    /// Same as [`LongUnsigned::from_str_radix`]; a lone sign is `InvalidInput`.
    pub fn from_str_radix(src: &str, radix: u32) -> NumericResult<Self> {
        let (negative, digits) = split_sign(src.trim());
        let magnitude = LongUnsigned::parse_digits(digits, radix)?;
        Ok(Self::from_parts(magnitude, negative))
    }

    /// Parse according to a [`NumberFormat`]; the sign goes before the prefix.
    ///
    /// # Errors
    /// Same as [`LongSigned::from_str_radix`].
    pub fn parse_with(src: &str, format: &NumberFormat) -> NumericResult<Self> {
        let (negative, digits) = split_sign(src.trim());
        let magnitude = LongUnsigned::parse_formatted(digits, format)?;
        Ok(Self::from_parts(magnitude, negative))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn magnitude(&self) -> LongUnsigned<N> {
        self.magnitude
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.negative && !self.magnitude.is_zero()
    }

    /// -1, 0 or 1.
    pub fn signum(&self) -> i32 {
        if self.negative {
            -1
        } else if self.magnitude.is_zero() {
            0
        } else {
            1
        }
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self::from_parts(self.magnitude, false)
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Signed addition. Equal signs add magnitudes (wrapping); opposite
    /// signs subtract the smaller magnitude from the larger and keep the
    /// larger one's sign.
    pub fn wrapping_add(self, rhs: Self) -> Self {
        if self.negative == rhs.negative {
            Self::from_parts(self.magnitude.wrapping_add(rhs.magnitude), self.negative)
        } else if self.magnitude >= rhs.magnitude {
            Self::from_parts(self.magnitude.wrapping_sub(rhs.magnitude), self.negative)
        } else {
            Self::from_parts(rhs.magnitude.wrapping_sub(self.magnitude), rhs.negative)
        }
    }

    #[inline]
    pub fn wrapping_sub(self, rhs: Self) -> Self {
        self.wrapping_add(-rhs)
    }

    #[inline]
    pub fn wrapping_mul(self, rhs: Self) -> Self {
        Self::from_parts(
            self.magnitude.wrapping_mul(rhs.magnitude),
            self.negative != rhs.negative,
        )
    }

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` above `MAX` or `Underflow` below `MIN`.
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        if self.negative != rhs.negative {
            return Ok(self.wrapping_add(rhs));
        }
        match self.magnitude.checked_add(rhs.magnitude) {
            Ok(magnitude) => Ok(Self::from_parts(magnitude, self.negative)),
            Err(_) if self.negative => Err(NumericError::Underflow),
            Err(err) => Err(err),
        }
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `Overflow` above `MAX` or `Underflow` below `MIN`.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        self.checked_add(-rhs)
    }

    /// Checked multiplication.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` when the magnitude does not fit.
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        let negative = self.negative != rhs.negative;
        match self.magnitude.checked_mul(rhs.magnitude) {
            Ok(magnitude) => Ok(Self::from_parts(magnitude, negative)),
            Err(_) if negative => Err(NumericError::Underflow),
            Err(err) => Err(err),
        }
    }

    /// Quotient truncated toward zero and a remainder carrying the
    /// dividend's sign, so `q * divisor + r == self`.
    ///
    /// Dividing by zero returns `(0, self)`.
    pub fn divide(&self, divisor: &Self) -> (Self, Self) {
        let (quotient, remainder) = self.magnitude.divide(&divisor.magnitude);
        (
            Self::from_parts(quotient, self.negative != divisor.negative),
            Self::from_parts(remainder, self.negative),
        )
    }

    /// Checked division.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        if rhs.is_zero() {
            Err(NumericError::DivisionByZero)
        } else {
            Ok(self.divide(&rhs).0)
        }
    }

    /// Checked remainder.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    pub fn checked_rem(self, rhs: Self) -> NumericResult<Self> {
        if rhs.is_zero() {
            Err(NumericError::DivisionByZero)
        } else {
            Ok(self.divide(&rhs).1)
        }
    }

    /// Wrapping exponentiation; odd powers keep the sign.
    pub fn pow(self, exp: u32) -> Self {
        Self::from_parts(self.magnitude.pow(exp), self.negative && exp % 2 == 1)
    }

    // ========================================================================
    // Formatting
    // ========================================================================

    /// Render in the given radix, with a leading `-` for negatives.
    ///
    /// # Panics
    /// Panics if `radix` is outside 2..=36.
    pub fn to_string_radix(&self, radix: u32) -> String {
        let digits = self.magnitude.to_string_radix(radix);
        if self.negative {
            format!("-{digits}")
        } else {
            digits
        }
    }

    /// Render according to a [`NumberFormat`]; the sign goes before the prefix.
    ///
    /// # Errors
    /// Returns `InvalidRadix` if the format's radix is outside 2..=36.
    pub fn format_with(&self, format: &NumberFormat) -> NumericResult<String> {
        let body = self.magnitude.format_with(format)?;
        Ok(if self.negative { format!("-{body}") } else { body })
    }
}

fn split_sign(src: &str) -> (bool, &str) {
    if let Some(rest) = src.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = src.strip_prefix('+') {
        (false, rest)
    } else {
        (false, src)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<const N: usize> Default for LongSigned<N> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> PartialEq for LongSigned<N> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<const N: usize> Eq for LongSigned<N> {}

impl<const N: usize> PartialOrd for LongSigned<N> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const N: usize> Ord for LongSigned<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.is_zero() && other.is_zero() {
            return Ordering::Equal;
        }
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.magnitude.cmp(&other.magnitude),
            (true, true) => other.magnitude.cmp(&self.magnitude),
        }
    }
}

impl<const N: usize> Hash for LongSigned<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.negative.hash(state);
        self.magnitude.hash(state);
    }
}

impl<const N: usize> Neg for LongSigned<N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::from_parts(self.magnitude, !self.negative)
    }
}

macro_rules! impl_signed_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, |$a:ident, $b:ident| $body:expr) => {
        impl<const N: usize> $Op for LongSigned<N> {
            type Output = Self;

            #[inline]
            fn $op(self, $b: Self) -> Self::Output {
                let $a = self;
                $body
            }
        }

        impl<const N: usize> $OpAssign for LongSigned<N> {
            #[inline]
            fn $op_assign(&mut self, rhs: Self) {
                *self = $Op::$op(*self, rhs);
            }
        }
    };
}

impl_signed_op!(Add, add, AddAssign, add_assign, |a, b| a.wrapping_add(b));
impl_signed_op!(Sub, sub, SubAssign, sub_assign, |a, b| a.wrapping_sub(b));
impl_signed_op!(Mul, mul, MulAssign, mul_assign, |a, b| a.wrapping_mul(b));
impl_signed_op!(Div, div, DivAssign, div_assign, |a, b| a.divide(&b).0);
impl_signed_op!(Rem, rem, RemAssign, rem_assign, |a, b| a.divide(&b).1);

impl<const N: usize> FromStr for LongSigned<N> {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(s, 10)
    }
}

impl<const N: usize> fmt::Display for LongSigned<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "", &self.magnitude.to_string_radix(10))
    }
}

impl<const N: usize> fmt::Debug for LongSigned<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LongSigned<{}>({})", N, self)
    }
}

// ============================================================================
// Tests
// ============================================================================
