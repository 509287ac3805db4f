// ============================================================================
// Conversions
// Native integers, rust_decimal and serde for the long integer types
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::long_signed::LongSigned;
use super::long_unsigned::LongUnsigned;
use super::word::{Word, WORD_BITS};
use rust_decimal::Decimal;

/// Words of a u128, in storage order.
const U128_WORDS: usize = (u128::BITS / WORD_BITS) as usize;

fn from_u128_truncating<const N: usize>(value: u128) -> LongUnsigned<N> {
    let mut words = [0; N];
    for (i, slot) in words.iter_mut().take(U128_WORDS).enumerate() {
        *slot = (value >> (WORD_BITS as usize * i)) as Word;
    }
    LongUnsigned::from_words(words)
}

fn to_u128<const N: usize>(value: &LongUnsigned<N>) -> NumericResult<u128> {
    let words = value.words();
    if words.iter().skip(U128_WORDS).any(|&w| w != 0) {
        return Err(NumericError::Overflow);
    }
    Ok(words
        .iter()
        .take(U128_WORDS)
        .enumerate()
        .fold(0u128, |acc, (i, &w)| {
            acc | (u128::from(w) << (WORD_BITS as usize * i))
        }))
}

fn to_i128<const N: usize>(value: &LongSigned<N>) -> NumericResult<i128> {
    if value.is_negative() {
        let magnitude = to_u128(&value.magnitude()).map_err(|_| NumericError::Underflow)?;
        0i128
            .checked_sub_unsigned(magnitude)
            .ok_or(NumericError::Underflow)
    } else {
        let magnitude = to_u128(&value.magnitude())?;
        i128::try_from(magnitude).map_err(|_| NumericError::Overflow)
    }
}

/// Magnitude that must fit `N` words, reported as `Overflow` otherwise.
fn fitting_magnitude<const N: usize>(magnitude: u128) -> NumericResult<LongUnsigned<N>> {
    let bits = LongUnsigned::<N>::BITS;
    if bits < u128::BITS && magnitude >> bits != 0 {
        return Err(NumericError::Overflow);
    }
    Ok(from_u128_truncating(magnitude))
}

// ============================================================================
// Native Integers -> LongUnsigned
// ============================================================================

// Values wider than the integer keep their low-order words.
macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl<const N: usize> From<$t> for LongUnsigned<N> {
                #[inline]
                fn from(value: $t) -> Self {
                    from_u128_truncating(u128::from(value))
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, u128);

macro_rules! impl_try_from_signed {
    ($($t:ty),*) => {
        $(
            impl<const N: usize> TryFrom<$t> for LongUnsigned<N> {
                type Error = NumericError;

                /// Negative input is rejected with `Underflow`.
                fn try_from(value: $t) -> NumericResult<Self> {
                    if value < 0 {
                        Err(NumericError::Underflow)
                    } else {
                        Ok(Self::from(value.unsigned_abs()))
                    }
                }
            }
        )*
    };
}

impl_try_from_signed!(i8, i16, i32, i64, i128);

// ============================================================================
// LongUnsigned -> Native Integers
// ============================================================================

// Out-of-range values, including above a signed maximum, are `Overflow`.
macro_rules! impl_try_into_native {
    ($($t:ty),*) => {
        $(
            impl<const N: usize> TryFrom<LongUnsigned<N>> for $t {
                type Error = NumericError;

                fn try_from(value: LongUnsigned<N>) -> NumericResult<Self> {
                    let wide = to_u128(&value)?;
                    <$t>::try_from(wide).map_err(|_| NumericError::Overflow)
                }
            }
        )*
    };
}

impl_try_into_native!(u8, u16, u32, u64, u128);
impl_try_into_native!(i8, i16, i32, i64, i128);

// ============================================================================
// Signed Conversions
// ============================================================================

macro_rules! impl_signed_from {
    ($($t:ty),*) => {
        $(
            impl<const N: usize> From<$t> for LongSigned<N> {
                #[inline]
                fn from(value: $t) -> Self {
                    Self::from_parts(LongUnsigned::from(value.unsigned_abs()), value < 0)
                }
            }
        )*
    };
}

impl_signed_from!(i8, i16, i32, i64, i128);

impl<const N: usize> From<LongUnsigned<N>> for LongSigned<N> {
    #[inline]
    fn from(magnitude: LongUnsigned<N>) -> Self {
        Self::from_parts(magnitude, false)
    }
}

impl<const N: usize> TryFrom<LongSigned<N>> for i64 {
    type Error = NumericError;

    fn try_from(value: LongSigned<N>) -> NumericResult<Self> {
        let wide = to_i128(&value)?;
        i64::try_from(wide).map_err(|_| {
            if value.is_negative() {
                NumericError::Underflow
            } else {
                NumericError::Overflow
            }
        })
    }
}

impl<const N: usize> TryFrom<LongSigned<N>> for i128 {
    type Error = NumericError;

    fn try_from(value: LongSigned<N>) -> NumericResult<Self> {
        to_i128(&value)
    }
}

impl<const N: usize> TryFrom<LongSigned<N>> for LongUnsigned<N> {
    type Error = NumericError;

    fn try_from(value: LongSigned<N>) -> NumericResult<Self> {
        if value.is_negative() {
            Err(NumericError::Underflow)
        } else {
            Ok(value.magnitude())
        }
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl<const N: usize> LongUnsigned<N> {
    /// Convert from an integral, non-negative `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// - `PrecisionLoss` if the decimal has a fractional part
    /// - `Underflow` if it is negative
    /// - `Overflow` if it needs more than `N` words
    pub fn from_decimal(d: Decimal) -> NumericResult<Self> {
        let normalized = d.normalize();
        if normalized.scale() != 0 {
            return Err(NumericError::PrecisionLoss);
        }
        if normalized.is_sign_negative() && !normalized.is_zero() {
            return Err(NumericError::Underflow);
        }
        fitting_magnitude(normalized.mantissa().unsigned_abs())
    }

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// Returns `Overflow` if the value needs more than 96 bits.
    pub fn to_decimal(self) -> NumericResult<Decimal> {
        let wide = i128::try_from(to_u128(&self)?).map_err(|_| NumericError::Overflow)?;
        Decimal::try_from_i128_with_scale(wide, 0).map_err(|_| NumericError::Overflow)
    }
}

impl<const N: usize> LongSigned<N> {
    /// Convert from an integral `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// - `PrecisionLoss` if the decimal has a fractional part
    /// - `Overflow` if the magnitude needs more than `N` words
    pub fn from_decimal(d: Decimal) -> NumericResult<Self> {
        let normalized = d.normalize();
        if normalized.scale() != 0 {
            return Err(NumericError::PrecisionLoss);
        }
        let mantissa = normalized.mantissa();
        let magnitude = fitting_magnitude(mantissa.unsigned_abs())?;
        Ok(Self::from_parts(magnitude, mantissa < 0))
    }

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the magnitude needs more than 96 bits.
    pub fn to_decimal(self) -> NumericResult<Decimal> {
        let wide = to_i128(&self)?;
        Decimal::try_from_i128_with_scale(wide, 0).map_err(|_| {
            if self.is_negative() {
                NumericError::Underflow
            } else {
                NumericError::Overflow
            }
        })
    }
}

// ============================================================================
// Serde (decimal strings)
// ============================================================================

#[cfg(feature = "serde")]
mod serde_impls {
    use super::{LongSigned, LongUnsigned};
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    impl<const N: usize> Serialize for LongUnsigned<N> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de, const N: usize> Deserialize<'de> for LongUnsigned<N> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let text = String::deserialize(deserializer)?;
            text.parse().map_err(de::Error::custom)
        }
    }

    impl<const N: usize> Serialize for LongSigned<N> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de, const N: usize> Deserialize<'de> for LongSigned<N> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let text = String::deserialize(deserializer)?;
            text.parse().map_err(de::Error::custom)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
