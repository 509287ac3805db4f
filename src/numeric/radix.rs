// ============================================================================
// Radix Conversion
// String parsing and formatting in bases 2..=36
// ============================================================================
//
// Both directions work a word-sized chunk of digits at a time. For radix r
// the chunk holds the largest k digits with r^k fitting one word, so parsing
// is one multiply-add per chunk and formatting is one division per chunk.

use super::errors::{NumericError, NumericResult};
use super::long_unsigned::LongUnsigned;
use super::word::Word;
use crate::config::NumberFormat;
use arrayvec::ArrayVec;
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// Smallest supported radix
pub const MIN_RADIX: u32 = 2;

/// Largest supported radix (digits `0-9a-z`)
pub const MAX_RADIX: u32 = 36;

const LOWER_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const UPPER_DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Digits per chunk and `radix^digits` for the given radix.
pub(crate) const fn chunk_width(radix: u32) -> (usize, Word) {
    let mut digits = 0;
    let mut power: u64 = 1;
    while power * radix as u64 <= Word::MAX as u64 {
        power *= radix as u64;
        digits += 1;
    }
    (digits, power as Word)
}

#[inline]
pub(crate) fn validate_radix(radix: u32) -> NumericResult<()> {
    if (MIN_RADIX..=MAX_RADIX).contains(&radix) {
        Ok(())
    } else {
        Err(NumericError::InvalidRadix)
    }
}

// ============================================================================
// Parsing
// ============================================================================

impl<const N: usize> LongUnsigned<N> {
    /// Parse digits in the given radix, most significant first.
    ///
    /// Surrounding whitespace is ignored. A value wider than `N` words keeps
    /// its low-order words.
    ///
    /// # Errors
    /// - `InvalidRadix` if `radix` is outside 2..=36
    /// - `InvalidInput` if the string is empty
    /// - `InvalidDigit` if a character is not a digit of `radix`
    pub fn from_str_radix(src: &str, radix: u32) -> NumericResult<Self> {
        Self::parse_digits(src.trim(), radix)
    }

    /// Parse according to a [`NumberFormat`], accepting its radix prefix
    /// (`0x`, `0o`, `0b`) when the format enables prefixes.
    ///
    /// # Errors
    /// Same as [`LongUnsigned::from_str_radix`].
    pub fn parse_with(src: &str, format: &NumberFormat) -> NumericResult<Self> {
        Self::parse_formatted(src.trim(), format)
    }

    /// Prefix-aware parse of an already trimmed string. Whitespace after the
    /// prefix is a digit error.
    pub(crate) fn parse_formatted(src: &str, format: &NumberFormat) -> NumericResult<Self> {
        Self::parse_digits(format.strip_prefix(src), format.radix)
    }

    /// Digits only: no trimming, no sign, no prefix.
    pub(crate) fn parse_digits(digits: &str, radix: u32) -> NumericResult<Self> {
        validate_radix(radix)?;
        if digits.is_empty() {
            return Err(NumericError::InvalidInput);
        }

        let (chunk_len, _) = chunk_width(radix);
        let mut value = Self::ZERO;
        let mut truncated = false;

        for chunk in digits.as_bytes().chunks(chunk_len) {
            let mut chunk_value: Word = 0;
            for &byte in chunk {
                let digit = char::from(byte)
                    .to_digit(radix)
                    .ok_or(NumericError::InvalidDigit)?;
                chunk_value = chunk_value * radix + digit;
            }
            let power = radix.pow(chunk.len() as u32);
            truncated |= value.mul_word_add(power, chunk_value) != 0;
        }

        if truncated {
            tracing::trace!(
                width = N,
                digits = digits.len(),
                radix,
                "value wider than the integer, keeping low-order words"
            );
        }

        Ok(value)
    }
}

impl<const N: usize> FromStr for LongUnsigned<N> {
    type Err = NumericError;

    /// Parse a decimal string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(s, 10)
    }
}

// ============================================================================
// Formatting
// ============================================================================

impl<const N: usize> LongUnsigned<N> {
    /// Render in the given radix with lowercase digits. Zero renders as `"0"`.
    ///
    /// # Panics
    /// Panics if `radix` is outside 2..=36.
    pub fn to_string_radix(&self, radix: u32) -> String {
        assert!(
            validate_radix(radix).is_ok(),
            "radix must be in the range 2..=36, got {radix}"
        );
        render(&self.digits(radix, false))
    }

    /// Render according to a [`NumberFormat`].
    ///
    /// # Errors
    /// Returns `InvalidRadix` if the format's radix is outside 2..=36.
    pub fn format_with(&self, format: &NumberFormat) -> NumericResult<String> {
        validate_radix(format.radix)?;
        let digits = self.digits(format.radix, format.uppercase);
        Ok(format.decorate(&render(&digits)))
    }

    /// Digits least significant first.
    ///
    /// Each pass divides by the chunk power; the remainder yields one chunk
    /// of digits, zero-padded unless it is the most significant chunk.
    pub(crate) fn digits(&self, radix: u32, uppercase: bool) -> SmallVec<[u8; 64]> {
        let table = if uppercase { UPPER_DIGITS } else { LOWER_DIGITS };
        let (chunk_len, power) = chunk_width(radix);
        let divisor = LongUnsigned::<1>::from_u32(power);

        let mut out = SmallVec::new();
        let mut rest = *self;
        loop {
            let (quotient, remainder) = rest.divide(&divisor);
            rest = quotient;

            let mut chunk = remainder.words()[0];
            let mut chunk_digits: ArrayVec<u8, 32> = ArrayVec::new();
            while chunk > 0 {
                chunk_digits.push(table[(chunk % radix) as usize]);
                chunk /= radix;
            }

            if rest.is_zero() {
                if chunk_digits.is_empty() && out.is_empty() {
                    out.push(b'0');
                }
                out.extend_from_slice(&chunk_digits);
                return out;
            }

            while chunk_digits.len() < chunk_len {
                chunk_digits.push(b'0');
            }
            out.extend_from_slice(&chunk_digits);
        }
    }
}

fn render(reversed: &[u8]) -> String {
    reversed.iter().rev().map(|&b| char::from(b)).collect()
}

impl<const N: usize> fmt::Display for LongUnsigned<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "", &render(&self.digits(10, false)))
    }
}

impl<const N: usize> fmt::Debug for LongUnsigned<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LongUnsigned<{}>({}, words={:?})", N, self, self.words())
    }
}

macro_rules! impl_radix_fmt {
    ($Trait:ident, $radix:expr, $prefix:expr, $upper:expr) => {
        impl<const N: usize> fmt::$Trait for LongUnsigned<N> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad_integral(true, $prefix, &render(&self.digits($radix, $upper)))
            }
        }
    };
}

impl_radix_fmt!(LowerHex, 16, "0x", false);
impl_radix_fmt!(UpperHex, 16, "0x", true);
impl_radix_fmt!(Octal, 8, "0o", false);
impl_radix_fmt!(Binary, 2, "0b", false);

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    type U1 = LongUnsigned<1>;
    type U2 = LongUnsigned<2>;
    type U8 = LongUnsigned<8>;

    #[test]
    fn test_chunk_width() {
        assert_eq!(chunk_width(2), (31, 1 << 31));
        assert_eq!(chunk_width(10), (9, 1_000_000_000));
        assert_eq!(chunk_width(16), (7, 0x1000_0000));
        assert_eq!(chunk_width(36), (6, 2_176_782_336));
    }

    #[test]
    fn test_parse_decimal() {
        let x: U2 = "4294967297".parse().unwrap();
        assert_eq!(x.words(), &[1, 1]);

        let max: U2 = "18446744073709551615".parse().unwrap();
        assert_eq!(max, U2::MAX);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let x: U2 = "  12345 \n".parse().unwrap();
        assert_eq!(x, U2::from_u32(12345));
    }

    #[test]
    fn test_parse_other_radixes() {
        assert_eq!(U2::from_str_radix("ff", 16), Ok(U2::from_u32(255)));
        assert_eq!(U2::from_str_radix("FF", 16), Ok(U2::from_u32(255)));
        assert_eq!(U2::from_str_radix("101", 2), Ok(U2::from_u32(5)));
        assert_eq!(U2::from_str_radix("777", 8), Ok(U2::from_u32(511)));
        assert_eq!(U2::from_str_radix("zz", 36), Ok(U2::from_u32(1295)));
        assert_eq!(
            U2::from_str_radix("100000000", 16),
            Ok(U2::from_words([0, 1]))
        );
    }

    #[test]
    fn test_parse_leading_zeros() {
        assert_eq!("0000000000000000000042".parse::<U1>(), Ok(U1::from_u32(42)));
        assert_eq!("0".parse::<U1>(), Ok(U1::ZERO));
    }

    #[test]
    fn test_parse_truncates_to_low_words() {
        // 2^64 and 2^64 + 1 in a 64-bit integer
        assert_eq!("18446744073709551616".parse::<U2>(), Ok(U2::ZERO));
        assert_eq!("18446744073709551617".parse::<U2>(), Ok(U2::ONE));
        assert_eq!(U1::from_str_radix("123456789abc", 16), Ok(U1::from_u32(0x5678_9abc)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<U2>(), Err(NumericError::InvalidInput));
        assert_eq!("   ".parse::<U2>(), Err(NumericError::InvalidInput));
        assert_eq!("12a4".parse::<U2>(), Err(NumericError::InvalidDigit));
        assert_eq!("-5".parse::<U2>(), Err(NumericError::InvalidDigit));
        assert_eq!("1 2".parse::<U2>(), Err(NumericError::InvalidDigit));
        assert_eq!("1234567890x".parse::<U2>(), Err(NumericError::InvalidDigit));
        assert_eq!("123456789012345678 9".parse::<U8>(), Err(NumericError::InvalidDigit));
        assert_eq!("١٢".parse::<U2>(), Err(NumericError::InvalidDigit));
        assert_eq!(U2::from_str_radix("12", 37), Err(NumericError::InvalidRadix));
        assert_eq!(U2::from_str_radix("12", 1), Err(NumericError::InvalidRadix));
        assert_eq!(U2::from_str_radix("2", 2), Err(NumericError::InvalidDigit));
    }

    #[test]
    fn test_to_string_radix() {
        let x: U2 = "255".parse().unwrap();
        assert_eq!(x.to_string_radix(16), "ff");
        assert_eq!(x.to_string_radix(2), "11111111");
        assert_eq!(x.to_string_radix(8), "377");
        assert_eq!(x.to_string_radix(10), "255");
        assert_eq!(U2::ZERO.to_string_radix(16), "0");
        assert_eq!(U2::MAX.to_string_radix(16), "ffffffffffffffff");
    }

    #[test]
    fn test_to_string_pads_inner_chunks() {
        let x: U2 = "1000000000000000001".parse().unwrap();
        assert_eq!(x.to_string(), "1000000000000000001");

        let y = U2::from_words([0, 1]);
        assert_eq!(y.to_string_radix(2), format!("1{}", "0".repeat(32)));
    }

    #[test]
    #[should_panic(expected = "radix must be in the range")]
    fn test_to_string_radix_rejects_bad_radix() {
        let _ = U2::ONE.to_string_radix(37);
    }

    #[test]
    fn test_display_and_fmt_traits() {
        let x = U2::from_u32(255);
        assert_eq!(format!("{}", x), "255");
        assert_eq!(format!("{:>6}", x), "   255");
        assert_eq!(format!("{:06}", x), "000255");
        assert_eq!(format!("{:x}", x), "ff");
        assert_eq!(format!("{:#X}", x), "0xFF");
        assert_eq!(format!("{:#b}", x), "0b11111111");
        assert_eq!(format!("{:o}", x), "377");
    }

    #[test]
    fn test_debug() {
        let x = U2::from_words([1, 1]);
        assert_eq!(
            format!("{:?}", x),
            "LongUnsigned<2>(4294967297, words=[1, 1])"
        );
    }

    #[test]
    fn test_large_round_trip() {
        let text = "115792089237316195423570985008687907853269984665640564039457584007913129639935";
        let x: U8 = text.parse().unwrap();
        assert_eq!(x, U8::MAX);
        assert_eq!(x.to_string(), text);
    }

    #[test]
    fn test_format_with_config() {
        let x = U2::from_u32(0xBEEF);
        let hex = NumberFormat::hex().with_uppercase(true).with_prefix(true);
        assert_eq!(x.format_with(&hex), Ok("0xBEEF".to_string()));

        let padded = NumberFormat::binary().with_min_digits(20);
        assert_eq!(
            U2::from_u32(5).format_with(&padded),
            Ok("00000000000000000101".to_string())
        );

        let bad = NumberFormat::decimal().with_radix(99);
        assert_eq!(x.format_with(&bad), Err(NumericError::InvalidRadix));
    }

    #[test]
    fn test_parse_with_config() {
        let hex = NumberFormat::hex().with_prefix(true);
        assert_eq!(U2::parse_with("0xff", &hex), Ok(U2::from_u32(255)));
        assert_eq!(U2::parse_with("0XFF", &hex), Ok(U2::from_u32(255)));
        assert_eq!(U2::parse_with("ff", &hex), Ok(U2::from_u32(255)));

        let plain = NumberFormat::hex();
        assert_eq!(U2::parse_with("0xff", &plain), Err(NumericError::InvalidDigit));
        assert_eq!(U2::parse_with(" 0xff ", &hex), Ok(U2::from_u32(255)));
        assert_eq!(U2::parse_with("0x ff", &hex), Err(NumericError::InvalidDigit));
        assert_eq!(U2::parse_with("0x", &hex), Err(NumericError::InvalidInput));
    }
}
