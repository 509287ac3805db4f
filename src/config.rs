// ============================================================================
// Number Format Configuration
// Radix, case, prefix and padding for rendering and parsing long integers
// ============================================================================

use crate::numeric::radix::{MAX_RADIX, MIN_RADIX};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a long integer is rendered by `format_with` and read by `parse_with`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NumberFormat {
    /// Digit base, 2..=36
    pub radix: u32,

    /// Use `A-Z` instead of `a-z` for digits above 9
    pub uppercase: bool,

    /// Emit (and accept) `0x` / `0o` / `0b` for radix 16 / 8 / 2
    pub prefix: bool,

    /// Left-pad the digits with zeros up to this many characters.
    /// The sign and prefix are not counted.
    pub min_digits: usize,
}

impl NumberFormat {
    /// Create a format for the given radix with no decoration
    pub fn new(radix: u32) -> Self {
        Self {
            radix,
            uppercase: false,
            prefix: false,
            min_digits: 0,
        }
    }

    /// Builder method: Set the radix
    pub fn with_radix(mut self, radix: u32) -> Self {
        self.radix = radix;
        self
    }

    /// Builder method: Use uppercase digits
    pub fn with_uppercase(mut self, uppercase: bool) -> Self {
        self.uppercase = uppercase;
        self
    }

    /// Builder method: Emit the radix prefix
    pub fn with_prefix(mut self, prefix: bool) -> Self {
        self.prefix = prefix;
        self
    }

    /// Builder method: Zero-pad to a minimum digit count
    pub fn with_min_digits(mut self, min_digits: usize) -> Self {
        self.min_digits = min_digits;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(MIN_RADIX..=MAX_RADIX).contains(&self.radix) {
            return Err(format!(
                "Radix must be between {} and {}, got {}",
                MIN_RADIX, MAX_RADIX, self.radix
            ));
        }

        if self.prefix && self.prefix_str().is_empty() {
            return Err(format!("Radix {} has no prefix", self.radix));
        }

        Ok(())
    }

    /// Prefix for the configured radix, empty when the radix has none.
    pub fn prefix_str(&self) -> &'static str {
        match self.radix {
            2 => "0b",
            8 => "0o",
            16 => "0x",
            _ => "",
        }
    }

    /// Remove the radix prefix (any case) when prefixes are enabled.
    pub(crate) fn strip_prefix<'a>(&self, src: &'a str) -> &'a str {
        let prefix = self.prefix_str();
        if !self.prefix || prefix.is_empty() || src.len() < prefix.len() {
            return src;
        }
        match src.get(..prefix.len()) {
            Some(head) if head.eq_ignore_ascii_case(prefix) => &src[prefix.len()..],
            _ => src,
        }
    }

    /// Apply padding and prefix to rendered digits.
    pub(crate) fn decorate(&self, digits: &str) -> String {
        let prefix = if self.prefix { self.prefix_str() } else { "" };
        let padding = self.min_digits.saturating_sub(digits.len());
        let mut out = String::with_capacity(prefix.len() + padding + digits.len());
        out.push_str(prefix);
        out.extend(std::iter::repeat('0').take(padding));
        out.push_str(digits);
        out
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::decimal()
    }
}

// ============================================================================
// Preset Formats (Factory Methods)
// ============================================================================

impl NumberFormat {
    /// Plain decimal
    pub fn decimal() -> Self {
        Self::new(10)
    }

    /// Lowercase hexadecimal
    pub fn hex() -> Self {
        Self::new(16)
    }

    /// Octal
    pub fn octal() -> Self {
        Self::new(8)
    }

    /// Binary
    pub fn binary() -> Self {
        Self::new(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_creation() {
        let format = NumberFormat::new(16);
        assert_eq!(format.radix, 16);
        assert!(!format.uppercase);
        assert!(!format.prefix);
        assert!(format.validate().is_ok());
        assert_eq!(NumberFormat::default(), NumberFormat::decimal());
    }

    #[test]
    fn test_builder_pattern() {
        let format = NumberFormat::hex()
            .with_uppercase(true)
            .with_prefix(true)
            .with_min_digits(8);

        assert!(format.uppercase);
        assert!(format.prefix);
        assert_eq!(format.min_digits, 8);
        assert_eq!(format.decorate("FF"), "0x000000FF");
    }

    #[test]
    fn test_validation() {
        assert!(NumberFormat::new(1).validate().is_err());
        assert!(NumberFormat::new(37).validate().is_err());
        assert!(NumberFormat::new(36).validate().is_ok());
        assert!(NumberFormat::decimal().with_prefix(true).validate().is_err());
    }

    #[test]
    fn test_strip_prefix() {
        let hex = NumberFormat::hex().with_prefix(true);
        assert_eq!(hex.strip_prefix("0x1f"), "1f");
        assert_eq!(hex.strip_prefix("0X1f"), "1f");
        assert_eq!(hex.strip_prefix("1f"), "1f");
        assert_eq!(hex.strip_prefix("0"), "0");

        let no_prefix = NumberFormat::hex();
        assert_eq!(no_prefix.strip_prefix("0x1f"), "0x1f");
    }

    #[test]
    fn test_preset_formats() {
        assert_eq!(NumberFormat::binary().prefix_str(), "0b");
        assert_eq!(NumberFormat::octal().prefix_str(), "0o");
        assert_eq!(NumberFormat::hex().prefix_str(), "0x");
        assert_eq!(NumberFormat::decimal().prefix_str(), "");
    }
}
