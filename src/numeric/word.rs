// ============================================================================
// Word Primitives
// Single-word building blocks with double-width intermediates
// ============================================================================
//
// Every multi-word operation is a loop over these helpers. The double-width
// intermediate (u64 for u32 words) carries the overflow of one word into the
// next.

/// Storage unit of a multi-word integer.
pub type Word = u32;

/// Intermediate wide enough for a word product plus two carries.
pub type DoubleWord = u64;

/// Bits in one word.
pub const WORD_BITS: u32 = Word::BITS;

/// `a + b + carry`, returning `(sum, carry_out)` with `carry_out` in `{0, 1}`.
#[inline]
pub const fn carrying_add(a: Word, b: Word, carry: Word) -> (Word, Word) {
    let wide = a as DoubleWord + b as DoubleWord + carry as DoubleWord;
    (wide as Word, (wide >> WORD_BITS) as Word)
}

/// `a - b - borrow`, returning `(difference, borrow_out)` with `borrow_out` in `{0, 1}`.
///
/// The subtraction runs in the double-width type; a borrow shows up as the
/// top bit of the wrapped result.
#[inline]
pub const fn borrowing_sub(a: Word, b: Word, borrow: Word) -> (Word, Word) {
    let wide = (a as DoubleWord)
        .wrapping_sub(b as DoubleWord)
        .wrapping_sub(borrow as DoubleWord);
    (wide as Word, (wide >> (2 * WORD_BITS - 1)) as Word)
}

/// `a * b + addend + carry`, returning `(low, high)`.
///
/// Cannot overflow: `(2^32 - 1)^2 + 2 * (2^32 - 1) == 2^64 - 1`.
#[inline]
pub const fn mul_add(a: Word, b: Word, addend: Word, carry: Word) -> (Word, Word) {
    let wide = (a as DoubleWord) * (b as DoubleWord) + addend as DoubleWord + carry as DoubleWord;
    (wide as Word, (wide >> WORD_BITS) as Word)
}

/// One output word of a left shift by `bits` (< WORD_BITS).
///
/// `high` is the source word landing in this slot, `low` its lower neighbour
/// whose top bits spill in. A zero shift must not touch `low`: shifting a
/// u32 by 32 is not defined.
#[inline]
pub const fn blend_left(high: Word, low: Word, bits: u32) -> Word {
    if bits == 0 {
        high
    } else {
        (high << bits) | (low >> (WORD_BITS - bits))
    }
}

/// One output word of a right shift by `bits` (< WORD_BITS).
#[inline]
pub const fn blend_right(low: Word, high: Word, bits: u32) -> Word {
    if bits == 0 {
        low
    } else {
        (low >> bits) | (high << (WORD_BITS - bits))
    }
}

/// Index of the highest set bit of a single word.
#[inline]
pub const fn major_bit(word: Word) -> Option<u32> {
    if word == 0 {
        None
    } else {
        Some(WORD_BITS - 1 - word.leading_zeros())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carrying_add() {
        assert_eq!(carrying_add(1, 2, 0), (3, 0));
        assert_eq!(carrying_add(u32::MAX, 1, 0), (0, 1));
        assert_eq!(carrying_add(u32::MAX, u32::MAX, 1), (u32::MAX, 1));
    }

    #[test]
    fn test_borrowing_sub() {
        assert_eq!(borrowing_sub(5, 3, 0), (2, 0));
        assert_eq!(borrowing_sub(0, 1, 0), (u32::MAX, 1));
        assert_eq!(borrowing_sub(0, 0, 1), (u32::MAX, 1));
        assert_eq!(borrowing_sub(0, u32::MAX, 1), (0, 1));
    }

    #[test]
    fn test_mul_add_upper_bound() {
        let (lo, hi) = mul_add(u32::MAX, u32::MAX, u32::MAX, u32::MAX);
        assert_eq!((lo, hi), (u32::MAX, u32::MAX));
    }

    #[test]
    fn test_blend() {
        assert_eq!(blend_left(0x0000_0001, 0x8000_0000, 1), 0x0000_0003);
        assert_eq!(blend_left(0x1234_5678, 0xFFFF_FFFF, 0), 0x1234_5678);
        assert_eq!(blend_right(0x0000_0002, 0x0000_0001, 1), 0x8000_0001);
        assert_eq!(blend_right(0x1234_5678, 0xFFFF_FFFF, 0), 0x1234_5678);
    }

    #[test]
    fn test_major_bit() {
        assert_eq!(major_bit(0), None);
        assert_eq!(major_bit(1), Some(0));
        assert_eq!(major_bit(0x8000_0000), Some(31));
    }
}
