// ============================================================================
// Long Unsigned
// Fixed-width multi-word unsigned integer with compile-time word count
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::word::{self, Word, WORD_BITS};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

/// Unsigned integer stored as `N` 32-bit words.
///
/// Word 0 is the least significant. The width never changes after
/// construction: addition, subtraction and multiplication wrap modulo
/// `2^(32 * N)`, and dividing by zero yields `(0, dividend)`. Use the
/// `checked_*` methods when overflow must be reported instead.
///
/// # Type Parameter
/// - `N`: Number of words. `N == 0` is rejected at compile time.
///
/// # Example
/// ```ignore
/// use long_numbers::numeric::LongUnsigned;
///
/// let a: LongUnsigned<2> = "4294967296".parse()?;
/// let b = LongUnsigned::<2>::from(1u32);
/// assert_eq!((a + b).to_string(), "4294967297");
/// ```
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct LongUnsigned<const N: usize>([Word; N]);

impl<const N: usize> LongUnsigned<N> {
    const NON_EMPTY: () = assert!(N > 0, "LongUnsigned needs at least one word");

    /// Total bit capacity.
    pub const BITS: u32 = WORD_BITS * N as u32;

    /// Zero value
    pub const ZERO: Self = Self::from_words([0; N]);

    /// One
    pub const ONE: Self = Self::from_u32(1);

    /// Largest representable value (every bit set)
    pub const MAX: Self = Self::from_words([Word::MAX; N]);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from raw little-endian words.
    #[inline]
    pub const fn from_words(words: [Word; N]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY;
        Self(words)
    }

    /// Create from a single word; all higher words are zero.
    #[inline]
    pub const fn from_u32(value: u32) -> Self {
        let mut words = [0; N];
        words[0] = value;
        Self::from_words(words)
    }

    /// Copy into another width, keeping the low-order words.
    ///
    /// Widening zero-extends; narrowing drops the high words.
    pub fn resize<const M: usize>(&self) -> LongUnsigned<M> {
        let mut words = [0; M];
        let shared = N.min(M);
        words[..shared].copy_from_slice(&self.0[..shared]);
        LongUnsigned::from_words(words)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Raw words, least significant first.
    #[inline]
    pub const fn words(&self) -> &[Word; N] {
        &self.0
    }

    #[inline]
    pub const fn into_words(self) -> [Word; N] {
        self.0
    }

    /// Word count of this width.
    #[inline]
    pub const fn length() -> usize {
        N
    }

    /// Largest representable value for this width.
    #[inline]
    pub const fn max() -> Self {
        Self::MAX
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&w| w == 0)
    }

    /// Index of the highest set bit (LSB = 0), or `None` for zero.
    pub fn major_bit_position(&self) -> Option<usize> {
        self.0.iter().enumerate().rev().find_map(|(i, &w)| {
            word::major_bit(w).map(|bit| i * WORD_BITS as usize + bit as usize)
        })
    }

    /// Number of significant bits; zero has length 0.
    #[inline]
    pub fn bit_length(&self) -> usize {
        self.major_bit_position().map_or(0, |bit| bit + 1)
    }

    /// Read one bit. Bits beyond the width read as zero.
    pub fn bit(&self, index: usize) -> bool {
        let (block, offset) = (index / WORD_BITS as usize, index % WORD_BITS as usize);
        self.0.get(block).is_some_and(|&w| (w >> offset) & 1 == 1)
    }

    /// Write one bit. Writes beyond the width are dropped, like any other
    /// bits that do not fit.
    pub fn set_bit(&mut self, index: usize, value: bool) -> &mut Self {
        let (block, offset) = (index / WORD_BITS as usize, index % WORD_BITS as usize);
        if let Some(w) = self.0.get_mut(block) {
            let mask: Word = 1 << offset;
            if value {
                *w |= mask;
            } else {
                *w &= !mask;
            }
        }
        self
    }

    // ========================================================================
    // Addition / Subtraction
    // ========================================================================

    /// Add, returning the wrapped sum and whether a carry left the top word.
    pub fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        let mut out = [0; N];
        let mut carry = 0;
        for (i, slot) in out.iter_mut().enumerate() {
            let (sum, c) = word::carrying_add(self.0[i], rhs.0[i], carry);
            *slot = sum;
            carry = c;
        }
        (Self(out), carry != 0)
    }

    #[inline]
    pub fn wrapping_add(self, rhs: Self) -> Self {
        self.overflowing_add(rhs).0
    }

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` if the sum needs more than `N` words.
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        match self.overflowing_add(rhs) {
            (sum, false) => Ok(sum),
            (_, true) => Err(NumericError::Overflow),
        }
    }

    /// Subtract, returning the wrapped difference and whether a borrow
    /// left the top word.
    pub fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        let mut out = [0; N];
        let mut borrow = 0;
        for (i, slot) in out.iter_mut().enumerate() {
            let (diff, b) = word::borrowing_sub(self.0[i], rhs.0[i], borrow);
            *slot = diff;
            borrow = b;
        }
        (Self(out), borrow != 0)
    }

    #[inline]
    pub fn wrapping_sub(self, rhs: Self) -> Self {
        self.overflowing_sub(rhs).0
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `Underflow` if `rhs > self`.
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        match self.overflowing_sub(rhs) {
            (diff, false) => Ok(diff),
            (_, true) => Err(NumericError::Underflow),
        }
    }

    /// Add one, wrapping `MAX` to zero.
    pub fn increment(&mut self) -> &mut Self {
        *self = self.wrapping_add(Self::ONE);
        self
    }

    /// Subtract one, wrapping zero to `MAX`.
    pub fn decrement(&mut self) -> &mut Self {
        *self = self.wrapping_sub(Self::ONE);
        self
    }

    // ========================================================================
    // Multiplication
    // ========================================================================

    /// Schoolbook multiply truncated to `N` words.
    ///
    /// Each word pair goes through a u64 intermediate; the flag is set when
    /// any partial product or carry falls beyond the top word.
    pub fn overflowing_mul(self, rhs: Self) -> (Self, bool) {
        let mut out = [0; N];
        let mut overflow = false;
        for i in 0..N {
            let lhs_word = self.0[i];
            if lhs_word == 0 {
                continue;
            }
            let mut carry = 0;
            for j in 0..N - i {
                let (low, high) = word::mul_add(lhs_word, rhs.0[j], out[i + j], carry);
                out[i + j] = low;
                carry = high;
            }
            overflow |= carry != 0 || rhs.0[N - i..].iter().any(|&w| w != 0);
        }
        (Self(out), overflow)
    }

    #[inline]
    pub fn wrapping_mul(self, rhs: Self) -> Self {
        self.overflowing_mul(rhs).0
    }

    /// Checked multiplication.
    ///
    /// # Errors
    /// Returns `Overflow` if the product needs more than `N` words.
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        match self.overflowing_mul(rhs) {
            (product, false) => Ok(product),
            (_, true) => Err(NumericError::Overflow),
        }
    }

    /// `self = self * factor + addend` in place, returning the word that
    /// fell off the top.
    pub(crate) fn mul_word_add(&mut self, factor: Word, addend: Word) -> Word {
        let mut carry = addend;
        for slot in self.0.iter_mut() {
            let (low, high) = word::mul_add(*slot, factor, 0, carry);
            *slot = low;
            carry = high;
        }
        carry
    }

    /// Wrapping exponentiation by squaring.
    pub fn pow(self, mut exp: u32) -> Self {
        let mut base = self;
        let mut acc = Self::ONE;
        while exp > 0 {
            if exp & 1 == 1 {
                acc = acc.wrapping_mul(base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.wrapping_mul(base);
            }
        }
        acc
    }

    // ========================================================================
    // Division
    // ========================================================================

    /// Quotient and remainder by restoring binary long division.
    ///
    /// The divisor is shifted left until its major bit lines up with the
    /// dividend's, then walked back down one bit at a time. At each weight
    /// it is subtracted from the running remainder if it fits, and the
    /// weight's bit is set in the quotient. Alignment keeps the remainder
    /// below twice the shifted divisor, so each weight subtracts at most once.
    ///
    /// Dividing by zero returns `(0, self)`. With the `strict-division`
    /// feature in a debug build it panics instead.
    pub fn divide<const M: usize>(&self, divisor: &LongUnsigned<M>) -> (Self, Self) {
        if divisor.is_zero() {
            return self.divide_by_zero();
        }
        if *divisor > *self {
            return (Self::ZERO, *self);
        }

        // divisor <= self, so it fits in N words.
        let mut shifted: Self = divisor.resize();
        let mut remainder = *self;
        let mut quotient = Self::ZERO;

        let dividend_bit = self.major_bit_position().unwrap_or(0);
        let divisor_bit = shifted.major_bit_position().unwrap_or(0);
        let mut weight = dividend_bit.saturating_sub(divisor_bit);
        shifted.shift_left(weight as u32);

        loop {
            if remainder >= shifted {
                remainder = remainder.wrapping_sub(shifted);
                quotient.set_bit(weight, true);
            }
            if weight == 0 {
                break;
            }
            shifted.shift_right(1);
            weight -= 1;
        }

        (quotient, remainder)
    }

    fn divide_by_zero(&self) -> (Self, Self) {
        if cfg!(all(debug_assertions, feature = "strict-division")) {
            panic!("LongUnsigned<{}>: division by zero", N);
        }
        tracing::debug!(width = N, "division by zero, returning (0, dividend)");
        (Self::ZERO, *self)
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

    // ========================================================================
    // Shifts
    // ========================================================================

    /// Shift left in place. Shifting by `BITS` or more zeroes the value.
    pub fn shift_left(&mut self, count: u32) -> &mut Self {
        if count >= Self::BITS {
            self.0 = [0; N];
            return self;
        }
        let blocks = (count / WORD_BITS) as usize;
        let bits = count % WORD_BITS;
        let mut out = [0; N];
        for i in blocks..N {
            let high = self.0[i - blocks];
            let low = if i > blocks { self.0[i - blocks - 1] } else { 0 };
            out[i] = word::blend_left(high, low, bits);
        }
        self.0 = out;
        self
    }

    /// Shift right in place. Shifting by `BITS` or more zeroes the value.
    pub fn shift_right(&mut self, count: u32) -> &mut Self {
        if count >= Self::BITS {
            self.0 = [0; N];
            return self;
        }
        let blocks = (count / WORD_BITS) as usize;
        let bits = count % WORD_BITS;
        let mut out = [0; N];
        for i in 0..N - blocks {
            let low = self.0[i + blocks];
            let high = self.0.get(i + blocks + 1).copied().unwrap_or(0);
            out[i] = word::blend_right(low, high, bits);
        }
        self.0 = out;
        self
    }
}

/// Compare two little-endian word slices by value, treating missing high
/// words of the shorter slice as zero.
pub(crate) fn compare_words(lhs: &[Word], rhs: &[Word]) -> Ordering {
    let len = lhs.len().max(rhs.len());
    for i in (0..len).rev() {
        let l = lhs.get(i).copied().unwrap_or(0);
        let r = rhs.get(i).copied().unwrap_or(0);
        match l.cmp(&r) {
            Ordering::Equal => continue,
            unequal => return unequal,
        }
    }
    Ordering::Equal
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<const N: usize> Default for LongUnsigned<N> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize, const M: usize> PartialEq<LongUnsigned<M>> for LongUnsigned<N> {
    #[inline]
    fn eq(&self, other: &LongUnsigned<M>) -> bool {
        compare_words(&self.0, &other.0) == Ordering::Equal
    }
}

impl<const N: usize> Eq for LongUnsigned<N> {}

impl<const N: usize, const M: usize> PartialOrd<LongUnsigned<M>> for LongUnsigned<N> {
    #[inline]
    fn partial_cmp(&self, other: &LongUnsigned<M>) -> Option<Ordering> {
        Some(compare_words(&self.0, &other.0))
    }
}

impl<const N: usize> Ord for LongUnsigned<N> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        compare_words(&self.0, &other.0)
    }
}

impl<const N: usize> Hash for LongUnsigned<N> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

// Operators follow the wrapping contract; use checked_* to detect overflow.
macro_rules! impl_binary_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, |$a:ident, $b:ident| $body:expr) => {
        impl<const N: usize> $Op for LongUnsigned<N> {
            type Output = Self;

            #[inline]
            fn $op(self, $b: Self) -> Self::Output {
                let $a = self;
                $body
            }
        }

        impl<const N: usize> $OpAssign for LongUnsigned<N> {
            #[inline]
            fn $op_assign(&mut self, rhs: Self) {
                *self = $Op::$op(*self, rhs);
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, |a, b| a.wrapping_add(b));
impl_binary_op!(Sub, sub, SubAssign, sub_assign, |a, b| a.wrapping_sub(b));
impl_binary_op!(Mul, mul, MulAssign, mul_assign, |a, b| a.wrapping_mul(b));
impl_binary_op!(Div, div, DivAssign, div_assign, |a, b| a.divide(&b).0);
impl_binary_op!(Rem, rem, RemAssign, rem_assign, |a, b| a.divide(&b).1);
impl_binary_op!(BitAnd, bitand, BitAndAssign, bitand_assign, |a, b| {
    LongUnsigned(std::array::from_fn(|i| a.0[i] & b.0[i]))
});
impl_binary_op!(BitOr, bitor, BitOrAssign, bitor_assign, |a, b| {
    LongUnsigned(std::array::from_fn(|i| a.0[i] | b.0[i]))
});
impl_binary_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, |a, b| {
    LongUnsigned(std::array::from_fn(|i| a.0[i] ^ b.0[i]))
});

impl<const N: usize> Not for LongUnsigned<N> {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        Self(self.0.map(|w| !w))
    }
}

impl<const N: usize> Shl<u32> for LongUnsigned<N> {
    type Output = Self;

    #[inline]
    fn shl(mut self, count: u32) -> Self::Output {
        self.shift_left(count);
        self
    }
}

impl<const N: usize> ShlAssign<u32> for LongUnsigned<N> {
    #[inline]
    fn shl_assign(&mut self, count: u32) {
        self.shift_left(count);
    }
}

impl<const N: usize> Shr<u32> for LongUnsigned<N> {
    type Output = Self;

    #[inline]
    fn shr(mut self, count: u32) -> Self::Output {
        self.shift_right(count);
        self
    }
}

impl<const N: usize> ShrAssign<u32> for LongUnsigned<N> {
    #[inline]
    fn shr_assign(&mut self, count: u32) {
        self.shift_right(count);
    }
}

impl<const N: usize> Sum for LongUnsigned<N> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc.wrapping_add(x))
    }
}

impl<const N: usize> Product for LongUnsigned<N> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc.wrapping_mul(x))
    }
}

// ============================================================================
// Tests
// ============================================================================
