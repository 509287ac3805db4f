// ============================================================================
// Property Tests
// Algebraic laws and native cross-checks for the long integer types
// ============================================================================

use super::{LongSigned, LongUnsigned};
use proptest::prelude::*;

type U4 = LongUnsigned<4>;
type I2 = LongSigned<2>;

fn any_u4() -> impl Strategy<Value = U4> {
    any::<[u32; 4]>().prop_map(U4::from_words)
}

/// Mix of full-width, single-word and sparse values so division and
/// comparison see very different magnitudes.
fn varied_u4() -> impl Strategy<Value = U4> {
    prop_oneof![
        any_u4(),
        any::<u32>().prop_map(U4::from_u32),
        any::<u64>().prop_map(U4::from),
        (any::<u32>(), 0u32..128).prop_map(|(w, s)| U4::from_u32(w) << s),
    ]
}

fn nonzero_u4() -> impl Strategy<Value = U4> {
    varied_u4().prop_filter("divisor must be non-zero", |d| !d.is_zero())
}

proptest! {
    #[test]
    fn add_is_commutative(a in any_u4(), b in any_u4()) {
        prop_assert_eq!(a + b, b + a);
    }

    #[test]
    fn add_is_associative(a in any_u4(), b in any_u4(), c in any_u4()) {
        prop_assert_eq!((a + b) + c, a + (b + c));
    }

    #[test]
    fn mul_is_commutative(a in any_u4(), b in any_u4()) {
        prop_assert_eq!(a * b, b * a);
    }

    #[test]
    fn sub_inverts_add_without_wraparound(a in any::<u64>(), b in any::<u64>()) {
        let (a, b) = (U4::from(a), U4::from(b));
        prop_assert_eq!((a + b) - b, a);
        prop_assert_eq!((a + b).checked_sub(b), Ok(a));
    }

    #[test]
    fn wrapping_sub_inverts_wrapping_add(a in any_u4(), b in any_u4()) {
        prop_assert_eq!((a + b) - b, a);
    }

    #[test]
    fn division_identity(a in varied_u4(), d in nonzero_u4()) {
        let (q, r) = a.divide(&d);
        prop_assert!(r < d);
        prop_assert_eq!(q * d + r, a);
        prop_assert_eq!(a / d, q);
        prop_assert_eq!(a % d, r);
    }

    #[cfg(not(all(debug_assertions, feature = "strict-division")))]
    #[test]
    fn division_by_zero_convention(a in any_u4()) {
        prop_assert_eq!(a.divide(&U4::ZERO), (U4::ZERO, a));
    }

    #[test]
    fn string_round_trip(
        v in varied_u4(),
        radix in prop::sample::select(vec![2u32, 8, 10, 16])
    ) {
        let text = v.to_string_radix(radix);
        prop_assert_eq!(U4::from_str_radix(&text, radix), Ok(v));
    }

    #[test]
    fn shift_round_trip_without_loss(v in varied_u4(), k in 0u32..128) {
        prop_assume!(v.bit_length() + k as usize <= 128);
        prop_assert_eq!((v << k) >> k, v);
    }

    #[test]
    fn comparison_is_total(a in varied_u4(), b in varied_u4()) {
        let outcomes = [a < b, a == b, a > b];
        prop_assert_eq!(outcomes.iter().filter(|&&x| x).count(), 1);
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
    }

    #[test]
    fn major_bit_matches_native(x in any::<u128>()) {
        let expected = x.checked_ilog2().map(|bit| bit as usize);
        prop_assert_eq!(U4::from(x).major_bit_position(), expected);
    }

    #[test]
    fn arithmetic_matches_u128(a in any::<u128>(), b in any::<u128>()) {
        let (x, y) = (U4::from(a), U4::from(b));
        prop_assert_eq!(x + y, U4::from(a.wrapping_add(b)));
        prop_assert_eq!(x - y, U4::from(a.wrapping_sub(b)));
        prop_assert_eq!(x * y, U4::from(a.wrapping_mul(b)));
        prop_assert_eq!(x.overflowing_mul(y).1, a.overflowing_mul(b).1);
        prop_assert_eq!(x.partial_cmp(&y), Some(a.cmp(&b)));
        if b != 0 {
            prop_assert_eq!(x / y, U4::from(a / b));
            prop_assert_eq!(x % y, U4::from(a % b));
        }
    }

    #[test]
    fn shifts_match_u128(a in any::<u128>(), k in 0u32..128) {
        prop_assert_eq!(U4::from(a) << k, U4::from(a << k));
        prop_assert_eq!(U4::from(a) >> k, U4::from(a >> k));
    }

    #[test]
    fn formatting_matches_u128(a in any::<u128>()) {
        let x = U4::from(a);
        prop_assert_eq!(x.to_string(), a.to_string());
        prop_assert_eq!(format!("{:x}", x), format!("{:x}", a));
        prop_assert_eq!(format!("{:#b}", x), format!("{:#b}", a));
        prop_assert_eq!(format!("{:o}", x), format!("{:o}", a));
    }

    #[test]
    fn signed_arithmetic_matches_i64(a in any::<i32>(), b in any::<i32>()) {
        let (x, y) = (I2::from(a), I2::from(b));
        let (a, b) = (i64::from(a), i64::from(b));
        prop_assert_eq!(x + y, I2::from(a + b));
        prop_assert_eq!(x - y, I2::from(a - b));
        prop_assert_eq!(x * y, I2::from(a * b));
        prop_assert_eq!(x.cmp(&y), a.cmp(&b));
        if b != 0 {
            prop_assert_eq!(x / y, I2::from(a / b));
            prop_assert_eq!(x % y, I2::from(a % b));
        }
    }

    #[test]
    fn signed_string_round_trip(a in any::<i64>()) {
        let x = I2::from(a);
        prop_assert_eq!(x.to_string(), a.to_string());
        prop_assert_eq!(x.to_string().parse::<I2>(), Ok(x));
    }
}

