//! Randomised property tests for `U256` arithmetic, rotation and hex text.

use std::env;

use proptest::prelude::*;

use uint256::primitives::U256;

/// Number of cases when `PROPTEST_CASES` is unset.
const DEFAULT_U256_PROPTEST_CASES: u32 = 512;

fn any_u256() -> impl Strategy<Value = U256> {
    prop_oneof![
        any::<[u32; 8]>().prop_map(U256::from_words),
        // sparse values exercise the leading-zero and carry edge cases
        (any::<u32>(), 0usize..8)
            .prop_map(|(w, i)| U256::from_u32(w).rotate_left(32 * i as u32)),
        Just(U256::ZERO),
        Just(U256::MAX),
    ]
}

proptest! {
    #![proptest_config(
        proptest::test_runner::Config::with_cases(env::var("PROPTEST_CASES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_U256_PROPTEST_CASES))
    )]

    #[test]
    fn hex_roundtrip(v in any_u256()) {
        prop_assert_eq!(U256::from_hex(&v.to_hex()), Ok(v));
    }

    /// Formatting agrees with the native minimal hex of values that fit in 128 bits.
    #[test]
    fn hex_matches_native_u128(x in any::<u128>()) {
        prop_assert_eq!(U256::from(x).to_hex(), format!("{x:x}"));
        prop_assert_eq!(format!("{:X}", U256::from(x)), format!("{x:X}"));
        prop_assert_eq!(U256::from_hex(&format!("{x:x}")), Ok(U256::from(x)));
    }

    #[test]
    fn hex_leading_zeros_are_ignored(v in any_u256(), pad in 0usize..80) {
        let padded = format!("{}{}", "0".repeat(pad), v.to_hex());
        prop_assert_eq!(U256::from_hex(&padded), Ok(v));
    }

    #[test]
    fn additive_identity(v in any_u256()) {
        prop_assert_eq!(v + U256::ZERO, v);
        prop_assert_eq!(U256::ZERO + v, v);
    }

    #[test]
    fn additive_inverse(v in any_u256()) {
        prop_assert_eq!(v + (-v), U256::ZERO);
        prop_assert_eq!(v - v, U256::ZERO);
    }

    #[test]
    fn double_negation(v in any_u256()) {
        prop_assert_eq!(-(-v), v);
    }

    #[test]
    fn subtraction_is_addition_of_negation(a in any_u256(), b in any_u256()) {
        prop_assert_eq!(a - b, a + (-b));
        prop_assert_eq!((a - b) + b, a);
    }

    #[test]
    fn addition_commutes_and_associates(a in any_u256(), b in any_u256(), c in any_u256()) {
        prop_assert_eq!(a + b, b + a);
        prop_assert_eq!((a + b) + c, a + (b + c));
    }

    /// Carries match native 128-bit addition, with the carry landing in word 4.
    #[test]
    fn addition_matches_native_u128(x in any::<u128>(), y in any::<u128>()) {
        let (sum, carry) = x.overflowing_add(y);
        let expected = U256::from(sum) + if carry { U256::ONE << 128 } else { U256::ZERO };

        prop_assert_eq!(U256::from(x) + U256::from(y), expected);
    }

    #[test]
    fn overflow_flags_match_ordering(a in any_u256(), b in any_u256()) {
        let (sum, carried) = a.overflowing_add(b);
        prop_assert_eq!(carried, sum < a);

        let (_, borrowed) = a.overflowing_sub(b);
        prop_assert_eq!(borrowed, a < b);
    }

    #[test]
    fn rotation_by_full_width_is_identity(v in any_u256(), k in 0u32..16) {
        prop_assert_eq!(v.rotate_left(0), v);
        prop_assert_eq!(v.rotate_left(256 * k), v);
        prop_assert_eq!(v.rotate_right(256 * k), v);
    }

    #[test]
    fn rotation_amount_is_taken_mod_width(v in any_u256(), n in any::<u32>()) {
        prop_assert_eq!(v.rotate_left(n), v.rotate_left(n % 256));
        prop_assert_eq!(v.rotate_right(n), v.rotate_right(n % 256));
    }

    #[test]
    fn rotate_right_undoes_rotate_left(v in any_u256(), n in 0u32..=512) {
        prop_assert_eq!(v.rotate_left(n).rotate_right(n), v);
        prop_assert_eq!(v.rotate_right(n).rotate_left(n), v);
    }

    #[test]
    fn rotate_left_equals_complementary_rotate_right(v in any_u256(), n in any::<u32>()) {
        prop_assert_eq!(v.rotate_left(n), v.rotate_right((256 - n % 256) % 256));
    }

    /// Rotation agrees with the shift-and-or definition.
    #[test]
    fn rotation_matches_shifts(v in any_u256(), n in 1u32..256) {
        prop_assert_eq!(v.rotate_left(n), (v << n) | (v >> (256 - n)));
        prop_assert_eq!(v.rotate_right(n), (v >> n) | (v << (256 - n)));
    }

    #[test]
    fn rotation_preserves_popcount(v in any_u256(), n in any::<u32>()) {
        prop_assert_eq!(v.rotate_left(n).count_ones(), v.count_ones());
    }

    #[test]
    fn byte_roundtrips(v in any_u256()) {
        prop_assert_eq!(U256::from_be_bytes(v.to_be_bytes()), v);
        prop_assert_eq!(U256::from_le_bytes(v.to_le_bytes()), v);
    }
}
