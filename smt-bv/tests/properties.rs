//! Property tests for masking, resizing, rotation and the overflow predicates.

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::One;
use proptest::prelude::*;

use smt_bv::BitVec;

/// An arbitrary bit vector of 1..=200 bits, built from an unbounded-looking
/// signed seed so that construction has to mask.
fn bitvec() -> impl Strategy<Value = BitVec> {
    (1usize..=200, any::<i128>(), any::<u64>()).prop_map(|(bits, lo, hi)| {
        let seed = (BigInt::from(hi) << 128) + BigInt::from(lo);
        BitVec::from_bigint(seed, bits).unwrap()
    })
}

fn in_range(v: &BitVec) -> bool {
    v.as_biguint() < &(BigUint::one() << v.bits())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn construction_masks(bits in 1usize..=300, seed in any::<i128>()) {
        let v = BitVec::from_bigint(BigInt::from(seed), bits).unwrap();
        prop_assert!(in_range(&v));

        let modulus = BigInt::one() << bits;
        let expected = ((BigInt::from(seed) % &modulus) + &modulus) % &modulus;
        prop_assert_eq!(v.unsigned_value(), expected);
    }

    #[test]
    fn operations_stay_in_range(a in bitvec(), k in any::<u64>(), amount in 0usize..512) {
        let b = BitVec::from_u64(k, a.bits()).unwrap();
        prop_assert!(in_range(&a.add(&b).unwrap()));
        prop_assert!(in_range(&a.sub(&b).unwrap()));
        prop_assert!(in_range(&a.mul(&b).unwrap()));
        prop_assert!(in_range(&a.neg()));
        prop_assert!(in_range(&a.not()));
        prop_assert!(in_range(&a.shl(&amount).unwrap()));
        prop_assert!(in_range(&a.ashr(&amount).unwrap()));
        prop_assert!(in_range(&a.rotate_left(amount)));
        if !b.is_zero() {
            prop_assert!(in_range(&a.signed_div(&b).unwrap()));
            prop_assert!(in_range(&a.signed_rem(&b).unwrap()));
            prop_assert!(in_range(&a.signed_mod(&b).unwrap()));
        }
    }

    #[test]
    fn extend_then_extract(v in bitvec(), k in 0usize..100, signed in any::<bool>()) {
        let w = v.bits();
        let e = v.extend(k, signed);
        prop_assert_eq!(e.bits(), w + k);
        prop_assert_eq!(e.extract(w - 1, 0).unwrap(), v);
    }

    #[test]
    fn resize_to_same_size(v in bitvec(), signed in any::<bool>()) {
        prop_assert_eq!(v.resize(v.bits(), signed).unwrap(), v);
    }

    #[test]
    fn sign_extension_keeps_signed_value(v in bitvec(), k in 0usize..100) {
        prop_assert_eq!(v.extend(k, true).signed_value(), v.signed_value());
        prop_assert_eq!(v.extend(k, false).unsigned_value(), v.unsigned_value());
    }

    #[test]
    fn rotation_is_periodic(v in bitvec(), a in 0usize..1000, b in 0usize..1000) {
        prop_assert_eq!(v.rotate_left(v.bits()), v.clone());
        prop_assert_eq!(v.rotate_left(a).rotate_left(b), v.rotate_left(a + b));
        prop_assert_eq!(v.rotate_left(a).rotate_right(a), v);
    }

    #[test]
    fn signed_mod_is_floored(n in any::<i16>(), d in any::<i16>()) {
        prop_assume!(d != 0);
        let expected = i32::from(n).mod_floor(&i32::from(d));
        let r = BitVec::from(n).signed_mod(&d).unwrap();
        prop_assert_eq!(r.signed_value(), BigInt::from(expected));

        let q = BitVec::from(n).signed_rem(&d).unwrap();
        prop_assert_eq!(q.signed_value(), BigInt::from(i32::from(n) % i32::from(d)));
    }

    #[test]
    fn text_round_trip(v in bitvec(), spec in prop::sample::select(vec!["D", "B", "X"])) {
        let s = v.format(spec).unwrap();
        prop_assert_eq!(s.parse::<BitVec>().unwrap(), v);
    }
}

#[test]
fn exhaustive_8bit_add_no_overflow() {
    let _ = env_logger::builder().is_test(true).try_init();

    for a in 0..=u8::MAX {
        for b in 0..=u8::MAX {
            let x = BitVec::from(a);
            let y = BitVec::from(b);
            let sum = u16::from(a) + u16::from(b);
            assert_eq!(x.add_no_overflow(&y, false).unwrap(), sum < 256, "{} + {}", a, b);

            let ssum = i16::from(a as i8) + i16::from(b as i8);
            assert_eq!(x.add_no_overflow(&y, true).unwrap(), ssum <= 127);
            assert_eq!(x.signed_add_no_underflow(&y).unwrap(), ssum >= -128);

            // wrapping agrees with native arithmetic
            assert_eq!(x.add(&y).unwrap(), BitVec::from(a.wrapping_add(b)));
        }
    }

    assert!(!BitVec::from(128u8).add_no_overflow(&128u8, false).unwrap());
    assert!(!BitVec::from(-128i8).signed_add_no_underflow(&-128i8).unwrap());
}

#[test]
fn conversion_boundaries() {
    let _ = env_logger::builder().is_test(true).try_init();

    let max = BitVec::from_u64(u64::from(u32::MAX), 64).unwrap();
    assert_eq!(max.to_u32().unwrap(), u32::MAX);
    assert!(max.add(&1u8).unwrap().to_u32().is_err());

    let v = BitVec::from_u32(0x1234, 16).unwrap();
    assert_eq!(v.resize(8, false).unwrap(), BitVec::from(0x34u8));
}
