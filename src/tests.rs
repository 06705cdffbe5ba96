//! Properties checked against `num-bigint` as a reference implementation.

use num_bigint::{BigInt, BigUint, Sign};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{Error, Mpint, Mpuint};

fn to_biguint(x: &Mpuint) -> BigUint {
    BigUint::from_slice(x.words())
}

fn to_bigint(x: &Mpint) -> BigInt {
    let sign = if x.is_negative() { Sign::Minus } else { Sign::Plus };
    BigInt::from_biguint(sign, to_biguint(x.magnitude()))
}

fn words() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(any::<u32>(), 0..=8)
}

fn nonzero_words() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(any::<u32>(), 1..=6).prop_filter("nonzero", |w| w.iter().any(|&x| x != 0))
}

#[test]
fn it_works() {
    let a: Mpuint = "10000000000000".parse().unwrap();
    let b: Mpuint = "900000000000".parse().unwrap();
    assert_eq!((&a + &b).to_string(), "10900000000000");
    assert_eq!((&a - &b).to_string(), "9100000000000");
    assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
    assert_eq!((&a / &b).to_string(), "11");
    assert_eq!((&a % &b).to_string(), "100000000000");
    assert_eq!((&a << 10).to_string(), "10240000000000000");
    assert_eq!((&a >> 10).to_string(), "9765625000");
}

#[test]
fn test_scenarios() {
    let x = Mpuint::from_str_radix("123456789123456789123456789", 10).unwrap();
    assert_eq!(x.to_str_radix(16, 1).unwrap(), "661efdf2e3b19f7c045f15");

    let p = Mpint::from_str_radix("42", 10).unwrap() * Mpint::from(-10);
    assert_eq!(p.to_string(), "-420");
    assert_eq!(p.div_rem(&Mpint::from(-10)), Ok((Mpint::from(42), Mpint::zero())));

    let ten = Mpuint::from(10u32);
    assert_eq!(ten.pow(&Mpuint::from(30u32)).to_string(), format!("1{}", "0".repeat(30)));

    let bytes = [0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd];
    let x = Mpuint::read_be(&bytes);
    let mut out = [0_u8; 7];
    x.write_le(&mut out);
    assert_eq!(out, [0xcd, 0xab, 0x89, 0x67, 0x45, 0x23, 0x01]);
}

#[test]
fn test_random_division() {
    let mut rng = StdRng::seed_from_u64(0x6d70_696e_74);
    for _ in 0..500 {
        let a_len = rng.gen_range(0..=12);
        let b_len = rng.gen_range(1..=8);
        let a = Mpuint::from_words((0..a_len).map(|_| rng.gen()).collect());
        let mut b_words: Vec<u32> = (0..b_len).map(|_| rng.gen()).collect();
        // sparse divisors exercise the correction steps
        if rng.gen_bool(0.3) {
            b_words[b_len - 1] = 1;
        }
        let b = Mpuint::from_words(b_words);
        if b.is_zero() {
            assert_eq!(a.div_rem(&b), Err(Error::DivisionByZero));
            continue;
        }
        let (q, r) = a.div_rem(&b).unwrap();
        assert!(r < b);
        assert_eq!(&(&q * &b) + &r, a);
        assert_eq!(to_biguint(&q), to_biguint(&a) / to_biguint(&b));
    }
}

proptest! {
    #[test]
    fn prop_str_radix_matches_reference(w in words(), base in 2u32..=36) {
        let x = Mpuint::from_words(w);
        let text = x.to_str_radix(base, 1).unwrap();
        prop_assert_eq!(&text, &to_biguint(&x).to_str_radix(base));
        prop_assert_eq!(Mpuint::from_str_radix(&text, base).unwrap(), x.clone());
        prop_assert_eq!(Mpuint::from_str_radix(&text.to_uppercase(), base).unwrap(), x);
    }

    #[test]
    fn prop_signed_text_round_trip(w in words(), neg in any::<bool>(), base in 2u32..=36) {
        let x = Mpint::from_parts(Mpuint::from_words(w), neg);
        let text = x.to_str_radix(base, 1, true).unwrap();
        prop_assert_eq!(Mpint::from_str_radix(&text, base).unwrap(), x.clone());
        prop_assert_eq!(x.to_string(), to_bigint(&x).to_string());
    }

    #[test]
    fn prop_add_sub_mul(a in words(), b in words()) {
        let a = Mpuint::from_words(a);
        let b = Mpuint::from_words(b);
        let (ra, rb) = (to_biguint(&a), to_biguint(&b));

        let sum = &a + &b;
        prop_assert_eq!(to_biguint(&sum), &ra + &rb);
        prop_assert_eq!(&sum - &b, a.clone());
        prop_assert_eq!(to_biguint(&(&a * &b)), &ra * &rb);
        prop_assert_eq!(&a * &Mpuint::one(), a.clone());
        prop_assert!((&a * &Mpuint::zero()).is_zero());

        match a.try_sub(&b) {
            Ok(d) => prop_assert_eq!(to_biguint(&d), &ra - &rb),
            Err(e) => {
                prop_assert!(a < b);
                prop_assert_eq!(e, Error::Underflow);
            }
        }
    }

    #[test]
    fn prop_div_rem(a in words(), b in nonzero_words()) {
        let a = Mpuint::from_words(a);
        let b = Mpuint::from_words(b);
        let (q, r) = a.div_rem(&b).unwrap();
        prop_assert_eq!(to_biguint(&q), to_biguint(&a) / to_biguint(&b));
        prop_assert_eq!(to_biguint(&r), to_biguint(&a) % to_biguint(&b));
    }

    #[test]
    fn prop_signed_euclidean_division(
        a in words(),
        an in any::<bool>(),
        b in nonzero_words(),
        bn in any::<bool>()
    ) {
        let a = Mpint::from_parts(Mpuint::from_words(a), an);
        let b = Mpint::from_parts(Mpuint::from_words(b), bn);
        let (q, r) = a.div_rem(&b).unwrap();
        prop_assert!(!r.is_negative());
        prop_assert!(r.abs() < b.abs());
        prop_assert_eq!(to_bigint(&b) * to_bigint(&q) + to_bigint(&r), to_bigint(&a));
        prop_assert_eq!(&a / &b, q);
        prop_assert_eq!(&a % &b, r);
    }

    #[test]
    fn prop_signed_add_mul(a in words(), an in any::<bool>(), b in words(), bn in any::<bool>()) {
        let a = Mpint::from_parts(Mpuint::from_words(a), an);
        let b = Mpint::from_parts(Mpuint::from_words(b), bn);
        prop_assert_eq!(to_bigint(&(&a + &b)), to_bigint(&a) + to_bigint(&b));
        prop_assert_eq!(to_bigint(&(&a - &b)), to_bigint(&a) - to_bigint(&b));
        prop_assert_eq!(to_bigint(&(&a * &b)), to_bigint(&a) * to_bigint(&b));
        prop_assert_eq!(a.cmp(&b), to_bigint(&a).cmp(&to_bigint(&b)));
    }

    #[test]
    fn prop_pow(w in prop::collection::vec(any::<u32>(), 0..=2), e in 0u32..24) {
        let x = Mpuint::from_words(w);
        let y = x.pow(&Mpuint::from(e));
        prop_assert_eq!(to_biguint(&y), to_biguint(&x).pow(e));
        prop_assert_eq!(&y * &x, x.pow(&Mpuint::from(e + 1)));
    }

    #[test]
    fn prop_shifts_and_bitwise(a in words(), b in words(), n in 0usize..200) {
        let a = Mpuint::from_words(a);
        let b = Mpuint::from_words(b);
        let (ra, rb) = (to_biguint(&a), to_biguint(&b));
        prop_assert_eq!(to_biguint(&(&a << n)), &ra << n);
        prop_assert_eq!(to_biguint(&(&a >> n)), &ra >> n);
        prop_assert_eq!(&(&a << n) >> n, a.clone());
        prop_assert_eq!(to_biguint(&(&a & &b)), &ra & &rb);
        prop_assert_eq!(to_biguint(&(&a | &b)), &ra | &rb);
        prop_assert_eq!(to_biguint(&(&a ^ &b)), &ra ^ &rb);
        prop_assert_eq!(a.bits() as u64, ra.bits());
    }

    #[test]
    fn prop_byte_buffers(w in nonzero_words()) {
        let x = Mpuint::from_words(w);
        let be = x.to_be_bytes();
        let le = x.to_le_bytes();
        prop_assert_eq!(&be, &to_biguint(&x).to_bytes_be());
        prop_assert_eq!(&le, &to_biguint(&x).to_bytes_le());
        prop_assert_eq!(Mpuint::read_be(&be), x.clone());
        prop_assert_eq!(Mpuint::read_le(&le), x.clone());

        let mut wide = vec![0xaa_u8; be.len() + 3];
        x.write_be(&mut wide);
        prop_assert!(wide[..3].iter().all(|&b| b == 0));
        prop_assert_eq!(Mpuint::read_be(&wide), x);
    }

    #[test]
    fn prop_bit_access(w in words(), i in 0usize..300) {
        let x = Mpuint::from_words(w);
        prop_assert_eq!(x.bit(i), to_biguint(&x).bit(i as u64));

        let mut y = x.clone();
        y.set_bit(i, true);
        prop_assert!(y.bit(i));
        y.flip_bit(i);
        prop_assert!(!y.bit(i));
        y.set_bit(i, x.bit(i));
        prop_assert_eq!(y, x);
    }
}
