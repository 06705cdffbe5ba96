//! # Mpint
//! Arbitrary-precision signed integers: an [`Mpuint`] magnitude and a sign.
//! Division is Euclidean, so the remainder is never negative.
//! # Example
//! ```
//! use mp_integer::Mpint;
//!
//! let a: Mpint = "-5".parse().unwrap();
//! let b = Mpint::from(3);
//! assert_eq!(&a / &b, Mpint::from(-2));
//! assert_eq!(&a % &b, Mpint::from(1));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    Neg,
};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::mp_uint::Mpuint;
use crate::radix::{self, FormatOptions};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Mpint {
    mag: Mpuint,
    neg: bool,
}

// 实现构造
impl Mpint {
    /// Every constructor goes through here: zero is never negative.
    fn new(mag: Mpuint, neg: bool) -> Self {
        let neg = neg && !mag.is_zero();
        Mpint { mag, neg }
    }

    pub const fn zero() -> Self {
        Mpint { mag: Mpuint::zero(), neg: false }
    }

    pub fn one() -> Self {
        Mpint::new(Mpuint::one(), false)
    }

    pub fn from_parts(mag: Mpuint, neg: bool) -> Self {
        Mpint::new(mag, neg)
    }

    pub fn into_parts(self) -> (Mpuint, bool) {
        (self.mag, self.neg)
    }

    /// Converts a float, truncating toward zero.
    pub fn from_f64(val: f64) -> Result<Self> {
        let mag = Mpuint::from_f64(val)?;
        Ok(Mpint::new(mag, val < 0.0))
    }

    pub fn from_f32(val: f32) -> Result<Self> {
        Mpint::from_f64(val as f64)
    }
}

macro_rules! impl_signed_to_mp_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for Mpint {
        fn from(val: $i) -> Self {
            Mpint::new(Mpuint::from(val.unsigned_abs()), val < 0)
        }
    }
    )*
    };
}

macro_rules! impl_unsigned_to_mp_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for Mpint {
        fn from(val: $u) -> Self {
            Mpint::new(Mpuint::from(val), false)
        }
    }
    )*
    };
}
impl_signed_to_mp_int!(i8, i16, i32, i64, i128, isize);
impl_unsigned_to_mp_int!(u8, u16, u32, u64, u128, usize);

impl From<Mpuint> for Mpint {
    fn from(mag: Mpuint) -> Self {
        Mpint::new(mag, false)
    }
}

impl From<&Mpuint> for Mpint {
    fn from(mag: &Mpuint) -> Self {
        Mpint::new(mag.clone(), false)
    }
}

// 实现解析
impl Mpint {
    /// Parses an optional `+` or `-` followed by a numeral accepted by
    /// [`Mpuint::from_str_radix`].
    pub fn from_str_radix(text: &str, base: u32) -> Result<Mpint> {
        let (neg, body) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };
        let mag = Mpuint::from_str_radix(body, base)?;
        Ok(Mpint::new(mag, neg))
    }
}

impl FromStr for Mpint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Mpint::from_str_radix(s, 0)
    }
}

// 实现打印
impl Mpint {
    pub fn to_str_radix(&self, base: u32, min_digits: usize, force_sign: bool) -> Result<String> {
        self.format(
            &FormatOptions::new()
                .base(base)
                .min_digits(min_digits)
                .force_sign(force_sign),
        )
    }

    pub fn format(&self, opts: &FormatOptions) -> Result<String> {
        let digits = self.mag.format(&opts.force_sign(false))?;
        if self.neg {
            Ok(format!("-{}", digits))
        } else if opts.get_force_sign() {
            Ok(format!("+{}", digits))
        } else {
            Ok(digits)
        }
    }
}

impl fmt::Display for Mpint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.neg, "", &self.mag.digits(10))
    }
}

impl fmt::LowerHex for Mpint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.neg, "0x", &self.mag.digits(16))
    }
}

impl fmt::UpperHex for Mpint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.neg, "0x", &self.mag.digits(16).to_uppercase())
    }
}

impl fmt::Octal for Mpint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.neg, "0o", &self.mag.digits(8))
    }
}

impl fmt::Binary for Mpint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.neg, "0b", &self.mag.digits(2))
    }
}

// 实现数值转换
macro_rules! impl_wrapping_to_primitive {
    ($($name: ident => $t: ty, $via: ident),*) => {
    $(
    /// Wraps around like an `as` cast from a wider two's-complement value.
    pub fn $name(&self) -> $t {
        let t = self.mag.$via() as $t;
        if self.neg { t.wrapping_neg() } else { t }
    }
    )*
    };
}

impl Mpint {
    impl_wrapping_to_primitive!(
        as_i8 => i8, as_u8, as_i16 => i16, as_u16, as_i32 => i32, as_u32,
        as_i64 => i64, as_u64, as_i128 => i128, as_u128, as_isize => isize, as_usize,
        as_u8 => u8, as_u8, as_u16 => u16, as_u16, as_u32 => u32, as_u32,
        as_u64 => u64, as_u64, as_u128 => u128, as_u128, as_usize => usize, as_usize
    );

    pub fn to_f64(&self) -> f64 {
        let t = self.mag.to_f64();
        if self.neg { -t } else { t }
    }

    pub fn to_f32(&self) -> f32 {
        self.to_f64() as f32
    }
}

macro_rules! impl_try_from_mp_int_signed {
    ($($t: ty => $as: ident),*) => {
    $(
    impl TryFrom<&Mpint> for $t {
        type Error = Error;

        fn try_from(val: &Mpint) -> Result<$t> {
            let bits = val.mag.bits();
            let limit = <$t>::BITS as usize - 1;
            // the magnitude of MIN is 2^limit
            let fits = bits <= limit || (val.neg && bits == limit + 1 && val.mag.count_ones() == 1);
            if fits {
                Ok(val.$as())
            } else {
                Err(Error::Overflow { target: stringify!($t) })
            }
        }
    }
    )*
    };
}

macro_rules! impl_try_from_mp_int_unsigned {
    ($($t: ty),*) => {
    $(
    impl TryFrom<&Mpint> for $t {
        type Error = Error;

        fn try_from(val: &Mpint) -> Result<$t> {
            if val.neg {
                return Err(Error::Overflow { target: stringify!($t) });
            }
            <$t>::try_from(&val.mag)
        }
    }
    )*
    };
}
impl_try_from_mp_int_signed!(
    i8 => as_i8, i16 => as_i16, i32 => as_i32,
    i64 => as_i64, i128 => as_i128, isize => as_isize
);
impl_try_from_mp_int_unsigned!(u8, u16, u32, u64, u128, usize);

impl TryFrom<Mpint> for Mpuint {
    type Error = Error;

    fn try_from(val: Mpint) -> Result<Mpuint> {
        if val.neg {
            Err(Error::Overflow { target: "Mpuint" })
        } else {
            Ok(val.mag)
        }
    }
}

// 杂项辅助函数
impl Mpint {
    /// The absolute value.
    pub fn abs(&self) -> Mpuint {
        self.mag.clone()
    }

    pub fn magnitude(&self) -> &Mpuint {
        &self.mag
    }

    /// -1, 0 or 1.
    pub fn signum(&self) -> i32 {
        if self.neg { -1 } else { self.mag.signum() }
    }

    pub fn is_zero(&self) -> bool {
        self.mag.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.neg
    }

    pub fn is_positive(&self) -> bool {
        !self.neg && !self.mag.is_zero()
    }

    pub fn is_even(&self) -> bool {
        self.mag.is_even()
    }

    pub fn is_odd(&self) -> bool {
        self.mag.is_odd()
    }
}

// 实现大小比较
impl PartialOrd for Mpint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Mpint {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.neg, other.neg) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.mag.cmp(&other.mag),
            (true, true) => other.mag.cmp(&self.mag),
        }
    }
}

// 实现取反
impl Neg for Mpint {
    type Output = Mpint;

    fn neg(self) -> Self::Output {
        let Mpint { mag, neg } = self;
        Mpint::new(mag, !neg)
    }
}

impl Neg for &Mpint {
    type Output = Mpint;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// 实现加法
impl AddAssign<&Mpint> for Mpint {
    fn add_assign(&mut self, rhs: &Mpint) {
        if rhs.mag.is_zero() {
            return;
        }
        if self.neg == rhs.neg {
            self.mag += &rhs.mag;
            return;
        }
        match self.mag.cmp(&rhs.mag) {
            Ordering::Less => {
                self.mag = &rhs.mag - &self.mag;
                self.neg = rhs.neg;
            }
            Ordering::Equal => *self = Mpint::zero(),
            Ordering::Greater => self.mag -= &rhs.mag,
        }
    }
}
forward_binop!(Mpint, Add, add, AddAssign, add_assign);

// 实现减法
impl SubAssign<&Mpint> for Mpint {
    fn sub_assign(&mut self, rhs: &Mpint) {
        *self += &-rhs;
    }
}
forward_binop!(Mpint, Sub, sub, SubAssign, sub_assign);

// 实现乘法
impl MulAssign<&Mpint> for Mpint {
    fn mul_assign(&mut self, rhs: &Mpint) {
        let mag = std::mem::take(&mut self.mag) * &rhs.mag;
        *self = Mpint::new(mag, self.neg != rhs.neg);
    }
}
forward_binop!(Mpint, Mul, mul, MulAssign, mul_assign);

// 实现除法
impl Mpint {
    /// Euclidean quotient and remainder: `self == divisor * q + r` with
    /// `0 <= r < |divisor|`. Fails with [`Error::DivisionByZero`].
    pub fn div_rem(&self, divisor: &Mpint) -> Result<(Mpint, Mpint)> {
        let (mut q, mut r) = self.mag.div_rem(&divisor.mag)?;
        if !r.is_zero() && self.neg {
            q += &Mpuint::one();
            r = &divisor.mag - &r;
        }
        Ok((Mpint::new(q, self.neg != divisor.neg), Mpint::new(r, false)))
    }
}

/// # Panics
/// When `rhs` is zero.
impl DivAssign<&Mpint> for Mpint {
    fn div_assign(&mut self, rhs: &Mpint) {
        *self = or_panic!(self.div_rem(rhs)).0;
    }
}
forward_binop!(Mpint, Div, div, DivAssign, div_assign);

/// # Panics
/// When `rhs` is zero.
impl RemAssign<&Mpint> for Mpint {
    fn rem_assign(&mut self, rhs: &Mpint) {
        *self = or_panic!(self.div_rem(rhs)).1;
    }
}
forward_binop!(Mpint, Rem, rem, RemAssign, rem_assign);

// 实现乘方
impl Mpint {
    /// Negative only for a negative base and an odd exponent.
    pub fn pow(&self, exponent: &Mpuint) -> Mpint {
        Mpint::new(self.mag.pow(exponent), self.neg && exponent.is_odd())
    }
}

// num-traits
impl num_traits::Zero for Mpint {
    fn zero() -> Self {
        Mpint::zero()
    }

    fn is_zero(&self) -> bool {
        Mpint::is_zero(self)
    }
}

impl num_traits::One for Mpint {
    fn one() -> Self {
        Mpint::one()
    }
}

impl num_traits::Num for Mpint {
    type FromStrRadixErr = Error;

    fn from_str_radix(text: &str, radix: u32) -> Result<Self> {
        Mpint::from_str_radix(text, radix)
    }
}

impl num_traits::Signed for Mpint {
    fn abs(&self) -> Self {
        Mpint::new(self.mag.clone(), false)
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if *self <= *other {
            Mpint::zero()
        } else {
            self - other
        }
    }

    fn signum(&self) -> Self {
        Mpint::from(Mpint::signum(self))
    }

    fn is_positive(&self) -> bool {
        Mpint::is_positive(self)
    }

    fn is_negative(&self) -> bool {
        Mpint::is_negative(self)
    }
}

#[cfg(test)]
fn mpz(s: &str) -> Mpint {
    s.parse().unwrap()
}

#[test]
fn test_from() {
    let x = Mpint::default();
    assert_eq!(x.signum(), 0);
    assert_eq!(x.as_i64(), 0);
    assert_eq!(x.to_f64(), 0.0);
    assert_eq!(x.to_string(), "0");

    let x = Mpint::from(123456789);
    assert_eq!(x.signum(), 1);
    assert_eq!(x.as_i64(), 123456789);
    assert_eq!(x.to_f64(), 123456789.0);
    assert_eq!(x.to_str_radix(16, 1, false).unwrap(), "75bcd15");
    assert_eq!(x.to_str_radix(36, 1, false).unwrap(), "21i3v9");

    let x = Mpint::from(-123456789);
    assert_eq!(x.signum(), -1);
    assert_eq!(x.as_i64(), -123456789);
    assert_eq!(x.to_f64(), -123456789.0);
    assert_eq!(x.to_string(), "-123456789");
    assert_eq!(x.to_str_radix(16, 1, false).unwrap(), "-75bcd15");
    assert_eq!(x.to_str_radix(36, 1, false).unwrap(), "-21i3v9");

    let x = Mpint::from(-123456789123456789_i64);
    assert_eq!(x.as_i64(), -123456789123456789);
    assert_eq!(x.to_str_radix(16, 1, false).unwrap(), "-1b69b4bacd05f15");
    assert_eq!(x.to_str_radix(36, 1, false).unwrap(), "-xrls1yk9rf9");

    let x = Mpint::from(i64::MIN);
    assert_eq!(x.as_i64(), i64::MIN);
    assert_eq!(x.to_string(), "-9223372036854775808");
    assert_eq!(Mpint::from(Mpuint::from(7u32)), Mpint::from(7));
    assert_eq!(Mpint::from_parts(Mpuint::zero(), true), Mpint::zero());
    assert!(!Mpint::from_parts(Mpuint::zero(), true).is_negative());
}

#[test]
fn test_to_primitive() {
    let x = Mpint::from(-1);
    assert_eq!(x.as_u8(), 0xff);
    assert_eq!(x.as_u64(), u64::MAX);
    assert_eq!(x.as_i128(), -1);
    let x = Mpint::from(300);
    assert_eq!(x.as_i8(), 44);
    assert_eq!(x.as_u8(), 44);

    assert_eq!(i8::try_from(&Mpint::from(-128)), Ok(-128));
    assert_eq!(i8::try_from(&Mpint::from(127)), Ok(127));
    assert_eq!(i8::try_from(&Mpint::from(128)), Err(Error::Overflow { target: "i8" }));
    assert_eq!(i8::try_from(&Mpint::from(-129)), Err(Error::Overflow { target: "i8" }));
    assert_eq!(i64::try_from(&Mpint::from(i64::MIN)), Ok(i64::MIN));
    assert_eq!(u32::try_from(&Mpint::from(-1)), Err(Error::Overflow { target: "u32" }));
    assert_eq!(u32::try_from(&Mpint::from(7)), Ok(7));
    assert_eq!(Mpuint::try_from(Mpint::from(7)), Ok(Mpuint::from(7u32)));
    assert!(Mpuint::try_from(Mpint::from(-7)).is_err());
}

#[test]
fn test_parse() {
    let cases = [
        ("123456789123456789123456789123456789123456789", 10, 1),
        ("123456789123456789123456789123456789123456789", 0, 1),
        ("-123456789123456789123456789123456789123456789", 10, -1),
        ("-123456789123456789123456789123456789123456789", 0, -1),
    ];
    for (text, base, sign) in cases {
        let x = Mpint::from_str_radix(text, base).unwrap();
        assert_eq!(x.signum(), sign);
        assert_eq!(x.to_string(), text);
        let hex = x.to_str_radix(16, 1, false).unwrap();
        assert_eq!(hex.trim_start_matches('-'), "58936e53d139afefabb2683f150b684045f15");
    }

    let hex = "123456789abcdef123456789abcdef123456789abcdef123456789abcdef";
    let dec = "125642457939796217460094503631385345882379387509263401568735420576681455";
    for (text, base) in [
        (hex.to_string(), 16),
        (format!("0x{}", hex), 0),
        (format!("-{}", hex), 16),
        (format!("-0x{}", hex), 0),
    ] {
        let x = Mpint::from_str_radix(&text, base).unwrap();
        let neg = text.starts_with('-');
        assert_eq!(x.is_negative(), neg);
        assert_eq!(x.to_string().trim_start_matches('-'), dec);
        assert_eq!(x.to_str_radix(16, 1, false).unwrap().trim_start_matches('-'), hex);
    }

    let alphabet = "123456789abcdefghijklmnopqrstuvwxyz";
    let expected = ["1", "-5", "27", "-194", "1865", "-22875", "342391", "-6053444", "123456789"];
    for base in 2..=10_u32 {
        let sign = if base % 2 == 0 { "+" } else { "-" };
        let text = format!("{}{}", sign, &alphabet[..base as usize - 1]);
        let x = Mpint::from_str_radix(&text, base).unwrap();
        assert_eq!(x.to_string(), expected[base as usize - 2]);
    }
    assert_eq!(
        Mpint::from_str_radix("+123456789abcdefghijklmnopqrstuvwxyz", 36).unwrap().to_string(),
        "86846823611197163108337531226495015298096208677436155"
    );

    assert_eq!(mpz("-0"), Mpint::zero());
    assert!(!mpz("-0").is_negative());
    assert_eq!(Mpint::from_str_radix("-", 10), Err(Error::EmptyNumeral));
    assert_eq!(Mpint::from_str_radix("12", 1), Err(Error::InvalidBase(1)));
    assert!(Mpint::from_str_radix("--1", 10).is_err());
    assert!(Mpint::from_str_radix("1-", 10).is_err());
}

#[test]
fn test_format() {
    let x = Mpint::from(42);
    assert_eq!(x.to_str_radix(10, 1, true).unwrap(), "+42");
    assert_eq!(x.to_str_radix(10, 5, false).unwrap(), "00042");
    assert_eq!(Mpint::from(-42).to_str_radix(10, 5, true).unwrap(), "-00042");
    assert_eq!(Mpint::zero().to_str_radix(10, 1, true).unwrap(), "+0");
    assert_eq!(Mpint::from(-42).to_str_radix(0, 1, false), Err(Error::InvalidBase(0)));

    assert_eq!(format!("{}", Mpint::from(-255)), "-255");
    assert_eq!(format!("{:x}", Mpint::from(-255)), "-ff");
    assert_eq!(format!("{:#X}", Mpint::from(-255)), "-0xFF");
    assert_eq!(format!("{:+}", Mpint::from(255)), "+255");
    assert_eq!(format!("{:06}", Mpint::from(-255)), "-00255");
}

#[test]
fn test_from_f64() {
    let cases = [
        (0.0, "0"), (0.99, "0"), (-0.99, "0"), (1.0, "1"), (-1.0, "-1"),
        (123456789.0, "123456789"), (-123456789.0, "-123456789"),
    ];
    for (val, expected) in cases {
        let x = Mpint::from_f64(val).unwrap();
        assert_eq!(x.to_string(), expected);
    }
    let s = Mpint::from_f64(-1.23456789e40).unwrap().to_string();
    assert!(s.starts_with("-12345678"));
    assert_eq!(s.len(), 42);
    assert_eq!(Mpint::from_f64(f64::NEG_INFINITY), Err(Error::NonFinite));
}

#[test]
fn test_arithmetic() {
    let a = Mpint::zero();
    let b = Mpint::zero();
    assert_eq!(&a + &b, Mpint::zero());
    assert_eq!(&a - &b, Mpint::zero());
    assert_eq!(&a * &b, Mpint::zero());

    let b = Mpint::from(10);
    assert_eq!((&a + &b).to_string(), "10");
    assert_eq!((&a - &b).to_string(), "-10");
    assert_eq!((&b - &a).to_string(), "10");
    assert_eq!((&a * &b).to_string(), "0");
    assert_eq!((&a / &b).to_string(), "0");
    assert_eq!((&a % &b).to_string(), "0");

    let a = mpz("42");
    let b = mpz("10");
    let c = -&a;
    let d = -&b;
    let table = [
        (&a, &b, "52", "32", "-32", "420", "4", "2"),
        (&a, &d, "32", "52", "-52", "-420", "-4", "2"),
        (&c, &b, "-32", "-52", "52", "-420", "-5", "8"),
        (&c, &d, "-52", "-32", "32", "420", "5", "8"),
    ];
    for (x, y, sum, diff, rdiff, prod, quo, rem) in table {
        assert_eq!((x + y).to_string(), sum);
        assert_eq!((x - y).to_string(), diff);
        assert_eq!((y - x).to_string(), rdiff);
        assert_eq!((x * y).to_string(), prod);
        assert_eq!((x / y).to_string(), quo);
        assert_eq!((x % y).to_string(), rem);
    }
    for x in [&a, &b, &c, &d] {
        assert_eq!(x / &Mpint::one(), *x);
    }
    assert_eq!(&a + &c, Mpint::zero());
    assert!(!(&c - &c).is_negative());
    assert!(!(&c * &Mpint::zero()).is_negative());
}

#[test]
fn test_euclidean_division() {
    assert_eq!(mpz("42") * Mpint::from(-10), Mpint::from(-420));
    let (q, r) = Mpint::from(-420).div_rem(&Mpint::from(-10)).unwrap();
    assert_eq!((q, r), (Mpint::from(42), Mpint::zero()));

    let (q, r) = Mpint::from(4).div_rem(&Mpint::from(-3)).unwrap();
    assert_eq!((q, r), (Mpint::from(-1), Mpint::from(1)));

    let (q, r) = Mpint::from(-5).div_rem(&Mpint::from(3)).unwrap();
    assert_eq!((q, r), (Mpint::from(-2), Mpint::from(1)));

    let (q, r) = Mpint::from(-5).div_rem(&Mpint::from(-3)).unwrap();
    assert_eq!((q, r), (Mpint::from(2), Mpint::from(1)));

    let a = mpz("-123456789123456789123456789123456789");
    let b = mpz("98765432109876543210");
    let (q, r) = a.div_rem(&b).unwrap();
    assert!(!r.is_negative());
    assert!(r.abs() < b.abs());
    assert_eq!(&(&b * &q) + &r, a);

    assert_eq!(a.div_rem(&Mpint::zero()), Err(Error::DivisionByZero));
    assert!(std::panic::catch_unwind(|| &a / &Mpint::zero()).is_err());
}

#[test]
fn test_pow() {
    let two = Mpuint::from(2u32);
    let three = Mpuint::from(3u32);
    assert_eq!(Mpint::from(-2).pow(&two), Mpint::from(4));
    assert_eq!(Mpint::from(-2).pow(&three), Mpint::from(-8));
    assert_eq!(Mpint::from(2).pow(&three), Mpint::from(8));
    assert_eq!(Mpint::from(-7).pow(&Mpuint::zero()), Mpint::one());
    assert_eq!(Mpint::zero().pow(&Mpuint::zero()), Mpint::one());
    assert_eq!(Mpint::zero().pow(&three), Mpint::zero());
}

#[test]
fn test_compare() {
    let values: Vec<Mpint> = ["-1000000000000000000000", "-10", "-1", "0", "1", "10", "1000000000000000000000"]
        .iter()
        .map(|s| mpz(s))
        .collect();
    for (i, x) in values.iter().enumerate() {
        for (j, y) in values.iter().enumerate() {
            assert_eq!(x.cmp(y), i.cmp(&j), "{} vs {}", x, y);
        }
    }
}

#[test]
fn test_num_traits() {
    use num_traits::{Num, One, Signed, Zero};

    let x = <Mpint as Num>::from_str_radix("-ff", 16).unwrap();
    assert_eq!(x, Mpint::from(-255));
    assert!(<Mpint as Zero>::zero().is_zero());
    assert_eq!(<Mpint as One>::one(), Mpint::from(1));
    assert_eq!(Signed::abs(&x), Mpint::from(255));
    assert_eq!(Signed::signum(&x), Mpint::from(-1));
    assert_eq!(Signed::abs_sub(&Mpint::from(3), &Mpint::from(5)), Mpint::zero());
    assert_eq!(Signed::abs_sub(&Mpint::from(5), &Mpint::from(3)), Mpint::from(2));
    assert!(Signed::is_negative(&x));
}
