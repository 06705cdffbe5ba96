//! # Mpuint
//! Arbitrary-precision unsigned integers, stored as 32-bit words with the
//! least significant word first.
//! # Example
//! ```
//! use mp_integer::Mpuint;
//!
//! let a: Mpuint = "123456789123456789123456789".parse().unwrap();
//! let b = Mpuint::from(987654321u32);
//! assert_eq!(a.to_str_radix(16, 1).unwrap(), "661efdf2e3b19f7c045f15");
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("a % b = {}", &a % &b);
//! println!("a << 10 = {}", &a << 10);
//! println!("a >> 10 = {}", &a >> 10);
//! ```

use std::cmp::Ordering;
use std::fmt::{self, Write};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    BitAnd, BitAndAssign,
    BitOr, BitOrAssign,
    BitXor, BitXorAssign,
    Shl, ShlAssign,
    Shr, ShrAssign,
};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::mp_num_cache::*;
use crate::mp_num_constants::*;
use crate::radix::{self, FormatOptions};

macro_rules! bit_length_u32 {
    ($n: expr) => {
        (32 - $n.leading_zeros()) as usize
    };
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Mpuint {
    // Least significant word first, never ends with a zero word.
    mag: Vec<u32>,
}

// 杂项辅助函数
impl Mpuint {
    pub const fn zero() -> Self {
        Mpuint { mag: Vec::new() }
    }

    pub fn one() -> Self {
        Mpuint { mag: vec![1] }
    }

    /// Builds a value from words given least significant first.
    pub fn from_words(mag: Vec<u32>) -> Self {
        let mut val = Mpuint { mag };
        val.trim();
        val
    }

    /// The words of the value, least significant first.
    pub fn words(&self) -> &[u32] {
        &self.mag
    }

    /// Drops most-significant zero words. Every mutation ends here.
    #[inline]
    fn trim(&mut self) {
        while let Some(&0) = self.mag.last() {
            self.mag.pop();
        }
    }

    pub fn is_zero(&self) -> bool {
        self.mag.is_empty()
    }

    pub fn is_even(&self) -> bool {
        self.mag.first().map_or(true, |w| w & 1 == 0)
    }

    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    /// 0 for zero, 1 otherwise.
    pub fn signum(&self) -> i32 {
        if self.is_zero() { 0 } else { 1 }
    }
}

// 实现构造
macro_rules! impl_unsigned_to_mp_uint {
    ($($u: ty),*) => {
    $(
    impl From<$u> for Mpuint {
        fn from(val: $u) -> Self {
            Mpuint::from_u128(val as u128)
        }
    }
    )*
    };
}
impl_unsigned_to_mp_uint!(u8, u16, u32, u64, u128, usize);

impl Mpuint {
    fn from_u128(mut val: u128) -> Self {
        let mut mag = Vec::with_capacity(4);
        while val != 0 {
            mag.push(val as u32);
            val >>= u32::BITS;
        }
        Mpuint { mag }
    }

    /// Converts a float, truncating toward zero. The sign is ignored.
    pub fn from_f64(val: f64) -> Result<Self> {
        if !val.is_finite() {
            tracing::debug!(val, "rejected non-finite float");
            return Err(Error::NonFinite);
        }
        let bits = val.abs().to_bits();
        let exponent = ((bits >> 52) & 0x7ff) as i64;
        let fraction = bits & ((1_u64 << 52) - 1);
        let (mantissa, shift) = if exponent == 0 {
            // subnormal
            (fraction, -1074)
        } else {
            (fraction | (1_u64 << 52), exponent - 1075)
        };
        let n = Mpuint::from(mantissa);
        if shift >= 0 {
            Ok(n << shift as usize)
        } else {
            Ok(n >> (-shift) as usize)
        }
    }

    pub fn from_f32(val: f32) -> Result<Self> {
        Mpuint::from_f64(val as f64)
    }
}

// 实现解析
impl Mpuint {
    /// Parses `text` in `base`, which is 2 to 36, or 0 to detect a `0b` /
    /// `0x` prefix and otherwise read decimal. The separators `'` and `_`
    /// may appear anywhere and are skipped.
    pub fn from_str_radix(text: &str, base: u32) -> Result<Mpuint> {
        let (base, body) = radix::resolve_base(text, base)?;
        let group_len = DIGITS_PER_INT[base as usize];
        let group_radix = INT_RADIX[base as usize];

        let mut result = Mpuint {
            mag: Vec::with_capacity(words_for_digits(body.len(), base)),
        };
        let mut group: u32 = 0;
        let mut group_digits: usize = 0;
        let mut seen_digit = false;

        for c in body.chars() {
            if radix::is_separator(c) {
                continue;
            }
            let digit = match radix::digit_value(c) {
                Some(d) if d < base => d,
                _ => {
                    tracing::debug!(base, text, "invalid digit {:?}", c);
                    return Err(Error::InvalidDigit { base, text: text.to_string() });
                }
            };
            seen_digit = true;
            group = group * base + digit;
            group_digits += 1;
            if group_digits == group_len {
                result.mul_add_word(group_radix, group);
                group = 0;
                group_digits = 0;
            }
        }

        if !seen_digit {
            tracing::debug!(text, "numeral without digits");
            return Err(Error::EmptyNumeral);
        }
        if group_digits > 0 {
            result.mul_add_word(base.pow(group_digits as u32), group);
        }
        Ok(result)
    }

    // self = self * factor + addend
    #[inline(always)]
    fn mul_add_word(&mut self, factor: u32, addend: u32) {
        let mut carry = addend as u64;
        for x in self.mag.iter_mut() {
            let product = (factor as u64) * (*x as u64) + carry;
            *x = product as u32;
            carry = product >> u32::BITS;
        }
        if carry != 0 {
            self.mag.push(carry as u32);
        }
        self.trim();
    }
}

impl FromStr for Mpuint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Mpuint::from_str_radix(s, 0)
    }
}

// 实现打印
impl Mpuint {
    /// Writes the value in `base` (2 to 36), zero-padded to at least
    /// `min_digits` digits.
    pub fn to_str_radix(&self, base: u32, min_digits: usize) -> Result<String> {
        self.format(&FormatOptions::new().base(base).min_digits(min_digits))
    }

    /// Writes the value as described by `opts`. Unsigned values never carry
    /// a sign, so `force_sign` only adds a `+`.
    pub fn format(&self, opts: &FormatOptions) -> Result<String> {
        let base = radix::check_base(opts.get_base())?;
        let digits = self.digits(base);
        let pad = opts.get_min_digits().saturating_sub(digits.len());
        let mut s = String::with_capacity(digits.len() + pad + 1);
        if opts.get_force_sign() {
            s.push('+');
        }
        s.extend(std::iter::repeat('0').take(pad));
        s.push_str(&digits);
        Ok(s)
    }

    /// Digits without sign or padding; `base` must already be checked.
    pub(crate) fn digits(&self, base: u32) -> String {
        match self.mag.last() {
            None => String::from("0"),
            Some(_) if base == 2 => self.words_to_string(WORD_BITS, |s, w, width| {
                write!(s, "{:0width$b}", w, width = width)
            }),
            Some(_) if base == 16 => self.words_to_string(WORD_BITS / 4, |s, w, width| {
                write!(s, "{:0width$x}", w, width = width)
            }),
            Some(_) => self.small_to_string(base),
        }
    }

    // Bases whose digits line up with word boundaries: the top word is
    // written as is, every lower word padded to `word_digits`.
    fn words_to_string<F>(&self, word_digits: usize, mut write_word: F) -> String
    where
        F: FnMut(&mut String, u32, usize) -> fmt::Result,
    {
        let mut s = String::with_capacity(self.mag.len() * word_digits);
        for (i, &w) in self.mag.iter().rev().enumerate() {
            let width = if i == 0 { 1 } else { word_digits };
            // Writing into a String cannot fail.
            let _ = write_word(&mut s, w, width);
        }
        s
    }

    // Repeated division, one digit group per word-sized division.
    fn small_to_string(&self, base: u32) -> String {
        let _scope = tracing::trace_span!(
            "Mpuint::to_str_radix",
            bits = self.bits(),
            base = base,
        )
        .entered();

        let group_len = DIGITS_PER_INT[base as usize];
        let group_radix = INT_RADIX[base as usize];
        let mut digits: Vec<char> = Vec::with_capacity(digits_for_bits(self.bits(), base));
        let mut tmp = self.clone();
        while !tmp.is_zero() {
            let mut group = tmp.div_rem_word(group_radix);
            for _ in 0..group_len {
                if tmp.is_zero() && group == 0 {
                    break;
                }
                digits.push(DIGITS[(group % base) as usize]);
                group /= base;
            }
        }
        digits.iter().rev().collect()
    }
}

impl fmt::Display for Mpuint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "", &self.digits(10))
    }
}

impl fmt::LowerHex for Mpuint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.digits(16))
    }
}

impl fmt::UpperHex for Mpuint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.digits(16).to_uppercase())
    }
}

impl fmt::Octal for Mpuint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0o", &self.digits(8))
    }
}

impl fmt::Binary for Mpuint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0b", &self.digits(2))
    }
}

// 实现数值转换
macro_rules! impl_wrapping_to_primitive {
    ($($name: ident => $t: ty),*) => {
    $(
    /// Keeps the low bits that fit, like an `as` cast.
    pub fn $name(&self) -> $t {
        let mut t: $t = 0;
        for (i, &w) in self.mag.iter().enumerate() {
            let shift = i * WORD_BITS;
            if shift >= <$t>::BITS as usize {
                break;
            }
            t |= (w as $t) << shift;
        }
        t
    }
    )*
    };
}

impl Mpuint {
    impl_wrapping_to_primitive!(
        as_u8 => u8, as_u16 => u16, as_u32 => u32,
        as_u64 => u64, as_u128 => u128, as_usize => usize
    );

    pub fn to_f64(&self) -> f64 {
        let mut t = 0_f64;
        let mut scale = 1_f64;
        for &w in self.mag.iter() {
            // scale may run to infinity above the top of the f64 range
            if w != 0 {
                t += w as f64 * scale;
            }
            scale *= 4294967296_f64;
        }
        t
    }

    pub fn to_f32(&self) -> f32 {
        self.to_f64() as f32
    }
}

macro_rules! impl_try_from_mp_uint {
    ($($t: ty => $as: ident),*) => {
    $(
    impl TryFrom<&Mpuint> for $t {
        type Error = Error;

        fn try_from(val: &Mpuint) -> Result<$t> {
            if val.bits() > <$t>::BITS as usize {
                Err(Error::Overflow { target: stringify!($t) })
            } else {
                Ok(val.$as())
            }
        }
    }
    )*
    };
}
impl_try_from_mp_uint!(
    u8 => as_u8, u16 => as_u16, u32 => as_u32,
    u64 => as_u64, u128 => as_u128, usize => as_usize
);

// 实现比特与字节访问
impl Mpuint {
    /// Position of the highest set bit plus one; 0 for zero.
    pub fn bits(&self) -> usize {
        match self.mag.last() {
            None => 0,
            Some(&top) => ((self.mag.len() - 1) * WORD_BITS) + bit_length_u32!(top),
        }
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.mag.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Minimal number of bytes holding the value; 0 for zero.
    pub fn bytes(&self) -> usize {
        (self.bits() + 7) / 8
    }

    pub fn bit(&self, i: usize) -> bool {
        self.mag
            .get(i / WORD_BITS)
            .map_or(false, |w| (w >> (i % WORD_BITS)) & 1 == 1)
    }

    pub fn set_bit(&mut self, i: usize, b: bool) {
        let index = i / WORD_BITS;
        let mask = 1_u32 << (i % WORD_BITS);
        if b {
            self.grow_to(index + 1);
            self.mag[index] |= mask;
        } else if index < self.mag.len() {
            self.mag[index] &= !mask;
            self.trim();
        }
    }

    pub fn flip_bit(&mut self, i: usize) {
        let index = i / WORD_BITS;
        self.grow_to(index + 1);
        self.mag[index] ^= 1_u32 << (i % WORD_BITS);
        self.trim();
    }

    /// Byte `i`, counting from the least significant; 0 past the top.
    pub fn byte(&self, i: usize) -> u8 {
        self.mag
            .get(i / WORD_BYTES)
            .map_or(0, |w| (w >> (i % WORD_BYTES * 8)) as u8)
    }

    /// Replaces byte `i`, counting from the least significant.
    pub fn set_byte(&mut self, i: usize, b: u8) {
        let index = i / WORD_BYTES;
        let shift = i % WORD_BYTES * 8;
        self.grow_to(index + 1);
        self.mag[index] = (self.mag[index] & !(0xff_u32 << shift)) | ((b as u32) << shift);
        self.trim();
    }

    #[inline]
    fn grow_to(&mut self, len: usize) {
        if self.mag.len() < len {
            self.mag.resize(len, 0);
        }
    }

    /// Reads a big-endian unsigned integer spanning all of `bytes`.
    pub fn read_be(bytes: &[u8]) -> Mpuint {
        let mut mag = vec![0_u32; (bytes.len() + WORD_BYTES - 1) / WORD_BYTES];
        for (i, &b) in bytes.iter().rev().enumerate() {
            mag[i / WORD_BYTES] |= (b as u32) << (i % WORD_BYTES * 8);
        }
        Mpuint::from_words(mag)
    }

    /// Reads a little-endian unsigned integer spanning all of `bytes`.
    pub fn read_le(bytes: &[u8]) -> Mpuint {
        let mut mag = vec![0_u32; (bytes.len() + WORD_BYTES - 1) / WORD_BYTES];
        for (i, &b) in bytes.iter().enumerate() {
            mag[i / WORD_BYTES] |= (b as u32) << (i % WORD_BYTES * 8);
        }
        Mpuint::from_words(mag)
    }

    /// Fills `buf` big-endian. A wider buffer is zero-padded at the front;
    /// a narrower one receives only the low `buf.len()` bytes.
    pub fn write_be(&self, buf: &mut [u8]) {
        for (i, slot) in buf.iter_mut().rev().enumerate() {
            *slot = self.byte(i);
        }
    }

    /// Fills `buf` little-endian. A wider buffer is zero-padded at the end;
    /// a narrower one receives only the low `buf.len()` bytes.
    pub fn write_le(&self, buf: &mut [u8]) {
        for (i, slot) in buf.iter_mut().enumerate() {
            *slot = self.byte(i);
        }
    }

    pub fn to_be_bytes(&self) -> Vec<u8> {
        let mut buf = vec![0_u8; self.bytes()];
        self.write_be(&mut buf);
        buf
    }

    pub fn to_le_bytes(&self) -> Vec<u8> {
        let mut buf = vec![0_u8; self.bytes()];
        self.write_le(&mut buf);
        buf
    }
}

// 实现大小比较
impl Mpuint {
    fn compare_mag(&self, other: &Mpuint) -> Ordering {
        let self_len = self.mag.len();
        let other_len = other.mag.len();

        if self_len != other_len {
            return self_len.cmp(&other_len);
        }

        for (a, b) in self.mag.iter().rev().zip(other.mag.iter().rev()) {
            if a != b {
                return a.cmp(b);
            }
        }

        Ordering::Equal
    }
}

impl PartialOrd for Mpuint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Mpuint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_mag(other)
    }
}

// 实现加法
impl AddAssign<&Mpuint> for Mpuint {
    fn add_assign(&mut self, rhs: &Mpuint) {
        let y = &rhs.mag;
        self.grow_to(y.len());
        let mut sum: u64 = 0;
        for (i, x) in self.mag.iter_mut().enumerate() {
            let carry = sum >> u32::BITS;
            if i >= y.len() && carry == 0 {
                break;
            }
            sum = *x as u64 + y.get(i).map_or(0, |&v| v as u64) + carry;
            *x = sum as u32;
        }
        if sum >> u32::BITS != 0 {
            self.mag.push(0x01);
        }
        self.trim();
    }
}
forward_binop!(Mpuint, Add, add, AddAssign, add_assign);

// 实现减法
impl Mpuint {
    /// `self - rhs`, or [`Error::Underflow`] when `rhs > self`.
    pub fn try_sub(&self, rhs: &Mpuint) -> Result<Mpuint> {
        let mut z = self.clone();
        z.try_sub_assign(rhs)?;
        Ok(z)
    }

    fn try_sub_assign(&mut self, rhs: &Mpuint) -> Result<()> {
        if *self < *rhs {
            return Err(Error::Underflow);
        }
        let y = &rhs.mag;
        let mut difference: i64 = 0;
        for (i, x) in self.mag.iter_mut().enumerate() {
            let borrow = difference >> u32::BITS;
            if i >= y.len() && borrow == 0 {
                break;
            }
            difference = *x as i64 - y.get(i).map_or(0, |&v| v as i64) + borrow;
            *x = difference as u32;
        }
        self.trim();
        Ok(())
    }
}

/// # Panics
/// When `rhs` is larger than `self`.
impl SubAssign<&Mpuint> for Mpuint {
    fn sub_assign(&mut self, rhs: &Mpuint) {
        or_panic!(self.try_sub_assign(rhs))
    }
}
forward_binop!(Mpuint, Sub, sub, SubAssign, sub_assign);

// 实现乘法
impl Mpuint {
    fn mul_to_len(x: &[u32], y: &[u32]) -> Vec<u32> {
        if x.is_empty() || y.is_empty() {
            return Vec::new();
        }
        let mut z = vec![0_u32; x.len() + y.len()];
        for (i, &xi) in x.iter().enumerate() {
            let mut carry: u64 = 0;
            for (j, &yj) in y.iter().enumerate() {
                let product = (xi as u64) * (yj as u64) + z[i + j] as u64 + carry;
                z[i + j] = product as u32;
                carry = product >> u32::BITS;
            }
            z[i + y.len()] = carry as u32;
        }
        z
    }
}

impl MulAssign<&Mpuint> for Mpuint {
    fn mul_assign(&mut self, rhs: &Mpuint) {
        self.mag = Mpuint::mul_to_len(&self.mag, &rhs.mag);
        self.trim();
    }
}
forward_binop!(Mpuint, Mul, mul, MulAssign, mul_assign);

// 实现除法
impl Mpuint {
    /// Quotient and remainder, or [`Error::DivisionByZero`].
    pub fn div_rem(&self, divisor: &Mpuint) -> Result<(Mpuint, Mpuint)> {
        match divisor.mag.len() {
            0 => {
                tracing::debug!("division by zero");
                Err(Error::DivisionByZero)
            }
            1 => {
                let mut quotient = self.clone();
                let r = quotient.div_rem_word(divisor.mag[0]);
                Ok((quotient, Mpuint::from(r)))
            }
            _ => Ok(self.divide_binary(divisor)),
        }
    }

    /// Divides in place by a single nonzero word, returning the remainder.
    fn div_rem_word(&mut self, divisor: u32) -> u32 {
        let divisor = divisor as u64;
        let mut rem: u64 = 0;
        for x in self.mag.iter_mut().rev() {
            let dividend = (rem << u32::BITS) | *x as u64;
            *x = (dividend / divisor) as u32;
            rem = dividend % divisor;
        }
        self.trim();
        rem as u32
    }

    // Shift-and-subtract long division; divisor must be nonzero.
    fn divide_binary(&self, divisor: &Mpuint) -> (Mpuint, Mpuint) {
        let _scope = tracing::trace_span!(
            "Mpuint::div_rem",
            dividend_bits = self.bits(),
            divisor_bits = divisor.bits(),
        )
        .entered();

        let mut quotient = Mpuint::zero();
        let mut remainder = self.clone();
        if *self >= *divisor {
            let mut shift = self.bits() - divisor.bits();
            let mut rsub = divisor << shift;
            if rsub > *self {
                shift -= 1;
                rsub >>= 1;
            }
            loop {
                if remainder >= rsub {
                    remainder -= &rsub;
                    quotient.set_bit(shift, true);
                }
                if shift == 0 {
                    break;
                }
                shift -= 1;
                rsub >>= 1;
            }
        }
        (quotient, remainder)
    }
}

/// # Panics
/// When `rhs` is zero.
impl DivAssign<&Mpuint> for Mpuint {
    fn div_assign(&mut self, rhs: &Mpuint) {
        *self = or_panic!(self.div_rem(rhs)).0;
    }
}
forward_binop!(Mpuint, Div, div, DivAssign, div_assign);

/// # Panics
/// When `rhs` is zero.
impl RemAssign<&Mpuint> for Mpuint {
    fn rem_assign(&mut self, rhs: &Mpuint) {
        *self = or_panic!(self.div_rem(rhs)).1;
    }
}
forward_binop!(Mpuint, Rem, rem, RemAssign, rem_assign);

// 实现乘方
impl Mpuint {
    /// `self` raised to `exponent` by square-and-multiply. `pow(0)` is 1,
    /// also for a zero base.
    pub fn pow(&self, exponent: &Mpuint) -> Mpuint {
        let _scope = tracing::trace_span!(
            "Mpuint::pow",
            base_bits = self.bits(),
            exponent_bits = exponent.bits(),
        )
        .entered();

        let mut base = self.clone();
        let mut result = Mpuint::one();
        let bits = exponent.bits();
        for i in 0..bits {
            if exponent.bit(i) {
                result *= &base;
            }
            if i + 1 < bits {
                base = &base * &base;
            }
        }
        result
    }
}

// 实现位运算
impl BitAndAssign<&Mpuint> for Mpuint {
    fn bitand_assign(&mut self, rhs: &Mpuint) {
        self.mag.truncate(rhs.mag.len());
        for (x, y) in self.mag.iter_mut().zip(rhs.mag.iter()) {
            *x &= y;
        }
        self.trim();
    }
}
forward_binop!(Mpuint, BitAnd, bitand, BitAndAssign, bitand_assign);

impl BitOrAssign<&Mpuint> for Mpuint {
    fn bitor_assign(&mut self, rhs: &Mpuint) {
        self.grow_to(rhs.mag.len());
        for (x, y) in self.mag.iter_mut().zip(rhs.mag.iter()) {
            *x |= y;
        }
        self.trim();
    }
}
forward_binop!(Mpuint, BitOr, bitor, BitOrAssign, bitor_assign);

impl BitXorAssign<&Mpuint> for Mpuint {
    fn bitxor_assign(&mut self, rhs: &Mpuint) {
        self.grow_to(rhs.mag.len());
        for (x, y) in self.mag.iter_mut().zip(rhs.mag.iter()) {
            *x ^= y;
        }
        self.trim();
    }
}
forward_binop!(Mpuint, BitXor, bitxor, BitXorAssign, bitxor_assign);

// 实现左移
impl ShlAssign<usize> for Mpuint {
    fn shl_assign(&mut self, n: usize) {
        if self.is_zero() || n == 0 {
            return;
        }
        let n_ints = n / WORD_BITS;
        let n_bits = n % WORD_BITS;
        if n_bits != 0 {
            let mut prev = 0_u32;
            for w in self.mag.iter_mut() {
                let next = *w >> (WORD_BITS - n_bits);
                *w = (*w << n_bits) | prev;
                prev = next;
            }
            if prev != 0 {
                self.mag.push(prev);
            }
        }
        if n_ints != 0 {
            let mut mag = vec![0_u32; n_ints + self.mag.len()];
            mag[n_ints..].copy_from_slice(&self.mag);
            self.mag = mag;
        }
    }
}

impl Shl<usize> for Mpuint {
    type Output = Mpuint;

    fn shl(mut self, n: usize) -> Self::Output {
        self <<= n;
        self
    }
}

impl Shl<usize> for &Mpuint {
    type Output = Mpuint;

    fn shl(self, n: usize) -> Self::Output {
        self.clone() << n
    }
}

// 实现右移
impl ShrAssign<usize> for Mpuint {
    fn shr_assign(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        let n_ints = n / WORD_BITS;
        let n_bits = n % WORD_BITS;
        if n_ints >= self.mag.len() {
            self.mag.clear();
            return;
        }
        self.mag.drain(..n_ints);
        if n_bits != 0 {
            let mut prev = 0_u32;
            for w in self.mag.iter_mut().rev() {
                let next = *w << (WORD_BITS - n_bits);
                *w = (*w >> n_bits) | prev;
                prev = next;
            }
        }
        self.trim();
    }
}

impl Shr<usize> for Mpuint {
    type Output = Mpuint;

    fn shr(mut self, n: usize) -> Self::Output {
        self >>= n;
        self
    }
}

impl Shr<usize> for &Mpuint {
    type Output = Mpuint;

    fn shr(self, n: usize) -> Self::Output {
        self.clone() >> n
    }
}

// num-traits
impl num_traits::Zero for Mpuint {
    fn zero() -> Self {
        Mpuint::zero()
    }

    fn is_zero(&self) -> bool {
        Mpuint::is_zero(self)
    }
}

impl num_traits::One for Mpuint {
    fn one() -> Self {
        Mpuint::one()
    }
}

impl num_traits::Num for Mpuint {
    type FromStrRadixErr = Error;

    fn from_str_radix(text: &str, radix: u32) -> Result<Self> {
        Mpuint::from_str_radix(text, radix)
    }
}

impl num_traits::Unsigned for Mpuint {}

#[cfg(test)]
fn mpu(s: &str) -> Mpuint {
    s.parse().unwrap()
}

#[test]
fn test_from() {
    assert!(Mpuint::from(0u8).is_zero());
    assert_eq!(Mpuint::from(0x12345678u32).words(), &[0x12345678]);
    assert_eq!(Mpuint::from(0x123456789abcdef0u64).words(), &[0x9abcdef0, 0x12345678]);
    assert_eq!(Mpuint::from(u128::MAX).words(), &[u32::MAX; 4]);
    assert_eq!(Mpuint::from_words(vec![5, 0, 0]).words(), &[5]);
    assert!(Mpuint::from_words(vec![0, 0]).is_zero());
}

#[test]
fn test_to_primitive() {
    let x = Mpuint::from(0x123456789abcdef0u64);
    assert_eq!(x.bits(), 61);
    assert_eq!(x.as_u64(), 0x123456789abcdef0);
    assert_eq!(x.as_u32(), 0x9abcdef0);
    assert_eq!(x.as_u8(), 0xf0);
    assert_eq!(x.as_u128(), 0x123456789abcdef0);
    assert!((x.to_f64() - 1.311768e18).abs() < 1e12);
    assert_eq!(Mpuint::zero().to_f64(), 0.0);
    assert_eq!(Mpuint::from(305419896u32).to_f64(), 305419896.0);

    assert_eq!(u64::try_from(&x), Ok(0x123456789abcdef0));
    assert_eq!(u32::try_from(&x), Err(Error::Overflow { target: "u32" }));
    assert_eq!(u8::try_from(&Mpuint::from(255u32)), Ok(255));
    assert_eq!(u8::try_from(&Mpuint::from(256u32)), Err(Error::Overflow { target: "u8" }));
}

#[test]
fn test_to_string() {
    let x = Mpuint::zero();
    for base in [2, 10, 16, 36] {
        assert_eq!(x.to_str_radix(base, 1).unwrap(), "0");
    }
    assert_eq!(x.to_str_radix(10, 4).unwrap(), "0000");

    let x = Mpuint::from(0x12345678u32);
    assert_eq!(x.to_str_radix(2, 1).unwrap(), "10010001101000101011001111000");
    assert_eq!(x.to_str_radix(10, 1).unwrap(), "305419896");
    assert_eq!(x.to_str_radix(16, 1).unwrap(), "12345678");
    assert_eq!(x.to_str_radix(36, 1).unwrap(), "51u7i0");
    assert_eq!(x.to_str_radix(16, 12).unwrap(), "000012345678");

    let x = Mpuint::from(0x123456789abcdef0u64);
    assert_eq!(
        x.to_str_radix(2, 1).unwrap(),
        "1001000110100010101100111100010011010101111001101111011110000"
    );
    assert_eq!(x.to_str_radix(10, 1).unwrap(), "1311768467463790320");
    assert_eq!(x.to_str_radix(16, 1).unwrap(), "123456789abcdef0");
    assert_eq!(x.to_str_radix(36, 1).unwrap(), "9ys742pps3qo");

    assert_eq!(x.to_str_radix(1, 1), Err(Error::InvalidBase(1)));
    assert_eq!(x.to_str_radix(37, 1), Err(Error::InvalidBase(37)));
    assert_eq!(x.to_str_radix(0, 1), Err(Error::InvalidBase(0)));
}

#[test]
fn test_fmt_traits() {
    let x = Mpuint::from(255u32);
    assert_eq!(format!("{}", x), "255");
    assert_eq!(format!("{:x}", x), "ff");
    assert_eq!(format!("{:X}", x), "FF");
    assert_eq!(format!("{:#x}", x), "0xff");
    assert_eq!(format!("{:o}", x), "377");
    assert_eq!(format!("{:b}", x), "11111111");
    assert_eq!(format!("{:06}", x), "000255");
    assert_eq!(format!("{:+}", x), "+255");
    assert_eq!(format!("{:>5}", x), "  255");
}

#[test]
fn test_parse() {
    let bin = "110011000011110111111011111001011100011101100011001111101111100000001000101111100010101";
    for (text, base) in [
        (bin, 2),
        ("123456789123456789123456789", 10),
        ("661efdf2e3b19f7c045f15", 16),
        ("661EFDF2E3B19F7C045F15", 16),
        ("123456789123456789123456789", 0),
        ("0x661efdf2e3b19f7c045f15", 0),
        ("0X661efdf2e3b19f7c045f15", 0),
        ("123'456'789'123'456'789'123'456'789", 10),
        ("123_456_789_123_456_789_123_456_789", 0),
    ] {
        let x = Mpuint::from_str_radix(text, base).unwrap();
        assert!((x.to_f64() - 1.234568e26).abs() < 1e20);
        assert_eq!(x.to_str_radix(2, 1).unwrap(), bin);
        assert_eq!(x.to_str_radix(10, 1).unwrap(), "123456789123456789123456789");
        assert_eq!(x.to_str_radix(16, 1).unwrap(), "661efdf2e3b19f7c045f15");
    }
    assert_eq!(Mpuint::from_str_radix("0b101", 0).unwrap(), Mpuint::from(5u32));
    assert_eq!(Mpuint::from_str_radix("000", 10).unwrap(), Mpuint::zero());
}

#[test]
fn test_parse_bases() {
    let alphabet = "123456789abcdefghijklmnopqrstuvwxyz";
    let expected = [
        "1", "5", "27", "194", "1865", "22875", "342391", "6053444", "123456789",
        "2853116705", "73686780563", "2103299351334", "65751519677857", "2234152501943159",
        "81985529216486895", "3231407272993502984", "136146740744970718253",
        "6106233505124424657789", "290464265927977839335179", "14606467545964956303452810",
        "774212873841767703847271481", "43141462809603124037923621715",
        "2521239653781255433741174806887", "154197642309049519503282176123724",
        "9849791328331451697274678861440325", "655956343554789600515162175472115225",
        "45467109894723422308055868660308101251", "3275109889236238692043148233075275671534",
        "244817041729665873959571938168846611177169",
        "18965749034136928842900714476732571951160815",
        "1520813358304789717173449357665226867487963103",
        "126084023523204128749625029233070835487633968144",
        "10795811667005157035274610194040730536839248769117",
        "953726210513969460165905219215837671424690827366389",
        "86846823611197163108337531226495015298096208677436155",
    ];
    for base in 2..=36_u32 {
        let text = &alphabet[..base as usize - 1];
        let x = Mpuint::from_str_radix(text, base).unwrap();
        assert_eq!(x.to_string(), expected[base as usize - 2], "base {}", base);
        assert_eq!(x.to_str_radix(base, 1).unwrap(), text, "base {}", base);
    }
}

#[test]
fn test_parse_errors() {
    assert_eq!(Mpuint::from_str_radix("12", 1), Err(Error::InvalidBase(1)));
    assert_eq!(Mpuint::from_str_radix("12", 37), Err(Error::InvalidBase(37)));
    assert_eq!(
        Mpuint::from_str_radix("102", 2),
        Err(Error::InvalidDigit { base: 2, text: "102".to_string() })
    );
    assert_eq!(
        Mpuint::from_str_radix("12a", 10),
        Err(Error::InvalidDigit { base: 10, text: "12a".to_string() })
    );
    assert_eq!(
        Mpuint::from_str_radix("0x1g", 0),
        Err(Error::InvalidDigit { base: 16, text: "0x1g".to_string() })
    );
    assert!(Mpuint::from_str_radix("-1", 10).is_err());
    assert_eq!(Mpuint::from_str_radix("", 10), Err(Error::EmptyNumeral));
    assert_eq!(Mpuint::from_str_radix("'_'", 10), Err(Error::EmptyNumeral));
    assert!("0x".parse::<Mpuint>().is_err());
}

#[test]
fn test_from_f64() {
    assert_eq!(Mpuint::from_f64(0.0).unwrap().to_string(), "0");
    assert_eq!(Mpuint::from_f64(0.99).unwrap().to_string(), "0");
    assert_eq!(Mpuint::from_f64(1.0).unwrap().to_string(), "1");
    assert_eq!(Mpuint::from_f64(123456789.0).unwrap().to_string(), "123456789");
    assert_eq!(Mpuint::from_f64(-2.5).unwrap().to_string(), "2");
    assert_eq!(Mpuint::from_f64(5e-324).unwrap(), Mpuint::zero());
    let s = Mpuint::from_f64(1.23456789e40).unwrap().to_string();
    assert_eq!(s.len(), 41);
    assert!(s.starts_with("12345678"), "{}", s);
    assert_eq!(Mpuint::from_f64(f64::NAN), Err(Error::NonFinite));
    assert_eq!(Mpuint::from_f64(f64::INFINITY), Err(Error::NonFinite));
    assert_eq!(Mpuint::from_f32(65536.5).unwrap(), Mpuint::from(65536u32));
}

#[test]
fn test_arithmetic() {
    let zero = Mpuint::zero();
    let fifteen = Mpuint::from(15u32);
    let y = &zero + &fifteen;
    assert_eq!(y.bits(), 4);
    assert_eq!(y.to_string(), "15");
    assert_eq!(format!("{:x}", y), "f");
    assert_eq!(&fifteen - &zero, fifteen);

    let x = Mpuint::from(0x123456789abcdef0u64);
    let y = Mpuint::from(0xffffffffffffffffu64);
    let z = &x + &fifteen;
    assert_eq!(z.bits(), 61);
    assert_eq!(z.to_string(), "1311768467463790335");
    let z = &x + &y;
    assert_eq!(z.bits(), 65);
    assert_eq!(z.to_string(), "19758512541173341935");
    assert_eq!(format!("{:x}", z), "1123456789abcdeef");
    let z = &y - &fifteen;
    assert_eq!(format!("{:x}", z), "fffffffffffffff0");
    let z = &y - &x;
    assert_eq!(z.to_string(), "17134975606245761295");
    let z = &x * &y;
    assert_eq!(z.bits(), 125);
    assert_eq!(z.to_string(), "24197857203266734862169780735577366800");
    assert_eq!(format!("{:x}", z), "123456789abcdeefedcba98765432110");

    let x = mpu("123456789123456789123456789123456789123456789");
    assert_eq!(
        &x - &mpu("123456789123456789123456789123456789"),
        mpu("123456789000000000000000000000000000000000000")
    );
    assert_eq!(&x - &mpu("123456789123456789123456789123456789000000000"), mpu("123456789"));
    assert_eq!(
        &x - &mpu("1357913579135791357913579"),
        mpu("123456789123456789122098875544320997765543210")
    );
    assert_eq!(&x - &x, zero);
}

#[test]
fn test_sub_underflow() {
    let small = Mpuint::from(5u32);
    let big = mpu("123456789123456789123456789");
    assert_eq!(small.try_sub(&big), Err(Error::Underflow));
    assert_eq!(Mpuint::zero().try_sub(&small), Err(Error::Underflow));
    assert_eq!(big.try_sub(&small), Ok(mpu("123456789123456789123456784")));
    let result = std::panic::catch_unwind(|| &small - &big);
    assert!(result.is_err());
}

#[test]
fn test_div() {
    let x = mpu("123456789123456789123456789123456789123456789");

    let (q, r) = x.div_rem(&mpu("123456789")).unwrap();
    assert_eq!(q, mpu("1000000001000000001000000001000000001"));
    assert_eq!(r, Mpuint::zero());

    let (q, r) = x.div_rem(&mpu("987654321")).unwrap();
    assert_eq!(q, mpu("124999998985937499000175780249997801"));
    assert_eq!(r, mpu("725308668"));

    let y = mpu("987654321987654321987654321987654321987654321");
    assert_eq!(&x / &y, Mpuint::zero());
    assert_eq!(&x % &y, x);

    // multi-word divisor
    let y = mpu("98765432109876543210");
    let (q, r) = x.div_rem(&y).unwrap();
    assert!(r < y);
    assert_eq!(&(&q * &y) + &r, x);

    // divisor equal to the dividend, and one bit longer than it
    assert_eq!(x.div_rem(&x).unwrap(), (Mpuint::one(), Mpuint::zero()));
    let y = &x << 1;
    assert_eq!(x.div_rem(&y).unwrap(), (Mpuint::zero(), x.clone()));

    let a = mpu("23456789873625348759607098765432345678909876325346546543456453573434839063464369876543245");
    let b = mpu("526738495607659438721653478560954837265378495607");
    assert_eq!(&a % &b, mpu("393707270751296419349581795408095683999332705291"));
}

#[test]
fn test_div_by_zero() {
    let x = Mpuint::from(42u32);
    assert_eq!(x.div_rem(&Mpuint::zero()), Err(Error::DivisionByZero));
    assert!(std::panic::catch_unwind(|| &x / &Mpuint::zero()).is_err());
    assert!(std::panic::catch_unwind(|| &x % &Mpuint::zero()).is_err());
}

#[test]
fn test_pow() {
    for n in 0..=3_u32 {
        let expected = if n == 0 { "1" } else { "0" };
        assert_eq!(Mpuint::zero().pow(&Mpuint::from(n)).to_string(), expected);
        assert_eq!(Mpuint::one().pow(&Mpuint::from(n)).to_string(), "1");
    }
    let ten = Mpuint::from(10u32);
    for n in 0..=30_usize {
        let expected = format!("1{}", "0".repeat(n));
        assert_eq!(ten.pow(&Mpuint::from(n)).to_string(), expected);
    }
    let two = Mpuint::from(2u32);
    assert_eq!(two.pow(&Mpuint::from(200u32)), Mpuint::one() << 200);
}

#[test]
fn test_bitwise() {
    let x = Mpuint::from(0x123456789abcdef0u64);
    let y = Mpuint::from(0xffffffffffffffffu64);
    assert_eq!(x.count_ones(), 32);
    assert_eq!(y.count_ones(), 64);
    assert!(x.is_even());
    assert!(y.is_odd());
    assert!(Mpuint::zero().is_even());
    assert_eq!(Mpuint::zero().count_ones(), 0);

    assert_eq!(format!("{:x}", &x & &y), "123456789abcdef0");
    assert_eq!(format!("{:x}", &x | &y), "ffffffffffffffff");
    assert_eq!(format!("{:x}", &x ^ &y), "edcba9876543210f");
    assert_eq!(&x ^ &x, Mpuint::zero());
    assert_eq!(&x & &Mpuint::from(0xffu32), Mpuint::from(0xf0u32));
    assert_eq!(&(&x << 64) & &x, Mpuint::zero());
}

#[test]
fn test_shift() {
    let x = Mpuint::from(0x123456789abcdef0u64);
    let right = [
        (0, "123456789abcdef0"), (1, "91a2b3c4d5e6f78"), (2, "48d159e26af37bc"),
        (3, "2468acf13579bde"), (31, "2468acf1"), (32, "12345678"), (33, "91a2b3c"),
        (58, "4"), (59, "2"), (60, "1"), (61, "0"), (62, "0"), (63, "0"), (64, "0"), (65, "0"),
    ];
    for (n, expected) in right {
        assert_eq!(format!("{:x}", &x >> n), expected, "x >> {}", n);
    }
    let left = ["123456789abcdef0", "2468acf13579bde0", "48d159e26af37bc0", "91a2b3c4d5e6f780"];
    for n in 0..20 {
        let expected = format!("{}{}", left[n % 4], "0".repeat(n / 4));
        assert_eq!(format!("{:x}", &x << n), expected, "x << {}", n);
    }
    assert_eq!(format!("{:x}", &x << 20), "123456789abcdef000000");
    assert_eq!(Mpuint::zero() << 100, Mpuint::zero());
}

#[test]
fn test_bit_access() {
    let mut x = Mpuint::zero();
    assert!(!x.bit(0));
    assert!(!x.bit(100));
    x.set_bit(16, true);
    assert_eq!(x, mpu("0x10000"));
    assert!(!x.bit(15));
    assert!(x.bit(16));
    assert!(!x.bit(17));
    x.set_bit(80, true);
    assert_eq!(x, mpu("0x100000000000000010000"));
    assert!(!x.bit(79));
    assert!(x.bit(80));
    assert!(!x.bit(81));
    x.set_bit(80, false);
    assert_eq!(x, mpu("0x10000"));
    assert_eq!(x.words().len(), 1);
    x.flip_bit(80);
    assert_eq!(x, mpu("0x100000000000000010000"));
    x.flip_bit(80);
    assert_eq!(x, mpu("0x10000"));
    assert!(!x.bit(80));
    x.set_bit(200, false);
    assert_eq!(x, mpu("0x10000"));
}

#[test]
fn test_byte_access() {
    assert_eq!(Mpuint::zero().bytes(), 0);
    let lengths = [
        "0x12", "0x1234", "0x123456", "0x12345678", "0x123456789a", "0x123456789abc",
        "0x123456789abcde", "0x123456789abcdef1", "0x123456789abcdef123", "0x123456789abcdef12345",
    ];
    for (i, text) in lengths.iter().enumerate() {
        assert_eq!(mpu(text).bytes(), i + 1, "{}", text);
    }

    let mut a = mpu("0x123456789abcdef12345");
    let bytes = [0x45, 0x23, 0xf1, 0xde, 0xbc, 0x9a, 0x78, 0x56, 0x34, 0x12];
    for (i, &b) in bytes.iter().enumerate() {
        assert_eq!(a.byte(i), b);
    }
    for i in 10..17 {
        assert_eq!(a.byte(i), 0);
    }

    let steps = [
        (1, "123456789abcdef1ff45"),
        (3, "123456789abcfff1ff45"),
        (5, "12345678ffbcfff1ff45"),
        (7, "1234ff78ffbcfff1ff45"),
        (9, "ff34ff78ffbcfff1ff45"),
        (11, "ff00ff34ff78ffbcfff1ff45"),
        (13, "ff00ff00ff34ff78ffbcfff1ff45"),
        (15, "ff00ff00ff00ff34ff78ffbcfff1ff45"),
    ];
    for (i, expected) in steps {
        a.set_byte(i, 0xff);
        assert_eq!(a.to_str_radix(16, 1).unwrap(), expected);
    }
    a.set_byte(15, 0x00);
    a.set_byte(13, 0x01);
    assert_eq!(a.to_str_radix(16, 1).unwrap(), "100ff00ff34ff78ffbcfff1ff45");
}

#[test]
fn test_byte_buffers() {
    let a = Mpuint::zero();
    let b = mpu("0x123456789abcdef12345");
    let mut v = [0xaa_u8; 7];
    a.write_be(&mut v);
    assert_eq!(v, [0; 7]);
    b.write_be(&mut v);
    assert_eq!(v, [0x78, 0x9a, 0xbc, 0xde, 0xf1, 0x23, 0x45]);
    a.write_le(&mut v);
    assert_eq!(v, [0; 7]);
    b.write_le(&mut v);
    assert_eq!(v, [0x45, 0x23, 0xf1, 0xde, 0xbc, 0x9a, 0x78]);

    let mut wide = [0xaa_u8; 12];
    b.write_be(&mut wide);
    assert_eq!(wide, [0, 0, 0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc, 0xde, 0xf1, 0x23, 0x45]);
    b.write_le(&mut wide);
    assert_eq!(wide, [0x45, 0x23, 0xf1, 0xde, 0xbc, 0x9a, 0x78, 0x56, 0x34, 0x12, 0, 0]);

    let v = [
        0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff,
    ];
    assert_eq!(Mpuint::read_be(&v).to_str_radix(16, 1).unwrap(), "112233445566778899aabbccddeeff");
    assert_eq!(Mpuint::read_le(&v).to_str_radix(16, 1).unwrap(), "ffeeddccbbaa998877665544332211");
    assert_eq!(Mpuint::read_be(&[0, 0, 1]), Mpuint::one());
    assert_eq!(Mpuint::read_le(&[]), Mpuint::zero());

    assert_eq!(b.to_be_bytes(), vec![0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc, 0xde, 0xf1, 0x23, 0x45]);
    assert_eq!(Mpuint::read_le(&b.to_le_bytes()), b);
    assert!(Mpuint::zero().to_be_bytes().is_empty());
}

#[test]
fn test_read_be_write_le_reverses() {
    let bytes = [0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd];
    let x = Mpuint::read_be(&bytes);
    let mut out = [0_u8; 7];
    x.write_le(&mut out);
    let mut reversed = bytes;
    reversed.reverse();
    assert_eq!(out, reversed);
}

#[test]
fn test_compare() {
    let a = mpu("123456789123456789");
    let b = mpu("123456789123456790");
    let c = mpu("1234567891234567891");
    assert!(a < b);
    assert!(b < c);
    assert!(Mpuint::zero() < Mpuint::one());
    assert_eq!(a.cmp(&a.clone()), Ordering::Equal);
    assert_eq!(c.cmp(&a), Ordering::Greater);
}
