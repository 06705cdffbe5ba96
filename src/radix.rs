//! Base handling shared by parsing and formatting, and the options record
//! that controls textual output.

use crate::error::{Error, Result};
use crate::mp_num_constants::*;

/// Checks that `base` can be used to write digits.
pub(crate) fn check_base(base: u32) -> Result<u32> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(base)
    } else {
        tracing::debug!(base, "rejected base");
        Err(Error::InvalidBase(base))
    }
}

/// Resolves the base used to read `text`.
///
/// A base of 0 asks for detection: `0b`/`0B` selects base 2, `0x`/`0X`
/// selects base 16, anything else is decimal. The prefix is only honoured
/// when at least one more character follows it. Returns the base together
/// with the text left after the prefix.
pub(crate) fn resolve_base(text: &str, base: u32) -> Result<(u32, &str)> {
    if base != 0 {
        return check_base(base).map(|base| (base, text));
    }
    let bytes = text.as_bytes();
    if bytes.len() < 3 || bytes[0] != b'0' {
        return Ok((10, text));
    }
    match bytes[1] {
        b'b' | b'B' => Ok((2, &text[2..])),
        b'x' | b'X' => Ok((16, &text[2..])),
        _ => Ok((10, text)),
    }
}

/// Value of a digit character, case-insensitive beyond 9.
#[inline]
pub(crate) fn digit_value(c: char) -> Option<u32> {
    c.to_digit(MAX_BASE)
}

#[inline]
pub(crate) fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}

/// Options for writing an integer as text.
///
/// ```
/// use mp_integer::{FormatOptions, Mpint};
///
/// let x = Mpint::from(255);
/// let opts = FormatOptions::new().base(16).min_digits(4).force_sign(true);
/// assert_eq!(x.format(&opts).unwrap(), "+00ff");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatOptions {
    base: u32,
    min_digits: usize,
    force_sign: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions { base: 10, min_digits: 1, force_sign: false }
    }
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Output base, 2 to 36. Checked when the options are used.
    pub fn base(mut self, base: u32) -> Self {
        self.base = base;
        self
    }

    /// Minimum number of digits; shorter output is padded with zeros.
    /// Zero is always written with at least one digit.
    pub fn min_digits(mut self, min_digits: usize) -> Self {
        self.min_digits = min_digits;
        self
    }

    /// Write a `+` in front of non-negative signed values.
    pub fn force_sign(mut self, force_sign: bool) -> Self {
        self.force_sign = force_sign;
        self
    }

    pub fn get_base(&self) -> u32 {
        self.base
    }

    pub fn get_min_digits(&self) -> usize {
        self.min_digits
    }

    pub fn get_force_sign(&self) -> bool {
        self.force_sign
    }
}

#[test]
fn test_check_base() {
    assert_eq!(check_base(2), Ok(2));
    assert_eq!(check_base(36), Ok(36));
    assert_eq!(check_base(0), Err(Error::InvalidBase(0)));
    assert_eq!(check_base(1), Err(Error::InvalidBase(1)));
    assert_eq!(check_base(37), Err(Error::InvalidBase(37)));
}

#[test]
fn test_resolve_base() {
    assert_eq!(resolve_base("0x1f", 0), Ok((16, "1f")));
    assert_eq!(resolve_base("0B101", 0), Ok((2, "101")));
    assert_eq!(resolve_base("0x", 0), Ok((10, "0x")));
    assert_eq!(resolve_base("0755", 0), Ok((10, "0755")));
    assert_eq!(resolve_base("123", 0), Ok((10, "123")));
    assert_eq!(resolve_base("0x1f", 36), Ok((36, "0x1f")));
    assert_eq!(resolve_base("1", 1), Err(Error::InvalidBase(1)));
}

#[test]
fn test_digit_value() {
    assert_eq!(digit_value('7'), Some(7));
    assert_eq!(digit_value('a'), Some(10));
    assert_eq!(digit_value('Z'), Some(35));
    assert_eq!(digit_value('-'), None);
    assert!(is_separator('\''));
    assert!(is_separator('_'));
    assert!(!is_separator(' '));
}
