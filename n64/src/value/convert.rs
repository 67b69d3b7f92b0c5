//! Conversions to and from doubles, 32-bit integers, halves and strings

use super::{Int64, N64};
use crate::error::{Error, Result, StringFault};
use crate::mode::{Dynamic, Mode, Signedness};
use std::fmt;
use std::str::FromStr;

/// Largest magnitude a double holds exactly as an integer, 2^53 - 1
pub const MAX_SAFE_INTEGER: i64 = 0x1f_ffff_ffff_ffff;

/// Radixes accepted by string encoding and decoding
pub const RADIXES: [u32; 4] = [2, 8, 10, 16];

fn check_base(base: u32) -> Result<u32> {
    if RADIXES.contains(&base) {
        Ok(base)
    } else {
        Err(Error::invalid_base(base))
    }
}

fn number_bits(num: f64) -> Result<u64> {
    if !num.is_finite() || num.fract() != 0.0 {
        return Err(Error::invalid_type("number", "integer"));
    }
    if num.abs() > MAX_SAFE_INTEGER as f64 {
        return Err(Error::unsafe_conversion());
    }
    Ok(num as i64 as u64)
}

fn decode(s: &str, base: u32) -> Result<u64> {
    let (neg, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };

    if digits.is_empty() {
        let fault = if neg { StringFault::NoDigits } else { StringFault::BadLength };
        return Err(Error::invalid_string(fault));
    }
    if digits.len() > 64 {
        return Err(Error::invalid_string(StringFault::BadLength));
    }

    let mut n: u64 = 0;
    for ch in digits.chars() {
        let digit = ch
            .to_digit(base)
            .ok_or_else(|| Error::invalid_string(StringFault::BadDigit))?;
        n = n
            .checked_mul(base as u64)
            .and_then(|n| n.checked_add(digit as u64))
            .ok_or_else(|| Error::invalid_string(StringFault::Overflow))?;
    }

    Ok(if neg { n.wrapping_neg() } else { n })
}

impl<M: Signedness> Int64<M> {
    /// Within ±(2^53 - 1) when signed, at most 2^53 - 1 when unsigned
    pub fn is_safe(&self) -> bool {
        if self.is_signed() {
            let n = self.bits as i64;
            (-MAX_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&n)
        } else {
            self.bits <= MAX_SAFE_INTEGER as u64
        }
    }

    /// Exact conversion to a double; fails outside the safe range.
    pub fn to_number(&self) -> Result<f64> {
        if !self.is_safe() {
            return Err(Error::unsafe_conversion());
        }
        Ok(self.to_double())
    }

    /// Lossy conversion to a double
    pub fn to_double(&self) -> f64 {
        if self.is_signed() {
            self.bits as i64 as f64
        } else {
            self.bits as f64
        }
    }

    /// Low 32 bits, read as `i32` when signed and `u32` otherwise
    pub fn to_int(&self) -> i64 {
        if self.is_signed() {
            self.bits as u32 as i32 as i64
        } else {
            self.bits as u32 as i64
        }
    }

    pub fn set_number(&mut self, num: f64) -> Result<&mut Self> {
        let bits = number_bits(num)?;
        Ok(self.store(bits))
    }

    pub fn set_int(&mut self, num: i32) -> &mut Self {
        let bits = self.widen(num);
        self.store(bits)
    }

    /// Replace both halves
    pub fn join(&mut self, hi: u32, lo: u32) -> &mut Self {
        self.store(((hi as u64) << 32) | lo as u64)
    }

    pub fn set_string(&mut self, s: &str, base: u32) -> Result<&mut Self> {
        let base = check_base(base)?;
        let bits = decode(s, base)?;
        Ok(self.store(bits))
    }

    pub fn from_number(num: f64) -> Result<Self> {
        let mut n = Self::new();
        n.set_number(num)?;
        Ok(n)
    }

    pub fn from_int(num: i32) -> Self {
        let mut n = Self::new();
        n.set_int(num);
        n
    }

    pub fn from_bits(hi: u32, lo: u32) -> Self {
        let mut n = Self::new();
        n.join(hi, lo);
        n
    }

    pub fn from_str_radix(s: &str, base: u32) -> Result<Self> {
        let mut n = Self::new();
        n.set_string(s, base)?;
        Ok(n)
    }

    // Callers have validated `base`.
    pub(crate) fn encode(&self, base: u32) -> String {
        let neg = self.is_neg();
        let magnitude = if neg {
            self.bits.wrapping_neg()
        } else {
            self.bits
        };
        let digits = match base {
            2 => format!("{magnitude:b}"),
            8 => format!("{magnitude:o}"),
            16 => format!("{magnitude:x}"),
            _ => magnitude.to_string(),
        };
        if neg { format!("-{digits}") } else { digits }
    }

    /// Format in base 2, 8, 10 or 16 with a leading `-` when negative
    pub fn to_string_radix(&self, base: u32) -> Result<String> {
        let base = check_base(base)?;
        Ok(self.encode(base))
    }
}

impl Int64<Dynamic> {
    pub fn from_number_mode(num: f64, mode: Mode) -> Result<Self> {
        let mut n = Self::with_mode(mode);
        n.set_number(num)?;
        Ok(n)
    }

    pub fn from_int_mode(num: i32, mode: Mode) -> Self {
        let mut n = Self::with_mode(mode);
        n.set_int(num);
        n
    }

    pub fn from_bits_mode(hi: u32, lo: u32, mode: Mode) -> Self {
        let mut n = Self::with_mode(mode);
        n.join(hi, lo);
        n
    }

    pub fn from_str_mode(s: &str, mode: Mode, base: u32) -> Result<Self> {
        let mut n = Self::with_mode(mode);
        n.set_string(s, base)?;
        Ok(n)
    }
}

impl<M: Signedness> FromStr for Int64<M> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_radix(s, 10)
    }
}

impl<M: Signedness> fmt::Display for Int64<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_neg(), "", self.encode(10).trim_start_matches('-'))
    }
}

impl<M: Signedness> fmt::LowerHex for Int64<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_neg(), "0x", self.encode(16).trim_start_matches('-'))
    }
}

impl<M: Signedness> fmt::Octal for Int64<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_neg(), "0o", self.encode(8).trim_start_matches('-'))
    }
}

impl<M: Signedness> fmt::Binary for Int64<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_neg(), "0b", self.encode(2).trim_start_matches('-'))
    }
}

impl TryFrom<f64> for N64 {
    type Error = Error;

    fn try_from(num: f64) -> Result<Self> {
        N64::from_number(num)
    }
}
