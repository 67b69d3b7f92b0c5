//! Argument marshaling for host calls

use super::Operand;
use crate::error::{Error, ErrorKind, Result};
use crate::mode::Mode;
use crate::value::N64;

const TWO_32: f64 = 4294967296.0;

/// Reduce a double modulo 2^32 the way host engines coerce to uint32.
/// Non-finite values become zero.
pub fn to_uint32(num: f64) -> u32 {
    if !num.is_finite() {
        return 0;
    }
    num.trunc().rem_euclid(TWO_32) as u32
}

pub(super) struct Args<'a> {
    method: &'a str,
    args: &'a [Operand],
}

impl<'a> Args<'a> {
    pub fn new(method: &'a str, args: &'a [Operand]) -> Self {
        Args { method, args }
    }

    pub fn get(&self, index: usize) -> Option<&'a Operand> {
        self.args.get(index)
    }

    pub fn require(&self, count: usize) -> Result<()> {
        if self.args.len() < count {
            return Err(Error::missing_operand(self.method, count));
        }
        Ok(())
    }

    fn at(&self, index: usize) -> Result<&'a Operand> {
        self.require(index + 1)?;
        Ok(&self.args[index])
    }

    pub fn number(&self, index: usize, name: &str) -> Result<f64> {
        match self.at(index)? {
            Operand::Number(n) => Ok(*n),
            _ => Err(Error::invalid_type(name, "number")),
        }
    }

    pub fn uint32(&self, index: usize, name: &str) -> Result<u32> {
        self.number(index, name).map(to_uint32)
    }

    pub fn int32(&self, index: usize, name: &str) -> Result<i32> {
        self.uint32(index, name).map(|n| n as i32)
    }

    pub fn int64(&self, index: usize, name: &str) -> Result<N64> {
        match self.at(index)? {
            Operand::Int64(n) => Ok(*n),
            _ => Err(Error::invalid_type(name, "int64")),
        }
    }

    pub fn string(&self, index: usize, name: &str) -> Result<&'a str> {
        match self.at(index)? {
            Operand::Str(s) => Ok(s.as_str()),
            _ => Err(Error::invalid_type(name, "string")),
        }
    }

    pub fn boolean(&self, index: usize, name: &str) -> Result<bool> {
        match self.at(index)? {
            Operand::Bool(b) => Ok(*b),
            _ => Err(Error::invalid_type(name, "boolean")),
        }
    }

    /// A boolean, or a number read as nonzero
    pub fn truthy(&self, index: usize, name: &str) -> Result<bool> {
        match self.at(index)? {
            Operand::Bool(b) => Ok(*b),
            Operand::Number(n) => Ok(*n != 0.0),
            _ => Err(Error::invalid_type(name, "boolean")),
        }
    }

    /// Optional boolean; absent and null both read as `None`.
    pub fn flag(&self, index: usize, name: &str) -> Result<Option<bool>> {
        match self.get(index) {
            None | Some(Operand::Null) => Ok(None),
            Some(Operand::Bool(b)) => Ok(Some(*b)),
            Some(_) => Err(Error::invalid_type(name, "boolean")),
        }
    }

    pub fn mode_or(&self, index: usize, fallback: Mode) -> Result<Mode> {
        Ok(self
            .flag(index, "signed")?
            .map_or(fallback, Mode::from_signed))
    }

    /// Optional radix, 10 when absent
    pub fn base(&self, index: usize) -> Result<u32> {
        match self.get(index) {
            None | Some(Operand::Null) => Ok(10),
            Some(Operand::Number(n)) if n.is_finite() && n.fract() == 0.0 => {
                if *n < 0.0 || *n > u32::MAX as f64 {
                    return Err(Error::new(
                        ErrorKind::InvalidBase,
                        format!("base must be one of 2, 8, 10 or 16, got {n}"),
                    ));
                }
                Ok(*n as u32)
            }
            Some(_) => Err(Error::invalid_type("base", "integer")),
        }
    }
}
