//! The 64-bit integer value type
//!
//! `Int64<M>` is one 64-bit word plus an interpretation policy. Every
//! mutating operation is `i`-prefixed, takes `&mut self` and hands the same
//! value back so calls can be chained:
//!
//! ```
//! use n64::{Mode, N64};
//!
//! let mut n = N64::from_int_mode(-1, Mode::Signed);
//! n.iaddn(3).imuln(10);
//! assert_eq!(n.to_string(), "20");
//! ```

mod arith;
mod bits;
mod cmp;
mod convert;
mod serialize;

use crate::mode::{Dynamic, Mode, Signed, Signedness, Unsigned};
use std::fmt;
use std::hash::{Hash, Hasher};

pub use convert::{MAX_SAFE_INTEGER, RADIXES};

/// A 64-bit integer interpreted through the policy `M`
#[derive(Clone, Copy)]
pub struct Int64<M: Signedness = Dynamic> {
    bits: u64,
    mode: M,
}

/// Value whose mode can change at runtime
pub type N64 = Int64<Dynamic>;
/// Value fixed to signed interpretation
pub type I64 = Int64<Signed>;
/// Value fixed to unsigned interpretation
pub type U64 = Int64<Unsigned>;

impl<M: Signedness> Int64<M> {
    /// Zero, in the policy's default mode
    pub fn new() -> Self {
        Int64 {
            bits: 0,
            mode: M::default(),
        }
    }

    /// Wrap a raw bit pattern
    pub fn from_raw(bits: u64) -> Self {
        Int64 {
            bits,
            mode: M::default(),
        }
    }

    pub(crate) fn with_policy(bits: u64, mode: M) -> Self {
        Int64 { bits, mode }
    }

    /// The raw two's-complement bits
    pub fn raw(&self) -> u64 {
        self.bits
    }

    pub fn mode(&self) -> Mode {
        self.mode.mode()
    }

    pub fn is_signed(&self) -> bool {
        self.mode().is_signed()
    }

    /// Commit a fully computed bit pattern.
    pub(crate) fn store(&mut self, bits: u64) -> &mut Self {
        self.bits = bits;
        self
    }

    /// Widen a 32-bit operand: sign-extend when signed, zero-extend otherwise.
    pub(crate) fn widen(&self, num: i32) -> u64 {
        if self.is_signed() {
            num as i64 as u64
        } else {
            num as u32 as u64
        }
    }

    /// Upper 32 bits
    pub fn hi(&self) -> u32 {
        (self.bits >> 32) as u32
    }

    /// Lower 32 bits
    pub fn lo(&self) -> u32 {
        self.bits as u32
    }

    pub fn set_hi(&mut self, hi: u32) -> &mut Self {
        self.store(((hi as u64) << 32) | (self.bits & 0xffff_ffff))
    }

    pub fn set_lo(&mut self, lo: u32) -> &mut Self {
        self.store((self.bits & !0xffff_ffff) | lo as u64)
    }

    /// Copy another value's bits, and its mode when `M` is `Dynamic`.
    pub fn inject<N: Signedness>(&mut self, other: &Int64<N>) -> &mut Self {
        self.mode.inherit(other.mode());
        self.store(other.bits)
    }

    /// Same bits, read as signed
    pub fn to_signed(&self) -> I64 {
        Int64::with_policy(self.bits, Signed)
    }

    /// Same bits, read as unsigned
    pub fn to_unsigned(&self) -> U64 {
        Int64::with_policy(self.bits, Unsigned)
    }

    /// Same bits under a runtime-changeable mode
    pub fn to_dynamic(&self) -> N64 {
        Int64::with_policy(self.bits, Dynamic::new(self.mode()))
    }
}

impl Int64<Dynamic> {
    /// Zero in the given mode
    pub fn with_mode(mode: Mode) -> Self {
        Int64::with_policy(0, Dynamic::new(mode))
    }

    /// Raw bits in the given mode
    pub fn from_raw_mode(bits: u64, mode: Mode) -> Self {
        Int64::with_policy(bits, Dynamic::new(mode))
    }

    /// Change the interpretation mode. The bits are untouched.
    pub fn set_signed(&mut self, signed: bool) -> &mut Self {
        self.mode = Dynamic::new(Mode::from_signed(signed));
        self
    }

    pub fn set_mode(&mut self, mode: Mode) -> &mut Self {
        self.mode = Dynamic::new(mode);
        self
    }
}

impl I64 {
    pub const MIN: I64 = Int64 {
        bits: 0x8000_0000_0000_0000,
        mode: Signed,
    };
    pub const MAX: I64 = Int64 {
        bits: 0x7fff_ffff_ffff_ffff,
        mode: Signed,
    };
    pub const INT32_MIN: I64 = Int64 {
        bits: 0xffff_ffff_8000_0000,
        mode: Signed,
    };
    pub const INT32_MAX: I64 = Int64 {
        bits: 0x0000_0000_7fff_ffff,
        mode: Signed,
    };
}

impl U64 {
    pub const MIN: U64 = Int64 {
        bits: 0,
        mode: Unsigned,
    };
    pub const MAX: U64 = Int64 {
        bits: u64::MAX,
        mode: Unsigned,
    };
    pub const UINT32_MAX: U64 = Int64 {
        bits: 0xffff_ffff,
        mode: Unsigned,
    };
}

impl<M: Signedness> Default for Int64<M> {
    fn default() -> Self {
        Self::new()
    }
}

// Equality is on raw bits only, whatever the modes.
impl<M: Signedness, N: Signedness> PartialEq<Int64<N>> for Int64<M> {
    fn eq(&self, other: &Int64<N>) -> bool {
        self.bits == other.bits
    }
}

impl<M: Signedness> Eq for Int64<M> {}

impl<M: Signedness> Hash for Int64<M> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl<M: Signedness> fmt::Debug for Int64<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}: {}>", self.mode().prefix(), self.encode(10))
    }
}

impl From<I64> for N64 {
    fn from(value: I64) -> Self {
        value.to_dynamic()
    }
}

impl From<U64> for N64 {
    fn from(value: U64) -> Self {
        value.to_dynamic()
    }
}

impl From<i64> for I64 {
    fn from(value: i64) -> Self {
        Int64::from_raw(value as u64)
    }
}

impl From<u64> for U64 {
    fn from(value: u64) -> Self {
        Int64::from_raw(value)
    }
}

impl From<I64> for i64 {
    fn from(value: I64) -> Self {
        value.bits as i64
    }
}

impl From<U64> for u64 {
    fn from(value: U64) -> Self {
        value.bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zero() {
        let n = N64::new();
        assert_eq!(n.raw(), 0);
        assert_eq!(n.mode(), Mode::Unsigned);
        assert_eq!(I64::new().mode(), Mode::Signed);
    }

    #[test]
    fn test_halves() {
        let mut n = N64::from_raw(0x1234_5678_9abc_def0);
        assert_eq!(n.hi(), 0x1234_5678);
        assert_eq!(n.lo(), 0x9abc_def0);

        n.set_hi(0xffff_ffff);
        assert_eq!(n.raw(), 0xffff_ffff_9abc_def0);
        n.set_lo(1);
        assert_eq!(n.raw(), 0xffff_ffff_0000_0001);
    }

    #[test]
    fn test_set_signed_keeps_bits() {
        let mut n = N64::from_raw(u64::MAX);
        n.set_signed(true);
        assert_eq!(n.raw(), u64::MAX);
        assert!(n.is_signed());
        n.set_signed(false);
        assert_eq!(n.raw(), u64::MAX);
        assert_eq!(n.mode(), Mode::Unsigned);
    }

    #[test]
    fn test_inject_copies_mode_for_dynamic() {
        let src = N64::from_raw_mode(7, Mode::Signed);
        let mut dst = N64::new();
        dst.inject(&src);
        assert_eq!(dst.raw(), 7);
        assert!(dst.is_signed());
    }

    #[test]
    fn test_inject_keeps_fixed_mode() {
        let src = N64::from_raw_mode(9, Mode::Signed);
        let mut dst = U64::new();
        dst.inject(&src);
        assert_eq!(dst.raw(), 9);
        assert!(!dst.is_signed());
    }

    #[test]
    fn test_equality_ignores_mode() {
        let a = N64::from_raw_mode(5, Mode::Signed);
        let b = U64::from_raw(5);
        assert_eq!(a, b);
        assert_ne!(a, U64::from_raw(6));
    }

    #[test]
    fn test_debug_inspect() {
        assert_eq!(format!("{:?}", I64::from(-5i64)), "<I64: -5>");
        assert_eq!(format!("{:?}", U64::from(5u64)), "<U64: 5>");
    }

    #[test]
    fn test_constants() {
        assert_eq!(i64::from(I64::MIN), i64::MIN);
        assert_eq!(i64::from(I64::MAX), i64::MAX);
        assert_eq!(u64::from(U64::MAX), u64::MAX);
        assert_eq!(i64::from(I64::INT32_MIN), i32::MIN as i64);
        assert_eq!(u64::from(U64::UINT32_MAX), u32::MAX as u64);
    }

    #[test]
    fn test_reinterpret() {
        let n = I64::from(-1i64);
        assert_eq!(n.to_unsigned().raw(), u64::MAX);
        assert!(n.to_dynamic().is_signed());
        assert!(!N64::from(U64::MAX).is_signed());
    }
}
