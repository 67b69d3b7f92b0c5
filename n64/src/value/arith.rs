//! Wrapping arithmetic
//!
//! Addition, subtraction and multiplication produce the same bits in both
//! modes, so they work directly on the raw word. Division and modulo
//! reinterpret the operands as `i64` in signed mode.

use super::Int64;
use crate::error::{Error, Result};
use crate::mode::Signedness;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

impl<M: Signedness> Int64<M> {
    pub fn iadd<N: Signedness>(&mut self, other: &Int64<N>) -> &mut Self {
        self.store(self.bits.wrapping_add(other.bits))
    }

    pub fn iaddn(&mut self, num: i32) -> &mut Self {
        let rhs = self.widen(num);
        self.store(self.bits.wrapping_add(rhs))
    }

    pub fn isub<N: Signedness>(&mut self, other: &Int64<N>) -> &mut Self {
        self.store(self.bits.wrapping_sub(other.bits))
    }

    pub fn isubn(&mut self, num: i32) -> &mut Self {
        let rhs = self.widen(num);
        self.store(self.bits.wrapping_sub(rhs))
    }

    pub fn imul<N: Signedness>(&mut self, other: &Int64<N>) -> &mut Self {
        self.store(self.bits.wrapping_mul(other.bits))
    }

    pub fn imuln(&mut self, num: i32) -> &mut Self {
        let rhs = self.widen(num);
        self.store(self.bits.wrapping_mul(rhs))
    }

    /// Square in place
    pub fn isqr(&mut self) -> &mut Self {
        self.store(self.bits.wrapping_mul(self.bits))
    }

    // `i64::MIN / -1` is defined to leave the dividend untouched, which is
    // exactly what `wrapping_div` returns.
    fn quotient(&self, divisor: u64) -> Result<u64> {
        if divisor == 0 {
            return Err(Error::divide_by_zero());
        }
        if self.is_signed() {
            Ok((self.bits as i64).wrapping_div(divisor as i64) as u64)
        } else {
            Ok(self.bits / divisor)
        }
    }

    fn remainder(&self, divisor: u64) -> Result<u64> {
        if divisor == 0 {
            return Err(Error::divide_by_zero());
        }
        if self.is_signed() {
            Ok((self.bits as i64).wrapping_rem(divisor as i64) as u64)
        } else {
            Ok(self.bits % divisor)
        }
    }

    pub fn idiv<N: Signedness>(&mut self, other: &Int64<N>) -> Result<&mut Self> {
        let q = self.quotient(other.bits)?;
        Ok(self.store(q))
    }

    pub fn idivn(&mut self, num: i32) -> Result<&mut Self> {
        let q = self.quotient(self.widen(num))?;
        Ok(self.store(q))
    }

    pub fn imod<N: Signedness>(&mut self, other: &Int64<N>) -> Result<&mut Self> {
        let r = self.remainder(other.bits)?;
        Ok(self.store(r))
    }

    pub fn imodn(&mut self, num: i32) -> Result<&mut Self> {
        let r = self.remainder(self.widen(num))?;
        Ok(self.store(r))
    }

    /// Raise to `exp` by square-and-multiply.
    ///
    /// A zero base is left as zero for every exponent, including zero.
    pub fn ipown(&mut self, exp: u32) -> &mut Self {
        if self.bits == 0 {
            return self;
        }

        let mut x = self.bits;
        let mut y = exp;
        let mut n: u64 = 1;

        while y > 0 {
            if y & 1 == 1 {
                n = n.wrapping_mul(x);
            }
            y >>= 1;
            x = x.wrapping_mul(x);
        }

        self.store(n)
    }

    /// Raise to the power given by the low 32 bits of `other`.
    pub fn ipow<N: Signedness>(&mut self, other: &Int64<N>) -> &mut Self {
        self.ipown(other.lo())
    }

    /// Two's-complement negation, independent of mode
    pub fn ineg(&mut self) -> &mut Self {
        self.store((!self.bits).wrapping_add(1))
    }

    /// Negate when negative in the current mode
    pub fn iabs(&mut self) -> &mut Self {
        if self.is_neg() {
            self.ineg();
        }
        self
    }

    pub fn div<N: Signedness>(&self, other: &Int64<N>) -> Result<Self> {
        let mut n = *self;
        n.idiv(other)?;
        Ok(n)
    }

    pub fn rem<N: Signedness>(&self, other: &Int64<N>) -> Result<Self> {
        let mut n = *self;
        n.imod(other)?;
        Ok(n)
    }

    pub fn pown(&self, exp: u32) -> Self {
        let mut n = *self;
        n.ipown(exp);
        n
    }

    pub fn abs(&self) -> Self {
        let mut n = *self;
        n.iabs();
        n
    }
}

macro_rules! wrapping_binop {
    ($op:ident, $method:ident, $assign:ident, $assign_method:ident, $inplace:ident) => {
        impl<M: Signedness, N: Signedness> $op<Int64<N>> for Int64<M> {
            type Output = Int64<M>;

            fn $method(mut self, rhs: Int64<N>) -> Int64<M> {
                self.$inplace(&rhs);
                self
            }
        }

        impl<M: Signedness, N: Signedness> $assign<Int64<N>> for Int64<M> {
            fn $assign_method(&mut self, rhs: Int64<N>) {
                self.$inplace(&rhs);
            }
        }
    };
}

wrapping_binop!(Add, add, AddAssign, add_assign, iadd);
wrapping_binop!(Sub, sub, SubAssign, sub_assign, isub);
wrapping_binop!(Mul, mul, MulAssign, mul_assign, imul);

impl<M: Signedness> Neg for Int64<M> {
    type Output = Int64<M>;

    fn neg(mut self) -> Int64<M> {
        self.ineg();
        self
    }
}
