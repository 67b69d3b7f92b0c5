//! Bitwise operations and shifts

use super::Int64;
use crate::mode::Signedness;
use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr,
    ShrAssign,
};

impl<M: Signedness> Int64<M> {
    pub fn iand<N: Signedness>(&mut self, other: &Int64<N>) -> &mut Self {
        self.store(self.bits & other.bits)
    }

    pub fn iandn(&mut self, num: i32) -> &mut Self {
        let rhs = self.widen(num);
        self.store(self.bits & rhs)
    }

    pub fn ior<N: Signedness>(&mut self, other: &Int64<N>) -> &mut Self {
        self.store(self.bits | other.bits)
    }

    pub fn iorn(&mut self, num: i32) -> &mut Self {
        let rhs = self.widen(num);
        self.store(self.bits | rhs)
    }

    pub fn ixor<N: Signedness>(&mut self, other: &Int64<N>) -> &mut Self {
        self.store(self.bits ^ other.bits)
    }

    pub fn ixorn(&mut self, num: i32) -> &mut Self {
        let rhs = self.widen(num);
        self.store(self.bits ^ rhs)
    }

    pub fn inot(&mut self) -> &mut Self {
        self.store(!self.bits)
    }

    /// Left shift by `bits & 63`
    pub fn ishln(&mut self, bits: u32) -> &mut Self {
        self.store(self.bits << (bits & 63))
    }

    pub fn ishl<N: Signedness>(&mut self, other: &Int64<N>) -> &mut Self {
        self.ishln(other.lo())
    }

    /// Right shift by `bits & 63`; arithmetic in signed mode, logical otherwise
    pub fn ishrn(&mut self, bits: u32) -> &mut Self {
        if !self.is_signed() {
            return self.iushrn(bits);
        }
        self.store(((self.bits as i64) >> (bits & 63)) as u64)
    }

    pub fn ishr<N: Signedness>(&mut self, other: &Int64<N>) -> &mut Self {
        self.ishrn(other.lo())
    }

    /// Logical right shift by `bits & 63`, whatever the mode
    pub fn iushrn(&mut self, bits: u32) -> &mut Self {
        self.store(self.bits >> (bits & 63))
    }

    pub fn iushr<N: Signedness>(&mut self, other: &Int64<N>) -> &mut Self {
        self.iushrn(other.lo())
    }

    /// Set or clear bit `bit & 63`
    pub fn setn(&mut self, bit: u32, on: bool) -> &mut Self {
        let mask = 1u64 << (bit & 63);
        if on {
            self.store(self.bits | mask)
        } else {
            self.store(self.bits & !mask)
        }
    }

    /// 1 when bit `bit & 63` is set, else 0
    pub fn testn(&self, bit: u32) -> u32 {
        ((self.bits >> (bit & 63)) & 1) as u32
    }

    /// Keep only the bits below position `bit & 63`
    pub fn imaskn(&mut self, bit: u32) -> &mut Self {
        let mask = (1u64 << (bit & 63)) - 1;
        self.store(self.bits & mask)
    }

    /// AND of the low word with `num`
    pub fn andln(&self, num: u32) -> u32 {
        self.lo() & num
    }

    /// Position of the highest set bit plus one, over the magnitude when negative
    pub fn bit_length(&self) -> u32 {
        let magnitude = if self.is_neg() {
            self.bits.wrapping_neg()
        } else {
            self.bits
        };
        64 - magnitude.leading_zeros()
    }

    pub fn byte_length(&self) -> u32 {
        self.bit_length().div_ceil(8)
    }

    pub fn shln(&self, bits: u32) -> Self {
        let mut n = *self;
        n.ishln(bits);
        n
    }

    pub fn shrn(&self, bits: u32) -> Self {
        let mut n = *self;
        n.ishrn(bits);
        n
    }

    pub fn ushrn(&self, bits: u32) -> Self {
        let mut n = *self;
        n.iushrn(bits);
        n
    }

    pub fn maskn(&self, bit: u32) -> Self {
        let mut n = *self;
        n.imaskn(bit);
        n
    }
}

macro_rules! bitwise_binop {
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

bitwise_binop!(BitAnd, bitand, BitAndAssign, bitand_assign, iand);
bitwise_binop!(BitOr, bitor, BitOrAssign, bitor_assign, ior);
bitwise_binop!(BitXor, bitxor, BitXorAssign, bitxor_assign, ixor);

impl<M: Signedness> Not for Int64<M> {
    type Output = Int64<M>;

    fn not(mut self) -> Int64<M> {
        self.inot();
        self
    }
}

impl<M: Signedness> Shl<u32> for Int64<M> {
    type Output = Int64<M>;

    fn shl(mut self, bits: u32) -> Int64<M> {
        self.ishln(bits);
        self
    }
}

impl<M: Signedness> ShlAssign<u32> for Int64<M> {
    fn shl_assign(&mut self, bits: u32) {
        self.ishln(bits);
    }
}

impl<M: Signedness> Shr<u32> for Int64<M> {
    type Output = Int64<M>;

    fn shr(mut self, bits: u32) -> Int64<M> {
        self.ishrn(bits);
        self
    }
}

impl<M: Signedness> ShrAssign<u32> for Int64<M> {
    fn shr_assign(&mut self, bits: u32) {
        self.ishrn(bits);
    }
}
