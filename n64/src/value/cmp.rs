//! Ordering and predicates

use super::Int64;
use crate::mode::Signedness;
use std::cmp::Ordering;

impl<M: Signedness> Int64<M> {
    fn order(&self, rhs: u64) -> Ordering {
        if self.is_signed() {
            (self.bits as i64).cmp(&(rhs as i64))
        } else {
            self.bits.cmp(&rhs)
        }
    }

    /// Three-way comparison in this value's mode
    pub fn compare<N: Signedness>(&self, other: &Int64<N>) -> Ordering {
        self.order(other.bits)
    }

    /// Three-way comparison against a 32-bit operand widened per mode
    pub fn comparen(&self, num: i32) -> Ordering {
        self.order(self.widen(num))
    }

    /// Equality against a 32-bit operand widened per mode
    pub fn eqn(&self, num: i32) -> bool {
        self.bits == self.widen(num)
    }

    pub fn gtn(&self, num: i32) -> bool {
        self.comparen(num) == Ordering::Greater
    }

    pub fn gten(&self, num: i32) -> bool {
        self.comparen(num) != Ordering::Less
    }

    pub fn ltn(&self, num: i32) -> bool {
        self.comparen(num) == Ordering::Less
    }

    pub fn lten(&self, num: i32) -> bool {
        self.comparen(num) != Ordering::Greater
    }

    pub fn is_zero(&self) -> bool {
        self.bits == 0
    }

    /// True only in signed mode with the sign bit set
    pub fn is_neg(&self) -> bool {
        self.is_signed() && (self.bits as i64) < 0
    }

    pub fn is_odd(&self) -> bool {
        self.bits & 1 == 1
    }

    pub fn is_even(&self) -> bool {
        self.bits & 1 == 0
    }

    /// The smaller of two values, ordered by `self`'s mode
    pub fn min(self, other: Self) -> Self {
        if other < self { other } else { self }
    }

    /// The larger of two values, ordered by `self`'s mode
    pub fn max(self, other: Self) -> Self {
        if other > self { other } else { self }
    }
}

impl<M: Signedness, N: Signedness> PartialOrd<Int64<N>> for Int64<M> {
    fn partial_cmp(&self, other: &Int64<N>) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

#[cfg(test)]
mod tests {
    use crate::mode::Mode;
    use crate::value::{I64, N64, U64};
    use std::cmp::Ordering;

    #[test]
    fn test_compare_by_mode() {
        let neg_one = N64::from_raw_mode(u64::MAX, Mode::Signed);
        let one = N64::from_raw_mode(1, Mode::Signed);
        assert_eq!(neg_one.compare(&one), Ordering::Less);

        let max = N64::from_raw_mode(u64::MAX, Mode::Unsigned);
        assert_eq!(max.compare(&one), Ordering::Greater);
        assert_eq!(one.compare(&one), Ordering::Equal);
    }

    #[test]
    fn test_receiver_mode_decides() {
        let signed_min = I64::MIN;
        let unsigned_one = U64::from(1u64);
        assert!(signed_min < unsigned_one);
        assert!(unsigned_one < signed_min);
        assert_eq!(I64::MIN.compare(&U64::from(1u64 << 63)), Ordering::Equal);
    }

    #[test]
    fn test_comparen() {
        let s = I64::from(-5i64);
        assert_eq!(s.comparen(-5), Ordering::Equal);
        assert_eq!(s.comparen(-6), Ordering::Greater);
        assert!(s.ltn(0));
        assert!(s.lten(-5));
        assert!(s.gten(-5));
        assert!(!s.gtn(-5));

        // -1 zero-extends to 0xffffffff in unsigned mode
        let u = U64::from(0xffff_ffffu64);
        assert_eq!(u.comparen(-1), Ordering::Equal);
        assert!(U64::MAX.gtn(-1));
    }

    #[test]
    fn test_eqn() {
        assert!(I64::from(-1i64).eqn(-1));
        assert!(!U64::MAX.eqn(-1));
        assert!(U64::from(0xffff_ffffu64).eqn(-1));
    }

    #[test]
    fn test_relational() {
        let a = I64::from(3i64);
        let b = I64::from(4i64);
        assert!(a < b);
        assert!(a <= b);
        assert!(b > a);
        assert!(b >= a);
        assert!(a >= a);
        assert!(!(a > a));
        assert!(I64::from(-1i64) < I64::from(0i64));
        assert!(U64::MAX > U64::from(0u64));
    }

    #[test]
    fn test_predicates() {
        assert!(U64::new().is_zero());
        assert!(I64::from(-2i64).is_neg());
        assert!(!U64::MAX.is_neg());
        assert!(I64::from(-3i64).is_odd());
        assert!(I64::from(-2i64).is_even());
        assert!(!U64::from(7u64).is_even());
    }

    #[test]
    fn test_min_max() {
        let a = I64::from(-10i64);
        let b = I64::from(3i64);
        assert_eq!(a.min(b), a);
        assert_eq!(a.max(b), b);

        let ua = a.to_unsigned();
        let ub = b.to_unsigned();
        assert_eq!(ua.min(ub), ub);
    }
}
