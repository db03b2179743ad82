//! Operator sugar over the checked methods.
//!
//! Operators panic where the named method would return an error (size
//! mismatch, zero divisor), like the primitive integer operators do on
//! division by zero. `/`, `%` and `>>` use the unsigned interpretation.

use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Rem, Shl, Shr, Sub};

use super::BitVec;

macro_rules! impl_binop_for {
    ($tr:ident, $f:ident, $method:ident) => {
        impl<'a> $tr for &'a BitVec {
            type Output = BitVec;

            fn $f(self, rhs: Self) -> Self::Output {
                match BitVec::$method(self, rhs) {
                    Ok(v) => v,
                    Err(e) => panic!("{}", e),
                }
            }
        }
    };
}

impl_binop_for!(Add, add, add);
impl_binop_for!(Sub, sub, sub);
impl_binop_for!(Mul, mul, mul);
impl_binop_for!(Div, div, unsigned_div);
impl_binop_for!(Rem, rem, unsigned_rem);
impl_binop_for!(BitAnd, bitand, and);
impl_binop_for!(BitOr, bitor, or);
impl_binop_for!(BitXor, bitxor, xor);
impl_binop_for!(Shl, shl, shl);
impl_binop_for!(Shr, shr, lshr);

impl<'a> Neg for &'a BitVec {
    type Output = BitVec;

    fn neg(self) -> Self::Output {
        BitVec::neg(self)
    }
}

impl<'a> Not for &'a BitVec {
    type Output = BitVec;

    fn not(self) -> Self::Output {
        BitVec::not(self)
    }
}

impl<'a> Shl<u32> for &'a BitVec {
    type Output = BitVec;

    fn shl(self, rhs: u32) -> Self::Output {
        self.shl_by(rhs as usize)
    }
}

impl<'a> Shr<u32> for &'a BitVec {
    type Output = BitVec;

    fn shr(self, rhs: u32) -> Self::Output {
        self.lshr_by(rhs as usize)
    }
}
