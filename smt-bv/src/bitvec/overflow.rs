//! Overflow and underflow predicates.
//!
//! Each predicate computes the exact result of its operation and checks it
//! against one bound of the representable range: "overflow" predicates check
//! the upper bound and "underflow" predicates the lower bound. None of them
//! fails except on mismatched sizes.

use num_bigint::BigInt;
use num_traits::One;

use super::{BitVec, Operand};
use crate::error::Error;

impl BitVec {
    fn unsigned_upper(&self) -> BigInt {
        (BigInt::one() << self.bits()) - 1
    }

    fn signed_upper(&self) -> BigInt {
        (BigInt::one() << (self.bits() - 1)) - 1
    }

    fn signed_lower(&self) -> BigInt {
        -(BigInt::one() << (self.bits() - 1))
    }

    pub fn add_no_overflow<O: Operand + ?Sized>(&self, rhs: &O, signed: bool) -> Result<bool, Error> {
        let rhs = self.operand("add_no_overflow", rhs)?;
        Ok(if signed {
            self.signed_value() + rhs.signed_value() <= self.signed_upper()
        } else {
            self.unsigned_value() + rhs.unsigned_value() <= self.unsigned_upper()
        })
    }

    pub fn signed_add_no_underflow<O: Operand + ?Sized>(&self, rhs: &O) -> Result<bool, Error> {
        let rhs = self.operand("signed_add_no_underflow", rhs)?;
        Ok(self.signed_value() + rhs.signed_value() >= self.signed_lower())
    }

    pub fn signed_sub_no_overflow<O: Operand + ?Sized>(&self, rhs: &O) -> Result<bool, Error> {
        let rhs = self.operand("signed_sub_no_overflow", rhs)?;
        Ok(self.signed_value() - rhs.signed_value() <= self.signed_upper())
    }

    pub fn sub_no_underflow<O: Operand + ?Sized>(&self, rhs: &O, signed: bool) -> Result<bool, Error> {
        let rhs = self.operand("sub_no_underflow", rhs)?;
        Ok(if signed {
            self.signed_value() - rhs.signed_value() >= self.signed_lower()
        } else {
            self.0 >= rhs.0
        })
    }

    pub fn mul_no_overflow<O: Operand + ?Sized>(&self, rhs: &O, signed: bool) -> Result<bool, Error> {
        let rhs = self.operand("mul_no_overflow", rhs)?;
        Ok(if signed {
            self.signed_value() * rhs.signed_value() <= self.signed_upper()
        } else {
            self.unsigned_value() * rhs.unsigned_value() <= self.unsigned_upper()
        })
    }

    pub fn signed_mul_no_underflow<O: Operand + ?Sized>(&self, rhs: &O) -> Result<bool, Error> {
        let rhs = self.operand("signed_mul_no_underflow", rhs)?;
        Ok(self.signed_value() * rhs.signed_value() >= self.signed_lower())
    }

    /// Only `MIN / -1` overflows. A zero divisor has no quotient to overflow.
    pub fn signed_div_no_overflow<O: Operand + ?Sized>(&self, rhs: &O) -> Result<bool, Error> {
        let rhs = self.operand("signed_div_no_overflow", rhs)?;
        if rhs.is_zero() {
            return Ok(true);
        }
        Ok(self.signed_value() / rhs.signed_value() <= self.signed_upper())
    }

    /// Only the most negative value overflows under negation.
    pub fn signed_neg_no_overflow(&self) -> bool {
        -self.signed_value() <= self.signed_upper()
    }

    pub fn is_signed_min(&self) -> bool {
        self.msb() && self.0.count_ones() == 1
    }
}
