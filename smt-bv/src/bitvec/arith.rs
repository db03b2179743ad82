use num_bigint::BigUint;
use num_traits::{Signed, ToPrimitive, Zero};

use super::{lookup_mask, BitVec, Operand};
use crate::error::Error;

impl BitVec {
    pub fn add<O: Operand + ?Sized>(&self, rhs: &O) -> Result<Self, Error> {
        let rhs = self.operand("add", rhs)?;
        Ok(Self::from_biguint_with(&self.0 + &rhs.0, self.bits()))
    }

    pub fn sub<O: Operand + ?Sized>(&self, rhs: &O) -> Result<Self, Error> {
        let rhs = self.operand("sub", rhs)?;
        Ok(Self::from_bigint_with(
            self.unsigned_value() - rhs.unsigned_value(),
            self.bits(),
        ))
    }

    pub fn mul<O: Operand + ?Sized>(&self, rhs: &O) -> Result<Self, Error> {
        let rhs = self.operand("mul", rhs)?;
        Ok(Self::from_biguint_with(&self.0 * &rhs.0, self.bits()))
    }

    pub fn unsigned_div<O: Operand + ?Sized>(&self, rhs: &O) -> Result<Self, Error> {
        let rhs = self.operand("unsigned_div", rhs)?;
        if rhs.is_zero() {
            return Err(Error::DivideByZero { op: "unsigned_div" });
        }
        Ok(Self(&self.0 / &rhs.0, self.bits()))
    }

    pub fn unsigned_rem<O: Operand + ?Sized>(&self, rhs: &O) -> Result<Self, Error> {
        let rhs = self.operand("unsigned_rem", rhs)?;
        if rhs.is_zero() {
            return Err(Error::DivideByZero { op: "unsigned_rem" });
        }
        Ok(Self(&self.0 % &rhs.0, self.bits()))
    }

    /// Signed division, rounding toward zero.
    pub fn signed_div<O: Operand + ?Sized>(&self, rhs: &O) -> Result<Self, Error> {
        let rhs = self.operand("signed_div", rhs)?;
        if rhs.is_zero() {
            return Err(Error::DivideByZero { op: "signed_div" });
        }
        Ok(Self::from_bigint_with(
            self.signed_value() / rhs.signed_value(),
            self.bits(),
        ))
    }

    /// Signed remainder; a non-zero result has the sign of the dividend.
    pub fn signed_rem<O: Operand + ?Sized>(&self, rhs: &O) -> Result<Self, Error> {
        let rhs = self.operand("signed_rem", rhs)?;
        if rhs.is_zero() {
            return Err(Error::DivideByZero { op: "signed_rem" });
        }
        Ok(Self::from_bigint_with(
            self.signed_value() % rhs.signed_value(),
            self.bits(),
        ))
    }

    /// Signed modulo; a non-zero result has the sign of the divisor.
    pub fn signed_mod<O: Operand + ?Sized>(&self, rhs: &O) -> Result<Self, Error> {
        let rhs = self.operand("signed_mod", rhs)?;
        if rhs.is_zero() {
            return Err(Error::DivideByZero { op: "signed_mod" });
        }

        let d = rhs.signed_value();
        let r = self.signed_value() % &d;

        let r = if !r.is_zero() && r.is_negative() != d.is_negative() {
            r + d
        } else {
            r
        };
        Ok(Self::from_bigint_with(r, self.bits()))
    }

    pub fn neg(&self) -> Self {
        Self::from_bigint_with(-self.unsigned_value(), self.bits())
    }

    /// Magnitude of the signed reading; the most negative value maps to itself.
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            self.neg()
        } else {
            self.clone()
        }
    }

    pub fn not(&self) -> Self {
        Self(&self.0 ^ &*lookup_mask(self.bits()), self.bits())
    }

    pub fn and<O: Operand + ?Sized>(&self, rhs: &O) -> Result<Self, Error> {
        let rhs = self.operand("and", rhs)?;
        Ok(Self(&self.0 & &rhs.0, self.bits()))
    }

    pub fn or<O: Operand + ?Sized>(&self, rhs: &O) -> Result<Self, Error> {
        let rhs = self.operand("or", rhs)?;
        Ok(Self(&self.0 | &rhs.0, self.bits()))
    }

    pub fn xor<O: Operand + ?Sized>(&self, rhs: &O) -> Result<Self, Error> {
        let rhs = self.operand("xor", rhs)?;
        Ok(Self(&self.0 ^ &rhs.0, self.bits()))
    }

    // shift amounts that do not fit a usize are at least `bits`
    fn shift_amount(&self, amount: &BigUint) -> usize {
        amount
            .to_usize()
            .map(|n| n.min(self.bits()))
            .unwrap_or_else(|| self.bits())
    }

    pub(crate) fn shl_by(&self, amount: usize) -> Self {
        if amount >= self.bits() {
            Self(BigUint::zero(), self.bits())
        } else {
            Self::from_biguint_with(&self.0 << amount, self.bits())
        }
    }

    pub(crate) fn lshr_by(&self, amount: usize) -> Self {
        if amount >= self.bits() {
            Self(BigUint::zero(), self.bits())
        } else {
            Self(&self.0 >> amount, self.bits())
        }
    }

    pub(crate) fn ashr_by(&self, amount: usize) -> Self {
        let size = self.bits();
        if !self.msb() {
            self.lshr_by(amount)
        } else if amount >= size {
            Self(lookup_mask(size).into_owned(), size)
        } else {
            // perform ASR
            let smask = lookup_mask(size);
            let mask = &*smask ^ &*lookup_mask(size - amount);
            Self((&self.0 >> amount) | mask, size)
        }
    }

    pub fn shl<O: Operand + ?Sized>(&self, rhs: &O) -> Result<Self, Error> {
        let rhs = self.operand("shl", rhs)?;
        Ok(self.shl_by(self.shift_amount(&rhs.0)))
    }

    pub fn lshr<O: Operand + ?Sized>(&self, rhs: &O) -> Result<Self, Error> {
        let rhs = self.operand("lshr", rhs)?;
        Ok(self.lshr_by(self.shift_amount(&rhs.0)))
    }

    pub fn ashr<O: Operand + ?Sized>(&self, rhs: &O) -> Result<Self, Error> {
        let rhs = self.operand("ashr", rhs)?;
        Ok(self.ashr_by(self.shift_amount(&rhs.0)))
    }

    pub fn unsigned_min<O: Operand + ?Sized>(&self, rhs: &O) -> Result<Self, Error> {
        let rhs = self.operand("unsigned_min", rhs)?;
        Ok(if self.0 <= rhs.0 {
            self.clone()
        } else {
            rhs.into_owned()
        })
    }

    pub fn unsigned_max<O: Operand + ?Sized>(&self, rhs: &O) -> Result<Self, Error> {
        let rhs = self.operand("unsigned_max", rhs)?;
        Ok(if self.0 >= rhs.0 {
            self.clone()
        } else {
            rhs.into_owned()
        })
    }
}
