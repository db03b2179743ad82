use num_bigint::BigUint;
use num_traits::Zero;

use super::{check_bits, lookup_mask, BitVec};
use crate::error::{Error, RangeError};

impl BitVec {
    /// Grows the vector by `additional` bits, filling them with zeros or, if
    /// `signed` is set, with copies of the sign bit.
    pub fn extend(&self, additional: usize, signed: bool) -> Self {
        let bits = self.bits() + additional;
        if signed && additional > 0 && self.msb() {
            let extm = &*lookup_mask(bits) ^ &*lookup_mask(self.bits());
            Self(&self.0 | &extm, bits)
        } else {
            Self(self.0.clone(), bits)
        }
    }

    /// Grows (see [`BitVec::extend`]) or truncates to `bits`. Truncation keeps
    /// the low bits whatever the value of `signed`.
    pub fn resize(&self, bits: usize, signed: bool) -> Result<Self, Error> {
        check_bits(bits)?;
        Ok(if bits > self.bits() {
            self.extend(bits - self.bits(), signed)
        } else if bits < self.bits() {
            Self::from_biguint_with(self.0.clone(), bits)
        } else {
            self.clone()
        })
    }

    pub fn signed_resize(&self, bits: usize) -> Result<Self, Error> {
        self.resize(bits, true)
    }

    pub fn unsigned_resize(&self, bits: usize) -> Result<Self, Error> {
        self.resize(bits, false)
    }

    /// Bits `high..=low` as a vector of `high - low + 1` bits.
    pub fn extract(&self, high: usize, low: usize) -> Result<Self, Error> {
        if high >= self.bits() {
            return Err(RangeError::ExtractHigh {
                high,
                width: self.bits(),
            }
            .into());
        }
        if low > high {
            return Err(RangeError::ExtractOrder { low, high }.into());
        }
        Ok(Self::from_biguint_with(&self.0 >> low, high - low + 1))
    }

    /// Tiles the bit pattern until it fills `bits`; the first copy occupies
    /// the low bits.
    pub fn repeat(&self, bits: usize) -> Result<Self, Error> {
        if bits == 0 || bits % self.bits() != 0 {
            return Err(RangeError::RepeatWidth {
                width: self.bits(),
                target: bits,
            }
            .into());
        }

        let mut value = BigUint::zero();
        for i in 0..bits / self.bits() {
            value |= &self.0 << (i * self.bits());
        }
        Ok(Self(value, bits))
    }

    /// `self` in the high bits, `low` in the low bits.
    pub fn concat(&self, low: &BitVec) -> Self {
        Self((&self.0 << low.bits()) | &low.0, self.bits() + low.bits())
    }

    pub fn rotate_left(&self, amount: usize) -> Self {
        let size = self.bits();
        let amount = amount % size;
        if amount == 0 {
            return self.clone();
        }
        let v = (&self.0 << amount) | (&self.0 >> (size - amount));
        Self::from_biguint_with(v, size)
    }

    pub fn rotate_right(&self, amount: usize) -> Self {
        let amount = amount % self.bits();
        if amount == 0 {
            return self.clone();
        }
        self.rotate_left(self.bits() - amount)
    }

    pub fn count_ones(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn count_zeros(&self) -> usize {
        self.bits() - self.count_ones()
    }

    pub fn leading_zeros(&self) -> usize {
        self.bits() - self.0.bits() as usize
    }

    pub fn leading_ones(&self) -> usize {
        let mut lo = 0;
        let mut pos = self.bits();
        while pos > 0 && self.bit(pos - 1) {
            lo += 1;
            pos -= 1;
        }
        lo
    }

    pub fn trailing_zeros(&self) -> usize {
        self.0
            .trailing_zeros()
            .map(|tz| tz as usize)
            .unwrap_or_else(|| self.bits())
    }
}
