use std::borrow::Cow;
use std::cmp::Ordering;

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::Error;

mod arith;
mod convert;
mod format;
mod mask_table;
mod operand;
mod ops;
mod overflow;
mod structure;

pub use self::convert::Endian;
pub use self::mask_table::MASK_TABLE_BITS;
pub use self::operand::Operand;

use self::mask_table::lookup_mask;

/// BitVec(magnitude, number of bits)
///
/// The magnitude is always kept within `[0, 2^bits)`; signed readings are
/// derived from it on demand using two's complement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(try_from = "RawBitVec", into = "RawBitVec")
)]
pub struct BitVec(pub(crate) BigUint, pub(crate) usize);

#[cfg(feature = "serde")]
#[derive(serde::Deserialize, serde::Serialize)]
struct RawBitVec {
    value: BigUint,
    bits: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawBitVec> for BitVec {
    type Error = Error;

    fn try_from(raw: RawBitVec) -> Result<Self, Self::Error> {
        BitVec::from_biguint(raw.value, raw.bits)
    }
}

#[cfg(feature = "serde")]
impl From<BitVec> for RawBitVec {
    fn from(bv: BitVec) -> Self {
        RawBitVec {
            value: bv.0,
            bits: bv.1,
        }
    }
}

#[inline(always)]
fn check_bits(bits: usize) -> Result<(), Error> {
    if bits == 0 {
        Err(Error::InvalidWidth)
    } else {
        Ok(())
    }
}

impl BitVec {
    pub fn from_bigint(v: BigInt, bits: usize) -> Result<Self, Error> {
        check_bits(bits)?;
        Ok(Self::from_bigint_with(v, bits))
    }

    pub fn from_biguint(v: BigUint, bits: usize) -> Result<Self, Error> {
        check_bits(bits)?;
        Ok(Self::from_biguint_with(v, bits))
    }

    // callers guarantee `bits > 0`
    pub(crate) fn from_bigint_with(v: BigInt, bits: usize) -> Self {
        if v.sign() == Sign::Minus {
            let modulus = BigInt::from(lookup_mask(bits).into_owned() + 1u32);
            let (_, magnitude) = v.mod_floor(&modulus).into_parts();
            Self(magnitude, bits)
        } else {
            let (_, magnitude) = v.into_parts();
            Self::from_biguint_with(magnitude, bits)
        }
    }

    pub(crate) fn from_biguint_with(v: BigUint, bits: usize) -> Self {
        if v.bits() > bits as u64 {
            log::trace!("discarding bits of {} to fit {} bits", v, bits);
            Self(v & &*lookup_mask(bits), bits)
        } else {
            Self(v, bits)
        }
    }

    pub fn zero(bits: usize) -> Result<Self, Error> {
        check_bits(bits)?;
        Ok(Self(BigUint::zero(), bits))
    }

    pub fn one(bits: usize) -> Result<Self, Error> {
        check_bits(bits)?;
        Ok(Self(BigUint::one(), bits))
    }

    /// All bits set: `2^bits - 1`.
    pub fn max_value(bits: usize) -> Result<Self, Error> {
        check_bits(bits)?;
        Ok(Self(lookup_mask(bits).into_owned(), bits))
    }

    /// The most negative two's complement value: only the sign bit set.
    pub fn signed_min_value(bits: usize) -> Result<Self, Error> {
        check_bits(bits)?;
        Ok(Self(BigUint::one() << (bits - 1), bits))
    }

    /// The most positive two's complement value: all bits but the sign bit set.
    pub fn signed_max_value(bits: usize) -> Result<Self, Error> {
        check_bits(bits)?;
        Ok(Self(lookup_mask(bits - 1).into_owned(), bits))
    }

    pub fn bits(&self) -> usize {
        self.1
    }

    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    pub fn into_biguint(self) -> BigUint {
        self.0
    }

    pub fn unsigned_value(&self) -> BigInt {
        BigInt::from(self.0.clone())
    }

    pub fn signed_value(&self) -> BigInt {
        if self.msb() {
            BigInt::from(self.0.clone()) - (BigInt::one() << self.bits())
        } else {
            BigInt::from(self.0.clone())
        }
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.0.is_one()
    }

    pub fn is_negative(&self) -> bool {
        self.msb()
    }

    pub fn bit(&self, index: usize) -> bool {
        index < self.bits() && self.0.bit(index as u64)
    }

    pub fn msb(&self) -> bool {
        self.0.bit(self.bits() as u64 - 1)
    }

    pub fn lsb(&self) -> bool {
        self.0.bit(0)
    }

    pub(crate) fn operand<'a, O>(&self, op: &'static str, rhs: &'a O) -> Result<Cow<'a, BitVec>, Error>
    where
        O: Operand + ?Sized,
    {
        let rhs = rhs.to_operand(self.bits());
        if rhs.bits() != self.bits() {
            return Err(Error::SizeMismatch {
                op,
                lhs: self.bits(),
                rhs: rhs.bits(),
            });
        }
        Ok(rhs)
    }
}

impl BitVec {
    pub fn unsigned_cmp<O: Operand + ?Sized>(&self, rhs: &O) -> Result<Ordering, Error> {
        let rhs = self.operand("unsigned_cmp", rhs)?;
        Ok(self.0.cmp(&rhs.0))
    }

    pub fn signed_cmp<O: Operand + ?Sized>(&self, rhs: &O) -> Result<Ordering, Error> {
        let rhs = self.operand("signed_cmp", rhs)?;
        Ok(match (self.msb(), rhs.msb()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            // same sign: two's complement patterns order like their magnitudes
            _ => self.0.cmp(&rhs.0),
        })
    }

    fn cmp_with<O: Operand + ?Sized>(&self, rhs: &O, signed: bool) -> Result<Ordering, Error> {
        if signed {
            self.signed_cmp(rhs)
        } else {
            self.unsigned_cmp(rhs)
        }
    }

    pub fn lt<O: Operand + ?Sized>(&self, rhs: &O, signed: bool) -> Result<bool, Error> {
        Ok(self.cmp_with(rhs, signed)? == Ordering::Less)
    }

    pub fn le<O: Operand + ?Sized>(&self, rhs: &O, signed: bool) -> Result<bool, Error> {
        Ok(self.cmp_with(rhs, signed)? != Ordering::Greater)
    }

    pub fn gt<O: Operand + ?Sized>(&self, rhs: &O, signed: bool) -> Result<bool, Error> {
        Ok(self.cmp_with(rhs, signed)? == Ordering::Greater)
    }

    pub fn ge<O: Operand + ?Sized>(&self, rhs: &O, signed: bool) -> Result<bool, Error> {
        Ok(self.cmp_with(rhs, signed)? != Ordering::Less)
    }

    /// Bit pattern equality. Vectors of different sizes are never equal.
    pub fn eq<O: Operand + ?Sized>(&self, rhs: &O) -> bool {
        let rhs = rhs.to_operand(self.bits());
        self.bits() == rhs.bits() && self.0 == rhs.0
    }

    pub fn neq<O: Operand + ?Sized>(&self, rhs: &O) -> bool {
        !self.eq(rhs)
    }
}

impl PartialOrd for BitVec {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BitVec {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.bits() != other.bits() {
            panic!(
                "bit vector of size {} cannot be compared with bit vector of size {}",
                self.bits(),
                other.bits(),
            )
        }
        self.0.cmp(&other.0)
    }
}
