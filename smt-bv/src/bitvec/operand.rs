use std::borrow::Cow;

use num_bigint::{BigInt, BigUint};

use super::BitVec;

/// A right-hand side accepted by the binary operations of [`BitVec`].
///
/// Bit vectors are passed through unchanged (their size is checked by the
/// operation); bare integers are first converted into a bit vector of the
/// receiver's size, masking off any bits that do not fit.
pub trait Operand {
    fn to_operand(&self, bits: usize) -> Cow<'_, BitVec>;
}

impl Operand for BitVec {
    fn to_operand(&self, _bits: usize) -> Cow<'_, BitVec> {
        Cow::Borrowed(self)
    }
}

impl Operand for BigInt {
    fn to_operand(&self, bits: usize) -> Cow<'_, BitVec> {
        Cow::Owned(BitVec::from_bigint_with(self.clone(), bits))
    }
}

impl Operand for BigUint {
    fn to_operand(&self, bits: usize) -> Cow<'_, BitVec> {
        Cow::Owned(BitVec::from_biguint_with(self.clone(), bits))
    }
}

macro_rules! impl_operand_for {
    ($t:ident) => {
        impl Operand for $t {
            fn to_operand(&self, bits: usize) -> Cow<'_, BitVec> {
                Cow::Owned(BitVec::from_bigint_with(BigInt::from(*self), bits))
            }
        }
    };
}

macro_rules! impls_operand_for {
    ($($tname:ident),*) => {
        $(
            impl_operand_for!($tname);
        )*
    };
}

impls_operand_for! { i8, i16, i32, i64, i128, isize }
impls_operand_for! { u8, u16, u32, u64, u128, usize }
