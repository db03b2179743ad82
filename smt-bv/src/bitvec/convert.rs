use std::fmt::Display;

use num_bigint::{BigInt, BigUint};
use num_traits::ToPrimitive;

use super::BitVec;
use crate::error::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Endian {
    Big,
    Little,
}

impl Display for Endian {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(if self.is_big() { "BE" } else { "LE" })
    }
}

impl Endian {
    pub fn is_big(&self) -> bool {
        matches!(self, Self::Big)
    }

    pub fn is_little(&self) -> bool {
        matches!(self, Self::Little)
    }
}

impl BitVec {
    pub fn from_be_bytes(buf: &[u8]) -> Result<Self, Error> {
        Self::from_biguint(BigUint::from_bytes_be(buf), buf.len() * 8)
    }

    pub fn from_le_bytes(buf: &[u8]) -> Result<Self, Error> {
        Self::from_biguint(BigUint::from_bytes_le(buf), buf.len() * 8)
    }

    pub fn from_bytes(buf: &[u8], endian: Endian) -> Result<Self, Error> {
        if endian.is_big() {
            Self::from_be_bytes(buf)
        } else {
            Self::from_le_bytes(buf)
        }
    }

    /// Little-endian bytes, padded to `ceil(bits / 8)` bytes.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        let size = (self.bits() + 7) / 8;
        let mut buf = self.0.to_bytes_le();
        buf.resize(size, 0u8);
        buf
    }

    pub fn to_be_bytes(&self) -> Vec<u8> {
        let mut buf = self.to_le_bytes();
        buf.reverse();
        buf
    }

    pub fn to_bytes(&self, endian: Endian) -> Vec<u8> {
        if endian.is_big() {
            self.to_be_bytes()
        } else {
            self.to_le_bytes()
        }
    }

    fn conversion_overflow(value: BigInt, target: &'static str) -> Error {
        log::debug!("cannot convert {} into {}", value, target);
        Error::ConversionOverflow { value, target }
    }
}

macro_rules! impl_from_for {
    ($t:ident) => {
        impl From<$t> for BitVec {
            fn from(t: $t) -> Self {
                let bits = ::std::mem::size_of::<$t>() * 8;
                BitVec::from_bigint_with(BigInt::from(t), bits)
            }
        }
    };
}

macro_rules! impls_from_for {
    ($($tname:ident),*) => {
        $(
            impl_from_for!($tname);
        )*
    };
}

macro_rules! impl_from_t_for {
    ($t:ident) => {
        impl BitVec {
            ::paste::paste! {
                pub fn [< from_ $t >](t: $t, bits: usize) -> Result<Self, Error> {
                    BitVec::from_bigint(BigInt::from(t), bits)
                }
            }
        }
    };
}

macro_rules! impls_from_t_for {
    ($($tname:ident),*) => {
        $(
            impl_from_t_for!($tname);
        )*
    };
}

macro_rules! impl_to_u_for {
    ($t:tt) => {
        impl BitVec {
            ::paste::paste! {
                pub fn [< to_u $t >](&self) -> Result<[< u $t >], Error> {
                    match self.0.[< to_u $t >]() {
                        Some(v) => Ok(v),
                        None => Err(Self::conversion_overflow(
                            self.unsigned_value(),
                            concat!("u", stringify!($t)),
                        )),
                    }
                }
            }
        }

        ::paste::paste! {
            impl ::std::convert::TryFrom<&'_ BitVec> for [< u $t >] {
                type Error = Error;

                fn try_from(bv: &BitVec) -> Result<[< u $t >], Error> {
                    bv.[< to_u $t >]()
                }
            }
        }

        ::paste::paste! {
            impl ::std::convert::TryFrom<BitVec> for [< u $t >] {
                type Error = Error;

                fn try_from(bv: BitVec) -> Result<[< u $t >], Error> {
                    bv.[< to_u $t >]()
                }
            }
        }
    };
}

macro_rules! impl_to_i_for {
    ($t:tt) => {
        impl BitVec {
            ::paste::paste! {
                /// Converts the unsigned reading, or the two's complement reading
                /// when `signed` is set.
                pub fn [< to_i $t >](&self, signed: bool) -> Result<[< i $t >], Error> {
                    let value = if signed {
                        self.signed_value()
                    } else {
                        self.unsigned_value()
                    };
                    match value.[< to_i $t >]() {
                        Some(v) => Ok(v),
                        None => Err(Self::conversion_overflow(
                            value,
                            concat!("i", stringify!($t)),
                        )),
                    }
                }
            }
        }

        ::paste::paste! {
            impl ::std::convert::TryFrom<&'_ BitVec> for [< i $t >] {
                type Error = Error;

                fn try_from(bv: &BitVec) -> Result<[< i $t >], Error> {
                    bv.[< to_i $t >](true)
                }
            }
        }

        ::paste::paste! {
            impl ::std::convert::TryFrom<BitVec> for [< i $t >] {
                type Error = Error;

                fn try_from(bv: BitVec) -> Result<[< i $t >], Error> {
                    bv.[< to_i $t >](true)
                }
            }
        }
    };
}

macro_rules! impls_to_u_for {
    ($($tname:tt),*) => {
        $(
            impl_to_u_for!($tname);
        )*
    };
}

macro_rules! impls_to_i_for {
    ($($tname:tt),*) => {
        $(
            impl_to_i_for!($tname);
        )*
    };
}

impls_from_for! { i8, i16, i32, i64, i128, isize }
impls_from_for! { u8, u16, u32, u64, u128, usize }
impls_from_t_for! { i8, i16, i32, i64, i128, isize }
impls_from_t_for! { u8, u16, u32, u64, u128, usize }

impls_to_i_for! { 8, 16, 32, 64, 128, size }
impls_to_u_for! { 8, 16, 32, 64, 128, size }
