pub mod bitvec;
pub mod error;

pub use self::bitvec::*;
pub use self::error::{Error, ParseError, RangeError};

pub use num_bigint::{BigInt, BigUint};
