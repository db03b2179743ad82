use num_bigint::BigInt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("bit vector size must be > 0")]
    InvalidWidth,
    #[error("cannot use `{op}` with bit vector of size {lhs} and bit vector of size {rhs}")]
    SizeMismatch {
        op: &'static str,
        lhs: usize,
        rhs: usize,
    },
    #[error(transparent)]
    Range(#[from] RangeError),
    #[error("cannot use `{op}` with a zero divisor")]
    DivideByZero { op: &'static str },
    #[error("value {value} is outside the range of {target}")]
    ConversionOverflow { value: BigInt, target: &'static str },
    #[error("invalid bit-vector format specifier `{0}`")]
    Format(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("cannot extract high bit {high} from bit vector of size {width}")]
    ExtractHigh { high: usize, width: usize },
    #[error("cannot extract with low bit {low} above high bit {high}")]
    ExtractOrder { low: usize, high: usize },
    #[error("cannot repeat bit vector of size {width} into size {target}; not a multiple")]
    RepeatWidth { width: usize, target: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid bit-vector format")]
    InvalidFormat,
    #[error("invalid bit-vector size")]
    InvalidSize,
    #[error("invalid bit-vector constant")]
    InvalidConst,
}
