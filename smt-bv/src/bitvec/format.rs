use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::Num;

use super::BitVec;
use crate::error::{Error, ParseError};

impl BitVec {
    /// Binary digits, zero-padded to the vector's size.
    pub fn to_binary_string(&self) -> String {
        format!("{:0>width$}", self.0.to_str_radix(2), width = self.bits())
    }

    /// Upper-case hexadecimal digits, zero-padded to `ceil(bits / 4)` digits.
    pub fn to_hex_string(&self) -> String {
        format!(
            "{:0>width$}",
            self.0.to_str_radix(16).to_uppercase(),
            width = (self.bits() + 3) / 4
        )
    }

    /// Formats using one of the specifiers `D`/`DECIMAL`, `B`/`BINARY`,
    /// `X`/`HEX` or `V`/`VALUE` (case insensitive).
    pub fn format(&self, spec: &str) -> Result<String, Error> {
        match spec.to_ascii_uppercase().as_str() {
            "D" | "DECIMAL" => Ok(format!("{} ({}-bit)", self.0, self.bits())),
            "B" | "BINARY" => Ok(format!("0b{} ({}-bit)", self.to_binary_string(), self.bits())),
            "X" | "HEX" => Ok(format!("0x{} ({}-bit)", self.to_hex_string(), self.bits())),
            "V" | "VALUE" => Ok(self.0.to_string()),
            _ => Err(Error::Format(spec.to_owned())),
        }
    }
}

impl fmt::Display for BitVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}-bit)", self.0, self.bits())
    }
}

impl fmt::LowerHex for BitVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        f.write_str(&self.to_hex_string().to_lowercase())
    }
}

impl fmt::UpperHex for BitVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        f.write_str(&self.to_hex_string())
    }
}

impl fmt::Binary for BitVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0b")?;
        }
        f.write_str(&self.to_binary_string())
    }
}

impl FromStr for BitVec {
    type Err = ParseError;

    /// Parses the decimal, binary and hexadecimal forms produced by
    /// [`BitVec::format`], e.g. `255 (8-bit)` or `0xFF (8-bit)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (cst, sz) = s.trim().rsplit_once(" (").ok_or(ParseError::InvalidFormat)?;
        let sz = sz.strip_suffix("-bit)").ok_or(ParseError::InvalidFormat)?;

        let bits = usize::from_str(sz).map_err(|_| ParseError::InvalidSize)?;

        let val = if let Some(cstv) = cst.strip_prefix("0x") {
            BigUint::from_str_radix(cstv, 16)
        } else if let Some(cstv) = cst.strip_prefix("0b") {
            BigUint::from_str_radix(cstv, 2)
        } else {
            BigUint::from_str_radix(cst, 10)
        }
        .map_err(|_| {
            log::debug!("invalid bit-vector constant `{}`", cst);
            ParseError::InvalidConst
        })?;

        Self::from_biguint(val, bits).map_err(|_| ParseError::InvalidSize)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_format_specifiers() {
        let v = BitVec::from_u32(0x2a, 12).unwrap();
        assert_eq!(v.format("D").unwrap(), "42 (12-bit)");
        assert_eq!(v.format("decimal").unwrap(), "42 (12-bit)");
        assert_eq!(v.format("b").unwrap(), "0b000000101010 (12-bit)");
        assert_eq!(v.format("X").unwrap(), "0x02A (12-bit)");
        assert_eq!(v.format("hex").unwrap(), "0x02A (12-bit)");
        assert_eq!(v.format("V").unwrap(), "42");
        assert_eq!(v.format("Q"), Err(Error::Format("Q".to_owned())));
        assert!(v.format("").is_err());
    }

    #[test]
    fn test_padding() {
        let v = BitVec::zero(5).unwrap();
        assert_eq!(v.to_binary_string(), "00000");
        assert_eq!(v.to_hex_string(), "00");

        let v = BitVec::from_u8(1, 1).unwrap();
        assert_eq!(v.to_binary_string(), "1");
        assert_eq!(v.to_hex_string(), "1");
    }

    #[test]
    fn test_std_fmt() {
        let v = BitVec::from(0xabu8);
        assert_eq!(format!("{}", v), "171 (8-bit)");
        assert_eq!(format!("{:x}", v), "ab");
        assert_eq!(format!("{:#X}", v), "0xAB");
        assert_eq!(format!("{:b}", BitVec::from_u8(2, 4).unwrap()), "0010");
        assert_eq!(format!("{:#b}", BitVec::from_u8(2, 4).unwrap()), "0b0010");
    }

    #[test]
    fn test_parse_round_trip() {
        let v = BitVec::from_i32(-3, 20).unwrap();
        for spec in ["D", "B", "X"] {
            let s = v.format(spec).unwrap();
            assert_eq!(s.parse::<BitVec>().unwrap(), v, "{}", s);
        }
        assert_eq!(v.to_string().parse::<BitVec>().unwrap(), v);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("255".parse::<BitVec>(), Err(ParseError::InvalidFormat));
        assert_eq!("255 (8 bits)".parse::<BitVec>(), Err(ParseError::InvalidFormat));
        assert_eq!("255 (x-bit)".parse::<BitVec>(), Err(ParseError::InvalidSize));
        assert_eq!("255 (0-bit)".parse::<BitVec>(), Err(ParseError::InvalidSize));
        assert_eq!("0xZZ (8-bit)".parse::<BitVec>(), Err(ParseError::InvalidConst));
        assert_eq!("-1 (8-bit)".parse::<BitVec>(), Err(ParseError::InvalidConst));
    }
}
