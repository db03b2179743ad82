use std::borrow::Cow;

use num_bigint::BigUint;
use num_traits::One;
use static_init::dynamic;

/// Widths up to and including this size have their masks precomputed.
pub const MASK_TABLE_BITS: usize = 256;

#[dynamic(lazy)]
static MASKS: Vec<BigUint> = (0..=MASK_TABLE_BITS).map(make_mask).collect();

fn make_mask(bits: usize) -> BigUint {
    (BigUint::one() << bits) - BigUint::one()
}

/// Returns `2^bits - 1`.
pub(crate) fn lookup_mask(bits: usize) -> Cow<'static, BigUint> {
    if bits <= MASK_TABLE_BITS {
        Cow::Borrowed(&MASKS[bits])
    } else {
        Cow::Owned(make_mask(bits))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_table_and_computed_agree() {
        assert_eq!(*lookup_mask(0), BigUint::from(0u32));
        assert_eq!(*lookup_mask(8), BigUint::from(0xffu32));
        assert_eq!(*lookup_mask(MASK_TABLE_BITS), make_mask(MASK_TABLE_BITS));

        let wide = lookup_mask(MASK_TABLE_BITS + 1);
        assert!(matches!(wide, Cow::Owned(_)));
        assert_eq!(wide.bits(), (MASK_TABLE_BITS + 1) as u64);
        assert_eq!(wide.count_ones(), (MASK_TABLE_BITS + 1) as u64);
    }
}
