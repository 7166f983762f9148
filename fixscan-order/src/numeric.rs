/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! In-place numeric parsing of field values.
//!
//! Values are read left to right with checked arithmetic; any byte outside
//! the accepted alphabet, an empty value, or an overflow yields `None`.

use fixscan_core::types::Price;
use num_traits::{FromPrimitive, PrimInt};

/// Parses an unsigned ASCII decimal into `T`.
///
/// # Returns
/// `Some(value)` if `bytes` is a non-empty run of digits that fits in `T`.
#[inline]
#[must_use]
pub fn parse_unsigned<T: PrimInt + FromPrimitive>(bytes: &[u8]) -> Option<T> {
    if bytes.is_empty() {
        return None;
    }

    let ten = T::from_u8(10)?;
    let mut value = T::zero();
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        value = value.checked_mul(&ten)?.checked_add(&T::from_u8(d)?)?;
    }
    Some(value)
}

/// Parses a decimal with at most one `.` into mantissa and scale.
///
/// `"125.50"` becomes mantissa 12550, scale 2. At least one digit is required.
#[inline]
#[must_use]
pub fn parse_decimal(bytes: &[u8]) -> Option<Price> {
    let mut mantissa: i64 = 0;
    let mut scale: u32 = 0;
    let mut saw_dot = false;
    let mut digits = 0usize;

    for &b in bytes {
        if b == b'.' {
            if saw_dot {
                return None;
            }
            saw_dot = true;
            continue;
        }
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        mantissa = mantissa.checked_mul(10)?.checked_add(i64::from(d))?;
        if saw_dot {
            scale += 1;
        }
        digits += 1;
    }

    (digits > 0).then_some(Price::new(mantissa, scale))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_unsigned() {
        assert_eq!(parse_unsigned::<i32>(b"2"), Some(2));
        assert_eq!(parse_unsigned::<i64>(b"100"), Some(100));
        assert_eq!(parse_unsigned::<i32>(b"000"), Some(0));
        assert_eq!(parse_unsigned::<i32>(b"0042"), Some(42));
    }

    #[test]
    fn test_parse_unsigned_rejects() {
        assert_eq!(parse_unsigned::<i32>(b""), None);
        assert_eq!(parse_unsigned::<i32>(b"12a"), None);
        assert_eq!(parse_unsigned::<i32>(b"-1"), None);
        assert_eq!(parse_unsigned::<i32>(b" 1"), None);
        assert_eq!(parse_unsigned::<i64>(b"1.0"), None);
    }

    #[test]
    fn test_parse_unsigned_width() {
        assert_eq!(parse_unsigned::<i32>(b"2147483647"), Some(i32::MAX));
        assert_eq!(parse_unsigned::<i32>(b"2147483648"), None);
        assert_eq!(
            parse_unsigned::<i64>(b"9223372036854775807"),
            Some(i64::MAX)
        );
        assert_eq!(parse_unsigned::<i64>(b"9223372036854775808"), None);
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal(b"125.50"), Some(Price::new(12550, 2)));
        assert_eq!(parse_decimal(b"125"), Some(Price::new(125, 0)));
        assert_eq!(parse_decimal(b"0.0001"), Some(Price::new(1, 4)));
        assert_eq!(parse_decimal(b".5"), Some(Price::new(5, 1)));
        assert_eq!(parse_decimal(b"12."), Some(Price::new(12, 0)));
    }

    #[test]
    fn test_parse_decimal_rejects() {
        assert_eq!(parse_decimal(b"125.5.0"), None);
        assert_eq!(parse_decimal(b"12,5"), None);
        assert_eq!(parse_decimal(b"-1.5"), None);
        assert_eq!(parse_decimal(b""), None);
        assert_eq!(parse_decimal(b"."), None);
        assert_eq!(parse_decimal(b"99999999999999999999"), None);
    }
}
