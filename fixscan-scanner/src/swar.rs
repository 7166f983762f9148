/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! SIMD-within-a-register byte search.
//!
//! Words are always loaded little-endian so that the lowest set bit of a match
//! mask belongs to the lowest memory address, whatever the host byte order.

use fixscan_core::types::SOH;

/// `0x01` in every byte lane.
pub const ONES: u64 = 0x0101_0101_0101_0101;

/// High bit of every byte lane.
pub const HIGHS: u64 = 0x8080_8080_8080_8080;

/// Low seven bits of every byte lane.
const LOWS: u64 = 0x7F7F_7F7F_7F7F_7F7F;

/// Broadcasts `b` into all eight lanes of a word.
#[inline(always)]
#[must_use]
pub const fn splat(b: u8) -> u64 {
    ONES.wrapping_mul(b as u64)
}

/// Loads eight bytes at `offset` as a little-endian word.
///
/// # Panics
/// Panics if fewer than eight bytes remain at `offset`.
#[inline(always)]
#[must_use]
pub fn load_word(buf: &[u8], offset: usize) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&buf[offset..offset + 8]);
    u64::from_le_bytes(bytes)
}

/// Returns a mask with the high bit set in the lane of each SOH byte.
///
/// Only the lowest set bit is exact; lanes above a match may carry a borrow,
/// which is harmless when the caller only wants the first match.
#[inline(always)]
#[must_use]
pub const fn soh_mask(word: u64) -> u64 {
    let m = word ^ ONES;
    m.wrapping_sub(ONES) & !m & HIGHS
}

/// Returns a mask with the high bit set in exactly the lanes equal to `needle`.
///
/// Slower than [`soh_mask`] but free of borrow propagation, so the result can
/// be population-counted.
#[inline(always)]
#[must_use]
pub const fn exact_mask(word: u64, needle: u8) -> u64 {
    let m = word ^ splat(needle);
    !(((m & LOWS).wrapping_add(LOWS)) | m | LOWS)
}

/// Converts a non-zero match mask to the byte index of its first match.
#[inline(always)]
#[must_use]
pub const fn first_lane(mask: u64) -> usize {
    (mask.trailing_zeros() >> 3) as usize
}

/// Tier B: two words per iteration while at least 16 bytes remain.
///
/// On a miss `offset` is left at the first byte not yet examined.
#[inline(always)]
pub fn find_soh_unrolled(buf: &[u8], offset: &mut usize) -> Option<usize> {
    while buf.len() - *offset >= 16 {
        let first = soh_mask(load_word(buf, *offset));
        let second = soh_mask(load_word(buf, *offset + 8));

        if first != 0 {
            return Some(*offset + first_lane(first));
        }
        if second != 0 {
            return Some(*offset + 8 + first_lane(second));
        }

        *offset += 16;
    }
    None
}

/// Tier C: one word per iteration while at least 8 bytes remain.
#[inline(always)]
pub fn find_soh_word(buf: &[u8], offset: &mut usize) -> Option<usize> {
    while buf.len() - *offset >= 8 {
        let mask = soh_mask(load_word(buf, *offset));
        if mask != 0 {
            return Some(*offset + first_lane(mask));
        }
        *offset += 8;
    }
    None
}

/// Counts occurrences of `needle` in `buf`.
///
/// Bytes are consumed one at a time until the read address is 8-byte aligned,
/// then a word at a time, then the tail byte by byte.
#[must_use]
pub fn count_byte(buf: &[u8], needle: u8) -> usize {
    let mut offset = 0;
    let mut count = 0;

    while offset < buf.len() && (buf.as_ptr() as usize + offset) & 7 != 0 {
        count += usize::from(buf[offset] == needle);
        offset += 1;
    }

    while buf.len() - offset >= 8 {
        count += exact_mask(load_word(buf, offset), needle).count_ones() as usize;
        offset += 8;
    }

    count + buf[offset..].iter().filter(|&&b| b == needle).count()
}

/// Counts SOH bytes, which equals the number of complete fields in `buf`.
#[inline]
#[must_use]
pub fn count_soh(buf: &[u8]) -> usize {
    count_byte(buf, SOH)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(bytes: &[u8; 8]) -> u64 {
        u64::from_le_bytes(*bytes)
    }

    #[test]
    fn test_splat() {
        assert_eq!(splat(0x01), ONES);
        assert_eq!(splat(b'='), 0x3d3d_3d3d_3d3d_3d3d);
        assert_eq!(splat(0xFF), u64::MAX);
    }

    #[test]
    fn test_soh_mask_no_match() {
        assert_eq!(soh_mask(word(b"ABCDEFGH")), 0);
        assert_eq!(soh_mask(word(&[0, 2, 3, 0x81, 0xFF, 0x7F, 0x10, 0x11])), 0);
    }

    #[test]
    fn test_soh_mask_each_lane() {
        for lane in 0..8 {
            let mut bytes = *b"XXXXXXXX";
            bytes[lane] = SOH;
            let mask = soh_mask(word(&bytes));
            assert_ne!(mask, 0);
            assert_eq!(first_lane(mask), lane);
        }
    }

    #[test]
    fn test_soh_mask_reports_first_of_many() {
        let mask = soh_mask(word(b"ab\x01cd\x01ef"));
        assert_eq!(first_lane(mask), 2);
    }

    #[test]
    fn test_exact_mask_ignores_borrow() {
        // SOH followed by NUL is the case where the cheap mask over-reports.
        let w = word(&[b'a', SOH, 0x00, b'b', b'c', b'd', b'e', b'f']);
        assert_eq!(exact_mask(w, SOH).count_ones(), 1);
        assert_eq!(first_lane(exact_mask(w, SOH)), 1);
        assert_eq!(exact_mask(word(b"a=b=c=d="), b'=').count_ones(), 4);
    }

    #[test]
    fn test_find_soh_unrolled_second_word() {
        let buf = b"0123456789\x01BCDEFxyz";
        let mut offset = 0;
        assert_eq!(find_soh_unrolled(buf, &mut offset), Some(10));
    }

    #[test]
    fn test_find_soh_unrolled_miss_advances() {
        let buf = b"0123456789ABCDEFxyz";
        let mut offset = 0;
        assert_eq!(find_soh_unrolled(buf, &mut offset), None);
        assert_eq!(offset, 16);
    }

    #[test]
    fn test_find_soh_word() {
        let buf = b"abcdefgh\x01";
        let mut offset = 0;
        assert_eq!(find_soh_word(buf, &mut offset), None);
        assert_eq!(offset, 8);

        let buf = b"abc\x01efgh";
        let mut offset = 0;
        assert_eq!(find_soh_word(buf, &mut offset), Some(3));
    }

    #[test]
    fn test_count_byte() {
        let msg = b"8=FIX.4.4\x019=176\x0135=D\x0149=SENDER\x0156=TARGET\x0110=000\x01";
        assert_eq!(count_soh(msg), 6);
        assert_eq!(count_byte(msg, b'='), 6);
        assert_eq!(count_byte(b"", SOH), 0);
    }

    #[test]
    fn test_count_byte_every_alignment() {
        let data: Vec<u8> = (0..64u8).map(|i| if i % 3 == 0 { SOH } else { 0 }).collect();
        for start in 0..8 {
            let slice = &data[start..];
            let expected = slice.iter().filter(|&&b| b == SOH).count();
            assert_eq!(count_soh(slice), expected);
        }
    }
}
