/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Tag number parsing.
//!
//! Most FIX tags have one to three digits, so when four bytes are available
//! they are examined as a single word and the position of `=` selects a
//! straight-line accumulation. Anything else goes through the byte loop.

use fixscan_core::error::ScanError;
use fixscan_core::types::EQUALS;

/// Longest digit run that always fits in a `u32`.
pub const MAX_TAG_DIGITS: usize = 9;

const EQUALS_WORD: u32 = 0x3d3d_3d3d;
const ONES_32: u32 = 0x0101_0101;
const HIGHS_32: u32 = 0x8080_8080;

/// Reads the tag starting at `start`.
///
/// # Returns
/// The tag number and the offset of the first value byte.
///
/// # Errors
/// Returns `ScanError` if the buffer ends before `=`, a byte before `=` is not
/// a digit, the tag is empty, or it has more than [`MAX_TAG_DIGITS`] digits.
#[inline(always)]
pub fn read_tag(buf: &[u8], start: usize, short_tags: bool) -> Result<(u32, usize), ScanError> {
    if short_tags && buf.len() - start >= 4 {
        if let Some(parsed) = read_short_tag(buf, start)? {
            return Ok(parsed);
        }
    }
    read_tag_generic(buf, start)
}

/// Four-byte peek for tags of one to three digits.
///
/// Returns `Ok(None)` when `=` is not among the first four bytes.
#[inline(always)]
fn read_short_tag(buf: &[u8], start: usize) -> Result<Option<(u32, usize)>, ScanError> {
    let head = [buf[start], buf[start + 1], buf[start + 2], buf[start + 3]];
    let m = u32::from_le_bytes(head) ^ EQUALS_WORD;
    let found = m.wrapping_sub(ONES_32) & !m & HIGHS_32;
    if found == 0 {
        return Ok(None);
    }

    let tag = match found.trailing_zeros() >> 3 {
        0 => return Err(ScanError::EmptyTag { offset: start as u32 }),
        1 => digit(head[0], start)?,
        2 => digit(head[0], start)? * 10 + digit(head[1], start + 1)?,
        _ => {
            digit(head[0], start)? * 100
                + digit(head[1], start + 1)? * 10
                + digit(head[2], start + 2)?
        }
    };
    let eq = start + (found.trailing_zeros() >> 3) as usize;
    Ok(Some((tag, eq + 1)))
}

/// Byte loop accumulating `tag = tag * 10 + digit` until `=`.
#[inline]
fn read_tag_generic(buf: &[u8], start: usize) -> Result<(u32, usize), ScanError> {
    let mut tag: u32 = 0;
    let mut offset = start;

    loop {
        let Some(&b) = buf.get(offset) else {
            return Err(ScanError::TruncatedTag {
                offset: start as u32,
            });
        };
        if b == EQUALS {
            break;
        }
        if offset - start == MAX_TAG_DIGITS {
            return Err(ScanError::TagTooLong {
                offset: start as u32,
            });
        }
        tag = tag * 10 + digit(b, offset)?;
        offset += 1;
    }

    if offset == start {
        return Err(ScanError::EmptyTag {
            offset: start as u32,
        });
    }
    Ok((tag, offset + 1))
}

#[inline(always)]
fn digit(b: u8, offset: usize) -> Result<u32, ScanError> {
    let d = b.wrapping_sub(b'0');
    if d > 9 {
        return Err(ScanError::InvalidTagByte {
            offset: offset as u32,
            byte: b,
        });
    }
    Ok(u32::from(d))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn both(buf: &[u8]) -> Result<(u32, usize), ScanError> {
        let fast = read_tag(buf, 0, true);
        let generic = read_tag(buf, 0, false);
        assert_eq!(fast, generic, "strategies disagree on {:?}", buf);
        fast
    }

    #[test]
    fn test_short_tags() {
        assert_eq!(both(b"8=FIX"), Ok((8, 2)));
        assert_eq!(both(b"35=D\x01"), Ok((35, 3)));
        assert_eq!(both(b"100=X\x01"), Ok((100, 4)));
    }

    #[test]
    fn test_long_tags_fall_through() {
        assert_eq!(both(b"5001=Y\x01"), Ok((5001, 5)));
        assert_eq!(both(b"123456=Y\x01"), Ok((123456, 7)));
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(both(b"0035=D\x01"), Ok((35, 5)));
        assert_eq!(both(b"035=D\x01"), Ok((35, 4)));
    }

    #[test]
    fn test_tag_at_buffer_end() {
        // Fewer than four bytes left: generic loop only.
        assert_eq!(read_tag(b"xx8=", 2, true), Ok((8, 4)));
        assert_eq!(read_tag(b"35=", 0, true), Ok((35, 3)));
    }

    #[test]
    fn test_truncated_tag() {
        assert_eq!(both(b"35"), Err(ScanError::TruncatedTag { offset: 0 }));
        assert_eq!(
            read_tag(b"8=X\x01123", 4, true),
            Err(ScanError::TruncatedTag { offset: 4 })
        );
        assert_eq!(both(b""), Err(ScanError::TruncatedTag { offset: 0 }));
    }

    #[test]
    fn test_invalid_tag_byte() {
        assert_eq!(
            both(b"3a=D\x01"),
            Err(ScanError::InvalidTagByte {
                offset: 1,
                byte: b'a'
            })
        );
        assert_eq!(
            both(b"12x45=D\x01"),
            Err(ScanError::InvalidTagByte {
                offset: 2,
                byte: b'x'
            })
        );
    }

    #[test]
    fn test_empty_tag() {
        assert_eq!(both(b"=D\x01"), Err(ScanError::EmptyTag { offset: 0 }));
    }

    #[test]
    fn test_tag_too_long() {
        assert_eq!(both(b"123456789=X"), Ok((123_456_789, 10)));
        assert_eq!(
            both(b"1234567890=X"),
            Err(ScanError::TagTooLong { offset: 0 })
        );
    }
}
