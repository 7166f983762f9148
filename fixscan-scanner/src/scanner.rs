/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Push-style field scanner.
//!
//! The value terminator is located with the widest loop the remaining length
//! allows, falling through to narrower ones on a miss:
//!
//! | Tier | Runs while          | Step        |
//! |------|---------------------|-------------|
//! | A    | `remaining >= LANES`| vector      |
//! | B    | `remaining >= 16`   | two words   |
//! | C    | `remaining >= 8`    | one word    |
//! | D    | always              | one byte    |
//!
//! Every tier reports the first match inside its chunk and chunks are visited
//! in address order, so the result is always the first SOH at or after the
//! start offset.

use crate::config::ScanConfig;
use crate::fields::Fields;
use crate::{simd, swar};
use fixscan_core::field::FieldVisitor;
use fixscan_core::types::SOH;

/// Largest buffer prefix a scan will look at; offsets are reported as `u32`.
pub const MAX_SCAN_LEN: usize = u32::MAX as usize;

/// Field scanner with a fixed tier configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scanner {
    config: ScanConfig,
}

impl Scanner {
    /// Creates a scanner with the given configuration.
    #[inline]
    #[must_use]
    pub const fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Returns the scanner configuration.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scans the first `length` bytes of `buffer`, calling `visitor` once per field.
    ///
    /// `length` is clamped to `buffer.len()`. The scan stops after the first
    /// error (reported through `on_error`) or when the visitor breaks.
    #[inline]
    pub fn parse<V: FieldVisitor>(&self, buffer: &[u8], length: usize, mut visitor: V) {
        for item in self.fields(buffer, length) {
            match item {
                Ok(field) => {
                    if visitor.on_field(field).is_break() {
                        return;
                    }
                }
                Err(err) => {
                    visitor.on_error(err);
                    return;
                }
            }
        }
    }

    /// Returns a pull-style iterator over the fields of `buffer[..length]`.
    #[inline]
    #[must_use]
    pub fn fields<'a>(&self, buffer: &'a [u8], length: usize) -> Fields<'a> {
        Fields::with_config(bounded(buffer, length), self.config)
    }
}

/// Scans `buffer[..length]` with the default configuration.
///
/// # Example
/// ```
/// use fixscan_core::{FieldEvent, FnVisitor};
/// use fixscan_scanner::parse;
///
/// let msg = b"8=FIX.4.4\x0135=D\x0155=IBM\x01";
/// let mut tags = Vec::new();
/// parse(msg, msg.len(), FnVisitor(|f: FieldEvent<'_>| tags.push(f.tag)));
/// assert_eq!(tags, [8, 35, 55]);
/// ```
#[inline]
pub fn parse<V: FieldVisitor>(buffer: &[u8], length: usize, visitor: V) {
    Scanner::default().parse(buffer, length, visitor);
}

/// Counts the SOH bytes in `buffer[..length]`.
///
/// For a buffer ending in SOH this equals the number of fields a scan emits.
#[must_use]
pub fn count_fields(buffer: &[u8], length: usize) -> usize {
    swar::count_soh(bounded(buffer, length))
}

#[inline(always)]
pub(crate) fn bounded(buffer: &[u8], length: usize) -> &[u8] {
    &buffer[..length.min(buffer.len()).min(MAX_SCAN_LEN)]
}

/// Finds the first SOH in `buf[offset..]`.
#[inline(always)]
pub(crate) fn find_soh(buf: &[u8], mut offset: usize, config: &ScanConfig) -> Option<usize> {
    if config.word_alignment {
        while offset < buf.len() && (buf.as_ptr() as usize + offset) & 7 != 0 {
            if buf[offset] == SOH {
                return Some(offset);
            }
            offset += 1;
        }
    }

    if config.simd_active() && buf.len() - offset >= simd::LANES {
        if let Some(end) = simd::find_soh(buf, &mut offset) {
            return Some(end);
        }
    }

    // Short values such as "35=D" or "54=1" skip the word loops entirely.
    if buf.len() - offset >= 8 {
        if let Some(end) = swar::find_soh_unrolled(buf, &mut offset) {
            return Some(end);
        }
        if let Some(end) = swar::find_soh_word(buf, &mut offset) {
            return Some(end);
        }
    }

    buf[offset..]
        .iter()
        .position(|&b| b == SOH)
        .map(|index| offset + index)
}
