/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Pull-style field iterator.
//!
//! [`Fields`] walks the same tiers as the push scanner but hands fields back
//! one at a time, which suits callers that want to stop, peek, or resume.

use crate::config::{ScanConfig, TruncatedValue};
use crate::scanner::{bounded, find_soh};
use crate::tag::read_tag;
use fixscan_core::error::ScanError;
use fixscan_core::field::FieldEvent;

/// Iterator over the `tag=value` fields of a buffer.
///
/// Yields `Err` at most once, after which it is exhausted.
#[derive(Debug, Clone)]
pub struct Fields<'a> {
    /// Input buffer, already cut to the scan length.
    input: &'a [u8],
    /// Current position in the buffer.
    offset: usize,
    /// Tier and policy selection.
    config: ScanConfig,
}

impl<'a> Fields<'a> {
    /// Creates an iterator over the whole of `input` with the default configuration.
    #[inline]
    #[must_use]
    pub fn new(input: &'a [u8]) -> Self {
        Self::with_config(input, ScanConfig::new())
    }

    /// Creates an iterator over `input` with an explicit configuration.
    #[inline]
    #[must_use]
    pub fn with_config(input: &'a [u8], config: ScanConfig) -> Self {
        Self {
            input: bounded(input, input.len()),
            offset: 0,
            config,
        }
    }

    /// Parses the next field from the buffer.
    ///
    /// # Returns
    /// The next field, `Some(Err)` on malformed input, or `None` once the
    /// buffer is exhausted.
    #[inline]
    pub fn next_field(&mut self) -> Option<Result<FieldEvent<'a>, ScanError>> {
        if self.offset >= self.input.len() {
            return None;
        }

        let (tag, value_start) = match read_tag(self.input, self.offset, self.config.short_tags) {
            Ok(parsed) => parsed,
            Err(err) => return Some(Err(self.fail(err))),
        };

        let value_end = match find_soh(self.input, value_start, &self.config) {
            Some(end) => {
                self.offset = end + 1;
                end
            }
            None => match self.config.truncated_value {
                TruncatedValue::Emit => {
                    self.offset = self.input.len();
                    self.input.len()
                }
                TruncatedValue::Reject => {
                    return Some(Err(self.fail(ScanError::TruncatedValue {
                        offset: value_start as u32,
                    })));
                }
            },
        };

        Some(Ok(FieldEvent::new(
            tag,
            self.input,
            value_start as u32,
            (value_end - value_start) as u32,
        )))
    }

    /// Returns the current offset in the buffer.
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the bytes not yet consumed.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        &self.input[self.offset..]
    }

    /// Returns true if the buffer has been fully consumed.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offset >= self.input.len()
    }

    /// Rewinds to the beginning of the buffer.
    #[inline]
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    #[cold]
    fn fail(&mut self, err: ScanError) -> ScanError {
        self.offset = self.input.len();
        err
    }
}

impl<'a> Iterator for Fields<'a> {
    type Item = Result<FieldEvent<'a>, ScanError>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.next_field()
    }
}

impl std::iter::FusedIterator for Fields<'_> {}
