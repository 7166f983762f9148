/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Scanner configuration.
//!
//! Every option selects between behaviourally identical code paths, except
//! [`TruncatedValue`], which decides what happens to a value that runs into
//! the end of the buffer without an SOH.

use crate::simd::USE_SIMD;
use serde::{Deserialize, Serialize};

/// Policy for a final value with no terminating SOH.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TruncatedValue {
    /// Deliver the value with length `length - value_offset`.
    #[default]
    Emit,
    /// Report `ScanError::TruncatedValue` and stop.
    Reject,
}

/// Configuration for a [`Scanner`](crate::Scanner).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Use the wide-vector tier when the build has one.
    pub simd: bool,
    /// Advance byte by byte to an 8-byte aligned address before the SWAR tiers.
    pub word_alignment: bool,
    /// Use the four-byte peek for tags of one to three digits.
    pub short_tags: bool,
    /// What to do with a final value that has no SOH.
    pub truncated_value: TruncatedValue,
}

impl ScanConfig {
    /// Creates the default configuration: every fast path on, no alignment
    /// pre-roll, truncated values emitted.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            simd: true,
            word_alignment: false,
            short_tags: true,
            truncated_value: TruncatedValue::Emit,
        }
    }

    /// Configuration used by typed extractors: truncated values are errors.
    #[must_use]
    pub const fn strict() -> Self {
        Self::new().with_truncated_value(TruncatedValue::Reject)
    }

    /// Sets whether the wide-vector tier may be used.
    #[must_use]
    pub const fn with_simd(mut self, simd: bool) -> Self {
        self.simd = simd;
        self
    }

    /// Sets whether to align reads before the SWAR tiers.
    #[must_use]
    pub const fn with_word_alignment(mut self, align: bool) -> Self {
        self.word_alignment = align;
        self
    }

    /// Sets whether to use the short-tag fast path.
    #[must_use]
    pub const fn with_short_tags(mut self, short_tags: bool) -> Self {
        self.short_tags = short_tags;
        self
    }

    /// Sets the truncated value policy.
    #[must_use]
    pub const fn with_truncated_value(mut self, policy: TruncatedValue) -> Self {
        self.truncated_value = policy;
        self
    }

    /// Returns true if the vector tier will actually run.
    #[inline]
    #[must_use]
    pub const fn simd_active(&self) -> bool {
        USE_SIMD && self.simd
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new()
    }
}
