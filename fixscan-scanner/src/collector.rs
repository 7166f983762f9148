/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Visitor that records every event it receives.
//!
//! Handy for debugging and for comparing scans. Up to 32 fields are stored
//! inline; longer messages spill to the heap, so keep it off latency-critical
//! paths.

use fixscan_core::error::ScanError;
use fixscan_core::field::{FieldEvent, FieldSlice, FieldVisitor};
use smallvec::SmallVec;
use std::ops::ControlFlow;

/// One recorded field: the tag and where its value lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollectedField {
    /// The field tag number.
    pub tag: u32,
    /// Location of the value in the scanned buffer.
    pub value: FieldSlice,
}

/// Records fields and the scan error, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldCollector {
    fields: SmallVec<[CollectedField; 32]>,
    error: Option<ScanError>,
}

impl FieldCollector {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded fields in document order.
    #[inline]
    #[must_use]
    pub fn fields(&self) -> &[CollectedField] {
        &self.fields
    }

    /// Returns the recorded tags in document order.
    pub fn tags(&self) -> impl Iterator<Item = u32> + '_ {
        self.fields.iter().map(|f| f.tag)
    }

    /// Returns the first recorded field with `tag`.
    #[must_use]
    pub fn find(&self, tag: u32) -> Option<&CollectedField> {
        self.fields.iter().find(|f| f.tag == tag)
    }

    /// Returns the scan error, if one was reported.
    #[inline]
    #[must_use]
    pub const fn error(&self) -> Option<ScanError> {
        self.error
    }

    /// Returns true if no field has been recorded.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns true if the records no longer fit inline.
    #[inline]
    #[must_use]
    pub fn spilled(&self) -> bool {
        self.fields.spilled()
    }

    /// Forgets everything recorded so far.
    pub fn clear(&mut self) {
        self.fields.clear();
        self.error = None;
    }
}

impl FieldVisitor for FieldCollector {
    #[inline]
    fn on_field(&mut self, field: FieldEvent<'_>) -> ControlFlow<()> {
        self.fields.push(CollectedField {
            tag: field.tag,
            value: field.slice(),
        });
        ControlFlow::Continue(())
    }

    fn on_error(&mut self, error: ScanError) {
        self.error = Some(error);
    }
}
