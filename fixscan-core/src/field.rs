/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Field events and the visitor interface.
//!
//! This module provides:
//! - [`FieldTag`]: Type-safe wrapper for FIX field tag numbers
//! - [`FieldSlice`]: `(offset, length)` window into a message buffer
//! - [`FieldEvent`]: Zero-copy view of one parsed `tag=value` field
//! - [`FieldVisitor`]: Callback interface driven by the scanner

use crate::error::ScanError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::ControlFlow;

/// FIX field tag number, as decoded from the digits before `=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct FieldTag(u32);

impl FieldTag {
    /// Creates a new field tag.
    #[inline]
    #[must_use]
    pub const fn new(tag: u32) -> Self {
        Self(tag)
    }

    /// Returns the raw tag number.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for FieldTag {
    fn from(tag: u32) -> Self {
        Self(tag)
    }
}

impl From<FieldTag> for u32 {
    fn from(tag: FieldTag) -> Self {
        tag.0
    }
}

impl fmt::Display for FieldTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Location of a field value inside a message buffer.
///
/// The window never includes the terminating SOH.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FieldSlice {
    /// Offset of the first value byte.
    pub offset: u32,
    /// Number of value bytes.
    pub length: u32,
}

impl FieldSlice {
    /// Creates a new slice descriptor.
    #[inline]
    #[must_use]
    pub const fn new(offset: u32, length: u32) -> Self {
        Self { offset, length }
    }

    /// Offset one past the last value byte.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> u32 {
        self.offset + self.length
    }

    /// Returns true if the value is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Resolves the window against `buffer`.
    ///
    /// Returns `None` when the window does not fit, which only happens if the
    /// slice is applied to a buffer other than the one it was taken from.
    #[inline]
    #[must_use]
    pub fn get<'a>(&self, buffer: &'a [u8]) -> Option<&'a [u8]> {
        buffer.get(self.offset as usize..self.end() as usize)
    }
}

/// Zero-copy view of one `tag=value` field.
///
/// Borrowed from the scanned buffer and handed to the visitor; it must not
/// outlive the `on_field` call that received it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldEvent<'a> {
    /// The field tag number.
    pub tag: u32,
    /// The whole buffer being scanned.
    pub buffer: &'a [u8],
    /// Offset of the first value byte.
    pub value_offset: u32,
    /// Number of value bytes, excluding the SOH.
    pub value_length: u32,
}

impl<'a> FieldEvent<'a> {
    /// Creates a new field event.
    #[inline]
    #[must_use]
    pub const fn new(tag: u32, buffer: &'a [u8], value_offset: u32, value_length: u32) -> Self {
        Self {
            tag,
            buffer,
            value_offset,
            value_length,
        }
    }

    /// Returns the field tag.
    #[inline]
    #[must_use]
    pub const fn tag(&self) -> FieldTag {
        FieldTag(self.tag)
    }

    /// Returns the `(offset, length)` of the value.
    #[inline]
    #[must_use]
    pub const fn slice(&self) -> FieldSlice {
        FieldSlice::new(self.value_offset, self.value_length)
    }

    /// Returns the raw value bytes.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &'a [u8] {
        let start = self.value_offset as usize;
        &self.buffer[start..start + self.value_length as usize]
    }

    /// Returns the value as a string slice.
    ///
    /// # Errors
    /// Returns `Utf8Error` if the value is not valid UTF-8.
    pub fn as_str(&self) -> Result<&'a str, std::str::Utf8Error> {
        std::str::from_utf8(self.value())
    }

    /// Returns the length of the value in bytes.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.value_length as usize
    }

    /// Returns true if the value is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value_length == 0
    }
}

/// Callback interface driven by the scanner.
///
/// The scanner is generic over the visitor so calls are monomorphised and can
/// be inlined into the scan loop.
pub trait FieldVisitor {
    /// Called once per field, in document order.
    ///
    /// Returning [`ControlFlow::Break`] stops the scan.
    fn on_field(&mut self, field: FieldEvent<'_>) -> ControlFlow<()>;

    /// Called at most once per scan; the scan returns right after.
    fn on_error(&mut self, error: ScanError) {
        tracing::warn!(offset = error.offset(), "parse error: {}", error);
    }
}

impl<V: FieldVisitor + ?Sized> FieldVisitor for &mut V {
    #[inline]
    fn on_field(&mut self, field: FieldEvent<'_>) -> ControlFlow<()> {
        (**self).on_field(field)
    }

    #[inline]
    fn on_error(&mut self, error: ScanError) {
        (**self).on_error(error);
    }
}

/// Adapter turning a closure into a [`FieldVisitor`] that never stops early.
///
/// Errors go to the default [`FieldVisitor::on_error`].
#[derive(Debug, Clone, Copy)]
pub struct FnVisitor<F>(pub F);

impl<F> FieldVisitor for FnVisitor<F>
where
    F: FnMut(FieldEvent<'_>),
{
    #[inline]
    fn on_field(&mut self, field: FieldEvent<'_>) -> ControlFlow<()> {
        (self.0)(field);
        ControlFlow::Continue(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_tag() {
        let tag = FieldTag::new(35);
        assert_eq!(tag.value(), 35);
        assert_eq!(u32::from(tag), 35);
        assert_eq!(FieldTag::from(9999).to_string(), "9999");
        assert_eq!(serde_json::to_string(&tag).unwrap(), "35");
    }

    #[test]
    fn test_field_slice_get() {
        let buf = b"11=ABC\x01";
        let slice = FieldSlice::new(3, 3);
        assert_eq!(slice.end(), 6);
        assert_eq!(slice.get(buf), Some(&b"ABC"[..]));
        assert_eq!(FieldSlice::new(5, 10).get(buf), None);
    }

    #[test]
    fn test_field_event_value() {
        let buf = b"55=IBM\x01";
        let field = FieldEvent::new(55, buf, 3, 3);
        assert_eq!(field.tag().value(), 55);
        assert_eq!(field.value(), b"IBM");
        assert_eq!(field.as_str().unwrap(), "IBM");
        assert_eq!(field.len(), 3);
        assert!(!field.is_empty());
        assert_eq!(field.slice(), FieldSlice::new(3, 3));
    }

    #[test]
    fn test_field_event_invalid_utf8() {
        let buf = [b'1', b'=', 0xFF, 0xFE, 0x01];
        let field = FieldEvent::new(1, &buf, 2, 2);
        assert!(field.as_str().is_err());
    }

    #[test]
    fn test_fn_visitor() {
        let mut tags = Vec::new();
        let mut visitor = FnVisitor(|f: FieldEvent<'_>| tags.push(f.tag));
        let buf = b"8=X\x01";
        assert!(visitor.on_field(FieldEvent::new(8, buf, 2, 1)).is_continue());
        drop(visitor);
        assert_eq!(tags, vec![8]);
    }

    #[test]
    fn test_field_slice_serde() {
        let json = serde_json::to_string(&FieldSlice::new(4, 2)).unwrap();
        assert_eq!(json, r#"{"offset":4,"length":2}"#);
    }
}
