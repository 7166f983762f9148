/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Error types for the fixscan FIX parser.
//!
//! All hot-path errors are `Copy` and carry only integers and static strings,
//! so building one never touches the allocator.

use thiserror::Error;

/// Result type alias using [`FixScanError`] as the error type.
pub type Result<T> = std::result::Result<T, FixScanError>;

/// Top-level error type for fixscan operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FixScanError {
    /// Error raised by the field scanner.
    #[error("scan error: {0}")]
    Scan(#[from] ScanError),

    /// Error raised while extracting a typed message.
    #[error("extract error: {0}")]
    Extract(#[from] ExtractError),
}

/// Errors reported by the field scanner through `FieldVisitor::on_error`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    /// The buffer ended before the `=` closing a tag.
    #[error("Unexpected end of message inside tag")]
    TruncatedTag {
        /// Offset of the first byte of the tag.
        offset: u32,
    },

    /// A byte other than an ASCII digit appeared before `=`.
    #[error("Invalid byte 0x{byte:02x} inside tag")]
    InvalidTagByte {
        /// Offset of the offending byte.
        offset: u32,
        /// The offending byte.
        byte: u8,
    },

    /// A field started with `=`.
    #[error("Empty tag")]
    EmptyTag {
        /// Offset of the `=`.
        offset: u32,
    },

    /// The tag has more digits than fit in a `u32`.
    #[error("Tag too long")]
    TagTooLong {
        /// Offset of the first byte of the tag.
        offset: u32,
    },

    /// The buffer ended before the SOH closing a value.
    #[error("Unexpected end of message inside value")]
    TruncatedValue {
        /// Offset of the first byte of the value.
        offset: u32,
    },
}

impl ScanError {
    /// Returns the byte offset the error refers to.
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> u32 {
        match *self {
            Self::TruncatedTag { offset }
            | Self::InvalidTagByte { offset, .. }
            | Self::EmptyTag { offset }
            | Self::TagTooLong { offset }
            | Self::TruncatedValue { offset } => offset,
        }
    }

    /// Returns the diagnostic message without formatting.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::TruncatedTag { .. } => "Unexpected end of message inside tag",
            Self::InvalidTagByte { .. } => "Invalid byte inside tag",
            Self::EmptyTag { .. } => "Empty tag",
            Self::TagTooLong { .. } => "Tag too long",
            Self::TruncatedValue { .. } => "Unexpected end of message inside value",
        }
    }
}

/// Reasons a typed extraction rejects a message.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ExtractError {
    /// The buffer ended inside a tag.
    #[error("truncated tag at offset {offset}")]
    TruncatedTag {
        /// Offset of the first byte of the tag.
        offset: u32,
    },

    /// A tag was empty, too long, or contained a non-digit byte.
    #[error("invalid tag at offset {offset}")]
    InvalidTag {
        /// Offset of the problem.
        offset: u32,
    },

    /// The buffer ended before the SOH closing a value.
    #[error("truncated value at offset {offset}")]
    TruncatedValue {
        /// Offset of the first byte of the value.
        offset: u32,
    },

    /// A numeric field contained a non-digit, was empty, or overflowed.
    #[error("malformed integer for tag {tag}")]
    MalformedInteger {
        /// The tag number of the field.
        tag: u32,
    },

    /// A decimal field had a second `.`, a foreign byte, no digits, or overflowed.
    #[error("malformed decimal for tag {tag}")]
    MalformedDecimal {
        /// The tag number of the field.
        tag: u32,
    },

    /// A single-byte field had a value of a different length.
    #[error("invalid length {length} for single-byte tag {tag}")]
    InvalidLength {
        /// The tag number of the field.
        tag: u32,
        /// Actual value length.
        length: u32,
    },

    /// MsgType (tag 35) was not the expected type.
    #[error("wrong msg type: {found:?}")]
    WrongMsgType {
        /// The msgType found, `'\0'` when absent.
        found: char,
    },

    /// A required field was not assigned.
    #[error("missing required field: tag {tag}")]
    MissingRequiredField {
        /// The tag number of the missing field.
        tag: u32,
    },
}

impl From<ScanError> for ExtractError {
    fn from(err: ScanError) -> Self {
        match err {
            ScanError::TruncatedTag { offset } => Self::TruncatedTag { offset },
            ScanError::InvalidTagByte { offset, .. }
            | ScanError::EmptyTag { offset }
            | ScanError::TagTooLong { offset } => Self::InvalidTag { offset },
            ScanError::TruncatedValue { offset } => Self::TruncatedValue { offset },
        }
    }
}
