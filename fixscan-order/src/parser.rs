/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! NewOrderSingle extractor.
//!
//! Drives the scanner with a routing visitor that writes each recognised tag
//! into a caller-owned [`NewOrderSingle`]. Nothing is allocated and no value
//! bytes are copied.

use crate::numeric::{parse_decimal, parse_unsigned};
use crate::record::{NewOrderSingle, RequiredFields};
use crate::tags;
use fixscan_core::error::{ExtractError, ScanError};
use fixscan_core::field::{FieldEvent, FieldSlice, FieldVisitor};
use fixscan_core::types::MSG_TYPE_NEW_ORDER_SINGLE;
use fixscan_scanner::{ScanConfig, Scanner, TruncatedValue};
use std::ops::ControlFlow;

/// Extracts NewOrderSingle messages into a reusable record.
///
/// Unterminated trailing values are always rejected, whatever policy the
/// supplied configuration carries.
#[derive(Debug, Clone, Copy)]
pub struct NewOrderSingleParser {
    scanner: Scanner,
}

impl NewOrderSingleParser {
    /// Creates a parser with the default tier selection.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_config(ScanConfig::strict())
    }

    /// Creates a parser with explicit scanner settings.
    #[must_use]
    pub const fn with_config(config: ScanConfig) -> Self {
        Self {
            scanner: Scanner::new(config.with_truncated_value(TruncatedValue::Reject)),
        }
    }

    /// Returns the scanner configuration in use.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &ScanConfig {
        self.scanner.config()
    }

    /// Parses the first `length` bytes of `buffer` into `record`.
    ///
    /// The record is reset first. Returns `true` only if the scan was clean,
    /// MsgType is `D`, and every required field was assigned.
    #[inline]
    pub fn parse<'a>(
        &self,
        buffer: &'a [u8],
        length: usize,
        record: &mut NewOrderSingle<'a>,
    ) -> bool {
        self.try_parse(buffer, length, record).is_ok()
    }

    /// Same as [`parse`](Self::parse), reporting why a message was rejected.
    ///
    /// # Errors
    /// Returns the first [`ExtractError`] encountered. Record contents are
    /// unspecified on error.
    pub fn try_parse<'a>(
        &self,
        buffer: &'a [u8],
        length: usize,
        record: &mut NewOrderSingle<'a>,
    ) -> Result<(), ExtractError> {
        record.reset(buffer);

        let mut extraction = Extraction {
            record,
            failure: None,
        };
        self.scanner.parse(buffer, length, &mut extraction);

        match extraction.finish() {
            Ok(()) => {
                tracing::trace!(length, "new order single accepted");
                Ok(())
            }
            Err(err) => {
                tracing::debug!(length, "new order single rejected: {}", err);
                Err(err)
            }
        }
    }

    /// Parses `buffer` into a fresh record.
    ///
    /// # Errors
    /// Returns the first [`ExtractError`] encountered.
    pub fn decode<'a>(&self, buffer: &'a [u8]) -> Result<NewOrderSingle<'a>, ExtractError> {
        let mut record = NewOrderSingle::new();
        self.try_parse(buffer, buffer.len(), &mut record)?;
        Ok(record)
    }
}

impl Default for NewOrderSingleParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Routing visitor for one parse.
struct Extraction<'r, 'a> {
    record: &'r mut NewOrderSingle<'a>,
    failure: Option<ExtractError>,
}

impl Extraction<'_, '_> {
    #[inline]
    fn route(&mut self, field: &FieldEvent<'_>) -> Result<(), ExtractError> {
        let record = &mut *self.record;
        match field.tag {
            tags::MSG_TYPE => {
                record.msg_type = single_byte(field)?;
                record.flags.insert(RequiredFields::MSG_TYPE);
            }
            tags::MSG_SEQ_NUM => record.msg_seq_num = Some(integer(field)?),
            tags::SENDER_COMP_ID => record.sender_comp_id = Some(field.slice()),
            tags::TARGET_COMP_ID => record.target_comp_id = Some(field.slice()),
            tags::SENDING_TIME => record.sending_time = Some(field.slice()),
            tags::CL_ORD_ID => {
                record.cl_ord_id = Some(required_slice(
                    field,
                    &mut record.flags,
                    RequiredFields::CL_ORD_ID,
                ));
            }
            tags::SYMBOL => {
                record.symbol = Some(required_slice(
                    field,
                    &mut record.flags,
                    RequiredFields::SYMBOL,
                ));
            }
            tags::SIDE => {
                record.side = single_byte(field)?;
                record.flags.insert(RequiredFields::SIDE);
            }
            tags::ORDER_QTY => {
                record.order_qty = Some(integer(field)?);
                record.flags.insert(RequiredFields::ORDER_QTY);
            }
            tags::ORD_TYPE => {
                record.ord_type = single_byte(field)?;
                record.flags.insert(RequiredFields::ORD_TYPE);
            }
            tags::PRICE => {
                let price = parse_decimal(field.value())
                    .ok_or(ExtractError::MalformedDecimal { tag: field.tag })?;
                record.price = Some(price);
            }
            tags::TIME_IN_FORCE => record.time_in_force = single_byte(field)?,
            tags::TRANSACT_TIME => {
                record.transact_time = Some(required_slice(
                    field,
                    &mut record.flags,
                    RequiredFields::TRANSACT_TIME,
                ));
            }
            tags::CHECKSUM => record.checksum = Some(integer(field)?),
            _ => {}
        }
        Ok(())
    }

    fn finish(self) -> Result<(), ExtractError> {
        if let Some(err) = self.failure {
            return Err(err);
        }
        if self.record.msg_type != MSG_TYPE_NEW_ORDER_SINGLE {
            return Err(ExtractError::WrongMsgType {
                found: char::from(self.record.msg_type),
            });
        }
        match self.record.flags.first_missing_tag() {
            Some(tag) => Err(ExtractError::MissingRequiredField { tag }),
            None => Ok(()),
        }
    }
}

impl FieldVisitor for Extraction<'_, '_> {
    #[inline]
    fn on_field(&mut self, field: FieldEvent<'_>) -> ControlFlow<()> {
        match self.route(&field) {
            Ok(()) => ControlFlow::Continue(()),
            Err(err) => {
                self.failure = Some(err);
                ControlFlow::Break(())
            }
        }
    }

    fn on_error(&mut self, error: ScanError) {
        self.failure = Some(error.into());
    }
}

#[inline]
fn single_byte(field: &FieldEvent<'_>) -> Result<u8, ExtractError> {
    match field.value() {
        [b] => Ok(*b),
        other => Err(ExtractError::InvalidLength {
            tag: field.tag,
            length: other.len() as u32,
        }),
    }
}

#[inline]
fn integer<T>(field: &FieldEvent<'_>) -> Result<T, ExtractError>
where
    T: num_traits::PrimInt + num_traits::FromPrimitive,
{
    parse_unsigned(field.value()).ok_or(ExtractError::MalformedInteger { tag: field.tag })
}

/// Records the slice; an empty value counts as absent for the required check.
#[inline]
fn required_slice(
    field: &FieldEvent<'_>,
    flags: &mut RequiredFields,
    flag: RequiredFields,
) -> FieldSlice {
    if !field.is_empty() {
        flags.insert(flag);
    }
    field.slice()
}
