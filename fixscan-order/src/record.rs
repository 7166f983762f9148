/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! NewOrderSingle (MsgType `D`) record.
//!
//! The record is allocated once by the caller and reused across messages.
//! String-like fields are stored as `(offset, length)` windows into the
//! borrowed buffer; the `'a` lifetime keeps that buffer alive for as long as
//! the record can be read.

use crate::tags;
use chrono::{DateTime, Utc};
use fixscan_core::field::FieldSlice;
use fixscan_core::types::{OrdType, Price, Side, TimeInForce, parse_utc_timestamp};
use rust_decimal::Decimal;

/// Presence bits of the required NewOrderSingle fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct RequiredFields(u8);

impl RequiredFields {
    /// MsgType (35).
    pub const MSG_TYPE: Self = Self(1 << 0);
    /// ClOrdID (11).
    pub const CL_ORD_ID: Self = Self(1 << 1);
    /// Symbol (55).
    pub const SYMBOL: Self = Self(1 << 2);
    /// Side (54).
    pub const SIDE: Self = Self(1 << 3);
    /// OrderQty (38).
    pub const ORDER_QTY: Self = Self(1 << 4);
    /// OrdType (40).
    pub const ORD_TYPE: Self = Self(1 << 5);
    /// TransactTime (60).
    pub const TRANSACT_TIME: Self = Self(1 << 6);
    /// Every required field.
    pub const ALL: Self = Self(0x7F);

    /// Flags paired with their tags, in the order missing fields are reported.
    const BY_TAG: [(Self, u32); 7] = [
        (Self::MSG_TYPE, tags::MSG_TYPE),
        (Self::CL_ORD_ID, tags::CL_ORD_ID),
        (Self::SYMBOL, tags::SYMBOL),
        (Self::SIDE, tags::SIDE),
        (Self::ORDER_QTY, tags::ORDER_QTY),
        (Self::ORD_TYPE, tags::ORD_TYPE),
        (Self::TRANSACT_TIME, tags::TRANSACT_TIME),
    ];

    /// Returns a set with no bits.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Returns the raw bits.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if every bit of `other` is set.
    #[inline]
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Sets the bits of `other`.
    #[inline]
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Returns true if all required fields are present.
    #[inline]
    #[must_use]
    pub const fn is_complete(self) -> bool {
        self.contains(Self::ALL)
    }

    /// Returns the tag of the first missing required field, if any.
    #[must_use]
    pub fn first_missing_tag(self) -> Option<u32> {
        Self::BY_TAG
            .iter()
            .find(|(flag, _)| !self.contains(*flag))
            .map(|&(_, tag)| tag)
    }
}

/// Caller-owned, reusable NewOrderSingle record.
///
/// Contents are only meaningful after a parse that returned `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NewOrderSingle<'a> {
    pub(crate) buffer: &'a [u8],
    pub(crate) msg_type: u8,
    pub(crate) msg_seq_num: Option<i32>,
    pub(crate) sender_comp_id: Option<FieldSlice>,
    pub(crate) target_comp_id: Option<FieldSlice>,
    pub(crate) sending_time: Option<FieldSlice>,
    pub(crate) cl_ord_id: Option<FieldSlice>,
    pub(crate) symbol: Option<FieldSlice>,
    pub(crate) side: u8,
    pub(crate) order_qty: Option<i64>,
    pub(crate) ord_type: u8,
    pub(crate) price: Option<Price>,
    pub(crate) time_in_force: u8,
    pub(crate) transact_time: Option<FieldSlice>,
    pub(crate) checksum: Option<i32>,
    pub(crate) flags: RequiredFields,
}

/// Generates the raw, slice, and UTF-8 accessors of a string-like field.
macro_rules! slice_accessors {
    ($($(#[$doc:meta])* $field:ident, $slice_fn:ident, $str_fn:ident;)*) => {
        $(
            $(#[$doc])*
            #[inline]
            #[must_use]
            pub fn $field(&self) -> Option<&'a [u8]> {
                self.$field.and_then(|s| s.get(self.buffer))
            }

            /// Returns the `(offset, length)` of the value.
            #[inline]
            #[must_use]
            pub const fn $slice_fn(&self) -> Option<FieldSlice> {
                self.$field
            }

            /// Returns the value as UTF-8, if present and valid.
            #[inline]
            #[must_use]
            pub fn $str_fn(&self) -> Option<&'a str> {
                self.$field().and_then(|b| std::str::from_utf8(b).ok())
            }
        )*
    };
}

impl<'a> NewOrderSingle<'a> {
    /// Creates an empty record bound to no buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears every field to its absent value and binds `buffer`.
    #[inline]
    pub fn reset(&mut self, buffer: &'a [u8]) {
        *self = Self {
            buffer,
            ..Self::default()
        };
    }

    /// Returns the buffer the slices refer to.
    #[inline]
    #[must_use]
    pub const fn buffer(&self) -> &'a [u8] {
        self.buffer
    }

    /// Returns the presence bits of the required fields.
    #[inline]
    #[must_use]
    pub const fn flags(&self) -> RequiredFields {
        self.flags
    }

    /// MsgType (35) byte, 0 when absent.
    #[inline]
    #[must_use]
    pub const fn msg_type(&self) -> u8 {
        self.msg_type
    }

    /// MsgSeqNum (34).
    #[inline]
    #[must_use]
    pub const fn msg_seq_num(&self) -> Option<i32> {
        self.msg_seq_num
    }

    slice_accessors! {
        /// SenderCompID (49).
        sender_comp_id, sender_comp_id_slice, sender_comp_id_str;
        /// TargetCompID (56).
        target_comp_id, target_comp_id_slice, target_comp_id_str;
        /// SendingTime (52).
        sending_time, sending_time_slice, sending_time_str;
        /// ClOrdID (11).
        cl_ord_id, cl_ord_id_slice, cl_ord_id_str;
        /// Symbol (55).
        symbol, symbol_slice, symbol_str;
        /// TransactTime (60).
        transact_time, transact_time_slice, transact_time_str;
    }

    /// Side (54) byte, 0 when absent.
    #[inline]
    #[must_use]
    pub const fn side(&self) -> u8 {
        self.side
    }

    /// Side (54) as an enumeration, if recognised.
    #[must_use]
    pub fn side_kind(&self) -> Option<Side> {
        Side::from_byte(self.side)
    }

    /// OrderQty (38).
    #[inline]
    #[must_use]
    pub const fn order_qty(&self) -> Option<i64> {
        self.order_qty
    }

    /// OrdType (40) byte, 0 when absent.
    #[inline]
    #[must_use]
    pub const fn ord_type(&self) -> u8 {
        self.ord_type
    }

    /// OrdType (40) as an enumeration, if recognised.
    #[must_use]
    pub fn ord_type_kind(&self) -> Option<OrdType> {
        OrdType::from_byte(self.ord_type)
    }

    /// Price (44) as mantissa and scale.
    #[inline]
    #[must_use]
    pub const fn price(&self) -> Option<Price> {
        self.price
    }

    /// Returns true if Price (44) was present and well formed.
    #[inline]
    #[must_use]
    pub const fn price_present(&self) -> bool {
        self.price.is_some()
    }

    /// Price (44) as a [`Decimal`].
    #[must_use]
    pub fn price_decimal(&self) -> Option<Decimal> {
        self.price.and_then(Price::to_decimal)
    }

    /// TimeInForce (59) byte, 0 when absent.
    #[inline]
    #[must_use]
    pub const fn time_in_force(&self) -> u8 {
        self.time_in_force
    }

    /// TimeInForce (59) as an enumeration, if recognised.
    #[must_use]
    pub fn time_in_force_kind(&self) -> Option<TimeInForce> {
        TimeInForce::from_byte(self.time_in_force)
    }

    /// CheckSum (10) as sent; it is not verified.
    #[inline]
    #[must_use]
    pub const fn checksum(&self) -> Option<i32> {
        self.checksum
    }

    /// SendingTime (52) parsed as a UTC timestamp.
    #[must_use]
    pub fn sending_time_utc(&self) -> Option<DateTime<Utc>> {
        self.sending_time().and_then(parse_utc_timestamp)
    }

    /// TransactTime (60) parsed as a UTC timestamp.
    #[must_use]
    pub fn transact_time_utc(&self) -> Option<DateTime<Utc>> {
        self.transact_time().and_then(parse_utc_timestamp)
    }
}
