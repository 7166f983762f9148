/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Typed views of FIX field values.
//!
//! This module provides the value types the typed extractors hand out:
//! - [`Side`], [`OrdType`], [`TimeInForce`]: single-byte enumerations
//! - [`Price`]: Decimal as integer mantissa and base-10 scale
//! - [`parse_utc_timestamp`]: UTCTimestamp field parsing

use chrono::{DateTime, NaiveDateTime, Utc};
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// SOH (Start of Header) delimiter terminating every FIX field.
pub const SOH: u8 = 0x01;

/// Equals sign delimiter between tag and value.
pub const EQUALS: u8 = b'=';

/// MsgType (tag 35) value of a NewOrderSingle.
pub const MSG_TYPE_NEW_ORDER_SINGLE: u8 = b'D';

/// Order side enumeration (tag 54).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, FromPrimitive, ToPrimitive,
)]
#[repr(u8)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order.
    Buy = b'1',
    /// Sell order.
    Sell = b'2',
    /// Buy minus.
    BuyMinus = b'3',
    /// Sell plus.
    SellPlus = b'4',
    /// Sell short.
    SellShort = b'5',
    /// Sell short exempt.
    SellShortExempt = b'6',
    /// Undisclosed.
    Undisclosed = b'7',
    /// Cross (both sides).
    Cross = b'8',
    /// Cross short.
    CrossShort = b'9',
}

impl Side {
    /// Creates a Side from its wire byte.
    #[inline]
    #[must_use]
    pub fn from_byte(b: u8) -> Option<Self> {
        Self::from_u8(b)
    }

    /// Returns the wire byte of this side.
    #[inline]
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        self as u8
    }

    /// Returns true if this is a buy-side order.
    #[must_use]
    pub const fn is_buy(self) -> bool {
        matches!(self, Self::Buy | Self::BuyMinus)
    }

    /// Returns true if this is a sell-side order.
    #[must_use]
    pub const fn is_sell(self) -> bool {
        matches!(
            self,
            Self::Sell | Self::SellPlus | Self::SellShort | Self::SellShortExempt
        )
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_byte() as char)
    }
}

impl TryFrom<u8> for Side {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_byte(value).ok_or(())
    }
}

/// Order type enumeration (tag 40).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, FromPrimitive, ToPrimitive,
)]
#[repr(u8)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrdType {
    /// Market order.
    Market = b'1',
    /// Limit order.
    Limit = b'2',
    /// Stop order.
    Stop = b'3',
    /// Stop limit order.
    StopLimit = b'4',
    /// Market on close.
    MarketOnClose = b'5',
    /// With or without.
    WithOrWithout = b'6',
    /// Limit or better.
    LimitOrBetter = b'7',
    /// Limit with or without.
    LimitWithOrWithout = b'8',
    /// On basis.
    OnBasis = b'9',
    /// Previously quoted.
    PreviouslyQuoted = b'D',
    /// Previously indicated.
    PreviouslyIndicated = b'E',
    /// Pegged.
    Pegged = b'P',
}

impl OrdType {
    /// Creates an OrdType from its wire byte.
    #[inline]
    #[must_use]
    pub fn from_byte(b: u8) -> Option<Self> {
        Self::from_u8(b)
    }

    /// Returns the wire byte of this order type.
    #[inline]
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        self as u8
    }

    /// Returns true if the order carries a limit price (tag 44).
    #[must_use]
    pub const fn is_priced(self) -> bool {
        matches!(
            self,
            Self::Limit | Self::StopLimit | Self::LimitOrBetter | Self::LimitWithOrWithout
        )
    }
}

/// Time in force enumeration (tag 59).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, FromPrimitive, ToPrimitive,
)]
#[repr(u8)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeInForce {
    /// Day.
    Day = b'0',
    /// Good till cancel.
    GoodTillCancel = b'1',
    /// At the opening.
    AtTheOpening = b'2',
    /// Immediate or cancel.
    ImmediateOrCancel = b'3',
    /// Fill or kill.
    FillOrKill = b'4',
    /// Good till crossing.
    GoodTillCrossing = b'5',
    /// Good till date.
    GoodTillDate = b'6',
    /// At the close.
    AtTheClose = b'7',
}

impl TimeInForce {
    /// Creates a TimeInForce from its wire byte.
    #[inline]
    #[must_use]
    pub fn from_byte(b: u8) -> Option<Self> {
        Self::from_u8(b)
    }

    /// Returns the wire byte of this time in force.
    #[inline]
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        self as u8
    }
}

/// Decimal price held as `mantissa × 10^(−scale)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Price {
    /// Integer digits of the value with the decimal point removed.
    pub mantissa: i64,
    /// Number of digits after the decimal point.
    pub scale: u32,
}

impl Price {
    /// Creates a new price.
    #[inline]
    #[must_use]
    pub const fn new(mantissa: i64, scale: u32) -> Self {
        Self { mantissa, scale }
    }

    /// Converts to a [`Decimal`].
    ///
    /// Returns `None` when the scale exceeds what `Decimal` can represent.
    #[must_use]
    pub fn to_decimal(self) -> Option<Decimal> {
        Decimal::try_from_i128_with_scale(i128::from(self.mantissa), self.scale).ok()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_decimal() {
            Some(d) => write!(f, "{}", d),
            None => write!(f, "{}e-{}", self.mantissa, self.scale),
        }
    }
}

/// Parses a FIX UTCTimestamp (`YYYYMMDD-HH:MM:SS[.sss...]`).
///
/// # Returns
/// The timestamp in UTC, or `None` if the bytes are not a valid timestamp.
#[must_use]
pub fn parse_utc_timestamp(bytes: &[u8]) -> Option<DateTime<Utc>> {
    let s = std::str::from_utf8(bytes).ok()?;
    NaiveDateTime::parse_from_str(s, "%Y%m%d-%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.and_utc())
}
