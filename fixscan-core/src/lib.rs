/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # fixscan Core
//!
//! Core types, traits, and error definitions for the fixscan FIX parser.
//!
//! This crate provides the building blocks shared by the scanner and the typed extractors:
//! - **Error types**: `ScanError`, `ExtractError`, and the umbrella `FixScanError`
//! - **Field types**: `FieldTag`, `FieldSlice`, `FieldEvent`, and the `FieldVisitor` trait
//! - **Value types**: `Side`, `OrdType`, `TimeInForce`, `Price`
//!
//! ## Zero-Copy Design
//!
//! Field events borrow the caller's buffer and describe values by offset and length,
//! so nothing on the parse path allocates.

pub mod error;
pub mod field;
pub mod types;

pub use error::{ExtractError, FixScanError, Result, ScanError};
pub use field::{FieldEvent, FieldSlice, FieldTag, FieldVisitor, FnVisitor};
pub use types::{
    EQUALS, MSG_TYPE_NEW_ORDER_SINGLE, OrdType, Price, SOH, Side, TimeInForce,
    parse_utc_timestamp,
};
