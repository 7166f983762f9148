/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # fixscan
//!
//! Zero-allocation scanning of FIX tag=value messages.
//!
//! fixscan walks a borrowed byte buffer once, reports every `tag=value` field
//! to a visitor as an offset and length into that buffer, and can extract
//! NewOrderSingle messages into a reusable typed record without copying.
//!
//! ## Features
//!
//! - **Zero-copy parsing**: Field values reference the original buffer
//! - **Tiered search**: AVX2 vectors where available, SWAR words elsewhere, scalar tails
//! - **Visitor driven**: Scans are generic over the visitor and monomorphised
//! - **No allocation**: Nothing on the hot path touches the heap
//!
//! ## Quick Start
//!
//! ```rust
//! use fixscan::prelude::*;
//!
//! let msg = b"8=FIX.4.4\x0135=D\x0111=ABC\x0155=IBM\x0154=1\x0138=100\x0140=1\x0160=20240101-12:00:00\x01";
//!
//! // Untyped: count fields with a closure visitor
//! let mut tags = 0;
//! parse(msg, msg.len(), FnVisitor(|_field: FieldEvent<'_>| tags += 1));
//! assert_eq!(tags, 8);
//!
//! // Typed: extract into a reusable record
//! let parser = NewOrderSingleParser::new();
//! let mut order = NewOrderSingle::new();
//! assert!(parser.parse(msg, msg.len(), &mut order));
//! assert_eq!(order.side_kind(), Some(Side::Buy));
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`]: Field events, the visitor trait, value types, and errors
//! - [`scanner`]: Tiered SOH search and the push/pull field scanners
//! - [`order`]: NewOrderSingle record and extractor

pub mod core {
    //! Field events, the visitor trait, value types, and errors.
    pub use fixscan_core::*;
}

pub mod scanner {
    //! Tiered SOH search and the push/pull field scanners.
    pub use fixscan_scanner::*;
}

pub mod order {
    //! NewOrderSingle record and extractor.
    pub use fixscan_order::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    // Core types
    pub use fixscan_core::{
        ExtractError, FieldEvent, FieldSlice, FieldTag, FieldVisitor, FixScanError, FnVisitor,
        OrdType, Price, Result, ScanError, Side, TimeInForce,
    };

    // Scanner
    pub use fixscan_scanner::{
        FieldCollector, Fields, ScanConfig, Scanner, TruncatedValue, count_fields, parse,
    };

    // Typed extraction
    pub use fixscan_order::{NewOrderSingle, NewOrderSingleParser, RequiredFields};
}
