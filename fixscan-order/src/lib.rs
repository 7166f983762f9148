/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # fixscan Order
//!
//! Typed, in-place extraction of FIX NewOrderSingle (MsgType `D`) messages.
//!
//! [`NewOrderSingleParser`] drives the field scanner and routes each
//! recognised tag into a caller-owned [`NewOrderSingle`]. String-like fields
//! are kept as windows into the input buffer; integers and prices are decoded
//! in place. The record is meant to be reused across messages.
//!
//! ```
//! use fixscan_order::{NewOrderSingle, NewOrderSingleParser};
//!
//! let msg = b"35=D\x0111=ABC\x0155=IBM\x0154=1\x0138=100\x0140=1\x0160=20240101-12:00:00\x01";
//! let parser = NewOrderSingleParser::new();
//! let mut order = NewOrderSingle::new();
//!
//! assert!(parser.parse(msg, msg.len(), &mut order));
//! assert_eq!(order.symbol_str(), Some("IBM"));
//! assert_eq!(order.order_qty(), Some(100));
//! ```

pub mod numeric;
pub mod parser;
pub mod record;
pub mod tags;

pub use parser::NewOrderSingleParser;
pub use record::{NewOrderSingle, RequiredFields};
