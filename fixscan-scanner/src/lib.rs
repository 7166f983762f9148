/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # fixscan Scanner
//!
//! Zero-allocation scanning of FIX tag=value messages.
//!
//! The scanner walks a borrowed buffer strictly forward and reports each
//! `tag=value` field to a [`FieldVisitor`](fixscan_core::FieldVisitor) as an
//! offset and length into that buffer.
//!
//! ## Features
//!
//! - **Tiered terminator search**: AVX2 vectors, unrolled SWAR, single-word SWAR, scalar tail
//! - **Short-tag fast path**: one- to three-digit tags decoded from a single four-byte peek
//! - **Push or pull**: [`parse`] drives a visitor, [`Fields`] is an iterator
//! - **No allocation**: all scratch lives on the stack

pub mod collector;
pub mod config;
pub mod fields;
pub mod scanner;
pub mod simd;
pub mod swar;
pub mod tag;

pub use collector::{CollectedField, FieldCollector};
pub use config::{ScanConfig, TruncatedValue};
pub use fields::Fields;
pub use scanner::{Scanner, count_fields, parse};
pub use simd::{LANES, USE_SIMD};
