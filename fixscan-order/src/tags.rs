/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Tag numbers routed by the NewOrderSingle extractor.

/// CheckSum.
pub const CHECKSUM: u32 = 10;
/// ClOrdID.
pub const CL_ORD_ID: u32 = 11;
/// MsgSeqNum.
pub const MSG_SEQ_NUM: u32 = 34;
/// MsgType.
pub const MSG_TYPE: u32 = 35;
/// OrderQty.
pub const ORDER_QTY: u32 = 38;
/// OrdType.
pub const ORD_TYPE: u32 = 40;
/// Price.
pub const PRICE: u32 = 44;
/// SenderCompID.
pub const SENDER_COMP_ID: u32 = 49;
/// SendingTime.
pub const SENDING_TIME: u32 = 52;
/// Side.
pub const SIDE: u32 = 54;
/// Symbol.
pub const SYMBOL: u32 = 55;
/// TargetCompID.
pub const TARGET_COMP_ID: u32 = 56;
/// TimeInForce.
pub const TIME_IN_FORCE: u32 = 59;
/// TransactTime.
pub const TRANSACT_TIME: u32 = 60;
