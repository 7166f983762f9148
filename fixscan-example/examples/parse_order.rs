//! NewOrderSingle extraction example.
//!
//! Parses the message given as the first argument (fields separated by `|`),
//! or a built-in sample order, and logs the extracted fields.

use anyhow::Context;
use tracing::{info, warn};

use fixscan::prelude::{NewOrderSingle, NewOrderSingleParser};

mod common;
use common::{ExampleConfig, init_logging, to_display};

fn main() -> anyhow::Result<()> {
    init_logging();
    let cfg = ExampleConfig::from_env();
    info!(
        simd = cfg.scan.simd_active(),
        alignment = cfg.scan.word_alignment,
        "Parsing {}",
        to_display(&cfg.message)
    );

    let parser = NewOrderSingleParser::with_config(cfg.scan);
    let mut order = NewOrderSingle::new();

    if let Err(e) = parser.try_parse(&cfg.message, cfg.message.len(), &mut order) {
        warn!("Rejected: {}", e);
        return Err(e).context("message is not a valid NewOrderSingle");
    }

    info!("parsed=true msgType={}", char::from(order.msg_type()));
    info!(
        "clOrdId={} length={}",
        order.cl_ord_id_str().unwrap_or_default(),
        order.cl_ord_id_slice().map_or(0, |s| s.length)
    );
    info!(
        "symbol={} side={:?} orderQty={:?} ordType={:?}",
        order.symbol_str().unwrap_or_default(),
        order.side_kind(),
        order.order_qty(),
        order.ord_type_kind()
    );
    if let Some(price) = order.price() {
        info!("price={} mantissa={} scale={}", price, price.mantissa, price.scale);
    }
    if let Some(ts) = order.transact_time_utc() {
        info!("transactTime={}", ts.to_rfc3339());
    }

    Ok(())
}
