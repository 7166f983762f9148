//! Untyped field scanning example.
//!
//! Walks every field of a message with the push scanner, then again with the
//! pull iterator, and checks both against the SWAR field count.

use tracing::{info, warn};

use fixscan::prelude::{FieldCollector, FieldEvent, Scanner, count_fields};

mod common;
use common::{ExampleConfig, init_logging, to_display};

fn main() -> anyhow::Result<()> {
    init_logging();
    let cfg = ExampleConfig::from_env();
    let scanner = Scanner::new(cfg.scan);
    let msg = cfg.message.as_slice();

    let mut collector = FieldCollector::new();
    scanner.parse(msg, msg.len(), &mut collector);
    for field in collector.fields() {
        let value = field.value.get(msg).unwrap_or_default();
        info!(
            tag = field.tag,
            offset = field.value.offset,
            length = field.value.length,
            "{}",
            to_display(value)
        );
    }
    if let Some(e) = collector.error() {
        warn!(offset = e.offset(), "Scan stopped: {}", e);
    }

    let pulled = scanner
        .fields(msg, msg.len())
        .collect::<Result<Vec<FieldEvent<'_>>, _>>()?;
    info!(
        pushed = collector.fields().len(),
        pulled = pulled.len(),
        counted = count_fields(msg, msg.len()),
        "Field totals"
    );

    Ok(())
}
