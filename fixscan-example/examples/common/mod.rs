//! Common utilities shared across examples.

#![allow(dead_code)]

use fixscan::scanner::ScanConfig;
use std::env;

/// Sample NewOrderSingle used when no message is given on the command line.
pub const SAMPLE_ORDER: &str = "8=FIX.4.4|9=176|35=D|49=SENDER|56=TARGET|34=2|\
52=20240101-12:00:00.000|11=ABC123|55=IBM|54=1|38=100|40=2|44=125.50|59=0|\
60=20240101-12:00:00.000|10=000|";

/// Example configuration loaded from the command line and environment variables.
#[derive(Debug, Clone)]
pub struct ExampleConfig {
    /// Message bytes with `|` already replaced by SOH.
    pub message: Vec<u8>,
    /// Scanner settings.
    pub scan: ScanConfig,
}

impl ExampleConfig {
    /// Reads the message from the first argument and tier settings from
    /// `FIXSCAN_SIMD` and `FIXSCAN_ALIGN`.
    #[must_use]
    pub fn from_env() -> Self {
        let message = env::args().nth(1).unwrap_or_else(|| SAMPLE_ORDER.to_string());
        let scan = ScanConfig::new()
            .with_simd(env_flag("FIXSCAN_SIMD").unwrap_or(true))
            .with_word_alignment(env_flag("FIXSCAN_ALIGN").unwrap_or(false));
        Self {
            message: to_wire(&message),
            scan,
        }
    }
}

/// Replaces the `|` placeholder with SOH.
#[must_use]
pub fn to_wire(message: &str) -> Vec<u8> {
    message.replace('|', "\x01").into_bytes()
}

/// Replaces SOH with `|` for display.
#[must_use]
pub fn to_display(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).replace('\x01', "|")
}

fn env_flag(name: &str) -> Option<bool> {
    parse_flag(&env::var(name).ok()?)
}

/// Reads an on/off switch; anything unrecognised is `None`.
#[must_use]
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

/// Initializes logging for examples.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .try_init();
}
