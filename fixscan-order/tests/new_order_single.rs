/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! End-to-end NewOrderSingle extraction tests.

use fixscan_core::error::ExtractError;
use fixscan_core::types::{OrdType, Price, Side, TimeInForce};
use fixscan_order::{NewOrderSingle, NewOrderSingleParser, RequiredFields, tags};
use fixscan_scanner::ScanConfig;
use rust_decimal::Decimal;

const HAPPY: &str = "8=FIX.4.4|9=176|35=D|49=SENDER|56=TARGET|34=2|52=20240101-12:00:00.000|\
11=ABC123|55=IBM|54=1|38=100|40=2|44=125.50|59=0|60=20240101-12:00:00.000|10=000|";

fn fix(msg: &str) -> Vec<u8> {
    msg.replace('|', "\x01").into_bytes()
}

fn all_configs() -> Vec<ScanConfig> {
    let mut configs = Vec::new();
    for simd in [false, true] {
        for word_alignment in [false, true] {
            for short_tags in [false, true] {
                configs.push(
                    ScanConfig::strict()
                        .with_simd(simd)
                        .with_word_alignment(word_alignment)
                        .with_short_tags(short_tags),
                );
            }
        }
    }
    configs
}

#[test]
fn test_happy_path() {
    let buf = fix(HAPPY);
    let parser = NewOrderSingleParser::new();
    let mut order = NewOrderSingle::new();

    assert!(parser.parse(&buf, buf.len(), &mut order));
    assert_eq!(order.msg_type(), b'D');
    assert_eq!(order.msg_seq_num(), Some(2));
    assert_eq!(order.sender_comp_id_str(), Some("SENDER"));
    assert_eq!(order.target_comp_id_str(), Some("TARGET"));
    assert_eq!(order.sending_time_str(), Some("20240101-12:00:00.000"));
    assert_eq!(order.cl_ord_id(), Some(&b"ABC123"[..]));
    assert_eq!(order.cl_ord_id_slice().map(|s| s.length), Some(6));
    assert_eq!(order.symbol_str(), Some("IBM"));
    assert_eq!(order.side(), b'1');
    assert_eq!(order.order_qty(), Some(100));
    assert_eq!(order.ord_type(), b'2');
    assert_eq!(order.price(), Some(Price::new(12550, 2)));
    assert!(order.price_present());
    assert_eq!(order.time_in_force(), b'0');
    assert_eq!(order.transact_time_str(), Some("20240101-12:00:00.000"));
    assert_eq!(order.checksum(), Some(0));
    assert_eq!(order.flags(), RequiredFields::ALL);
}

#[test]
fn test_happy_path_typed_views() {
    let buf = fix(HAPPY);
    let order = NewOrderSingleParser::new().decode(&buf).unwrap();

    assert_eq!(order.side_kind(), Some(Side::Buy));
    assert_eq!(order.ord_type_kind(), Some(OrdType::Limit));
    assert_eq!(order.time_in_force_kind(), Some(TimeInForce::Day));
    assert_eq!(order.price_decimal(), Some(Decimal::new(12550, 2)));
    assert_eq!(
        order.transact_time_utc().map(|t| t.to_rfc3339()),
        Some("2024-01-01T12:00:00+00:00".to_string())
    );
    assert_eq!(order.sending_time_utc(), order.transact_time_utc());
}

#[test]
fn test_missing_required_field() {
    let buf = fix(&HAPPY.replace("38=100|", ""));
    let parser = NewOrderSingleParser::new();
    let mut order = NewOrderSingle::new();

    assert!(!parser.parse(&buf, buf.len(), &mut order));
    assert_eq!(
        parser.try_parse(&buf, buf.len(), &mut order),
        Err(ExtractError::MissingRequiredField {
            tag: tags::ORDER_QTY
        })
    );
}

#[test]
fn test_wrong_message_type() {
    let buf = fix(&HAPPY.replace("35=D|", "35=8|"));
    let parser = NewOrderSingleParser::new();
    let mut order = NewOrderSingle::new();

    assert!(!parser.parse(&buf, buf.len(), &mut order));
    assert_eq!(
        parser.try_parse(&buf, buf.len(), &mut order),
        Err(ExtractError::WrongMsgType { found: '8' })
    );
}

#[test]
fn test_malformed_decimal() {
    let buf = fix(&HAPPY.replace("44=125.50|", "44=12.5.0|"));
    let parser = NewOrderSingleParser::new();
    let mut order = NewOrderSingle::new();

    assert!(!parser.parse(&buf, buf.len(), &mut order));
    assert_eq!(
        parser.try_parse(&buf, buf.len(), &mut order),
        Err(ExtractError::MalformedDecimal { tag: tags::PRICE })
    );
}

#[test]
fn test_empty_required_value_is_absent() {
    let buf = fix("35=D|11=|55=X|54=1|38=1|40=1|60=T|");
    let parser = NewOrderSingleParser::new();
    let mut order = NewOrderSingle::new();

    assert_eq!(
        parser.try_parse(&buf, buf.len(), &mut order),
        Err(ExtractError::MissingRequiredField {
            tag: tags::CL_ORD_ID
        })
    );
    let slice = order.cl_ord_id_slice().unwrap();
    assert_eq!(slice.offset, 8);
    assert_eq!(slice.length, 0);
    assert!(!order.flags().contains(RequiredFields::CL_ORD_ID));
}

#[test]
fn test_long_value_crosses_every_tier() {
    let cl_ord_id = "ABCDEFGHIJKLMNOPQRST";
    let rest = HAPPY.replace("35=D|", "").replace("11=ABC123|", "");
    let buf = fix(&format!("35=D|11={cl_ord_id}|{rest}"));

    for config in all_configs() {
        let parser = NewOrderSingleParser::with_config(config);
        let mut order = NewOrderSingle::new();
        assert!(parser.parse(&buf, buf.len(), &mut order), "{config:?}");
        assert_eq!(order.cl_ord_id_str(), Some(cl_ord_id), "{config:?}");
        assert_eq!(order.cl_ord_id_slice().map(|s| s.length), Some(20));
    }
}

#[test]
fn test_value_lengths_around_tier_widths() {
    let parser = NewOrderSingleParser::new();
    for len in [1usize, 7, 8, 9, 15, 16, 17, 31, 32, 33, 64, 100] {
        let symbol = "S".repeat(len);
        let buf = fix(&HAPPY.replace("55=IBM|", &format!("55={symbol}|")));
        let mut order = NewOrderSingle::new();
        assert!(parser.parse(&buf, buf.len(), &mut order), "len {len}");
        assert_eq!(order.symbol_str(), Some(symbol.as_str()), "len {len}");
    }
}

#[test]
fn test_configs_agree_at_every_alignment() {
    let msg = fix(HAPPY);
    let reference = NewOrderSingleParser::new().decode(&msg).unwrap();

    for shift in 0..8 {
        let mut padded = vec![b'#'; shift];
        padded.extend_from_slice(&msg);
        let buf = &padded[shift..];

        for config in all_configs() {
            let order = NewOrderSingleParser::with_config(config).decode(buf).unwrap();
            assert_eq!(order.cl_ord_id_slice(), reference.cl_ord_id_slice());
            assert_eq!(order.transact_time_slice(), reference.transact_time_slice());
            assert_eq!(order.price(), reference.price());
            assert_eq!(order.checksum(), reference.checksum());
        }
    }
}

#[test]
fn test_reparse_is_idempotent() {
    let buf = fix(HAPPY);
    let parser = NewOrderSingleParser::new();

    let mut first = NewOrderSingle::new();
    assert!(parser.parse(&buf, buf.len(), &mut first));
    let snapshot = first;
    assert!(parser.parse(&buf, buf.len(), &mut first));
    assert_eq!(first, snapshot);
}

#[test]
fn test_record_reuse_clears_previous_message() {
    let full = fix(HAPPY);
    let bare = fix("35=D|11=X|55=Y|54=2|38=5|40=1|60=T|");
    let parser = NewOrderSingleParser::new();
    let mut order = NewOrderSingle::new();

    assert!(parser.parse(&full, full.len(), &mut order));
    assert!(order.price_present());

    assert!(parser.parse(&bare, bare.len(), &mut order));
    assert!(!order.price_present());
    assert_eq!(order.msg_seq_num(), None);
    assert_eq!(order.checksum(), None);
    assert_eq!(order.sender_comp_id(), None);
    assert_eq!(order.side_kind(), Some(Side::Sell));
}

#[test]
fn test_trailing_bytes_without_soh_rejected() {
    let mut buf = fix(HAPPY);
    buf.pop();
    let parser = NewOrderSingleParser::new();
    let mut order = NewOrderSingle::new();

    assert!(matches!(
        parser.try_parse(&buf, buf.len(), &mut order),
        Err(ExtractError::TruncatedValue { .. })
    ));
}

#[test]
fn test_leading_zero_and_long_tags() {
    let buf = fix("035=D|0011=A|55=X|00054=1|38=1|40=1|60=T|12345=ignored|");
    let order = NewOrderSingleParser::new().decode(&buf).unwrap();
    assert_eq!(order.msg_type(), b'D');
    assert_eq!(order.cl_ord_id_str(), Some("A"));
    assert_eq!(order.side(), b'1');
}

#[test]
fn test_length_shorter_than_buffer() {
    let buf = fix(HAPPY);
    let cut = HAPPY.find("60=").unwrap();
    let parser = NewOrderSingleParser::new();
    let mut order = NewOrderSingle::new();

    assert_eq!(
        parser.try_parse(&buf, cut, &mut order),
        Err(ExtractError::MissingRequiredField {
            tag: tags::TRANSACT_TIME
        })
    );
}
