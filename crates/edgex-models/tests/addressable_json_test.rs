//! Addressable wire contract tests
//!
//! Covers sparse encoding, derived `baseURL`/`url` fields, and decoding.

use edgex_models::config::{methods, protocols};
use edgex_models::{Addressable, BaseObject};
use serde_json::{json, Value};

fn http_callback() -> Addressable {
    Addressable::new("device-callback")
        .with_protocol(protocols::HTTP)
        .with_address("localhost")
        .with_port(8080)
        .with_path("/callback")
}

fn encode(a: &Addressable) -> Value {
    serde_json::to_value(a).expect("addressable encodes")
}

#[test]
fn test_full_document_field_order() {
    let a = Addressable::new("camera")
        .with_base(BaseObject {
            created: 1_700_000_000_000,
            modified: 1_700_000_000_500,
            origin: 0,
        })
        .with_id("a1")
        .with_protocol(protocols::HTTP)
        .with_http_method(methods::POST)
        .with_address("10.0.0.5")
        .with_port(49990)
        .with_path("/api/v1/callback");

    assert_eq!(
        a.to_string(),
        concat!(
            r#"{"created":1700000000000,"modified":1700000000500,"#,
            r#""id":"a1","name":"camera","protocol":"HTTP","method":"POST","#,
            r#""address":"10.0.0.5","port":49990,"path":"/api/v1/callback","#,
            r#""baseURL":"HTTP://10.0.0.5:49990","#,
            r#""url":"HTTP://10.0.0.5:49990/api/v1/callback"}"#
        )
    );
}

#[test]
fn test_empty_strings_are_omitted() {
    let a = Addressable::new("bare").with_port(1);
    assert_eq!(encode(&a), json!({"name": "bare", "port": 1}));
}

#[test]
fn test_zero_port_is_omitted() {
    assert_eq!(Addressable::default().to_json().unwrap(), "{}");
}

#[test]
fn test_port_is_numeric() {
    let value = encode(&http_callback());
    assert!(value["port"].is_number());
    assert_eq!(value["port"], json!(8080));
}

#[test]
fn test_base_url_preserves_protocol_case() {
    let a = http_callback().with_protocol("Http");
    assert_eq!(encode(&a)["baseURL"], json!("Http://localhost:8080"));
    assert_eq!(a.base_url(), "http://localhost:8080");
}

#[test]
fn test_base_url_present_when_protocol_and_address_set() {
    for port in [0, 1, 8080, 65535] {
        let a = Addressable::default()
            .with_protocol(protocols::TCP)
            .with_address("gateway.local")
            .with_port(port);
        assert_eq!(
            encode(&a)["baseURL"],
            json!(format!("TCP://gateway.local:{}", port))
        );
    }
}

#[test]
fn test_derived_fields_absent_without_protocol_or_address() {
    let cases = [
        http_callback().with_protocol(""),
        http_callback().with_address(""),
        http_callback().with_protocol("").with_address(""),
    ];
    for a in cases {
        let value = encode(&a);
        assert!(value.get("baseURL").is_none(), "unexpected baseURL in {}", value);
        assert!(value.get("url").is_none(), "unexpected url in {}", value);
    }
}

#[test]
fn test_url_without_topic() {
    assert_eq!(
        encode(&http_callback())["url"],
        json!("HTTP://localhost:8080/callback")
    );
}

#[test]
fn test_url_with_topic_and_no_publisher() {
    let a = http_callback().with_topic("events");
    assert_eq!(encode(&a)["url"], json!("HTTP://localhost:8080events//callback"));
}

#[test]
fn test_publisher_suppresses_topic_in_url() {
    let a = http_callback().with_topic("events").with_publisher("pub1");
    let value = encode(&a);
    assert_eq!(value["url"], json!("HTTP://localhost:8080/callback"));
    assert_eq!(value["publisher"], json!("pub1"));
    assert_eq!(value["topic"], json!("events"));
}

#[test]
fn test_url_with_empty_path() {
    let a = http_callback().with_path("");
    let value = encode(&a);
    assert_eq!(value["url"], json!("HTTP://localhost:8080"));
    assert!(value.get("path").is_none());
}

#[test]
fn test_mqtt_addressable() {
    let a = Addressable::new("mqtt-broker")
        .with_protocol(protocols::MQTT)
        .with_address("broker.local")
        .with_port(1883)
        .with_publisher("edgex-publisher")
        .with_user("device")
        .with_password("secret")
        .with_topic("telemetry");

    assert_eq!(
        encode(&a),
        json!({
            "name": "mqtt-broker",
            "protocol": "MQTT",
            "address": "broker.local",
            "port": 1883,
            "publisher": "edgex-publisher",
            "user": "device",
            "password": "secret",
            "topic": "telemetry",
            "baseURL": "MQTT://broker.local:1883",
            "url": "MQTT://broker.local:1883"
        })
    );
}

#[test]
fn test_callback_url_empty_without_path() {
    let a = http_callback().with_path("").with_topic("events");
    assert_eq!(a.callback_url(), "");
    assert_eq!(http_callback().callback_url(), "http://localhost:8080/callback");
}

#[test]
fn test_derived_fields_track_current_values() {
    let a = http_callback();
    let first = encode(&a);
    let moved = a.with_port(9090);
    let second = encode(&moved);
    assert_eq!(first["baseURL"], json!("HTTP://localhost:8080"));
    assert_eq!(second["baseURL"], json!("HTTP://localhost:9090"));
}

#[test]
fn test_decode_ignores_derived_fields() {
    let a = Addressable::from_json(
        r#"{
            "name": "callback",
            "protocol": "HTTP",
            "address": "localhost",
            "port": 8080,
            "path": "/callback",
            "baseURL": "ftp://elsewhere:1",
            "url": "ftp://elsewhere:1/x",
            "unknown": true
        }"#,
    )
    .unwrap();

    assert_eq!(a.name, "callback");
    assert_eq!(a.port, 8080);
    assert_eq!(encode(&a)["baseURL"], json!("HTTP://localhost:8080"));
}

#[test]
fn test_decode_null_and_missing_fields() {
    let a = Addressable::from_json(r#"{"name":null,"method":"GET","port":null,"created":5}"#)
        .unwrap();
    assert_eq!(a.name, "");
    assert_eq!(a.http_method, "GET");
    assert_eq!(a.port, 0);
    assert_eq!(a.base.created, 5);
    assert_eq!(a.base.modified, 0);
}

#[test]
fn test_decode_rejects_malformed_port() {
    assert!(Addressable::from_json(r#"{"port":"8080"}"#).is_err());
}

#[test]
fn test_encode_decode_encode_is_stable() {
    let cases = [
        Addressable::default(),
        http_callback(),
        http_callback().with_topic("events"),
        http_callback()
            .with_topic("events")
            .with_publisher("pub1")
            .with_base(BaseObject::now().with_origin(42)),
        Addressable::new("no-address").with_protocol(protocols::HTTP),
    ];

    for original in cases {
        let first = original.to_json().unwrap();
        let decoded = Addressable::from_json(&first).unwrap();
        assert_eq!(decoded, original);
        assert_eq!(decoded.to_json().unwrap(), first);
    }
}
