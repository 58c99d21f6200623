use std::time::Duration;

use httpmock::prelude::*;
use navprice_core::{
    Decimal, ErrorKind, FetchOutcome, InstrumentDescriptor, NavpriceConfig, PriceSource, Url,
};
use navprice_vanguard::VanguardSource;

const PATH: &str = "/api/funds/vanguard-lifestrategy-60-equity-fund-accumulation-shares";

fn fund(url: &str) -> InstrumentDescriptor {
    InstrumentDescriptor::new("ls60", "LifeStrategy 60% Equity", Url::parse(url).unwrap())
}

fn source() -> VanguardSource {
    VanguardSource::new(&NavpriceConfig::default()).expect("client builds")
}

#[tokio::test]
async fn ok_response_yields_success() {
    let server = MockServer::start_async().await;
    let m = server
        .mock_async(|when, then| {
            when.method(GET).path(PATH);
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"navPrice":{"value":"123.45"}}"#);
        })
        .await;

    let out = source()
        .fetch(&fund(&server.url(PATH)), Duration::from_secs(5))
        .await;
    m.assert_async().await;
    match out {
        FetchOutcome::Success { price, descriptor, .. } => {
            assert_eq!(price, Decimal::new(12345, 2));
            assert_eq!(descriptor.id(), "ls60");
        }
        other => panic!("expected success, got {other:?}"),
    }
}

#[tokio::test]
async fn sends_configured_user_agent() {
    let server = MockServer::start_async().await;
    let m = server
        .mock_async(|when, then| {
            when.method(GET)
                .path(PATH)
                .header("user-agent", "navprice-test/1.0");
            then.status(200).body(r#"{"navPrice":{"value":"1.00"}}"#);
        })
        .await;

    let cfg = NavpriceConfig {
        user_agent: "navprice-test/1.0".to_string(),
        ..NavpriceConfig::default()
    };
    let out = VanguardSource::new(&cfg)
        .unwrap()
        .fetch(&fund(&server.url(PATH)), Duration::from_secs(5))
        .await;
    m.assert_async().await;
    assert!(out.is_success());
}

#[tokio::test]
async fn server_error_is_bad_response_even_with_decodable_body() {
    // The error body is valid price JSON; it must not be decoded into a price.
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(PATH);
            then.status(500).body(r#"{"navPrice":{"value":"999.99"}}"#);
        })
        .await;

    let out = source()
        .fetch(&fund(&server.url(PATH)), Duration::from_secs(5))
        .await;
    assert_eq!(out.reason(), Some(ErrorKind::BadResponse));
    assert_eq!(out.price(), None);
    assert!(out.error().unwrap().to_string().contains("500"));
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(PATH);
            then.status(200).body("{\"navPrice\": ");
        })
        .await;

    let out = source()
        .fetch(&fund(&server.url(PATH)), Duration::from_secs(5))
        .await;
    assert_eq!(out.reason(), Some(ErrorKind::DecodeError));
}

#[tokio::test]
async fn non_numeric_price_is_parse_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(PATH);
            then.status(200).body(r#"{"navPrice":{"value":"abc"}}"#);
        })
        .await;

    let out = source()
        .fetch(&fund(&server.url(PATH)), Duration::from_secs(5))
        .await;
    assert_eq!(out.reason(), Some(ErrorKind::ParseError));
}

#[tokio::test]
async fn slow_server_times_out_as_network_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(PATH);
            then.status(200)
                .delay(Duration::from_millis(500))
                .body(r#"{"navPrice":{"value":"1.00"}}"#);
        })
        .await;

    let out = source()
        .fetch(&fund(&server.url(PATH)), Duration::from_millis(50))
        .await;
    assert_eq!(out.reason(), Some(ErrorKind::NetworkError));
    assert!(out.latency() < Duration::from_millis(500));
}

#[tokio::test]
async fn refused_connection_is_network_error() {
    // Bind then drop a listener so the port is known to be closed.
    let port = {
        let l = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        l.local_addr().unwrap().port()
    };
    let out = source()
        .fetch(
            &fund(&format!("http://127.0.0.1:{port}{PATH}")),
            Duration::from_secs(2),
        )
        .await;
    assert_eq!(out.reason(), Some(ErrorKind::NetworkError));
}
