//! Integration tests for `PricingClient` against a mock pricing service.

use cart_pricing::PricingClient;
use cart_types::{PriceError, PriceSource};
use httpmock::prelude::*;
use rust_decimal_macros::dec;

#[tokio::test]
async fn fetches_price_from_product_document() {
    let server = MockServer::start();
    let price_mock = server.mock(|when, then| {
        when.method(GET).path("/cornflakes.json");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"title": "Corn Flakes", "price": 2.52}"#);
    });

    let client = PricingClient::new(server.base_url());
    let price = client.fetch_price("cornflakes").await.unwrap();

    assert_eq!(price, dec!(2.52));
    price_mock.assert();
}

#[tokio::test]
async fn price_survives_binary_float_hostile_values() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/shreddies.json");
        then.status(200).body(r#"{"price": 0.1}"#);
    });

    let client = PricingClient::new(server.base_url());
    let price = client.fetch_price("shreddies").await.unwrap();

    // 0.1 has no exact f64 representation; the decimal must be exact.
    assert_eq!(price.to_string(), "0.1");
    assert_eq!(price, dec!(0.1));
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_tolerated() {
    let server = MockServer::start();
    let price_mock = server.mock(|when, then| {
        when.method(GET).path("/weetabix.json");
        then.status(200).body(r#"{"price": 9.98}"#);
    });

    let client = PricingClient::new(format!("{}/", server.base_url()));
    let price = client.fetch_price("weetabix").await.unwrap();

    assert_eq!(price, dec!(9.98));
    price_mock.assert();
}

#[tokio::test]
async fn non_200_status_is_price_unavailable() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/unobtainium.json");
        then.status(404).body("not found");
    });

    let client = PricingClient::new(server.base_url());
    let err = client.fetch_price("unobtainium").await.unwrap_err();

    match err {
        PriceError::Unavailable { product, status } => {
            assert_eq!(product, "unobtainium");
            assert_eq!(status, 404);
        }
        other => panic!("expected Unavailable, got {other:?}"),
    }
}

#[tokio::test]
async fn server_error_status_is_price_unavailable() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/cheerios.json");
        then.status(503);
    });

    let client = PricingClient::new(server.base_url());
    let err = client.fetch_price("cheerios").await.unwrap_err();

    assert!(matches!(err, PriceError::Unavailable { status: 503, .. }));
}

#[tokio::test]
async fn invalid_json_body_is_parse_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/frosties.json");
        then.status(200).body("<html>maintenance page</html>");
    });

    let client = PricingClient::new(server.base_url());
    let err = client.fetch_price("frosties").await.unwrap_err();

    assert!(matches!(err, PriceError::Parse { .. }));
}

#[tokio::test]
async fn missing_price_field_is_parse_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/frosties.json");
        then.status(200).body(r#"{"title": "Frosties"}"#);
    });

    let client = PricingClient::new(server.base_url());
    let err = client.fetch_price("frosties").await.unwrap_err();

    assert!(matches!(err, PriceError::Parse { product, .. } if product == "frosties"));
}

#[tokio::test]
async fn non_numeric_price_field_is_parse_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/frosties.json");
        then.status(200).body(r#"{"price": "2.52"}"#);
    });

    let client = PricingClient::new(server.base_url());
    let err = client.fetch_price("frosties").await.unwrap_err();

    assert!(matches!(err, PriceError::Parse { .. }));
}

#[tokio::test]
async fn unreachable_service_is_transport_error() {
    // Port 1 is reserved and nothing listens there.
    let client = PricingClient::new("http://127.0.0.1:1");
    let err = client.fetch_price("cornflakes").await.unwrap_err();

    assert!(matches!(err, PriceError::Transport(_)));
}
