use std::collections::BTreeMap;
use std::time::Duration;

use restock::adapter::outbound::catalog::settings::ParamValue;
use restock::adapter::outbound::catalog::{CatalogClient, CatalogConfig};
use restock::domain::error::DomainError;
use restock::error::Error;
use restock::port::outbound::catalog::CatalogFetcher;
use rust_decimal_macros::dec;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LISTING_PATH: &str = "/api/1/entity/ms.products";

fn config_for(server: &MockServer) -> CatalogConfig {
    CatalogConfig {
        url: format!("{}{LISTING_PATH}", server.uri()),
        timeout_ms: 2_000,
        connect_timeout_ms: 1_000,
        ..CatalogConfig::default()
    }
}

async fn serve(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(LISTING_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn parses_products_and_availability_flags() {
    let server = MockServer::start().await;
    serve(
        &server,
        json!({
            "data": [
                { "name": "Milk", "price": 50, "available": 1, "alias": "milk-1l" },
                { "name": "Paneer", "price": 20, "available": 0 },
                { "name": "Lassi", "price": 10, "available": true },
                { "name": "Whey", "available": "yes" },
                { "name": "Ghee", "price": 600 }
            ],
            "paging": { "total": 5 }
        }),
    )
    .await;
    let client = CatalogClient::from_config(&config_for(&server)).expect("client");

    let products = client.fetch_products().await.expect("fetch succeeds");

    let flags: Vec<(&str, bool)> = products
        .iter()
        .map(|p| (p.name(), p.is_available()))
        .collect();
    assert_eq!(
        flags,
        vec![
            ("Milk", true),
            ("Paneer", false),
            ("Lassi", true),
            ("Whey", false),
            ("Ghee", false),
        ]
    );
    assert_eq!(products[0].price(), Some(dec!(50)));
    assert_eq!(products[3].price(), None);
}

#[tokio::test]
async fn sends_configured_query_and_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(LISTING_PATH))
        .and(query_param("q", "{\"alias\":\"protein\"}"))
        .and(query_param("limit", "32"))
        .and(query_param("total", "true"))
        .and(header("frontend", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let mut query = BTreeMap::new();
    query.insert(
        "q".to_string(),
        ParamValue::Text("{\"alias\":\"protein\"}".to_string()),
    );
    query.insert("limit".to_string(), ParamValue::Integer(32));
    query.insert("total".to_string(), ParamValue::Flag(true));
    let mut headers = BTreeMap::new();
    headers.insert("frontend".to_string(), "1".to_string());

    let config = CatalogConfig {
        query,
        headers,
        ..config_for(&server)
    };
    let client = CatalogClient::from_config(&config).expect("client");

    let products = client.fetch_products().await.expect("fetch succeeds");
    assert!(products.is_empty());
}

#[tokio::test]
async fn unreadable_price_does_not_fail_the_fetch() {
    let server = MockServer::start().await;
    serve(
        &server,
        json!({
            "data": [
                { "name": "Good", "price": 49.99, "available": 1 },
                { "name": "Odd", "price": "N/A", "available": 0 },
                { "name": "Blank", "price": "", "available": 1 },
                { "name": "Nested", "price": { "amount": 10 }, "available": 0 }
            ]
        }),
    )
    .await;
    let client = CatalogClient::from_config(&config_for(&server)).expect("client");

    let products = client.fetch_products().await.expect("fetch succeeds");

    assert_eq!(products.len(), 4);
    assert_eq!(products[0].price(), Some(dec!(49.99)));
    assert_eq!(products[1].price(), None);
    assert_eq!(products[2].price(), None);
    assert!(products[2].is_available());
    assert_eq!(products[3].price(), None);
}

#[tokio::test]
async fn missing_data_array_is_remote_format_error() {
    let server = MockServer::start().await;
    serve(&server, json!({ "messages": ["maintenance"] })).await;
    let client = CatalogClient::from_config(&config_for(&server)).expect("client");

    let result = client.fetch_products().await;

    assert!(matches!(result, Err(Error::RemoteFormat(_))));
}

#[tokio::test]
async fn non_json_body_is_remote_format_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(LISTING_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>blocked</html>"))
        .mount(&server)
        .await;
    let client = CatalogClient::from_config(&config_for(&server)).expect("client");

    let result = client.fetch_products().await;

    assert!(matches!(result, Err(Error::RemoteFormat(_))));
}

#[tokio::test]
async fn server_error_is_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(LISTING_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let client = CatalogClient::from_config(&config_for(&server)).expect("client");

    let result = client.fetch_products().await;

    assert!(matches!(result, Err(Error::Network(msg)) if msg.contains("503")));
}

#[tokio::test]
async fn slow_server_is_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(LISTING_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": [] }))
                .set_delay(Duration::from_millis(800)),
        )
        .mount(&server)
        .await;
    let config = CatalogConfig {
        timeout_ms: 100,
        ..config_for(&server)
    };
    let client = CatalogClient::from_config(&config).expect("client");

    let result = client.fetch_products().await;

    assert!(matches!(result, Err(Error::Network(_))));
}

#[tokio::test]
async fn blank_name_is_validation_error() {
    let server = MockServer::start().await;
    serve(
        &server,
        json!({ "data": [
            { "name": "Milk", "price": 50, "available": 1 },
            { "name": "  ", "price": 5, "available": 1 }
        ]}),
    )
    .await;
    let client = CatalogClient::from_config(&config_for(&server)).expect("client");

    let result = client.fetch_products().await;

    assert!(matches!(
        result,
        Err(Error::Validation(DomainError::MissingName))
    ));
}

#[tokio::test]
async fn raw_payload_is_dumped_when_non_empty() {
    let server = MockServer::start().await;
    let body = json!({ "data": [{ "name": "Milk", "price": 50, "available": 1 }] });
    serve(&server, body.clone()).await;
    let dir = tempfile::tempdir().expect("temp dir");
    let dump = dir.path().join("productsData.json");

    let config = CatalogConfig {
        raw_dump_path: Some(dump.to_string_lossy().into_owned()),
        ..config_for(&server)
    };
    let client = CatalogClient::from_config(&config).expect("client");
    client.fetch_products().await.expect("fetch succeeds");

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&dump).expect("dump exists"))
            .expect("dump is JSON");
    assert_eq!(written, body);
}

#[tokio::test]
async fn empty_payload_is_not_dumped() {
    let server = MockServer::start().await;
    serve(&server, json!({ "data": [] })).await;
    let dir = tempfile::tempdir().expect("temp dir");
    let dump = dir.path().join("productsData.json");

    let config = CatalogConfig {
        raw_dump_path: Some(dump.to_string_lossy().into_owned()),
        ..config_for(&server)
    };
    let client = CatalogClient::from_config(&config).expect("client");
    client.fetch_products().await.expect("fetch succeeds");

    assert!(!dump.exists());
}
