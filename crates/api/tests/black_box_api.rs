use reqwest::StatusCode;
use serde_json::{json, Value};

use storefront_api::config::ApiConfig;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod over the bundled in-memory collaborators, on an ephemeral port.
        let app = storefront_api::app::build_app(&ApiConfig::default()).expect("failed to build app");
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn add_item(client: &reqwest::Client, srv: &TestServer, user_id: &str, product_id: &str, quantity: u32) {
    let res = client
        .post(srv.url("/api/cart"))
        .json(&json!({
            "userId": user_id,
            "item": { "productId": product_id, "quantity": quantity },
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn health_and_ping() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client.get(srv.url("/health")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client.get(srv.url("/api/ping")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, "pong");
}

#[tokio::test]
async fn request_id_is_minted_or_echoed() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client.get(srv.url("/health")).send().await.unwrap();
    let minted = res.headers().get("x-request-id").expect("request id header");
    assert!(!minted.to_str().unwrap().is_empty());

    let res = client
        .get(srv.url("/health"))
        .header("x-request-id", "req-123")
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers().get("x-request-id").unwrap(), "req-123");
}

#[tokio::test]
async fn cart_lifecycle_add_view_empty() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // Add (merges quantities for the same product)
    add_item(&client, &srv, "shopper-1", "L9ECAV7KIM", 1).await;
    let res = client
        .post(srv.url("/api/cart"))
        .json(&json!({
            "userId": "shopper-1",
            "item": { "productId": "L9ECAV7KIM", "quantity": 2 },
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let raw: Value = res.json().await.unwrap();
    assert_eq!(raw["userId"], "shopper-1");
    assert_eq!(raw["items"][0]["quantity"], 3);
    assert!(raw["items"][0].get("product").is_none());

    // View in EUR
    let res = client
        .get(srv.url("/api/cart"))
        .query(&[("sessionId", "shopper-1"), ("currencyCode", "EUR")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let cart: Value = res.json().await.unwrap();
    let line = &cart["items"][0];
    assert_eq!(line["productId"], "L9ECAV7KIM");
    assert_eq!(line["quantity"], 3);
    assert_eq!(line["product"]["price"]["currencyCode"], "EUR");
    assert!(line["product"].get("priceUsd").is_none());

    // Empty, twice
    for _ in 0..2 {
        let res = client
            .delete(srv.url("/api/cart"))
            .json(&json!({ "userId": "shopper-1" }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NO_CONTENT);
        assert!(res.bytes().await.unwrap().is_empty());
    }

    let cart: Value = client
        .get(srv.url("/api/cart"))
        .query(&[("sessionId", "shopper-1")])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(cart["items"], json!([]));
}

#[tokio::test]
async fn cart_without_session_is_empty_not_rejected() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(srv.url("/api/cart")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let cart: Value = res.json().await.unwrap();
    assert_eq!(cart["userId"], "");
    assert_eq!(cart["items"], json!([]));
}

#[tokio::test]
async fn add_item_with_zero_quantity_is_rejected() {
    let srv = TestServer::spawn().await;
    let res = reqwest::Client::new()
        .post(srv.url("/api/cart"))
        .json(&json!({
            "userId": "shopper-2",
            "item": { "productId": "L9ECAV7KIM", "quantity": 0 },
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_argument");
}

#[tokio::test]
async fn checkout_enriches_order_lines_and_keeps_cost() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    add_item(&client, &srv, "buyer", "L9ECAV7KIM", 2).await;
    add_item(&client, &srv, "buyer", "HQTGWGPNH4", 1).await;

    let res = client
        .post(srv.url("/api/checkout"))
        .query(&[("currencyCode", "EUR")])
        .json(&json!({
            "userId": "buyer",
            "userCurrency": "EUR",
            "email": "buyer@example.com",
            "address": {
                "streetAddress": "1600 Amphitheatre Parkway",
                "city": "Mountain View",
                "state": "CA",
                "country": "United States",
                "zipCode": "94043"
            },
            "creditCard": {
                "creditCardNumber": "4432-8015-6152-0454",
                "creditCardCvv": 672,
                "creditCardExpirationYear": 2030,
                "creditCardExpirationMonth": 1
            }
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let order: Value = res.json().await.unwrap();

    assert!(!order["orderId"].as_str().unwrap().is_empty());
    assert!(!order["shippingTrackingId"].as_str().unwrap().is_empty());
    assert_eq!(order["shippingCost"]["currencyCode"], "EUR");
    assert_eq!(order["shippingAddress"]["city"], "Mountain View");

    let items = order["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["item"]["productId"], "L9ECAV7KIM");
    assert_eq!(items[0]["item"]["quantity"], 2);
    assert_eq!(items[0]["cost"]["currencyCode"], "EUR");
    assert_eq!(items[0]["item"]["product"]["price"]["currencyCode"], "EUR");
    assert_eq!(items[1]["item"]["productId"], "HQTGWGPNH4");

    // Checkout consumed the cart.
    let cart: Value = client
        .get(srv.url("/api/cart"))
        .query(&[("sessionId", "buyer")])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(cart["items"], json!([]));
}

#[tokio::test]
async fn checkout_with_empty_cart_is_a_client_error() {
    let srv = TestServer::spawn().await;
    let res = reqwest::Client::new()
        .post(srv.url("/api/checkout"))
        .json(&json!({ "userId": "nobody", "userCurrency": "USD" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn products_list_single_and_errors() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let products: Vec<Value> = client
        .get(srv.url("/api/products"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(products.len(), 10);
    assert_eq!(products[0]["id"], "OLJCESPC7Z");
    assert!(products.iter().all(|p| p["price"]["currencyCode"] == "USD"));

    let res = client
        .get(srv.url("/api/products/HQTGWGPNH4"))
        .query(&[("currencyCode", "JPY")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let product: Value = res.json().await.unwrap();
    assert_eq!(product["id"], "HQTGWGPNH4");
    assert_eq!(product["price"]["currencyCode"], "JPY");

    let res = client.get(srv.url("/api/products/NOPE")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "not_found");

    let res = client
        .get(srv.url("/api/products/HQTGWGPNH4"))
        .query(&[("currencyCode", "XXX")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unsupported_methods_return_405() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client.put(srv.url("/api/products")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);

    let res = client.get(srv.url("/api/checkout")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);

    let res = client.head(srv.url("/api/currency")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);

    let res = client
        .patch(srv.url("/api/cart"))
        .json(&json!({ "userId": "x" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn recommendations_exclude_requested_and_cap_at_four() {
    let srv = TestServer::spawn().await;
    let res = reqwest::Client::new()
        .get(srv.url("/api/recommendations"))
        .query(&[
            ("sessionId", "s1"),
            ("productIds", "OLJCESPC7Z,66VCHSJNUP"),
            ("productIds", "1YMWWN1N4O"),
        ])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let products: Vec<Value> = res.json().await.unwrap();
    let ids: Vec<&str> = products.iter().map(|p| p["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["L9ECAV7KIM", "2ZYFJ3GM2N", "0PUK6V6EV0", "LS4PSXUNUM"]);
}

#[tokio::test]
async fn shipping_defaults_to_usd_and_rejects_bad_json() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let items = r#"[{"productId":"L9ECAV7KIM","quantity":1}]"#;
    let address = r#"{"streetAddress":"1 Main St","city":"Springfield","country":"US","zipCode":"12345"}"#;

    let defaulted: Value = client
        .get(srv.url("/api/shipping"))
        .query(&[("itemList", items), ("address", address)])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let explicit: Value = client
        .get(srv.url("/api/shipping"))
        .query(&[("itemList", items), ("address", address), ("currencyCode", "USD")])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(defaulted, explicit);
    assert_eq!(defaulted["currencyCode"], "USD");
    assert_eq!(defaulted["units"], 8);
    assert_eq!(defaulted["nanos"], 990_000_000);

    let eur: Value = client
        .get(srv.url("/api/shipping"))
        .query(&[("itemList", items), ("address", address), ("currencyCode", "EUR")])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(eur["currencyCode"], "EUR");

    let res = client
        .get(srv.url("/api/shipping"))
        .query(&[("itemList", "[{not json"), ("address", address)])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_query");
}

#[tokio::test]
async fn currency_list_includes_usd_and_eur() {
    let srv = TestServer::spawn().await;
    let codes: Vec<String> = reqwest::get(srv.url("/api/currency"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(codes.iter().any(|c| c == "USD"));
    assert!(codes.iter().any(|c| c == "EUR"));
}

#[tokio::test]
async fn ads_accept_comma_joined_and_repeated_keys() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let ads: Vec<Value> = client
        .get(srv.url("/api/data"))
        .query(&[("contextKeys", "books,travel")])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let repeated: Vec<Value> = client
        .get(srv.url("/api/data"))
        .query(&[("contextKeys", "books"), ("contextKeys", "travel")])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(ads, repeated);
    assert_eq!(ads.len(), 2);
    assert!(ads.iter().all(|ad| ad["redirectUrl"].as_str().unwrap().starts_with("/product/")));

    let fallback: Vec<Value> = reqwest::get(srv.url("/api/data")).await.unwrap().json().await.unwrap();
    assert_eq!(fallback.len(), 2);
}
