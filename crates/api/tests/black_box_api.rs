use std::sync::Arc;

use brecho_api::app::services::AppServices;
use brecho_catalog::CatalogCartStore;
use reqwest::StatusCode;
use serde_json::{json, Value};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, seeded store, ephemeral port.
        let services = AppServices::new(Arc::new(CatalogCartStore::seeded()));
        let app = brecho_api::app::build_app(services);
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

async fn get_json(client: &reqwest::Client, url: String) -> Value {
    let res = client.get(url).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    res.json().await.unwrap()
}

async fn product_id_by_name(client: &reqwest::Client, srv: &TestServer, name: &str) -> String {
    let products = get_json(client, srv.url("/products")).await;
    products
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["name"] == name)
        .unwrap_or_else(|| panic!("seed product {name} missing"))["id"]
        .as_str()
        .unwrap()
        .to_string()
}

async fn add_to_cart(
    client: &reqwest::Client,
    srv: &TestServer,
    session: &str,
    product_id: &str,
    quantity: u32,
) -> Value {
    let res = client
        .post(srv.url("/cart"))
        .header("x-session-id", session)
        .json(&json!({ "productId": product_id, "quantity": quantity }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    res.json().await.unwrap()
}

async fn cart(client: &reqwest::Client, srv: &TestServer, session: &str) -> Vec<Value> {
    let res = client
        .get(srv.url("/cart"))
        .header("x-session-id", session)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    res.json().await.unwrap()
}

#[tokio::test]
async fn health_is_public() {
    let srv = TestServer::spawn().await;
    let body = get_json(&reqwest::Client::new(), srv.url("/health")).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn products_can_be_filtered_by_category_and_search() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let all = get_json(&client, srv.url("/products")).await;
    assert_eq!(all.as_array().unwrap().len(), 6);
    assert_eq!(all[0]["price"], "45.00");
    assert_eq!(all[0]["inStock"], true);

    let jaquetas = get_json(&client, srv.url("/products?category=JAQUETAS")).await;
    let names: Vec<_> = jaquetas
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Jaqueta Jeans Vintage", "Jaqueta de Couro Vintage"]);

    let searched = get_json(&client, srv.url("/products?search=jaqueta")).await;
    assert_eq!(searched, jaquetas);

    // Both filters apply together.
    let both = get_json(&client, srv.url("/products?category=jaquetas&search=couro")).await;
    assert_eq!(both.as_array().unwrap().len(), 1);
    assert_eq!(both[0]["name"], "Jaqueta de Couro Vintage");
}

#[tokio::test]
async fn categories_are_listed_once_each() {
    let srv = TestServer::spawn().await;
    let categories = get_json(&reqwest::Client::new(), srv.url("/products/categories")).await;
    assert_eq!(categories, json!(["Jaquetas", "Vestidos", "Camisetas", "Calças"]));
}

#[tokio::test]
async fn product_lookup_handles_missing_and_malformed_ids() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let id = product_id_by_name(&client, &srv, "Vestido Floral Retrô").await;
    let product = get_json(&client, srv.url(&format!("/products/{id}"))).await;
    assert_eq!(product["size"], "P");

    let res = client
        .get(srv.url("/products/0190a8a0-0000-7000-8000-000000000000"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client.get(srv.url("/products/nope")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_id");
}

#[tokio::test]
async fn create_product_checks_presence_and_returns_record() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/products"))
        .json(&json!({
            "name": "Saia Plissada",
            "description": "Saia midi plissada",
            "price": "29.9",
            "condition": "Boa",
            "size": "M",
            "category": "Saias",
            "imageUrl": "https://example.com/saia.jpg"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Value = res.json().await.unwrap();
    assert_eq!(created["price"], "29.90");
    assert!(created["id"].as_str().is_some());

    let listed = get_json(&client, srv.url("/products?category=saias")).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let res = client
        .post(srv.url("/products"))
        .json(&json!({
            "name": "Saia",
            "description": "",
            "price": 29.9,
            "condition": "Boa",
            "size": "M",
            "category": "Saias",
            "imageUrl": ""
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Missing field.
    let res = client
        .post(srv.url("/products"))
        .json(&json!({
            "name": "Saia",
            "description": "",
            "price": "29.90",
            "condition": "Boa",
            "category": "Saias",
            "imageUrl": ""
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");

    // Present but empty strings are accepted.
    let res = client
        .post(srv.url("/products"))
        .json(&json!({
            "name": "Peça sem nome",
            "description": "",
            "price": "5.00",
            "condition": "",
            "size": "",
            "category": "Acessórios",
            "imageUrl": ""
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn cart_routes_require_session_header() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client.get(srv.url("/cart")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "missing_session");

    let res = client.delete(srv.url("/cart")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn adding_twice_merges_and_joins_product() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let id = product_id_by_name(&client, &srv, "Camiseta Band Vintage").await;

    let first = add_to_cart(&client, &srv, "s1", &id, 1).await;
    let second = add_to_cart(&client, &srv, "s1", &id, 2).await;
    assert_eq!(first["id"], second["id"]);
    assert_eq!(second["quantity"], 3);
    assert_eq!(second["sessionId"], "s1");

    let lines = cart(&client, &srv, "s1").await;
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["quantity"], 3);
    assert_eq!(lines[0]["product"]["name"], "Camiseta Band Vintage");

    let res = client
        .get(srv.url("/cart/summary"))
        .header("x-session-id", "s1")
        .send()
        .await
        .unwrap();
    let summary: Value = res.json().await.unwrap();
    assert_eq!(summary, json!({ "itemCount": 3, "total": "75.00" }));
}

#[tokio::test]
async fn add_to_cart_rejects_unknown_product_and_zero_quantity() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/cart"))
        .header("x-session-id", "s1")
        .json(&json!({ "productId": "0190a8a0-0000-7000-8000-000000000000" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let id = product_id_by_name(&client, &srv, "Blusa Boho Vintage").await;
    let res = client
        .post(srv.url("/cart"))
        .header("x-session-id", "s1")
        .json(&json!({ "productId": id, "quantity": 0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    assert!(cart(&client, &srv, "s1").await.is_empty());
}

#[tokio::test]
async fn patch_sets_quantity_and_zero_removes() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let id = product_id_by_name(&client, &srv, "Calça Jeans High Waist").await;
    let line = add_to_cart(&client, &srv, "s1", &id, 1).await;
    let line_id = line["id"].as_str().unwrap();

    let res = client
        .patch(srv.url(&format!("/cart/{line_id}")))
        .json(&json!({ "quantity": 4 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let updated: Value = res.json().await.unwrap();
    assert_eq!(updated["quantity"], 4);

    let res = client
        .patch(srv.url(&format!("/cart/{line_id}")))
        .json(&json!({ "quantity": 0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.expect("removal answers with JSON");
    assert_eq!(body["removed"], true);
    assert!(cart(&client, &srv, "s1").await.is_empty());

    let res = client
        .patch(srv.url(&format!("/cart/{line_id}")))
        .json(&json!({ "quantity": 2 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "not_found");

    let res = client
        .patch(srv.url(&format!("/cart/{line_id}")))
        .json(&json!({ "quantity": 0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn patch_with_negative_quantity_removes_line() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let id = product_id_by_name(&client, &srv, "Camiseta Band Vintage").await;
    let line = add_to_cart(&client, &srv, "s1", &id, 2).await;
    let line_id = line["id"].as_str().unwrap();

    let res = client
        .patch(srv.url(&format!("/cart/{line_id}")))
        .json(&json!({ "quantity": -3 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.expect("removal answers with JSON");
    assert_eq!(body["removed"], true);
    assert!(cart(&client, &srv, "s1").await.is_empty());
}

#[tokio::test]
async fn delete_item_reports_missing_lines() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let id = product_id_by_name(&client, &srv, "Vestido Floral Retrô").await;
    let line = add_to_cart(&client, &srv, "s1", &id, 1).await;
    let line_id = line["id"].as_str().unwrap();

    let res = client
        .delete(srv.url(&format!("/cart/{line_id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.expect("removal answers with JSON");
    assert_eq!(body["removed"], true);

    let res = client
        .delete(srv.url(&format!("/cart/{line_id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "cart item not found");
}

#[tokio::test]
async fn clearing_a_cart_leaves_other_sessions_alone() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let jaqueta = product_id_by_name(&client, &srv, "Jaqueta Jeans Vintage").await;
    let couro = product_id_by_name(&client, &srv, "Jaqueta de Couro Vintage").await;

    add_to_cart(&client, &srv, "s1", &jaqueta, 1).await;
    add_to_cart(&client, &srv, "s1", &couro, 1).await;
    add_to_cart(&client, &srv, "s2", &jaqueta, 1).await;

    let lines = cart(&client, &srv, "s1").await;
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["product"]["price"], "45.00");
    assert_eq!(lines[1]["product"]["price"], "89.00");

    let res = client
        .delete(srv.url("/cart"))
        .header("x-session-id", "s1")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["cleared"], true);

    assert!(cart(&client, &srv, "s1").await.is_empty());
    assert_eq!(cart(&client, &srv, "s2").await.len(), 1);
}
