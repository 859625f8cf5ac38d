use bookdepot_catalog::InventoryStore;
use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, seeded catalog, bound to an ephemeral port.
        let app = bookdepot_api::app::build_app(InventoryStore::bootstrap());
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

    async fn post(&self, path: &str, body: serde_json::Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}{}", self.base_url, path))
            .json(&body)
            .send()
            .await
            .unwrap()
    }

    async fn post_ok(&self, path: &str, body: serde_json::Value) -> serde_json::Value {
        let res = self.post(path, body).await;
        assert_eq!(res.status(), StatusCode::OK);
        res.json().await.unwrap()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn health_endpoint_answers_ok() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn search_returns_the_full_bootstrap_catalog_in_id_order() {
    let srv = TestServer::spawn().await;

    let body = srv.post_ok("/search-books", json!({})).await;
    assert_eq!(body["total"], 6);
    assert!(body.get("nextToken").is_none());

    let ids: Vec<u64> = body["books"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(body["books"][0]["title"], "Fundamentals of Wavelets");
}

#[tokio::test]
async fn search_paginates_and_filters_by_substring() {
    let srv = TestServer::spawn().await;

    let first = srv
        .post_ok("/search-books", json!({ "pageSize": 4 }))
        .await;
    assert_eq!(first["total"], 6);
    assert_eq!(first["books"].as_array().unwrap().len(), 4);
    assert_eq!(first["nextToken"], 4);

    let second = srv
        .post_ok("/search-books", json!({ "pageSize": 4, "nextToken": 4 }))
        .await;
    assert_eq!(second["books"].as_array().unwrap().len(), 2);
    assert!(second.get("nextToken").is_none());

    let filtered = srv
        .post_ok("/search-books", json!({ "searchString": "Steinbeck" }))
        .await;
    assert_eq!(filtered["total"], 2);
    let ids: Vec<u64> = filtered["books"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![4, 6]);
}

#[tokio::test]
async fn fetch_books_preserves_order_and_ignores_missing_ids() {
    let srv = TestServer::spawn().await;

    let body = srv.post_ok("/fetch-books", json!({ "bookIds": [1, 2] })).await;
    let ids: Vec<u64> = body["books"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2]);

    let body = srv.post_ok("/fetch-books", json!({ "bookIds": [999] })).await;
    assert_eq!(body["books"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn add_book_assigns_next_id_and_rejects_duplicate_isbn() {
    let srv = TestServer::spawn().await;

    let body = srv
        .post_ok(
            "/add-book",
            json!({
                "title": "New Arrival",
                "author": "Writer, Some",
                "isbn": "111222333",
                "category": "fiction",
            }),
        )
        .await;
    assert_eq!(body["status"], "accepted");
    assert_eq!(body["book"]["id"], 7);
    assert_eq!(body["book"]["inventory"], 0);

    // Bootstrap book 1 already owns this isbn; still a 200, error record.
    let body = srv
        .post_ok(
            "/add-book",
            json!({
                "title": "Different Title",
                "author": "Different Author",
                "isbn": "3726362789",
                "category": "nonfiction",
            }),
        )
        .await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "ISBN already exists");
}

#[tokio::test]
async fn update_book_details_honors_notes_key_presence() {
    let srv = TestServer::spawn().await;

    // Omitted notes key: prior value retained.
    let body = srv
        .post_ok(
            "/update-book-details",
            json!({ "id": 2, "title": "Age of Wrath" }),
        )
        .await;
    assert_eq!(body["status"], "accepted");
    assert_eq!(body["book"]["title"], "Age of Wrath");
    assert_eq!(
        body["book"]["notes"],
        "Backordered until the end of the year"
    );

    // Explicit null: cleared.
    let body = srv
        .post_ok("/update-book-details", json!({ "id": 2, "notes": null }))
        .await;
    assert_eq!(body["status"], "accepted");
    assert!(body["book"]["notes"].is_null());

    // Unknown id: domain error record.
    let body = srv
        .post_ok("/update-book-details", json!({ "id": 42 }))
        .await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Item 42 does not exist");
}

#[tokio::test]
async fn update_inventory_requires_increment_or_set() {
    let srv = TestServer::spawn().await;

    let body = srv
        .post_ok("/update-inventory", json!({ "bookId": 1 }))
        .await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "must specify one of increment or set in request");

    let body = srv
        .post_ok("/update-inventory", json!({ "bookId": 1, "increment": 5 }))
        .await;
    assert_eq!(body["status"], "accepted");
    assert_eq!(body["bookId"], 1);
    assert_eq!(body["inventory"], 14);

    let body = srv
        .post_ok("/update-inventory", json!({ "bookId": 1, "set": 2 }))
        .await;
    assert_eq!(body["inventory"], 2);
}

#[tokio::test]
async fn fulfillment_batch_is_sequential_and_atomic_per_order() {
    let srv = TestServer::spawn().await;

    // Order 1 overdraws book 3 (stock 3) via an immediate line bundled
    // with a valid line; order 2 reserves past zero on book 2 (stock 0);
    // order 3 shows order 1 applied nothing.
    let body = srv
        .post_ok(
            "/fulfill-orders",
            json!({
                "orders": [
                    { "orderId": 1, "items": [
                        { "bookId": 1, "type": "immediate", "quantity": 1 },
                        { "bookId": 3, "type": "immediate", "quantity": 4 },
                    ]},
                    { "orderId": 2, "items": [
                        { "bookId": 2, "type": "reserve", "quantity": 5 },
                    ]},
                    { "orderId": 3, "items": [
                        { "bookId": 3, "type": "immediate", "quantity": 3 },
                    ]},
                ]
            }),
        )
        .await;

    let orders = body["orders"].as_array().unwrap();
    assert_eq!(orders.len(), 3);

    assert_eq!(orders[0]["orderId"], 1);
    assert_eq!(orders[0]["status"], "error");
    assert_eq!(orders[0]["message"], "insufficient stock to fulfill order");

    assert_eq!(orders[1]["status"], "accepted");
    assert!(orders[1].get("message").is_none());

    // Order 1 applied nothing, so order 3 still found all 3 in stock.
    assert_eq!(orders[2]["status"], "accepted");

    let body = srv
        .post_ok("/fetch-books", json!({ "bookIds": [1, 2, 3] }))
        .await;
    let books = body["books"].as_array().unwrap();
    assert_eq!(books[0]["inventory"], 9);
    assert_eq!(books[1]["inventory"], -5);
    assert_eq!(books[2]["inventory"], 0);
}

#[tokio::test]
async fn fulfillment_reports_unknown_items_per_order() {
    let srv = TestServer::spawn().await;

    let body = srv
        .post_ok(
            "/fulfill-orders",
            json!({
                "orders": [
                    { "orderId": 10, "items": [
                        { "bookId": 999, "type": "immediate", "quantity": 1 },
                    ]},
                ]
            }),
        )
        .await;
    assert_eq!(body["orders"][0]["status"], "error");
    assert_eq!(body["orders"][0]["message"], "item 999 does not exist");
}

#[tokio::test]
async fn unrecognized_order_type_is_a_transport_rejection() {
    let srv = TestServer::spawn().await;

    let res = srv
        .post(
            "/fulfill-orders",
            json!({
                "orders": [
                    { "orderId": 1, "items": [
                        { "bookId": 1, "type": "layaway", "quantity": 1 },
                    ]},
                ]
            }),
        )
        .await;
    // Not part of the business contract: structural decode failure, not a
    // domain error record.
    assert!(res.status().is_client_error());
}
