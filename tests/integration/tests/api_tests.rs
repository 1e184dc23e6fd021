//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance (migrations are applied on startup)
//! - Environment variable DATABASE_URL (JWT_SECRET is optional here)
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

async fn create_vendor(server: &TestServer, admin: &str) -> VendorResponse {
    let response = server
        .post_auth("/api/vendors", admin, &VendorRequest::unique())
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn create_item(server: &TestServer, admin: &str, vendor_id: i64) -> ItemResponse {
    let response = server
        .post_auth("/api/items", admin, &ItemRequest::counted(vendor_id, 20))
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn register(server: &TestServer, status: &str) -> UserResponse {
    let response = server
        .post("/api/users", &RegisterRequest::unique(status))
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_root_and_health() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "API is up and running");

    let response = server.get("/api/health").await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["database"], "healthy");
}

// ============================================================================
// Transaction Tests
// ============================================================================

#[tokio::test]
async fn test_record_transaction_flow() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.admin_token().unwrap();

    let user = register(&server, "Graduate").await;
    let vendor = create_vendor(&server, &admin).await;
    let item = create_item(&server, &admin, vendor.vendor_id).await;

    let before: StudentCounts = assert_json(
        server
            .get_auth("/api/transactions/unique-students", &admin)
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();

    let take = TransactionRequest {
        user_id: user.user_id.clone(),
        product_id: item.product_id,
        quantity_taken: 2,
    };
    let created: TransactionCreatedResponse = assert_json(
        server.post("/api/transactions", &take).await.unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();
    assert_eq!(created.message, "Transaction created successfully");
    assert!(created.transaction_id > 0);

    // A second take by the same user
    server.post("/api/transactions", &take).await.unwrap();

    let history: Vec<TransactionResponse> = assert_json(
        server
            .get(&format!("/api/transactions/user/{}", user.user_id))
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].user_status.as_deref(), Some("graduate"));
    assert_eq!(history[0].product_name, item.product_name);
    assert_eq!(history[0].username.as_deref(), Some("Jane Doe"));

    let ranked: Vec<MostTakenItem> = assert_json(
        server
            .get_auth("/api/transactions/most-taken", &admin)
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(ranked.iter().all(|r| (1..=10).contains(&r.ranking)));
    assert!(ranked.windows(2).all(|w| w[0].ranking <= w[1].ranking));

    let after: StudentCounts = assert_json(
        server
            .get_auth("/api/transactions/unique-students", &admin)
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(after.graduate_count, before.graduate_count + 1);
}

#[tokio::test]
async fn test_transaction_for_unknown_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.admin_token().unwrap();
    let vendor = create_vendor(&server, &admin).await;
    let item = create_item(&server, &admin, vendor.vendor_id).await;

    let take = TransactionRequest {
        user_id: "ZZ99999".to_string(),
        product_id: item.product_id,
        quantity_taken: 1,
    };
    let body: ErrorBody = assert_json(
        server.post("/api/transactions", &take).await.unwrap(),
        StatusCode::NOT_FOUND,
    )
    .await
    .unwrap();
    assert_eq!(body.code, "UNKNOWN_USER");
    assert_eq!(body.error, "User not found");
}

#[tokio::test]
async fn test_transaction_with_zero_quantity() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let take = serde_json::json!({"user_id": "JD12345", "product_id": 1, "quantity_taken": 0});

    let body: ErrorBody = assert_json(
        server.post("/api/transactions", &take).await.unwrap(),
        StatusCode::BAD_REQUEST,
    )
    .await
    .unwrap();
    assert_eq!(body.code, "MISSING_FIELDS");
    assert!(body.message.contains("quantity_taken"));
}

#[tokio::test]
async fn test_reports_require_admin() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = server.user_token().unwrap();

    let response = server.get("/api/transactions/most-taken").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .get_auth("/api/transactions/most-taken", &user)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Vendor Tests
// ============================================================================

#[tokio::test]
async fn test_vendor_delete_guard() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.admin_token().unwrap();
    let vendor = create_vendor(&server, &admin).await;
    let first = create_item(&server, &admin, vendor.vendor_id).await;
    let second = create_item(&server, &admin, vendor.vendor_id).await;
    let path = format!("/api/vendors/{}", vendor.vendor_id);

    let body: ErrorBody = assert_json(
        server.delete_auth(&path, &admin).await.unwrap(),
        StatusCode::CONFLICT,
    )
    .await
    .unwrap();
    assert_eq!(body.code, "VENDOR_HAS_ITEMS");
    assert!(body.message.contains("This vendor has 2 items"));

    let items: Vec<ItemResponse> = assert_json(
        server.get(&format!("{path}/items")).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(items.len(), 2);

    for item in [first, second] {
        let response = server
            .delete_auth(&format!("/api/items/{}", item.product_id), &admin)
            .await
            .unwrap();
        assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
    }

    let deleted: serde_json::Value = assert_json(
        server.delete_auth(&path, &admin).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(deleted["deleted"], true);

    let response = server.delete_auth(&path, &admin).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_vendor_update() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.admin_token().unwrap();
    let vendor = create_vendor(&server, &admin).await;

    let mut changes = VendorRequest::unique();
    changes.contact_person = None;
    let updated: VendorResponse = assert_json(
        server
            .put_auth(&format!("/api/vendors/{}", vendor.vendor_id), &admin, &changes)
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();

    assert_eq!(updated.vendor_id, vendor.vendor_id);
    assert_eq!(updated.vendor_name, changes.vendor_name);
    assert!(updated.contact_person.is_none());
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_register_generates_id() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = register(&server, "UNDERGRADUATE").await;

    assert!(user.user_id.starts_with("JD"));
    assert!(user.user_id[2..].chars().all(|c| c.is_ascii_digit()));
    assert_eq!(user.status.as_deref(), Some("undergraduate"));
    assert_eq!(user.role, "user");

    let fetched: UserResponse = assert_json(
        server
            .get(&format!("/api/users/{}", user.user_id))
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(fetched.email, user.email);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique("graduate");

    let response = server.post("/api/users", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.post("/api/users", &request).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(body.code, "EMAIL_ALREADY_EXISTS");
}

// ============================================================================
// Item Tests
// ============================================================================

#[tokio::test]
async fn test_low_stock_listing() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.admin_token().unwrap();
    let vendor = create_vendor(&server, &admin).await;

    let scarce: ItemResponse = assert_json(
        server
            .post_auth("/api/items", &admin, &ItemRequest::counted(vendor.vendor_id, 1))
            .await
            .unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();

    let low: Vec<ItemResponse> = assert_json(
        server
            .get_auth("/api/items/low-stock?quantity=1&weight=", &admin)
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(low.iter().any(|i| i.product_id == scarce.product_id));
    assert!(low.iter().all(|i| i.quantity.is_some_and(|q| q <= 1)));

    let response = server
        .get_auth("/api/items/low-stock", &admin)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}
