//! Inquiry endpoints

#[macro_use]
mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

use common::*;

#[tokio::test]
async fn test_inquiry_on_active_listing() {
    let app = TestApp::new().await;
    let seller = register_seller(&app, "s@example.com").await;
    let buyer = register(&app, "Dana", "dana@example.com", "buyer").await;
    let listing = create_listing(&app, &seller, "Lisbon", "flat", 1000.0, "active").await;

    let (status, body) = app
        .post(
            "/api/inquiries",
            Some(&buyer.token),
            json!({ "listing_id": listing, "message": "Is it still available?" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Inquiry created successfully");
    let inquiry_id = body["inquiry_id"].as_str().unwrap().to_string();

    let (_, for_listing) = app
        .get(&format!("/api/inquiries/listing/{}", listing), None)
        .await;
    assert_eq!(for_listing[0]["id"], inquiry_id);
    assert_eq!(for_listing[0]["message"], "Is it still available?");
    assert_eq!(for_listing[0]["user_name"], "Dana");
    assert_eq!(for_listing[0]["user_email"], "dana@example.com");

    let (_, for_user) = app.get(&format!("/api/inquiries/user/{}", buyer.id), None).await;
    assert_eq!(for_user[0]["listing_id"], listing.to_string());
    assert_eq!(for_user[0]["city"], "Lisbon");
    assert_eq!(for_user[0]["property_type"], "flat");

    let (_, detail) = app.get(&format!("/api/listings/{}", listing), None).await;
    assert_eq!(detail["inquiry_count"], 1);
}

#[tokio::test]
async fn test_inquiry_rejections() {
    let app = TestApp::new().await;
    let seller = register_seller(&app, "s@example.com").await;
    let buyer = register_buyer(&app, "b@example.com").await;
    let sold = create_listing(&app, &seller, "Lisbon", "flat", 1000.0, "sold").await;
    let active = create_listing(&app, &seller, "Lisbon", "flat", 2000.0, "active").await;

    assert_error!(
        app.post("/api/inquiries", None, json!({ "listing_id": active, "message": "hi" }))
            .await,
        StatusCode::UNAUTHORIZED
    );
    assert_error!(
        app.post("/api/inquiries", Some(&buyer.token), json!({ "listing_id": active }))
            .await,
        StatusCode::BAD_REQUEST,
        "Missing required fields"
    );
    assert_error!(
        app.post(
            "/api/inquiries",
            Some(&buyer.token),
            json!({ "listing_id": active, "message": "   " }),
        )
        .await,
        StatusCode::BAD_REQUEST,
        "Missing required fields"
    );
    assert_error!(
        app.post(
            "/api/inquiries",
            Some(&buyer.token),
            json!({ "listing_id": Uuid::new_v4(), "message": "hi" }),
        )
        .await,
        StatusCode::NOT_FOUND,
        "Listing not found"
    );
    assert_error!(
        app.post("/api/inquiries", Some(&buyer.token), json!({ "listing_id": sold, "message": "hi" }))
            .await,
        StatusCode::BAD_REQUEST,
        "Listing is not active"
    );

    assert_eq!(app.count("inquiries").await, 0);
}

#[tokio::test]
async fn test_seller_may_inquire_on_own_listing() {
    let app = TestApp::new().await;
    let seller = register_seller(&app, "s@example.com").await;
    let listing = create_listing(&app, &seller, "Lisbon", "flat", 1000.0, "active").await;

    let (status, _) = app
        .post(
            "/api/inquiries",
            Some(&seller.token),
            json!({ "listing_id": listing, "message": "note to self" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_inquiry_lists_are_empty_for_unknown_ids() {
    let app = TestApp::new().await;

    let (status, body) = app
        .get(&format!("/api/inquiries/listing/{}", Uuid::new_v4()), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = app
        .get(&format!("/api/inquiries/user/{}", Uuid::new_v4()), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}
