//! Registration, login and account endpoints

#[macro_use]
mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;

use common::*;

#[tokio::test]
async fn test_register_returns_token_and_user_without_password() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/api/auth/register",
            None,
            json!({
                "name": "Alice",
                "email": "alice@example.com",
                "password": "secret1",
                "phone": "555-0100",
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Registration successful");
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["user"]["email"], "alice@example.com");
    assert_eq!(body["user"]["role"], "buyer");
    assert_eq!(body["user"]["is_active"], true);
    assert_no_password!(body["user"]);
}

#[tokio::test]
async fn test_login_returns_same_user() {
    let app = TestApp::new().await;
    let seller = register_seller(&app, "seller@example.com").await;

    let (status, body) = app
        .post(
            "/api/auth/login",
            None,
            json!({ "email": seller.email, "password": seller.password }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["user"]["id"], seller.id.to_string());
    assert_eq!(body["user"]["role"], "seller");
    assert_no_password!(body["user"]);
}

#[tokio::test]
async fn test_wrong_password_and_unknown_email_are_indistinguishable() {
    let app = TestApp::new().await;
    register_buyer(&app, "bob@example.com").await;

    let wrong_password = app
        .post(
            "/api/auth/login",
            None,
            json!({ "email": "bob@example.com", "password": "not-it" }),
        )
        .await;
    let unknown_email = app
        .post(
            "/api/auth/login",
            None,
            json!({ "email": "nobody@example.com", "password": "secret1" }),
        )
        .await;

    assert_eq!(wrong_password, unknown_email);
    assert_error!(wrong_password, StatusCode::UNAUTHORIZED, "Invalid email or password");
}

#[tokio::test]
async fn test_duplicate_email_is_rejected_and_original_kept() {
    let app = TestApp::new().await;
    let original = register_buyer(&app, "dup@example.com").await;

    assert_error!(
        app.post(
            "/api/auth/register",
            None,
            json!({ "name": "Impostor", "email": "dup@example.com", "password": "other-pass" }),
        )
        .await,
        StatusCode::CONFLICT,
        "Email already registered"
    );

    assert_eq!(app.count("users").await, 1);

    let (status, body) = app
        .post(
            "/api/auth/login",
            None,
            json!({ "email": original.email, "password": original.password }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["name"], "Buyer");
}

#[tokio::test]
async fn test_email_is_matched_without_regard_to_case() {
    let app = TestApp::new().await;
    let original = register_buyer(&app, "a@x.com").await;

    assert_error!(
        app.post(
            "/api/auth/register",
            None,
            json!({ "name": "Shouty", "email": "A@X.com", "password": "secret1" }),
        )
        .await,
        StatusCode::CONFLICT,
        "Email already registered"
    );
    assert_eq!(app.count("users").await, 1);

    let (status, body) = app
        .post(
            "/api/auth/login",
            None,
            json!({ "email": "A@x.com", "password": original.password }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["id"], original.id.to_string());
    assert_eq!(body["user"]["email"], "a@x.com");
}

#[tokio::test]
async fn test_register_validation() {
    let app = TestApp::new().await;

    assert_error!(
        app.post("/api/auth/register", None, json!({ "email": "x@example.com", "password": "secret1" }))
            .await,
        StatusCode::BAD_REQUEST,
        "Name, email, and password are required"
    );

    assert_error!(
        app.post(
            "/api/auth/register",
            None,
            json!({ "name": "X", "email": "x@example.com", "password": "12345" }),
        )
        .await,
        StatusCode::BAD_REQUEST,
        "Password must be at least 6 characters"
    );

    assert_error!(
        app.post(
            "/api/auth/register",
            None,
            json!({ "name": "X", "email": "x@example.com", "password": "secret1", "role": "owner" }),
        )
        .await,
        StatusCode::BAD_REQUEST,
        "Invalid role"
    );

    assert_eq!(app.count("users").await, 0);
}

#[tokio::test]
async fn test_login_requires_both_fields() {
    let app = TestApp::new().await;

    assert_error!(
        app.post("/api/auth/login", None, json!({ "email": "a@example.com" })).await,
        StatusCode::BAD_REQUEST,
        "Email and password are required"
    );
}

#[tokio::test]
async fn test_me_accepts_bearer_and_cookie() {
    let app = TestApp::new().await;
    let user = register_buyer(&app, "me@example.com").await;

    let (status, body) = app.get("/api/auth/me", Some(&user.token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "me@example.com");
    assert_no_password!(body);

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/auth/me")
        .header(header::COOKIE, format!("theme=dark; token={}", user.token))
        .body(Body::empty())
        .unwrap();
    let (status, body) = app.send(request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], user.id.to_string());
}

#[tokio::test]
async fn test_me_without_or_with_bad_token() {
    let app = TestApp::new().await;

    assert_error!(app.get("/api/auth/me", None).await, StatusCode::UNAUTHORIZED, "No token provided");
    assert_error!(
        app.get("/api/auth/me", Some("not.a.token")).await,
        StatusCode::UNAUTHORIZED,
        "Invalid token"
    );
}

#[tokio::test]
async fn test_logout_acknowledges() {
    let app = TestApp::new().await;
    let user = register_buyer(&app, "out@example.com").await;

    let (status, body) = app.post("/api/auth/logout", Some(&user.token), json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Logout successful" }));

    assert_error!(app.post("/api/auth/logout", None, json!({})).await, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_profile_update_is_partial() {
    let app = TestApp::new().await;
    let user = register(&app, "Carol", "carol@example.com", "agent").await;

    let (status, body) = app
        .put("/api/auth/profile", Some(&user.token), json!({ "phone": "555-0199" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Profile updated successfully");
    assert_eq!(body["user"]["name"], "Carol");
    assert_eq!(body["user"]["phone"], "555-0199");

    let (_, body) = app
        .put("/api/auth/profile", Some(&user.token), json!({ "name": "Caroline", "phone": "" }))
        .await;
    assert_eq!(body["user"]["name"], "Caroline");
    assert_eq!(body["user"]["phone"], "555-0199");
}

#[tokio::test]
async fn test_change_password_flow() {
    let app = TestApp::new().await;
    let user = register_buyer(&app, "pw@example.com").await;

    assert_error!(
        app.put(
            "/api/auth/change-password",
            Some(&user.token),
            json!({ "currentPassword": "wrong-one", "newPassword": "brand-new" }),
        )
        .await,
        StatusCode::UNAUTHORIZED,
        "Current password is incorrect"
    );

    assert_error!(
        app.put(
            "/api/auth/change-password",
            Some(&user.token),
            json!({ "currentPassword": user.password, "newPassword": "short" }),
        )
        .await,
        StatusCode::BAD_REQUEST,
        "New password must be at least 6 characters"
    );

    assert_error!(
        app.put("/api/auth/change-password", Some(&user.token), json!({ "newPassword": "brand-new" }))
            .await,
        StatusCode::BAD_REQUEST,
        "Current and new passwords are required"
    );

    let (status, body) = app
        .put(
            "/api/auth/change-password",
            Some(&user.token),
            json!({ "currentPassword": user.password, "newPassword": "brand-new" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Password changed successfully");

    let (status, _) = app
        .post("/api/auth/login", None, json!({ "email": user.email, "password": "brand-new" }))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .post("/api/auth/login", None, json!({ "email": user.email, "password": user.password }))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_api_index_and_unknown_endpoint() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Property Listing API");
    assert!(body["endpoints"].is_object());

    assert_error!(
        app.get("/api/no/such/thing", None).await,
        StatusCode::NOT_FOUND,
        "Endpoint not found"
    );
}
