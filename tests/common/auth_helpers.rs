//! Account and catalogue helpers
//!
//! Users are registered through the API (real bcrypt hashing, real tokens).
//! Catalogue rows go through the API too, except `seed_*_direct`, which
//! write straight to the database for property tests that need many rows.

use axum::http::StatusCode;
use serde_json::{json, Value};
use sqlx::SqlitePool;
use uuid::Uuid;

use property_market::backend::auth::users::{create_user, NewUser};
use property_market::backend::catalog::db as catalog_db;
use property_market::backend::listings::db as listings_db;
use property_market::shared::Role;

use super::database::TestApp;

/// Default password for registered test users
pub const TEST_PASSWORD: &str = "secret1";

/// A registered test user
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub token: String,
}

fn parse_id(value: &Value) -> Uuid {
    value
        .as_str()
        .and_then(|s| Uuid::parse_str(s).ok())
        .unwrap_or_else(|| panic!("Expected a UUID, got {}", value))
}

/// Register a user through the API
pub async fn register(app: &TestApp, name: &str, email: &str, role: &str) -> TestUser {
    let (status, body) = app
        .post(
            "/api/auth/register",
            None,
            json!({ "name": name, "email": email, "password": TEST_PASSWORD, "role": role }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {}", body);

    TestUser {
        id: parse_id(&body["user"]["id"]),
        email: email.to_string(),
        password: TEST_PASSWORD.to_string(),
        token: body["token"].as_str().expect("token").to_string(),
    }
}

pub async fn register_buyer(app: &TestApp, email: &str) -> TestUser {
    register(app, "Buyer", email, "buyer").await
}

pub async fn register_seller(app: &TestApp, email: &str) -> TestUser {
    register(app, "Seller", email, "seller").await
}

pub async fn register_admin(app: &TestApp, email: &str) -> TestUser {
    register(app, "Admin", email, "admin").await
}

/// Create a property owned by `owner`
pub async fn create_property(app: &TestApp, owner: &TestUser, property_type: &str) -> Uuid {
    let (status, body) = app
        .post(
            "/api/properties",
            Some(&owner.token),
            json!({ "type": property_type, "description": "A test property" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "create property failed: {}", body);
    parse_id(&body["id"])
}

pub async fn create_location(app: &TestApp, actor: &TestUser, city: &str) -> Uuid {
    let (status, body) = app
        .post(
            "/api/locations",
            Some(&actor.token),
            json!({ "city": city, "area": "Centre", "address": "1 Main Street" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "create location failed: {}", body);
    parse_id(&body["id"])
}

/// Create a property, a location and a listing for `owner`
pub async fn create_listing(
    app: &TestApp,
    owner: &TestUser,
    city: &str,
    property_type: &str,
    price: f64,
    status: &str,
) -> Uuid {
    let property_id = create_property(app, owner, property_type).await;
    let location_id = create_location(app, owner, city).await;

    let (code, body) = app
        .post(
            "/api/listings",
            Some(&owner.token),
            json!({
                "property_id": property_id,
                "location_id": location_id,
                "price": price,
                "status": status,
            }),
        )
        .await;
    assert_eq!(code, StatusCode::CREATED, "create listing failed: {}", body);
    parse_id(&body["id"])
}

/// Insert a seller straight into the database (dummy password hash)
pub async fn seed_seller_direct(pool: &SqlitePool) -> Uuid {
    let new_user = NewUser {
        name: "Seeded Seller".to_string(),
        email: format!("seller_{}@example.com", Uuid::new_v4()),
        phone: None,
        address: None,
        role: Role::Seller,
    };
    create_user(pool, &new_user, "not-a-real-hash")
        .await
        .expect("Failed to seed seller")
        .id
}

/// Insert a listing straight into the database
pub async fn seed_listing_direct(
    pool: &SqlitePool,
    owner_id: Uuid,
    city: &str,
    price: f64,
    status: &str,
) -> Uuid {
    let property = catalog_db::create_property(pool, owner_id, "house", None)
        .await
        .expect("Failed to seed property");
    let location = catalog_db::create_location(pool, city, None, None)
        .await
        .expect("Failed to seed location");
    listings_db::create_listing(pool, property.id, location.id, price, status)
        .await
        .expect("Failed to seed listing")
}
