//! Database operations for inquiries

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use super::{ListingInquiry, UserInquiry};

/// Inquiries on a listing, newest first
pub async fn list_for_listing(pool: &SqlitePool, listing_id: Uuid) -> Result<Vec<ListingInquiry>, sqlx::Error> {
    sqlx::query_as::<_, ListingInquiry>(
        r#"
        SELECT i.id, i.message, i.created_at, u.name AS user_name, u.email AS user_email
        FROM inquiries i
        INNER JOIN users u ON i.user_id = u.id
        WHERE i.listing_id = ?
        ORDER BY i.created_at DESC, i.rowid DESC
        "#,
    )
    .bind(listing_id)
    .fetch_all(pool)
    .await
}

/// Inquiries sent by a user, newest first
pub async fn list_for_user(pool: &SqlitePool, user_id: Uuid) -> Result<Vec<UserInquiry>, sqlx::Error> {
    sqlx::query_as::<_, UserInquiry>(
        r#"
        SELECT
            i.id,
            i.message,
            i.created_at,
            l.id AS listing_id,
            p.type AS property_type,
            loc.city,
            l.price
        FROM inquiries i
        INNER JOIN listings l ON i.listing_id = l.id
        INNER JOIN properties p ON l.property_id = p.id
        INNER JOIN locations loc ON l.location_id = loc.id
        WHERE i.user_id = ?
        ORDER BY i.created_at DESC, i.rowid DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Record an inquiry and return its id
pub async fn create(
    pool: &SqlitePool,
    user_id: Uuid,
    listing_id: Uuid,
    message: &str,
) -> Result<Uuid, sqlx::Error> {
    let id = Uuid::new_v4();

    sqlx::query(
        r#"
        INSERT INTO inquiries (id, user_id, listing_id, message, created_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(listing_id)
    .bind(message)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(id)
}
