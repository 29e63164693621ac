//! Database operations for the user directory

use sqlx::SqlitePool;
use uuid::Uuid;

use super::{DirectoryEntry, FavoriteActivity, InquiryActivity, PropertyActivity};
use crate::shared::Role;

pub async fn list(pool: &SqlitePool) -> Result<Vec<DirectoryEntry>, sqlx::Error> {
    sqlx::query_as::<_, DirectoryEntry>(
        "SELECT id, name, email, role, created_at FROM users ORDER BY created_at DESC, rowid DESC",
    )
    .fetch_all(pool)
    .await
}

pub async fn get(pool: &SqlitePool, id: Uuid) -> Result<Option<DirectoryEntry>, sqlx::Error> {
    sqlx::query_as::<_, DirectoryEntry>(
        "SELECT id, name, email, role, created_at FROM users WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn list_by_role(pool: &SqlitePool, role: Role) -> Result<Vec<DirectoryEntry>, sqlx::Error> {
    sqlx::query_as::<_, DirectoryEntry>(
        "SELECT id, name, email, role, created_at FROM users WHERE role = ? ORDER BY created_at DESC, rowid DESC",
    )
    .bind(role)
    .fetch_all(pool)
    .await
}

pub async fn favorites(pool: &SqlitePool, user_id: Uuid) -> Result<Vec<FavoriteActivity>, sqlx::Error> {
    sqlx::query_as::<_, FavoriteActivity>(
        r#"
        SELECT l.id, p.type, loc.city, l.price, f.created_at
        FROM favorites f
        INNER JOIN listings l ON f.listing_id = l.id
        INNER JOIN properties p ON l.property_id = p.id
        INNER JOIN locations loc ON l.location_id = loc.id
        WHERE f.user_id = ?
        ORDER BY f.created_at DESC, f.rowid DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn inquiries(pool: &SqlitePool, user_id: Uuid) -> Result<Vec<InquiryActivity>, sqlx::Error> {
    sqlx::query_as::<_, InquiryActivity>(
        r#"
        SELECT i.id, i.message, i.created_at, l.id AS listing_id, p.type, loc.city
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

/// Properties owned by the user with how many listings each has
pub async fn properties(pool: &SqlitePool, user_id: Uuid) -> Result<Vec<PropertyActivity>, sqlx::Error> {
    sqlx::query_as::<_, PropertyActivity>(
        r#"
        SELECT p.id, p.type, p.description, COUNT(l.id) AS listing_count
        FROM properties p
        LEFT JOIN listings l ON p.id = l.property_id
        WHERE p.owner_id = ?
        GROUP BY p.id, p.type, p.description
        ORDER BY p.created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}
