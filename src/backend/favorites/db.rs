//! Database operations for favorites

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use super::FavoriteListing;

/// Favorites of a user, most recently favorited first
pub async fn list_for_user(pool: &SqlitePool, user_id: Uuid) -> Result<Vec<FavoriteListing>, sqlx::Error> {
    sqlx::query_as::<_, FavoriteListing>(
        r#"
        SELECT
            l.id,
            l.price,
            l.status,
            p.type AS property_type,
            p.description,
            loc.city,
            loc.area,
            (SELECT pi.image_url FROM property_images pi WHERE pi.listing_id = l.id ORDER BY pi.rowid LIMIT 1) AS image_url,
            f.created_at AS favorited_at
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

pub async fn exists(pool: &SqlitePool, user_id: Uuid, listing_id: Uuid) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM favorites WHERE user_id = ? AND listing_id = ?)",
    )
    .bind(user_id)
    .bind(listing_id)
    .fetch_one(pool)
    .await
}

/// Insert the pair; a duplicate surfaces as a unique violation
pub async fn add(pool: &SqlitePool, user_id: Uuid, listing_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO favorites (user_id, listing_id, created_at) VALUES (?, ?, ?)")
        .bind(user_id)
        .bind(listing_id)
        .bind(Utc::now())
        .execute(pool)
        .await?;
    Ok(())
}

/// Remove the pair; returns the number of rows removed (0 or 1)
pub async fn remove(pool: &SqlitePool, user_id: Uuid, listing_id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM favorites WHERE user_id = ? AND listing_id = ?")
        .bind(user_id)
        .bind(listing_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
