//! Database operations for listings
//!
//! A listing's owner is never stored on the listing itself; it is always the
//! owner of the listing's property, resolved by join.

use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use uuid::Uuid;

use super::types::{ListingDetail, ListingImage, ListingSummary, SellerListing};

/// Shared SELECT for listing grids; callers append WHERE / ORDER BY
pub(crate) const SUMMARY_SELECT: &str = r#"
    SELECT
        l.id,
        l.price,
        l.status,
        l.created_at,
        p.type AS property_type,
        p.description,
        loc.city,
        loc.area,
        loc.address,
        u.name AS owner_name,
        (SELECT COUNT(*) FROM property_images pi WHERE pi.listing_id = l.id) AS image_count,
        (SELECT COUNT(*) FROM favorites f WHERE f.listing_id = l.id) AS favorite_count,
        (SELECT pi.image_url FROM property_images pi WHERE pi.listing_id = l.id ORDER BY pi.rowid LIMIT 1) AS image_url
    FROM listings l
    INNER JOIN properties p ON l.property_id = p.id
    INNER JOIN users u ON p.owner_id = u.id
    INNER JOIN locations loc ON l.location_id = loc.id
"#;

/// Newest first, with insertion order breaking timestamp ties
pub(crate) const NEWEST_FIRST: &str = " ORDER BY l.created_at DESC, l.rowid DESC";

/// Every listing, newest first
pub async fn list_all(pool: &SqlitePool) -> Result<Vec<ListingSummary>, sqlx::Error> {
    sqlx::query_as::<_, ListingSummary>(&format!("{SUMMARY_SELECT}{NEWEST_FIRST}"))
        .fetch_all(pool)
        .await
}

/// Active listings, newest first
pub async fn list_active(pool: &SqlitePool) -> Result<Vec<ListingSummary>, sqlx::Error> {
    sqlx::query_as::<_, ListingSummary>(&format!(
        "{SUMMARY_SELECT} WHERE l.status = 'active'{NEWEST_FIRST}"
    ))
    .fetch_all(pool)
    .await
}

/// Active listings in a city, cheapest first
pub async fn list_active_in_city(
    pool: &SqlitePool,
    city: &str,
) -> Result<Vec<ListingSummary>, sqlx::Error> {
    sqlx::query_as::<_, ListingSummary>(&format!(
        "{SUMMARY_SELECT} WHERE loc.city = ? COLLATE NOCASE AND l.status = 'active' ORDER BY l.price ASC, l.rowid ASC"
    ))
    .bind(city)
    .fetch_all(pool)
    .await
}

/// Listing detail with its images
pub async fn get_detail(pool: &SqlitePool, id: Uuid) -> Result<Option<ListingDetail>, sqlx::Error> {
    let detail = sqlx::query_as::<_, ListingDetail>(
        r#"
        SELECT
            l.id,
            l.price,
            l.status,
            l.created_at,
            l.updated_at,
            p.id AS property_id,
            p.type AS property_type,
            p.description,
            loc.city,
            loc.area,
            loc.address,
            u.id AS owner_id,
            u.name AS owner_name,
            u.email AS owner_email,
            (SELECT COUNT(*) FROM property_images pi WHERE pi.listing_id = l.id) AS image_count,
            (SELECT COUNT(*) FROM favorites f WHERE f.listing_id = l.id) AS favorite_count,
            (SELECT COUNT(*) FROM inquiries i WHERE i.listing_id = l.id) AS inquiry_count,
            (SELECT pi.image_url FROM property_images pi WHERE pi.listing_id = l.id ORDER BY pi.rowid LIMIT 1) AS image_url
        FROM listings l
        INNER JOIN properties p ON l.property_id = p.id
        INNER JOIN users u ON p.owner_id = u.id
        INNER JOIN locations loc ON l.location_id = loc.id
        WHERE l.id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    let Some(mut detail) = detail else {
        return Ok(None);
    };
    detail.images = list_images(pool, id).await?;
    Ok(Some(detail))
}

/// Images of a listing in the order they were added; the first is primary
pub async fn list_images(pool: &SqlitePool, listing_id: Uuid) -> Result<Vec<ListingImage>, sqlx::Error> {
    sqlx::query_as::<_, ListingImage>(
        r#"
        SELECT id, listing_id, image_url, created_at
        FROM property_images
        WHERE listing_id = ?
        ORDER BY rowid
        "#,
    )
    .bind(listing_id)
    .fetch_all(pool)
    .await
}

/// Attach an image to a listing
pub async fn add_image(
    pool: &SqlitePool,
    listing_id: Uuid,
    image_url: &str,
) -> Result<ListingImage, sqlx::Error> {
    let image = ListingImage {
        id: Uuid::new_v4(),
        listing_id,
        image_url: image_url.to_string(),
        created_at: Utc::now(),
    };

    sqlx::query("INSERT INTO property_images (id, listing_id, image_url, created_at) VALUES (?, ?, ?, ?)")
        .bind(image.id)
        .bind(image.listing_id)
        .bind(&image.image_url)
        .bind(image.created_at)
        .execute(pool)
        .await?;

    Ok(image)
}

/// Seller dashboard rows; `owner = None` returns every listing
pub async fn list_for_owner(
    pool: &SqlitePool,
    owner: Option<Uuid>,
) -> Result<Vec<SellerListing>, sqlx::Error> {
    let mut query: QueryBuilder<Sqlite> = QueryBuilder::new(
        r#"
        SELECT
            l.id,
            l.price,
            l.status,
            l.created_at,
            p.type AS property_type,
            p.description,
            loc.city,
            loc.area,
            u.name AS owner_name,
            (SELECT COUNT(*) FROM favorites f WHERE f.listing_id = l.id) AS favorite_count,
            (SELECT COUNT(*) FROM inquiries i WHERE i.listing_id = l.id) AS inquiry_count
        FROM listings l
        INNER JOIN properties p ON l.property_id = p.id
        INNER JOIN users u ON p.owner_id = u.id
        INNER JOIN locations loc ON l.location_id = loc.id
        "#,
    );

    if let Some(owner) = owner {
        query.push(" WHERE p.owner_id = ").push_bind(owner);
    }
    query.push(NEWEST_FIRST);

    query.build_query_as::<SellerListing>().fetch_all(pool).await
}

/// Owner of a listing (through its property), or None if no such listing
pub async fn get_owner(pool: &SqlitePool, listing_id: Uuid) -> Result<Option<Uuid>, sqlx::Error> {
    sqlx::query_scalar::<_, Uuid>(
        r#"
        SELECT p.owner_id
        FROM listings l
        INNER JOIN properties p ON l.property_id = p.id
        WHERE l.id = ?
        "#,
    )
    .bind(listing_id)
    .fetch_optional(pool)
    .await
}

/// Status of a listing, or None if no such listing
pub async fn get_status(pool: &SqlitePool, listing_id: Uuid) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>("SELECT status FROM listings WHERE id = ?")
        .bind(listing_id)
        .fetch_optional(pool)
        .await
}

/// Insert a listing and return its id
pub async fn create_listing(
    pool: &SqlitePool,
    property_id: Uuid,
    location_id: Uuid,
    price: f64,
    status: &str,
) -> Result<Uuid, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO listings (id, property_id, location_id, price, status, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(id)
    .bind(property_id)
    .bind(location_id)
    .bind(price)
    .bind(status)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(id)
}

/// Apply a partial update; the caller guarantees at least one field
pub async fn update_listing(
    pool: &SqlitePool,
    id: Uuid,
    price: Option<f64>,
    status: Option<&str>,
) -> Result<u64, sqlx::Error> {
    let mut query: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE listings SET ");
    let mut fields = query.separated(", ");
    if let Some(price) = price {
        fields.push("price = ").push_bind_unseparated(price);
    }
    if let Some(status) = status {
        fields.push("status = ").push_bind_unseparated(status);
    }
    fields.push("updated_at = ").push_bind_unseparated(Utc::now());

    query.push(" WHERE id = ").push_bind(id);

    let result = query.build().execute(pool).await?;
    Ok(result.rows_affected())
}

/// Delete a listing; its images, favorites and inquiries cascade
pub async fn delete_listing(pool: &SqlitePool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM listings WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
