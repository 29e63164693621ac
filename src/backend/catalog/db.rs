//! Database operations for properties and locations

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use super::types::{Location, Property};

/// Create a property owned by `owner_id`
pub async fn create_property(
    pool: &SqlitePool,
    owner_id: Uuid,
    property_type: &str,
    description: Option<&str>,
) -> Result<Property, sqlx::Error> {
    let property = Property {
        id: Uuid::new_v4(),
        owner_id,
        property_type: property_type.to_string(),
        description: description.map(str::to_string),
        created_at: Utc::now(),
    };

    sqlx::query(
        r#"
        INSERT INTO properties (id, owner_id, type, description, created_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(property.id)
    .bind(property.owner_id)
    .bind(&property.property_type)
    .bind(&property.description)
    .bind(property.created_at)
    .execute(pool)
    .await?;

    Ok(property)
}

/// Properties owned by a user, newest first
pub async fn list_properties_for_owner(
    pool: &SqlitePool,
    owner_id: Uuid,
) -> Result<Vec<Property>, sqlx::Error> {
    sqlx::query_as::<_, Property>(
        r#"
        SELECT id, owner_id, type, description, created_at
        FROM properties
        WHERE owner_id = ?
        ORDER BY created_at DESC, rowid DESC
        "#,
    )
    .bind(owner_id)
    .fetch_all(pool)
    .await
}

/// Owner of a property, or None if no such property
pub async fn get_property_owner(pool: &SqlitePool, property_id: Uuid) -> Result<Option<Uuid>, sqlx::Error> {
    sqlx::query_scalar::<_, Uuid>("SELECT owner_id FROM properties WHERE id = ?")
        .bind(property_id)
        .fetch_optional(pool)
        .await
}

/// Create a location record
pub async fn create_location(
    pool: &SqlitePool,
    city: &str,
    area: Option<&str>,
    address: Option<&str>,
) -> Result<Location, sqlx::Error> {
    let location = Location {
        id: Uuid::new_v4(),
        city: city.to_string(),
        area: area.map(str::to_string),
        address: address.map(str::to_string),
    };

    sqlx::query("INSERT INTO locations (id, city, area, address) VALUES (?, ?, ?, ?)")
        .bind(location.id)
        .bind(&location.city)
        .bind(&location.area)
        .bind(&location.address)
        .execute(pool)
        .await?;

    Ok(location)
}

/// All locations, by city then area
pub async fn list_locations(pool: &SqlitePool) -> Result<Vec<Location>, sqlx::Error> {
    sqlx::query_as::<_, Location>(
        "SELECT id, city, area, address FROM locations ORDER BY city, area",
    )
    .fetch_all(pool)
    .await
}

pub async fn location_exists(pool: &SqlitePool, location_id: Uuid) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM locations WHERE id = ?)")
        .bind(location_id)
        .fetch_one(pool)
        .await
}
