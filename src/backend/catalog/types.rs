//! Property and location types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A property owned by one seller (or admin)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Property {
    pub id: Uuid,
    pub owner_id: Uuid,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub property_type: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A flat address record referenced by listings
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Location {
    pub id: Uuid,
    pub city: String,
    pub area: Option<String>,
    pub address: Option<String>,
}

/// POST /api/properties
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct CreatePropertyRequest {
    #[serde(rename = "type")]
    pub property_type: Option<String>,
    pub description: Option<String>,
}

/// POST /api/locations
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct CreateLocationRequest {
    pub city: Option<String>,
    pub area: Option<String>,
    pub address: Option<String>,
}
