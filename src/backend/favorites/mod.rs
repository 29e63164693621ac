//! Favorites Module
//!
//! A favorite is a (user, listing) pair; a user can favorite a given listing
//! once. The pair is checked before insert and is also the table's primary
//! key, so a concurrent duplicate still ends in `AlreadyFavorited`.

pub mod db;
pub mod handlers;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A favorited listing, as shown on the user's favorites page
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct FavoriteListing {
    pub id: Uuid,
    pub price: f64,
    pub status: String,
    pub property_type: String,
    pub description: Option<String>,
    pub city: String,
    pub area: Option<String>,
    pub image_url: Option<String>,
    pub favorited_at: DateTime<Utc>,
}

/// Body of POST and DELETE /api/favorites
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct FavoriteRequest {
    pub listing_id: Option<Uuid>,
}

/// `{isFavorited}`
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct FavoriteCheck {
    #[serde(rename = "isFavorited")]
    pub is_favorited: bool,
}
