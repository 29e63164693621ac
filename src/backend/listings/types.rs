//! Listing request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::error::BackendError;

/// One row of a listing grid (all, active, by city, search results)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ListingSummary {
    pub id: Uuid,
    pub price: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub property_type: String,
    pub description: Option<String>,
    pub city: String,
    pub area: Option<String>,
    pub address: Option<String>,
    pub owner_name: String,
    pub image_count: i64,
    pub favorite_count: i64,
    /// Primary image: the first one attached
    pub image_url: Option<String>,
}

/// Full listing page
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ListingDetail {
    pub id: Uuid,
    pub price: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub property_id: Uuid,
    pub property_type: String,
    pub description: Option<String>,
    pub city: String,
    pub area: Option<String>,
    pub address: Option<String>,
    pub owner_id: Uuid,
    pub owner_name: String,
    pub owner_email: String,
    pub image_count: i64,
    pub favorite_count: i64,
    pub inquiry_count: i64,
    pub image_url: Option<String>,
    #[sqlx(skip)]
    pub images: Vec<ListingImage>,
}

/// An image attached to a listing
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ListingImage {
    pub id: Uuid,
    pub listing_id: Uuid,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

/// Seller dashboard row
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct SellerListing {
    pub id: Uuid,
    pub price: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub property_type: String,
    pub description: Option<String>,
    pub city: String,
    pub area: Option<String>,
    pub owner_name: String,
    pub favorite_count: i64,
    pub inquiry_count: i64,
}

/// POST /api/listings
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct CreateListingRequest {
    pub property_id: Option<Uuid>,
    pub location_id: Option<Uuid>,
    pub price: Option<f64>,
    /// Defaults to `active`
    pub status: Option<String>,
}

/// PUT /api/listings/{id}; at least one field must be present
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct UpdateListingRequest {
    pub price: Option<f64>,
    pub status: Option<String>,
}

/// POST /api/listings/{id}/images
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct AddImageRequest {
    pub image_url: Option<String>,
}

/// `{message, id}` for newly created listings
#[derive(Serialize, Deserialize, Debug)]
pub struct ListingCreatedResponse {
    pub message: String,
    pub id: Uuid,
}

/// Status given to listings created without one
pub const DEFAULT_STATUS: &str = "active";

/// Reject zero, negative and non-finite prices
pub fn check_price(price: f64) -> Result<f64, BackendError> {
    if price.is_finite() && price > 0.0 {
        Ok(price)
    } else {
        Err(BackendError::validation("Price must be a positive number"))
    }
}
