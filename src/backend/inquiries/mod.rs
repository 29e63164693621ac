//! Inquiries Module
//!
//! Messages from users about a listing. Append-only: nothing in the API
//! updates or deletes an inquiry once it is created (deleting the listing or
//! the user removes it by cascade).

pub mod db;
pub mod handlers;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An inquiry as seen by the listing's owner
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ListingInquiry {
    pub id: Uuid,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub user_name: String,
    pub user_email: String,
}

/// An inquiry as seen by the user who sent it
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct UserInquiry {
    pub id: Uuid,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub listing_id: Uuid,
    pub property_type: String,
    pub city: String,
    pub price: f64,
}

/// POST /api/inquiries
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct CreateInquiryRequest {
    pub listing_id: Option<Uuid>,
    pub message: Option<String>,
}

/// `{message, inquiry_id}`
#[derive(Serialize, Deserialize, Debug)]
pub struct InquiryCreatedResponse {
    pub message: String,
    pub inquiry_id: Uuid,
}
