//! User Directory Module
//!
//! Public read-only views of users: the directory, a single entry, users by
//! role and the per-user activity report. Directory rows carry no password
//! hash, phone or address.

pub mod db;
pub mod handlers;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::Role;

/// One directory entry
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct DirectoryEntry {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct FavoriteActivity {
    pub id: Uuid,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub property_type: String,
    pub city: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct InquiryActivity {
    pub id: Uuid,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub listing_id: Uuid,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub property_type: String,
    pub city: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct PropertyActivity {
    pub id: Uuid,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub property_type: String,
    pub description: Option<String>,
    pub listing_count: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ActivityStats {
    pub favorite_count: usize,
    pub inquiry_count: usize,
    pub property_count: usize,
}

/// `GET /api/users/{id}/activity`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ActivityReport {
    pub user: DirectoryEntry,
    pub favorites: Vec<FavoriteActivity>,
    pub inquiries: Vec<InquiryActivity>,
    pub properties: Vec<PropertyActivity>,
    pub stats: ActivityStats,
}
