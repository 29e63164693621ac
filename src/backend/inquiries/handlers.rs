//! Inquiry HTTP Handlers

use axum::{extract::State, Json};
use uuid::Uuid;

use super::{db, CreateInquiryRequest, InquiryCreatedResponse, ListingInquiry, UserInquiry};
use crate::backend::error::BackendError;
use crate::backend::listings::db as listings_db;
use crate::backend::middleware::{present, Authorized, JsonBody, Members, PathParam};
use crate::backend::server::state::AppState;

/// GET /api/inquiries/listing/{id}
pub async fn listing_inquiries(
    State(state): State<AppState>,
    PathParam(listing_id): PathParam<Uuid>,
) -> Result<Json<Vec<ListingInquiry>>, BackendError> {
    Ok(Json(db::list_for_listing(&state.db, listing_id).await?))
}

/// GET /api/inquiries/user/{id}
pub async fn user_inquiries(
    State(state): State<AppState>,
    PathParam(user_id): PathParam<Uuid>,
) -> Result<Json<Vec<UserInquiry>>, BackendError> {
    Ok(Json(db::list_for_user(&state.db, user_id).await?))
}

/// POST /api/inquiries
///
/// Open to every logged-in role, including the listing's own seller.
///
/// # Errors
///
/// * `400 Bad Request` - Missing listing_id or message, or the listing is not active
/// * `404 Not Found` - Unknown listing
pub async fn create_inquiry(
    State(state): State<AppState>,
    actor: Authorized<Members>,
    JsonBody(request): JsonBody<CreateInquiryRequest>,
) -> Result<Json<InquiryCreatedResponse>, BackendError> {
    let (Some(listing_id), Some(message)) = (request.listing_id, present(&request.message)) else {
        return Err(BackendError::validation("Missing required fields"));
    };

    let status = listings_db::get_status(&state.db, listing_id)
        .await?
        .ok_or(BackendError::ListingNotFound)?;
    if status != "active" {
        return Err(BackendError::ListingNotActive);
    }

    let inquiry_id = db::create(&state.db, actor.user_id, listing_id, message).await?;

    tracing::info!("Inquiry {} on listing {} from {}", inquiry_id, listing_id, actor.user_id);

    Ok(Json(InquiryCreatedResponse {
        message: "Inquiry created successfully".to_string(),
        inquiry_id,
    }))
}
