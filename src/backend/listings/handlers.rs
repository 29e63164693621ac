//! Listing HTTP Handlers
//!
//! Reads are public. Writes take `Authorized<ListingManagers>` (sellers and
//! admins) and then go through the ownership policy with the listing's owner
//! resolved via its property.

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use super::db;
use super::types::{
    check_price, AddImageRequest, CreateListingRequest, ListingCreatedResponse, ListingDetail,
    ListingImage, ListingSummary, SellerListing, UpdateListingRequest, DEFAULT_STATUS,
};
use crate::backend::auth::handlers::types::MessageResponse;
use crate::backend::catalog::db as catalog_db;
use crate::backend::error::BackendError;
use crate::backend::middleware::{present, Authorized, JsonBody, ListingManagers, PathParam};
use crate::backend::policy::{authorize, Action};
use crate::backend::server::state::AppState;

/// GET /api/listings
pub async fn list_listings(State(state): State<AppState>) -> Result<Json<Vec<ListingSummary>>, BackendError> {
    Ok(Json(db::list_all(&state.db).await?))
}

/// GET /api/listings/{id}
pub async fn get_listing(
    State(state): State<AppState>,
    PathParam(id): PathParam<Uuid>,
) -> Result<Json<ListingDetail>, BackendError> {
    let listing = db::get_detail(&state.db, id)
        .await?
        .ok_or(BackendError::ListingNotFound)?;
    Ok(Json(listing))
}

/// GET /api/listings/status/active
pub async fn active_listings(State(state): State<AppState>) -> Result<Json<Vec<ListingSummary>>, BackendError> {
    Ok(Json(db::list_active(&state.db).await?))
}

/// GET /api/listings/city/{city}
pub async fn listings_by_city(
    State(state): State<AppState>,
    PathParam(city): PathParam<String>,
) -> Result<Json<Vec<ListingSummary>>, BackendError> {
    Ok(Json(db::list_active_in_city(&state.db, city.trim()).await?))
}

/// GET /api/listings/{id}/images
///
/// An unknown listing simply has no images.
pub async fn listing_images(
    State(state): State<AppState>,
    PathParam(id): PathParam<Uuid>,
) -> Result<Json<Vec<ListingImage>>, BackendError> {
    Ok(Json(db::list_images(&state.db, id).await?))
}

/// GET /api/listings/seller/my-listings
///
/// Admins see every listing; sellers see listings of their own properties.
pub async fn my_listings(
    State(state): State<AppState>,
    actor: Authorized<ListingManagers>,
) -> Result<Json<Vec<SellerListing>>, BackendError> {
    let owner = (!actor.is_admin()).then_some(actor.user_id);
    Ok(Json(db::list_for_owner(&state.db, owner).await?))
}

/// POST /api/listings
///
/// # Errors
///
/// * `400 Bad Request` - Missing property_id, location_id or price, or a non-positive price
/// * `403 Forbidden` - A seller listing a property they do not own
/// * `404 Not Found` - Unknown property (admin) or unknown location
pub async fn create_listing(
    State(state): State<AppState>,
    actor: Authorized<ListingManagers>,
    JsonBody(request): JsonBody<CreateListingRequest>,
) -> Result<(StatusCode, Json<ListingCreatedResponse>), BackendError> {
    let (Some(property_id), Some(location_id), Some(price)) =
        (request.property_id, request.location_id, request.price)
    else {
        return Err(BackendError::validation(
            "property_id, location_id, and price are required",
        ));
    };
    let price = check_price(price)?;
    let status = present(&request.status).unwrap_or(DEFAULT_STATUS);

    let owner = catalog_db::get_property_owner(&state.db, property_id).await?;
    authorize(&actor, Action::CreateListing, owner)?;
    if owner.is_none() {
        return Err(BackendError::not_found("Property not found"));
    }

    if !catalog_db::location_exists(&state.db, location_id).await? {
        return Err(BackendError::not_found("Location not found"));
    }

    let id = db::create_listing(&state.db, property_id, location_id, price, status).await?;

    tracing::info!("Listing {} created by {} at {}", id, actor.user_id, price);

    Ok((
        StatusCode::CREATED,
        Json(ListingCreatedResponse {
            message: "Listing created successfully".to_string(),
            id,
        }),
    ))
}

/// PUT /api/listings/{id}
///
/// The listing must exist (404) and the actor must be allowed to edit it
/// (403) before the body is looked at.
pub async fn update_listing(
    State(state): State<AppState>,
    actor: Authorized<ListingManagers>,
    PathParam(id): PathParam<Uuid>,
    JsonBody(request): JsonBody<UpdateListingRequest>,
) -> Result<Json<MessageResponse>, BackendError> {
    let owner = db::get_owner(&state.db, id)
        .await?
        .ok_or(BackendError::ListingNotFound)?;
    authorize(&actor, Action::UpdateListing, Some(owner))?;

    if request.price.is_none() && request.status.is_none() {
        return Err(BackendError::NoFieldsToUpdate);
    }

    let price = request.price.map(check_price).transpose()?;
    let status = match request.status.as_deref().map(str::trim) {
        Some("") => return Err(BackendError::validation("Status cannot be empty")),
        other => other,
    };

    db::update_listing(&state.db, id, price, status).await?;

    tracing::info!("Listing {} updated by {}", id, actor.user_id);

    Ok(Json(MessageResponse::new("Listing updated successfully")))
}

/// DELETE /api/listings/{id}
pub async fn delete_listing(
    State(state): State<AppState>,
    actor: Authorized<ListingManagers>,
    PathParam(id): PathParam<Uuid>,
) -> Result<Json<MessageResponse>, BackendError> {
    let owner = db::get_owner(&state.db, id)
        .await?
        .ok_or(BackendError::ListingNotFound)?;
    authorize(&actor, Action::DeleteListing, Some(owner))?;

    db::delete_listing(&state.db, id).await?;

    tracing::info!("Listing {} deleted by {}", id, actor.user_id);

    Ok(Json(MessageResponse::new("Listing deleted successfully")))
}

/// POST /api/listings/{id}/images
pub async fn add_image(
    State(state): State<AppState>,
    actor: Authorized<ListingManagers>,
    PathParam(id): PathParam<Uuid>,
    JsonBody(request): JsonBody<AddImageRequest>,
) -> Result<(StatusCode, Json<ListingImage>), BackendError> {
    let owner = db::get_owner(&state.db, id)
        .await?
        .ok_or(BackendError::ListingNotFound)?;
    authorize(&actor, Action::ManageImages, Some(owner))?;

    let image_url = present(&request.image_url)
        .ok_or_else(|| BackendError::validation("image_url is required"))?;

    let image = db::add_image(&state.db, id, image_url).await?;

    tracing::info!("Image {} added to listing {}", image.id, id);

    Ok((StatusCode::CREATED, Json(image)))
}
