//! Catalogue HTTP Handlers
//!
//! Properties belong to the seller (or admin) who creates them; locations
//! are shared records any listing may point at.

use axum::{extract::State, http::StatusCode, Json};

use super::db;
use super::types::{CreateLocationRequest, CreatePropertyRequest, Location, Property};
use crate::backend::error::BackendError;
use crate::backend::middleware::{present, Authorized, JsonBody, ListingManagers, LocationEditors};
use crate::backend::server::state::AppState;

/// Create a property owned by the caller
pub async fn create_property(
    State(state): State<AppState>,
    actor: Authorized<ListingManagers>,
    JsonBody(request): JsonBody<CreatePropertyRequest>,
) -> Result<(StatusCode, Json<Property>), BackendError> {
    let property_type = present(&request.property_type)
        .ok_or_else(|| BackendError::validation("type is required"))?;

    let property = db::create_property(
        &state.db,
        actor.user_id,
        property_type,
        present(&request.description),
    )
    .await?;

    tracing::info!("Property {} created by {}", property.id, actor.user_id);

    Ok((StatusCode::CREATED, Json(property)))
}

/// The caller's own properties
pub async fn my_properties(
    State(state): State<AppState>,
    actor: Authorized<ListingManagers>,
) -> Result<Json<Vec<Property>>, BackendError> {
    let properties = db::list_properties_for_owner(&state.db, actor.user_id).await?;
    Ok(Json(properties))
}

pub async fn create_location(
    State(state): State<AppState>,
    actor: Authorized<LocationEditors>,
    JsonBody(request): JsonBody<CreateLocationRequest>,
) -> Result<(StatusCode, Json<Location>), BackendError> {
    let city = present(&request.city).ok_or_else(|| BackendError::validation("city is required"))?;

    let location = db::create_location(
        &state.db,
        city,
        present(&request.area),
        present(&request.address),
    )
    .await?;

    tracing::info!("Location {} ({}) created by {}", location.id, location.city, actor.user_id);

    Ok((StatusCode::CREATED, Json(location)))
}

pub async fn list_locations(State(state): State<AppState>) -> Result<Json<Vec<Location>>, BackendError> {
    Ok(Json(db::list_locations(&state.db).await?))
}
