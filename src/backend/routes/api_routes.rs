/**
 * API Route Handlers
 *
 * This module mounts every `/api` endpoint on the router. Guards are part of
 * each handler's signature (`AuthUser`, `Authorized<R>`), so the table below
 * is the whole of the routing; there is no per-route middleware.
 *
 * # Routes
 *
 * ## Auth (`/api/auth`)
 * - `POST /register`, `POST /login` - public
 * - `GET /me`, `POST /logout`, `PUT /profile`, `PUT /change-password` - any token
 * - `GET /admin/users`, `PUT /admin/users/{id}/role`,
 *   `PUT /admin/users/{id}/status`, `DELETE /admin/users/{id}` - admin
 *
 * ## Listings (`/api/listings`)
 * - `GET /`, `GET /{id}`, `GET /status/active`, `GET /city/{city}`,
 *   `GET /{id}/images` - public
 * - `POST /`, `PUT /{id}`, `DELETE /{id}`, `POST /{id}/images`,
 *   `GET /seller/my-listings` - seller or admin
 *
 * ## Catalogue
 * - `POST /api/properties`, `GET /api/properties/mine` - seller or admin
 * - `POST /api/locations` - seller, agent or admin; `GET /api/locations` - public
 *
 * ## Favorites, inquiries, search, users
 * - `GET /api/favorites/user/{userId}`, `GET /api/favorites/check/{userId}/{listingId}` - public
 * - `POST /api/favorites` - any role; `DELETE /api/favorites` - any token
 * - `GET /api/inquiries/listing/{id}`, `GET /api/inquiries/user/{id}` - public
 * - `POST /api/inquiries` - any role
 * - `POST /api/search`, `GET /api/search/{cities,property-types,statistics}` - public
 * - `GET /api/users`, `/api/users/{id}`, `/api/users/{id}/activity`,
 *   `/api/users/role/{role}` - public
 */

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::backend::auth::handlers::{
    admin, change_password, get_me, login, logout, register, update_profile,
};
use crate::backend::catalog::handlers as catalog;
use crate::backend::favorites::handlers as favorites;
use crate::backend::inquiries::handlers as inquiries;
use crate::backend::listings::handlers as listings;
use crate::backend::search::handlers as search;
use crate::backend::server::state::AppState;
use crate::backend::users::handlers as users;

/// Configure every `/api` route on the given router
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    let router = configure_auth_routes(router);
    let router = configure_listing_routes(router);
    let router = configure_catalog_routes(router);
    let router = configure_activity_routes(router);
    configure_directory_routes(router)
}

fn configure_auth_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(get_me))
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/profile", put(update_profile))
        .route("/api/auth/change-password", put(change_password))
        // Admin user management
        .route("/api/auth/admin/users", get(admin::list_users))
        .route("/api/auth/admin/users/{id}", delete(admin::delete_user))
        .route("/api/auth/admin/users/{id}/role", put(admin::update_role))
        .route("/api/auth/admin/users/{id}/status", put(admin::update_status))
}

fn configure_listing_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route(
            "/api/listings",
            get(listings::list_listings).post(listings::create_listing),
        )
        .route("/api/listings/status/active", get(listings::active_listings))
        .route("/api/listings/city/{city}", get(listings::listings_by_city))
        .route("/api/listings/seller/my-listings", get(listings::my_listings))
        .route(
            "/api/listings/{id}",
            get(listings::get_listing)
                .put(listings::update_listing)
                .delete(listings::delete_listing),
        )
        .route(
            "/api/listings/{id}/images",
            get(listings::listing_images).post(listings::add_image),
        )
}

fn configure_catalog_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/properties", post(catalog::create_property))
        .route("/api/properties/mine", get(catalog::my_properties))
        .route(
            "/api/locations",
            get(catalog::list_locations).post(catalog::create_location),
        )
}

fn configure_activity_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route(
            "/api/favorites",
            post(favorites::add_favorite).delete(favorites::remove_favorite),
        )
        .route("/api/favorites/user/{user_id}", get(favorites::user_favorites))
        .route(
            "/api/favorites/check/{user_id}/{listing_id}",
            get(favorites::check_favorite),
        )
        .route("/api/inquiries", post(inquiries::create_inquiry))
        .route("/api/inquiries/listing/{id}", get(inquiries::listing_inquiries))
        .route("/api/inquiries/user/{id}", get(inquiries::user_inquiries))
}

fn configure_directory_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/search", post(search::search))
        .route("/api/search/cities", get(search::cities))
        .route("/api/search/property-types", get(search::property_types))
        .route("/api/search/statistics", get(search::statistics))
        .route("/api/users", get(users::list_users))
        .route("/api/users/role/{role}", get(users::users_by_role))
        .route("/api/users/{id}", get(users::get_user))
        .route("/api/users/{id}/activity", get(users::user_activity))
}
