//! Database operations for search and market statistics

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use super::filter::{compile, Predicate};
use crate::backend::listings::types::ListingSummary;

/// Listing-wide totals
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Overview {
    pub total_listings: i64,
    pub active_listings: i64,
    pub sold_listings: i64,
    /// None when there are no listings
    pub avg_price: Option<f64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct CityStat {
    pub city: String,
    pub listing_count: i64,
    pub avg_price: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct TypeStat {
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub property_type: String,
    pub listing_count: i64,
    pub avg_price: f64,
}

/// `{overview, topCities, propertyTypes}`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Statistics {
    pub overview: Overview,
    #[serde(rename = "topCities")]
    pub top_cities: Vec<CityStat>,
    #[serde(rename = "propertyTypes")]
    pub property_types: Vec<TypeStat>,
}

/// Number of cities reported in `topCities`
pub const TOP_CITIES: i64 = 5;

/// Run a compiled search
pub async fn search(pool: &SqlitePool, predicates: &[Predicate]) -> Result<Vec<ListingSummary>, sqlx::Error> {
    let mut query = compile(predicates);
    query.build_query_as::<ListingSummary>().fetch_all(pool).await
}

/// Distinct cities with at least one location record
pub async fn cities(pool: &SqlitePool) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>("SELECT DISTINCT city FROM locations ORDER BY city")
        .fetch_all(pool)
        .await
}

/// Distinct property types
pub async fn property_types(pool: &SqlitePool) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>("SELECT DISTINCT type FROM properties ORDER BY type")
        .fetch_all(pool)
        .await
}

/// Market statistics; city and type breakdowns count active listings only
pub async fn statistics(pool: &SqlitePool) -> Result<Statistics, sqlx::Error> {
    let overview = sqlx::query_as::<_, Overview>(
        r#"
        SELECT
            COUNT(*) AS total_listings,
            COUNT(CASE WHEN status = 'active' THEN 1 END) AS active_listings,
            COUNT(CASE WHEN status = 'sold' THEN 1 END) AS sold_listings,
            ROUND(AVG(price), 2) AS avg_price,
            MIN(price) AS min_price,
            MAX(price) AS max_price
        FROM listings
        "#,
    )
    .fetch_one(pool)
    .await?;

    let top_cities = sqlx::query_as::<_, CityStat>(
        r#"
        SELECT loc.city, COUNT(l.id) AS listing_count, ROUND(AVG(l.price), 2) AS avg_price
        FROM listings l
        INNER JOIN locations loc ON l.location_id = loc.id
        WHERE l.status = 'active'
        GROUP BY loc.city
        ORDER BY listing_count DESC, loc.city
        LIMIT ?
        "#,
    )
    .bind(TOP_CITIES)
    .fetch_all(pool)
    .await?;

    let property_types = sqlx::query_as::<_, TypeStat>(
        r#"
        SELECT p.type, COUNT(l.id) AS listing_count, ROUND(AVG(l.price), 2) AS avg_price
        FROM listings l
        INNER JOIN properties p ON l.property_id = p.id
        WHERE l.status = 'active'
        GROUP BY p.type
        ORDER BY listing_count DESC, p.type
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(Statistics {
        overview,
        top_cities,
        property_types,
    })
}
