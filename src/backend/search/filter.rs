//! Search filters as typed predicates
//!
//! A `SearchFilter` is the request body of `POST /api/search`. It is turned
//! into a list of `Predicate`s, and the list is compiled once into a single
//! parameterized query. Values are always bound, never spliced into SQL.

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::{QueryBuilder, Sqlite};

use crate::backend::listings::db::{NEWEST_FIRST, SUMMARY_SELECT};

/// Status searched when the caller names none
pub const DEFAULT_SEARCH_STATUS: &str = "active";

/// Body of `POST /api/search`
///
/// Every field is optional and blank strings count as absent. Prices may be
/// sent as JSON numbers or as numeric strings (form inputs send strings).
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilter {
    pub city: Option<String>,
    pub property_type: Option<String>,
    #[serde(default, deserialize_with = "price_bound")]
    pub min_price: Option<f64>,
    #[serde(default, deserialize_with = "price_bound")]
    pub max_price: Option<f64>,
    pub status: Option<String>,
}

/// One condition a listing must satisfy
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    City(String),
    PropertyType(String),
    MinPrice(f64),
    MaxPrice(f64),
    Status(String),
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl SearchFilter {
    /// The predicates this filter stands for
    ///
    /// Always contains exactly one `Status` predicate.
    pub fn predicates(&self) -> Vec<Predicate> {
        let mut predicates = Vec::new();

        if let Some(city) = non_blank(&self.city) {
            predicates.push(Predicate::City(city));
        }
        if let Some(property_type) = non_blank(&self.property_type) {
            predicates.push(Predicate::PropertyType(property_type));
        }
        if let Some(min) = self.min_price {
            predicates.push(Predicate::MinPrice(min));
        }
        if let Some(max) = self.max_price {
            predicates.push(Predicate::MaxPrice(max));
        }

        let status = non_blank(&self.status).unwrap_or_else(|| DEFAULT_SEARCH_STATUS.to_string());
        predicates.push(Predicate::Status(status));

        predicates
    }
}

/// Compile predicates into the listing-summary query, newest first
///
/// Predicates are joined with AND.
pub fn compile(predicates: &[Predicate]) -> QueryBuilder<'static, Sqlite> {
    let mut query: QueryBuilder<'static, Sqlite> = QueryBuilder::new(SUMMARY_SELECT);

    if !predicates.is_empty() {
        query.push(" WHERE ");
        let mut clauses = query.separated(" AND ");
        for predicate in predicates {
            match predicate {
                Predicate::City(city) => {
                    clauses.push("loc.city = ");
                    clauses.push_bind_unseparated(city.clone());
                    clauses.push_unseparated(" COLLATE NOCASE");
                }
                Predicate::PropertyType(property_type) => {
                    clauses.push("p.type = ");
                    clauses.push_bind_unseparated(property_type.clone());
                    clauses.push_unseparated(" COLLATE NOCASE");
                }
                Predicate::MinPrice(min) => {
                    clauses.push("l.price >= ");
                    clauses.push_bind_unseparated(*min);
                }
                Predicate::MaxPrice(max) => {
                    clauses.push("l.price <= ");
                    clauses.push_bind_unseparated(*max);
                }
                Predicate::Status(status) => {
                    clauses.push("l.status = ");
                    clauses.push_bind_unseparated(status.clone());
                }
            }
        }
    }

    query.push(NEWEST_FIRST);
    query
}

/// Accept `123`, `123.5`, `"123"`, `""` or `null` for a price bound
fn price_bound<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) if n.is_finite() => Ok(Some(n)),
        Some(Raw::Number(_)) => Err(serde::de::Error::custom("price bound must be finite")),
        Some(Raw::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Raw::Text(s)) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid price bound: {}", s))),
    }
}
