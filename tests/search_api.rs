//! Search, pickers and market statistics

#[macro_use]
mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::{json, Value};

use property_market::backend::search::db as search_db;
use property_market::backend::search::SearchFilter;

use common::*;

fn prices(results: &Value) -> Vec<f64> {
    results
        .as_array()
        .expect("search returns an array")
        .iter()
        .map(|l| l["price"].as_f64().unwrap())
        .collect()
}

async fn seeded_app() -> TestApp {
    let app = TestApp::new().await;
    let seller = register_seller(&app, "s@example.com").await;
    create_listing(&app, &seller, "Lisbon", "flat", 100000.0, "active").await;
    create_listing(&app, &seller, "Lisbon", "house", 300000.0, "active").await;
    create_listing(&app, &seller, "Porto", "flat", 200000.0, "active").await;
    create_listing(&app, &seller, "Porto", "house", 400000.0, "sold").await;
    app
}

#[tokio::test]
async fn test_empty_search_returns_active_newest_first() {
    let app = seeded_app().await;

    let (status, results) = app.post("/api/search", None, json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(prices(&results), vec![200000.0, 300000.0, 100000.0]);
}

#[tokio::test]
async fn test_status_override() {
    let app = seeded_app().await;

    let (_, results) = app.post("/api/search", None, json!({ "status": "sold" })).await;
    assert_eq!(prices(&results), vec![400000.0]);
    assert_eq!(results[0]["status"], "sold");
}

#[tokio::test]
async fn test_combined_filters() {
    let app = seeded_app().await;

    let (_, results) = app
        .post("/api/search", None, json!({ "city": "lisbon", "propertyType": "FLAT" }))
        .await;
    assert_eq!(prices(&results), vec![100000.0]);

    let (_, results) = app
        .post("/api/search", None, json!({ "minPrice": "150000", "maxPrice": 300000 }))
        .await;
    assert_eq!(prices(&results), vec![200000.0, 300000.0]);

    let (_, results) = app
        .post("/api/search", None, json!({ "city": "", "minPrice": "", "maxPrice": null }))
        .await;
    assert_eq!(prices(&results).len(), 3);

    let (_, results) = app.post("/api/search", None, json!({ "city": "Atlantis" })).await;
    assert_eq!(results, json!([]));
}

#[tokio::test]
async fn test_bad_price_bound_is_rejected() {
    let app = seeded_app().await;

    assert_error!(
        app.post("/api/search", None, json!({ "minPrice": "cheap" })).await,
        StatusCode::BAD_REQUEST
    );
}

#[tokio::test]
async fn test_pickers() {
    let app = seeded_app().await;

    let (_, cities) = app.get("/api/search/cities", None).await;
    assert_eq!(cities, json!(["Lisbon", "Porto"]));

    let (_, types) = app.get("/api/search/property-types", None).await;
    assert_eq!(types, json!(["flat", "house"]));
}

#[tokio::test]
async fn test_statistics() {
    let app = seeded_app().await;

    let (status, stats) = app.get("/api/search/statistics", None).await;
    assert_eq!(status, StatusCode::OK);

    let overview = &stats["overview"];
    assert_eq!(overview["total_listings"], 4);
    assert_eq!(overview["active_listings"], 3);
    assert_eq!(overview["sold_listings"], 1);
    assert_eq!(overview["min_price"], 100000.0);
    assert_eq!(overview["max_price"], 400000.0);
    assert_approx_eq!(overview["avg_price"].as_f64().unwrap(), 250000.0, 0.01);

    // active listings only
    let cities = stats["topCities"].as_array().unwrap();
    assert_eq!(cities.len(), 2);
    assert_eq!(cities[0]["city"], "Lisbon");
    assert_eq!(cities[0]["listing_count"], 2);
    assert_approx_eq!(cities[0]["avg_price"].as_f64().unwrap(), 200000.0, 0.01);

    let types = stats["propertyTypes"].as_array().unwrap();
    assert_eq!(types[0]["type"], "flat");
    assert_eq!(types[0]["listing_count"], 2);
}

#[tokio::test]
async fn test_statistics_on_empty_market() {
    let app = TestApp::new().await;

    let (status, stats) = app.get("/api/search/statistics", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["overview"]["total_listings"], 0);
    assert_eq!(stats["overview"]["avg_price"], Value::Null);
    assert_eq!(stats["topCities"], json!([]));
}

fn run_search(listing_prices: &[u32], filter: SearchFilter) -> Vec<f64> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();

    runtime.block_on(async {
        let app = TestApp::new().await;
        let seller = seed_seller_direct(app.pool()).await;
        for price in listing_prices {
            seed_listing_direct(app.pool(), seller, "Lisbon", f64::from(*price), "active").await;
        }
        search_db::search(app.pool(), &filter.predicates())
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.price)
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_price_bounds_select_exactly_the_range(
        listing_prices in prop::collection::vec(1u32..1_000, 0..8),
        a in 1u32..1_000,
        b in 1u32..1_000,
    ) {
        let (low, high) = (a.min(b), a.max(b));
        let filter = SearchFilter {
            min_price: Some(f64::from(low)),
            max_price: Some(f64::from(high)),
            ..Default::default()
        };

        let mut found = run_search(&listing_prices, filter);
        found.sort_by(f64::total_cmp);

        let mut expected: Vec<f64> = listing_prices
            .iter()
            .filter(|p| (low..=high).contains(*p))
            .map(|p| f64::from(*p))
            .collect();
        expected.sort_by(f64::total_cmp);

        prop_assert_eq!(found, expected);
    }
}
