//! Router tests for the gallery API.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use card_listings::web::create_router;
use card_listings::{build_listings, load_inventory_from_source, ListingOptions};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

const TSV: &str = "Card Name\tPlayer Name\tSport\n2023 Prizm Auto /25\tPulisic\tSoccer\nBase\tJordan\tBasketball\n";

fn router(static_dir: Option<&std::path::Path>) -> axum::Router {
    let listings = build_listings(load_inventory_from_source(TSV), &ListingOptions::default());
    create_router(Arc::new(listings), static_dir)
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn lists_all_cards() {
    let (status, body) = get(router(None), "/api/cards").await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["success"], true);
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["sku"], "SOC_0001_pulisic_x");
    assert_eq!(data[0]["title"], "2023 Pulisic /25 AUTO");
    assert_eq!(data[0]["card"]["is_auto"], true);
    assert_eq!(data[1]["card"]["player_name"], "Jordan");
}

#[tokio::test]
async fn gets_single_card_by_index() {
    let (status, body) = get(router(None), "/api/cards/2").await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["data"]["index"], 2);
    assert_eq!(json["data"]["card"]["sport"], "Basketball");
}

#[tokio::test]
async fn unknown_index_is_not_found() {
    for uri in ["/api/cards/0", "/api/cards/3"] {
        let (status, body) = get(router(None), uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");

        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["success"], false);
        assert!(json.get("data").is_none());
    }
}

#[tokio::test]
async fn stats_summarize_inventory() {
    let (status, body) = get(router(None), "/api/stats").await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["data"]["total"], 2);
    assert_eq!(json["data"]["autographed"], 1);
    assert_eq!(json["data"]["serialized"], 1);
    assert_eq!(json["data"]["by_sport"]["Basketball"], 1);
}

#[tokio::test]
async fn serves_static_gallery_files() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>Gallery</h1>").unwrap();

    let (status, body) = get(router(Some(dir.path())), "/index.html").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"<h1>Gallery</h1>");
}

#[tokio::test]
async fn unknown_path_without_static_dir_is_not_found() {
    let (status, _) = get(router(None), "/index.html").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
