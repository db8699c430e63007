//! Read-only web API for the card gallery
//!
//! Serves the parsed inventory snapshot together with generated listing text.
//! The snapshot is loaded once at startup and never changes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::error::{ListingError, Result};
use crate::listing::Listing;

/// Shared application state (immutable inventory snapshot)
#[derive(Clone)]
struct AppState {
    listings: Arc<Vec<Listing>>,
}

/// API response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data: Some(data),
            error: None,
        })
    }
}

/// Inventory summary shown above the gallery
#[derive(Debug, Serialize, PartialEq)]
pub struct InventoryStats {
    pub total: usize,
    pub autographed: usize,
    pub serialized: usize,
    pub by_sport: BTreeMap<String, usize>,
}

impl InventoryStats {
    pub fn from_listings(listings: &[Listing]) -> Self {
        let mut by_sport = BTreeMap::new();
        for listing in listings {
            let sport = match listing.card.sport.as_str() {
                "" => "Unknown".to_string(),
                s => s.to_string(),
            };
            *by_sport.entry(sport).or_insert(0) += 1;
        }

        Self {
            total: listings.len(),
            autographed: listings.iter().filter(|l| l.card.is_auto).count(),
            serialized: listings.iter().filter(|l| l.card.is_serialized()).count(),
            by_sport,
        }
    }
}

/// GET /api/cards
async fn cards_handler(State(state): State<AppState>) -> Json<ApiResponse<Vec<Listing>>> {
    ApiResponse::ok(state.listings.as_ref().clone())
}

/// GET /api/cards/{index} (1-based, as in SKUs)
async fn card_handler(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> std::result::Result<Json<ApiResponse<Listing>>, (StatusCode, Json<ApiResponse<()>>)> {
    match index.checked_sub(1).and_then(|i| state.listings.get(i)) {
        Some(listing) => Ok(ApiResponse::ok(listing.clone())),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse {
                success: false,
                data: None,
                error: Some(format!("No card with index {index}")),
            }),
        )),
    }
}

/// GET /api/stats
async fn stats_handler(State(state): State<AppState>) -> Json<ApiResponse<InventoryStats>> {
    ApiResponse::ok(InventoryStats::from_listings(&state.listings))
}

/// Build the web server router
///
/// Requests outside `/api` are served from `static_dir` when one is given.
pub fn create_router(listings: Arc<Vec<Listing>>, static_dir: Option<&std::path::Path>) -> Router {
    let state = AppState { listings };

    let router = Router::new()
        .route("/api/cards", get(cards_handler))
        .route("/api/cards/{index}", get(card_handler))
        .route("/api/stats", get(stats_handler))
        .with_state(state);

    let router = match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router.layer(CorsLayer::permissive())
}

/// Start the web server
///
/// Binds to 0.0.0.0 (all interfaces).
pub async fn serve(
    listings: Vec<Listing>,
    static_dir: Option<&std::path::Path>,
    port: u16,
) -> Result<()> {
    let app = create_router(Arc::new(listings), static_dir);
    let addr = format!("0.0.0.0:{}", port);

    log::info!("Card gallery API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(ListingError::Server)?;
    axum::serve(listener, app)
        .await
        .map_err(ListingError::Server)?;

    Ok(())
}
