//! Router builder for the order endpoint

use super::handlers::{OrderApiState, place_order};
use axum::{Router, routing::post};
use tower_http::trace::TraceLayer;

/// Build the order routes
///
/// - POST /api/order - Validate and acknowledge an order
pub fn build_order_routes(state: OrderApiState) -> Router {
    Router::new()
        .route("/api/order", post(place_order))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
