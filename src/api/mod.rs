//! HTTP surface of the storefront.

mod course_routes;
mod error;
mod order_routes;
mod requests;
mod server;
mod state;
mod student_routes;

use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

pub use server::serve;
pub use state::AppState;

/// Builds the full router. CORS is layered on by [`serve`].
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .merge(course_routes::course_routes())
        .merge(order_routes::order_routes())
        .merge(student_routes::student_routes());

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
