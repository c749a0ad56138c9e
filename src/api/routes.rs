use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        // Outermost, so the trace span can read the request id
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        // Catalog
        .route("/fragrances", get(handlers::list_fragrances))
        .route("/fragrances/search", get(handlers::search_fragrances))
        .route("/fragrances/:id", get(handlers::get_fragrance))
        .route("/fragrances/:id/similar", get(handlers::similar_fragrances))
        .route("/fragrances/:id/popularity", get(handlers::fragrance_popularity))
        // Interactions
        .route("/interactions", post(handlers::record_interaction))
        // Questionnaire
        .route("/questionnaire", post(handlers::questionnaire_recommendations))
        // Inventory
        .route("/inventory", get(handlers::get_inventory).post(handlers::add_to_inventory))
        .route("/inventory/statistics", get(handlers::inventory_statistics))
        .route("/inventory/:index", delete(handlers::remove_from_inventory))
}
