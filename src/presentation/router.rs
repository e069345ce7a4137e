// Route table for the dashboard API
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    change_product, change_region, get_dashboard, health_check, list_products, list_regions,
    refresh_dataset, register,
};
use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard", get(get_dashboard))
        .route("/catalog/products", get(list_products))
        .route("/catalog/regions", get(list_regions))
        .route("/selection/product", put(change_product))
        .route("/selection/region", put(change_region))
        .route("/dataset/refresh", post(refresh_dataset))
        .route("/registrations", post(register))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
