// HTTP request handlers
use crate::domain::dashboard::DashboardSnapshot;
use crate::domain::registration::RegistrationForm;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Deserialize)]
pub struct RegionQuery {
    pub product: Option<String>,
}

#[derive(Deserialize)]
pub struct ProductChange {
    pub product: String,
}

#[derive(Deserialize)]
pub struct RegionChange {
    pub region: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Current dashboard, loading the dataset on first use
pub async fn get_dashboard(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let snapshot = state.dashboard_service.load().await;
    snapshot_response(snapshot, &headers).await
}

pub async fn list_products(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    state.dashboard_service.load().await;
    let products = state.dashboard_service.product_catalog().await;
    respond(StatusCode::OK, &products, &headers).await
}

pub async fn list_regions(
    Query(query): Query<RegionQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    state.dashboard_service.load().await;
    let regions = state
        .dashboard_service
        .region_catalog(query.product.as_deref())
        .await;
    respond(StatusCode::OK, &regions, &headers).await
}

pub async fn change_product(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(change): Json<ProductChange>,
) -> impl IntoResponse {
    state.dashboard_service.load().await;
    let snapshot = state.dashboard_service.set_product(&change.product).await;
    snapshot_response(snapshot, &headers).await
}

pub async fn change_region(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(change): Json<RegionChange>,
) -> impl IntoResponse {
    state.dashboard_service.load().await;
    let snapshot = state.dashboard_service.set_region(&change.region).await;
    snapshot_response(snapshot, &headers).await
}

pub async fn refresh_dataset(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let snapshot = state.dashboard_service.refresh().await;
    snapshot_response(snapshot, &headers).await
}

pub async fn register(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(form): Json<RegistrationForm>,
) -> impl IntoResponse {
    match state.registration_service.register(form) {
        Ok(receipt) => respond(StatusCode::CREATED, &receipt, &headers).await,
        Err(e) => {
            let body = ErrorBody {
                error: e.to_string(),
            };
            respond(StatusCode::UNPROCESSABLE_ENTITY, &body, &headers).await
        }
    }
}

async fn snapshot_response(
    snapshot: DashboardSnapshot,
    headers: &HeaderMap,
) -> axum::response::Response {
    let status = match snapshot {
        DashboardSnapshot::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::OK,
    };
    respond(status, &snapshot, headers).await
}

async fn respond<T: Serialize>(
    status: StatusCode,
    data: &T,
    headers: &HeaderMap,
) -> axum::response::Response {
    match json_response(status, data, accepts_brotli(headers)).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}
