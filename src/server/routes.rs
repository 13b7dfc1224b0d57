use crate::record::{NewFarmer, NewRetailer};
use crate::server::AppState;
use crate::Error;
use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize)]
pub struct CreatedResponse {
    pub id: i64,
}

type RouteError = (StatusCode, Json<ErrorResponse>);

/// Validation failures are the caller's fault; anything else is storage
fn to_route_error(err: Error) -> RouteError {
    let status = if err.is_validation() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(ErrorResponse { error: err.to_string() }))
}

pub async fn add_farmer(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<NewFarmer>,
) -> Result<(StatusCode, Json<CreatedResponse>), RouteError> {
    let registry = state.registry.lock().await;
    let id = registry.record_farmer(&draft).map_err(to_route_error)?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

pub async fn list_farmers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, RouteError> {
    let registry = state.registry.lock().await;
    let farmers = registry.farmers().map_err(to_route_error)?;
    serde_json::to_value(&farmers).map(Json).map_err(|e| {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse { error: e.to_string() }))
    })
}

pub async fn add_retailer(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<NewRetailer>,
) -> Result<(StatusCode, Json<CreatedResponse>), RouteError> {
    let registry = state.registry.lock().await;
    let id = registry.record_retailer(&draft).map_err(to_route_error)?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

pub async fn list_retailers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, RouteError> {
    let mut registry = state.registry.lock().await;
    let retailers = registry.retailers().map_err(to_route_error)?;
    serde_json::to_value(&retailers).map(Json).map_err(|e| {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse { error: e.to_string() }))
    })
}

pub async fn get_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, RouteError> {
    let registry = state.registry.lock().await;
    let stats = registry.stats().map_err(to_route_error)?;
    serde_json::to_value(&stats).map(Json).map_err(|e| {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse { error: e.to_string() }))
    })
}
