//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{response::IntoResponse, response::Response, routing::get, Router};
use log::error;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};

use super::rest::{addresses, persons, stations, ApiError};
use super::state::AppState;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration - allow all origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Station-keyed alerts
        .route("/firestation", get(stations::residents_by_station))
        .route("/phoneAlert", get(stations::phone_alert))
        .route("/flood/stations", get(stations::flood_by_stations))
        // Address-keyed alerts
        .route("/childAlert", get(addresses::child_alert))
        .route("/fire", get(addresses::fire))
        // Persons
        .route("/personInfo", get(persons::person_info))
        .route("/communityEmail", get(persons::community_email))
        .route("/persons", get(persons::list_persons))
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

async fn not_found() -> ApiError {
    ApiError::not_found()
}

/// Turn a handler panic into a 500 error body
fn handle_panic(payload: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unexpected internal error".to_string()
    };
    error!("Request handler panicked: {}", message);

    ApiError::internal(message).into_response()
}
