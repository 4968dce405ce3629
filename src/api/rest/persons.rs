//! Person and community endpoints

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use log::{info, warn};
use serde::Serialize;

use super::{empty_object, required, ApiError, QueryPairs};
use crate::api::state::AppState;
use crate::types::Person;

/// Response for GET /personInfo
#[derive(Debug, Serialize)]
pub struct PersonInfoResponse {
    pub persons: Vec<Person>,
}

/// Response for GET /communityEmail
#[derive(Debug, Serialize)]
pub struct CommunityEmailResponse {
    pub emails: Vec<String>,
}

/// GET /personInfo - Persons matching a first and last name
pub async fn person_info(
    State(state): State<Arc<AppState>>,
    Query(params): Query<QueryPairs>,
) -> Result<Response, ApiError> {
    let first_name = required(&params, "firstName")?;
    let last_name = required(&params, "lastName")?;
    info!("Received request for person info: {} {}", first_name, last_name);

    let persons = state.engine.person_info(first_name, last_name);
    if persons.is_empty() {
        warn!("No person found with name: {} {}", first_name, last_name);
        return Ok(empty_object());
    }
    Ok(Json(PersonInfoResponse { persons }).into_response())
}

/// GET /communityEmail - Emails of everyone living in a city
pub async fn community_email(
    State(state): State<Arc<AppState>>,
    Query(params): Query<QueryPairs>,
) -> Result<Response, ApiError> {
    let city = required(&params, "city")?;
    info!("Received request for community emails in city: {}", city);

    let emails = state.engine.community_emails(city);
    if emails.is_empty() {
        warn!("No emails found for city: {}", city);
        return Ok(empty_object());
    }
    Ok(Json(CommunityEmailResponse { emails }).into_response())
}

/// GET /persons - Every person in load order
pub async fn list_persons(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.engine.all_persons())
}
