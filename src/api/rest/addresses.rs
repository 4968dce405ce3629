//! Address-keyed endpoints

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
use crate::types::{ChildAlert, FireDetails, Person};

/// Response for GET /childAlert
#[derive(Debug, Serialize)]
pub struct ChildAlertResponse {
    pub children: Vec<Person>,
    #[serde(rename = "otherResidents")]
    pub other_residents: Vec<Person>,
}

/// Response for GET /fire
#[derive(Debug, Serialize)]
pub struct FireResponse {
    #[serde(rename = "stationNumber")]
    pub station_number: u32,
    pub residents: Vec<Person>,
}

/// GET /childAlert - Children at an address and the rest of the household
pub async fn child_alert(
    State(state): State<Arc<AppState>>,
    Query(params): Query<QueryPairs>,
) -> Result<Response, ApiError> {
    let address = required(&params, "address")?;
    info!("Received request for child alert at address: {}", address);

    match state.engine.children_at_address(address) {
        ChildAlert::Found {
            children,
            other_residents,
        } => Ok(Json(ChildAlertResponse {
            children,
            other_residents,
        })
        .into_response()),
        ChildAlert::NotFound => {
            warn!("No children or residents found at address: {}", address);
            Ok(empty_object())
        }
    }
}

/// GET /fire - Covering station and residents for an address
pub async fn fire(
    State(state): State<Arc<AppState>>,
    Query(params): Query<QueryPairs>,
) -> Result<Response, ApiError> {
    let address = required(&params, "address")?;
    info!("Received request for fire details at address: {}", address);

    match state.engine.fire_details_by_address(address) {
        FireDetails::Found {
            station_number,
            residents,
        } => Ok(Json(FireResponse {
            station_number,
            residents,
        })
        .into_response()),
        FireDetails::NotFound => {
            warn!("No fire details found for address: {}", address);
            Ok(empty_object())
        }
    }
}
