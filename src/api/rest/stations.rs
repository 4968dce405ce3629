//! Station-keyed endpoints

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use log::{info, warn};
use serde::Serialize;

use super::{empty_object, optional, required_station, station_list, ApiError, QueryPairs};
use crate::api::state::AppState;
use crate::types::{Households, Person, StationCoverage};

/// Response for GET /phoneAlert
#[derive(Debug, Serialize)]
pub struct PhoneAlertResponse {
    #[serde(rename = "phoneNumbers")]
    pub phone_numbers: Vec<String>,
}

/// Response for GET /flood/stations
#[derive(Debug, Serialize)]
pub struct FloodResponse {
    pub households: BTreeMap<String, Vec<Person>>,
}

/// GET /firestation - Residents covered by a station with adult/child counts
///
/// Always answers with all three keys, even for an unknown station.
pub async fn residents_by_station(
    State(state): State<Arc<AppState>>,
    Query(params): Query<QueryPairs>,
) -> Result<Response, ApiError> {
    let Some(station_number) = required_station(&params, "stationNumber")? else {
        warn!("Station number out of range, no station can match");
        return Ok(Json(StationCoverage::default()).into_response());
    };
    info!("Received request for residents of station: {}", station_number);

    let coverage = state.engine.residents_by_station(station_number);
    Ok(Json(coverage).into_response())
}

/// GET /phoneAlert - Phone numbers covered by a station
///
/// `firestation` is accepted as an alias of `stationNumber`.
pub async fn phone_alert(
    State(state): State<Arc<AppState>>,
    Query(params): Query<QueryPairs>,
) -> Result<Response, ApiError> {
    let name = if optional(&params, "stationNumber").is_none()
        && optional(&params, "firestation").is_some()
    {
        "firestation"
    } else {
        "stationNumber"
    };
    let phone_numbers = match required_station(&params, name)? {
        Some(station_number) => {
            info!("Received request for phone alert of station: {}", station_number);
            state.engine.phone_numbers_by_station(station_number)
        }
        None => {
            warn!("Station number out of range, no station can match");
            Vec::new()
        }
    };
    Ok(Json(PhoneAlertResponse { phone_numbers }).into_response())
}

/// GET /flood/stations - Households covered by a list of stations
pub async fn flood_by_stations(
    State(state): State<Arc<AppState>>,
    Query(params): Query<QueryPairs>,
) -> Result<Response, ApiError> {
    let station_numbers = station_list(&params, "stations")?;
    info!("Received request for flood details for station numbers: {:?}", station_numbers);

    match state.engine.households_by_stations(&station_numbers) {
        Households::Found(households) => Ok(Json(FloodResponse { households }).into_response()),
        Households::NotFound => {
            warn!("No households found for station numbers: {:?}", station_numbers);
            Ok(empty_object())
        }
    }
}
