//! REST API module for the alert endpoints
//!
//! Provides the dispatch queries over HTTP:
//! - `GET /firestation?stationNumber=` - Residents covered by a station
//! - `GET /phoneAlert?stationNumber=` - Phone numbers covered by a station
//! - `GET /flood/stations?stations=` - Households covered by several stations
//! - `GET /childAlert?address=` - Children living at an address
//! - `GET /fire?address=` - Station and residents for an address
//! - `GET /personInfo?firstName=&lastName=` - Persons by name
//! - `GET /communityEmail?city=` - Emails of a city's residents
//! - `GET /persons` - Every person
//!
//! Empty results are still `200 OK`. Depending on the endpoint the body
//! either keeps its keys with empty values or is the empty object `{}`.

pub mod addresses;
pub mod persons;
pub mod stations;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

/// Raw query string pairs, in the order they were sent.
///
/// Kept as pairs so repeated keys (`stations=1&stations=2`) survive.
pub type QueryPairs = Vec<(String, String)>;

/// Body returned for every failed request
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// RFC 3339 time the error was produced
    pub timestamp: String,
    pub status: u16,
    pub error: String,
    pub message: String,
}

/// API error carrying an HTTP status and a human-readable message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn missing_parameter(name: &str) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            format!("Missing required parameter: {}", name),
        )
    }

    pub fn invalid_parameter(name: &str) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            format!("Invalid value for parameter: {}", name),
        )
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "The requested resource was not found.")
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn to_body(&self) -> ErrorResponse {
        ErrorResponse {
            timestamp: chrono::Utc::now().to_rfc3339(),
            status: self.status.as_u16(),
            error: self
                .status
                .canonical_reason()
                .unwrap_or("Unknown Error")
                .to_string(),
            message: self.message.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.to_body())).into_response()
    }
}

/// First value sent for `name`
pub fn optional<'a>(params: &'a QueryPairs, name: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

/// First value sent for `name`, or a 400 when absent
pub fn required<'a>(params: &'a QueryPairs, name: &str) -> Result<&'a str, ApiError> {
    optional(params, name).ok_or_else(|| ApiError::missing_parameter(name))
}

/// Required station number parameter.
///
/// Any integer is accepted; `None` means it is outside the range of station
/// numbers and so cannot match a station.
pub fn required_station(params: &QueryPairs, name: &str) -> Result<Option<u32>, ApiError> {
    parse_station(required(params, name)?, name)
}

fn parse_station(value: &str, name: &str) -> Result<Option<u32>, ApiError> {
    let number: i64 = value
        .trim()
        .parse()
        .map_err(|_| ApiError::invalid_parameter(name))?;
    Ok(u32::try_from(number).ok())
}

/// Every station number sent for `name`, comma separated and/or repeated.
///
/// Integers outside the station number range are dropped.
pub fn station_list(params: &QueryPairs, name: &str) -> Result<Vec<u32>, ApiError> {
    let mut numbers = Vec::new();
    let mut sent = 0;
    for (_, value) in params.iter().filter(|(key, _)| key == name) {
        for part in value.split(',').filter(|part| !part.trim().is_empty()) {
            sent += 1;
            numbers.extend(parse_station(part, name)?);
        }
    }

    if sent == 0 {
        return Err(ApiError::missing_parameter(name));
    }
    Ok(numbers)
}

/// The `{}` body used when an endpoint has nothing to report
pub fn empty_object() -> Response {
    Json(json!({})).into_response()
}
