//! Data types for the Fire Alerts service
//!
//! This module contains the records held by the stores, the result values
//! produced by the alerts engine, and the crate error type.

mod alerts;
mod error;
mod person;
mod station;

pub use alerts::{ChildAlert, FireDetails, Households, StationCoverage};
pub use error::{AlertsError, AlertsResult};
pub use person::Person;
pub use station::FireStation;

/// Age at which `residents_by_station` starts counting a person as an adult.
///
/// Adults are `age >= STATION_ADULT_AGE`, children are `age < STATION_ADULT_AGE`.
pub const STATION_ADULT_AGE: u32 = 18;

/// Highest age `children_at_address` still reports as a child.
///
/// Children are `age <= CHILD_ALERT_MAX_AGE`. An 18-year-old is therefore a
/// child here but an adult in `residents_by_station`; both boundaries are
/// kept as they are until the product owners settle on one.
pub const CHILD_ALERT_MAX_AGE: u32 = 18;
