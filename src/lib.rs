//! Fire Alerts Service
//!
//! Answers emergency-dispatch queries over residents and the fire stations
//! covering their addresses. Residents and stations are joined purely by
//! exact address string.
//!
//! # Features
//!
//! - **7 alert views**: station coverage, phone alerts, flood households,
//!   child alerts, fire details, person info and community emails
//! - **Read-only stores**: loaded once at startup, shared lock-free across requests
//! - **HTTP API**: Axum endpoints with `{}` / empty-list conventions per view
//!
//! # Modules
//!
//! - `types`: Records (Person, FireStation), engine results and errors
//! - `store`: PersonStore / StationStore traits and in-memory stores
//! - `engine`: The alerts engine computing every view
//! - `dataset`: Bootstrap JSON loader
//! - `config`: Environment-based server settings
//! - `api`: HTTP endpoints
//!
//! # Example
//!
//! ```no_run
//! use fire_alerts::Dataset;
//!
//! let engine = Dataset::load("data.json").unwrap().into_engine();
//! let coverage = engine.residents_by_station(1);
//! println!("{} adults, {} children", coverage.adult_count, coverage.child_count);
//! ```

pub mod api;
pub mod config;
pub mod dataset;
pub mod engine;
pub mod store;
pub mod types;

// Re-export commonly used items at crate root
pub use config::ServerConfig;
pub use dataset::Dataset;
pub use engine::AlertsEngine;
pub use store::{InMemoryPersonStore, InMemoryStationStore, PersonStore, StationStore};
pub use types::{
    AlertsError, AlertsResult, ChildAlert, FireDetails, FireStation, Households, Person,
    StationCoverage, CHILD_ALERT_MAX_AGE, STATION_ADULT_AGE,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
