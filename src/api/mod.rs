//! API module for the HTTP boundary
//!
//! Translates query-string requests into engine calls and engine results
//! into JSON bodies. Validation of required parameters happens here; the
//! engine itself never rejects input.

pub mod http;
pub mod rest;
pub mod state;

pub use http::create_router;
pub use state::AppState;
