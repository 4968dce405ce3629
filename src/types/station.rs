//! Fire station coverage record

use serde::{Deserialize, Serialize};

/// One coverage entry: a station number serving an address.
///
/// Nothing prevents several entries for the same address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FireStation {
    pub id: u64,
    pub address: String,
    #[serde(rename = "station")]
    pub station_number: u32,
}

impl FireStation {
    pub fn new(address: impl Into<String>, station_number: u32) -> Self {
        Self {
            id: 0,
            address: address.into(),
            station_number,
        }
    }
}
