//! Alerts Engine - Core query engine
//!
//! Joins resident and fire station records by exact address string and
//! derives the dispatch views. The engine holds read handles to both stores
//! and nothing else; every operation is a pure function of store contents
//! and its arguments.
//!
//! "Nothing found" is never an error. Each operation returns an empty
//! value of its own shape instead.

mod address;
mod community;
mod station;

use std::sync::Arc;

use crate::store::{PersonStore, StationStore};
use crate::types::{ChildAlert, FireDetails, Households, Person, StationCoverage};

/// Query engine over the person and station stores
#[derive(Clone)]
pub struct AlertsEngine {
    pub(crate) persons: Arc<dyn PersonStore>,
    pub(crate) stations: Arc<dyn StationStore>,
}

impl AlertsEngine {
    /// Create an engine over the given stores
    pub fn new(persons: Arc<dyn PersonStore>, stations: Arc<dyn StationStore>) -> Self {
        Self { persons, stations }
    }

    pub fn person_store(&self) -> &dyn PersonStore {
        self.persons.as_ref()
    }

    pub fn station_store(&self) -> &dyn StationStore {
        self.stations.as_ref()
    }
}

// Re-export operations from submodules
impl AlertsEngine {
    // Station-keyed views (from station.rs)
    pub fn residents_by_station(&self, station_number: u32) -> StationCoverage {
        station::residents_by_station(self, station_number)
    }

    pub fn phone_numbers_by_station(&self, station_number: u32) -> Vec<String> {
        station::phone_numbers_by_station(self, station_number)
    }

    pub fn households_by_stations(&self, station_numbers: &[u32]) -> Households {
        station::households_by_stations(self, station_numbers)
    }

    // Address-keyed views (from address.rs)
    pub fn children_at_address(&self, address: &str) -> ChildAlert {
        address::children_at_address(self, address)
    }

    pub fn fire_details_by_address(&self, address: &str) -> FireDetails {
        address::fire_details_by_address(self, address)
    }

    // Name and city views (from community.rs)
    pub fn person_info(&self, first_name: &str, last_name: &str) -> Vec<Person> {
        community::person_info(self, first_name, last_name)
    }

    pub fn community_emails(&self, city: &str) -> Vec<String> {
        community::community_emails(self, city)
    }

    pub fn all_persons(&self) -> Vec<Person> {
        community::all_persons(self)
    }
}
