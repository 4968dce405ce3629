//! Read-only record stores
//!
//! The alerts engine only sees these two traits. Both are populated once by
//! the dataset loader and never mutated afterwards, so implementations can
//! serve any number of concurrent readers without locking.
//!
//! Every query returns records in load order.

mod index;
mod memory;

pub use index::AddressIndex;
pub use memory::{InMemoryPersonStore, InMemoryStationStore};

use crate::types::{FireStation, Person};

/// Lookups over resident records
pub trait PersonStore: Send + Sync {
    /// Persons whose address equals `address` exactly
    fn find_by_address(&self, address: &str) -> Vec<Person>;

    /// Persons living at any of `addresses`, each person at most once
    fn find_by_address_in(&self, addresses: &[String]) -> Vec<Person>;

    /// Persons matching both names exactly (case-sensitive)
    fn find_by_first_name_and_last_name(&self, first_name: &str, last_name: &str) -> Vec<Person>;

    fn find_by_city(&self, city: &str) -> Vec<Person>;

    fn find_all(&self) -> Vec<Person>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Lookups over fire station coverage records
pub trait StationStore: Send + Sync {
    fn find_by_station_number(&self, station_number: u32) -> Vec<FireStation>;

    /// Stations whose number is any of `station_numbers`, each record at most once
    fn find_by_station_number_in(&self, station_numbers: &[u32]) -> Vec<FireStation>;

    fn find_by_address(&self, address: &str) -> Vec<FireStation>;

    fn find_all(&self) -> Vec<FireStation>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
