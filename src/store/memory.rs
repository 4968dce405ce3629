//! In-memory stores built once from the bootstrap dataset

use std::collections::HashSet;

use rayon::prelude::*;

use super::{AddressIndex, PersonStore, StationStore};
use crate::types::{FireStation, Person};

/// Threshold for using parallel scans (record count)
const PARALLEL_SCAN_THRESHOLD: usize = 1000;

/// Clone every record matching `predicate`, keeping load order
fn scan<T, F>(records: &[T], predicate: F) -> Vec<T>
where
    T: Clone + Send + Sync,
    F: Fn(&T) -> bool + Sync,
{
    if records.len() > PARALLEL_SCAN_THRESHOLD {
        records
            .par_iter()
            .filter(|&record| predicate(record))
            .cloned()
            .collect()
    } else {
        records
            .iter()
            .filter(|&record| predicate(record))
            .cloned()
            .collect()
    }
}

/// Clone the records at `positions` (already ascending)
fn pick<T: Clone>(records: &[T], positions: &[usize]) -> Vec<T> {
    positions.iter().map(|&i| records[i].clone()).collect()
}

/// Resident records held in load order
#[derive(Debug, Default, Clone)]
pub struct InMemoryPersonStore {
    persons: Vec<Person>,
    by_address: AddressIndex,
}

impl InMemoryPersonStore {
    /// Build the store, assigning ids 1..=n in load order
    pub fn new(persons: Vec<Person>) -> Self {
        let persons: Vec<Person> = persons
            .into_iter()
            .enumerate()
            .map(|(i, mut person)| {
                person.id = i as u64 + 1;
                person
            })
            .collect();
        let by_address = AddressIndex::build(persons.iter().map(|p| p.address.as_str()));

        Self {
            persons,
            by_address,
        }
    }
}

impl PersonStore for InMemoryPersonStore {
    fn find_by_address(&self, address: &str) -> Vec<Person> {
        pick(&self.persons, self.by_address.lookup(address))
    }

    fn find_by_address_in(&self, addresses: &[String]) -> Vec<Person> {
        pick(&self.persons, &self.by_address.lookup_many(addresses))
    }

    fn find_by_first_name_and_last_name(&self, first_name: &str, last_name: &str) -> Vec<Person> {
        scan(&self.persons, |p| {
            p.first_name == first_name && p.last_name == last_name
        })
    }

    fn find_by_city(&self, city: &str) -> Vec<Person> {
        scan(&self.persons, |p| p.city == city)
    }

    fn find_all(&self) -> Vec<Person> {
        self.persons.clone()
    }

    fn len(&self) -> usize {
        self.persons.len()
    }
}

/// Fire station coverage records held in load order
#[derive(Debug, Default, Clone)]
pub struct InMemoryStationStore {
    stations: Vec<FireStation>,
    by_address: AddressIndex,
}

impl InMemoryStationStore {
    /// Build the store, assigning ids 1..=n in load order
    pub fn new(stations: Vec<FireStation>) -> Self {
        let stations: Vec<FireStation> = stations
            .into_iter()
            .enumerate()
            .map(|(i, mut station)| {
                station.id = i as u64 + 1;
                station
            })
            .collect();
        let by_address = AddressIndex::build(stations.iter().map(|s| s.address.as_str()));

        Self {
            stations,
            by_address,
        }
    }
}

impl StationStore for InMemoryStationStore {
    fn find_by_station_number(&self, station_number: u32) -> Vec<FireStation> {
        scan(&self.stations, |s| s.station_number == station_number)
    }

    fn find_by_station_number_in(&self, station_numbers: &[u32]) -> Vec<FireStation> {
        let wanted: HashSet<u32> = station_numbers.iter().copied().collect();
        scan(&self.stations, |s| wanted.contains(&s.station_number))
    }

    fn find_by_address(&self, address: &str) -> Vec<FireStation> {
        pick(&self.stations, self.by_address.lookup(address))
    }

    fn find_all(&self) -> Vec<FireStation> {
        self.stations.clone()
    }

    fn len(&self) -> usize {
        self.stations.len()
    }
}
