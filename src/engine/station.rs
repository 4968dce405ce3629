//! Views keyed by station number

use std::collections::BTreeMap;

use log::{debug, warn};

use crate::types::{FireStation, Households, Person, StationCoverage, STATION_ADULT_AGE};

use super::AlertsEngine;

fn coverage_addresses(stations: &[FireStation]) -> Vec<String> {
    stations.iter().map(|s| s.address.clone()).collect()
}

/// Residents covered by a station, split into adults and children
pub fn residents_by_station(engine: &AlertsEngine, station_number: u32) -> StationCoverage {
    debug!("Fetching fire stations with station number: {}", station_number);
    let stations = engine.stations.find_by_station_number(station_number);
    if stations.is_empty() {
        warn!("No fire stations found for station number: {}", station_number);
        return StationCoverage::default();
    }

    let addresses = coverage_addresses(&stations);
    debug!("Addresses found: {:?}", addresses);
    let persons = engine.persons.find_by_address_in(&addresses);

    let adult_count = persons
        .iter()
        .filter(|p| p.age >= STATION_ADULT_AGE)
        .count();
    let child_count = persons.len() - adult_count;
    debug!(
        "Station {} covers {} persons ({} adults, {} children)",
        station_number,
        persons.len(),
        adult_count,
        child_count
    );

    StationCoverage {
        persons,
        adult_count,
        child_count,
    }
}

/// Phone numbers of every resident covered by a station, in resident order
pub fn phone_numbers_by_station(engine: &AlertsEngine, station_number: u32) -> Vec<String> {
    debug!("Fetching phone numbers for fire station number: {}", station_number);
    let phone_numbers: Vec<String> = residents_by_station(engine, station_number)
        .persons
        .into_iter()
        .map(|p| p.phone)
        .collect();
    debug!("Number of phone numbers found: {}", phone_numbers.len());
    phone_numbers
}

/// Residents of every address covered by any of `station_numbers`, grouped by address
pub fn households_by_stations(engine: &AlertsEngine, station_numbers: &[u32]) -> Households {
    debug!("Fetching households for station numbers: {:?}", station_numbers);
    let stations = engine.stations.find_by_station_number_in(station_numbers);
    if stations.is_empty() {
        warn!("No fire stations found for station numbers: {:?}", station_numbers);
        return Households::NotFound;
    }

    let addresses = coverage_addresses(&stations);
    debug!("Addresses found: {:?}", addresses);
    let persons = engine.persons.find_by_address_in(&addresses);
    if persons.is_empty() {
        warn!("No persons found for station numbers: {:?}", station_numbers);
        return Households::NotFound;
    }

    let mut households: BTreeMap<String, Vec<Person>> = BTreeMap::new();
    for person in persons {
        households
            .entry(person.address.clone())
            .or_default()
            .push(person);
    }
    debug!("Number of households found: {}", households.len());

    Households::Found(households)
}
