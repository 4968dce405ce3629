//! Views keyed by a single address

use log::{debug, info, warn};

use crate::types::{ChildAlert, FireDetails, Person, CHILD_ALERT_MAX_AGE};

use super::AlertsEngine;

/// Children at an address plus everyone else living there.
///
/// An address with residents but no child yields `NotFound`, the same as an
/// unknown address.
pub fn children_at_address(engine: &AlertsEngine, address: &str) -> ChildAlert {
    debug!("Fetching children at address: {}", address);
    let residents = engine.persons.find_by_address(address);
    if residents.is_empty() {
        warn!("No residents found at address: {}", address);
        return ChildAlert::NotFound;
    }

    let (children, other_residents): (Vec<Person>, Vec<Person>) = residents
        .into_iter()
        .partition(|p| p.age <= CHILD_ALERT_MAX_AGE);
    if children.is_empty() {
        info!("No children found at address: {}", address);
        return ChildAlert::NotFound;
    }

    debug!(
        "Found {} children and {} other residents at address: {}",
        children.len(),
        other_residents.len(),
        address
    );
    ChildAlert::Found {
        children,
        other_residents,
    }
}

/// Covering station number and residents for an address.
///
/// Both lookups must succeed: a station without residents is `NotFound`.
/// When several stations cover the address the first record wins.
pub fn fire_details_by_address(engine: &AlertsEngine, address: &str) -> FireDetails {
    debug!("Fetching fire details for address: {}", address);
    let stations = engine.stations.find_by_address(address);
    let Some(station) = stations.first() else {
        warn!("No fire station found for address: {}", address);
        return FireDetails::NotFound;
    };
    let station_number = station.station_number;

    let residents = engine.persons.find_by_address(address);
    if residents.is_empty() {
        warn!("No residents found at address: {}", address);
        return FireDetails::NotFound;
    }

    debug!("Returning fire details for address: {}", address);
    FireDetails::Found {
        station_number,
        residents,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::fixtures::{engine_with, springfield, EVERGREEN, FLANDERS};
    use crate::types::FireStation;

    #[test]
    fn test_children_at_address() {
        match springfield().children_at_address(EVERGREEN) {
            ChildAlert::Found {
                children,
                other_residents,
            } => {
                assert_eq!(children.len(), 1);
                assert_eq!(children[0].first_name, "Bart");
                assert_eq!(other_residents.len(), 1);
                assert_eq!(other_residents[0].first_name, "Homer");
            }
            ChildAlert::NotFound => panic!("expected a child alert"),
        }
    }

    #[test]
    fn test_children_at_unknown_address() {
        assert_eq!(
            springfield().children_at_address("123 Unknown Street"),
            ChildAlert::NotFound
        );
    }

    #[test]
    fn test_adults_only_address_is_not_found() {
        assert_eq!(springfield().children_at_address(FLANDERS), ChildAlert::NotFound);
    }

    #[test]
    fn test_children_only_address_has_empty_other_residents() {
        let engine = engine_with(
            vec![Person::new("Rod", "Flanders", FLANDERS, "Springfield", "1", 10)],
            vec![],
        );

        assert_eq!(
            engine.children_at_address(FLANDERS),
            ChildAlert::Found {
                children: engine.person_store().find_by_address(FLANDERS),
                other_residents: vec![],
            }
        );
    }

    #[test]
    fn test_eighteen_counts_as_child_for_child_alert() {
        let engine = engine_with(
            vec![
                Person::new("Patty", "Bouvier", EVERGREEN, "Springfield", "1", 18),
                Person::new("Selma", "Bouvier", EVERGREEN, "Springfield", "2", 19),
            ],
            vec![],
        );

        match engine.children_at_address(EVERGREEN) {
            ChildAlert::Found {
                children,
                other_residents,
            } => {
                assert_eq!(children[0].first_name, "Patty");
                assert_eq!(other_residents[0].first_name, "Selma");
            }
            ChildAlert::NotFound => panic!("an 18-year-old is a child for this view"),
        }
    }

    #[test]
    fn test_fire_details_by_address() {
        match springfield().fire_details_by_address(EVERGREEN) {
            FireDetails::Found {
                station_number,
                residents,
            } => {
                assert_eq!(station_number, 1);
                assert_eq!(residents.len(), 2);
                assert_eq!(residents[0].first_name, "Homer");
            }
            FireDetails::NotFound => panic!("expected fire details"),
        }
    }

    #[test]
    fn test_fire_details_unknown_address() {
        assert_eq!(
            springfield().fire_details_by_address("123 Unknown Street"),
            FireDetails::NotFound
        );
    }

    #[test]
    fn test_fire_details_station_without_residents() {
        let engine = engine_with(vec![], vec![FireStation::new("1 Empty Lot", 4)]);
        assert_eq!(engine.fire_details_by_address("1 Empty Lot"), FireDetails::NotFound);
    }

    #[test]
    fn test_fire_details_residents_without_station() {
        let engine = engine_with(
            vec![Person::new("Homer", "Simpson", EVERGREEN, "Springfield", "1", 42)],
            vec![],
        );
        assert_eq!(engine.fire_details_by_address(EVERGREEN), FireDetails::NotFound);
    }

    #[test]
    fn test_fire_details_first_station_wins() {
        let engine = engine_with(
            vec![Person::new("Homer", "Simpson", EVERGREEN, "Springfield", "1", 42)],
            vec![FireStation::new(EVERGREEN, 3), FireStation::new(EVERGREEN, 1)],
        );

        let stations = engine.station_store().find_by_address(EVERGREEN);
        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].station_number, 3);

        assert!(matches!(
            engine.fire_details_by_address(EVERGREEN),
            FireDetails::Found { station_number: 3, .. }
        ));
    }
}
