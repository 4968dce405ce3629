//! Result values produced by the alerts engine
//!
//! Two "nothing found" conventions coexist. `StationCoverage` is always
//! present and may hold empty parts, while `ChildAlert`, `FireDetails` and
//! `Households` carry an explicit `NotFound` variant meaning the payload is
//! absent altogether.

use std::collections::BTreeMap;

use serde::Serialize;

use super::Person;

/// Residents covered by one station, with the adult/child split
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StationCoverage {
    pub persons: Vec<Person>,
    #[serde(rename = "numberOfAdults")]
    pub adult_count: usize,
    #[serde(rename = "numberOfChildren")]
    pub child_count: usize,
}

impl StationCoverage {
    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }
}

/// Children living at an address, together with the rest of the household
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildAlert {
    Found {
        children: Vec<Person>,
        /// May be empty when only children live at the address
        other_residents: Vec<Person>,
    },
    NotFound,
}

impl ChildAlert {
    pub fn is_found(&self) -> bool {
        matches!(self, ChildAlert::Found { .. })
    }
}

/// Station number and residents for an address
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FireDetails {
    Found {
        station_number: u32,
        residents: Vec<Person>,
    },
    NotFound,
}

impl FireDetails {
    pub fn is_found(&self) -> bool {
        matches!(self, FireDetails::Found { .. })
    }
}

/// Residents grouped by address for a set of stations.
///
/// Keys are ordered by address; each household keeps load order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Households {
    Found(BTreeMap<String, Vec<Person>>),
    NotFound,
}

impl Households {
    pub fn is_found(&self) -> bool {
        matches!(self, Households::Found(_))
    }

    /// Number of households, zero when nothing was found
    pub fn len(&self) -> usize {
        match self {
            Households::Found(map) => map.len(),
            Households::NotFound => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Residents at one address, if that household is present
    pub fn get(&self, address: &str) -> Option<&[Person]> {
        match self {
            Households::Found(map) => map.get(address).map(Vec::as_slice),
            Households::NotFound => None,
        }
    }
}
