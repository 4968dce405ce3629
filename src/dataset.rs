//! Bootstrap dataset loader
//!
//! Reads the JSON document holding the `firestations` and `persons` arrays
//! and turns it into the two in-memory stores. This runs once at startup,
//! before the first query.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use log::info;
use serde::{Deserialize, Deserializer};

use crate::engine::AlertsEngine;
use crate::store::{InMemoryPersonStore, InMemoryStationStore};
use crate::types::{AlertsError, AlertsResult, FireStation, Person};

/// Station coverage entry as it appears in the dataset
#[derive(Debug, Clone, Deserialize)]
pub struct StationRecord {
    pub address: String,
    #[serde(deserialize_with = "station_number")]
    pub station: u32,
}

/// Resident entry as it appears in the dataset
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub medications: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
}

/// The whole bootstrap document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub firestations: Vec<StationRecord>,
    #[serde(default)]
    pub persons: Vec<PersonRecord>,
}

/// Accept `"station": 3` as well as `"station": "3"`
fn station_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u32),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid station number '{}'", s))),
    }
}

impl From<StationRecord> for FireStation {
    fn from(record: StationRecord) -> Self {
        FireStation::new(record.address, record.station)
    }
}

impl From<PersonRecord> for Person {
    fn from(record: PersonRecord) -> Self {
        Person {
            id: 0,
            first_name: record.first_name,
            last_name: record.last_name,
            address: record.address,
            city: record.city,
            phone: record.phone,
            email: record.email,
            age: record.age,
            medications: record.medications,
            allergies: record.allergies,
        }
    }
}

impl Dataset {
    /// Parse a dataset from a JSON string
    pub fn from_json(content: &str) -> AlertsResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read and parse a dataset file
    pub fn load<P: AsRef<Path>>(path: P) -> AlertsResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(AlertsError::DatasetNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let dataset = Self::from_json(&content)?;
        info!(
            "Loaded {} fire stations and {} persons from {}",
            dataset.firestations.len(),
            dataset.persons.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Build both stores, keeping record order
    pub fn into_stores(self) -> (InMemoryPersonStore, InMemoryStationStore) {
        let persons = self.persons.into_iter().map(Person::from).collect();
        let stations = self.firestations.into_iter().map(FireStation::from).collect();
        (
            InMemoryPersonStore::new(persons),
            InMemoryStationStore::new(stations),
        )
    }

    /// Build an engine over freshly built stores
    pub fn into_engine(self) -> AlertsEngine {
        let (persons, stations) = self.into_stores();
        AlertsEngine::new(Arc::new(persons), Arc::new(stations))
    }
}
