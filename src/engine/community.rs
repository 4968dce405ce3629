//! Views keyed by person name or city

use log::{debug, warn};

use crate::types::Person;

use super::AlertsEngine;

/// All persons with exactly this first and last name
pub fn person_info(engine: &AlertsEngine, first_name: &str, last_name: &str) -> Vec<Person> {
    debug!("Fetching person info for: {} {}", first_name, last_name);
    let persons = engine
        .persons
        .find_by_first_name_and_last_name(first_name, last_name);
    debug!("Number of persons found: {}", persons.len());
    persons
}

/// Non-empty emails of everyone living in `city`, in resident order
pub fn community_emails(engine: &AlertsEngine, city: &str) -> Vec<String> {
    debug!("Fetching community emails for city: {}", city);
    let persons = engine.persons.find_by_city(city);
    if persons.is_empty() {
        warn!("No persons found in city: {}", city);
        return Vec::new();
    }

    let emails: Vec<String> = persons
        .iter()
        .filter_map(|p| p.contact_email())
        .map(str::to_string)
        .collect();
    debug!("Number of emails found: {}", emails.len());
    emails
}

/// Every person in load order
pub fn all_persons(engine: &AlertsEngine) -> Vec<Person> {
    debug!("Fetching all persons");
    engine.persons.find_all()
}
