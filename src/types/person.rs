//! Resident record

use serde::{Deserialize, Serialize};

/// A resident living at an address covered (or not) by a fire station
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Store-assigned identity
    pub id: u64,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    /// Free-text join key, compared by exact string equality
    pub address: String,
    pub city: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    pub age: u32,
    #[serde(default)]
    pub medications: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
}

impl Person {
    /// Create a person with no contact email and an empty medical record
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
        phone: impl Into<String>,
        age: u32,
    ) -> Self {
        Self {
            id: 0,
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: address.into(),
            city: city.into(),
            phone: phone.into(),
            email: None,
            age,
            medications: Vec::new(),
            allergies: Vec::new(),
        }
    }

    /// Set the contact email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set medications and allergies
    pub fn with_medical(mut self, medications: Vec<String>, allergies: Vec<String>) -> Self {
        self.medications = medications;
        self.allergies = allergies;
        self
    }

    /// Email if present and non-empty
    pub fn contact_email(&self) -> Option<&str> {
        self.email.as_deref().filter(|email| !email.is_empty())
    }
}
