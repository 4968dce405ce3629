//! Address index for fast household lookups
//!
//! Maps each exact address string to the positions of the records stored
//! at it, so address joins avoid a linear scan.

use std::collections::{BTreeSet, HashMap};

/// address → positions in the backing record vector (ascending)
#[derive(Debug, Default, Clone)]
pub struct AddressIndex {
    positions: HashMap<String, Vec<usize>>,
}

impl AddressIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the index over `addresses`, one entry per record position
    pub fn build<'a>(addresses: impl IntoIterator<Item = &'a str>) -> Self {
        let mut index = Self::new();
        for (position, address) in addresses.into_iter().enumerate() {
            index.insert(address, position);
        }
        index
    }

    /// Record that `position` lives at `address`.
    ///
    /// Positions must be inserted in increasing order.
    pub fn insert(&mut self, address: &str, position: usize) {
        self.positions
            .entry(address.to_string())
            .or_default()
            .push(position);
    }

    /// Positions at one address
    pub fn lookup(&self, address: &str) -> &[usize] {
        self.positions
            .get(address)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Positions at any of `addresses`, deduplicated and in ascending order
    pub fn lookup_many(&self, addresses: &[String]) -> Vec<usize> {
        let merged: BTreeSet<usize> = addresses
            .iter()
            .flat_map(|address| self.lookup(address).iter().copied())
            .collect();
        merged.into_iter().collect()
    }

    /// Number of distinct addresses
    pub fn address_count(&self) -> usize {
        self.positions.len()
    }
}
