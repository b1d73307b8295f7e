//! Record types shared by the engine and its export collaborators

use serde::{Deserialize, Serialize};

/// Records produced by one generation cycle
pub const PAGE_SIZE: usize = 10;

/// One fake personal record
///
/// `index` is the 1-based position in the accumulated sequence and never
/// changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub index: u64,
    pub name: String,
    pub address: String,
    pub phone: String,
}

/// Field of a record targeted by a corruption pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    Name,
    Address,
    Phone,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Address, Field::Phone];
}

impl Record {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Address => &self.address,
            Field::Phone => &self.phone,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Address => &mut self.address,
            Field::Phone => &mut self.phone,
        }
    }
}

/// Ordered records from a single generation cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordPage {
    pub page: u64,
    pub records: Vec<Record>,
}

/// Owned copy of the engine's accumulated state, for export collaborators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub region: String,
    pub error_rate: u32,
    pub base_seed: u64,
    pub page: u64,
    pub records: Vec<Record>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_accessors() {
        let mut record = Record {
            index: 1,
            name: "Jane Doe".to_string(),
            address: "Austin, 12 Main Street".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
        };

        assert_eq!(record.field(Field::Address), "Austin, 12 Main Street");
        record.field_mut(Field::Name).push('x');
        assert_eq!(record.name, "Jane Doex");
    }
}
