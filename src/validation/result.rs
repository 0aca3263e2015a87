//! Per-field outcome of a validation pass

use super::error::FieldError;
use super::field::Field;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

/// Field → error mapping; the form is valid iff this is empty
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<Field, FieldError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Message to render beneath the field, if it failed
    pub fn message(&self, field: Field) -> Option<&str> {
        self.get(field).map(|e| e.message.as_str())
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// Record a failure, replacing any earlier one for the same field
    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.errors.insert(field, error);
    }

    pub fn remove(&mut self, field: Field) -> Option<FieldError> {
        self.errors.remove(&field)
    }

    /// Set or clear a single field's entry
    pub fn update(&mut self, field: Field, error: Option<FieldError>) {
        match error {
            Some(error) => self.insert(field, error),
            None => {
                self.remove(field);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.errors.iter().map(|(field, error)| (*field, error))
    }

    /// First failing input in display order
    pub fn first_invalid(&self) -> Option<Field> {
        Field::INPUTS.into_iter().find(|f| self.contains(*f))
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (field, error) in self.iter() {
            map.serialize_entry(field.key(), &error.message)?;
        }
        map.end()
    }
}
