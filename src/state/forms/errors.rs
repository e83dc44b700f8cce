//! Per-field error map and touched-field tracking

use super::field::Field;
use crate::validation::ValidationError;
use std::collections::{btree_map, BTreeMap, BTreeSet};

/// Current validation failure for each invalid field, in focus order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, ValidationError>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    /// User-facing message for a field, if it is invalid
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    /// Store or clear the error for a field
    pub fn set(&mut self, field: Field, error: Option<ValidationError>) {
        match error {
            Some(error) => {
                self.errors.insert(field, error);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Field, ValidationError> {
        self.errors.iter()
    }

    /// Banner text listing the first three failures as `field: message`
    pub fn summary(&self) -> String {
        if self.is_empty() {
            return "Please fill in all required fields correctly.".to_string();
        }
        let details: Vec<String> = self
            .iter()
            .take(3)
            .map(|(field, error)| format!("{field}: {error}"))
            .collect();
        format!("Please fix the following errors: {}", details.join(", "))
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = (&'a Field, &'a ValidationError);
    type IntoIter = btree_map::Iter<'a, Field, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Fields the user has focused and then left
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TouchedSet {
    fields: BTreeSet<Field>,
}

impl TouchedSet {
    pub fn insert(&mut self, field: Field) -> bool {
        self.fields.insert(field)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.fields.contains(&field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
