//! Per-flag value storage, seeded from the schema.

use std::collections::HashMap;

use crate::args::marshal::FlagValue;
use crate::args::schema::Schema;

/// Parsed values keyed by flag identifier.
///
/// Every declared flag has exactly one slot whose variant matches its kind.
/// The variant never changes after seeding; reads of an unknown identifier,
/// or of the wrong kind, fall back to that kind's default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueStore {
    values: HashMap<char, FlagValue>,
}

impl ValueStore {
    /// Seed one default-valued slot per schema definition.
    pub fn from_schema(schema: &Schema) -> Self {
        let values = schema
            .definitions()
            .iter()
            .map(|def| (def.id, FlagValue::default_for(def.kind)))
            .collect();
        Self { values }
    }

    /// Overwrite the slot for `id`.
    ///
    /// Returns `false` (and leaves the store untouched) if `id` is not
    /// declared or `value` is of a different kind than its slot.
    pub fn set(&mut self, id: char, value: FlagValue) -> bool {
        match self.values.get_mut(&id) {
            Some(slot) if slot.kind() == value.kind() => {
                *slot = value;
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, id: char) -> Option<&FlagValue> {
        self.values.get(&id)
    }

    pub fn boolean(&self, id: char) -> bool {
        match self.values.get(&id) {
            Some(FlagValue::Boolean(b)) => *b,
            _ => false,
        }
    }

    pub fn integer(&self, id: char) -> i32 {
        match self.values.get(&id) {
            Some(FlagValue::Integer(n)) => *n,
            _ => 0,
        }
    }

    pub fn text(&self, id: char) -> &str {
        match self.values.get(&id) {
            Some(FlagValue::Text(s)) => s.as_str(),
            _ => "",
        }
    }
}
