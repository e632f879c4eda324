//! Bidirectional name/id lookup tables
//!
//! Built once at client construction from a full listing of a resource kind
//! (companies, asset layouts) and never refreshed. Records are plain JSON
//! objects; anything without both a `name` and a numeric `id` is skipped.

use serde_json::Value;
use std::collections::HashMap;

/// Bidirectional mapping between a resource's display name and its id.
///
/// Both directions stay in lockstep: for every entry,
/// `table.name(table.id(name)?) == name` and `table.id(table.name(id)?) == id`.
#[derive(Debug, Clone, Default)]
pub struct LookupTable {
    by_name: HashMap<String, i64>,
    by_id: HashMap<i64, String>,
}

impl LookupTable {
    /// Build a table from a listing of records
    pub fn from_records(records: &[Value]) -> Self {
        let mut table = Self::default();
        for record in records {
            let name = record.get("name").and_then(Value::as_str);
            let id = record.get("id").and_then(Value::as_i64);
            if let (Some(name), Some(id)) = (name, id) {
                table.by_name.insert(name.to_string(), id);
                table.by_id.insert(id, name.to_string());
            }
        }
        table
    }

    /// Look up a resource id by display name
    pub fn id(&self, name: &str) -> Option<i64> {
        self.by_name.get(name).copied()
    }

    /// Look up a display name by resource id
    pub fn name(&self, id: i64) -> Option<&str> {
        self.by_id.get(&id).map(String::as_str)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether the table holds no entries
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
