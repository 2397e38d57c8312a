//! Accountability chart and People Analyzer records.
//!
//! # Invariants
//! - Accountability seats are persisted as `{role, name}` only; their ids
//!   exist for in-session editing and are regenerated on load.

use crate::model::editable_list::{lenient_entries, ListEntry};
use crate::repo::record_repo::generate_unique_id;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stored under `people`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PeopleDocument {
    #[serde(deserialize_with = "lenient_entries")]
    pub accountability_chart: Vec<Seat>,
    #[serde(deserialize_with = "lenient_entries")]
    pub people_analyzer: Vec<AnalyzedPerson>,
}

/// One seat of the accountability chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    #[serde(skip, default = "generate_unique_id")]
    pub id: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatField {
    Role,
    Name,
}

impl Seat {
    pub fn new(role: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: generate_unique_id(),
            role: role.into(),
            name: name.into(),
        }
    }
}

impl ListEntry for Seat {
    type Field = SeatField;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_field(&mut self, field: SeatField, value: String) {
        match field {
            SeatField::Role => self.role = value,
            SeatField::Name => self.name = value,
        }
    }
}

/// Gets it / Wants it / Capacity to do it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Gwc {
    pub gets_it: bool,
    pub wants_it: bool,
    pub capacity: bool,
}

/// People Analyzer row: core-value ratings plus GWC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedPerson {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Core value name to rating (`+`, `+/-`, `-`).
    #[serde(default)]
    pub values: BTreeMap<String, String>,
    #[serde(default)]
    pub gwc: Gwc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzedPersonField {
    Name,
}

impl AnalyzedPerson {
    pub fn blank(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            values: BTreeMap::new(),
            gwc: Gwc::default(),
        }
    }
}

impl ListEntry for AnalyzedPerson {
    type Field = AnalyzedPersonField;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_field(&mut self, field: AnalyzedPersonField, value: String) {
        match field {
            AnalyzedPersonField::Name => self.name = value,
        }
    }
}
