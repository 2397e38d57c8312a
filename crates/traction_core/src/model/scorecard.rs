//! Scorecard measurables (the Data domain).

use crate::model::editable_list::ListEntry;
use serde::{Deserialize, Serialize};

/// Number of weekly columns a new measurable starts with.
pub const SCORECARD_WEEKS: usize = 13;
/// Upper bound on weekly columns a row may grow to (two years).
pub const MAX_SCORECARD_WEEKS: usize = 104;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurable {
    pub id: String,
    #[serde(default)]
    pub measurable: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub goal: String,
    /// One entry per tracked week, oldest first.
    #[serde(default)]
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasurableField {
    Measurable,
    Owner,
    Goal,
}

impl Measurable {
    /// Creates a blank measurable with [`SCORECARD_WEEKS`] empty weeks.
    pub fn blank(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            measurable: String::new(),
            owner: String::new(),
            goal: String::new(),
            values: vec![String::new(); SCORECARD_WEEKS],
        }
    }

    /// Sets the value for week `index`, growing the row when needed.
    ///
    /// Returns `false` without touching the row when `index` is not below
    /// [`MAX_SCORECARD_WEEKS`].
    pub fn set_week(&mut self, index: usize, value: impl Into<String>) -> bool {
        if index >= MAX_SCORECARD_WEEKS {
            return false;
        }
        if index >= self.values.len() {
            self.values.resize(index + 1, String::new());
        }
        self.values[index] = value.into();
        true
    }
}

impl ListEntry for Measurable {
    type Field = MeasurableField;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_field(&mut self, field: MeasurableField, value: String) {
        match field {
            MeasurableField::Measurable => self.measurable = value,
            MeasurableField::Owner => self.owner = value,
            MeasurableField::Goal => self.goal = value,
        }
    }
}
