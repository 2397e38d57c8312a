//! Scorecard editor for the Data domain.

use crate::editor::is_filled;
use crate::model::domain::SCORECARD_KEY;
use crate::model::editable_list::EditableList;
use crate::model::scorecard::{Measurable, MeasurableField};
use crate::repo::record_repo::{generate_unique_id, RecordStore};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScorecardEditor {
    rows: EditableList<Measurable>,
}

impl ScorecardEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<S: RecordStore>(store: &S) -> Self {
        Self {
            rows: store.load_as(SCORECARD_KEY).unwrap_or_default(),
        }
    }

    pub fn rows(&self) -> &EditableList<Measurable> {
        &self.rows
    }

    /// Appends a blank measurable and returns its id.
    pub fn add_measurable(&mut self) -> String {
        let row = Measurable::blank(generate_unique_id());
        let id = row.id.clone();
        self.rows.append(row);
        id
    }

    pub fn remove_measurable(&mut self, id: &str) -> Option<Measurable> {
        self.rows.remove(id)
    }

    pub fn set_field(&mut self, id: &str, field: MeasurableField, value: impl Into<String>) -> bool {
        self.rows.set_field(id, field, value)
    }

    pub fn set_week(&mut self, id: &str, week: usize, value: impl Into<String>) -> bool {
        let value = value.into();
        let mut written = false;
        self.rows.update(id, |row| written = row.set_week(week, value));
        written
    }

    /// Drops rows without a measurable name and writes the rest.
    pub fn save<S: RecordStore>(&mut self, store: &S) {
        self.rows.retain(|row| is_filled(&row.measurable));
        store.save_as(SCORECARD_KEY, &self.rows);
    }
}
