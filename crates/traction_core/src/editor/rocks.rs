//! Rocks editor (newest first).

use crate::editor::is_filled;
use crate::model::domain::ROCKS_KEY;
use crate::model::editable_list::EditableList;
use crate::model::rock::{Rock, RockField, RockStatus};
use crate::repo::record_repo::{generate_unique_id, RecordStore};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RocksEditor {
    rocks: EditableList<Rock>,
}

impl RocksEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<S: RecordStore>(store: &S) -> Self {
        Self {
            rocks: store.load_as(ROCKS_KEY).unwrap_or_default(),
        }
    }

    pub fn rocks(&self) -> &EditableList<Rock> {
        &self.rocks
    }

    /// Adds an on-track rock at the front. Blank descriptions are ignored.
    pub fn add(&mut self, description: &str, owner: &str) -> Option<String> {
        let description = description.trim();
        if description.is_empty() {
            return None;
        }
        let rock = Rock::new(generate_unique_id(), description, owner.trim());
        let id = rock.id.clone();
        self.rocks.prepend(rock).then_some(id)
    }

    /// Advances the rock one status step; `None` if the id is unknown.
    pub fn toggle_status(&mut self, id: &str) -> Option<RockStatus> {
        let mut status = None;
        self.rocks.update(id, |rock| status = Some(rock.toggle_status()));
        status
    }

    pub fn delete(&mut self, id: &str) -> Option<Rock> {
        self.rocks.remove(id)
    }

    pub fn set_field(&mut self, id: &str, field: RockField, value: impl Into<String>) -> bool {
        self.rocks.set_field(id, field, value)
    }

    pub fn records(&self) -> Vec<Rock> {
        self.rocks.saved_entries(|rock| is_filled(&rock.description))
    }

    pub fn save<S: RecordStore>(&self, store: &S) {
        store.save_as(ROCKS_KEY, &self.records());
    }
}
