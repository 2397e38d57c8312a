//! Ordered, id-addressed entry collection shared by all list editors.
//!
//! # Responsibility
//! - Append/prepend new entries, remove and mutate entries by id.
//! - Produce the filtered entry set written on a bulk save.
//!
//! # Invariants
//! - No two entries share an id; inserting a duplicate id is refused.
//! - Operations on an unknown id are no-ops.
//! - Loading drops individual malformed entries, never the whole list.

use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashSet;

/// Entry stored in an [`EditableList`].
pub trait ListEntry {
    /// Named text field that the form layer can edit in place.
    type Field: Copy;

    fn id(&self) -> &str;

    fn set_field(&mut self, field: Self::Field, value: String);
}

/// Ordered mutable collection of list entries.
///
/// Serialized as a plain JSON array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EditableList<T> {
    entries: Vec<T>,
}

impl<T> Default for EditableList<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<'de, T> Deserialize<'de> for EditableList<T>
where
    T: DeserializeOwned + ListEntry,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        lenient_entries(deserializer).map(Self::from_entries)
    }
}

/// Reads a JSON array entry by entry.
///
/// Entries that do not fit `T` are logged and skipped; `null` reads as an
/// empty list. Usable as `#[serde(deserialize_with = "lenient_entries")]`.
pub fn lenient_entries<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    let mut entries = Vec::with_capacity(raw.len());
    for (index, value) in raw.into_iter().enumerate() {
        match serde_json::from_value(value) {
            Ok(entry) => entries.push(entry),
            Err(err) => warn!(
                "event=list_load module=model status=warn reason=invalid_entry index={} error={}",
                index, err
            ),
        }
    }
    Ok(entries)
}

impl<T: ListEntry> EditableList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from loaded entries, keeping the first entry per id.
    pub fn from_entries(entries: Vec<T>) -> Self {
        let mut seen = HashSet::new();
        let mut kept = Vec::with_capacity(entries.len());
        for entry in entries {
            if seen.insert(entry.id().to_string()) {
                kept.push(entry);
            } else {
                warn!(
                    "event=list_load module=model status=warn reason=duplicate_id id={}",
                    entry.id()
                );
            }
        }
        Self { entries: kept }
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    /// Mutable access for bulk edits that do not change ids.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.entries.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Adds `entry` at the end. Returns `false` if its id is already taken.
    pub fn append(&mut self, entry: T) -> bool {
        if self.contains(entry.id()) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Adds `entry` at the front. Returns `false` if its id is already taken.
    pub fn prepend(&mut self, entry: T) -> bool {
        if self.contains(entry.id()) {
            return false;
        }
        self.entries.insert(0, entry);
        true
    }

    /// Removes and returns the entry with `id`, if any.
    pub fn remove(&mut self, id: &str) -> Option<T> {
        let index = self.entries.iter().position(|entry| entry.id() == id)?;
        Some(self.entries.remove(index))
    }

    /// Applies `change` to the entry with `id`. Returns whether it was found.
    pub fn update(&mut self, id: &str, change: impl FnOnce(&mut T)) -> bool {
        match self.entries.iter_mut().find(|entry| entry.id() == id) {
            Some(entry) => {
                change(entry);
                true
            }
            None => false,
        }
    }

    /// Sets one named field on the entry with `id`.
    pub fn set_field(&mut self, id: &str, field: T::Field, value: impl Into<String>) -> bool {
        let value = value.into();
        self.update(id, |entry| entry.set_field(field, value))
    }

    /// Entries that pass `is_valid`, in order, as written by a bulk save.
    pub fn saved_entries(&self, is_valid: impl Fn(&T) -> bool) -> Vec<T>
    where
        T: Clone,
    {
        self.entries
            .iter()
            .filter(|entry| is_valid(entry))
            .cloned()
            .collect()
    }

    /// Drops entries that fail `is_valid`.
    pub fn retain(&mut self, is_valid: impl Fn(&T) -> bool) {
        self.entries.retain(|entry| is_valid(entry));
    }
}

/// Free-text list item (core values, uniques, three-year picture bullets).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextItem {
    pub id: String,
    pub text: String,
}

/// Editable fields of a [`TextItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextItemField {
    Text,
}

impl TextItem {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

impl ListEntry for TextItem {
    type Field = TextItemField;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_field(&mut self, field: TextItemField, value: String) {
        match field {
            TextItemField::Text => self.text = value,
        }
    }
}
