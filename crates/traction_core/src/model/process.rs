//! Documented processes and their ordered steps.

use crate::model::editable_list::{EditableList, ListEntry};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub id: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepField {
    Description,
}

impl ProcessStep {
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
        }
    }
}

impl ListEntry for ProcessStep {
    type Field = StepField;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_field(&mut self, field: StepField, value: String) {
        match field {
            StepField::Description => self.description = value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Process {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub steps: EditableList<ProcessStep>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessField {
    Name,
}

impl Process {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            steps: EditableList::new(),
        }
    }
}

impl ListEntry for Process {
    type Field = ProcessField;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_field(&mut self, field: ProcessField, value: String) {
        match field {
            ProcessField::Name => self.name = value,
        }
    }
}
