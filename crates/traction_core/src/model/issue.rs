//! Issues list entries.
//!
//! # Invariants
//! - Status moves only `open -> solved` (solve) and `solved -> open` (reopen).

use crate::model::editable_list::ListEntry;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueStatus {
    #[default]
    Open,
    Solved,
}

/// One identified issue awaiting (or past) resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: IssueStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueField {
    Description,
}

impl Issue {
    /// Creates an open issue.
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            status: IssueStatus::Open,
        }
    }

    /// `open -> solved`. Returns `false` when the issue was not open.
    pub fn solve(&mut self) -> bool {
        if self.status != IssueStatus::Open {
            return false;
        }
        self.status = IssueStatus::Solved;
        true
    }

    /// `solved -> open`. Returns `false` when the issue was not solved.
    pub fn reopen(&mut self) -> bool {
        if self.status != IssueStatus::Solved {
            return false;
        }
        self.status = IssueStatus::Open;
        true
    }
}

impl ListEntry for Issue {
    type Field = IssueField;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_field(&mut self, field: IssueField, value: String) {
        match field {
            IssueField::Description => self.description = value,
        }
    }
}
