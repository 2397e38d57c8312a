//! Issues list editor (newest first).

use crate::editor::is_filled;
use crate::model::domain::ISSUES_KEY;
use crate::model::editable_list::EditableList;
use crate::model::issue::{Issue, IssueField, IssueStatus};
use crate::repo::record_repo::{generate_unique_id, RecordStore};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IssuesEditor {
    issues: EditableList<Issue>,
}

impl IssuesEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<S: RecordStore>(store: &S) -> Self {
        Self {
            issues: store.load_as(ISSUES_KEY).unwrap_or_default(),
        }
    }

    pub fn issues(&self) -> &EditableList<Issue> {
        &self.issues
    }

    pub fn with_status(&self, status: IssueStatus) -> impl Iterator<Item = &Issue> {
        self.issues
            .entries()
            .iter()
            .filter(move |issue| issue.status == status)
    }

    /// Adds an open issue at the front. Blank descriptions are ignored.
    pub fn add(&mut self, description: &str) -> Option<String> {
        let description = description.trim();
        if description.is_empty() {
            return None;
        }
        let issue = Issue::new(generate_unique_id(), description);
        let id = issue.id.clone();
        self.issues.prepend(issue).then_some(id)
    }

    /// `open -> solved`. Returns whether the status changed.
    pub fn solve(&mut self, id: &str) -> bool {
        let mut changed = false;
        self.issues.update(id, |issue| changed = issue.solve());
        changed
    }

    /// `solved -> open`. Returns whether the status changed.
    pub fn reopen(&mut self, id: &str) -> bool {
        let mut changed = false;
        self.issues.update(id, |issue| changed = issue.reopen());
        changed
    }

    /// Removes the issue whatever its status.
    pub fn delete(&mut self, id: &str) -> Option<Issue> {
        self.issues.remove(id)
    }

    pub fn set_field(&mut self, id: &str, field: IssueField, value: impl Into<String>) -> bool {
        self.issues.set_field(id, field, value)
    }

    /// Issues written by [`IssuesEditor::save`].
    pub fn records(&self) -> Vec<Issue> {
        self.issues.saved_entries(|issue| is_filled(&issue.description))
    }

    pub fn save<S: RecordStore>(&self, store: &S) {
        store.save_as(ISSUES_KEY, &self.records());
    }
}
