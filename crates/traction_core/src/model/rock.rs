//! Quarterly rocks and their tri-state status.

use crate::model::editable_list::ListEntry;
use serde::{Deserialize, Serialize};

/// Rock progress, cycled by a single toggle action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RockStatus {
    #[default]
    OnTrack,
    OffTrack,
    Done,
}

impl RockStatus {
    /// `on-track -> off-track -> done -> on-track`.
    pub fn next(self) -> Self {
        match self {
            Self::OnTrack => Self::OffTrack,
            Self::OffTrack => Self::Done,
            Self::Done => Self::OnTrack,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::OnTrack => "on-track",
            Self::OffTrack => "off-track",
            Self::Done => "done",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rock {
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub status: RockStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RockField {
    Description,
    Owner,
}

impl Rock {
    /// Creates an on-track rock.
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        owner: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            owner: owner.into(),
            status: RockStatus::OnTrack,
        }
    }

    /// Advances the status one step and returns the new value.
    pub fn toggle_status(&mut self) -> RockStatus {
        self.status = self.status.next();
        self.status
    }
}

impl ListEntry for Rock {
    type Field = RockField;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_field(&mut self, field: RockField, value: String) {
        match field {
            RockField::Description => self.description = value,
            RockField::Owner => self.owner = value,
        }
    }
}
