//! Domain identifiers and their storage keys.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Storage key of the Vision/Traction Organizer document.
pub const VISION_KEY: &str = "vision";
pub const PEOPLE_KEY: &str = "people";
pub const SCORECARD_KEY: &str = "scorecard";
pub const ISSUES_KEY: &str = "issues";
pub const PROCESSES_KEY: &str = "processes";
pub const ROCKS_KEY: &str = "rocks";
pub const COMPANY_SETTINGS_KEY: &str = "companySettings";

/// One of the six scored methodology areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Vision,
    People,
    /// Scorecard measurables.
    Data,
    Issues,
    Process,
    /// Quarterly rocks.
    Traction,
}

impl Domain {
    /// Fixed dashboard order; the overall score averages over exactly these.
    pub const ALL: [Domain; 6] = [
        Domain::Vision,
        Domain::People,
        Domain::Data,
        Domain::Issues,
        Domain::Process,
        Domain::Traction,
    ];

    /// Dashboard identifier (`vision`, `people`, `data`, ...).
    pub fn id(self) -> &'static str {
        match self {
            Self::Vision => "vision",
            Self::People => "people",
            Self::Data => "data",
            Self::Issues => "issues",
            Self::Process => "process",
            Self::Traction => "traction",
        }
    }

    /// Key the domain's record is persisted under.
    pub fn storage_key(self) -> &'static str {
        match self {
            Self::Vision => VISION_KEY,
            Self::People => PEOPLE_KEY,
            Self::Data => SCORECARD_KEY,
            Self::Issues => ISSUES_KEY,
            Self::Process => PROCESSES_KEY,
            Self::Traction => ROCKS_KEY,
        }
    }

    /// Parses a dashboard identifier. Storage keys are accepted as aliases.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "vision" => Some(Self::Vision),
            "people" => Some(Self::People),
            "data" | "scorecard" => Some(Self::Data),
            "issues" => Some(Self::Issues),
            "process" | "processes" => Some(Self::Process),
            "traction" | "rocks" => Some(Self::Traction),
            _ => None,
        }
    }
}

impl Display for Domain {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
