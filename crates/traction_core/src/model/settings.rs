//! Company settings record.

use serde::{Deserialize, Serialize};

/// Stored under `companySettings`. The logo is an opaque data URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanySettings {
    pub name: String,
    pub logo: Option<String>,
}
