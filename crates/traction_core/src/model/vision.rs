//! Vision/Traction Organizer (VTO) document.

use crate::model::editable_list::lenient_entries;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Names of the eight VTO sections, in organizer order.
pub const VTO_SECTIONS: [&str; 8] = [
    "coreValues",
    "coreFocus",
    "tenYearTarget",
    "marketingStrategy",
    "threeYearPicture",
    "oneYearPlan",
    "rocks",
    "issues",
];

/// Stored under `vision`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisionDocument {
    pub vto: Vto,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Vto {
    #[serde(deserialize_with = "lenient_entries")]
    pub core_values: Vec<String>,
    pub core_focus: CoreFocus,
    pub ten_year_target: String,
    pub marketing_strategy: MarketingStrategy,
    pub three_year_picture: ThreeYearPicture,
    /// Free-form until the one-year plan gets its own editor.
    pub one_year_plan: Map<String, Value>,
    #[serde(deserialize_with = "lenient_entries")]
    pub rocks: Vec<String>,
    #[serde(deserialize_with = "lenient_entries")]
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreFocus {
    pub passion: String,
    pub niche: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarketingStrategy {
    pub target_market: String,
    #[serde(deserialize_with = "lenient_entries")]
    pub three_uniques: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThreeYearPicture {
    pub future_date: String,
    pub revenue: String,
    pub profit: String,
    pub measurables: String,
    #[serde(deserialize_with = "lenient_entries")]
    pub looks_like: Vec<String>,
}
