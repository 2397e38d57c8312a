//! Core logic for the Traction planning tracker.
//! Owns record persistence, domain editors and dashboard progress scoring.

pub mod db;
pub mod editor;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use editor::issues::IssuesEditor;
pub use editor::people::PeopleEditor;
pub use editor::process::ProcessEditor;
pub use editor::rocks::RocksEditor;
pub use editor::scorecard::ScorecardEditor;
pub use editor::vision::{VisionEditor, VisionField, VisionList};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::domain::Domain;
pub use model::editable_list::{EditableList, ListEntry, TextItem, TextItemField};
pub use model::issue::{Issue, IssueField, IssueStatus};
pub use model::rock::{Rock, RockField, RockStatus};
pub use model::settings::CompanySettings;
pub use repo::record_repo::{
    generate_unique_id, LoadOutcome, RecordStore, SqliteRecordStore, StoreError, StoreOptions,
    StoreResult,
};
pub use service::progress_service::{
    DashboardSnapshot, DomainProgress, ProgressBand, ProgressService,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
