//! Domain records for the six methodology areas plus company settings.
//!
//! # Responsibility
//! - Define the persisted JSON shapes for each domain key.
//! - Provide the ordered, id-addressed list used by every editor.
//!
//! # Invariants
//! - Entry ids are unique within their containing list.
//! - Serialized field names match the stored record layout (camelCase).

pub mod domain;
pub mod editable_list;
pub mod issue;
pub mod people;
pub mod process;
pub mod rock;
pub mod scorecard;
pub mod settings;
pub mod vision;
