//! Per-domain editor state.
//!
//! # Responsibility
//! - Hold the in-session entries of one domain as an explicit value owned
//!   by the caller, never as process-wide state.
//! - Load the domain record (falling back to defaults when absent or
//!   malformed) and write it back wholesale on save.
//!
//! # Invariants
//! - `save` replaces the whole stored record; there is no merge.
//! - Entries failing the domain's validity rule are dropped at save time.
//! - A malformed entry in a stored list is skipped on load; its well-formed
//!   siblings load and are written back by the next save.

pub mod issues;
pub mod people;
pub mod process;
pub mod rocks;
pub mod scorecard;
pub mod vision;

fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}
