//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the namespaced key-value contract every domain persists through.
//! - Isolate SQLite query details from editors and progress aggregation.
//!
//! # Invariants
//! - Callers of `save`/`load` never observe storage errors; failures are
//!   reported through the `log` diagnostic channel.
//! - A failed write leaves the previously stored value untouched.

pub mod record_repo;
