//! Core use-case services.
//!
//! # Responsibility
//! - Turn stored domain records into dashboard-facing read models.
//! - Stay storage-agnostic by depending only on `RecordStore`.

pub mod progress_service;
