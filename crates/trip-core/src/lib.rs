//! Shared types for the trip report tool.
//!
//! Holds the record and report-row models, the error type, CLI settings with
//! persisted last-used parameters, and plain-text report formatting.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
