//! Data ingestion layer for the trip report tool.
//!
//! Responsible for parsing raw trip record lines, tallying per-zone and
//! per-slot counts, and streaming record files from disk.

pub mod aggregator;
pub mod parser;
pub mod reader;

pub use trip_core as core;
