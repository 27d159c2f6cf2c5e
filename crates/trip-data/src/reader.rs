//! Trip record file discovery and ingestion.
//!
//! Streams record files line by line into a [`TripAggregator`]. The policy
//! is deliberately lenient: an unopenable path leaves the tallies untouched
//! and a malformed line is skipped, with nothing surfaced beyond a log line.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use trip_core::models::TimestampLayout;

use crate::aggregator::TripAggregator;
use crate::parser::parse_line;

/// Header sentinel: a first line containing this token is skipped without
/// ever being parsed as data.
const HEADER_SENTINEL: &str = "TripID";

// ── Public API ────────────────────────────────────────────────────────────────

/// Find all `.csv` files recursively under `data_path`, sorted by path.
pub fn find_trip_files(data_path: &Path) -> Vec<PathBuf> {
    if !data_path.exists() {
        warn!("Data path does not exist: {}", data_path.display());
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(data_path)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.file_type().is_file()
                && entry
                    .path()
                    .extension()
                    .map(|ext| ext == "csv")
                    .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}

/// Ingest one trip record file into `agg`.
///
/// The first line is dropped unparsed when it contains the header sentinel;
/// otherwise it is treated as a candidate data row. A file that cannot be
/// opened is a no-op.
pub fn ingest_file(path: &Path, layout: TimestampLayout, agg: &mut TripAggregator) {
    let file = match std::fs::File::open(path) {
        Ok(f) => f,
        Err(e) => {
            warn!("Failed to open {}: {}", path.display(), e);
            return;
        }
    };

    let reader = std::io::BufReader::new(file);
    let mut first_line = true;
    let mut lines_read = 0u64;
    let mut records_kept = 0u64;

    for line_result in reader.lines() {
        let line = match line_result {
            Ok(l) => l,
            Err(_) => continue,
        };

        if first_line {
            first_line = false;
            if line.contains(HEADER_SENTINEL) {
                continue;
            }
        }

        lines_read += 1;
        if let Some(record) = parse_line(&line, layout) {
            agg.record(&record.zone, record.hour);
            records_kept += 1;
        }
    }

    debug!(
        "File {}: {} data lines, {} records kept, {} skipped",
        path.display(),
        lines_read,
        records_kept,
        lines_read - records_kept,
    );
}

/// Ingest a single file, or every `.csv` file under a directory in sorted
/// order.
pub fn ingest_path(path: &Path, layout: TimestampLayout, agg: &mut TripAggregator) {
    if path.is_dir() {
        let files = find_trip_files(path);
        if files.is_empty() {
            warn!("No trip record files found in {}", path.display());
            return;
        }
        for file in &files {
            ingest_file(file, layout, agg);
        }
        info!(
            "Ingested {} trips across {} zones from {} files",
            agg.total_trips(),
            agg.distinct_zones(),
            files.len()
        );
    } else {
        ingest_file(path, layout, agg);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
