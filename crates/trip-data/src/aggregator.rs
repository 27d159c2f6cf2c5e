//! Per-zone and per-slot trip tallies with top-k ranking.

use std::collections::HashMap;

use trip_core::models::{SlotCount, ZoneCount};

// ── TripAggregator ────────────────────────────────────────────────────────────

/// Running tallies over one ingestion pass.
///
/// Both maps are updated by the same [`TripAggregator::record`] call, so for
/// every zone the per-hour counts always sum to the zone total. Counts only
/// ever increase; the ranking queries never mutate.
#[derive(Debug, Default)]
pub struct TripAggregator {
    /// Total trips per pickup zone.
    zone_counts: HashMap<String, u64>,
    /// Trips per pickup zone per hour of day. The hour domain is bounded, so
    /// a fixed array beats a nested map.
    slot_counts: HashMap<String, [u64; 24]>,
}

impl TripAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one trip against `zone` at `hour`.
    ///
    /// `hour` must already be validated to `[0, 23]` by the line parser.
    pub fn record(&mut self, zone: &str, hour: u8) {
        debug_assert!(hour < 24, "hour out of range: {hour}");

        *self.zone_counts.entry(zone.to_string()).or_insert(0) += 1;
        self.slot_counts.entry(zone.to_string()).or_insert([0; 24])[usize::from(hour)] += 1;
    }

    /// Total number of recorded trips across all zones.
    pub fn total_trips(&self) -> u64 {
        self.zone_counts.values().sum()
    }

    /// Number of distinct zones seen so far.
    pub fn distinct_zones(&self) -> usize {
        self.zone_counts.len()
    }

    /// `true` when no trip has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.zone_counts.is_empty()
    }

    /// The `k` busiest zones: count descending, zone ascending on ties.
    ///
    /// Returns all zones when fewer than `k` exist; `k == 0` yields an empty
    /// vector.
    pub fn top_zones(&self, k: usize) -> Vec<ZoneCount> {
        let mut rows: Vec<ZoneCount> = self
            .zone_counts
            .iter()
            .map(|(zone, &count)| ZoneCount {
                zone: zone.clone(),
                count,
            })
            .collect();

        rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.zone.cmp(&b.zone)));
        rows.truncate(k);
        rows
    }

    /// The `k` busiest (zone, hour) slots over all slots with a non-zero
    /// count: count descending, then zone ascending, then hour ascending.
    pub fn top_busy_slots(&self, k: usize) -> Vec<SlotCount> {
        let mut rows: Vec<SlotCount> = Vec::new();
        for (zone, hours) in &self.slot_counts {
            for (hour, &count) in hours.iter().enumerate() {
                if count > 0 {
                    rows.push(SlotCount {
                        zone: zone.clone(),
                        hour: hour as u8,
                        count,
                    });
                }
            }
        }

        rows.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.zone.cmp(&b.zone))
                .then_with(|| a.hour.cmp(&b.hour))
        });
        rows.truncate(k);
        rows
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregator_with(records: &[(&str, u8)]) -> TripAggregator {
        let mut agg = TripAggregator::new();
        for &(zone, hour) in records {
            agg.record(zone, hour);
        }
        agg
    }

    // ── record ────────────────────────────────────────────────────────────────

    #[test]
    fn test_record_counts_trips() {
        let agg = aggregator_with(&[("A", 8), ("A", 9), ("B", 8)]);
        assert_eq!(agg.total_trips(), 3);
        assert_eq!(agg.distinct_zones(), 2);
        assert!(!agg.is_empty());
    }

    #[test]
    fn test_empty_aggregator() {
        let agg = TripAggregator::new();
        assert!(agg.is_empty());
        assert_eq!(agg.total_trips(), 0);
        assert!(agg.top_zones(10).is_empty());
        assert!(agg.top_busy_slots(10).is_empty());
    }

    // ── top_zones ─────────────────────────────────────────────────────────────

    #[test]
    fn test_top_zones_ranked_by_count() {
        let agg = aggregator_with(&[("A", 8), ("A", 9), ("B", 10), ("C", 1), ("C", 2), ("C", 3)]);
        let rows = agg.top_zones(10);

        assert_eq!(rows.len(), 3);
        assert_eq!((rows[0].zone.as_str(), rows[0].count), ("C", 3));
        assert_eq!((rows[1].zone.as_str(), rows[1].count), ("A", 2));
        assert_eq!((rows[2].zone.as_str(), rows[2].count), ("B", 1));
    }

    #[test]
    fn test_top_zones_ties_break_lexicographically() {
        let agg = aggregator_with(&[("Delta", 1), ("Alpha", 2), ("Charlie", 3), ("Bravo", 4)]);
        let rows = agg.top_zones(10);
        let zones: Vec<&str> = rows.iter().map(|r| r.zone.as_str()).collect();
        assert_eq!(zones, vec!["Alpha", "Bravo", "Charlie", "Delta"]);
    }

    #[test]
    fn test_top_zones_truncates_to_k() {
        let agg = aggregator_with(&[("A", 0), ("B", 0), ("C", 0), ("D", 0)]);

        assert_eq!(agg.top_zones(0).len(), 0);
        assert_eq!(agg.top_zones(2).len(), 2);
        assert_eq!(agg.top_zones(4).len(), 4);
        assert_eq!(agg.top_zones(99).len(), 4);

        // The k-prefix equals the head of the full ranking.
        let full = agg.top_zones(99);
        assert_eq!(agg.top_zones(2), full[..2].to_vec());
    }

    #[test]
    fn test_top_zones_is_idempotent() {
        let agg = aggregator_with(&[("A", 8), ("B", 8), ("A", 9)]);
        assert_eq!(agg.top_zones(10), agg.top_zones(10));
        assert_eq!(agg.top_busy_slots(10), agg.top_busy_slots(10));
    }

    #[test]
    fn test_ranking_independent_of_insertion_order() {
        let forward = aggregator_with(&[("A", 8), ("B", 8), ("B", 9), ("C", 9)]);
        let shuffled = aggregator_with(&[("C", 9), ("B", 9), ("A", 8), ("B", 8)]);

        assert_eq!(forward.top_zones(10), shuffled.top_zones(10));
        assert_eq!(forward.top_busy_slots(10), shuffled.top_busy_slots(10));
    }

    // ── top_busy_slots ────────────────────────────────────────────────────────

    #[test]
    fn test_top_busy_slots_ranking_and_tie_breaks() {
        let agg = aggregator_with(&[("B", 9), ("B", 9), ("A", 17), ("A", 17), ("A", 8), ("B", 8)]);
        let rows = agg.top_busy_slots(10);

        // Counts of 2 first (zone A before B), then count-1 slots by zone
        // then hour.
        let slots: Vec<(&str, u8, u64)> = rows
            .iter()
            .map(|r| (r.zone.as_str(), r.hour, r.count))
            .collect();
        assert_eq!(
            slots,
            vec![("A", 17, 2), ("B", 9, 2), ("A", 8, 1), ("B", 8, 1)]
        );
    }

    #[test]
    fn test_top_busy_slots_skips_zero_hours() {
        let agg = aggregator_with(&[("A", 8)]);
        let rows = agg.top_busy_slots(100);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].hour, 8);
    }

    #[test]
    fn test_slot_counts_conserve_zone_totals() {
        let agg = aggregator_with(&[
            ("A", 8),
            ("A", 8),
            ("A", 12),
            ("B", 0),
            ("B", 23),
            ("C", 5),
        ]);

        for zone_row in agg.top_zones(usize::MAX) {
            let slot_sum: u64 = agg
                .top_busy_slots(usize::MAX)
                .iter()
                .filter(|s| s.zone == zone_row.zone)
                .map(|s| s.count)
                .sum();
            assert_eq!(slot_sum, zone_row.count, "zone {}", zone_row.zone);
        }
    }
}
