use serde::{Deserialize, Serialize};

/// Which dialect the pickup-timestamp field uses.
///
/// The two observed record dialects disagree on the timestamp field and
/// carry no version marker, so the layout is fixed per run via configuration
/// rather than guessed per line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimestampLayout {
    /// Combined `YYYY-MM-DD HH:MM:SS`-like string; the hour sits at a fixed
    /// byte offset. This is the default dialect.
    DateTime,
    /// Legacy dialect: a date token, a space, then a standalone `HH:MM`
    /// time token.
    TimeOfDay,
}

impl TimestampLayout {
    /// Resolve a settings string (`"datetime"` / `"time-of-day"`) to a layout.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "datetime" => Some(Self::DateTime),
            "time-of-day" => Some(Self::TimeOfDay),
            _ => None,
        }
    }
}

/// One successfully parsed trip record.
///
/// Ephemeral: produced by the line parser, consumed immediately by the
/// aggregator, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripRecord {
    /// Pickup zone identifier, whitespace-trimmed, non-empty.
    pub zone: String,
    /// Pickup hour of day, always in `[0, 23]`.
    pub hour: u8,
}

/// Report row: one pickup zone and its total trip count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneCount {
    pub zone: String,
    pub count: u64,
}

/// Report row: one (zone, hour-of-day) slot and its trip count.
///
/// Only emitted for slots with a count greater than zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotCount {
    pub zone: String,
    pub hour: u8,
    pub count: u64,
}

/// Combined output of one reporting run, serialized for `--format json`.
#[derive(Debug, Clone, Serialize)]
pub struct TripReport {
    pub top_zones: Vec<ZoneCount>,
    pub top_slots: Vec<SlotCount>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_from_name() {
        assert_eq!(
            TimestampLayout::from_name("datetime"),
            Some(TimestampLayout::DateTime)
        );
        assert_eq!(
            TimestampLayout::from_name("time-of-day"),
            Some(TimestampLayout::TimeOfDay)
        );
        assert_eq!(TimestampLayout::from_name("guess"), None);
    }

    #[test]
    fn test_layout_serde_round_trip() {
        let json = serde_json::to_string(&TimestampLayout::TimeOfDay).unwrap();
        assert_eq!(json, "\"time-of-day\"");
        let back: TimestampLayout = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TimestampLayout::TimeOfDay);
    }

    #[test]
    fn test_report_serializes_rows() {
        let report = TripReport {
            top_zones: vec![ZoneCount {
                zone: "Midtown".to_string(),
                count: 42,
            }],
            top_slots: vec![SlotCount {
                zone: "Midtown".to_string(),
                hour: 8,
                count: 17,
            }],
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["top_zones"][0]["zone"], "Midtown");
        assert_eq!(value["top_slots"][0]["hour"], 8);
    }
}
