use crate::models::{SlotCount, ZoneCount};

/// Format an integer count with thousands separators.
///
/// # Examples
///
/// ```
/// use trip_core::formatting::format_count;
///
/// assert_eq!(format_count(0), "0");
/// assert_eq!(format_count(1234), "1,234");
/// assert_eq!(format_count(1234567), "1,234,567");
/// ```
pub fn format_count(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// Format an hour of day as the slot label `"HH:00"`.
///
/// # Examples
///
/// ```
/// use trip_core::formatting::format_hour;
///
/// assert_eq!(format_hour(8), "08:00");
/// assert_eq!(format_hour(23), "23:00");
/// ```
pub fn format_hour(hour: u8) -> String {
    format!("{:02}:00", hour)
}

/// Render the top-zones report as an aligned text table, one row per zone,
/// ranked first.
pub fn render_zone_table(rows: &[ZoneCount]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:<4} {:<28} {:>12}\n", "#", "Zone", "Trips"));
    for (rank, row) in rows.iter().enumerate() {
        out.push_str(&format!(
            "{:<4} {:<28} {:>12}\n",
            rank + 1,
            row.zone,
            format_count(row.count),
        ));
    }
    out
}

/// Render the top-busy-slots report as an aligned text table.
pub fn render_slot_table(rows: &[SlotCount]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<4} {:<28} {:<6} {:>12}\n",
        "#", "Zone", "Hour", "Trips"
    ));
    for (rank, row) in rows.iter().enumerate() {
        out.push_str(&format!(
            "{:<4} {:<28} {:<6} {:>12}\n",
            rank + 1,
            row.zone,
            format_hour(row.hour),
            format_count(row.count),
        ));
    }
    out
}

/// Insert a `,` before every group of three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    out
}
