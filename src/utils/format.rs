// src/utils/format.rs
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

/// Timestamp layout used in every store: `DD/MM/YY HH:MM`, 24-hour clock.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%y %H:%M";

pub fn format_timestamp(time: DateTime<Local>) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

// Parse a stored timestamp back into local time (minute precision)
pub fn parse_timestamp(s: &str) -> Option<DateTime<Local>> {
    let naive = NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT).ok()?;
    Local.from_local_datetime(&naive).earliest()
}

// Truncate a string if it's too long
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

// Mask a password for display, keeping its length visible
pub fn mask(s: &str) -> String {
    "*".repeat(s.chars().count())
}
