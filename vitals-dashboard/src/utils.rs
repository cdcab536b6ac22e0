use chrono::{TimeZone, Utc};

/// Shown in place of a label when a reading carries a timestamp the
/// calendar cannot represent
const BLANK_LABEL: &str = "--:--:--";

/// Render epoch milliseconds as a `HH:MM:SS` chart label
pub(crate) fn format_timestamp(millis: i64) -> String {
    Utc.timestamp_millis_opt(millis)
        .single()
        .map(|moment| moment.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| BLANK_LABEL.to_string())
}
