use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Label used when a configuration name has no usable characters left.
pub const PLACEHOLDER_NAME: &str = "Unnamed_Config";

/// `YYYYMMDD_HHMMSS`, in the time zone of the timestamp passed in.
pub const FILENAME_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Keeps only ASCII letters, digits and underscores.
pub fn sanitize_name(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

pub fn sanitize_name_or_placeholder(raw: &str) -> String {
    let sanitized = sanitize_name(raw);
    if sanitized.is_empty() {
        PLACEHOLDER_NAME.to_string()
    } else {
        sanitized
    }
}

/// Filename for the first save of a configuration:
/// `{sanitized}_{YYYYMMDD_HHMMSS}.json`.
///
/// Two saves of the same name within one second collide; the later one wins.
pub fn build_new_filename<Tz>(sanitized: &str, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("{}_{}.json", sanitized, now.format(FILENAME_TIMESTAMP_FORMAT))
}
