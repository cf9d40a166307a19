use chrono::{NaiveDate, NaiveDateTime};

/// Textual timestamp format used on the wire: `YYYY-MM-DD HH:MM:SS`.
pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Lower bound used when a range query omits its start.
pub const MIN: NaiveDateTime = ymd_hms(1, 1, 1, 0, 0, 0);

/// Upper bound used when a range query omits its end.
pub const MAX: NaiveDateTime = ymd_hms(9999, 12, 31, 23, 59, 59);

/// Timestamp assigned to files created without one.
pub const FILE_DEFAULT: NaiveDateTime = ymd_hms(1900, 1, 1, 0, 0, 0);

const fn ymd_hms(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> NaiveDateTime {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => match date.and_hms_opt(hour, min, sec) {
            Some(dt) => dt,
            None => panic!("invalid time of day"),
        },
        None => panic!("invalid calendar date"),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp '{input}': expected YYYY-MM-DD HH:MM:SS")]
pub struct TimestampError {
    pub input: String,
}

/// Parse a timestamp in the fixed wire format.
pub fn parse(input: &str) -> Result<NaiveDateTime, TimestampError> {
    NaiveDateTime::parse_from_str(input, FORMAT).map_err(|_| TimestampError {
        input: input.to_string(),
    })
}

/// Render a timestamp in the fixed wire format.
pub fn format(ts: &NaiveDateTime) -> String {
    ts.format(FORMAT).to_string()
}

/// Serializer for `#[serde(serialize_with = "common::timestamp::serialize")]`.
pub fn serialize<S>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&format(ts))
}
