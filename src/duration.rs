//! Human-readable durations for configuration, such as "2000ms" or "5s".

use std::time::Duration;

use anyhow::{Context, Result};
use serde::{de, Deserialize, Deserializer, Serializer};

const UNITS: [(&str, u64); 5] = [
    ("ms", 1),
    ("s", 1_000),
    ("m", 60 * 1_000),
    ("h", 60 * 60 * 1_000),
    ("d", 24 * 60 * 60 * 1_000),
];

/// Parse a duration string like "2000ms", "5s", "1m".
///
/// Supported units are `ms`, `s`, `m`, `h` and `d`. The input is
/// case-insensitive and whitespace is trimmed.
///
/// # Examples
///
/// ```
/// use networth::duration::parse_duration;
/// use std::time::Duration;
///
/// assert_eq!(parse_duration("2000ms").unwrap(), Duration::from_millis(2000));
/// assert_eq!(parse_duration("5s").unwrap(), Duration::from_secs(5));
/// ```
pub fn parse_duration(s: &str) -> Result<Duration> {
    let s = s.trim().to_lowercase();

    // "ms" is listed first so it wins over "s".
    let (num, millis_per_unit) = UNITS
        .iter()
        .find_map(|(suffix, factor)| s.strip_suffix(*suffix).map(|num| (num, *factor)))
        .context("Duration must end with ms, s, m, h, or d")?;

    let num: u64 = num.parse().with_context(|| "Invalid number in duration")?;
    let millis = num
        .checked_mul(millis_per_unit)
        .context("Duration is too large")?;

    Ok(Duration::from_millis(millis))
}

/// Format a duration using the largest unit that divides it evenly.
///
/// ```
/// use networth::duration::format_duration;
/// use std::time::Duration;
///
/// assert_eq!(format_duration(Duration::from_millis(2000)), "2s");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1500ms");
/// ```
pub fn format_duration(d: Duration) -> String {
    let millis = u64::try_from(d.as_millis()).unwrap_or(u64::MAX);

    UNITS
        .iter()
        .rev()
        .find(|(_, factor)| millis >= *factor && millis % factor == 0)
        .map(|(suffix, factor)| format!("{}{suffix}", millis / factor))
        .unwrap_or_else(|| format!("{millis}ms"))
}

/// Serde deserializer for duration strings.
///
/// Use with `#[serde(deserialize_with = "deserialize_duration")]`.
pub fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_duration(&s).map_err(de::Error::custom)
}

/// Serde serializer writing the [`format_duration`] form.
pub fn serialize_duration<S>(d: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_duration(*d))
}
