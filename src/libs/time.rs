//! Clock-time normalization for timesheet rows.
//!
//! Timesheet CSV carries wall-clock times as `hh:mm AM/PM`, while edits are
//! made against the 24-hour `HH:MM` form. This module converts between the
//! two, computes quarter-hour rounded shift lengths, and derives the sort key
//! used to order rows by start time.
//!
//! Every function here fails softly: malformed input produces an empty
//! string or [`SortKey::Unknown`], never an error.
//!
//! ## Examples
//!
//! ```rust
//! use crewsheet::libs::time::{elapsed_hours, to_12_hour, to_24_hour};
//!
//! assert_eq!(to_24_hour("4:15 pm"), "16:15");
//! assert_eq!(to_12_hour("16:15"), "04:15 PM");
//! assert_eq!(elapsed_hours("07:45", "15:10"), "7.50");
//! ```

use super::sort_key::SortKey;
use chrono::NaiveTime;
use regex::Regex;
use std::sync::OnceLock;

static CLOCK_12: OnceLock<Regex> = OnceLock::new();
static CLOCK_KEY: OnceLock<Regex> = OnceLock::new();

/// `H[:MM] [AM|PM]`, surrounding whitespace allowed.
fn clock_12() -> &'static Regex {
    CLOCK_12.get_or_init(|| Regex::new(r"(?i)^\s*(\d{1,2})(?::(\d{2}))?\s*(am|pm)?\s*$").expect("valid clock regex"))
}

/// `H:MM[ AM|PM]` anywhere in the input.
fn clock_key() -> &'static Regex {
    CLOCK_KEY.get_or_init(|| Regex::new(r"(?i)(\d{1,2}):(\d{2})\s*(am|pm)?").expect("valid clock regex"))
}

/// Applies a meridiem to a 12-hour clock hour.
fn apply_meridiem(hour: u32, meridiem: Option<&str>) -> u32 {
    match meridiem.map(|m| m.to_ascii_lowercase()) {
        Some(m) if m == "pm" && hour != 12 => hour + 12,
        Some(m) if m == "am" && hour == 12 => 0,
        _ => hour,
    }
}

/// Converts `8`, `8 am`, `08:00 AM`, `4:15 pm` into 24-hour `HH:MM`.
///
/// Without a meridiem the hour is taken as given (`"16:15"` stays
/// `"16:15"`). Missing minutes default to `00`. Anything else, including
/// out-of-range hours or minutes, yields an empty string.
pub fn to_24_hour(time12: &str) -> String {
    let Some(caps) = clock_12().captures(time12) else {
        return String::new();
    };

    let Ok(hour) = caps[1].parse::<u32>() else {
        return String::new();
    };
    let minute = caps.get(2).and_then(|m| m.as_str().parse::<u32>().ok()).unwrap_or(0);
    let meridiem = caps.get(3).map(|m| m.as_str());

    let hour_ok = match meridiem {
        Some(_) => (1..=12).contains(&hour),
        None => hour <= 23,
    };
    if !hour_ok || minute > 59 {
        return String::new();
    }

    format!("{:02}:{:02}", apply_meridiem(hour, meridiem), minute)
}

/// Splits `H:MM` / `HH:MM` (an optional `:SS` suffix is ignored) into a
/// validated clock time.
pub fn parse_24_hour(time24: &str) -> Option<NaiveTime> {
    let mut parts = time24.trim().split(':');
    let hour = parts.next()?.trim().parse::<u32>().ok()?;
    let minute = parts.next()?.trim().parse::<u32>().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Converts 24-hour `HH:MM` into `hh:mm AM|PM`.
///
/// Hour 0 becomes 12 AM, 12 stays 12 PM, 13–23 lose twelve hours. Input
/// without a colon, or outside 00:00–23:59, yields an empty string.
pub fn to_12_hour(time24: &str) -> String {
    use chrono::Timelike;

    let Some(time) = parse_24_hour(time24) else {
        return String::new();
    };

    let (is_pm, display_hour) = time.hour12();
    let suffix = if is_pm { "PM" } else { "AM" };
    format!("{:02}:{:02} {}", display_hour, time.minute(), suffix)
}

/// Rounds a span of minutes to the nearest quarter hour and returns hours.
pub fn quarter_hours(minutes: i64) -> f64 {
    // Half-up rounding of minutes / 15 in integer arithmetic.
    let quarters = (2 * minutes + 15).div_euclid(30);
    quarters as f64 / 4.0
}

/// Decimal hours between two 24-hour times, rounded to 0.25 and rendered
/// with two decimals (`"8.25"`).
///
/// Returns an empty string when either time is malformed or when `end` is not
/// strictly after `start`. Shifts crossing midnight are not inferred.
pub fn elapsed_hours(start24: &str, end24: &str) -> String {
    let (Some(start), Some(end)) = (parse_24_hour(start24), parse_24_hour(end24)) else {
        return String::new();
    };
    if end <= start {
        return String::new();
    }

    let minutes = (end - start).num_minutes();
    format!("{:.2}", quarter_hours(minutes))
}

/// Minutes since midnight for a `H:MM[ AM|PM]` time, used to order rows.
///
/// A missing meridiem leaves the hour unchanged. Input without an `H:MM`
/// token sorts last.
pub fn time_sort_key(time12: &str) -> SortKey {
    let Some(caps) = clock_key().captures(time12.trim()) else {
        return SortKey::Unknown;
    };
    let (Ok(hour), Ok(minute)) = (caps[1].parse::<u32>(), caps[2].parse::<u32>()) else {
        return SortKey::Unknown;
    };

    let hour = apply_meridiem(hour, caps.get(3).map(|m| m.as_str()));
    SortKey::Known(i64::from(hour * 60 + minute))
}

/// Canonical `hh:mm AM|PM` form of whatever time text a row carries.
///
/// The value is routed through the 24-hour editing form, so loose input like
/// `8 am` becomes `08:00 AM` and unreadable text becomes empty.
pub fn normalize_12_hour(raw: &str) -> String {
    to_12_hour(&to_24_hour(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_rounding_is_half_up() {
        assert_eq!(quarter_hours(7), 0.0);
        assert_eq!(quarter_hours(8), 0.25);
        assert_eq!(quarter_hours(445), 7.5);
        assert_eq!(quarter_hours(495), 8.25);
    }

    #[test]
    fn parse_24_hour_ignores_seconds() {
        assert_eq!(parse_24_hour("08:30:15"), NaiveTime::from_hms_opt(8, 30, 0));
        assert_eq!(parse_24_hour("0830"), None);
    }
}
