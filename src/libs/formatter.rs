//! Display formatting for hours and clock times.
//!
//! Two registers exist. The canonical one (`8.00`, `08:00 AM`) is what the
//! CSV and the detailed report carry. The compact one (`8`, `8am`) is used by
//! the short report where each line is read at a glance.
//!
//! ## Examples
//!
//! ```rust
//! use crewsheet::libs::formatter::{format_hours, format_hours_compact, format_time_compact};
//!
//! assert_eq!(format_hours(4.0), "4.00");
//! assert_eq!(format_hours_compact(4.5), "4.5");
//! assert_eq!(format_time_compact("01:15 PM"), "1:15pm");
//! ```

use super::time::{parse_24_hour, to_24_hour};
use chrono::Timelike;

/// Hours with exactly two decimals.
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}

/// Hours without trailing zeros: `4.00` → `4`, `4.50` → `4.5`.
pub fn format_hours_compact(hours: f64) -> String {
    let fixed = format_hours(hours);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Hours cell of the daily breakdown: blank when there is nothing to show.
pub fn format_hours_breakdown(hours: Option<f64>) -> String {
    match hours {
        Some(h) if h != 0.0 => format_hours(h),
        _ => String::new(),
    }
}

/// Lower-case clock time without a leading zero or a `:00` suffix
/// (`08:00 AM` → `8am`, `01:15 PM` → `1:15pm`).
///
/// Text that is not a readable time is returned trimmed but otherwise as is.
pub fn format_time_compact(time12: &str) -> String {
    let Some(time) = parse_24_hour(&to_24_hour(time12)) else {
        return time12.trim().to_string();
    };

    let (is_pm, hour) = time.hour12();
    let suffix = if is_pm { "pm" } else { "am" };
    match time.minute() {
        0 => format!("{}{}", hour, suffix),
        minute => format!("{}:{:02}{}", hour, minute, suffix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_hours_drop_trailing_zeros() {
        assert_eq!(format_hours_compact(4.0), "4");
        assert_eq!(format_hours_compact(7.25), "7.25");
        assert_eq!(format_hours_compact(0.0), "0");
    }

    #[test]
    fn compact_time_handles_noon_and_midnight() {
        assert_eq!(format_time_compact("12:00 PM"), "12pm");
        assert_eq!(format_time_compact("12:30 AM"), "12:30am");
        assert_eq!(format_time_compact("08:00 AM"), "8am");
        assert_eq!(format_time_compact("later"), "later");
    }

    #[test]
    fn breakdown_hours_blank_for_zero() {
        assert_eq!(format_hours_breakdown(Some(0.0)), "");
        assert_eq!(format_hours_breakdown(None), "");
        assert_eq!(format_hours_breakdown(Some(4.0)), "4.00");
    }
}
