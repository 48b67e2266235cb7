//! Calendar-date keys and display forms for `MM/DD/YYYY` strings.
//!
//! Only the shape is checked: three numeric parts. Out-of-range months or
//! days (`13/01/2024`) still produce a finite key.

use super::sort_key::{parse_leading_int, SortKey};
use chrono::{Datelike, Local, NaiveDate};

/// Sentinel label for rows without a date.
pub const NO_DATE: &str = "(no date)";

/// Converts `MM/DD/YYYY` into `yyyymmdd` as an integer key.
///
/// Anything other than three numeric `/`-separated parts sorts last, as do
/// parts too large to combine into a key.
pub fn date_sort_key(date: &str) -> SortKey {
    let parts: Vec<&str> = date.split('/').collect();
    if parts.len() != 3 {
        return SortKey::Unknown;
    }

    match (parse_leading_int(parts[0]), parse_leading_int(parts[1]), parse_leading_int(parts[2])) {
        (Some(month), Some(day), Some(year)) => year
            .checked_mul(10_000)
            .and_then(|key| month.checked_mul(100).and_then(|m| key.checked_add(m)))
            .and_then(|key| key.checked_add(day))
            .map_or(SortKey::Unknown, SortKey::Known),
        _ => SortKey::Unknown,
    }
}

/// `MM/DD` display form used in the table view. Values that are not three
/// `/`-separated parts are returned unchanged.
pub fn short_date(date: &str) -> String {
    let parts: Vec<&str> = date.split('/').collect();
    if parts.len() == 3 {
        format!("{:0>2}/{:0>2}", parts[0], parts[1])
    } else {
        date.to_string()
    }
}

/// Rebuilds a full date from an edited `MM/DD` value using `year`.
///
/// Full dates and other text pass through; an empty value stays empty.
pub fn expand_short_date(value: &str, year: i32) -> String {
    let value = value.trim();
    let parts: Vec<&str> = value.split('/').collect();
    if parts.len() == 2 {
        return format!("{:0>2}/{:0>2}/{}", parts[0].trim(), parts[1].trim(), year);
    }
    value.to_string()
}

/// Current year in local time, used when expanding short dates.
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Today's date in `MM/DD/YYYY`, as handed to the CSV-generation model.
pub fn today_numeric() -> String {
    format_numeric(Local::now().date_naive())
}

pub fn format_numeric(date: NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_date_pads_parts() {
        assert_eq!(short_date("1/5/2024"), "01/05");
        assert_eq!(short_date("garbage"), "garbage");
    }

    #[test]
    fn expand_short_date_adds_year() {
        assert_eq!(expand_short_date("1/5", 2025), "01/05/2025");
        assert_eq!(expand_short_date("01/05/2024", 2025), "01/05/2024");
        assert_eq!(expand_short_date("", 2025), "");
    }

    #[test]
    fn numeric_format_has_four_digit_year() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 5).unwrap();
        assert_eq!(format_numeric(date), "11/05/2025");
    }
}
