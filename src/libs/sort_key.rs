//! Integer sort surrogates for dates and times.

use std::fmt;

/// Sort surrogate for a date or time value.
///
/// Values that cannot be parsed become [`SortKey::Unknown`], which orders
/// after every known key. Variant order drives the derived `Ord`, so
/// `Known(_)` always compares less than `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SortKey {
    Known(i64),
    Unknown,
}

impl SortKey {
    pub fn is_known(&self) -> bool {
        matches!(self, SortKey::Known(_))
    }

    pub fn value(&self) -> Option<i64> {
        match self {
            SortKey::Known(v) => Some(*v),
            SortKey::Unknown => None,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SortKey::Known(v) => write!(f, "{}", v),
            SortKey::Unknown => write!(f, "inf"),
        }
    }
}

/// Parses an integer the way a lenient form field does: leading whitespace,
/// an optional sign, then as many digits as are present. Trailing text is
/// ignored; no digits at all yields `None`.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<i64>().ok().map(|v| sign * v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_sorts_after_everything() {
        let mut keys = vec![SortKey::Unknown, SortKey::Known(20240102), SortKey::Known(-5)];
        keys.sort();
        assert_eq!(keys, vec![SortKey::Known(-5), SortKey::Known(20240102), SortKey::Unknown]);
    }

    #[test]
    fn leading_int_is_lenient() {
        assert_eq!(parse_leading_int("12"), Some(12));
        assert_eq!(parse_leading_int(" 07abc"), Some(7));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
    }
}
