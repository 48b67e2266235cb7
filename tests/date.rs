#[cfg(test)]
mod tests {
    use crewsheet::libs::date::{date_sort_key, expand_short_date, short_date};
    use crewsheet::libs::sort_key::SortKey;

    #[test]
    fn test_date_sort_key() {
        assert_eq!(date_sort_key("01/02/2024"), SortKey::Known(20240102));
        assert_eq!(date_sort_key("1/2/2024"), SortKey::Known(20240102));
        assert_eq!(date_sort_key("12/31/2023"), SortKey::Known(20231231));
    }

    #[test]
    fn test_out_of_range_parts_still_sort() {
        // Parts are not range-checked.
        assert_eq!(date_sort_key("13/01/2024"), SortKey::Known(20241301));
        assert!(date_sort_key("13/01/2024").is_known());
    }

    #[test]
    fn test_unreadable_dates_sort_last() {
        for date in ["", "2024-01-02", "01/02", "aa/bb/cccc", "(no date)"] {
            assert_eq!(date_sort_key(date), SortKey::Unknown, "{}", date);
        }

        let mut dates = vec!["", "01/03/2024", "garbage", "12/31/2023"];
        dates.sort_by_key(|d| date_sort_key(d));
        assert_eq!(&dates[..2], &["12/31/2023", "01/03/2024"]);
    }

    #[test]
    fn test_oversized_parts_sort_last() {
        assert_eq!(date_sort_key("1/1/9999999999999999"), SortKey::Unknown);
        assert_eq!(date_sort_key("9999999999999999/1/2024"), SortKey::Unknown);
        assert_eq!(date_sort_key("1/9999999999999999/2024"), SortKey::Unknown);
        assert_eq!(date_sort_key("1/1/99999999999999999999"), SortKey::Unknown);
    }

    #[test]
    fn test_short_and_expanded_forms() {
        assert_eq!(short_date("01/02/2024"), "01/02");
        assert_eq!(expand_short_date(" 3/7 ", 2026), "03/07/2026");
        assert_eq!(expand_short_date("soon", 2026), "soon");
    }
}
