#[cfg(test)]
mod tests {
    use crewsheet::libs::sort_key::SortKey;
    use crewsheet::libs::time::{elapsed_hours, normalize_12_hour, time_sort_key, to_12_hour, to_24_hour};

    #[test]
    fn test_to_24_hour_accepts_loose_input() {
        assert_eq!(to_24_hour("08:00 AM"), "08:00");
        assert_eq!(to_24_hour("8"), "08:00");
        assert_eq!(to_24_hour("8 am"), "08:00");
        assert_eq!(to_24_hour(" 4:15pm "), "16:15");
        assert_eq!(to_24_hour("12:30 pm"), "12:30");
        assert_eq!(to_24_hour("12:00 AM"), "00:00");
        assert_eq!(to_24_hour("16:15"), "16:15");
    }

    #[test]
    fn test_to_24_hour_rejects_garbage() {
        assert_eq!(to_24_hour(""), "");
        assert_eq!(to_24_hour("noon"), "");
        assert_eq!(to_24_hour("13:00 PM"), "");
        assert_eq!(to_24_hour("9:75"), "");
        assert_eq!(to_24_hour("24:00"), "");
    }

    #[test]
    fn test_to_12_hour() {
        assert_eq!(to_12_hour("00:05"), "12:05 AM");
        assert_eq!(to_12_hour("12:00"), "12:00 PM");
        assert_eq!(to_12_hour("16:15"), "04:15 PM");
        assert_eq!(to_12_hour("23:59"), "11:59 PM");
        assert_eq!(to_12_hour("0800"), "");
        assert_eq!(to_12_hour("24:00"), "");
        assert_eq!(to_12_hour(""), "");
    }

    #[test]
    fn test_round_trip_is_stable() {
        for hour in 1..=12 {
            for minute in [0, 15, 30, 59] {
                for meridiem in ["AM", "PM"] {
                    let input = format!("{}:{:02} {}", hour, minute, meridiem);
                    let time24 = to_24_hour(&input);
                    assert!(!time24.is_empty(), "{} did not parse", input);
                    assert_eq!(to_24_hour(&to_12_hour(&time24)), time24);
                }
            }
        }
    }

    #[test]
    fn test_normalize_12_hour() {
        assert_eq!(normalize_12_hour("8 am"), "08:00 AM");
        assert_eq!(normalize_12_hour("4:30PM"), "04:30 PM");
        assert_eq!(normalize_12_hour("later"), "");
    }

    #[test]
    fn test_elapsed_hours() {
        assert_eq!(elapsed_hours("08:00", "16:00"), "8.00");
        assert_eq!(elapsed_hours("10:00", "18:15"), "8.25");
        assert_eq!(elapsed_hours("07:45", "15:10"), "7.50");
    }

    #[test]
    fn test_elapsed_hours_needs_a_forward_span() {
        assert_eq!(elapsed_hours("09:00", "09:00"), "");
        assert_eq!(elapsed_hours("10:00", "09:00"), "");
        assert_eq!(elapsed_hours("bad", "09:00"), "");
        assert_eq!(elapsed_hours("09:00", ""), "");
    }

    #[test]
    fn test_elapsed_hours_are_quarter_multiples() {
        for start in (0..1440).step_by(37) {
            for end in (start + 1..1440).step_by(53) {
                let start24 = format!("{:02}:{:02}", start / 60, start % 60);
                let end24 = format!("{:02}:{:02}", end / 60, end % 60);
                let hours: f64 = elapsed_hours(&start24, &end24).parse().unwrap();
                let quarters = hours * 4.0;
                assert!((quarters - quarters.round()).abs() < 1e-9, "{} - {} gave {}", start24, end24, hours);
            }
        }
    }

    #[test]
    fn test_time_sort_key() {
        assert_eq!(time_sort_key("08:00 AM"), SortKey::Known(480));
        assert_eq!(time_sort_key("12:15 AM"), SortKey::Known(15));
        assert_eq!(time_sort_key("1:05 pm"), SortKey::Known(785));
        assert_eq!(time_sort_key("13:00"), SortKey::Known(780));
        assert_eq!(time_sort_key(""), SortKey::Unknown);
        assert_eq!(time_sort_key("whenever"), SortKey::Unknown);
        assert!(time_sort_key("") > time_sort_key("11:59 PM"));
    }
}
