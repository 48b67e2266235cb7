#[cfg(test)]
mod tests {
    use crewsheet::libs::codec::{parse, serialize, summary_lines, SummaryStyle};
    use crewsheet::libs::error::TimesheetError;
    use crewsheet::libs::row::{TimesheetField, TimesheetRow};

    const HEADER: &str = "Date,Job Site,Worker Name,Start,End,Hours";

    fn row(date: &str, worker: &str, hours: f64) -> TimesheetRow {
        TimesheetRow {
            date: date.to_string(),
            job_site: "Expo Hall".to_string(),
            worker: worker.to_string(),
            hours: Some(hours),
            ..Default::default()
        }
    }

    #[test]
    fn test_round_trip_single_row() {
        let text = format!("{}\n01/02/2024,Expo Hall,Sam,08:00 AM,04:00 PM,8.00", HEADER);
        let parsed = parse(&text).unwrap();
        assert_eq!(parsed.rows.len(), 1);

        let sam = &parsed.rows[0];
        assert_eq!(sam.date, "01/02/2024");
        assert_eq!(sam.job_site, "Expo Hall");
        assert_eq!(sam.worker, "Sam");
        assert_eq!(sam.start, "08:00 AM");
        assert_eq!(sam.end, "04:00 PM");
        assert_eq!(sam.hours, Some(8.0));

        let out = serialize(&parsed.rows, SummaryStyle::PerWorker);
        assert_eq!(
            out,
            format!(
                "{}\n01/02/2024,Expo Hall,Sam,08:00 AM,04:00 PM,8.00\n\nSummary,Sam,8.00\nSummary,Total Hours Overall,8.00",
                HEADER
            )
        );
        assert_eq!(parse(&out).unwrap().rows, parsed.rows);
    }

    #[test]
    fn test_missing_header_fails() {
        let err = parse("Sam,08:00 AM,04:00 PM").unwrap_err();
        assert!(matches!(err, TimesheetError::MissingHeader));
        assert_eq!(err.to_string(), "No valid CSV header returned");
    }

    #[test]
    fn test_header_is_found_after_noise() {
        let text = format!("Here is your timesheet:\n\n{}\n01/02/2024,Expo Hall,Sam,8 am,noon,", HEADER);
        let parsed = parse(&text).unwrap();
        assert_eq!(parsed.header, HEADER);
        assert_eq!(parsed.rows[0].start, "08:00 AM");
        assert_eq!(parsed.rows[0].end, "");
        assert_eq!(parsed.rows[0].hours, None);
    }

    #[test]
    fn test_data_stops_at_first_summary_line() {
        let text = format!(
            "{}\n01/02/2024,Expo Hall,Sam,08:00 AM,12:00 PM,4.00\nSummary,Sam,4.00\n01/03/2024,Expo Hall,Al,08:00 AM,12:00 PM,4.00\nSummary,Total Hours Overall,4.00",
            HEADER
        );
        let parsed = parse(&text).unwrap();
        assert_eq!(parsed.rows.len(), 1);
        assert_eq!(parsed.summary_lines, vec!["Summary,Sam,4.00", "Summary,Total Hours Overall,4.00"]);
    }

    #[test]
    fn test_repeated_headers_and_blank_rows_are_skipped() {
        let text = format!(
            "{h}\n01/02/2024,Expo Hall,Sam,08:00 AM,12:00 PM,4.00\n{h}\n,,,,,\n01/02/2024,Expo Hall,,,,\n01/02/2024,Expo Hall,Al,09:00 AM,10:00 AM,",
            h = HEADER
        );
        let parsed = parse(&text).unwrap();
        let workers: Vec<&str> = parsed.rows.iter().map(|r| r.worker.as_str()).collect();
        assert_eq!(workers, vec!["Sam", "Al"]);
        assert_eq!(parsed.rows[1].hours, Some(1.0));
    }

    #[test]
    fn test_columns_are_located_by_name() {
        let parsed = parse("DATE,Worker Name,End,Start\n01/02/2024,Sam,12:30 pm,8:00 am").unwrap();
        let sam = &parsed.rows[0];
        assert_eq!(sam.worker, "Sam");
        assert_eq!(sam.date, "01/02/2024");
        assert_eq!(sam.job_site, "");
        assert_eq!(sam.start, "08:00 AM");
        assert_eq!(sam.end, "12:30 PM");
        assert_eq!(sam.hours, Some(4.5));
        assert_eq!(parsed.columns.missing(), vec![TimesheetField::JobSite, TimesheetField::Hours]);
    }

    #[test]
    fn test_quotes_are_plain_characters() {
        let parsed = parse(&format!("{}\n01/02/2024,\"Expo Hall\",Sam,08:00 AM,12:00 PM,4.00", HEADER)).unwrap();
        assert_eq!(parsed.rows[0].job_site, "\"Expo Hall\"");
        assert_eq!(parsed.rows[0].worker, "Sam");
    }

    #[test]
    fn test_per_worker_summary_sums_hours() {
        let rows = vec![row("01/02/2024", "bea", 4.0), row("01/02/2024", "Al", 3.5), row("01/03/2024", "bea", 2.25)];
        assert_eq!(
            summary_lines(&rows, SummaryStyle::PerWorker),
            vec!["Summary,Al,3.50", "Summary,bea,6.25", "Summary,Total Hours Overall,9.75"]
        );
    }

    #[test]
    fn test_per_worker_date_summary() {
        let rows = vec![row("01/03/2024", "Sam", 3.0), row("01/02/2024", "Sam", 4.0), row("", "Al", 2.0)];
        assert_eq!(
            summary_lines(&rows, SummaryStyle::PerWorkerDate),
            vec![
                "Summary,Worker Name - Date,Hours",
                "Summary,Al - (no date),2.00",
                "Summary,Sam - 01/02/2024,4.00",
                "Summary,Sam - 01/03/2024,3.00",
                "Summary,Total Hours Overall,9.00",
            ]
        );
    }

    #[test]
    fn test_per_worker_date_summary_skips_unnamed_rows() {
        let rows = vec![row("01/02/2024", "Sam", 4.0), row("01/02/2024", "", 3.0)];
        assert_eq!(
            summary_lines(&rows, SummaryStyle::PerWorkerDate),
            vec![
                "Summary,Worker Name - Date,Hours",
                "Summary,Sam - 01/02/2024,4.00",
                "Summary,Total Hours Overall,4.00",
            ]
        );
        assert_eq!(
            summary_lines(&rows, SummaryStyle::PerWorker),
            vec!["Summary,(no name),3.00", "Summary,Sam,4.00", "Summary,Total Hours Overall,7.00"]
        );
    }

    #[test]
    fn test_hours_cell_reads_longest_number() {
        let parsed = parse(&format!("{}\n01/02/2024,Expo Hall,Sam,,,1.2.3\n01/02/2024,Expo Hall,Al,,,7.5 hrs", HEADER)).unwrap();
        assert_eq!(parsed.rows[0].hours, Some(1.2));
        assert_eq!(parsed.rows[1].hours, Some(7.5));
    }

    #[test]
    fn test_serialize_blank_hours_count_as_zero() {
        let mut rows = vec![row("01/02/2024", "Sam", 4.0)];
        rows[0].hours = None;
        let out = serialize(&rows, SummaryStyle::PerWorker);
        assert!(out.contains("\n01/02/2024,Expo Hall,Sam,,,\n"));
        assert!(out.ends_with("Summary,Sam,0.00\nSummary,Total Hours Overall,0.00"));
    }
}
