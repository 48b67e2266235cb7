#[cfg(test)]
mod tests {
    use crewsheet::libs::codec::SummaryStyle;
    use crewsheet::libs::error::TimesheetError;
    use crewsheet::libs::pipeline::TimesheetPipeline;

    const MODEL_OUTPUT: &str = "```csv
Date,Job Site,Worker Name,Start,End,Hours
01/03/2024,Expo Hall,Bea,8 am,4:30 pm,
01/02/2024,Expo Hall,Sam,08:00 AM,12:00 PM,4.00
Summary,Sam,99.00
```";

    #[test]
    fn test_build_normalizes_and_sorts() {
        let built = TimesheetPipeline::default().build(MODEL_OUTPUT).unwrap();
        assert_eq!(built.rows.len(), 2);
        assert_eq!(built.rows[0].worker, "Sam");
        assert_eq!(built.rows[1].start, "08:00 AM");
        assert_eq!(built.rows[1].end, "04:30 PM");
        assert_eq!(built.rows[1].hours, Some(8.5));

        assert_eq!(
            built.csv,
            "Date,Job Site,Worker Name,Start,End,Hours
01/02/2024,Expo Hall,Sam,08:00 AM,12:00 PM,4.00
01/03/2024,Expo Hall,Bea,08:00 AM,04:30 PM,8.50

Summary,Bea,8.50
Summary,Sam,4.00
Summary,Total Hours Overall,12.50"
        );
    }

    #[test]
    fn test_build_with_per_worker_date_summary() {
        let built = TimesheetPipeline::new(SummaryStyle::PerWorkerDate).build(MODEL_OUTPUT).unwrap();
        assert!(built.csv.ends_with(
            "Summary,Worker Name - Date,Hours\nSummary,Bea - 01/03/2024,8.50\nSummary,Sam - 01/02/2024,4.00\nSummary,Total Hours Overall,12.50"
        ));
    }

    #[test]
    fn test_build_without_header_fails() {
        let err = TimesheetPipeline::default().build("Sorry, I could not find any shifts.").unwrap_err();
        assert!(matches!(err, TimesheetError::MissingHeader));
    }

    #[test]
    fn test_build_header_only() {
        let built = TimesheetPipeline::default().build("Date,Job Site,Worker Name,Start,End,Hours").unwrap();
        assert!(built.rows.is_empty());
        assert_eq!(built.csv, "Date,Job Site,Worker Name,Start,End,Hours\n\nSummary,Total Hours Overall,0.00");
    }

    #[test]
    fn test_built_timesheet_serializes_for_clients() {
        let built = TimesheetPipeline::default().build(MODEL_OUTPUT).unwrap();
        let json = serde_json::to_value(&built).unwrap();
        assert_eq!(json["rows"][0]["worker"], "Sam");
        assert_eq!(json["rows"][0]["hours"], 4.0);
        assert!(json["csv"].as_str().unwrap().starts_with("Date,"));
    }
}
