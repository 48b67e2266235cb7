//! Prompt text for the language-model collaborators.

pub const TIMESHEET_SYSTEM: &str = "You are a strict timesheet CSV formatter.";

pub const REPORT_SYSTEM: &str = "You write short, clear, professional work summaries in plain text.";

pub const NO_NOTES: &str = "No additional notes were provided.";

/// User prompt turning a spoken work log into timesheet CSV.
pub fn timesheet(transcript: &str, today: &str) -> String {
    format!(
        r#"You format convention labor timesheets.

Read the work log below. It is casual, spoken text about one or more days of
work at convention venues. Infer the date, job site and the workers with their
time ranges, then output ONLY CSV.

TODAY'S DATE: {today}

DATES
- Write dates as MM/DD/YYYY with a 4-digit year, or leave the field empty if
  no date can be inferred.
- Prefer explicit calendar dates ("January 14th", "1/14"). With exactly one
  explicit date, every worker is on that date unless another date is stated.
- Resolve "today", "yesterday" or "tomorrow" against today's date only when
  those words appear in the text. Never invent a date.
- A month and day without a year take the current year.

JOB SITE
- Use the shortest clear name of the venue or hall, followed by "Booth <id>"
  when a booth is mentioned ("Caesars Palace Booth W-3142").
- A booth named once for a venue continues on later days for that venue until
  a different booth is mentioned.

WORKERS AND TIMES
- Worker Name is the simplest clear form of the name ("John", "Serena M.").
- Start and End use 12-hour time with AM/PM ("08:00 AM", "04:30 PM").
- Normalize loose ranges such as "8 to 4:30" or "7:45-3".
- Emit one row per worker per date.

HOURS
- End minus Start in decimal hours, rounded to the nearest 0.25, written with
  2 decimals (7:45-3:10 is 7.50).

OUTPUT
- First line exactly: Date,Job Site,Worker Name,Start,End,Hours
- One line per worker row. Never put a comma inside a field.
- After the rows, one empty line, then one line per worker in alphabetical
  order: Summary,<Worker Name>,<Total Hours>
- Last line: Summary,Total Hours Overall,<total>
- No markdown fences, no JSON, no commentary.

WORK LOG:
"""{transcript}""""#
    )
}

/// User prompt asking for a client-facing summary of a timesheet.
pub fn report(csv: &str, notes: &str) -> String {
    let notes = if notes.trim().is_empty() { NO_NOTES } else { notes };
    format!(
        r#"Write a short professional summary of the work recorded below for a
client or bookkeeper.

You receive timesheet CSV with the header
Date,Job Site,Worker Name,Start,End,Hours
possibly followed by Summary lines, and rough notes from the supervisor.

Answer with ONE block of plain text in exactly this structure, with no
markdown and no extra labels:

Job: <short description of the job or job sites>
Date: <main date, or a compact range>
Schedule: <earliest start - latest end>
Location: <where the work took place>
Workers:
- <Worker> - <Job Site> - <Start>-<End> (<Hours> hrs)
Total hours overall: <total, up to 2 decimals>
Notes: <clean rewrite of the supervisor's notes>

Do not invent workers or hours. With several job sites keep Job and Location
short. Without meaningful notes write "Notes: {no_notes}"

TIMESHEET CSV:
"""{csv}"""

SUPERVISOR NOTES:
"""{notes}""""#,
        no_notes = NO_NOTES
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_prompt_substitutes_missing_notes() {
        let prompt = report("Date,Job Site,Worker Name,Start,End,Hours", "   ");
        assert!(prompt.contains(&format!("\"\"\"{}\"\"\"", NO_NOTES)));
    }

    #[test]
    fn timesheet_prompt_carries_date_and_transcript() {
        let prompt = timesheet("Sam worked eight to noon", "01/02/2024");
        assert!(prompt.contains("TODAY'S DATE: 01/02/2024"));
        assert!(prompt.contains("Sam worked eight to noon"));
    }
}
