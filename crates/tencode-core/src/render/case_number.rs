use chrono::{DateTime, Datelike, Utc};

use super::template::{render_template, Replacements};

/// Render a record's case number from a template
///
/// Canonical placeholder set: `id` (decimal case number), `department`
/// (department callsign fragment, dropped when absent), `year` (four
/// digits), `month` and `day` (zero-padded to two digits, from the record's
/// creation timestamp).
///
/// Never fails; an empty template renders empty, which callers treat as
/// "no template configured".
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use tencode_core::render::format_case_number;
///
/// let created_at = Utc.with_ymd_and_hms(2024, 3, 7, 12, 0, 0).unwrap();
/// assert_eq!(
///     format_case_number(42, Some("1K"), created_at, "{year}-{department}-{id}"),
///     "2024-1K-42"
/// );
/// ```
pub fn format_case_number(
    case_number: u64,
    department: Option<&str>,
    created_at: DateTime<Utc>,
    template: &str,
) -> String {
    let replacements = Replacements::new()
        .with("id", Some(case_number.to_string()))
        .with("department", department.map(str::to_string))
        .with("year", Some(format!("{:04}", created_at.year())))
        .with("month", Some(format!("{:02}", created_at.month())))
        .with("day", Some(format!("{:02}", created_at.day())));

    render_template(template, &replacements)
}
