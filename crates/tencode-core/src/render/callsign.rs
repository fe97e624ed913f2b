use super::template::{render_template, Replacements};

/// Source fragments for rendering a unit's display callsign
///
/// Canonical placeholder set, in canonical order: `department`,
/// `callsign1`, `callsign2`, `division`. Absent fragments drop their
/// placeholder from the output.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallsignPieces<'a> {
    /// Department callsign fragment (`{department}`)
    pub department: Option<&'a str>,
    /// Primary callsign number (`{callsign1}`)
    pub callsign1: Option<&'a str>,
    /// Secondary callsign number (`{callsign2}`)
    pub callsign2: Option<&'a str>,
    /// Division callsign fragment (`{division}`)
    pub division: Option<&'a str>,
}

/// Render a display callsign from its source fragments and a template
///
/// Builds the replacement set in canonical order and delegates to
/// [`render_template`]. Never fails; an empty template renders empty.
///
/// # Example
/// ```
/// use tencode_core::render::{generate_callsign, CallsignPieces};
///
/// let pieces = CallsignPieces {
///     department: Some("1K"),
///     callsign1: Some("12"),
///     callsign2: Some("A"),
///     division: None,
/// };
/// assert_eq!(
///     generate_callsign(&pieces, "{department}{callsign1}-{callsign2}"),
///     "1K12-A"
/// );
/// ```
pub fn generate_callsign(pieces: &CallsignPieces<'_>, template: &str) -> String {
    let replacements = Replacements::new()
        .with("department", pieces.department)
        .with("callsign1", pieces.callsign1)
        .with("callsign2", pieces.callsign2)
        .with("division", pieces.division);

    render_template(template, &replacements)
}
