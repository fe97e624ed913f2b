/// Ordered set of placeholder replacements
///
/// Maps placeholder names to optional values. Insertion order is kept so
/// callers can express a canonical placeholder ordering; setting the same
/// name twice overwrites the earlier value.
#[derive(Debug, Clone, Default)]
pub struct Replacements {
    entries: Vec<(String, Option<String>)>,
}

impl Replacements {
    /// Create an empty replacement set
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a replacement, overwriting any earlier value for the same name
    ///
    /// `None` and `Some("")` both mean "drop this placeholder from the
    /// output".
    pub fn with(mut self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        let name = name.into();
        let value = value.map(Into::into);
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
        self
    }

    /// Look up a name: `None` = not a recognized placeholder,
    /// `Some(None)` = recognized but absent, `Some(Some(v))` = substitute `v`
    fn lookup(&self, name: &str) -> Option<Option<&str>> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_deref())
    }

    /// Number of replacement entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the replacement set is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Render a `{placeholder}` template against a replacement set
///
/// The template is split on `{` and `}`, yielding an alternating sequence
/// of literal text and placeholder names. Each segment that names a
/// recognized replacement is substituted: a non-empty value replaces the
/// segment, an absent or empty value drops it. Every matching occurrence is
/// substituted in a single pass, so substituted values are never re-matched
/// against later names. Unrecognized segments are kept as literal text and
/// the surviving segments are joined with no separator.
///
/// Brace characters are never reinserted, and templates must not contain
/// literal `{` or `}` outside placeholder delimiters; there is no escaping.
///
/// This function never fails: malformed templates (unbalanced braces, empty
/// names) degrade to best-effort assembly, and an empty template renders to
/// an empty string.
///
/// # Example
/// ```
/// use tencode_core::render::{render_template, Replacements};
///
/// let replacements = Replacements::new()
///     .with("symbol", Some("A"))
///     .with("callsign1", Some("12"));
/// assert_eq!(render_template("1{symbol}-{callsign1}", &replacements), "1A-12");
///
/// let replacements = Replacements::new()
///     .with("symbol", None::<&str>)
///     .with("callsign1", Some("12"));
/// assert_eq!(render_template("1{symbol}-{callsign1}", &replacements), "1-12");
/// ```
pub fn render_template(template: &str, replacements: &Replacements) -> String {
    if template.is_empty() {
        return String::new();
    }

    template
        .split(['{', '}'])
        .filter_map(|segment| match replacements.lookup(segment) {
            Some(Some(value)) if !value.is_empty() => Some(value),
            Some(_) => None,
            None => Some(segment),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_template_renders_empty() {
        let replacements = Replacements::new().with("department", Some("1K"));
        assert_eq!(render_template("", &replacements), "");
    }

    #[test]
    fn test_all_placeholders_present() {
        let replacements = Replacements::new()
            .with("symbol", Some("A"))
            .with("callsign1", Some("12"));
        assert_eq!(
            render_template("1{symbol}-{callsign1}", &replacements),
            "1A-12"
        );
    }

    #[test]
    fn test_absent_placeholder_dropped_literal_kept() {
        let replacements = Replacements::new()
            .with("symbol", None::<&str>)
            .with("callsign1", Some("12"));
        assert_eq!(
            render_template("1{symbol}-{callsign1}", &replacements),
            "1-12"
        );
    }

    #[test]
    fn test_empty_value_behaves_like_absent() {
        let replacements = Replacements::new()
            .with("symbol", Some(""))
            .with("callsign1", Some("12"));
        assert_eq!(
            render_template("1{symbol}-{callsign1}", &replacements),
            "1-12"
        );
    }

    #[test]
    fn test_unrecognized_placeholder_kept_as_literal() {
        let replacements = Replacements::new().with("callsign1", Some("12"));
        // Braces are stripped by the split/rejoin, but the name itself stays
        assert_eq!(
            render_template("{mystery}-{callsign1}", &replacements),
            "mystery-12"
        );
    }

    #[test]
    fn test_template_without_placeholders_unchanged() {
        let replacements = Replacements::new().with("callsign1", Some("12"));
        assert_eq!(render_template("DISPATCH", &replacements), "DISPATCH");
    }

    #[test]
    fn test_replacement_name_missing_from_template_ignored() {
        let replacements = Replacements::new()
            .with("callsign1", Some("12"))
            .with("division", Some("T"));
        assert_eq!(render_template("{callsign1}", &replacements), "12");
    }

    #[test]
    fn test_repeated_placeholder_substituted_everywhere() {
        let replacements = Replacements::new().with("callsign1", Some("12"));
        assert_eq!(
            render_template("{callsign1}/{callsign1}", &replacements),
            "12/12"
        );
    }

    #[test]
    fn test_substituted_value_not_rematched() {
        // "A" is both a value and a later placeholder name; the single-pass
        // substitution must not cascade
        let replacements = Replacements::new()
            .with("symbol", Some("A"))
            .with("A", Some("B"));
        assert_eq!(render_template("{symbol}", &replacements), "A");
    }

    #[test]
    fn test_overwriting_a_name_keeps_last_value() {
        let replacements = Replacements::new()
            .with("symbol", Some("A"))
            .with("symbol", Some("Z"));
        assert_eq!(replacements.len(), 1);
        assert_eq!(render_template("{symbol}", &replacements), "Z");
    }

    #[test]
    fn test_malformed_templates_do_not_panic() {
        let replacements = Replacements::new().with("callsign1", Some("12"));
        assert_eq!(render_template("{callsign1", &replacements), "12");
        assert_eq!(render_template("callsign1}", &replacements), "12");
        assert_eq!(render_template("}{", &replacements), "");
        assert_eq!(render_template("{{callsign1}}", &replacements), "12");
    }
}
