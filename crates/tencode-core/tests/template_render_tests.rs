use tencode_core::render::{render_template, Replacements};

fn unit_replacements() -> Replacements {
    Replacements::new()
        .with("department", Some("1K"))
        .with("callsign1", Some("12"))
        .with("callsign2", Some("A"))
        .with("division", Some("T"))
}

// ===== EMPTY / DEGENERATE TEMPLATES =====

#[test]
fn test_empty_template_renders_empty() {
    assert_eq!(render_template("", &unit_replacements()), "");
    assert_eq!(render_template("", &Replacements::new()), "");
}

#[test]
fn test_template_without_placeholders_passes_through() {
    assert_eq!(
        render_template("DISPATCH-1", &unit_replacements()),
        "DISPATCH-1"
    );
}

#[test]
fn test_braces_always_stripped() {
    // An unrecognized name survives as literal text, but never its braces
    assert_eq!(
        render_template("{nope}", &Replacements::new()),
        "nope"
    );
}

// ===== SUBSTITUTION =====

#[test]
fn test_full_substitution() {
    assert_eq!(
        render_template("{department}{callsign1}-{callsign2}", &unit_replacements()),
        "1K12-A"
    );
}

#[test]
fn test_literal_text_between_placeholders_kept() {
    assert_eq!(
        render_template("unit {callsign1} of {department}", &unit_replacements()),
        "unit 12 of 1K"
    );
}

#[test]
fn test_absent_value_drops_only_the_placeholder() {
    let replacements = Replacements::new()
        .with("symbol", None::<&str>)
        .with("callsign1", Some("12"));
    assert_eq!(render_template("1{symbol}-{callsign1}", &replacements), "1-12");
}

#[test]
fn test_empty_value_drops_only_the_placeholder() {
    let replacements = Replacements::new()
        .with("symbol", Some(""))
        .with("callsign1", Some("12"));
    assert_eq!(render_template("1{symbol}-{callsign1}", &replacements), "1-12");
}

#[test]
fn test_all_values_absent_leaves_literals() {
    let replacements = Replacements::new()
        .with("department", None::<&str>)
        .with("callsign1", None::<&str>)
        .with("callsign2", None::<&str>);
    assert_eq!(
        render_template("{department}{callsign1}-{callsign2}", &replacements),
        "-"
    );
}

#[test]
fn test_replacement_for_name_not_in_template_ignored() {
    let replacements = Replacements::new()
        .with("callsign1", Some("12"))
        .with("division", Some("T"));
    assert_eq!(render_template("{callsign1}", &replacements), "12");
}

#[test]
fn test_every_occurrence_substituted() {
    let replacements = Replacements::new().with("callsign1", Some("12"));
    assert_eq!(
        render_template("{callsign1} {callsign1} {callsign1}", &replacements),
        "12 12 12"
    );
}

// ===== MALFORMED TEMPLATES (never panic, best-effort output) =====

#[test]
fn test_unbalanced_braces_degrade_gracefully() {
    let replacements = unit_replacements();
    assert_eq!(render_template("{callsign1", &replacements), "12");
    assert_eq!(render_template("callsign1}", &replacements), "12");
    assert_eq!(render_template("{department}{", &replacements), "1K");
}

#[test]
fn test_doubled_braces_degrade_gracefully() {
    let replacements = unit_replacements();
    assert_eq!(render_template("{{callsign1}}", &replacements), "12");
    assert_eq!(render_template("}{", &replacements), "");
}

#[test]
fn test_adjacent_placeholders_no_separator() {
    assert_eq!(
        render_template("{callsign1}{callsign2}", &unit_replacements()),
        "12A"
    );
}
