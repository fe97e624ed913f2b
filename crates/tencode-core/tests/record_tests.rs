mod common;

use common::{new_store, seed_department};
use tencode_core::model::CadSettings;
use tencode_core::ops::record_ops;
use tencode_core::CadError;

#[test]
fn test_case_numbers_increase_monotonically() {
    let mut store = new_store();

    let mut numbers = Vec::new();
    for _ in 0..5 {
        let id = record_ops::create_record(&mut store, None, String::new()).unwrap();
        numbers.push(store.get_record(&id).unwrap().case_number);
    }

    assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_display_rendered_from_configured_template() {
    let mut store = new_store();
    store.set_settings(CadSettings {
        case_number_template: "{department}-{id}".to_string(),
        ..CadSettings::default()
    });
    let department_id = seed_department(&mut store, "Police", Some("1K"));

    let record_id =
        record_ops::create_record(&mut store, Some(department_id), String::new()).unwrap();

    assert_eq!(
        store.get_record(&record_id).unwrap().case_number_display,
        "1K-1"
    );
}

#[test]
fn test_display_drops_department_when_fragment_missing() {
    let mut store = new_store();
    store.set_settings(CadSettings {
        case_number_template: "{department}-{id}".to_string(),
        ..CadSettings::default()
    });
    // Department with no callsign fragment configured
    let department_id = seed_department(&mut store, "Police", None);

    let record_id =
        record_ops::create_record(&mut store, Some(department_id), String::new()).unwrap();

    assert_eq!(
        store.get_record(&record_id).unwrap().case_number_display,
        "-1"
    );
}

#[test]
fn test_empty_template_falls_back_to_bare_number() {
    let mut store = new_store();
    store.set_settings(CadSettings {
        case_number_template: String::new(),
        ..CadSettings::default()
    });

    let record_id = record_ops::create_record(&mut store, None, String::new()).unwrap();
    assert_eq!(store.get_record(&record_id).unwrap().case_number_display, "1");
}

#[test]
fn test_display_frozen_against_template_changes() {
    let mut store = new_store();
    store.set_settings(CadSettings {
        case_number_template: "{id}".to_string(),
        ..CadSettings::default()
    });
    let record_id = record_ops::create_record(&mut store, None, String::new()).unwrap();
    assert_eq!(store.get_record(&record_id).unwrap().case_number_display, "1");

    // Changing the template later must not rewrite existing records
    store.set_settings(CadSettings {
        case_number_template: "CASE-{id}".to_string(),
        ..CadSettings::default()
    });
    assert_eq!(store.get_record(&record_id).unwrap().case_number_display, "1");
}

#[test]
fn test_create_record_unknown_department_fails() {
    let mut store = new_store();
    let result =
        record_ops::create_record(&mut store, Some("missing".to_string()), String::new());

    assert!(matches!(result, Err(CadError::DepartmentNotFound { .. })));
}

#[test]
fn test_update_record_changes_notes_only() {
    let mut store = new_store();
    let record_id =
        record_ops::create_record(&mut store, None, "initial".to_string()).unwrap();

    record_ops::update_record(&mut store, &record_id, "amended".to_string()).unwrap();

    let record = store.get_record(&record_id).unwrap();
    assert_eq!(record.notes, "amended");
    assert_eq!(record.case_number, 1);
}

#[test]
fn test_delete_record_tombstones_but_keeps_storage() {
    let mut store = new_store();
    let record_id = record_ops::create_record(&mut store, None, String::new()).unwrap();

    record_ops::delete_record(&mut store, &record_id).unwrap();

    assert!(matches!(
        record_ops::read_record(&store, &record_id),
        Err(CadError::RecordDeleted { .. })
    ));
    assert!(store.get_record_raw(&record_id).is_some());
    assert_eq!(store.list_records().len(), 0);
}
