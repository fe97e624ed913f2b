use tencode_core::model::{Department, Division};
use tencode_core::Store;
use uuid::Uuid;

/// Create a new empty Store for testing
#[allow(dead_code)]
pub fn new_store() -> Store {
    Store::new()
}

/// Create a test department with the given label and callsign fragment
///
/// This is a simplified helper that bypasses CRUD operations for test
/// setup. For full CRUD testing, use `department_ops::create_department`.
#[allow(dead_code)]
pub fn seed_department(store: &mut Store, label: &str, callsign: Option<&str>) -> String {
    let id = Uuid::now_v7().to_string();
    let mut department = Department::new(id.clone(), label.to_string());
    department.callsign = callsign.map(str::to_string);

    store.insert_department(department);

    id
}

/// Create a test division under the given department
///
/// This is a simplified helper that bypasses CRUD operations for test setup.
#[allow(dead_code)]
pub fn seed_division(
    store: &mut Store,
    department_id: &str,
    label: &str,
    callsign: Option<&str>,
) -> String {
    let id = Uuid::now_v7().to_string();
    let mut division = Division::new(id.clone(), department_id.to_string(), label.to_string());
    division.callsign = callsign.map(str::to_string);

    store.insert_division(division);

    id
}

/// Setup a department with two divisions: (department, patrol, traffic)
///
/// The department carries the "1K" fragment, patrol "P", traffic "T".
#[allow(dead_code)]
pub fn setup_department_with_divisions(store: &mut Store) -> (String, String, String) {
    let department_id = seed_department(store, "Police", Some("1K"));
    let patrol_id = seed_division(store, &department_id, "Patrol", Some("P"));
    let traffic_id = seed_division(store, &department_id, "Traffic", Some("T"));

    (department_id, patrol_id, traffic_id)
}
