use chrono::NaiveDate;
use orgdesk_core::view::{
    bulk_delete_with_confirmation, delete_with_confirmation, detail_rows, sort_by_header,
    submit_create, submit_update, toggle_status, ActionOutcome, FormMode, HasForm, Lookups,
    ReferenceLookup,
};
use orgdesk_core::{
    Competency, Console, CreateEmployee, Department, Employee, Entity, RecordService,
    SearchPatch, ServiceError, SortDirection,
};

fn approve(_prompt: &str) -> bool {
    true
}

fn decline(_prompt: &str) -> bool {
    false
}

#[test]
fn declined_delete_leaves_everything_untouched() {
    let console = Console::mock();
    let mut store = console.competency_store();
    store.load(&SearchPatch::new());

    let outcome = delete_with_confirmation(&mut store, &decline, "DEV001");
    assert_eq!(outcome, ActionOutcome::Cancelled);
    assert_eq!(store.state().total, 20);
    assert!(console.competencies().get_by_key("DEV001").unwrap().is_some());
}

#[test]
fn confirmed_delete_removes_from_service_and_page() {
    let console = Console::mock();
    let mut store = console.competency_store();
    store.load(&SearchPatch::new());

    let outcome = delete_with_confirmation(&mut store, &approve, "DEV001");
    assert_eq!(outcome, ActionOutcome::Completed);
    assert_eq!(store.state().total, 19);
    assert!(store
        .state()
        .records
        .iter()
        .all(|record| record.job_role_code != "DEV001"));
    assert!(console.competencies().get_by_key("DEV001").unwrap().is_none());

    let outcome = delete_with_confirmation(&mut store, &approve, "DEV001");
    assert_eq!(outcome, ActionOutcome::NotFound);
    assert_eq!(store.state().total, 19);
}

#[test]
fn bulk_delete_with_missing_key_reloads_the_page() {
    let console = Console::mock();
    let mut store = console.department_store();
    store.load(&SearchPatch::new());
    assert_eq!(store.state().total, 7);

    let keys = vec!["QA".to_string(), "GONE".to_string()];
    let outcome = bulk_delete_with_confirmation(&mut store, &approve, &keys);
    assert_eq!(outcome, ActionOutcome::NotFound);
    assert_eq!(store.state().total, 6);

    let keys = vec!["OPS".to_string(), "FIN".to_string()];
    let outcome = bulk_delete_with_confirmation(&mut store, &approve, &keys);
    assert_eq!(outcome, ActionOutcome::Completed);
    assert_eq!(store.state().total, 4);

    let outcome = bulk_delete_with_confirmation(&mut store, &approve, &[]);
    assert_eq!(outcome, ActionOutcome::Cancelled);
}

#[test]
fn bulk_delete_counts_repeated_keys_once() {
    let console = Console::mock();
    let mut store = console.department_store();
    store.load(&SearchPatch::new());
    assert_eq!(store.state().total, 7);

    let prompts = std::cell::RefCell::new(Vec::new());
    let record_prompt = |prompt: &str| {
        prompts.borrow_mut().push(prompt.to_string());
        true
    };
    let keys = vec!["QA".to_string(), "QA".to_string()];
    let outcome = bulk_delete_with_confirmation(&mut store, &record_prompt, &keys);
    assert_eq!(outcome, ActionOutcome::Completed);
    assert_eq!(prompts.borrow().as_slice(), ["Delete 1 departments records?"]);

    let server_total = console
        .departments()
        .list(&store.state().params)
        .expect("mock list succeeds")
        .total_records;
    assert_eq!(server_total, 6);
    assert_eq!(store.state().total, server_total);
}

#[test]
fn toggle_status_flips_flag_in_service_and_cache() {
    let console = Console::mock();
    let mut store = console.competency_store();
    store.load(&SearchPatch::new());
    assert!(console
        .competencies()
        .get_by_key("DEV004")
        .unwrap()
        .map(|record| !record.is_active)
        .unwrap());

    assert_eq!(toggle_status(&mut store, "DEV004"), ActionOutcome::Completed);
    let cached = store
        .state()
        .records
        .iter()
        .find(|record| record.job_role_code == "DEV004")
        .unwrap();
    assert!(cached.is_active);
    assert!(console.competencies().get_by_key("DEV004").unwrap().unwrap().is_active);

    assert_eq!(toggle_status(&mut store, "NOPE01"), ActionOutcome::NotFound);
}

#[test]
fn header_clicks_toggle_sort_direction() {
    let console = Console::mock();
    let mut store = console.course_store();
    store.load(&SearchPatch::new());

    let state = sort_by_header(&mut store, "duration_hours");
    assert_eq!(state.params.sort_direction, SortDirection::Asc);
    assert_eq!(state.records[0].duration_hours, 2);

    let state = sort_by_header(&mut store, "duration_hours");
    assert_eq!(state.params.sort_direction, SortDirection::Desc);
    assert_eq!(state.records[0].duration_hours, 24);

    let state = sort_by_header(&mut store, "course_name");
    assert_eq!(state.params.sort_column.as_deref(), Some("course_name"));
    assert_eq!(state.params.sort_direction, SortDirection::Asc);
}

fn new_employee(code: &str, email: &str) -> CreateEmployee {
    CreateEmployee {
        employee_code: code.to_string(),
        full_name: "Pat Example".to_string(),
        email: email.to_string(),
        department_code: "ENG".to_string(),
        job_role_code: "DEV002".to_string(),
        hire_date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
        is_active: true,
    }
}

#[test]
fn form_submission_validates_before_calling_the_service() {
    let console = Console::mock();
    let service = console.employees();

    let err = submit_create::<Employee, _>(&*service, new_employee("E2001", "not-an-email"))
        .unwrap_err();
    let ServiceError::Validation(validation) = err else {
        panic!("expected validation error, got {err:?}");
    };
    assert!(validation.message_for("email").is_some());
    assert!(service.get_by_key("E2001").unwrap().is_none());

    let created =
        submit_create::<Employee, _>(&*service, new_employee("E2001", "pat@example.com")).unwrap();
    let mut dto = created.to_update();
    dto.full_name = "Pat Renamed".to_string();
    let updated = submit_update::<Employee, _>(&*service, "E2001", dto)
        .unwrap()
        .unwrap();
    assert_eq!(updated.full_name, "Pat Renamed");

    let schema = Employee::form_schema();
    assert!(schema.is_disabled("employee_code", FormMode::Edit));
    assert!(!schema.is_disabled("employee_code", FormMode::Create));
}

#[test]
fn detail_rows_resolve_references_and_append_audit() {
    let console = Console::mock();
    let employee = console.employees().get_by_key("E1002").unwrap().unwrap();

    let mut lookups = Lookups::new();
    lookups.insert(
        "departments",
        ReferenceLookup::load::<Department, _>(&*console.departments()).unwrap(),
    );
    lookups.insert(
        "competencies",
        ReferenceLookup::load::<Competency, _>(&*console.competencies()).unwrap(),
    );

    let rows = detail_rows(&employee, &lookups);
    let value = |label: &str| {
        rows.iter()
            .find(|row| row.label == label)
            .map(|row| row.value.clone())
            .unwrap()
    };

    assert_eq!(value("Employee Code"), "E1002");
    assert_eq!(value("Department"), "Engineering");
    assert_eq!(value("Job Role"), "DEV001 - Junior Developer");
    assert_eq!(value("Hire Date"), "2023-09-01");
    assert_eq!(value("Active"), "Yes");
    assert_eq!(value("Created By"), "system");
    assert_eq!(rows.last().unwrap().label, "Updated By");
}

#[test]
fn inactive_references_fall_back_to_raw_keys() {
    let console = Console::mock();
    let employee = console.employees().get_by_key("E1011").unwrap().unwrap();
    let departments = ReferenceLookup::load::<Department, _>(&*console.departments()).unwrap();
    assert!(departments.label("SALES").is_none());

    let mut lookups = Lookups::new();
    lookups.insert("departments", departments);
    let rows = detail_rows(&employee, &lookups);
    let department = rows.iter().find(|row| row.label == "Department").unwrap();
    assert_eq!(department.value, "SALES");
    assert_eq!(employee.label(), "Drew Fischer");
}
