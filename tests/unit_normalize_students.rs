use classdesk::modules::students::StudentService;
use serde_json::{Value, json};

#[test]
fn test_nested_student_object_preferred() {
    let raw = json!([{
        "name": "Amara Silva",
        "email": "amara@example.test",
        "grade": "flat-grade",
        "student": { "grade": "5", "class": "A", "medium": "English", "admissionNo": "A100" }
    }]);

    let records = StudentService::normalize(&raw);
    assert_eq!(records.len(), 1);

    let student = &records[0];
    assert_eq!(student.name, "Amara Silva");
    assert_eq!(student.grade, "5");
    assert_eq!(student.class_name, "A");
    assert_eq!(student.medium, "English");
    assert_eq!(student.admission_no, "A100");
    assert_eq!(student.id, "A100-0");
}

#[test]
fn test_flat_fields_when_no_nested_object() {
    let raw = json!([{
        "name": "Nimal Perera",
        "studentGrade": "6",
        "studentClass": "B",
        "admissionNo": "A200"
    }]);

    let records = StudentService::normalize(&raw);
    let student = &records[0];
    assert_eq!(student.grade, "6");
    assert_eq!(student.class_name, "B");
    assert_eq!(student.admission_no, "A200");
}

#[test]
fn test_nested_gap_falls_back_to_flat_field() {
    // The nested object wins per field, not per record.
    let raw = json!([{
        "medium": "Sinhala",
        "student_data": { "grade": "7", "admissionNo": "A300" }
    }]);

    let records = StudentService::normalize(&raw);
    let student = &records[0];
    assert_eq!(student.grade, "7");
    assert_eq!(student.medium, "Sinhala");
    assert_eq!(student.id, "A300-0");
}

#[test]
fn test_missing_fields_default_to_empty() {
    let raw = json!([{}]);
    let records = StudentService::normalize(&raw);
    let student = &records[0];
    assert_eq!(student.id, "unknown-0");
    assert_eq!(student.name, "");
    assert_eq!(student.email, "");
    assert_eq!(student.grade, "");
    assert_eq!(student.admission_no, "");
}

#[test]
fn test_users_wrapper_unwraps() {
    let raw = json!({ "users": [{ "name": "W", "admissionNo": "A1" }, { "name": "X" }] });
    let records = StudentService::normalize(&raw);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, "A1-0");
    assert_eq!(records[1].id, "unknown-1");
}

#[test]
fn test_non_list_responses_are_empty() {
    assert!(StudentService::normalize(&Value::Null).is_empty());
    assert!(StudentService::normalize(&json!(true)).is_empty());
    assert!(StudentService::normalize(&json!({ "data": {} })).is_empty());
}
