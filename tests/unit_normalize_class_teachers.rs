use classdesk::modules::class_teachers::ClassTeacherService;
use serde_json::{Value, json};

#[test]
fn test_flat_row() {
    let raw = json!([{
        "name": "R. Perera",
        "staffNo": "T7",
        "grade": "5",
        "class": "A",
        "subject": "Maths",
        "medium": "English"
    }]);

    let records = ClassTeacherService::normalize(&raw);
    assert_eq!(records.len(), 1);

    let row = &records[0];
    assert_eq!(row.id, "T7-0");
    assert_eq!(row.name, "R. Perera");
    assert_eq!(row.grade, "5");
    assert_eq!(row.class_name, "A");
    assert_eq!(row.subject, "Maths");
}

#[test]
fn test_nested_teacher_row() {
    let raw = json!([{
        "grade": "6",
        "class": "B",
        "subject": "Science",
        "teacher": { "name": "M. de Silva", "staffNo": "T8" }
    }]);

    let records = ClassTeacherService::normalize(&raw);
    let row = &records[0];
    assert_eq!(row.name, "M. de Silva");
    assert_eq!(row.staff_no, "T8");
    assert_eq!(row.id, "T8-0");
    assert_eq!(row.class_name, "B");
}

#[test]
fn test_index_keeps_synthesized_ids_distinct() {
    let raw = json!([
        { "staffNo": "T9", "grade": "5", "class": "A" },
        { "staffNo": "T9", "grade": "5", "class": "B" }
    ]);

    let records = ClassTeacherService::normalize(&raw);
    assert_eq!(records[0].id, "T9-0");
    assert_eq!(records[1].id, "T9-1");
}

#[test]
fn test_non_list_responses_are_empty() {
    assert!(ClassTeacherService::normalize(&Value::Null).is_empty());
    assert!(ClassTeacherService::normalize(&json!({})).is_empty());
    assert!(ClassTeacherService::normalize(&json!("nope")).is_empty());
}
