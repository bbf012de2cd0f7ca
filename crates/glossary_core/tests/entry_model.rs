use glossary_core::Entry;

#[test]
fn new_returns_blank_unsaved_template() {
    let entry = Entry::new();

    assert_eq!(entry.id, Entry::UNASSIGNED_ID);
    assert_eq!(entry.term, "");
    assert_eq!(entry.definition, "");
    assert!(!entry.is_persisted());
}

#[test]
fn with_fields_marks_positive_ids_as_persisted() {
    let entry = Entry::with_fields(7, "Recursion", "See: recursion.");

    assert_eq!(entry.id, 7);
    assert!(entry.is_persisted());
}

#[test]
fn validate_accepts_well_formed_entries() {
    let entry = Entry::with_fields(0, "Idempotent", "Safe to repeat.");
    assert!(entry.validate().is_empty());

    let at_limit = Entry::with_fields(0, "x".repeat(255), "still fine");
    assert!(at_limit.validate().is_empty());
}

#[test]
fn validate_rejects_blank_term() {
    let empty = Entry::with_fields(0, "", "has definition");
    let errors = empty.validate();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "term");
    assert_eq!(errors[0].message, "A Term is required");

    let whitespace = Entry::with_fields(0, "   ", "has definition");
    assert_eq!(whitespace.validate()[0].field, "term");
}

#[test]
fn validate_rejects_overlong_term() {
    let entry = Entry::with_fields(0, "x".repeat(256), "has definition");
    let errors = entry.validate();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "term");
    assert!(errors[0].message.contains("255"));
}

#[test]
fn validate_rejects_blank_definition() {
    let entry = Entry::with_fields(0, "Term", " ");
    let errors = entry.validate();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "definition");
    assert_eq!(errors[0].message, "A Definition is required");
}

#[test]
fn validate_reports_one_error_per_offending_field() {
    let entry = Entry::new();
    let errors = entry.validate();

    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].field, "term");
    assert_eq!(errors[1].field, "definition");
}

#[test]
fn entry_serialization_uses_expected_wire_fields() {
    let entry = Entry::with_fields(3, "CRUD", "Create, read, update, delete.");

    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["id"], 3);
    assert_eq!(json["term"], "CRUD");
    assert_eq!(json["definition"], "Create, read, update, delete.");

    let decoded: Entry = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, entry);
}
