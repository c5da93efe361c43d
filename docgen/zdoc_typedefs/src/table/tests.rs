#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;
use zdoc_diagnostic::ErrorCode;

fn sample() -> TypedefDatabase {
    let mut db = TypedefDatabase::new();
    db.extend([
        TypedefEntry::from_declaration(
            NamespacePath::from_names(["Zero"]),
            "Real3Param",
            "typedef const Math::Vector3& Real3Param",
        ),
        TypedefEntry::from_declaration(NamespacePath::new(), "cstr", "typedef const char* cstr"),
    ]);
    db
}

#[test]
fn records_keep_namespace_and_joined_definition() {
    let table = TypedefTable::from_database(&sample());
    assert_eq!(
        table.typedefs[0],
        TypedefRecord {
            namespace: vec!["Zero".to_string()],
            name: "Real3Param".to_string(),
            definition: "const Math :: Vector3 &".to_string(),
        }
    );
}

#[test]
fn reloaded_table_rebuilds_equal_entries() {
    let db = sample();
    let json = TypedefTable::from_database(&db).to_json().unwrap();

    let mut diags = DiagnosticQueue::new();
    let reloaded = TypedefTable::from_json(&json)
        .unwrap()
        .into_database(&mut diags);

    assert_eq!(reloaded.entries(), db.entries());
    assert!(diags.is_empty());
}

#[test]
fn save_and_load_through_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("typedefs.json");
    let table = TypedefTable::from_database(&sample());

    table.save(&path).unwrap();
    let loaded = TypedefTable::load(&path).unwrap();
    assert_eq!(loaded, table);
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = TypedefTable::load(&dir.path().join("absent.json"));
    assert!(matches!(err, Err(TableError::Read { .. })));
}

#[test]
fn malformed_json_is_a_json_error() {
    assert!(matches!(
        TypedefTable::from_json("{\"typedefs\": 3}"),
        Err(TableError::Json(_))
    ));
}

#[test]
fn duplicate_records_warn_on_insert() {
    let record = TypedefRecord {
        namespace: vec![],
        name: "Real".to_string(),
        definition: "float".to_string(),
    };
    let table = TypedefTable {
        typedefs: vec![record.clone(), record],
    };
    let mut diags = DiagnosticQueue::new();
    let db = table.into_database(&mut diags);
    assert_eq!(db.len(), 1);
    assert_eq!(diags.count_of(ErrorCode::W1001), 1);
}

#[test]
fn missing_optional_fields_default() {
    let table = TypedefTable::from_json(r#"{"typedefs":[{"name":"Opaque"}]}"#).unwrap();
    assert_eq!(table.typedefs.len(), 1);
    assert!(table.typedefs[0].namespace.is_empty());
    assert!(table.typedefs[0].definition.is_empty());
}
