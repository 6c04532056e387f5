// Integration tests for the persistence runner

use loam_core::{ColumnDef, ColumnType, DefaultRule, SchemaRegistry, TableDef};
use loam_store::persist::{create_all, table_names};

fn curriculum_registry() -> SchemaRegistry {
    let mut registry = SchemaRegistry::new();
    registry
        .register(
            TableDef::new("students")
                .column(ColumnDef::new("id", ColumnType::Integer).primary_key())
                .column(ColumnDef::new("name", ColumnType::Text).not_null())
                .column(
                    ColumnDef::new("enrolled_date", ColumnType::Timestamp)
                        .default_rule(DefaultRule::CurrentTimestamp),
                )
                .build()
                .unwrap(),
        )
        .unwrap();
    registry
        .register(
            TableDef::new("games")
                .column(ColumnDef::new("id", ColumnType::Integer).primary_key())
                .column(ColumnDef::new("name", ColumnType::Text))
                .build()
                .unwrap(),
        )
        .unwrap();
    registry
}

#[test]
fn test_create_all_materializes_every_table() {
    let conn = loam_store::db::open_in_memory().unwrap();

    create_all(&conn, &curriculum_registry()).unwrap();

    assert_eq!(table_names(&conn).unwrap(), vec!["games", "students"]);
}

#[test]
fn test_create_all_twice_equals_once() {
    // Given: A database where create_all already ran
    let conn = loam_store::db::open_in_memory().unwrap();
    let registry = curriculum_registry();
    create_all(&conn, &registry).unwrap();
    let tables_once = table_names(&conn).unwrap();

    // When: create_all runs a second time
    create_all(&conn, &registry).unwrap();

    // Then: The resulting table set is identical
    assert_eq!(table_names(&conn).unwrap(), tables_once);
}

#[test]
fn test_create_all_writes_no_rows() {
    let conn = loam_store::db::open_in_memory().unwrap();
    create_all(&conn, &curriculum_registry()).unwrap();

    for table in ["students", "games"] {
        let count: i64 = conn
            .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |r| {
                r.get(0)
            })
            .unwrap();
        assert_eq!(count, 0, "{} should be empty", table);
    }
}

#[test]
fn test_timestamp_default_applies_on_insert() {
    let conn = loam_store::db::open_in_memory().unwrap();
    create_all(&conn, &curriculum_registry()).unwrap();

    conn.execute("INSERT INTO students (name) VALUES ('Ada')", [])
        .unwrap();

    let enrolled: Option<String> = conn
        .query_row("SELECT enrolled_date FROM students", [], |r| r.get(0))
        .unwrap();
    assert!(enrolled.is_some(), "default timestamp should be generated");
}

#[test]
fn test_create_all_on_file_backed_db() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("school.db");

    let conn = loam_store::db::open(&path).unwrap();
    loam_store::db::configure(&conn).unwrap();
    create_all(&conn, &curriculum_registry()).unwrap();
    drop(conn);

    let conn = loam_store::db::open(&path).unwrap();
    assert_eq!(table_names(&conn).unwrap(), vec!["games", "students"]);
}
