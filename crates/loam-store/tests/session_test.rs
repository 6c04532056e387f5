// Integration tests for the unit-of-work session

use loam_core::{ColumnDef, ColumnType, Row, SchemaRegistry, SqlValue, TableDef};
use loam_store::{persist, repo, Session};
use rusqlite::Connection;

fn games_table() -> TableDef {
    TableDef::new("games")
        .column(ColumnDef::new("id", ColumnType::Integer).primary_key())
        .column(ColumnDef::new("name", ColumnType::Text))
        .build()
        .unwrap()
}

fn setup() -> (Connection, SchemaRegistry) {
    let mut registry = SchemaRegistry::new();
    registry.register(games_table()).unwrap();

    let conn = loam_store::db::open_in_memory().unwrap();
    persist::create_all(&conn, &registry).unwrap();
    (conn, registry)
}

#[test]
fn test_single_add_then_commit_round_trip() {
    // Given: A declared and persisted record type (id: integer key, name: text)
    let (mut conn, registry) = setup();

    // When: One instance {name: "Breath of the Wild"} is committed
    let mut session = Session::new(&mut conn, &registry);
    session
        .add(Row::new("games").set("name", "Breath of the Wild"))
        .unwrap();
    let committed = session.commit().unwrap();

    // Then: Exactly one row exists, with a non-null generated id
    assert_eq!(committed.len(), 1);
    let id = committed[0].get("id").unwrap().clone();
    assert!(!id.is_null());

    let table = games_table();
    assert_eq!(repo::count(&conn, &table).unwrap(), 1);

    // And: The row is retrievable with all field values equal
    let fetched = repo::get_by_key(&conn, &table, &id).unwrap().unwrap();
    assert_eq!(
        fetched.get("name").unwrap().as_text(),
        Some("Breath of the Wild")
    );
}

#[test]
fn test_bulk_add_then_commit() {
    let (mut conn, registry) = setup();

    // When: Two instances are committed in one batch
    let mut session = Session::new(&mut conn, &registry);
    session
        .add_all(vec![
            Row::new("games").set("name", "Super Mario Odyssey"),
            Row::new("games").set("name", "Celeste"),
        ])
        .unwrap();
    let committed = session.commit().unwrap();

    // Then: Exactly two new rows, each preserving its field values
    assert_eq!(committed.len(), 2);
    let table = games_table();
    assert_eq!(repo::count(&conn, &table).unwrap(), 2);

    let all = repo::fetch_all(&conn, &table).unwrap();
    let names: Vec<&str> = all
        .iter()
        .map(|r| r.get("name").unwrap().as_text().unwrap())
        .collect();
    assert_eq!(names, vec!["Super Mario Odyssey", "Celeste"]);

    // And: Generated keys are distinct
    assert_ne!(committed[0].get("id"), committed[1].get("id"));
}

#[test]
fn test_sequential_commits_on_one_session() {
    let (mut conn, registry) = setup();
    let mut session = Session::new(&mut conn, &registry);

    session.add(Row::new("games").set("name", "Hades")).unwrap();
    session.commit().unwrap();

    session
        .add(Row::new("games").set("name", "Hollow Knight"))
        .unwrap();
    session.commit().unwrap();

    assert_eq!(repo::count(&conn, &games_table()).unwrap(), 2);
}

#[test]
fn test_commit_with_no_pending_rows() {
    let (mut conn, registry) = setup();
    let mut session = Session::new(&mut conn, &registry);

    let committed = session.commit().unwrap();
    assert!(committed.is_empty());
    assert_eq!(repo::count(&conn, &games_table()).unwrap(), 0);
}

#[test]
fn test_explicit_key_is_preserved() {
    let (mut conn, registry) = setup();
    let mut session = Session::new(&mut conn, &registry);

    session
        .add(Row::new("games").set("id", 7i64).set("name", "Okami"))
        .unwrap();
    let committed = session.commit().unwrap();

    assert_eq!(committed[0].get("id"), Some(&SqlValue::Integer(7)));
    let fetched = repo::get_by_key(&conn, &games_table(), &SqlValue::Integer(7))
        .unwrap()
        .unwrap();
    assert_eq!(fetched.get("name").unwrap().as_text(), Some("Okami"));
}
