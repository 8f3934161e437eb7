use tidylist_core::db::migrations::latest_version;
use tidylist_core::db::{open_db, open_db_in_memory};

#[test]
fn migrations_apply_and_mirror_user_version() {
    let conn = open_db_in_memory().unwrap();
    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());
}

#[test]
fn migration_creates_chain_tables() {
    let conn = open_db_in_memory().unwrap();

    for table in ["categories", "todo_items"] {
        let exists: i64 = conn
            .query_row(
                "SELECT EXISTS(
                    SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1
                );",
                [table],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(exists, 1, "table {table} should exist after migrations");
    }

    let mut stmt = conn.prepare("PRAGMA table_info(todo_items);").unwrap();
    let mut rows = stmt.query([]).unwrap();
    let mut columns = Vec::new();
    while let Some(row) = rows.next().unwrap() {
        let column_name: String = row.get(1).unwrap();
        columns.push(column_name);
    }
    for column in [
        "uuid",
        "category_uuid",
        "left_uuid",
        "right_uuid",
        "title",
        "description",
        "is_done",
    ] {
        assert!(
            columns.contains(&column.to_string()),
            "todo_items should have column {column}"
        );
    }
}

#[test]
fn todo_items_has_no_position_column() {
    let conn = open_db_in_memory().unwrap();

    let mut stmt = conn.prepare("PRAGMA table_info(todo_items);").unwrap();
    let mut rows = stmt.query([]).unwrap();
    while let Some(row) = rows.next().unwrap() {
        let column_name: String = row.get(1).unwrap();
        assert!(
            !matches!(column_name.as_str(), "position" | "rank" | "sort_order"),
            "ordering must be pointer-based, found numeric order column {column_name}"
        );
    }
}

#[test]
fn reopening_file_db_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tidylist.db");

    {
        let conn = open_db(&path).unwrap();
        conn.execute(
            "INSERT INTO categories (uuid, owner_uuid, title) VALUES ('c1', 'o1', 'Inbox');",
            [],
        )
        .unwrap();
    }

    let conn = open_db(&path).unwrap();
    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM categories;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn connections_enforce_foreign_keys() {
    let conn = open_db_in_memory().unwrap();
    let enabled: i64 = conn
        .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(enabled, 1);

    let result = conn.execute(
        "INSERT INTO todo_items (uuid, category_uuid, title) VALUES ('i1', 'missing', 't');",
        [],
    );
    assert!(result.is_err(), "item insert must require a real category");
}
