use tidylist_core::db::open_db_in_memory;
use tidylist_core::{
    validate_chain, CategoryService, CategoryServiceError, ItemPatch, SqliteCategoryRepository,
    SqliteItemRepository, StatusFilter, TodoItemService, TodoServiceError,
};
use uuid::Uuid;

fn setup() -> rusqlite::Connection {
    open_db_in_memory().unwrap()
}

fn item_service(
    conn: &rusqlite::Connection,
) -> TodoItemService<SqliteItemRepository<'_>, SqliteCategoryRepository<'_>> {
    TodoItemService::new(
        SqliteItemRepository::try_new(conn).unwrap(),
        SqliteCategoryRepository::new(conn),
    )
}

fn category_service(
    conn: &rusqlite::Connection,
) -> CategoryService<SqliteCategoryRepository<'_>> {
    CategoryService::new(SqliteCategoryRepository::new(conn))
}

#[test]
fn create_item_in_foreign_category_is_rejected() {
    let conn = setup();
    let owner = Uuid::new_v4();
    let stranger = Uuid::new_v4();

    let category = category_service(&conn)
        .create_category(owner, "Work", "-")
        .unwrap();

    let err = item_service(&conn)
        .create_item(stranger, category.uuid, "intrude", "-")
        .unwrap_err();
    assert!(matches!(err, TodoServiceError::ForeignCategory(id) if id == category.uuid));
}

#[test]
fn create_item_requires_non_blank_title() {
    let conn = setup();
    let owner = Uuid::new_v4();
    let category = category_service(&conn)
        .create_category(owner, "Work", "-")
        .unwrap();

    let err = item_service(&conn)
        .create_item(owner, category.uuid, "   ", "-")
        .unwrap_err();
    assert!(matches!(err, TodoServiceError::InvalidTitle));
}

#[test]
fn created_items_list_newest_first() {
    let conn = setup();
    let owner = Uuid::new_v4();
    let category = category_service(&conn)
        .create_category(owner, "Work", "-")
        .unwrap();
    let service = item_service(&conn);

    service.create_item(owner, category.uuid, "one", "-").unwrap();
    service.create_item(owner, category.uuid, "two", "-").unwrap();
    service
        .create_item(owner, category.uuid, "three", "-")
        .unwrap();

    let items = service
        .list_items(owner, category.uuid, StatusFilter::All)
        .unwrap();
    let titles: Vec<&str> = items.iter().map(|item| item.title.as_str()).collect();
    assert_eq!(titles, vec!["three", "two", "one"]);
}

#[test]
fn status_filter_narrows_listing_without_touching_pointers() {
    let conn = setup();
    let owner = Uuid::new_v4();
    let category = category_service(&conn)
        .create_category(owner, "Work", "-")
        .unwrap();
    let service = item_service(&conn);

    let a = service.create_item(owner, category.uuid, "a", "-").unwrap();
    let b = service.create_item(owner, category.uuid, "b", "-").unwrap();
    let c = service.create_item(owner, category.uuid, "c", "-").unwrap();

    let patch = ItemPatch {
        is_done: Some(true),
        ..ItemPatch::default()
    };
    service.update_item(owner, b.uuid, patch).unwrap();

    let done = service
        .list_items(owner, category.uuid, StatusFilter::Done)
        .unwrap();
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].uuid, b.uuid);

    let pending = service
        .list_items(owner, category.uuid, StatusFilter::Pending)
        .unwrap();
    let pending_ids: Vec<Uuid> = pending.iter().map(|item| item.uuid).collect();
    assert_eq!(pending_ids, vec![c.uuid, a.uuid]);

    // Filtering is a view concern; the stored chain is intact and complete.
    let all = service
        .list_items(owner, category.uuid, StatusFilter::All)
        .unwrap();
    assert_eq!(all.len(), 3);
    assert!(validate_chain(&conn, category.uuid).unwrap().is_consistent());
}

#[test]
fn update_item_changes_payload_but_not_position() {
    let conn = setup();
    let owner = Uuid::new_v4();
    let category = category_service(&conn)
        .create_category(owner, "Work", "-")
        .unwrap();
    let service = item_service(&conn);

    service.create_item(owner, category.uuid, "x", "-").unwrap();
    let target = service.create_item(owner, category.uuid, "y", "-").unwrap();
    service.create_item(owner, category.uuid, "z", "-").unwrap();

    let patch = ItemPatch {
        title: Some("renamed".to_string()),
        description: Some("details".to_string()),
        is_done: Some(true),
    };
    let updated = service.update_item(owner, target.uuid, patch).unwrap();

    assert_eq!(updated.title, "renamed");
    assert_eq!(updated.description, "details");
    assert!(updated.is_done);
    assert_eq!(updated.left_uuid, target.left_uuid);
    assert_eq!(updated.right_uuid, target.right_uuid);
    assert_eq!(updated.category_uuid, target.category_uuid);
}

#[test]
fn move_item_across_own_categories() {
    let conn = setup();
    let owner = Uuid::new_v4();
    let categories = category_service(&conn);
    let todo = categories.create_category(owner, "Todo", "-").unwrap();
    let doing = categories.create_category(owner, "Doing", "-").unwrap();
    let service = item_service(&conn);

    let task = service.create_item(owner, todo.uuid, "task", "-").unwrap();
    service.create_item(owner, todo.uuid, "other", "-").unwrap();

    let moved = service
        .move_item(owner, task.uuid, None, None, doing.uuid)
        .unwrap();
    assert_eq!(moved.category_uuid, doing.uuid);

    let todo_items = service
        .list_items(owner, todo.uuid, StatusFilter::All)
        .unwrap();
    assert_eq!(todo_items.len(), 1);

    let doing_items = service
        .list_items(owner, doing.uuid, StatusFilter::All)
        .unwrap();
    assert_eq!(doing_items.len(), 1);
    assert_eq!(doing_items[0].uuid, task.uuid);
}

#[test]
fn move_into_foreign_category_is_rejected() {
    let conn = setup();
    let owner = Uuid::new_v4();
    let stranger = Uuid::new_v4();
    let categories = category_service(&conn);
    let mine = categories.create_category(owner, "Mine", "-").unwrap();
    let theirs = categories.create_category(stranger, "Theirs", "-").unwrap();
    let service = item_service(&conn);

    let item = service.create_item(owner, mine.uuid, "task", "-").unwrap();
    let err = service
        .move_item(owner, item.uuid, None, None, theirs.uuid)
        .unwrap_err();
    assert!(matches!(err, TodoServiceError::ForeignCategory(id) if id == theirs.uuid));
}

#[test]
fn foreign_items_are_invisible() {
    let conn = setup();
    let owner = Uuid::new_v4();
    let stranger = Uuid::new_v4();
    let categories = category_service(&conn);
    let theirs = categories.create_category(stranger, "Theirs", "-").unwrap();
    let mine = categories.create_category(owner, "Mine", "-").unwrap();
    let service = item_service(&conn);

    let foreign_item = service
        .create_item(stranger, theirs.uuid, "secret", "-")
        .unwrap();

    let err = service
        .move_item(owner, foreign_item.uuid, None, None, mine.uuid)
        .unwrap_err();
    assert!(matches!(err, TodoServiceError::ItemNotFound(id) if id == foreign_item.uuid));

    let err = service.delete_item(owner, foreign_item.uuid).unwrap_err();
    assert!(matches!(err, TodoServiceError::ItemNotFound(_)));
}

#[test]
fn delete_item_relinks_remaining_chain() {
    let conn = setup();
    let owner = Uuid::new_v4();
    let category = category_service(&conn)
        .create_category(owner, "Work", "-")
        .unwrap();
    let service = item_service(&conn);

    service.create_item(owner, category.uuid, "a", "-").unwrap();
    let middle = service.create_item(owner, category.uuid, "b", "-").unwrap();
    service.create_item(owner, category.uuid, "c", "-").unwrap();

    service.delete_item(owner, middle.uuid).unwrap();

    let items = service
        .list_items(owner, category.uuid, StatusFilter::All)
        .unwrap();
    let titles: Vec<&str> = items.iter().map(|item| item.title.as_str()).collect();
    assert_eq!(titles, vec!["c", "a"]);
    assert!(validate_chain(&conn, category.uuid).unwrap().is_consistent());
}

#[test]
fn category_service_scopes_reads_to_owner() {
    let conn = setup();
    let owner = Uuid::new_v4();
    let stranger = Uuid::new_v4();
    let service = category_service(&conn);

    let first = service.create_category(owner, "First", "-").unwrap();
    service.create_category(owner, "Second", "-").unwrap();
    service.create_category(stranger, "Other", "-").unwrap();

    let listed = service.list_categories(owner).unwrap();
    assert_eq!(listed.len(), 2);

    let loaded = service.get_category(owner, first.uuid).unwrap();
    assert_eq!(loaded.title, "First");

    let err = service.get_category(stranger, first.uuid).unwrap_err();
    assert!(matches!(err, CategoryServiceError::CategoryNotFound(_)));

    let err = service.create_category(owner, "  ", "-").unwrap_err();
    assert!(matches!(err, CategoryServiceError::InvalidTitle));
}
