//! Todo item repository: storage plus the chain linkage operations.
//!
//! # Responsibility
//! - Provide persistence APIs for the `todo_items` table.
//! - Own the doubly-linked ordering protocol: head insertion, slot
//!   placement, and removal with neighbor re-linking.
//!
//! # Invariants
//! - Per category there is at most one head (`left_uuid IS NULL`) and one
//!   tail (`right_uuid IS NULL`) after every committed operation.
//! - Pointer pairs stay mutually consistent: `A.right_uuid = B` iff
//!   `B.left_uuid = A`.
//! - Neighbor pointers never cross category boundaries.
//! - Every pointer rewrite group commits inside one immediate transaction.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::item::{CategoryId, ItemId, TodoItem};
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension, Row, Transaction, TransactionBehavior};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;
use uuid::Uuid;

const ITEM_SELECT_SQL: &str = "SELECT
    uuid,
    category_uuid,
    left_uuid,
    right_uuid,
    title,
    description,
    is_done,
    created_at,
    updated_at
FROM todo_items";

/// Result type used by item repository operations.
pub type ItemRepoResult<T> = Result<T, ItemRepoError>;

/// Errors from item repository and chain linkage operations.
#[derive(Debug)]
pub enum ItemRepoError {
    /// Underlying SQLite/bootstrap error.
    Db(DbError),
    /// Referenced item does not exist.
    ItemNotFound(ItemId),
    /// Referenced category does not exist.
    CategoryNotFound(CategoryId),
    /// Supplied neighbor pair is not currently adjacent (stale client view),
    /// or an item was asked to become its own neighbor.
    OrderingConflict {
        item_uuid: ItemId,
        left_uuid: Option<ItemId>,
        right_uuid: Option<ItemId>,
    },
    /// Supplied neighbor belongs to a different category than the target.
    CategoryMismatch {
        neighbor_uuid: ItemId,
        expected_category: CategoryId,
        actual_category: CategoryId,
    },
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing.
    MissingRequiredTable(&'static str),
    /// Required column is missing from expected table.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
    /// Persisted data cannot be converted to a valid read model.
    InvalidData(String),
}

impl Display for ItemRepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::ItemNotFound(id) => write!(f, "todo item not found: {id}"),
            Self::CategoryNotFound(id) => write!(f, "category not found: {id}"),
            Self::OrderingConflict {
                item_uuid,
                left_uuid,
                right_uuid,
            } => write!(
                f,
                "stale ordering for item {item_uuid}: left={} right={} is not an open slot",
                format_optional_id(*left_uuid),
                format_optional_id(*right_uuid)
            ),
            Self::CategoryMismatch {
                neighbor_uuid,
                expected_category,
                actual_category,
            } => write!(
                f,
                "neighbor {neighbor_uuid} belongs to category {actual_category}, expected {expected_category}"
            ),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "item repository requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "item repository requires table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => write!(
                f,
                "item repository requires column `{column}` in table `{table}`"
            ),
            Self::InvalidData(message) => write!(f, "invalid todo item data: {message}"),
        }
    }
}

impl Error for ItemRepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for ItemRepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for ItemRepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Payload fields for creating one item. Pointers are never part of the
/// draft; placement is decided by the linkage operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub title: String,
    pub description: String,
    pub is_done: bool,
}

/// Partial payload update. `None` fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub is_done: Option<bool>,
}

/// Repository interface for item storage and chain linkage.
pub trait ItemRepository {
    /// Loads one item by id.
    fn get_item(&self, item_uuid: ItemId) -> ItemRepoResult<Option<TodoItem>>;
    /// Returns the category chain in head-to-tail order.
    fn chain(&self, category_uuid: CategoryId) -> ItemRepoResult<Vec<TodoItem>>;
    /// Counts stored items for one category.
    fn count_items(&self, category_uuid: CategoryId) -> ItemRepoResult<u64>;
    /// Creates one item and links it in as the new chain head.
    fn create_item_at_head(
        &self,
        category_uuid: CategoryId,
        draft: &ItemDraft,
    ) -> ItemRepoResult<TodoItem>;
    /// Moves one item into the slot between the given neighbors, possibly
    /// in a different category.
    fn place_item(
        &self,
        item_uuid: ItemId,
        new_left_uuid: Option<ItemId>,
        new_right_uuid: Option<ItemId>,
        new_category_uuid: CategoryId,
    ) -> ItemRepoResult<TodoItem>;
    /// Updates payload fields without touching chain pointers.
    fn update_payload(&self, item_uuid: ItemId, patch: &ItemPatch) -> ItemRepoResult<TodoItem>;
    /// Removes one item, re-linking its former neighbors to each other.
    fn remove_item(&self, item_uuid: ItemId) -> ItemRepoResult<()>;
}

/// SQLite-backed item repository.
pub struct SqliteItemRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteItemRepository<'conn> {
    /// Creates repository from migrated connection.
    pub fn try_new(conn: &'conn Connection) -> ItemRepoResult<Self> {
        ensure_item_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl ItemRepository for SqliteItemRepository<'_> {
    fn get_item(&self, item_uuid: ItemId) -> ItemRepoResult<Option<TodoItem>> {
        load_item(self.conn, item_uuid)
    }

    fn chain(&self, category_uuid: CategoryId) -> ItemRepoResult<Vec<TodoItem>> {
        collect_chain(self.conn, category_uuid)
    }

    fn count_items(&self, category_uuid: CategoryId) -> ItemRepoResult<u64> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM todo_items WHERE category_uuid = ?1;",
            [category_uuid.to_string()],
            |row| row.get(0),
        )?;
        Ok(count as u64)
    }

    fn create_item_at_head(
        &self,
        category_uuid: CategoryId,
        draft: &ItemDraft,
    ) -> ItemRepoResult<TodoItem> {
        let started_at = Instant::now();
        let result = self.create_item_at_head_in_tx(category_uuid, draft);

        match &result {
            Ok(created) => info!(
                "event=item_create module=repo status=ok item={} category={} duration_ms={}",
                created.uuid,
                category_uuid,
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=item_create module=repo status=error category={} duration_ms={} error={}",
                category_uuid,
                started_at.elapsed().as_millis(),
                err
            ),
        }
        result
    }

    fn place_item(
        &self,
        item_uuid: ItemId,
        new_left_uuid: Option<ItemId>,
        new_right_uuid: Option<ItemId>,
        new_category_uuid: CategoryId,
    ) -> ItemRepoResult<TodoItem> {
        let started_at = Instant::now();
        let result = self.place_item_in_tx(
            item_uuid,
            new_left_uuid,
            new_right_uuid,
            new_category_uuid,
        );

        match &result {
            Ok(_) => info!(
                "event=item_place module=repo status=ok item={} category={} duration_ms={}",
                item_uuid,
                new_category_uuid,
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=item_place module=repo status=error item={} category={} duration_ms={} error={}",
                item_uuid,
                new_category_uuid,
                started_at.elapsed().as_millis(),
                err
            ),
        }
        result
    }

    fn update_payload(&self, item_uuid: ItemId, patch: &ItemPatch) -> ItemRepoResult<TodoItem> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let item = load_item(&tx, item_uuid)?.ok_or(ItemRepoError::ItemNotFound(item_uuid))?;

        let title = patch.title.as_deref().unwrap_or(item.title.as_str());
        let description = patch
            .description
            .as_deref()
            .unwrap_or(item.description.as_str());
        let is_done = patch.is_done.unwrap_or(item.is_done);

        tx.execute(
            "UPDATE todo_items
             SET title = ?2,
                 description = ?3,
                 is_done = ?4,
                 updated_at = (strftime('%s', 'now') * 1000)
             WHERE uuid = ?1;",
            params![
                item_uuid.to_string(),
                title,
                description,
                bool_to_int(is_done),
            ],
        )?;

        let updated = load_required_item(&tx, item_uuid)?;
        tx.commit()?;
        Ok(updated)
    }

    fn remove_item(&self, item_uuid: ItemId) -> ItemRepoResult<()> {
        let started_at = Instant::now();
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let item = load_item(&tx, item_uuid)?.ok_or(ItemRepoError::ItemNotFound(item_uuid))?;

        // Re-link former neighbors to each other before the delete so no row
        // ever references a missing item.
        if let Some(left_uuid) = item.left_uuid {
            set_right_pointer(&tx, left_uuid, item.right_uuid)?;
        }
        if let Some(right_uuid) = item.right_uuid {
            set_left_pointer(&tx, right_uuid, item.left_uuid)?;
        }

        tx.execute(
            "DELETE FROM todo_items WHERE uuid = ?1;",
            [item_uuid.to_string()],
        )?;

        tx.commit()?;
        info!(
            "event=item_remove module=repo status=ok item={} category={} duration_ms={}",
            item_uuid,
            item.category_uuid,
            started_at.elapsed().as_millis()
        );
        Ok(())
    }
}

impl SqliteItemRepository<'_> {
    fn create_item_at_head_in_tx(
        &self,
        category_uuid: CategoryId,
        draft: &ItemDraft,
    ) -> ItemRepoResult<TodoItem> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        ensure_category_exists(&tx, category_uuid)?;

        // The current head must be read before the insert: a freshly
        // inserted row with both pointers unset would itself match the
        // head predicate.
        let old_head = current_head(&tx, category_uuid)?;

        let item_uuid = Uuid::new_v4();
        tx.execute(
            "INSERT INTO todo_items (
                uuid,
                category_uuid,
                left_uuid,
                right_uuid,
                title,
                description,
                is_done
            ) VALUES (?1, ?2, NULL, ?3, ?4, ?5, ?6);",
            params![
                item_uuid.to_string(),
                category_uuid.to_string(),
                old_head.map(|value| value.to_string()),
                draft.title.as_str(),
                draft.description.as_str(),
                bool_to_int(draft.is_done),
            ],
        )?;

        if let Some(old_head) = old_head {
            set_left_pointer(&tx, old_head, Some(item_uuid))?;
        }

        let created = load_required_item(&tx, item_uuid)?;
        tx.commit()?;
        Ok(created)
    }

    fn place_item_in_tx(
        &self,
        item_uuid: ItemId,
        new_left_uuid: Option<ItemId>,
        new_right_uuid: Option<ItemId>,
        new_category_uuid: CategoryId,
    ) -> ItemRepoResult<TodoItem> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;

        let item = load_item(&tx, item_uuid)?.ok_or(ItemRepoError::ItemNotFound(item_uuid))?;
        ensure_category_exists(&tx, new_category_uuid)?;

        if new_left_uuid == Some(item_uuid) || new_right_uuid == Some(item_uuid) {
            return Err(ItemRepoError::OrderingConflict {
                item_uuid,
                left_uuid: new_left_uuid,
                right_uuid: new_right_uuid,
            });
        }

        // No-op placement: the item already sits in exactly this slot.
        // Return without writes so the chain stays byte-identical.
        if item.occupies_slot(new_category_uuid, new_left_uuid, new_right_uuid) {
            return Ok(item);
        }

        let new_left = load_neighbor(&tx, new_left_uuid, new_category_uuid)?;
        let new_right = load_neighbor(&tx, new_right_uuid, new_category_uuid)?;

        ensure_slot_open(&tx, &item, new_left.as_ref(), new_right.as_ref(), new_category_uuid)?;

        // Splice out of the current position: former neighbors are re-linked
        // to each other in one symmetric pair of writes.
        if let Some(old_left) = item.left_uuid {
            set_right_pointer(&tx, old_left, item.right_uuid)?;
        }
        if let Some(old_right) = item.right_uuid {
            set_left_pointer(&tx, old_right, item.left_uuid)?;
        }

        // Re-home and point the item at its new neighbors.
        tx.execute(
            "UPDATE todo_items
             SET category_uuid = ?2,
                 left_uuid = ?3,
                 right_uuid = ?4,
                 updated_at = (strftime('%s', 'now') * 1000)
             WHERE uuid = ?1;",
            params![
                item_uuid.to_string(),
                new_category_uuid.to_string(),
                new_left_uuid.map(|value| value.to_string()),
                new_right_uuid.map(|value| value.to_string()),
            ],
        )?;

        // Splice into the target slot.
        if let Some(new_left_uuid) = new_left_uuid {
            set_right_pointer(&tx, new_left_uuid, Some(item_uuid))?;
        }
        if let Some(new_right_uuid) = new_right_uuid {
            set_left_pointer(&tx, new_right_uuid, Some(item_uuid))?;
        }

        let placed = load_required_item(&tx, item_uuid)?;
        tx.commit()?;
        Ok(placed)
    }
}

/// Checks that the supplied neighbor pair brackets an open slot once the
/// moved item is conceptually spliced out of its current position.
fn ensure_slot_open(
    conn: &Connection,
    item: &TodoItem,
    new_left: Option<&TodoItem>,
    new_right: Option<&TodoItem>,
    new_category_uuid: CategoryId,
) -> ItemRepoResult<()> {
    let conflict = || ItemRepoError::OrderingConflict {
        item_uuid: item.uuid,
        left_uuid: new_left.map(|value| value.uuid),
        right_uuid: new_right.map(|value| value.uuid),
    };

    match (new_left, new_right) {
        (Some(left), Some(right)) => {
            if effective_right(left, item) != Some(right.uuid) {
                return Err(conflict());
            }
        }
        (Some(left), None) => {
            if effective_right(left, item).is_some() {
                return Err(conflict());
            }
        }
        (None, Some(right)) => {
            if effective_left(right, item).is_some() {
                return Err(conflict());
            }
        }
        (None, None) => {
            let others: i64 = conn.query_row(
                "SELECT COUNT(*) FROM todo_items WHERE category_uuid = ?1 AND uuid != ?2;",
                params![new_category_uuid.to_string(), item.uuid.to_string()],
                |row| row.get(0),
            )?;
            if others != 0 {
                return Err(conflict());
            }
        }
    }
    Ok(())
}

/// Right pointer of `node` as it will read after `item` is spliced out.
fn effective_right(node: &TodoItem, item: &TodoItem) -> Option<ItemId> {
    if node.right_uuid == Some(item.uuid) {
        item.right_uuid
    } else {
        node.right_uuid
    }
}

/// Left pointer of `node` as it will read after `item` is spliced out.
fn effective_left(node: &TodoItem, item: &TodoItem) -> Option<ItemId> {
    if node.left_uuid == Some(item.uuid) {
        item.left_uuid
    } else {
        node.left_uuid
    }
}

fn load_neighbor(
    conn: &Connection,
    neighbor_uuid: Option<ItemId>,
    expected_category: CategoryId,
) -> ItemRepoResult<Option<TodoItem>> {
    let Some(neighbor_uuid) = neighbor_uuid else {
        return Ok(None);
    };

    let neighbor =
        load_item(conn, neighbor_uuid)?.ok_or(ItemRepoError::ItemNotFound(neighbor_uuid))?;
    if neighbor.category_uuid != expected_category {
        return Err(ItemRepoError::CategoryMismatch {
            neighbor_uuid,
            expected_category,
            actual_category: neighbor.category_uuid,
        });
    }
    Ok(Some(neighbor))
}

/// Fetches all rows of one category without imposing chain order.
///
/// Shared with the chain validator, which classifies corruption from the
/// raw rows instead of trusting an ordered walk.
pub(crate) fn raw_category_items(
    conn: &Connection,
    category_uuid: CategoryId,
) -> ItemRepoResult<Vec<TodoItem>> {
    let mut stmt = conn.prepare(&format!("{ITEM_SELECT_SQL} WHERE category_uuid = ?1;"))?;
    let mut rows = stmt.query([category_uuid.to_string()])?;

    let mut items = Vec::new();
    while let Some(row) = rows.next()? {
        items.push(parse_item_row(row)?);
    }
    Ok(items)
}

fn collect_chain(conn: &Connection, category_uuid: CategoryId) -> ItemRepoResult<Vec<TodoItem>> {
    let mut by_id = std::collections::HashMap::new();
    for item in raw_category_items(conn, category_uuid)? {
        by_id.insert(item.uuid, item);
    }

    if by_id.is_empty() {
        return Ok(Vec::new());
    }

    let mut heads = by_id.values().filter(|item| item.is_head());
    let head = heads.next().ok_or_else(|| {
        ItemRepoError::InvalidData(format!("category {category_uuid} chain has no head"))
    })?;
    if heads.next().is_some() {
        return Err(ItemRepoError::InvalidData(format!(
            "category {category_uuid} chain has multiple heads"
        )));
    }

    let total = by_id.len();
    let mut ordered = Vec::with_capacity(total);
    let mut cursor = Some(head.uuid);
    while let Some(current_uuid) = cursor {
        let current = by_id.remove(&current_uuid).ok_or_else(|| {
            ItemRepoError::InvalidData(format!(
                "category {category_uuid} chain references {current_uuid} outside the category or twice"
            ))
        })?;
        cursor = current.right_uuid;
        ordered.push(current);
    }

    if ordered.len() != total {
        return Err(ItemRepoError::InvalidData(format!(
            "category {category_uuid} chain visits {} of {total} items",
            ordered.len()
        )));
    }

    Ok(ordered)
}

fn current_head(conn: &Connection, category_uuid: CategoryId) -> ItemRepoResult<Option<ItemId>> {
    let value: Option<String> = conn
        .query_row(
            "SELECT uuid
             FROM todo_items
             WHERE category_uuid = ?1
               AND left_uuid IS NULL;",
            [category_uuid.to_string()],
            |row| row.get(0),
        )
        .optional()?;
    value
        .map(|value| parse_uuid(&value, "todo_items.uuid"))
        .transpose()
}

fn ensure_category_exists(conn: &Connection, category_uuid: CategoryId) -> ItemRepoResult<()> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM categories WHERE uuid = ?1);",
        [category_uuid.to_string()],
        |row| row.get(0),
    )?;
    if exists == 1 {
        Ok(())
    } else {
        Err(ItemRepoError::CategoryNotFound(category_uuid))
    }
}

fn set_left_pointer(
    conn: &Connection,
    item_uuid: ItemId,
    left_uuid: Option<ItemId>,
) -> ItemRepoResult<()> {
    let changed = conn.execute(
        "UPDATE todo_items
         SET left_uuid = ?2,
             updated_at = (strftime('%s', 'now') * 1000)
         WHERE uuid = ?1;",
        params![
            item_uuid.to_string(),
            left_uuid.map(|value| value.to_string()),
        ],
    )?;
    if changed == 0 {
        return Err(ItemRepoError::ItemNotFound(item_uuid));
    }
    Ok(())
}

fn set_right_pointer(
    conn: &Connection,
    item_uuid: ItemId,
    right_uuid: Option<ItemId>,
) -> ItemRepoResult<()> {
    let changed = conn.execute(
        "UPDATE todo_items
         SET right_uuid = ?2,
             updated_at = (strftime('%s', 'now') * 1000)
         WHERE uuid = ?1;",
        params![
            item_uuid.to_string(),
            right_uuid.map(|value| value.to_string()),
        ],
    )?;
    if changed == 0 {
        return Err(ItemRepoError::ItemNotFound(item_uuid));
    }
    Ok(())
}

fn load_item(conn: &Connection, item_uuid: ItemId) -> ItemRepoResult<Option<TodoItem>> {
    let mut stmt = conn.prepare(&format!("{ITEM_SELECT_SQL} WHERE uuid = ?1;"))?;
    let mut rows = stmt.query([item_uuid.to_string()])?;
    if let Some(row) = rows.next()? {
        return Ok(Some(parse_item_row(row)?));
    }
    Ok(None)
}

fn load_required_item(conn: &Connection, item_uuid: ItemId) -> ItemRepoResult<TodoItem> {
    load_item(conn, item_uuid)?.ok_or(ItemRepoError::ItemNotFound(item_uuid))
}

fn parse_item_row(row: &Row<'_>) -> ItemRepoResult<TodoItem> {
    let uuid_text: String = row.get("uuid")?;
    let uuid = parse_uuid(&uuid_text, "todo_items.uuid")?;

    let category_text: String = row.get("category_uuid")?;
    let category_uuid = parse_uuid(&category_text, "todo_items.category_uuid")?;

    let left_uuid = row
        .get::<_, Option<String>>("left_uuid")?
        .map(|value| parse_uuid(&value, "todo_items.left_uuid"))
        .transpose()?;
    let right_uuid = row
        .get::<_, Option<String>>("right_uuid")?
        .map(|value| parse_uuid(&value, "todo_items.right_uuid"))
        .transpose()?;

    let is_done = match row.get::<_, i64>("is_done")? {
        0 => false,
        1 => true,
        other => {
            return Err(ItemRepoError::InvalidData(format!(
                "invalid is_done value `{other}` in todo_items.is_done"
            )));
        }
    };

    Ok(TodoItem {
        uuid,
        category_uuid,
        left_uuid,
        right_uuid,
        title: row.get("title")?,
        description: row.get("description")?,
        is_done,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

fn parse_uuid(value: &str, column: &'static str) -> ItemRepoResult<Uuid> {
    Uuid::parse_str(value)
        .map_err(|_| ItemRepoError::InvalidData(format!("invalid uuid `{value}` in {column}")))
}

fn format_optional_id(value: Option<ItemId>) -> String {
    value.map_or_else(|| "none".to_string(), |value| value.to_string())
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}

fn ensure_item_connection_ready(conn: &Connection) -> ItemRepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(ItemRepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    for table in ["todo_items", "categories"] {
        if !table_exists(conn, table)? {
            return Err(ItemRepoError::MissingRequiredTable(table));
        }
    }

    for column in [
        "uuid",
        "category_uuid",
        "left_uuid",
        "right_uuid",
        "title",
        "description",
        "is_done",
        "created_at",
        "updated_at",
    ] {
        if !table_has_column(conn, "todo_items", column)? {
            return Err(ItemRepoError::MissingRequiredColumn {
                table: "todo_items",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> ItemRepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> ItemRepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
