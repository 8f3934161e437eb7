//! Category repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide persistence APIs for the `categories` table.
//! - Answer the ownership/existence checks gating every chain operation.
//!
//! # Invariants
//! - `category_exists` is the single source of truth for "this owner may
//!   touch this chain".
//! - Category listings are deterministic: `created_at ASC, uuid ASC`.

use crate::db::DbError;
use crate::model::category::{Category, OwnerId};
use crate::model::item::CategoryId;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const CATEGORY_SELECT_SQL: &str = "SELECT
    uuid,
    owner_uuid,
    title,
    description,
    created_at,
    updated_at
FROM categories";

/// Result type used by category repository operations.
pub type CategoryRepoResult<T> = Result<T, CategoryRepoError>;

/// Errors from category repository operations.
#[derive(Debug)]
pub enum CategoryRepoError {
    /// Underlying SQLite/bootstrap error.
    Db(DbError),
    /// Target category does not exist.
    CategoryNotFound(CategoryId),
    /// Persisted data cannot be converted to a valid read model.
    InvalidData(String),
}

impl Display for CategoryRepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::CategoryNotFound(id) => write!(f, "category not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid category data: {message}"),
        }
    }
}

impl Error for CategoryRepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::CategoryNotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for CategoryRepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for CategoryRepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for category operations.
pub trait CategoryRepository {
    /// Creates one category for the given owner.
    fn create_category(
        &self,
        owner_uuid: OwnerId,
        title: &str,
        description: &str,
    ) -> CategoryRepoResult<Category>;
    /// Loads one category by id.
    fn get_category(&self, category_uuid: CategoryId) -> CategoryRepoResult<Option<Category>>;
    /// Lists categories of one owner.
    fn list_categories(&self, owner_uuid: OwnerId) -> CategoryRepoResult<Vec<Category>>;
    /// Returns whether the category exists and belongs to the owner.
    fn category_exists(
        &self,
        category_uuid: CategoryId,
        owner_uuid: OwnerId,
    ) -> CategoryRepoResult<bool>;
}

/// SQLite-backed category repository.
pub struct SqliteCategoryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCategoryRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CategoryRepository for SqliteCategoryRepository<'_> {
    fn create_category(
        &self,
        owner_uuid: OwnerId,
        title: &str,
        description: &str,
    ) -> CategoryRepoResult<Category> {
        let category_uuid = Uuid::new_v4();
        self.conn.execute(
            "INSERT INTO categories (uuid, owner_uuid, title, description)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                category_uuid.to_string(),
                owner_uuid.to_string(),
                title,
                description,
            ],
        )?;

        self.get_category(category_uuid)?
            .ok_or(CategoryRepoError::CategoryNotFound(category_uuid))
    }

    fn get_category(&self, category_uuid: CategoryId) -> CategoryRepoResult<Option<Category>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CATEGORY_SELECT_SQL} WHERE uuid = ?1;"))?;
        let mut rows = stmt.query([category_uuid.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_category_row(row)?));
        }
        Ok(None)
    }

    fn list_categories(&self, owner_uuid: OwnerId) -> CategoryRepoResult<Vec<Category>> {
        let mut stmt = self.conn.prepare(&format!(
            "{CATEGORY_SELECT_SQL}
             WHERE owner_uuid = ?1
             ORDER BY created_at ASC, uuid ASC;"
        ))?;
        let mut rows = stmt.query([owner_uuid.to_string()])?;

        let mut categories = Vec::new();
        while let Some(row) = rows.next()? {
            categories.push(parse_category_row(row)?);
        }
        Ok(categories)
    }

    fn category_exists(
        &self,
        category_uuid: CategoryId,
        owner_uuid: OwnerId,
    ) -> CategoryRepoResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM categories
                WHERE uuid = ?1
                  AND owner_uuid = ?2
            );",
            params![category_uuid.to_string(), owner_uuid.to_string()],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }
}

fn parse_category_row(row: &Row<'_>) -> CategoryRepoResult<Category> {
    let uuid_text: String = row.get("uuid")?;
    let uuid = Uuid::parse_str(&uuid_text).map_err(|_| {
        CategoryRepoError::InvalidData(format!("invalid uuid `{uuid_text}` in categories.uuid"))
    })?;

    let owner_text: String = row.get("owner_uuid")?;
    let owner_uuid = Uuid::parse_str(&owner_text).map_err(|_| {
        CategoryRepoError::InvalidData(format!(
            "invalid uuid `{owner_text}` in categories.owner_uuid"
        ))
    })?;

    Ok(Category {
        uuid,
        owner_uuid,
        title: row.get("title")?,
        description: row.get("description")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}
