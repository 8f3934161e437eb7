//! Todo item use-case service.
//!
//! # Responsibility
//! - Gate every chain operation behind the category ownership check.
//! - Map repository errors into caller-facing semantic errors.
//!
//! # Invariants
//! - No chain mutation reaches the repository for a category the caller
//!   does not own.
//! - Listing never mutates stored pointers; status filtering happens after
//!   the ordered walk.

use crate::model::category::OwnerId;
use crate::model::item::{CategoryId, ItemId, StatusFilter, TodoItem};
use crate::repo::category_repo::{CategoryRepoError, CategoryRepository};
use crate::repo::item_repo::{ItemDraft, ItemPatch, ItemRepoError, ItemRepository};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from item service operations.
#[derive(Debug)]
pub enum TodoServiceError {
    /// Title is blank after trim.
    InvalidTitle,
    /// Target item does not exist or is not visible to the caller.
    ItemNotFound(ItemId),
    /// Target category does not exist or is not owned by the caller.
    ForeignCategory(CategoryId),
    /// Supplied neighbor pair is no longer adjacent (stale client view).
    OrderingConflict {
        item_uuid: ItemId,
        left_uuid: Option<ItemId>,
        right_uuid: Option<ItemId>,
    },
    /// Supplied neighbor belongs to a different category than the target.
    CategoryMismatch {
        neighbor_uuid: ItemId,
        expected_category: CategoryId,
    },
    /// Item repository failure.
    Repo(ItemRepoError),
    /// Category repository failure.
    CategoryRepo(CategoryRepoError),
}

impl Display for TodoServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTitle => write!(f, "title must not be blank"),
            Self::ItemNotFound(id) => write!(f, "todo item not found: {id}"),
            Self::ForeignCategory(id) => {
                write!(f, "category not found or not owned by caller: {id}")
            }
            Self::OrderingConflict {
                item_uuid,
                left_uuid,
                right_uuid,
            } => write!(
                f,
                "stale ordering for item {item_uuid}: supplied neighbors {} / {} are no longer adjacent",
                left_uuid.map_or_else(|| "none".to_string(), |v| v.to_string()),
                right_uuid.map_or_else(|| "none".to_string(), |v| v.to_string()),
            ),
            Self::CategoryMismatch {
                neighbor_uuid,
                expected_category,
            } => write!(
                f,
                "neighbor {neighbor_uuid} does not belong to category {expected_category}"
            ),
            Self::Repo(err) => write!(f, "{err}"),
            Self::CategoryRepo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TodoServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::CategoryRepo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ItemRepoError> for TodoServiceError {
    fn from(value: ItemRepoError) -> Self {
        match value {
            ItemRepoError::ItemNotFound(id) => Self::ItemNotFound(id),
            ItemRepoError::CategoryNotFound(id) => Self::ForeignCategory(id),
            ItemRepoError::OrderingConflict {
                item_uuid,
                left_uuid,
                right_uuid,
            } => Self::OrderingConflict {
                item_uuid,
                left_uuid,
                right_uuid,
            },
            ItemRepoError::CategoryMismatch {
                neighbor_uuid,
                expected_category,
                ..
            } => Self::CategoryMismatch {
                neighbor_uuid,
                expected_category,
            },
            other => Self::Repo(other),
        }
    }
}

impl From<CategoryRepoError> for TodoServiceError {
    fn from(value: CategoryRepoError) -> Self {
        Self::CategoryRepo(value)
    }
}

/// Todo item service facade.
pub struct TodoItemService<I: ItemRepository, C: CategoryRepository> {
    items: I,
    categories: C,
}

impl<I: ItemRepository, C: CategoryRepository> TodoItemService<I, C> {
    /// Creates service from repository implementations.
    pub fn new(items: I, categories: C) -> Self {
        Self { items, categories }
    }

    /// Creates one item at the head of the owner's category chain.
    pub fn create_item(
        &self,
        owner_uuid: OwnerId,
        category_uuid: CategoryId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<TodoItem, TodoServiceError> {
        let title = normalize_title(title.into())?;
        self.ensure_owned_category(category_uuid, owner_uuid)?;

        let draft = ItemDraft {
            title,
            description: description.into(),
            is_done: false,
        };
        self.items
            .create_item_at_head(category_uuid, &draft)
            .map_err(Into::into)
    }

    /// Lists the owner's category chain head-to-tail, optionally filtered
    /// by completion status.
    pub fn list_items(
        &self,
        owner_uuid: OwnerId,
        category_uuid: CategoryId,
        filter: StatusFilter,
    ) -> Result<Vec<TodoItem>, TodoServiceError> {
        self.ensure_owned_category(category_uuid, owner_uuid)?;

        let chain = self.items.chain(category_uuid)?;
        Ok(chain
            .into_iter()
            .filter(|item| filter.matches(item))
            .collect())
    }

    /// Moves one item into the slot between the supplied neighbors, keeping
    /// or changing its category.
    pub fn move_item(
        &self,
        owner_uuid: OwnerId,
        item_uuid: ItemId,
        new_left_uuid: Option<ItemId>,
        new_right_uuid: Option<ItemId>,
        new_category_uuid: CategoryId,
    ) -> Result<TodoItem, TodoServiceError> {
        self.owned_item(item_uuid, owner_uuid)?;
        self.ensure_owned_category(new_category_uuid, owner_uuid)?;

        self.items
            .place_item(item_uuid, new_left_uuid, new_right_uuid, new_category_uuid)
            .map_err(Into::into)
    }

    /// Updates payload fields of one item; chain pointers stay untouched.
    pub fn update_item(
        &self,
        owner_uuid: OwnerId,
        item_uuid: ItemId,
        patch: ItemPatch,
    ) -> Result<TodoItem, TodoServiceError> {
        self.owned_item(item_uuid, owner_uuid)?;

        let patch = ItemPatch {
            title: patch.title.map(normalize_title).transpose()?,
            ..patch
        };
        self.items
            .update_payload(item_uuid, &patch)
            .map_err(Into::into)
    }

    /// Deletes one item; former neighbors are re-linked by the repository.
    pub fn delete_item(
        &self,
        owner_uuid: OwnerId,
        item_uuid: ItemId,
    ) -> Result<(), TodoServiceError> {
        self.owned_item(item_uuid, owner_uuid)?;
        self.items.remove_item(item_uuid).map_err(Into::into)
    }

    fn ensure_owned_category(
        &self,
        category_uuid: CategoryId,
        owner_uuid: OwnerId,
    ) -> Result<(), TodoServiceError> {
        if self.categories.category_exists(category_uuid, owner_uuid)? {
            Ok(())
        } else {
            Err(TodoServiceError::ForeignCategory(category_uuid))
        }
    }

    /// Loads one item and verifies the caller owns its category.
    ///
    /// Items in another owner's category surface as `ItemNotFound` so the
    /// API does not confirm foreign item ids.
    fn owned_item(
        &self,
        item_uuid: ItemId,
        owner_uuid: OwnerId,
    ) -> Result<TodoItem, TodoServiceError> {
        let item = self
            .items
            .get_item(item_uuid)?
            .ok_or(TodoServiceError::ItemNotFound(item_uuid))?;
        if !self
            .categories
            .category_exists(item.category_uuid, owner_uuid)?
        {
            return Err(TodoServiceError::ItemNotFound(item_uuid));
        }
        Ok(item)
    }
}

fn normalize_title(value: String) -> Result<String, TodoServiceError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TodoServiceError::InvalidTitle);
    }
    Ok(trimmed.to_string())
}
