//! Category use-case service.
//!
//! # Responsibility
//! - Provide owner-scoped category create/read/list entry points.
//! - Delegate persistence to the category repository.

use crate::model::category::{Category, OwnerId};
use crate::model::item::CategoryId;
use crate::repo::category_repo::{CategoryRepoError, CategoryRepository};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from category service operations.
#[derive(Debug)]
pub enum CategoryServiceError {
    /// Title is blank after trim.
    InvalidTitle,
    /// Target category does not exist or is not owned by the caller.
    CategoryNotFound(CategoryId),
    /// Repository-level failure.
    Repo(CategoryRepoError),
}

impl Display for CategoryServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTitle => write!(f, "title must not be blank"),
            Self::CategoryNotFound(id) => write!(f, "category not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CategoryServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CategoryRepoError> for CategoryServiceError {
    fn from(value: CategoryRepoError) -> Self {
        match value {
            CategoryRepoError::CategoryNotFound(id) => Self::CategoryNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Category service facade.
pub struct CategoryService<C: CategoryRepository> {
    repo: C,
}

impl<C: CategoryRepository> CategoryService<C> {
    /// Creates service from repository implementation.
    pub fn new(repo: C) -> Self {
        Self { repo }
    }

    /// Creates one category for the owner.
    pub fn create_category(
        &self,
        owner_uuid: OwnerId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Category, CategoryServiceError> {
        let title = title.into();
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(CategoryServiceError::InvalidTitle);
        }
        self.repo
            .create_category(owner_uuid, trimmed, description.into().as_str())
            .map_err(Into::into)
    }

    /// Loads one category, visible only to its owner.
    pub fn get_category(
        &self,
        owner_uuid: OwnerId,
        category_uuid: CategoryId,
    ) -> Result<Category, CategoryServiceError> {
        let category = self
            .repo
            .get_category(category_uuid)?
            .filter(|category| category.owner_uuid == owner_uuid)
            .ok_or(CategoryServiceError::CategoryNotFound(category_uuid))?;
        Ok(category)
    }

    /// Lists the owner's categories.
    pub fn list_categories(
        &self,
        owner_uuid: OwnerId,
    ) -> Result<Vec<Category>, CategoryServiceError> {
        self.repo.list_categories(owner_uuid).map_err(Into::into)
    }
}
