//! Core domain logic for tidylist.
//! This crate is the single source of truth for chain-ordering invariants.

pub mod chain;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use chain::validator::{validate_chain, ChainReport, ChainViolation};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::category::{Category, OwnerId};
pub use model::item::{CategoryId, ItemId, StatusFilter, TodoItem};
pub use repo::category_repo::{
    CategoryRepoError, CategoryRepoResult, CategoryRepository, SqliteCategoryRepository,
};
pub use repo::item_repo::{
    ItemDraft, ItemPatch, ItemRepoError, ItemRepoResult, ItemRepository, SqliteItemRepository,
};
pub use service::category_service::{CategoryService, CategoryServiceError};
pub use service::item_service::{TodoItemService, TodoServiceError};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
