//! Category domain model.
//!
//! # Responsibility
//! - Define the grouping record that owns one chain of todo items.
//!
//! # Invariants
//! - A category belongs to exactly one owner.
//! - Items have no existence outside a category.

use crate::model::item::CategoryId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of the account owning categories.
///
/// Account management itself lives outside this crate; only the identity is
/// needed here for ownership checks.
pub type OwnerId = Uuid;

/// Grouping record that owns one ordered chain of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable category ID.
    pub uuid: CategoryId,
    /// Owning account ID.
    pub owner_uuid: OwnerId,
    /// User-facing title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Epoch ms creation timestamp.
    pub created_at: i64,
    /// Epoch ms update timestamp.
    pub updated_at: i64,
}
