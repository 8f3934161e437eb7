//! Todo item domain model.
//!
//! # Responsibility
//! - Define the canonical todo item record including its chain pointers.
//! - Provide chain-position helpers shared by repo and validator code.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another item.
//! - `left_uuid`/`right_uuid` reference items inside the same category only.
//! - At most one item per category has `left_uuid = None` (the head) and at
//!   most one has `right_uuid = None` (the tail).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a todo item.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ItemId = Uuid;

/// Stable identifier for a category owning one chain of items.
pub type CategoryId = Uuid;

/// Canonical todo item record.
///
/// The payload fields (`title`, `description`, `is_done`) are opaque to the
/// ordering logic; only `category_uuid` and the two neighbor pointers take
/// part in chain maintenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Stable global ID used for linking and auditing.
    pub uuid: ItemId,
    /// Owning category. Mutable: items move between categories.
    pub category_uuid: CategoryId,
    /// Item immediately before this one, `None` when this is the head.
    pub left_uuid: Option<ItemId>,
    /// Item immediately after this one, `None` when this is the tail.
    pub right_uuid: Option<ItemId>,
    /// User-facing title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Completion flag.
    pub is_done: bool,
    /// Epoch ms creation timestamp.
    pub created_at: i64,
    /// Epoch ms update timestamp.
    pub updated_at: i64,
}

impl TodoItem {
    /// Returns whether this item is the head of its category chain.
    pub fn is_head(&self) -> bool {
        self.left_uuid.is_none()
    }

    /// Returns whether this item is the tail of its category chain.
    pub fn is_tail(&self) -> bool {
        self.right_uuid.is_none()
    }

    /// Returns whether this item occupies exactly the given slot.
    ///
    /// Used to detect no-op moves so they commit zero writes.
    pub fn occupies_slot(
        &self,
        category_uuid: CategoryId,
        left_uuid: Option<ItemId>,
        right_uuid: Option<ItemId>,
    ) -> bool {
        self.category_uuid == category_uuid
            && self.left_uuid == left_uuid
            && self.right_uuid == right_uuid
    }
}

/// Completion filter for item listings.
///
/// Filtering is orthogonal to ordering: it never alters stored pointers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    /// All items regardless of completion state.
    #[default]
    All,
    /// Only completed items.
    Done,
    /// Only not-yet-completed items.
    Pending,
}

impl StatusFilter {
    /// Returns whether an item passes this filter.
    pub fn matches(self, item: &TodoItem) -> bool {
        match self {
            Self::All => true,
            Self::Done => item.is_done,
            Self::Pending => !item.is_done,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{StatusFilter, TodoItem};
    use uuid::Uuid;

    fn sample_item(is_done: bool) -> TodoItem {
        TodoItem {
            uuid: Uuid::new_v4(),
            category_uuid: Uuid::new_v4(),
            left_uuid: None,
            right_uuid: None,
            title: "sample".to_string(),
            description: String::new(),
            is_done,
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn singleton_item_is_both_head_and_tail() {
        let item = sample_item(false);
        assert!(item.is_head());
        assert!(item.is_tail());
    }

    #[test]
    fn occupies_slot_compares_category_and_both_pointers() {
        let mut item = sample_item(false);
        let neighbor = Uuid::new_v4();
        item.right_uuid = Some(neighbor);

        assert!(item.occupies_slot(item.category_uuid, None, Some(neighbor)));
        assert!(!item.occupies_slot(item.category_uuid, None, None));
        assert!(!item.occupies_slot(Uuid::new_v4(), None, Some(neighbor)));
    }

    #[test]
    fn status_filter_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&StatusFilter::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::from_str::<StatusFilter>("\"done\"").unwrap(),
            StatusFilter::Done
        );
    }

    #[test]
    fn status_filter_matches_completion_state() {
        let done = sample_item(true);
        let pending = sample_item(false);

        assert!(StatusFilter::All.matches(&done));
        assert!(StatusFilter::All.matches(&pending));
        assert!(StatusFilter::Done.matches(&done));
        assert!(!StatusFilter::Done.matches(&pending));
        assert!(StatusFilter::Pending.matches(&pending));
        assert!(!StatusFilter::Pending.matches(&done));
    }
}
