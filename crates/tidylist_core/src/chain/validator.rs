//! Read-only chain invariant checker.
//!
//! # Responsibility
//! - Walk one category's chain and verify every linkage invariant.
//! - Report the first inconsistent node with enough detail to diagnose
//!   corruption.
//!
//! # Invariants
//! - Validation performs reads only; it never repairs or mutates.
//! - A passing report means: unique head, unique tail, mutually consistent
//!   pointer pairs, full single traversal, no cross-category references.
//!
//! Used both as an operational health check and as the oracle in the
//! integration test suite.

use crate::model::item::{CategoryId, ItemId, TodoItem};
use crate::repo::item_repo::{raw_category_items, ItemRepoResult};
use rusqlite::Connection;
use std::collections::HashMap;

/// First violation found while walking one category chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainViolation {
    /// Non-empty category with no item carrying `left_uuid = None`.
    MissingHead,
    /// More than one item carries `left_uuid = None`.
    MultipleHeads { first: ItemId, second: ItemId },
    /// More than one item carries `right_uuid = None`.
    MultipleTails { first: ItemId, second: ItemId },
    /// A pointer references an item that is not stored in this category.
    DanglingReference { item: ItemId, missing: ItemId },
    /// `A.right_uuid = B` without `B.left_uuid = A`.
    BrokenPair { item: ItemId, neighbor: ItemId },
    /// The walk revisited an item.
    CycleDetected { item: ItemId },
    /// The walk terminated without visiting every stored item.
    OrphanedItems { visited: usize, stored: usize },
}

/// Outcome of validating one category chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainReport {
    /// Category whose chain was walked.
    pub category_uuid: CategoryId,
    /// Number of items stored for the category.
    pub item_count: usize,
    /// First violation found, `None` when the chain is consistent.
    pub violation: Option<ChainViolation>,
}

impl ChainReport {
    /// Returns whether the chain satisfies all linkage invariants.
    pub fn is_consistent(&self) -> bool {
        self.violation.is_none()
    }
}

/// Walks the category chain head-to-tail and checks every invariant.
///
/// The raw per-category rows are fetched once and inspected in memory, so a
/// corrupt chain (cycle, orphan, broken pair) is reported instead of hanging
/// or erroring the way an ordered fetch would.
pub fn validate_chain(
    conn: &Connection,
    category_uuid: CategoryId,
) -> ItemRepoResult<ChainReport> {
    let items = raw_category_items(conn, category_uuid)?;
    let item_count = items.len();

    let report = |violation: Option<ChainViolation>| ChainReport {
        category_uuid,
        item_count,
        violation,
    };

    if items.is_empty() {
        return Ok(report(None));
    }

    let head = match check_endpoints(&items) {
        Ok(head) => head,
        Err(violation) => return Ok(report(Some(violation))),
    };

    let by_id: HashMap<ItemId, &TodoItem> =
        items.iter().map(|item| (item.uuid, item)).collect();
    Ok(report(walk_chain(&items, &by_id, head)))
}

/// Checks head/tail uniqueness and returns the unique head.
fn check_endpoints(items: &[TodoItem]) -> Result<&TodoItem, ChainViolation> {
    let mut head: Option<&TodoItem> = None;
    let mut tail: Option<ItemId> = None;

    for item in items {
        if item.is_head() {
            if let Some(first) = head {
                return Err(ChainViolation::MultipleHeads {
                    first: first.uuid,
                    second: item.uuid,
                });
            }
            head = Some(item);
        }
        if item.is_tail() {
            if let Some(first) = tail {
                return Err(ChainViolation::MultipleTails {
                    first,
                    second: item.uuid,
                });
            }
            tail = Some(item.uuid);
        }
    }

    head.ok_or(ChainViolation::MissingHead)
}

fn walk_chain<'a>(
    items: &'a [TodoItem],
    by_id: &HashMap<ItemId, &'a TodoItem>,
    head: &'a TodoItem,
) -> Option<ChainViolation> {
    let mut visited = HashMap::with_capacity(items.len());
    let mut current = head;

    loop {
        if visited.insert(current.uuid, ()).is_some() {
            return Some(ChainViolation::CycleDetected { item: current.uuid });
        }

        let Some(right_uuid) = current.right_uuid else {
            break;
        };

        let Some(next) = by_id.get(&right_uuid).copied() else {
            return Some(ChainViolation::DanglingReference {
                item: current.uuid,
                missing: right_uuid,
            });
        };

        // Mutual consistency: the successor must point back at us.
        if next.left_uuid != Some(current.uuid) {
            return Some(ChainViolation::BrokenPair {
                item: current.uuid,
                neighbor: next.uuid,
            });
        }

        current = next;
    }

    if visited.len() != items.len() {
        return Some(ChainViolation::OrphanedItems {
            visited: visited.len(),
            stored: items.len(),
        });
    }

    None
}
