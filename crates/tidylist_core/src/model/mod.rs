//! Domain model for ordered todo data.
//!
//! # Responsibility
//! - Define the canonical item and category records used by core logic.
//! - Keep chain-pointer semantics in one place.
//!
//! # Invariants
//! - Every domain object is identified by a stable uuid.
//! - Chain membership is expressed only through `left_uuid`/`right_uuid`
//!   references, never through a numeric rank column.

pub mod category;
pub mod item;
