//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Multi-row chain-pointer rewrites commit as one transaction or not at
//!   all; no intermediate chain state is ever observable.
//! - Repository APIs return semantic errors (`ItemNotFound`,
//!   `OrderingConflict`) in addition to DB transport errors.

pub mod category_repo;
pub mod item_repo;
