//! Chain integrity checking.
//!
//! # Responsibility
//! - Provide a read-only oracle for doubly-linked chain invariants.
//!
//! # Invariants
//! - Validation never mutates stored data.

pub mod validator;
