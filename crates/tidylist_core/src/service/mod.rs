//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Enforce ownership checks before any chain mutation is accepted.

pub mod category_service;
pub mod item_service;
