//! Repository trait definitions for the domain layer.
//!
//! Traits define the data access contract; the in-memory implementation lives in
//! `crate::infrastructure::persistence`. Mock implementations are generated via
//! `mockall` for unit tests.

pub mod link_repository;

pub use link_repository::{ClickRecord, LinkRepository};

#[cfg(test)]
pub use link_repository::MockLinkRepository;
