//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`Link`] - A short code and what it points to
//! - [`Click`] - One successful redirect through a link
//!
//! Creation inputs are separate structs (`NewLink`, `NewClick`), converted into
//! the stored form by the registry.

pub mod click;
pub mod link;

pub use click::{Click, DIRECT_SOURCE, NewClick};
pub use link::{Link, NewLink};
