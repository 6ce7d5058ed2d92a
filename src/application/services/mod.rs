//! Business logic services for the application layer.

pub mod link_service;
pub mod redirect_service;
pub mod stats_service;

pub use link_service::{
    BatchFailure, CreationOutcome, CreationRequest, LinkService, MAX_BATCH_SIZE, RowOutcome,
};
pub use redirect_service::{RedirectOutcome, RedirectService};
pub use stats_service::{LinkSummary, StatsService};
