//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod logs;
pub mod shorten;
pub mod stats;
pub mod stats_list;

pub use health::health_handler;
pub use logs::logs_handler;
pub use shorten::shorten_handler;
pub use stats::stats_handler;
pub use stats_list::stats_list_handler;
