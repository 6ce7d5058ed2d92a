//! HTML template rendering handlers.

mod redirect;
mod shortener;
mod stats;

pub use redirect::redirect_handler;
pub use shortener::{
    CreatedLink, FormAction, FormRow, ShortenerTemplate, shortener_page_handler,
    shortener_submit_handler,
};
pub use stats::{StatsRow, StatsTemplate, stats_page_handler};

/// Newest activity log entries shown in the page side panel. `/api/logs` serves the rest.
pub const LOG_PANEL_LIMIT: usize = 50;
