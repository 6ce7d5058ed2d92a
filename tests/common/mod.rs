#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use quicklink::prelude::*;
use std::sync::Arc;

pub const HOST: &str = "sho.rt";

pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
}

/// State over a fresh registry whose clock only moves when the test advances it.
pub fn create_test_state() -> (AppState, Arc<ManualClock>, Arc<MemoryLinkRepository>) {
    let repository = Arc::new(MemoryLinkRepository::new());
    let clock = Arc::new(ManualClock::new(start_time()));
    let state = AppState::new(repository.clone(), clock.clone(), None);

    (state, clock, repository)
}

pub async fn create_test_link(state: &AppState, code: &str, url: &str, validity_minutes: &str) {
    state
        .link_service
        .submit(vec![
            CreationRequest::new(url)
                .with_validity(validity_minutes)
                .with_custom_code(code),
        ])
        .await
        .unwrap();
}
