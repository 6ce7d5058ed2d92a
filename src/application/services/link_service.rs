//! Batch link creation service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::domain::activity_log::ActivityLog;
use crate::domain::clock::Clock;
use crate::domain::entities::NewLink;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code_at;
use crate::utils::url_validator::validate_target_url;
use crate::utils::validity::{expiry_after, resolve_validity_minutes};

/// Largest number of rows accepted in one submission.
pub const MAX_BATCH_SIZE: usize = 5;

/// Message logged and shown after a batch where every row was committed.
pub const BATCH_SUCCESS_MESSAGE: &str = "URLs shortened successfully!";

/// One row of a shortening request, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreationRequest {
    pub original_url: String,
    /// Raw text; interpreted with the leading-integer rule.
    pub validity_minutes: Option<String>,
    pub custom_code: Option<String>,
}

impl CreationRequest {
    pub fn new(original_url: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            ..Self::default()
        }
    }

    pub fn with_validity(mut self, validity_minutes: impl Into<String>) -> Self {
        self.validity_minutes = Some(validity_minutes.into());
        self
    }

    pub fn with_custom_code(mut self, custom_code: impl Into<String>) -> Self {
        self.custom_code = Some(custom_code.into());
        self
    }
}

/// A committed row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationOutcome {
    pub code: String,
    pub original_url: String,
    pub expires_at: DateTime<Utc>,
}

/// Result of a single row within a batch.
#[derive(Debug, Clone)]
pub enum RowOutcome {
    Created(CreationOutcome),
    Failed(AppError),
}

impl RowOutcome {
    pub fn created(&self) -> Option<&CreationOutcome> {
        match self {
            Self::Created(outcome) => Some(outcome),
            Self::Failed(_) => None,
        }
    }
}

/// A batch in which at least one row failed.
///
/// Rows that succeeded stay committed; `error` is the error of the last failing row.
#[derive(Debug, Clone)]
pub struct BatchFailure {
    pub error: AppError,
    pub outcomes: Vec<RowOutcome>,
}

impl BatchFailure {
    fn rejected(error: AppError) -> Self {
        Self {
            error,
            outcomes: Vec::new(),
        }
    }

    /// Rows that were committed despite the failure.
    pub fn committed(&self) -> impl Iterator<Item = &CreationOutcome> {
        self.outcomes.iter().filter_map(RowOutcome::created)
    }
}

/// Service for turning user-submitted rows into registry entries.
///
/// Rows are processed independently and in order. A failing row does not stop
/// the batch and nothing is rolled back.
pub struct LinkService<L: LinkRepository> {
    repository: Arc<L>,
    clock: Arc<dyn Clock>,
    activity_log: ActivityLog,
}

impl<L: LinkRepository> LinkService<L> {
    pub fn new(repository: Arc<L>, clock: Arc<dyn Clock>, activity_log: ActivityLog) -> Self {
        Self {
            repository,
            clock,
            activity_log,
        }
    }

    /// Shortens a batch of 1 to [`MAX_BATCH_SIZE`] rows.
    ///
    /// # Errors
    ///
    /// An empty or oversized batch is rejected with [`AppError::Validation`] before
    /// any row is written. Otherwise every row is attempted, and if any of them
    /// failed the returned [`BatchFailure`] carries the last row error alongside
    /// the outcome of each row.
    pub async fn submit(
        &self,
        requests: Vec<CreationRequest>,
    ) -> Result<Vec<CreationOutcome>, BatchFailure> {
        if requests.is_empty() {
            return Err(BatchFailure::rejected(AppError::bad_request(
                "At least one URL is required",
                json!({ "max": MAX_BATCH_SIZE }),
            )));
        }

        if requests.len() > MAX_BATCH_SIZE {
            return Err(BatchFailure::rejected(AppError::bad_request(
                format!("At most {MAX_BATCH_SIZE} URLs can be shortened at once"),
                json!({ "max": MAX_BATCH_SIZE, "received": requests.len() }),
            )));
        }

        let mut outcomes = Vec::with_capacity(requests.len());
        let mut last_error = None;

        for request in requests {
            match self.shorten_one(request).await {
                Ok(created) => outcomes.push(RowOutcome::Created(created)),
                Err(e) => {
                    if e.status_code().is_server_error() {
                        self.activity_log.error(self.clock.now(), e.to_string());
                    } else {
                        self.activity_log.warn(self.clock.now(), e.to_string());
                    }
                    last_error = Some(e.clone());
                    outcomes.push(RowOutcome::Failed(e));
                }
            }
        }

        match last_error {
            Some(error) => Err(BatchFailure { error, outcomes }),
            None => {
                self.activity_log
                    .info(self.clock.now(), BATCH_SUCCESS_MESSAGE);
                Ok(outcomes
                    .into_iter()
                    .filter_map(|outcome| match outcome {
                        RowOutcome::Created(created) => Some(created),
                        RowOutcome::Failed(_) => None,
                    })
                    .collect())
            }
        }
    }

    async fn shorten_one(&self, request: CreationRequest) -> Result<CreationOutcome, AppError> {
        let original_url = validate_target_url(&request.original_url)?;
        let now = self.clock.now();

        let code = match request
            .custom_code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
        {
            Some(custom) => custom.to_string(),
            None => generate_code_at(now),
        };

        if self.repository.exists(&code).await? {
            return Err(AppError::ShortcodeCollision(code));
        }

        let minutes = resolve_validity_minutes(request.validity_minutes.as_deref());

        let link = self
            .repository
            .create(NewLink {
                code,
                original_url,
                created_at: now,
                expires_at: expiry_after(now, minutes),
            })
            .await?;

        self.activity_log.info(
            now,
            format!("Shortened {} -> {}", link.original_url, link.code),
        );

        Ok(CreationOutcome {
            code: link.code,
            original_url: link.original_url,
            expires_at: link.expires_at,
        })
    }
}
