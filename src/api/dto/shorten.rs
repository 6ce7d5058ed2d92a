//! DTOs for link shortening endpoint.

use crate::application::services::CreationRequest;
use crate::error::ErrorInfo;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten one to five URLs.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(length(min = 1, max = 5, message = "Between 1 and 5 URLs per request"))]
    pub urls: Vec<UrlItem>,
}

/// Individual URL to be shortened.
#[derive(Debug, Serialize, Deserialize)]
pub struct UrlItem {
    /// The original URL; any absolute URL with a host is accepted.
    pub url: String,

    /// Minutes until expiry. Missing, non-numeric or non-positive values mean 30.
    #[serde(default)]
    pub validity_minutes: Option<ValidityInput>,

    /// Optional custom short code, used as-is after trimming.
    #[serde(default)]
    pub custom_code: Option<String>,
}

/// Validity as sent by the client: a JSON number or free text such as `"15"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValidityInput {
    Number(serde_json::Number),
    Text(String),
}

impl ValidityInput {
    fn into_text(self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s,
        }
    }
}

impl From<UrlItem> for CreationRequest {
    fn from(item: UrlItem) -> Self {
        CreationRequest {
            original_url: item.url,
            validity_minutes: item.validity_minutes.map(ValidityInput::into_text),
            custom_code: item.custom_code,
        }
    }
}

/// Response containing per-row results.
///
/// `error` is present only when at least one row failed and holds the error of the
/// last failing row.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub summary: BatchSummary,
    pub items: Vec<ShortenResultItem>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

/// Individual result for a URL in the batch.
///
/// Uses untagged enum for cleaner JSON structure (no discriminator field).
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ShortenResultItem {
    Success {
        original_url: String,
        code: String,
        short_url: String,
        expires_at: DateTime<Utc>,
    },
    Error {
        original_url: String,
        error: ErrorInfo,
    },
}

/// Summary statistics for batch processing.
#[derive(Debug, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validity_number_and_text() {
        let request: ShortenRequest = serde_json::from_str(
            r#"{"urls":[
                {"url":"https://a.example","validity_minutes":15},
                {"url":"https://b.example","validity_minutes":"20min"},
                {"url":"https://c.example","custom_code":"c1"}
            ]}"#,
        )
        .unwrap();

        let rows: Vec<CreationRequest> = request.urls.into_iter().map(Into::into).collect();

        assert_eq!(rows[0].validity_minutes.as_deref(), Some("15"));
        assert_eq!(rows[1].validity_minutes.as_deref(), Some("20min"));
        assert_eq!(rows[2].validity_minutes, None);
        assert_eq!(rows[2].custom_code.as_deref(), Some("c1"));
    }

    #[test]
    fn test_batch_size_validation() {
        let empty = ShortenRequest { urls: vec![] };
        assert!(empty.validate().is_err());

        let six = ShortenRequest {
            urls: (0..6)
                .map(|i| UrlItem {
                    url: format!("https://example.com/{i}"),
                    validity_minutes: None,
                    custom_code: None,
                })
                .collect(),
        };
        assert!(six.validate().is_err());
    }
}
