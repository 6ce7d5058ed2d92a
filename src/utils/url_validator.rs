//! Target URL validation.
//!
//! Targets are checked for syntax only and stored exactly as submitted, minus
//! surrounding whitespace. No normalization is applied, so `https://EXAMPLE.com`
//! redirects to `https://EXAMPLE.com`.

use url::Url;

use crate::error::AppError;

/// Validates that `input` is an absolute URL with a scheme and a host.
///
/// Returns the trimmed input on success.
///
/// # Errors
///
/// Returns [`AppError::InvalidUrl`] when the input does not parse as an absolute
/// URL or parses without a host (`mailto:`, `data:`, `file:///...`).
///
/// # Examples
///
/// ```ignore
/// assert_eq!(validate_target_url(" https://example.com/a ").unwrap(), "https://example.com/a");
/// assert!(validate_target_url("example.com").is_err());
/// ```
pub fn validate_target_url(input: &str) -> Result<String, AppError> {
    let trimmed = input.trim();

    let url = Url::parse(trimmed).map_err(|e| AppError::invalid_url(trimmed, e.to_string()))?;

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(trimmed.to_string()),
        _ => Err(AppError::invalid_url(trimmed, "URL has no host")),
    }
}
