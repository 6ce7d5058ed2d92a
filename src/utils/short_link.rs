//! Short link formatting.
//!
//! Custom codes are stored verbatim, so a code may contain `/`, `?`, `#` or spaces.
//! Links always carry the code as one percent-encoded path segment; the `/{code}`
//! route decodes it back to the stored code.

use url::Url;

/// Path that resolves `code`, e.g. `/a%2Fb` for the code `a/b`.
pub fn code_path(code: &str) -> String {
    match Url::parse("http://localhost") {
        Ok(mut url) => {
            if let Ok(mut segments) = url.path_segments_mut() {
                segments.clear().push(code);
            }
            url.path().to_string()
        }
        Err(_) => format!("/{code}"),
    }
}

/// Absolute short link under `origin`, e.g. `http://localhost:3000/abc12`.
pub fn short_url(origin: &str, code: &str) -> String {
    format!("{}{}", origin.trim_end_matches('/'), code_path(code))
}
