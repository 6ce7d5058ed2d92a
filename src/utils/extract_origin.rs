//! Origin extraction from HTTP request headers.

use axum::http::{HeaderMap, header};

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Builds the origin (`scheme://host[:port]`) short links are displayed under.
///
/// A configured public origin always wins. Otherwise the `Host` header is used
/// together with `X-Forwarded-Proto` (defaulting to `http`). When no usable `Host`
/// header is present, `http://localhost` is returned.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "sho.rt:8080".parse().unwrap());
///
/// assert_eq!(resolve_origin(None, &headers), "http://sho.rt:8080");
/// assert_eq!(resolve_origin(Some("https://s.example/"), &headers), "https://s.example");
/// ```
pub fn resolve_origin(public_origin: Option<&str>, headers: &HeaderMap) -> String {
    if let Some(origin) = public_origin {
        return origin.trim_end_matches('/').to_string();
    }

    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|host| !host.is_empty())
        .unwrap_or("localhost");

    let scheme = headers
        .get(FORWARDED_PROTO)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|proto| matches!(*proto, "http" | "https"))
        .unwrap_or("http");

    format!("{scheme}://{host}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, HeaderValue, header};

    #[test]
    fn test_origin_from_host() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("example.com"));

        assert_eq!(resolve_origin(None, &headers), "http://example.com");
    }

    #[test]
    fn test_origin_keeps_port() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("localhost:3000"));

        assert_eq!(resolve_origin(None, &headers), "http://localhost:3000");
    }

    #[test]
    fn test_origin_ipv6() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("[::1]:8080"));

        assert_eq!(resolve_origin(None, &headers), "http://[::1]:8080");
    }

    #[test]
    fn test_origin_forwarded_proto() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("sho.rt"));
        headers.insert(FORWARDED_PROTO, HeaderValue::from_static("https, http"));

        assert_eq!(resolve_origin(None, &headers), "https://sho.rt");
    }

    #[test]
    fn test_origin_ignores_unknown_proto() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("sho.rt"));
        headers.insert(FORWARDED_PROTO, HeaderValue::from_static("gopher"));

        assert_eq!(resolve_origin(None, &headers), "http://sho.rt");
    }

    #[test]
    fn test_origin_missing_host() {
        assert_eq!(resolve_origin(None, &HeaderMap::new()), "http://localhost");
    }

    #[test]
    fn test_public_origin_wins() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("internal:3000"));

        assert_eq!(
            resolve_origin(Some("https://s.example/"), &headers),
            "https://s.example"
        );
    }
}
