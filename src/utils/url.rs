//! Endpoint URL helpers.

/// Strip trailing slashes so paths can be appended without doubling them.
///
/// ```
/// use chatline::utils::url::normalize_base_url;
///
/// assert_eq!(normalize_base_url("http://localhost:8000/"), "http://localhost:8000");
/// assert_eq!(normalize_base_url("http://localhost:8000///"), "http://localhost:8000");
/// ```
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}

/// Join an endpoint base and a path with exactly one slash between them.
///
/// ```
/// use chatline::utils::url::construct_api_url;
///
/// assert_eq!(
///     construct_api_url("https://chat.example.com/", "/api/chat"),
///     "https://chat.example.com/api/chat"
/// );
/// ```
pub fn construct_api_url(base_url: &str, path: &str) -> String {
    let normalized_base = normalize_base_url(base_url);
    let path = path.trim_start_matches('/');
    format!("{normalized_base}/{path}")
}

/// Check that `endpoint` looks like an http(s) base URL with a host.
pub fn validate_endpoint(endpoint: &str) -> Result<(), String> {
    let trimmed = endpoint.trim();
    let rest = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"))
        .ok_or_else(|| format!("endpoint must start with http:// or https://: {trimmed}"))?;

    let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
    if host.is_empty() {
        return Err(format!("endpoint is missing a host: {trimmed}"));
    }
    if rest.chars().any(char::is_whitespace) {
        return Err(format!("endpoint must not contain whitespace: {trimmed}"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_base_url_strips_trailing_slashes() {
        assert_eq!(
            normalize_base_url("https://chat.example.com"),
            "https://chat.example.com"
        );
        assert_eq!(
            normalize_base_url("https://chat.example.com/proxy/"),
            "https://chat.example.com/proxy"
        );
        assert_eq!(normalize_base_url(" http://host:1/ "), "http://host:1");
        assert_eq!(normalize_base_url("///"), "");
    }

    #[test]
    fn construct_api_url_joins_with_single_slash() {
        let cases = [
            ("http://127.0.0.1:8000", "api/chat"),
            ("http://127.0.0.1:8000/", "api/chat"),
            ("http://127.0.0.1:8000", "/api/chat"),
            ("http://127.0.0.1:8000///", "///api/chat"),
        ];
        for (base, path) in cases {
            assert_eq!(
                construct_api_url(base, path),
                "http://127.0.0.1:8000/api/chat",
                "base={base:?} path={path:?}"
            );
        }

        assert_eq!(
            construct_api_url("https://chat.example.com/proxy/", "api/chat"),
            "https://chat.example.com/proxy/api/chat"
        );
    }

    #[test]
    fn validate_endpoint_accepts_http_and_https() {
        assert!(validate_endpoint("http://localhost:8000").is_ok());
        assert!(validate_endpoint("https://chat.example.com/proxy/").is_ok());
    }

    #[test]
    fn validate_endpoint_rejects_bad_input() {
        assert!(validate_endpoint("localhost:8000").is_err());
        assert!(validate_endpoint("ftp://example.com").is_err());
        assert!(validate_endpoint("http://").is_err());
        assert!(validate_endpoint("http:///api").is_err());
        assert!(validate_endpoint("http://exa mple.com").is_err());
    }
}
