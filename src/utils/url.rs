//! URL shape checks for user-entered links.

use thiserror::Error;

/// Errors that can occur during URL validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    /// URL is empty
    #[error("URL is empty")]
    Empty,
    /// URL contains whitespace
    #[error("URL must not contain whitespace")]
    Whitespace,
    /// URL doesn't start with `scheme://`
    #[error("URL must start with a scheme such as https://")]
    MissingScheme,
    /// URL has no host/domain
    #[error("URL has no host")]
    NoHost,
}

/// Check that `url` looks like `scheme://host[:port][/path]`.
///
/// Returns the lowercased host on success.
pub fn parse_web_url(url: &str) -> Result<String, UrlError> {
    if url.is_empty() {
        return Err(UrlError::Empty);
    }
    if url.chars().any(char::is_whitespace) {
        return Err(UrlError::Whitespace);
    }

    let (scheme, rest) = url.split_once("://").ok_or(UrlError::MissingScheme)?;
    if !is_scheme(scheme) {
        return Err(UrlError::MissingScheme);
    }

    extract_host(rest).ok_or(UrlError::NoHost)
}

/// RFC 3986 scheme: a letter followed by letters, digits, `+`, `-` or `.`.
fn is_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Extract host from the part of a URL after `scheme://`.
fn extract_host(without_scheme: &str) -> Option<String> {
    // Get the authority part (before first /, ? or #)
    let authority = without_scheme.split(['/', '?', '#']).next()?;

    // Drop credentials and port
    let host_port = authority.rsplit('@').next()?;
    let host = host_port.split(':').next()?;

    if host.is_empty() {
        return None;
    }

    Some(host.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_urls() {
        assert_eq!(parse_web_url("https://coppellcf.org"), Ok("coppellcf.org".to_string()));
        assert_eq!(
            parse_web_url("https://YMCADallas.org/coppell"),
            Ok("ymcadallas.org".to_string())
        );
        assert_eq!(
            parse_web_url("http://localhost:8080/?q=1"),
            Ok("localhost".to_string())
        );
        assert!(parse_web_url("ftp://files.example.com").is_ok());
    }

    #[test]
    fn test_invalid_urls() {
        assert_eq!(parse_web_url(""), Err(UrlError::Empty));
        assert_eq!(parse_web_url("coppelltx.gov"), Err(UrlError::MissingScheme));
        assert_eq!(parse_web_url("1http://x.org"), Err(UrlError::MissingScheme));
        assert_eq!(parse_web_url("https://"), Err(UrlError::NoHost));
        assert_eq!(parse_web_url("https://:443/path"), Err(UrlError::NoHost));
        assert_eq!(parse_web_url("https://a b.org"), Err(UrlError::Whitespace));
    }

    #[test]
    fn test_extract_host() {
        assert_eq!(extract_host("user:pw@example.com:8443/x"), Some("example.com".to_string()));
        assert_eq!(extract_host("example.com#top"), Some("example.com".to_string()));
        assert_eq!(extract_host("/path"), None);
    }
}
