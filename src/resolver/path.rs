//! Path validation and decomposition.
//!
//! `/greeter/say/hello` splits into the service token `greeter` and the
//! backend-facing path `/say/hello`. The token is the only part of the URL
//! that reaches the routing fabric, so it must match [`SERVICE_TOKEN`].

use std::sync::LazyLock;

use regex::Regex;

use crate::resolver::ResolveError;

/// Alphanumeric, optionally with interior hyphens, never hyphen-terminated.
pub const SERVICE_TOKEN: &str = r"^[A-Za-z0-9]+([A-Za-z0-9-]*[A-Za-z0-9])?$";

static SERVICE_TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SERVICE_TOKEN).expect("service token regex is valid"));

/// A validated request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPath<'a> {
    /// First segment after the root.
    pub service: &'a str,
    /// Remaining segments, always starting with `/`.
    pub path: String,
}

/// Returns true if `token` is an acceptable service token.
pub fn is_valid_service_token(token: &str) -> bool {
    SERVICE_TOKEN_REGEX.is_match(token)
}

/// Split `path` into service token and backend-facing path.
pub fn parse_path(path: &str) -> Result<ParsedPath<'_>, ResolveError> {
    let parts: Vec<&str> = path.split('/').collect();
    if parts.len() < 2 {
        return Err(ResolveError::UnknownService);
    }

    let service = parts[1];
    if !is_valid_service_token(service) {
        return Err(ResolveError::InvalidPath);
    }

    Ok(ParsedPath {
        service,
        path: format!("/{}", parts[2..].join("/")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_service_and_path() {
        let parsed = parse_path("/greeter/say/hello").unwrap();
        assert_eq!(parsed.service, "greeter");
        assert_eq!(parsed.path, "/say/hello");
    }

    #[test]
    fn test_service_only() {
        assert_eq!(parse_path("/greeter").unwrap().path, "/");
        assert_eq!(parse_path("/greeter/").unwrap().path, "/");
    }

    #[test]
    fn test_remainder_kept_verbatim() {
        assert_eq!(parse_path("/greeter/a//b/").unwrap().path, "/a//b/");
    }

    #[test]
    fn test_too_few_segments() {
        assert!(matches!(parse_path(""), Err(ResolveError::UnknownService)));
        assert!(matches!(parse_path("greeter"), Err(ResolveError::UnknownService)));
    }

    #[test]
    fn test_root_has_empty_token() {
        assert!(matches!(parse_path("/"), Err(ResolveError::InvalidPath)));
        assert!(matches!(parse_path("//greeter"), Err(ResolveError::InvalidPath)));
    }

    #[test]
    fn test_token_pattern() {
        for ok in ["a", "greeter", "Greeter2", "my-service", "a-b-c", "0", "x--y"] {
            assert!(is_valid_service_token(ok), "{ok} should be valid");
        }
        for bad in ["", "-abc", "abc-", "-", "a b", "a_b", "a.b", "a%20b", "é"] {
            assert!(!is_valid_service_token(bad), "{bad} should be invalid");
        }
    }
}
