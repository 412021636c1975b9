use url::Url;

use super::FieldPolicy;
use crate::issue::Issue;

const GIT_PREFIX: &str = "git+";

/// Accepts any absolute URL, as long as `http`/`https` URLs name a host.
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlPolicy;

impl UrlPolicy {
    pub fn new() -> Self {
        Self
    }

    /// Whether `value` is a usable URL. Empty strings are never valid.
    ///
    /// A leading `git+` (as in `git+https://host/repo.git`) is ignored. Schemes
    /// other than `http` and `https` need not carry a host, so `mailto:` links pass.
    pub fn is_valid(value: &str) -> bool {
        if value.is_empty() {
            return false;
        }
        let value = match value.strip_prefix(GIT_PREFIX) {
            Some(rest) if !rest.is_empty() => rest,
            _ => value,
        };
        if is_http_scheme(value) && !has_authority_host(value) {
            return false;
        }

        match Url::parse(value) {
            Ok(url) => {
                let is_http = matches!(url.scheme(), "http" | "https");
                !(is_http && url.host_str().is_none_or(str::is_empty))
            }
            Err(_) => false,
        }
    }
}

fn is_http_scheme(value: &str) -> bool {
    value.split_once(':').is_some_and(|(scheme, _)| {
        scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https")
    })
}

/// The parser fills in a host for `http:example.com` or `http:///example.com`,
/// so the raw text must spell out `scheme://host` itself.
fn has_authority_host(value: &str) -> bool {
    let Some((_, rest)) = value.split_once("://") else {
        return false;
    };
    let authority = rest
        .split(['/', '\\', '?', '#'])
        .next()
        .unwrap_or_default();
    let host = authority.rsplit('@').next().unwrap_or_default();
    let host = if host.starts_with('[') {
        host
    } else {
        host.split(':').next().unwrap_or_default()
    };
    !host.is_empty()
}

impl FieldPolicy for UrlPolicy {
    fn rule_name(&self) -> &str {
        "url"
    }

    fn check(&self, value: &str, field: &str) -> Option<Issue> {
        if value.is_empty() || Self::is_valid(value) {
            return None;
        }
        Some(Issue::new(format!("Invalid URL in field '{}': {}", field, value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_urls() {
        assert!(UrlPolicy::is_valid("https://github.com/rust-lang/rust-analyzer"));
        assert!(UrlPolicy::is_valid("http://example.com/bugs?id=1"));
        assert!(UrlPolicy::is_valid("mailto:foo@bar.net"));
        assert!(UrlPolicy::is_valid("git+https://github.com/Foo/Bar.git"));
        assert!(UrlPolicy::is_valid("file:///home/user/notes.md"));
    }

    #[test]
    fn test_invalid_urls() {
        assert!(!UrlPolicy::is_valid(""));
        assert!(!UrlPolicy::is_valid("http://"));
        assert!(!UrlPolicy::is_valid("https://"));
        assert!(!UrlPolicy::is_valid("git+https://"));
        assert!(!UrlPolicy::is_valid("Foo and bar!"));
        assert!(!UrlPolicy::is_valid("github.com/Foo/Bar"));
        assert!(!UrlPolicy::is_valid("git+"));
    }

    #[test]
    fn test_http_urls_must_spell_out_a_host() {
        for value in [
            "http:///example.com",
            "https:/github.com",
            "http:example.com",
            "https:\\\\github.com",
            "git+https:///x.org/r.git",
            "https://user@/repo",
            "http://:8080/path",
        ] {
            assert!(!UrlPolicy::is_valid(value), "{} should be rejected", value);
        }
        assert!(UrlPolicy::is_valid("HTTPS://github.com/Foo/Bar"));
        assert!(UrlPolicy::is_valid("https://user@github.com:443/repo"));
        assert!(UrlPolicy::is_valid("http://[::1]:8080/"));
    }

    #[test]
    fn test_check_skips_empty_values() {
        let policy = UrlPolicy::new();
        assert!(policy.check("", "homepage").is_none());
        assert!(policy.check_optional(None, "homepage").is_none());
    }

    #[test]
    fn test_check_message() {
        let issue = UrlPolicy::new().check("https://", "bugs").unwrap();
        assert_eq!(issue.message(), "Invalid URL in field 'bugs': https://");
    }
}
