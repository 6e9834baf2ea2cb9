//! Path filters.
//!
//! A filter receives the raw request target (path plus optional query) and
//! returns `Some(normalized)` to record a per-path timing under that path, or
//! `None` to skip the per-path timing. Aggregate metrics are unaffected.

use std::sync::Arc;

use serde::Deserialize;

/// Shared filter function.
pub type PathFilter = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Built-in filters selectable from config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    /// Drop the query string, always record.
    #[default]
    StripQuery,
    /// Record the raw target, query included.
    Passthrough,
}

/// Default filter: everything from the first `?` is removed.
pub fn strip_query(target: &str) -> Option<String> {
    let path = target.split_once('?').map_or(target, |(p, _)| p);
    Some(path.to_string())
}

/// Records the target unchanged.
pub fn passthrough(target: &str) -> Option<String> {
    Some(target.to_string())
}

pub fn from_mode(mode: FilterMode) -> PathFilter {
    match mode {
        FilterMode::StripQuery => Arc::new(strip_query),
        FilterMode::Passthrough => Arc::new(passthrough),
    }
}

/// Skip targets whose path is one of `prefixes` or lies below one of them
/// (`/healthz` skips `/healthz` and `/healthz/live`, not `/healthzcheck`);
/// delegate the rest.
pub fn excluding(prefixes: Vec<String>, inner: PathFilter) -> PathFilter {
    if prefixes.is_empty() {
        return inner;
    }
    Arc::new(move |target: &str| {
        let path = target.split_once('?').map_or(target, |(p, _)| p);
        if prefixes.iter().any(|p| is_under(path, p)) {
            None
        } else {
            inner(target)
        }
    })
}

fn is_under(path: &str, prefix: &str) -> bool {
    let prefix = prefix.trim_end_matches('/');
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_query_removes_everything_after_first_question_mark() {
        assert_eq!(strip_query("/path?x=1").as_deref(), Some("/path"));
        assert_eq!(strip_query("/path?x=1?y=2").as_deref(), Some("/path"));
        assert_eq!(strip_query("/path").as_deref(), Some("/path"));
        assert_eq!(strip_query("?x=1").as_deref(), Some(""));
    }

    #[test]
    fn passthrough_keeps_query() {
        assert_eq!(passthrough("/path?x=1").as_deref(), Some("/path?x=1"));
    }

    #[test]
    fn excluding_skips_prefixes_and_delegates_rest() {
        let f = excluding(vec!["/healthz".into()], from_mode(FilterMode::StripQuery));
        assert_eq!(f("/healthz"), None);
        assert_eq!(f("/healthz?probe=1"), None);
        assert_eq!(f("/orders?x=1").as_deref(), Some("/orders"));
    }

    #[test]
    fn excluding_matches_whole_segments() {
        let f = excluding(vec!["/healthz".into()], from_mode(FilterMode::StripQuery));
        assert_eq!(f("/healthz/live"), None);
        assert_eq!(f("/healthzcheck").as_deref(), Some("/healthzcheck"));

        let g = excluding(vec!["/internal/".into()], from_mode(FilterMode::StripQuery));
        assert_eq!(g("/internal"), None);
        assert_eq!(g("/internal/debug"), None);
        assert_eq!(g("/internals").as_deref(), Some("/internals"));
    }

    #[test]
    fn excluding_nothing_returns_inner() {
        let f = excluding(Vec::new(), from_mode(FilterMode::Passthrough));
        assert_eq!(f("/a?b").as_deref(), Some("/a?b"));
    }
}
