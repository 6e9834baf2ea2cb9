//! Metric key naming.
//!
//! These names are read by existing dashboards and must stay bit-exact:
//! - per-path timing: `{prefix}{path}` with every `/` replaced by `.`
//! - per-status counter: `{prefix}.request.{status}`
//! - aggregate timing / counter: `{prefix}.{label}.timing` / `{prefix}.{label}.count`

/// Label used for aggregate metrics until one is configured.
pub const DEFAULT_GLOBAL_LABEL: &str = "request";

/// Namespace separator used in metric keys.
pub const SEPARATOR: char = '.';

/// Name of the per-path timing metric for an already-normalized path.
///
/// Paths are expected to start with `/`, which becomes the separator between
/// prefix and path. A path without a leading `/` (custom filters may return
/// one) gets a separator inserted, so an empty path yields `"{prefix}."`.
pub fn per_path_name(prefix: &str, path: &str) -> String {
    let key = path.replace('/', ".");
    if key.starts_with(SEPARATOR) {
        format!("{prefix}{key}")
    } else {
        format!("{prefix}{SEPARATOR}{key}")
    }
}

/// Name of the counter incremented once per response with the given status.
pub fn status_counter_name(prefix: &str, status: u16) -> String {
    format!("{prefix}.request.{status}")
}

/// Precomputed names of the aggregate (path-agnostic) metrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalNames {
    pub timing: String,
    pub count: String,
}

impl GlobalNames {
    /// Derive both names from the prefix and label together.
    pub fn new(prefix: &str, label: &str) -> Self {
        Self {
            timing: format!("{prefix}.{label}.timing"),
            count: format!("{prefix}.{label}.count"),
        }
    }

    /// Names under [`DEFAULT_GLOBAL_LABEL`].
    pub fn default_for(prefix: &str) -> Self {
        Self::new(prefix, DEFAULT_GLOBAL_LABEL)
    }
}
