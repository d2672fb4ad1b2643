//! Sensitive-field redaction for result rows
//!
//! Masks configuration values whose variable name matches a sensitive
//! pattern. Operates on name/value shaped rows (SHOW VARIABLES, SHOW
//! STATUS); rows without a recognized name field pass through
//! unchanged.

use regex::Regex;
use serde_json::Value;

/// Replacement written over masked values
pub const MASKED_VALUE: &str = "*** HIDDEN ***";

/// Variable-name substrings considered sensitive by default
pub const DEFAULT_SENSITIVE_PATTERNS: [&str; 12] = [
    "password",
    "auth",
    "credential",
    "key",
    "secret",
    "private",
    "host",
    "path",
    "directory",
    "ssl",
    "iptables",
    "filter",
];

/// Fields consulted, in order, to find the variable name in a row
const NAME_FIELDS: [&str; 7] = [
    "Variable_name",
    "variable_name",
    "name",
    "Name",
    "key",
    "Key",
    "Setting",
];

/// Fields overwritten with the mask when a row is sensitive
const VALUE_FIELDS: [&str; 6] = ["Value", "value", "variable_value", "val", "setting", "Setting_Value"];

/// A result row as an ordered column-name to value map
pub type ResultRow = serde_json::Map<String, Value>;

/// Compiled set of sensitive-name patterns
///
/// Built once from the defaults plus any configured extensions and
/// shared for the lifetime of the server.
#[derive(Debug, Clone)]
pub struct SensitivePatterns {
    patterns: Vec<Regex>,
}

impl SensitivePatterns {
    /// Build the default pattern set extended with configured
    /// patterns. Duplicates are dropped; a pattern that fails to
    /// compile is logged and skipped rather than aborting startup.
    #[must_use]
    pub fn with_extra(extra: &[String]) -> Self {
        let mut sources: Vec<String> = DEFAULT_SENSITIVE_PATTERNS
            .iter()
            .map(|p| (*p).to_string())
            .collect();
        for pattern in extra {
            let pattern = pattern.trim();
            if !pattern.is_empty() && !sources.iter().any(|s| s == pattern) {
                sources.push(pattern.to_string());
            }
        }

        let patterns = sources
            .iter()
            .filter_map(|source| match Regex::new(&format!("(?i){source}")) {
                Ok(re) => Some(re),
                Err(e) => {
                    tracing::warn!(pattern = %source, error = %e, "skipping malformed sensitive pattern");
                    None
                }
            })
            .collect();

        Self { patterns }
    }

    /// Whether a variable name matches any sensitive pattern
    #[must_use]
    pub fn is_sensitive(&self, name: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(name))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for SensitivePatterns {
    fn default() -> Self {
        Self::with_extra(&[])
    }
}

/// Mask the value fields of rows whose name field is sensitive.
///
/// Pure: the input is never mutated, untouched rows are cloned
/// verbatim. Applying the filter twice yields the same output.
#[must_use]
pub fn filter_sensitive(rows: &[ResultRow], patterns: &SensitivePatterns) -> Vec<ResultRow> {
    rows.iter()
        .map(|row| {
            if row_name(row).is_some_and(|name| patterns.is_sensitive(&name)) {
                mask_values(row)
            } else {
                row.clone()
            }
        })
        .collect()
}

/// The row's variable name, from the first present name field
fn row_name(row: &ResultRow) -> Option<String> {
    NAME_FIELDS
        .iter()
        .find_map(|field| row.get(*field))
        .map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
}

fn mask_values(row: &ResultRow) -> ResultRow {
    let mut masked = row.clone();
    for field in VALUE_FIELDS {
        if let Some(value) = masked.get_mut(field) {
            *value = Value::String(MASKED_VALUE.to_string());
        }
    }
    masked
}
