//! Security module for MCP server

mod query_guard;
mod redact;
mod scope;

pub use query_guard::{QueryCategory, QueryGuard};
pub use redact::{
    DEFAULT_SENSITIVE_PATTERNS, MASKED_VALUE, ResultRow, SensitivePatterns, filter_sensitive,
};
pub use scope::{
    AccessLevel, CheckResult, SYSTEM_DATABASES, ScopePolicy, extract_databases, normalize_sql,
};
