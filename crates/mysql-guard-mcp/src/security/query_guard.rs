//! Pre- and post-execution security checks for tool queries

use std::fmt;

use super::redact::{ResultRow, SensitivePatterns, filter_sensitive};
use super::scope::ScopePolicy;
use crate::Error;
use crate::config::Environment;

/// Sensitive query categories gated in production
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryCategory {
    Variables,
    Status,
    ProcessList,
}

impl fmt::Display for QueryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Variables => "server variables",
            Self::Status => "server status",
            Self::ProcessList => "the process list",
        };
        f.write_str(name)
    }
}

/// Security wrapper applied around every tool query
///
/// Bundles the isolation policy, the environment gate, and the
/// sensitive-pattern set. Immutable after construction; clones share
/// nothing mutable.
#[derive(Debug, Clone)]
pub struct QueryGuard {
    policy: Option<ScopePolicy>,
    environment: Environment,
    allow_sensitive_info: bool,
    patterns: SensitivePatterns,
    max_sql_length: usize,
}

impl QueryGuard {
    #[must_use]
    pub const fn new(
        policy: Option<ScopePolicy>,
        environment: Environment,
        allow_sensitive_info: bool,
        patterns: SensitivePatterns,
        max_sql_length: usize,
    ) -> Self {
        Self {
            policy,
            environment,
            allow_sensitive_info,
            patterns,
            max_sql_length,
        }
    }

    #[must_use]
    pub const fn environment(&self) -> Environment {
        self.environment
    }

    #[must_use]
    pub const fn policy(&self) -> Option<&ScopePolicy> {
        self.policy.as_ref()
    }

    /// Validate a statement before execution.
    ///
    /// Rejects empty and oversized statements as parameter errors,
    /// then applies the isolation policy. The violation list is
    /// carried into the error verbatim.
    pub fn check_query(&self, sql: &str) -> Result<(), Error> {
        if sql.trim().is_empty() {
            return Err(Error::InvalidParameter("SQL statement is empty".into()));
        }
        if sql.len() > self.max_sql_length {
            return Err(Error::InvalidParameter(format!(
                "SQL statement exceeds maximum length of {} characters",
                self.max_sql_length
            )));
        }

        if let Some(policy) = &self.policy {
            let result = policy.check_query(sql);
            if !result.allowed {
                tracing::warn!(
                    violations = result.violations.len(),
                    "query denied by isolation policy"
                );
                return Err(Error::ScopeViolation(result.violations));
            }
        }

        Ok(())
    }

    /// Gate sensitive query categories in the production environment
    pub fn check_environment(&self, category: QueryCategory) -> Result<(), Error> {
        if self.environment == Environment::Production && !self.allow_sensitive_info {
            return Err(Error::EnvironmentRestricted(category.to_string()));
        }
        Ok(())
    }

    /// Mask sensitive rows when running in production
    #[must_use]
    pub fn redact_rows(&self, rows: Vec<ResultRow>) -> Vec<ResultRow> {
        if self.environment == Environment::Production {
            filter_sensitive(&rows, &self.patterns)
        } else {
            rows
        }
    }
}
