//! Database isolation policy
//!
//! Lexical scope checking for untrusted SQL. Database references are
//! extracted with fixed regex patterns over a normalized copy of the
//! statement and compared against the single allowed database. The
//! extractor deliberately over-matches (e.g. table aliases in
//! `alias.column` expressions): a false positive denies a query, a
//! false negative would leak one.

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// MySQL system databases reachable under the restricted level
pub const SYSTEM_DATABASES: [&str; 4] =
    ["information_schema", "mysql", "performance_schema", "sys"];

/// Patterns that capture a database name in position 1.
///
/// Applied to normalized (uppercase, whitespace-collapsed) SQL.
static DATABASE_REF_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // qualified reference: db.table anywhere in the statement
        r"\b([A-Z_][A-Z0-9_]*)\s*\.\s*[A-Z_][A-Z0-9_]*",
        r"\bSHOW\s+(?:FULL\s+)?TABLES\s+(?:FROM|IN)\s+([A-Z_][A-Z0-9_]*)",
        r"\bUSE\s+([A-Z_][A-Z0-9_]*)",
        r"\bFROM\s+([A-Z_][A-Z0-9_]*)\s*\.",
        r"\bJOIN\s+([A-Z_][A-Z0-9_]*)\s*\.",
        r"\bINTO\s+([A-Z_][A-Z0-9_]*)\s*\.",
        r"\bUPDATE\s+([A-Z_][A-Z0-9_]*)\s*\.",
        r"\bDELETE\s+FROM\s+([A-Z_][A-Z0-9_]*)\s*\.",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid builtin pattern"))
    .collect()
});

static SHOW_DATABASES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bSHOW\s+DATABASES\b")
        .expect("valid builtin pattern")
});

// unanchored: USE must be caught anywhere in the text, not only as
// the leading verb
static USE_STATEMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bUSE\s+").expect("valid builtin pattern")
});

/// System table references denied outright under the strict level
static SYSTEM_TABLE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\bMYSQL\.USER\b",
        r"\bMYSQL\.DB\b",
        r"\bINFORMATION_SCHEMA\.",
        r"\bPERFORMANCE_SCHEMA\.",
        r"\bSYS\.",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid builtin pattern"))
    .collect()
});

static IDENTIFIER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$")
        .expect("valid builtin pattern")
});

/// How strictly queries are confined to the allowed database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessLevel {
    /// Only the allowed database; system databases and catalog
    /// enumeration are denied
    Strict,
    /// The allowed database plus the MySQL system databases
    Restricted,
    /// No scope checking
    #[default]
    Permissive,
}

impl AccessLevel {
    /// Parse a case-insensitive level name
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "strict" => Some(Self::Strict),
            "restricted" => Some(Self::Restricted),
            "permissive" => Some(Self::Permissive),
            _ => None,
        }
    }

    /// Parse a level name, degrading unknown values to permissive
    /// with a logged warning
    #[must_use]
    pub fn parse_lossy(value: &str) -> Self {
        Self::parse(value).unwrap_or_else(|| {
            tracing::warn!(
                access_level = value,
                "unrecognized access level, falling back to permissive"
            );
            Self::Permissive
        })
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Strict => "strict",
            Self::Restricted => "restricted",
            Self::Permissive => "permissive",
        };
        f.write_str(name)
    }
}

/// Outcome of a scope check
///
/// Invariant: `allowed` is true exactly when `violations` is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub allowed: bool,
    pub violations: Vec<String>,
}

impl CheckResult {
    #[must_use]
    pub const fn allowed() -> Self {
        Self {
            allowed: true,
            violations: Vec::new(),
        }
    }

    fn from_violations(violations: Vec<String>) -> Self {
        Self {
            allowed: violations.is_empty(),
            violations,
        }
    }
}

/// Immutable database isolation policy
///
/// Constructed once from configuration and shared across calls. The
/// policy is inactive unless an allowed database is configured and the
/// level is stricter than permissive.
#[derive(Debug, Clone)]
pub struct ScopePolicy {
    allowed_database: Option<String>,
    access_level: AccessLevel,
}

impl ScopePolicy {
    #[must_use]
    pub fn new(allowed_database: Option<String>, access_level: AccessLevel) -> Self {
        Self {
            allowed_database: allowed_database.map(|db| db.to_lowercase()),
            access_level,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.allowed_database.is_some() && self.access_level != AccessLevel::Permissive
    }

    #[must_use]
    pub const fn access_level(&self) -> AccessLevel {
        self.access_level
    }

    #[must_use]
    pub fn allowed_database(&self) -> Option<&str> {
        self.allowed_database.as_deref()
    }

    /// Check a statement against the policy.
    ///
    /// Violations list each out-of-scope database (sorted by name, so
    /// output is deterministic) followed by any special-statement
    /// denials. A disabled policy allows everything without scanning.
    #[must_use]
    pub fn check_query(&self, sql: &str) -> CheckResult {
        if !self.enabled() {
            return CheckResult::allowed();
        }

        let normalized = normalize_sql(sql);

        let mut denied: Vec<String> = extract_from_normalized(&normalized)
            .into_iter()
            .filter(|db| !self.is_database_allowed(db))
            .collect();
        denied.sort_unstable();

        let mut violations: Vec<String> = denied
            .into_iter()
            .map(|db| format!("access to database '{db}' is not allowed"))
            .collect();
        violations.extend(self.check_special(&normalized));

        CheckResult::from_violations(violations)
    }

    /// Whether a (lowercase) database name is inside the scope
    #[must_use]
    pub fn is_database_allowed(&self, database: &str) -> bool {
        let database = database.to_lowercase();
        if self.allowed_database.as_deref() == Some(database.as_str()) {
            return true;
        }
        self.access_level == AccessLevel::Restricted
            && SYSTEM_DATABASES.contains(&database.as_str())
    }

    /// Statement-level checks that bypass identifier extraction
    fn check_special(&self, normalized: &str) -> Vec<String> {
        let mut violations = Vec::new();

        if self.access_level == AccessLevel::Strict && SHOW_DATABASES_RE.is_match(normalized) {
            violations.push("SHOW DATABASES is not allowed in strict mode".to_string());
        }

        // USE switches the session database and would defeat the
        // scope entirely, so it is denied at every enabled level
        if USE_STATEMENT_RE.is_match(normalized) {
            violations.push(
                "USE statements are not allowed while database isolation is enabled".to_string(),
            );
        }

        if self.access_level == AccessLevel::Strict {
            for pattern in SYSTEM_TABLE_PATTERNS.iter() {
                if pattern.is_match(normalized) {
                    violations
                        .push("access to system tables is not allowed in strict mode".to_string());
                    break;
                }
            }
        }

        violations
    }
}

/// Uppercase the statement and collapse whitespace runs
#[must_use]
pub fn normalize_sql(sql: &str) -> String {
    sql.to_uppercase().split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extract candidate database names referenced by a statement.
///
/// Returns lowercase names. Matching is purely lexical: aliases and
/// strings that happen to look like qualified references are included.
#[must_use]
pub fn extract_databases(sql: &str) -> HashSet<String> {
    extract_from_normalized(&normalize_sql(sql))
}

fn extract_from_normalized(normalized: &str) -> HashSet<String> {
    let mut databases = HashSet::new();
    for pattern in DATABASE_REF_PATTERNS.iter() {
        for captures in pattern.captures_iter(normalized) {
            if let Some(name) = captures.get(1) {
                let name = name.as_str();
                if IDENTIFIER_RE.is_match(name) {
                    databases.insert(name.to_lowercase());
                }
            }
        }
    }
    databases
}
