//! Parameter validation utilities

use crate::Error;

/// Maximum length for SQL identifiers (MySQL limit is 64)
const MAX_IDENTIFIER_LENGTH: usize = 64;

/// Statement verbs whose results are reported as affected rows
const DML_VERBS: &[&str] = &["INSERT", "UPDATE", "DELETE", "REPLACE"];

/// Validate SQL identifier (database/table name) to prevent injection
pub fn is_valid_identifier(name: &str) -> bool {
    if name.is_empty() || name.len() > MAX_IDENTIFIER_LENGTH {
        return false;
    }

    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_') {
        return false;
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Validate identifier and return error if invalid
pub fn validate_identifier(name: &str, context: &str) -> Result<(), Error> {
    if is_valid_identifier(name) {
        Ok(())
    } else {
        Err(Error::InvalidParameter(format!(
            "Invalid {context}: '{name}'. \
             Must be 1-64 alphanumeric characters or underscores, \
             cannot start with a digit."
        )))
    }
}

/// Validate a LIKE pattern used in SHOW statements.
///
/// Patterns are interpolated into SHOW statements, which cannot take
/// bind parameters, so the charset is restricted to identifier
/// characters plus the LIKE wildcards.
pub fn validate_like_pattern(pattern: &str) -> Result<(), Error> {
    if pattern.is_empty() || pattern.len() > MAX_IDENTIFIER_LENGTH {
        return Err(Error::InvalidParameter(format!(
            "Invalid pattern: '{pattern}'. Must be 1-{MAX_IDENTIFIER_LENGTH} characters."
        )));
    }

    let valid = pattern
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '%');

    if valid {
        Ok(())
    } else {
        Err(Error::InvalidParameter(format!(
            "Invalid pattern: '{pattern}'. \
             Only alphanumeric characters, underscore and '%' are allowed."
        )))
    }
}

/// First verb of a statement, uppercased
pub fn statement_verb(sql: &str) -> String {
    sql.split_whitespace()
        .next()
        .unwrap_or_default()
        .to_uppercase()
}

/// Whether a statement verb modifies rows rather than returning them
pub fn is_dml_verb(verb: &str) -> bool {
    DML_VERBS.contains(&verb)
}
