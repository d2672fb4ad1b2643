use rmcp::ErrorData;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Query error: {0}")]
    Query(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Connection pool exhausted")]
    PoolExhausted,

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Database scope violation: {}", .0.join("; "))]
    ScopeViolation(Vec<String>),

    #[error("Access to {0} is not permitted in the production environment")]
    EnvironmentRestricted(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

impl Error {
    #[must_use]
    pub const fn is_scope_violation(&self) -> bool {
        matches!(self, Self::ScopeViolation(_))
    }

    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    #[must_use]
    pub const fn is_pool_exhausted(&self) -> bool {
        matches!(self, Self::PoolExhausted)
    }

    /// Errors caused by the caller's input rather than server state
    #[must_use]
    pub const fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter(_) | Self::ScopeViolation(_) | Self::EnvironmentRestricted(_)
        )
    }

    /// Violation reasons carried by a scope violation, empty otherwise
    #[must_use]
    pub fn violations(&self) -> &[String] {
        match self {
            Self::ScopeViolation(v) => v,
            _ => &[],
        }
    }
}

impl From<Error> for ErrorData {
    fn from(err: Error) -> Self {
        if err.is_caller_error() {
            Self::invalid_params(err.to_string(), None)
        } else {
            Self::internal_error(err.to_string(), None)
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_violation_display_joins_reasons() {
        let err = Error::ScopeViolation(vec![
            "access to database 'other' is not allowed".to_string(),
            "USE statements are not allowed while database isolation is enabled".to_string(),
        ]);
        let text = err.to_string();
        assert!(text.starts_with("Database scope violation: "));
        assert!(text.contains("'other'"));
        assert!(text.contains("; USE statements"));
    }

    #[test]
    fn test_violations_accessor() {
        let err = Error::ScopeViolation(vec!["reason".to_string()]);
        assert_eq!(err.violations(), ["reason".to_string()]);
        assert!(Error::PoolExhausted.violations().is_empty());
    }

    #[test]
    fn test_caller_error_predicate() {
        assert!(Error::InvalidParameter("bad".into()).is_caller_error());
        assert!(Error::ScopeViolation(vec![]).is_caller_error());
        assert!(Error::EnvironmentRestricted("server variables".into()).is_caller_error());
        assert!(!Error::Query("boom".into()).is_caller_error());
        assert!(!Error::PoolExhausted.is_caller_error());
        assert!(!Error::Transport("down".into()).is_caller_error());
    }

    #[test]
    fn test_is_scope_violation() {
        assert!(Error::ScopeViolation(vec![]).is_scope_violation());
        assert!(!Error::InvalidParameter("bad".into()).is_scope_violation());
    }

    #[test]
    fn test_error_data_conversion_caller_errors() {
        let data: ErrorData = Error::InvalidParameter("SQL statement is empty".into()).into();
        assert_eq!(data.code, rmcp::model::ErrorCode::INVALID_PARAMS);
        assert!(data.message.contains("SQL statement is empty"));

        let data: ErrorData =
            Error::ScopeViolation(vec!["access to database 'x' is not allowed".into()]).into();
        assert_eq!(data.code, rmcp::model::ErrorCode::INVALID_PARAMS);
    }

    #[test]
    fn test_error_data_conversion_server_errors() {
        let data: ErrorData = Error::Query("syntax error".into()).into();
        assert_eq!(data.code, rmcp::model::ErrorCode::INTERNAL_ERROR);

        let data: ErrorData = Error::PoolExhausted.into();
        assert_eq!(data.code, rmcp::model::ErrorCode::INTERNAL_ERROR);
        assert!(data.message.contains("pool exhausted"));
    }

    #[test]
    fn test_environment_restricted_display() {
        let err = Error::EnvironmentRestricted("server status".into());
        assert_eq!(
            err.to_string(),
            "Access to server status is not permitted in the production environment"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = Error::Config("connection URL is required".into());
        assert_eq!(
            err.to_string(),
            "Configuration error: connection URL is required"
        );
    }
}
