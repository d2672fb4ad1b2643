//! Constants for MCP server

/// SQL query to check database connection health
pub const HEALTH_CHECK_QUERY: &str = "SELECT 1";

/// SQL statement to list databases visible to the session
pub const SHOW_DATABASES_QUERY: &str = "SHOW DATABASES";

/// Column name returned by `SHOW DATABASES`
pub const DATABASE_COLUMN: &str = "Database";

/// Default maximum number of databases returned by the listing tool
pub const DEFAULT_DATABASE_LIMIT: u32 = 100;

/// Connection status: success
pub const STATUS_OK: &str = "ok";
