//! Type definitions for MCP tools

use rmcp::ErrorData;
use rmcp::handler::server::wrapper::Json;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_DATABASE_LIMIT;
use crate::security::ResultRow;

/// Result type for MCP tool handlers returning structured JSON data
pub type ToolResult<T> = Result<Json<T>, ErrorData>;

/// Connection health check result
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PingResult {
    /// Connection status: "ok" or "error"
    #[schemars(description = "Connection status: ok or error")]
    pub status: String,
    /// Query latency in milliseconds
    #[schemars(description = "Query latency in milliseconds")]
    pub latency_ms: u64,
}

/// Execution metadata attached to every query response
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MetadataInfo {
    /// Statement verb or operation label
    #[schemars(description = "Operation type: SELECT, INSERT, SHOW VARIABLES, etc.")]
    pub operation_type: String,
    /// Number of rows in `results`
    #[schemars(description = "Number of rows returned")]
    pub result_count: usize,
    /// Row count before filtering and limiting (listing tools only)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Row count before filtering and limiting")]
    pub total_count: Option<usize>,
    /// Pattern the listing was filtered with
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Pattern the listing was filtered with")]
    pub pattern: Option<String>,
    /// Whether system databases were excluded
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Whether system databases were excluded")]
    pub exclude_system: Option<bool>,
    /// Whether the result was truncated by the limit
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Whether the result was truncated by the limit")]
    pub limited: Option<bool>,
}

impl MetadataInfo {
    #[must_use]
    pub fn new(operation_type: impl Into<String>, result_count: usize) -> Self {
        Self {
            operation_type: operation_type.into(),
            result_count,
            total_count: None,
            pattern: None,
            exclude_system: None,
            limited: None,
        }
    }
}

/// Query response envelope: execution metadata plus result rows
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct QueryResponse {
    #[schemars(description = "Execution metadata")]
    pub metadata_info: MetadataInfo,
    /// Result rows as ordered column-name to value maps
    #[schemars(description = "Result rows")]
    pub results: Vec<ResultRow>,
}

impl QueryResponse {
    #[must_use]
    pub fn new(operation_type: impl Into<String>, results: Vec<ResultRow>) -> Self {
        Self {
            metadata_info: MetadataInfo::new(operation_type, results.len()),
            results,
        }
    }
}

/// Parameters for SQL query execution
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExecuteQueryParams {
    /// SQL statement to execute
    #[schemars(
        description = "SQL statement to execute. Statements referencing databases outside the configured scope are rejected"
    )]
    pub sql: String,
    /// Optional positional parameters bound to '?' placeholders
    #[serde(default)]
    #[schemars(description = "Positional parameters bound to '?' placeholders, in order")]
    pub params: Option<Vec<serde_json::Value>>,
}

/// Parameters for listing databases
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ShowDatabasesParams {
    /// Optional LIKE-style filter (supports '%')
    #[serde(default)]
    #[schemars(description = "LIKE-style name filter, e.g. 'shop%' or '%test%'")]
    pub pattern: Option<String>,
    /// Maximum number of databases to return (0 = unlimited)
    #[serde(default = "default_database_limit")]
    #[schemars(description = "Maximum number of databases to return, 0 for unlimited")]
    pub limit: u32,
    /// Whether to hide MySQL system databases
    #[serde(default = "default_true")]
    #[schemars(description = "Hide MySQL system databases (default true)")]
    pub exclude_system: bool,
}

/// Parameters for showing server variables
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ShowVariablesParams {
    /// Optional LIKE-style variable name filter
    #[serde(default)]
    #[schemars(description = "LIKE-style variable name filter, e.g. 'max_%'")]
    pub pattern: Option<String>,
    /// Query GLOBAL scope instead of SESSION
    #[serde(default)]
    #[schemars(description = "Query GLOBAL scope instead of SESSION")]
    pub global_scope: bool,
}

/// Parameters for showing server status counters
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ShowStatusParams {
    /// Optional LIKE-style status name filter
    #[serde(default)]
    #[schemars(description = "LIKE-style status name filter, e.g. 'Threads%'")]
    pub pattern: Option<String>,
    /// Query GLOBAL scope instead of SESSION
    #[serde(default)]
    #[schemars(description = "Query GLOBAL scope instead of SESSION")]
    pub global_scope: bool,
}

/// Parameters for showing the process list
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ShowProcessListParams {
    /// Show full statement text instead of the first 100 characters
    #[serde(default)]
    #[schemars(description = "Show full statement text instead of the first 100 characters")]
    pub full: bool,
}

const fn default_database_limit() -> u32 {
    DEFAULT_DATABASE_LIMIT
}

const fn default_true() -> bool {
    true
}
