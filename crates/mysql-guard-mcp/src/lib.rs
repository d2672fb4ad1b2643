//! MCP server for MySQL with database isolation and sensitive-data redaction

pub mod config;
mod constants;
mod error;
mod helpers;
pub mod observability;
mod pool;
pub mod security;
pub mod server;
pub mod transport;
pub mod types;
mod validation;

pub use config::{
    Config, ConfigBuilder, Environment, IsolationConfig, TelemetryConfig, TransportConfig,
    TransportMode,
};
pub use error::{Error, Result};
pub use pool::{Pool, PooledConnection, create_pool};
pub use security::{AccessLevel, CheckResult, QueryGuard, ScopePolicy, SensitivePatterns};
pub use server::ServerHandler;
pub use types::*;
