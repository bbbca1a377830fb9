//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (optionally via a `.env` file) or
//! defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Tools domain configuration.
    pub tools: ToolsConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the tools domain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// Reject `complete_task` on a task that is already completed.
    /// When false, a second completion succeeds and re-stamps `completedAt`.
    pub strict_completion: bool,

    /// Artificial delay before each tool call, in milliseconds.
    /// Cosmetic only (demo UIs); 0 disables it.
    pub demo_latency_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "task-notes-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            tools: ToolsConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = parse_flag(&timestamps).unwrap_or(true);
        }

        if let Ok(strict) = std::env::var("MCP_STRICT_COMPLETION") {
            match parse_flag(&strict) {
                Some(value) => config.tools.strict_completion = value,
                None => warn!("Ignoring invalid MCP_STRICT_COMPLETION value: {}", strict),
            }
            info!("Strict task completion: {}", config.tools.strict_completion);
        }

        if let Ok(latency) = std::env::var("MCP_DEMO_LATENCY_MS") {
            match latency.parse() {
                Ok(ms) => config.tools.demo_latency_ms = ms,
                Err(_) => warn!("Ignoring invalid MCP_DEMO_LATENCY_MS value: {}", latency),
            }
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config
    }
}

/// Parse a boolean-ish environment value.
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.server.name, "task-notes-mcp-server");
        assert!(!config.tools.strict_completion);
        assert_eq!(config.tools.demo_latency_ms, 0);
    }

    #[test]
    fn test_tools_config_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_STRICT_COMPLETION", "true");
            std::env::set_var("MCP_DEMO_LATENCY_MS", "300");
        }
        let config = Config::from_env();
        assert!(config.tools.strict_completion);
        assert_eq!(config.tools.demo_latency_ms, 300);
        unsafe {
            std::env::remove_var("MCP_STRICT_COMPLETION");
            std::env::remove_var("MCP_DEMO_LATENCY_MS");
        }
    }

    #[test]
    fn test_invalid_env_values_keep_defaults() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_STRICT_COMPLETION", "maybe");
            std::env::set_var("MCP_DEMO_LATENCY_MS", "soon");
        }
        let config = Config::from_env();
        assert!(!config.tools.strict_completion);
        assert_eq!(config.tools.demo_latency_ms, 0);
        unsafe {
            std::env::remove_var("MCP_STRICT_COMPLETION");
            std::env::remove_var("MCP_DEMO_LATENCY_MS");
        }
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" 0 "), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
