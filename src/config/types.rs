// Configuration type definitions
// Sections map 1:1 to tables in config.toml

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub counter: CounterConfig,
    pub resources: ResourcesConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    pub show_headers: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

/// Counter persistence settings
#[derive(Debug, Deserialize, Clone)]
pub struct CounterConfig {
    /// Path of the persisted visit record, relative to the working directory
    pub record_file: String,
}

/// Static file serving settings
#[derive(Debug, Deserialize, Clone)]
pub struct ResourcesConfig {
    pub web_root: String,
    pub default_document: String,
}
