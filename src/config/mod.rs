// Configuration module entry point
// Layered loading: config.toml (optional) < VISITS_* environment overrides

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{
    Config, CounterConfig, LoggingConfig, PerformanceConfig, ResourcesConfig, ServerConfig,
};

impl Config {
    /// Load configuration from the specified file path (without extension)
    /// Default config file is "config.toml" when no path specified
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("VISITS").separator("_"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.show_headers", false)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("counter.record_file", "visits.json")?
            .set_default("resources.web_root", "public")?
            .set_default("resources.default_document", "index.html")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::load_from("nonexistent-config").expect("defaults should load");
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 5000);
        assert_eq!(cfg.counter.record_file, "visits.json");
        assert_eq!(cfg.resources.default_document, "index.html");
        assert!(cfg.logging.access_log);
    }

    #[test]
    fn test_socket_addr() {
        let cfg = Config::load_from("nonexistent-config").expect("defaults should load");
        let addr = cfg.get_socket_addr().expect("address should parse");
        assert_eq!(addr.port(), 5000);
    }
}
