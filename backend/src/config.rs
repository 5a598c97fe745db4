//! Server settings, read from the command line with environment fallbacks.

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Multi-language product badge configuration server", long_about = None)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "BADGE_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind
    #[arg(long, env = "BADGE_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Directory holding the saved configurations
    #[arg(long, env = "BADGE_STORE_DIR", default_value = "logs")]
    pub store_dir: PathBuf,

    /// Directory of the browser front-end, served for every non-API path
    #[arg(long, env = "BADGE_STATIC_DIR", default_value = "static/dist")]
    pub static_dir: PathBuf,

    /// Open the front-end in the default browser once the server is up
    #[arg(long, env = "BADGE_OPEN_BROWSER")]
    pub open_browser: bool,

    /// Default log filter, overridden by RUST_LOG
    #[arg(long, env = "BADGE_LOG", default_value = "info")]
    pub log_level: String,
}

impl ServerConfig {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_arguments_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "badge-backend",
            "--host",
            "0.0.0.0",
            "--port",
            "9000",
            "--store-dir",
            "/var/lib/badges",
            "--static-dir",
            "ui",
            "--open-browser",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(config.url(), "http://0.0.0.0:9000");
        assert_eq!(config.store_dir, PathBuf::from("/var/lib/badges"));
        assert_eq!(config.static_dir, PathBuf::from("ui"));
        assert!(config.open_browser);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn rejects_invalid_port() {
        assert!(ServerConfig::try_parse_from(["badge-backend", "--port", "http"]).is_err());
    }
}
