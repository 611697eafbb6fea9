use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory with the built frontend (index.html, wasm, css)
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub title: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
static_dir = "dist"

[dashboard]
title = "📊 Regional Sales & Orders Dashboard"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    default_config()
}

pub fn default_config() -> anyhow::Result<Config> {
    parse_config(DEFAULT_CONFIG)
}

fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

impl ServerConfig {
    /// Socket address the server binds to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port)
            .parse::<SocketAddr>()
            .map_err(|e| {
                anyhow::anyhow!("invalid server address {}:{}: {e}", self.host, self.port)
            })?;
        Ok(addr)
    }
}

/// Get the static files directory from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_static_dir(config: &Config) -> PathBuf {
    let dir_str = &config.server.static_dir;
    let dir = Path::new(dir_str);

    if dir.is_absolute() {
        return dir.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved = exe_dir.join(dir);
            if resolved.exists() {
                return resolved;
            }
        }
    }

    // Fallback: relative to current directory (cargo run from the workspace root)
    PathBuf::from(dir_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = default_config().unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.static_dir, "dist");
        assert!(config.dashboard.title.contains("Regional Sales"));
    }

    #[test]
    fn test_socket_addr() {
        let config = default_config().unwrap();
        let addr = config.server.socket_addr().unwrap();
        assert_eq!(addr.port(), 3000);

        let bad = ServerConfig {
            host: "not a host".into(),
            port: 80,
            static_dir: "dist".into(),
        };
        assert!(bad.socket_addr().is_err());
    }

    #[test]
    fn test_missing_section_is_rejected() {
        let server_only = "[server]\nhost = \"0.0.0.0\"\nport = 1\nstatic_dir = \"x\"";
        assert!(parse_config(server_only).is_err());
    }
}
