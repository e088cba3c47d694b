use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub frontend: FrontendConfig,
    #[serde(default)]
    pub schemas: SchemasConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FrontendConfig {
    #[serde(default = "default_dist_dir")]
    pub dist_dir: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct SchemasConfig {
    /// Refuse to start when any schema has lint errors
    #[serde(default)]
    pub strict: bool,
}

fn default_host() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    3000
}

fn default_dist_dir() -> String {
    "dist".into()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            dist_dir: default_dist_dir(),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid server.host '{}': {}", self.host, e))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[frontend]
dist_dir = "dist"

[schemas]
strict = false
"#;

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    Ok(toml::from_str(contents)?)
}

/// Load configuration from config.toml
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Some(exe_dir) = exe_dir() {
        let config_path = exe_dir.join("config.toml");
        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            return parse_config(&contents);
        }
        tracing::warn!("config.toml not found at: {}", config_path.display());
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

/// Directory with the built frontend.
/// Relative paths resolve against the executable directory.
pub fn resolve_dist_dir(config: &Config) -> PathBuf {
    resolve_relative(&config.frontend.dist_dir, exe_dir().as_deref())
}

fn resolve_relative(path: &str, base: Option<&Path>) -> PathBuf {
    let p = Path::new(path);
    if p.is_absolute() {
        return p.to_path_buf();
    }
    match base {
        Some(base) => base.join(p),
        None => PathBuf::from(path),
    }
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.frontend.dist_dir, "dist");
        assert!(!config.schemas.strict);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = parse_config("[schemas]\nstrict = true\n").unwrap();
        assert!(config.schemas.strict);
        assert_eq!(config.server, ServerConfig::default());
        assert_eq!(config.frontend, FrontendConfig::default());
    }

    #[test]
    fn test_partial_server_section() {
        let config = parse_config("[server]\nport = 8080\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(parse_config("[server\nport = 1").is_err());
        assert!(parse_config("[server]\nport = \"x\"").is_err());
    }

    #[test]
    fn test_socket_addr() {
        let server = ServerConfig {
            host: "127.0.0.1".into(),
            port: 4000,
        };
        assert_eq!(server.socket_addr().unwrap().to_string(), "127.0.0.1:4000");

        let bad = ServerConfig {
            host: "localhost:80".into(),
            port: 1,
        };
        assert!(bad.socket_addr().is_err());
    }

    #[test]
    fn test_resolve_relative() {
        let base = Path::new("/opt/app");
        assert_eq!(resolve_relative("dist", Some(base)), PathBuf::from("/opt/app/dist"));
        assert_eq!(resolve_relative("/srv/www", Some(base)), PathBuf::from("/srv/www"));
        assert_eq!(resolve_relative("dist", None), PathBuf::from("dist"));
    }
}
