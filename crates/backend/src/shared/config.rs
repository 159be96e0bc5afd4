use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub seo: SeoConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
        }
    }
}

/// Брендовые строки для генератора сценариев
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ContentConfig {
    pub brand_name: String,
    pub default_region: String,
    pub default_case_study_city: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            brand_name: "Disaster Recovery".into(),
            default_region: "Australia".into(),
            default_case_study_city: "Brisbane".into(),
        }
    }
}

/// Локации, для которых sitemap перечисляет сценарии
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SeoConfig {
    #[serde(default)]
    pub locations: Vec<String>,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[content]
brand_name = "Disaster Recovery"
default_region = "Australia"
default_case_study_city = "Brisbane"

[seo]
locations = ["Brisbane", "Sydney", "Melbourne", "Gold Coast", "Perth", "Adelaide"]
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
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// Адрес для TcpListener из секции [server]
pub fn bind_address(config: &Config) -> anyhow::Result<SocketAddr> {
    let raw = format!("{}:{}", config.server.host, config.server.port);
    raw.parse()
        .map_err(|e| anyhow::anyhow!("Invalid server address '{}': {}", raw, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.content.brand_name, "Disaster Recovery");
        assert_eq!(config.content.default_case_study_city, "Brisbane");
        assert_eq!(config.seo.locations.len(), 6);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = parse_config("[seo]\nlocations = [\"Hobart\"]\n").unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.content.default_region, "Australia");
        assert_eq!(config.seo.locations, vec!["Hobart".to_string()]);

        let empty = parse_config("").unwrap();
        assert!(empty.seo.locations.is_empty());
    }

    #[test]
    fn test_bind_address() {
        let config = Config::default();
        let addr = bind_address(&config).unwrap();
        assert_eq!(addr.port(), 3000);

        let mut bad = Config::default();
        bad.server.host = "not a host".into();
        assert!(bind_address(&bad).is_err());
    }
}
