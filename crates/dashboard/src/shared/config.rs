use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub assets: AssetsConfig,
    #[serde(default)]
    pub lists: ListsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AssetsConfig {
    /// Prefix for relative image paths (evidence, welfare photos, proofs)
    pub host: String,
    pub placeholder: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ListsConfig {
    pub page_size: usize,
}

impl Default for ListsConfig {
    fn default() -> Self {
        Self { page_size: 10 }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

/// Overrides `api.base_url`
pub const API_URL_ENV: &str = "CAREHUB_API_URL";

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://localhost:5000/api"
timeout_secs = 30

[assets]
host = "http://localhost:5000"
placeholder = "/incident_placeholder.jpg"

[lists]
page_size = 10
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
///
/// `CAREHUB_API_URL` wins over both.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = read_config_file()?;
    if let Ok(url) = std::env::var(API_URL_ENV) {
        if !url.trim().is_empty() {
            tracing::info!("API base url from {}: {}", API_URL_ENV, url);
            config.api.base_url = url;
        }
    }
    Ok(config)
}

fn read_config_file() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::debug!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.lists.page_size == 0 {
        anyhow::bail!("lists.page_size must be greater than zero");
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.api.base_url, "http://localhost:5000/api");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.lists.page_size, 10);
    }

    #[test]
    fn test_optional_sections() {
        let config = parse_config(
            r#"
[api]
base_url = "https://care.example.org/api"

[assets]
host = "https://care.example.org"
placeholder = "/p.jpg"
"#,
        )
        .unwrap();
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.lists.page_size, 10);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let broken = DEFAULT_CONFIG.replace("page_size = 10", "page_size = 0");
        assert!(parse_config(&broken).is_err());
    }
}
