use config::{Config, ConfigError, File};
use extractors::{ProfilePatternSources, TransactionPatternSources};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub cors: Option<CorsConfig>,
    pub server: Option<ServerConfig>,
    pub analysis: Option<AnalysisConfig>,
    pub logging: Option<LoggingConfig>,
    /// Field-level overrides of the French profile patterns
    pub profile_patterns: Option<ProfilePatternSources>,
    /// Field-level overrides of the French transaction patterns
    pub transaction_patterns: Option<TransactionPatternSources>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            cors: Some(CorsConfig::default()),
            server: Some(ServerConfig::default()),
            analysis: Some(AnalysisConfig::default()),
            logging: Some(LoggingConfig::default()),
            profile_patterns: None,
            transaction_patterns: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AnalysisConfig {
    /// Pasted text shorter than this (in characters, after trimming) is rejected
    pub min_input_length: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_input_length: 50,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, e.g. `info` or `extractors=debug`
    pub level: String,
    /// Also write logs to this file when set
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl ApiConfig {
    /// Load the config file, falling back to defaults when it does not exist.
    /// The file is never created or written.
    pub fn load() -> Result<(Self, PathBuf), ConfigError> {
        let config_path = get_config_path();

        if !config_path.exists() {
            return Ok((Self::default(), config_path));
        }

        let config = Self::from_file(&config_path)?;
        Ok((config, config_path))
    }

    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::from(path.to_path_buf()))
            .build()?;

        builder.try_deserialize()
    }

    pub fn min_input_length(&self) -> usize {
        self.analysis
            .as_ref()
            .map(|analysis| analysis.min_input_length)
            .unwrap_or_else(|| AnalysisConfig::default().min_input_length)
    }
}

pub fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("shopscope").join("api.toml")
    } else {
        PathBuf::from("api.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "shopscope-{}-{}.toml",
            name,
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.min_input_length(), 50);
        assert_eq!(config.server.unwrap().port, 8080);
        assert_eq!(config.logging.unwrap().level, "info");
    }

    #[test]
    fn test_partial_file() {
        let path = write_config(
            "partial",
            r#"
[server]
host = "0.0.0.0"
port = 9000

[analysis]
min_input_length = 10
"#,
        );

        let config = ApiConfig::from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let server = config.server.clone().unwrap();
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 9000);
        assert_eq!(config.min_input_length(), 10);
        assert!(config.cors.is_none());
        assert!(config.profile_patterns.is_none());
    }

    #[test]
    fn test_pattern_overrides() {
        let path = write_config(
            "patterns",
            r#"
[profile_patterns]
followers = '(\d+)\s*followers'

[[transaction_patterns.classification]]
keyword = "Sale"
kind = "sale"
"#,
        );

        let config = ApiConfig::from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let profile = config.profile_patterns.unwrap();
        assert_eq!(profile.followers, r"(\d+)\s*followers");
        assert_eq!(profile.following, ProfilePatternSources::default().following);

        let transactions = config.transaction_patterns.unwrap();
        assert_eq!(transactions.classification.len(), 1);
        assert_eq!(transactions.classification[0].keyword, "Sale");
    }
}
