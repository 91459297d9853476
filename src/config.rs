use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::core::RecommendOptions;
use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    File,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    #[serde(default = "default_backend")]
    pub backend: StorageBackend,
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            data_dir: default_data_dir(),
        }
    }
}

fn default_backend() -> StorageBackend { StorageBackend::File }
fn default_data_dir() -> String { "data".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_threshold")]
    pub threshold: u8,
    #[serde(default = "default_fallback_size")]
    pub fallback_size: usize,
    #[serde(default = "default_placeholder_score")]
    pub placeholder_score: u8,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            fallback_size: default_fallback_size(),
            placeholder_score: default_placeholder_score(),
        }
    }
}

fn default_threshold() -> u8 { 50 }
fn default_fallback_size() -> usize { 6 }
fn default_placeholder_score() -> u8 { 75 }

impl From<&MatchingSettings> for RecommendOptions {
    fn from(settings: &MatchingSettings) -> Self {
        RecommendOptions {
            threshold: settings.threshold.min(100),
            fallback_size: settings.fallback_size,
            placeholder_score: settings.placeholder_score.min(100),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_location_weight")]
    pub location: f64,
    #[serde(default = "default_budget_weight")]
    pub budget: f64,
    #[serde(default = "default_lifestyle_weight")]
    pub lifestyle: f64,
    #[serde(default = "default_budget_stretch")]
    pub budget_stretch: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            location: default_location_weight(),
            budget: default_budget_weight(),
            lifestyle: default_lifestyle_weight(),
            budget_stretch: default_budget_stretch(),
        }
    }
}

fn default_location_weight() -> f64 { 30.0 }
fn default_budget_weight() -> f64 { 30.0 }
fn default_lifestyle_weight() -> f64 { 40.0 }
fn default_budget_stretch() -> f64 { 0.8 }

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        ScoringWeights {
            location: config.location.max(0.0),
            budget: config.budget.max(0.0),
            lifestyle: config.lifestyle.max(0.0),
            budget_stretch: config.budget_stretch.clamp(0.0, 1.0),
        }
    }
}

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per event
    Json,
    /// Multi-line, human readable
    Pretty,
    /// Single-line text
    Compact,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            other => Err(format!("unknown log format: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: LogFormat,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingSettings {
    /// Apply `LOG_LEVEL` / `LOG_FORMAT` style overrides on top of the
    /// configured values. Empty or unknown values keep the configured one.
    pub fn with_overrides(&self, level: Option<String>, format: Option<String>) -> Self {
        let level = level
            .filter(|l| !l.trim().is_empty())
            .unwrap_or_else(|| self.level.clone());
        let format = format
            .and_then(|f| f.parse().ok())
            .unwrap_or(self.format);

        Self { level, format }
    }

    /// Settings with the process environment applied
    pub fn with_env_overrides(&self) -> Self {
        self.with_overrides(std::env::var("LOG_LEVEL").ok(), std::env::var("LOG_FORMAT").ok())
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> LogFormat { LogFormat::Json }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with ROOMMATE_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., ROOMMATE__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("ROOMMATE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("ROOMMATE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.scoring.weights)
    }

    pub fn recommend_options(&self) -> RecommendOptions {
        RecommendOptions::from(&self.matching)
    }
}

/// Apply conventional unprefixed environment overrides
///
/// `DATA_DIR` wins over `storage.data_dir` from files and prefixed variables.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    let mut builder = Config::builder().add_source(settings);

    if let Ok(data_dir) = std::env::var("DATA_DIR") {
        builder = builder.set_override("storage.data_dir", data_dir)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.location, 30.0);
        assert_eq!(weights.budget, 30.0);
        assert_eq!(weights.lifestyle, 40.0);
        assert_eq!(weights.budget_stretch, 0.8);
        assert_eq!(ScoringWeights::from(&weights), ScoringWeights::default());
    }

    #[test]
    fn test_default_matching() {
        let options = RecommendOptions::from(&MatchingSettings::default());
        assert_eq!(options, RecommendOptions::default());
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, LogFormat::Json);
    }

    #[test]
    fn test_logging_env_overrides_configured_values() {
        let configured = LoggingSettings {
            level: "warn".to_string(),
            format: LogFormat::Compact,
        };

        let unset = configured.with_overrides(None, None);
        assert_eq!(unset.level, "warn");
        assert_eq!(unset.format, LogFormat::Compact);

        let overridden = configured.with_overrides(Some("debug".to_string()), Some("Pretty".to_string()));
        assert_eq!(overridden.level, "debug");
        assert_eq!(overridden.format, LogFormat::Pretty);

        let ignored = configured.with_overrides(Some(" ".to_string()), Some("xml".to_string()));
        assert_eq!(ignored.level, "warn");
        assert_eq!(ignored.format, LogFormat::Compact);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().expect("create temp dir");
        let path = dir.path().join("settings.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[server]\nhost = \"127.0.0.1\"\nport = 9090\n\n[storage]\nbackend = \"memory\"\n\n[matching]\nthreshold = 60\n\n[logging]\nlevel = \"debug\"\nformat = \"pretty\""
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();

        assert_eq!(settings.server.port, 9090);
        assert_eq!(settings.storage.backend, StorageBackend::Memory);
        assert_eq!(settings.storage.data_dir, "data");
        assert_eq!(settings.recommend_options().threshold, 60);
        assert_eq!(settings.recommend_options().fallback_size, 6);
        assert_eq!(settings.scoring_weights(), ScoringWeights::default());
        assert_eq!(settings.logging.level, "debug");
        assert_eq!(settings.logging.format, LogFormat::Pretty);
    }
}
