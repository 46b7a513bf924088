//! Server configuration
//!
//! Sources, later ones winning: built-in defaults, an optional
//! `housing.toml` in the working directory, then `HOUSING_*` environment
//! variables (`HOUSING_BIND_ADDRESS`, `HOUSING_DATABASE_PATH`, ...).

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

pub const CONFIG_FILE: &str = "housing";
pub const ENV_PREFIX: &str = "HOUSING";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    /// SQLite file, or `:memory:`
    pub database_path: String,
    /// TrueType font for PDF exports; the bundled DejaVu Sans is used when
    /// unset. Must cover Arabic for the localized headers.
    #[serde(default)]
    pub pdf_font_path: Option<PathBuf>,
    #[serde(default)]
    pub log_format: LogFormat,
}

impl ServerConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("bind_address", "0.0.0.0:5000")?
            .set_default("database_path", "housing_system.db")?
            .set_default("log_format", "text")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn defaults_apply_without_sources() {
        let config: ServerConfig = ServerConfig::builder()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.bind_address, "0.0.0.0:5000");
        assert_eq!(config.database_path, "housing_system.db");
        assert_eq!(config.pdf_font_path, None);
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn file_values_override_defaults() {
        let toml = r#"
            bind_address = "127.0.0.1:8080"
            database_path = ":memory:"
            pdf_font_path = "/usr/share/fonts/Amiri-Regular.ttf"
            log_format = "json"
        "#;
        let config: ServerConfig = ServerConfig::builder()
            .unwrap()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.bind_address, "127.0.0.1:8080");
        assert_eq!(config.database_path, ":memory:");
        assert_eq!(
            config.pdf_font_path,
            Some(PathBuf::from("/usr/share/fonts/Amiri-Regular.ttf"))
        );
        assert_eq!(config.log_format, LogFormat::Json);
    }
}
