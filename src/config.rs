//! Server configuration from environment variables
//!
//! | Variable            | Default  |
//! |---------------------|----------|
//! | `PLANT_SOURCE`      | `static` (`static`, `file`, `supabase`) |
//! | `PLANTS_FILE`       | required for `file` |
//! | `SUPABASE_URL`      | required for `supabase` |
//! | `SUPABASE_ANON_KEY` | required for `supabase` |
//! | `SUPABASE_TABLE`    | `plants` |
//! | `IMAGE_BASE_URL`    | `/` |
//! | `PORT`              | `3000` |

use std::path::PathBuf;

use crate::error::ConfigError;
use crate::source::{JsonFileSource, RecordSource, StaticSource, SupabaseSource};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    Static,
    File(PathBuf),
    Supabase { url: String, api_key: String, table: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub source: SourceConfig,
    pub image_base: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source: SourceConfig::Static,
            image_base: "/".to_string(),
            port: 3000,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (tests pass a map instead of the process env)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let source = match lookup("PLANT_SOURCE").as_deref().unwrap_or("static") {
            "static" => SourceConfig::Static,
            "file" => {
                let path = lookup("PLANTS_FILE").ok_or(ConfigError::Missing("PLANTS_FILE", "file"))?;
                SourceConfig::File(PathBuf::from(path))
            }
            "supabase" => SourceConfig::Supabase {
                url: lookup("SUPABASE_URL").ok_or(ConfigError::Missing("SUPABASE_URL", "supabase"))?,
                api_key: lookup("SUPABASE_ANON_KEY")
                    .ok_or(ConfigError::Missing("SUPABASE_ANON_KEY", "supabase"))?,
                table: lookup("SUPABASE_TABLE").unwrap_or_else(|| "plants".to_string()),
            },
            other => return Err(ConfigError::UnknownSource(other.to_string())),
        };

        let image_base = lookup("IMAGE_BASE_URL").unwrap_or_else(|| "/".to_string());

        let port = match lookup("PORT") {
            Some(p) => p.parse().map_err(|_| ConfigError::InvalidPort(p))?,
            None => 3000,
        };

        Ok(Self { source, image_base, port })
    }

    pub fn build_source(&self) -> Box<dyn RecordSource> {
        match &self.source {
            SourceConfig::Static => Box::new(StaticSource::builtin()),
            SourceConfig::File(path) => Box::new(JsonFileSource::new(path)),
            SourceConfig::Supabase { url, api_key, table } => {
                Box::new(SupabaseSource::new(url, api_key, table))
            }
        }
    }

    /// Log the configuration, keeping the API key out of the logs
    pub fn log(&self) {
        tracing::info!("Configuration:");
        match &self.source {
            SourceConfig::Static => tracing::info!("  PLANT_SOURCE: static"),
            SourceConfig::File(path) => {
                tracing::info!("  PLANT_SOURCE: file");
                tracing::info!("  PLANTS_FILE: {}", path.display());
            }
            SourceConfig::Supabase { url, table, .. } => {
                tracing::info!("  PLANT_SOURCE: supabase");
                tracing::info!("  SUPABASE_URL: {}", url);
                tracing::info!("  SUPABASE_TABLE: {}", table);
                tracing::info!("  SUPABASE_ANON_KEY: <redacted>");
            }
        }
        tracing::info!("  IMAGE_BASE_URL: {}", self.image_base);
        tracing::info!("  PORT: {}", self.port);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config_from(&[]).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_file_source() {
        let config = config_from(&[("PLANT_SOURCE", "file"), ("PLANTS_FILE", "data/plants.json")]).unwrap();
        assert_eq!(config.source, SourceConfig::File(PathBuf::from("data/plants.json")));
    }

    #[test]
    fn test_supabase_source_with_default_table() {
        let config = config_from(&[
            ("PLANT_SOURCE", "supabase"),
            ("SUPABASE_URL", "https://abc.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon"),
            ("IMAGE_BASE_URL", "/plantapp/"),
            ("PORT", "8080"),
        ])
        .unwrap();

        assert_eq!(
            config.source,
            SourceConfig::Supabase {
                url: "https://abc.supabase.co".to_string(),
                api_key: "anon".to_string(),
                table: "plants".to_string(),
            }
        );
        assert_eq!(config.image_base, "/plantapp/");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_missing_supabase_key() {
        let err = config_from(&[("PLANT_SOURCE", "supabase"), ("SUPABASE_URL", "https://abc.supabase.co")])
            .unwrap_err();
        assert_eq!(err, ConfigError::Missing("SUPABASE_ANON_KEY", "supabase"));
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            config_from(&[("PORT", "eighty")]).unwrap_err(),
            ConfigError::InvalidPort("eighty".to_string())
        );
        assert_eq!(
            config_from(&[("PLANT_SOURCE", "sqlite")]).unwrap_err(),
            ConfigError::UnknownSource("sqlite".to_string())
        );
    }
}
