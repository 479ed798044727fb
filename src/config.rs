use crate::errors::WalkthroughResult;
use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for procure-flow
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProcureFlowConfig {
    /// Session playback settings
    pub playback: PlaybackConfig,
    /// Logging settings
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Multiplier applied to every scripted delay (0 fires phases immediately)
    pub time_scale: f64,
    /// Click through manual steps automatically
    pub autoplay: bool,
    /// Pause before each automatic click, in milliseconds (before scaling)
    pub autoplay_dwell_ms: u64,
    /// Show the guide panel under each frame
    pub show_guide: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default filter when RUST_LOG is not set
    pub log_level: String,
    /// Emit logs as JSON lines
    pub json_logs: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            autoplay: false,
            autoplay_dwell_ms: 1500,
            show_guide: true,
        }
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            json_logs: false,
        }
    }
}

impl ProcureFlowConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Default values
    /// 2. `procure-flow.toml` in the working directory
    /// 3. Environment variables (prefixed with PROCURE_FLOW_, `__` between sections)
    pub fn load() -> WalkthroughResult<Self> {
        Self::load_from(Path::new("procure-flow.toml"))
    }

    pub fn load_from(path: &Path) -> WalkthroughResult<Self> {
        let mut builder = Config::builder();

        if path.exists() {
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(
            Environment::with_prefix("PROCURE_FLOW")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_content = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    /// Load .env file if it exists. Runs before logging is set up, so the
    /// caller reports whether anything was loaded.
    pub fn load_env_file() -> Result<bool> {
        Self::load_env_file_from(".env")
    }

    pub fn load_env_file_from<P: AsRef<Path>>(path: P) -> Result<bool> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(false);
        }
        dotenvy::from_path(path)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ProcureFlowConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.playback.time_scale, 1.0);
        assert!(config.playback.show_guide);
        assert_eq!(config.observability.log_level, "warn");
    }

    #[test]
    fn test_partial_file_overrides_only_named_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("procure-flow.toml");
        std::fs::write(&path, "[playback]\ntime_scale = 0.25\nautoplay = true\n").unwrap();

        let config = ProcureFlowConfig::load_from(&path).unwrap();
        assert_eq!(config.playback.time_scale, 0.25);
        assert!(config.playback.autoplay);
        assert_eq!(config.playback.autoplay_dwell_ms, 1500);
        assert!(!config.observability.json_logs);
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("saved.toml");
        let mut config = ProcureFlowConfig::default();
        config.observability.json_logs = true;
        config.playback.autoplay_dwell_ms = 200;
        config.save_to_file(&path).unwrap();

        assert_eq!(ProcureFlowConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_malformed_file_is_a_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[playback]\ntime_scale = \"fast\"\n").unwrap();

        let err = ProcureFlowConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, crate::errors::WalkthroughError::Config(_)));
    }

    #[test]
    fn test_env_file_reports_whether_it_loaded() {
        let dir = TempDir::new().unwrap();
        assert!(!ProcureFlowConfig::load_env_file_from(dir.path().join(".env")).unwrap());

        let path = dir.path().join(".env");
        std::fs::write(&path, "PF_DOTENV_MARKER=loaded\n").unwrap();
        assert!(ProcureFlowConfig::load_env_file_from(&path).unwrap());
        assert_eq!(std::env::var("PF_DOTENV_MARKER").unwrap(), "loaded");
    }
}
