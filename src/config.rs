//! Configuration Management
//!
//! Supplies the derivation context. Values come from, lowest precedence
//! first: built-in defaults, the config file, `SLSNAME_*` environment
//! variables, and command-line flags (applied by the binary).

use crate::context::{Context, Overrides, DEFAULT_REGION, DEFAULT_STAGE};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming the service
pub const ENV_SERVICE: &str = "SLSNAME_SERVICE";
/// Environment variable naming the stage
pub const ENV_STAGE: &str = "SLSNAME_STAGE";
/// Environment variable naming the region
pub const ENV_REGION: &str = "SLSNAME_REGION";

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Service name
    #[serde(default)]
    pub service: Option<String>,
    /// Deployment stage
    #[serde(default)]
    pub stage: Option<String>,
    /// Deployment region
    #[serde(default)]
    pub region: Option<String>,
    /// Custom names replacing the default compositions
    #[serde(flatten)]
    pub overrides: Overrides,
}

impl Config {
    /// Get the default config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("slsname").join("config.json"))
    }

    /// Load configuration from the default location.
    ///
    /// A missing or unreadable default file yields the defaults.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config file: {}", e);
                Self::default()
            }
        }
    }

    /// Load configuration from an explicit path (`.json`, `.yml` or `.yaml`)
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let parse_error = |message: String| Error::ConfigParse {
            path: path.to_path_buf(),
            message,
        };

        match path.extension().and_then(|e| e.to_str()) {
            Some("yml") | Some("yaml") => {
                serde_yaml::from_str(&content).map_err(|e| parse_error(e.to_string()))
            }
            _ => serde_json::from_str(&content).map_err(|e| parse_error(e.to_string())),
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> anyhow::Result<()> {
        let Some(path) = Self::config_path() else {
            return Ok(());
        };
        self.save_to(&path)
    }

    /// Save configuration to `path`, as YAML for `.yml`/`.yaml` and JSON otherwise
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        // Create parent directory
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = match path.extension().and_then(|e| e.to_str()) {
            Some("yml") | Some("yaml") => serde_yaml::to_string(self)?,
            _ => serde_json::to_string_pretty(self)?,
        };
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Overlay values found through `lookup` (keyed by variable name)
    pub fn merge_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(service) = lookup(ENV_SERVICE) {
            self.service = Some(service);
        }
        if let Some(stage) = lookup(ENV_STAGE) {
            self.stage = Some(stage);
        }
        if let Some(region) = lookup(ENV_REGION) {
            self.region = Some(region);
        }
        self
    }

    /// Overlay the process environment
    pub fn with_env(self) -> Self {
        self.merge_env(|key| std::env::var(key).ok())
    }

    /// Overlay command-line values; `None` keeps what file and environment gave
    pub fn merge_flags(
        mut self,
        service: Option<&str>,
        stage: Option<&str>,
        region: Option<&str>,
    ) -> Self {
        if let Some(service) = service {
            self.service = Some(service.to_string());
        }
        if let Some(stage) = stage {
            self.stage = Some(stage.to_string());
        }
        if let Some(region) = region {
            self.region = Some(region.to_string());
        }
        self
    }

    /// Get effective service (empty when none is configured)
    pub fn effective_service(&self) -> String {
        self.service.clone().unwrap_or_default()
    }

    /// Get effective stage (config > default)
    pub fn effective_stage(&self) -> String {
        self.stage
            .clone()
            .unwrap_or_else(|| DEFAULT_STAGE.to_string())
    }

    /// Get effective region (config > default)
    pub fn effective_region(&self) -> String {
        self.region
            .clone()
            .unwrap_or_else(|| DEFAULT_REGION.to_string())
    }

    /// Derivation context for the effective values
    pub fn context(&self) -> Context {
        Context::new(
            self.effective_service(),
            self.effective_stage(),
            self.effective_region(),
        )
    }

    /// Custom names replacing the default compositions
    pub fn overrides(&self) -> &Overrides {
        &self.overrides
    }
}
