//! Workspace-level configuration support
//!
//! Loads configuration from `voiceprint.toml` or `.voiceprintrc.json` in the
//! workspace directory.
//!
//! # Configuration Format
//!
//! ```toml
//! # voiceprint.toml
//!
//! [profile]
//! min_samples = 2
//!
//! [output]
//! format = "text"
//! no_emoji = false
//!
//! [check]
//! fail_under = 60
//! ```

use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

pub const CONFIG_FILENAME: &str = "voiceprint.toml";
const JSON_CONFIG_FILENAME: &str = ".voiceprintrc.json";

/// Non-empty samples the CLI asks for before building a profile
pub const DEFAULT_MIN_SAMPLES: usize = 2;

/// Workspace configuration loaded from voiceprint.toml or similar
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProjectConfig {
    /// Profile building requirements
    #[serde(default)]
    pub profile: ProfileSettings,

    /// Default output flags
    #[serde(default)]
    pub output: OutputSettings,

    /// Defaults for the check command
    #[serde(default)]
    pub check: CheckSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileSettings {
    /// Minimum non-empty samples accepted by `build` (default: 2)
    #[serde(default = "default_min_samples")]
    pub min_samples: usize,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            min_samples: default_min_samples(),
        }
    }
}

fn default_min_samples() -> usize {
    DEFAULT_MIN_SAMPLES
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct OutputSettings {
    /// Default output format (text, json, markdown)
    #[serde(default)]
    pub format: Option<String>,

    /// Disable emoji by default
    #[serde(default)]
    pub no_emoji: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct CheckSettings {
    /// Exit non-zero when any overall score falls below this
    #[serde(default)]
    pub fail_under: Option<u32>,
}

impl ProjectConfig {
    /// Effective minimum sample count, never below 1
    pub fn min_samples(&self) -> usize {
        self.profile.min_samples.max(1)
    }

    /// Output format: explicit flag > config > "text"
    pub fn format<'a>(&'a self, flag: Option<&'a str>) -> &'a str {
        flag.or(self.output.format.as_deref()).unwrap_or("text")
    }

    /// Emoji suppression: set by either the flag or the config
    pub fn no_emoji(&self, flag: bool) -> bool {
        flag || self.output.no_emoji.unwrap_or(false)
    }

    /// Failure threshold: explicit flag > config
    pub fn fail_under(&self, flag: Option<u32>) -> Option<u32> {
        flag.or(self.check.fail_under)
    }
}

/// Load workspace configuration.
///
/// Searches for configuration files in this order:
/// 1. `voiceprint.toml`
/// 2. `.voiceprintrc.json`
///
/// Returns default configuration if no config file is found or the file
/// cannot be parsed.
pub fn load_project_config(workspace: &Path) -> ProjectConfig {
    let toml_path = workspace.join(CONFIG_FILENAME);
    if toml_path.exists() {
        match load_toml_config(&toml_path) {
            Ok(config) => {
                debug!("Loaded config from {}", toml_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", toml_path.display(), e);
            }
        }
    }

    let json_path = workspace.join(JSON_CONFIG_FILENAME);
    if json_path.exists() {
        match load_json_config(&json_path) {
            Ok(config) => {
                debug!("Loaded config from {}", json_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", json_path.display(), e);
            }
        }
    }

    debug!("No config found, using defaults");
    ProjectConfig::default()
}

fn load_toml_config(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ProjectConfig = toml::from_str(&content)?;
    Ok(config)
}

fn load_json_config(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ProjectConfig = serde_json::from_str(&content)?;
    Ok(config)
}
