//! Configuration module for voiceprint
//!
//! This module handles:
//! - Workspace-level configuration (voiceprint.toml)
//! - Caller-side profile requirements
//! - CLI defaults

mod project_config;

pub use project_config::{
    load_project_config, CheckSettings, OutputSettings, ProfileSettings, ProjectConfig,
    CONFIG_FILENAME, DEFAULT_MIN_SAMPLES,
};
