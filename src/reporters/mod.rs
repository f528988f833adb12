//! Output reporters for voiceprint results
//!
//! Supports multiple output formats:
//! - `text` - Terminal output with colors
//! - `json` - Machine-readable JSON
//! - `markdown` - GitHub-flavored Markdown

mod json;
mod markdown;
mod text;

use crate::models::{Analysis, ConsistencyResult, Profile};
use anyhow::{anyhow, Result};
use serde::Serialize;
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// A consistency result tagged with where its text came from
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckedText {
    /// File path, `<stdin>`, or `<text>`
    pub source: String,
    #[serde(flatten)]
    pub result: ConsistencyResult,
}

/// Rendering switches shared by all formats
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub no_emoji: bool,
}

/// Render one or more consistency results
pub fn render_checks(
    checks: &[CheckedText],
    format: OutputFormat,
    options: RenderOptions,
) -> Result<String> {
    match format {
        OutputFormat::Text => text::render_checks(checks, options),
        OutputFormat::Json => json::render(checks),
        OutputFormat::Markdown => markdown::render_checks(checks, options),
    }
}

/// Render a stored profile
pub fn render_profile(
    profile: &Profile,
    format: OutputFormat,
    options: RenderOptions,
) -> Result<String> {
    match format {
        OutputFormat::Text => text::render_profile(profile, options),
        OutputFormat::Json => json::render(profile),
        OutputFormat::Markdown => markdown::render_profile(profile, options),
    }
}

/// Render a single raw measurement
pub fn render_analysis(source: &str, analysis: &Analysis, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render_analysis(source, analysis),
        OutputFormat::Json => json::render_analysis(source, analysis),
        OutputFormat::Markdown => markdown::render_analysis(source, analysis),
    }
}

/// "Mar 14, 2026" from an RFC 3339 timestamp, "Unknown" if it does not parse
pub(crate) fn format_created(created_at: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(created_at)
        .map(|dt| dt.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|_| "Unknown".to_string())
}

pub(crate) fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}
