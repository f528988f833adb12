//! Measure command - raw dimensions of one text

use super::input;
use anyhow::{Context, Result};
use std::path::Path;
use voiceprint::config::load_project_config;
use voiceprint::reporters::{self, OutputFormat};

/// Run the measure command
pub fn run(dir: &Path, file: &Path, format: Option<&str>) -> Result<()> {
    let config = load_project_config(dir);
    let format: OutputFormat = config.format(format).parse()?;

    let input = input::read(file)?;
    let analysis = voiceprint::measure(&input.text)
        .with_context(|| format!("No words to analyze in {}", input.source))?;

    println!(
        "{}",
        reporters::render_analysis(&input.source, &analysis, format)?
    );
    Ok(())
}
