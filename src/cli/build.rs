//! Build command - create a voice profile from reference samples

use super::input;
use anyhow::{Context, Result};
use console::style;
use std::path::{Path, PathBuf};
use tracing::debug;
use voiceprint::config::load_project_config;
use voiceprint::reporters::{self, OutputFormat, RenderOptions};
use voiceprint::store::ProfileStore;

/// Run the build command
pub fn run(dir: &Path, files: &[PathBuf], inline: Vec<String>) -> Result<()> {
    let config = load_project_config(dir);
    let min_samples = config.min_samples();

    let inputs = input::gather(files, inline)?;
    let samples: Vec<String> = inputs
        .into_iter()
        .filter(|input| {
            let keep = !input.text.trim().is_empty();
            if !keep {
                debug!("Ignoring empty sample {}", input.source);
            }
            keep
        })
        .map(|input| input.text)
        .collect();

    if samples.len() < min_samples {
        anyhow::bail!(
            "Need at least {} non-empty samples to build a profile (got {})",
            min_samples,
            samples.len()
        );
    }

    let profile = voiceprint::build(&samples)
        .context("None of the samples contain words to analyze")?;

    let store = ProfileStore::new(dir);
    store
        .save(&profile, &samples)
        .context("Failed to save the profile")?;

    eprintln!(
        "{} Saved profile to {}",
        style("✓").green(),
        style(store.profile_path().display()).cyan()
    );

    let options = RenderOptions {
        no_emoji: config.no_emoji(false),
    };
    println!(
        "{}",
        reporters::render_profile(&profile, OutputFormat::Text, options)?
    );
    Ok(())
}
