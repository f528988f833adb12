//! Profile command - show the stored voice profile

use anyhow::{Context, Result};
use std::path::Path;
use voiceprint::config::load_project_config;
use voiceprint::reporters::{self, OutputFormat, RenderOptions};
use voiceprint::store::ProfileStore;

/// Run the profile command
pub fn run(dir: &Path, format: Option<&str>) -> Result<()> {
    let config = load_project_config(dir);
    let format: OutputFormat = config.format(format).parse()?;
    let options = RenderOptions {
        no_emoji: config.no_emoji(false),
    };

    let profile = ProfileStore::new(dir)
        .load_profile()
        .context("Failed to load the stored profile")?
        .with_context(|| {
            format!(
                "No voice profile in {}. Run `voiceprint build` first.",
                dir.display()
            )
        })?;

    println!("{}", reporters::render_profile(&profile, format, options)?);
    Ok(())
}
