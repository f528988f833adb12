//! Init command - write a starter voiceprint.toml

use anyhow::{Context, Result};
use console::style;
use std::path::Path;
use voiceprint::config::CONFIG_FILENAME;

const DEFAULT_CONFIG: &str = r#"# voiceprint configuration

[profile]
# Non-empty samples required by `voiceprint build`
min_samples = 2

[output]
# Default output format (text, json, markdown)
format = "text"

# Plain status markers instead of emoji
no_emoji = false

[check]
# Exit with code 1 when any checked text scores below this
# fail_under = 60
"#;

/// Run the init command
pub fn run(dir: &Path) -> Result<()> {
    let dir = dir
        .canonicalize()
        .with_context(|| format!("Path does not exist: {}", dir.display()))?;

    if !dir.is_dir() {
        anyhow::bail!("Path is not a directory: {}", dir.display());
    }

    let config_path = dir.join(CONFIG_FILENAME);
    if config_path.exists() {
        println!(
            "{} Already initialized at {}",
            style("✓").green(),
            style(config_path.display()).cyan()
        );
        return Ok(());
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to create {}", config_path.display()))?;
    println!(
        "{} Created {}",
        style("✓").green(),
        style(config_path.display()).cyan()
    );
    println!(
        "\nNext: {}",
        style("voiceprint build sample1.txt sample2.txt").bold()
    );
    Ok(())
}
