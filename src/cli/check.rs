//! Check command - score text against the stored profile

use super::input::{self, Input};
use anyhow::{Context, Result};
use console::style;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use voiceprint::config::load_project_config;
use voiceprint::models::Profile;
use voiceprint::reporters::{self, CheckedText, OutputFormat, RenderOptions};
use voiceprint::store::ProfileStore;

/// Arguments for the check command
#[derive(Debug, Default)]
pub struct CheckArgs {
    pub files: Vec<PathBuf>,
    pub text: Option<String>,
    pub format: Option<String>,
    pub output: Option<PathBuf>,
    pub fail_under: Option<u32>,
    pub no_emoji: bool,
}

/// Run the check command
pub fn run(dir: &Path, args: CheckArgs) -> Result<()> {
    let config = load_project_config(dir);
    let format: OutputFormat = config.format(args.format.as_deref()).parse()?;
    let options = RenderOptions {
        no_emoji: config.no_emoji(args.no_emoji),
    };
    let fail_under = config.fail_under(args.fail_under);

    let store = ProfileStore::new(dir);
    let profile = store
        .load_profile()
        .context("Failed to load the stored profile")?
        .with_context(|| {
            format!(
                "No voice profile in {}. Run `voiceprint build` first.",
                dir.display()
            )
        })?;

    let inputs = input::gather(&args.files, args.text)?;
    if inputs.is_empty() {
        anyhow::bail!("Nothing to check. Pass files, `-` for stdin, or --text.");
    }

    let checks = check_all(&inputs, &profile);
    if checks.is_empty() {
        anyhow::bail!("No words to analyze in the given input");
    }
    info!("Checked {} of {} inputs", checks.len(), inputs.len());

    let output = reporters::render_checks(&checks, format, options)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, &output)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "{} Report written to {}",
                style("✓").green(),
                style(path.display()).cyan()
            );
        }
        None => println!("{output}"),
    }

    check_fail_threshold(fail_under, &checks);
    Ok(())
}

/// Check every input in parallel, keeping input order. Wordless inputs are
/// skipped with a warning.
fn check_all(inputs: &[Input], profile: &Profile) -> Vec<CheckedText> {
    inputs
        .par_iter()
        .filter_map(|input| match voiceprint::check(&input.text, profile) {
            Some(result) => Some(CheckedText {
                source: input.source.clone(),
                result,
            }),
            None => {
                warn!("Skipping {}: no words to analyze", input.source);
                None
            }
        })
        .collect()
}

/// Lowest overall score among the checks
fn lowest_score(checks: &[CheckedText]) -> Option<u32> {
    checks.iter().map(|c| c.result.overall_score).min()
}

fn check_fail_threshold(fail_under: Option<u32>, checks: &[CheckedText]) {
    if let (Some(threshold), Some(lowest)) = (fail_under, lowest_score(checks)) {
        if lowest < threshold {
            eprintln!(
                "Failing due to --fail-under={} threshold (lowest score {})",
                threshold, lowest
            );
            std::process::exit(1);
        }
    }
}
