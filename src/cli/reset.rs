//! Reset command - forget the stored profile

use anyhow::{Context, Result};
use console::style;
use std::path::Path;
use voiceprint::store::ProfileStore;

/// Run the reset command
pub fn run(dir: &Path) -> Result<()> {
    let store = ProfileStore::new(dir);
    let removed = store.reset().context("Failed to reset the profile")?;

    if removed {
        println!("{} Removed stored profile and samples", style("✓").green());
    } else {
        println!("{} No stored profile to remove", style("-").dim());
    }
    Ok(())
}
