//!
//! The baseline promotion.
//!

use std::path::Path;

///
/// Replaces the baseline with a copy of the current results.
///
/// The copy is written next to the baseline and renamed over it, so a reader
/// never observes a partially written baseline.
///
pub fn promote(current: &Path, baseline: &Path) -> anyhow::Result<()> {
    let contents = std::fs::read(current)
        .map_err(|error| anyhow::anyhow!("Current results {current:?} reading: {error}"))?;

    let mut staging = baseline.as_os_str().to_owned();
    staging.push(".tmp");
    let staging = Path::new(staging.as_os_str());

    if let Some(parent) = baseline.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|error| anyhow::anyhow!("Baseline directory {parent:?} creating: {error}"))?;
    }
    std::fs::write(staging, contents)
        .map_err(|error| anyhow::anyhow!("Baseline staging file {staging:?} writing: {error}"))?;
    std::fs::rename(staging, baseline)
        .map_err(|error| anyhow::anyhow!("Baseline {baseline:?} replacing: {error}"))?;
    Ok(())
}
