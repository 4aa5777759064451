use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::models::Event;
use crate::utils;

/// Replaces the artifact at `path` with a pretty-printed JSON array.
/// Non-ASCII text is written literally.
pub fn write_events(path: &Path, events: &[Event]) -> Result<()> {
    utils::ensure_parent(path)
        .with_context(|| format!("unable to create parent of {}", path.display()))?;
    let contents = serde_json::to_string_pretty(events).context("event serialization")?;
    fs::write(path, contents).with_context(|| format!("unable to write {}", path.display()))
}

pub fn read_events(path: &Path) -> Result<Vec<Event>> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("unable to read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("invalid events in {}", path.display()))
}
