//! Command implementations for the navigator CLI
//!
//! Each command module provides a `run` function that executes the command logic.

pub mod completions;
pub mod furthest;
pub mod locations;
pub mod path;
pub mod prompt;
pub mod stats;

use anyhow::{Context, Result};
use nav_core::Navigator;
use std::path::Path;

/// Load the campus map into a fresh navigator.
pub fn load_navigator(graph_file: &Path) -> Result<Navigator> {
    let mut navigator = Navigator::new();
    navigator
        .load_graph_file(graph_file)
        .with_context(|| format!("Failed to load campus map: {}", graph_file.display()))?;
    Ok(navigator)
}

/// Fail with a readable message when a location is not on the map.
pub fn require_location(navigator: &Navigator, name: &str) -> Result<()> {
    if !navigator.has_location(name) {
        anyhow::bail!(
            "Unknown location '{}'. Run 'nav locations' to list every location.",
            name
        );
    }
    Ok(())
}
