//! Locations command - List every location on the campus map

use crate::output::{HtmlOutput, Output, OutputConfig, Outputter, TableOutput};
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::path::Path;

use super::load_navigator;

/// Sorted location names
#[derive(Debug, Serialize)]
pub struct LocationList {
    pub count: usize,
    pub locations: Vec<String>,
}

impl LocationList {
    pub fn new(locations: Vec<String>) -> Self {
        Self {
            count: locations.len(),
            locations,
        }
    }
}

impl Outputter for LocationList {
    fn to_table(&self, config: &OutputConfig) -> String {
        let rows: Vec<Vec<String>> = self
            .locations
            .iter()
            .enumerate()
            .map(|(i, name)| vec![(i + 1).to_string(), name.clone()])
            .collect();
        let mut output = TableOutput::from_rows(&["#", "Location"], &rows, &[0], config);
        output.push_str(&format!("\n{} {}", self.count.to_string().bold(), "locations"));
        output
    }

    fn to_html(&self, _config: &OutputConfig) -> String {
        HtmlOutput::ordered_list(&self.locations)
    }
}

/// Run the locations command
pub fn run(graph_file: &Path, config: &OutputConfig) -> Result<()> {
    let navigator = load_navigator(graph_file)?;
    let list = LocationList::new(navigator.locations());
    Output::with_config(list, config.clone()).render()
}
