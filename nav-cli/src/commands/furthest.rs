//! Furthest command - Location that takes longest to walk to

use crate::output::{format_seconds, HtmlOutput, Output, OutputConfig, Outputter};
use anyhow::{Context, Result};
use colored::Colorize;
use nav_core::navigator::no_result_as_none;
use nav_core::ShortestPath;
use serde::Serialize;
use std::path::Path;

use super::{load_navigator, require_location};

/// Furthest destination and the route to it, or the absence of one
#[derive(Debug, Serialize)]
pub struct FurthestReport {
    pub from: String,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_seconds: Option<f64>,
    pub stops: Vec<String>,
}

impl FurthestReport {
    pub fn new(from: &str, route: Option<ShortestPath<String>>) -> Self {
        match route {
            Some(route) => Self {
                from: from.to_string(),
                found: true,
                destination: route.end().cloned(),
                total_seconds: Some(route.cost),
                stops: route.nodes,
            },
            None => Self {
                from: from.to_string(),
                found: false,
                destination: None,
                total_seconds: None,
                stops: Vec::new(),
            },
        }
    }

    fn not_found_message(&self) -> String {
        format!("No furthest destination found from {}.", self.from)
    }
}

impl Outputter for FurthestReport {
    fn to_table(&self, _config: &OutputConfig) -> String {
        let (destination, total) = match (&self.destination, self.total_seconds) {
            (Some(destination), Some(total)) if self.found => (destination, total),
            _ => {
                return format!(
                    "{} {}",
                    "NO DESTINATION:".yellow().bold(),
                    self.not_found_message()
                )
            }
        };

        let mut output = format!(
            "{} {} {} {}\n",
            "Furthest destination from".bold(),
            self.from.cyan(),
            "is".bold(),
            destination.green().bold()
        );
        output.push_str(&format!(
            "{} {} seconds\n\n",
            "Travel time:".bold(),
            format_seconds(total)
        ));
        for (i, stop) in self.stops.iter().enumerate() {
            output.push_str(&format!("  {:>3}. {}\n", i + 1, stop));
        }
        output.trim_end().to_string()
    }

    fn to_html(&self, _config: &OutputConfig) -> String {
        let destination = match &self.destination {
            Some(destination) if self.found => destination,
            _ => return HtmlOutput::paragraph(&self.not_found_message()),
        };

        let mut html = HtmlOutput::paragraph(&format!(
            "Searching furthest destination from {}...",
            self.from
        ));
        html.push_str(&HtmlOutput::paragraph(&format!(
            "Furthest destination from {} is {}.",
            self.from, destination
        )));
        html.push_str(&HtmlOutput::paragraph(&format!(
            "Locations on the path between {} and {}:",
            self.from, destination
        )));
        html.push_str(&HtmlOutput::ordered_list(&self.stops));
        html
    }
}

/// Run the furthest command
pub fn run(graph_file: &Path, from: &str, config: &OutputConfig) -> Result<()> {
    let navigator = load_navigator(graph_file)?;
    require_location(&navigator, from)?;

    // Nothing reachable is a result to show; an unknown start is not
    let route = no_result_as_none(navigator.furthest_route_from(from))
        .with_context(|| format!("Failed to find furthest destination from {}", from))?;
    Output::with_config(FurthestReport::new(from, route), config.clone()).render()
}
