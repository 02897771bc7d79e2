//! Path command - Shortest walking route between two locations

use crate::output::{format_seconds, HtmlOutput, Output, OutputConfig, Outputter, TableOutput};
use anyhow::Result;
use colored::Colorize;
use nav_core::ShortestPath;
use serde::Serialize;
use std::path::Path;

use super::{load_navigator, require_location};

/// One edge of a route
#[derive(Debug, Serialize, PartialEq)]
pub struct Leg {
    pub from: String,
    pub to: String,
    pub seconds: f64,
}

/// Route between two locations, or the absence of one
#[derive(Debug, Serialize)]
pub struct PathReport {
    pub from: String,
    pub to: String,
    pub found: bool,
    pub stops: Vec<String>,
    pub legs: Vec<Leg>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_seconds: Option<f64>,
}

impl PathReport {
    pub fn new(from: &str, to: &str, route: Option<ShortestPath<String>>) -> Self {
        match route {
            Some(route) => {
                let legs = route
                    .nodes
                    .windows(2)
                    .zip(&route.segments)
                    .map(|(pair, &seconds)| Leg {
                        from: pair[0].clone(),
                        to: pair[1].clone(),
                        seconds,
                    })
                    .collect();
                Self {
                    from: from.to_string(),
                    to: to.to_string(),
                    found: true,
                    stops: route.nodes,
                    legs,
                    total_seconds: Some(route.cost),
                }
            }
            None => Self {
                from: from.to_string(),
                to: to.to_string(),
                found: false,
                stops: Vec::new(),
                legs: Vec::new(),
                total_seconds: None,
            },
        }
    }

    fn no_path_message(&self) -> String {
        format!("No path found between {} and {}.", self.from, self.to)
    }
}

impl Outputter for PathReport {
    fn to_table(&self, config: &OutputConfig) -> String {
        let total = match self.total_seconds {
            Some(total) if self.found => total,
            _ => return format!("{} {}", "NO PATH:".yellow().bold(), self.no_path_message()),
        };

        let mut output = format!(
            "{} {} {} {}\n",
            "Shortest path from".bold(),
            self.from.cyan(),
            "to".bold(),
            self.to.cyan()
        );

        let mut elapsed = 0.0;
        let rows: Vec<Vec<String>> = self
            .stops
            .iter()
            .enumerate()
            .map(|(i, stop)| {
                // The first stop has no incoming leg
                let leg = i.checked_sub(1).and_then(|j| self.legs.get(j));
                elapsed += leg.map_or(0.0, |leg| leg.seconds);
                vec![
                    (i + 1).to_string(),
                    stop.clone(),
                    leg.map_or_else(|| "-".to_string(), |leg| format_seconds(leg.seconds)),
                    format_seconds(elapsed),
                ]
            })
            .collect();
        output.push_str(&TableOutput::from_rows(
            &["#", "Location", "Leg (s)", "Elapsed (s)"],
            &rows,
            &[0, 2, 3],
            config,
        ));
        output.push_str(&format!(
            "\n{} {} seconds",
            "Total travel time:".bold(),
            format_seconds(total)
        ));
        output
    }

    fn to_html(&self, _config: &OutputConfig) -> String {
        match self.total_seconds {
            Some(total) if self.found => {
                let mut html = HtmlOutput::paragraph(&format!(
                    "Shortest path from {} to {}:",
                    self.from, self.to
                ));
                html.push_str(&HtmlOutput::ordered_list(&self.stops));
                html.push_str(&HtmlOutput::paragraph(&format!(
                    "Total travel time: {} seconds",
                    format_seconds(total)
                )));
                html
            }
            _ => HtmlOutput::paragraph(&self.no_path_message()),
        }
    }
}

/// Run the path command
pub fn run(graph_file: &Path, from: &str, to: &str, config: &OutputConfig) -> Result<()> {
    let navigator = load_navigator(graph_file)?;
    require_location(&navigator, from)?;
    require_location(&navigator, to)?;

    let route = navigator.route(from, to)?;
    if route.is_none() {
        tracing::info!(from, to, "no path between locations");
    }
    Output::with_config(PathReport::new(from, to, route), config.clone()).render()
}
