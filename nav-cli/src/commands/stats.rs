//! Stats command - Size and shape of the loaded campus map

use crate::output::{Output, OutputConfig, Outputter, TableOutput};
use anyhow::Result;
use nav_core::GraphStore;
use serde::Serialize;
use std::path::Path;

use super::load_navigator;

/// Summary numbers for a campus map
#[derive(Debug, Serialize)]
pub struct GraphStats {
    pub source: String,
    pub locations: usize,
    pub edges: usize,
    /// Locations with no outgoing edge
    pub dead_ends: usize,
    /// Location with the most outgoing edges (first in name order on ties)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busiest: Option<String>,
    pub max_out_degree: usize,
}

impl GraphStats {
    pub fn collect(source: &Path, graph: &GraphStore<String>) -> Result<Self> {
        let mut names: Vec<&String> = graph.keys().collect();
        names.sort();

        let mut dead_ends = 0;
        let mut busiest: Option<(&String, usize)> = None;
        for name in names {
            let degree = graph.node(name.as_str())?.out_degree();
            if degree == 0 {
                dead_ends += 1;
            }
            if busiest.map_or(true, |(_, best)| degree > best) {
                busiest = Some((name, degree));
            }
        }

        Ok(Self {
            source: source.display().to_string(),
            locations: graph.get_node_count(),
            edges: graph.edge_count(),
            dead_ends,
            busiest: busiest.map(|(name, _)| name.clone()),
            max_out_degree: busiest.map_or(0, |(_, degree)| degree),
        })
    }
}

impl Outputter for GraphStats {
    fn to_table(&self, config: &OutputConfig) -> String {
        let pairs = vec![
            ("Source", self.source.clone()),
            ("Locations", self.locations.to_string()),
            ("Edges", self.edges.to_string()),
            ("Dead ends", self.dead_ends.to_string()),
            (
                "Busiest",
                match &self.busiest {
                    Some(name) => format!("{} ({} outgoing)", name, self.max_out_degree),
                    None => "-".to_string(),
                },
            ),
        ];
        TableOutput::format_key_value(&pairs, config)
    }
}

/// Run the stats command
pub fn run(graph_file: &Path, config: &OutputConfig) -> Result<()> {
    let navigator = load_navigator(graph_file)?;
    let stats = GraphStats::collect(graph_file, navigator.graph())?;
    Output::with_config(stats, config.clone()).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use nav_core::loader::parse_graph;

    #[test]
    fn test_collect() {
        let graph = parse_graph(
            "\"A\" -> \"B\" [seconds=1];\n\"A\" -> \"C\" [seconds=2];\n\"B\" -> \"C\" [seconds=3];\n",
        )
        .unwrap();
        let stats = GraphStats::collect(Path::new("campus.dot"), &graph).unwrap();

        assert_eq!(stats.locations, 3);
        assert_eq!(stats.edges, 3);
        assert_eq!(stats.dead_ends, 1);
        assert_eq!(stats.busiest.as_deref(), Some("A"));
        assert_eq!(stats.max_out_degree, 2);
    }

    #[test]
    fn test_empty_graph() {
        let graph = GraphStore::new();
        let stats = GraphStats::collect(Path::new("empty.dot"), &graph).unwrap();
        assert_eq!(stats.locations, 0);
        assert!(stats.busiest.is_none());

        let output = stats.to_table(
            &OutputConfig::new(OutputFormat::Table).without_truncation(),
        );
        assert!(output.contains("empty.dot"));
    }
}
