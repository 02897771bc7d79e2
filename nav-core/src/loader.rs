//! Graph loader for the DOT subset used by campus maps.
//!
//! # Format
//!
//! ```text
//! digraph campus {
//!     "Memorial Union" -> "Science Hall" [seconds=105.8];
//!     "Science Hall" -> "Memorial Union" [seconds=105.8];
//! }
//! ```
//!
//! Lines holding `{` or `}` frame the graph and are skipped, as are blank
//! lines and `//` or `#` comments. Every other line is one directed edge
//! whose weight is the walking time in seconds. Endpoints are created the
//! first time they appear; a repeated ordered pair keeps its first weight.
//!
//! Loading is all-or-nothing: the source is parsed into a fresh
//! [`GraphStore`] and only handed back (or swapped into the caller's graph)
//! once every line has been accepted.

use crate::error::{NavError, Result};
use crate::graph::GraphStore;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

static EDGE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^"(?P<from>[^"]+)"\s*->\s*"(?P<to>[^"]+)"\s*\[\s*seconds\s*=\s*(?P<weight>[^\]\s]+)\s*\]\s*;?$"#,
    )
    .unwrap()
});

/// Counts gathered while loading a graph source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub nodes: usize,
    pub edges: usize,
    /// Edge lines whose ordered pair had already been seen.
    pub duplicate_edges: usize,
}

/// Parse a graph source into a new graph.
pub fn parse_graph(source: &str) -> Result<GraphStore<String>> {
    parse(source).map(|(graph, _)| graph)
}

/// Replace the contents of `graph` with the graph described by `source`.
///
/// On error `graph` is left exactly as it was.
pub fn load_into(graph: &mut GraphStore<String>, source: &str) -> Result<LoadSummary> {
    let (fresh, summary) = parse(source)?;
    *graph = fresh;
    Ok(summary)
}

/// Read and parse a graph file.
pub fn load_file(path: impl AsRef<Path>) -> Result<GraphStore<String>> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)?;
    let (graph, summary) = parse(&source)?;
    tracing::debug!(
        path = %path.display(),
        nodes = summary.nodes,
        edges = summary.edges,
        "graph file loaded"
    );
    Ok(graph)
}

fn parse(source: &str) -> Result<(GraphStore<String>, LoadSummary)> {
    if source.trim().is_empty() {
        return Err(NavError::Parse {
            line: 0,
            message: "empty graph source".to_string(),
        });
    }

    let mut graph = GraphStore::new();
    let mut duplicate_edges = 0;

    for (index, raw) in source.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();
        if line.is_empty()
            || line.starts_with("//")
            || line.starts_with('#')
            || line.contains('{')
            || line.contains('}')
        {
            continue;
        }

        let caps = EDGE_LINE.captures(line).ok_or_else(|| NavError::Parse {
            line: line_no,
            message: format!(
                "expected `\"<from>\" -> \"<to>\" [seconds=<number>]`, found `{}`",
                line
            ),
        })?;
        let from = &caps["from"];
        let to = &caps["to"];
        let weight: f64 = caps["weight"].parse().map_err(|_| NavError::Parse {
            line: line_no,
            message: format!("invalid weight `{}`", &caps["weight"]),
        })?;

        for endpoint in [from, to] {
            if !graph.contains_node(endpoint) {
                graph.insert_node(endpoint.to_string())?;
            }
        }

        match graph.insert_edge(from.to_string(), to.to_string(), weight) {
            Ok(()) => {}
            Err(NavError::DuplicateEdge { .. }) => {
                duplicate_edges += 1;
                tracing::debug!(line = line_no, from, to, "duplicate edge ignored");
            }
            Err(e) => {
                return Err(NavError::Parse {
                    line: line_no,
                    message: e.to_string(),
                })
            }
        }
    }

    let summary = LoadSummary {
        nodes: graph.get_node_count(),
        edges: graph.edge_count(),
        duplicate_edges,
    };
    Ok((graph, summary))
}
