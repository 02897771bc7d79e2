//! Query façade over a campus graph keyed by location name.
//!
//! `Navigator` is what front ends talk to. It owns the graph, reloads it from
//! DOT sources, and turns "no route" failures into empty results where a
//! caller only wants something to display.

use crate::dijkstra::ShortestPath;
use crate::error::Result;
use crate::graph::GraphStore;
use crate::loader::{self, LoadSummary};
use std::path::Path;

/// Location-name graph plus the queries a campus map needs.
#[derive(Debug, Default)]
pub struct Navigator {
    graph: GraphStore<String>,
}

impl Navigator {
    /// Create a navigator with an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already built graph.
    pub fn from_graph(graph: GraphStore<String>) -> Self {
        Self { graph }
    }

    /// Replace the current graph with the contents of a DOT file.
    ///
    /// The current graph survives if the file cannot be read or parsed.
    pub fn load_graph_file(&mut self, path: impl AsRef<Path>) -> Result<LoadSummary> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let summary = loader::load_into(&mut self.graph, &source)?;
        tracing::info!(
            path = %path.display(),
            nodes = summary.nodes,
            edges = summary.edges,
            "campus graph loaded"
        );
        Ok(summary)
    }

    /// Replace the current graph with the graph described by `source`.
    pub fn load_graph_str(&mut self, source: &str) -> Result<LoadSummary> {
        loader::load_into(&mut self.graph, source)
    }

    /// Read-only access to the underlying graph.
    pub fn graph(&self) -> &GraphStore<String> {
        &self.graph
    }

    /// Every location name, sorted.
    pub fn locations(&self) -> Vec<String> {
        let mut locations = self.graph.get_all_nodes();
        locations.sort();
        locations
    }

    /// Stops along the shortest path, or an empty list when there is none
    /// (unknown endpoints included).
    pub fn locations_on_shortest_path(&self, start: &str, end: &str) -> Vec<String> {
        self.graph
            .shortest_paths()
            .shortest_path_data(start, end)
            .unwrap_or_default()
    }

    /// Walking time of each leg of the shortest path, or an empty list when
    /// there is none.
    pub fn times_on_shortest_path(&self, start: &str, end: &str) -> Vec<f64> {
        self.graph
            .shortest_paths()
            .shortest_path_times(start, end)
            .unwrap_or_default()
    }

    /// The full route from `start` to `end`.
    ///
    /// `Ok(None)` when both locations exist but are not connected; unknown
    /// locations stay an error.
    pub fn route(&self, start: &str, end: &str) -> Result<Option<ShortestPath<String>>> {
        match self.graph.shortest_paths().shortest_path(start, end) {
            Ok(path) => Ok(Some(path)),
            Err(e) if e.is_no_result() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// The location that takes longest to reach from `start`.
    pub fn furthest_destination_from(&self, start: &str) -> Result<String> {
        self.graph.shortest_paths().furthest_destination_from(start)
    }

    /// The furthest destination from `start` with the route to it.
    pub fn furthest_route_from(&self, start: &str) -> Result<ShortestPath<String>> {
        let engine = self.graph.shortest_paths();
        let (destination, _) = engine.furthest_destination_with_cost(start)?;
        engine.shortest_path(start, destination.as_str())
    }

    /// Check whether a location exists.
    pub fn has_location(&self, name: &str) -> bool {
        self.graph.contains_node(name)
    }
}

impl From<GraphStore<String>> for Navigator {
    fn from(graph: GraphStore<String>) -> Self {
        Self::from_graph(graph)
    }
}

/// Treat "no route" failures as absent results, keep everything else.
pub fn no_result_as_none<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_no_result() => Ok(None),
        Err(e) => Err(e),
    }
}
