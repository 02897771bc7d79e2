//! Directed, edge-weighted graph store.
//!
//! Nodes are identified by an opaque key and live in a [`HashtableMap`].
//! Each node owns its outgoing edges in a second, per-node map keyed by
//! successor, which gives O(1) average `contains_edge` / `get_edge` and
//! enforces "at most one edge per ordered pair".
//!
//! The store carries no algorithmic logic; shortest paths live in
//! [`crate::dijkstra`].
//!
//! # Example
//!
//! ```
//! use nav_core::GraphStore;
//!
//! let mut graph = GraphStore::new();
//! graph.insert_node("Library").unwrap();
//! graph.insert_node("Union South").unwrap();
//! graph.insert_edge("Library", "Union South", 240.0).unwrap();
//!
//! assert!(graph.contains_edge(&"Library", &"Union South"));
//! assert_eq!(graph.get_edge(&"Library", &"Union South").unwrap(), 240.0);
//! ```

use crate::error::{NavError, Result};
use crate::map::HashtableMap;
use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

/// Bucket count of a fresh node's outgoing-edge map. Grows like any map.
const EDGE_BUCKETS: usize = 8;

/// A directed edge, borrowed from the graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<'g, K> {
    pub predecessor: &'g K,
    pub successor: &'g K,
    /// Travel cost; always finite and non-negative.
    pub weight: f64,
}

/// A node and its outgoing edges.
///
/// Outgoing edges are kept in a hash map keyed by successor, so
/// [`Node::edges_leaving`] does not yield them in insertion order.
pub struct Node<K> {
    key: K,
    /// successor -> weight
    edges_leaving: HashtableMap<K, f64>,
}

impl<K> Node<K> {
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Iterate over the edges leaving this node.
    ///
    /// Order follows the per-node map's buckets and is not stable across a
    /// resize of that map.
    pub fn edges_leaving(&self) -> impl Iterator<Item = Edge<'_, K>> {
        self.edges_leaving.iter().map(move |(successor, &weight)| Edge {
            predecessor: &self.key,
            successor,
            weight,
        })
    }

    pub fn out_degree(&self) -> usize {
        self.edges_leaving.size()
    }
}

impl<K: fmt::Debug> fmt::Debug for Node<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("edges_leaving", &self.edges_leaving)
            .finish()
    }
}

/// Owner of the node set and the directed-edge relation.
pub struct GraphStore<K> {
    nodes: HashtableMap<K, Node<K>>,
    edge_count: usize,
}

impl<K> GraphStore<K>
where
    K: Hash + Eq + Clone + fmt::Debug,
{
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: HashtableMap::new(),
            edge_count: 0,
        }
    }

    /// Add a node with no edges.
    ///
    /// Fails with [`NavError::DuplicateKey`] if the key already names a node.
    pub fn insert_node(&mut self, key: K) -> Result<()> {
        if self.nodes.contains_key(&key) {
            return Err(NavError::duplicate_key(&key));
        }
        let node = Node {
            key: key.clone(),
            edges_leaving: HashtableMap::with_capacity(EDGE_BUCKETS)?,
        };
        self.nodes.put(key, node)
    }

    /// Remove a node together with every edge that starts or ends at it.
    ///
    /// Returns the removed key. Fails with [`NavError::KeyNotFound`] if no
    /// such node exists.
    pub fn remove_node<Q>(&mut self, key: &Q) -> Result<K>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        let node = self.nodes.remove(key)?;
        let mut removed = node.out_degree();

        // Incoming edges live in the other nodes' maps.
        for other in self.nodes.values_mut() {
            if other.edges_leaving.contains_key(key) {
                other.edges_leaving.remove(key)?;
                removed += 1;
            }
        }
        self.edge_count -= removed;

        tracing::debug!(node = ?node.key, edges = removed, "node removed");
        Ok(node.key)
    }

    /// Add a directed edge from `predecessor` to `successor`.
    ///
    /// Fails with [`NavError::KeyNotFound`] if either endpoint is missing,
    /// [`NavError::DuplicateEdge`] if the ordered pair already has an edge,
    /// and [`NavError::InvalidArgument`] if `weight` is negative or not
    /// finite.
    pub fn insert_edge(&mut self, predecessor: K, successor: K, weight: f64) -> Result<()> {
        if !self.nodes.contains_key(&successor) {
            return Err(NavError::key_not_found(&successor));
        }
        let node = self.nodes.get_mut(&predecessor)?;
        if node.edges_leaving.contains_key(&successor) {
            return Err(NavError::DuplicateEdge {
                from: format!("{:?}", predecessor),
                to: format!("{:?}", successor),
            });
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(NavError::invalid_argument(format!(
                "edge weight must be finite and non-negative, got {}",
                weight
            )));
        }
        node.edges_leaving.put(successor, weight)?;
        self.edge_count += 1;
        Ok(())
    }

    pub fn contains_node<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.nodes.contains_key(key)
    }

    pub fn contains_edge<Q>(&self, predecessor: &Q, successor: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        self.nodes
            .get(predecessor)
            .map(|node| node.edges_leaving.contains_key(successor))
            .unwrap_or(false)
    }

    /// Weight of the edge from `predecessor` to `successor`.
    pub fn get_edge<Q>(&self, predecessor: &Q, successor: &Q) -> Result<f64>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        let node = self.nodes.get(predecessor)?;
        node.edges_leaving
            .get(successor)
            .copied()
            .map_err(|_| NavError::KeyNotFound {
                key: format!("{:?} -> {:?}", predecessor, successor),
            })
    }

    /// Look up a node by key.
    pub fn node<Q>(&self, key: &Q) -> Result<&Node<K>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        self.nodes.get(key)
    }

    /// All node keys, in the underlying map's bucket order.
    ///
    /// The order is unspecified and may change whenever the node map
    /// resizes. Sort the result if a stable order matters.
    pub fn get_all_nodes(&self) -> Vec<K> {
        self.nodes.keys().cloned().collect()
    }

    pub fn get_node_count(&self) -> usize {
        self.nodes.size()
    }
}

impl<K> GraphStore<K> {
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over node keys without cloning them.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.nodes.keys()
    }

    /// Iterate over every edge of the graph.
    pub fn edges(&self) -> impl Iterator<Item = Edge<'_, K>> {
        self.nodes.values().flat_map(|node| node.edges_leaving())
    }

    /// Drop every node and edge.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edge_count = 0;
    }
}

impl<K> Default for GraphStore<K>
where
    K: Hash + Eq + Clone + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug> fmt::Debug for GraphStore<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphStore")
            .field("node_count", &self.nodes.size())
            .field("edge_count", &self.edge_count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_graph() -> GraphStore<&'static str> {
        // a -> b -> c, a -> c, c -> a
        let mut graph = GraphStore::new();
        for key in ["a", "b", "c", "d"] {
            graph.insert_node(key).unwrap();
        }
        graph.insert_edge("a", "b", 1.0).unwrap();
        graph.insert_edge("b", "c", 2.0).unwrap();
        graph.insert_edge("a", "c", 5.0).unwrap();
        graph.insert_edge("c", "a", 4.0).unwrap();
        graph
    }

    #[test]
    fn test_node_and_edge_count() {
        let graph = create_test_graph();
        assert_eq!(graph.get_node_count(), 4);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.edges().count(), 4);
    }

    #[test]
    fn test_duplicate_node() {
        let mut graph = create_test_graph();
        assert!(matches!(
            graph.insert_node("a"),
            Err(NavError::DuplicateKey { .. })
        ));
        assert_eq!(graph.get_node_count(), 4);
    }

    #[test]
    fn test_insert_edge_missing_endpoint() {
        let mut graph = create_test_graph();
        assert!(matches!(
            graph.insert_edge("a", "zzz", 1.0),
            Err(NavError::KeyNotFound { .. })
        ));
        assert!(matches!(
            graph.insert_edge("zzz", "a", 1.0),
            Err(NavError::KeyNotFound { .. })
        ));
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn test_duplicate_edge() {
        let mut graph = create_test_graph();
        assert!(matches!(
            graph.insert_edge("a", "b", 9.0),
            Err(NavError::DuplicateEdge { .. })
        ));
        assert_eq!(graph.get_edge(&"a", &"b").unwrap(), 1.0);

        // The reverse direction is a different edge
        graph.insert_edge("b", "a", 9.0).unwrap();
        assert_eq!(graph.get_edge(&"b", &"a").unwrap(), 9.0);
    }

    #[test]
    fn test_invalid_weight() {
        let mut graph = create_test_graph();
        for weight in [-1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                graph.insert_edge("b", "d", weight),
                Err(NavError::InvalidArgument { .. })
            ));
        }
        assert!(!graph.contains_edge(&"b", &"d"));

        // Zero is allowed
        graph.insert_edge("b", "d", 0.0).unwrap();
    }

    #[test]
    fn test_contains_and_get_edge() {
        let graph = create_test_graph();
        assert!(graph.contains_edge(&"a", &"b"));
        assert!(!graph.contains_edge(&"b", &"a"));
        assert!(!graph.contains_edge(&"nope", &"a"));
        assert!(matches!(
            graph.get_edge(&"b", &"a"),
            Err(NavError::KeyNotFound { .. })
        ));
        assert!(matches!(
            graph.get_edge(&"nope", &"a"),
            Err(NavError::KeyNotFound { .. })
        ));
    }

    #[test]
    fn test_remove_node_removes_incident_edges() {
        let mut graph = create_test_graph();
        assert_eq!(graph.remove_node(&"c").unwrap(), "c");

        assert!(!graph.contains_node(&"c"));
        assert_eq!(graph.get_node_count(), 3);
        // b -> c, a -> c and c -> a are gone; a -> b survives
        assert_eq!(graph.edge_count(), 1);
        for key in graph.get_all_nodes() {
            assert!(!graph.contains_edge(&key, &"c"));
            assert!(!graph.contains_edge(&"c", &key));
        }
        assert!(graph.contains_edge(&"a", &"b"));
    }

    #[test]
    fn test_remove_node_without_incoming_edges() {
        let mut graph = create_test_graph();
        graph.insert_edge("d", "a", 3.0).unwrap();
        assert_eq!(graph.edge_count(), 5);

        // Nothing points at d; only its own edge goes
        assert_eq!(graph.remove_node(&"d").unwrap(), "d");
        assert_eq!(graph.edge_count(), 4);
        assert!(graph.contains_edge(&"a", &"b"));
        assert!(graph.contains_edge(&"b", &"c"));
        assert!(graph.contains_edge(&"a", &"c"));
        assert!(graph.contains_edge(&"c", &"a"));
    }

    #[test]
    fn test_edges_leaving_covers_every_successor() {
        let graph = create_test_graph();
        let mut successors: Vec<&str> = graph
            .node(&"a")
            .unwrap()
            .edges_leaving()
            .map(|edge| *edge.successor)
            .collect();
        successors.sort();
        assert_eq!(successors, ["b", "c"]);
    }

    #[test]
    fn test_remove_missing_node() {
        let mut graph = create_test_graph();
        assert!(matches!(
            graph.remove_node(&"zzz"),
            Err(NavError::KeyNotFound { .. })
        ));
    }

    #[test]
    fn test_remove_then_reinsert() {
        let mut graph = create_test_graph();
        graph.remove_node(&"a").unwrap();
        graph.insert_node("a").unwrap();
        assert!(!graph.contains_edge(&"a", &"b"));
        assert!(!graph.contains_edge(&"c", &"a"));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_self_loop_removed_once() {
        let mut graph = GraphStore::new();
        graph.insert_node(1u32).unwrap();
        graph.insert_edge(1, 1, 3.0).unwrap();
        assert_eq!(graph.edge_count(), 1);
        graph.remove_node(&1).unwrap();
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_get_all_nodes() {
        let graph = create_test_graph();
        let mut nodes = graph.get_all_nodes();
        nodes.sort_unstable();
        assert_eq!(nodes, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_string_keys_with_str_lookup() {
        let mut graph: GraphStore<String> = GraphStore::new();
        graph.insert_node("Memorial Union".to_string()).unwrap();
        graph.insert_node("Science Hall".to_string()).unwrap();
        graph
            .insert_edge("Memorial Union".to_string(), "Science Hall".to_string(), 105.8)
            .unwrap();
        assert!(graph.contains_node("Memorial Union"));
        assert!(graph.contains_edge("Memorial Union", "Science Hall"));
        assert_eq!(graph.get_edge("Memorial Union", "Science Hall").unwrap(), 105.8);
    }

    #[test]
    fn test_many_edges_out_of_one_node() {
        let mut graph = GraphStore::new();
        graph.insert_node(0u32).unwrap();
        for i in 1..100u32 {
            graph.insert_node(i).unwrap();
            graph.insert_edge(0, i, f64::from(i)).unwrap();
        }
        assert_eq!(graph.node(&0).unwrap().out_degree(), 99);
        for i in 1..100u32 {
            assert_eq!(graph.get_edge(&0, &i).unwrap(), f64::from(i));
        }
    }

    #[test]
    fn test_clear() {
        let mut graph = create_test_graph();
        graph.clear();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
        assert!(!graph.contains_node(&"a"));
    }
}
