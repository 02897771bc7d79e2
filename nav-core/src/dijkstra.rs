//! Shortest paths over a [`GraphStore`] with Dijkstra's algorithm.
//!
//! The search keeps a binary min-heap of `SearchNode`s ordered by
//! cumulative cost and never updates entries in place. A node can sit in the
//! heap several times; only its cheapest entry is settled, and later entries
//! are discarded when popped because the node is already in the finalized
//! set (lazy deletion).
//!
//! Each `SearchNode` points at the record it was reached from, so the
//! settled destination's chain spells the path back to the start. The chain
//! lives only as long as the query.
//!
//! Edge weights are non-negative (enforced by
//! [`GraphStore::insert_edge`]), which is what makes the first settled
//! entry of a node optimal.

use crate::error::{NavError, Result};
use crate::graph::GraphStore;
use crate::map::HashtableMap;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

/// One candidate path during a query: its last node, its total cost and the
/// record it extends (`None` only for the origin).
struct SearchNode<'g, K> {
    node: &'g K,
    cost: f64,
    predecessor: Option<Rc<SearchNode<'g, K>>>,
}

/// Heap entry ordered so that `BinaryHeap` pops the lowest cost first.
struct QueueEntry<'g, K>(Rc<SearchNode<'g, K>>);

impl<K> PartialEq for QueueEntry<'_, K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K> Eq for QueueEntry<'_, K> {}

impl<K> PartialOrd for QueueEntry<'_, K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K> Ord for QueueEntry<'_, K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behavior
        other.0.cost.total_cmp(&self.0.cost)
    }
}

/// A resolved shortest path.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath<K> {
    /// Keys from start to end, both included.
    pub nodes: Vec<K>,
    /// Weight of each consecutive edge; one shorter than `nodes`.
    pub segments: Vec<f64>,
    /// Total cost of the path.
    pub cost: f64,
}

impl<K> ShortestPath<K> {
    pub fn start(&self) -> Option<&K> {
        self.nodes.first()
    }

    pub fn end(&self) -> Option<&K> {
        self.nodes.last()
    }

    /// Number of edges along the path.
    pub fn hops(&self) -> usize {
        self.segments.len()
    }
}

/// Read-only shortest-path queries over a graph.
///
/// Holds no state between queries; every call allocates its own heap and
/// finalized set.
///
/// # Example
///
/// ```
/// use nav_core::{GraphStore, ShortestPathEngine};
///
/// let mut graph = GraphStore::new();
/// for key in ["A", "B", "C"] {
///     graph.insert_node(key).unwrap();
/// }
/// graph.insert_edge("A", "B", 1.0).unwrap();
/// graph.insert_edge("B", "C", 2.0).unwrap();
/// graph.insert_edge("A", "C", 5.0).unwrap();
///
/// let engine = ShortestPathEngine::new(&graph);
/// assert_eq!(engine.shortest_path_data(&"A", &"C").unwrap(), vec!["A", "B", "C"]);
/// assert_eq!(engine.shortest_path_cost(&"A", &"C").unwrap(), 3.0);
/// ```
pub struct ShortestPathEngine<'g, K> {
    graph: &'g GraphStore<K>,
}

impl<'g, K> ShortestPathEngine<'g, K>
where
    K: Hash + Eq + Clone + fmt::Debug,
{
    pub fn new(graph: &'g GraphStore<K>) -> Self {
        Self { graph }
    }

    /// Cost of the cheapest path from `start` to `end`.
    ///
    /// Fails with [`NavError::NodeNotFound`] if either endpoint is absent and
    /// [`NavError::PathNotFound`] if `end` is unreachable.
    pub fn shortest_path_cost<Q>(&self, start: &Q, end: &Q) -> Result<f64>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        Ok(self.compute_shortest_path(start, end)?.cost)
    }

    /// Keys along the cheapest path from `start` to `end`, in travel order.
    pub fn shortest_path_data<Q>(&self, start: &Q, end: &Q) -> Result<Vec<K>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        let tail = self.compute_shortest_path(start, end)?;
        Ok(path_keys(&tail))
    }

    /// Keys, segment weights and total cost of the cheapest path, from a
    /// single search.
    pub fn shortest_path<Q>(&self, start: &Q, end: &Q) -> Result<ShortestPath<K>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        let tail = self.compute_shortest_path(start, end)?;
        let nodes = path_keys(&tail);
        let segments = nodes
            .windows(2)
            .map(|pair| self.graph.get_edge::<K>(&pair[0], &pair[1]))
            .collect::<Result<Vec<f64>>>()?;

        Ok(ShortestPath {
            nodes,
            segments,
            cost: tail.cost,
        })
    }

    /// Travel cost of each edge along the cheapest path from `start` to
    /// `end`. Empty when `start == end`.
    pub fn shortest_path_times<Q>(&self, start: &Q, end: &Q) -> Result<Vec<f64>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        Ok(self.shortest_path(start, end)?.segments)
    }

    /// The node whose cheapest path from `start` is the most expensive.
    ///
    /// Fails with [`NavError::NodeNotFound`] if `start` is absent and with
    /// [`NavError::NoReachableDestination`] if no other node can be reached
    /// (including the single-node graph).
    pub fn furthest_destination_from<Q>(&self, start: &Q) -> Result<K>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        self.furthest_destination_with_cost(start)
            .map(|(destination, _)| destination)
    }

    /// Like [`Self::furthest_destination_from`], also returning the cost.
    ///
    /// Candidates are visited in node-map order; a later candidate replaces
    /// the current best only with a strictly greater cost, so the first one
    /// seen wins a tie.
    pub fn furthest_destination_with_cost<Q>(&self, start: &Q) -> Result<(K, f64)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        let origin = self
            .graph
            .node(start)
            .map_err(|_| NavError::node_not_found(&start))?
            .key();

        if self.graph.get_node_count() < 2 {
            return Err(NavError::NoReachableDestination {
                from: format!("{:?}", start),
            });
        }

        let mut furthest: Option<(&K, f64)> = None;
        for candidate in self.graph.keys() {
            if candidate == origin {
                continue;
            }
            match self.shortest_path_cost::<K>(origin, candidate) {
                Ok(cost) => {
                    if furthest.map_or(true, |(_, best)| cost > best) {
                        furthest = Some((candidate, cost));
                    }
                }
                Err(NavError::PathNotFound { .. }) => continue,
                Err(e) => return Err(e),
            }
        }

        furthest
            .map(|(destination, cost)| (destination.clone(), cost))
            .ok_or_else(|| NavError::NoReachableDestination {
                from: format!("{:?}", start),
            })
    }

    /// Run the search and return the settled record of `end`.
    fn compute_shortest_path<Q>(&self, start: &Q, end: &Q) -> Result<Rc<SearchNode<'g, K>>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        let graph: &'g GraphStore<K> = self.graph;
        let origin = graph
            .node(start)
            .map_err(|_| NavError::node_not_found(&start))?;
        let target = graph
            .node(end)
            .map_err(|_| NavError::node_not_found(&end))?
            .key();

        let mut queue = BinaryHeap::new();
        let mut finalized: HashtableMap<&'g K, ()> = HashtableMap::new();

        queue.push(QueueEntry(Rc::new(SearchNode {
            node: origin.key(),
            cost: 0.0,
            predecessor: None,
        })));

        while let Some(QueueEntry(current)) = queue.pop() {
            if finalized.contains_key(current.node) {
                // Stale entry: a cheaper one already settled this node
                continue;
            }
            finalized.put(current.node, ())?;

            if current.node == target {
                tracing::debug!(
                    from = ?start,
                    to = ?end,
                    cost = current.cost,
                    settled = finalized.size(),
                    "shortest path found"
                );
                return Ok(current);
            }

            for edge in graph.node::<K>(current.node)?.edges_leaving() {
                if finalized.contains_key(edge.successor) {
                    continue;
                }
                tracing::trace!(from = ?current.node, to = ?edge.successor, "relax");
                queue.push(QueueEntry(Rc::new(SearchNode {
                    node: edge.successor,
                    cost: current.cost + edge.weight,
                    predecessor: Some(Rc::clone(&current)),
                })));
            }
        }

        tracing::debug!(from = ?start, to = ?end, settled = finalized.size(), "no path");
        Err(NavError::PathNotFound {
            from: format!("{:?}", start),
            to: format!("{:?}", end),
        })
    }
}

impl<K> GraphStore<K>
where
    K: Hash + Eq + Clone + fmt::Debug,
{
    /// Shortest-path queries over this graph.
    pub fn shortest_paths(&self) -> ShortestPathEngine<'_, K> {
        ShortestPathEngine::new(self)
    }
}

/// Walk the predecessor chain back to the origin, then flip it into
/// start-to-end order.
fn path_keys<K: Clone>(tail: &SearchNode<'_, K>) -> Vec<K> {
    let mut keys = Vec::new();
    let mut current = Some(tail);
    while let Some(record) = current {
        keys.push(record.node.clone());
        current = record.predecessor.as_deref();
    }
    keys.reverse();
    keys
}
