//! Error types for nav-core.

use thiserror::Error;

/// Result type alias for nav-core operations.
pub type Result<T> = std::result::Result<T, NavError>;

/// Errors raised by the map, the graph store, the shortest-path engine and
/// the loader.
///
/// Keys are carried pre-rendered (`{:?}`) so the error stays independent of
/// the key type a graph is instantiated with.
#[derive(Error, Debug)]
pub enum NavError {
    /// Malformed argument (zero capacity, negative or non-finite weight).
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong with the argument.
        message: String,
    },

    /// Insert into an already occupied key.
    #[error("Duplicate key: {key}")]
    DuplicateKey {
        /// The offending key.
        key: String,
    },

    /// Insert of an edge whose ordered pair already has one.
    #[error("Duplicate edge: {from} -> {to}")]
    DuplicateEdge {
        /// Predecessor of the edge.
        from: String,
        /// Successor of the edge.
        to: String,
    },

    /// Lookup or removal of an absent key or edge.
    #[error("Key not found: {key}")]
    KeyNotFound {
        /// The key that was looked up.
        key: String,
    },

    /// Shortest-path endpoint that is not a node of the graph.
    #[error("Node not found: {key}")]
    NodeNotFound {
        /// The missing endpoint.
        key: String,
    },

    /// Both endpoints exist but no directed route connects them.
    #[error("No path from {from} to {to}")]
    PathNotFound {
        /// Start of the query.
        from: String,
        /// Destination of the query.
        to: String,
    },

    /// Furthest-destination query where the start reaches nothing.
    #[error("No destination reachable from {from}")]
    NoReachableDestination {
        /// Start of the query.
        from: String,
    },

    /// Graph source that does not follow the expected format.
    #[error("Parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number, 0 when the error concerns the whole source.
        line: usize,
        /// Description of the problem.
        message: String,
    },

    /// IO error reading a graph file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl NavError {
    pub(crate) fn duplicate_key(key: &impl std::fmt::Debug) -> Self {
        NavError::DuplicateKey {
            key: format!("{:?}", key),
        }
    }

    pub(crate) fn key_not_found(key: &impl std::fmt::Debug) -> Self {
        NavError::KeyNotFound {
            key: format!("{:?}", key),
        }
    }

    pub(crate) fn node_not_found(key: &impl std::fmt::Debug) -> Self {
        NavError::NodeNotFound {
            key: format!("{:?}", key),
        }
    }

    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        NavError::InvalidArgument {
            message: message.into(),
        }
    }

    /// True for the failures a query façade reports as "no result" rather
    /// than as a hard error.
    pub fn is_no_result(&self) -> bool {
        matches!(
            self,
            NavError::PathNotFound { .. } | NavError::NoReachableDestination { .. }
        )
    }
}
