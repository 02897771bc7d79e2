//! Nav Core - Graph engine behind the campus navigator.
//!
//! This crate holds everything the `nav` CLI needs to answer routing questions
//! about a campus map whose edges are walking times in seconds.
//!
//! # Features
//!
//! - **HashtableMap**: separate-chaining map that doubles at a 0.8 load factor
//! - **GraphStore**: directed weighted graph built on top of the map
//! - **ShortestPathEngine**: Dijkstra with lazy deletion and furthest-destination queries
//! - **Loader**: DOT-subset parser for campus map files
//! - **Navigator**: string-keyed façade used by front ends
//!
//! # Usage
//!
//! ```
//! use nav_core::Navigator;
//!
//! let mut nav = Navigator::new();
//! nav.load_graph_str(r#"
//! digraph campus {
//!     "Memorial Union" -> "Science Hall" [seconds=105.8];
//!     "Science Hall" -> "Union South" [seconds=520.0];
//! }
//! "#).unwrap();
//!
//! assert_eq!(
//!     nav.locations_on_shortest_path("Memorial Union", "Union South"),
//!     vec!["Memorial Union", "Science Hall", "Union South"]
//! );
//! assert_eq!(nav.furthest_destination_from("Memorial Union").unwrap(), "Union South");
//! ```

pub mod dijkstra;
pub mod error;
pub mod graph;
pub mod loader;
pub mod map;
pub mod navigator;

pub use dijkstra::{ShortestPath, ShortestPathEngine};
pub use error::{NavError, Result};
pub use graph::{Edge, GraphStore, Node};
pub use loader::LoadSummary;
pub use map::{DefaultHashBuilder, HashtableMap};
pub use navigator::Navigator;

/// Version of nav-core.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
