//! Randomized minimum cut by supervertex contraction.
//!
//! This module provides:
//! - Supervertices: merged groups of vertices with their outgoing edge multiset
//! - Karger's contraction algorithm over many independent trials
//! - Adjacency-list text input
//!
//! # Examples
//!
//! ```rust
//! use algos_mincut::cs::graph::{Graph, MinCutConfig};
//!
//! let graph = Graph::from_rows(&[
//!     vec![1, 3],
//!     vec![2, 3],
//!     vec![3, 1, 2, 4, 5],
//!     vec![4, 3, 5],
//!     vec![5, 3, 4],
//! ])
//! .unwrap();
//!
//! let cut = graph
//!     .find_min_cut_with(&MinCutConfig::new().with_seed(42))
//!     .unwrap();
//! assert_eq!(cut.cut_size, 1);
//! ```

pub mod adjacency;
pub mod config;
pub mod karger;
pub mod supervertex;

pub use adjacency::{parse_adjacency_list, read_adjacency_list, AdjacencyList};
pub use config::MinCutConfig;
pub use karger::{karger_min_cut, Graph, MinCut};
pub use supervertex::Supervertex;
