//! Minimum spanning tree weight of an undirected, weighted graph using Prim's algorithm in its
//! naive form. Generic over the integer type of the edge weights.
//!
//! Prim's algorithm grows a tree from a source vertex one edge at a time. Each step looks at
//! every edge with one end inside the tree and the other outside it, and brings in the vertex
//! at the far end of the lightest of them. This implementation rescans the full edge list on
//! every step instead of keeping a priority queue, giving O(V·E) time. Because the scan always
//! runs in the order the edges were added, ties between equally light edges are broken the same
//! way on every run: the edge added first wins.
//!
//! A graph that is not connected has no spanning tree. Once the tree can't grow any further
//! the computation stops with [`MstError::DisconnectedGraph`] rather than looping. A total that
//! doesn't fit in the weight type stops it with [`MstError::WeightOverflow`].
//!
//! # Examples
//! ```
//!use prim_mst::{compute_mst_weight, Graph};
//!
//!let mut graph = Graph::new();
//!graph.add_undirected_edge(1, 2, 1).unwrap();
//!graph.add_undirected_edge(2, 3, 2).unwrap();
//!graph.add_undirected_edge(1, 3, 3).unwrap();
//!
//!let source = graph.get_vertex(1).unwrap();
//!let weight = compute_mst_weight(&graph, source).unwrap();
//!assert_eq!(3, weight);
//! ```
//!
//! # References
//! * [Prim, R.C. Shortest connection networks and some generalizations.](https://doi.org/10.1002/j.1538-7305.1957.tb01515.x)

pub use crate::data_wrappers::{Edge, Vertex, VertexRef};
pub use crate::error::MstError;
pub use crate::graph::Graph;
pub use crate::params::{PrimParamBuilder, PrimParams};
pub use crate::prim::{compute_mst_weight, PrimMst};

mod data_wrappers;
mod error;
mod graph;
pub mod loader;
mod params;
mod prim;
mod validation;
