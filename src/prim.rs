use crate::data_wrappers::{Edge, VertexRef};
use crate::validation::GraphValidator;
use crate::{Graph, MstError, PrimParams};
use log::{debug, info};
use num_traits::{CheckedAdd, Num};
use std::collections::HashSet;
use std::fmt::Debug;

/// Prim's algorithm in its naive form: every growth step rescans the whole edge list for the
/// lightest edge leaving the tree, so a run costs O(V·E).
#[derive(Debug, Clone, PartialEq)]
pub struct PrimMst<'a, W> {
    graph: &'a Graph<W>,
    source: VertexRef,
}

/// The state of a run between two growth steps: the vertices already in the tree, the edges
/// that brought them in and their summed weight.
#[derive(Debug)]
struct Frontier<W> {
    visited: HashSet<i64>,
    tree: Vec<Edge<W>>,
    total: W,
}

impl<'a, W: Num + CheckedAdd + Copy + PartialOrd + Debug> PrimMst<'a, W> {
    /// Prepares a run of Prim's algorithm over `graph`, starting from `source`.
    ///
    /// # Parameters
    /// * `graph` - the graph to span. It must be connected for the run to succeed.
    /// * `source` - the vertex the tree is grown from.
    ///
    /// # Returns
    /// * The prepared run, or `MstError::EmptyGraph` if the graph has no vertices, or
    ///   `MstError::VertexNotFound` if `source` isn't part of the graph.
    ///
    /// # Examples
    /// ```
    ///use prim_mst::{Graph, PrimMst};
    ///
    ///let mut graph = Graph::new();
    ///graph.add_undirected_edge(1, 2, 1).unwrap();
    ///graph.add_undirected_edge(2, 3, 2).unwrap();
    ///graph.add_undirected_edge(1, 3, 3).unwrap();
    ///
    ///let source = graph.get_vertex(1).unwrap();
    ///let prim = PrimMst::new(&graph, source).unwrap();
    ///assert_eq!(3, prim.total_weight().unwrap());
    /// ```
    pub fn new(graph: &'a Graph<W>, source: VertexRef) -> Result<Self, MstError> {
        GraphValidator::new(graph).validate_source(source.label())?;
        Ok(PrimMst { graph, source })
    }

    /// Prepares a run starting from the source label held in the parameters.
    pub fn from_params(graph: &'a Graph<W>, params: &PrimParams) -> Result<Self, MstError> {
        GraphValidator::new(graph).validate_source(params.source_label)?;
        let source = graph.get_vertex(params.source_label)?;
        Ok(PrimMst { graph, source })
    }

    /// Grows the spanning tree until it covers every vertex.
    ///
    /// # Returns
    /// * The chosen directed edges in the order they joined the tree, each pointing from the
    ///   vertex already in the tree to the one it brought in. Returns
    ///   `MstError::DisconnectedGraph` if some vertex cannot be reached from the source.
    pub fn run(&self) -> Result<Vec<Edge<W>>, MstError> {
        self.grow_to_completion().map(|frontier| frontier.tree)
    }

    /// Grows the spanning tree until it covers every vertex and returns its total weight.
    pub fn total_weight(&self) -> Result<W, MstError> {
        self.grow_to_completion().map(|frontier| frontier.total)
    }

    fn grow_to_completion(&self) -> Result<Frontier<W>, MstError> {
        let n_vertices = self.graph.n_vertices();
        let mut frontier = Frontier::new(self.source);
        while frontier.visited.len() != n_vertices {
            let edge = frontier.lightest_crossing_edge(self.graph).copied().ok_or_else(|| {
                MstError::DisconnectedGraph(format!(
                    "only {} of {n_vertices} vertices are reachable from vertex {}",
                    frontier.visited.len(), self.source.label()
                ))
            })?;
            frontier = frontier.grow(edge)?;
        }
        info!(
            "Spanning tree from vertex {} covers {n_vertices} vertices with total weight {:?}",
            self.source.label(), frontier.total
        );
        Ok(frontier)
    }
}

impl<W: Num + CheckedAdd + Copy + PartialOrd + Debug> Frontier<W> {
    fn new(source: VertexRef) -> Self {
        Frontier {
            visited: HashSet::from([source.label()]),
            tree: Vec::new(),
            total: W::zero(),
        }
    }

    /// Brings the far end of `edge` into the tree.
    fn grow(mut self, edge: Edge<W>) -> Result<Self, MstError> {
        debug!("Adding vertex {} via {edge:?}", edge.to);
        self.total = self.total.checked_add(&edge.distance).ok_or_else(|| {
            MstError::WeightOverflow(format!(
                "adding {:?} for edge ({},{}) to a total of {:?}",
                edge.distance, edge.from, edge.to, self.total
            ))
        })?;
        self.visited.insert(edge.to);
        self.tree.push(edge);
        Ok(self)
    }

    fn lightest_crossing_edge<'g>(&self, graph: &'g Graph<W>) -> Option<&'g Edge<W>> {
        let mut lightest: Option<&Edge<W>> = None;
        for edge in graph.edges() {
            if !self.is_crossing(edge) {
                continue;
            }
            // Ties keep the earlier edge
            match lightest {
                Some(min) if !(edge.distance < min.distance) => {}
                _ => lightest = Some(edge),
            }
        }
        lightest
    }

    fn is_crossing(&self, edge: &Edge<W>) -> bool {
        self.visited.contains(&edge.from) && !self.visited.contains(&edge.to)
    }
}

/// Computes the total weight of a minimum spanning tree of `graph`, growing it from `source`.
///
/// # Returns
/// * A result that, if successful, contains the summed distance of the tree's edges. An error is
///   returned if the graph is empty, if `source` is not one of its vertices, if the graph is
///   not connected, or if the total doesn't fit in the weight type.
///
/// Weights must be integers so the total can be checked for overflow. Floating point weights
/// are rejected at compile time:
/// ```compile_fail
///use prim_mst::{compute_mst_weight, Graph};
///
///let mut graph: Graph<f64> = Graph::new();
///graph.add_undirected_edge(1, 2, f64::NAN).unwrap();
///let source = graph.get_vertex(1).unwrap();
///compute_mst_weight(&graph, source).unwrap();
/// ```
///
/// # Examples
/// ```
///use prim_mst::{compute_mst_weight, Graph};
///
///let mut graph = Graph::new();
///graph.add_undirected_edge(1, 2, 1).unwrap();
///graph.add_undirected_edge(2, 3, 2).unwrap();
///graph.add_undirected_edge(3, 4, 3).unwrap();
///graph.add_undirected_edge(4, 1, 4).unwrap();
///
///let source = graph.get_vertex(1).unwrap();
///assert_eq!(6, compute_mst_weight(&graph, source).unwrap());
/// ```
pub fn compute_mst_weight<W>(graph: &Graph<W>, source: VertexRef) -> Result<W, MstError>
where
    W: Num + CheckedAdd + Copy + PartialOrd + Debug,
{
    PrimMst::new(graph, source)?.total_weight()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_from(edges: &[(i64, i64, i64)]) -> Graph<i64> {
        let mut graph = Graph::new();
        for &(a, b, w) in edges {
            graph.add_undirected_edge(a, b, w).unwrap();
        }
        graph
    }

    #[test]
    fn triangle() {
        let graph = graph_from(&[(1, 2, 1), (2, 3, 2), (1, 3, 3)]);
        let source = graph.get_vertex(1).unwrap();
        let tree = PrimMst::new(&graph, source).unwrap().run().unwrap();
        assert_eq!(
            vec![Edge { from: 1, to: 2, distance: 1 }, Edge { from: 2, to: 3, distance: 2 }],
            tree
        );
    }

    #[test]
    fn single_vertex() {
        let mut graph: Graph<i64> = Graph::new();
        let source = graph.get_or_create_vertex(1);
        assert_eq!(0, compute_mst_weight(&graph, source).unwrap());
        assert!(PrimMst::new(&graph, source).unwrap().run().unwrap().is_empty());
    }

    #[test]
    fn ties_go_to_first_scanned_edge() {
        let graph = graph_from(&[(1, 3, 5), (1, 2, 5), (2, 3, 9)]);
        let source = graph.get_vertex(1).unwrap();
        let tree = PrimMst::new(&graph, source).unwrap().run().unwrap();
        assert_eq!(Edge { from: 1, to: 3, distance: 5 }, tree[0]);
        assert_eq!(Edge { from: 1, to: 2, distance: 5 }, tree[1]);
    }

    #[test]
    fn disconnected() {
        let graph = graph_from(&[(1, 2, 1), (3, 4, 1)]);
        let source = graph.get_vertex(1).unwrap();
        let result = compute_mst_weight(&graph, source);
        assert!(matches!(result, Err(MstError::DisconnectedGraph(..))));
    }

    #[test]
    fn isolated_vertex_is_disconnected() {
        let mut graph = graph_from(&[(1, 2, 1)]);
        graph.get_or_create_vertex(3);
        let source = graph.get_vertex(2).unwrap();
        let result = compute_mst_weight(&graph, source);
        assert!(matches!(result, Err(MstError::DisconnectedGraph(..))));
    }

    #[test]
    fn directed_record_only_leaves_its_origin() {
        let mut graph: Graph<i64> = Graph::new();
        let a = graph.get_or_create_vertex(1);
        let b = graph.get_or_create_vertex(2);
        graph.add_edge(a, b, 3).unwrap();

        assert_eq!(3, compute_mst_weight(&graph, a).unwrap());
        let result = compute_mst_weight(&graph, b);
        assert!(matches!(result, Err(MstError::DisconnectedGraph(..))));
    }

    #[test]
    fn foreign_source() {
        let graph = graph_from(&[(1, 2, 1)]);
        let mut other: Graph<i64> = Graph::new();
        let stranger = other.get_or_create_vertex(8);
        let result = compute_mst_weight(&graph, stranger);
        assert!(matches!(result, Err(MstError::VertexNotFound(8))));
    }

    #[test]
    fn from_params_source() {
        let graph = graph_from(&[(1, 2, 4), (2, 3, 1)]);
        let params = PrimParams::builder().source_label(3).build();
        let tree = PrimMst::from_params(&graph, &params).unwrap().run().unwrap();
        assert_eq!(Edge { from: 3, to: 2, distance: 1 }, tree[0]);

        let params = PrimParams::builder().source_label(10).build();
        let result = PrimMst::from_params(&graph, &params);
        assert!(matches!(result, Err(MstError::VertexNotFound(10))));
    }

    #[test]
    fn total_overflow() {
        let half = i64::MAX / 2 + 1;
        let graph = graph_from(&[(1, 2, half), (2, 3, half)]);
        let source = graph.get_vertex(1).unwrap();
        let result = compute_mst_weight(&graph, source);
        assert!(matches!(result, Err(MstError::WeightOverflow(..))));
    }

    #[test]
    fn total_at_limit() {
        let graph = graph_from(&[(1, 2, i64::MAX - 1), (2, 3, 1)]);
        let source = graph.get_vertex(3).unwrap();
        assert_eq!(i64::MAX, compute_mst_weight(&graph, source).unwrap());
    }

    #[test]
    fn small_weight_type() {
        let mut graph: Graph<u8> = Graph::new();
        graph.add_undirected_edge(1, 2, 200).unwrap();
        graph.add_undirected_edge(2, 3, 55).unwrap();
        graph.add_undirected_edge(3, 4, 1).unwrap();
        let source = graph.get_vertex(1).unwrap();
        let result = compute_mst_weight(&graph, source);
        assert!(matches!(result, Err(MstError::WeightOverflow(..))));
    }
}
