use crate::data_wrappers::{Edge, Vertex, VertexRef};
use crate::MstError;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// An undirected weighted graph. Vertices are keyed by their integer label and every
/// undirected edge is held as two directed records, one per endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct Graph<W> {
    vertices: BTreeMap<i64, Vertex<W>>,
    edges: Vec<Edge<W>>,
}

impl<W: Copy> Graph<W> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Graph { vertices: BTreeMap::new(), edges: Vec::new() }
    }

    /// Returns the vertex with this label, registering a new one first if it isn't in the graph
    /// yet. Calling this repeatedly with the same label always yields the same vertex.
    ///
    /// # Examples
    /// ```
    ///use prim_mst::Graph;
    ///
    ///let mut graph: Graph<i64> = Graph::new();
    ///let first = graph.get_or_create_vertex(4);
    ///let second = graph.get_or_create_vertex(4);
    ///assert_eq!(first, second);
    ///assert_eq!(1, graph.n_vertices());
    /// ```
    pub fn get_or_create_vertex(&mut self, label: i64) -> VertexRef {
        self.vertices.entry(label).or_insert_with(|| Vertex::new(label));
        VertexRef(label)
    }

    /// Registers the single directed edge `u -> v`. Modelling an undirected edge requires a
    /// second call with the endpoints swapped, or a call to `add_undirected_edge`.
    ///
    /// # Returns
    /// * `MstError::InvalidArgument` if either endpoint is not registered in this graph.
    pub fn add_edge(&mut self, u: VertexRef, v: VertexRef, weight: W) -> Result<(), MstError> {
        if !self.vertices.contains_key(&v.0) {
            return Err(MstError::InvalidArgument(format!(
                "edge ({},{}) has an unregistered destination", u.0, v.0
            )));
        }
        let origin = self.vertices.get_mut(&u.0).ok_or_else(|| {
            MstError::InvalidArgument(format!(
                "edge ({},{}) has an unregistered origin", u.0, v.0
            ))
        })?;
        let edge = Edge { from: u.0, to: v.0, distance: weight };
        origin.edges.push(edge);
        self.edges.push(edge);
        Ok(())
    }

    /// Creates both endpoints if needed and registers the edge in both directions.
    pub fn add_undirected_edge(&mut self, a: i64, b: i64, weight: W) -> Result<(), MstError> {
        let u = self.get_or_create_vertex(a);
        let v = self.get_or_create_vertex(b);
        self.add_edge(u, v, weight)?;
        self.add_edge(v, u, weight)
    }
}

impl<W> Graph<W> {
    /// Looks up an existing vertex.
    ///
    /// # Returns
    /// * A result containing the vertex handle, or `MstError::VertexNotFound` if no vertex with
    ///   this label has been registered.
    pub fn get_vertex(&self, label: i64) -> Result<VertexRef, MstError> {
        if self.vertices.contains_key(&label) {
            Ok(VertexRef(label))
        } else {
            Err(MstError::VertexNotFound(label))
        }
    }

    pub fn n_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of directed edge records, i.e. twice the number of undirected edges.
    pub fn n_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains(&self, vertex: VertexRef) -> bool {
        self.vertices.contains_key(&vertex.0)
    }

    pub fn vertex(&self, vertex: VertexRef) -> Option<&Vertex<W>> {
        self.vertices.get(&vertex.0)
    }

    /// All vertices in ascending label order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<W>> {
        self.vertices.values()
    }

    /// All directed edge records in registration order. This is the order Prim's algorithm
    /// scans them in, so it decides which of two equally light edges is chosen.
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    /// Returns a printable listing of every directed edge, one per line.
    pub fn edge_listing(&self) -> String
    where
        W: Display,
    {
        self.edges.iter()
            .map(|edge| edge.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<W: Copy> Default for Graph<W> {
    fn default() -> Self {
        Graph::new()
    }
}

impl<W: Display> Display for Graph<W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for vertex in self.vertices.values() {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{vertex}")?;
            first = false;
        }
        Ok(())
    }
}
