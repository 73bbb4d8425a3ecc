use std::fmt::{Display, Formatter};

/// A directed edge record. An undirected connection between two vertices is stored as two of
/// these, one per direction, both carrying the same distance.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge<W> {
    pub from: i64,
    pub to: i64,
    pub distance: W,
}

impl<W: Display> Display for Edge<W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{}) with distance = {}", self.from, self.to, self.distance)
    }
}

/// A handle to a vertex registered in a [`Graph`](crate::Graph). The label is the identity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexRef(pub(crate) i64);

impl VertexRef {
    pub fn label(&self) -> i64 {
        self.0
    }
}

/// A vertex and the directed edges leaving it.
#[derive(Clone, Debug, PartialEq)]
pub struct Vertex<W> {
    pub(crate) label: i64,
    pub(crate) edges: Vec<Edge<W>>,
}

impl<W> Vertex<W> {
    pub(crate) fn new(label: i64) -> Self {
        Vertex { label, edges: Vec::new() }
    }

    pub fn label(&self) -> i64 {
        self.label
    }

    /// The incident directed edges, each with this vertex as its origin.
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }
}

impl<W: Display> Display for Vertex<W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.edges.is_empty() {
            return write!(f, "Vertex {} has no edges.", self.label);
        }
        write!(f, "Vertex {} has edges:", self.label)?;
        for edge in &self.edges {
            write!(f, "\n  {edge}")?;
        }
        Ok(())
    }
}
