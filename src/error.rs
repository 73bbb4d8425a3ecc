use std::error::Error;
use std::fmt::{Display, Formatter};

/// Possible errors that arise while building a graph or computing its minimum spanning tree.
#[derive(Debug, Clone, PartialEq)]
pub enum MstError {
    EmptyGraph,
    VertexNotFound(i64),
    InvalidArgument(String),
    DisconnectedGraph(String),
    WeightOverflow(String),
    MalformedInput(String),
    CountMismatch(String),
    Io(String),
}

impl Error for MstError {}

impl Display for MstError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            MstError::EmptyGraph => String::from("The graph provided has no vertices"),
            MstError::VertexNotFound(label) =>
                format!("Vertex {label} doesn't exist in the graph"),
            MstError::InvalidArgument(msg) => format!("Invalid argument: {msg}"),
            MstError::DisconnectedGraph(msg) => format!("Graph is not connected: {msg}"),
            MstError::WeightOverflow(msg) =>
                format!("Total weight overflows the weight type: {msg}"),
            MstError::MalformedInput(msg) => format!("Malformed input: {msg}"),
            MstError::CountMismatch(msg) => format!("Header counts don't match input: {msg}"),
            MstError::Io(msg) => format!("Unable to read input: {msg}"),
        };
        write!(f, "{message}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_not_found() {
        let err = MstError::VertexNotFound(7);
        assert_eq!("Vertex 7 doesn't exist in the graph", err.to_string());
    }

    #[test]
    fn display_disconnected() {
        let err = MstError::DisconnectedGraph(String::from("2 of 4 vertices reached"));
        assert_eq!("Graph is not connected: 2 of 4 vertices reached", err.to_string());
    }
}
