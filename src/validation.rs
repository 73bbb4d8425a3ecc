use crate::{Graph, MstError};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct GraphValidator<'a, W> {
    graph: &'a Graph<W>,
}

impl<'a, W> GraphValidator<'a, W> {
    pub(crate) fn new(graph: &'a Graph<W>) -> Self {
        Self { graph }
    }

    pub(crate) fn validate_source(&self, source_label: i64) -> Result<(), MstError> {
        if self.graph.is_empty() {
            return Err(MstError::EmptyGraph);
        }
        self.graph.get_vertex(source_label)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_graph() {
        let graph: Graph<i64> = Graph::new();
        let result = GraphValidator::new(&graph).validate_source(1);
        assert!(matches!(result, Err(MstError::EmptyGraph)));
    }

    #[test]
    fn source_outside_graph() {
        let mut graph = Graph::new();
        graph.add_undirected_edge(1, 2, 1).unwrap();
        let validator = GraphValidator::new(&graph);
        assert!(validator.validate_source(2).is_ok());
        assert!(matches!(validator.validate_source(3), Err(MstError::VertexNotFound(3))));
    }
}
