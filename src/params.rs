// Defaults for parameters
const SOURCE_LABEL_DEFAULT: i64 = 1;
const STRICT_COUNTS_DEFAULT: bool = false;
const DUMP_GRAPH_DEFAULT: bool = false;

/// A wrapper around the settings used when loading a graph and running Prim's algorithm on it.
/// Use `PrimParams::default()` unless one of the defaults needs to change.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimParams {
    pub(crate) source_label: i64,
    pub(crate) strict_counts: bool,
    pub(crate) dump_graph: bool,
}

/// Builder object to set custom parameters.
pub struct PrimParamBuilder {
    source_label: Option<i64>,
    strict_counts: Option<bool>,
    dump_graph: Option<bool>,
}

impl PrimParams {
    /// Enters the builder pattern, allowing custom parameters to be set using various setter
    /// methods.
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn builder() -> PrimParamBuilder {
        PrimParamBuilder {
            source_label: None,
            strict_counts: None,
            dump_graph: None,
        }
    }

    pub fn source_label(&self) -> i64 {
        self.source_label
    }

    pub fn strict_counts(&self) -> bool {
        self.strict_counts
    }

    pub fn dump_graph(&self) -> bool {
        self.dump_graph
    }
}

impl Default for PrimParams {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl PrimParamBuilder {
    /// Sets the label of the vertex the spanning tree is grown from. The total weight does not
    /// depend on it for a connected graph, but the order tree edges are found in does.
    /// Defaults to 1.
    ///
    /// # Parameters
    /// * source_label - the label of the starting vertex
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn source_label(mut self, source_label: i64) -> PrimParamBuilder {
        self.source_label = Some(source_label);
        self
    }

    /// Sets whether the vertex and edge counts in the header line of an input must match the
    /// body. When false a mismatch is only logged as a warning. Defaults to false.
    ///
    /// # Parameters
    /// * strict_counts - whether to reject inputs with wrong header counts
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn strict_counts(mut self, strict_counts: bool) -> PrimParamBuilder {
        self.strict_counts = Some(strict_counts);
        self
    }

    /// Sets whether the loaded graph's vertices and edges are written to the debug log.
    /// Defaults to false.
    pub fn dump_graph(mut self, dump_graph: bool) -> PrimParamBuilder {
        self.dump_graph = Some(dump_graph);
        self
    }

    /// Finishes the building of the parameter configuration.
    ///
    /// # Returns
    /// * The completed parameter configuration.
    pub fn build(self) -> PrimParams {
        PrimParams {
            source_label: self.source_label.unwrap_or(SOURCE_LABEL_DEFAULT),
            strict_counts: self.strict_counts.unwrap_or(STRICT_COUNTS_DEFAULT),
            dump_graph: self.dump_graph.unwrap_or(DUMP_GRAPH_DEFAULT),
        }
    }
}
