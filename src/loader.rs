//! Builds a [`Graph`] from its text description.
//!
//! The first line holds the vertex and edge counts. Every following line holds one undirected
//! edge as `label_a label_b weight`, whitespace separated. Blank lines are skipped.
//!
//! ```text
//! 3 3
//! 1 2 1
//! 2 3 2
//! 1 3 3
//! ```

use crate::{Graph, MstError, PrimParams};
use log::{debug, warn};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Reads and parses the graph description stored in the file at `path`.
pub fn read_graph<W, P>(path: P, params: &PrimParams) -> Result<Graph<W>, MstError>
where
    W: Copy + FromStr,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .map_err(|err| MstError::Io(format!("{}: {err}", path.display())))?;
    parse_graph(&contents, params)
}

/// Parses a graph description, registering both directions of every edge.
///
/// # Returns
/// * A result that, if successful, contains the graph. `MstError::MalformedInput` is returned
///   for a missing or unreadable line. When `params` asks for strict counts, a header that
///   disagrees with the number of distinct vertices or edges found yields
///   `MstError::CountMismatch`; otherwise the mismatch is only logged.
///
/// # Examples
/// ```
///use prim_mst::{loader, Graph, PrimParams};
///
///let text = "3 3\n1 2 1\n2 3 2\n1 3 3\n";
///let graph: Graph<i64> = loader::parse_graph(text, &PrimParams::default()).unwrap();
///assert_eq!(3, graph.n_vertices());
///assert_eq!(6, graph.n_edges());
/// ```
pub fn parse_graph<W>(text: &str, params: &PrimParams) -> Result<Graph<W>, MstError>
where
    W: Copy + FromStr,
{
    let mut lines = text.lines()
        .enumerate()
        .map(|(n, line)| (n + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (n_vertices, n_edges) = match lines.next() {
        Some((line_no, line)) => parse_header(line_no, line)?,
        None => return Err(MstError::MalformedInput(String::from("missing header line"))),
    };

    let mut graph = Graph::new();
    let mut labels = HashSet::new();
    let mut n_triples = 0;
    for (line_no, line) in lines {
        let (a, b, weight) = parse_edge::<W>(line_no, line)?;
        graph.add_undirected_edge(a, b, weight)?;
        labels.insert(a);
        labels.insert(b);
        n_triples += 1;
    }
    debug!("Loaded {} vertices and {n_triples} edges", labels.len());

    check_count("vertex", n_vertices, labels.len(), params)?;
    check_count("edge", n_edges, n_triples, params)?;
    Ok(graph)
}

fn parse_header(line_no: usize, line: &str) -> Result<(usize, usize), MstError> {
    let fields = line.split_whitespace().collect::<Vec<_>>();
    if fields.len() != 2 {
        return Err(MstError::MalformedInput(format!(
            "line {line_no}: expected a vertex count and an edge count, found {} fields",
            fields.len()
        )));
    }
    let n_vertices = parse_field::<usize>(line_no, fields[0], "vertex count")?;
    let n_edges = parse_field::<usize>(line_no, fields[1], "edge count")?;
    Ok((n_vertices, n_edges))
}

fn parse_edge<W: FromStr>(line_no: usize, line: &str) -> Result<(i64, i64, W), MstError> {
    let fields = line.split_whitespace().collect::<Vec<_>>();
    if fields.len() != 3 {
        return Err(MstError::MalformedInput(format!(
            "line {line_no}: expected two labels and a weight, found {} fields",
            fields.len()
        )));
    }
    let a = parse_field::<i64>(line_no, fields[0], "label")?;
    let b = parse_field::<i64>(line_no, fields[1], "label")?;
    let weight = parse_field::<W>(line_no, fields[2], "weight")?;
    Ok((a, b, weight))
}

fn parse_field<T: FromStr>(line_no: usize, field: &str, what: &str) -> Result<T, MstError> {
    field.parse::<T>().map_err(|_| {
        MstError::MalformedInput(format!("line {line_no}: invalid {what} '{field}'"))
    })
}

fn check_count(
    what: &str,
    declared: usize,
    found: usize,
    params: &PrimParams
) -> Result<(), MstError> {
    if declared == found {
        return Ok(());
    }
    let msg = format!("header declares {declared} {what}s but input has {found}");
    if params.strict_counts {
        return Err(MstError::CountMismatch(msg));
    }
    warn!("{msg}");
    Ok(())
}
