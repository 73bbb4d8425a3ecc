use log::debug;
use prim_mst::{loader, Graph, PrimMst, PrimParams};
use std::env;
use std::error::Error;

const DEFAULT_INPUT: &str = "primeAlgorithmTextFile.txt";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let path = env::args().nth(1).unwrap_or_else(|| String::from(DEFAULT_INPUT));
    let mut builder = PrimParams::builder()
        .strict_counts(env::var_os("PRIM_STRICT_COUNTS").is_some())
        .dump_graph(env::var_os("PRIM_DUMP_GRAPH").is_some());
    if let Ok(label) = env::var("PRIM_SOURCE") {
        builder = builder.source_label(label.trim().parse()?);
    }
    let params = builder.build();

    let graph: Graph<i64> = loader::read_graph(&path, &params)?;
    if params.dump_graph() {
        debug!("The representation of the graph read is:\n{graph}");
        debug!("The edges of the graph are:\n{}", graph.edge_listing());
    }

    let total = PrimMst::from_params(&graph, &params)?.total_weight()?;
    println!("Sum = {total}");
    Ok(())
}
