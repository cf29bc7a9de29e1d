use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use wayfinder::config::DatasetConfig;
use wayfinder::graph::RouteGraph;
use wayfinder::logging;
use wayfinder::session::Session;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Interactive route search over a weighted city graph.", long_about = None)]
struct Cli {
    /// JSON file with {"edges": [["from", "to", distance], ...]} replacing
    /// the built-in dataset
    #[clap(long)]
    edges: Option<PathBuf>,

    /// Log search internals to stderr
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose)?;

    let config = match &cli.edges {
        Some(path) => DatasetConfig::from_path(path)?,
        None => DatasetConfig::default(),
    };
    let graph = RouteGraph::from_edges(config.edges);
    tracing::debug!(nodes = graph.node_count(), "graph built");

    let stdin = io::stdin();
    let mut session = Session::new(graph);
    session.run(stdin.lock(), io::stdout())
}
