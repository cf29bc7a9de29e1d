use crate::graph::{RouteGraph, Weight};
use itertools::Itertools;

/// Total edge weight along `path`, summed over consecutive pairs.
///
/// Empty and single-node paths cost zero. Panics if a consecutive pair is
/// not adjacent in `graph`; paths produced by the search functions always
/// are, so a panic here means the caller assembled the path by hand.
pub fn path_cost(graph: &RouteGraph, path: &[String]) -> Weight {
    path.iter()
        .tuple_windows()
        .map(|(a, b)| {
            graph
                .weight(a, b)
                .unwrap_or_else(|| panic!("path nodes {a} and {b} are not adjacent"))
        })
        .sum()
}
