use crate::graph::{RouteGraph, Weight};
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

pub type Path = Vec<String>;

/// Find a path from `start` to `goal` by breadth-first traversal.
///
/// The returned path has the fewest edges among all start-goal paths, not
/// the lowest total weight. Returns `None` when the goal is unreachable.
/// Both endpoints must be present in the graph; the caller validates that.
#[tracing::instrument(skip(graph), fields(start = %start, goal = %goal))]
pub fn bfs(graph: &RouteGraph, start: &str, goal: &str) -> Option<Path> {
    let mut visited: HashSet<String> = HashSet::new();
    let mut queue: VecDeque<(String, Path)> = VecDeque::new();
    queue.push_back((start.to_string(), Vec::new()));

    while let Some((current, path)) = queue.pop_front() {
        if current == goal {
            let mut found = path;
            found.push(current);
            tracing::debug!(hops = found.len() - 1, "bfs reached goal");
            return Some(found);
        }
        if visited.contains(&current) {
            continue;
        }
        // A node may sit in the queue several times with different path
        // prefixes; the visited check above ensures it is expanded once.
        for (neighbor, _) in graph.neighbors(&current) {
            let mut extended = path.clone();
            extended.push(current.clone());
            queue.push_back((neighbor.to_string(), extended));
        }
        visited.insert(current);
    }
    tracing::debug!("bfs exhausted the frontier");
    None
}

/// Heap entry ordered by priority ascending, then node label, then path
/// contents. The explicit comparator makes equal-priority pops
/// deterministic instead of leaning on incidental heap behavior.
#[derive(Debug, Clone)]
struct HeapEntry {
    priority: Weight,
    node: String,
    path: Path,
    /// Accumulated edge weight from the start node to `node`.
    cost: Weight,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.node.cmp(&other.node))
            .then_with(|| self.path.cmp(&other.path))
    }
}

/// Find a path from `start` to `goal` by best-first search, biased by the
/// per-node `heuristics` estimates of remaining cost.
///
/// An entry's priority is the accumulated real cost up to the node being
/// expanded plus the heuristic estimate of the neighbor pushed. Optimality
/// is only as good as the supplied heuristic; an overestimating heuristic
/// can steer the search onto a costlier path.
///
/// Neighbors without a heuristic entry are never enqueued. In particular
/// the goal itself needs an entry to be reachable at all: with none, the
/// search returns `None` even when a path exists in the graph.
#[tracing::instrument(skip(graph, heuristics), fields(start = %start, goal = %goal))]
pub fn best_first_search(
    graph: &RouteGraph,
    start: &str,
    goal: &str,
    heuristics: &HashMap<String, Weight>,
) -> Option<Path> {
    let mut visited: HashSet<String> = HashSet::new();
    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();
    heap.push(Reverse(HeapEntry {
        priority: 0.0,
        node: start.to_string(),
        path: Vec::new(),
        cost: 0.0,
    }));

    while let Some(Reverse(entry)) = heap.pop() {
        let HeapEntry {
            node: current,
            path,
            cost,
            ..
        } = entry;
        if current == goal {
            let mut found = path;
            found.push(current);
            tracing::debug!(cost, hops = found.len() - 1, "best-first reached goal");
            return Some(found);
        }
        if visited.contains(&current) {
            continue;
        }
        for (neighbor, weight) in graph.neighbors(&current) {
            let Some(&estimate) = heuristics.get(neighbor) else {
                // No estimate, never explored through this node.
                continue;
            };
            let mut candidate = path.clone();
            candidate.push(current.clone());
            heap.push(Reverse(HeapEntry {
                priority: cost + estimate,
                node: neighbor.to_string(),
                path: candidate,
                cost: cost + weight,
            }));
        }
        visited.insert(current);
    }
    tracing::debug!("best-first exhausted the frontier");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn two_hop_graph() -> RouteGraph {
        RouteGraph::from_edges([("A", "B", 5.0), ("B", "C", 3.0)])
    }

    fn full_coverage(graph: &RouteGraph) -> HashMap<String, Weight> {
        graph.nodes().map(|n| (n.to_string(), 0.0)).collect()
    }

    /// Every simple path from start to goal, by exhaustive enumeration.
    fn all_simple_paths(graph: &RouteGraph, start: &str, goal: &str) -> Vec<Path> {
        let mut found = Vec::new();
        let mut stack = vec![vec![start.to_string()]];
        while let Some(path) = stack.pop() {
            let last = path.last().unwrap().clone();
            if last == goal {
                found.push(path);
                continue;
            }
            for (neighbor, _) in graph.neighbors(&last) {
                if !path.iter().any(|n| n == neighbor) {
                    let mut extended = path.clone();
                    extended.push(neighbor.to_string());
                    stack.push(extended);
                }
            }
        }
        found
    }

    fn assert_consecutive_adjacent(graph: &RouteGraph, path: &[String]) {
        for (a, b) in path.iter().tuple_windows() {
            assert!(
                graph.weight(a, b).is_some(),
                "{a} and {b} are not adjacent"
            );
        }
    }

    #[test]
    fn test_bfs_start_equals_goal() {
        let graph = two_hop_graph();
        assert_eq!(bfs(&graph, "B", "B"), Some(vec!["B".to_string()]));
    }

    #[test]
    fn test_bfs_two_hops() {
        let graph = two_hop_graph();
        let path = bfs(&graph, "A", "C").unwrap();
        assert_eq!(path, vec!["A", "B", "C"]);
        assert_consecutive_adjacent(&graph, &path);
    }

    #[test]
    fn test_bfs_disconnected() {
        let graph = RouteGraph::from_edges([("A", "B", 5.0), ("D", "E", 1.0)]);
        assert_eq!(bfs(&graph, "A", "E"), None);
    }

    #[test]
    fn test_bfs_minimal_hop_count() {
        // Direct heavy edge vs a lighter three-hop detour; BFS counts hops.
        let graph = RouteGraph::from_edges([
            ("A", "D", 100.0),
            ("A", "B", 1.0),
            ("B", "C", 1.0),
            ("C", "D", 1.0),
        ]);
        let path = bfs(&graph, "A", "D").unwrap();
        let best_hops = all_simple_paths(&graph, "A", "D")
            .iter()
            .map(|p| p.len() - 1)
            .min()
            .unwrap();
        assert_eq!(path.len() - 1, best_hops);
        assert_eq!(path, vec!["A", "D"]);
    }

    #[test]
    fn test_best_first_two_hops() {
        let graph = two_hop_graph();
        let heuristics = HashMap::from([
            ("A".to_string(), 10.0),
            ("B".to_string(), 5.0),
            ("C".to_string(), 0.0),
        ]);
        let path = best_first_search(&graph, "A", "C", &heuristics).unwrap();
        assert_eq!(path, vec!["A", "B", "C"]);
        assert_consecutive_adjacent(&graph, &path);
    }

    #[test]
    fn test_best_first_disconnected() {
        let graph = RouteGraph::from_edges([("A", "B", 5.0), ("D", "E", 1.0)]);
        let heuristics = full_coverage(&graph);
        assert_eq!(best_first_search(&graph, "A", "E", &heuristics), None);
    }

    #[test]
    fn test_best_first_requires_goal_heuristic() {
        // Documented quirk: the goal is only ever enqueued through a
        // heuristic lookup, so dropping its entry hides an existing path.
        let graph = two_hop_graph();
        let heuristics =
            HashMap::from([("A".to_string(), 10.0), ("B".to_string(), 5.0)]);
        assert_eq!(best_first_search(&graph, "A", "C", &heuristics), None);
        assert!(bfs(&graph, "A", "C").is_some());
    }

    #[test]
    fn test_best_first_missing_start_heuristic_is_fine() {
        // Only neighbors are looked up, never the node being expanded.
        let graph = two_hop_graph();
        let heuristics =
            HashMap::from([("B".to_string(), 5.0), ("C".to_string(), 0.0)]);
        let path = best_first_search(&graph, "A", "C", &heuristics).unwrap();
        assert_eq!(path, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_best_first_priority_excludes_final_edge() {
        // Priority is cost-to-the-expanded-node plus the neighbor estimate;
        // the edge into the neighbor is not counted. With a flat heuristic
        // the heavy direct edge therefore outranks the light detour.
        let graph = RouteGraph::from_edges([
            ("S", "A", 1.0),
            ("A", "G", 1.0),
            ("S", "G", 10.0),
        ]);
        let heuristics = full_coverage(&graph);
        let path = best_first_search(&graph, "S", "G", &heuristics).unwrap();
        assert_eq!(path, vec!["S", "G"]);
    }

    #[test]
    fn test_best_first_inadmissible_heuristic_misleads() {
        // An overestimate on B buries the genuinely cheaper route; the
        // search is only as good as the estimates it is handed.
        let graph = RouteGraph::from_edges([
            ("S", "A", 5.0),
            ("S", "B", 1.0),
            ("A", "G", 1.0),
            ("B", "G", 1.0),
        ]);
        let heuristics = HashMap::from([
            ("S".to_string(), 0.0),
            ("A".to_string(), 0.0),
            ("B".to_string(), 100.0),
            ("G".to_string(), 0.0),
        ]);
        let path = best_first_search(&graph, "S", "G", &heuristics).unwrap();
        assert_eq!(path, vec!["S", "A", "G"]);
    }

    #[test]
    fn test_best_first_tie_break_is_lexicographic() {
        // Diamond with identical weights and estimates: both middle nodes
        // tie on priority, so the label comparison decides.
        let graph = RouteGraph::from_edges([
            ("S", "B", 1.0),
            ("S", "A", 1.0),
            ("B", "G", 1.0),
            ("A", "G", 1.0),
        ]);
        let heuristics = full_coverage(&graph);
        let path = best_first_search(&graph, "S", "G", &heuristics).unwrap();
        assert_eq!(path, vec!["S", "A", "G"]);
    }

    #[test]
    fn test_search_paths_stay_adjacent() {
        let graph = RouteGraph::from_edges([
            ("A", "B", 2.0),
            ("B", "C", 2.0),
            ("C", "D", 2.0),
            ("A", "D", 9.0),
            ("B", "D", 4.0),
        ]);
        let heuristics = full_coverage(&graph);
        for start in graph.nodes() {
            for goal in graph.nodes() {
                if let Some(path) = bfs(&graph, start, goal) {
                    assert_consecutive_adjacent(&graph, &path);
                }
                if let Some(path) = best_first_search(&graph, start, goal, &heuristics) {
                    assert_consecutive_adjacent(&graph, &path);
                }
            }
        }
    }
}
