use crate::cost::path_cost;
use crate::graph::{RouteGraph, Weight};
use crate::search::{best_first_search, bfs, Path};
use anyhow::Result;
use std::collections::HashMap;
use std::io::{BufRead, Write};

/// State for one run of the interactive menu loop.
///
/// Start and goal selections live here instead of in globals; a fresh
/// session begins with neither selected. The graph is built once and only
/// read afterwards.
#[derive(Debug)]
pub struct Session {
    graph: RouteGraph,
    start: Option<String>,
    goal: Option<String>,
}

impl Session {
    pub fn new(graph: RouteGraph) -> Self {
        Session {
            graph,
            start: None,
            goal: None,
        }
    }

    /// Drive the menu loop until the user quits or input ends.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        loop {
            print_menu(&mut output)?;
            write!(output, "Please enter your choice: ")?;
            output.flush()?;
            let Some(choice) = read_line(&mut input)? else {
                break;
            };
            writeln!(output)?;
            match choice.as_str() {
                "1" => self.select_start(&mut input, &mut output)?,
                "2" => self.select_goal(&mut input, &mut output)?,
                "3" => self.run_bfs(&mut output)?,
                "4" => self.run_best_first(&mut input, &mut output)?,
                "5" => self.list_nodes(&mut output)?,
                "6" => break,
                _ => writeln!(output, "Invalid choice")?,
            }
        }
        Ok(())
    }

    fn select_start<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        write!(output, "Please enter the start node: ")?;
        output.flush()?;
        let Some(node) = read_line(input)? else {
            return Ok(());
        };
        if self.graph.contains(&node) {
            self.start = Some(node);
        } else {
            writeln!(output, "Invalid start node")?;
            self.start = None;
        }
        Ok(())
    }

    fn select_goal<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        write!(output, "Please enter the goal node: ")?;
        output.flush()?;
        let Some(node) = read_line(input)? else {
            return Ok(());
        };
        if self.graph.contains(&node) {
            self.goal = Some(node);
        } else {
            writeln!(output, "Invalid goal node")?;
            self.goal = None;
        }
        Ok(())
    }

    fn run_bfs<W: Write>(&self, output: &mut W) -> Result<()> {
        let Some((start, goal)) = self.endpoints() else {
            writeln!(output, "Please set start node and goal node first")?;
            return Ok(());
        };
        let found = bfs(&self.graph, start, goal);
        report(&self.graph, output, start, goal, found)
    }

    fn run_best_first<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<()> {
        let Some((start, goal)) = self.endpoints() else {
            writeln!(output, "Please set start node and goal node first")?;
            return Ok(());
        };
        let Some(heuristics) = prompt_heuristics(&self.graph, input, output)? else {
            return Ok(());
        };
        let found = best_first_search(&self.graph, start, goal, &heuristics);
        report(&self.graph, output, start, goal, found)
    }

    fn list_nodes<W: Write>(&self, output: &mut W) -> Result<()> {
        writeln!(output, "Available nodes:")?;
        for node in self.graph.nodes() {
            writeln!(output, "{node}")?;
        }
        Ok(())
    }

    fn endpoints(&self) -> Option<(&str, &str)> {
        Some((self.start.as_deref()?, self.goal.as_deref()?))
    }
}

fn print_menu<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output)?;
    writeln!(output, "Please press [1] to set the start node")?;
    writeln!(output, "Please press [2] to select the goal node")?;
    writeln!(output, "Please press [3] to start the search using BFS")?;
    writeln!(output, "Please press [4] to search with heuristic values")?;
    writeln!(output, "Please press [5] to print all available nodes")?;
    writeln!(output, "Please press [6] to quit")?;
    Ok(())
}

/// Ask for a numeric heuristic estimate for every node, retrying on
/// non-numeric input. Returns `None` when input ends mid-prompt.
fn prompt_heuristics<R: BufRead, W: Write>(
    graph: &RouteGraph,
    input: &mut R,
    output: &mut W,
) -> Result<Option<HashMap<String, Weight>>> {
    let mut heuristics = HashMap::new();
    for node in graph.nodes() {
        loop {
            write!(output, "Enter the heuristic value for node {node}: ")?;
            output.flush()?;
            let Some(raw) = read_line(input)? else {
                return Ok(None);
            };
            match raw.parse::<Weight>() {
                Ok(value) => {
                    heuristics.insert(node.to_string(), value);
                    break;
                }
                Err(_) => writeln!(output, "Invalid input! Please enter a numeric value")?,
            }
        }
    }
    Ok(Some(heuristics))
}

fn report<W: Write>(
    graph: &RouteGraph,
    output: &mut W,
    start: &str,
    goal: &str,
    found: Option<Path>,
) -> Result<()> {
    if let Some(path) = found {
        let total = path_cost(graph, &path);
        writeln!(output, "Path from {start} to {goal}:")?;
        writeln!(output, "{}", path.join(" -> "))?;
        writeln!(output, "Total distance traveled: {total}")?;
    } else {
        writeln!(output, "No path found from {start} to {goal}")?;
    }
    Ok(())
}

/// Next trimmed input line, or `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
