use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One undirected edge: two node labels and the distance between them.
pub type EdgeSpec = (String, String, f64);

/// Spanish intercity distances, the built-in dataset.
const DEFAULT_EDGES: &[(&str, &str, f64)] = &[
    ("Santiago", "Ourense", 104.0),
    ("Ourense", "Leon", 190.0),
    ("Ourense", "Salamanca", 338.0),
    ("Salamanca", "Madrid", 214.0),
    ("Salamanca", "Caceres", 202.0),
    ("Caceres", "Madrid", 296.0),
    ("Caceres", "Seville", 264.0),
    ("Seville", "Cordoba", 140.0),
    ("Seville", "Granada", 250.0),
    ("Cordoba", "Malaga", 168.0),
    ("Cordoba", "Toledo", 342.0),
    ("Toledo", "Madrid", 74.0),
    ("Granada", "Madrid", 419.0),
    ("Granada", "Murcia", 277.0),
    ("Murcia", "Madrid", 404.0),
    ("Murcia", "Valencia", 226.0),
    ("Valencia", "Madrid", 359.0),
    ("Valencia", "Barcelona", 348.0),
    ("Barcelona", "Girona", 101.0),
    ("Valencia", "Zaragoza", 308.0),
    ("Zaragoza", "Madrid", 319.0),
    ("Zaragoza", "Barcelona", 310.0),
    ("Zaragoza", "Bilbao", 302.0),
    ("Bilbao", "Donostia", 101.0),
    ("Donostia", "Zaragoza", 262.0),
    ("Leon", "Bilbao", 228.0),
    ("Leon", "Madrid", 288.0),
    ("Madrid", "Bilbao", 402.0),
];

/// Edge list a session's graph is built from.
#[derive(Debug, Serialize, Deserialize)]
pub struct DatasetConfig {
    pub edges: Vec<EdgeSpec>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        DatasetConfig {
            edges: DEFAULT_EDGES
                .iter()
                .map(|&(from, to, weight)| (from.to_string(), to.to_string(), weight))
                .collect(),
        }
    }
}

impl DatasetConfig {
    /// Load a dataset from a JSON file of the form
    /// `{"edges": [["from", "to", distance], ...]}`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read edge list from {}", path.display()))?;
        let config: DatasetConfig = serde_json::from_str(&raw)
            .with_context(|| format!("invalid edge list in {}", path.display()))?;
        Ok(config)
    }
}
