pub mod config;
pub mod cost;
pub mod graph;
pub mod logging;
pub mod search;
pub mod session;
