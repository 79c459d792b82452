// src/graph/mod.rs
//! The word adjacency graph and the queries answered over it.

pub mod bridge;
pub mod builder;
pub mod dot;
pub mod model;
pub mod paths;
pub mod rank;
pub mod walk;

pub use bridge::bridge_words;
pub use builder::build_graph;
pub use dot::to_dot;
pub use model::{Edge, Node, NodeId, Orientation, WordGraph};
pub use paths::{shortest_path, shortest_paths_from, PathResult, UNREACHABLE};
pub use rank::{pagerank, ranked, weighted_pagerank};
pub use walk::random_walk;
