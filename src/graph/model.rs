// src/graph/model.rs
//! The word adjacency graph: nodes, weighted edges and lookups.

use std::collections::HashMap;

/// Index of a node inside its owning [`WordGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

/// Whether `add_edge` also records the reverse edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Directed,
    Undirected,
}

/// An outgoing edge. The source is the node that owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    target: NodeId,
    weight: u64,
}

impl Edge {
    #[must_use]
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// Number of times the target immediately followed the source.
    #[must_use]
    pub fn weight(&self) -> u64 {
        self.weight
    }
}

/// One distinct word.
#[derive(Debug, Clone)]
pub struct Node {
    name: String,
    edges: Vec<Edge>,
}

impl Node {
    fn new(name: String) -> Self {
        Self {
            name,
            edges: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Outgoing edges in the order they were first observed.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of distinct successors.
    #[must_use]
    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_dangling(&self) -> bool {
        self.edges.is_empty()
    }

    #[must_use]
    pub fn has_edge_to(&self, target: NodeId) -> bool {
        self.edges.iter().any(|e| e.target == target)
    }

    /// Returns true if a new edge was created, false if an existing one grew.
    fn link(&mut self, target: NodeId, weight: u64) -> bool {
        if let Some(edge) = self.edges.iter_mut().find(|e| e.target == target) {
            edge.weight += weight;
            return false;
        }
        self.edges.push(Edge { target, weight });
        true
    }
}

/// Directed, weighted word graph.
///
/// Nodes are stored in first-seen order and never removed. Names are always
/// lowercase; every lookup lowercases its argument first. A reverse index of
/// predecessors is kept in step with the forward edges.
#[derive(Debug, Clone, Default)]
pub struct WordGraph {
    orientation: Orientation,
    nodes: Vec<Node>,
    index: HashMap<String, NodeId>,
    predecessors: Vec<Vec<NodeId>>,
}

impl WordGraph {
    #[must_use]
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Inserts the node if absent and returns its id.
    pub fn add_node(&mut self, name: &str) -> NodeId {
        let key = name.to_lowercase();
        if let Some(&id) = self.index.get(&key) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(key.clone()));
        self.predecessors.push(Vec::new());
        self.index.insert(key, id);
        id
    }

    /// Adds `weight` to the `source -> destination` edge, creating both nodes
    /// and the edge as needed. A zero weight only creates the nodes.
    pub fn add_edge(&mut self, source: &str, destination: &str, weight: u64) {
        let src = self.add_node(source);
        let dst = self.add_node(destination);
        if weight == 0 {
            return;
        }

        self.link(src, dst, weight);
        // A self-loop is its own mirror.
        if self.orientation == Orientation::Undirected && src != dst {
            self.link(dst, src, weight);
        }
    }

    #[allow(clippy::indexing_slicing)] // Guarded: ids are only minted by add_node
    fn link(&mut self, src: NodeId, dst: NodeId, weight: u64) {
        if self.nodes[src.0].link(dst, weight) {
            self.predecessors[dst.0].push(src);
        }
    }

    #[must_use]
    pub fn contains_node(&self, name: &str) -> bool {
        self.index.contains_key(&name.to_lowercase())
    }

    #[must_use]
    pub fn id(&self, name: &str) -> Option<NodeId> {
        self.index.get(&name.to_lowercase()).copied()
    }

    #[must_use]
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.id(name).and_then(|id| self.nodes.get(id.0))
    }

    /// Resolves an id handed out by this graph.
    ///
    /// # Panics
    /// Panics if the id belongs to another graph.
    #[must_use]
    #[allow(clippy::indexing_slicing)]
    pub fn resolve(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    #[must_use]
    pub fn all_nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Pairs every node with its id, in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(Node::out_degree).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes with an edge into `id`, in the order those edges were created.
    #[must_use]
    pub fn predecessor_ids(&self, id: NodeId) -> &[NodeId] {
        self.predecessors.get(id.0).map_or(&[][..], Vec::as_slice)
    }

    /// Names of the words that directly follow `name`.
    #[must_use]
    pub fn successors(&self, name: &str) -> Option<Vec<&str>> {
        let node = self.node(name)?;
        Some(
            node.edges()
                .iter()
                .map(|e| self.resolve(e.target).name())
                .collect(),
        )
    }

    /// Names of the words that directly precede `name`.
    #[must_use]
    pub fn predecessors(&self, name: &str) -> Option<Vec<&str>> {
        let id = self.id(name)?;
        Some(
            self.predecessor_ids(id)
                .iter()
                .map(|&p| self.resolve(p).name())
                .collect(),
        )
    }

    #[must_use]
    pub fn edge_weight(&self, source: &str, destination: &str) -> Option<u64> {
        let dst = self.id(destination)?;
        self.node(source)?
            .edges()
            .iter()
            .find(|e| e.target == dst)
            .map(Edge::weight)
    }
}
