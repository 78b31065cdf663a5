//! Insertion-ordered in-memory graph.

use super::number::Number;
use super::types::{Edge, Vertex};
use super::GraphView;
use crate::error::{Result, TgfError};
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

/// Graphs above this many vertices produce a warning on export.
const LARGE_EXPORT_WARNING: usize = 10_000;

/// An in-memory graph that enumerates vertices and edges in insertion order.
///
/// Vertex identifiers are unique and every edge must connect vertices that
/// were added before it, so a `MemoryGraph` always satisfies the
/// [`GraphView`] contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(
    into = "GraphSnapshot<Id>",
    try_from = "GraphSnapshot<Id>",
    bound(
        serialize = "Id: Serialize + Clone",
        deserialize = "Id: Deserialize<'de> + Eq + Hash + Clone + Display"
    )
)]
pub struct MemoryGraph<Id> {
    vertices: Vec<Vertex<Id>>,
    edges: Vec<Edge<Id>>,
    // Position of each vertex in `vertices`
    index: HashMap<Id, usize>,
}

/// Serialized form of a [`MemoryGraph`]; validated on the way back in.
#[derive(Serialize, Deserialize)]
#[serde(bound(deserialize = "Id: Deserialize<'de>"))]
struct GraphSnapshot<Id> {
    #[serde(default)]
    vertices: Vec<Vertex<Id>>,
    #[serde(default)]
    edges: Vec<Edge<Id>>,
}

impl<Id> Default for MemoryGraph<Id> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<Id> MemoryGraph<Id>
where
    Id: Eq + Hash + Clone + Display,
{
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex without a balance.
    ///
    /// # Errors
    ///
    /// Returns [`TgfError::DuplicateVertex`] if the identifier already exists.
    pub fn add_vertex(&mut self, id: Id) -> Result<()> {
        self.add_vertex_full(Vertex::new(id))
    }

    /// Add a vertex with a balance.
    ///
    /// # Errors
    ///
    /// Returns [`TgfError::DuplicateVertex`] if the identifier already exists.
    pub fn add_vertex_with_balance(&mut self, id: Id, balance: impl Into<Number>) -> Result<()> {
        self.add_vertex_full(Vertex::new(id).with_balance(balance))
    }

    /// Add a fully built vertex.
    ///
    /// # Errors
    ///
    /// Returns [`TgfError::DuplicateVertex`] if the identifier already exists.
    pub fn add_vertex_full(&mut self, vertex: Vertex<Id>) -> Result<()> {
        if self.index.contains_key(&vertex.id) {
            return Err(TgfError::duplicate_vertex(&vertex.id));
        }
        debug!("Adding vertex: id={}", vertex.id);
        self.index.insert(vertex.id.clone(), self.vertices.len());
        self.vertices.push(vertex);
        Ok(())
    }

    /// Add an edge between two existing vertices.
    ///
    /// Parallel edges and self-loops are allowed.
    ///
    /// # Errors
    ///
    /// Returns [`TgfError::UnknownVertex`] if either endpoint is missing.
    pub fn add_edge(&mut self, edge: Edge<Id>) -> Result<()> {
        let (a, b) = edge.endpoints.pair();
        for id in [a, b] {
            if !self.index.contains_key(id) {
                return Err(TgfError::unknown_vertex(id));
            }
        }
        let arrow = if edge.endpoints.is_directed() { "->" } else { "--" };
        debug!("Adding edge: {a} {arrow} {b}");
        self.edges.push(edge);
        Ok(())
    }

    /// Get a vertex by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TgfError::UnknownVertex`] if the vertex doesn't exist.
    pub fn get_vertex(&self, id: &Id) -> Result<&Vertex<Id>> {
        self.index
            .get(id)
            .map(|&pos| &self.vertices[pos])
            .ok_or_else(|| TgfError::unknown_vertex(id))
    }

    /// Check whether a vertex exists.
    pub fn contains_vertex(&self, id: &Id) -> bool {
        self.index.contains_key(id)
    }

    /// Export the graph to Trivial Graph Format with default options.
    ///
    /// **Warning**: Large graphs (>10K vertices) will produce warnings.
    pub fn export_tgf(&self) -> Result<String> {
        self.check_export_size();
        crate::export::export_tgf(self)
    }

    /// Export the graph to Trivial Graph Format with custom options.
    pub fn export_tgf_with(&self, options: crate::export::TgfOptions) -> Result<String> {
        self.check_export_size();
        crate::export::export_tgf_with(self, options)
    }

    fn check_export_size(&self) {
        let vertex_count = self.vertices.len();
        if vertex_count > LARGE_EXPORT_WARNING {
            warn!("Exporting large graph ({vertex_count} vertices) to TGF");
        }
    }
}

impl<Id> GraphView for MemoryGraph<Id>
where
    Id: Eq + Hash + Display,
{
    type Id = Id;
    type Vertex = Vertex<Id>;
    type Edge = Edge<Id>;

    fn vertices(&self) -> impl Iterator<Item = &Vertex<Id>> {
        self.vertices.iter()
    }

    fn edges(&self) -> impl Iterator<Item = &Edge<Id>> {
        self.edges.iter()
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<Id> From<MemoryGraph<Id>> for GraphSnapshot<Id> {
    fn from(graph: MemoryGraph<Id>) -> Self {
        Self {
            vertices: graph.vertices,
            edges: graph.edges,
        }
    }
}

impl<Id> TryFrom<GraphSnapshot<Id>> for MemoryGraph<Id>
where
    Id: Eq + Hash + Clone + Display,
{
    type Error = TgfError;

    fn try_from(snapshot: GraphSnapshot<Id>) -> Result<Self> {
        trace!(
            "Restoring graph snapshot: {} vertices, {} edges",
            snapshot.vertices.len(),
            snapshot.edges.len()
        );
        let mut graph = Self::new();
        for vertex in snapshot.vertices {
            graph.add_vertex_full(vertex)?;
        }
        for edge in snapshot.edges {
            graph.add_edge(edge)?;
        }
        Ok(graph)
    }
}
