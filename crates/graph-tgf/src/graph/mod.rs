//! Read-only graph interface consumed by the exporters.
//!
//! This module defines the fundamental building blocks:
//! - [`GraphView`]: ordered, read-only access to vertices and edges
//! - [`Vertex`] / [`Edge`]: plain attribute carriers implementing the views
//! - [`MemoryGraph`]: an insertion-ordered in-memory graph
//!
//! Any graph store can be exported by implementing [`GraphView`] for it.

mod memory;
mod number;
mod types;

pub use memory::MemoryGraph;
pub use number::Number;
pub use types::{Edge, Endpoints, Vertex};

use std::fmt::Display;
use std::hash::Hash;

/// Read access to a single vertex.
pub trait VertexView {
    /// Identifier type shared with the owning graph.
    type Id;

    /// Unique identifier of this vertex.
    fn id(&self) -> &Self::Id;

    /// Optional balance (supply or demand).
    fn balance(&self) -> Option<Number>;
}

/// Read access to a single edge.
pub trait EdgeView {
    /// Identifier type shared with the owning graph.
    type Id;

    /// Borrowed endpoints, tagged with the edge's directedness.
    fn endpoints(&self) -> Endpoints<&Self::Id>;

    /// Optional capacity; `None` means unbounded.
    fn capacity(&self) -> Option<Number>;

    /// Optional flow.
    fn flow(&self) -> Option<Number>;

    /// Optional weight.
    fn weight(&self) -> Option<Number>;
}

/// Ordered, read-only view over a graph.
///
/// # Ordering contract
///
/// Implementations must enumerate vertices and edges in a stable order
/// (insertion order, for example). Exported numeric ids are assigned in
/// vertex enumeration order, so an unstable order yields unstable output.
/// Vertex identifiers must be unique, and every edge endpoint must be one of
/// the enumerated vertices.
pub trait GraphView {
    /// Vertex identifier type.
    type Id: Eq + Hash + Display;
    /// Vertex type yielded by [`GraphView::vertices`].
    type Vertex: VertexView<Id = Self::Id>;
    /// Edge type yielded by [`GraphView::edges`].
    type Edge: EdgeView<Id = Self::Id>;

    /// All vertices, in stable enumeration order.
    fn vertices(&self) -> impl Iterator<Item = &Self::Vertex>;

    /// All edges, in stable enumeration order.
    fn edges(&self) -> impl Iterator<Item = &Self::Edge>;

    /// Number of vertices.
    fn vertex_count(&self) -> usize {
        self.vertices().count()
    }

    /// Number of edges.
    fn edge_count(&self) -> usize {
        self.edges().count()
    }
}
