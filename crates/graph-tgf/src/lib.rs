//! # graph-tgf
//!
//! Export directed and undirected graphs to the Trivial Graph Format (TGF).
//!
//! ## Core Principles
//!
//! - **Read Only**: Exporters never mutate the graph they are given
//! - **Deterministic**: The same graph snapshot always yields the same bytes
//! - **Bring Your Own Graph**: Implement [`GraphView`] for any ordered store
//! - **Fail Fast**: Dangling edge endpoints abort the export
//!
//! ## Architecture
//!
//! ```text
//! Exporter (TrivialGraphFormat)
//!     ↓
//! Identifier Remapper → Vertex / Edge Label Builders
//!     ↓
//! GraphView (MemoryGraph or your own store)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use graph_tgf::{Edge, Exporter, LineEnding, MemoryGraph, TgfOptions, TrivialGraphFormat};
//!
//! let mut graph = MemoryGraph::new();
//! graph.add_vertex("a").unwrap();
//! graph.add_vertex("b").unwrap();
//! graph.add_edge(Edge::directed("a", "b")).unwrap();
//!
//! let exporter = TrivialGraphFormat::with_options(TgfOptions {
//!     line_ending: LineEnding::Lf,
//! });
//! assert_eq!(exporter.output(&graph).unwrap(), "1 a\n2 b\n#\n1 2\n");
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod export;
pub mod graph;

// Re-export main types
pub use error::{Result, TgfError};
pub use export::{
    export_tgf, export_tgf_with, Exporter, LineEnding, RemapTable, TgfOptions,
    TrivialGraphFormat,
};
pub use graph::{Edge, EdgeView, Endpoints, GraphView, MemoryGraph, Number, Vertex, VertexView};
