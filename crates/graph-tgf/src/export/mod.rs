//! Export module for writing graphs in interchange formats.
//!
//! Supported formats:
//! - **TGF**: Trivial Graph Format (vertex list, `#`, edge list)

pub mod label;
pub mod remap;
pub mod tgf;

pub use label::{edge_label, vertex_label, INFINITY_SYMBOL};
pub use remap::RemapTable;
pub use tgf::{LineEnding, TgfOptions, TrivialGraphFormat};

use crate::error::Result;
use crate::graph::GraphView;

/// A format that can render a whole graph into text.
pub trait Exporter {
    /// Export `graph` into a single string.
    ///
    /// The graph is only read. Nothing is returned unless the whole output
    /// was produced.
    ///
    /// # Errors
    ///
    /// Returns an error if the graph violates the [`GraphView`] contract.
    fn output<G: GraphView>(&self, graph: &G) -> Result<String>;
}

/// Export graph to Trivial Graph Format
pub fn export_tgf<G: GraphView>(graph: &G) -> Result<String> {
    TrivialGraphFormat::new().output(graph)
}

/// Export graph to Trivial Graph Format with custom options
pub fn export_tgf_with<G: GraphView>(graph: &G, options: TgfOptions) -> Result<String> {
    TrivialGraphFormat::with_options(options).output(graph)
}
