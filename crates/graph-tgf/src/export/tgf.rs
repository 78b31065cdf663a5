//! Trivial Graph Format (TGF) export.
//!
//! TGF is a vertex list, a `#` separator line and an edge list:
//!
//! ```text
//! 1 a
//! 2 b
//! #
//! 1 2
//! ```
//!
//! Vertex identifiers are replaced by dense numeric ids, attributes are folded
//! into labels (see [`super::label`]), and since TGF only knows directed
//! edges, every undirected edge is written as two opposing lines with the same
//! label.

use super::label::{edge_label, vertex_label};
use super::remap::RemapTable;
use super::Exporter;
use crate::error::{Result, TgfError};
use crate::graph::{EdgeView, Endpoints, GraphView};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;

/// Line terminator used for every line of one export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// `\n`
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineEnding {
    /// The conventional line ending of the current platform.
    pub fn platform() -> Self {
        if cfg!(windows) {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }

    /// The terminator as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

impl Default for LineEnding {
    fn default() -> Self {
        Self::platform()
    }
}

/// Options for TGF export
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TgfOptions {
    /// Line terminator; defaults to the platform convention
    pub line_ending: LineEnding,
}

/// Exporter producing Trivial Graph Format text.
///
/// The exporter holds no per-export state and can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct TrivialGraphFormat {
    options: TgfOptions,
}

impl TrivialGraphFormat {
    /// Create an exporter with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an exporter with custom options.
    pub fn with_options(options: TgfOptions) -> Self {
        Self { options }
    }

    /// Stream the export of `graph` into `writer`, line by line.
    ///
    /// Lines are written in the same order as [`Exporter::output`]. If an
    /// edge references an unknown vertex the export stops before that edge's
    /// line, so earlier lines may already have been written.
    ///
    /// # Errors
    ///
    /// Returns [`TgfError::UnknownVertex`] for a dangling edge endpoint and
    /// [`TgfError::Io`] if the writer fails.
    pub fn write_to<G, W>(&self, graph: &G, writer: W) -> Result<()>
    where
        G: GraphView,
        W: io::Write,
    {
        let mut sink = IoSink {
            inner: writer,
            error: None,
        };

        match self.emit(graph, &mut sink) {
            Err(TgfError::Format { .. }) if sink.error.is_some() => {
                return Err(TgfError::io("Failed to write TGF output", sink.error.take()));
            }
            other => other?,
        }

        sink.inner
            .flush()
            .map_err(|e| TgfError::io("Failed to flush TGF output", Some(e)))
    }

    fn emit<G, W>(&self, graph: &G, out: &mut W) -> Result<()>
    where
        G: GraphView,
        W: fmt::Write,
    {
        let eol = self.options.line_ending.as_str();
        debug!(
            "Exporting TGF: {} vertices, {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );

        let remap = RemapTable::build(graph);

        for (tid, vertex) in (1usize..).zip(graph.vertices()) {
            write!(out, "{tid} {}{eol}", vertex_label(vertex))?;
        }

        // end of vertex list, start of edge list
        write!(out, "#{eol}")?;

        let mut lines = 0usize;
        for edge in graph.edges() {
            let label = edge_label(edge);
            let label = if label.is_empty() {
                label
            } else {
                format!(" {label}")
            };

            match edge.endpoints() {
                Endpoints::Directed { from, to } => {
                    let (a, b) = (remap.resolve(from)?, remap.resolve(to)?);
                    write!(out, "{a} {b}{label}{eol}")?;
                    lines += 1;
                }
                Endpoints::Undirected { a, b } => {
                    let (a, b) = (remap.resolve(a)?, remap.resolve(b)?);
                    trace!("Expanding undirected edge {a} -- {b} into two lines");
                    write!(out, "{a} {b}{label}{eol}")?;
                    write!(out, "{b} {a}{label}{eol}")?;
                    lines += 2;
                }
            }
        }

        debug!("TGF export finished: {} vertex lines, {lines} edge lines", remap.len());
        Ok(())
    }
}

impl Exporter for TrivialGraphFormat {
    fn output<G: GraphView>(&self, graph: &G) -> Result<String> {
        let mut output = String::new();
        self.emit(graph, &mut output)?;
        Ok(output)
    }
}

/// Adapts an `io::Write` to `fmt::Write`, keeping the underlying I/O error.
struct IoSink<W> {
    inner: W,
    error: Option<io::Error>,
}

impl<W: io::Write> fmt::Write for IoSink<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|e| {
            self.error = Some(e);
            fmt::Error
        })
    }
}
