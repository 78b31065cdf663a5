//! Dense renumbering of vertex identifiers.

use crate::error::{Result, TgfError};
use crate::graph::{GraphView, VertexView};
use log::warn;
use std::collections::HashMap;
use std::hash::Hash;

/// Maps original vertex identifiers to sequential ids `1..=N`.
///
/// Ids are handed out in vertex enumeration order. The table borrows the
/// identifiers from the graph and lives for a single export.
#[derive(Debug)]
pub struct RemapTable<'g, Id> {
    ids: HashMap<&'g Id, usize>,
    next: usize,
}

impl<'g, Id> RemapTable<'g, Id>
where
    Id: Eq + Hash + std::fmt::Display,
{
    /// Number every vertex of `graph` in enumeration order.
    pub fn build<G>(graph: &'g G) -> Self
    where
        G: GraphView<Id = Id>,
    {
        let mut table = Self {
            ids: HashMap::with_capacity(graph.vertex_count()),
            next: 1,
        };
        for vertex in graph.vertices() {
            table.assign(vertex.id());
        }
        table
    }

    fn assign(&mut self, id: &'g Id) {
        let tid = self.next;
        self.next += 1;
        if self.ids.contains_key(id) {
            // Keep the first number; the duplicate still consumes one so that
            // vertex lines stay numbered 1..N.
            warn!("Duplicate vertex id {id} while numbering TGF output");
        } else {
            self.ids.insert(id, tid);
        }
    }

    /// Look up the numeric id of a vertex.
    pub fn get(&self, id: &Id) -> Option<usize> {
        self.ids.get(id).copied()
    }

    /// Look up the numeric id of an edge endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`TgfError::UnknownVertex`] if the vertex was never numbered.
    pub fn resolve(&self, id: &Id) -> Result<usize> {
        self.get(id).ok_or_else(|| TgfError::unknown_vertex(id))
    }

    /// Number of ids handed out.
    pub fn len(&self) -> usize {
        self.next - 1
    }

    /// Check whether no vertex was numbered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
