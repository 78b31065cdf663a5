//! Vertex and edge label composition.
//!
//! TGF has no structured attributes, so the numeric attributes are folded
//! into the free-text label of each line. Labels are not escaped: an
//! identifier containing a newline will corrupt the exported text.

use crate::graph::{EdgeView, Number, VertexView};
use std::fmt::Display;

/// Symbol printed for an absent (unbounded) capacity next to a flow.
pub const INFINITY_SYMBOL: &str = "∞";

/// Build the label for a vertex.
///
/// The label is the identifier, followed by ` (<balance>)` when a balance is
/// set. Positive balances get an explicit `+`; a zero balance is still shown.
/// Vertex groups are not rendered.
pub fn vertex_label<V>(vertex: &V) -> String
where
    V: VertexView,
    V::Id: Display,
{
    let mut label = vertex.id().to_string();

    if let Some(balance) = vertex.balance() {
        let sign = if balance.is_positive() { "+" } else { "" };
        label.push_str(&format!(" ({sign}{balance})"));
    }

    label
}

/// Build the label for an edge; empty when nothing is worth describing.
///
/// Precedence:
/// 1. `flow/capacity` when a flow is set (`∞` for an absent capacity), or
///    `0/capacity` when only a capacity is set;
/// 2. the weight, alone or appended as `/weight`.
pub fn edge_label<E: EdgeView>(edge: &E) -> String {
    let mut label = match (edge.flow(), edge.capacity()) {
        (Some(flow), capacity) => format!("{flow}/{}", capacity_text(capacity)),
        (None, Some(capacity)) => format!("0/{capacity}"),
        (None, None) => String::new(),
    };

    if let Some(weight) = edge.weight() {
        if !label.is_empty() {
            label.push('/');
        }
        label.push_str(&weight.to_string());
    }

    label
}

fn capacity_text(capacity: Option<Number>) -> String {
    match capacity {
        Some(capacity) => capacity.to_string(),
        None => INFINITY_SYMBOL.to_string(),
    }
}
