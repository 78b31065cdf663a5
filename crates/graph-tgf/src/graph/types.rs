//! Core graph types: vertices, edges and edge endpoints.

use super::number::Number;
use super::{EdgeView, VertexView};
use serde::{Deserialize, Serialize};

/// The two endpoints of an edge together with its directedness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Endpoints<Id> {
    /// Edge from `from` to `to`
    Directed {
        /// Source vertex
        from: Id,
        /// Target vertex
        to: Id,
    },
    /// Edge between `a` and `b`; the stored order is arbitrary but stable
    Undirected {
        /// First stored endpoint
        a: Id,
        /// Second stored endpoint
        b: Id,
    },
}

impl<Id> Endpoints<Id> {
    /// Borrow both endpoints.
    pub fn by_ref(&self) -> Endpoints<&Id> {
        match self {
            Endpoints::Directed { from, to } => Endpoints::Directed { from, to },
            Endpoints::Undirected { a, b } => Endpoints::Undirected { a, b },
        }
    }

    /// Both endpoints in stored order.
    pub fn pair(&self) -> (&Id, &Id) {
        match self {
            Endpoints::Directed { from, to } => (from, to),
            Endpoints::Undirected { a, b } => (a, b),
        }
    }

    /// Check whether this is a directed edge.
    pub fn is_directed(&self) -> bool {
        matches!(self, Endpoints::Directed { .. })
    }
}

/// A vertex with an opaque identifier and an optional balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex<Id> {
    /// Unique identifier, also the default label
    pub id: Id,
    /// Supply (positive) or demand (negative) of a flow network
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<Number>,
}

impl<Id> Vertex<Id> {
    /// Create a vertex without a balance.
    pub fn new(id: Id) -> Self {
        Self { id, balance: None }
    }

    /// Builder pattern: set the balance and return self.
    pub fn with_balance(mut self, balance: impl Into<Number>) -> Self {
        self.balance = Some(balance.into());
        self
    }
}

impl<Id> VertexView for Vertex<Id> {
    type Id = Id;

    fn id(&self) -> &Id {
        &self.id
    }

    fn balance(&self) -> Option<Number> {
        self.balance
    }
}

/// An edge with optional capacity, flow and weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<Id> {
    /// Endpoints and directedness
    #[serde(flatten)]
    pub endpoints: Endpoints<Id>,
    /// Maximum flow; `None` means unbounded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<Number>,
    /// Current flow
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flow: Option<Number>,
    /// Edge weight (cost, distance)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Number>,
}

impl<Id> Edge<Id> {
    /// Create an edge with the given endpoints and no attributes.
    pub fn new(endpoints: Endpoints<Id>) -> Self {
        Self {
            endpoints,
            capacity: None,
            flow: None,
            weight: None,
        }
    }

    /// Create a directed edge `from -> to`.
    pub fn directed(from: Id, to: Id) -> Self {
        Self::new(Endpoints::Directed { from, to })
    }

    /// Create an undirected edge `a -- b`.
    pub fn undirected(a: Id, b: Id) -> Self {
        Self::new(Endpoints::Undirected { a, b })
    }

    /// Builder pattern: set the capacity.
    pub fn with_capacity(mut self, capacity: impl Into<Number>) -> Self {
        self.capacity = Some(capacity.into());
        self
    }

    /// Builder pattern: set the flow.
    pub fn with_flow(mut self, flow: impl Into<Number>) -> Self {
        self.flow = Some(flow.into());
        self
    }

    /// Builder pattern: set the weight.
    pub fn with_weight(mut self, weight: impl Into<Number>) -> Self {
        self.weight = Some(weight.into());
        self
    }
}

impl<Id> EdgeView for Edge<Id> {
    type Id = Id;

    fn endpoints(&self) -> Endpoints<&Id> {
        self.endpoints.by_ref()
    }

    fn capacity(&self) -> Option<Number> {
        self.capacity
    }

    fn flow(&self) -> Option<Number> {
        self.flow
    }

    fn weight(&self) -> Option<Number> {
        self.weight
    }
}
