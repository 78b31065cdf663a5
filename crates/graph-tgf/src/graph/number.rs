//! Numeric attribute values for vertices and edges.
//!
//! Attributes such as balance, capacity, flow and weight are stored as
//! `Option<Number>`: `None` means the attribute was never set, which is
//! different from an explicit zero.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A numeric attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    /// Integer value (unit capacities, counts, balances)
    Int(i64),
    /// Floating point value (fractional weights or flows)
    Float(f64),
}

impl Number {
    /// Returns `true` if the value is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        match *self {
            Number::Int(i) => i > 0,
            Number::Float(f) => f > 0.0,
        }
    }
}

/// Natural decimal text: whole values carry no fractional part, `-0.0`
/// prints as `0` and infinities use the `∞` glyph.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::Int(i) => write!(f, "{i}"),
            Number::Float(v) if v == 0.0 => f.write_str("0"),
            Number::Float(v) if v == f64::INFINITY => f.write_str("∞"),
            Number::Float(v) if v == f64::NEG_INFINITY => f.write_str("-∞"),
            Number::Float(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Int(value as i64)
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Int(value as i64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}
