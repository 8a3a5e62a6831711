//! Public models for the calc module.
//!
//! These are transport-agnostic data structures shared between the calc module
//! and its consumers.

use std::fmt;

/// A named, persisted numeric value usable as an operand.
#[derive(Debug, Clone, PartialEq)]
pub struct Constant {
    pub name: String,
    pub value: f64,
}

impl Constant {
    #[must_use]
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// An operand as received from a caller, before resolution.
///
/// `Text` may hold a numeric literal (`"3.14"`) or a constant name (`"pi"`).
#[derive(Debug, Clone, PartialEq)]
pub enum RawOperand {
    Number(f64),
    Text(String),
}

impl From<f64> for RawOperand {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawOperand {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for RawOperand {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for RawOperand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
