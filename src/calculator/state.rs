//! Calculator state and the binary operations it can hold.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::action::ParseError;

/// A pending binary operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All operations, in the order a keypad lists them.
    pub const ALL: [Operation; 4] = [Self::Divide, Self::Multiply, Self::Add, Self::Subtract];

    /// The symbol shown next to the previous operand.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "÷",
        }
    }

    /// Apply the operation with IEEE-754 semantics.
    ///
    /// Division by zero is not intercepted and yields an infinity or NaN.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| ParseError::UnknownOperation(s.to_string()))
    }
}

impl TryFrom<String> for Operation {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Operation> for String {
    fn from(op: Operation) -> Self {
        op.symbol().to_string()
    }
}

/// The whole calculator state.
///
/// Every transition builds a new value; nothing is mutated in place. Operands
/// stay strings so that an in-progress `"12."` survives until the evaluator
/// parses it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculatorState {
    /// Operand being typed, or the last result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_operand: Option<String>,
    /// Operand captured before the pending operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_operand: Option<String>,
    /// Pending operation, if one has been chosen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<Operation>,
    /// Set right after an evaluation: the next digit replaces the result
    /// instead of appending to it.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub overwrite: bool,
}

impl CalculatorState {
    /// The initial and post-clear state.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check whether no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::empty()
    }

    pub fn current_operand(&self) -> Option<&str> {
        self.current_operand.as_deref()
    }

    pub fn previous_operand(&self) -> Option<&str> {
        self.previous_operand.as_deref()
    }
}
