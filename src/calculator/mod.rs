//! Calculator core.
//!
//! This module provides:
//! - The input state machine (`transition`) over an immutable `CalculatorState`
//! - Two-operand evaluation of the pending operation
//! - Display formatting with thousand separators
//! - A `Calculator` session that shells dispatch events into

mod action;
mod display;
mod evaluation;
mod formatting;
mod reducer;
mod session;
mod state;

pub use action::{Action, Digit, ParseError};
pub use display::CalculatorDisplay;
pub use evaluation::{INFINITY, NAN, canonical, compute, evaluate, parse_operand};
pub use formatting::{format_operand, format_with_separators};
pub use reducer::{replay, transition};
pub use session::Calculator;
pub use state::{CalculatorState, Operation};
