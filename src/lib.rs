//! Four-function calculator core.
//!
//! Shells dispatch [`Action`]s into a [`Calculator`] (or call [`transition`]
//! directly) and render the [`CalculatorDisplay`] of the resulting state.
//! Evaluation is strictly left to right, two operands at a time.

pub mod calculator;
pub mod logging;

pub use calculator::{
    Action, Calculator, CalculatorDisplay, CalculatorState, Digit, Operation, ParseError,
    evaluate, format_operand, replay, transition,
};
