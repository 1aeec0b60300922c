//! A calculator session for shells.
//!
//! Holds the single current state and swaps it for the next one on every
//! dispatched action.

use super::action::{Action, ParseError};
use super::display::CalculatorDisplay;
use super::reducer::transition;
use super::state::CalculatorState;

/// The current state of one calculator.
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    state: CalculatorState,
}

impl Calculator {
    /// Create a calculator in the empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action and return the new state.
    pub fn dispatch(&mut self, action: Action) -> &CalculatorState {
        self.state = transition(&self.state, &action);
        &self.state
    }

    /// Decode a wire event and dispatch it.
    ///
    /// On a decode error the state is left unchanged.
    pub fn dispatch_json(&mut self, event: &str) -> Result<&CalculatorState, ParseError> {
        match Action::from_json(event) {
            Ok(action) => Ok(self.dispatch(action)),
            Err(e) => {
                tracing::warn!(error = %e, event, "rejected calculator event");
                Err(e)
            }
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// The output lines for the current state.
    pub fn display(&self) -> CalculatorDisplay {
        CalculatorDisplay::from_state(&self.state)
    }

    /// Return to the empty state.
    pub fn reset(&mut self) {
        self.state = CalculatorState::empty();
    }
}
