//! What a shell shows for a given state.

use serde::Serialize;
use std::fmt;

use super::formatting::format_operand;
use super::state::CalculatorState;

/// The two output lines of the calculator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorDisplay {
    /// Formatted previous operand followed by the pending operation symbol.
    pub previous_line: String,
    /// Formatted current operand.
    pub current_line: String,
}

impl CalculatorDisplay {
    /// Build the display for a state.
    pub fn from_state(state: &CalculatorState) -> Self {
        let previous = format_operand(state.previous_operand());
        let operation = state.operation.map(|op| op.symbol());

        let previous_line = match (previous, operation) {
            (Some(previous), Some(symbol)) => format!("{} {}", previous, symbol),
            (Some(previous), None) => previous,
            (None, Some(symbol)) => symbol.to_string(),
            (None, None) => String::new(),
        };

        Self {
            previous_line,
            current_line: format_operand(state.current_operand()).unwrap_or_default(),
        }
    }
}

impl From<&CalculatorState> for CalculatorDisplay {
    fn from(state: &CalculatorState) -> Self {
        Self::from_state(state)
    }
}

impl fmt::Display for CalculatorDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.previous_line, self.current_line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Operation;

    #[test]
    fn test_empty_state_is_blank() {
        let display = CalculatorDisplay::from_state(&CalculatorState::empty());
        assert_eq!(display, CalculatorDisplay::default());
        assert_eq!(display.to_string(), "\n");
    }

    #[test]
    fn test_pending_operation() {
        let state = CalculatorState {
            previous_operand: Some("1234".into()),
            operation: Some(Operation::Add),
            current_operand: Some("5".into()),
            overwrite: false,
        };
        let display = CalculatorDisplay::from_state(&state);
        assert_eq!(display.previous_line, "1,234 +");
        assert_eq!(display.current_line, "5");
        assert_eq!(display.to_string(), "1,234 +\n5");
    }

    #[test]
    fn test_in_progress_decimal() {
        let state = CalculatorState {
            current_operand: Some("9876.".into()),
            ..CalculatorState::empty()
        };
        let display = CalculatorDisplay::from(&state);
        assert_eq!(display.previous_line, "");
        assert_eq!(display.current_line, "9,876.");
    }

    #[test]
    fn test_serializes_camel_case() {
        let state = CalculatorState {
            previous_operand: Some("8".into()),
            operation: Some(Operation::Divide),
            ..CalculatorState::empty()
        };
        let json = serde_json::to_value(CalculatorDisplay::from_state(&state)).unwrap();
        assert_eq!(json["previousLine"], "8 ÷");
        assert_eq!(json["currentLine"], "");
    }
}
