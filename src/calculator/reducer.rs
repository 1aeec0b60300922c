//! The calculator state machine.
//!
//! `transition` maps a state and an action to the next state. It never fails:
//! input that cannot apply to the current state returns the state unchanged.

use tracing::{debug, trace};

use super::action::{Action, Digit};
use super::evaluation::evaluate;
use super::state::{CalculatorState, Operation};

/// Compute the state that follows `state` after `action`.
pub fn transition(state: &CalculatorState, action: &Action) -> CalculatorState {
    let next = match *action {
        Action::AddDigit(digit) => add_digit(state, digit),
        Action::ChooseOperation(operation) => choose_operation(state, operation),
        Action::Clear => CalculatorState::empty(),
        Action::DeleteDigit => delete_digit(state),
        Action::Evaluate => evaluate_pending(state),
    };
    trace!(%action, ?next, "transition");
    next
}

/// Apply a sequence of actions starting from the empty state.
pub fn replay<'a>(actions: impl IntoIterator<Item = &'a Action>) -> CalculatorState {
    actions
        .into_iter()
        .fold(CalculatorState::empty(), |state, action| {
            transition(&state, action)
        })
}

fn add_digit(state: &CalculatorState, digit: Digit) -> CalculatorState {
    if state.overwrite {
        return CalculatorState {
            current_operand: Some(digit.to_string()),
            overwrite: false,
            ..state.clone()
        };
    }

    let current = state.current_operand().unwrap_or("");
    if digit == Digit::ZERO && current == "0" {
        debug!("ignoring repeated leading zero");
        return state.clone();
    }
    if digit.is_point() && current.contains('.') {
        debug!(current, "operand already has a decimal point");
        return state.clone();
    }

    let mut operand = String::with_capacity(current.len() + 1);
    operand.push_str(current);
    operand.push(digit.as_char());

    CalculatorState {
        current_operand: Some(operand),
        ..state.clone()
    }
}

fn choose_operation(state: &CalculatorState, operation: Operation) -> CalculatorState {
    match (&state.current_operand, &state.previous_operand) {
        (None, None) => {
            debug!(%operation, "no operand to apply the operation to");
            state.clone()
        }
        // Operator pressed again before a new operand: replace it.
        (None, Some(_)) => CalculatorState {
            operation: Some(operation),
            ..state.clone()
        },
        (Some(current), None) => CalculatorState {
            previous_operand: Some(current.clone()),
            current_operand: None,
            operation: Some(operation),
            ..state.clone()
        },
        // A pending operation is folded in first: strict left-to-right.
        (Some(current), Some(previous)) => {
            let previous = match state.operation {
                Some(pending) => evaluate(previous, current, pending),
                None => String::new(),
            };
            CalculatorState {
                previous_operand: Some(previous),
                current_operand: None,
                operation: Some(operation),
                ..state.clone()
            }
        }
    }
}

fn delete_digit(state: &CalculatorState) -> CalculatorState {
    if state.overwrite {
        return CalculatorState {
            current_operand: None,
            overwrite: false,
            ..state.clone()
        };
    }

    let Some(current) = state.current_operand() else {
        debug!("nothing to delete");
        return state.clone();
    };

    let mut chars = current.chars();
    let current_operand = match (chars.next_back(), chars.as_str()) {
        (Some(_), "") => None,
        (_, remaining) => Some(remaining.to_string()),
    };

    CalculatorState {
        current_operand,
        ..state.clone()
    }
}

fn evaluate_pending(state: &CalculatorState) -> CalculatorState {
    let (Some(operation), Some(current), Some(previous)) = (
        state.operation,
        state.current_operand(),
        state.previous_operand(),
    ) else {
        debug!("expression incomplete, nothing to evaluate");
        return state.clone();
    };

    CalculatorState {
        current_operand: Some(evaluate(previous, current, operation)),
        previous_operand: None,
        operation: None,
        overwrite: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(c: char) -> Action {
        Action::AddDigit(Digit::new(c).unwrap())
    }

    fn digits(s: &str) -> Vec<Action> {
        s.chars().map(digit).collect()
    }

    fn op(operation: Operation) -> Action {
        Action::ChooseOperation(operation)
    }

    fn with_current(operand: &str) -> CalculatorState {
        CalculatorState {
            current_operand: Some(operand.to_string()),
            ..CalculatorState::empty()
        }
    }

    #[test]
    fn test_digit_on_absent_operand_starts_it() {
        for c in "0123456789.".chars() {
            let next = transition(&CalculatorState::empty(), &digit(c));
            assert_eq!(next.current_operand(), Some(c.to_string().as_str()));
        }
    }

    #[test]
    fn test_digits_append() {
        let state = replay(&digits("12.05"));
        assert_eq!(state.current_operand(), Some("12.05"));
    }

    #[test]
    fn test_repeated_zero_is_noop() {
        let state = with_current("0");
        assert_eq!(transition(&state, &digit('0')), state);
        // Only a lone zero is protected.
        let state = with_current("10");
        assert_eq!(transition(&state, &digit('0')).current_operand(), Some("100"));
    }

    #[test]
    fn test_second_decimal_point_is_noop() {
        let state = with_current("3.1");
        assert_eq!(transition(&state, &digit('.')), state);
        let state = with_current(".");
        assert_eq!(transition(&state, &digit('.')), state);
    }

    #[test]
    fn test_transition_does_not_touch_input() {
        let state = with_current("4");
        let snapshot = state.clone();
        let _ = transition(&state, &digit('2'));
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_choose_operation_without_operands_is_noop() {
        let state = CalculatorState::empty();
        assert_eq!(transition(&state, &op(Operation::Add)), state);
    }

    #[test]
    fn test_first_operation_moves_current_to_previous() {
        let mut actions = digits("12");
        actions.push(op(Operation::Multiply));
        let state = replay(&actions);
        assert_eq!(state.previous_operand(), Some("12"));
        assert_eq!(state.current_operand(), None);
        assert_eq!(state.operation, Some(Operation::Multiply));
    }

    #[test]
    fn test_operation_can_be_changed() {
        let state = replay(&[digit('7'), op(Operation::Add), op(Operation::Divide)]);
        assert_eq!(state.previous_operand(), Some("7"));
        assert_eq!(state.operation, Some(Operation::Divide));
        assert_eq!(state.current_operand(), None);
    }

    #[test]
    fn test_clear_from_any_state() {
        let traces = [
            vec![],
            digits("42"),
            vec![digit('5'), op(Operation::Add)],
            vec![digit('5'), op(Operation::Add), digit('3')],
            vec![digit('5'), op(Operation::Add), digit('3'), Action::Evaluate],
        ];
        for trace in traces {
            let state = replay(&trace);
            let cleared = transition(&state, &Action::Clear);
            assert!(cleared.is_empty(), "clear after {:?}", trace);
        }
    }

    #[test]
    fn test_delete_single_char_clears_operand() {
        let next = transition(&with_current("5"), &Action::DeleteDigit);
        assert_eq!(next.current_operand, None);
    }

    #[test]
    fn test_delete_drops_last_char() {
        let next = transition(&with_current("12"), &Action::DeleteDigit);
        assert_eq!(next.current_operand(), Some("1"));
        let next = transition(&with_current("3."), &Action::DeleteDigit);
        assert_eq!(next.current_operand(), Some("3"));
    }

    #[test]
    fn test_delete_without_operand_is_noop() {
        let state = replay(&[digit('9'), op(Operation::Subtract)]);
        assert_eq!(transition(&state, &Action::DeleteDigit), state);
    }

    #[test]
    fn test_delete_after_result_starts_fresh() {
        let state = replay(&[digit('5'), op(Operation::Add), digit('3'), Action::Evaluate]);
        let next = transition(&state, &Action::DeleteDigit);
        assert_eq!(next.current_operand, None);
        assert!(!next.overwrite);
    }

    #[test]
    fn test_evaluate_incomplete_is_noop() {
        for trace in [
            vec![],
            digits("5"),
            vec![digit('5'), op(Operation::Add)],
        ] {
            let state = replay(&trace);
            assert_eq!(transition(&state, &Action::Evaluate), state);
        }
    }

    #[test]
    fn test_simple_evaluation() {
        let state = replay(&[digit('5'), op(Operation::Add), digit('3'), Action::Evaluate]);
        assert_eq!(
            state,
            CalculatorState {
                current_operand: Some("8".into()),
                previous_operand: None,
                operation: None,
                overwrite: true,
            }
        );
    }

    #[test]
    fn test_digit_after_result_overwrites() {
        let state = replay(&[
            digit('5'),
            op(Operation::Add),
            digit('3'),
            Action::Evaluate,
            digit('2'),
        ]);
        assert_eq!(state.current_operand(), Some("2"));
        assert!(!state.overwrite);
    }

    #[test]
    fn test_overwrite_ignores_zero_and_point_rules() {
        let state = CalculatorState {
            current_operand: Some("0".into()),
            overwrite: true,
            ..CalculatorState::empty()
        };
        assert_eq!(transition(&state, &digit('0')).current_operand(), Some("0"));
        assert!(!transition(&state, &digit('0')).overwrite);
    }

    #[test]
    fn test_chained_operations_evaluate_left_to_right() {
        let state = replay(&[
            digit('5'),
            op(Operation::Add),
            digit('3'),
            op(Operation::Multiply),
        ]);
        assert_eq!(state.previous_operand(), Some("8"));
        assert_eq!(state.operation, Some(Operation::Multiply));
        assert_eq!(state.current_operand(), None);

        let state = transition(&transition(&state, &digit('2')), &Action::Evaluate);
        assert_eq!(state.current_operand(), Some("16"));
    }

    #[test]
    fn test_result_can_start_a_new_chain() {
        let state = replay(&[
            digit('5'),
            op(Operation::Add),
            digit('3'),
            Action::Evaluate,
            op(Operation::Subtract),
            digit('1'),
            digit('0'),
            Action::Evaluate,
        ]);
        assert_eq!(state.current_operand(), Some("-2"));
    }

    #[test]
    fn test_division_by_zero() {
        let state = replay(&[digit('5'), op(Operation::Divide), digit('0'), Action::Evaluate]);
        assert_eq!(state.current_operand(), Some("Infinity"));
    }

    #[test]
    fn test_invalid_operand_chains_as_empty() {
        let state = replay(&[
            digit('.'),
            op(Operation::Add),
            digit('1'),
            op(Operation::Add),
        ]);
        assert_eq!(state.previous_operand(), Some(""));

        let state = replay(&[digit('.'), op(Operation::Add), digit('1'), Action::Evaluate]);
        assert_eq!(state.current_operand(), Some(""));
        assert!(state.overwrite);
    }

    #[test]
    fn test_replay_is_deterministic() {
        let trace = [
            digit('1'),
            digit('.'),
            digit('5'),
            op(Operation::Multiply),
            digit('4'),
            op(Operation::Divide),
            digit('3'),
            Action::Evaluate,
            Action::DeleteDigit,
            digit('9'),
        ];
        assert_eq!(replay(&trace), replay(&trace));
        assert_eq!(replay(&trace).current_operand(), Some("9"));
    }
}
