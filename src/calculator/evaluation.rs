//! Two-operand evaluation.
//!
//! Operands arrive as the strings the state machine accumulated. They are
//! parsed here and nowhere else, and the result goes back into the state as a
//! string again.

use super::state::Operation;

/// Text of a positive infinite result.
pub const INFINITY: &str = "Infinity";
/// Text of a NaN result.
pub const NAN: &str = "NaN";

/// Evaluate `previous <operation> current` and render the result.
///
/// Returns an empty string if either operand is not a number (a lone `"."`,
/// an empty operand, or an earlier `NaN`).
pub fn evaluate(previous: &str, current: &str, operation: Operation) -> String {
    compute(previous, current, operation)
        .map(canonical)
        .unwrap_or_default()
}

/// Evaluate `previous <operation> current` numerically.
pub fn compute(previous: &str, current: &str, operation: Operation) -> Option<f64> {
    let (Some(lhs), Some(rhs)) = (parse_operand(previous), parse_operand(current)) else {
        tracing::debug!(previous, current, %operation, "operand is not a number");
        return None;
    };
    Some(operation.apply(lhs, rhs))
}

/// Parse an operand string.
///
/// Accepts what the calculator can hold: digits with at most one decimal point
/// and at least one digit (`"5"`, `"5."`, `".5"`), an optional leading minus
/// from an earlier subtraction, and an earlier infinite result. Exponents,
/// whitespace and `NaN` are rejected.
pub fn parse_operand(operand: &str) -> Option<f64> {
    let unsigned = operand.strip_prefix('-').unwrap_or(operand);

    if unsigned == INFINITY {
        return Some(if unsigned.len() == operand.len() {
            f64::INFINITY
        } else {
            f64::NEG_INFINITY
        });
    }

    let mut digits = 0;
    let mut points = 0;
    for c in unsigned.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => points += 1,
            _ => return None,
        }
    }
    if digits == 0 || points > 1 {
        return None;
    }

    operand.parse().ok()
}

/// Render a number the way it is stored back into the state.
///
/// Finite values use the shortest decimal that round-trips, with no exponent
/// and no rounding. Negative zero renders as `"0"`.
pub fn canonical(value: f64) -> String {
    if value.is_nan() {
        NAN.to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            INFINITY.to_string()
        } else {
            format!("-{}", INFINITY)
        }
    } else if value == 0.0 {
        "0".to_string()
    } else {
        format!("{}", value)
    }
}
