//! Display formatting for operands.
//!
//! The integer part gets en-US thousands separators; whatever follows the
//! first decimal point is shown exactly as typed, including a bare trailing
//! point the user has not followed with a digit yet.

use super::evaluation::{INFINITY, NAN};

/// Format an operand for display.
///
/// Returns `None` for an absent operand. An empty operand (the result of an
/// invalid evaluation) renders blank.
pub fn format_operand(operand: Option<&str>) -> Option<String> {
    let operand = operand?;
    if operand.is_empty() {
        return Some(String::new());
    }

    // A fractional operand keeps its sign even when the integer part is zero.
    let (sign, unsigned) = match operand.strip_prefix('-') {
        Some(rest) if rest.contains('.') => ("-", rest),
        _ => ("", operand),
    };

    let formatted = match unsigned.split_once('.') {
        Some((integer, fraction)) => format!(
            "{}{}.{}",
            sign,
            format_with_separators(integer),
            fraction
        ),
        None => format_with_separators(unsigned),
    };
    Some(formatted)
}

/// Format an integer string with thousand separators.
///
/// Leading zeros collapse and an empty integer part renders as `0`. Digits
/// are grouped as written, so long operands keep every digit. The `Infinity`
/// and `NaN` sentinels pass through unchanged.
pub fn format_with_separators(integer: &str) -> String {
    let (is_negative, magnitude) = match integer.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, integer),
    };

    if magnitude == INFINITY || magnitude == NAN {
        return integer.to_string();
    }

    let digits = magnitude.trim_start_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };

    let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    let formatted: String = result.chars().rev().collect();
    if is_negative && formatted != "0" {
        format!("-{}", formatted)
    } else {
        formatted
    }
}
