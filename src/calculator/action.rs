//! Input events and their wire format.
//!
//! A shell sends events as `{"type": ..., "payload": {...}}` objects. They
//! decode into the closed [`Action`] enum, so the state machine only ever
//! sees well-formed input.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::state::Operation;

/// Errors produced while decoding inbound events.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("invalid digit {0:?}: expected a single 0-9 or '.'")]
    InvalidDigit(String),

    #[error("unknown operation {0:?}: expected one of + - * ÷")]
    UnknownOperation(String),

    #[error("unknown event type {0:?}")]
    UnknownEvent(String),

    #[error("event {kind:?} is missing payload field {field:?}")]
    MissingPayload {
        kind: &'static str,
        field: &'static str,
    },

    #[error("malformed event: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single key of the keypad: `0`-`9` or the decimal point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Digit(char);

impl Digit {
    pub const ZERO: Digit = Digit('0');
    pub const POINT: Digit = Digit('.');

    /// Returns `None` for anything that is not a keypad digit.
    pub fn new(c: char) -> Option<Self> {
        (c.is_ascii_digit() || c == '.').then_some(Self(c))
    }

    pub fn as_char(self) -> char {
        self.0
    }

    pub fn is_point(self) -> bool {
        self == Self::POINT
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Digit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let digit = match (chars.next(), chars.next()) {
            (Some(c), None) => Self::new(c),
            _ => None,
        };
        digit.ok_or_else(|| ParseError::InvalidDigit(s.to_string()))
    }
}

/// An input event for the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawAction", into = "RawAction")]
pub enum Action {
    AddDigit(Digit),
    ChooseOperation(Operation),
    Clear,
    DeleteDigit,
    Evaluate,
}

impl Action {
    pub const ADD_DIGIT: &'static str = "add-digit";
    pub const CHOOSE_OPERATION: &'static str = "choose-operation";
    pub const CLEAR: &'static str = "clear";
    pub const DELETE_DIGIT: &'static str = "delete_digit";
    pub const EVALUATE: &'static str = "evaluate";

    /// The wire name of this event kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AddDigit(_) => Self::ADD_DIGIT,
            Self::ChooseOperation(_) => Self::CHOOSE_OPERATION,
            Self::Clear => Self::CLEAR,
            Self::DeleteDigit => Self::DELETE_DIGIT,
            Self::Evaluate => Self::EVALUATE,
        }
    }

    /// Decode one event from its JSON wire form.
    pub fn from_json(input: &str) -> Result<Self, ParseError> {
        let raw: RawAction = serde_json::from_str(input)?;
        raw.try_into()
    }

    /// Encode this event in its JSON wire form.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&RawAction::from(*self))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddDigit(digit) => write!(f, "{}({})", self.kind(), digit),
            Self::ChooseOperation(op) => write!(f, "{}({})", self.kind(), op),
            _ => f.write_str(self.kind()),
        }
    }
}

/// Untyped event as it appears on the wire.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct RawAction {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    payload: Option<RawPayload>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct RawPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    digit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    operation: Option<String>,
}

impl TryFrom<RawAction> for Action {
    type Error = ParseError;

    fn try_from(raw: RawAction) -> Result<Self, Self::Error> {
        let payload = raw.payload.unwrap_or_default();
        match raw.kind.as_str() {
            Self::ADD_DIGIT => {
                let digit = payload.digit.ok_or(ParseError::MissingPayload {
                    kind: Self::ADD_DIGIT,
                    field: "digit",
                })?;
                Ok(Self::AddDigit(digit.parse()?))
            }
            Self::CHOOSE_OPERATION => {
                let operation = payload.operation.ok_or(ParseError::MissingPayload {
                    kind: Self::CHOOSE_OPERATION,
                    field: "operation",
                })?;
                Ok(Self::ChooseOperation(operation.parse()?))
            }
            Self::CLEAR => Ok(Self::Clear),
            Self::DELETE_DIGIT => Ok(Self::DeleteDigit),
            Self::EVALUATE => Ok(Self::Evaluate),
            other => Err(ParseError::UnknownEvent(other.to_string())),
        }
    }
}

impl From<Action> for RawAction {
    fn from(action: Action) -> Self {
        let payload = match action {
            Action::AddDigit(digit) => Some(RawPayload {
                digit: Some(digit.to_string()),
                ..RawPayload::default()
            }),
            Action::ChooseOperation(op) => Some(RawPayload {
                operation: Some(op.symbol().to_string()),
                ..RawPayload::default()
            }),
            _ => None,
        };
        Self {
            kind: action.kind().to_string(),
            payload,
        }
    }
}
