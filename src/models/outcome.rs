use std::fmt;

use serde::ser::{ Serialize, SerializeStruct, Serializer };
use serde_json::Value;

use crate::errors::RegistryError;
use crate::models::common::ErrorCode;

/// Tagged result of one invocation: `{success: true, value}` or `{success: false, error}`
#[derive(Debug, Clone, PartialEq)]
pub enum TxOutcome {
    Success(Value),
    Failure(ErrorCode),
}

impl TxOutcome {
    /// Outcome of a mutation that returns nothing beyond acceptance
    pub fn accepted() -> Self {
        TxOutcome::Success(Value::Bool(true))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TxOutcome::Success(_))
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            TxOutcome::Success(value) => Some(value),
            TxOutcome::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<ErrorCode> {
        match self {
            TxOutcome::Success(_) => None,
            TxOutcome::Failure(code) => Some(*code),
        }
    }
}

impl From<RegistryError> for TxOutcome {
    fn from(err: RegistryError) -> Self {
        TxOutcome::Failure(err.code())
    }
}

impl Serialize for TxOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TxOutcome", 2)?;
        match self {
            TxOutcome::Success(value) => {
                state.serialize_field("success", &true)?;
                state.serialize_field("value", value)?;
            }
            TxOutcome::Failure(code) => {
                state.serialize_field("success", &false)?;
                state.serialize_field("error", &code.as_u32())?;
            }
        }
        state.end()
    }
}

impl fmt::Display for TxOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxOutcome::Success(Value::Null) => write!(f, "ok (none)"),
            TxOutcome::Success(value) => write!(f, "ok {}", value),
            TxOutcome::Failure(code) => write!(f, "err {}", code),
        }
    }
}
