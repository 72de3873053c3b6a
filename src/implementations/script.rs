use std::fs;
use std::path::Path;

use serde::{ Deserialize, Serialize };
use serde_json::Value;
use thiserror::Error;

use crate::implementations::dispatcher::{ Invocation, RegistryName };
use crate::models::common::Principal;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read script: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse script: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Step {step} ({operation}) has no sender and the script sets no default")]
    MissingSender { step: usize, operation: String },
}

/// A sequence of invocations to apply in order against a fresh ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    /// Sender used by steps that do not name their own
    #[serde(default)]
    pub sender: Option<Principal>,

    #[serde(default)]
    pub steps: Vec<ScriptStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptStep {
    pub registry: RegistryName,
    pub operation: String,
    #[serde(default)]
    pub args: Vec<Value>,
    #[serde(default)]
    pub sender: Option<Principal>,
}

impl ReplayScript {
    pub fn from_yaml_str(contents: &str) -> Result<Self, ScriptError> {
        Ok(serde_yaml::from_str(contents)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ScriptError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Resolve every step into an invocation, filling in the default sender.
    /// Step numbers in errors are 1-based.
    pub fn invocations(&self) -> Result<Vec<Invocation>, ScriptError> {
        self.steps
            .iter()
            .enumerate()
            .map(|(index, step)| {
                let sender = step.sender
                    .clone()
                    .or_else(|| self.sender.clone())
                    .ok_or_else(|| ScriptError::MissingSender {
                        step: index + 1,
                        operation: step.operation.clone(),
                    })?;
                Ok(Invocation {
                    registry: step.registry,
                    operation: step.operation.clone(),
                    args: step.args.clone(),
                    sender,
                })
            })
            .collect()
    }
}
