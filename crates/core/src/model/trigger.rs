//! Event triggers: what a catch event waits for and what a throw event emits.

use serde::{Deserialize, Serialize};

use super::{DataDefinition, Expression, Operation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimerType {
    Duration,
    Date,
    Cycle,
}

impl TimerType {
    pub fn as_str(self) -> &'static str {
        match self {
            TimerType::Duration => "DURATION",
            TimerType::Date => "DATE",
            TimerType::Cycle => "CYCLE",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "DURATION" => Some(TimerType::Duration),
            "DATE" => Some(TimerType::Date),
            "CYCLE" => Some(TimerType::Cycle),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerTrigger {
    pub timer_type: TimerType,
    pub expression: Expression,
}

/// Key/value pair matching a message to a waiting instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Correlation {
    pub key: Expression,
    pub value: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchMessageTrigger {
    pub message_name: String,
    #[serde(default)]
    pub operations: Vec<Operation>,
    #[serde(default)]
    pub correlations: Vec<Correlation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThrowMessageTrigger {
    pub message_name: String,
    pub target_process: Expression,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_flow_node: Option<Expression>,
    #[serde(default)]
    pub correlations: Vec<Correlation>,
    #[serde(default)]
    pub data_definitions: Vec<DataDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalTrigger {
    pub signal_name: String,
}

/// Catches an error thrown inside the attached activity. No code catches all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatchErrorTrigger {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrowErrorTrigger {
    pub error_code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminateTrigger;
