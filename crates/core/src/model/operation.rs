use serde::{Deserialize, Serialize};

use super::Expression;

/// Target of an operation: the data, document or business object written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeftOperand {
    pub name: String,
    /// Operand category, e.g. `DATA`, `DOCUMENT`, `BUSINESS_DATA`.
    pub operand_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperatorType {
    Assignment,
    JavaMethod,
    XpathUpdateQuery,
    Deletion,
}

impl OperatorType {
    pub fn as_str(self) -> &'static str {
        match self {
            OperatorType::Assignment => "ASSIGNMENT",
            OperatorType::JavaMethod => "JAVA_METHOD",
            OperatorType::XpathUpdateQuery => "XPATH_UPDATE_QUERY",
            OperatorType::Deletion => "DELETION",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ASSIGNMENT" => Some(OperatorType::Assignment),
            "JAVA_METHOD" => Some(OperatorType::JavaMethod),
            "XPATH_UPDATE_QUERY" => Some(OperatorType::XpathUpdateQuery),
            "DELETION" => Some(OperatorType::Deletion),
            _ => None,
        }
    }
}

/// `left_operand <operator> right_operand`, applied when an activity or
/// connector completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub left_operand: LeftOperand,
    pub operator_type: OperatorType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator_input_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_operand: Option<Expression>,
}

impl Operation {
    pub fn assign(name: impl Into<String>, operand_type: impl Into<String>, value: Expression) -> Self {
        Operation {
            left_operand: LeftOperand {
                name: name.into(),
                operand_type: operand_type.into(),
            },
            operator_type: OperatorType::Assignment,
            operator: None,
            operator_input_type: None,
            right_operand: Some(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectorInput {
    pub name: String,
    pub value: Expression,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivationEvent {
    #[default]
    OnEnter,
    OnFinish,
}

impl ActivationEvent {
    pub fn as_str(self) -> &'static str {
        match self {
            ActivationEvent::OnEnter => "ON_ENTER",
            ActivationEvent::OnFinish => "ON_FINISH",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ON_ENTER" => Some(ActivationEvent::OnEnter),
            "ON_FINISH" => Some(ActivationEvent::OnFinish),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailAction {
    #[default]
    Fail,
    Ignore,
    ErrorEvent,
}

impl FailAction {
    pub fn as_str(self) -> &'static str {
        match self {
            FailAction::Fail => "FAIL",
            FailAction::Ignore => "IGNORE",
            FailAction::ErrorEvent => "ERROR_EVENT",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "FAIL" => Some(FailAction::Fail),
            "IGNORE" => Some(FailAction::Ignore),
            "ERROR_EVENT" => Some(FailAction::ErrorEvent),
            _ => None,
        }
    }
}

/// A connector invocation attached to a process or flow node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectorDefinition {
    pub name: String,
    pub connector_id: String,
    pub version: String,
    #[serde(default)]
    pub activation_event: ActivationEvent,
    #[serde(default)]
    pub fail_action: FailAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(default)]
    pub inputs: Vec<ConnectorInput>,
    #[serde(default)]
    pub outputs: Vec<Operation>,
}

/// Narrows the candidates of a human task's actor at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserFilter {
    pub name: String,
    pub filter_id: String,
    pub version: String,
    #[serde(default)]
    pub inputs: Vec<ConnectorInput>,
}
