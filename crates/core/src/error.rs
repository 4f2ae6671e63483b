use crate::model::{ExpressionKind, FlowNodeId, TransitionId};

/// Failure to build a valid [`Expression`](crate::model::Expression).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExpressionError {
    #[error("unknown expression type '{0}'")]
    UnknownType(String),

    #[error("expression '{name}' has no return type")]
    MissingReturnType { name: String },

    #[error("script expression '{name}' has no interpreter")]
    MissingInterpreter { name: String },

    #[error("expression '{name}' of type {kind} cannot declare interpreter '{interpreter}'")]
    UnexpectedInterpreter {
        name: String,
        kind: ExpressionKind,
        interpreter: String,
    },

    #[error("expression '{name}' of type {kind} has empty content")]
    EmptyContent { name: String, kind: ExpressionKind },

    #[error("constant expression '{name}' value '{content}' is not a valid {return_type}")]
    InvalidConstant {
        name: String,
        content: String,
        return_type: String,
    },
}

/// Which end of a transition failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionSide {
    Source,
    Target,
}

impl std::fmt::Display for TransitionSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransitionSide::Source => f.write_str("source"),
            TransitionSide::Target => f.write_str("target"),
        }
    }
}

/// Failure to read a process definition document. Any error aborts the
/// whole parse; nothing partially built is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("malformed document at byte {position}: {message}")]
    Xml { position: u64, message: String },

    #[error("<{element}> is missing required attribute '{attribute}'")]
    MissingAttribute { element: String, attribute: String },

    #[error("<{element}> attribute '{attribute}' has invalid value '{value}' (expected {expected})")]
    InvalidAttribute {
        element: String,
        attribute: String,
        value: String,
        expected: String,
    },

    #[error("<{element}>: {message}")]
    Structure { element: String, message: String },

    #[error("invalid expression in <{element}>: {source}")]
    Expression {
        element: String,
        #[source]
        source: ExpressionError,
    },

    #[error("transition {transition} has unresolved {side} flow node {node}")]
    UnresolvedTransition {
        transition: TransitionId,
        side: TransitionSide,
        node: FlowNodeId,
    },
}

impl ParseError {
    pub fn missing(element: &str, attribute: &str) -> Self {
        ParseError::MissingAttribute {
            element: element.to_owned(),
            attribute: attribute.to_owned(),
        }
    }

    pub fn invalid(element: &str, attribute: &str, value: &str, expected: &str) -> Self {
        ParseError::InvalidAttribute {
            element: element.to_owned(),
            attribute: attribute.to_owned(),
            value: value.to_owned(),
            expected: expected.to_owned(),
        }
    }

    pub fn structure(element: &str, message: impl Into<String>) -> Self {
        ParseError::Structure {
            element: element.to_owned(),
            message: message.into(),
        }
    }
}

/// Failure to write a process definition document.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SerializeError {
    #[error("xml writer error: {0}")]
    Xml(String),

    #[error("writer produced invalid UTF-8: {0}")]
    Utf8(String),
}
