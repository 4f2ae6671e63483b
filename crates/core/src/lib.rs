#![allow(clippy::result_large_err)]
//! flowdef-core: process definition object model and XML codec.
//!
//! Reads a process definition document into a typed graph of flow nodes,
//! transitions and nested containers, and writes the graph back out in the
//! same shape.
//!
//! # Public API
//!
//! - [`from_xml_str()`] / [`from_xml_str_with()`] -- parse a document
//! - [`to_xml_string()`] / [`to_xml_string_with()`] -- write a document
//! - [`ProcessDefinition`], [`FlowElementContainer`], [`FlowNode`],
//!   [`Transition`] and the rest of [`model`]
//! - [`ParseOptions`], [`WriteOptions`] -- codec settings
//! - [`ParseError`], [`SerializeError`], [`ExpressionError`]

pub(crate) mod binding;
pub mod codec;
pub mod error;
pub mod model;
pub mod options;
mod serialize;
pub mod xml;

// ── Convenience re-exports ───────────────────────────────────────────

pub use codec::{from_xml_str, from_xml_str_with, to_xml_string, to_xml_string_with};
pub use error::{ExpressionError, ParseError, SerializeError, TransitionSide};
pub use model::{
    ContainerId, ContainerOwner, Expression, ExpressionKind, FlowElementContainer, FlowNode,
    FlowNodeId, FlowNodeKind, ProcessDefinition, Transition, TransitionId,
};
pub use options::{ParseOptions, UnresolvedTransitionPolicy, WriteOptions};
