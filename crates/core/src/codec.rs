//! Document entry points: XML text to [`ProcessDefinition`] and back.
//!
//! Parsing is one depth-first pass over the document; each `flowElements`
//! scope resolves its own transitions as it closes, and the root binding
//! numbers the container tree. Serializing is the mirror walk.

use crate::binding::Bound;
use crate::error::{ParseError, SerializeError};
use crate::model::ProcessDefinition;
use crate::options::{ParseOptions, WriteOptions};
use crate::serialize;
use crate::xml::{bind_document, tags};

/// Parse a process definition document with default options.
pub fn from_xml_str(xml: &str) -> Result<ProcessDefinition, ParseError> {
    from_xml_str_with(xml, &ParseOptions::default())
}

/// Parse a process definition document. Any error discards the whole parse.
pub fn from_xml_str_with(
    xml: &str,
    options: &ParseOptions,
) -> Result<ProcessDefinition, ParseError> {
    tracing::debug!(bytes = xml.len(), ?options, "parsing process definition");
    let definition = match bind_document(xml, options)? {
        Bound::Definition(d) => d,
        _ => {
            return Err(ParseError::structure(
                "document",
                format!("root element is not <{}>", tags::PROCESS_DEFINITION),
            ))
        }
    };
    tracing::debug!(
        name = %definition.name,
        version = %definition.version,
        containers = definition.containers().len(),
        flow_nodes = definition.flow_node_count(),
        transitions = definition.transition_count(),
        "parsed process definition"
    );
    Ok(definition)
}

/// Write a process definition document with default options.
pub fn to_xml_string(definition: &ProcessDefinition) -> Result<String, SerializeError> {
    to_xml_string_with(definition, &WriteOptions::default())
}

pub fn to_xml_string_with(
    definition: &ProcessDefinition,
    options: &WriteOptions,
) -> Result<String, SerializeError> {
    tracing::debug!(
        name = %definition.name,
        version = %definition.version,
        "serializing process definition"
    );
    let xml = serialize::write_definition(definition, options)?;
    tracing::debug!(bytes = xml.len(), "serialized process definition");
    Ok(xml)
}
