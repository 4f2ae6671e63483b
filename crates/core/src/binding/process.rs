//! Process definition assembler.

use super::{Bound, ElementBinding, NamedElement, StringIndexSlot};
use crate::error::ParseError;
use crate::model::*;
use crate::xml::tags;
use crate::xml::Attributes;

/// Contents of the `dependencies` section.
#[derive(Debug, Default)]
pub struct Dependencies {
    pub parameters: Vec<Parameter>,
    pub actors: Vec<Actor>,
}

#[derive(Default)]
pub(crate) struct DependenciesBinding {
    dependencies: Dependencies,
}

impl ElementBinding for DependenciesBinding {
    fn element_tag(&self) -> &str {
        tags::DEPENDENCIES
    }

    fn set_attributes(&mut self, _: &Attributes) -> Result<(), ParseError> {
        Ok(())
    }

    fn set_child_object(&mut self, name: &str, value: Bound) -> Result<(), ParseError> {
        match name {
            tags::PARAMETERS => self.dependencies.parameters = value.into_vec(),
            tags::ACTORS => self.dependencies.actors = value.into_vec(),
            _ => {}
        }
        Ok(())
    }

    fn get_object(self: Box<Self>) -> Result<Bound, ParseError> {
        Ok(Bound::Dependencies(self.dependencies))
    }
}

#[derive(Default)]
pub(crate) struct ProcessDefinitionBinding {
    named: NamedElement,
    version: String,
    string_indexes: Vec<StringIndexSlot>,
    flow_elements: Option<FlowElementContainer>,
    dependencies: Dependencies,
    actor_initiator: Option<Actor>,
    contract: Option<Contract>,
    context: Vec<ContextEntry>,
}

impl ElementBinding for ProcessDefinitionBinding {
    fn element_tag(&self) -> &str {
        tags::PROCESS_DEFINITION
    }

    fn set_attributes(&mut self, attributes: &Attributes) -> Result<(), ParseError> {
        let tag = tags::PROCESS_DEFINITION;
        self.named = NamedElement::read(tag, attributes)?;
        self.version = super::required(tag, attributes, tags::VERSION)?.to_owned();
        if let Some(format) = attributes.get(tags::FORMAT_VERSION_ATTR) {
            if format != tags::FORMAT_VERSION {
                tracing::warn!(
                    found = format,
                    supported = tags::FORMAT_VERSION,
                    "unexpected document format version"
                );
            }
        }
        Ok(())
    }

    fn set_child_object(&mut self, name: &str, value: Bound) -> Result<(), ParseError> {
        match (name, value) {
            (tags::STRING_INDEXES, value) => self.string_indexes = value.into_vec(),
            (tags::FLOW_ELEMENTS, Bound::Container(c)) => self.flow_elements = Some(c),
            (tags::DEPENDENCIES, Bound::Dependencies(d)) => self.dependencies = d,
            (tags::ACTOR_INITIATOR, Bound::Actor(a)) => self.actor_initiator = Some(a),
            (tags::CONTRACT, Bound::Contract(c)) => self.contract = Some(c),
            (tags::CONTEXT, value) => self.context = value.into_vec(),
            _ => {}
        }
        Ok(())
    }

    fn get_object(mut self: Box<Self>) -> Result<Bound, ParseError> {
        let tag = tags::PROCESS_DEFINITION;
        let name = self.named.require_name(tag)?;
        let flow_elements = self
            .flow_elements
            .take()
            .ok_or_else(|| ParseError::structure(tag, "missing <flowElements> child"))?;

        let mut definition = ProcessDefinition::new(name, std::mem::take(&mut self.version));
        definition.id = self.named.id;
        definition.description = self.named.description.take();
        for StringIndexSlot { index, slot } in std::mem::take(&mut self.string_indexes) {
            definition.string_indexes[index - 1] = slot;
        }
        definition.parameters = std::mem::take(&mut self.dependencies.parameters);
        definition.actors = std::mem::take(&mut self.dependencies.actors);
        definition.actor_initiator = self.actor_initiator.take();
        definition.contract = self.contract.take();
        definition.context = std::mem::take(&mut self.context);
        definition.flow_elements = flow_elements;
        definition.assign_scopes();

        Ok(Bound::Definition(definition))
    }
}
