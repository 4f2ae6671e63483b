//! Transition binding and the flow-element container assembler.

use super::{number, optional, required_number, Bound, ElementBinding};
use crate::error::ParseError;
use crate::model::*;
use crate::options::{ParseOptions, UnresolvedTransitionPolicy};
use crate::xml::tags;
use crate::xml::Attributes;

/// A transition as declared: the `id` attribute may be absent.
#[derive(Debug)]
pub struct RawTransition {
    pub id: Option<TransitionId>,
    pub name: Option<String>,
    pub source: FlowNodeId,
    pub target: FlowNodeId,
    pub condition: Option<Expression>,
}

#[derive(Default)]
pub(crate) struct TransitionBinding {
    id: Option<TransitionId>,
    name: Option<String>,
    source: u64,
    target: u64,
    condition: Option<Expression>,
}

impl ElementBinding for TransitionBinding {
    fn element_tag(&self) -> &str {
        tags::TRANSITION
    }

    fn set_attributes(&mut self, attributes: &Attributes) -> Result<(), ParseError> {
        let tag = tags::TRANSITION;
        self.id = number(tag, attributes, tags::ID)?.map(TransitionId);
        self.name = optional(attributes, tags::NAME);
        self.source = required_number(tag, attributes, tags::SOURCE)?;
        self.target = required_number(tag, attributes, tags::TARGET)?;
        Ok(())
    }

    fn set_child_object(&mut self, name: &str, value: Bound) -> Result<(), ParseError> {
        if let (tags::CONDITION, Bound::Expression(e)) = (name, value) {
            self.condition = Some(e);
        }
        Ok(())
    }

    fn get_object(self: Box<Self>) -> Result<Bound, ParseError> {
        Ok(Bound::Transition(RawTransition {
            id: self.id,
            name: self.name,
            source: FlowNodeId(self.source),
            target: FlowNodeId(self.target),
            condition: self.condition,
        }))
    }
}

/// Gathers everything declared directly in one `flowElements` scope, then
/// builds the container and resolves its transitions.
///
/// The container id and owner are placeholders until the process assembler
/// numbers the nesting tree.
pub(crate) struct FlowElementsBinding {
    options: ParseOptions,
    transitions: Vec<RawTransition>,
    flow_nodes: Vec<FlowNode>,
    connectors: Vec<ConnectorDefinition>,
    data_definitions: Vec<DataDefinition>,
    business_data_definitions: Vec<BusinessDataDefinition>,
    document_definitions: Vec<DocumentDefinition>,
    document_list_definitions: Vec<DocumentListDefinition>,
}

impl FlowElementsBinding {
    pub fn new(options: ParseOptions) -> Self {
        FlowElementsBinding {
            options,
            transitions: Vec::new(),
            flow_nodes: Vec::new(),
            connectors: Vec::new(),
            data_definitions: Vec::new(),
            business_data_definitions: Vec::new(),
            document_definitions: Vec::new(),
            document_list_definitions: Vec::new(),
        }
    }
}

impl ElementBinding for FlowElementsBinding {
    fn element_tag(&self) -> &str {
        tags::FLOW_ELEMENTS
    }

    fn set_attributes(&mut self, _: &Attributes) -> Result<(), ParseError> {
        Ok(())
    }

    fn set_child_object(&mut self, name: &str, value: Bound) -> Result<(), ParseError> {
        match name {
            tags::TRANSITIONS => self.transitions.extend(value.into_vec::<RawTransition>()),
            tags::FLOW_NODES => self.flow_nodes.extend(value.into_vec::<FlowNode>()),
            tags::CONNECTORS => self.connectors.extend(value.into_vec::<ConnectorDefinition>()),
            tags::DATA_DEFINITIONS => self.data_definitions.extend(value.into_vec::<DataDefinition>()),
            tags::BUSINESS_DATA_DEFINITIONS => self
                .business_data_definitions
                .extend(value.into_vec::<BusinessDataDefinition>()),
            tags::DOCUMENT_DEFINITIONS => self
                .document_definitions
                .extend(value.into_vec::<DocumentDefinition>()),
            tags::DOCUMENT_LIST_DEFINITIONS => self
                .document_list_definitions
                .extend(value.into_vec::<DocumentListDefinition>()),
            _ => {}
        }
        Ok(())
    }

    fn get_object(self: Box<Self>) -> Result<Bound, ParseError> {
        let this = *self;
        let mut container = FlowElementContainer::new(ContainerId::ROOT, ContainerOwner::Process);
        container.transitions = number_transitions(this.transitions)?;
        for node in this.flow_nodes {
            container.push_flow_node(node).map_err(|stray| {
                ParseError::structure(
                    tags::FLOW_NODES,
                    format!(
                        "boundary event {} must be attached to an activity",
                        stray.id
                    ),
                )
            })?;
        }
        container.connectors = this.connectors;
        container.data_definitions = this.data_definitions;
        container.business_data_definitions = this.business_data_definitions;
        container.document_definitions = this.document_definitions;
        container.document_list_definitions = this.document_list_definitions;

        let unresolved = container.resolve_transitions();
        for endpoint in &unresolved {
            match this.options.unresolved_transitions {
                UnresolvedTransitionPolicy::Reject => {
                    return Err(ParseError::UnresolvedTransition {
                        transition: endpoint.transition,
                        side: endpoint.side,
                        node: endpoint.node,
                    });
                }
                UnresolvedTransitionPolicy::Ignore => {
                    tracing::warn!(
                        transition = %endpoint.transition,
                        side = %endpoint.side,
                        node = %endpoint.node,
                        "transition endpoint not found in scope; wiring skipped"
                    );
                }
            }
        }

        tracing::trace!(
            nodes = container.node_ids().len(),
            transitions = container.transitions.len(),
            unresolved = unresolved.len(),
            "assembled flow element container"
        );
        Ok(Bound::Container(container))
    }
}

/// Keep declared ids; give each transition without one the next id above
/// every id used in the scope, in declaration order.
fn number_transitions(raw: Vec<RawTransition>) -> Result<Vec<Transition>, ParseError> {
    let mut next = match raw.iter().filter_map(|t| t.id).max() {
        Some(max) => max.0.checked_add(1),
        None => Some(1),
    };
    raw.into_iter()
        .map(|t| {
            let id = match t.id {
                Some(id) => id,
                None => {
                    let id = next.ok_or_else(|| {
                        ParseError::structure(
                            tags::TRANSITION,
                            format!(
                                "no transition id above {} is left for a transition without '{}'",
                                u64::MAX,
                                tags::ID
                            ),
                        )
                    })?;
                    next = id.checked_add(1);
                    TransitionId(id)
                }
            };
            Ok(Transition {
                id,
                name: t.name,
                source: t.source,
                target: t.target,
                condition: t.condition,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransitionSide;

    fn raw(id: Option<u64>, source: u64, target: u64) -> Bound {
        Bound::Transition(RawTransition {
            id: id.map(TransitionId),
            name: None,
            source: FlowNodeId(source),
            target: FlowNodeId(target),
            condition: None,
        })
    }

    fn assemble(options: ParseOptions, transitions: Vec<Bound>, nodes: Vec<FlowNode>) -> Result<FlowElementContainer, ParseError> {
        let mut b = Box::new(FlowElementsBinding::new(options));
        b.set_child_object(tags::TRANSITIONS, Bound::List(transitions))?;
        b.set_child_object(
            tags::FLOW_NODES,
            Bound::List(nodes.into_iter().map(Bound::FlowNode).collect()),
        )?;
        match b.get_object()? {
            Bound::Container(c) => Ok(c),
            other => panic!("expected container, got {other:?}"),
        }
    }

    #[test]
    fn missing_transition_ids_are_synthesized_above_declared_ones() {
        let c = assemble(
            ParseOptions::default(),
            vec![raw(None, 1, 2), raw(Some(7), 2, 1), raw(None, 1, 1)],
            vec![FlowNode::start_event(1, "Start"), FlowNode::end_event(2, "End")],
        )
        .unwrap();
        let ids: Vec<u64> = c.transitions.iter().map(|t| t.id.0).collect();
        assert_eq!(ids, vec![8, 7, 9]);
    }

    #[test]
    fn largest_declared_id_leaves_nothing_to_synthesize() {
        let err = assemble(
            ParseOptions::default(),
            vec![raw(Some(u64::MAX), 1, 2), raw(None, 2, 1)],
            vec![FlowNode::start_event(1, "Start"), FlowNode::end_event(2, "End")],
        )
        .unwrap_err();
        assert!(matches!(
            &err,
            ParseError::Structure { element, .. } if element == tags::TRANSITION
        ));
        assert!(err.to_string().contains("without 'id'"));

        let c = assemble(
            ParseOptions::default(),
            vec![raw(Some(u64::MAX), 1, 2)],
            vec![FlowNode::start_event(1, "Start"), FlowNode::end_event(2, "End")],
        )
        .unwrap();
        assert_eq!(c.transitions[0].id, TransitionId(u64::MAX));
    }

    #[test]
    fn undeclared_references_are_wired_from_the_transition_table() {
        let c = assemble(
            ParseOptions::default(),
            vec![raw(Some(10), 1, 2)],
            vec![FlowNode::start_event(1, "Start"), FlowNode::end_event(2, "End")],
        )
        .unwrap();
        assert_eq!(c.flow_node(FlowNodeId(1)).unwrap().outgoing, vec![TransitionId(10)]);
        assert_eq!(c.flow_node(FlowNodeId(2)).unwrap().incoming, vec![TransitionId(10)]);
    }

    #[test]
    fn unresolved_endpoint_is_kept_but_not_wired_by_default() {
        let c = assemble(
            ParseOptions::default(),
            vec![raw(Some(10), 1, 99)],
            vec![FlowNode::start_event(1, "Start")],
        )
        .unwrap();
        assert_eq!(c.transitions.len(), 1);
        assert_eq!(c.flow_node(FlowNodeId(1)).unwrap().outgoing, vec![TransitionId(10)]);
        assert_eq!(c.unresolved_transitions().len(), 1);
    }

    #[test]
    fn strict_policy_rejects_unresolved_endpoint() {
        let err = assemble(
            ParseOptions::strict(),
            vec![raw(Some(10), 1, 99)],
            vec![FlowNode::start_event(1, "Start")],
        )
        .unwrap_err();
        assert_eq!(
            err,
            ParseError::UnresolvedTransition {
                transition: TransitionId(10),
                side: TransitionSide::Target,
                node: FlowNodeId(99),
            }
        );
    }

    #[test]
    fn top_level_boundary_event_is_rejected() {
        let boundary = FlowNode::boundary_event(5, "Timeout", CatchEvent::default());
        let err = assemble(ParseOptions::default(), vec![], vec![boundary]).unwrap_err();
        assert!(matches!(err, ParseError::Structure { .. }));
    }
}
