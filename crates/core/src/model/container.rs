//! Flow-element containers and transition wiring.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::{
    BusinessDataDefinition, ConnectorDefinition, ContainerId, DataDefinition, DocumentDefinition,
    DocumentListDefinition, Expression, FlowNode, FlowNodeId, FlowNodeKind, TransitionId,
};
use crate::error::TransitionSide;

/// A directed edge between two flow nodes of the same container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub id: TransitionId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub source: FlowNodeId,
    pub target: FlowNodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Expression>,
}

/// Who owns a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerOwner {
    Process,
    SubProcess {
        container: ContainerId,
        node: FlowNodeId,
    },
}

/// One transition endpoint that names no node of its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnresolvedEndpoint {
    pub transition: TransitionId,
    pub side: TransitionSide,
    pub node: FlowNodeId,
}

/// A scope of flow elements: the process body or a sub-process body.
///
/// Flow-node identifiers and transition references resolve only within one
/// container. Boundary events attached to an activity of this container share
/// its namespace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowElementContainer {
    pub id: ContainerId,
    pub owner: ContainerOwner,
    #[serde(default)]
    pub transitions: Vec<Transition>,
    #[serde(default)]
    pub activities: Vec<FlowNode>,
    #[serde(default)]
    pub gateways: Vec<FlowNode>,
    #[serde(default)]
    pub start_events: Vec<FlowNode>,
    #[serde(default)]
    pub intermediate_catch_events: Vec<FlowNode>,
    #[serde(default)]
    pub intermediate_throw_events: Vec<FlowNode>,
    #[serde(default)]
    pub end_events: Vec<FlowNode>,
    #[serde(default)]
    pub data_definitions: Vec<DataDefinition>,
    #[serde(default)]
    pub business_data_definitions: Vec<BusinessDataDefinition>,
    #[serde(default)]
    pub document_definitions: Vec<DocumentDefinition>,
    #[serde(default)]
    pub document_list_definitions: Vec<DocumentListDefinition>,
    #[serde(default)]
    pub connectors: Vec<ConnectorDefinition>,
}

impl FlowElementContainer {
    pub fn new(id: ContainerId, owner: ContainerOwner) -> Self {
        FlowElementContainer {
            id,
            owner,
            transitions: Vec::new(),
            activities: Vec::new(),
            gateways: Vec::new(),
            start_events: Vec::new(),
            intermediate_catch_events: Vec::new(),
            intermediate_throw_events: Vec::new(),
            end_events: Vec::new(),
            data_definitions: Vec::new(),
            business_data_definitions: Vec::new(),
            document_definitions: Vec::new(),
            document_list_definitions: Vec::new(),
            connectors: Vec::new(),
        }
    }

    /// Add a node to the category matching its kind. Boundary events cannot
    /// be container members and are handed back.
    pub fn push_flow_node(&mut self, node: FlowNode) -> Result<(), FlowNode> {
        let list = match node.kind {
            FlowNodeKind::Activity(_) => &mut self.activities,
            FlowNodeKind::Gateway(_) => &mut self.gateways,
            FlowNodeKind::StartEvent(_) => &mut self.start_events,
            FlowNodeKind::IntermediateCatchEvent(_) => &mut self.intermediate_catch_events,
            FlowNodeKind::IntermediateThrowEvent(_) => &mut self.intermediate_throw_events,
            FlowNodeKind::EndEvent(_) => &mut self.end_events,
            FlowNodeKind::BoundaryEvent(_) => return Err(node),
        };
        list.push(node);
        Ok(())
    }

    /// Direct members in serialization order: activities, gateways, then
    /// start, intermediate-catch, intermediate-throw and end events.
    pub fn flow_nodes(&self) -> impl Iterator<Item = &FlowNode> {
        self.activities
            .iter()
            .chain(&self.gateways)
            .chain(&self.start_events)
            .chain(&self.intermediate_catch_events)
            .chain(&self.intermediate_throw_events)
            .chain(&self.end_events)
    }

    fn for_each_node_mut(&mut self, mut f: impl FnMut(&mut FlowNode)) {
        let lists = [
            &mut self.activities,
            &mut self.gateways,
            &mut self.start_events,
            &mut self.intermediate_catch_events,
            &mut self.intermediate_throw_events,
            &mut self.end_events,
        ];
        for list in lists {
            for node in list.iter_mut() {
                f(node);
                if let Some(activity) = node.activity_mut() {
                    for boundary in &mut activity.boundary_events {
                        f(boundary);
                    }
                }
            }
        }
    }

    /// Every identifier in this container's namespace, boundary events included.
    pub fn node_ids(&self) -> Vec<FlowNodeId> {
        let mut ids = Vec::new();
        for node in self.flow_nodes() {
            ids.push(node.id);
            ids.extend(node.boundary_events().iter().map(|b| b.id));
        }
        ids
    }

    /// Look up a node of this namespace, boundary events included.
    pub fn flow_node(&self, id: FlowNodeId) -> Option<&FlowNode> {
        self.flow_nodes().find_map(|n| {
            if n.id == id {
                Some(n)
            } else {
                n.boundary_events().iter().find(|b| b.id == id)
            }
        })
    }

    pub fn transition(&self, id: TransitionId) -> Option<&Transition> {
        self.transitions.iter().find(|t| t.id == id)
    }

    /// Smallest identifier greater than every transition id in this container.
    ///
    /// `None` once the container holds `TransitionId(u64::MAX)`.
    pub fn next_transition_id(&self) -> Option<TransitionId> {
        match self.transitions.iter().map(|t| t.id.0).max() {
            Some(max) => max.checked_add(1).map(TransitionId),
            None => Some(TransitionId(1)),
        }
    }

    /// Add a transition with a synthesized id and wire it into its endpoints.
    ///
    /// Returns `None`, leaving the container untouched, when no id is left
    /// above the largest one in use.
    pub fn add_transition(
        &mut self,
        source: FlowNodeId,
        target: FlowNodeId,
        condition: Option<Expression>,
    ) -> Option<TransitionId> {
        let id = self.next_transition_id()?;
        self.transitions.push(Transition {
            id,
            name: None,
            source,
            target,
            condition,
        });
        self.for_each_node_mut(|node| {
            if node.id == source {
                node.outgoing.push(id);
            }
            if node.id == target {
                node.incoming.push(id);
            }
        });
        Some(id)
    }

    /// Like [`add_transition`](Self::add_transition), and also designate the
    /// new transition as the source's default.
    pub fn add_default_transition(
        &mut self,
        source: FlowNodeId,
        target: FlowNodeId,
    ) -> Option<TransitionId> {
        let id = self.add_transition(source, target, None)?;
        self.for_each_node_mut(|node| {
            if node.id == source {
                node.default_transition = Some(id);
            }
        });
        Some(id)
    }

    /// Endpoints of this container's transitions that name no node of its
    /// namespace.
    pub fn unresolved_transitions(&self) -> Vec<UnresolvedEndpoint> {
        let namespace: HashSet<FlowNodeId> = self.node_ids().into_iter().collect();
        let mut out = Vec::new();
        for t in &self.transitions {
            if !namespace.contains(&t.source) {
                out.push(UnresolvedEndpoint {
                    transition: t.id,
                    side: TransitionSide::Source,
                    node: t.source,
                });
            }
            if !namespace.contains(&t.target) {
                out.push(UnresolvedEndpoint {
                    transition: t.id,
                    side: TransitionSide::Target,
                    node: t.target,
                });
            }
        }
        out
    }

    /// Replace the transition references recorded on each node with the
    /// transitions of this container that actually start or end there.
    ///
    /// Declared references keep their document order; references to
    /// transitions that are absent or have other endpoints are dropped;
    /// transitions no node declared are appended in table order (a source's
    /// default transition is only listed as outgoing when declared so).
    /// Endpoints outside the namespace are returned, not wired.
    pub fn resolve_transitions(&mut self) -> Vec<UnresolvedEndpoint> {
        let mut namespace = HashSet::new();
        for id in self.node_ids() {
            if !namespace.insert(id) {
                tracing::warn!(container = %self.id, node = %id, "duplicate flow node id in scope");
            }
        }

        let mut endpoints: HashMap<TransitionId, (FlowNodeId, FlowNodeId)> = HashMap::new();
        let mut by_source: HashMap<FlowNodeId, Vec<TransitionId>> = HashMap::new();
        let mut by_target: HashMap<FlowNodeId, Vec<TransitionId>> = HashMap::new();
        for t in &self.transitions {
            if endpoints.insert(t.id, (t.source, t.target)).is_some() {
                tracing::warn!(container = %self.id, transition = %t.id, "duplicate transition id in scope");
                continue;
            }
            if namespace.contains(&t.source) {
                by_source.entry(t.source).or_default().push(t.id);
            }
            if namespace.contains(&t.target) {
                by_target.entry(t.target).or_default().push(t.id);
            }
        }

        let container = self.id;
        self.for_each_node_mut(|node| {
            node.default_transition = node
                .default_transition
                .filter(|d| endpoints.get(d).is_some_and(|(s, _)| *s == node.id));
            let from_here = by_source.get(&node.id).map_or(&[][..], Vec::as_slice);
            let into_here = by_target.get(&node.id).map_or(&[][..], Vec::as_slice);
            node.outgoing = merge_references(
                container,
                node.id,
                &node.outgoing,
                from_here,
                node.default_transition,
            );
            node.incoming = merge_references(container, node.id, &node.incoming, into_here, None);
        });

        self.unresolved_transitions()
    }

    pub(crate) fn assign_scope(&mut self, owner: ContainerOwner, next: &mut u32) {
        self.id = ContainerId(*next);
        self.owner = owner;
        *next += 1;
        let id = self.id;
        self.for_each_top_level_mut(|node| node.assign_scope(id, next));
    }

    fn for_each_top_level_mut(&mut self, mut f: impl FnMut(&mut FlowNode)) {
        let lists = [
            &mut self.activities,
            &mut self.gateways,
            &mut self.start_events,
            &mut self.intermediate_catch_events,
            &mut self.intermediate_throw_events,
            &mut self.end_events,
        ];
        for list in lists {
            list.iter_mut().for_each(&mut f);
        }
    }

    pub(crate) fn find_container(&self, id: ContainerId) -> Option<&FlowElementContainer> {
        if self.id == id {
            return Some(self);
        }
        self.activities
            .iter()
            .filter_map(FlowNode::sub_process_body)
            .find_map(|body| body.find_container(id))
    }

    pub(crate) fn collect_containers<'a>(&'a self, out: &mut Vec<&'a FlowElementContainer>) {
        out.push(self);
        for body in self.activities.iter().filter_map(FlowNode::sub_process_body) {
            body.collect_containers(out);
        }
    }
}

fn merge_references(
    container: ContainerId,
    node: FlowNodeId,
    declared: &[TransitionId],
    actual: &[TransitionId],
    default: Option<TransitionId>,
) -> Vec<TransitionId> {
    let mut out: Vec<TransitionId> = Vec::with_capacity(actual.len());
    for id in declared {
        if !actual.contains(id) {
            tracing::debug!(%container, %node, transition = %id, "dropping transition reference");
        } else if !out.contains(id) {
            out.push(*id);
        }
    }
    for id in actual {
        if !out.contains(id) && Some(*id) != default {
            out.push(*id);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GatewayType, ProcessDefinition};

    fn review_and_decide() -> FlowElementContainer {
        let mut c = FlowElementContainer::new(ContainerId::ROOT, ContainerOwner::Process);
        c.push_flow_node(FlowNode::user_task(1, "Review", "reviewer"))
            .unwrap();
        c.push_flow_node(FlowNode::gateway(2, "Decide", GatewayType::Parallel))
            .unwrap();
        c
    }

    #[test]
    fn add_transition_synthesizes_ids_and_wires_endpoints() {
        let mut c = review_and_decide();
        let t1 = c.add_transition(FlowNodeId(1), FlowNodeId(2), None).unwrap();
        let t2 = c.add_default_transition(FlowNodeId(2), FlowNodeId(1)).unwrap();
        assert_eq!(t1, TransitionId(1));
        assert_eq!(t2, TransitionId(2));

        let review = c.flow_node(FlowNodeId(1)).unwrap();
        assert_eq!(review.outgoing, vec![t1]);
        assert_eq!(review.incoming, vec![t2]);
        let decide = c.flow_node(FlowNodeId(2)).unwrap();
        assert_eq!(decide.incoming, vec![t1]);
        assert_eq!(decide.outgoing, vec![t2]);
        assert_eq!(decide.default_transition, Some(t2));
    }

    #[test]
    fn add_transition_stops_at_the_largest_id() {
        let mut c = review_and_decide();
        c.transitions.push(Transition {
            id: TransitionId(u64::MAX),
            name: None,
            source: FlowNodeId(1),
            target: FlowNodeId(2),
            condition: None,
        });
        assert_eq!(c.next_transition_id(), None);
        assert_eq!(c.add_transition(FlowNodeId(2), FlowNodeId(1), None), None);
        assert_eq!(c.add_default_transition(FlowNodeId(2), FlowNodeId(1)), None);
        assert_eq!(c.transitions.len(), 1);
        assert!(c.flow_node(FlowNodeId(2)).unwrap().outgoing.is_empty());
        assert_eq!(c.flow_node(FlowNodeId(2)).unwrap().default_transition, None);
    }

    #[test]
    fn resolve_keeps_declared_order_and_appends_undeclared() {
        let mut c = review_and_decide();
        c.push_flow_node(FlowNode::end_event(3, "Done")).unwrap();
        for (id, s, t) in [(10, 2, 1), (11, 2, 3), (12, 1, 2)] {
            c.transitions.push(Transition {
                id: TransitionId(id),
                name: None,
                source: FlowNodeId(s),
                target: FlowNodeId(t),
                condition: None,
            });
        }
        // Gateway declares 11 before 10 and a stale reference to 99.
        c.gateways[0].outgoing = vec![TransitionId(11), TransitionId(99), TransitionId(10)];

        let unresolved = c.resolve_transitions();
        assert!(unresolved.is_empty());
        let decide = c.flow_node(FlowNodeId(2)).unwrap();
        assert_eq!(decide.outgoing, vec![TransitionId(11), TransitionId(10)]);
        assert_eq!(decide.incoming, vec![TransitionId(12)]);
        let review = c.flow_node(FlowNodeId(1)).unwrap();
        assert_eq!(review.outgoing, vec![TransitionId(12)]);
        assert_eq!(review.incoming, vec![TransitionId(10)]);
    }

    #[test]
    fn resolve_reports_unknown_endpoints_without_wiring_them() {
        let mut c = review_and_decide();
        c.transitions.push(Transition {
            id: TransitionId(5),
            name: None,
            source: FlowNodeId(1),
            target: FlowNodeId(42),
            condition: None,
        });
        let unresolved = c.resolve_transitions();
        assert_eq!(
            unresolved,
            vec![UnresolvedEndpoint {
                transition: TransitionId(5),
                side: TransitionSide::Target,
                node: FlowNodeId(42),
            }]
        );
        assert_eq!(c.transitions.len(), 1);
        assert_eq!(c.flow_node(FlowNodeId(1)).unwrap().outgoing, vec![TransitionId(5)]);
    }

    #[test]
    fn default_only_declaration_is_not_listed_as_outgoing() {
        let mut c = review_and_decide();
        c.transitions.push(Transition {
            id: TransitionId(7),
            name: None,
            source: FlowNodeId(2),
            target: FlowNodeId(1),
            condition: None,
        });
        c.gateways[0].default_transition = Some(TransitionId(7));
        c.resolve_transitions();
        let decide = c.flow_node(FlowNodeId(2)).unwrap();
        assert_eq!(decide.default_transition, Some(TransitionId(7)));
        assert!(decide.outgoing.is_empty());
    }

    #[test]
    fn default_pointing_elsewhere_is_cleared() {
        let mut c = review_and_decide();
        c.transitions.push(Transition {
            id: TransitionId(7),
            name: None,
            source: FlowNodeId(1),
            target: FlowNodeId(2),
            condition: None,
        });
        c.gateways[0].default_transition = Some(TransitionId(7));
        c.resolve_transitions();
        assert_eq!(c.flow_node(FlowNodeId(2)).unwrap().default_transition, None);
    }

    #[test]
    fn boundary_events_share_the_namespace() {
        use crate::model::{CatchErrorTrigger, CatchEvent};
        let mut c = review_and_decide();
        let boundary = FlowNode::boundary_event(
            5,
            "On error",
            CatchEvent {
                error_triggers: vec![CatchErrorTrigger { error_code: None }],
                ..CatchEvent::default()
            },
        );
        c.activities[0]
            .activity_mut()
            .unwrap()
            .boundary_events
            .push(boundary);
        c.push_flow_node(FlowNode::end_event(6, "Failed")).unwrap();
        let t = c.add_transition(FlowNodeId(5), FlowNodeId(6), None).unwrap();

        assert!(c.node_ids().contains(&FlowNodeId(5)));
        assert_eq!(c.flow_node(FlowNodeId(5)).unwrap().outgoing, vec![t]);
        assert!(c.resolve_transitions().is_empty());
    }

    #[test]
    fn boundary_event_cannot_be_a_member() {
        let mut c = review_and_decide();
        let node = FlowNode::boundary_event(9, "b", Default::default());
        assert!(c.push_flow_node(node).is_err());
    }

    #[test]
    fn scopes_are_assigned_in_pre_order() {
        let mut inner = FlowElementContainer::new(ContainerId(99), ContainerOwner::Process);
        inner.push_flow_node(FlowNode::start_event(1, "inner start")).unwrap();
        let mut def = ProcessDefinition::new("p", "1.0");
        def.flow_elements
            .push_flow_node(FlowNode::sub_process(7, "Sub", inner))
            .unwrap();
        def.flow_elements
            .push_flow_node(FlowNode::start_event(1, "outer start"))
            .unwrap();
        def.assign_scopes();

        let body = def.flow_elements.activities[0].sub_process_body().unwrap();
        assert_eq!(body.id, ContainerId(1));
        assert_eq!(
            def.owner_of(ContainerId(1)),
            Some(ContainerOwner::SubProcess {
                container: ContainerId::ROOT,
                node: FlowNodeId(7),
            })
        );
        assert_eq!(body.start_events[0].container, ContainerId(1));
        assert_eq!(def.flow_elements.start_events[0].container, ContainerId::ROOT);
        assert_eq!(def.containers().len(), 2);
    }
}
