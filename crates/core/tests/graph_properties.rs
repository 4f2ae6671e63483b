//! Wiring, scoping and round-trip properties over graphs built in code.

use flowdef_core::model::*;
use flowdef_core::{
    from_xml_str, from_xml_str_with, to_xml_string, ParseError, ParseOptions, TransitionSide,
};

/// Review (user task, id 1) and Decide (parallel gateway, id 2) with
/// 1 -> 2 and a default 2 -> 1.
fn review_and_decide() -> (ProcessDefinition, TransitionId, TransitionId) {
    let mut d = ProcessDefinition::new("Approval", "1.0");
    let root = &mut d.flow_elements;
    root.push_flow_node(FlowNode::user_task(1, "Review", "reviewer"))
        .unwrap();
    root.push_flow_node(FlowNode::gateway(2, "Decide", GatewayType::Parallel))
        .unwrap();
    let forward = root.add_transition(FlowNodeId(1), FlowNodeId(2), None).unwrap();
    let back = root.add_default_transition(FlowNodeId(2), FlowNodeId(1)).unwrap();
    d.assign_scopes();
    (d, forward, back)
}

fn node(c: &FlowElementContainer, id: u64) -> &FlowNode {
    c.flow_node(FlowNodeId(id))
        .unwrap_or_else(|| panic!("node {} not in container {}", id, c.id))
}

#[test]
fn review_and_decide_are_wired() {
    let (d, forward, back) = review_and_decide();
    let root = &d.flow_elements;
    assert_eq!(node(root, 1).outgoing, vec![forward]);
    assert_eq!(node(root, 1).incoming, vec![back]);
    assert_eq!(node(root, 2).incoming, vec![forward]);
    assert_eq!(node(root, 2).outgoing, vec![back]);
    assert_eq!(node(root, 2).default_transition, Some(back));
}

#[test]
fn serialized_gateway_references_synthesized_ids() {
    let (d, forward, back) = review_and_decide();
    let xml = to_xml_string(&d).unwrap();

    assert!(xml.contains(&format!(r#"<transition id="{}" source="1" target="2"/>"#, forward)));
    assert!(xml.contains(&format!(r#"<transition id="{}" source="2" target="1"/>"#, back)));

    let gateway = &xml[xml.find("<gateway").unwrap()..xml.find("</gateway>").unwrap()];
    assert!(gateway.contains(&format!(r#"<outgoingTransition idref="{}"/>"#, back)));
    assert!(gateway.contains(&format!(r#"<defaultTransition idref="{}"/>"#, back)));
}

#[test]
fn parse_of_serialized_graph_is_equal() {
    let (d, _, _) = review_and_decide();
    let xml = to_xml_string(&d).unwrap();
    assert_eq!(from_xml_str(&xml).unwrap(), d);
}

#[test]
fn every_resolvable_transition_is_wired_exactly_once() {
    let (d, _, _) = review_and_decide();
    let root = &d.flow_elements;
    for t in &root.transitions {
        let source = node(root, t.source.0);
        let target = node(root, t.target.0);
        assert_eq!(source.outgoing.iter().filter(|id| **id == t.id).count(), 1);
        assert_eq!(target.incoming.iter().filter(|id| **id == t.id).count(), 1);
    }
}

/// Outer and inner scopes reuse node ids 1..=3; the inner scope has no node 4.
const NESTED: &str = r#"
<processDefinition name="Nested" version="1">
  <flowElements>
    <transitions>
      <transition id="1" source="1" target="2"/>
      <transition id="2" source="2" target="4"/>
    </transitions>
    <flowNodes>
      <subProcess id="2" name="Inner">
        <flowElements>
          <transitions>
            <transition id="1" source="1" target="3"/>
            <transition id="2" source="3" target="4"/>
          </transitions>
          <flowNodes>
            <startEvent id="1" name="Inner start"/>
            <endEvent id="3" name="Inner end"/>
          </flowNodes>
        </flowElements>
      </subProcess>
      <startEvent id="1" name="Outer start"/>
      <endEvent id="4" name="Outer end"/>
    </flowNodes>
  </flowElements>
</processDefinition>
"#;

#[test]
fn inner_transitions_never_resolve_against_outer_nodes() {
    let d = from_xml_str(NESTED).unwrap();
    let outer = &d.flow_elements;
    let inner = node(outer, 2).sub_process_body().unwrap();

    assert_eq!(node(outer, 1).outgoing, vec![TransitionId(1)]);
    assert_eq!(node(outer, 4).incoming, vec![TransitionId(2)]);
    assert_eq!(node(inner, 1).outgoing, vec![TransitionId(1)]);
    assert_eq!(node(inner, 3).incoming, vec![TransitionId(1)]);
    assert_eq!(node(inner, 3).outgoing, vec![TransitionId(2)]);

    let unresolved = inner.unresolved_transitions();
    assert_eq!(unresolved.len(), 1);
    assert_eq!(unresolved[0].side, TransitionSide::Target);
    assert_eq!(unresolved[0].node, FlowNodeId(4));
    assert!(outer.unresolved_transitions().is_empty());
}

#[test]
fn containers_are_numbered_in_pre_order() {
    let d = from_xml_str(NESTED).unwrap();
    let ids: Vec<ContainerId> = d.containers().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![ContainerId(0), ContainerId(1)]);
    assert_eq!(
        d.owner_of(ContainerId(1)),
        Some(ContainerOwner::SubProcess {
            container: ContainerId::ROOT,
            node: FlowNodeId(2),
        })
    );
    let inner = d.container(ContainerId(1)).unwrap();
    assert!(inner.flow_nodes().all(|n| n.container == ContainerId(1)));
}

#[test]
fn strict_policy_rejects_cross_scope_reference() {
    let err = from_xml_str_with(NESTED, &ParseOptions::strict()).unwrap_err();
    assert_eq!(
        err,
        ParseError::UnresolvedTransition {
            transition: TransitionId(2),
            side: TransitionSide::Target,
            node: FlowNodeId(4),
        }
    );
}

#[test]
fn nested_graph_survives_round_trip() {
    let d = from_xml_str(NESTED).unwrap();
    let xml = to_xml_string(&d).unwrap();
    assert_eq!(from_xml_str(&xml).unwrap(), d);
}

#[test]
fn transition_to_boundary_event_resolves_like_a_member() {
    let mut d = ProcessDefinition::new("Timeouts", "1");
    let mut task = FlowNode::automatic_task(1, "Wait");
    task.activity_mut()
        .unwrap()
        .boundary_events
        .push(FlowNode::boundary_event(2, "Late", CatchEvent::default()));
    let root = &mut d.flow_elements;
    root.push_flow_node(task).unwrap();
    root.push_flow_node(FlowNode::end_event(3, "Escalated"))
        .unwrap();
    root.push_flow_node(FlowNode::start_event(4, "Go")).unwrap();
    let into_boundary = root.add_transition(FlowNodeId(4), FlowNodeId(2), None).unwrap();
    let out_of_boundary = root.add_transition(FlowNodeId(2), FlowNodeId(3), None).unwrap();
    d.assign_scopes();

    let root = &d.flow_elements;
    assert!(root.unresolved_transitions().is_empty());
    let boundary = node(root, 2);
    assert_eq!(boundary.incoming, vec![into_boundary]);
    assert_eq!(boundary.outgoing, vec![out_of_boundary]);
    assert_eq!(boundary.container, ContainerId::ROOT);

    let reparsed = from_xml_str(&to_xml_string(&d).unwrap()).unwrap();
    assert_eq!(reparsed, d);
}

#[test]
fn reference_order_follows_the_document() {
    let xml = r#"
<processDefinition name="Fan" version="1">
  <flowElements>
    <transitions>
      <transition id="1" source="1" target="2"/>
      <transition id="2" source="1" target="3"/>
      <transition id="3" source="1" target="4"/>
    </transitions>
    <flowNodes>
      <gateway id="1" name="Split" gatewayType="INCLUSIVE">
        <outgoingTransition idref="3"/>
        <outgoingTransition idref="1"/>
      </gateway>
      <endEvent id="2" name="A"/>
      <endEvent id="3" name="B"/>
      <endEvent id="4" name="C"/>
    </flowNodes>
  </flowElements>
</processDefinition>
"#;
    let d = from_xml_str(xml).unwrap();
    // undeclared transition 2 is appended after the declared ones
    assert_eq!(
        node(&d.flow_elements, 1).outgoing,
        vec![TransitionId(3), TransitionId(1), TransitionId(2)]
    );
}

#[test]
fn stale_reference_is_dropped() {
    let xml = r#"
<processDefinition name="Stale" version="1">
  <flowElements>
    <transitions>
      <transition id="1" source="1" target="2"/>
    </transitions>
    <flowNodes>
      <startEvent id="1" name="Start">
        <outgoingTransition idref="1"/>
        <outgoingTransition idref="9"/>
      </startEvent>
      <endEvent id="2" name="End">
        <incomingTransition idref="1"/>
        <incomingTransition idref="1"/>
      </endEvent>
    </flowNodes>
  </flowElements>
</processDefinition>
"#;
    let d = from_xml_str(xml).unwrap();
    assert_eq!(node(&d.flow_elements, 1).outgoing, vec![TransitionId(1)]);
    assert_eq!(node(&d.flow_elements, 2).incoming, vec![TransitionId(1)]);
}
