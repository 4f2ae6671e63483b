//! Flow-node bindings.
//!
//! Each concrete binding composes the shared field groups it needs:
//! [`FlowNodeFields`] for every node, [`ActivityFields`] for activities,
//! [`HumanTaskFields`] for user and manual tasks, and the catch/throw event
//! groups for events. A child object is offered to each group in turn; a
//! group that consumes it returns `None`.

use super::{flag, keyword, number, optional, Bound, ElementBinding, NamedElement};
use crate::error::ParseError;
use crate::model::*;
use crate::xml::tags;
use crate::xml::Attributes;

/// Offer `$value` to a field group; return early when the group consumed it.
macro_rules! offer {
    ($group:expr, $name:expr, $value:expr) => {
        match $group.child_object($name, $value)? {
            Some(value) => value,
            None => return Ok(()),
        }
    };
}

// ── Shared field groups ─────────────────────────────────────────────

#[derive(Default)]
pub(crate) struct FlowNodeFields {
    named: NamedElement,
    display_name: Option<Expression>,
    display_description: Option<Expression>,
    display_description_after_completion: Option<Expression>,
    connectors: Vec<ConnectorDefinition>,
    incoming: Vec<TransitionId>,
    outgoing: Vec<TransitionId>,
    default_transition: Option<TransitionId>,
}

impl FlowNodeFields {
    fn read(element: &str, attributes: &Attributes) -> Result<Self, ParseError> {
        let named = NamedElement::read(element, attributes)?;
        named.require_id(element)?;
        Ok(FlowNodeFields {
            named,
            ..FlowNodeFields::default()
        })
    }

    /// Transition references are empty elements carrying an `idref`.
    fn child_element(
        &mut self,
        element: &str,
        name: &str,
        attributes: &Attributes,
    ) -> Result<(), ParseError> {
        let slot = match name {
            tags::INCOMING_TRANSITION | tags::OUTGOING_TRANSITION | tags::DEFAULT_TRANSITION => name,
            _ => return Ok(()),
        };
        let id = number(slot, attributes, tags::IDREF)?
            .map(TransitionId)
            .ok_or_else(|| ParseError::missing(slot, tags::IDREF))?;
        match slot {
            tags::INCOMING_TRANSITION => self.incoming.push(id),
            tags::OUTGOING_TRANSITION => self.outgoing.push(id),
            _ => {
                if self.default_transition.replace(id).is_some() {
                    return Err(ParseError::structure(
                        element,
                        "more than one <defaultTransition>",
                    ));
                }
            }
        }
        Ok(())
    }

    fn child_object(&mut self, name: &str, value: Bound) -> Result<Option<Bound>, ParseError> {
        match (name, value) {
            (tags::DISPLAY_NAME, Bound::Expression(e)) => self.display_name = Some(e),
            (tags::DISPLAY_DESCRIPTION, Bound::Expression(e)) => self.display_description = Some(e),
            (tags::DISPLAY_DESCRIPTION_AFTER_COMPLETION, Bound::Expression(e)) => {
                self.display_description_after_completion = Some(e)
            }
            (tags::CONNECTORS, value) => self.connectors = value.into_vec(),
            (_, value) => return Ok(Some(value)),
        }
        Ok(None)
    }

    fn build(self, element: &str, kind: FlowNodeKind) -> Result<FlowNode, ParseError> {
        let id = self.named.require_id(element)?;
        let mut node = FlowNode::new(id, self.named.name.unwrap_or_default(), kind);
        node.description = self.named.description;
        node.display_name = self.display_name;
        node.display_description = self.display_description;
        node.display_description_after_completion = self.display_description_after_completion;
        node.connectors = self.connectors;
        node.incoming = self.incoming;
        node.outgoing = self.outgoing;
        node.default_transition = self.default_transition;
        Ok(node)
    }
}

#[derive(Default)]
pub(crate) struct ActivityFields {
    data_definitions: Vec<DataDefinition>,
    business_data_definitions: Vec<BusinessDataDefinition>,
    operations: Vec<Operation>,
    loop_characteristics: Option<LoopCharacteristics>,
    boundary_events: Vec<FlowNode>,
}

impl ActivityFields {
    fn child_object(&mut self, name: &str, value: Bound) -> Result<Option<Bound>, ParseError> {
        match (name, value) {
            (tags::DATA_DEFINITIONS, value) => self.data_definitions = value.into_vec(),
            (tags::BUSINESS_DATA_DEFINITIONS, value) => {
                self.business_data_definitions = value.into_vec()
            }
            (tags::OPERATIONS, value) => self.operations = value.into_vec(),
            (
                tags::STANDARD_LOOP_CHARACTERISTICS | tags::MULTI_INSTANCE_LOOP_CHARACTERISTICS,
                Bound::Loop(l),
            ) => self.loop_characteristics = Some(l),
            (tags::BOUNDARY_EVENTS, value) => {
                let nodes: Vec<FlowNode> = value.into_vec();
                if let Some(stray) = nodes
                    .iter()
                    .find(|n| !matches!(n.kind, FlowNodeKind::BoundaryEvent(_)))
                {
                    return Err(ParseError::structure(
                        tags::BOUNDARY_EVENTS,
                        format!("flow node {} is not a boundary event", stray.id),
                    ));
                }
                self.boundary_events = nodes;
            }
            (_, value) => return Ok(Some(value)),
        }
        Ok(None)
    }

    fn build(self, task: TaskKind) -> FlowNodeKind {
        FlowNodeKind::Activity(Activity {
            data_definitions: self.data_definitions,
            business_data_definitions: self.business_data_definitions,
            operations: self.operations,
            loop_characteristics: self.loop_characteristics,
            boundary_events: self.boundary_events,
            task,
        })
    }
}

#[derive(Default)]
pub(crate) struct HumanTaskFields {
    human: HumanTask,
}

impl HumanTaskFields {
    fn read(element: &str, attributes: &Attributes) -> Result<Self, ParseError> {
        let human = HumanTask {
            actor_name: optional(attributes, tags::ACTOR_NAME),
            priority: keyword(element, attributes, tags::PRIORITY, TaskPriority::parse, "a task priority")?,
            expected_duration: number(element, attributes, tags::EXPECTED_DURATION)?,
            user_filter: None,
        };
        Ok(HumanTaskFields { human })
    }

    fn child_object(&mut self, name: &str, value: Bound) -> Result<Option<Bound>, ParseError> {
        match (name, value) {
            (tags::USER_FILTER, Bound::UserFilter(f)) => self.human.user_filter = Some(f),
            (_, value) => return Ok(Some(value)),
        }
        Ok(None)
    }
}

pub(crate) struct CatchEventFields {
    event: CatchEvent,
}

impl CatchEventFields {
    fn read(element: &str, attributes: &Attributes) -> Result<Self, ParseError> {
        let event = CatchEvent {
            interrupting: flag(element, attributes, tags::INTERRUPTING, true)?,
            ..CatchEvent::default()
        };
        Ok(CatchEventFields { event })
    }

    fn child_object(&mut self, name: &str, value: Bound) -> Result<Option<Bound>, ParseError> {
        let e = &mut self.event;
        match (name, value) {
            (tags::TIMER_EVENT_TRIGGER, Bound::Timer(t)) => e.timer_triggers.push(t),
            (tags::CATCH_MESSAGE_EVENT_TRIGGER, Bound::CatchMessage(m)) => e.message_triggers.push(m),
            (tags::CATCH_SIGNAL_EVENT_TRIGGER, Bound::Signal(s)) => e.signal_triggers.push(s),
            (tags::CATCH_ERROR_EVENT_TRIGGER, Bound::CatchError(c)) => e.error_triggers.push(c),
            (_, value) => return Ok(Some(value)),
        }
        Ok(None)
    }
}

#[derive(Default)]
pub(crate) struct ThrowEventFields {
    event: ThrowEvent,
}

impl ThrowEventFields {
    fn child_object(&mut self, name: &str, value: Bound) -> Result<Option<Bound>, ParseError> {
        match (name, value) {
            (tags::THROW_MESSAGE_EVENT_TRIGGER, Bound::ThrowMessage(m)) => {
                self.event.message_triggers.push(m)
            }
            (tags::THROW_SIGNAL_EVENT_TRIGGER, Bound::Signal(s)) => self.event.signal_triggers.push(s),
            (_, value) => return Ok(Some(value)),
        }
        Ok(None)
    }
}

// ── Activities ──────────────────────────────────────────────────────

#[derive(Default)]
pub(crate) struct AutomaticTaskBinding {
    node: FlowNodeFields,
    activity: ActivityFields,
}

impl ElementBinding for AutomaticTaskBinding {
    fn element_tag(&self) -> &str {
        tags::AUTOMATIC_TASK
    }

    fn set_attributes(&mut self, attributes: &Attributes) -> Result<(), ParseError> {
        self.node = FlowNodeFields::read(tags::AUTOMATIC_TASK, attributes)?;
        Ok(())
    }

    fn set_child_element(&mut self, name: &str, _: &str, attributes: &Attributes) -> Result<(), ParseError> {
        self.node.child_element(tags::AUTOMATIC_TASK, name, attributes)
    }

    fn set_child_object(&mut self, name: &str, value: Bound) -> Result<(), ParseError> {
        let value = offer!(self.node, name, value);
        offer!(self.activity, name, value);
        Ok(())
    }

    fn get_object(self: Box<Self>) -> Result<Bound, ParseError> {
        let kind = self.activity.build(TaskKind::Automatic);
        Ok(Bound::FlowNode(self.node.build(tags::AUTOMATIC_TASK, kind)?))
    }
}

#[derive(Default)]
pub(crate) struct UserTaskBinding {
    node: FlowNodeFields,
    activity: ActivityFields,
    human: HumanTaskFields,
    contract: Option<Contract>,
    context: Vec<ContextEntry>,
}

impl ElementBinding for UserTaskBinding {
    fn element_tag(&self) -> &str {
        tags::USER_TASK
    }

    fn set_attributes(&mut self, attributes: &Attributes) -> Result<(), ParseError> {
        self.node = FlowNodeFields::read(tags::USER_TASK, attributes)?;
        self.human = HumanTaskFields::read(tags::USER_TASK, attributes)?;
        Ok(())
    }

    fn set_child_element(&mut self, name: &str, _: &str, attributes: &Attributes) -> Result<(), ParseError> {
        self.node.child_element(tags::USER_TASK, name, attributes)
    }

    fn set_child_object(&mut self, name: &str, value: Bound) -> Result<(), ParseError> {
        let value = offer!(self.node, name, value);
        let value = offer!(self.activity, name, value);
        let value = offer!(self.human, name, value);
        match (name, value) {
            (tags::CONTRACT, Bound::Contract(c)) => self.contract = Some(c),
            (tags::CONTEXT, value) => self.context = value.into_vec(),
            _ => {}
        }
        Ok(())
    }

    fn get_object(self: Box<Self>) -> Result<Bound, ParseError> {
        let task = TaskKind::User(UserTask {
            human: self.human.human,
            contract: self.contract,
            context: self.context,
        });
        let kind = self.activity.build(task);
        Ok(Bound::FlowNode(self.node.build(tags::USER_TASK, kind)?))
    }
}

#[derive(Default)]
pub(crate) struct ManualTaskBinding {
    node: FlowNodeFields,
    activity: ActivityFields,
    human: HumanTaskFields,
}

impl ElementBinding for ManualTaskBinding {
    fn element_tag(&self) -> &str {
        tags::MANUAL_TASK
    }

    fn set_attributes(&mut self, attributes: &Attributes) -> Result<(), ParseError> {
        self.node = FlowNodeFields::read(tags::MANUAL_TASK, attributes)?;
        self.human = HumanTaskFields::read(tags::MANUAL_TASK, attributes)?;
        Ok(())
    }

    fn set_child_element(&mut self, name: &str, _: &str, attributes: &Attributes) -> Result<(), ParseError> {
        self.node.child_element(tags::MANUAL_TASK, name, attributes)
    }

    fn set_child_object(&mut self, name: &str, value: Bound) -> Result<(), ParseError> {
        let value = offer!(self.node, name, value);
        let value = offer!(self.activity, name, value);
        offer!(self.human, name, value);
        Ok(())
    }

    fn get_object(self: Box<Self>) -> Result<Bound, ParseError> {
        let kind = self.activity.build(TaskKind::Manual(self.human.human));
        Ok(Bound::FlowNode(self.node.build(tags::MANUAL_TASK, kind)?))
    }
}

#[derive(Default)]
pub(crate) struct ReceiveTaskBinding {
    node: FlowNodeFields,
    activity: ActivityFields,
    trigger: Option<CatchMessageTrigger>,
}

impl ElementBinding for ReceiveTaskBinding {
    fn element_tag(&self) -> &str {
        tags::RECEIVE_TASK
    }

    fn set_attributes(&mut self, attributes: &Attributes) -> Result<(), ParseError> {
        self.node = FlowNodeFields::read(tags::RECEIVE_TASK, attributes)?;
        Ok(())
    }

    fn set_child_element(&mut self, name: &str, _: &str, attributes: &Attributes) -> Result<(), ParseError> {
        self.node.child_element(tags::RECEIVE_TASK, name, attributes)
    }

    fn set_child_object(&mut self, name: &str, value: Bound) -> Result<(), ParseError> {
        let value = offer!(self.node, name, value);
        let value = offer!(self.activity, name, value);
        if let (tags::CATCH_MESSAGE_EVENT_TRIGGER, Bound::CatchMessage(m)) = (name, value) {
            self.trigger = Some(m);
        }
        Ok(())
    }

    fn get_object(self: Box<Self>) -> Result<Bound, ParseError> {
        let trigger = self.trigger.ok_or_else(|| {
            ParseError::structure(tags::RECEIVE_TASK, "missing <catchMessageEventTrigger> child")
        })?;
        let kind = self.activity.build(TaskKind::Receive(trigger));
        Ok(Bound::FlowNode(self.node.build(tags::RECEIVE_TASK, kind)?))
    }
}

#[derive(Default)]
pub(crate) struct SendTaskBinding {
    node: FlowNodeFields,
    activity: ActivityFields,
    trigger: Option<ThrowMessageTrigger>,
}

impl ElementBinding for SendTaskBinding {
    fn element_tag(&self) -> &str {
        tags::SEND_TASK
    }

    fn set_attributes(&mut self, attributes: &Attributes) -> Result<(), ParseError> {
        self.node = FlowNodeFields::read(tags::SEND_TASK, attributes)?;
        Ok(())
    }

    fn set_child_element(&mut self, name: &str, _: &str, attributes: &Attributes) -> Result<(), ParseError> {
        self.node.child_element(tags::SEND_TASK, name, attributes)
    }

    fn set_child_object(&mut self, name: &str, value: Bound) -> Result<(), ParseError> {
        let value = offer!(self.node, name, value);
        let value = offer!(self.activity, name, value);
        if let (tags::THROW_MESSAGE_EVENT_TRIGGER, Bound::ThrowMessage(m)) = (name, value) {
            self.trigger = Some(m);
        }
        Ok(())
    }

    fn get_object(self: Box<Self>) -> Result<Bound, ParseError> {
        let trigger = self.trigger.ok_or_else(|| {
            ParseError::structure(tags::SEND_TASK, "missing <throwMessageEventTrigger> child")
        })?;
        let kind = self.activity.build(TaskKind::Send(trigger));
        Ok(Bound::FlowNode(self.node.build(tags::SEND_TASK, kind)?))
    }
}

#[derive(Default)]
pub(crate) struct CallActivityBinding {
    node: FlowNodeFields,
    activity: ActivityFields,
    callable_element: Option<Expression>,
    callable_element_version: Option<Expression>,
    callable_element_type: CallableElementType,
    data_input_operations: Vec<Operation>,
    data_output_operations: Vec<Operation>,
    contract_inputs: Vec<(String, Expression)>,
}

impl ElementBinding for CallActivityBinding {
    fn element_tag(&self) -> &str {
        tags::CALL_ACTIVITY
    }

    fn set_attributes(&mut self, attributes: &Attributes) -> Result<(), ParseError> {
        let tag = tags::CALL_ACTIVITY;
        self.node = FlowNodeFields::read(tag, attributes)?;
        self.callable_element_type = keyword(
            tag,
            attributes,
            tags::CALLABLE_ELEMENT_TYPE,
            CallableElementType::parse,
            "PROCESS or BPMN",
        )?
        .unwrap_or_default();
        Ok(())
    }

    fn set_child_element(&mut self, name: &str, _: &str, attributes: &Attributes) -> Result<(), ParseError> {
        self.node.child_element(tags::CALL_ACTIVITY, name, attributes)
    }

    fn set_child_object(&mut self, name: &str, value: Bound) -> Result<(), ParseError> {
        let value = offer!(self.node, name, value);
        let value = offer!(self.activity, name, value);
        match (name, value) {
            (tags::CALLABLE_ELEMENT, Bound::Expression(e)) => self.callable_element = Some(e),
            (tags::CALLABLE_ELEMENT_VERSION, Bound::Expression(e)) => {
                self.callable_element_version = Some(e)
            }
            (tags::DATA_INPUT_OPERATIONS, value) => self.data_input_operations = value.into_vec(),
            (tags::DATA_OUTPUT_OPERATIONS, value) => self.data_output_operations = value.into_vec(),
            (tags::CONTRACT_INPUTS, value) => self.contract_inputs = value.into_vec(),
            _ => {}
        }
        Ok(())
    }

    fn get_object(self: Box<Self>) -> Result<Bound, ParseError> {
        let callable_element = self.callable_element.ok_or_else(|| {
            ParseError::structure(tags::CALL_ACTIVITY, "missing <callableElement> child")
        })?;
        let task = TaskKind::CallActivity(CallActivity {
            callable_element,
            callable_element_version: self.callable_element_version,
            callable_element_type: self.callable_element_type,
            data_input_operations: self.data_input_operations,
            data_output_operations: self.data_output_operations,
            contract_inputs: self.contract_inputs,
        });
        let kind = self.activity.build(task);
        Ok(Bound::FlowNode(self.node.build(tags::CALL_ACTIVITY, kind)?))
    }
}

/// A sub-process owns the container built from its `flowElements` child.
#[derive(Default)]
pub(crate) struct SubProcessBinding {
    node: FlowNodeFields,
    activity: ActivityFields,
    triggered_by_event: bool,
    body: Option<FlowElementContainer>,
}

impl ElementBinding for SubProcessBinding {
    fn element_tag(&self) -> &str {
        tags::SUB_PROCESS
    }

    fn set_attributes(&mut self, attributes: &Attributes) -> Result<(), ParseError> {
        self.node = FlowNodeFields::read(tags::SUB_PROCESS, attributes)?;
        self.triggered_by_event = flag(tags::SUB_PROCESS, attributes, tags::TRIGGERED_BY_EVENT, false)?;
        Ok(())
    }

    fn set_child_element(&mut self, name: &str, _: &str, attributes: &Attributes) -> Result<(), ParseError> {
        self.node.child_element(tags::SUB_PROCESS, name, attributes)
    }

    fn set_child_object(&mut self, name: &str, value: Bound) -> Result<(), ParseError> {
        let value = offer!(self.node, name, value);
        let value = offer!(self.activity, name, value);
        if let (tags::FLOW_ELEMENTS, Bound::Container(c)) = (name, value) {
            self.body = Some(c);
        }
        Ok(())
    }

    fn get_object(self: Box<Self>) -> Result<Bound, ParseError> {
        let body = self
            .body
            .unwrap_or_else(|| FlowElementContainer::new(ContainerId::ROOT, ContainerOwner::Process));
        let task = TaskKind::SubProcess(SubProcess {
            triggered_by_event: self.triggered_by_event,
            body,
        });
        let kind = self.activity.build(task);
        Ok(Bound::FlowNode(self.node.build(tags::SUB_PROCESS, kind)?))
    }
}

// ── Gateways and events ─────────────────────────────────────────────

#[derive(Default)]
pub(crate) struct GatewayBinding {
    node: FlowNodeFields,
    gateway_type: Option<GatewayType>,
}

impl ElementBinding for GatewayBinding {
    fn element_tag(&self) -> &str {
        tags::GATEWAY
    }

    fn set_attributes(&mut self, attributes: &Attributes) -> Result<(), ParseError> {
        let tag = tags::GATEWAY;
        self.node = FlowNodeFields::read(tag, attributes)?;
        self.gateway_type = keyword(
            tag,
            attributes,
            tags::GATEWAY_TYPE,
            GatewayType::parse,
            "PARALLEL, EXCLUSIVE or INCLUSIVE",
        )?;
        if self.gateway_type.is_none() {
            return Err(ParseError::missing(tag, tags::GATEWAY_TYPE));
        }
        Ok(())
    }

    fn set_child_element(&mut self, name: &str, _: &str, attributes: &Attributes) -> Result<(), ParseError> {
        self.node.child_element(tags::GATEWAY, name, attributes)
    }

    fn set_child_object(&mut self, name: &str, value: Bound) -> Result<(), ParseError> {
        offer!(self.node, name, value);
        Ok(())
    }

    fn get_object(self: Box<Self>) -> Result<Bound, ParseError> {
        let gateway_type = self
            .gateway_type
            .ok_or_else(|| ParseError::missing(tags::GATEWAY, tags::GATEWAY_TYPE))?;
        Ok(Bound::FlowNode(
            self.node.build(tags::GATEWAY, FlowNodeKind::Gateway(gateway_type))?,
        ))
    }
}

/// Start, intermediate-catch and boundary events.
pub(crate) struct CatchEventBinding {
    tag: &'static str,
    node: FlowNodeFields,
    event: CatchEventFields,
}

impl CatchEventBinding {
    pub fn new(tag: &str) -> Self {
        let tag = match tag {
            tags::INTERMEDIATE_CATCH_EVENT => tags::INTERMEDIATE_CATCH_EVENT,
            tags::BOUNDARY_EVENT => tags::BOUNDARY_EVENT,
            _ => tags::START_EVENT,
        };
        CatchEventBinding {
            tag,
            node: FlowNodeFields::default(),
            event: CatchEventFields {
                event: CatchEvent::default(),
            },
        }
    }
}

impl ElementBinding for CatchEventBinding {
    fn element_tag(&self) -> &str {
        self.tag
    }

    fn set_attributes(&mut self, attributes: &Attributes) -> Result<(), ParseError> {
        self.node = FlowNodeFields::read(self.tag, attributes)?;
        self.event = CatchEventFields::read(self.tag, attributes)?;
        Ok(())
    }

    fn set_child_element(&mut self, name: &str, _: &str, attributes: &Attributes) -> Result<(), ParseError> {
        self.node.child_element(self.tag, name, attributes)
    }

    fn set_child_object(&mut self, name: &str, value: Bound) -> Result<(), ParseError> {
        let value = offer!(self.node, name, value);
        offer!(self.event, name, value);
        Ok(())
    }

    fn get_object(self: Box<Self>) -> Result<Bound, ParseError> {
        let event = self.event.event;
        let kind = match self.tag {
            tags::INTERMEDIATE_CATCH_EVENT => FlowNodeKind::IntermediateCatchEvent(event),
            tags::BOUNDARY_EVENT => FlowNodeKind::BoundaryEvent(event),
            _ => FlowNodeKind::StartEvent(event),
        };
        Ok(Bound::FlowNode(self.node.build(self.tag, kind)?))
    }
}

#[derive(Default)]
pub(crate) struct ThrowEventBinding {
    node: FlowNodeFields,
    event: ThrowEventFields,
}

impl ElementBinding for ThrowEventBinding {
    fn element_tag(&self) -> &str {
        tags::INTERMEDIATE_THROW_EVENT
    }

    fn set_attributes(&mut self, attributes: &Attributes) -> Result<(), ParseError> {
        self.node = FlowNodeFields::read(tags::INTERMEDIATE_THROW_EVENT, attributes)?;
        Ok(())
    }

    fn set_child_element(&mut self, name: &str, _: &str, attributes: &Attributes) -> Result<(), ParseError> {
        self.node
            .child_element(tags::INTERMEDIATE_THROW_EVENT, name, attributes)
    }

    fn set_child_object(&mut self, name: &str, value: Bound) -> Result<(), ParseError> {
        let value = offer!(self.node, name, value);
        offer!(self.event, name, value);
        Ok(())
    }

    fn get_object(self: Box<Self>) -> Result<Bound, ParseError> {
        let kind = FlowNodeKind::IntermediateThrowEvent(self.event.event);
        Ok(Bound::FlowNode(
            self.node.build(tags::INTERMEDIATE_THROW_EVENT, kind)?,
        ))
    }
}

#[derive(Default)]
pub(crate) struct EndEventBinding {
    node: FlowNodeFields,
    throw: ThrowEventFields,
    error_triggers: Vec<ThrowErrorTrigger>,
    terminate: Option<TerminateTrigger>,
}

impl ElementBinding for EndEventBinding {
    fn element_tag(&self) -> &str {
        tags::END_EVENT
    }

    fn set_attributes(&mut self, attributes: &Attributes) -> Result<(), ParseError> {
        self.node = FlowNodeFields::read(tags::END_EVENT, attributes)?;
        Ok(())
    }

    fn set_child_element(&mut self, name: &str, _: &str, attributes: &Attributes) -> Result<(), ParseError> {
        self.node.child_element(tags::END_EVENT, name, attributes)
    }

    fn set_child_object(&mut self, name: &str, value: Bound) -> Result<(), ParseError> {
        let value = offer!(self.node, name, value);
        let value = offer!(self.throw, name, value);
        match (name, value) {
            (tags::THROW_ERROR_EVENT_TRIGGER, Bound::ThrowError(e)) => self.error_triggers.push(e),
            (tags::TERMINATE_EVENT_TRIGGER, Bound::Terminate(t)) => self.terminate = Some(t),
            _ => {}
        }
        Ok(())
    }

    fn get_object(self: Box<Self>) -> Result<Bound, ParseError> {
        let kind = FlowNodeKind::EndEvent(EndEvent {
            throw: self.throw.event,
            error_triggers: self.error_triggers,
            terminate: self.terminate,
        });
        Ok(Bound::FlowNode(self.node.build(tags::END_EVENT, kind)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> Attributes {
        pairs.iter().map(|(k, v)| (*k, *v)).collect()
    }

    fn reference(id: &str) -> Attributes {
        attrs(&[("idref", id)])
    }

    fn node(bound: Bound) -> FlowNode {
        match bound {
            Bound::FlowNode(n) => n,
            other => panic!("expected flow node, got {other:?}"),
        }
    }

    #[test]
    fn user_task_accumulates_every_field_group() {
        let mut b = Box::new(UserTaskBinding::default());
        b.set_attributes(&attrs(&[
            ("id", "1"),
            ("name", "Review"),
            ("actorName", "reviewer"),
            ("priority", "ABOVE_NORMAL"),
            ("expectedDuration", "3600000"),
        ]))
        .unwrap();
        b.set_child_element("incomingTransition", "", &reference("11"))
            .unwrap();
        b.set_child_element("outgoingTransition", "", &reference("10"))
            .unwrap();
        b.set_child_object("displayName", Bound::Expression(Expression::string("Review request")))
            .unwrap();
        b.set_child_object(
            "dataDefinitions",
            Bound::List(vec![Bound::DataDefinition(DataDefinition::new(
                "comment",
                STRING_TYPE,
            ))]),
        )
        .unwrap();
        b.set_child_object("contract", Bound::Contract(Contract::default()))
            .unwrap();

        let n = node(b.get_object().unwrap());
        assert_eq!(n.id, FlowNodeId(1));
        assert_eq!(n.incoming, vec![TransitionId(11)]);
        assert_eq!(n.outgoing, vec![TransitionId(10)]);
        assert!(n.display_name.is_some());
        let activity = n.activity().unwrap();
        assert_eq!(activity.data_definitions.len(), 1);
        let TaskKind::User(task) = &activity.task else {
            panic!("expected user task");
        };
        assert_eq!(task.human.actor_name.as_deref(), Some("reviewer"));
        assert_eq!(task.human.priority, Some(TaskPriority::AboveNormal));
        assert_eq!(task.human.expected_duration, Some(3_600_000));
        assert!(task.contract.is_some());
    }

    #[test]
    fn flow_node_requires_id() {
        let mut b = AutomaticTaskBinding::default();
        let err = b.set_attributes(&attrs(&[("name", "Step")])).unwrap_err();
        assert_eq!(err, ParseError::missing("automaticTask", "id"));
    }

    #[test]
    fn transition_reference_requires_idref() {
        let mut b = GatewayBinding::default();
        b.set_attributes(&attrs(&[("id", "2"), ("gatewayType", "PARALLEL")]))
            .unwrap();
        let err = b
            .set_child_element("outgoingTransition", "", &Attributes::default())
            .unwrap_err();
        assert_eq!(err, ParseError::missing("outgoingTransition", "idref"));
    }

    #[test]
    fn gateway_keeps_default_and_outgoing() {
        let mut b = Box::new(GatewayBinding::default());
        b.set_attributes(&attrs(&[("id", "2"), ("name", "Decide"), ("gatewayType", "EXCLUSIVE")]))
            .unwrap();
        b.set_child_element("outgoingTransition", "", &reference("11"))
            .unwrap();
        b.set_child_element("defaultTransition", "", &reference("11"))
            .unwrap();
        let n = node(b.get_object().unwrap());
        assert_eq!(n.kind, FlowNodeKind::Gateway(GatewayType::Exclusive));
        assert_eq!(n.outgoing, vec![TransitionId(11)]);
        assert_eq!(n.default_transition, Some(TransitionId(11)));
    }

    #[test]
    fn gateway_rejects_second_default() {
        let mut b = GatewayBinding::default();
        b.set_attributes(&attrs(&[("id", "2"), ("gatewayType", "INCLUSIVE")]))
            .unwrap();
        b.set_child_element("defaultTransition", "", &reference("1"))
            .unwrap();
        assert!(b
            .set_child_element("defaultTransition", "", &reference("2"))
            .is_err());
    }

    #[test]
    fn gateway_requires_type() {
        let mut b = GatewayBinding::default();
        let err = b.set_attributes(&attrs(&[("id", "2")])).unwrap_err();
        assert_eq!(err, ParseError::missing("gateway", "gatewayType"));
    }

    #[test]
    fn boundary_events_attach_to_activity() {
        let mut boundary = Box::new(CatchEventBinding::new("boundaryEvent"));
        boundary
            .set_attributes(&attrs(&[("id", "7"), ("name", "Timeout"), ("interrupting", "false")]))
            .unwrap();
        let boundary = boundary.get_object().unwrap();

        let mut task = Box::new(AutomaticTaskBinding::default());
        task.set_attributes(&attrs(&[("id", "3"), ("name", "Charge")]))
            .unwrap();
        task.set_child_object("boundaryEvents", Bound::List(vec![boundary]))
            .unwrap();
        let n = node(task.get_object().unwrap());
        let attached = n.boundary_events();
        assert_eq!(attached.len(), 1);
        let FlowNodeKind::BoundaryEvent(event) = &attached[0].kind else {
            panic!("expected boundary event");
        };
        assert!(!event.interrupting);
    }

    #[test]
    fn boundary_list_rejects_other_nodes() {
        let stray = Bound::FlowNode(FlowNode::end_event(9, "End"));
        let mut task = AutomaticTaskBinding::default();
        task.set_attributes(&attrs(&[("id", "3")])).unwrap();
        assert!(task
            .set_child_object("boundaryEvents", Bound::List(vec![stray]))
            .is_err());
    }

    #[test]
    fn end_event_collects_throw_triggers() {
        let mut b = Box::new(EndEventBinding::default());
        b.set_attributes(&attrs(&[("id", "4"), ("name", "Fail")])).unwrap();
        b.set_child_object(
            "throwErrorEventTrigger",
            Bound::ThrowError(ThrowErrorTrigger {
                error_code: "E42".into(),
            }),
        )
        .unwrap();
        b.set_child_object(
            "throwSignalEventTrigger",
            Bound::Signal(SignalTrigger {
                signal_name: "stop".into(),
            }),
        )
        .unwrap();
        b.set_child_object("terminateEventTrigger", Bound::Terminate(TerminateTrigger))
            .unwrap();
        let n = node(b.get_object().unwrap());
        let FlowNodeKind::EndEvent(end) = n.kind else {
            panic!("expected end event");
        };
        assert_eq!(end.error_triggers.len(), 1);
        assert_eq!(end.throw.signal_triggers.len(), 1);
        assert!(end.terminate.is_some());
    }

    #[test]
    fn catch_signal_is_not_taken_as_throw() {
        let mut b = Box::new(CatchEventBinding::new("intermediateCatchEvent"));
        b.set_attributes(&attrs(&[("id", "5")])).unwrap();
        b.set_child_object(
            "throwSignalEventTrigger",
            Bound::Signal(SignalTrigger {
                signal_name: "go".into(),
            }),
        )
        .unwrap();
        let n = node(b.get_object().unwrap());
        let FlowNodeKind::IntermediateCatchEvent(event) = n.kind else {
            panic!("expected intermediate catch event");
        };
        assert!(event.signal_triggers.is_empty());
    }

    #[test]
    fn receive_task_requires_message_trigger() {
        let mut b = Box::new(ReceiveTaskBinding::default());
        b.set_attributes(&attrs(&[("id", "6")])).unwrap();
        assert!(matches!(b.get_object(), Err(ParseError::Structure { .. })));
    }
}
