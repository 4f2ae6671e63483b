//! Depth-first writer producing the document shape the bindings read.
//!
//! Transitions are written with their own ids, so flow-node references are
//! plain id lookups and no identity table is needed.

use crate::error::SerializeError;
use crate::model::*;
use crate::options::WriteOptions;
use crate::xml::tags;
use crate::xml::{Attrs, XmlSink};

type Result<T = ()> = std::result::Result<T, SerializeError>;

pub(crate) fn write_definition(
    definition: &ProcessDefinition,
    options: &WriteOptions,
) -> Result<String> {
    let mut w = Emitter {
        sink: XmlSink::new(options),
    };
    if options.declaration {
        w.sink.declaration()?;
    }
    w.definition(definition)?;
    w.sink.finish()
}

struct Emitter {
    sink: XmlSink,
}

impl Emitter {
    /// Write `<tag>` around the items, or `<tag/>` when there are none.
    fn list<T>(
        &mut self,
        tag: &str,
        items: &[T],
        mut item: impl FnMut(&mut Self, &T) -> Result,
    ) -> Result {
        if items.is_empty() {
            return self.sink.empty(tag, Attrs::new());
        }
        self.sink.start(tag, Attrs::new())?;
        for i in items {
            item(self, i)?;
        }
        self.sink.end(tag)
    }

    fn definition(&mut self, d: &ProcessDefinition) -> Result {
        let attrs = Attrs::new()
            .opt(tags::ID, d.id)
            .with(tags::NAME, &d.name)
            .with(tags::VERSION, &d.version)
            .with(tags::FORMAT_VERSION_ATTR, tags::FORMAT_VERSION)
            .opt(tags::DESCRIPTION, d.description.as_deref());
        self.sink.start(tags::PROCESS_DEFINITION, attrs)?;

        self.sink.start(tags::STRING_INDEXES, Attrs::new())?;
        for (i, slot) in d.string_indexes.iter().enumerate() {
            let attrs = Attrs::new()
                .with(tags::INDEX, i + 1)
                .opt(tags::LABEL, slot.label.as_deref());
            match &slot.value {
                Some(value) => {
                    self.sink.start(tags::STRING_INDEX, attrs)?;
                    self.expression(tags::VALUE, value)?;
                    self.sink.end(tags::STRING_INDEX)?;
                }
                None => self.sink.empty(tags::STRING_INDEX, attrs)?,
            }
        }
        self.sink.end(tags::STRING_INDEXES)?;

        self.container(&d.flow_elements)?;

        self.sink.start(tags::DEPENDENCIES, Attrs::new())?;
        self.list(tags::PARAMETERS, &d.parameters, |w, p| {
            let attrs = Attrs::new()
                .with(tags::NAME, &p.name)
                .with(tags::TYPE, &p.type_name)
                .opt(tags::DESCRIPTION, p.description.as_deref());
            w.sink.empty(tags::PARAMETER, attrs)
        })?;
        self.list(tags::ACTORS, &d.actors, |w, a| w.actor(tags::ACTOR, a))?;
        self.sink.end(tags::DEPENDENCIES)?;

        if let Some(initiator) = &d.actor_initiator {
            self.actor(tags::ACTOR_INITIATOR, initiator)?;
        }
        if let Some(contract) = &d.contract {
            self.contract(contract)?;
        }
        self.context(&d.context)?;
        self.sink.end(tags::PROCESS_DEFINITION)
    }

    fn actor(&mut self, tag: &str, a: &Actor) -> Result {
        let attrs = Attrs::new()
            .with(tags::NAME, &a.name)
            .opt(tags::DESCRIPTION, a.description.as_deref())
            .opt(tags::INITIATOR, (a.initiator && tag == tags::ACTOR).then_some(true));
        self.sink.empty(tag, attrs)
    }

    fn context(&mut self, entries: &[ContextEntry]) -> Result {
        self.list(tags::CONTEXT, entries, |w, e| {
            w.sink
                .start(tags::CONTEXT_ENTRY, Attrs::new().with(tags::KEY, &e.key))?;
            w.expression(tags::EXPRESSION, &e.expression)?;
            w.sink.end(tags::CONTEXT_ENTRY)
        })
    }

    // ── Containers ──────────────────────────────────────────────────

    fn container(&mut self, c: &FlowElementContainer) -> Result {
        self.sink.start(tags::FLOW_ELEMENTS, Attrs::new())?;
        self.list(tags::TRANSITIONS, &c.transitions, |w, t| w.transition(t))?;
        self.list(tags::CONNECTORS, &c.connectors, |w, c| w.connector(c))?;
        self.list(
            tags::BUSINESS_DATA_DEFINITIONS,
            &c.business_data_definitions,
            |w, b| w.business_data(b),
        )?;
        self.list(tags::DATA_DEFINITIONS, &c.data_definitions, |w, d| {
            w.data_definition(d)
        })?;
        self.list(tags::DOCUMENT_DEFINITIONS, &c.document_definitions, |w, d| {
            w.document(d)
        })?;
        self.list(
            tags::DOCUMENT_LIST_DEFINITIONS,
            &c.document_list_definitions,
            |w, d| {
                let attrs = Attrs::new()
                    .with(tags::NAME, &d.name)
                    .opt(tags::DESCRIPTION, d.description.as_deref());
                match &d.initial_value {
                    Some(value) => {
                        w.sink.start(tags::DOCUMENT_LIST_DEFINITION, attrs)?;
                        w.expression(tags::INITIAL_VALUE, value)?;
                        w.sink.end(tags::DOCUMENT_LIST_DEFINITION)
                    }
                    None => w.sink.empty(tags::DOCUMENT_LIST_DEFINITION, attrs),
                }
            },
        )?;
        let nodes: Vec<&FlowNode> = c.flow_nodes().collect();
        self.list(tags::FLOW_NODES, &nodes, |w, n| w.flow_node(n))?;
        self.sink.end(tags::FLOW_ELEMENTS)
    }

    fn transition(&mut self, t: &Transition) -> Result {
        let attrs = Attrs::new()
            .with(tags::ID, t.id)
            .opt(tags::NAME, t.name.as_deref())
            .with(tags::SOURCE, t.source)
            .with(tags::TARGET, t.target);
        match &t.condition {
            Some(condition) => {
                self.sink.start(tags::TRANSITION, attrs)?;
                self.expression(tags::CONDITION, condition)?;
                self.sink.end(tags::TRANSITION)
            }
            None => self.sink.empty(tags::TRANSITION, attrs),
        }
    }

    // ── Flow nodes ──────────────────────────────────────────────────

    fn flow_node(&mut self, n: &FlowNode) -> Result {
        let tag = node_tag(n);
        let mut attrs = Attrs::new()
            .with(tags::ID, n.id)
            .with(tags::NAME, &n.name)
            .opt(tags::DESCRIPTION, n.description.as_deref());
        attrs = match &n.kind {
            FlowNodeKind::Activity(a) => match &a.task {
                TaskKind::User(u) => human_attrs(attrs, &u.human),
                TaskKind::Manual(h) => human_attrs(attrs, h),
                TaskKind::CallActivity(c) => {
                    attrs.with(tags::CALLABLE_ELEMENT_TYPE, c.callable_element_type.as_str())
                }
                TaskKind::SubProcess(s) => attrs.opt(
                    tags::TRIGGERED_BY_EVENT,
                    s.triggered_by_event.then_some(true),
                ),
                _ => attrs,
            },
            FlowNodeKind::Gateway(g) => attrs.with(tags::GATEWAY_TYPE, g.as_str()),
            FlowNodeKind::StartEvent(e)
            | FlowNodeKind::IntermediateCatchEvent(e)
            | FlowNodeKind::BoundaryEvent(e) => attrs.with(tags::INTERRUPTING, e.interrupting),
            _ => attrs,
        };
        self.sink.start(tag, attrs)?;

        for id in &n.incoming {
            self.reference(tags::INCOMING_TRANSITION, *id)?;
        }
        for id in &n.outgoing {
            self.reference(tags::OUTGOING_TRANSITION, *id)?;
        }
        if let Some(id) = n.default_transition {
            self.reference(tags::DEFAULT_TRANSITION, id)?;
        }
        if let Some(e) = &n.display_name {
            self.expression(tags::DISPLAY_NAME, e)?;
        }
        if let Some(e) = &n.display_description {
            self.expression(tags::DISPLAY_DESCRIPTION, e)?;
        }
        if let Some(e) = &n.display_description_after_completion {
            self.expression(tags::DISPLAY_DESCRIPTION_AFTER_COMPLETION, e)?;
        }
        if !n.connectors.is_empty() {
            self.list(tags::CONNECTORS, &n.connectors, |w, c| w.connector(c))?;
        }

        match &n.kind {
            FlowNodeKind::Activity(a) => self.activity(a)?,
            FlowNodeKind::Gateway(_) => {}
            FlowNodeKind::StartEvent(e)
            | FlowNodeKind::IntermediateCatchEvent(e)
            | FlowNodeKind::BoundaryEvent(e) => self.catch_event(e)?,
            FlowNodeKind::IntermediateThrowEvent(e) => self.throw_event(e)?,
            FlowNodeKind::EndEvent(end) => {
                self.throw_event(&end.throw)?;
                for trigger in &end.error_triggers {
                    let attrs = Attrs::new().with(tags::ERROR_CODE, &trigger.error_code);
                    self.sink.empty(tags::THROW_ERROR_EVENT_TRIGGER, attrs)?;
                }
                if end.terminate.is_some() {
                    self.sink.empty(tags::TERMINATE_EVENT_TRIGGER, Attrs::new())?;
                }
            }
        }
        self.sink.end(tag)
    }

    fn reference(&mut self, tag: &str, id: TransitionId) -> Result {
        self.sink.empty(tag, Attrs::new().with(tags::IDREF, id))
    }

    fn activity(&mut self, a: &Activity) -> Result {
        if !a.data_definitions.is_empty() {
            self.list(tags::DATA_DEFINITIONS, &a.data_definitions, |w, d| {
                w.data_definition(d)
            })?;
        }
        if !a.business_data_definitions.is_empty() {
            self.list(
                tags::BUSINESS_DATA_DEFINITIONS,
                &a.business_data_definitions,
                |w, b| w.business_data(b),
            )?;
        }
        if !a.operations.is_empty() {
            self.list(tags::OPERATIONS, &a.operations, |w, o| w.operation(o))?;
        }
        if let Some(l) = &a.loop_characteristics {
            self.loop_characteristics(l)?;
        }
        if !a.boundary_events.is_empty() {
            self.list(tags::BOUNDARY_EVENTS, &a.boundary_events, |w, b| {
                w.flow_node(b)
            })?;
        }

        match &a.task {
            TaskKind::Automatic | TaskKind::Manual(_) => {}
            TaskKind::User(u) => {
                if let Some(filter) = &u.human.user_filter {
                    self.user_filter(filter)?;
                }
                if let Some(contract) = &u.contract {
                    self.contract(contract)?;
                }
                if !u.context.is_empty() {
                    self.context(&u.context)?;
                }
            }
            TaskKind::Receive(m) => self.catch_message(m)?,
            TaskKind::Send(m) => self.throw_message(m)?,
            TaskKind::CallActivity(c) => {
                self.expression(tags::CALLABLE_ELEMENT, &c.callable_element)?;
                if let Some(v) = &c.callable_element_version {
                    self.expression(tags::CALLABLE_ELEMENT_VERSION, v)?;
                }
                self.list(tags::DATA_INPUT_OPERATIONS, &c.data_input_operations, |w, o| {
                    w.operation(o)
                })?;
                self.list(tags::DATA_OUTPUT_OPERATIONS, &c.data_output_operations, |w, o| {
                    w.operation(o)
                })?;
                self.list(tags::CONTRACT_INPUTS, &c.contract_inputs, |w, (name, value)| {
                    w.named_expression(tags::CONTRACT_INPUT, name, value)
                })?;
            }
            TaskKind::SubProcess(s) => self.container(&s.body)?,
        }
        if let TaskKind::Manual(h) = &a.task {
            if let Some(filter) = &h.user_filter {
                self.user_filter(filter)?;
            }
        }
        Ok(())
    }

    fn loop_characteristics(&mut self, l: &LoopCharacteristics) -> Result {
        match l {
            LoopCharacteristics::Standard(s) => {
                let attrs = Attrs::new().with(tags::TEST_BEFORE, s.test_before);
                self.sink.start(tags::STANDARD_LOOP_CHARACTERISTICS, attrs)?;
                self.expression(tags::LOOP_CONDITION, &s.loop_condition)?;
                if let Some(max) = &s.loop_max {
                    self.expression(tags::LOOP_MAX, max)?;
                }
                self.sink.end(tags::STANDARD_LOOP_CHARACTERISTICS)
            }
            LoopCharacteristics::MultiInstance(m) => {
                let attrs = Attrs::new()
                    .with(tags::IS_SEQUENTIAL, m.sequential)
                    .opt(tags::LOOP_DATA_INPUT_REF, m.loop_data_input_ref.as_deref())
                    .opt(tags::LOOP_DATA_OUTPUT_REF, m.loop_data_output_ref.as_deref())
                    .opt(tags::DATA_INPUT_ITEM_REF, m.data_input_item_ref.as_deref())
                    .opt(tags::DATA_OUTPUT_ITEM_REF, m.data_output_item_ref.as_deref());
                self.sink.start(tags::MULTI_INSTANCE_LOOP_CHARACTERISTICS, attrs)?;
                if let Some(e) = &m.loop_cardinality {
                    self.expression(tags::LOOP_CARDINALITY, e)?;
                }
                if let Some(e) = &m.completion_condition {
                    self.expression(tags::COMPLETION_CONDITION, e)?;
                }
                self.sink.end(tags::MULTI_INSTANCE_LOOP_CHARACTERISTICS)
            }
        }
    }

    // ── Events ──────────────────────────────────────────────────────

    fn catch_event(&mut self, e: &CatchEvent) -> Result {
        for timer in &e.timer_triggers {
            let attrs = Attrs::new().with(tags::TIMER_TYPE, timer.timer_type.as_str());
            self.sink.start(tags::TIMER_EVENT_TRIGGER, attrs)?;
            self.expression(tags::TIMER_EXPRESSION, &timer.expression)?;
            self.sink.end(tags::TIMER_EVENT_TRIGGER)?;
        }
        for message in &e.message_triggers {
            self.catch_message(message)?;
        }
        for signal in &e.signal_triggers {
            let attrs = Attrs::new().with(tags::SIGNAL_NAME, &signal.signal_name);
            self.sink.empty(tags::CATCH_SIGNAL_EVENT_TRIGGER, attrs)?;
        }
        for error in &e.error_triggers {
            let attrs = Attrs::new().opt(tags::ERROR_CODE, error.error_code.as_deref());
            self.sink.empty(tags::CATCH_ERROR_EVENT_TRIGGER, attrs)?;
        }
        Ok(())
    }

    fn throw_event(&mut self, e: &ThrowEvent) -> Result {
        for message in &e.message_triggers {
            self.throw_message(message)?;
        }
        for signal in &e.signal_triggers {
            let attrs = Attrs::new().with(tags::SIGNAL_NAME, &signal.signal_name);
            self.sink.empty(tags::THROW_SIGNAL_EVENT_TRIGGER, attrs)?;
        }
        Ok(())
    }

    fn catch_message(&mut self, m: &CatchMessageTrigger) -> Result {
        let attrs = Attrs::new().with(tags::MESSAGE_NAME, &m.message_name);
        self.sink.start(tags::CATCH_MESSAGE_EVENT_TRIGGER, attrs)?;
        self.list(tags::OPERATIONS, &m.operations, |w, o| w.operation(o))?;
        self.correlations(&m.correlations)?;
        self.sink.end(tags::CATCH_MESSAGE_EVENT_TRIGGER)
    }

    fn throw_message(&mut self, m: &ThrowMessageTrigger) -> Result {
        let attrs = Attrs::new().with(tags::MESSAGE_NAME, &m.message_name);
        self.sink.start(tags::THROW_MESSAGE_EVENT_TRIGGER, attrs)?;
        self.expression(tags::TARGET_PROCESS, &m.target_process)?;
        if let Some(node) = &m.target_flow_node {
            self.expression(tags::TARGET_FLOW_NODE, node)?;
        }
        self.correlations(&m.correlations)?;
        self.list(tags::DATA_DEFINITIONS, &m.data_definitions, |w, d| {
            w.data_definition(d)
        })?;
        self.sink.end(tags::THROW_MESSAGE_EVENT_TRIGGER)
    }

    fn correlations(&mut self, correlations: &[Correlation]) -> Result {
        self.list(tags::CORRELATIONS, correlations, |w, c| {
            w.sink.start(tags::CORRELATION, Attrs::new())?;
            w.expression(tags::KEY, &c.key)?;
            w.expression(tags::VALUE, &c.value)?;
            w.sink.end(tags::CORRELATION)
        })
    }

    // ── Leaf values ─────────────────────────────────────────────────

    fn expression(&mut self, role: &str, e: &Expression) -> Result {
        let attrs = Attrs::new()
            .with(tags::NAME, &e.name)
            .with(tags::EXPRESSION_TYPE, e.kind.as_str())
            .with(tags::RETURN_TYPE, &e.return_type)
            .opt(tags::INTERPRETER, e.interpreter.as_deref());
        self.sink.start(role, attrs)?;
        self.sink.text_element(tags::CONTENT, &e.content)?;
        for dependency in &e.dependencies {
            self.expression(tags::EXPRESSION, dependency)?;
        }
        self.sink.end(role)
    }

    /// `<tag name="..."><expression .../></tag>`
    fn named_expression(&mut self, tag: &str, name: &str, value: &Expression) -> Result {
        self.sink.start(tag, Attrs::new().with(tags::NAME, name))?;
        self.expression(tags::EXPRESSION, value)?;
        self.sink.end(tag)
    }

    fn data_definition(&mut self, d: &DataDefinition) -> Result {
        let (tag, long_text) = match &d.kind {
            DataKind::Generic => (tags::DATA_DEFINITION, None),
            DataKind::Text { long_text } => (tags::TEXT_DATA_DEFINITION, Some(*long_text)),
            DataKind::Xml { .. } => (tags::XML_DATA_DEFINITION, None),
        };
        let attrs = Attrs::new()
            .with(tags::NAME, &d.name)
            .opt(tags::DESCRIPTION, d.description.as_deref())
            .with(tags::CLASS_NAME, &d.class_name)
            .with(tags::TRANSIENT, d.transient)
            .opt(tags::LONG_TEXT, long_text);
        self.sink.start(tag, attrs)?;
        if let DataKind::Xml { namespace, element } = &d.kind {
            if let Some(ns) = namespace {
                self.sink.text_element(tags::NAMESPACE, ns)?;
            }
            if let Some(el) = element {
                self.sink.text_element(tags::ELEMENT, el)?;
            }
        }
        if let Some(value) = &d.default_value {
            self.expression(tags::DEFAULT_VALUE, value)?;
        }
        self.sink.end(tag)
    }

    fn business_data(&mut self, b: &BusinessDataDefinition) -> Result {
        let attrs = Attrs::new()
            .with(tags::NAME, &b.name)
            .opt(tags::DESCRIPTION, b.description.as_deref())
            .with(tags::CLASS_NAME, &b.class_name)
            .with(tags::MULTIPLE, b.multiple);
        match &b.default_value {
            Some(value) => {
                self.sink.start(tags::BUSINESS_DATA_DEFINITION, attrs)?;
                self.expression(tags::DEFAULT_VALUE, value)?;
                self.sink.end(tags::BUSINESS_DATA_DEFINITION)
            }
            None => self.sink.empty(tags::BUSINESS_DATA_DEFINITION, attrs),
        }
    }

    fn document(&mut self, d: &DocumentDefinition) -> Result {
        let attrs = Attrs::new()
            .with(tags::NAME, &d.name)
            .opt(tags::DESCRIPTION, d.description.as_deref())
            .opt(tags::MIME_TYPE, d.mime_type.as_deref());
        self.sink.start(tags::DOCUMENT_DEFINITION, attrs)?;
        if let Some(url) = &d.url {
            self.sink.text_element(tags::URL, url)?;
        }
        if let Some(file) = &d.file {
            self.sink.text_element(tags::FILE, file)?;
        }
        if let Some(name) = &d.file_name {
            self.sink.text_element(tags::FILE_NAME, name)?;
        }
        if let Some(value) = &d.initial_value {
            self.expression(tags::INITIAL_VALUE, value)?;
        }
        self.sink.end(tags::DOCUMENT_DEFINITION)
    }

    fn operation(&mut self, o: &Operation) -> Result {
        let attrs = Attrs::new()
            .with(tags::OPERATOR_TYPE, o.operator_type.as_str())
            .opt(tags::OPERATOR, o.operator.as_deref())
            .opt(tags::OPERATOR_INPUT_TYPE, o.operator_input_type.as_deref());
        self.sink.start(tags::OPERATION, attrs)?;
        let left = Attrs::new()
            .with(tags::NAME, &o.left_operand.name)
            .with(tags::TYPE, &o.left_operand.operand_type);
        self.sink.empty(tags::LEFT_OPERAND, left)?;
        if let Some(right) = &o.right_operand {
            self.expression(tags::RIGHT_OPERAND, right)?;
        }
        self.sink.end(tags::OPERATION)
    }

    fn connector(&mut self, c: &ConnectorDefinition) -> Result {
        let attrs = Attrs::new()
            .with(tags::NAME, &c.name)
            .with(tags::CONNECTOR_ID, &c.connector_id)
            .with(tags::VERSION, &c.version)
            .with(tags::ACTIVATION_EVENT, c.activation_event.as_str())
            .with(tags::FAIL_ACTION, c.fail_action.as_str())
            .opt(tags::ERROR_CODE, c.error_code.as_deref());
        self.sink.start(tags::CONNECTOR, attrs)?;
        self.list(tags::INPUTS, &c.inputs, |w, i| {
            w.named_expression(tags::INPUT, &i.name, &i.value)
        })?;
        self.list(tags::OUTPUTS, &c.outputs, |w, o| w.operation(o))?;
        self.sink.end(tags::CONNECTOR)
    }

    fn user_filter(&mut self, f: &UserFilter) -> Result {
        let attrs = Attrs::new()
            .with(tags::NAME, &f.name)
            .with(tags::USER_FILTER_ID, &f.filter_id)
            .with(tags::VERSION, &f.version);
        self.sink.start(tags::USER_FILTER, attrs)?;
        self.list(tags::INPUTS, &f.inputs, |w, i| {
            w.named_expression(tags::INPUT, &i.name, &i.value)
        })?;
        self.sink.end(tags::USER_FILTER)
    }

    fn contract(&mut self, c: &Contract) -> Result {
        self.sink.start(tags::CONTRACT, Attrs::new())?;
        self.input_definitions(&c.inputs)?;
        self.list(tags::CONSTRAINT_DEFINITIONS, &c.constraints, |w, c| {
            w.sink.start(
                tags::CONSTRAINT_DEFINITION,
                Attrs::new().with(tags::NAME, &c.name),
            )?;
            w.sink
                .text_element(tags::CONDITIONAL_EXPRESSION, &c.expression)?;
            if let Some(explanation) = &c.explanation {
                w.sink.text_element(tags::EXPLANATION, explanation)?;
            }
            w.list(tags::INPUT_NAMES, &c.input_names, |w, n| {
                w.sink.text_element(tags::INPUT_NAME, n)
            })?;
            w.sink.end(tags::CONSTRAINT_DEFINITION)
        })?;
        self.sink.end(tags::CONTRACT)
    }

    fn input_definitions(&mut self, inputs: &[InputDefinition]) -> Result {
        self.list(tags::INPUT_DEFINITIONS, inputs, |w, i| {
            let attrs = Attrs::new()
                .with(tags::NAME, &i.name)
                .opt(tags::DESCRIPTION, i.description.as_deref())
                .with(tags::MULTIPLE, i.multiple)
                .opt(tags::TYPE, i.input_type.map(InputType::as_str));
            if i.inputs.is_empty() {
                return w.sink.empty(tags::INPUT_DEFINITION, attrs);
            }
            w.sink.start(tags::INPUT_DEFINITION, attrs)?;
            w.input_definitions(&i.inputs)?;
            w.sink.end(tags::INPUT_DEFINITION)
        })
    }
}

fn human_attrs(attrs: Attrs, h: &HumanTask) -> Attrs {
    attrs
        .opt(tags::ACTOR_NAME, h.actor_name.as_deref())
        .opt(tags::PRIORITY, h.priority.map(TaskPriority::as_str))
        .opt(tags::EXPECTED_DURATION, h.expected_duration)
}

fn node_tag(n: &FlowNode) -> &'static str {
    match &n.kind {
        FlowNodeKind::Activity(a) => match a.task {
            TaskKind::Automatic => tags::AUTOMATIC_TASK,
            TaskKind::User(_) => tags::USER_TASK,
            TaskKind::Manual(_) => tags::MANUAL_TASK,
            TaskKind::Receive(_) => tags::RECEIVE_TASK,
            TaskKind::Send(_) => tags::SEND_TASK,
            TaskKind::CallActivity(_) => tags::CALL_ACTIVITY,
            TaskKind::SubProcess(_) => tags::SUB_PROCESS,
        },
        FlowNodeKind::Gateway(_) => tags::GATEWAY,
        FlowNodeKind::StartEvent(_) => tags::START_EVENT,
        FlowNodeKind::IntermediateCatchEvent(_) => tags::INTERMEDIATE_CATCH_EVENT,
        FlowNodeKind::IntermediateThrowEvent(_) => tags::INTERMEDIATE_THROW_EVENT,
        FlowNodeKind::EndEvent(_) => tags::END_EVENT,
        FlowNodeKind::BoundaryEvent(_) => tags::BOUNDARY_EVENT,
    }
}
