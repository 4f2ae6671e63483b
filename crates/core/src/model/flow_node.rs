//! Flow nodes: the vertices of the process graph.

use serde::{Deserialize, Serialize};

use super::{
    BusinessDataDefinition, CatchErrorTrigger, CatchMessageTrigger, ConnectorDefinition,
    ContainerId, ContainerOwner, ContextEntry, Contract, DataDefinition, Expression,
    FlowElementContainer, FlowNodeId, Operation, SignalTrigger, TerminateTrigger,
    ThrowErrorTrigger, ThrowMessageTrigger, TimerTrigger, TransitionId, UserFilter,
};

/// A vertex of the process graph. The fields shared by every kind live here;
/// kind-specific data lives in [`FlowNodeKind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowNode {
    pub id: FlowNodeId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<Expression>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_description: Option<Expression>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_description_after_completion: Option<Expression>,
    #[serde(default)]
    pub connectors: Vec<ConnectorDefinition>,
    #[serde(default)]
    pub incoming: Vec<TransitionId>,
    #[serde(default)]
    pub outgoing: Vec<TransitionId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_transition: Option<TransitionId>,
    /// Container whose identifier namespace this node belongs to. Boundary
    /// events point at the container of the activity they are attached to.
    #[serde(default = "root_container")]
    pub container: ContainerId,
    pub kind: FlowNodeKind,
}

fn root_container() -> ContainerId {
    ContainerId::ROOT
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowNodeKind {
    Activity(Activity),
    Gateway(GatewayType),
    StartEvent(CatchEvent),
    IntermediateCatchEvent(CatchEvent),
    IntermediateThrowEvent(ThrowEvent),
    EndEvent(EndEvent),
    BoundaryEvent(CatchEvent),
}

impl FlowNode {
    pub fn new(id: u64, name: impl Into<String>, kind: FlowNodeKind) -> Self {
        FlowNode {
            id: FlowNodeId(id),
            name: name.into(),
            description: None,
            display_name: None,
            display_description: None,
            display_description_after_completion: None,
            connectors: Vec::new(),
            incoming: Vec::new(),
            outgoing: Vec::new(),
            default_transition: None,
            container: ContainerId::ROOT,
            kind,
        }
    }

    pub fn automatic_task(id: u64, name: impl Into<String>) -> Self {
        FlowNode::new(id, name, FlowNodeKind::Activity(Activity::new(TaskKind::Automatic)))
    }

    pub fn user_task(id: u64, name: impl Into<String>, actor_name: impl Into<String>) -> Self {
        let task = UserTask {
            human: HumanTask::for_actor(actor_name),
            contract: None,
            context: Vec::new(),
        };
        FlowNode::new(id, name, FlowNodeKind::Activity(Activity::new(TaskKind::User(task))))
    }

    pub fn sub_process(id: u64, name: impl Into<String>, body: FlowElementContainer) -> Self {
        let sub = SubProcess {
            triggered_by_event: false,
            body,
        };
        FlowNode::new(
            id,
            name,
            FlowNodeKind::Activity(Activity::new(TaskKind::SubProcess(sub))),
        )
    }

    pub fn gateway(id: u64, name: impl Into<String>, gateway_type: GatewayType) -> Self {
        FlowNode::new(id, name, FlowNodeKind::Gateway(gateway_type))
    }

    pub fn start_event(id: u64, name: impl Into<String>) -> Self {
        FlowNode::new(id, name, FlowNodeKind::StartEvent(CatchEvent::default()))
    }

    pub fn end_event(id: u64, name: impl Into<String>) -> Self {
        FlowNode::new(id, name, FlowNodeKind::EndEvent(EndEvent::default()))
    }

    pub fn boundary_event(id: u64, name: impl Into<String>, event: CatchEvent) -> Self {
        FlowNode::new(id, name, FlowNodeKind::BoundaryEvent(event))
    }

    pub fn activity(&self) -> Option<&Activity> {
        match &self.kind {
            FlowNodeKind::Activity(a) => Some(a),
            _ => None,
        }
    }

    pub fn activity_mut(&mut self) -> Option<&mut Activity> {
        match &mut self.kind {
            FlowNodeKind::Activity(a) => Some(a),
            _ => None,
        }
    }

    pub fn boundary_events(&self) -> &[FlowNode] {
        self.activity().map_or(&[], |a| a.boundary_events.as_slice())
    }

    /// Nested body when this node is a sub-process.
    pub fn sub_process_body(&self) -> Option<&FlowElementContainer> {
        match self.activity().map(|a| &a.task) {
            Some(TaskKind::SubProcess(sub)) => Some(&sub.body),
            _ => None,
        }
    }

    pub(crate) fn sub_process_body_mut(&mut self) -> Option<&mut FlowElementContainer> {
        match self.activity_mut().map(|a| &mut a.task) {
            Some(TaskKind::SubProcess(sub)) => Some(&mut sub.body),
            _ => None,
        }
    }

    pub(crate) fn assign_scope(&mut self, container: ContainerId, next: &mut u32) {
        self.container = container;
        let id = self.id;
        if let Some(activity) = self.activity_mut() {
            for boundary in &mut activity.boundary_events {
                boundary.container = container;
            }
        }
        if let Some(body) = self.sub_process_body_mut() {
            body.assign_scope(ContainerOwner::SubProcess { container, node: id }, next);
        }
    }
}

// ── Activities ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default)]
    pub data_definitions: Vec<DataDefinition>,
    #[serde(default)]
    pub business_data_definitions: Vec<BusinessDataDefinition>,
    #[serde(default)]
    pub operations: Vec<Operation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loop_characteristics: Option<LoopCharacteristics>,
    #[serde(default)]
    pub boundary_events: Vec<FlowNode>,
    pub task: TaskKind,
}

impl Activity {
    pub fn new(task: TaskKind) -> Self {
        Activity {
            data_definitions: Vec::new(),
            business_data_definitions: Vec::new(),
            operations: Vec::new(),
            loop_characteristics: None,
            boundary_events: Vec::new(),
            task,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    Automatic,
    User(UserTask),
    Manual(HumanTask),
    Receive(CatchMessageTrigger),
    Send(ThrowMessageTrigger),
    CallActivity(CallActivity),
    SubProcess(SubProcess),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    Highest,
    AboveNormal,
    Normal,
    UnderNormal,
    Lowest,
}

impl TaskPriority {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskPriority::Highest => "HIGHEST",
            TaskPriority::AboveNormal => "ABOVE_NORMAL",
            TaskPriority::Normal => "NORMAL",
            TaskPriority::UnderNormal => "UNDER_NORMAL",
            TaskPriority::Lowest => "LOWEST",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "HIGHEST" => Some(TaskPriority::Highest),
            "ABOVE_NORMAL" => Some(TaskPriority::AboveNormal),
            "NORMAL" => Some(TaskPriority::Normal),
            "UNDER_NORMAL" => Some(TaskPriority::UnderNormal),
            "LOWEST" => Some(TaskPriority::Lowest),
            _ => None,
        }
    }
}

/// Fields shared by user and manual tasks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HumanTask {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    /// Expected duration in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_duration: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_filter: Option<UserFilter>,
}

impl HumanTask {
    pub fn for_actor(actor_name: impl Into<String>) -> Self {
        HumanTask {
            actor_name: Some(actor_name.into()),
            ..HumanTask::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserTask {
    pub human: HumanTask,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract: Option<Contract>,
    #[serde(default)]
    pub context: Vec<ContextEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CallableElementType {
    #[default]
    Process,
    Bpmn,
}

impl CallableElementType {
    pub fn as_str(self) -> &'static str {
        match self {
            CallableElementType::Process => "PROCESS",
            CallableElementType::Bpmn => "BPMN",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PROCESS" => Some(CallableElementType::Process),
            "BPMN" => Some(CallableElementType::Bpmn),
            _ => None,
        }
    }
}

/// Starts another deployed process and maps data across the boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallActivity {
    pub callable_element: Expression,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callable_element_version: Option<Expression>,
    #[serde(default)]
    pub callable_element_type: CallableElementType,
    #[serde(default)]
    pub data_input_operations: Vec<Operation>,
    #[serde(default)]
    pub data_output_operations: Vec<Operation>,
    /// Values passed to the called process's contract, by input name.
    #[serde(default)]
    pub contract_inputs: Vec<(String, Expression)>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubProcess {
    #[serde(default)]
    pub triggered_by_event: bool,
    pub body: FlowElementContainer,
}

// ── Loops ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardLoop {
    pub loop_condition: Expression,
    #[serde(default)]
    pub test_before: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loop_max: Option<Expression>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiInstanceLoop {
    #[serde(default)]
    pub sequential: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loop_data_input_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loop_data_output_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_input_item_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_output_item_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loop_cardinality: Option<Expression>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_condition: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoopCharacteristics {
    Standard(StandardLoop),
    MultiInstance(MultiInstanceLoop),
}

// ── Gateways and events ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GatewayType {
    Parallel,
    Exclusive,
    Inclusive,
}

impl GatewayType {
    pub fn as_str(self) -> &'static str {
        match self {
            GatewayType::Parallel => "PARALLEL",
            GatewayType::Exclusive => "EXCLUSIVE",
            GatewayType::Inclusive => "INCLUSIVE",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PARALLEL" => Some(GatewayType::Parallel),
            "EXCLUSIVE" => Some(GatewayType::Exclusive),
            "INCLUSIVE" => Some(GatewayType::Inclusive),
            _ => None,
        }
    }
}

/// Start, intermediate-catch and boundary events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchEvent {
    #[serde(default = "interrupting_default")]
    pub interrupting: bool,
    #[serde(default)]
    pub timer_triggers: Vec<TimerTrigger>,
    #[serde(default)]
    pub message_triggers: Vec<CatchMessageTrigger>,
    #[serde(default)]
    pub signal_triggers: Vec<SignalTrigger>,
    #[serde(default)]
    pub error_triggers: Vec<CatchErrorTrigger>,
}

fn interrupting_default() -> bool {
    true
}

impl Default for CatchEvent {
    fn default() -> Self {
        CatchEvent {
            interrupting: true,
            timer_triggers: Vec::new(),
            message_triggers: Vec::new(),
            signal_triggers: Vec::new(),
            error_triggers: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThrowEvent {
    #[serde(default)]
    pub message_triggers: Vec<ThrowMessageTrigger>,
    #[serde(default)]
    pub signal_triggers: Vec<SignalTrigger>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EndEvent {
    #[serde(default)]
    pub throw: ThrowEvent,
    #[serde(default)]
    pub error_triggers: Vec<ThrowErrorTrigger>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminate: Option<TerminateTrigger>,
}
