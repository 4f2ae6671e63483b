//! In-memory process definition graph.
//!
//! The graph is an ownership tree: the [`ProcessDefinition`] owns the root
//! [`FlowElementContainer`], containers own their flow nodes and transitions,
//! and sub-process nodes own their nested container. Cross references
//! (transition endpoints, node membership) are identifiers resolved by query.

mod container;
mod contract;
mod data;
mod expression;
mod flow_node;
mod operation;
mod trigger;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use container::{ContainerOwner, FlowElementContainer, Transition, UnresolvedEndpoint};
pub use contract::{ConstraintDefinition, Contract, InputDefinition, InputType};
pub use data::{
    BusinessDataDefinition, DataDefinition, DataKind, DocumentDefinition, DocumentListDefinition,
};
pub use expression::{
    Expression, ExpressionKind, BOOLEAN_TYPE, DOUBLE_TYPE, FLOAT_TYPE, GROOVY, INTEGER_TYPE,
    LONG_TYPE, STRING_TYPE,
};
pub use flow_node::{
    Activity, CallActivity, CallableElementType, CatchEvent, EndEvent, FlowNode, FlowNodeKind,
    GatewayType, HumanTask, LoopCharacteristics, MultiInstanceLoop, StandardLoop, SubProcess,
    TaskKind, TaskPriority, ThrowEvent, UserTask,
};
pub use operation::{
    ActivationEvent, ConnectorDefinition, ConnectorInput, FailAction, LeftOperand, Operation,
    OperatorType, UserFilter,
};
pub use trigger::{
    CatchErrorTrigger, CatchMessageTrigger, Correlation, SignalTrigger, TerminateTrigger,
    ThrowErrorTrigger, ThrowMessageTrigger, TimerTrigger, TimerType,
};

// ── Identifiers ─────────────────────────────────────────────────────

macro_rules! id_newtype {
    ($(#[$meta:meta])* $name:ident($inner:ty)) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub $inner);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(
    /// Identifier of a flow node, unique within its container's namespace.
    FlowNodeId(u64)
);
id_newtype!(
    /// Identifier of a transition, unique within its container.
    TransitionId(u64)
);
id_newtype!(
    /// Pre-order index of a container within one process definition.
    ContainerId(u32)
);

impl ContainerId {
    pub const ROOT: ContainerId = ContainerId(0);
}

// ── Process-level entities ──────────────────────────────────────────

/// Number of labeled string-index slots on a process definition.
pub const STRING_INDEX_SLOTS: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StringIndex {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub initiator: bool,
}

impl Actor {
    pub fn new(name: impl Into<String>) -> Self {
        Actor {
            name: name.into(),
            description: None,
            initiator: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A named expression exposed to clients as part of a task or process context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextEntry {
    pub key: String,
    pub expression: Expression,
}

/// A deployable process definition: the root of the object graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub string_indexes: [StringIndex; STRING_INDEX_SLOTS],
    #[serde(default)]
    pub actors: Vec<Actor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor_initiator: Option<Actor>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract: Option<Contract>,
    #[serde(default)]
    pub context: Vec<ContextEntry>,
    pub flow_elements: FlowElementContainer,
}

impl ProcessDefinition {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        ProcessDefinition {
            id: None,
            name: name.into(),
            version: version.into(),
            description: None,
            string_indexes: Default::default(),
            actors: Vec::new(),
            actor_initiator: None,
            parameters: Vec::new(),
            contract: None,
            context: Vec::new(),
            flow_elements: FlowElementContainer::new(ContainerId::ROOT, ContainerOwner::Process),
        }
    }

    /// Number every container in pre-order (root first, nested sub-process
    /// bodies in declaration order) and point each flow node, including
    /// boundary events, at the container that declares it.
    pub fn assign_scopes(&mut self) {
        let mut next = 0u32;
        self.flow_elements
            .assign_scope(ContainerOwner::Process, &mut next);
    }

    /// Look up a container by id anywhere in the nesting tree.
    pub fn container(&self, id: ContainerId) -> Option<&FlowElementContainer> {
        self.flow_elements.find_container(id)
    }

    /// The owner of a container: the process itself or a sub-process node.
    pub fn owner_of(&self, id: ContainerId) -> Option<ContainerOwner> {
        self.container(id).map(|c| c.owner)
    }

    /// All containers in pre-order.
    pub fn containers(&self) -> Vec<&FlowElementContainer> {
        let mut out = Vec::new();
        self.flow_elements.collect_containers(&mut out);
        out
    }

    pub fn flow_node_count(&self) -> usize {
        self.containers()
            .iter()
            .map(|c| {
                c.flow_nodes()
                    .map(|n| 1 + n.boundary_events().len())
                    .sum::<usize>()
            })
            .sum()
    }

    pub fn transition_count(&self) -> usize {
        self.containers().iter().map(|c| c.transitions.len()).sum()
    }

    pub fn actor(&self, name: &str) -> Option<&Actor> {
        self.actors.iter().find(|a| a.name == name)
    }
}
