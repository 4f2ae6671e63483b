//! Element bindings: one mapper per element kind, driven depth-first by the
//! document reader.
//!
//! For every element the reader creates a fresh binding, calls
//! [`ElementBinding::set_attributes`], then feeds each immediate child in
//! document order (text-valued children through `set_child_element`,
//! children with their own binding through `set_child_object`), and finally
//! takes the result with [`ElementBinding::get_object`]. Children a binding
//! does not recognize are ignored.

mod container;
mod flow_nodes;
mod process;
mod triggers;
mod values;

use crate::error::ParseError;
use crate::model::*;
use crate::options::ParseOptions;
use crate::xml::tags;
use crate::xml::Attributes;

pub(crate) use container::RawTransition;
pub(crate) use process::Dependencies;
pub(crate) use values::StringIndexSlot;

/// The contract every element binding implements.
pub trait ElementBinding {
    /// Tag this binding was created for.
    fn element_tag(&self) -> &str;

    fn set_attributes(&mut self, attributes: &Attributes) -> Result<(), ParseError>;

    fn set_child_element(
        &mut self,
        _name: &str,
        _value: &str,
        _attributes: &Attributes,
    ) -> Result<(), ParseError> {
        Ok(())
    }

    fn set_child_object(&mut self, _name: &str, _value: Bound) -> Result<(), ParseError> {
        Ok(())
    }

    fn get_object(self: Box<Self>) -> Result<Bound, ParseError>;
}

macro_rules! bound_objects {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        /// An object materialized by a binding, handed to the parent binding.
        #[derive(Debug)]
        pub enum Bound {
            $($variant($ty),)*
        }

        $(
            impl From<$ty> for Bound {
                fn from(value: $ty) -> Self {
                    Bound::$variant(value)
                }
            }

            impl TryFrom<Bound> for $ty {
                type Error = Bound;

                fn try_from(bound: Bound) -> Result<Self, Bound> {
                    match bound {
                        Bound::$variant(value) => Ok(value),
                        other => Err(other),
                    }
                }
            }
        )*
    };
}

bound_objects!(
    Text(String),
    List(Vec<Bound>),
    Expression(Expression),
    Transition(RawTransition),
    Connector(ConnectorDefinition),
    ConnectorInput(ConnectorInput),
    ContractInput((String, Expression)),
    DataDefinition(DataDefinition),
    BusinessData(BusinessDataDefinition),
    Document(DocumentDefinition),
    DocumentList(DocumentListDefinition),
    FlowNode(FlowNode),
    Container(FlowElementContainer),
    Operation(Operation),
    LeftOperand(LeftOperand),
    Loop(LoopCharacteristics),
    Correlation(Correlation),
    Timer(TimerTrigger),
    CatchMessage(CatchMessageTrigger),
    ThrowMessage(ThrowMessageTrigger),
    Signal(SignalTrigger),
    CatchError(CatchErrorTrigger),
    ThrowError(ThrowErrorTrigger),
    Terminate(TerminateTrigger),
    UserFilter(UserFilter),
    Contract(Contract),
    InputDefinition(InputDefinition),
    Constraint(ConstraintDefinition),
    ContextEntry(ContextEntry),
    Parameter(Parameter),
    Actor(Actor),
    Dependencies(Dependencies),
    StringIndex(StringIndexSlot),
    Definition(ProcessDefinition),
);

impl Bound {
    /// Items of a list wrapper that have type `T`; a single object of type
    /// `T` yields one item. Anything else is dropped.
    pub fn into_vec<T: TryFrom<Bound>>(self) -> Vec<T> {
        match self {
            Bound::List(items) => items.into_iter().filter_map(|b| T::try_from(b).ok()).collect(),
            single => T::try_from(single).into_iter().collect(),
        }
    }
}

/// Create the binding registered for `tag`, if any.
pub(crate) fn binding_for(tag: &str, options: &ParseOptions) -> Option<Box<dyn ElementBinding>> {
    use flow_nodes::*;
    use triggers::*;
    use values::*;

    if tags::EXPRESSION_ROLES.contains(&tag) {
        return Some(Box::new(ExpressionBinding::new(tag)));
    }
    let binding: Box<dyn ElementBinding> = match tag {
        tags::STRING_INDEXES
        | tags::TRANSITIONS
        | tags::CONNECTORS
        | tags::INPUTS
        | tags::OUTPUTS
        | tags::BUSINESS_DATA_DEFINITIONS
        | tags::DATA_DEFINITIONS
        | tags::DOCUMENT_DEFINITIONS
        | tags::DOCUMENT_LIST_DEFINITIONS
        | tags::FLOW_NODES
        | tags::BOUNDARY_EVENTS
        | tags::OPERATIONS
        | tags::DATA_INPUT_OPERATIONS
        | tags::DATA_OUTPUT_OPERATIONS
        | tags::CONTRACT_INPUTS
        | tags::CORRELATIONS
        | tags::PARAMETERS
        | tags::ACTORS
        | tags::INPUT_DEFINITIONS
        | tags::CONSTRAINT_DEFINITIONS
        | tags::CONTEXT => Box::new(ListBinding::new(tag)),
        tags::INPUT_NAMES => Box::new(ListBinding::with_text_items(tag, tags::INPUT_NAME)),

        tags::PROCESS_DEFINITION => Box::new(process::ProcessDefinitionBinding::default()),
        tags::DEPENDENCIES => Box::new(process::DependenciesBinding::default()),
        tags::FLOW_ELEMENTS => Box::new(container::FlowElementsBinding::new(*options)),
        tags::TRANSITION => Box::new(container::TransitionBinding::default()),

        tags::STRING_INDEX => Box::new(StringIndexBinding::default()),
        tags::CONNECTOR => Box::new(ConnectorBinding::default()),
        tags::INPUT => Box::new(ConnectorInputBinding::new(tag)),
        tags::CONTRACT_INPUT => Box::new(ConnectorInputBinding::new(tag)),
        tags::DATA_DEFINITION | tags::TEXT_DATA_DEFINITION | tags::XML_DATA_DEFINITION => {
            Box::new(DataDefinitionBinding::new(tag))
        }
        tags::BUSINESS_DATA_DEFINITION => Box::new(BusinessDataBinding::default()),
        tags::DOCUMENT_DEFINITION => Box::new(DocumentBinding::default()),
        tags::DOCUMENT_LIST_DEFINITION => Box::new(DocumentListBinding::default()),
        tags::OPERATION => Box::new(OperationBinding::default()),
        tags::LEFT_OPERAND => Box::new(LeftOperandBinding::default()),
        tags::CORRELATION => Box::new(CorrelationBinding::default()),
        tags::STANDARD_LOOP_CHARACTERISTICS => Box::new(StandardLoopBinding::default()),
        tags::MULTI_INSTANCE_LOOP_CHARACTERISTICS => Box::new(MultiInstanceLoopBinding::default()),
        tags::USER_FILTER => Box::new(UserFilterBinding::default()),
        tags::CONTRACT => Box::new(ContractBinding::default()),
        tags::INPUT_DEFINITION => Box::new(InputDefinitionBinding::default()),
        tags::CONSTRAINT_DEFINITION => Box::new(ConstraintBinding::default()),
        tags::CONTEXT_ENTRY => Box::new(ContextEntryBinding::default()),
        tags::PARAMETER => Box::new(ParameterBinding::default()),
        tags::ACTOR | tags::ACTOR_INITIATOR => Box::new(ActorBinding::new(tag)),

        tags::TIMER_EVENT_TRIGGER => Box::new(TimerTriggerBinding::default()),
        tags::CATCH_MESSAGE_EVENT_TRIGGER => Box::new(CatchMessageTriggerBinding::default()),
        tags::THROW_MESSAGE_EVENT_TRIGGER => Box::new(ThrowMessageTriggerBinding::default()),
        tags::CATCH_SIGNAL_EVENT_TRIGGER | tags::THROW_SIGNAL_EVENT_TRIGGER => {
            Box::new(SignalTriggerBinding::new(tag))
        }
        tags::CATCH_ERROR_EVENT_TRIGGER => Box::new(CatchErrorTriggerBinding::default()),
        tags::THROW_ERROR_EVENT_TRIGGER => Box::new(ThrowErrorTriggerBinding::default()),
        tags::TERMINATE_EVENT_TRIGGER => Box::new(TerminateTriggerBinding),

        tags::AUTOMATIC_TASK => Box::new(AutomaticTaskBinding::default()),
        tags::USER_TASK => Box::new(UserTaskBinding::default()),
        tags::MANUAL_TASK => Box::new(ManualTaskBinding::default()),
        tags::RECEIVE_TASK => Box::new(ReceiveTaskBinding::default()),
        tags::SEND_TASK => Box::new(SendTaskBinding::default()),
        tags::CALL_ACTIVITY => Box::new(CallActivityBinding::default()),
        tags::SUB_PROCESS => Box::new(SubProcessBinding::default()),
        tags::GATEWAY => Box::new(GatewayBinding::default()),
        tags::START_EVENT | tags::INTERMEDIATE_CATCH_EVENT | tags::BOUNDARY_EVENT => {
            Box::new(CatchEventBinding::new(tag))
        }
        tags::INTERMEDIATE_THROW_EVENT => Box::new(ThrowEventBinding::default()),
        tags::END_EVENT => Box::new(EndEventBinding::default()),
        _ => return None,
    };
    Some(binding)
}

// ── Shared attribute handling ───────────────────────────────────────

pub(crate) fn required<'a>(
    element: &str,
    attributes: &'a Attributes,
    name: &str,
) -> Result<&'a str, ParseError> {
    attributes
        .get(name)
        .ok_or_else(|| ParseError::missing(element, name))
}

pub(crate) fn optional(attributes: &Attributes, name: &str) -> Option<String> {
    attributes.get(name).map(str::to_owned)
}

pub(crate) fn flag(
    element: &str,
    attributes: &Attributes,
    name: &str,
    default: bool,
) -> Result<bool, ParseError> {
    match attributes.get(name) {
        None => Ok(default),
        Some("true") => Ok(true),
        Some("false") => Ok(false),
        Some(other) => Err(ParseError::invalid(element, name, other, "true or false")),
    }
}

pub(crate) fn number(
    element: &str,
    attributes: &Attributes,
    name: &str,
) -> Result<Option<u64>, ParseError> {
    attributes
        .get(name)
        .map(|v| {
            v.trim()
                .parse::<u64>()
                .map_err(|_| ParseError::invalid(element, name, v, "a non-negative integer"))
        })
        .transpose()
}

pub(crate) fn required_number(
    element: &str,
    attributes: &Attributes,
    name: &str,
) -> Result<u64, ParseError> {
    number(element, attributes, name)?.ok_or_else(|| ParseError::missing(element, name))
}

/// Parse an enumerated keyword attribute.
pub(crate) fn keyword<T>(
    element: &str,
    attributes: &Attributes,
    name: &str,
    parse: fn(&str) -> Option<T>,
    expected: &str,
) -> Result<Option<T>, ParseError> {
    attributes
        .get(name)
        .map(|v| parse(v).ok_or_else(|| ParseError::invalid(element, name, v, expected)))
        .transpose()
}

/// The `id`, `name` and `description` attributes shared by nearly every
/// element kind.
#[derive(Debug, Clone, Default)]
pub(crate) struct NamedElement {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl NamedElement {
    pub fn read(element: &str, attributes: &Attributes) -> Result<Self, ParseError> {
        Ok(NamedElement {
            id: number(element, attributes, tags::ID)?,
            name: optional(attributes, tags::NAME),
            description: optional(attributes, tags::DESCRIPTION),
        })
    }

    pub fn require_name(&mut self, element: &str) -> Result<String, ParseError> {
        self.name
            .take()
            .ok_or_else(|| ParseError::missing(element, tags::NAME))
    }

    pub fn require_id(&self, element: &str) -> Result<u64, ParseError> {
        self.id.ok_or_else(|| ParseError::missing(element, tags::ID))
    }
}

/// Collects the children of a list wrapper element.
///
/// Bound objects are always kept. Text leaves are kept only when the list
/// declares their tag, so unknown leaves never turn into items.
pub(crate) struct ListBinding {
    tag: String,
    text_item: Option<&'static str>,
    items: Vec<Bound>,
}

impl ListBinding {
    pub fn new(tag: &str) -> Self {
        ListBinding {
            tag: tag.to_owned(),
            text_item: None,
            items: Vec::new(),
        }
    }

    pub fn with_text_items(tag: &str, item: &'static str) -> Self {
        ListBinding {
            text_item: Some(item),
            ..ListBinding::new(tag)
        }
    }
}

impl ElementBinding for ListBinding {
    fn element_tag(&self) -> &str {
        &self.tag
    }

    fn set_attributes(&mut self, _attributes: &Attributes) -> Result<(), ParseError> {
        Ok(())
    }

    fn set_child_element(
        &mut self,
        name: &str,
        value: &str,
        _attributes: &Attributes,
    ) -> Result<(), ParseError> {
        if self.text_item == Some(name) {
            self.items.push(Bound::Text(value.to_owned()));
        } else {
            tracing::trace!(list = %self.tag, child = name, "ignoring leaf in list");
        }
        Ok(())
    }

    fn set_child_object(&mut self, _name: &str, value: Bound) -> Result<(), ParseError> {
        self.items.push(value);
        Ok(())
    }

    fn get_object(self: Box<Self>) -> Result<Bound, ParseError> {
        Ok(Bound::List(self.items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> Attributes {
        pairs.iter().map(|(k, v)| (*k, *v)).collect()
    }

    #[test]
    fn into_vec_filters_by_type() {
        let list = Bound::List(vec![
            Bound::Text("a".into()),
            Bound::Actor(Actor::new("clerk")),
            Bound::Text("b".into()),
        ]);
        let texts: Vec<String> = list.into_vec();
        assert_eq!(texts, vec!["a".to_string(), "b".to_string()]);

        let single: Vec<Actor> = Bound::Actor(Actor::new("boss")).into_vec();
        assert_eq!(single.len(), 1);
    }

    #[test]
    fn list_keeps_only_declared_text_items() {
        let none = attrs(&[]);
        let mut names = ListBinding::with_text_items(tags::INPUT_NAMES, tags::INPUT_NAME);
        names.set_child_element(tags::INPUT_NAME, "a", &none).unwrap();
        names.set_child_element("futureHint", "zzz", &none).unwrap();
        names.set_child_element(tags::INPUT_NAME, "b", &none).unwrap();
        let texts: Vec<String> = Box::new(names).get_object().unwrap().into_vec();
        assert_eq!(texts, vec!["a".to_string(), "b".to_string()]);

        let mut actors = ListBinding::new(tags::ACTORS);
        actors.set_child_element("note", "stray", &none).unwrap();
        actors
            .set_child_object(tags::ACTOR, Bound::Actor(Actor::new("clerk")))
            .unwrap();
        let Bound::List(items) = Box::new(actors).get_object().unwrap() else {
            panic!("expected a list");
        };
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn flag_rejects_non_boolean() {
        let a = attrs(&[("transient", "yes")]);
        let err = flag("dataDefinition", &a, "transient", false).unwrap_err();
        assert!(matches!(err, ParseError::InvalidAttribute { .. }));
        assert!(!flag("dataDefinition", &attrs(&[]), "transient", false).unwrap());
    }

    #[test]
    fn named_element_reads_common_attributes() {
        let a = attrs(&[("id", "12"), ("name", "Review"), ("description", "check it")]);
        let mut named = NamedElement::read("userTask", &a).unwrap();
        assert_eq!(named.require_id("userTask").unwrap(), 12);
        assert_eq!(named.require_name("userTask").unwrap(), "Review");
        assert_eq!(named.description.as_deref(), Some("check it"));

        let bad = attrs(&[("id", "twelve")]);
        assert!(NamedElement::read("userTask", &bad).is_err());
    }

    #[test]
    fn unknown_tags_have_no_binding() {
        assert!(binding_for("somethingNew", &ParseOptions::default()).is_none());
        let b = binding_for(tags::CONDITION, &ParseOptions::default()).unwrap();
        assert_eq!(b.element_tag(), tags::CONDITION);
    }
}
