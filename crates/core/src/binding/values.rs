//! Bindings for leaf values: expressions, data, operations, connectors,
//! contracts and the process-level entities.

use super::{
    flag, keyword, optional, required, required_number, Bound, ElementBinding, NamedElement,
};
use crate::error::ParseError;
use crate::model::*;
use crate::xml::tags;
use crate::xml::Attributes;

macro_rules! tag {
    ($tag:expr) => {
        fn element_tag(&self) -> &str {
            $tag
        }
    };
}

fn expression_child(element: &str, value: Option<Expression>, child: &str) -> Result<Expression, ParseError> {
    value.ok_or_else(|| ParseError::structure(element, format!("missing <{child}> child")))
}

// ── Expression ──────────────────────────────────────────────────────

/// Every expression role (`condition`, `defaultValue`, ...) binds through
/// this one binding; the role only says where the parent stores it.
pub(crate) struct ExpressionBinding {
    tag: String,
    name: String,
    kind: String,
    return_type: String,
    interpreter: Option<String>,
    content: String,
    dependencies: Vec<Expression>,
}

impl ExpressionBinding {
    pub fn new(tag: &str) -> Self {
        ExpressionBinding {
            tag: tag.to_owned(),
            name: String::new(),
            kind: String::new(),
            return_type: String::new(),
            interpreter: None,
            content: String::new(),
            dependencies: Vec::new(),
        }
    }
}

impl ElementBinding for ExpressionBinding {
    fn element_tag(&self) -> &str {
        &self.tag
    }

    fn set_attributes(&mut self, attributes: &Attributes) -> Result<(), ParseError> {
        self.name = attributes.get(tags::NAME).unwrap_or_default().to_owned();
        self.kind = required(&self.tag, attributes, tags::EXPRESSION_TYPE)?.to_owned();
        self.return_type = required(&self.tag, attributes, tags::RETURN_TYPE)?.to_owned();
        self.interpreter = optional(attributes, tags::INTERPRETER);
        Ok(())
    }

    fn set_child_element(&mut self, name: &str, value: &str, _: &Attributes) -> Result<(), ParseError> {
        if name == tags::CONTENT {
            self.content = value.to_owned();
        }
        Ok(())
    }

    fn set_child_object(&mut self, name: &str, value: Bound) -> Result<(), ParseError> {
        if let (tags::EXPRESSION, Bound::Expression(e)) = (name, value) {
            self.dependencies.push(e);
        }
        Ok(())
    }

    fn get_object(self: Box<Self>) -> Result<Bound, ParseError> {
        let this = *self;
        let wrap = |source| ParseError::Expression {
            element: this.tag.clone(),
            source,
        };
        let kind: ExpressionKind = this.kind.parse().map_err(wrap)?;
        let expression = Expression::new(
            this.name.clone(),
            this.content.clone(),
            kind,
            this.return_type.clone(),
            this.interpreter.clone(),
            this.dependencies.clone(),
        )
        .map_err(wrap)?;
        Ok(Bound::Expression(expression))
    }
}

// ── Process-level values ────────────────────────────────────────────

/// One string-index slot together with its 1-based position.
#[derive(Debug)]
pub struct StringIndexSlot {
    pub index: usize,
    pub slot: StringIndex,
}

#[derive(Default)]
pub(crate) struct StringIndexBinding {
    index: usize,
    slot: StringIndex,
}

impl ElementBinding for StringIndexBinding {
    tag!(tags::STRING_INDEX);

    fn set_attributes(&mut self, attributes: &Attributes) -> Result<(), ParseError> {
        let index = required_number(tags::STRING_INDEX, attributes, tags::INDEX)?;
        if !(1..=STRING_INDEX_SLOTS as u64).contains(&index) {
            return Err(ParseError::structure(
                tags::STRING_INDEX,
                format!("index {index} is outside 1..={STRING_INDEX_SLOTS}"),
            ));
        }
        self.index = index as usize;
        self.slot.label = optional(attributes, tags::LABEL);
        Ok(())
    }

    fn set_child_object(&mut self, name: &str, value: Bound) -> Result<(), ParseError> {
        if let (tags::VALUE, Bound::Expression(e)) = (name, value) {
            self.slot.value = Some(e);
        }
        Ok(())
    }

    fn get_object(self: Box<Self>) -> Result<Bound, ParseError> {
        Ok(Bound::StringIndex(StringIndexSlot {
            index: self.index,
            slot: self.slot,
        }))
    }
}

#[derive(Default)]
pub(crate) struct ParameterBinding {
    named: NamedElement,
    type_name: String,
}

impl ElementBinding for ParameterBinding {
    tag!(tags::PARAMETER);

    fn set_attributes(&mut self, attributes: &Attributes) -> Result<(), ParseError> {
        self.named = NamedElement::read(tags::PARAMETER, attributes)?;
        self.type_name = required(tags::PARAMETER, attributes, tags::TYPE)?.to_owned();
        Ok(())
    }

    fn get_object(mut self: Box<Self>) -> Result<Bound, ParseError> {
        Ok(Bound::Parameter(Parameter {
            name: self.named.require_name(tags::PARAMETER)?,
            type_name: self.type_name,
            description: self.named.description,
        }))
    }
}

/// `actor` and `actorInitiator` share a shape; the latter is always flagged
/// as the initiator.
pub(crate) struct ActorBinding {
    tag: &'static str,
    named: NamedElement,
    initiator: bool,
}

impl ActorBinding {
    pub fn new(tag: &str) -> Self {
        let tag = if tag == tags::ACTOR_INITIATOR {
            tags::ACTOR_INITIATOR
        } else {
            tags::ACTOR
        };
        ActorBinding {
            tag,
            named: NamedElement::default(),
            initiator: tag == tags::ACTOR_INITIATOR,
        }
    }
}

impl ElementBinding for ActorBinding {
    fn element_tag(&self) -> &str {
        self.tag
    }

    fn set_attributes(&mut self, attributes: &Attributes) -> Result<(), ParseError> {
        self.named = NamedElement::read(self.tag, attributes)?;
        self.initiator = flag(self.tag, attributes, tags::INITIATOR, self.initiator)?;
        Ok(())
    }

    fn get_object(mut self: Box<Self>) -> Result<Bound, ParseError> {
        Ok(Bound::Actor(Actor {
            name: self.named.require_name(self.tag)?,
            description: self.named.description,
            initiator: self.initiator,
        }))
    }
}

#[derive(Default)]
pub(crate) struct ContextEntryBinding {
    key: String,
    expression: Option<Expression>,
}

impl ElementBinding for ContextEntryBinding {
    tag!(tags::CONTEXT_ENTRY);

    fn set_attributes(&mut self, attributes: &Attributes) -> Result<(), ParseError> {
        self.key = required(tags::CONTEXT_ENTRY, attributes, tags::KEY)?.to_owned();
        Ok(())
    }

    fn set_child_object(&mut self, name: &str, value: Bound) -> Result<(), ParseError> {
        if let (tags::EXPRESSION, Bound::Expression(e)) = (name, value) {
            self.expression = Some(e);
        }
        Ok(())
    }

    fn get_object(self: Box<Self>) -> Result<Bound, ParseError> {
        Ok(Bound::ContextEntry(ContextEntry {
            key: self.key,
            expression: expression_child(tags::CONTEXT_ENTRY, self.expression, tags::EXPRESSION)?,
        }))
    }
}

// ── Data ────────────────────────────────────────────────────────────

/// Generic, text and XML data definitions.
pub(crate) struct DataDefinitionBinding {
    tag: &'static str,
    named: NamedElement,
    class_name: String,
    transient: bool,
    long_text: bool,
    namespace: Option<String>,
    element: Option<String>,
    default_value: Option<Expression>,
}

impl DataDefinitionBinding {
    pub fn new(tag: &str) -> Self {
        let tag = match tag {
            tags::TEXT_DATA_DEFINITION => tags::TEXT_DATA_DEFINITION,
            tags::XML_DATA_DEFINITION => tags::XML_DATA_DEFINITION,
            _ => tags::DATA_DEFINITION,
        };
        DataDefinitionBinding {
            tag,
            named: NamedElement::default(),
            class_name: String::new(),
            transient: false,
            long_text: false,
            namespace: None,
            element: None,
            default_value: None,
        }
    }
}

impl ElementBinding for DataDefinitionBinding {
    fn element_tag(&self) -> &str {
        self.tag
    }

    fn set_attributes(&mut self, attributes: &Attributes) -> Result<(), ParseError> {
        self.named = NamedElement::read(self.tag, attributes)?;
        self.class_name = required(self.tag, attributes, tags::CLASS_NAME)?.to_owned();
        self.transient = flag(self.tag, attributes, tags::TRANSIENT, false)?;
        self.long_text = flag(self.tag, attributes, tags::LONG_TEXT, false)?;
        Ok(())
    }

    fn set_child_element(&mut self, name: &str, value: &str, _: &Attributes) -> Result<(), ParseError> {
        match name {
            tags::NAMESPACE => self.namespace = Some(value.to_owned()),
            tags::ELEMENT => self.element = Some(value.to_owned()),
            _ => {}
        }
        Ok(())
    }

    fn set_child_object(&mut self, name: &str, value: Bound) -> Result<(), ParseError> {
        if let (tags::DEFAULT_VALUE, Bound::Expression(e)) = (name, value) {
            self.default_value = Some(e);
        }
        Ok(())
    }

    fn get_object(mut self: Box<Self>) -> Result<Bound, ParseError> {
        let kind = match self.tag {
            tags::TEXT_DATA_DEFINITION => DataKind::Text {
                long_text: self.long_text,
            },
            tags::XML_DATA_DEFINITION => DataKind::Xml {
                namespace: self.namespace,
                element: self.element,
            },
            _ => DataKind::Generic,
        };
        Ok(Bound::DataDefinition(DataDefinition {
            name: self.named.require_name(self.tag)?,
            description: self.named.description,
            class_name: self.class_name,
            transient: self.transient,
            default_value: self.default_value,
            kind,
        }))
    }
}

#[derive(Default)]
pub(crate) struct BusinessDataBinding {
    named: NamedElement,
    class_name: String,
    multiple: bool,
    default_value: Option<Expression>,
}

impl ElementBinding for BusinessDataBinding {
    tag!(tags::BUSINESS_DATA_DEFINITION);

    fn set_attributes(&mut self, attributes: &Attributes) -> Result<(), ParseError> {
        let tag = tags::BUSINESS_DATA_DEFINITION;
        self.named = NamedElement::read(tag, attributes)?;
        self.class_name = required(tag, attributes, tags::CLASS_NAME)?.to_owned();
        self.multiple = flag(tag, attributes, tags::MULTIPLE, false)?;
        Ok(())
    }

    fn set_child_object(&mut self, name: &str, value: Bound) -> Result<(), ParseError> {
        if let (tags::DEFAULT_VALUE, Bound::Expression(e)) = (name, value) {
            self.default_value = Some(e);
        }
        Ok(())
    }

    fn get_object(mut self: Box<Self>) -> Result<Bound, ParseError> {
        Ok(Bound::BusinessData(BusinessDataDefinition {
            name: self.named.require_name(tags::BUSINESS_DATA_DEFINITION)?,
            description: self.named.description,
            class_name: self.class_name,
            multiple: self.multiple,
            default_value: self.default_value,
        }))
    }
}

#[derive(Default)]
pub(crate) struct DocumentBinding {
    named: NamedElement,
    document: DocumentDefinition,
}

impl ElementBinding for DocumentBinding {
    tag!(tags::DOCUMENT_DEFINITION);

    fn set_attributes(&mut self, attributes: &Attributes) -> Result<(), ParseError> {
        self.named = NamedElement::read(tags::DOCUMENT_DEFINITION, attributes)?;
        self.document.mime_type = optional(attributes, tags::MIME_TYPE);
        Ok(())
    }

    fn set_child_element(&mut self, name: &str, value: &str, _: &Attributes) -> Result<(), ParseError> {
        let value = Some(value.to_owned());
        match name {
            tags::URL => self.document.url = value,
            tags::FILE => self.document.file = value,
            tags::FILE_NAME => self.document.file_name = value,
            _ => {}
        }
        Ok(())
    }

    fn set_child_object(&mut self, name: &str, value: Bound) -> Result<(), ParseError> {
        if let (tags::INITIAL_VALUE, Bound::Expression(e)) = (name, value) {
            self.document.initial_value = Some(e);
        }
        Ok(())
    }

    fn get_object(mut self: Box<Self>) -> Result<Bound, ParseError> {
        self.document.name = self.named.require_name(tags::DOCUMENT_DEFINITION)?;
        self.document.description = self.named.description;
        Ok(Bound::Document(self.document))
    }
}

#[derive(Default)]
pub(crate) struct DocumentListBinding {
    named: NamedElement,
    initial_value: Option<Expression>,
}

impl ElementBinding for DocumentListBinding {
    tag!(tags::DOCUMENT_LIST_DEFINITION);

    fn set_attributes(&mut self, attributes: &Attributes) -> Result<(), ParseError> {
        self.named = NamedElement::read(tags::DOCUMENT_LIST_DEFINITION, attributes)?;
        Ok(())
    }

    fn set_child_object(&mut self, name: &str, value: Bound) -> Result<(), ParseError> {
        if let (tags::INITIAL_VALUE, Bound::Expression(e)) = (name, value) {
            self.initial_value = Some(e);
        }
        Ok(())
    }

    fn get_object(mut self: Box<Self>) -> Result<Bound, ParseError> {
        Ok(Bound::DocumentList(DocumentListDefinition {
            name: self.named.require_name(tags::DOCUMENT_LIST_DEFINITION)?,
            description: self.named.description,
            initial_value: self.initial_value,
        }))
    }
}

// ── Operations and connectors ───────────────────────────────────────

#[derive(Default)]
pub(crate) struct LeftOperandBinding {
    name: String,
    operand_type: String,
}

impl ElementBinding for LeftOperandBinding {
    tag!(tags::LEFT_OPERAND);

    fn set_attributes(&mut self, attributes: &Attributes) -> Result<(), ParseError> {
        self.name = required(tags::LEFT_OPERAND, attributes, tags::NAME)?.to_owned();
        self.operand_type = required(tags::LEFT_OPERAND, attributes, tags::TYPE)?.to_owned();
        Ok(())
    }

    fn get_object(self: Box<Self>) -> Result<Bound, ParseError> {
        Ok(Bound::LeftOperand(LeftOperand {
            name: self.name,
            operand_type: self.operand_type,
        }))
    }
}

#[derive(Default)]
pub(crate) struct OperationBinding {
    operator_type: Option<OperatorType>,
    operator: Option<String>,
    operator_input_type: Option<String>,
    left_operand: Option<LeftOperand>,
    right_operand: Option<Expression>,
}

impl ElementBinding for OperationBinding {
    tag!(tags::OPERATION);

    fn set_attributes(&mut self, attributes: &Attributes) -> Result<(), ParseError> {
        let tag = tags::OPERATION;
        self.operator_type = keyword(tag, attributes, tags::OPERATOR_TYPE, OperatorType::parse, "an operator type")?;
        if self.operator_type.is_none() {
            return Err(ParseError::missing(tag, tags::OPERATOR_TYPE));
        }
        self.operator = optional(attributes, tags::OPERATOR);
        self.operator_input_type = optional(attributes, tags::OPERATOR_INPUT_TYPE);
        Ok(())
    }

    fn set_child_object(&mut self, name: &str, value: Bound) -> Result<(), ParseError> {
        match (name, value) {
            (tags::LEFT_OPERAND, Bound::LeftOperand(l)) => self.left_operand = Some(l),
            (tags::RIGHT_OPERAND, Bound::Expression(e)) => self.right_operand = Some(e),
            _ => {}
        }
        Ok(())
    }

    fn get_object(self: Box<Self>) -> Result<Bound, ParseError> {
        let left_operand = self
            .left_operand
            .ok_or_else(|| ParseError::structure(tags::OPERATION, "missing <leftOperand> child"))?;
        let operator_type = self
            .operator_type
            .ok_or_else(|| ParseError::missing(tags::OPERATION, tags::OPERATOR_TYPE))?;
        Ok(Bound::Operation(Operation {
            left_operand,
            operator_type,
            operator: self.operator,
            operator_input_type: self.operator_input_type,
            right_operand: self.right_operand,
        }))
    }
}

/// A named expression: connector `input` or call-activity `contractInput`.
pub(crate) struct ConnectorInputBinding {
    tag: &'static str,
    name: String,
    value: Option<Expression>,
}

impl ConnectorInputBinding {
    pub fn new(tag: &str) -> Self {
        let tag = if tag == tags::CONTRACT_INPUT {
            tags::CONTRACT_INPUT
        } else {
            tags::INPUT
        };
        ConnectorInputBinding {
            tag,
            name: String::new(),
            value: None,
        }
    }
}

impl ElementBinding for ConnectorInputBinding {
    fn element_tag(&self) -> &str {
        self.tag
    }

    fn set_attributes(&mut self, attributes: &Attributes) -> Result<(), ParseError> {
        self.name = required(self.tag, attributes, tags::NAME)?.to_owned();
        Ok(())
    }

    fn set_child_object(&mut self, name: &str, value: Bound) -> Result<(), ParseError> {
        if let (tags::EXPRESSION, Bound::Expression(e)) = (name, value) {
            self.value = Some(e);
        }
        Ok(())
    }

    fn get_object(self: Box<Self>) -> Result<Bound, ParseError> {
        let value = expression_child(self.tag, self.value, tags::EXPRESSION)?;
        if self.tag == tags::CONTRACT_INPUT {
            Ok(Bound::ContractInput((self.name, value)))
        } else {
            Ok(Bound::ConnectorInput(ConnectorInput {
                name: self.name,
                value,
            }))
        }
    }
}

#[derive(Default)]
pub(crate) struct ConnectorBinding {
    named: NamedElement,
    connector_id: String,
    version: String,
    activation_event: ActivationEvent,
    fail_action: FailAction,
    error_code: Option<String>,
    inputs: Vec<ConnectorInput>,
    outputs: Vec<Operation>,
}

impl ElementBinding for ConnectorBinding {
    tag!(tags::CONNECTOR);

    fn set_attributes(&mut self, attributes: &Attributes) -> Result<(), ParseError> {
        let tag = tags::CONNECTOR;
        self.named = NamedElement::read(tag, attributes)?;
        self.connector_id = required(tag, attributes, tags::CONNECTOR_ID)?.to_owned();
        self.version = required(tag, attributes, tags::VERSION)?.to_owned();
        self.activation_event = keyword(
            tag,
            attributes,
            tags::ACTIVATION_EVENT,
            ActivationEvent::parse,
            "ON_ENTER or ON_FINISH",
        )?
        .unwrap_or_default();
        self.fail_action = keyword(
            tag,
            attributes,
            tags::FAIL_ACTION,
            FailAction::parse,
            "FAIL, IGNORE or ERROR_EVENT",
        )?
        .unwrap_or_default();
        self.error_code = optional(attributes, tags::ERROR_CODE);
        Ok(())
    }

    fn set_child_object(&mut self, name: &str, value: Bound) -> Result<(), ParseError> {
        match name {
            tags::INPUTS => self.inputs = value.into_vec(),
            tags::OUTPUTS => self.outputs = value.into_vec(),
            _ => {}
        }
        Ok(())
    }

    fn get_object(mut self: Box<Self>) -> Result<Bound, ParseError> {
        Ok(Bound::Connector(ConnectorDefinition {
            name: self.named.require_name(tags::CONNECTOR)?,
            connector_id: self.connector_id,
            version: self.version,
            activation_event: self.activation_event,
            fail_action: self.fail_action,
            error_code: self.error_code,
            inputs: self.inputs,
            outputs: self.outputs,
        }))
    }
}

#[derive(Default)]
pub(crate) struct UserFilterBinding {
    named: NamedElement,
    filter_id: String,
    version: String,
    inputs: Vec<ConnectorInput>,
}

impl ElementBinding for UserFilterBinding {
    tag!(tags::USER_FILTER);

    fn set_attributes(&mut self, attributes: &Attributes) -> Result<(), ParseError> {
        let tag = tags::USER_FILTER;
        self.named = NamedElement::read(tag, attributes)?;
        self.filter_id = required(tag, attributes, tags::USER_FILTER_ID)?.to_owned();
        self.version = required(tag, attributes, tags::VERSION)?.to_owned();
        Ok(())
    }

    fn set_child_object(&mut self, name: &str, value: Bound) -> Result<(), ParseError> {
        if name == tags::INPUTS {
            self.inputs = value.into_vec();
        }
        Ok(())
    }

    fn get_object(mut self: Box<Self>) -> Result<Bound, ParseError> {
        Ok(Bound::UserFilter(UserFilter {
            name: self.named.require_name(tags::USER_FILTER)?,
            filter_id: self.filter_id,
            version: self.version,
            inputs: self.inputs,
        }))
    }
}

#[derive(Default)]
pub(crate) struct CorrelationBinding {
    key: Option<Expression>,
    value: Option<Expression>,
}

impl ElementBinding for CorrelationBinding {
    tag!(tags::CORRELATION);

    fn set_attributes(&mut self, _: &Attributes) -> Result<(), ParseError> {
        Ok(())
    }

    fn set_child_object(&mut self, name: &str, value: Bound) -> Result<(), ParseError> {
        match (name, value) {
            (tags::KEY, Bound::Expression(e)) => self.key = Some(e),
            (tags::VALUE, Bound::Expression(e)) => self.value = Some(e),
            _ => {}
        }
        Ok(())
    }

    fn get_object(self: Box<Self>) -> Result<Bound, ParseError> {
        Ok(Bound::Correlation(Correlation {
            key: expression_child(tags::CORRELATION, self.key, tags::KEY)?,
            value: expression_child(tags::CORRELATION, self.value, tags::VALUE)?,
        }))
    }
}

// ── Loops ───────────────────────────────────────────────────────────

#[derive(Default)]
pub(crate) struct StandardLoopBinding {
    test_before: bool,
    loop_condition: Option<Expression>,
    loop_max: Option<Expression>,
}

impl ElementBinding for StandardLoopBinding {
    tag!(tags::STANDARD_LOOP_CHARACTERISTICS);

    fn set_attributes(&mut self, attributes: &Attributes) -> Result<(), ParseError> {
        self.test_before = flag(tags::STANDARD_LOOP_CHARACTERISTICS, attributes, tags::TEST_BEFORE, false)?;
        Ok(())
    }

    fn set_child_object(&mut self, name: &str, value: Bound) -> Result<(), ParseError> {
        match (name, value) {
            (tags::LOOP_CONDITION, Bound::Expression(e)) => self.loop_condition = Some(e),
            (tags::LOOP_MAX, Bound::Expression(e)) => self.loop_max = Some(e),
            _ => {}
        }
        Ok(())
    }

    fn get_object(self: Box<Self>) -> Result<Bound, ParseError> {
        let loop_condition = expression_child(
            tags::STANDARD_LOOP_CHARACTERISTICS,
            self.loop_condition,
            tags::LOOP_CONDITION,
        )?;
        Ok(Bound::Loop(LoopCharacteristics::Standard(StandardLoop {
            loop_condition,
            test_before: self.test_before,
            loop_max: self.loop_max,
        })))
    }
}

#[derive(Default)]
pub(crate) struct MultiInstanceLoopBinding {
    looped: MultiInstanceLoop,
}

impl ElementBinding for MultiInstanceLoopBinding {
    tag!(tags::MULTI_INSTANCE_LOOP_CHARACTERISTICS);

    fn set_attributes(&mut self, attributes: &Attributes) -> Result<(), ParseError> {
        let l = &mut self.looped;
        l.sequential = flag(tags::MULTI_INSTANCE_LOOP_CHARACTERISTICS, attributes, tags::IS_SEQUENTIAL, false)?;
        l.loop_data_input_ref = optional(attributes, tags::LOOP_DATA_INPUT_REF);
        l.loop_data_output_ref = optional(attributes, tags::LOOP_DATA_OUTPUT_REF);
        l.data_input_item_ref = optional(attributes, tags::DATA_INPUT_ITEM_REF);
        l.data_output_item_ref = optional(attributes, tags::DATA_OUTPUT_ITEM_REF);
        Ok(())
    }

    fn set_child_object(&mut self, name: &str, value: Bound) -> Result<(), ParseError> {
        match (name, value) {
            (tags::LOOP_CARDINALITY, Bound::Expression(e)) => self.looped.loop_cardinality = Some(e),
            (tags::COMPLETION_CONDITION, Bound::Expression(e)) => {
                self.looped.completion_condition = Some(e)
            }
            _ => {}
        }
        Ok(())
    }

    fn get_object(self: Box<Self>) -> Result<Bound, ParseError> {
        Ok(Bound::Loop(LoopCharacteristics::MultiInstance(self.looped)))
    }
}

// ── Contracts ───────────────────────────────────────────────────────

#[derive(Default)]
pub(crate) struct ContractBinding {
    contract: Contract,
}

impl ElementBinding for ContractBinding {
    tag!(tags::CONTRACT);

    fn set_attributes(&mut self, _: &Attributes) -> Result<(), ParseError> {
        Ok(())
    }

    fn set_child_object(&mut self, name: &str, value: Bound) -> Result<(), ParseError> {
        match name {
            tags::INPUT_DEFINITIONS => self.contract.inputs = value.into_vec(),
            tags::CONSTRAINT_DEFINITIONS => self.contract.constraints = value.into_vec(),
            _ => {}
        }
        Ok(())
    }

    fn get_object(self: Box<Self>) -> Result<Bound, ParseError> {
        Ok(Bound::Contract(self.contract))
    }
}

#[derive(Default)]
pub(crate) struct InputDefinitionBinding {
    named: NamedElement,
    multiple: bool,
    input_type: Option<InputType>,
    inputs: Vec<InputDefinition>,
}

impl ElementBinding for InputDefinitionBinding {
    tag!(tags::INPUT_DEFINITION);

    fn set_attributes(&mut self, attributes: &Attributes) -> Result<(), ParseError> {
        let tag = tags::INPUT_DEFINITION;
        self.named = NamedElement::read(tag, attributes)?;
        self.multiple = flag(tag, attributes, tags::MULTIPLE, false)?;
        self.input_type = keyword(tag, attributes, tags::TYPE, InputType::parse, "a contract input type")?;
        Ok(())
    }

    fn set_child_object(&mut self, name: &str, value: Bound) -> Result<(), ParseError> {
        if name == tags::INPUT_DEFINITIONS {
            self.inputs = value.into_vec();
        }
        Ok(())
    }

    fn get_object(mut self: Box<Self>) -> Result<Bound, ParseError> {
        Ok(Bound::InputDefinition(InputDefinition {
            name: self.named.require_name(tags::INPUT_DEFINITION)?,
            description: self.named.description,
            multiple: self.multiple,
            input_type: self.input_type,
            inputs: self.inputs,
        }))
    }
}

#[derive(Default)]
pub(crate) struct ConstraintBinding {
    name: String,
    expression: String,
    explanation: Option<String>,
    input_names: Vec<String>,
}

impl ElementBinding for ConstraintBinding {
    tag!(tags::CONSTRAINT_DEFINITION);

    fn set_attributes(&mut self, attributes: &Attributes) -> Result<(), ParseError> {
        self.name = required(tags::CONSTRAINT_DEFINITION, attributes, tags::NAME)?.to_owned();
        Ok(())
    }

    fn set_child_element(&mut self, name: &str, value: &str, _: &Attributes) -> Result<(), ParseError> {
        match name {
            tags::CONDITIONAL_EXPRESSION => self.expression = value.to_owned(),
            tags::EXPLANATION => self.explanation = Some(value.to_owned()),
            _ => {}
        }
        Ok(())
    }

    fn set_child_object(&mut self, name: &str, value: Bound) -> Result<(), ParseError> {
        if name == tags::INPUT_NAMES {
            self.input_names = value.into_vec();
        }
        Ok(())
    }

    fn get_object(self: Box<Self>) -> Result<Bound, ParseError> {
        Ok(Bound::Constraint(ConstraintDefinition {
            name: self.name,
            expression: self.expression,
            explanation: self.explanation,
            input_names: self.input_names,
        }))
    }
}
