//! Element and attribute names of the process definition document.

pub const FORMAT_VERSION: &str = "1.0";

// ── Elements ────────────────────────────────────────────────────────

pub const PROCESS_DEFINITION: &str = "processDefinition";
pub const STRING_INDEXES: &str = "stringIndexes";
pub const STRING_INDEX: &str = "stringIndex";
pub const FLOW_ELEMENTS: &str = "flowElements";
pub const TRANSITIONS: &str = "transitions";
pub const TRANSITION: &str = "transition";
pub const CONNECTORS: &str = "connectors";
pub const CONNECTOR: &str = "connector";
pub const INPUTS: &str = "inputs";
pub const INPUT: &str = "input";
pub const OUTPUTS: &str = "outputs";
pub const BUSINESS_DATA_DEFINITIONS: &str = "businessDataDefinitions";
pub const BUSINESS_DATA_DEFINITION: &str = "businessDataDefinition";
pub const DATA_DEFINITIONS: &str = "dataDefinitions";
pub const DATA_DEFINITION: &str = "dataDefinition";
pub const TEXT_DATA_DEFINITION: &str = "textDataDefinition";
pub const XML_DATA_DEFINITION: &str = "xmlDataDefinition";
pub const DOCUMENT_DEFINITIONS: &str = "documentDefinitions";
pub const DOCUMENT_DEFINITION: &str = "documentDefinition";
pub const DOCUMENT_LIST_DEFINITIONS: &str = "documentListDefinitions";
pub const DOCUMENT_LIST_DEFINITION: &str = "documentListDefinition";
pub const FLOW_NODES: &str = "flowNodes";
pub const AUTOMATIC_TASK: &str = "automaticTask";
pub const USER_TASK: &str = "userTask";
pub const MANUAL_TASK: &str = "manualTask";
pub const CALL_ACTIVITY: &str = "callActivity";
pub const RECEIVE_TASK: &str = "receiveTask";
pub const SEND_TASK: &str = "sendTask";
pub const SUB_PROCESS: &str = "subProcess";
pub const GATEWAY: &str = "gateway";
pub const START_EVENT: &str = "startEvent";
pub const INTERMEDIATE_CATCH_EVENT: &str = "intermediateCatchEvent";
pub const INTERMEDIATE_THROW_EVENT: &str = "intermediateThrowEvent";
pub const END_EVENT: &str = "endEvent";
pub const BOUNDARY_EVENTS: &str = "boundaryEvents";
pub const BOUNDARY_EVENT: &str = "boundaryEvent";
pub const INCOMING_TRANSITION: &str = "incomingTransition";
pub const OUTGOING_TRANSITION: &str = "outgoingTransition";
pub const DEFAULT_TRANSITION: &str = "defaultTransition";
pub const OPERATIONS: &str = "operations";
pub const OPERATION: &str = "operation";
pub const LEFT_OPERAND: &str = "leftOperand";
pub const DATA_INPUT_OPERATIONS: &str = "dataInputOperations";
pub const DATA_OUTPUT_OPERATIONS: &str = "dataOutputOperations";
pub const CONTRACT_INPUTS: &str = "contractInputs";
pub const CONTRACT_INPUT: &str = "contractInput";
pub const STANDARD_LOOP_CHARACTERISTICS: &str = "standardLoopCharacteristics";
pub const MULTI_INSTANCE_LOOP_CHARACTERISTICS: &str = "multiInstanceLoopCharacteristics";
pub const USER_FILTER: &str = "userFilter";
pub const TIMER_EVENT_TRIGGER: &str = "timerEventTrigger";
pub const CATCH_MESSAGE_EVENT_TRIGGER: &str = "catchMessageEventTrigger";
pub const THROW_MESSAGE_EVENT_TRIGGER: &str = "throwMessageEventTrigger";
pub const CATCH_SIGNAL_EVENT_TRIGGER: &str = "catchSignalEventTrigger";
pub const THROW_SIGNAL_EVENT_TRIGGER: &str = "throwSignalEventTrigger";
pub const CATCH_ERROR_EVENT_TRIGGER: &str = "catchErrorEventTrigger";
pub const THROW_ERROR_EVENT_TRIGGER: &str = "throwErrorEventTrigger";
pub const TERMINATE_EVENT_TRIGGER: &str = "terminateEventTrigger";
pub const CORRELATIONS: &str = "correlations";
pub const CORRELATION: &str = "correlation";
pub const DEPENDENCIES: &str = "dependencies";
pub const PARAMETERS: &str = "parameters";
pub const PARAMETER: &str = "parameter";
pub const ACTORS: &str = "actors";
pub const ACTOR: &str = "actor";
pub const ACTOR_INITIATOR: &str = "actorInitiator";
pub const CONTRACT: &str = "contract";
pub const INPUT_DEFINITIONS: &str = "inputDefinitions";
pub const INPUT_DEFINITION: &str = "inputDefinition";
pub const CONSTRAINT_DEFINITIONS: &str = "constraintDefinitions";
pub const CONSTRAINT_DEFINITION: &str = "constraintDefinition";
pub const CONDITIONAL_EXPRESSION: &str = "conditionalExpression";
pub const EXPLANATION: &str = "explanation";
pub const INPUT_NAMES: &str = "inputNames";
pub const INPUT_NAME: &str = "inputName";
pub const CONTEXT: &str = "context";
pub const CONTEXT_ENTRY: &str = "contextEntry";
pub const CONTENT: &str = "content";
pub const URL: &str = "url";
pub const FILE: &str = "file";
pub const FILE_NAME: &str = "fileName";
pub const NAMESPACE: &str = "namespace";
pub const ELEMENT: &str = "element";

// ── Expression roles ────────────────────────────────────────────────
// Every one of these elements is an expression; the tag says what it is for.

pub const EXPRESSION: &str = "expression";
pub const CONDITION: &str = "condition";
pub const VALUE: &str = "value";
pub const DEFAULT_VALUE: &str = "defaultValue";
pub const INITIAL_VALUE: &str = "initialValue";
pub const DISPLAY_NAME: &str = "displayName";
pub const DISPLAY_DESCRIPTION: &str = "displayDescription";
pub const DISPLAY_DESCRIPTION_AFTER_COMPLETION: &str = "displayDescriptionAfterCompletion";
pub const LOOP_CONDITION: &str = "loopCondition";
pub const LOOP_MAX: &str = "loopMax";
pub const LOOP_CARDINALITY: &str = "loopCardinality";
pub const COMPLETION_CONDITION: &str = "completionCondition";
pub const CALLABLE_ELEMENT: &str = "callableElement";
pub const CALLABLE_ELEMENT_VERSION: &str = "callableElementVersion";
pub const TARGET_PROCESS: &str = "targetProcess";
pub const TARGET_FLOW_NODE: &str = "targetFlowNode";
pub const KEY: &str = "key";
pub const RIGHT_OPERAND: &str = "rightOperand";
pub const TIMER_EXPRESSION: &str = "timerExpression";

pub const EXPRESSION_ROLES: &[&str] = &[
    EXPRESSION,
    CONDITION,
    VALUE,
    DEFAULT_VALUE,
    INITIAL_VALUE,
    DISPLAY_NAME,
    DISPLAY_DESCRIPTION,
    DISPLAY_DESCRIPTION_AFTER_COMPLETION,
    LOOP_CONDITION,
    LOOP_MAX,
    LOOP_CARDINALITY,
    COMPLETION_CONDITION,
    CALLABLE_ELEMENT,
    CALLABLE_ELEMENT_VERSION,
    TARGET_PROCESS,
    TARGET_FLOW_NODE,
    KEY,
    RIGHT_OPERAND,
    TIMER_EXPRESSION,
];

// ── Attributes ──────────────────────────────────────────────────────

pub const ID: &str = "id";
pub const NAME: &str = "name";
pub const VERSION: &str = "version";
pub const DESCRIPTION: &str = "description";
pub const FORMAT_VERSION_ATTR: &str = "formatVersion";
pub const INDEX: &str = "index";
pub const LABEL: &str = "label";
pub const SOURCE: &str = "source";
pub const TARGET: &str = "target";
pub const IDREF: &str = "idref";
pub const EXPRESSION_TYPE: &str = "expressionType";
pub const RETURN_TYPE: &str = "returnType";
pub const INTERPRETER: &str = "interpreter";
pub const CLASS_NAME: &str = "className";
pub const TRANSIENT: &str = "transient";
pub const LONG_TEXT: &str = "longText";
pub const MULTIPLE: &str = "multiple";
pub const MIME_TYPE: &str = "mimeType";
pub const CONNECTOR_ID: &str = "connectorId";
pub const ACTIVATION_EVENT: &str = "activationEvent";
pub const FAIL_ACTION: &str = "failAction";
pub const ERROR_CODE: &str = "errorCode";
pub const ACTOR_NAME: &str = "actorName";
pub const PRIORITY: &str = "priority";
pub const EXPECTED_DURATION: &str = "expectedDuration";
pub const CALLABLE_ELEMENT_TYPE: &str = "callableElementType";
pub const TRIGGERED_BY_EVENT: &str = "triggeredByEvent";
pub const GATEWAY_TYPE: &str = "gatewayType";
pub const INTERRUPTING: &str = "interrupting";
pub const TIMER_TYPE: &str = "timerType";
pub const MESSAGE_NAME: &str = "messageName";
pub const SIGNAL_NAME: &str = "signalName";
pub const OPERATOR_TYPE: &str = "operatorType";
pub const OPERATOR: &str = "operator";
pub const OPERATOR_INPUT_TYPE: &str = "operatorInputType";
pub const TYPE: &str = "type";
pub const TEST_BEFORE: &str = "testBefore";
pub const IS_SEQUENTIAL: &str = "isSequential";
pub const LOOP_DATA_INPUT_REF: &str = "loopDataInputRef";
pub const LOOP_DATA_OUTPUT_REF: &str = "loopDataOutputRef";
pub const DATA_INPUT_ITEM_REF: &str = "dataInputItemRef";
pub const DATA_OUTPUT_ITEM_REF: &str = "dataOutputItemRef";
pub const USER_FILTER_ID: &str = "userFilterId";
pub const INITIATOR: &str = "initiator";
