//! Event trigger bindings.

use super::{keyword, optional, required, Bound, ElementBinding};
use crate::error::ParseError;
use crate::model::*;
use crate::xml::tags;
use crate::xml::Attributes;

#[derive(Default)]
pub(crate) struct TimerTriggerBinding {
    timer_type: Option<TimerType>,
    expression: Option<Expression>,
}

impl ElementBinding for TimerTriggerBinding {
    fn element_tag(&self) -> &str {
        tags::TIMER_EVENT_TRIGGER
    }

    fn set_attributes(&mut self, attributes: &Attributes) -> Result<(), ParseError> {
        let tag = tags::TIMER_EVENT_TRIGGER;
        self.timer_type = keyword(tag, attributes, tags::TIMER_TYPE, TimerType::parse, "DURATION, DATE or CYCLE")?;
        if self.timer_type.is_none() {
            return Err(ParseError::missing(tag, tags::TIMER_TYPE));
        }
        Ok(())
    }

    fn set_child_object(&mut self, name: &str, value: Bound) -> Result<(), ParseError> {
        if let (tags::TIMER_EXPRESSION, Bound::Expression(e)) = (name, value) {
            self.expression = Some(e);
        }
        Ok(())
    }

    fn get_object(self: Box<Self>) -> Result<Bound, ParseError> {
        let tag = tags::TIMER_EVENT_TRIGGER;
        let timer_type = self
            .timer_type
            .ok_or_else(|| ParseError::missing(tag, tags::TIMER_TYPE))?;
        let expression = self
            .expression
            .ok_or_else(|| ParseError::structure(tag, "missing <timerExpression> child"))?;
        Ok(Bound::Timer(TimerTrigger {
            timer_type,
            expression,
        }))
    }
}

#[derive(Default)]
pub(crate) struct CatchMessageTriggerBinding {
    message_name: String,
    operations: Vec<Operation>,
    correlations: Vec<Correlation>,
}

impl ElementBinding for CatchMessageTriggerBinding {
    fn element_tag(&self) -> &str {
        tags::CATCH_MESSAGE_EVENT_TRIGGER
    }

    fn set_attributes(&mut self, attributes: &Attributes) -> Result<(), ParseError> {
        self.message_name =
            required(tags::CATCH_MESSAGE_EVENT_TRIGGER, attributes, tags::MESSAGE_NAME)?.to_owned();
        Ok(())
    }

    fn set_child_object(&mut self, name: &str, value: Bound) -> Result<(), ParseError> {
        match name {
            tags::OPERATIONS => self.operations = value.into_vec(),
            tags::CORRELATIONS => self.correlations = value.into_vec(),
            _ => {}
        }
        Ok(())
    }

    fn get_object(self: Box<Self>) -> Result<Bound, ParseError> {
        Ok(Bound::CatchMessage(CatchMessageTrigger {
            message_name: self.message_name,
            operations: self.operations,
            correlations: self.correlations,
        }))
    }
}

#[derive(Default)]
pub(crate) struct ThrowMessageTriggerBinding {
    message_name: String,
    target_process: Option<Expression>,
    target_flow_node: Option<Expression>,
    correlations: Vec<Correlation>,
    data_definitions: Vec<DataDefinition>,
}

impl ElementBinding for ThrowMessageTriggerBinding {
    fn element_tag(&self) -> &str {
        tags::THROW_MESSAGE_EVENT_TRIGGER
    }

    fn set_attributes(&mut self, attributes: &Attributes) -> Result<(), ParseError> {
        self.message_name =
            required(tags::THROW_MESSAGE_EVENT_TRIGGER, attributes, tags::MESSAGE_NAME)?.to_owned();
        Ok(())
    }

    fn set_child_object(&mut self, name: &str, value: Bound) -> Result<(), ParseError> {
        match (name, value) {
            (tags::TARGET_PROCESS, Bound::Expression(e)) => self.target_process = Some(e),
            (tags::TARGET_FLOW_NODE, Bound::Expression(e)) => self.target_flow_node = Some(e),
            (tags::CORRELATIONS, value) => self.correlations = value.into_vec(),
            (tags::DATA_DEFINITIONS, value) => self.data_definitions = value.into_vec(),
            _ => {}
        }
        Ok(())
    }

    fn get_object(self: Box<Self>) -> Result<Bound, ParseError> {
        let target_process = self.target_process.ok_or_else(|| {
            ParseError::structure(tags::THROW_MESSAGE_EVENT_TRIGGER, "missing <targetProcess> child")
        })?;
        Ok(Bound::ThrowMessage(ThrowMessageTrigger {
            message_name: self.message_name,
            target_process,
            target_flow_node: self.target_flow_node,
            correlations: self.correlations,
            data_definitions: self.data_definitions,
        }))
    }
}

/// Catch and throw signal triggers have the same shape; the parent tells
/// them apart by tag.
pub(crate) struct SignalTriggerBinding {
    tag: &'static str,
    signal_name: String,
}

impl SignalTriggerBinding {
    pub fn new(tag: &str) -> Self {
        let tag = if tag == tags::THROW_SIGNAL_EVENT_TRIGGER {
            tags::THROW_SIGNAL_EVENT_TRIGGER
        } else {
            tags::CATCH_SIGNAL_EVENT_TRIGGER
        };
        SignalTriggerBinding {
            tag,
            signal_name: String::new(),
        }
    }
}

impl ElementBinding for SignalTriggerBinding {
    fn element_tag(&self) -> &str {
        self.tag
    }

    fn set_attributes(&mut self, attributes: &Attributes) -> Result<(), ParseError> {
        self.signal_name = required(self.tag, attributes, tags::SIGNAL_NAME)?.to_owned();
        Ok(())
    }

    fn get_object(self: Box<Self>) -> Result<Bound, ParseError> {
        Ok(Bound::Signal(SignalTrigger {
            signal_name: self.signal_name,
        }))
    }
}

#[derive(Default)]
pub(crate) struct CatchErrorTriggerBinding {
    error_code: Option<String>,
}

impl ElementBinding for CatchErrorTriggerBinding {
    fn element_tag(&self) -> &str {
        tags::CATCH_ERROR_EVENT_TRIGGER
    }

    fn set_attributes(&mut self, attributes: &Attributes) -> Result<(), ParseError> {
        self.error_code = optional(attributes, tags::ERROR_CODE);
        Ok(())
    }

    fn get_object(self: Box<Self>) -> Result<Bound, ParseError> {
        Ok(Bound::CatchError(CatchErrorTrigger {
            error_code: self.error_code,
        }))
    }
}

#[derive(Default)]
pub(crate) struct ThrowErrorTriggerBinding {
    error_code: String,
}

impl ElementBinding for ThrowErrorTriggerBinding {
    fn element_tag(&self) -> &str {
        tags::THROW_ERROR_EVENT_TRIGGER
    }

    fn set_attributes(&mut self, attributes: &Attributes) -> Result<(), ParseError> {
        self.error_code =
            required(tags::THROW_ERROR_EVENT_TRIGGER, attributes, tags::ERROR_CODE)?.to_owned();
        Ok(())
    }

    fn get_object(self: Box<Self>) -> Result<Bound, ParseError> {
        Ok(Bound::ThrowError(ThrowErrorTrigger {
            error_code: self.error_code,
        }))
    }
}

pub(crate) struct TerminateTriggerBinding;

impl ElementBinding for TerminateTriggerBinding {
    fn element_tag(&self) -> &str {
        tags::TERMINATE_EVENT_TRIGGER
    }

    fn set_attributes(&mut self, _: &Attributes) -> Result<(), ParseError> {
        Ok(())
    }

    fn get_object(self: Box<Self>) -> Result<Bound, ParseError> {
        Ok(Bound::Terminate(TerminateTrigger))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> Attributes {
        pairs.iter().map(|(k, v)| (*k, *v)).collect()
    }

    #[test]
    fn timer_requires_type_and_expression() {
        let mut b = TimerTriggerBinding::default();
        let err = b.set_attributes(&attrs(&[("timerType", "WEEKLY")])).unwrap_err();
        assert!(matches!(err, ParseError::InvalidAttribute { .. }));

        b.set_attributes(&attrs(&[("timerType", "DURATION")])).unwrap();
        let err = Box::new(b).get_object().unwrap_err();
        assert!(matches!(err, ParseError::Structure { .. }));
    }

    #[test]
    fn timer_with_expression_binds() {
        let mut b = TimerTriggerBinding::default();
        b.set_attributes(&attrs(&[("timerType", "CYCLE")])).unwrap();
        let every_hour = Expression::string("R/PT1H");
        b.set_child_object("timerExpression", Bound::Expression(every_hour.clone()))
            .unwrap();
        let Bound::Timer(t) = Box::new(b).get_object().unwrap() else {
            panic!("expected timer");
        };
        assert_eq!(t.timer_type, TimerType::Cycle);
        assert_eq!(t.expression, every_hour);
    }

    #[test]
    fn throw_message_requires_target_process() {
        let mut b = ThrowMessageTriggerBinding::default();
        b.set_attributes(&attrs(&[("messageName", "invoice")])).unwrap();
        assert!(Box::new(b).get_object().is_err());
    }

    #[test]
    fn throw_error_requires_code() {
        let mut b = ThrowErrorTriggerBinding::default();
        let err = b.set_attributes(&Attributes::default()).unwrap_err();
        assert_eq!(err, ParseError::missing("throwErrorEventTrigger", "errorCode"));
    }
}
