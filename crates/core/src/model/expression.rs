//! Expressions: the typed, named snippets evaluated by the engine
//! (constants, variable reads, scripts, contract inputs, ...).
//!
//! Construction is validated; an `Expression` that exists is one the engine
//! can at least attempt to evaluate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ExpressionError;

pub const STRING_TYPE: &str = "java.lang.String";
pub const BOOLEAN_TYPE: &str = "java.lang.Boolean";
pub const INTEGER_TYPE: &str = "java.lang.Integer";
pub const LONG_TYPE: &str = "java.lang.Long";
pub const DOUBLE_TYPE: &str = "java.lang.Double";
pub const FLOAT_TYPE: &str = "java.lang.Float";

/// Interpreter tag for script expressions.
pub const GROOVY: &str = "GROOVY";

/// The declared type of an expression, as written in `expressionType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpressionKind {
    Constant,
    Variable,
    Parameter,
    ReadOnlyScript,
    Input,
    Pattern,
    Condition,
    JavaMethodCall,
    XpathRead,
    Document,
    DocumentList,
    BusinessData,
    BusinessObjectDao,
    QueryBusinessData,
    ContractInput,
    EngineConstant,
    List,
    BusinessDataReference,
}

impl ExpressionKind {
    pub const ALL: [ExpressionKind; 18] = [
        ExpressionKind::Constant,
        ExpressionKind::Variable,
        ExpressionKind::Parameter,
        ExpressionKind::ReadOnlyScript,
        ExpressionKind::Input,
        ExpressionKind::Pattern,
        ExpressionKind::Condition,
        ExpressionKind::JavaMethodCall,
        ExpressionKind::XpathRead,
        ExpressionKind::Document,
        ExpressionKind::DocumentList,
        ExpressionKind::BusinessData,
        ExpressionKind::BusinessObjectDao,
        ExpressionKind::QueryBusinessData,
        ExpressionKind::ContractInput,
        ExpressionKind::EngineConstant,
        ExpressionKind::List,
        ExpressionKind::BusinessDataReference,
    ];

    /// Wire keyword used in the `expressionType` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            ExpressionKind::Constant => "TYPE_CONSTANT",
            ExpressionKind::Variable => "TYPE_VARIABLE",
            ExpressionKind::Parameter => "TYPE_PARAMETER",
            ExpressionKind::ReadOnlyScript => "TYPE_READ_ONLY_SCRIPT",
            ExpressionKind::Input => "TYPE_INPUT",
            ExpressionKind::Pattern => "TYPE_PATTERN",
            ExpressionKind::Condition => "TYPE_CONDITION",
            ExpressionKind::JavaMethodCall => "TYPE_JAVA_METHOD_CALL",
            ExpressionKind::XpathRead => "TYPE_XPATH_READ",
            ExpressionKind::Document => "TYPE_DOCUMENT",
            ExpressionKind::DocumentList => "TYPE_DOCUMENT_LIST",
            ExpressionKind::BusinessData => "TYPE_BUSINESS_DATA",
            ExpressionKind::BusinessObjectDao => "TYPE_BUSINESS_OBJECT_DAO",
            ExpressionKind::QueryBusinessData => "TYPE_QUERY_BUSINESS_DATA",
            ExpressionKind::ContractInput => "TYPE_CONTRACT_INPUT",
            ExpressionKind::EngineConstant => "TYPE_ENGINE_CONSTANT",
            ExpressionKind::List => "TYPE_LIST",
            ExpressionKind::BusinessDataReference => "TYPE_BUSINESS_DATA_REFERENCE",
        }
    }

    pub fn is_script(self) -> bool {
        self == ExpressionKind::ReadOnlyScript
    }

    /// Kinds whose content names or encodes what to evaluate and therefore
    /// cannot be empty.
    fn requires_content(self) -> bool {
        !matches!(
            self,
            ExpressionKind::Constant
                | ExpressionKind::Pattern
                | ExpressionKind::List
                | ExpressionKind::BusinessObjectDao
        )
    }
}

impl fmt::Display for ExpressionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpressionKind {
    type Err = ExpressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExpressionKind::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ExpressionError::UnknownType(s.to_owned()))
    }
}

/// A named expression with its dependency tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expression {
    pub name: String,
    pub content: String,
    pub kind: ExpressionKind,
    pub return_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpreter: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<Expression>,
}

impl Expression {
    /// Build and validate an expression. An empty interpreter string is
    /// treated as no interpreter.
    pub fn new(
        name: impl Into<String>,
        content: impl Into<String>,
        kind: ExpressionKind,
        return_type: impl Into<String>,
        interpreter: Option<String>,
        dependencies: Vec<Expression>,
    ) -> Result<Self, ExpressionError> {
        let expression = Expression {
            name: name.into(),
            content: content.into(),
            kind,
            return_type: return_type.into(),
            interpreter: interpreter.filter(|i| !i.is_empty()),
            dependencies,
        };
        expression.validate()?;
        Ok(expression)
    }

    pub fn constant(
        value: impl Into<String>,
        return_type: impl Into<String>,
    ) -> Result<Self, ExpressionError> {
        let value = value.into();
        Expression::new(
            value.clone(),
            value,
            ExpressionKind::Constant,
            return_type,
            None,
            Vec::new(),
        )
    }

    pub fn string(value: impl Into<String>) -> Self {
        let value = value.into();
        // String constants accept any content.
        Expression {
            name: value.clone(),
            content: value,
            kind: ExpressionKind::Constant,
            return_type: STRING_TYPE.to_owned(),
            interpreter: None,
            dependencies: Vec::new(),
        }
    }

    pub fn boolean(value: bool) -> Self {
        let value = value.to_string();
        Expression {
            name: value.clone(),
            content: value,
            kind: ExpressionKind::Constant,
            return_type: BOOLEAN_TYPE.to_owned(),
            interpreter: None,
            dependencies: Vec::new(),
        }
    }

    pub fn variable(
        name: impl Into<String>,
        return_type: impl Into<String>,
    ) -> Result<Self, ExpressionError> {
        let name = name.into();
        Expression::new(
            name.clone(),
            name,
            ExpressionKind::Variable,
            return_type,
            None,
            Vec::new(),
        )
    }

    pub fn script(
        name: impl Into<String>,
        content: impl Into<String>,
        return_type: impl Into<String>,
        dependencies: Vec<Expression>,
    ) -> Result<Self, ExpressionError> {
        Expression::new(
            name,
            content,
            ExpressionKind::ReadOnlyScript,
            return_type,
            Some(GROOVY.to_owned()),
            dependencies,
        )
    }

    pub fn contract_input(
        name: impl Into<String>,
        return_type: impl Into<String>,
    ) -> Result<Self, ExpressionError> {
        let name = name.into();
        Expression::new(
            name.clone(),
            name,
            ExpressionKind::ContractInput,
            return_type,
            None,
            Vec::new(),
        )
    }

    pub fn validate(&self) -> Result<(), ExpressionError> {
        if self.return_type.trim().is_empty() {
            return Err(ExpressionError::MissingReturnType {
                name: self.name.clone(),
            });
        }
        match (&self.interpreter, self.kind.is_script()) {
            (None, true) => {
                return Err(ExpressionError::MissingInterpreter {
                    name: self.name.clone(),
                })
            }
            (Some(interpreter), false) => {
                return Err(ExpressionError::UnexpectedInterpreter {
                    name: self.name.clone(),
                    kind: self.kind,
                    interpreter: interpreter.clone(),
                })
            }
            _ => {}
        }
        if self.kind.requires_content() && self.content.trim().is_empty() {
            return Err(ExpressionError::EmptyContent {
                name: self.name.clone(),
                kind: self.kind,
            });
        }
        if self.kind == ExpressionKind::Constant {
            check_constant(&self.name, &self.content, &self.return_type)?;
        }
        Ok(())
    }
}

fn check_constant(name: &str, content: &str, return_type: &str) -> Result<(), ExpressionError> {
    let ok = match return_type {
        BOOLEAN_TYPE => matches!(content, "true" | "false"),
        INTEGER_TYPE => content.parse::<i32>().is_ok(),
        LONG_TYPE => content.parse::<i64>().is_ok(),
        DOUBLE_TYPE | FLOAT_TYPE => content.parse::<f64>().is_ok(),
        _ => true,
    };
    if ok {
        Ok(())
    } else {
        Err(ExpressionError::InvalidConstant {
            name: name.to_owned(),
            content: content.to_owned(),
            return_type: return_type.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_keywords_round_trip() {
        for kind in ExpressionKind::ALL {
            assert_eq!(kind.as_str().parse::<ExpressionKind>().unwrap(), kind);
        }
        assert!("TYPE_MAGIC".parse::<ExpressionKind>().is_err());
    }

    #[test]
    fn script_requires_interpreter() {
        let err = Expression::new(
            "s",
            "return 1",
            ExpressionKind::ReadOnlyScript,
            INTEGER_TYPE,
            None,
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, ExpressionError::MissingInterpreter { .. }));

        let ok = Expression::script("s", "return 1", INTEGER_TYPE, vec![]).unwrap();
        assert_eq!(ok.interpreter.as_deref(), Some(GROOVY));
    }

    #[test]
    fn interpreter_rejected_on_variable() {
        let err = Expression::new(
            "v",
            "v",
            ExpressionKind::Variable,
            STRING_TYPE,
            Some(GROOVY.into()),
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, ExpressionError::UnexpectedInterpreter { .. }));
    }

    #[test]
    fn empty_interpreter_is_absent() {
        let e = Expression::new(
            "v",
            "v",
            ExpressionKind::Variable,
            STRING_TYPE,
            Some(String::new()),
            vec![],
        )
        .unwrap();
        assert!(e.interpreter.is_none());
    }

    #[test]
    fn constant_content_checked_against_primitive_type() {
        assert!(Expression::constant("12", LONG_TYPE).is_ok());
        assert!(Expression::constant("twelve", LONG_TYPE).is_err());
        assert!(Expression::constant("yes", BOOLEAN_TYPE).is_err());
        assert!(Expression::constant("", STRING_TYPE).is_ok());
        assert!(Expression::constant("anything", "com.acme.Invoice").is_ok());
    }

    #[test]
    fn variable_needs_content_and_return_type() {
        assert!(matches!(
            Expression::variable("", STRING_TYPE),
            Err(ExpressionError::EmptyContent { .. })
        ));
        assert!(matches!(
            Expression::variable("amount", " "),
            Err(ExpressionError::MissingReturnType { .. })
        ));
    }
}
