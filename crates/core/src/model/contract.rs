use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InputType {
    Text,
    Boolean,
    Date,
    Integer,
    Decimal,
    ByteArray,
    File,
    LocalDate,
    LocalDateTime,
    OffsetDateTime,
    Long,
}

impl InputType {
    pub fn as_str(self) -> &'static str {
        match self {
            InputType::Text => "TEXT",
            InputType::Boolean => "BOOLEAN",
            InputType::Date => "DATE",
            InputType::Integer => "INTEGER",
            InputType::Decimal => "DECIMAL",
            InputType::ByteArray => "BYTE_ARRAY",
            InputType::File => "FILE",
            InputType::LocalDate => "LOCALDATE",
            InputType::LocalDateTime => "LOCALDATETIME",
            InputType::OffsetDateTime => "OFFSETDATETIME",
            InputType::Long => "LONG",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let t = match s {
            "TEXT" => InputType::Text,
            "BOOLEAN" => InputType::Boolean,
            "DATE" => InputType::Date,
            "INTEGER" => InputType::Integer,
            "DECIMAL" => InputType::Decimal,
            "BYTE_ARRAY" => InputType::ByteArray,
            "FILE" => InputType::File,
            "LOCALDATE" => InputType::LocalDate,
            "LOCALDATETIME" => InputType::LocalDateTime,
            "OFFSETDATETIME" => InputType::OffsetDateTime,
            "LONG" => InputType::Long,
            _ => return None,
        };
        Some(t)
    }
}

/// One contract input. Complex inputs have no type and carry nested inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub multiple: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_type: Option<InputType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<InputDefinition>,
}

impl InputDefinition {
    pub fn simple(name: impl Into<String>, input_type: InputType) -> Self {
        InputDefinition {
            name: name.into(),
            description: None,
            multiple: false,
            input_type: Some(input_type),
            inputs: Vec::new(),
        }
    }

    pub fn complex(name: impl Into<String>, inputs: Vec<InputDefinition>) -> Self {
        InputDefinition {
            name: name.into(),
            description: None,
            multiple: false,
            input_type: None,
            inputs,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstraintDefinition {
    pub name: String,
    pub expression: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default)]
    pub input_names: Vec<String>,
}

/// Typed inputs plus constraints validated before a process starts or a
/// user task completes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    #[serde(default)]
    pub inputs: Vec<InputDefinition>,
    #[serde(default)]
    pub constraints: Vec<ConstraintDefinition>,
}

impl Contract {
    pub fn input(&self, name: &str) -> Option<&InputDefinition> {
        self.inputs.iter().find(|i| i.name == name)
    }
}
