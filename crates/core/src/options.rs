//! Parse and write settings.

use serde::{Deserialize, Serialize};

/// What to do with a transition whose source or target names no flow node
/// in its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnresolvedTransitionPolicy {
    /// Keep the transition in the container, skip wiring the missing end,
    /// log a warning.
    #[default]
    Ignore,
    /// Fail the parse.
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub unresolved_transitions: UnresolvedTransitionPolicy,
}

impl ParseOptions {
    pub fn strict() -> Self {
        ParseOptions {
            unresolved_transitions: UnresolvedTransitionPolicy::Reject,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriteOptions {
    /// Spaces per nesting level; 0 writes everything on one line.
    pub indent: usize,
    /// Emit the `<?xml ...?>` declaration.
    pub declaration: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions {
            indent: 2,
            declaration: true,
        }
    }
}
