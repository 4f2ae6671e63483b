//! Codec settings file for `flowdef`.
//!
//! # Example
//!
//! ```toml
//! [parse]
//! unresolved_transitions = "reject"
//!
//! [write]
//! indent = 4
//! declaration = false
//! ```

use std::path::Path;

use flowdef_core::{ParseOptions, WriteOptions};
use serde::{Deserialize, Serialize};

/// Default settings file, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "flowdef.toml";

/// Top-level settings. Both sections are optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecConfig {
    pub parse: ParseOptions,
    pub write: WriteOptions,
}

/// Read the settings file.
///
/// An explicit path must exist. Without one, `flowdef.toml` is used when
/// present and defaults apply otherwise.
pub fn load_config(explicit: Option<&Path>) -> Result<CodecConfig, String> {
    let path = match explicit {
        Some(path) => path,
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if !default.exists() {
                return Ok(CodecConfig::default());
            }
            default
        }
    };
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("could not read '{}': {}", path.display(), e))?;
    let config: CodecConfig = toml::from_str(&content)
        .map_err(|e| format!("could not parse '{}': {}", path.display(), e))?;
    tracing::debug!(path = %path.display(), ?config, "loaded codec settings");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowdef_core::UnresolvedTransitionPolicy;

    #[test]
    fn empty_file_gives_defaults() {
        let config: CodecConfig = toml::from_str("").unwrap();
        assert_eq!(config, CodecConfig::default());
        assert_eq!(config.write.indent, 2);
        assert!(config.write.declaration);
    }

    #[test]
    fn sections_override_defaults() {
        let config: CodecConfig = toml::from_str(
            r#"
[parse]
unresolved_transitions = "reject"

[write]
indent = 0
"#,
        )
        .unwrap();
        assert_eq!(
            config.parse.unresolved_transitions,
            UnresolvedTransitionPolicy::Reject
        );
        assert_eq!(config.write.indent, 0);
        assert!(config.write.declaration);
    }

    #[test]
    fn unknown_section_is_rejected() {
        let err = toml::from_str::<CodecConfig>("[serve]\nport = 1\n").unwrap_err();
        assert!(err.to_string().contains("serve"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = load_config(Some(Path::new("/nonexistent/flowdef.toml"))).unwrap_err();
        assert!(err.starts_with("could not read"));
    }
}
