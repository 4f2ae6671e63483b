//! Subcommand implementations. Each one reports its own errors and exits
//! with status 1 on failure.

mod check;
mod emit;
mod parse;
mod roundtrip;

use std::path::Path;
use std::process;

use flowdef_core::{ParseOptions, ProcessDefinition};

use crate::{report_error, OutputFormat};

pub(crate) use check::cmd_check;
pub(crate) use emit::cmd_emit;
pub(crate) use parse::cmd_parse;
pub(crate) use roundtrip::cmd_roundtrip;

fn read_file(path: &Path, output: OutputFormat, quiet: bool) -> String {
    match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            let msg = format!("error reading file '{}': {}", path.display(), e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    }
}

/// Read and parse a process definition document, exiting on failure.
fn load_document(
    path: &Path,
    options: &ParseOptions,
    output: OutputFormat,
    quiet: bool,
) -> ProcessDefinition {
    let xml = read_file(path, output, quiet);
    match flowdef_core::from_xml_str_with(&xml, options) {
        Ok(d) => d,
        Err(e) => {
            let msg = format!("error parsing '{}': {}", path.display(), e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    }
}

fn pretty_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("serialization error: {}", e))
}

/// Print `value` as pretty JSON on stdout, exiting on failure.
fn print_json<T: serde::Serialize + ?Sized>(value: &T, output: OutputFormat, quiet: bool) {
    match pretty_json(value) {
        Ok(json) => println!("{}", json),
        Err(msg) => {
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn pretty_json_reports_serialization_failure() {
        let mut by_pair = BTreeMap::new();
        by_pair.insert((1u8, 2u8), "edge");
        let err = pretty_json(&by_pair).unwrap_err();
        assert!(err.starts_with("serialization error:"), "{err}");

        let ok = pretty_json(&serde_json::json!({ "verified": true })).unwrap();
        assert!(ok.contains("\"verified\": true"));
    }
}
