use std::path::Path;
use std::process;

use flowdef_core::{ProcessDefinition, WriteOptions};

use super::read_file;
use crate::{report_error, OutputFormat};

pub(crate) fn cmd_emit(file: &Path, options: &WriteOptions, output: OutputFormat, quiet: bool) {
    let json = read_file(file, output, quiet);
    let mut definition: ProcessDefinition = match serde_json::from_str(&json) {
        Ok(d) => d,
        Err(e) => {
            let msg = format!("error parsing JSON in '{}': {}", file.display(), e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };
    // hand-edited graphs may carry stale container numbering
    definition.assign_scopes();

    match flowdef_core::to_xml_string_with(&definition, options) {
        Ok(xml) => print!("{}", xml),
        Err(e) => {
            report_error(&format!("error writing document: {}", e), output, quiet);
            process::exit(1);
        }
    }
}
