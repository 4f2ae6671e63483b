use std::path::Path;

use flowdef_core::ParseOptions;

use super::{load_document, print_json};
use crate::OutputFormat;

pub(crate) fn cmd_parse(file: &Path, options: &ParseOptions, output: OutputFormat, quiet: bool) {
    let definition = load_document(file, options, output, quiet);
    print_json(&definition, output, quiet);
}
