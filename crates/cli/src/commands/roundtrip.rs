use std::path::Path;
use std::process;

use super::{load_document, print_json};
use crate::config::CodecConfig;
use crate::{report_error, OutputFormat};

/// Parse, write, and with `verify` re-parse the written document and
/// compare graphs.
pub(crate) fn cmd_roundtrip(
    file: &Path,
    verify: bool,
    config: &CodecConfig,
    output: OutputFormat,
    quiet: bool,
) {
    let definition = load_document(file, &config.parse, output, quiet);
    let xml = match flowdef_core::to_xml_string_with(&definition, &config.write) {
        Ok(x) => x,
        Err(e) => {
            report_error(&format!("error writing document: {}", e), output, quiet);
            process::exit(1);
        }
    };

    let verified = if verify {
        match flowdef_core::from_xml_str_with(&xml, &config.parse) {
            Ok(reparsed) if reparsed == definition => Some(true),
            Ok(_) => {
                tracing::warn!(file = %file.display(), "written document differs from source");
                Some(false)
            }
            Err(e) => {
                let msg = format!("written document does not parse: {}", e);
                report_error(&msg, output, quiet);
                process::exit(1);
            }
        }
    } else {
        None
    };

    match output {
        OutputFormat::Text => print!("{}", xml),
        OutputFormat::Json => {
            let json = serde_json::json!({ "xml": xml, "verified": verified });
            print_json(&json, output, quiet);
        }
    }

    if verified == Some(false) {
        report_error(
            &format!("round trip of '{}' changed the graph", file.display()),
            output,
            quiet,
        );
        process::exit(1);
    }
}
