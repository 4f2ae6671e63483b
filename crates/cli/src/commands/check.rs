use std::path::Path;

use flowdef_core::model::UnresolvedEndpoint;
use flowdef_core::{ContainerId, ParseOptions};

use super::{load_document, print_json};
use crate::OutputFormat;

pub(crate) fn cmd_check(file: &Path, options: &ParseOptions, output: OutputFormat, quiet: bool) {
    let definition = load_document(file, options, output, quiet);

    let unresolved: Vec<(ContainerId, UnresolvedEndpoint)> = definition
        .containers()
        .iter()
        .flat_map(|c| {
            c.unresolved_transitions()
                .into_iter()
                .map(move |endpoint| (c.id, endpoint))
        })
        .collect();

    match output {
        OutputFormat::Text => {
            if quiet {
                return;
            }
            println!(
                "{} {}: {} containers, {} flow nodes, {} transitions",
                definition.name,
                definition.version,
                definition.containers().len(),
                definition.flow_node_count(),
                definition.transition_count(),
            );
            if unresolved.is_empty() {
                println!("all transitions resolved");
            }
            for (container, e) in &unresolved {
                println!(
                    "  unresolved: transition {} {} flow node {} (container {})",
                    e.transition, e.side, e.node, container
                );
            }
        }
        OutputFormat::Json => {
            let report = serde_json::json!({
                "name": definition.name,
                "version": definition.version,
                "containers": definition.containers().len(),
                "flow_nodes": definition.flow_node_count(),
                "transitions": definition.transition_count(),
                "unresolved": unresolved.iter().map(|(container, e)| {
                    serde_json::json!({
                        "container": container.0,
                        "transition": e.transition.0,
                        "side": e.side.to_string(),
                        "node": e.node.0,
                    })
                }).collect::<Vec<_>>(),
            });
            print_json(&report, output, quiet);
        }
    }
}
