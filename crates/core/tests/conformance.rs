//! Codec conformance suite.
//!
//! Positive cases are fixture pairs:
//! - `<name>.xml`           -- a process definition document
//! - `<name>.expected.json` -- summary of the graph it must produce
//!
//! The runner parses the document, compares the summary, writes the graph
//! back out and checks that re-reading it yields the same graph.
//!
//! Negative cases pair `<name>.xml` with `<name>.expected-error.json`,
//! holding either the exact error message (`error`) or its start
//! (`error_prefix`).

use std::path::{Path, PathBuf};

use flowdef_core::{from_xml_str, to_xml_string, ProcessDefinition};

fn conformance_dir(kind: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("conformance")
        .join(kind)
}

fn read_json(path: &Path) -> serde_json::Value {
    let text = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
    serde_json::from_str(&text)
        .unwrap_or_else(|e| panic!("Invalid JSON in {}: {}", path.display(), e))
}

fn summarize(definition: &ProcessDefinition) -> serde_json::Value {
    let unresolved: usize = definition
        .containers()
        .iter()
        .map(|c| c.unresolved_transitions().len())
        .sum();
    serde_json::json!({
        "name": definition.name,
        "version": definition.version,
        "containers": definition.containers().len(),
        "flow_nodes": definition.flow_node_count(),
        "transitions": definition.transition_count(),
        "unresolved": unresolved,
    })
}

/// 1. Parse .xml
/// 2. Compare the graph summary against .expected.json
/// 3. Write and re-parse; the graph must not change
fn run_positive_fixture(name: &str) -> ProcessDefinition {
    let dir = conformance_dir("positive");
    let xml_path = dir.join(format!("{}.xml", name));
    let xml = std::fs::read_to_string(&xml_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", name, e));

    let definition =
        from_xml_str(&xml).unwrap_or_else(|e| panic!("Failed to parse {}: {}", name, e));

    let expected = read_json(&dir.join(format!("{}.expected.json", name)));
    let actual = summarize(&definition);
    assert_eq!(
        actual,
        expected,
        "Summary mismatch for {}\n\nActual:\n{}\n\nExpected:\n{}",
        name,
        serde_json::to_string_pretty(&actual).unwrap(),
        serde_json::to_string_pretty(&expected).unwrap(),
    );

    let written =
        to_xml_string(&definition).unwrap_or_else(|e| panic!("Failed to write {}: {}", name, e));
    let reparsed = from_xml_str(&written)
        .unwrap_or_else(|e| panic!("Failed to re-parse written {}: {}\n\n{}", name, e, written));
    assert_eq!(
        reparsed, definition,
        "Round trip changed the graph for {}\n\nWritten:\n{}",
        name, written
    );
    definition
}

/// Parse .xml and compare the error message against .expected-error.json.
fn run_negative_fixture(name: &str) {
    let dir = conformance_dir("negative");
    let xml = std::fs::read_to_string(dir.join(format!("{}.xml", name)))
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", name, e));
    let expected = read_json(&dir.join(format!("{}.expected-error.json", name)));

    let err = match from_xml_str(&xml) {
        Ok(_) => panic!("Expected parse error for {}, but got success", name),
        Err(e) => e.to_string(),
    };

    if let Some(exact) = expected["error"].as_str() {
        assert_eq!(err, exact, "Error mismatch for {}", name);
    } else if let Some(prefix) = expected["error_prefix"].as_str() {
        assert!(
            err.starts_with(prefix),
            "Error for {} should start with {:?}, got {:?}",
            name,
            prefix,
            err
        );
    } else {
        panic!("{}.expected-error.json has neither 'error' nor 'error_prefix'", name);
    }
}

// ──────────────────────────────────────────────
// Positive fixtures
// ──────────────────────────────────────────────

#[test]
fn review_decide() {
    run_positive_fixture("review-decide");
}

#[test]
fn nested_subprocess() {
    let d = run_positive_fixture("nested-subprocess");
    let owners: Vec<_> = d.containers().iter().map(|c| c.owner).collect();
    assert_eq!(owners.len(), 2);
    assert_eq!(owners[0], flowdef_core::ContainerOwner::Process);
    assert!(matches!(
        owners[1],
        flowdef_core::ContainerOwner::SubProcess { .. }
    ));
}

#[test]
fn boundary_event() {
    run_positive_fixture("boundary-event");
}

#[test]
fn missing_transition_ids() {
    let d = run_positive_fixture("missing-transition-ids");
    let ids: Vec<u64> = d.flow_elements.transitions.iter().map(|t| t.id.0).collect();
    assert_eq!(ids, vec![6, 5, 7]);
}

#[test]
fn expense_claim() {
    let d = run_positive_fixture("expense-claim");
    assert_eq!(d.string_indexes[0].label.as_deref(), Some("Employee"));
    assert_eq!(d.actor_initiator.as_ref().map(|a| a.name.as_str()), Some("employee"));
    assert_eq!(d.context.len(), 1);
    let contract = d.contract.as_ref().unwrap();
    assert_eq!(contract.inputs.len(), 2);

    // unknown leaves inside <inputNames> are not input names
    let review = d.flow_elements.flow_node(flowdef_core::FlowNodeId(101)).unwrap();
    let flowdef_core::model::TaskKind::User(task) = &review.activity().unwrap().task else {
        panic!("node 101 should be a user task");
    };
    let constraint = &task.contract.as_ref().unwrap().constraints[0];
    assert_eq!(constraint.input_names, vec!["decision".to_string()]);
}

// ──────────────────────────────────────────────
// Negative fixtures
// ──────────────────────────────────────────────

#[test]
fn missing_version() {
    run_negative_fixture("missing-version");
}

#[test]
fn bad_gateway_type() {
    run_negative_fixture("bad-gateway-type");
}

#[test]
fn script_without_interpreter() {
    run_negative_fixture("script-without-interpreter");
}

#[test]
fn missing_flow_elements() {
    run_negative_fixture("missing-flow-elements");
}

#[test]
fn string_index_out_of_range() {
    run_negative_fixture("string-index-out-of-range");
}

#[test]
fn top_level_boundary() {
    run_negative_fixture("top-level-boundary");
}

#[test]
fn malformed() {
    run_negative_fixture("malformed");
}

#[test]
fn reference_without_idref() {
    run_negative_fixture("reference-without-idref");
}

#[test]
fn invalid_constant() {
    run_negative_fixture("invalid-constant");
}

#[test]
fn transition_id_exhausted() {
    run_negative_fixture("transition-id-exhausted");
}
