//! CLI integration tests for the `flowdef` subcommands.
//!
//! Uses `assert_cmd` to spawn the `flowdef` binary and verify exit codes,
//! stdout content, and stderr content.
//!
//! Tests run from the workspace root so that relative paths to the
//! conformance fixtures resolve.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Locate the workspace root by walking up from CARGO_MANIFEST_DIR.
fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("workspace root")
        .to_path_buf()
}

/// Helper: create a Command for the `flowdef` binary, rooted at workspace.
fn flowdef() -> Command {
    let mut cmd = cargo_bin_cmd!("flowdef");
    cmd.current_dir(workspace_root());
    cmd.env_remove("RUST_LOG");
    cmd
}

const NESTED: &str = "conformance/positive/nested-subprocess.xml";
const EXPENSE: &str = "conformance/positive/expense-claim.xml";

// ──────────────────────────────────────────────
// 1. Help and version
// ──────────────────────────────────────────────

#[test]
fn help_exits_0_with_description() {
    flowdef()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Process definition codec"));
}

#[test]
fn version_exits_0() {
    flowdef()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("flowdef"));
}

// ──────────────────────────────────────────────
// 2. parse
// ──────────────────────────────────────────────

#[test]
fn parse_prints_graph_json() {
    let output = flowdef()
        .args(["parse", "conformance/positive/review-decide.xml"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["name"], "Approval");
    assert_eq!(json["flow_elements"]["transitions"].as_array().unwrap().len(), 2);
}

#[test]
fn parse_missing_file_exits_1() {
    flowdef()
        .args(["parse", "conformance/positive/no-such-file.xml"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error reading file"));
}

#[test]
fn parse_negative_fixture_reports_error() {
    flowdef()
        .args(["parse", "conformance/negative/missing-version.xml"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "is missing required attribute 'version'",
        ));
}

#[test]
fn parse_error_as_json() {
    let output = flowdef()
        .args([
            "--output",
            "json",
            "parse",
            "conformance/negative/bad-gateway-type.xml",
        ])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert!(json["error"].as_str().unwrap().contains("gatewayType"));
}

#[test]
fn quiet_suppresses_error_text() {
    flowdef()
        .args(["--quiet", "parse", "conformance/negative/malformed.xml"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::is_empty());
}

#[test]
fn strict_parse_rejects_cross_scope_transition() {
    flowdef()
        .args(["parse", "--strict", NESTED])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unresolved target flow node 4"));
}

// ──────────────────────────────────────────────
// 3. emit
// ──────────────────────────────────────────────

#[test]
fn emit_writes_json_graph_as_xml() {
    let tmp = TempDir::new().unwrap();
    let json_path = tmp.path().join("expense.json");

    let parsed = flowdef().args(["parse", EXPENSE]).output().unwrap();
    assert!(parsed.status.success());
    fs::write(&json_path, &parsed.stdout).unwrap();

    flowdef()
        .arg("emit")
        .arg(&json_path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<?xml"))
        .stdout(predicate::str::contains(r#"<defaultTransition idref="4"/>"#))
        .stdout(predicate::str::contains("<actorInitiator name=\"employee\"/>"));
}

#[test]
fn emit_invalid_json_exits_1() {
    let tmp = TempDir::new().unwrap();
    let json_path = tmp.path().join("broken.json");
    fs::write(&json_path, "{ not json").unwrap();

    flowdef()
        .arg("emit")
        .arg(&json_path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error parsing JSON"));
}

// ──────────────────────────────────────────────
// 4. roundtrip
// ──────────────────────────────────────────────

#[test]
fn roundtrip_verify_succeeds_on_fixtures() {
    for fixture in [
        "review-decide",
        "nested-subprocess",
        "boundary-event",
        "missing-transition-ids",
        "expense-claim",
    ] {
        flowdef()
            .args(["roundtrip", "--verify"])
            .arg(format!("conformance/positive/{}.xml", fixture))
            .assert()
            .success()
            .stdout(predicate::str::contains("<processDefinition"));
    }
}

#[test]
fn roundtrip_json_reports_verification() {
    let output = flowdef()
        .args(["--output", "json", "roundtrip", "--verify", EXPENSE])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["verified"], true);
    assert!(json["xml"].as_str().unwrap().contains("ExpenseClaim"));
}

#[test]
fn roundtrip_synthesizes_missing_transition_ids() {
    flowdef()
        .args(["roundtrip", "conformance/positive/missing-transition-ids.xml"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"<transition id="6" source="1" target="2"/>"#))
        .stdout(predicate::str::contains("somethingFromTheFuture").not());
}

// ──────────────────────────────────────────────
// 5. check
// ──────────────────────────────────────────────

#[test]
fn check_reports_summary() {
    flowdef()
        .args(["check", EXPENSE])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ExpenseClaim 2.3: 1 containers, 7 flow nodes, 7 transitions",
        ))
        .stdout(predicate::str::contains("all transitions resolved"));
}

#[test]
fn check_lists_unresolved_endpoints() {
    let output = flowdef()
        .args(["--output", "json", "check", NESTED])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let unresolved = json["unresolved"].as_array().unwrap();
    assert_eq!(unresolved.len(), 1);
    assert_eq!(unresolved[0]["container"], 1);
    assert_eq!(unresolved[0]["side"], "target");
    assert_eq!(unresolved[0]["node"], 4);
}

#[test]
fn check_strict_fails_on_unresolved() {
    flowdef()
        .args(["check", "--strict", NESTED])
        .assert()
        .failure()
        .code(1);
}

// ──────────────────────────────────────────────
// 6. Settings file
// ──────────────────────────────────────────────

#[test]
fn config_file_sets_write_options() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("flowdef.toml");
    fs::write(&config, "[write]\nindent = 0\ndeclaration = false\n").unwrap();

    flowdef()
        .arg("--config")
        .arg(&config)
        .args(["roundtrip", "conformance/positive/review-decide.xml"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<processDefinition"));
}

#[test]
fn config_file_can_require_strict_parsing() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("flowdef.toml");
    fs::write(&config, "[parse]\nunresolved_transitions = \"reject\"\n").unwrap();

    flowdef()
        .arg("--config")
        .arg(&config)
        .args(["check", NESTED])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn missing_config_file_exits_1() {
    flowdef()
        .args(["--config", "does-not-exist.toml", "check", EXPENSE])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("could not read"));
}
