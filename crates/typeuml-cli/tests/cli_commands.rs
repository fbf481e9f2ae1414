//! End-to-end tests driving the typeuml binary
//!
//! Each test writes a symbol graph to a temp dir, runs the CLI against it and
//! checks what lands on stdout or in the output file.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const GRAPH: &str = r#"{
  "types": [
    { "name": "Demo.IA", "kind": "interface" },
    { "name": "Demo.IB", "kind": "interface", "interfaces": ["Demo.IA"] },
    { "name": "Demo.A", "kind": "class", "interfaces": ["Demo.IA"] },
    {
      "name": "Demo.B", "kind": "class", "base": "Demo.A",
      "interfaces": ["Demo.IA", "Demo.IB"],
      "members": [
        { "kind": "field", "name": "cache", "visibility": "internal", "type": "int" },
        { "kind": "method", "name": "Run", "return_type": "bool" }
      ]
    },
    { "name": "Demo.Secret", "kind": "class", "visibility": "internal" }
  ]
}"#;

fn write_graph(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("graph.json");
    std::fs::write(&path, content).expect("failed to write graph");
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_typeuml"))
        .args(args)
        .env("TYPEUML_LOG_LEVEL", "off")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run typeuml")
}

#[test]
fn test_render_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let graph = write_graph(dir.path(), GRAPH);

    let output = run(&["render", "-i", graph.to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("@startuml\n!theme cyborg-outline\n\n"));
    assert!(stdout.contains("class Demo.B extends Demo.A\n"));
    assert!(stdout.contains("class Demo.B implements Demo.IB\n"));
    assert!(!stdout.contains("class Demo.B implements Demo.IA\n"));
    assert!(stdout.contains("~int cache\n"));
    assert!(stdout.contains("class Demo.Secret {"));
    assert!(stdout.ends_with("@enduml\n"));
}

#[test]
fn test_render_public_only_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let graph = write_graph(dir.path(), GRAPH);
    let out = dir.path().join("diagram.puml");

    let output = run(&[
        "render",
        "-i",
        graph.to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
        "--visibility",
        "public-only",
        "--theme",
        "plain",
    ]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let diagram = std::fs::read_to_string(&out).unwrap();
    assert!(diagram.contains("!theme plain\n"));
    assert!(diagram.contains("+bool Run()\n"));
    assert!(!diagram.contains("cache"));
    assert!(!diagram.contains("Demo.Secret"));
}

#[test]
fn test_generate_module() {
    let dir = tempfile::tempdir().unwrap();
    let graph = write_graph(dir.path(), GRAPH);

    let output = run(&["generate", "-i", graph.to_str().unwrap()]);
    assert!(output.status.success());

    let module = String::from_utf8(output.stdout).unwrap();
    assert!(module.contains("pub const PUBLIC_OR_INTERNAL_DIAGRAM: &str = r#\"@startuml"));
    assert!(module.contains("pub const PUBLIC_ONLY_DIAGRAM: &str = r#\"@startuml"));
}

#[test]
fn test_inspect_json() {
    let dir = tempfile::tempdir().unwrap();
    let graph = write_graph(dir.path(), GRAPH);

    let output = run(&["inspect", "-i", graph.to_str().unwrap(), "--json"]);
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["declared"], 5);
    assert_eq!(report["rendered"], 5);
    assert_eq!(report["filter"], "public-or-internal");
    assert_eq!(report["types"][3]["name"], "Demo.B");
    assert_eq!(
        report["types"][3]["edges"],
        serde_json::json!(["extends Demo.A", "implements Demo.IB"])
    );
}

#[test]
fn test_invalid_graph_fails() {
    let dir = tempfile::tempdir().unwrap();
    let graph = write_graph(dir.path(), "{ \"types\": [ { \"kind\": \"class\" } ] }");

    let output = run(&["render", "-i", graph.to_str().unwrap()]);
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error: Failed to load symbol graph"));
    assert!(stderr.contains("missing field"));
}

#[test]
fn test_missing_input_file_fails() {
    let output = run(&["render", "-i", "/nonexistent/typeuml.json"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Failed to read input file"));
}
