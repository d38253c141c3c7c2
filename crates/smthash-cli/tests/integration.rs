//! Integration tests for CLI commands.

use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::TempDir;

const SHA256_ABC: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";
const SHA256_00: &str = "6e340b9cffb37a989ca544e6bb780a2c78901d3fb33738768511a30617afa01d";

fn run_cli(args: &[&str]) -> (bool, String, String) {
    run_cli_with_stdin(args, None)
}

fn run_cli_with_stdin(args: &[&str], stdin: Option<&str>) -> (bool, String, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_smthash"))
        .args(args)
        .env_remove("SMTHASH_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI");

    {
        let mut pipe = child.stdin.take().unwrap();
        if let Some(input) = stdin {
            pipe.write_all(input.as_bytes()).unwrap();
        }
    }

    let output = child.wait_with_output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    (output.status.success(), stdout, stderr)
}

fn write_json(dir: &TempDir, name: &str, body: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, body).unwrap();
    path.to_string_lossy().to_string()
}

#[test]
fn test_hash_text() {
    let (success, stdout, _) = run_cli(&["hash", "text:abc"]);
    assert!(success);
    assert_eq!(stdout.trim(), SHA256_ABC);
}

#[test]
fn test_hash_null_equals_zero() {
    let (_, null_out, _) = run_cli(&["hash", "null"]);
    let (_, zero_out, _) = run_cli(&["hash", "int:0"]);
    assert_eq!(null_out.trim(), SHA256_00);
    assert_eq!(zero_out.trim(), SHA256_00);
}

#[test]
fn test_hash_concatenates_bytes() {
    let (_, split, _) = run_cli(&["hash", "bytes:ab", "hex:CD"]);
    let (_, joined, _) = run_cli(&["hash", "bytes:abcd"]);
    assert_eq!(split, joined);
}

#[test]
fn test_hash_json_output() {
    let (success, stdout, _) = run_cli(&["hash", "text:abc", "--json", "--format", "b64"]);
    assert!(success);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["digest"], "ungWv48Bz-pBQUDeXa4iI7ADYaOWF3qctBD_YfIAFa0");
    assert_eq!(value["inputs"], 1);
}

#[test]
fn test_hash_rejects_bad_hex() {
    let (success, _, stderr) = run_cli(&["hash", "hex:abc"]);
    assert!(!success);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("abc"));
}

#[test]
fn test_hash_rejects_untagged_input() {
    let (success, _, stderr) = run_cli(&["hash", "42"]);
    assert!(!success);
    assert!(stderr.contains("unsupported input"));
}

#[test]
fn test_normalize_file_ignores_key_order() {
    let dir = TempDir::new().unwrap();
    let first = write_json(&dir, "a.json", r#"{"b": 2, "a": 1}"#);
    let second = write_json(&dir, "b.json", r#"{"a": 1, "b": 2}"#);

    let (success, out_a, _) = run_cli(&["normalize", &first]);
    assert!(success);
    let (_, out_b, _) = run_cli(&["normalize", &second]);
    assert_eq!(out_a, out_b);
    // hex of {"a":1,"b":2}
    assert_eq!(out_a.trim(), "7b2261223a312c2262223a327d");
}

#[test]
fn test_normalize_stdin() {
    let (success, stdout, _) = run_cli_with_stdin(&["normalize"], Some(r#"{"b":2,"a":1}"#));
    assert!(success);
    assert_eq!(stdout.trim(), "7b2261223a312c2262223a327d");
}

#[test]
fn test_normalize_missing_file() {
    let (success, _, stderr) = run_cli(&["normalize", "/nonexistent/input.json"]);
    assert!(!success);
    assert!(stderr.contains("failed to read file"));
}

#[test]
fn test_canonicalize_command() {
    let dir = TempDir::new().unwrap();
    let path = write_json(&dir, "obj.json", r#"{"z": [1, 2], "a": {"y": null, "x": true}}"#);

    let (success, stdout, _) = run_cli(&["canonicalize", &path]);
    assert!(success);
    assert_eq!(stdout.trim(), r#"{"a":{"x":true,"y":null},"z":[1,2]}"#);

    let (success, stdout, _) = run_cli(&["canonicalize", &path, "--sha256"]);
    assert!(success);
    assert_eq!(stdout.trim().len(), 64);
}

#[test]
fn test_invalid_json_input() {
    let (success, _, stderr) = run_cli_with_stdin(&["canonicalize"], Some("{not json"));
    assert!(!success);
    assert!(stderr.contains("invalid JSON"));
}
