//! End-to-end runs of the `logbridge` binary

use serde_json::Value;
use std::path::Path;
use std::process::{Command, Output};

fn logbridge(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_logbridge"))
        .current_dir(dir)
        .arg("--no-config")
        .args(args)
        .output()
        .unwrap()
}

fn read_records(path: &Path) -> Vec<Value> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

#[test]
fn test_tracing_engine_logs_message() {
    let dir = tempfile::tempdir().unwrap();
    let output = logbridge(dir.path(), &["hello"]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "{stderr}");
    assert!(stderr.contains("hello"), "{stderr}");
}

#[test]
fn test_jsonl_engine_writes_records() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("logs").join("out.jsonl");
    let out_arg = out.to_string_lossy().to_string();

    let output = logbridge(
        dir.path(),
        &[
            "--engine",
            "jsonl",
            "--engine-path",
            &out_arg,
            "--level",
            "warn",
            "--target",
            "app::db",
            "pool exhausted",
            r"C:\{}",
        ],
    );
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );

    let records = read_records(&out);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["level"], "WARN");
    assert_eq!(records[0]["logger"], "app::db");
    assert_eq!(records[0]["message"], "pool exhausted");
    assert_eq!(records[1]["message"], r"C:\{}");
}

#[test]
fn test_jsonl_engine_drops_levels_below_minimum() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.jsonl");
    let out_arg = out.to_string_lossy().to_string();

    let output = logbridge(
        dir.path(),
        &[
            "--engine",
            "jsonl",
            "--engine-path",
            &out_arg,
            "--level",
            "debug",
            "too chatty",
        ],
    );
    assert!(output.status.success());
    assert!(read_records(&out).is_empty());
}

#[test]
fn test_unknown_engine_fails_to_bind() {
    let dir = tempfile::tempdir().unwrap();
    let output = logbridge(dir.path(), &["--engine", "nope", "hello"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("engine 'nope' could not be bound"), "{stderr}");
}
