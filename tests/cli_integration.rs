//! Integration tests for the `tk` CLI.
//!
//! Each test creates a temp data directory, runs `tk` as a subprocess,
//! and verifies stdout and/or the persisted snapshot.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Get the path to the built `tk` binary.
fn tk_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("tk");
    path
}

/// Run `tk` against the given data dir, returning (stdout, stderr, success).
fn run_tk(data_dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(tk_bin())
        .arg("--data-dir")
        .arg(data_dir)
        .args(args)
        .env("XDG_CONFIG_HOME", data_dir.join("config"))
        .output()
        .expect("failed to run tk");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

/// Run `tk` expecting success, return stdout.
fn run_tk_ok(data_dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, success) = run_tk(data_dir, args);
    if !success {
        panic!(
            "tk {:?} failed:\nstdout: {}\nstderr: {}",
            args, stdout, stderr
        );
    }
    stdout
}

/// Parse the first id out of an `added [ ] <id> <title>` line.
fn added_id(stdout: &str) -> String {
    stdout
        .split_whitespace()
        .find(|w| w.parse::<i64>().is_ok())
        .expect("no id in add output")
        .to_string()
}

// ---------------------------------------------------------------------------
// Basic lifecycle
// ---------------------------------------------------------------------------

#[test]
fn add_then_list_shows_the_task() {
    let dir = TempDir::new().unwrap();
    run_tk_ok(dir.path(), &["add", "Buy milk", "2% if they have it"]);

    let out = run_tk_ok(dir.path(), &["list"]);
    assert!(out.contains("Buy milk"), "list output: {}", out);
    assert!(out.contains("[ ]"));
}

#[test]
fn state_persists_across_invocations() {
    let dir = TempDir::new().unwrap();
    run_tk_ok(dir.path(), &["add", "first"]);
    run_tk_ok(dir.path(), &["add", "second"]);

    let out = run_tk_ok(dir.path(), &["list"]);
    assert!(out.contains("first"));
    assert!(out.contains("second"));
    assert!(dir.path().join("store.json").exists());
}

#[test]
fn toggle_marks_and_unmarks() {
    let dir = TempDir::new().unwrap();
    let id = added_id(&run_tk_ok(dir.path(), &["add", "Call dentist"]));

    run_tk_ok(dir.path(), &["toggle", &id]);
    let out = run_tk_ok(dir.path(), &["list"]);
    assert!(out.contains("[x]"), "after toggle: {}", out);

    run_tk_ok(dir.path(), &["toggle", &id]);
    let out = run_tk_ok(dir.path(), &["list"]);
    assert!(out.contains("[ ]"), "after second toggle: {}", out);
}

#[test]
fn edit_replaces_title_and_reopens_task() {
    let dir = TempDir::new().unwrap();
    let id = added_id(&run_tk_ok(dir.path(), &["add", "old title"]));
    run_tk_ok(dir.path(), &["toggle", &id]);

    run_tk_ok(dir.path(), &["edit", &id, "new title", "new desc"]);
    let out = run_tk_ok(dir.path(), &["list"]);
    assert!(out.contains("new title"));
    assert!(!out.contains("old title"));
    // Edit reset the completed flag
    assert!(out.contains("[ ]"));
}

#[test]
fn rm_removes_only_the_named_task() {
    let dir = TempDir::new().unwrap();
    let keep = added_id(&run_tk_ok(dir.path(), &["add", "keeper"]));
    let gone = added_id(&run_tk_ok(dir.path(), &["add", "goner"]));

    run_tk_ok(dir.path(), &["rm", &gone]);
    let out = run_tk_ok(dir.path(), &["list"]);
    assert!(out.contains("keeper"));
    assert!(!out.contains("goner"));
    assert!(out.contains(&keep));
}

#[test]
fn unknown_id_fails_with_message() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, success) = run_tk(dir.path(), &["toggle", "999"]);
    assert!(!success);
    assert!(stderr.contains("no task with id 999"));
}

// ---------------------------------------------------------------------------
// Filter, sort, search
// ---------------------------------------------------------------------------

#[test]
fn filter_pending_hides_completed_tasks() {
    let dir = TempDir::new().unwrap();
    let done = added_id(&run_tk_ok(dir.path(), &["add", "done task"]));
    run_tk_ok(dir.path(), &["add", "open task"]);
    run_tk_ok(dir.path(), &["toggle", &done]);

    run_tk_ok(dir.path(), &["filter", "pending"]);
    let out = run_tk_ok(dir.path(), &["list"]);
    assert!(out.contains("open task"));
    assert!(!out.contains("done task"));

    // Filter selection is persisted
    let out = run_tk_ok(dir.path(), &["filter"]);
    assert!(out.contains("pending"));
}

#[test]
fn alphabetical_sort_is_case_insensitive() {
    let dir = TempDir::new().unwrap();
    run_tk_ok(dir.path(), &["add", "Zebra"]);
    run_tk_ok(dir.path(), &["add", "apples"]);

    run_tk_ok(dir.path(), &["sort", "alphabetical"]);
    let out = run_tk_ok(dir.path(), &["list"]);
    let zebra = out.find("Zebra").unwrap();
    let apples = out.find("apples").unwrap();
    assert!(apples < zebra, "expected apples before Zebra: {}", out);
}

#[test]
fn date_sort_shows_oldest_update_first() {
    let dir = TempDir::new().unwrap();
    run_tk_ok(dir.path(), &["add", "first"]);
    let second = added_id(&run_tk_ok(dir.path(), &["add", "second"]));
    // Editing bumps the timestamp, so "first" is now the oldest update.
    run_tk_ok(dir.path(), &["edit", &second, "second edited"]);

    run_tk_ok(dir.path(), &["sort", "date"]);
    let out = run_tk_ok(dir.path(), &["list"]);
    let first = out.find("first").unwrap();
    let second_pos = out.find("second edited").unwrap();
    assert!(first < second_pos, "expected oldest first: {}", out);
}

#[test]
fn search_matches_title_and_description_case_insensitively() {
    let dir = TempDir::new().unwrap();
    run_tk_ok(dir.path(), &["add", "Buy milk"]);
    run_tk_ok(dir.path(), &["add", "Groceries", "eggs and MILK"]);
    run_tk_ok(dir.path(), &["add", "Call dentist"]);

    let out = run_tk_ok(dir.path(), &["list", "--search", "milk"]);
    assert!(out.contains("Buy milk"));
    assert!(out.contains("Groceries"));
    assert!(!out.contains("Call dentist"));
}

#[test]
fn empty_list_prints_placeholder() {
    let dir = TempDir::new().unwrap();
    let out = run_tk_ok(dir.path(), &["list"]);
    assert!(out.contains("nothing to show"));
}

// ---------------------------------------------------------------------------
// JSON output
// ---------------------------------------------------------------------------

#[test]
fn list_json_is_parseable_and_complete() {
    let dir = TempDir::new().unwrap();
    run_tk_ok(dir.path(), &["add", "Buy milk", "2%"]);
    run_tk_ok(dir.path(), &["add", "apples"]);

    let out = run_tk_ok(dir.path(), &["list", "--json"]);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["filter"], "all");
    assert_eq!(value["sort_by"], "alphabetical");
    let tasks = value["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0]["title"], "apples");
    assert_eq!(tasks[1]["title"], "Buy milk");
    assert_eq!(tasks[1]["description"], "2%");
}

#[test]
fn add_json_returns_the_new_task() {
    let dir = TempDir::new().unwrap();
    let out = run_tk_ok(dir.path(), &["add", "Buy milk", "--json"]);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["title"], "Buy milk");
    assert_eq!(value["completed"], false);
    assert!(value["id"].is_i64());
}

// ---------------------------------------------------------------------------
// Theme preference
// ---------------------------------------------------------------------------

#[test]
fn theme_defaults_to_light_and_toggle_persists() {
    let dir = TempDir::new().unwrap();
    let out = run_tk_ok(dir.path(), &["theme"]);
    assert!(out.contains("light"));

    let out = run_tk_ok(dir.path(), &["theme", "--toggle"]);
    assert!(out.contains("dark"));

    // Read back in a fresh process
    let out = run_tk_ok(dir.path(), &["theme"]);
    assert!(out.contains("dark"));
}

// ---------------------------------------------------------------------------
// Corrupt snapshot recovery
// ---------------------------------------------------------------------------

#[test]
fn corrupt_snapshot_starts_empty_instead_of_crashing() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("store.json"), "{{{ not json").unwrap();

    let out = run_tk_ok(dir.path(), &["list"]);
    assert!(out.contains("nothing to show"));
    assert!(dir.path().join("store.json.bak").exists());
}
