//! Integration tests for the navigator CLI
//!
//! Runs the `nav` binary against a campus map written into a temp directory.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

const CAMPUS: &str = r#"digraph campus {
    "Union South" -> "Computer Sciences and Statistics" [seconds=176.0];
    "Computer Sciences and Statistics" -> "Union South" [seconds=176.0];
    "Computer Sciences and Statistics" -> "Weeks Hall for Geological Sciences" [seconds=113.0];
    "Union South" -> "Weeks Hall for Geological Sciences" [seconds=412.0];
    "Computer Sciences and Statistics" -> "Memorial Union" [seconds=486.3];
    "Picnic Point" -> "Lakeshore Path" [seconds=640.0];
}
"#;

/// Get the path to the nav binary (built by cargo)
fn nav_binary() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_nav"));
    cmd.env_remove("NAV_GRAPH").env_remove("RUST_LOG");
    cmd
}

/// Run nav with the given args in the specified directory
fn run_nav(dir: &Path, args: &[&str]) -> Output {
    nav_binary()
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to execute nav command")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Temp directory holding `campus.dot`
fn setup_campus() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(dir.path().join("campus.dot"), CAMPUS).expect("Failed to write campus map");
    dir
}

// ============================================================================
// Basic CLI
// ============================================================================

#[test]
fn test_help() {
    let dir = TempDir::new().unwrap();
    let output = run_nav(dir.path(), &["--help"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Shortest walking routes"));
}

#[test]
fn test_version() {
    let dir = TempDir::new().unwrap();
    let output = run_nav(dir.path(), &["--version"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("nav "));
}

// ============================================================================
// Locations
// ============================================================================

#[test]
fn test_locations_json() {
    let dir = setup_campus();
    let output = run_nav(dir.path(), &["--format", "json", "locations"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["count"], 6);
    assert_eq!(json["locations"][0], "Computer Sciences and Statistics");
    assert_eq!(json["locations"][5], "Weeks Hall for Geological Sciences");
}

#[test]
fn test_missing_graph_file_fails() {
    let dir = TempDir::new().unwrap();
    let output = run_nav(dir.path(), &["locations"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to load campus map"));
}

#[test]
fn test_malformed_graph_file_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("campus.dot"), "\"A\" -> \"B\" [minutes=3];\n").unwrap();
    let output = run_nav(dir.path(), &["locations"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("line 1"));
}

// ============================================================================
// Path
// ============================================================================

#[test]
fn test_path_json() {
    let dir = setup_campus();
    let output = run_nav(
        dir.path(),
        &[
            "--format",
            "json",
            "path",
            "Union South",
            "Weeks Hall for Geological Sciences",
        ],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["found"], true);
    assert_eq!(json["stops"].as_array().unwrap().len(), 3);
    assert_eq!(json["stops"][1], "Computer Sciences and Statistics");
    assert_eq!(json["total_seconds"], 289.0);
    assert_eq!(json["legs"][0]["seconds"], 176.0);
}

#[test]
fn test_path_html() {
    let dir = setup_campus();
    let output = run_nav(
        dir.path(),
        &["--format", "html", "path", "Union South", "Memorial Union"],
    );
    assert!(output.status.success());
    assert_eq!(
        stdout(&output).trim_end(),
        "<p>Shortest path from Union South to Memorial Union:</p>\
         <ol><li>Union South</li><li>Computer Sciences and Statistics</li><li>Memorial Union</li></ol>\
         <p>Total travel time: 662.3 seconds</p>"
    );
}

#[test]
fn test_path_table() {
    let dir = setup_campus();
    let output = run_nav(dir.path(), &["path", "Union South", "Memorial Union"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Computer Sciences and Statistics"));
    assert!(out.contains("Total travel time: 662.3 seconds"));
}

#[test]
fn test_no_path_is_not_an_error() {
    let dir = setup_campus();
    let output = run_nav(
        dir.path(),
        &["--format", "html", "path", "Union South", "Picnic Point"],
    );
    assert!(output.status.success());
    assert_eq!(
        stdout(&output).trim_end(),
        "<p>No path found between Union South and Picnic Point.</p>"
    );
}

#[test]
fn test_unknown_location_fails() {
    let dir = setup_campus();
    let output = run_nav(dir.path(), &["path", "Union South", "Camp Randall"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Unknown location 'Camp Randall'"));
}

// ============================================================================
// Furthest
// ============================================================================

#[test]
fn test_furthest_json() {
    let dir = setup_campus();
    let output = run_nav(dir.path(), &["--format", "json", "furthest", "Union South"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["destination"], "Memorial Union");
    assert_eq!(json["stops"][0], "Union South");
}

#[test]
fn test_furthest_nothing_reachable_is_not_an_error() {
    let dir = setup_campus();
    let output = run_nav(
        dir.path(),
        &["--format", "html", "furthest", "Lakeshore Path"],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output).trim_end(),
        "<p>No furthest destination found from Lakeshore Path.</p>"
    );

    let json = run_nav(
        dir.path(),
        &["--format", "json", "furthest", "Lakeshore Path"],
    );
    assert!(json.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&json)).unwrap();
    assert_eq!(json["found"], false);
}

#[test]
fn test_furthest_unknown_location_fails() {
    let dir = setup_campus();
    let output = run_nav(dir.path(), &["furthest", "Camp Randall"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Unknown location 'Camp Randall'"));
}

// ============================================================================
// Stats, prompt, config
// ============================================================================

#[test]
fn test_stats_json() {
    let dir = setup_campus();
    let output = run_nav(dir.path(), &["--format", "json", "stats"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["locations"], 6);
    assert_eq!(json["edges"], 6);
    assert_eq!(json["busiest"], "Computer Sciences and Statistics");
}

#[test]
fn test_prompt_html_needs_no_graph() {
    let dir = TempDir::new().unwrap();
    let output = run_nav(dir.path(), &["--format", "html", "prompt", "furthest"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output).trim_end(),
        "<input type='text' id='from' placeholder='Enter the starting location:'>\
         <button id='findFurthest'>Furthest Destination From</button>"
    );
}

#[test]
fn test_graph_flag_overrides_config() {
    let dir = setup_campus();
    fs::write(dir.path().join(".navrc.toml"), "[graph]\nfile = \"missing.dot\"\n").unwrap();

    let from_config = run_nav(dir.path(), &["locations"]);
    assert!(!from_config.status.success());

    let from_flag = run_nav(dir.path(), &["-g", "campus.dot", "locations"]);
    assert!(from_flag.status.success(), "stderr: {}", stderr(&from_flag));
}

#[test]
fn test_config_default_format() {
    let dir = setup_campus();
    fs::write(
        dir.path().join(".navrc.toml"),
        "[output]\nformat = \"json\"\ncompact = true\n",
    )
    .unwrap();

    let output = run_nav(dir.path(), &["stats"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.trim_end().starts_with('{'));
    assert_eq!(out.trim_end().lines().count(), 1);

    let table = run_nav(dir.path(), &["--format", "table", "stats"]);
    assert!(!stdout(&table).starts_with('{'));
}

#[test]
fn test_completions_bash() {
    let dir = TempDir::new().unwrap();
    let output = run_nav(dir.path(), &["completions", "bash"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("nav"));
}
