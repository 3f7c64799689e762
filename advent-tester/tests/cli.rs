use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "advent-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_list_scenarios_writes_output() {
    let exe = env!("CARGO_BIN_EXE_advent-tester");
    let output_path = temp_path("list");
    let status = Command::new(exe)
        .args(["--list-scenarios", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Available scenarios"));
    assert!(content.contains("persistence"));
}

#[test]
fn cli_runs_all_scenarios_with_json_report() {
    let exe = env!("CARGO_BIN_EXE_advent-tester");
    let output_path = temp_path("run");
    let status = Command::new(exe)
        .args([
            "--report",
            "json",
            "--date",
            "12-19",
            "--scenarios",
            "all",
            "--output",
        ])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    let report: serde_json::Value = serde_json::from_str(&content).expect("json report");
    assert_eq!(report["date"], "December 19");
    let results = report["results"].as_array().expect("results array");
    assert_eq!(results.len(), 7);
    assert!(results.iter().all(|r| r["passed"] == true));
}

#[test]
fn cli_fails_on_unknown_scenario() {
    let exe = env!("CARGO_BIN_EXE_advent-tester");
    let output_path = temp_path("unknown");
    let output = Command::new(exe)
        .args(["--report", "markdown", "--scenarios", "bogus", "--output"])
        .arg(&output_path)
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown scenario"));
}

#[test]
fn cli_rejects_malformed_date() {
    let exe = env!("CARGO_BIN_EXE_advent-tester");
    let output = Command::new(exe)
        .args(["--date", "december"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
}
