use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

const VALID: &str = r#"
[[records]]
texture = "watery"
amount = "medium"
time = "2024-03-01T08:00:00Z"
zone_offset = "+02:00"

[[records]]
texture = "watery"
amount = "medium"
time = "2024-03-01T10:00:00+02:00"
zone_offset = "+02:00"
"#;

const WITH_INVALID: &str = r#"
[[records]]
texture = "sticky"
time = "2024-03-04T07:30:00Z"

[[records]]
amount = "plenty"
time = "2024-03-05T07:30:00Z"
"#;

fn write_input(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_health-records"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_all_valid_entries_exit_zero() {
    let input = write_input(VALID);
    let output = run(&["--input", input.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("2 entries: 2 accepted, 0 rejected"));
    assert!(stdout.contains("duplicate records at [0, 1]"));
}

#[test]
fn test_invalid_entry_exits_one() {
    let input = write_input(WITH_INVALID);
    let output = run(&["--input", input.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1 rejected"));
    assert!(stdout.contains("plenty"));
}

#[test]
fn test_missing_file_exits_two() {
    let output = run(&["--input", "/nonexistent/health-records.toml"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_malformed_toml_exits_two() {
    let input = write_input("[[records]\ntime = ");
    let output = run(&["--input", input.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_invalid_log_level_exits_two() {
    let input = write_input("[logging]\nlevel = \"loud\"\n");
    let output = run(&["--input", input.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_json_report_shape() {
    let input = write_input(WITH_INVALID);
    let output = run(&["--input", input.path().to_str().unwrap(), "--json"]);

    assert_eq!(output.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total"], 2);
    assert_eq!(report["accepted"], 1);
    assert_eq!(report["rejected"][0]["index"], 1);
    assert_eq!(report["rejected"][0]["field"], "amount");
    assert!(report["duplicates"].as_array().unwrap().is_empty());
}

#[test]
fn test_fail_fast_flag_stops_early() {
    let content = format!("{}{}", WITH_INVALID, VALID);
    let input = write_input(&content);
    let output = run(&["--input", input.path().to_str().unwrap(), "--json", "--fail-fast"]);

    assert_eq!(output.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total"], 2);
}
