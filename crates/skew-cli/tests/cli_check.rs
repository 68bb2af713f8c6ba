use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn skew_cmd() -> Command {
    Command::cargo_bin("skew").unwrap()
}

const CLEAN_REPORT: &str = r#"
[[module]]
organization = "org.apache.pekko"
name = "pekko-actor_2.13"
version = "1.1.2"

[[module]]
organization = "org.apache.pekko"
name = "pekko-stream_2.13"
version = "1.1.2"

[[module]]
organization = "org.slf4j"
name = "slf4j-api"
version = "2.0.9"
"#;

const SKEWED_REPORT: &str = r#"
[[module]]
organization = "org.apache.pekko"
name = "pekko-actor_2.13"
version = "1.1.2"

[[module]]
organization = "org.apache.pekko"
name = "pekko-remote_2.13"
version = "1.0.3"

[[report]]
configuration = "compile"

  [[report.module]]
  organization = "org.apache.pekko"
  name = "pekko-remote_2.13"
  callers = ["com.example:legacy-lib"]
"#;

#[test]
fn test_check_missing_input_fails() {
    let tmp = TempDir::new().unwrap();

    skew_cmd()
        .current_dir(tmp.path())
        .args(["check", "resolution.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read resolution report"));
}

#[test]
fn test_check_clean_report_succeeds() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("resolution.toml"), CLEAN_REPORT).unwrap();

    skew_cmd()
        .current_dir(tmp.path())
        .args(["check", "resolution.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pekko: 1.1.2"))
        .stderr(predicate::str::contains("warning").not());
}

#[test]
fn test_check_skewed_report_warns_but_succeeds() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("resolution.toml"), SKEWED_REPORT).unwrap();

    skew_cmd()
        .current_dir(tmp.path())
        .args(["check", "resolution.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pekko: 1.1.2"))
        .stderr(predicate::str::contains("warning:"))
        .stderr(predicate::str::contains("previously seen 1.1.2"))
        .stderr(predicate::str::contains(
            "Transitive dependencies from [com.example:legacy-lib]",
        ));
}

#[test]
fn test_check_fail_on_mismatch_flag_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("resolution.toml"), SKEWED_REPORT).unwrap();

    skew_cmd()
        .current_dir(tmp.path())
        .args(["check", "resolution.toml", "--fail-on-mismatch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains(
            "Non-matching versions of suite modules detected",
        ));
}

#[test]
fn test_check_fail_on_mismatch_from_config_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("resolution.toml"), SKEWED_REPORT).unwrap();
    fs::write(tmp.path().join("skew.toml"), "[audit]\nfail-on-mismatch = true\n").unwrap();

    skew_cmd()
        .current_dir(tmp.path())
        .args(["check", "resolution.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_check_json_format() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("resolution.toml"), CLEAN_REPORT).unwrap();

    skew_cmd()
        .current_dir(tmp.path())
        .args(["check", "resolution.toml", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"pekko\": \"1.1.2\""))
        .stdout(predicate::str::contains("\"diagnostics\": []"));
}

#[test]
fn test_check_empty_report() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("resolution.toml"), "").unwrap();

    skew_cmd()
        .current_dir(tmp.path())
        .args(["check", "resolution.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No suite modules detected."));
}

#[test]
fn test_families_lists_known_modules() {
    skew_cmd()
        .args(["families"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pekko:"))
        .stdout(predicate::str::contains("pekko-actor"))
        .stdout(predicate::str::contains("Pekko HTTP:"))
        .stdout(predicate::str::contains("pekko-http-core"))
        .stdout(predicate::str::contains("Pekko Connectors:"))
        .stdout(predicate::str::contains("pekko-connectors-kafka"));
}
