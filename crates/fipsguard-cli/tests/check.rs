//! End-to-end runs of `fipsguard check` against fixed host providers.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

#[allow(deprecated)]
fn fipsguard_in(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("fipsguard").unwrap();
    cmd.current_dir(dir).env_remove("FIPSGUARD_LOG");
    cmd
}

#[test]
fn compatible_profile_exits_zero_without_diagnostics() {
    let dir = tempfile::tempdir().unwrap();
    fipsguard_in(dir.path())
        .args([
            "check",
            "--host",
            "enabled",
            "--attributes",
            "fips-host",
            "--algorithms",
            "rsa,ecc-min-size=224",
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn disallowed_algorithm_fails_check_mode() {
    let dir = tempfile::tempdir().unwrap();
    fipsguard_in(dir.path())
        .args([
            "check",
            "--host",
            "enabled",
            "--algorithms",
            "rsa,camellia,ecc-min-size=224",
        ])
        .assert()
        .code(2)
        .stderr(predicate::eq(
            "Warning(FIPS): Enable algorithms contain 'camellia'.\n",
        ));
}

#[test]
fn apply_mode_reports_disabled_host() {
    let dir = tempfile::tempdir().unwrap();
    fipsguard_in(dir.path())
        .args([
            "check",
            "--host",
            "enabled",
            "--mode",
            "apply",
            "--algorithms",
            "ecc-min-size=192",
        ])
        .assert()
        .success()
        .stdout(predicate::eq("Warning: Disabled OpenSSL FIPS mode\n"))
        .stderr(predicate::str::contains(
            "Enabled key sizes ecc-min-size=192 is smaller than required 224.",
        ));
}

#[test]
fn successful_disable_is_logged_at_warn_level() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = fipsguard_in(dir.path());
    cmd.env("FIPSGUARD_LOG", "warn")
        .args([
            "check",
            "--host",
            "enabled",
            "--mode",
            "apply",
            "--algorithms",
            "rsa",
        ])
        .assert()
        .success()
        .stdout(predicate::eq("Warning: Disabled OpenSSL FIPS mode\n"))
        .stderr(predicate::str::contains("WARN"))
        .stderr(predicate::str::contains("FIPS mode disabled"));
}

#[test]
fn host_without_fips_only_warns() {
    let dir = tempfile::tempdir().unwrap();
    fipsguard_in(dir.path())
        .args(["check", "--host", "disabled", "--algorithms", "tdes"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Warning(FIPS): Enable algorithms contain 'tdes'.",
        ));
}

#[test]
fn config_file_and_report_out() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("fipsguard.toml"),
        r#"
schema = "fipsguard.config.v1"
runtime_info = "info.json"
fail_on = "never"
"#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join("info.json"),
        r#"{"RuntimeAlgorithms":{"Enabled":"rsa,rsaes,ecc-min-size=256"}}"#,
    )
    .unwrap();

    fipsguard_in(dir.path())
        .args([
            "check",
            "--host",
            "enabled",
            "--report-out",
            "out/report.json",
            "--markdown-out",
            "out/comment.md",
        ])
        .assert()
        .success();

    let text = std::fs::read_to_string(dir.path().join("out/report.json")).unwrap();
    let report: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(report["schema"], "fipsguard.report.v1");
    assert_eq!(report["verdict"], "fail");
    assert_eq!(report["data"]["decision"]["kind"], "disable_required");
    assert_eq!(report["data"]["host_fips_enabled"], true);
    assert_eq!(report["findings"][0]["code"], "disallowed_algorithm");
    assert_eq!(report["findings"][0]["data"]["algorithm"], "rsaes");
    assert_eq!(
        report["findings"][0]["fingerprint"].as_str().map(str::len),
        Some(64)
    );

    let md = std::fs::read_to_string(dir.path().join("out/comment.md")).unwrap();
    assert!(md.starts_with("# Fipsguard report\n"));
}

#[test]
fn invalid_config_is_a_runtime_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("fipsguard.toml"), "mode = \"sometimes\"\n").unwrap();

    fipsguard_in(dir.path())
        .args(["check", "--host", "enabled", "--report-out", "report.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("fipsguard error:"))
        .stderr(predicate::str::contains("unknown mode: sometimes"));

    let text = std::fs::read_to_string(dir.path().join("report.json")).unwrap();
    let report: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(report["findings"][0]["check_id"], "tool.runtime");
}

#[test]
fn explicit_config_path_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    fipsguard_in(dir.path())
        .args(["--config", "fipsgaurd.toml", "check", "--host", "enabled"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("read config: fipsgaurd.toml"));
}

#[test]
fn explicit_config_in_subdirectory_resolves_runtime_info_there() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("conf")).unwrap();
    std::fs::write(
        dir.path().join("conf/fipsguard.toml"),
        "runtime_info = \"info.json\"\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("conf/info.json"),
        r#"{"RuntimeAlgorithms":{"Enabled":"rsa,ecc-min-size=256"}}"#,
    )
    .unwrap();

    fipsguard_in(dir.path())
        .args(["--config", "conf/fipsguard.toml", "check", "--host", "enabled"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn missing_runtime_info_is_a_runtime_error() {
    let dir = tempfile::tempdir().unwrap();
    fipsguard_in(dir.path())
        .args(["check", "--host", "enabled", "--runtime-info", "absent.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("read runtime info"));
}
