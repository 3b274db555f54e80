//! CLI integration tests for Folio.
//!
//! These tests drive the `folio` binary against statement directories
//! created in temporary locations.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the folio binary command, isolated from the user's repository and
/// global config.
fn folio(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.current_dir(cwd)
        .env_remove("FOLIO_REPOSITORY")
        .env("HOME", cwd.join("home"))
        .env("XDG_CONFIG_HOME", cwd.join("xdg-config"))
        .env("XDG_DATA_HOME", cwd.join("xdg-data"));
    cmd
}

/// Create a temporary directory for test statements.
fn temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

fn write_version(location: &Path, lang: &str, format: &str, index: &str) {
    fs::create_dir_all(location.join(lang)).unwrap();
    fs::write(location.join(lang).join(index), format!("{} statement", lang)).unwrap();
    fs::write(
        location.join(format!("{}.toml", lang)),
        format!(
            "[info]\nlang = \"{}\"\nformat = \"{}\"\n\n[build]\nsource = \"{}\"\nindex = \"{}\"\n",
            lang, format, lang, index
        ),
    )
    .unwrap();
}

/// Statement with `en/pdf` and `ru/html` versions.
fn statement(tmp: &TempDir) -> PathBuf {
    let location = tmp.path().join("statement");
    write_version(&location, "en", "pdf", "statement.pdf");
    write_version(&location, "ru", "html", "index.html");
    fs::create_dir_all(location.join("resources")).unwrap();
    fs::write(location.join("resources").join("logo.svg"), "<svg/>").unwrap();
    location
}

// ============================================================================
// folio inspect
// ============================================================================

#[test]
fn test_inspect_lists_versions_in_order() {
    let tmp = temp_dir();
    statement(&tmp);

    folio(tmp.path())
        .args(["inspect", "statement"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?s)en\s+pdf\s+en/pdf.*ru\s+html\s+ru/html").unwrap());
}

#[test]
fn test_inspect_json() {
    let tmp = temp_dir();
    statement(&tmp);

    let output = folio(tmp.path())
        .args(["inspect", "statement", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let info: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let versions = info["versions"].as_array().unwrap();
    assert_eq!(versions.len(), 2);
    assert_eq!(versions[0]["package"], "en/pdf");
    assert_eq!(versions[1]["lang"], "ru");
}

#[test]
fn test_inspect_unknown_lang_fails() {
    let tmp = temp_dir();
    let location = statement(&tmp);
    write_version(&location, "xx", "pdf", "statement.pdf");

    folio(tmp.path())
        .args(["inspect", "statement"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid statement lang `xx`"))
        .stderr(predicate::str::contains("ISO 639-1"));
}

#[test]
fn test_inspect_unknown_format_fails() {
    let tmp = temp_dir();
    let location = statement(&tmp);
    write_version(&location, "de", "docx", "statement.docx");

    folio(tmp.path())
        .args(["inspect", "statement"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid statement format `docx`"));
}

#[test]
fn test_project_config_adds_languages() {
    let tmp = temp_dir();
    let location = statement(&tmp);
    write_version(&location, "xx", "pdf", "statement.pdf");
    fs::create_dir_all(tmp.path().join(".folio")).unwrap();
    fs::write(
        tmp.path().join(".folio").join("config.toml"),
        "[statement]\nextra_langs = [\"xx\"]\n",
    )
    .unwrap();

    folio(tmp.path())
        .args(["inspect", "statement"])
        .assert()
        .success()
        .stdout(predicate::str::contains("xx/pdf"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_global_config_comes_from_isolated_home() {
    let tmp = temp_dir();
    let location = statement(&tmp);
    write_version(&location, "xx", "pdf", "statement.pdf");

    folio(tmp.path())
        .args(["inspect", "statement"])
        .assert()
        .failure();

    let global = tmp.path().join("xdg-config").join("folio");
    fs::create_dir_all(&global).unwrap();
    fs::write(
        global.join("config.toml"),
        "[statement]\nextra_langs = [\"xx\"]\n",
    )
    .unwrap();

    folio(tmp.path())
        .args(["inspect", "statement"])
        .assert()
        .success()
        .stdout(predicate::str::contains("xx/pdf"));
}

// ============================================================================
// folio build / show
// ============================================================================

#[test]
fn test_build_and_show() {
    let tmp = temp_dir();
    statement(&tmp);
    let repo = tmp.path().join("repo");

    folio(tmp.path())
        .args(["build", "statement", "--package", "problems/sum/statement", "--repo"])
        .arg(&repo)
        .assert()
        .success()
        .stderr(predicate::str::contains("Finished `problems/sum/statement`"));

    let root = repo.join("problems").join("sum").join("statement");
    assert!(root.join("index.toml").is_file());
    assert!(root.join("statement.json").is_file());
    assert!(root.join("resources").join("data").join("logo.svg").is_file());
    assert!(root.join("en").join("pdf").join("manifest.toml").is_file());
    assert!(root
        .join("ru")
        .join("html")
        .join("data")
        .join("index.html")
        .is_file());

    folio(tmp.path())
        .args(["show", "problems/sum/statement", "--repo"])
        .arg(&repo)
        .assert()
        .success()
        .stdout(predicate::str::contains("statement.pdf"))
        .stdout(predicate::str::contains("index.html"));
}

#[test]
fn test_build_parallel() {
    let tmp = temp_dir();
    statement(&tmp);
    let repo = tmp.path().join("repo");

    folio(tmp.path())
        .args(["build", "statement", "-p", "s", "--parallel", "--repo"])
        .arg(&repo)
        .assert()
        .success();

    assert!(repo.join("s").join("ru").join("html").join("manifest.toml").is_file());
}

#[test]
fn test_failed_build_publishes_nothing() {
    let tmp = temp_dir();
    let location = statement(&tmp);
    fs::remove_dir_all(location.join("ru")).unwrap();
    let repo = tmp.path().join("repo");

    folio(tmp.path())
        .args(["build", "statement", "--package", "s", "--repo"])
        .arg(&repo)
        .assert()
        .failure()
        .stderr(predicate::str::contains("`ru/html`"))
        .stderr(predicate::str::contains("does not exist"));

    assert!(!repo.join("s").exists());
}

#[test]
fn test_build_rejects_invalid_entry() {
    let tmp = temp_dir();
    statement(&tmp);

    folio(tmp.path())
        .args(["build", "statement", "--package", "bad//entry", "--repo", "repo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty segment"));
}

#[test]
fn test_show_missing_package() {
    let tmp = temp_dir();

    folio(tmp.path())
        .args(["show", "missing", "--repo", "repo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("package `missing` not found"));
}

// ============================================================================
// folio formats / completions
// ============================================================================

#[test]
fn test_formats() {
    let tmp = temp_dir();

    folio(tmp.path())
        .arg("formats")
        .assert()
        .success()
        .stdout(predicate::str::contains("pdf"))
        .stdout(predicate::str::contains("html"));
}

#[test]
fn test_completions() {
    let tmp = temp_dir();

    folio(tmp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("folio"));
}
