use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn file_explorer() -> Command {
    Command::cargo_bin("file-explorer").unwrap()
}

#[test]
fn shows_help() {
    file_explorer()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tree view"));
}

#[test]
fn shows_version() {
    file_explorer()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn requires_subcommand() {
    file_explorer()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn show_subcommand_help() {
    file_explorer()
        .args(["show", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("viewport"));
}

#[test]
fn tui_subcommand_help() {
    file_explorer()
        .args(["tui", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("interactive"));
}

#[test]
fn verbose_flag_accepted() {
    file_explorer()
        .args(["-vvv", "show", "--height", "3"])
        .assert()
        .success();
}

#[test]
fn invalid_config_path_fails() {
    file_explorer()
        .args(["--config", "/nonexistent/path.toml", "show"])
        .assert()
        .failure();
}

#[test]
fn show_prints_sample_rows() {
    file_explorer()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("▼ [ ] Work\n"))
        .stdout(predicate::str::contains("▼ [ ] Q1 Report"))
        .stdout(predicate::str::contains("[ ] Item 100\n"))
        .stdout(predicate::str::contains("▼ [x] Portfolio"));
}

#[test]
fn show_with_overrides() {
    file_explorer()
        .args(["show", "--expand", "1,7", "--select", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("▼ [x] Presentations"))
        .stdout(predicate::str::contains("▶ [ ] 2023 Projects"))
        .stdout(predicate::str::contains("Q1 Report").not());
}

#[test]
fn show_viewport_window() {
    // Rows 5 and 6 plus two rows of overscan on either side
    file_explorer()
        .args(["show", "--offset", "5", "--height", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Q1 Report"))
        .stdout(predicate::str::contains("Item 5\n"))
        .stdout(predicate::str::contains("Item 6\n").not())
        .stdout(predicate::str::contains("Work").not());
}

#[test]
fn show_with_json_output() {
    file_explorer()
        .args(["show", "--json", "--height", "3"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"))
        .stdout(predicate::str::contains("\"total_rows\": 115"))
        .stdout(predicate::str::contains("\"label\": \"File Explorer\""));
}

#[test]
fn show_reads_forest_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(
        br#"[
            {"id": 1, "title": "src", "children": [{"id": 2, "title": "main.rs"}]},
            {"id": 3, "title": "Cargo.toml"}
        ]"#,
    )
    .unwrap();

    file_explorer()
        .args(["show", "--expand", "1", "--select", "2", "--forest"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("▼ [ ] src\n    [x] main.rs\n  [ ] Cargo.toml\n");
}

#[test]
fn show_rejects_duplicate_ids() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(br#"[{"id": 1, "title": "a"}, {"id": 1, "title": "b"}]"#)
        .unwrap();

    file_explorer()
        .args(["show", "--forest"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate"));
}

#[test]
fn config_file_sets_label() {
    let mut config = NamedTempFile::new().unwrap();
    config
        .write_all(b"[explorer]\nlabel = \"Workspace\"\n")
        .unwrap();

    file_explorer()
        .arg("--config")
        .arg(config.path())
        .args(["show", "--json", "--height", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"label\": \"Workspace\""));
}

#[test]
fn config_file_sets_text_indent() {
    let mut forest = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    forest
        .write_all(
            br#"[
                {"id": 1, "title": "src", "children": [{"id": 2, "title": "main.rs"}]},
                {"id": 3, "title": "Cargo.toml"}
            ]"#,
        )
        .unwrap();
    let mut config = NamedTempFile::new().unwrap();
    config
        .write_all(b"[indent]\nunit = 40\n\n[tui.indent]\nunit = 4\n")
        .unwrap();

    file_explorer()
        .arg("--config")
        .arg(config.path())
        .args(["show", "--expand", "1", "--forest"])
        .arg(forest.path())
        .assert()
        .success()
        .stdout("▼ [ ] src\n      [ ] main.rs\n  [ ] Cargo.toml\n");
}

#[test]
fn custom_forest_ignores_sample_defaults() {
    let mut forest = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    forest
        .write_all(br#"[{"id": 4, "title": "docs", "children": [{"id": 23, "title": "intro.md"}]}]"#)
        .unwrap();

    file_explorer()
        .args(["show", "--forest"])
        .arg(forest.path())
        .assert()
        .success()
        .stdout("▶ [ ] docs\n");
}

#[test]
fn zero_row_height_is_rejected() {
    file_explorer()
        .args(["show", "--row-height", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--row-height"));
}

#[test]
fn completions_for_bash() {
    file_explorer()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("file-explorer"));
}

#[test]
fn man_page_renders() {
    file_explorer()
        .arg("man")
        .assert()
        .success()
        .stdout(predicate::str::contains(".TH"));
}
