use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn vigilo() -> Command {
    let mut cmd = Command::cargo_bin("vigilo").expect("binary built");
    // Keep the environment from satisfying key resolution behind our back.
    cmd.env_remove("GROQ_API_KEY");
    cmd
}

fn write_temp_config(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write temp config");
    path
}

fn seeded_db(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("candidates.db");
    let conn = rusqlite::Connection::open(&path).expect("create db");
    conn.execute_batch(
        "CREATE TABLE candidates (
            SrNo INTEGER PRIMARY KEY,
            Name TEXT, ID TEXT, DOB TEXT,
            Category TEXT, Subject TEXT, Center TEXT, Year INTEGER
        );
        INSERT INTO candidates VALUES
            (1, 'Asha Rao', 'RJUD0001', '12/05/1965', 'OBC', 'Physics', 'Jaipur', 2021);",
    )
    .expect("seed db");
    path
}

#[test]
fn check_config_rejects_invalid_temperature() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_config(&dir, "[llm]\ntemperature = 9.5\n");

    vigilo()
        .args(["check", "config", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("temperature"));
}

#[test]
fn check_config_reports_toml_parse_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_config(&dir, "[llm\nmodel = \"x\"\n");

    vigilo()
        .args(["check", "config", "--config"])
        .arg(&path)
        .assert()
        .failure();
}

#[test]
fn config_init_then_check_config_passes() {
    let dir = tempfile::tempdir().unwrap();

    vigilo()
        .current_dir(dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    vigilo()
        .current_dir(dir.path())
        .args(["check", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file is valid"));
}

#[test]
fn config_init_refuses_overwrite_without_force() {
    let dir = tempfile::tempdir().unwrap();
    write_temp_config(&dir, "");

    vigilo()
        .current_dir(dir.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn ask_without_api_key_fails_visibly() {
    let dir = tempfile::tempdir().unwrap();
    let db = seeded_db(&dir);

    // --json disables the interactive key prompt, so resolution must fail.
    vigilo()
        .current_dir(dir.path())
        .args(["ask", "how many records?", "--json", "--database"])
        .arg(&db)
        .assert()
        .failure()
        .stderr(predicate::str::contains("API key"));
}

#[test]
fn ask_with_empty_question_fails_visibly() {
    let dir = tempfile::tempdir().unwrap();

    vigilo()
        .current_dir(dir.path())
        .args(["ask", "", "--json", "--api-key", "gsk_dummy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("question cannot be empty"));
}

#[test]
fn schema_lists_tables_and_columns() {
    let dir = tempfile::tempdir().unwrap();
    let db = seeded_db(&dir);

    vigilo()
        .current_dir(dir.path())
        .args(["schema", "--database"])
        .arg(&db)
        .assert()
        .success()
        .stdout(predicate::str::contains("candidates"))
        .stdout(predicate::str::contains("Category"));
}

#[test]
fn check_database_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();

    vigilo()
        .current_dir(dir.path())
        .args(["check", "database", "--database", "absent.db"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open database"));
}

#[test]
fn check_database_lists_seeded_tables() {
    let dir = tempfile::tempdir().unwrap();
    let db = seeded_db(&dir);

    vigilo()
        .current_dir(dir.path())
        .args(["check", "database", "--database"])
        .arg(&db)
        .assert()
        .success()
        .stdout(predicate::str::contains("candidates table present"));
}

#[test]
fn config_show_requires_the_file() {
    let dir = tempfile::tempdir().unwrap();

    vigilo()
        .current_dir(dir.path())
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}
