use assert_cmd::Command;
use predicates::str::contains;
use rust_xlsxwriter::Workbook;
use std::fs;
use std::path::{Path, PathBuf};

/// Helper to get a temporary config directory
fn temp_config_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".atlas").join("config.json")
}

/// Write a small techniques workbook into `dir` and return its path.
fn write_workbook(dir: &Path) -> PathBuf {
    let rows = [
        ["Nombre_de_la_t_cnica_en_espa_ol", "Estado", "Municipio"],
        ["Bordado", "Oaxaca", "Teotitlán"],
        ["Alfarería", "Oaxaca", "Atzompa"],
        ["Laca", "Guerrero", "Olinalá"],
    ];
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            sheet.write_string(r as u32, c as u16, *value).unwrap();
        }
    }
    let path = dir.join("tecnicas.xlsx");
    workbook.save(&path).unwrap();
    path
}

const BINARY_NAME: &str = "atlas-dashboard";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Command-line arguments"));
}

#[test]
/// Summary prints the three card values for a local workbook.
fn summary_prints_card_values() {
    let tmp = temp_config_dir();
    let workbook = write_workbook(tmp.path());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("summary")
        .arg("--source")
        .arg(&workbook)
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("card-tecnicas: 3 técnicas"))
        .stdout(contains("card-estados: 2 estados"))
        .stdout(contains("card-municipios: 3 municipios"));
}

#[test]
/// A missing workbook shows the error marker and fails.
fn summary_reports_missing_workbook() {
    let tmp = temp_config_dir();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("summary")
        .arg("--source")
        .arg(tmp.path().join("missing.xlsx"))
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stdout(contains("card-tecnicas: Error"));
}

#[test]
/// Without a flag or configuration there is nothing to load.
fn summary_without_source_fails() {
    let tmp = temp_config_dir();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("summary")
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stderr(contains("No workbook source"));
}

#[test]
/// Configure stores the source, and later commands pick it up.
fn configure_saves_source() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);
    let workbook = write_workbook(tmp.path());

    assert!(!config_path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("configure")
        .arg("--source")
        .arg(&workbook)
        .env("HOME", tmp.path()) // simulate different $HOME
        .assert()
        .success()
        .stdout(contains("Source saved"));

    assert!(config_path.exists());
    let saved = fs::read_to_string(&config_path).unwrap();
    assert!(saved.contains("tecnicas.xlsx"));

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("summary")
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("3 técnicas"));
}

#[test]
/// Clear-config should delete an existing config file.
fn clear_config_deletes_config_file() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "{}").unwrap();

    // Ensure the file exists
    assert!(config_path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("clear-config")
        .env("HOME", tmp.path()) // simulate different $HOME
        .assert()
        .success()
        .stdout(contains("Clearing configuration"));

    // Confirm the file was deleted
    assert!(!config_path.exists());
}
