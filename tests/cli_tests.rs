//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn crime_report(data_dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("crime-report"));
    cmd.env("CRIME_REPORT_DATA_DIR", data_dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_version() {
    let dir = TempDir::new().expect("temp dir");
    crime_report(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("crime-report"));
}

#[test]
fn test_cli_help() {
    let dir = TempDir::new().expect("temp dir");
    crime_report(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("charges"))
        .stdout(predicate::str::contains("fields"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_generate_gang_report() {
    let dir = TempDir::new().expect("temp dir");
    crime_report(&dir)
        .args([
            "generate",
            "--name",
            "Ballas",
            "--crime",
            "Robbery",
            "--date",
            "01.01.2024",
            "--time",
            "13:45",
            "--nov",
            "--charge",
            "PC 2.10.6 Robbery",
            "--field",
            "gang_proof=https://i.ibb.co/x.png",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Ballas | Robbery | 01.01.2024 13:45 Nov\n\nGang Name: Ballas\n\n",
        ))
        .stdout(predicate::str::contains(
            "Proof of bodycam / refresh / upload:\nhttps://i.ibb.co/x.png\n",
        ))
        .stdout(predicate::str::contains("Bodycam Footage: N/A\n"))
        .stdout(predicate::str::contains(
            "Crimes Committed (Mandatory):\n- PC 2.10.6 Robbery\n",
        ));
}

#[test]
fn test_generate_family_part2() {
    let dir = TempDir::new().expect("temp dir");
    let separator = "=".repeat(50);
    crime_report(&dir)
        .args([
            "generate",
            "-n",
            "Families",
            "--category",
            "family",
            "--part",
            "part2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "Family Name: Families\n\n{}\n",
            separator
        )))
        .stdout(predicate::str::contains("Owner of the car searched in PDA: N/A"))
        .stdout(predicate::str::contains(format!(
            "Crimes Committed :\nN/A\n{}\n",
            separator
        )));
}

#[test]
fn test_generate_part1_without_nov_is_trimmed() {
    let dir = TempDir::new().expect("temp dir");
    crime_report(&dir)
        .args([
            "generate", "-n", "Vagos", "-c", "Kidnapping", "-d", "02.03.2024", "-t", "08:05", "-p",
            "part1",
        ])
        .assert()
        .success()
        .stdout("Vagos | Kidnapping | 02.03.2024 08:05\n");
}

#[test]
fn test_generate_requires_name() {
    let dir = TempDir::new().expect("temp dir");
    crime_report(&dir)
        .args(["generate", "--crime", "Robbery"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Please enter a Name"));
}

#[test]
fn test_generate_rejects_unknown_field() {
    let dir = TempDir::new().expect("temp dir");
    crime_report(&dir)
        .args(["generate", "-n", "Ballas", "--field", "gang_pda=AB12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown evidence key"));
}

#[test]
fn test_generate_save_writes_files() {
    let dir = TempDir::new().expect("temp dir");
    let out = TempDir::new().expect("temp out dir");
    crime_report(&dir)
        .args([
            "generate",
            "-n",
            "Lost MC",
            "-d",
            "24.12.2023",
            "--save",
            out.path().to_str().expect("utf8 path"),
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Report saved to"));

    let text = fs::read_to_string(out.path().join("Lost MC_24-12-2023_report.txt"))
        .expect("report file");
    assert!(text.starts_with("Lost MC |  | 24.12.2023 "));

    let snapshot = fs::read_to_string(out.path().join("Lost MC_24-12-2023_report.json"))
        .expect("snapshot file");
    assert!(snapshot.contains("\"type\": \"Gang\""));
}

#[test]
fn test_charges_lists_catalog() {
    let dir = TempDir::new().expect("temp dir");
    crime_report(&dir)
        .arg("charges")
        .assert()
        .success()
        .stdout(predicate::str::contains("Top Charges (6)"))
        .stdout(predicate::str::contains("All Charges (14)"))
        .stdout(predicate::str::contains(
            "PC 3.20 Participation in a cyber attack of the state's resources",
        ));
}

#[test]
fn test_fields_for_family() {
    let dir = TempDir::new().expect("temp dir");
    crime_report(&dir)
        .args(["fields", "--category", "family"])
        .assert()
        .success()
        .stdout(predicate::str::contains("family_pda"))
        .stdout(predicate::str::contains("License plates searched in PDA:"))
        .stdout(predicate::str::contains("gang_").not());
}

#[test]
fn test_config_init_writes_settings() {
    let dir = TempDir::new().expect("temp dir");
    crime_report(&dir)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Time zone:        Europe/London"));

    assert!(dir.path().join("config.json").exists());
}

#[test]
fn test_default_category_from_settings() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(
        dir.path().join("config.json"),
        r#"{ "default_category": "Family" }"#,
    )
    .expect("write settings");

    crime_report(&dir)
        .args(["generate", "-n", "Families", "-p", "part2"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Family Name: Families"));
}
