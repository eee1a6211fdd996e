//! End-to-end tests for the verdex binary.

use assert_cmd::Command;
use predicates::prelude::*;

const DOC: &str = r#"{
    "jid": "X1",
    "type": 1,
    "level1_case": "刑事案件",
    "level2_case": "贪污贿赂罪",
    "all_caseinfo_leveloftria": 1,
    "province": "山东省",
    "all_text_litigantinfo": "公诉机关某检察院。\n被告人张某，男，汉族，大学文化。\n辩护人李律师。",
    "firstinstance_text_judgement": "被告人张某犯受贿罪，判处有期徒刑三年，缓刑四年。"
}"#;

#[test]
fn test_process_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("42.json");
    std::fs::write(&input, DOC).unwrap();

    Command::cargo_bin("verdex")
        .unwrap()
        .arg("process")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": 42"))
        .stdout(predicate::str::contains("张某"))
        .stdout(predicate::str::contains("\"penalty_probation\": 48"));
}

#[test]
fn test_process_text_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("7.json");
    std::fs::write(&input, DOC).unwrap();

    Command::cargo_bin("verdex")
        .unwrap()
        .args(["process", "--format", "text"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("defendant_name"))
        .stdout(predicate::str::contains("penalty_freedom"));
}

#[test]
fn test_process_missing_input_fails() {
    Command::cargo_bin("verdex")
        .unwrap()
        .args(["process", "no-such-file.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_export_directory_to_csv() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("1.json"), DOC).unwrap();
    std::fs::write(dir.path().join("2.json"), DOC).unwrap();
    std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
    let output = dir.path().join("out.csv");

    Command::cargo_bin("verdex")
        .unwrap()
        .arg("export")
        .arg(dir.path())
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 records"));

    let csv = std::fs::read_to_string(&output).unwrap();
    let mut lines = csv.lines();
    assert!(lines.next().unwrap().starts_with("id,doc_type,case_number"));
    assert_eq!(lines.count(), 2);
}

#[test]
fn test_export_skips_corrupt_document_by_default() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("1.json"), DOC).unwrap();
    std::fs::write(dir.path().join("2.json"), "not json").unwrap();
    let output = dir.path().join("out.csv");

    // A corrupt document is skipped and reported; the run still succeeds.
    Command::cargo_bin("verdex")
        .unwrap()
        .arg("export")
        .arg(dir.path())
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 records"))
        .stdout(predicate::str::contains("Skipped 1"))
        .stdout(predicate::str::contains("2.json"));

    // Opting into fail-fast aborts instead.
    Command::cargo_bin("verdex")
        .unwrap()
        .arg("export")
        .arg(dir.path())
        .arg("--output")
        .arg(&output)
        .arg("--fail-fast")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_export_limit_caps_document_count() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("1.json"), DOC).unwrap();
    std::fs::write(dir.path().join("2.json"), DOC).unwrap();
    std::fs::write(dir.path().join("3.json"), DOC).unwrap();
    let output = dir.path().join("out.csv");

    Command::cargo_bin("verdex")
        .unwrap()
        .arg("export")
        .arg(dir.path())
        .args(["--limit", "2"])
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 records"));
}
