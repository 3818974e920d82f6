//! End-to-end runs of the riskmap binary.

use assert_cmd::Command;
use indoc::indoc;
use riskmap::catalog::builtin_catalog;
use riskmap::core::{Answer, AnswerValue, QuestionKind, ScoringDirection};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn best_answers_json() -> String {
    let answers: Vec<Answer> = builtin_catalog()
        .iter()
        .map(|q| {
            let value = match q.kind {
                QuestionKind::Boolean => AnswerValue::Bool(true),
                QuestionKind::Scale => AnswerValue::Scale(5),
                QuestionKind::Multiple => {
                    let index = match q.direction {
                        ScoringDirection::Forward => q.options.len() - 1,
                        ScoringDirection::Reversed => 0,
                    };
                    AnswerValue::Choice(q.options[index].clone())
                }
                QuestionKind::Text => AnswerValue::Choice(String::new()),
            };
            Answer::new(q.id.clone(), value)
        })
        .collect();
    serde_json::to_string_pretty(&answers).unwrap()
}

fn write_config(dir: &Path, storage_dir: &Path) -> std::path::PathBuf {
    let config_path = dir.join("riskmap.toml");
    fs::write(
        &config_path,
        format!("[storage]\ndir = \"{}\"\n", storage_dir.display()),
    )
    .unwrap();
    config_path
}

#[test]
fn questions_lists_the_whole_catalog_as_json() {
    let output = Command::cargo_bin("riskmap")
        .unwrap()
        .args(["questions", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let questions: Vec<serde_json::Value> = serde_json::from_slice(&output).unwrap();
    assert_eq!(questions.len(), builtin_catalog().len());
    assert_eq!(questions[0]["id"], "net-001");
}

#[test]
fn questions_rejects_unknown_categories() {
    Command::cargo_bin("riskmap")
        .unwrap()
        .args(["questions", "--category", "Quantum Defense"])
        .assert()
        .failure();
}

#[test]
fn assess_scores_a_perfect_answer_file() {
    let dir = TempDir::new().unwrap();
    let answers_path = dir.path().join("answers.json");
    fs::write(&answers_path, best_answers_json()).unwrap();

    let output = Command::cargo_bin("riskmap")
        .unwrap()
        .arg("assess")
        .arg(&answers_path)
        .args([
            "--company",
            "Acme Corp",
            "--industry",
            "Manufacturing",
            "--employees",
            "250",
            "--revenue",
            "12000000",
            "--format",
            "json",
            "--no-save",
            "--seed",
            "42",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["assessment"]["overall_score"], 100);
    assert_eq!(report["assessment"]["risk_level"], "Low");
    assert_eq!(report["assessment"]["company"]["name"], "Acme Corp");
    assert_eq!(report["recommendations"].as_array().unwrap().len(), 0);
    assert_eq!(report["compliance"].as_array().unwrap().len(), 3);
}

#[test]
fn assess_writes_markdown_reports_to_a_file() {
    let dir = TempDir::new().unwrap();
    let answers_path = dir.path().join("answers.json");
    let report_path = dir.path().join("report.md");
    fs::write(&answers_path, "[]").unwrap();

    Command::cargo_bin("riskmap")
        .unwrap()
        .arg("assess")
        .arg(&answers_path)
        .arg("--output")
        .arg(&report_path)
        .args(["--format", "markdown", "--no-save", "--seed", "7"])
        .assert()
        .success();

    let markdown = fs::read_to_string(&report_path).unwrap();
    assert!(markdown.contains("# Cyber Risk Assessment Report"));
    assert!(markdown.contains("| Risk Level | Critical |"));
    assert!(markdown.contains("## Recommendations"));
}

#[test]
fn assess_then_report_round_trips_through_storage() {
    let dir = TempDir::new().unwrap();
    let storage_dir = dir.path().join("store");
    let config_path = write_config(dir.path(), &storage_dir);
    let answers_path = dir.path().join("answers.json");
    fs::write(&answers_path, best_answers_json()).unwrap();

    Command::cargo_bin("riskmap")
        .unwrap()
        .arg("assess")
        .arg(&answers_path)
        .arg("--config")
        .arg(&config_path)
        .args(["--company", "Acme Corp", "--format", "json", "--seed", "1"])
        .assert()
        .success();

    assert!(storage_dir.join("latest_assessment.json").exists());

    let output = Command::cargo_bin("riskmap")
        .unwrap()
        .arg("report")
        .arg("--config")
        .arg(&config_path)
        .args(["--format", "json", "--seed", "1"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["assessment"]["overall_score"], 100);
    assert_eq!(report["assessment"]["company"]["name"], "Acme Corp");
}

#[test]
fn assess_keeps_one_answer_per_question() {
    let dir = TempDir::new().unwrap();
    let answers_path = dir.path().join("answers.json");
    // The second acc-001 entry replaces the first.
    fs::write(
        &answers_path,
        indoc! {r#"
            [
              { "question_id": "acc-001", "value": false },
              { "question_id": "acc-001", "value": true }
            ]
        "#},
    )
    .unwrap();

    let output = Command::cargo_bin("riskmap")
        .unwrap()
        .arg("assess")
        .arg(&answers_path)
        .args(["--format", "json", "--no-save", "--seed", "5"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    // acc-001 alone is worth 10 of the catalog's 142 points.
    assert_eq!(report["assessment"]["overall_score"], 7);
}

#[test]
fn report_without_a_saved_assessment_fails() {
    let dir = TempDir::new().unwrap();
    let storage_dir = dir.path().join("empty-store");
    let config_path = write_config(dir.path(), &storage_dir);

    Command::cargo_bin("riskmap")
        .unwrap()
        .arg("report")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .failure();
}

#[test]
fn assess_fails_on_a_missing_answers_file() {
    Command::cargo_bin("riskmap")
        .unwrap()
        .args(["assess", "/nonexistent/answers.json", "--no-save"])
        .assert()
        .failure();
}

#[test]
fn assess_fails_on_malformed_answers() {
    let dir = TempDir::new().unwrap();
    let answers_path = dir.path().join("answers.json");
    fs::write(&answers_path, "{\"not\": \"a list\"}").unwrap();

    Command::cargo_bin("riskmap")
        .unwrap()
        .arg("assess")
        .arg(&answers_path)
        .arg("--no-save")
        .assert()
        .failure();
}

#[test]
fn init_creates_a_config_template_once() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("riskmap")
        .unwrap()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();
    assert!(dir.path().join(".riskmap.toml").exists());

    Command::cargo_bin("riskmap")
        .unwrap()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .failure();

    Command::cargo_bin("riskmap")
        .unwrap()
        .current_dir(dir.path())
        .args(["init", "--force"])
        .assert()
        .success();
}
