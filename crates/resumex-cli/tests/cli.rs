use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;

const VECTORIZER: &str = r#"{
    "vocabulary": {"python": 0, "django": 1, "patient": 2, "nurse": 3},
    "idf": [1.0, 1.2, 1.0, 1.3]
}"#;

const CLASSIFIER: &str = r#"{
    "coef": [[3.0, 3.0, -1.0, -1.0], [-1.0, -1.0, 3.0, 3.0]],
    "intercept": [0.0, 0.0],
    "classes": [0, 1]
}"#;

const LABELS: &str = r#"{"classes": ["Python Developer", "Nursing"]}"#;

const RESUME: &str = "Jane Q Doe
jane.doe@example.com
Software Engineer, Acme January 2020 - Present
Python and Django services.
Bachelor of Science, State University.
";

/// Workspace with a config file pointing at a model directory.
struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new(with_model: bool) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let model_dir = dir.path().join("models");
        fs::create_dir_all(&model_dir).unwrap();

        if with_model {
            fs::write(model_dir.join("vectorizer.json"), VECTORIZER).unwrap();
            fs::write(model_dir.join("classifier.json"), CLASSIFIER).unwrap();
            fs::write(model_dir.join("label_encoder.json"), LABELS).unwrap();
        }

        let config = json!({ "models": { "model_dir": model_dir } });
        fs::write(dir.path().join("config.json"), config.to_string()).unwrap();

        Self { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn config(&self) -> PathBuf {
        self.path().join("config.json")
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("resumex").unwrap();
        cmd.arg("--config").arg(self.config());
        cmd
    }
}

#[test]
fn analyze_requires_input() {
    let ws = Workspace::new(true);

    ws.cmd()
        .arg("analyze")
        .assert()
        .failure()
        .stderr(predicate::str::contains("either a file or text must be provided"));
}

#[test]
fn analyze_rejects_non_pdf_file() {
    let ws = Workspace::new(true);
    let resume = ws.path().join("resume.docx");
    fs::write(&resume, "not a pdf").unwrap();

    ws.cmd()
        .arg("analyze")
        .arg(&resume)
        .assert()
        .failure()
        .stderr(predicate::str::contains("only PDF files are supported"));
}

#[test]
fn analyze_rejects_blank_text() {
    let ws = Workspace::new(true);

    ws.cmd()
        .args(["analyze", "--text", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not extract text"));
}

#[test]
fn analyze_text_as_json() {
    let ws = Workspace::new(true);

    let output = ws
        .cmd()
        .args(["analyze", "--text", RESUME, "--now", "2023-03"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["name"], "Jane Q Doe");
    assert_eq!(result["email"], "jane.doe@example.com");
    assert_eq!(result["experience_years"], 3.2);
    assert_eq!(result["experience_level"], "Mid");
    assert_eq!(result["classification"], "Python Developer");
    assert_eq!(result["skills"], json!(["DJANGO", "PYTHON"]));
    assert_eq!(
        result["education"],
        json!(["bachelor of science, state university."])
    );
}

#[test]
fn analyze_text_summary_format() {
    let ws = Workspace::new(true);

    ws.cmd()
        .args(["analyze", "--text", RESUME, "--now", "2023-03", "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Experience: 3.2 years (Mid)"))
        .stdout(predicate::str::contains("Classification: Python Developer"));
}

#[test]
fn analyze_rejects_bad_now() {
    let ws = Workspace::new(true);

    ws.cmd()
        .args(["analyze", "--text", RESUME, "--now", "2023-13"])
        .assert()
        .failure();
}

#[test]
fn analyze_fails_without_model() {
    let ws = Workspace::new(false);

    ws.cmd()
        .args(["analyze", "--text", RESUME])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load classification model"));
}

#[test]
fn models_status_and_labels() {
    let ready = Workspace::new(true);
    ready
        .cmd()
        .args(["models", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ready (2 labels)"));

    ready
        .cmd()
        .args(["models", "labels"])
        .assert()
        .success()
        .stdout("Python Developer\nNursing\n");

    let missing = Workspace::new(false);
    missing
        .cmd()
        .args(["models", "status"])
        .assert()
        .failure();
}

#[test]
fn batch_writes_outputs_and_summary() {
    let ws = Workspace::new(true);
    let inputs = ws.path().join("inputs");
    let outputs = ws.path().join("out");
    fs::create_dir_all(&inputs).unwrap();
    fs::write(inputs.join("jane.txt"), RESUME).unwrap();
    fs::write(inputs.join("blank.txt"), "  \n").unwrap();

    let pattern = inputs.join("*.txt");

    ws.cmd()
        .arg("batch")
        .arg(pattern.to_str().unwrap())
        .arg("--output-dir")
        .arg(&outputs)
        .args(["--summary", "--continue-on-error", "--now", "2023-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 successful"));

    assert!(outputs.join("jane.json").is_file());
    assert!(!outputs.join("blank.json").exists());

    let summary = fs::read_to_string(outputs.join("summary.csv")).unwrap();
    let mut lines = summary.lines();
    assert_eq!(
        lines.next(),
        Some("filename,status,name,email,experience_years,experience_level,classification,confidence,processing_time_ms,error")
    );
    assert!(summary.contains("jane.txt,success,Jane Q Doe,jane.doe@example.com,3.2,Mid,Python Developer"));
    assert!(summary.contains("blank.txt,error"));
}

#[test]
fn batch_stops_on_first_error() {
    let ws = Workspace::new(true);
    fs::write(ws.path().join("blank.txt"), "").unwrap();
    let pattern = ws.path().join("*.txt");

    ws.cmd()
        .arg("batch")
        .arg(pattern.to_str().unwrap())
        .assert()
        .failure();
}

#[test]
fn config_get_and_set() {
    let ws = Workspace::new(true);

    ws.cmd()
        .args(["config", "get", "extraction.education_limit"])
        .assert()
        .success()
        .stdout("5\n");

    ws.cmd()
        .args(["config", "set", "extraction.education_limit", "3"])
        .assert()
        .success();

    ws.cmd()
        .args(["config", "get", "extraction.education_limit"])
        .assert()
        .success()
        .stdout("3\n");

    ws.cmd()
        .args(["config", "set", "extraction.unknown", "1"])
        .assert()
        .failure();
}
