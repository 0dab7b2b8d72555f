//! End-to-end checks of the public API: attempt -> alleviate -> render

use alleviate::failure::ENOENT;
use alleviate::{
    alleviate, attempt, similar_files, Failure, JsonRenderer, JsonReport, OutputFormat, PlainRenderer,
    Renderer, Settings, SymptomValue,
};
use alleviate_tests::dir_with_files;
use serde_json::Value;
use std::fs::{self, File};
use tempfile::TempDir;

fn open_failure(path: &std::path::Path) -> Failure {
    attempt("open", path, |p| File::open(p)).unwrap_err()
}

#[test]
fn test_missing_python_file_suggests_neighbour() {
    let dir = dir_with_files(&["test.py", "text.py.bak.old"]).unwrap();
    let missing = dir.path().join("text.py");

    let report = alleviate(&open_failure(&missing), &Settings::default()).unwrap();

    assert_eq!(report.symptom("Errno"), Some(&SymptomValue::Integer(ENOENT as i64)));
    assert_eq!(
        report.symptom("File does not exist"),
        Some(&SymptomValue::Text(missing.display().to_string()))
    );
    let solutions: Vec<&str> = report.solutions().iter().map(|s| s.suggestion.as_str()).collect();
    assert!(solutions.iter().any(|s| s.contains("test.py") && s.ends_with("similarity: 85%")));
}

#[test]
fn test_solutions_sorted_and_above_cutoff() {
    let dir = dir_with_files(&["report-2023.csv", "report-2024.csv", "report.csv", "notes.md"]).unwrap();
    let missing = dir.path().join("report-2025.csv");
    let cutoff = 0.6;

    let suggestions = similar_files(&missing, cutoff).unwrap();
    assert!(suggestions.len() >= 2);
    assert!(suggestions.iter().all(|s| s.similarity > cutoff));
    for pair in suggestions.windows(2) {
        assert!(pair[0].similarity >= pair[1].similarity);
    }
}

#[test]
fn test_suggestions_are_deterministic() {
    let dir = dir_with_files(&["alpha.txt", "alpah.txt", "aplha.txt", "beta.txt"]).unwrap();
    let missing = dir.path().join("alpha.tx");

    let first = similar_files(&missing, 0.5).unwrap();
    for _ in 0..5 {
        assert_eq!(similar_files(&missing, 0.5).unwrap(), first);
    }
}

#[test]
fn test_empty_directory_gives_no_solutions() {
    let dir = TempDir::new().unwrap();
    let report = alleviate(&open_failure(&dir.path().join("main.rs")), &Settings::default()).unwrap();

    assert!(report.solutions().is_empty());
    assert!(PlainRenderer.render(&report).contains("could not be found"));
}

#[test]
fn test_unclassified_failure_is_generic() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("binary.dat");
    fs::write(&path, [0xff, 0xfe, 0xfd]).unwrap();

    let failure = attempt("read", &path, |p| fs::read_to_string(p)).unwrap_err();
    assert!(matches!(failure, Failure::Unclassified { .. }));

    let report = alleviate(&failure, &Settings::default()).unwrap();
    assert!(!report.description().contains("could not be found"));
    assert!(report.symptom("File does not exist").is_none());
    assert!(report.solutions().is_empty());
}

#[test]
fn test_json_document_round_trips() {
    let dir = dir_with_files(&["test.py"]).unwrap();
    let report = alleviate(&open_failure(&dir.path().join("text.py")), &Settings::default()).unwrap();

    let rendered = JsonRenderer::new().render(&report);
    let original: Value = serde_json::from_str(&rendered).unwrap();
    for key in ["symptoms", "exception", "description", "solutions"] {
        assert!(original.get(key).is_some(), "missing key {}", key);
    }
    assert_eq!(original["exception"], "FileNotFoundError");
    assert!(original["description"].as_str().unwrap().contains('\n'));

    let reparsed: Value = serde_json::to_value(JsonReport::parse(&rendered).unwrap()).unwrap();
    assert_eq!(reparsed, original);

    let via_format = OutputFormat::Json.renderer(false).render(&report);
    assert_eq!(serde_json::from_str::<Value>(&via_format).unwrap(), original);
}

#[test]
fn test_settings_limit_number_of_solutions() {
    let dir = dir_with_files(&["log1.txt", "log2.txt", "log3.txt", "log4.txt", "log5.txt"]).unwrap();
    let failure = open_failure(&dir.path().join("log0.txt"));

    let all = alleviate(&failure, &Settings { max_suggestions: 10, ..Settings::default() }).unwrap();
    assert_eq!(all.solutions().len(), 5);

    let default = alleviate(&failure, &Settings::default()).unwrap();
    assert_eq!(default.solutions().len(), 3);
}
