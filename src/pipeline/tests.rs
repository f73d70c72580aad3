//! Tests for pipeline module

use super::*;
use crate::error::ErrorKind;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::tempdir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Generator that records every call and echoes its inputs
#[derive(Debug, Clone, Default)]
struct RecordingGenerator {
    calls: Arc<Mutex<Vec<(String, String, String)>>>,
}

impl RecordingGenerator {
    fn calls(&self) -> Vec<(String, String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl TypeGenerator for RecordingGenerator {
    fn generate(&self, name: &str, sample: &str, lang: &str) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((name.to_string(), sample.to_string(), lang.to_string()));
        Ok(format!("// {name} ({lang})\n{sample}"))
    }
}

/// Generator that always fails
struct FailingGenerator;

impl TypeGenerator for FailingGenerator {
    fn generate(&self, _name: &str, _sample: &str, _lang: &str) -> Result<String> {
        Err(Error::generation("inconsistent sample"))
    }
}

fn write_json(dir: &Path, file: &str, value: &serde_json::Value) -> String {
    let path = dir.join(file);
    fs::write(&path, value.to_string()).unwrap();
    path.display().to_string()
}

fn file_count(dir: &Path) -> usize {
    if !dir.exists() {
        return 0;
    }
    fs::read_dir(dir).unwrap().count()
}

// ============================================================================
// Single Run Tests
// ============================================================================

#[tokio::test]
async fn test_run_end_to_end() {
    let dir = tempdir().unwrap();
    let source = write_json(dir.path(), "sample.json", &json!({"a": 1, "b": "x"}));
    let out = dir.path().join("out");

    let pipeline = Pipeline::new(&out).unwrap();
    let result = pipeline
        .run(&SourceDescriptor::new("Sample", &source))
        .await
        .unwrap();

    assert_eq!(result.output_path, out.join("Sample.ts"));

    let written = fs::read_to_string(out.join("Sample.ts")).unwrap();
    assert_eq!(written, result.rendered_text);
    assert!(written.contains("a: number"));
    assert!(written.contains("b: string"));
}

#[tokio::test]
async fn test_run_is_idempotent() {
    let dir = tempdir().unwrap();
    let source = write_json(
        dir.path(),
        "users.json",
        &json!([{"id": 1, "name": "Ada"}, {"id": 2, "email": null}]),
    );
    let out = dir.path().join("types");

    let pipeline = Pipeline::new(&out).unwrap();
    let descriptor = SourceDescriptor::new("Users", &source).with_lang("rust");

    let first = pipeline.run(&descriptor).await.unwrap();
    let first_bytes = fs::read(&first.output_path).unwrap();

    let second = pipeline.run(&descriptor).await.unwrap();
    let second_bytes = fs::read(&second.output_path).unwrap();

    assert_eq!(first.output_path, second.output_path);
    assert_eq!(first_bytes, second_bytes);
    assert_eq!(file_count(&out), 1);
}

#[tokio::test]
async fn test_run_passes_sample_and_raw_lang() {
    let dir = tempdir().unwrap();
    let source = write_json(dir.path(), "foo.json", &json!({"b": [1, 2], "a": true}));
    let out = dir.path().join("out");

    let generator = RecordingGenerator::default();
    let pipeline = Pipeline::new(&out)
        .unwrap()
        .with_generator(generator.clone());

    let result = pipeline
        .run(&SourceDescriptor::new("Foo", &source).with_lang("cobol"))
        .await
        .unwrap();

    assert_eq!(result.output_path, out.join("Foo.txt"));
    assert_eq!(
        generator.calls(),
        vec![(
            "Foo".to_string(),
            r#"{"a":true,"b":[1,2]}"#.to_string(),
            "cobol".to_string()
        )]
    );
}

#[tokio::test]
async fn test_run_unknown_lang_with_builtin_generator() {
    let dir = tempdir().unwrap();
    let source = write_json(dir.path(), "foo.json", &json!({"a": 1}));
    let out = dir.path().join("out");

    let pipeline = Pipeline::new(&out).unwrap();
    let err = pipeline
        .run(&SourceDescriptor::new("Foo", &source).with_lang("cobol"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Generation);
    assert!(err.to_string().contains("cobol"));
    assert!(!out.join("Foo.txt").exists());
}

#[tokio::test]
async fn test_run_output_subdir() {
    let dir = tempdir().unwrap();
    let source = write_json(dir.path(), "repo.json", &json!({"id": 1}));
    let out = dir.path().join("types");

    let pipeline = Pipeline::new(&out).unwrap();
    let result = pipeline
        .run(
            &SourceDescriptor::new("Repo", &source)
                .with_lang("go")
                .with_output_subdir("github/v3"),
        )
        .await
        .unwrap();

    assert_eq!(result.output_path, out.join("github/v3/Repo.go"));
    assert!(result.output_path.exists());
}

#[tokio::test]
async fn test_run_missing_source_writes_nothing() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("out");

    let generator = RecordingGenerator::default();
    let pipeline = Pipeline::new(&out)
        .unwrap()
        .with_generator(generator.clone());

    let missing = dir.path().join("missing.json");
    let err = pipeline
        .run(&SourceDescriptor::new("Missing", &missing.display().to_string()))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(generator.calls().is_empty());
    assert_eq!(file_count(&out), 0);
}

#[tokio::test]
async fn test_run_generation_failure_writes_nothing() {
    let dir = tempdir().unwrap();
    let source = write_json(dir.path(), "a.json", &json!({"a": 1}));
    let out = dir.path().join("out");

    let pipeline = Pipeline::new(&out).unwrap().with_generator(FailingGenerator);
    let err = pipeline
        .run(&SourceDescriptor::new("A", &source))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Generation);
    assert_eq!(file_count(&out), 0);
}

#[tokio::test]
async fn test_run_remote_source_with_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(header("Authorization", "Bearer abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"login": "octo"}])))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let pipeline = Pipeline::new(dir.path()).unwrap();
    let descriptor = SourceDescriptor::new("Users", &format!("{}/users", server.uri()))
        .with_lang("python")
        .header("Authorization", "Bearer abc");

    let result = pipeline.run(&descriptor).await.unwrap();

    assert_eq!(result.output_path, dir.path().join("Users.py"));
    assert!(result.rendered_text.contains("login: str"));
}

#[tokio::test]
async fn test_run_remote_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let pipeline = Pipeline::new(dir.path()).unwrap();
    let err = pipeline
        .run(&SourceDescriptor::new("Gone", &server.uri()))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(file_count(dir.path()), 0);
}

#[tokio::test]
async fn test_failed_write_leaves_no_stray_files() {
    let dir = tempdir().unwrap();
    let source = write_json(dir.path(), "a.json", &json!({"a": 1}));
    let out = dir.path().join("out");

    // A directory squatting on the destination makes the final rename fail
    fs::create_dir_all(out.join("A.ts")).unwrap();

    let err = Pipeline::new(&out)
        .unwrap()
        .run(&SourceDescriptor::new("A", &source))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Io);
    let entries: Vec<String> = fs::read_dir(&out)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(entries, vec!["A.ts".to_string()]);
    assert!(out.join("A.ts").is_dir());
}

#[tokio::test]
async fn test_rerun_replaces_previous_output() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("out");
    fs::create_dir_all(&out).unwrap();
    fs::write(out.join("A.ts"), "stale contents that are much longer than the new output").unwrap();

    let source = write_json(dir.path(), "a.json", &json!({"a": 1}));
    let result = Pipeline::new(&out)
        .unwrap()
        .run(&SourceDescriptor::new("A", &source))
        .await
        .unwrap();

    assert_eq!(fs::read_to_string(&result.output_path).unwrap(), result.rendered_text);
    assert_eq!(file_count(&out), 1);
}

// ============================================================================
// Batch Run Tests
// ============================================================================

#[tokio::test]
async fn test_batch_isolates_missing_file() {
    let dir = tempdir().unwrap();
    let a = write_json(dir.path(), "a.json", &json!({"a": 1}));
    let c = write_json(dir.path(), "c.json", &json!({"c": "x"}));
    let missing = dir.path().join("b.json").display().to_string();
    let out = dir.path().join("out");

    let config = BatchConfig::from_value(json!({
        "sources": [
            {"name": "A", "source": a},
            {"name": "B", "source": missing},
            {"name": "C", "source": c, "lang": "go"}
        ]
    }))
    .unwrap();

    let report = Pipeline::new(&out).unwrap().run_batch(&config).await;

    assert_eq!(report.outcomes.len(), 3);
    assert_eq!(report.succeeded(), 2);
    assert_eq!(report.failed(), 1);
    assert_eq!(report.summary(), "2 succeeded, 1 failed");

    let names: Vec<&str> = report.outcomes.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);

    assert!(report.outcomes[0].success);
    assert!(!report.outcomes[1].success);
    assert!(report.outcomes[1]
        .error_message
        .as_deref()
        .unwrap()
        .starts_with("File not found"));
    assert!(report.outcomes[2].success);

    assert!(out.join("A.ts").exists());
    assert!(!out.join("B.ts").exists());
    assert!(out.join("C.go").exists());
}

#[tokio::test]
async fn test_batch_continues_after_generation_and_descriptor_errors() {
    let dir = tempdir().unwrap();
    let a = write_json(dir.path(), "a.json", &json!({"a": 1}));
    let out = dir.path().join("out");

    let config = BatchConfig::from_value(json!({
        "sources": [
            {"name": "Bad", "source": a, "lang": "cobol"},
            {"source": a},
            {"name": "Good", "source": a, "outputDir": "nested"}
        ]
    }))
    .unwrap();

    let report = Pipeline::new(&out).unwrap().run_batch(&config).await;

    assert_eq!(report.outcomes.len(), 3);
    assert!(!report.outcomes[0].success);
    assert_eq!(report.outcomes[1].name, "sources[1]");
    assert!(!report.outcomes[1].success);
    assert!(report.outcomes[2].success);
    assert_eq!(
        report.outcomes[2].output_path.as_deref(),
        Some(out.join("nested/Good.ts").as_path())
    );
}

#[tokio::test]
async fn test_batch_preserves_order_with_recording_generator() {
    let dir = tempdir().unwrap();
    let sources: Vec<_> = ["Zeta", "Alpha", "Mid"]
        .iter()
        .map(|name| {
            let file = write_json(dir.path(), &format!("{name}.json"), &json!({"n": name}));
            json!({"name": name, "source": file})
        })
        .collect();

    let config = BatchConfig::from_value(json!({ "sources": sources })).unwrap();

    let generator = RecordingGenerator::default();
    let report = Pipeline::new(dir.path().join("out"))
        .unwrap()
        .with_generator(generator.clone())
        .run_batch(&config)
        .await;

    assert!(report.all_succeeded());

    let called: Vec<String> = generator.calls().into_iter().map(|c| c.0).collect();
    assert_eq!(called, vec!["Zeta", "Alpha", "Mid"]);
}

#[tokio::test]
async fn test_batch_duplicate_names_last_write_wins() {
    let dir = tempdir().unwrap();
    let first = write_json(dir.path(), "first.json", &json!({"first": 1}));
    let second = write_json(dir.path(), "second.json", &json!({"second": 2}));
    let out = dir.path().join("out");

    let config = BatchConfig::from_value(json!({
        "sources": [
            {"name": "Dup", "source": first},
            {"name": "Dup", "source": second}
        ]
    }))
    .unwrap();

    let report = Pipeline::new(&out).unwrap().run_batch(&config).await;
    assert!(report.all_succeeded());

    let written = fs::read_to_string(out.join("Dup.ts")).unwrap();
    assert!(written.contains("second"));
    assert!(!written.contains("first"));
}

#[tokio::test]
async fn test_batch_empty() {
    let dir = tempdir().unwrap();
    let config = BatchConfig::from_value(json!({"sources": []})).unwrap();

    let report = Pipeline::new(dir.path()).unwrap().run_batch(&config).await;

    assert!(report.outcomes.is_empty());
    assert_eq!(report.summary(), "0 succeeded, 0 failed");
}

#[test]
fn test_batch_invalid_shape_processes_nothing() {
    let err = BatchConfig::from_value(json!({"sources": "not-an-array"})).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
    assert!(err.aborts_batch());
}

#[test]
fn test_report_counts() {
    let mut report = BatchReport::new();
    report.push(BatchOutcome::succeeded("A", Path::new("out/A.ts")));
    report.push(BatchOutcome::failed("B", "boom"));

    assert_eq!(report.succeeded(), 1);
    assert_eq!(report.failed(), 1);
    assert!(!report.all_succeeded());
}
