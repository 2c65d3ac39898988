//! Integration tests for the command surface.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use postdoc::{App, AppError, Config, LoadError};
use postdoc_render::RenderError;
use tempfile::TempDir;

fn bundled_themes() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../themes")
}

fn sample_collection() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../postdoc-render/tests/fixtures/collection.json")
}

fn write_collection(dir: &Path, body: &str) -> PathBuf {
    let collection = serde_json::json!({
        "name": "Demo",
        "requests": [
            {"id": "r1", "name": "Ping", "responses": [{"name": "ok", "text": body}]}
        ]
    });
    let path = dir.join("collection.json");
    fs::write(&path, collection.to_string()).unwrap();
    path
}

fn write_lookup_theme(root: &Path) {
    let dir = root.join("lookup");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("index.tpl"),
        "start\n\
         {% set r = findRequest(requests, \"r1\") %}\n\
         {{ findResponse(r, \"ok\").body | indentJSON }}\n",
    )
    .unwrap();
}

fn config(collection: &Path, themes_dir: &Path, theme: &str) -> Config {
    Config {
        theme: theme.to_string(),
        themes_dir: themes_dir.to_path_buf(),
        seed: Some(1),
        ..Config::new(collection)
    }
}

#[test]
fn test_render_to_stdout() {
    let app = App::new(config(
        &sample_collection(),
        &bundled_themes(),
        "markdown_default",
    ));

    let mut out = Vec::new();
    app.run(&mut out).unwrap();

    let out = String::from_utf8(out).unwrap();
    assert!(out.starts_with("# Pet Store"));
    assert!(out.contains("### Delete pet"), "nested folders are rendered");
    assert!(out.contains("\"reason\": \"adopted\""));
}

#[test]
fn test_render_to_file() {
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("docs/api.html");
    let app = App::new(Config {
        output: Some(output.clone()),
        ..config(&sample_collection(), &bundled_themes(), "html_default")
    });

    let mut stdout = Vec::new();
    app.run(&mut stdout).unwrap();

    assert!(stdout.is_empty());
    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("<h1>Pet Store</h1>"));
}

#[test]
fn test_seeded_runs_are_identical() {
    let render = || {
        let app = App::new(config(&sample_collection(), &bundled_themes(), "html_default"));
        let mut out = Vec::new();
        app.run(&mut out).unwrap();
        out
    };
    assert_eq!(render(), render());
}

#[test]
fn test_failed_render_leaves_destination_untouched() {
    let tmp = TempDir::new().unwrap();
    write_lookup_theme(tmp.path());
    let collection = write_collection(tmp.path(), "not json");
    let out_dir = tmp.path().join("out");
    fs::create_dir_all(&out_dir).unwrap();
    let output = out_dir.join("api.md");
    fs::write(&output, "previous").unwrap();

    let app = App::new(Config {
        output: Some(output.clone()),
        ..config(&collection, tmp.path(), "lookup")
    });
    let err = app.run(Vec::new()).unwrap_err();

    assert!(matches!(
        err,
        AppError::Render(RenderError::TemplateExecution(_))
    ));
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
    assert_eq!(fs::read_dir(&out_dir).unwrap().count(), 1, "temp file removed");
}

#[test]
fn test_failed_render_to_stdout_flushes_prefix() {
    let tmp = TempDir::new().unwrap();
    write_lookup_theme(tmp.path());
    let collection = write_collection(tmp.path(), "not json");

    let app = App::new(config(&collection, tmp.path(), "lookup"));
    let mut out = Vec::new();
    let err = app.run(&mut out).unwrap_err();

    assert!(matches!(err, AppError::Render(_)));
    assert_eq!(String::from_utf8(out).unwrap(), "start\n");
}

#[test]
fn test_valid_body_renders_indented() {
    let tmp = TempDir::new().unwrap();
    write_lookup_theme(tmp.path());
    let collection = write_collection(tmp.path(), "{\"a\":1}");

    let app = App::new(config(&collection, tmp.path(), "lookup"));
    let mut out = Vec::new();
    app.run(&mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "start\n{\n    \"a\": 1\n}\n"
    );
}

#[test]
fn test_missing_input() {
    let app = App::new(Config::default());
    assert!(matches!(app.run(Vec::new()), Err(AppError::MissingInput)));
}

#[test]
fn test_unreadable_collection() {
    let tmp = TempDir::new().unwrap();
    let app = App::new(config(
        &tmp.path().join("missing.json"),
        &bundled_themes(),
        "markdown_default",
    ));
    assert!(matches!(
        app.run(Vec::new()),
        Err(AppError::Load(LoadError::Read { .. }))
    ));
}

#[test]
fn test_unknown_theme_fails_before_output_is_created() {
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("api.md");
    let app = App::new(Config {
        output: Some(output.clone()),
        ..config(&sample_collection(), &bundled_themes(), "nope")
    });

    let err = app.run(Vec::new()).unwrap_err();
    assert!(matches!(
        err,
        AppError::Render(RenderError::ThemeNotFound { .. })
    ));
    assert!(!output.exists());
}

#[test]
fn test_list_themes() {
    let app = App::new(Config {
        list_themes: true,
        themes_dir: bundled_themes(),
        ..Config::default()
    });

    let mut out = Vec::new();
    app.run(&mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "html_default\nmarkdown_default\n"
    );
}

#[test]
fn test_binary_exit_status() {
    let tmp = TempDir::new().unwrap();
    write_lookup_theme(tmp.path());
    let bad = write_collection(tmp.path(), "not json");

    let output = Command::new(env!("CARGO_BIN_EXE_postdoc"))
        .arg("--themes-dir")
        .arg(tmp.path())
        .args(["--theme", "lookup"])
        .arg(&bad)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("template execution error"), "got {stderr}");
}

#[test]
fn test_binary_reports_error_chain_once() {
    let tmp = TempDir::new().unwrap();
    write_lookup_theme(tmp.path());
    let bad = write_collection(tmp.path(), "not json");

    let output = Command::new(env!("CARGO_BIN_EXE_postdoc"))
        .arg("--themes-dir")
        .arg(tmp.path())
        .args(["--theme", "lookup"])
        .arg(&bad)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("error: template execution error: "), "got {stderr}");
    assert!(!stderr.contains("Caused by"), "got {stderr}");
    assert_eq!(stderr.matches("template execution error").count(), 1, "got {stderr}");
    assert_eq!(stderr.matches("invalid JSON").count(), 1, "got {stderr}");
    assert_eq!(stderr.lines().count(), 1, "got {stderr}");
}

#[test]
fn test_binary_missing_input() {
    let output = Command::new(env!("CARGO_BIN_EXE_postdoc"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "error: missing collection path\n"
    );
}
