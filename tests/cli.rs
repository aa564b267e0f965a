use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn classgen(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_classgen"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run classgen")
}

fn package_dir(root: &Path, package: &[&str]) -> PathBuf {
    let mut dir = root.join("src").join("main").join("java");
    for segment in package {
        dir.push(segment);
    }
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn entries(dir: &Path) -> Vec<String> {
    let mut entries = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect::<Vec<_>>();
    entries.sort();
    entries
}

#[test]
fn generates_into_current_dir() {
    let root = tempfile::tempdir().unwrap();
    let dir = package_dir(root.path(), &["com", "example"]);

    let output = classgen(&dir, &["Foo", "Bar"]);

    assert!(output.status.success());
    assert_eq!(entries(&dir), ["Bar.java", "Foo.java"]);
    assert_eq!(fs::read_to_string(dir.join("Foo.java")).unwrap(), "package com.example;\n                \npublic class Foo {\n}\n                ");
}

#[test]
fn outside_source_root_is_silent_success() {
    let root = tempfile::tempdir().unwrap();

    let output = classgen(root.path(), &["Foo"]);

    assert!(output.status.success());
    assert!(output.stderr.is_empty());
    assert!(entries(root.path()).is_empty());
}

#[test]
fn no_names_is_success() {
    let root = tempfile::tempdir().unwrap();
    let dir = package_dir(root.path(), &["app"]);

    let output = classgen(&dir, &[]);

    assert!(output.status.success());
    assert!(entries(&dir).is_empty());
}

#[test]
fn dir_option_overrides_current_dir() {
    let root = tempfile::tempdir().unwrap();
    let dir = package_dir(root.path(), &["app"]);

    let output = classgen(root.path(), &["--dir", dir.to_str().unwrap(), "Main"]);

    assert!(output.status.success());
    assert_eq!(entries(&dir), ["Main.java"]);
}

#[test]
fn write_failure_exits_with_error() {
    let root = tempfile::tempdir().unwrap();
    let dir = package_dir(root.path(), &["app"]);
    fs::create_dir(dir.join("Blocked.java")).unwrap();

    let output = classgen(&dir, &["First", "Blocked", "Last"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Blocked.java"));
    assert_eq!(entries(&dir), ["Blocked.java", "First.java"]);
}

#[test]
fn invalid_config_exits_before_writing() {
    let root = tempfile::tempdir().unwrap();
    let dir = package_dir(root.path(), &["app"]);
    let config = root.path().join("layout.toml");
    fs::write(&config, "extension = 42\n").unwrap();

    let output = classgen(&dir, &["--config", config.to_str().unwrap(), "Main"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("layout.toml"));
    assert!(entries(&dir).is_empty());
}

#[test]
fn missing_config_exits_with_error() {
    let root = tempfile::tempdir().unwrap();
    let dir = package_dir(root.path(), &["app"]);

    let output = classgen(&dir, &["--config", "missing.toml", "Main"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!output.stderr.is_empty());
    assert!(entries(&dir).is_empty());
}

#[test]
fn config_changes_extension() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("src").join("main").join("groovy").join("app");
    fs::create_dir_all(&dir).unwrap();
    let config = root.path().join("layout.toml");
    fs::write(&config, "source_root = [\"src\", \"main\", \"groovy\"]\nextension = \"groovy\"\n").unwrap();

    let output = classgen(&dir, &["--config", config.to_str().unwrap(), "Script"]);

    assert!(output.status.success());
    assert_eq!(entries(&dir), ["Script.groovy"]);
}
