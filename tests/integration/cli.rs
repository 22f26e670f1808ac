use std::process::Command;

use crate::{load_png, ICON_PNG, IMAGE_SIZE};

const APP_PATH: &str = env!("CARGO_BIN_EXE_favicon-gen");

fn fixture(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn default_paths() {
    let dir = tempdir::TempDir::new("favicon-gen").unwrap();
    let app_dir = dir.path().join("src").join("app");
    std::fs::create_dir_all(&app_dir).unwrap();
    std::fs::copy(fixture("icon.svg"), app_dir.join("icon.svg")).unwrap();

    let output = Command::new(APP_PATH)
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());

    let data = std::fs::read(app_dir.join("favicon.png")).unwrap();
    assert_eq!(data, *ICON_PNG);
}

#[test]
fn file_to_file() {
    let dir = tempdir::TempDir::new("favicon-gen").unwrap();
    let png_path = dir.path().join("out.png");

    let status = Command::new(APP_PATH)
        .arg(fixture("line.svg"))
        .arg(&png_path)
        .status()
        .unwrap();
    assert!(status.success());

    let image = load_png(&std::fs::read(&png_path).unwrap());
    assert_eq!(image.width, IMAGE_SIZE);
    assert_eq!(image.height, IMAGE_SIZE);
}

#[test]
fn missing_input() {
    let dir = tempdir::TempDir::new("favicon-gen").unwrap();

    let output = Command::new(APP_PATH)
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("Error: failed to read the input file"));
    assert!(!dir.path().join("src/app/favicon.png").exists());
}

#[test]
fn missing_output_dir() {
    let dir = tempdir::TempDir::new("favicon-gen").unwrap();
    let png_path = dir.path().join("missing").join("out.png");

    let output = Command::new(APP_PATH)
        .arg(fixture("icon.svg"))
        .arg(&png_path)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("Error: failed to write the output file"));
}

#[test]
fn warnings_and_quiet() {
    let dir = tempdir::TempDir::new("favicon-gen").unwrap();
    let png_path = dir.path().join("out.png");

    let output = Command::new(APP_PATH)
        .arg(fixture("empty.svg"))
        .arg(&png_path)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("Warning"));

    let output = Command::new(APP_PATH)
        .arg("--quiet")
        .arg(fixture("empty.svg"))
        .arg(&png_path)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}

#[test]
fn unexpected_argument() {
    let output = Command::new(APP_PATH)
        .args(["a.svg", "b.png", "c.png"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn help() {
    let output = Command::new(APP_PATH).arg("--help").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("favicon-gen rasterizes"));
    assert!(stdout.contains("USAGE:"));
    assert!(stdout.contains("--quiet"));
}

#[test]
fn version() {
    let output = Command::new(APP_PATH).arg("--version").output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap().trim(),
        env!("CARGO_PKG_VERSION")
    );
}
