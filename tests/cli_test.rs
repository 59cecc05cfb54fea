//! The `lesscolors` binary: argument handling, output and exit codes.

mod common;

use common::colors::{BLACK, BLUE, GREEN, RED, WHITE};
use common::{assert_image, write_png};
use pretty_assertions::assert_eq;
use std::path::Path;
use std::process::{Command, Output};

fn lesscolors(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lesscolors"))
        .args(args)
        .current_dir(dir)
        .env_remove("LESSCOLORS_CONFIG")
        .env("RUST_LOG", "off")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_reduce_with_palette_image() {
    let dir = tempfile::tempdir().unwrap();
    write_png(dir.path(), "in.png", 2, 1, &[RED, GREEN]);
    write_png(dir.path(), "lut.png", 2, 1, &[RED, BLUE]);

    let output = lesscolors(
        dir.path(),
        &[
            "reduce", "--input", "in.png", "--output", "out.png", "--palette", "lut.png",
            "--space", "rgb",
        ],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(
        out.starts_with("Successfully finished in ") && out.trim_end().ends_with(" ms."),
        "unexpected stdout: {out}"
    );
    assert_image(&dir.path().join("out.png"), 2, 1, &[RED, RED]);
}

#[test]
fn test_reduce_with_lut_alias_and_colors_from_config() {
    let dir = tempfile::tempdir().unwrap();
    write_png(dir.path(), "in.png", 2, 1, &[[20, 20, 20, 255], [230, 230, 230, 255]]);
    std::fs::write(
        dir.path().join("lesscolors.yaml"),
        "space: oklab\ncolors: [\"#000000\", \"#ffffff\"]\n",
    )
    .unwrap();

    let output = lesscolors(
        dir.path(),
        &[
            "--config",
            "lesscolors.yaml",
            "reduce",
            "--input",
            "in.png",
            "--output",
            "out.png",
        ],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_image(&dir.path().join("out.png"), 2, 1, &[BLACK, WHITE]);
}

#[test]
fn test_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    write_png(dir.path(), "lut.png", 1, 1, &[BLACK]);

    let output = lesscolors(
        dir.path(),
        &["reduce", "--input", "nope.png", "--output", "out.png", "--lut", "lut.png"],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Couldn't find file: nope.png"));
    assert!(!dir.path().join("out.png").exists());
}

#[test]
fn test_missing_palette_fails() {
    let dir = tempfile::tempdir().unwrap();
    write_png(dir.path(), "in.png", 1, 1, &[BLACK]);

    let output = lesscolors(
        dir.path(),
        &["reduce", "--input", "in.png", "--output", "out.png"],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Missing palette"));
}

#[test]
fn test_missing_required_argument_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = lesscolors(dir.path(), &["reduce", "--input", "in.png"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("--output"));
}

#[test]
fn test_palette_listing() {
    let dir = tempfile::tempdir().unwrap();
    write_png(dir.path(), "lut.png", 2, 2, &[WHITE, GREEN, BLUE, WHITE]);

    let output = lesscolors(dir.path(), &["palette", "--palette", "lut.png"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "#ffffff\n#0000ff\n#00ff00\n#ffffff\n");

    let output = lesscolors(dir.path(), &["palette", "--palette", "lut.png", "--unique"]);
    assert_eq!(stdout(&output), "#ffffff\n#0000ff\n#00ff00\n");
}

#[test]
fn test_palette_listing_from_colors() {
    let dir = tempfile::tempdir().unwrap();
    let output = lesscolors(dir.path(), &["palette", "--colors", "#F00,#00ff0080"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "#ff0000\n#00ff0080\n");
}
