//! End-to-end test of the filter-sym subcommand against a scratch tree.

use std::fs;
use std::process::Command;

use tempfile::TempDir;

#[test]
fn test_filter_sym_writes_retained_lines() {
    let dir = TempDir::new().unwrap();
    let source_dir = dir.path().join("patching");
    fs::create_dir_all(&source_dir).unwrap();
    fs::write(
        source_dir.join("flags.cpp"),
        r#"read("wEventFlags"); read("wCurMapId");"#,
    )
    .unwrap();

    let input = dir.path().join("rom.sym");
    let output = dir.path().join("rom.sym.filtered");
    fs::write(
        &input,
        "00:0ac0 wEventFlags\n\
         00:0001 wUnreferenced\n\
         malformed-line\n\
         01:a000 sNewBox4Theme\n\
         00:0dcb wCurMapId\n",
    )
    .unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_rgbmig"))
        .arg("filter-sym")
        .arg(&input)
        .arg(&output)
        .arg("--source-dir")
        .arg(&source_dir)
        .status()
        .expect("run rgbmig");
    assert!(status.success());

    let filtered = fs::read_to_string(&output).unwrap();
    assert_eq!(
        filtered,
        "00:0ac0 wEventFlags\n01:a000 sNewBox4Theme\n00:0dcb wCurMapId\n"
    );
}

#[test]
fn test_filter_sym_missing_source_dir_fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("rom.sym");
    fs::write(&input, "00:0ac0 wEventFlags\n").unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_rgbmig"))
        .arg("filter-sym")
        .arg(&input)
        .arg(dir.path().join("out.sym"))
        .arg("--source-dir")
        .arg(dir.path().join("does-not-exist"))
        .status()
        .expect("run rgbmig");
    assert!(!status.success());
}
