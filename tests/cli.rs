//! CLI integration tests.
//!
//! Invokes the binary as a subprocess and checks the printed digest
//! forms against the published vectors.

use std::process::Command;

fn binary_path() -> std::path::PathBuf {
    // The binary sits next to the test executable's parent directory.
    let mut path = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_default();

    if path.ends_with("deps") {
        path.pop();
    }

    if cfg!(windows) {
        path.join("poseidon-commit.exe")
    } else {
        path.join("poseidon-commit")
    }
}

fn run(args: &[&str]) -> (i32, String, String) {
    let binary = binary_path();
    let output = Command::new(&binary)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to spawn {binary:?}: {e}"));
    let code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (code, stdout, stderr)
}

#[test]
fn commit_prints_decimal_and_hex() {
    let (code, stdout, stderr) = run(&["commit", "1", "1"]);
    assert_eq!(code, 0, "commit must succeed, stderr: {stderr}");
    assert!(stdout
        .contains("1416164405029674324331909544155980085306730986792554086473471855678221018328"));
    assert!(stdout.contains("0x32185493717c7b81d77195f57104754bbf86874512da9df199203b1012164d8"));
}

#[test]
fn commit_accepts_hex_arguments() {
    let decimal = run(&["commit", "2", "12345"]);
    let hex = run(&["commit", "0x2", "0x3039"]);
    assert_eq!(decimal.0, 0);
    assert_eq!(hex.0, 0);
    assert_eq!(decimal.1, hex.1, "decimal and hex spellings must agree");
}

#[test]
fn hash_matches_published_vector() {
    let (code, stdout, _) = run(&["hash", "1", "2"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("0x371cb6995ea5e7effcd2e174de264b5b407027a75a231a70c2c8d196107f0e7"));
}

#[test]
fn malformed_input_fails() {
    let (code, _, stderr) = run(&["commit", "not-a-number", "1"]);
    assert_ne!(code, 0, "malformed input must exit non-zero");
    assert!(stderr.contains("error"), "stderr must carry the error");
}
