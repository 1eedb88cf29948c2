/// End-to-end tests for the `cashuff` binary
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to write a fragment FASTA into the temp dir
fn write_fragments(dir: &TempDir, text: &str) -> PathBuf {
    let path = dir.path().join("cassette.fa");
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(text.as_bytes()).unwrap();
    path
}

const CASSETTE: &str = "\
>L (1..34)
MKTAYIAKQRQISFVKSHFS
RQLEERLGLIEVQ
>R (35..45)
KMPHEPRLAPA*
";

#[test]
fn test_writes_per_length_files_and_echoes() {
    let tmpdir = TempDir::new().unwrap();
    let input = write_fragments(&tmpdir, CASSETTE);

    let assert = Command::cargo_bin("cashuff")
        .unwrap()
        .current_dir(tmpdir.path())
        .arg(&input)
        .arg("-m")
        .arg("3")
        .arg("-l")
        .arg("4")
        .arg("5")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(">L_R_33_1_2_1\nQKMP\n"));

    let four = fs::read_to_string(tmpdir.path().join("peptides.4.fa")).unwrap();
    let five = fs::read_to_string(tmpdir.path().join("peptides.5.fa")).unwrap();
    assert_eq!(four.lines().count(), 60);
    assert!(five.lines().skip(1).step_by(2).all(|l| l.len() == 5));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), four.lines().count() + five.lines().count());
}

#[test]
fn test_default_parameters() {
    let tmpdir = TempDir::new().unwrap();
    let input = write_fragments(
        &tmpdir,
        ">A (3..5)\nACDEFGHIKLMNPQRSTVWY\n>B (14..16)\nWYVTSRQPNMLKIHGFEDCA\n",
    );

    Command::cargo_bin("cashuff")
        .unwrap()
        .current_dir(tmpdir.path())
        .arg(&input)
        .assert()
        .success();

    for len in [8, 9, 10, 11] {
        assert!(tmpdir.path().join(format!("peptides.{len}.fa")).exists());
    }
}

#[test]
fn test_body_before_header_fails() {
    let tmpdir = TempDir::new().unwrap();
    let input = write_fragments(&tmpdir, "MKTAYIAK\n>L (1..3)\nMKT\n");

    Command::cargo_bin("cashuff")
        .unwrap()
        .current_dir(tmpdir.path())
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("before first header"));
}

#[test]
fn test_identical_sequences_fail() {
    let tmpdir = TempDir::new().unwrap();
    let input = write_fragments(&tmpdir, ">A (1..2)\nACDEFGHIKL\n>B (1..2)\nACDEFGHIKL\n");

    Command::cargo_bin("cashuff")
        .unwrap()
        .current_dir(tmpdir.path())
        .arg(&input)
        .args(["-m", "1", "-l", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid combination"));
}

#[test]
fn test_missing_input_argument() {
    Command::cargo_bin("cashuff").unwrap().assert().failure();
}
