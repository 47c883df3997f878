use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::PathBuf;
use std::process::Command;

fn write_source(name: &str, contents: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("exprc-cli-{name}.expr"));
    std::fs::write(&path, contents).expect("writing test source file");

    path
}

#[test]
fn evaluates_file() -> Result<(), Box<dyn std::error::Error>> {
    let path = write_source("evaluates-file", "1+2*3");

    let mut cmd = Command::cargo_bin("exprc")?;
    cmd.arg(&path);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("7"));

    Ok(())
}

#[test]
fn lexical_error_exits_65() -> Result<(), Box<dyn std::error::Error>> {
    let path = write_source("lexical-error", "\"abc");

    let mut cmd = Command::cargo_bin("exprc")?;
    cmd.arg(&path);
    cmd.assert()
        .code(65)
        .stderr(predicate::str::contains("Unterminated string."));

    Ok(())
}

#[test]
fn parse_error_exits_65() -> Result<(), Box<dyn std::error::Error>> {
    let path = write_source("parse-error", "(1+2");

    let mut cmd = Command::cargo_bin("exprc")?;
    cmd.arg(&path);
    cmd.assert()
        .code(65)
        .stderr(predicate::str::contains("Expect ')' after expression."));

    Ok(())
}

#[test]
fn runtime_error_exits_70() -> Result<(), Box<dyn std::error::Error>> {
    let path = write_source("runtime-error", "1-\"a\"");

    let mut cmd = Command::cargo_bin("exprc")?;
    cmd.arg(&path);
    cmd.assert()
        .code(70)
        .stderr(predicate::str::contains("Operands must be numbers."));

    Ok(())
}

#[test]
fn too_many_arguments_exits_64() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("exprc")?;
    cmd.arg("one.expr").arg("two.expr");
    cmd.assert()
        .code(64)
        .stderr(predicate::str::contains("Usage"));

    Ok(())
}

#[test]
fn missing_file_exits_74() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("exprc")?;
    cmd.arg("does-not-exist.expr");
    cmd.assert().code(74);

    Ok(())
}

#[test]
fn token_dump() -> Result<(), Box<dyn std::error::Error>> {
    let path = write_source("token-dump", "1+2");

    let mut cmd = Command::cargo_bin("exprc")?;
    cmd.arg("--tokens").arg(&path);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Number 1 1"))
        .stdout(predicate::str::contains("Plus + nil"))
        .stdout(predicate::str::contains("Eof"));

    Ok(())
}

#[test]
fn prints_ast() -> Result<(), Box<dyn std::error::Error>> {
    let path = write_source("prints-ast", "1+2*3");

    let mut cmd = Command::cargo_bin("exprc")?;
    cmd.arg("--print-ast").arg(&path);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("(+ 1 (* 2 3))"));

    Ok(())
}
