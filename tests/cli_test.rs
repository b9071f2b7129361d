//! Integration tests for the command-line interface.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn setup_project(config: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join(".biorecipe");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.yml"), config).unwrap();
    temp
}

/// A command isolated from the caller's environment.
fn biorecipe(dir: &std::path::Path) -> Command {
    let mut cmd = Command::new(cargo_bin("biorecipe"));
    cmd.current_dir(dir)
        .env_remove("BIORECIPE_HOST")
        .env_remove("BIORECIPE_USER")
        .env_remove("BIORECIPE_PORT")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

const BEDTOOLS_CONFIG: &str = r#"
host:
  address: bio.example.org
  user: ubuntu
paths:
  system_install: /opt/bio
recipes:
  bedtools:
    description: Genome arithmetic
    version: 2.31
    url: https://example.org/bedtools-{version}.tar.gz
    guard: bedtools
    procedure:
      kind: configure_make
"#;

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    biorecipe(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Idempotent installer recipes"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    biorecipe(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_requires_a_subcommand() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    biorecipe(temp.path()).assert().failure();
    Ok(())
}

#[test]
fn list_shows_builtin_recipes() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    biorecipe(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("emboss"))
        .stdout(predicate::str::contains("6.3.1"))
        .stdout(predicate::str::contains("pgdspider"))
        .stdout(predicate::str::contains("guard: PGDSpider2.sh"));
    Ok(())
}

#[test]
fn list_json_is_parseable() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(BEDTOOLS_CONFIG);
    let output = biorecipe(temp.path()).args(["list", "--json"]).output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let names: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["bedtools", "emboss", "pgdspider"]);
    assert_eq!(
        value[0]["url"],
        "https://example.org/bedtools-2.31.tar.gz"
    );
    Ok(())
}

#[test]
fn invalid_config_exits_with_config_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("paths:\n  system_install: relative/dir\n");
    biorecipe(temp.path())
        .arg("list")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("absolute"));
    Ok(())
}

#[test]
fn install_without_names_is_a_config_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    biorecipe(temp.path())
        .args(["install", "--host", "bio-1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--all"));
    Ok(())
}

#[test]
fn unknown_recipe_is_a_config_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    biorecipe(temp.path())
        .args(["install", "blast", "--host", "bio-1", "--dry-run"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("blast"));
    Ok(())
}

#[test]
fn check_without_host_is_a_config_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    biorecipe(temp.path())
        .arg("check")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No target host"));
    Ok(())
}

#[test]
fn dry_run_prints_plan_without_connecting() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    biorecipe(temp.path())
        .args(["install", "emboss", "--host", "bio-1", "--user", "ubuntu", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ubuntu@bio-1 (dry run)"))
        .stdout(predicate::str::contains("emboss 6.3.1 planned"))
        .stdout(predicate::str::contains("1 recipe(s) planned"))
        .stdout(predicate::str::contains("$ which embossversion"))
        .stdout(predicate::str::contains("EMBOSS-6.3.1.tar.gz"))
        .stdout(predicate::str::contains("sudo -n make install"));
    Ok(())
}

#[test]
fn dry_run_plan_survives_quiet_logging() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    biorecipe(temp.path())
        .env("RUST_LOG", "warn")
        .args(["install", "pgdspider", "--host", "bio-1", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PGDSpider_2.0.1.2.zip"))
        .stdout(predicate::str::contains("chmod a+x PGDSpider2.sh"));
    Ok(())
}

#[test]
fn dry_run_uses_config_host_and_paths() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(BEDTOOLS_CONFIG);
    biorecipe(temp.path())
        .args(["install", "bedtools", "--dry-run", "--no-sudo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ubuntu@bio.example.org (dry run)"))
        .stdout(predicate::str::contains("--prefix=/opt/bio"))
        .stdout(predicate::str::contains("test -x /opt/bio/bin/bedtools"))
        .stdout(predicate::str::contains("sudo").not());
    Ok(())
}

#[test]
fn explicit_config_must_exist() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    biorecipe(temp.path())
        .args(["--config", "missing.yml", "list"])
        .assert()
        .code(2);
    Ok(())
}

#[test]
fn completions_generate_script() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    biorecipe(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("biorecipe"));
    Ok(())
}
