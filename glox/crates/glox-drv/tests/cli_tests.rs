//! CLI end-to-end tests
//!
//! These tests run the `glox` binary and check what it prints and how it
//! exits in file mode, interactive mode, and on bad input.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get the path to the fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Get the path to the glox binary
fn glox_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_glox"))
}

/// A `glox` command that ignores the caller's environment and config files.
fn glox() -> Command {
    let mut cmd = Command::new(glox_bin());
    cmd.env_remove("GLOX_VERBOSE")
        .env_remove("GLOX_CONFIG")
        .env_remove("GLOX_NO_COLOR")
        .env("HOME", "/nonexistent/glox-home")
        .env("XDG_CONFIG_HOME", "/nonexistent/glox-config");
    cmd
}

#[test]
fn test_cli_help() {
    glox()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage").and(predicate::str::contains("glox")));
}

#[test]
fn test_cli_version() {
    glox()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_too_many_scripts_is_usage_error() {
    glox()
        .args(["a.lox", "b.lox"])
        .assert()
        .code(64)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_unknown_flag_is_usage_error() {
    glox().arg("--bogus").assert().code(64);
}

#[test]
fn test_cli_scan_file() {
    glox()
        .arg(fixtures_dir().join("hello.lox"))
        .assert()
        .success()
        .stdout(
            "[2]print:Print(nil)\n\
             [2]\"Hello, Lox!\":String(Hello, Lox!)\n\
             [2];:Semicolon(nil)\n\
             [3]:Eof(nil)\n",
        )
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_cli_scan_program() {
    glox()
        .arg(fixtures_dir().join("fib.lox"))
        .assert()
        .success()
        .stdout(predicate::str::contains("[1]fun:Fun(nil)"))
        .stdout(predicate::str::contains("[2]<=:LessEqual(nil)"))
        .stdout(predicate::str::contains("[6]10.5:Number(10.5)"))
        .stdout(predicate::str::ends_with("[7]:Eof(nil)\n"));
}

#[test]
fn test_cli_unexpected_character_exits_65() {
    glox()
        .arg(fixtures_dir().join("bad_char.lox"))
        .assert()
        .code(65)
        .stdout(predicate::str::is_empty())
        .stderr("[line 2] Error: unexpected character: @\n");
}

#[test]
fn test_cli_unterminated_string_exits_65() {
    glox()
        .arg(fixtures_dir().join("unterminated.lox"))
        .assert()
        .code(65)
        .stderr(predicate::str::starts_with(
            "[line 3] Error: incomplete string: \"never\nclosed;\n",
        ));
}

#[test]
fn test_cli_missing_file_exits_74() {
    glox()
        .arg("does_not_exist.lox")
        .assert()
        .code(74)
        .stderr(predicate::str::contains("error: could not read does_not_exist.lox"));
}

#[test]
fn test_cli_invalid_utf8_is_scan_error() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("latin1.lox");
    std::fs::write(&script, b"print 1;\n\xff;\n").unwrap();

    glox()
        .arg(&script)
        .assert()
        .code(65)
        .stdout(predicate::str::is_empty())
        .stderr("[line 2] Error: unexpected character: \u{FFFD}\n");
}

#[test]
fn test_cli_json_output() {
    let output = glox()
        .args(["--format", "json"])
        .arg(fixtures_dir().join("hello.lox"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let tokens: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[1]["literal"]["String"], "Hello, Lox!");
    assert_eq!(tokens[3]["kind"], "Eof");
}

#[test]
fn test_cli_json_diagnostic() {
    glox()
        .args(["-f", "json"])
        .arg(fixtures_dir().join("bad_char.lox"))
        .assert()
        .code(65)
        .stderr(predicate::str::contains("\"code\":\"E1001\""))
        .stderr(predicate::str::contains("\"line\":2"));
}

#[test]
fn test_cli_prompt_session() {
    glox()
        .write_stdin("print 1;\n@\nnil\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "Lox (glox) {}\n>>> ",
            env!("CARGO_PKG_VERSION")
        )))
        .stdout(predicate::str::contains("[1]print:Print(nil)"))
        .stdout(predicate::str::contains("[1]nil:Nil(nil)"))
        .stdout(predicate::str::ends_with(">>> "))
        .stderr("[line 1] Error: unexpected character: @\n");
}

#[test]
fn test_cli_prompt_empty_input() {
    glox().write_stdin("").assert().success();
}

#[test]
fn test_cli_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.toml");
    std::fs::write(
        &config,
        "[repl]\nprompt = \"lox> \"\nbanner = false\n\n[output]\nformat = \"json\"\n",
    )
    .unwrap();

    glox()
        .arg("--config")
        .arg(&config)
        .write_stdin("x\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("lox> {"))
        .stdout(predicate::str::contains("\"kind\":\"Identifier\""));
}

#[test]
fn test_cli_config_from_env() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("env.toml");
    std::fs::write(&config, "[repl]\nbanner = false\nprompt = \"\"\n").unwrap();

    glox()
        .env("GLOX_CONFIG", &config)
        .write_stdin("1\n")
        .assert()
        .success()
        .stdout("[1]1:Number(1)\n[1]:Eof(nil)\n");
}

#[test]
fn test_cli_format_flag_overrides_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("json.toml");
    std::fs::write(&config, "[output]\nformat = \"json\"\n").unwrap();

    glox()
        .arg("--config")
        .arg(&config)
        .args(["--format", "plain"])
        .arg(fixtures_dir().join("hello.lox"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[2]print:Print(nil)\n"));
}

#[test]
fn test_cli_config_in_current_dir() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("glox.toml"), "[repl]\nbanner = false\n").unwrap();

    glox()
        .current_dir(dir.path())
        .write_stdin("")
        .assert()
        .success()
        .stdout(">>> ");
}

#[test]
fn test_cli_missing_config_exits_78() {
    glox()
        .args(["--config", "/nonexistent/glox.toml"])
        .arg(fixtures_dir().join("hello.lox"))
        .assert()
        .code(78)
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_cli_malformed_config_exits_78() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("broken.toml");
    std::fs::write(&config, "[repl\nprompt = ").unwrap();

    glox()
        .arg("--config")
        .arg(&config)
        .arg(fixtures_dir().join("hello.lox"))
        .assert()
        .code(78);
}

#[test]
fn test_cli_verbose_logs_to_stderr() {
    glox()
        .args(["--verbose", "--no-color"])
        .arg(fixtures_dir().join("hello.lox"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[2]print:Print(nil)"))
        .stderr(predicate::str::contains("DEBUG").and(predicate::str::contains("read script")));
}
