//! Exit-code and error-message behaviour of the `recase` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn recase() -> Command {
    Command::cargo_bin("recase").expect("binary builds")
}

#[test]
fn missing_from_format_exits_two_with_suggestions() {
    recase()
        .args(["convert", "the_fox", "--to", "pascal"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No from format"))
        .stderr(predicate::str::contains("--from"));
}

#[test]
fn missing_to_format_exits_two() {
    recase()
        .args(["convert", "the_fox", "--from", "snake"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No to format"));
}

#[test]
fn malformed_identifier_exits_two() {
    recase()
        .args(["convert", "the fox", "-f", "snake", "-t", "camel"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn bad_batch_prints_nothing_to_stdout() {
    // Batch conversion fails before emitting any line, so a pipe never sees
    // a half-converted list.
    recase()
        .args(["convert", "good_one", "bad one", "-f", "snake", "-t", "camel"])
        .assert()
        .code(2)
        .stdout("");
}

#[test]
fn unknown_format_flag_is_a_clap_error() {
    recase()
        .args(["convert", "x", "--from", "shouty", "--to", "camel"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("shouty"));
}

#[test]
fn missing_explicit_config_exits_four() {
    recase()
        .args([
            "--config",
            "/definitely/not/here/recase.toml",
            "formats",
        ])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn bad_config_format_name_exits_two() {
    let path = std::env::temp_dir().join("recase-test-bad-format.toml");
    std::fs::write(&path, "[defaults]\nfrom = \"shouty\"\nto = \"camel\"\n").unwrap();

    recase()
        .args(["--config", path.to_str().unwrap(), "convert", "the_fox"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unsupported format 'shouty'"));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn unparseable_config_exits_four() {
    let path = std::env::temp_dir().join("recase-test-broken.toml");
    std::fs::write(&path, "this is not toml [").unwrap();

    recase()
        .args(["--config", path.to_str().unwrap(), "formats"])
        .assert()
        .code(4);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn no_arguments_shows_help_and_exits_two() {
    recase()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn quiet_and_verbose_conflict_is_rejected() {
    recase()
        .args(["--quiet", "--verbose", "formats"])
        .assert()
        .code(2);
}
