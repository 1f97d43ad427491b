use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn ctap() -> Command {
    let mut cmd = Command::cargo_bin("ctap").unwrap();
    cmd.env_remove("CI").env_remove("CTAP_COLOR");
    cmd
}

#[test]
fn test_help_lists_colour_grammar_and_exit_codes() {
    ctap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--cplanfail <COLOUR>"))
        .stdout(predicate::str::contains(
            "bold, italic, underscore, reverse, blink, concealed, fuzzy",
        ))
        .stdout(predicate::str::contains("1  the input could not be read"))
        .stdout(predicate::str::contains("5  the test run bailed out"));
}

#[test]
fn test_help_shows_defaults() {
    ctap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("red bold"))
        .stdout(predicate::str::contains("CTAP_COK"));
}

#[test]
fn test_bad_flag_value_exits_two() {
    ctap()
        .args(["--log-level", "loud"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid value 'loud'"));
}

#[test]
fn test_version_exits_zero() {
    ctap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ctap "));
}
