//! What `ctap` writes to stdout for each display flag.

use ctap_testing::{Sample, TestWorld, assertions};

fn run_sample(sample: Sample, args: &[&str]) -> String {
    let world = TestWorld::new().with_sample(sample);
    let mut full_args = args.to_vec();
    full_args.push(sample.file_name());

    let result = world.run(&full_args).unwrap();
    assert!(
        !assertions::has_ansi(result.stdout()),
        "unexpected colour on a pipe"
    );
    result.stdout
}

#[test]
fn test_passes_lines_through_unchanged() {
    let stdout = run_sample(Sample::VersionedFail, &[]);
    assert_eq!(stdout, Sample::VersionedFail.content());
}

#[test]
fn test_summary_after_failures() {
    let stdout = run_sample(Sample::SomeFail, &["--summary"]);

    insta::assert_snapshot!(stdout, @r"
    1..6
    ok 1 - connects
    not ok 2 - authenticates
    #   Failed test 'authenticates'
    #   at t/auth.t line 14.
    ok 3 - lists users
    ok 4 - creates user
    not ok 5 - deletes user # TODO soft delete not implemented
    ok 6 - disconnects
    FAILED tests: 2, 5
    Failed 2/6 tests, 66.67% ok
    ");
}

#[test]
fn test_summary_when_everything_passes() {
    let stdout = run_sample(Sample::AllPass, &["-s"]);

    assertions::assert_lines_in_order(&stdout, &["1..5", "ok 5", "Passed 5/5 tests, 100% ok"])
        .unwrap();
}

#[test]
fn test_plan_failure_is_reported_without_summary() {
    let stdout = run_sample(Sample::ShortPlan, &[]);

    insta::assert_snapshot!(stdout, @r"
    1..6
    ok 1 - first
    ok 2 - second
    ok 3 - third
    ok 4 - fourth
    Failed plan: only 4/6 planned tests seen
    ");
}

#[test]
fn test_no_tests_seen() {
    let stdout = run_sample(Sample::ZeroPlan, &["-s"]);

    insta::assert_snapshot!(stdout, @r"
    1..0 # Skipped: nothing to test on this platform
    Failed plan: no tests seen
    ");
}

#[test]
fn test_failures_only() {
    let stdout = run_sample(Sample::SomeFail, &["-f"]);

    assertions::assert_no_line(&stdout, |line| line.starts_with("ok")).unwrap();
    assertions::assert_lines_in_order(
        &stdout,
        &[
            "1..6",
            "not ok 2 - authenticates",
            "#   Failed test 'authenticates'",
            "not ok 5 - deletes user # TODO soft delete not implemented",
        ],
    )
    .unwrap();
}

#[test]
fn test_failures_only_still_counts_suppressed_tests() {
    let stdout = run_sample(Sample::SomeFail, &["-f", "-s"]);

    assert!(stdout.ends_with("Failed 2/6 tests, 66.67% ok\n"));
}

#[test]
fn test_glyphs() {
    let stdout = run_sample(Sample::BailOut, &["-gs"]);

    insta::assert_snapshot!(stdout, @r"
    1..5
    ✓ 1 - schema created
    ✗ 2 - fixtures loaded
    ✗ Bail out! database connection lost
    ✗ FAILED test: 2
    ✗ Failed 1/2 tests, 50.00% ok
    ✗ Failed plan: only 2/5 planned tests seen
    ");
}

#[test]
fn test_unnumbered_tests_are_counted() {
    let stdout = run_sample(Sample::Unnumbered, &["-s"]);

    assertions::assert_lines_in_order(
        &stdout,
        &["FAILED tests: 2, 4", "Failed 2/4 tests, 50.00% ok"],
    )
    .unwrap();
}

#[test]
fn test_reads_stdin_without_file_argument() {
    let world = TestWorld::new();
    let result = world
        .run_with_stdin(&["-s"], "1..2\nok 1\nok 2\n")
        .unwrap();

    assert!(result.success());
    assert_eq!(result.stdout(), "1..2\nok 1\nok 2\nPassed 2/2 tests, 100% ok\n");
}

#[test]
fn test_version_flag() {
    let world = TestWorld::new();
    let result = world.run(&["--version"]).unwrap();

    assert!(result.success());
    assert_eq!(
        result.stdout().trim(),
        format!("ctap {}", env!("CARGO_PKG_VERSION"))
    );
}
