//! Exit status of `ctap` for every sample stream, read from a file and from stdin.

use ctap_testing::{Sample, TestWorld, assertions};

#[test]
fn test_every_sample_file_exits_with_expected_code() {
    for sample in Sample::ALL {
        let world = TestWorld::new().with_sample(sample);
        let result = world.run(&[sample.file_name()]).unwrap();

        assertions::assert_exit_code(&result, sample.expected_exit_code())
            .unwrap_or_else(|e| panic!("{:?}: {}", sample, e));
    }
}

#[test]
fn test_every_sample_on_stdin_exits_with_expected_code() {
    let world = TestWorld::new();

    for sample in Sample::ALL {
        let result = world.run_with_stdin(&[], sample.content()).unwrap();

        assertions::assert_exit_code(&result, sample.expected_exit_code())
            .unwrap_or_else(|e| panic!("{:?}: {}", sample, e));
    }
}

#[test]
fn test_display_flags_do_not_change_exit_code() {
    for sample in Sample::ALL {
        let world = TestWorld::new().with_sample(sample);
        let result = world.run(&["-fgs", sample.file_name()]).unwrap();

        assertions::assert_exit_code(&result, sample.expected_exit_code())
            .unwrap_or_else(|e| panic!("{:?}: {}", sample, e));
    }
}

#[test]
fn test_bail_out_beats_plan_mismatch() {
    // 2 of 5 planned tests seen, one failing, then a bail out
    let world = TestWorld::new();
    let result = world
        .run_with_stdin(&[], Sample::BailOut.content())
        .unwrap();

    assert_eq!(result.code(), Some(5));
}

#[test]
fn test_plan_mismatch_beats_test_failure() {
    let world = TestWorld::new();
    let result = world
        .run_with_stdin(&[], "1..3\nok 1\nnot ok 2\n")
        .unwrap();

    assert_eq!(result.code(), Some(4));
}

#[test]
fn test_missing_file_is_an_error() {
    let world = TestWorld::new();
    let result = world.run(&["does_not_exist.tap"]).unwrap();

    assert_eq!(result.code(), Some(1));
    assert!(result.stderr().starts_with("Error: Failed to open TAP file"));
    assert!(result.stderr().contains("does_not_exist.tap"));
    assert!(result.stdout().is_empty());
}

#[test]
fn test_unknown_flag_is_a_usage_error() {
    let world = TestWorld::new();
    let result = world.run(&["--frobnicate"]).unwrap();

    assert_eq!(result.code(), Some(2));
}

#[test]
fn test_invalid_utf8_on_stdin_does_not_stop_the_run() {
    let world = TestWorld::new();
    let result = world
        .run_with_stdin(&["-s"], &b"1..2\nok 1\n# \xff\xfe binary\nnot ok 2\n"[..])
        .unwrap();

    assert_eq!(result.code(), Some(3));
    assertions::assert_lines_in_order(
        result.stdout(),
        &["ok 1", "not ok 2", "FAILED test: 2", "Failed 1/2 tests, 50.00% ok"],
    )
    .unwrap();
}

#[test]
fn test_absolute_file_path() {
    let world = TestWorld::new().with_sample(Sample::AllPass);
    let path = world.temp_dir().join(Sample::AllPass.file_name());
    let result = world.run(&[path.to_str().unwrap()]).unwrap();

    assertions::assert_exit_code(&result, 0).unwrap();
    assert_eq!(result.stdout(), Sample::AllPass.content());
}
