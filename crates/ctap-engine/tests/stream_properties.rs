//! Property-based tests for the stream state machine
//!
//! These hold for any sequence of TAP lines:
//! - The exit code never decreases while lines are processed
//! - A bail out always ends the run with exit code 5
//! - Suppressing successes removes exactly the `ok` lines, in order
//! - Explicit test numbers are recorded as failures verbatim

use ctap_engine::{
    ExitCode, LineKind, Plain, RenderOptions, StreamProcessor, StyleMap, classify, process_lines,
};
use proptest::prelude::*;

/// One line of a plausible TAP stream.
fn tap_line() -> impl Strategy<Value = String> {
    prop_oneof![
        (1u32..20).prop_map(|n| format!("ok {} - case {}", n, n)),
        (1u32..20).prop_map(|n| format!("not ok {} - case {}", n, n)),
        Just("ok".to_string()),
        Just("not ok".to_string()),
        (0u32..20).prop_map(|n| format!("1..{}", n)),
        "[a-z ]{0,12}".prop_map(|s| format!("# {}", s)),
        Just("TAP version 13".to_string()),
        "[a-z ]{0,12}".prop_map(|s| format!("  {}", s)),
        Just("Bail out! stopped".to_string()),
    ]
}

fn tap_stream() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(tap_line(), 0..40)
}

proptest! {
    #[test]
    fn prop_exit_code_never_decreases(lines in tap_stream()) {
        let styles = StyleMap::uniform(Plain);
        let options = RenderOptions::default();
        let mut processor = StreamProcessor::new(&styles, &options, std::io::sink());

        let mut previous = ExitCode::Ok;
        for line in &lines {
            processor.process_line(line).unwrap();
            let current = processor.state().exit_code();
            prop_assert!(current >= previous);
            previous = current;
        }

        let report = processor.finish().unwrap();
        prop_assert!(report.exit_code >= previous);
    }

    #[test]
    fn prop_bail_out_always_exits_five(
        before in tap_stream(),
        after in tap_stream(),
    ) {
        let lines: Vec<String> = before
            .into_iter()
            .chain(std::iter::once("Bail out!".to_string()))
            .chain(after)
            .collect();

        let report = process_lines(
            &lines,
            &StyleMap::uniform(Plain),
            &RenderOptions::default(),
            std::io::sink(),
        )
        .unwrap();

        prop_assert_eq!(report.exit_code, ExitCode::Bail);
    }

    #[test]
    fn prop_suppression_drops_only_ok_lines(lines in tap_stream()) {
        let options = RenderOptions {
            suppress_successes: true,
            ..RenderOptions::default()
        };
        let mut out = Vec::new();
        process_lines(&lines, &StyleMap::uniform(Plain), &options, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        let expected: Vec<&str> = lines
            .iter()
            .map(String::as_str)
            .filter(|line| classify(line).kind != LineKind::TestOk)
            .collect();
        let written: Vec<&str> = out.lines().take(expected.len()).collect();

        prop_assert_eq!(written, expected);
    }

    #[test]
    fn prop_explicit_numbers_are_recorded(numbers in prop::collection::vec(1u64..1000, 1..20)) {
        let lines: Vec<String> = numbers
            .iter()
            .map(|n| format!("not ok {} - failing", n))
            .collect();

        let report = process_lines(
            &lines,
            &StyleMap::uniform(Plain),
            &RenderOptions::default(),
            std::io::sink(),
        )
        .unwrap();

        prop_assert_eq!(report.failures, numbers);
        prop_assert_eq!(report.exit_code, ExitCode::PlanFail);
    }
}
