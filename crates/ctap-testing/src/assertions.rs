//! Custom assertions for ctap-specific validation.
//!
//! Provides high-level assertions that make tests more readable:
//! - Exit code checks with the captured output in the failure message
//! - Relative order of rendered lines
//! - Presence or absence of ANSI styling

use anyhow::Result;

use crate::world::CliResult;

/// Assert that the process exited with `expected`.
pub fn assert_exit_code(result: &CliResult, expected: i32) -> Result<()> {
    if result.code() != Some(expected) {
        anyhow::bail!(
            "Expected exit code {}, got {:?}\n--- stdout ---\n{}\n--- stderr ---\n{}",
            expected,
            result.code(),
            result.stdout(),
            result.stderr()
        );
    }

    Ok(())
}

/// Assert that `expected` lines all appear in `output`, in the same relative order.
pub fn assert_lines_in_order(output: &str, expected: &[&str]) -> Result<()> {
    let mut remaining = output.lines();

    for (i, wanted) in expected.iter().enumerate() {
        if !remaining.any(|line| line == *wanted) {
            anyhow::bail!(
                "Line {} ({:?}) not found in order in output:\n{}",
                i,
                wanted,
                output
            );
        }
    }

    Ok(())
}

/// Assert that no line of `output` satisfies `predicate`.
pub fn assert_no_line(output: &str, predicate: impl Fn(&str) -> bool) -> Result<()> {
    if let Some(line) = output.lines().find(|&line| predicate(line)) {
        anyhow::bail!("Unexpected line {:?} in output:\n{}", line, output);
    }

    Ok(())
}

/// Whether `text` contains an ANSI escape sequence.
pub fn has_ansi(text: &str) -> bool {
    text.contains("\u{1b}[")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_in_order_accepts_subsequence() {
        let output = "a\nb\nc\nd\n";
        assert!(assert_lines_in_order(output, &["a", "c", "d"]).is_ok());
        assert!(assert_lines_in_order(output, &[]).is_ok());
    }

    #[test]
    fn lines_in_order_rejects_wrong_order() {
        let output = "a\nb\nc\n";
        assert!(assert_lines_in_order(output, &["c", "a"]).is_err());
        assert!(assert_lines_in_order(output, &["x"]).is_err());
    }

    #[test]
    fn no_line_matches() {
        assert!(assert_no_line("ok 1\nnot ok 2\n", |l| l.starts_with("ok")).is_err());
        assert!(assert_no_line("not ok 2\n", |l| l.starts_with("ok")).is_ok());
    }

    #[test]
    fn detects_ansi() {
        assert!(has_ansi("\u{1b}[32mok 1\u{1b}[0m"));
        assert!(!has_ansi("ok 1"));
    }
}
