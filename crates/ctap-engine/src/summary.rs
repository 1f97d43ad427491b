use crate::exit::ExitCode;
use crate::line::StyleKind;
use crate::render::RenderOptions;

/// Final state of a TAP run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub tests_seen: u64,
    pub failures: Vec<u64>,
    pub plan_last: u64,
    pub plan_mismatch: bool,
    pub exit_code: ExitCode,
}

impl RunReport {
    /// Share of passing tests, 0.0 when no tests were seen.
    pub fn pass_percentage(&self) -> f64 {
        if self.tests_seen == 0 {
            return 0.0;
        }
        let failed = self.failures.len() as f64;
        let total = self.tests_seen as f64;
        (total - failed) * 100.0 / total
    }

    /// Failing test numbers as `1, 4, 9`.
    pub fn failure_list(&self) -> String {
        self.failures
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A line appended after the input stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailerLine {
    pub style: StyleKind,
    pub text: String,
}

impl TrailerLine {
    fn new(style: StyleKind, text: String) -> Self {
        Self { style, text }
    }
}

/// Lines to append once the stream has ended.
///
/// The summary block is only produced when `options.summary` is set; the
/// plan failure line is produced whenever the plan did not match.
pub fn trailer_lines(report: &RunReport, options: &RenderOptions) -> Vec<TrailerLine> {
    let mut lines = Vec::new();

    if options.summary {
        if !report.failures.is_empty() {
            let prefix = options.summary_prefix(false);
            let plural = if report.failures.len() > 1 { "s" } else { "" };
            lines.push(TrailerLine::new(
                StyleKind::SummaryFail,
                format!("{}FAILED test{}: {}", prefix, plural, report.failure_list()),
            ));
            lines.push(TrailerLine::new(
                StyleKind::SummaryFail,
                format!(
                    "{}Failed {}/{} tests, {:.2}% ok",
                    prefix,
                    report.failures.len(),
                    report.tests_seen,
                    report.pass_percentage()
                ),
            ));
        } else if !report.plan_mismatch {
            lines.push(TrailerLine::new(
                StyleKind::SummaryOk,
                format!(
                    "{}Passed {}/{} tests, 100% ok",
                    options.summary_prefix(true),
                    report.tests_seen,
                    report.tests_seen
                ),
            ));
        }
    }

    if report.plan_mismatch {
        let prefix = options.summary_prefix(false);
        let text = if report.tests_seen == 0 {
            format!("{}Failed plan: no tests seen", prefix)
        } else {
            format!(
                "{}Failed plan: only {}/{} planned tests seen",
                prefix, report.tests_seen, report.plan_last
            )
        };
        lines.push(TrailerLine::new(StyleKind::PlanFail, text));
    }

    lines
}
