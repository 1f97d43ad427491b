use crate::exit::ExitCode;
use crate::line::{ClassifiedLine, LineKind};
use crate::summary::RunReport;

/// Counters accumulated over one TAP stream.
///
/// Updated once per line in arrival order and consumed by [`RunState::finish`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunState {
    test_counter: u64,
    failures: Vec<u64>,
    plan_last: u64,
    exit_code: ExitCode,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last assigned test number.
    pub fn test_counter(&self) -> u64 {
        self.test_counter
    }

    /// Failing test numbers in the order they were seen.
    pub fn failures(&self) -> &[u64] {
        &self.failures
    }

    pub fn plan_last(&self) -> u64 {
        self.plan_last
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }

    pub fn apply(&mut self, line: &ClassifiedLine) {
        if line.is_test() {
            self.apply_test(line);
            return;
        }

        match line.kind {
            LineKind::Plan => {
                self.plan_last = line.plan_last.unwrap_or(0);
                tracing::debug!(plan_last = self.plan_last, "plan declared");
            }
            LineKind::Bail => {
                self.exit_code.raise(ExitCode::Bail);
                tracing::debug!(reason = ?line.reason, "bail out");
            }
            _ => {}
        }
    }

    fn apply_test(&mut self, line: &ClassifiedLine) {
        // An explicit number resyncs the counter; 0 counts as absent
        self.test_counter = match line.test_number {
            Some(n) if n > 0 => n,
            _ => self.test_counter.saturating_add(1),
        };

        if line.kind == LineKind::TestNotOk {
            self.failures.push(self.test_counter);
            self.exit_code.raise(ExitCode::TestFail);
            tracing::debug!(test = self.test_counter, "test failed");
        }
    }

    /// A run with no tests, or with a count that differs from the plan.
    ///
    /// A missing plan leaves `plan_last` at 0, so any test count is a mismatch.
    pub fn plan_mismatch(&self) -> bool {
        self.test_counter == 0 || self.test_counter != self.plan_last
    }

    pub fn finish(mut self) -> RunReport {
        let plan_mismatch = self.plan_mismatch();
        if plan_mismatch {
            self.exit_code.raise(ExitCode::PlanFail);
        }

        RunReport {
            tests_seen: self.test_counter,
            failures: self.failures,
            plan_last: self.plan_last,
            plan_mismatch,
            exit_code: self.exit_code,
        }
    }
}
