use std::fmt;

/// Outcome of a TAP run, ordered by severity.
///
/// The numeric codes are part of the command-line contract and must not be
/// renumbered. Variant order defines precedence: a more severe outcome is
/// never replaced by a milder one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ExitCode {
    #[default]
    Ok,
    TestFail,
    PlanFail,
    Bail,
}

impl ExitCode {
    pub const fn code(self) -> i32 {
        match self {
            ExitCode::Ok => 0,
            ExitCode::TestFail => 3,
            ExitCode::PlanFail => 4,
            ExitCode::Bail => 5,
        }
    }

    /// Raise to at least `floor`. Never lowers the current value.
    pub fn raise(&mut self, floor: ExitCode) {
        *self = (*self).max(floor);
    }

    pub fn is_success(self) -> bool {
        self == ExitCode::Ok
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.code()
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExitCode::Ok => "ok",
            ExitCode::TestFail => "test failure",
            ExitCode::PlanFail => "plan failure",
            ExitCode::Bail => "bail out",
        };
        write!(f, "{} ({})", label, self.code())
    }
}
