//! Sample TAP streams.
//!
//! Each [`Sample`] covers one outcome the processor has to get right and
//! carries the exit code a correct run produces.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const ALL_PASS: &str = "\
1..5
ok 1 - config loads
ok 2 - parser accepts empty input
# parser checks done
ok 3 - writer flushes on drop
ok 4 - reader handles EOF # SKIP no fixture on this platform
ok 5
";

const SOME_FAIL: &str = "\
1..6
ok 1 - connects
not ok 2 - authenticates
#   Failed test 'authenticates'
#   at t/auth.t line 14.
ok 3 - lists users
ok 4 - creates user
not ok 5 - deletes user # TODO soft delete not implemented
ok 6 - disconnects
";

const SHORT_PLAN: &str = "\
1..6
ok 1 - first
ok 2 - second
ok 3 - third
ok 4 - fourth
";

const NO_PLAN: &str = "\
ok 1 - first
ok 2 - second
ok 3 - third
";

const BAIL_OUT: &str = "\
1..5
ok 1 - schema created
not ok 2 - fixtures loaded
Bail out! database connection lost
";

const VERSIONED_PASS: &str = "\
TAP version 13
1..3
ok 1 - alpha
ok 2 - beta
  ---
  duration_ms: 12
  ...
ok 3 - gamma
";

const VERSIONED_FAIL: &str = "\
TAP version 13
1..3
ok 1 - alpha
not ok 2 - beta
  ---
  message: 'expected 2, got 3'
  severity: fail
  ...
ok 3 - gamma
";

const UNNUMBERED: &str = "\
1..4
ok - first
not ok - second
ok
not ok
";

const ZERO_PLAN: &str = "\
1..0 # Skipped: nothing to test on this platform
";

const EMPTY: &str = "";

/// A TAP stream with a known outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    AllPass,
    SomeFail,
    ShortPlan,
    NoPlan,
    BailOut,
    VersionedPass,
    VersionedFail,
    Unnumbered,
    ZeroPlan,
    Empty,
}

impl Sample {
    pub const ALL: [Sample; 10] = [
        Sample::AllPass,
        Sample::SomeFail,
        Sample::ShortPlan,
        Sample::NoPlan,
        Sample::BailOut,
        Sample::VersionedPass,
        Sample::VersionedFail,
        Sample::Unnumbered,
        Sample::ZeroPlan,
        Sample::Empty,
    ];

    pub fn content(self) -> &'static str {
        match self {
            Sample::AllPass => ALL_PASS,
            Sample::SomeFail => SOME_FAIL,
            Sample::ShortPlan => SHORT_PLAN,
            Sample::NoPlan => NO_PLAN,
            Sample::BailOut => BAIL_OUT,
            Sample::VersionedPass => VERSIONED_PASS,
            Sample::VersionedFail => VERSIONED_FAIL,
            Sample::Unnumbered => UNNUMBERED,
            Sample::ZeroPlan => ZERO_PLAN,
            Sample::Empty => EMPTY,
        }
    }

    pub fn lines(self) -> Vec<&'static str> {
        self.content().lines().collect()
    }

    pub fn file_name(self) -> &'static str {
        match self {
            Sample::AllPass => "all_pass.tap",
            Sample::SomeFail => "some_fail.tap",
            Sample::ShortPlan => "short_plan.tap",
            Sample::NoPlan => "no_plan.tap",
            Sample::BailOut => "bail_out.tap",
            Sample::VersionedPass => "versioned_pass.tap",
            Sample::VersionedFail => "versioned_fail.tap",
            Sample::Unnumbered => "unnumbered.tap",
            Sample::ZeroPlan => "zero_plan.tap",
            Sample::Empty => "empty.tap",
        }
    }

    /// Process exit code of a correct run over this sample.
    pub fn expected_exit_code(self) -> i32 {
        match self {
            Sample::AllPass | Sample::VersionedPass => 0,
            Sample::SomeFail | Sample::VersionedFail | Sample::Unnumbered => 3,
            Sample::ShortPlan | Sample::NoPlan | Sample::ZeroPlan | Sample::Empty => 4,
            Sample::BailOut => 5,
        }
    }

    /// Number of `ok`/`not ok` lines.
    pub fn test_count(self) -> usize {
        self.lines()
            .iter()
            .filter(|l| l.starts_with("ok") || l.starts_with("not ok"))
            .count()
    }

    /// Write the sample into `dir` and return its path.
    pub fn write_to(self, dir: &Path) -> Result<PathBuf> {
        write_tap(dir, self.file_name(), self.content())
    }
}

/// Write arbitrary TAP text to `dir/name`.
pub fn write_tap(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, content)
        .with_context(|| format!("Failed to write TAP fixture {}", path.display()))?;
    Ok(path)
}
