use crate::config::colour::defaults;
use clap::Args;

#[derive(Debug, Clone, Default, Args)]
pub struct DisplayArgs {
    /// Show test failures (suppress TAP successes)
    #[arg(short, long, env = "CTAP_FAILURES")]
    pub failures: bool,

    /// Show ✓✗ glyphs instead of 'ok/not ok' in TAP output
    #[arg(short, long, env = "CTAP_GLYPHS")]
    pub glyphs: bool,

    /// Append a Test::Harness-like summary of the test results
    #[arg(short, long, env = "CTAP_SUMMARY")]
    pub summary: bool,
}

impl DisplayArgs {
    pub fn resolve(&self) -> ctap_engine::RenderOptions {
        ctap_engine::RenderOptions {
            suppress_successes: self.failures,
            glyphs: self.glyphs,
            summary: self.summary,
        }
    }
}

/// Colour strings per line kind. An empty string means "use the default".
#[derive(Debug, Clone, Default, Args)]
pub struct ColourArgs {
    /// Colour to use for version lines
    #[arg(short = 'V', long, env = "CTAP_CVERSION", value_name = "COLOUR", default_value = defaults::VERSION)]
    pub cversion: String,

    /// Colour to use for plan lines
    #[arg(short = 'P', long, env = "CTAP_CPLAN", value_name = "COLOUR", default_value = defaults::PLAN)]
    pub cplan: String,

    /// Colour to use for test ok lines
    #[arg(short = 'O', long, env = "CTAP_COK", value_name = "COLOUR", default_value = defaults::OK)]
    pub cok: String,

    /// Colour to use for test fail/not ok lines
    #[arg(short = 'F', long, env = "CTAP_CFAIL", value_name = "COLOUR", default_value = defaults::FAIL)]
    pub cfail: String,

    /// Colour to use for diagnostic lines
    #[arg(short = 'D', long, env = "CTAP_CDIAG", value_name = "COLOUR", default_value = defaults::DIAGNOSTIC)]
    pub cdiag: String,

    /// Colour to use for bail out lines
    #[arg(short = 'B', long, env = "CTAP_CBAIL", value_name = "COLOUR", default_value = defaults::BAIL)]
    pub cbail: String,

    /// Colour to use for summary lines when all tests pass
    #[arg(long, env = "CTAP_CSUMMOK", value_name = "COLOUR", default_value = defaults::SUMMARY_OK)]
    pub csummok: String,

    /// Colour to use for summary lines when some tests fail
    #[arg(long, env = "CTAP_CSUMMFAIL", value_name = "COLOUR", default_value = defaults::SUMMARY_FAIL)]
    pub csummfail: String,

    /// Colour to use for plan failure lines
    #[arg(long, env = "CTAP_CPLANFAIL", value_name = "COLOUR", default_value = defaults::PLAN_FAIL)]
    pub cplanfail: String,
}

impl ColourArgs {
    /// Colour string configured for `kind`. Unknown lines are never configurable.
    pub fn get(&self, kind: ctap_engine::StyleKind) -> &str {
        use ctap_engine::StyleKind;

        match kind {
            StyleKind::Unknown => "",
            StyleKind::Version => &self.cversion,
            StyleKind::Plan => &self.cplan,
            StyleKind::TestOk => &self.cok,
            StyleKind::TestNotOk => &self.cfail,
            StyleKind::Diagnostic => &self.cdiag,
            StyleKind::Bail => &self.cbail,
            StyleKind::SummaryOk => &self.csummok,
            StyleKind::SummaryFail => &self.csummfail,
            StyleKind::PlanFail => &self.cplanfail,
        }
    }
}
