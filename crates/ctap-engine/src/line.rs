use std::fmt;

/// Kind of a single TAP input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Unknown,
    Version,
    Plan,
    TestOk,
    TestNotOk,
    Diagnostic,
    Bail,
}

impl LineKind {
    pub fn is_test(self) -> bool {
        matches!(self, LineKind::TestOk | LineKind::TestNotOk)
    }

    pub fn as_str(self) -> &'static str {
        StyleKind::from(self).as_str()
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every style the output layer has to provide.
///
/// This is [`LineKind`] plus the synthetic kinds used for the lines the
/// processor appends at end of stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleKind {
    Unknown,
    Version,
    Plan,
    TestOk,
    TestNotOk,
    Diagnostic,
    Bail,
    SummaryOk,
    SummaryFail,
    PlanFail,
}

impl StyleKind {
    pub const ALL: [StyleKind; 10] = [
        StyleKind::Unknown,
        StyleKind::Version,
        StyleKind::Plan,
        StyleKind::TestOk,
        StyleKind::TestNotOk,
        StyleKind::Diagnostic,
        StyleKind::Bail,
        StyleKind::SummaryOk,
        StyleKind::SummaryFail,
        StyleKind::PlanFail,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StyleKind::Unknown => "unknown",
            StyleKind::Version => "version",
            StyleKind::Plan => "plan",
            StyleKind::TestOk => "ok",
            StyleKind::TestNotOk => "not_ok",
            StyleKind::Diagnostic => "diagnostic",
            StyleKind::Bail => "bail",
            StyleKind::SummaryOk => "summary_ok",
            StyleKind::SummaryFail => "summary_fail",
            StyleKind::PlanFail => "plan_fail",
        }
    }
}

impl From<LineKind> for StyleKind {
    fn from(kind: LineKind) -> Self {
        match kind {
            LineKind::Unknown => StyleKind::Unknown,
            LineKind::Version => StyleKind::Version,
            LineKind::Plan => StyleKind::Plan,
            LineKind::TestOk => StyleKind::TestOk,
            LineKind::TestNotOk => StyleKind::TestNotOk,
            LineKind::Diagnostic => StyleKind::Diagnostic,
            LineKind::Bail => StyleKind::Bail,
        }
    }
}

impl fmt::Display for StyleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    Todo,
    Skip,
    Other,
}

/// Trailing `# ...` comment on a test result line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub kind: DirectiveKind,
    /// Comment text after the `#`, whitespace trimmed
    pub text: String,
}

impl Directive {
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        let head = text
            .get(..4)
            .map(|s| s.to_ascii_uppercase())
            .unwrap_or_default();

        let kind = match head.as_str() {
            "TODO" => DirectiveKind::Todo,
            "SKIP" => DirectiveKind::Skip,
            _ => DirectiveKind::Other,
        };

        Self {
            kind,
            text: text.to_string(),
        }
    }
}

/// One input line after classification.
///
/// Only the fields relevant to `kind` are populated: plan bounds for
/// [`LineKind::Plan`], number/description/directive for test lines, and
/// `reason` for plans and bail-outs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    pub kind: LineKind,
    pub plan_first: Option<u64>,
    pub plan_last: Option<u64>,
    /// Explicit test number; `None` means the processor assigns the next one
    pub test_number: Option<u64>,
    pub description: Option<String>,
    pub directive: Option<Directive>,
    pub reason: Option<String>,
    pub raw_text: String,
}

impl ClassifiedLine {
    pub fn new(kind: LineKind, raw_text: &str) -> Self {
        Self {
            kind,
            plan_first: None,
            plan_last: None,
            test_number: None,
            description: None,
            directive: None,
            reason: None,
            raw_text: raw_text.to_string(),
        }
    }

    pub fn is_test(&self) -> bool {
        self.kind.is_test()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_line_kind_has_a_style() {
        for kind in [
            LineKind::Unknown,
            LineKind::Version,
            LineKind::Plan,
            LineKind::TestOk,
            LineKind::TestNotOk,
            LineKind::Diagnostic,
            LineKind::Bail,
        ] {
            assert!(StyleKind::ALL.contains(&StyleKind::from(kind)));
        }
    }

    #[test]
    fn only_result_lines_are_tests() {
        assert!(ClassifiedLine::new(LineKind::TestOk, "ok").is_test());
        assert!(ClassifiedLine::new(LineKind::TestNotOk, "not ok").is_test());
        assert!(!ClassifiedLine::new(LineKind::Plan, "1..1").is_test());
        assert!(!LineKind::Bail.is_test());
    }

    #[test]
    fn directive_kind_is_case_insensitive() {
        assert_eq!(Directive::parse("todo later").kind, DirectiveKind::Todo);
        assert_eq!(Directive::parse("SKIP no network").kind, DirectiveKind::Skip);
        assert_eq!(Directive::parse("Skipped: slow").kind, DirectiveKind::Skip);
        assert_eq!(Directive::parse("see issue 12").kind, DirectiveKind::Other);
        assert_eq!(Directive::parse("").kind, DirectiveKind::Other);
    }

    #[test]
    fn directive_keeps_trimmed_text() {
        let directive = Directive::parse("  TODO not implemented ");
        assert_eq!(directive.text, "TODO not implemented");
    }
}
