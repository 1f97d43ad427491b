use crate::line::{ClassifiedLine, Directive, LineKind};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^TAP version (\d+)").unwrap());

/// `first..last`, optionally followed by `# reason`
static PLAN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.\.(\d+)\s*(?:#\s*(.*?)\s*)?$").unwrap());

/// `ok`/`not ok`, then optional number, description and `# directive`
static TEST_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(ok|not ok)(?:\pZ+(\d+))?(?:\pZ+([^#]+))?(?:\pZ+(#\pZ*(.*?)))?\pZ*?$").unwrap()
});

static BAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Bail out!(?:\pZ*(.*?))?\pZ*$").unwrap());

/// Classify one line of TAP.
///
/// Patterns are tried in a fixed order and the first match wins:
/// version, plan, test result, diagnostic, bail-out. Anything else is
/// [`LineKind::Unknown`]; this function never fails.
pub fn classify(text: &str) -> ClassifiedLine {
    if VERSION_REGEX.is_match(text) {
        return ClassifiedLine::new(LineKind::Version, text);
    }

    if let Some(caps) = PLAN_REGEX.captures(text) {
        return classify_plan(text, &caps);
    }

    if let Some(caps) = TEST_REGEX.captures(text) {
        return classify_test(text, &caps);
    }

    if text.starts_with('#') {
        return ClassifiedLine::new(LineKind::Diagnostic, text);
    }

    if let Some(caps) = BAIL_REGEX.captures(text) {
        let mut line = ClassifiedLine::new(LineKind::Bail, text);
        line.reason = non_empty(&caps, 1);
        return line;
    }

    ClassifiedLine::new(LineKind::Unknown, text)
}

fn classify_plan(text: &str, caps: &Captures<'_>) -> ClassifiedLine {
    let mut line = ClassifiedLine::new(LineKind::Plan, text);
    line.plan_first = Some(parse_number(caps.get(1).map_or("", |m| m.as_str())));
    line.plan_last = Some(parse_number(caps.get(2).map_or("", |m| m.as_str())));
    line.reason = non_empty(caps, 3);
    line
}

fn classify_test(text: &str, caps: &Captures<'_>) -> ClassifiedLine {
    let kind = match caps.get(1).map(|m| m.as_str()) {
        Some("not ok") => LineKind::TestNotOk,
        _ => LineKind::TestOk,
    };

    let mut line = ClassifiedLine::new(kind, text);
    line.test_number = caps.get(2).and_then(|m| m.as_str().parse().ok());
    line.description = caps.get(3).and_then(|m| {
        let desc = m.as_str().trim();
        let desc = desc.strip_prefix("- ").unwrap_or(desc).trim_start();
        (!desc.is_empty()).then(|| desc.to_string())
    });
    // Group 4 is the whole `#...` comment; group 5 the text after it
    if caps.get(4).is_some() {
        line.directive = Some(Directive::parse(caps.get(5).map_or("", |m| m.as_str())));
    }
    line
}

/// Digit runs that overflow fall back to zero rather than failing the line.
fn parse_number(digits: &str) -> u64 {
    digits.parse().unwrap_or(0)
}

fn non_empty(caps: &Captures<'_>, group: usize) -> Option<String> {
    caps.get(group)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}
