use crate::line::{ClassifiedLine, LineKind};
use regex::{NoExpand, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

pub const GLYPH_OK: &str = "\u{2713}";
pub const GLYPH_NOT_OK: &str = "\u{2717}";

static TEST_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(ok|not ok)\pZ*").unwrap());

/// Options applied when turning an input line into output text.
///
/// Fixed for the whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Drop `ok` lines from the output entirely
    pub suppress_successes: bool,
    /// Replace `ok`/`not ok` with ✓/✗ and mark bail-outs with ✗
    pub glyphs: bool,
    /// Append the pass/fail summary at end of stream
    pub summary: bool,
}

impl RenderOptions {
    /// Text to write for `line`, or `None` if the line is suppressed.
    pub fn render<'a>(&self, line: &'a ClassifiedLine) -> Option<Cow<'a, str>> {
        if self.suppress_successes && line.kind == LineKind::TestOk {
            return None;
        }

        if !self.glyphs {
            return Some(Cow::Borrowed(line.raw_text.as_str()));
        }

        let text = match line.kind {
            LineKind::TestOk => replace_result_token(&line.raw_text, GLYPH_OK),
            LineKind::TestNotOk => replace_result_token(&line.raw_text, GLYPH_NOT_OK),
            LineKind::Bail => Cow::Owned(format!("{} {}", GLYPH_NOT_OK, line.raw_text)),
            _ => Cow::Borrowed(line.raw_text.as_str()),
        };
        Some(text)
    }

    /// Prefix for appended summary lines: a glyph and a space, or nothing.
    pub fn summary_prefix(&self, passed: bool) -> &'static str {
        match (self.glyphs, passed) {
            (false, _) => "",
            (true, true) => "\u{2713} ",
            (true, false) => "\u{2717} ",
        }
    }
}

fn replace_result_token<'a>(text: &'a str, glyph: &str) -> Cow<'a, str> {
    let replacement = format!("{} ", glyph);
    TEST_PREFIX_REGEX.replace(text, NoExpand(&replacement))
}
