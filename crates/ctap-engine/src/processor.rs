use crate::classify::classify;
use crate::error::{Error, Result};
use crate::line::{ClassifiedLine, StyleKind};
use crate::render::RenderOptions;
use crate::state::RunState;
use crate::style::{Render, StyleResolver};
use crate::summary::{RunReport, trailer_lines};
use std::borrow::Cow;
use std::io::{BufRead, Write};

/// Streams TAP lines through classification, state tracking and rendering.
///
/// Each line is rendered and applied to the run state before the next one is
/// accepted. [`StreamProcessor::finish`] appends the trailer lines and hands
/// back the final [`RunReport`].
pub struct StreamProcessor<'a, S, W> {
    styles: &'a S,
    options: &'a RenderOptions,
    out: W,
    state: RunState,
}

impl<'a, S, W> StreamProcessor<'a, S, W>
where
    S: StyleResolver,
    W: Write,
{
    pub fn new(styles: &'a S, options: &'a RenderOptions, out: W) -> Self {
        Self {
            styles,
            options,
            out,
            state: RunState::new(),
        }
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// Classify, render and record one input line.
    pub fn process_line(&mut self, text: &str) -> Result<ClassifiedLine> {
        let line = classify(text);
        tracing::trace!(kind = %line.kind, text, "line");

        if let Some(rendered) = self.options.render(&line) {
            self.styles
                .resolve(StyleKind::from(line.kind))
                .write_line(&mut self.out, &rendered)
                .map_err(Error::Write)?;
        }
        self.state.apply(&line);

        Ok(line)
    }

    /// End the stream: settle the exit code and write the trailer lines.
    pub fn finish(mut self) -> Result<RunReport> {
        let report = self.state.finish();

        for line in trailer_lines(&report, self.options) {
            self.styles
                .resolve(line.style)
                .write_line(&mut self.out, &line.text)
                .map_err(Error::Write)?;
        }
        self.out.flush().map_err(Error::Write)?;

        tracing::debug!(
            tests_seen = report.tests_seen,
            failures = report.failures.len(),
            plan_last = report.plan_last,
            exit_code = %report.exit_code,
            "stream finished"
        );
        Ok(report)
    }
}

/// Process an in-memory sequence of lines.
pub fn process_lines<I, S, W>(
    lines: I,
    styles: &S,
    options: &RenderOptions,
    out: W,
) -> Result<RunReport>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    S: StyleResolver,
    W: Write,
{
    let mut processor = StreamProcessor::new(styles, options, out);
    for line in lines {
        processor.process_line(line.as_ref())?;
    }
    processor.finish()
}

/// Process every line of `reader`.
///
/// Lines that are not valid UTF-8 are decoded lossily and processed like any
/// other. A read failure aborts the run without writing any trailer lines.
pub fn process_reader<R, S, W>(
    mut reader: R,
    styles: &S,
    options: &RenderOptions,
    out: W,
) -> Result<RunReport>
where
    R: BufRead,
    S: StyleResolver,
    W: Write,
{
    let mut processor = StreamProcessor::new(styles, options, out);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).map_err(Error::Read)? == 0 {
            break;
        }
        processor.process_line(&decode_line(&buf))?;
    }
    processor.finish()
}

/// Strip the line ending; bytes that are not UTF-8 become U+FFFD.
fn decode_line(raw: &[u8]) -> Cow<'_, str> {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw)
}
