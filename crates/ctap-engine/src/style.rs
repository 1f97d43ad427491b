use crate::line::StyleKind;
use std::fmt;
use std::io::{self, Write};

/// Writes one line of text, styled, to an output sink.
pub trait Render {
    fn write_line(&self, out: &mut dyn Write, text: &str) -> io::Result<()>;

    fn write_fmt_line(&self, out: &mut dyn Write, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.write_line(out, &args.to_string())
    }
}

/// Lookup from a style kind to its renderer.
pub trait StyleResolver {
    type Renderer: Render;

    fn resolve(&self, kind: StyleKind) -> &Self::Renderer;
}

/// Renderer that writes text unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Plain;

impl Render for Plain {
    fn write_line(&self, out: &mut dyn Write, text: &str) -> io::Result<()> {
        writeln!(out, "{}", text)
    }
}

/// One renderer per [`StyleKind`].
///
/// Every kind is a named field, so a map cannot be built with a kind
/// missing and lookups never fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleMap<R> {
    pub unknown: R,
    pub version: R,
    pub plan: R,
    pub test_ok: R,
    pub test_not_ok: R,
    pub diagnostic: R,
    pub bail: R,
    pub summary_ok: R,
    pub summary_fail: R,
    pub plan_fail: R,
}

impl<R> StyleMap<R> {
    /// Build a map by asking `build` for every kind, stopping at the first error.
    pub fn try_from_fn<E>(mut build: impl FnMut(StyleKind) -> Result<R, E>) -> Result<Self, E> {
        Ok(Self {
            unknown: build(StyleKind::Unknown)?,
            version: build(StyleKind::Version)?,
            plan: build(StyleKind::Plan)?,
            test_ok: build(StyleKind::TestOk)?,
            test_not_ok: build(StyleKind::TestNotOk)?,
            diagnostic: build(StyleKind::Diagnostic)?,
            bail: build(StyleKind::Bail)?,
            summary_ok: build(StyleKind::SummaryOk)?,
            summary_fail: build(StyleKind::SummaryFail)?,
            plan_fail: build(StyleKind::PlanFail)?,
        })
    }

    pub fn from_fn(mut build: impl FnMut(StyleKind) -> R) -> Self {
        match Self::try_from_fn::<std::convert::Infallible>(|kind| Ok(build(kind))) {
            Ok(map) => map,
            Err(never) => match never {},
        }
    }

    pub fn get(&self, kind: StyleKind) -> &R {
        match kind {
            StyleKind::Unknown => &self.unknown,
            StyleKind::Version => &self.version,
            StyleKind::Plan => &self.plan,
            StyleKind::TestOk => &self.test_ok,
            StyleKind::TestNotOk => &self.test_not_ok,
            StyleKind::Diagnostic => &self.diagnostic,
            StyleKind::Bail => &self.bail,
            StyleKind::SummaryOk => &self.summary_ok,
            StyleKind::SummaryFail => &self.summary_fail,
            StyleKind::PlanFail => &self.plan_fail,
        }
    }
}

impl<R: Clone> StyleMap<R> {
    pub fn uniform(renderer: R) -> Self {
        Self::from_fn(|_| renderer.clone())
    }
}

impl<R: Render> StyleResolver for StyleMap<R> {
    type Renderer = R;

    fn resolve(&self, kind: StyleKind) -> &R {
        self.get(kind)
    }
}
