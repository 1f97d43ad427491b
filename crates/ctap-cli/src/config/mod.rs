pub mod colour;

pub use colour::{ColourSpec, StyleError, defaults};

use crate::args::{Cli, ColourArgs};
use crate::presentation::ConsoleStyle;
use ctap_engine::{RenderOptions, StyleMap};
use std::path::PathBuf;

/// Where TAP lines come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

/// Everything a colourising run needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: InputSource,
    pub options: RenderOptions,
    pub styles: StyleMap<ConsoleStyle>,
}

impl RunConfig {
    pub fn from_cli(cli: &Cli, color_enabled: bool) -> Result<Self, StyleError> {
        let input = match &cli.tap_file {
            Some(path) => InputSource::File(path.clone()),
            None => InputSource::Stdin,
        };

        Ok(Self {
            input,
            options: cli.display.resolve(),
            styles: build_styles(&cli.colours, color_enabled)?,
        })
    }
}

/// Parse every configured colour string. Blank strings fall back to the default.
pub fn build_styles(
    colours: &ColourArgs,
    enabled: bool,
) -> Result<StyleMap<ConsoleStyle>, StyleError> {
    StyleMap::try_from_fn(|kind| {
        let configured = colours.get(kind).trim();
        let text = if configured.is_empty() {
            defaults::for_kind(kind)
        } else {
            configured
        };

        let parsed = ColourSpec::parse(kind, text)?;
        Ok(ConsoleStyle::new(parsed.to_style(), enabled))
    })
}
