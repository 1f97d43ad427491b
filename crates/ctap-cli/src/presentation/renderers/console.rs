use ctap_engine::Render;
use owo_colors::{OwoColorize, Style};
use std::io::{self, Write};

/// Console renderer for one line kind.
///
/// With colour disabled the text is written untouched, so piping to a file
/// never leaves escape codes behind.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleStyle {
    style: Style,
    enabled: bool,
}

impl ConsoleStyle {
    pub fn new(style: Style, enabled: bool) -> Self {
        Self { style, enabled }
    }

    pub fn plain() -> Self {
        Self::new(Style::new(), false)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Render for ConsoleStyle {
    fn write_line(&self, out: &mut dyn Write, text: &str) -> io::Result<()> {
        if self.enabled {
            writeln!(out, "{}", text.style(self.style))
        } else {
            writeln!(out, "{}", text)
        }
    }
}
