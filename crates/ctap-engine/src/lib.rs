// Engine module - TAP classification and the per-stream state machine
// This layer knows nothing about terminals, files or flags; the CLI supplies
// a line source, a style map and an output sink

mod classify;
pub mod error;
mod exit;
mod line;
mod processor;
pub mod render;
mod state;
pub mod style;
mod summary;

pub use classify::classify;
pub use error::{Error, Result};
pub use exit::ExitCode;
pub use line::{ClassifiedLine, Directive, DirectiveKind, LineKind, StyleKind};
pub use processor::{StreamProcessor, process_lines, process_reader};
pub use render::{GLYPH_NOT_OK, GLYPH_OK, RenderOptions};
pub use state::RunState;
pub use style::{Plain, Render, StyleMap, StyleResolver};
pub use summary::{RunReport, TrailerLine, trailer_lines};
