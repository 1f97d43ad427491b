//! Terminal output: turns engine style kinds into ANSI styling.

pub mod renderers;

pub use renderers::ConsoleStyle;
