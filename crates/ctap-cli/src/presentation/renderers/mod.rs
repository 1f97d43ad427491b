pub mod console;

pub use console::ConsoleStyle;
