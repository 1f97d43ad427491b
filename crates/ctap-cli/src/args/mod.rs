mod common;

pub use common::*;

use crate::types::{ColorChoice, LogLevel};
use clap::Parser;
use std::path::PathBuf;

const AFTER_HELP: &str = "\
Colour strings may be any of the following colour names:

  red, green, blue, yellow, cyan, magenta, white, black, gray, default

They may also be hex colour strings like \"#cc9900\" or \"#c90\" (with the
leading \"#\" optional).

Colour names or hex strings can also have any of the following modifiers
appended to them (space-separated):

  bold, italic, underscore, reverse, blink, concealed, fuzzy

(though how they work will depend on your terminal support)

Exit codes:

  0  all planned tests passed
  1  the input could not be read
  2  usage or configuration error
  3  one or more tests failed
  4  the number of tests seen did not match the plan (or no tests were seen)
  5  the test run bailed out";

#[derive(Debug, Parser)]
#[command(name = "ctap")]
#[command(about = "Colourise TAP (Test Anything Protocol) output", long_about = None)]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    #[command(flatten)]
    pub display: DisplayArgs,

    #[command(flatten)]
    pub colours: ColourArgs,

    /// When to colour output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto, env = "CTAP_COLOR")]
    pub color: ColorChoice,

    /// Diagnostic log level (written to stderr)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Output version information
    #[arg(long)]
    pub version: bool,

    /// TAP file to read (standard input if omitted)
    #[arg(value_name = "TAPFILE")]
    pub tap_file: Option<PathBuf>,
}
