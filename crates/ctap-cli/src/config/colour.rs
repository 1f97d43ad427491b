use ctap_engine::StyleKind;
use owo_colors::Style;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

pub mod defaults {
    use ctap_engine::StyleKind;

    pub const UNKNOWN: &str = "default";
    pub const VERSION: &str = "cyan";
    pub const PLAN: &str = "white";
    pub const OK: &str = "green";
    pub const FAIL: &str = "red bold";
    pub const DIAGNOSTIC: &str = "gray";
    pub const BAIL: &str = "yellow bold";
    pub const SUMMARY_OK: &str = "green bold";
    pub const SUMMARY_FAIL: &str = "red bold";
    pub const PLAN_FAIL: &str = "magenta bold";

    pub fn for_kind(kind: StyleKind) -> &'static str {
        match kind {
            StyleKind::Unknown => UNKNOWN,
            StyleKind::Version => VERSION,
            StyleKind::Plan => PLAN,
            StyleKind::TestOk => OK,
            StyleKind::TestNotOk => FAIL,
            StyleKind::Diagnostic => DIAGNOSTIC,
            StyleKind::Bail => BAIL,
            StyleKind::SummaryOk => SUMMARY_OK,
            StyleKind::SummaryFail => SUMMARY_FAIL,
            StyleKind::PlanFail => PLAN_FAIL,
        }
    }
}

static HEX_COLOUR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^#?([0-9a-f]{6}|[0-9a-f]{3})$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colour {
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Magenta,
    White,
    Black,
    Gray,
    /// Terminal default foreground
    Default,
    Rgb(u8, u8, u8),
}

impl Colour {
    fn from_name(name: &str) -> Option<Self> {
        let colour = match name {
            "red" => Colour::Red,
            "green" => Colour::Green,
            "blue" => Colour::Blue,
            "yellow" => Colour::Yellow,
            "cyan" => Colour::Cyan,
            "magenta" => Colour::Magenta,
            "white" => Colour::White,
            "black" => Colour::Black,
            "gray" => Colour::Gray,
            "default" => Colour::Default,
            _ => return Self::from_hex(name),
        };
        Some(colour)
    }

    /// `#rrggbb` or `#rgb`, `#` optional
    fn from_hex(text: &str) -> Option<Self> {
        let digits = HEX_COLOUR_REGEX.captures(text)?.get(1)?.as_str();
        let nibbles: Vec<u8> = digits
            .chars()
            .filter_map(|c| c.to_digit(16).map(|d| d as u8))
            .collect();

        match nibbles.as_slice() {
            [r, g, b] => Some(Colour::Rgb(r * 17, g * 17, b * 17)),
            [r1, r2, g1, g2, b1, b2] => {
                Some(Colour::Rgb(r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2))
            }
            _ => None,
        }
    }

    fn apply(self, style: Style) -> Style {
        match self {
            Colour::Red => style.red(),
            Colour::Green => style.green(),
            Colour::Blue => style.blue(),
            Colour::Yellow => style.yellow(),
            Colour::Cyan => style.cyan(),
            Colour::Magenta => style.magenta(),
            Colour::White => style.white(),
            Colour::Black => style.black(),
            Colour::Gray => style.bright_black(),
            Colour::Default => style,
            Colour::Rgb(r, g, b) => style.truecolor(r, g, b),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Bold,
    Italic,
    Underscore,
    Reverse,
    Blink,
    Concealed,
    Fuzzy,
}

impl Modifier {
    fn from_name(name: &str) -> Option<Self> {
        let modifier = match name {
            "bold" => Modifier::Bold,
            "italic" => Modifier::Italic,
            "underscore" => Modifier::Underscore,
            "reverse" => Modifier::Reverse,
            "blink" => Modifier::Blink,
            "concealed" => Modifier::Concealed,
            "fuzzy" => Modifier::Fuzzy,
            _ => return None,
        };
        Some(modifier)
    }

    fn apply(self, style: Style) -> Style {
        match self {
            Modifier::Bold => style.bold(),
            Modifier::Italic => style.italic(),
            Modifier::Underscore => style.underline(),
            Modifier::Reverse => style.reversed(),
            Modifier::Blink => style.blink(),
            Modifier::Concealed => style.hidden(),
            Modifier::Fuzzy => style.dimmed(),
        }
    }
}

/// A parsed colour string: at most one colour plus any modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColourSpec {
    pub colour: Option<Colour>,
    pub modifiers: Vec<Modifier>,
}

impl ColourSpec {
    /// Parse a space-separated colour string such as `"red bold"` or `"#c90 italic"`.
    pub fn parse(kind: StyleKind, text: &str) -> Result<Self, StyleError> {
        let mut parsed = ColourSpec::default();

        for token in text.split_whitespace() {
            if let Some(modifier) = Modifier::from_name(token) {
                parsed.modifiers.push(modifier);
                continue;
            }

            if parsed.colour.is_some() {
                return Err(StyleError::MultipleColours {
                    kind,
                    text: text.to_string(),
                });
            }

            let colour = Colour::from_name(token).ok_or_else(|| StyleError::BadColour {
                kind,
                token: token.to_string(),
            })?;
            parsed.colour = Some(colour);
        }

        Ok(parsed)
    }

    pub fn to_style(&self) -> Style {
        let base = self
            .colour
            .map_or(Style::new(), |colour| colour.apply(Style::new()));
        self.modifiers
            .iter()
            .fold(base, |style, modifier| modifier.apply(style))
    }
}

/// A colour string that cannot be turned into a style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    MultipleColours { kind: StyleKind, text: String },
    BadColour { kind: StyleKind, token: String },
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleError::MultipleColours { kind, text } => {
                write!(f, "multiple colours in {} colour string {:?}", kind, text)
            }
            StyleError::BadColour { kind, token } => {
                write!(f, "bad {} colour string {:?}", kind, token)
            }
        }
    }
}

impl std::error::Error for StyleError {}
