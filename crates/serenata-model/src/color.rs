use serde::{Deserialize, Serialize};

/// SGR escape sequence that resets all terminal attributes.
pub const RESET: &str = "\u{1b}[0m";

/// A terminal foreground color (standard 8-color SGR palette subset).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Cyan,
    White,
}

impl Color {
    /// The SGR escape sequence that switches to this color.
    pub fn code(self) -> &'static str {
        match self {
            Color::Red => "\u{1b}[31m",
            Color::Green => "\u{1b}[32m",
            Color::Yellow => "\u{1b}[33m",
            Color::Blue => "\u{1b}[34m",
            Color::Cyan => "\u{1b}[36m",
            Color::White => "\u{1b}[37m",
        }
    }

    /// Wrap `text` in this color's escape code plus a reset.
    pub fn paint(self, text: &str) -> String {
        format!("{}{}{}", self.code(), text, RESET)
    }
}

/// Rule assigning a color to each rendered lyric line.
///
/// The decision is always made once per line; every word in that line is
/// printed in the same color (or uncolored).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum ColorPolicy {
    /// Scan the lowercased line for phrase matches: any `positive` phrase
    /// wins blue, otherwise any `negative` phrase wins red, otherwise the
    /// line stays uncolored.
    Keyword {
        positive: Vec<String>,
        negative: Vec<String>,
    },
    /// Cycle through a fixed palette by line index (`palette[i % len]`).
    Cycle { palette: Vec<Color> },
}

impl ColorPolicy {
    /// Decide the color for line `index` with text `line`.
    pub fn line_color(&self, index: usize, line: &str) -> Option<Color> {
        match self {
            ColorPolicy::Keyword { positive, negative } => {
                let lower = line.to_lowercase();
                if positive.iter().any(|p| lower.contains(p.as_str())) {
                    Some(Color::Blue)
                } else if negative.iter().any(|p| lower.contains(p.as_str())) {
                    Some(Color::Red)
                } else {
                    None
                }
            }
            ColorPolicy::Cycle { palette } => {
                if palette.is_empty() {
                    None
                } else {
                    Some(palette[index % palette.len()])
                }
            }
        }
    }
}
