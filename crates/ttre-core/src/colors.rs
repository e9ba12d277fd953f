//! ANSI color codes for terminal output.
//!
//! Three semantic colors with orthogonal dim modifier, plus two match
//! highlights that alternate between neighbouring matches:
//! - Blue: control nodes, group numbers
//! - Green: literal payloads, successful outcomes
//! - Red: failures
//! - Dim: node ids, arrows, metadata

/// ANSI color palette for CLI output.
///
/// Uses only standard 16-color ANSI codes (no RGB).
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub blue: &'static str,
    pub green: &'static str,
    pub red: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
    /// Background highlights for even and odd matches.
    pub highlights: [&'static str; 2],
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    /// Colors enabled (ANSI escape codes).
    pub const ON: Self = Self {
        blue: "\x1b[34m",
        green: "\x1b[32m",
        red: "\x1b[31m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
        highlights: ["\x1b[30;42m", "\x1b[30;46m"],
    };

    /// Colors disabled (empty strings).
    pub const OFF: Self = Self {
        blue: "",
        green: "",
        red: "",
        dim: "",
        reset: "",
        highlights: ["", ""],
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }

    /// Highlight for the `index`-th match, alternating between two colors.
    pub fn highlight(&self, index: usize) -> &'static str {
        self.highlights[index % 2]
    }
}
