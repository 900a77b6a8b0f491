//! Theme definitions for colors, symbols, and badges.

/// Symbol pair for ASCII and Unicode variants.
#[derive(Debug, Clone)]
pub struct SymbolPair {
    pub ascii: &'static str,
    pub unicode: &'static str,
}

impl SymbolPair {
    pub const fn new(ascii: &'static str, unicode: &'static str) -> Self {
        Self { ascii, unicode }
    }

    /// Get the appropriate symbol based on unicode flag.
    pub fn get(&self, unicode: bool) -> &'static str {
        if unicode {
            self.unicode
        } else {
            self.ascii
        }
    }
}

/// Filled cell of a chart bar.
pub const BAR: SymbolPair = SymbolPair::new("#", "\u{2588}"); // █

/// Goal reached / missed markers for progress rows.
pub const MET: SymbolPair = SymbolPair::new("yes", "\u{2713}"); // ✓
pub const MISSED: SymbolPair = SymbolPair::new("no", "\u{2717}"); // ✗

/// Badge types for status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Err,
}

impl Badge {
    /// Get badge with symbol for display.
    pub fn display(&self, unicode: bool) -> &'static str {
        match (self, unicode) {
            (Self::Ok, true) => "[\u{2713}]",  // [✓]
            (Self::Err, true) => "[\u{2717}]", // [✗]
            (Self::Ok, false) => "[OK]",
            (Self::Err, false) => "[ERR]",
        }
    }

    /// ANSI style for this badge.
    pub fn style(&self) -> &'static str {
        match self {
            Self::Ok => colors::GREEN,
            Self::Err => colors::RED,
        }
    }
}

/// Color definitions using ANSI escape codes.
pub mod colors {
    /// Dim text (for labels, metadata)
    pub const DIM: &str = "\x1b[2m";
    /// Bright/bold text (for values)
    pub const BRIGHT: &str = "\x1b[1m";
    /// Green (success)
    pub const GREEN: &str = "\x1b[32m";
    /// Red (error)
    pub const RED: &str = "\x1b[31m";
    /// Cyan (chart bars)
    pub const CYAN: &str = "\x1b[36m";
    /// Reset all styles
    pub const RESET: &str = "\x1b[0m";
}

/// Named styles used by the renderers.
pub mod styles {
    use super::colors;

    pub fn bold() -> &'static str {
        colors::BRIGHT
    }

    pub fn dim() -> &'static str {
        colors::DIM
    }

    pub fn bar() -> &'static str {
        colors::CYAN
    }
}

/// Wrap `text` in `style` when color is enabled.
pub fn styled(text: &str, style: &str, color: bool) -> String {
    if color {
        format!("{}{}{}", style, text, colors::RESET)
    } else {
        text.to_string()
    }
}
