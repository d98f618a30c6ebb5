//! Terminal styling and capability detection.

/// ANSI escape codes used by the text renderers.
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    /// Bold bright white for vertex names.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for tree lines and weights.
    pub const GRAY: &str = "\x1b[90m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RED: &str = "\x1b[31m";
}

/// Resolved color codes, either ANSI sequences or empty strings.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
    pub green: &'static str,
    pub yellow: &'static str,
    pub red: &'static str,
}

impl ColorPalette {
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
            green: colors::GREEN,
            yellow: colors::YELLOW,
            red: colors::RED,
        }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            white_bold: "",
            gray: "",
            green: "",
            yellow: "",
            red: "",
        }
    }

    /// `colored()` when the terminal supports ANSI colors, otherwise `plain()`.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Glyphs used to draw a route as a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeGlyphs {
    pub first: &'static str,
    pub middle: &'static str,
    pub last: &'static str,
}

impl TreeGlyphs {
    pub const UNICODE: Self = Self {
        first: "┌",
        middle: "├",
        last: "└",
    };

    pub const ASCII: Self = Self {
        first: "+",
        middle: "|",
        last: "`",
    };

    #[must_use]
    pub fn detect() -> Self {
        if supports_unicode() {
            Self::UNICODE
        } else {
            Self::ASCII
        }
    }

    /// Glyph for the step at `index` in a route of `len` steps.
    #[must_use]
    pub fn for_position(&self, index: usize, len: usize) -> &'static str {
        if index == 0 {
            self.first
        } else if index + 1 == len {
            self.last
        } else {
            self.middle
        }
    }
}

/// Whether ANSI colors should be emitted.
///
/// Respects `NO_COLOR` (https://no-color.org/) and `TERM=dumb`.
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}

/// Whether box-drawing characters are safe to print, based on `LANG` and
/// `LC_ALL`.
#[must_use]
pub fn supports_unicode() -> bool {
    for key in ["LC_ALL", "LANG"] {
        if let Ok(value) = std::env::var(key) {
            if value.to_uppercase().contains("UTF") {
                return true;
            }
        }
    }
    #[cfg(windows)]
    {
        if let Ok(term) = std::env::var("TERM") {
            return !term.eq_ignore_ascii_case("dumb");
        }
        return true;
    }
    #[cfg(not(windows))]
    {
        false
    }
}
