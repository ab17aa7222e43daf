//! Cell: One character of display state, plus its colors and style.

use bitflags::bitflags;

/// True-color RGB representation.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

bitflags! {
    /// Text style modifiers, combinable with bitwise OR.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
    pub struct Modifiers: u8 {
        /// Bold text
        const BOLD = 0b0000_0001;
        /// Dim/faint text
        const DIM = 0b0000_0010;
        /// Underlined text
        const UNDERLINE = 0b0000_0100;
        /// Reversed colors (fg/bg swapped)
        const REVERSED = 0b0000_1000;
    }
}

/// One display cell: a single character with colors and style.
///
/// Unlike a general-purpose compositor cell there is no packed grapheme
/// storage here - the wheel paints solid rectangles and short ASCII labels.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cell {
    /// The character shown in this cell.
    pub ch: char,
    /// Foreground color.
    pub fg: Rgb,
    /// Background color.
    pub bg: Rgb,
    /// Style modifiers.
    pub mods: Modifiers,
}

impl Cell {
    /// Create a cell from a character with default colors.
    #[inline]
    pub const fn new(ch: char) -> Self {
        Self {
            ch,
            fg: Rgb::WHITE,
            bg: Rgb::BLACK,
            mods: Modifiers::empty(),
        }
    }

    /// A blank cell over the given background.
    #[inline]
    pub const fn blank(bg: Rgb) -> Self {
        Self {
            ch: ' ',
            fg: Rgb::WHITE,
            bg,
            mods: Modifiers::empty(),
        }
    }

    /// Set the foreground color.
    #[inline]
    #[must_use]
    pub const fn with_fg(mut self, fg: Rgb) -> Self {
        self.fg = fg;
        self
    }

    /// Set the background color.
    #[inline]
    #[must_use]
    pub const fn with_bg(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }

    /// Set the style modifiers.
    #[inline]
    #[must_use]
    pub const fn with_mods(mut self, mods: Modifiers) -> Self {
        self.mods = mods;
        self
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(' ')
    }
}
