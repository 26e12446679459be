//! Visual styling: [`Color`], [`AttrMask`], and [`Style`].

use std::ops::{BitAnd, BitOr};

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// A terminal colour: either the driver's default or an RGB triple.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// Whatever the output device uses when nothing is set.
    #[default]
    Reset,
    Rgb(u8, u8, u8),
}

impl Color {
    /// Construct from individual RGB components.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(r, g, b)
    }

    /// The RGB components, or `None` for [`Color::Reset`].
    #[inline]
    pub const fn rgb(self) -> Option<(u8, u8, u8)> {
        match self {
            Self::Reset => None,
            Self::Rgb(r, g, b) => Some((r, g, b)),
        }
    }
}

// ---------------------------------------------------------------------------
// AttrMask
// ---------------------------------------------------------------------------

/// Bitmask of text attributes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttrMask(pub u8);

impl AttrMask {
    pub const NONE: Self = Self(0);
    pub const BOLD: Self = Self(1 << 0);
    pub const DIM: Self = Self(1 << 1);
    pub const REVERSE: Self = Self(1 << 2);

    /// Whether this mask contains all the bits from `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for AttrMask {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for AttrMask {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

// ---------------------------------------------------------------------------
// Style
// ---------------------------------------------------------------------------

/// Foreground, background and attributes of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub attrs: AttrMask,
}

impl Style {
    #[inline]
    pub const fn with_fg(mut self, fg: Color) -> Self {
        self.fg = fg;
        self
    }

    #[inline]
    pub const fn with_bg(mut self, bg: Color) -> Self {
        self.bg = bg;
        self
    }

    #[inline]
    pub const fn with_attrs(mut self, attrs: AttrMask) -> Self {
        self.attrs = attrs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_components() {
        assert_eq!(Color::from_rgb(1, 2, 3).rgb(), Some((1, 2, 3)));
        assert_eq!(Color::Reset.rgb(), None);
        // black is a real colour, not "unset"
        assert_ne!(Color::from_rgb(0, 0, 0), Color::default());
    }

    #[test]
    fn attr_mask_ops() {
        let m = AttrMask::BOLD | AttrMask::REVERSE;
        assert!(m.contains(AttrMask::BOLD));
        assert!(!m.contains(AttrMask::DIM));
        assert_eq!(m & AttrMask::REVERSE, AttrMask::REVERSE);
        assert!(AttrMask::NONE.is_empty());
    }

    #[test]
    fn style_builder() {
        let s = Style::default()
            .with_fg(Color::from_rgb(255, 0, 0))
            .with_attrs(AttrMask::BOLD);
        assert_eq!(s.fg.rgb(), Some((255, 0, 0)));
        assert_eq!(s.bg, Color::Reset);
        assert!(s.attrs.contains(AttrMask::BOLD));
    }
}
