use crate::layout::Direction;
use crate::units::Px;

/// Pixel dimensions of a single glyph in a fixed bitmap font.
///
/// Fonts in this crate are variable-width but otherwise unshaped: each
/// character code maps to one rectangular bitmap, and a glyph's advance is
/// simply its extent along the row axis. There is no kerning and no
/// baseline metric beyond the glyph height itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlyphMetrics {
    pub width: Px,
    pub height: Px,
}

impl GlyphMetrics {
    pub fn new(width: impl Into<Px>, height: impl Into<Px>) -> GlyphMetrics {
        GlyphMetrics {
            width: width.into(),
            height: height.into(),
        }
    }

    /// Extent along the row axis: width for horizontal text, height for
    /// vertical text.
    pub fn advance(&self, direction: Direction) -> Px {
        match direction {
            Direction::Horizontal => self.width,
            Direction::Vertical => self.height,
        }
    }

    /// Extent across the row axis: height for horizontal text, width for
    /// vertical text.
    pub fn cross(&self, direction: Direction) -> Px {
        match direction {
            Direction::Horizontal => self.height,
            Direction::Vertical => self.width,
        }
    }
}

/// Maps 8-bit character codes to glyph dimensions.
///
/// This is the capability the layout engine consumes; glyph bitmaps
/// themselves are owned and rendered elsewhere. Returning `None` marks the
/// character as unprintable: the engine skips it without consuming any
/// layout space.
pub trait GlyphProvider {
    fn metrics(&self, glyph: u8) -> Option<GlyphMetrics>;
}

impl<T: GlyphProvider + ?Sized> GlyphProvider for &T {
    fn metrics(&self, glyph: u8) -> Option<GlyphMetrics> {
        (**self).metrics(glyph)
    }
}

/// Test font: every printable ASCII glyph is 8x8 except `B`, which is 4x8.
/// The narrow `B` makes uneven row widths easy to construct.
#[cfg(test)]
pub(crate) struct FakeFont;

#[cfg(test)]
impl GlyphProvider for FakeFont {
    fn metrics(&self, glyph: u8) -> Option<GlyphMetrics> {
        match glyph {
            b'B' => Some(GlyphMetrics::new(4u16, 8u16)),
            0x20..=0x7e => Some(GlyphMetrics::new(8u16, 8u16)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_and_cross_transpose() {
        let m = GlyphMetrics::new(4u16, 8u16);
        assert_eq!(m.advance(Direction::Horizontal), Px(4));
        assert_eq!(m.cross(Direction::Horizontal), Px(8));
        assert_eq!(m.advance(Direction::Vertical), Px(8));
        assert_eq!(m.cross(Direction::Vertical), Px(4));
    }
}
