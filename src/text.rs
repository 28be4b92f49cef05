use bitflags::bitflags;

use crate::error::LayoutError;
use crate::font::GlyphProvider;
use crate::layout::{
    Direction, HorizontalAlign, Layout, LayoutOptions, Padding, VerticalAlign,
};
use crate::units::Px;

/// An index into the renderer's colour palette.
pub type PaletteIndex = u8;

bitflags! {
    /// Which edges of each glyph receive a drop shadow. Purely a style
    /// attribute carried for the renderer; shadows never affect layout.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Shadow: u8 {
        const TOP = 0x1;
        const BOTTOM = 0x2;
        const LEFT = 0x4;
        const RIGHT = 0x8;
    }
}

bitflags! {
    /// Why the cached render state of a [`Text`] is stale. Setters mark the
    /// relevant reasons; the flags are only cleared through the explicit
    /// [`Text::ensure_layout`] and [`Text::mark_painted`] calls.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Invalidate: u8 {
        /// Glyph positions must be recomputed.
        const LAYOUT = 0x1;
        /// Colours or shadow changed; positions are still valid but the
        /// rendered output is not.
        const PAINT = 0x2;
    }
}

/// A piece of text bound to a box, plus everything about how it should
/// look.
///
/// `Text` owns the string and the style attributes and keeps a cached
/// [`Layout`] alongside them. Every setter records what it invalidated;
/// before rendering, call [`ensure_layout`](Text::ensure_layout) to get
/// placements that are guaranteed current. Renderer-only attributes
/// (colours, shadow) never trigger a relayout.
///
/// The text is expected to use the font's fixed 8-bit character set; layout
/// runs over the string's bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    buf: String,
    width: Px,
    height: Px,
    layout: Layout,
    dirty: Invalidate,
    options: LayoutOptions,
    color: PaletteIndex,
    shadow_color: PaletteIndex,
    shadow: Shadow,
}

impl Text {
    /// Creates an empty text bound to a `width` by `height` box, with the
    /// default style: top-left aligned horizontal flow, no padding or
    /// spacing, colour `0xFD` with shadow colour `0xC0`, and no shadow
    /// edges.
    pub fn new(width: impl Into<Px>, height: impl Into<Px>) -> Text {
        let width = width.into();
        let height = height.into();
        Text {
            buf: String::new(),
            width,
            height,
            layout: Layout::new(width, height),
            dirty: Invalidate::all(),
            options: LayoutOptions::default(),
            color: 0xFD,
            shadow_color: 0xC0,
            shadow: Shadow::empty(),
        }
    }

    pub fn with_content(width: impl Into<Px>, height: impl Into<Px>, content: &str) -> Text {
        let mut text = Text::new(width, height);
        text.set_content(content);
        text
    }

    pub fn content(&self) -> &str {
        &self.buf
    }

    pub fn set_content(&mut self, content: &str) {
        self.buf.clear();
        self.buf.push_str(content);
        self.dirty |= Invalidate::all();
    }

    pub fn bounding_box(&self) -> (Px, Px) {
        (self.width, self.height)
    }

    pub fn set_bounding_box(&mut self, width: impl Into<Px>, height: impl Into<Px>) {
        self.width = width.into();
        self.height = height.into();
        self.layout = Layout::new(self.width, self.height);
        self.dirty |= Invalidate::all();
    }

    pub fn color(&self) -> PaletteIndex {
        self.color
    }

    pub fn set_color(&mut self, color: PaletteIndex) {
        self.color = color;
        self.dirty |= Invalidate::PAINT;
    }

    pub fn shadow_color(&self) -> PaletteIndex {
        self.shadow_color
    }

    pub fn set_shadow_color(&mut self, color: PaletteIndex) {
        self.shadow_color = color;
        self.dirty |= Invalidate::PAINT;
    }

    pub fn shadow(&self) -> Shadow {
        self.shadow
    }

    pub fn set_shadow(&mut self, shadow: Shadow) {
        self.shadow = shadow;
        self.dirty |= Invalidate::PAINT;
    }

    pub fn vertical_align(&self) -> VerticalAlign {
        self.options.vertical_align
    }

    pub fn set_vertical_align(&mut self, align: VerticalAlign) {
        self.options.vertical_align = align;
        self.dirty |= Invalidate::all();
    }

    pub fn horizontal_align(&self) -> HorizontalAlign {
        self.options.horizontal_align
    }

    pub fn set_horizontal_align(&mut self, align: HorizontalAlign) {
        self.options.horizontal_align = align;
        self.dirty |= Invalidate::all();
    }

    pub fn padding(&self) -> Padding {
        self.options.padding
    }

    pub fn set_padding(&mut self, padding: Padding) {
        self.options.padding = padding;
        self.dirty |= Invalidate::all();
    }

    pub fn direction(&self) -> Direction {
        self.options.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.options.direction = direction;
        self.dirty |= Invalidate::all();
    }

    pub fn letter_spacing(&self) -> Px {
        self.options.letter_spacing
    }

    pub fn set_letter_spacing(&mut self, spacing: impl Into<Px>) {
        self.options.letter_spacing = spacing.into();
        self.dirty |= Invalidate::all();
    }

    pub fn line_spacing(&self) -> Px {
        self.options.line_spacing
    }

    pub fn set_line_spacing(&mut self, spacing: impl Into<Px>) {
        self.options.line_spacing = spacing.into();
        self.dirty |= Invalidate::all();
    }

    pub fn max_lines(&self) -> Option<usize> {
        self.options.max_lines
    }

    pub fn set_max_lines(&mut self, max_lines: Option<usize>) {
        self.options.max_lines = max_lines;
        self.dirty |= Invalidate::all();
    }

    /// Whether glyph positions are stale and the next
    /// [`ensure_layout`](Text::ensure_layout) will recompute them.
    pub fn needs_layout(&self) -> bool {
        self.dirty.contains(Invalidate::LAYOUT)
    }

    /// Whether the rendered output is stale for any reason, including
    /// colour or shadow changes that do not move glyphs.
    pub fn needs_repaint(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Returns the current layout, recomputing it first if anything that
    /// affects geometry changed since the last call.
    ///
    /// On failure the dirty state is left untouched, so a later call (after
    /// the caller resized the box or shortened the text) tries again.
    pub fn ensure_layout(&mut self, font: &impl GlyphProvider) -> Result<&Layout, LayoutError> {
        if self.dirty.contains(Invalidate::LAYOUT) {
            self.layout
                .compute(self.buf.as_bytes(), font, &self.options)?;
            self.dirty.remove(Invalidate::LAYOUT);
        }
        Ok(&self.layout)
    }

    /// Tells the text its current state has been drawn. Call after
    /// rendering to clear the paint-only dirty reason.
    pub fn mark_painted(&mut self) {
        self.dirty.remove(Invalidate::PAINT);
    }
}
