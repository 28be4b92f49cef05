//! Row-by-row text layout inside a pixel bounding box.
//!
//! [`Layout::compute`] partitions a text buffer into rows with
//! [`find_next_line_end`], measures each row, aligns the assembled block
//! inside the box and emits one [`LayoutItem`] per printed character, in
//! reading order. The result is deterministic: the same inputs always
//! produce the same placements.
//!
//! The engine knows nothing about glyph bitmaps or screens; it only consumes
//! a [`GlyphProvider`](crate::GlyphProvider) for sizes. A renderer walks
//! [`Layout::items`] and blits each referenced glyph at its coordinates,
//! offset by wherever the box sits on screen.
//!
//! # Example
//!
//! ```
//! use glyphflow::layout::{Layout, LayoutOptions};
//! use glyphflow::{GlyphMetrics, GlyphProvider};
//!
//! // An 8x8 monospace font; anything non-ASCII is unprintable.
//! struct Mono;
//! impl GlyphProvider for Mono {
//!     fn metrics(&self, glyph: u8) -> Option<GlyphMetrics> {
//!         (glyph == b' ' || glyph.is_ascii_graphic())
//!             .then(|| GlyphMetrics::new(8u16, 8u16))
//!     }
//! }
//!
//! let mut layout = Layout::new(64u16, 32u16);
//! layout
//!     .compute(b"hello world", &Mono, &LayoutOptions::default())
//!     .expect("text fits");
//!
//! // "hello" fills the first row and "world" wraps onto the second.
//! assert_eq!(layout.items().len(), 10);
//! assert_eq!(layout.items()[5].glyph, b'w');
//! ```

mod linebreak;
mod padding;

pub use linebreak::find_next_line_end;
pub use padding::*;

use crate::error::LayoutError;
use crate::font::GlyphProvider;
use crate::units::Px;
use linebreak::row_metrics;

/// Which way rows of text flow. The direction transposes every size
/// computation in the engine: a glyph's advance is its width for horizontal
/// text and its height for vertical text, and rows stack along the other
/// axis.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Horizontal,
    Vertical,
}

/// Where the assembled block of rows sits along the block axis.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// Where each row sits along the row axis.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Everything that shapes a layout pass, bundled into one value so callers
/// pass configuration explicitly instead of poking at shared state.
///
/// The defaults are top-left aligned horizontal text with no padding, no
/// extra spacing and no line cap.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOptions {
    pub vertical_align: VerticalAlign,
    pub horizontal_align: HorizontalAlign,
    pub padding: Padding,
    pub direction: Direction,
    /// Extra pixels between consecutive rows.
    pub line_spacing: Px,
    /// Extra pixels between consecutive glyphs on a row.
    pub letter_spacing: Px,
    /// Cap on the number of rows. Rows past the cap are dropped silently
    /// and [`Layout::is_truncated`] reports the loss; `None` means no cap.
    pub max_lines: Option<usize>,
}

/// One placed character: the glyph's character code and its position
/// relative to the bounding box's top-left corner, with padding and
/// alignment already applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutItem {
    pub x: Px,
    pub y: Px,
    pub glyph: u8,
}

/// A measured run of characters forming one row: a half-open byte range
/// into the source buffer plus its row-axis width and cross-axis height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Row {
    start: usize,
    end: usize,
    width: Px,
    height: Px,
}

/// A text layout bound to a fixed box size.
///
/// [`compute`](Layout::compute) clears and repopulates the placement list on
/// every call, so a `Layout` can be reused as content or style changes. It
/// is a plain value; share it across threads only with external exclusion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    width: Px,
    height: Px,
    items: Vec<LayoutItem>,
    truncated: bool,
}

impl Layout {
    pub fn new(width: impl Into<Px>, height: impl Into<Px>) -> Layout {
        Layout {
            width: width.into(),
            height: height.into(),
            items: Vec::new(),
            truncated: false,
        }
    }

    /// Bounding box width.
    pub fn width(&self) -> Px {
        self.width
    }

    /// Bounding box height.
    pub fn height(&self) -> Px {
        self.height
    }

    /// The placements produced by the last successful
    /// [`compute`](Layout::compute), in reading order.
    pub fn items(&self) -> &[LayoutItem] {
        &self.items
    }

    /// Whether the last [`compute`](Layout::compute) dropped rows because of
    /// [`LayoutOptions::max_lines`].
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Flows `buf` into the bounding box and records a placement for every
    /// printable character.
    ///
    /// On failure the placement list is left empty: either no glyph fits the
    /// row extent at all ([`LayoutError::NoHorizontalSpace`]) or the rows
    /// outgrow the block extent ([`LayoutError::NoVerticalSpace`]). Both
    /// are expected outcomes for the caller to recover from, typically by
    /// resizing the box or shrinking the text. A box not strictly larger
    /// than its padding is a configuration error
    /// ([`LayoutError::PaddingExceedsBox`]).
    pub fn compute(
        &mut self,
        buf: &[u8],
        font: &impl GlyphProvider,
        options: &LayoutOptions,
    ) -> Result<(), LayoutError> {
        self.items.clear();
        self.truncated = false;

        let pad = options.padding;
        if self.width <= pad.horizontal() || self.height <= pad.vertical() {
            return Err(LayoutError::PaddingExceedsBox {
                width: self.width,
                height: self.height,
                horizontal: pad.horizontal(),
                vertical: pad.vertical(),
            });
        }

        // Find the actual drawable area of the bounding box, transposed
        // into row/block extents by the flow direction.
        let usable_w = self.width - pad.horizontal();
        let usable_h = self.height - pad.vertical();
        let (max_row_extent, max_block_extent) = match options.direction {
            Direction::Horizontal => (usable_w, usable_h),
            Direction::Vertical => (usable_h, usable_w),
        };

        let (rows, block_height) =
            self.discover_rows(buf, font, options, max_row_extent, max_block_extent)?;

        // Walk through the rows and place the individual glyphs. `main`
        // runs along the row axis, `cross` along the block axis.
        let mut cross = valign_offset(options.vertical_align, max_block_extent, block_height);
        for row in &rows {
            let mut main = halign_offset(options.horizontal_align, max_row_extent, row.width);
            for &ch in &buf[row.start..row.end] {
                let Some(metrics) = font.metrics(ch) else {
                    continue;
                };
                let (x, y) = match options.direction {
                    Direction::Horizontal => (pad.left + main, pad.top + cross),
                    Direction::Vertical => (pad.left + cross, pad.top + main),
                };
                self.items.push(LayoutItem { x, y, glyph: ch });
                main += metrics.advance(options.direction) + options.letter_spacing;
            }
            cross += row.height + options.line_spacing;
        }
        Ok(())
    }

    /// Partitions the whole buffer into rows and returns them together with
    /// the block height (row heights plus one `line_spacing` per row
    /// transition). Sets the truncation flag when the row cap drops text.
    fn discover_rows(
        &mut self,
        buf: &[u8],
        font: &impl GlyphProvider,
        options: &LayoutOptions,
        max_row_extent: Px,
        max_block_extent: Px,
    ) -> Result<(Vec<Row>, Px), LayoutError> {
        let mut rows = Vec::new();
        let mut block_height = Px::ZERO;
        let mut start = 0;
        while start < buf.len() {
            if options.max_lines.is_some_and(|cap| rows.len() >= cap) {
                self.truncated = true;
                break;
            }

            let next_start = find_next_line_end(
                buf,
                font,
                options.direction,
                start,
                options.letter_spacing,
                max_row_extent,
            );
            if next_start == start {
                // Not even one glyph fits on the row.
                return Err(LayoutError::NoHorizontalSpace {
                    max_extent: max_row_extent,
                });
            }

            // The break character ends the row but is never rendered. The
            // next row still starts past it.
            let mut end = next_start;
            if matches!(buf[next_start - 1], b'\n' | b' ') {
                end -= 1;
            }

            let (row_width, row_height) = row_metrics(buf, font, options.direction, start, end);
            let required = if rows.is_empty() {
                row_height
            } else {
                block_height + options.line_spacing + row_height
            };
            if required > max_block_extent {
                // The overflowing row is not kept, and no further rows are
                // produced.
                return Err(LayoutError::NoVerticalSpace {
                    max_extent: max_block_extent,
                    required,
                });
            }

            rows.push(Row {
                start,
                end,
                width: row_width,
                height: row_height,
            });
            block_height = required;
            start = next_start;
        }
        Ok((rows, block_height))
    }
}

/// Offset of the row block along the block axis. Saturates at zero if a
/// truncated block still measures larger than the box.
fn valign_offset(align: VerticalAlign, max_extent: Px, block_height: Px) -> Px {
    match align {
        VerticalAlign::Top => Px::ZERO,
        VerticalAlign::Middle => Px(max_extent.saturating_sub(block_height).0 / 2),
        VerticalAlign::Bottom => max_extent.saturating_sub(block_height),
    }
}

/// Offset of one row along the row axis.
fn halign_offset(align: HorizontalAlign, max_extent: Px, row_width: Px) -> Px {
    match align {
        HorizontalAlign::Left => Px::ZERO,
        HorizontalAlign::Center => Px(max_extent.saturating_sub(row_width).0 / 2),
        HorizontalAlign::Right => max_extent.saturating_sub(row_width),
    }
}
