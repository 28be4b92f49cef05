use crate::units::Px;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// Not even one glyph fits along the row axis. The box is too narrow
    /// (or too short, for vertical text) to place any text at all.
    #[error("no horizontal space: no glyph fits within {max_extent} along the row axis")]
    NoHorizontalSpace { max_extent: Px },

    /// The accumulated rows need more room across the block axis than the
    /// box provides. The caller should enlarge the box, shrink the text or
    /// cap the line count.
    #[error("no vertical space: rows need {required} but only {max_extent} is available")]
    NoVerticalSpace { max_extent: Px, required: Px },

    /// The padding insets leave no usable interior in the bounding box.
    #[error("padding ({horizontal} horizontal, {vertical} vertical) leaves no room inside a {width}\u{d7}{height} box")]
    PaddingExceedsBox {
        width: Px,
        height: Px,
        horizontal: Px,
        vertical: Px,
    },
}
