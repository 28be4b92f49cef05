mod error;
pub use error::*;

mod font;
pub use font::*;

/// The layout engine: line breaking, row assembly, alignment and glyph
/// placement inside a pixel bounding box
pub mod layout;

mod text;
pub use text::*;

mod units;
pub use units::*;
