use crate::units::Px;

/// Pixel insets subtracted from the bounding box before any text is placed.
/// The alignment offsets work within the remaining interior, so padded text
/// never touches the padded edges. The box must be strictly larger than the
/// combined insets on each axis; [`Layout::compute`](crate::layout::Layout::compute)
/// rejects configurations that are not.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    pub top: Px,
    pub right: Px,
    pub bottom: Px,
    pub left: Px,
}

impl Padding {
    /// Create padding by specifying individual components in a clockwise
    /// fashion starting at the top (in the same order as CSS margins)
    pub fn trbl(top: Px, right: Px, bottom: Px, left: Px) -> Padding {
        Padding {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create padding where all values are equal
    pub fn all(value: impl Into<Px>) -> Padding {
        let value: Px = value.into();
        Padding {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create padding by specifying different values for vertical (top and
    /// bottom) and horizontal (left and right) insets
    pub fn symmetric(vertical: Px, horizontal: Px) -> Padding {
        Padding {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Create padding where all values are 0
    pub fn empty() -> Padding {
        Padding::default()
    }

    /// Combined left and right inset.
    pub fn horizontal(&self) -> Px {
        self.left + self.right
    }

    /// Combined top and bottom inset.
    pub fn vertical(&self) -> Px {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_agree() {
        assert_eq!(Padding::all(4u16), Padding::trbl(Px(4), Px(4), Px(4), Px(4)));
        assert_eq!(
            Padding::symmetric(Px(2), Px(6)),
            Padding::trbl(Px(2), Px(6), Px(2), Px(6))
        );
        assert_eq!(Padding::symmetric(Px(2), Px(6)).horizontal(), Px(12));
        assert_eq!(Padding::symmetric(Px(2), Px(6)).vertical(), Px(4));
    }
}
