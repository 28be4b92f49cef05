use derive_more::{Add, AddAssign, Display, From, Into, Sub, Sum};

/// A distance in whole pixels.
///
/// The engine works on an integer pixel grid, so every width, height, offset
/// and inset in the crate is a `Px`. Construct one from a `u16` with
/// [`From`]/[`Into`], or use the tuple field directly.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Add,
    AddAssign,
    Sub,
    Sum,
    Display,
    From,
    Into,
)]
#[display("{_0}px")]
pub struct Px(pub u16);

impl Px {
    pub const ZERO: Px = Px(0);

    /// Subtraction that bottoms out at zero instead of underflowing. Used
    /// when a block of rows may be larger than the box it is aligned in.
    pub fn saturating_sub(self, rhs: Px) -> Px {
        Px(self.0.saturating_sub(rhs.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_and_display() {
        assert_eq!(Px(8) + Px(4), Px(12));
        assert_eq!(Px(8) - Px(4), Px(4));
        assert_eq!([Px(8), Px(4), Px(4)].into_iter().sum::<Px>(), Px(16));
        assert_eq!(Px(16).to_string(), "16px");
    }

    #[test]
    fn saturating_sub_bottoms_out() {
        assert_eq!(Px(4).saturating_sub(Px(8)), Px::ZERO);
        assert_eq!(Px(8).saturating_sub(Px(4)), Px(4));
    }
}
