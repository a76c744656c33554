//! Geometry and configuration value types.
//!
//! All distances are integer device units ([`Px`]). No unit conversion
//! happens anywhere in wrapflow; hosts convert before handing values in.

use crate::errors::FlowError;

/// Integer distance in device units.
pub type Px = i32;

/// A measured width and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: Px,
    pub height: Px,
}

impl Size {
    /// The empty size.
    pub const ZERO: Size = Size { width: 0, height: 0 };

    /// Create a size.
    pub const fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }
}

/// Edge-based rectangle, the argument of a `place` call.
///
/// `right` and `bottom` are exclusive, so `width() == right - left`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub left: Px,
    pub top: Px,
    pub right: Px,
    pub bottom: Px,
}

impl Bounds {
    /// Create bounds from its four edges.
    pub const fn new(left: Px, top: Px, right: Px, bottom: Px) -> Self {
        Self { left, top, right, bottom }
    }

    /// Create bounds from an origin and a size.
    pub fn from_origin(left: Px, top: Px, size: Size) -> Self {
        Self {
            left,
            top,
            right: left.saturating_add(size.width),
            bottom: top.saturating_add(size.height),
        }
    }

    pub fn width(&self) -> Px {
        self.right - self.left
    }

    pub fn height(&self) -> Px {
        self.bottom - self.top
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Whether the two rectangles share any area.
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }
}

/// Padding on all sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Padding {
    pub left: Px,
    pub top: Px,
    pub right: Px,
    pub bottom: Px,
}

impl Padding {
    /// Create padding from its four sides.
    pub const fn new(left: Px, top: Px, right: Px, bottom: Px) -> Self {
        Self { left, top, right, bottom }
    }

    /// Create uniform padding.
    pub const fn uniform(value: Px) -> Self {
        Self::new(value, value, value, value)
    }

    /// Create symmetric padding.
    pub const fn symmetric(horizontal: Px, vertical: Px) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    /// Total horizontal padding.
    pub fn horizontal(&self) -> Px {
        self.left.saturating_add(self.right)
    }

    /// Total vertical padding.
    pub fn vertical(&self) -> Px {
        self.top.saturating_add(self.bottom)
    }

    /// Reject any negative side.
    pub fn validate(self) -> Result<Self, FlowError> {
        for (name, value) in [
            ("padding.left", self.left),
            ("padding.top", self.top),
            ("padding.right", self.right),
            ("padding.bottom", self.bottom),
        ] {
            non_negative(name, value)?;
        }
        Ok(self)
    }
}

/// Gaps between items on a row and between rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spacing {
    /// Gap charged before each item on a row
    pub horizontal: Px,
    /// Gap between consecutive rows
    pub vertical: Px,
}

impl Spacing {
    pub const fn new(horizontal: Px, vertical: Px) -> Self {
        Self { horizontal, vertical }
    }

    /// Reject negative gaps.
    pub fn validate(self) -> Result<Self, FlowError> {
        non_negative("spacing.horizontal", self.horizontal)?;
        non_negative("spacing.vertical", self.vertical)?;
        Ok(self)
    }
}

impl Default for Spacing {
    fn default() -> Self {
        Self::new(16, 24)
    }
}

/// Whether an item takes part in layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Visibility {
    #[default]
    Visible,
    /// Skipped by both passes; consumes no space
    Collapsed,
}

impl Visibility {
    pub fn is_visible(self) -> bool {
        matches!(self, Visibility::Visible)
    }
}

fn non_negative(name: &'static str, value: Px) -> Result<(), FlowError> {
    if value < 0 {
        Err(FlowError::NegativeDimension { name, value })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_from_origin() {
        let bounds = Bounds::from_origin(10, 20, Size::new(100, 50));
        assert_eq!(bounds, Bounds::new(10, 20, 110, 70));
        assert_eq!(bounds.size(), Size::new(100, 50));
    }

    #[test]
    fn test_adjacent_bounds_do_not_intersect() {
        let a = Bounds::new(0, 0, 100, 30);
        let b = Bounds::new(100, 0, 150, 30);
        let c = Bounds::new(50, 10, 120, 20);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&c));
        assert!(b.intersects(&c));
    }

    #[test]
    fn test_padding_totals() {
        let padding = Padding::new(1, 2, 3, 4);
        assert_eq!(padding.horizontal(), 4);
        assert_eq!(padding.vertical(), 6);
        assert_eq!(Padding::symmetric(5, 7), Padding::new(5, 7, 5, 7));
    }

    #[test]
    fn test_padding_totals_saturate() {
        let padding = Padding::new(i32::MAX, 0, 1, 0);
        assert_eq!(padding.horizontal(), i32::MAX);
        assert_eq!(Padding::new(0, i32::MAX, 0, i32::MAX).vertical(), i32::MAX);
    }

    #[test]
    fn test_negative_padding_rejected() {
        let err = Padding::new(0, -1, 0, 0).validate().unwrap_err();
        assert!(matches!(
            err,
            FlowError::NegativeDimension { name: "padding.top", value: -1 }
        ));
    }

    #[test]
    fn test_negative_spacing_rejected() {
        assert!(Spacing::new(0, 0).validate().is_ok());
        assert!(matches!(
            Spacing::new(-4, 0).validate(),
            Err(FlowError::NegativeDimension { name: "spacing.horizontal", .. })
        ));
    }
}
