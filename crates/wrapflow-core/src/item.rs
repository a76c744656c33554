//! Item contracts.
//!
//! Items are opaque to the layout engine: something that can be measured
//! under a pair of constraints and then placed at a rectangle.

use crate::constraint::{Constraint, LayoutParams};
use crate::types::{Bounds, Padding, Px, Size, Spacing, Visibility};

/// A measurable, positionable rectangle owned by a container.
pub trait Item {
    /// Measures the item under the given constraints and returns its size.
    fn measure(&mut self, width: Constraint, height: Constraint) -> Size;

    /// Positions the item, relative to its container's origin.
    fn place(&mut self, bounds: Bounds);

    /// Rectangle from the most recent `place` call.
    fn bounds(&self) -> Option<Bounds>;

    fn visibility(&self) -> Visibility {
        Visibility::Visible
    }

    /// Declared sizing intents; fit-content on both axes unless overridden.
    fn layout_params(&self) -> LayoutParams {
        LayoutParams::default()
    }
}

/// The view of a container that sources see when producing items.
pub trait ItemParent {
    fn padding(&self) -> Padding;

    fn spacing(&self) -> Spacing;

    /// Number of items currently held.
    fn item_count(&self) -> usize;
}

/// An item with a fixed content size that honors its constraints.
///
/// This is the reference [`Item`]: useful for hosts that size their widgets
/// ahead of time, and for tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizedItem {
    content: Size,
    params: LayoutParams,
    visibility: Visibility,
    measured: Option<Size>,
    bounds: Option<Bounds>,
    label: Option<String>,
}

impl SizedItem {
    pub fn new(width: Px, height: Px) -> Self {
        Self {
            content: Size::new(width, height),
            params: LayoutParams::default(),
            visibility: Visibility::Visible,
            measured: None,
            bounds: None,
            label: None,
        }
    }

    pub fn with_params(mut self, params: LayoutParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn content_size(&self) -> Size {
        self.content
    }

    /// Size from the most recent `measure` call.
    pub fn measured(&self) -> Option<Size> {
        self.measured
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl Item for SizedItem {
    fn measure(&mut self, width: Constraint, height: Constraint) -> Size {
        let size = Size::new(
            width.constrain(self.content.width),
            height.constrain(self.content.height),
        );
        self.measured = Some(size);
        size
    }

    fn place(&mut self, bounds: Bounds) {
        self.bounds = Some(bounds);
    }

    fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    fn visibility(&self) -> Visibility {
        self.visibility
    }

    fn layout_params(&self) -> LayoutParams {
        self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::SizeIntent;

    #[test]
    fn test_sized_item_wraps_content() {
        let mut item = SizedItem::new(120, 40);
        let size = item.measure(Constraint::at_most(300), Constraint::unbounded());
        assert_eq!(size, Size::new(120, 40));
        assert_eq!(item.measured(), Some(size));
    }

    #[test]
    fn test_sized_item_honors_exact() {
        let mut item = SizedItem::new(120, 40)
            .with_params(LayoutParams::new(SizeIntent::Fill, SizeIntent::Wrap));
        let size = item.measure(Constraint::exact(280), Constraint::at_most(30));
        assert_eq!(size, Size::new(280, 30));
    }

    #[test]
    fn test_place_records_bounds() {
        let mut item = SizedItem::new(10, 10).with_label("a");
        assert_eq!(item.bounds(), None);
        item.place(Bounds::new(4, 4, 14, 14));
        assert_eq!(item.bounds(), Some(Bounds::new(4, 4, 14, 14)));
        assert_eq!(item.label(), Some("a"));
    }
}
