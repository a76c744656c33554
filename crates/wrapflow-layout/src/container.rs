//! The flow container.

use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use wrapflow_adapter::Source;
use wrapflow_core::{Bounds, Constraint, FlowError, Item, ItemParent, Padding, Spacing};

use crate::measure::measure_rows;
use crate::place::place_rows;
use crate::state::LayoutState;

/// Generations are unique across containers, so a state measured by one
/// container is stale for every other.
fn next_generation() -> u64 {
    static NEXT: AtomicU64 = AtomicU64::new(1);
    NEXT.fetch_add(1, Ordering::Relaxed)
}

/// Arranges items left to right, wrapping to a new row when the next item
/// would overflow the available width.
///
/// Driven by its host in two passes: [`measure`](Self::measure) groups the
/// items into rows and resolves the container size, then
/// [`layout`](Self::layout) positions items from that result. Any change to
/// the item list or configuration starts a new generation, and a
/// [`LayoutState`] from an earlier generation is rejected.
pub struct FlowContainer {
    items: Vec<Box<dyn Item>>,
    source: Option<Rc<dyn Source>>,
    padding: Padding,
    spacing: Spacing,
    generation: u64,
    frame: Option<Bounds>,
}

impl Default for FlowContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl FlowContainer {
    /// An empty container with no padding and default spacing.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            source: None,
            padding: Padding::default(),
            spacing: Spacing::default(),
            generation: next_generation(),
            frame: None,
        }
    }

    pub fn with_padding(mut self, padding: Padding) -> Result<Self, FlowError> {
        self.set_padding(padding)?;
        Ok(self)
    }

    pub fn with_spacing(mut self, spacing: Spacing) -> Result<Self, FlowError> {
        self.set_spacing(spacing)?;
        Ok(self)
    }

    /// Replace the padding. Negative sides are rejected and leave the
    /// container unchanged.
    pub fn set_padding(&mut self, padding: Padding) -> Result<(), FlowError> {
        self.padding = padding.validate()?;
        self.invalidate();
        Ok(())
    }

    /// Replace the spacing. Negative gaps are rejected and leave the
    /// container unchanged.
    pub fn set_spacing(&mut self, spacing: Spacing) -> Result<(), FlowError> {
        self.spacing = spacing.validate()?;
        self.invalidate();
        Ok(())
    }

    /// Replace every item with a fresh population from `source`.
    ///
    /// `None` is rejected with [`FlowError::InvalidSource`] and leaves the
    /// current items in place.
    pub fn set_source(&mut self, source: Option<Rc<dyn Source>>) -> Result<(), FlowError> {
        let source = source.ok_or(FlowError::InvalidSource)?;
        self.populate(&source);
        self.source = Some(source);
        Ok(())
    }

    /// Repopulate from the current source after its data changed.
    pub fn repopulate(&mut self) -> Result<(), FlowError> {
        let source = self.source.clone().ok_or(FlowError::InvalidSource)?;
        self.populate(&source);
        Ok(())
    }

    fn populate(&mut self, source: &Rc<dyn Source>) {
        self.items.clear();
        let count = source.count();
        self.items.reserve(count);
        for index in 0..count {
            let item = source.item_at(index, &*self);
            self.items.push(item);
        }
        self.invalidate();
        log::debug!("populated {count} items");
    }

    fn invalidate(&mut self) {
        self.generation = next_generation();
    }

    /// Measurement pass.
    ///
    /// Measures each visible item under constraints derived from `width` and
    /// `height`, groups items into rows, and resolves the container size.
    /// Calling it again with the same inputs yields an equal state.
    pub fn measure(&mut self, width: Constraint, height: Constraint) -> LayoutState {
        let (rows, size) =
            measure_rows(&mut self.items, self.padding, self.spacing, width, height);
        log::debug!(
            "measured {} rows under ({width:?}, {height:?}) -> {}x{}",
            rows.len(),
            size.width,
            size.height
        );
        LayoutState::new(rows, size, self.generation)
    }

    /// Layout pass.
    ///
    /// Places items from `state`, which must come from [`measure`](Self::measure)
    /// on this container since its last change. Item positions are relative
    /// to the container origin; `frame` is recorded as the container's own
    /// bounds in its parent.
    pub fn layout(&mut self, state: &LayoutState, frame: Bounds) -> Result<(), FlowError> {
        if state.generation() != self.generation {
            return Err(FlowError::StaleLayout {
                measured: state.generation(),
                current: self.generation,
            });
        }
        self.frame = Some(frame);
        place_rows(&mut self.items, state.rows(), self.padding, self.spacing);
        Ok(())
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn spacing(&self) -> Spacing {
        self.spacing
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[Box<dyn Item>] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [Box<dyn Item>] {
        &mut self.items
    }

    pub fn visible_item_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| item.visibility().is_visible())
            .count()
    }

    pub fn source(&self) -> Option<&Rc<dyn Source>> {
        self.source.as_ref()
    }

    /// Bounds passed to the most recent successful layout.
    pub fn frame(&self) -> Option<Bounds> {
        self.frame
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl ItemParent for FlowContainer {
    fn padding(&self) -> Padding {
        FlowContainer::padding(self)
    }

    fn spacing(&self) -> Spacing {
        FlowContainer::spacing(self)
    }

    fn item_count(&self) -> usize {
        FlowContainer::item_count(self)
    }
}

impl fmt::Debug for FlowContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlowContainer")
            .field("items", &self.items.len())
            .field("has_source", &self.source.is_some())
            .field("padding", &self.padding)
            .field("spacing", &self.spacing)
            .field("generation", &self.generation)
            .field("frame", &self.frame)
            .finish()
    }
}
