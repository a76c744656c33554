//! Output of the measurement pass.
//!
//! A [`LayoutState`] is the only channel between measurement and layout.
//! It records which items share a row, the size each item measured to, and
//! the container generation it was computed against.

use smallvec::SmallVec;
use wrapflow_core::{Px, Size};

/// One item's slot in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RowEntry {
    /// Index into the container's item list
    pub index: usize,
    /// Size the item measured to in this pass
    pub size: Size,
}

/// A run of items on one visual line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Row {
    pub(crate) entries: SmallVec<[RowEntry; 8]>,
    pub(crate) height: Px,
    pub(crate) used_width: Px,
}

impl Row {
    pub fn entries(&self) -> &[RowEntry] {
        &self.entries
    }

    /// Tallest measured height in the row.
    pub fn height(&self) -> Px {
        self.height
    }

    /// Width charged to the row: one spacing plus the width of every item.
    pub fn used_width(&self) -> Px {
        self.used_width
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Item indices in placement order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().map(|e| e.index)
    }

    pub(crate) fn push(&mut self, entry: RowEntry, spacing: Px) {
        self.used_width = self
            .used_width
            .saturating_add(spacing)
            .saturating_add(entry.size.width);
        self.height = self.height.max(entry.size.height);
        self.entries.push(entry);
    }
}

/// Rows and resolved container size from one measurement pass.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LayoutState {
    rows: Vec<Row>,
    size: Size,
    generation: u64,
}

impl LayoutState {
    pub(crate) fn new(rows: Vec<Row>, size: Size, generation: u64) -> Self {
        Self { rows, size, generation }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Resolved size of the container.
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> Px {
        self.size.width
    }

    pub fn height(&self) -> Px {
        self.size.height
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of items placed across all rows.
    pub fn item_count(&self) -> usize {
        self.rows.iter().map(Row::len).sum()
    }

    /// Container generation this state was measured against.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Row index and entry for an item, if it was laid out.
    pub fn find(&self, index: usize) -> Option<(usize, &RowEntry)> {
        self.rows.iter().enumerate().find_map(|(row, r)| {
            r.entries.iter().find(|e| e.index == index).map(|e| (row, e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_push_accumulates() {
        let mut row = Row::default();
        row.push(RowEntry { index: 0, size: Size::new(100, 30) }, 16);
        row.push(RowEntry { index: 1, size: Size::new(50, 40) }, 16);

        assert_eq!(row.len(), 2);
        assert_eq!(row.used_width(), 182);
        assert_eq!(row.height(), 40);
        assert_eq!(row.indices().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_state_find() {
        let mut first = Row::default();
        first.push(RowEntry { index: 0, size: Size::new(10, 10) }, 0);
        let mut second = Row::default();
        second.push(RowEntry { index: 2, size: Size::new(20, 10) }, 0);
        let state = LayoutState::new(vec![first, second], Size::new(20, 20), 1);

        assert_eq!(state.item_count(), 2);
        assert_eq!(state.find(2).map(|(row, e)| (row, e.size.width)), Some((1, 20)));
        assert!(state.find(1).is_none());
    }
}
