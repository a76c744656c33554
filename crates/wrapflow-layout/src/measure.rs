//! Measurement pass: greedy row wrapping.
//!
//! Items are measured in order and appended to the current row until the
//! next one would overflow the available width. Spacing is charged once
//! before every item, the first one on a row included, both when checking
//! fit and when accumulating.

use wrapflow_core::{Constraint, Item, Padding, Px, Size, Spacing};

use crate::state::{Row, RowEntry};

/// Running totals of a single measurement traversal.
struct RowAccumulator {
    rows: Vec<Row>,
    current: Row,
    needed_width: Px,
    needed_height: Px,
    padding: Padding,
    spacing: Spacing,
}

impl RowAccumulator {
    fn new(padding: Padding, spacing: Spacing) -> Self {
        Self {
            rows: Vec::new(),
            current: Row::default(),
            needed_width: padding.horizontal(),
            needed_height: padding.vertical(),
            padding,
            spacing,
        }
    }

    /// Whether an item of `width` no longer fits on the current row.
    ///
    /// An empty row accepts anything, so an oversized item gets a row of
    /// its own instead of being dropped.
    fn overflows(&self, width: Px, available: Option<Px>) -> bool {
        let Some(available) = available else {
            return false;
        };
        !self.current.is_empty()
            && self
                .current
                .used_width
                .saturating_add(self.spacing.horizontal)
                .saturating_add(width)
                > available
    }

    fn push(&mut self, entry: RowEntry) {
        self.current.push(entry, self.spacing.horizontal);
    }

    fn close_row(&mut self) {
        if self.current.is_empty() {
            return;
        }
        let row = std::mem::take(&mut self.current);
        log::trace!(
            "closing row {}: {} items, used width {}, height {}",
            self.rows.len(),
            row.len(),
            row.used_width,
            row.height
        );
        self.needed_height = self
            .needed_height
            .saturating_add(row.height)
            .saturating_add(self.spacing.vertical);
        self.needed_width = self
            .needed_width
            .max(self.padding.horizontal().saturating_add(row.used_width));
        self.rows.push(row);
    }

    /// Flush the trailing row and return rows with the content-driven size.
    fn finish(mut self) -> (Vec<Row>, Size) {
        self.close_row();
        let mut height = self.needed_height;
        if !self.rows.is_empty() {
            // spacing sits between rows, not after the last one
            height -= self.spacing.vertical;
        }
        (self.rows, Size::new(self.needed_width, height))
    }
}

/// Measure every visible item and group them into rows.
///
/// Returns the rows and the resolved container size: the constraint size on
/// an `Exact` axis, the content-driven size otherwise.
pub(crate) fn measure_rows(
    items: &mut [Box<dyn Item>],
    padding: Padding,
    spacing: Spacing,
    width: Constraint,
    height: Constraint,
) -> (Vec<Row>, Size) {
    // padding is not subtracted: the fit check runs against the full bound
    let available = width.bound();
    let mut acc = RowAccumulator::new(padding, spacing);

    for (index, item) in items.iter_mut().enumerate() {
        if !item.visibility().is_visible() {
            continue;
        }
        let params = item.layout_params();
        let size = item.measure(
            width.resolve_child(padding.horizontal(), params.width),
            height.resolve_child(padding.vertical(), params.height),
        );
        if acc.overflows(size.width, available) {
            acc.close_row();
        }
        acc.push(RowEntry { index, size });
    }

    let (rows, content) = acc.finish();
    let resolved = Size::new(
        if width.is_exact() { width.size } else { content.width },
        if height.is_exact() { height.size } else { content.height },
    );
    (rows, resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wrapflow_core::{LayoutParams, SizeIntent, SizedItem, Visibility};

    fn items(widths: &[Px], height: Px) -> Vec<Box<dyn Item>> {
        widths
            .iter()
            .map(|&w| Box::new(SizedItem::new(w, height)) as Box<dyn Item>)
            .collect()
    }

    fn groups(rows: &[Row]) -> Vec<Vec<usize>> {
        rows.iter().map(|r| r.indices().collect()).collect()
    }

    #[test]
    fn test_wraps_when_next_item_overflows() {
        let mut items = items(&[100, 100, 100, 50], 30);
        let (rows, _) = measure_rows(
            &mut items,
            Padding::default(),
            Spacing::new(16, 24),
            Constraint::at_most(300),
            Constraint::at_most(1000),
        );
        assert_eq!(groups(&rows), vec![vec![0, 1], vec![2, 3]]);
    }

    #[test]
    fn test_trailing_partial_row_is_flushed() {
        let mut items = items(&[40, 40], 20);
        let (rows, size) = measure_rows(
            &mut items,
            Padding::default(),
            Spacing::new(10, 10),
            Constraint::at_most(500),
            Constraint::at_most(500),
        );
        assert_eq!(groups(&rows), vec![vec![0, 1]]);
        assert_eq!(size, Size::new(100, 20));
    }

    #[test]
    fn test_oversized_item_gets_own_row() {
        let mut items = items(&[50, 400, 50], 20);
        let (rows, size) = measure_rows(
            &mut items,
            Padding::default(),
            Spacing::new(0, 0),
            Constraint::at_most(200),
            Constraint::unbounded(),
        );
        assert_eq!(groups(&rows), vec![vec![0], vec![1], vec![2]]);
        assert_eq!(rows[1].entries()[0].size.width, 200);
        assert_eq!(size.width, 200);
    }

    #[test]
    fn test_fixed_oversized_item_is_not_shrunk() {
        let mut items: Vec<Box<dyn Item>> = vec![
            Box::new(SizedItem::new(20, 20)),
            Box::new(SizedItem::new(0, 0).with_params(LayoutParams::fixed(400, 20))),
        ];
        let (rows, size) = measure_rows(
            &mut items,
            Padding::default(),
            Spacing::new(0, 0),
            Constraint::at_most(200),
            Constraint::unbounded(),
        );
        assert_eq!(groups(&rows), vec![vec![0], vec![1]]);
        assert_eq!(size, Size::new(400, 40));
    }

    #[test]
    fn test_collapsed_items_take_no_space() {
        let mut items: Vec<Box<dyn Item>> = vec![
            Box::new(SizedItem::new(100, 20)),
            Box::new(SizedItem::new(500, 90).with_visibility(Visibility::Collapsed)),
            Box::new(SizedItem::new(100, 20)),
        ];
        let (rows, size) = measure_rows(
            &mut items,
            Padding::default(),
            Spacing::new(0, 0),
            Constraint::at_most(300),
            Constraint::unbounded(),
        );
        assert_eq!(groups(&rows), vec![vec![0, 2]]);
        assert_eq!(size, Size::new(200, 20));
    }

    #[test]
    fn test_empty_resolves_to_padding() {
        let (rows, size) = measure_rows(
            &mut [],
            Padding::new(4, 6, 8, 10),
            Spacing::new(16, 24),
            Constraint::at_most(300),
            Constraint::at_most(300),
        );
        assert!(rows.is_empty());
        assert_eq!(size, Size::new(12, 16));
    }

    #[test]
    fn test_content_height_excludes_trailing_spacing() {
        let mut items = items(&[100, 100, 100], 30);
        let (rows, size) = measure_rows(
            &mut items,
            Padding::uniform(5),
            Spacing::new(0, 24),
            Constraint::at_most(110),
            Constraint::at_most(1000),
        );
        assert_eq!(rows.len(), 3);
        assert_eq!(size.height, 10 + 3 * 30 + 2 * 24);
    }

    #[test]
    fn test_exact_axes_ignore_content() {
        let mut items = items(&[100, 100, 100], 30);
        let (_, size) = measure_rows(
            &mut items,
            Padding::default(),
            Spacing::default(),
            Constraint::exact(640),
            Constraint::exact(48),
        );
        assert_eq!(size, Size::new(640, 48));
    }

    #[test]
    fn test_available_width_is_full_bound() {
        // 3 * (10 + 40) = 150 fits the 160 bound even though padding takes 40 of it
        let mut items = items(&[40, 40, 40, 40], 10);
        let (rows, _) = measure_rows(
            &mut items,
            Padding::symmetric(20, 0),
            Spacing::new(10, 0),
            Constraint::exact(160),
            Constraint::unbounded(),
        );
        assert_eq!(groups(&rows), vec![vec![0, 1, 2], vec![3]]);
    }

    #[test]
    fn test_huge_padding_saturates() {
        let mut items = items(&[40, 40], 10);
        let (rows, size) = measure_rows(
            &mut items,
            Padding::new(i32::MAX, 0, 1, 0),
            Spacing::new(10, 10),
            Constraint::at_most(100),
            Constraint::at_most(100),
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(size, Size::new(i32::MAX, 10));
    }

    #[test]
    fn test_unbounded_width_never_wraps() {
        let mut items = items(&[1000, 1000, 1000], 10);
        let (rows, size) = measure_rows(
            &mut items,
            Padding::default(),
            Spacing::new(5, 0),
            Constraint::unbounded(),
            Constraint::unbounded(),
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(size.width, 3015);
    }

    #[test]
    fn test_fill_child_takes_content_box() {
        let mut items: Vec<Box<dyn Item>> = vec![Box::new(
            SizedItem::new(10, 10)
                .with_params(LayoutParams::new(SizeIntent::Fill, SizeIntent::Wrap)),
        )];
        let (rows, _) = measure_rows(
            &mut items,
            Padding::symmetric(8, 0),
            Spacing::new(0, 0),
            Constraint::exact(216),
            Constraint::unbounded(),
        );
        assert_eq!(rows[0].entries()[0].size, Size::new(200, 10));
    }
}
