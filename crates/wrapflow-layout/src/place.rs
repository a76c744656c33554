//! Layout pass: position items from a measured [`Row`] list.

use wrapflow_core::{Bounds, Item, Padding, Spacing};

use crate::state::Row;

/// Place every row entry using its cached measured size.
///
/// Rows start at the top-left padding corner; each item is followed by the
/// horizontal spacing and each row by the vertical spacing.
pub(crate) fn place_rows(
    items: &mut [Box<dyn Item>],
    rows: &[Row],
    padding: Padding,
    spacing: Spacing,
) {
    let mut y = padding.top;
    for (row_index, row) in rows.iter().enumerate() {
        let mut x = padding.left;
        for entry in row.entries() {
            let bounds = Bounds::from_origin(x, y, entry.size);
            items[entry.index].place(bounds);
            x = bounds.right.saturating_add(spacing.horizontal);
        }
        log::trace!("placed row {row_index} at y={y}");
        y = y.saturating_add(row.height()).saturating_add(spacing.vertical);
    }
}
