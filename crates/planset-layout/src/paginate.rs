//! Report grid pagination
//!
//! A raster fill for an unbounded image sequence: left to right, top to
//! bottom, overflowing onto a fresh page when the current page's capacity
//! is exhausted. Placement order strictly follows input order; there is
//! no reordering by size or name.

use crate::types::{CellPlacement, LayoutItem, PageLayout, PaginationGrid};

/// Lay items into grid cells page by page.
///
/// Cell `x`/`y` is the top-left corner in feet: columns advance by
/// `cell_width + cell_spacing` from the grid origin, rows descend by
/// `cell_height + cell_spacing`. Pages are labeled "Page 1", "Page 2", ...
/// and a new page starts exactly when the previous page's
/// `rows_per_page * items_per_row` slots are filled.
///
/// # Panics
/// A grid with zero rows or zero items per row is a programming error and
/// panics.
pub fn paginate(items: &[LayoutItem], grid: &PaginationGrid) -> Vec<PageLayout> {
    assert!(
        grid.items_per_row >= 1 && grid.rows_per_page >= 1,
        "pagination grid must have at least one row and one column"
    );

    let per_page = grid.page_capacity();
    let mut pages: Vec<PageLayout> = Vec::new();

    for (slot_index, item) in items.iter().enumerate() {
        let page_number = slot_index / per_page;
        let row = (slot_index / grid.items_per_row) % grid.rows_per_page;
        let col = slot_index % grid.items_per_row;

        if page_number == pages.len() {
            pages.push(PageLayout {
                label: format!("Page {}", page_number + 1),
                cells: Vec::new(),
            });
        }

        pages[page_number].cells.push(CellPlacement {
            row,
            col,
            x: grid.origin_x + col as f32 * (grid.cell_width + grid.cell_spacing),
            y: grid.origin_y - row as f32 * (grid.cell_height + grid.cell_spacing),
            item: item.clone(),
        });
    }

    pages
}
