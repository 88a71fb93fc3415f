//! Best-fit candidate selection

use crate::types::LayoutItem;

/// Pick the item to place in a panel with the given size limit.
///
/// Candidates are scanned in descending `priority_rank` order (stable, so
/// equal ranks keep input order) and the first one whose width and height
/// both fit is returned. The scan stops at the first acceptable candidate
/// rather than hunting for the tightest fit: a lower-rank item is never
/// preferred just because it is smaller. Returns `None` when nothing fits.
///
/// Callers are expected to have filtered out non-placeable items already.
pub fn select_best_fit(
    candidates: &[LayoutItem],
    max_width: f32,
    max_height: f32,
) -> Option<&LayoutItem> {
    let mut ranked: Vec<&LayoutItem> = candidates.iter().collect();
    ranked.sort_by(|a, b| b.priority_rank.cmp(&a.priority_rank));
    ranked
        .into_iter()
        .find(|item| item.width <= max_width && item.height <= max_height)
}
