//! Selected-prize derivation over a layout snapshot.
//!
//! The "selected" prize is always derived from actual visual layout, never
//! from the scheduler's block bookkeeping: sort items by their current left
//! edge, find the first one strictly beyond the viewport center, and take
//! its predecessor in that order (wrapping to the last item when nothing
//! lies beyond center). Keeping this a pure function over plain slices makes
//! it testable without any rendering surface.

/// Display position of the selected item.
///
/// `lefts[j]` is the current left edge of the item at display position `j`.
/// Returns a valid position for any non-empty input; an empty slice returns 0.
pub fn selected_position(lefts: &[f64], center: f64) -> usize {
    if lefts.is_empty() {
        return 0;
    }

    let mut order: Vec<usize> = (0..lefts.len()).collect();
    order.sort_by(|&a, &b| lefts[a].total_cmp(&lefts[b]));

    match order.iter().position(|&j| lefts[j] > center) {
        Some(after) => order[(after + order.len() - 1) % order.len()],
        // Nothing beyond center: the last item in sorted order is selected.
        None => order[order.len() - 1],
    }
}

/// Left edges for a strip in display order: position `j` sits at
/// `j·block + front_offset`, since only the front item is displaced and
/// every later item packs against it.
pub fn left_edges(count: usize, block: f64, front_offset: f64) -> Vec<f64> {
    (0..count).map(|j| j as f64 * block + front_offset).collect()
}
