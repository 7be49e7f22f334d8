//! Removal of rects strictly enclosed by another rect on the same page.

use crate::geometry::{Rect, inside};

/// Keep only the maximal rects: those not strictly inside any other rect.
///
/// All-pairs check, O(n^2). Order of the survivors is preserved and nothing is
/// resized.
pub fn filter_contained(rects: &[Rect]) -> Vec<Rect> {
    rects
        .iter()
        .filter(|r| !rects.iter().any(|other| inside(r, other)))
        .copied()
        .collect()
}
