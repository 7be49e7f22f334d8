//! Same-line merging of maximal rects.
//!
//! Each pass walks every ordered pair of surviving rects. When a pair is on
//! the same line and the second rect overlaps or abuts the first, the first
//! rect absorbs it and the second is marked removed. Marks take effect at
//! once, so a rect absorbed earlier in a pass is skipped for the rest of it.
//! A pass reads the previous pass's survivors and produces a fresh list; the
//! only mutation is on that pass's own working copies.

use tracing::trace;

use crate::geometry::{Rect, extend_width, next_to, overlaps, same_line};
use crate::params::{MERGE_PASSES, MergeParams};

/// Run one merge pass over `rects`.
///
/// Returns the survivors, in input order, and how many rects were absorbed.
pub fn merge_pass(rects: &[Rect], params: &MergeParams) -> (Vec<Rect>, usize) {
    let mut work = rects.to_vec();
    let mut removed = vec![false; work.len()];
    let mut absorbed = 0;

    for i in 0..work.len() {
        for j in 0..work.len() {
            if i == j || removed[i] || removed[j] {
                continue;
            }
            let b = work[j];
            let a = &mut work[i];
            if !same_line(a, &b, params.y_margin) {
                continue;
            }

            // Both checks run on the same pair; the second sees the width the
            // first may have just extended.
            if overlaps(a, &b) {
                extend_width(a, &b);
                a.height = a.height.max(b.height);
                removed[j] = true;
            }
            if next_to(a, &b, params.x_margin) {
                extend_width(a, &b);
                removed[j] = true;
            }
            if removed[j] {
                absorbed += 1;
            }
        }
    }

    let survivors = work
        .into_iter()
        .zip(removed)
        .filter_map(|(r, gone)| (!gone).then_some(r))
        .collect();
    (survivors, absorbed)
}

/// Run exactly [`MERGE_PASSES`] merge passes, reporting per-pass absorb counts.
pub fn merge_lines_with_stats(
    rects: &[Rect],
    params: &MergeParams,
) -> (Vec<Rect>, [usize; MERGE_PASSES]) {
    let mut current = rects.to_vec();
    let mut absorbed = [0; MERGE_PASSES];
    for (pass, count) in absorbed.iter_mut().enumerate() {
        let (next, n) = merge_pass(&current, params);
        trace!(pass, absorbed = n, remaining = next.len(), "merge pass");
        *count = n;
        current = next;
    }
    (current, absorbed)
}

/// Merge same-line rects that overlap or sit within `x_margin` of each other.
pub fn merge_lines(rects: &[Rect], params: &MergeParams) -> Vec<Rect> {
    merge_lines_with_stats(rects, params).0
}
