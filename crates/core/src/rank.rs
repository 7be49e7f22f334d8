//! Reading-order ranking of selection rects.

use ordered_float::OrderedFloat;

use crate::geometry::Rect;

/// Sort key: `page * top` first, then `left`.
///
/// The product groups rects by page when page numbers dwarf the in-page
/// offsets. A rect without a page ranks as page 0, where every product is
/// zero, so those rects order by `left` alone.
fn rank_key(r: &Rect) -> (OrderedFloat<f64>, OrderedFloat<f64>) {
    let page = f64::from(r.page.unwrap_or(0));
    (OrderedFloat(page * r.top), OrderedFloat(r.left))
}

/// Sort rects in place into reading order. The sort is stable, so rects with
/// equal keys keep their input order.
pub fn rank(rects: &mut [Rect]) {
    rects.sort_by_key(rank_key);
}

/// Returns a ranked copy of `rects`.
pub fn ranked(rects: &[Rect]) -> Vec<Rect> {
    let mut out = rects.to_vec();
    rank(&mut out);
    out
}
