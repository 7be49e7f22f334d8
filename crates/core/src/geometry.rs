//! Rect value type and the pairwise predicates shared by every stage.
//!
//! Coordinates are opaque numbers in one consistent space (usually viewport
//! pixels at a fixed zoom): `top` grows downwards, `left` grows rightwards.
//! Every predicate compares rects on the same page only.

use serde::{Deserialize, Serialize};

/// An axis-aligned box reported by a text selection, tagged with its page.
///
/// Serialized with the field names the browser side uses for client rects;
/// the page is read from `pageNumber` only. A rect without a page is on no
/// page: it ranks as page 0 but is never on the same page as a numbered rect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    #[serde(rename = "pageNumber", default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(page: u32, top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            page: Some(page),
            top,
            left,
            width,
            height,
        }
    }

    /// A rect with no page identifier.
    pub fn unpaged(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            page: None,
            top,
            left,
            width,
            height,
        }
    }

    /// X coordinate of the right edge.
    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Y coordinate of the bottom edge.
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// True when `a` and `b` sit on one visual text line: their tops and their
/// heights both differ by less than `y_margin`.
#[inline]
pub fn same_line(a: &Rect, b: &Rect, y_margin: f64) -> bool {
    a.page == b.page
        && (a.top - b.top).abs() < y_margin
        && (a.height - b.height).abs() < y_margin
}

/// True when the left edge of `b` falls within the horizontal span of `a`.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.page == b.page && a.left <= b.left && b.left <= a.right()
}

/// True when `a` lies strictly inside `b` on all four bounds.
///
/// Identical rects are not inside each other.
#[inline]
pub fn inside(a: &Rect, b: &Rect) -> bool {
    a.page == b.page
        && a.top > b.top
        && a.left > b.left
        && a.bottom() < b.bottom()
        && a.right() < b.right()
}

/// True when `b` starts to the right of `a`, ends no earlier than `a`, and the
/// gap between them is at most `x_margin`.
#[inline]
pub fn next_to(a: &Rect, b: &Rect, x_margin: f64) -> bool {
    let a_right = a.right();
    a.page == b.page && a.left <= b.left && a_right <= b.right() && b.left - a_right <= x_margin
}

/// Grow `a` rightwards so it reaches the right edge of `b`. Never shrinks.
#[inline]
pub fn extend_width(a: &mut Rect, b: &Rect) {
    a.width = a.width.max(b.right() - a.left);
}
