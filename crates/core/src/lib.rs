//! hilite - consolidates text-selection client rects into clean highlight boxes.
//!
//! Platform selection APIs report one rect per text run, so a single
//! highlighted phrase usually arrives as many overlapping fragments. Painting
//! them all leaves seams and darker overlap bands; [`optimize`] reduces them to
//! a small set of rects suitable for an overlay.

pub mod containment;
pub mod error;
pub mod geometry;
pub mod merge;
pub mod optimize;
pub mod params;
pub mod rank;

pub use containment::filter_contained;
pub use error::{HiliteError, Result};
pub use geometry::Rect;
pub use merge::merge_lines;
pub use optimize::{OptimizeReport, optimize, optimize_with, optimize_with_report, validate};
pub use params::{MERGE_PASSES, MergeParams};
pub use rank::rank;
