//! Rect consolidation pipeline.
//!
//! Raw selection rects go through three stages:
//! 1. [`rank`](crate::rank::rank) into reading order
//! 2. [`filter_contained`](crate::containment::filter_contained) to keep maximal rects
//! 3. [`merge_lines`](crate::merge::merge_lines) for a fixed number of passes
//!
//! Input is validated once at this boundary; the stages never fail.

use tracing::debug;

use crate::containment::filter_contained;
use crate::error::{HiliteError, Result};
use crate::geometry::Rect;
use crate::merge::merge_lines_with_stats;
use crate::params::{MERGE_PASSES, MergeParams};
use crate::rank::ranked;

/// Counts collected while consolidating one selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptimizeReport {
    /// Rects received.
    pub input: usize,
    /// Rects dropped because another rect enclosed them.
    pub contained: usize,
    /// Rects absorbed by a same-line neighbour, per merge pass.
    pub merged_per_pass: [usize; MERGE_PASSES],
    /// Rects returned.
    pub output: usize,
}

impl OptimizeReport {
    /// Total rects absorbed across all passes.
    pub fn merged(&self) -> usize {
        self.merged_per_pass.iter().sum()
    }
}

/// Check the preconditions every stage relies on.
///
/// Coordinates must be finite and extents non-negative. An empty slice is
/// valid.
pub fn validate(rects: &[Rect]) -> Result<()> {
    for (index, r) in rects.iter().enumerate() {
        for (field, value) in [
            ("top", r.top),
            ("left", r.left),
            ("width", r.width),
            ("height", r.height),
        ] {
            if !value.is_finite() {
                return Err(HiliteError::NonFinite { index, field });
            }
        }
        for (field, value) in [("width", r.width), ("height", r.height)] {
            if value < 0.0 {
                return Err(HiliteError::NegativeExtent {
                    index,
                    field,
                    value,
                });
            }
        }
    }
    Ok(())
}

/// Consolidate selection rects with the default [`MergeParams`].
pub fn optimize(rects: &[Rect]) -> Result<Vec<Rect>> {
    optimize_with(rects, &MergeParams::default())
}

/// Consolidate selection rects with explicit merge parameters.
pub fn optimize_with(rects: &[Rect], params: &MergeParams) -> Result<Vec<Rect>> {
    optimize_with_report(rects, params).map(|(out, _)| out)
}

/// Consolidate selection rects and report what each stage removed.
pub fn optimize_with_report(
    rects: &[Rect],
    params: &MergeParams,
) -> Result<(Vec<Rect>, OptimizeReport)> {
    validate(rects)?;

    let ordered = ranked(rects);
    let maximal = filter_contained(&ordered);
    let (out, merged_per_pass) = merge_lines_with_stats(&maximal, params);

    let report = OptimizeReport {
        input: rects.len(),
        contained: rects.len() - maximal.len(),
        merged_per_pass,
        output: out.len(),
    };
    debug!(
        input = report.input,
        contained = report.contained,
        merged = report.merged(),
        output = report.output,
        "optimized selection rects"
    );
    Ok((out, report))
}
