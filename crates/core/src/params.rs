//! Line merger parameters.
//!
//! Contains MergeParams for controlling how same-line rects are folded together.

use crate::error::{HiliteError, Result};

/// Number of line merger passes. Fixed; the merger never loops to a fixed point.
pub const MERGE_PASSES: usize = 3;

/// Parameters for the line merger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergeParams {
    /// Two rects whose tops and heights both differ by less than this are
    /// considered to be on the same line.
    pub y_margin: f64,

    /// Same-line rects separated by a horizontal gap no larger than this are
    /// considered to be one continuous run.
    pub x_margin: f64,
}

impl Default for MergeParams {
    fn default() -> Self {
        Self {
            y_margin: 5.0,
            x_margin: 10.0,
        }
    }
}

impl MergeParams {
    /// Creates merge parameters, rejecting negative or non-finite margins.
    pub fn new(y_margin: f64, x_margin: f64) -> Result<Self> {
        for (name, value) in [("y_margin", y_margin), ("x_margin", x_margin)] {
            if !value.is_finite() || value < 0.0 {
                return Err(HiliteError::InvalidParams(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }
        Ok(Self { y_margin, x_margin })
    }
}
