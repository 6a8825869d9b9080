use crate::geometry::RasterMask;
use crate::math::polygon_2d::dedup_consecutive;

use super::normalize_polygon::to_clip_polygon;
use super::simplify_polyline::SimplifyPolyline;
use super::trace_boundary::TraceBoundary;

/// Default alpha threshold above which a pixel counts as foreground.
pub const DEFAULT_ALPHA_THRESHOLD: u8 = 8;

/// Default simplification tolerance, in raster pixels.
pub const DEFAULT_SIMPLIFY_TOLERANCE: f64 = 1.2;

/// The raster pipeline: trace the mask boundary, drop duplicate points,
/// simplify, and format the result as a percent-coordinate clip polygon.
#[derive(Debug)]
pub struct ExtractClipPolygon<'a> {
    mask: &'a RasterMask,
    tolerance: f64,
}

impl<'a> ExtractClipPolygon<'a> {
    /// Creates the pipeline with [`DEFAULT_SIMPLIFY_TOLERANCE`].
    #[must_use]
    pub fn new(mask: &'a RasterMask) -> Self {
        Self {
            mask,
            tolerance: DEFAULT_SIMPLIFY_TOLERANCE,
        }
    }

    /// Overrides the simplification tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Runs the pipeline.
    ///
    /// Returns `None` when either the traced boundary or the simplified
    /// polyline has fewer than 3 points — there is no usable polygon in
    /// the mask.
    #[must_use]
    pub fn execute(&self) -> Option<String> {
        let boundary = TraceBoundary::new(self.mask).execute();
        if boundary.len() < 3 {
            return None;
        }

        let simplified =
            SimplifyPolyline::new(dedup_consecutive(&boundary), self.tolerance).execute();
        if simplified.len() < 3 {
            return None;
        }

        Some(to_clip_polygon(
            &simplified,
            self.mask.width(),
            self.mask.height(),
        ))
    }
}
