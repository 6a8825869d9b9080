use crate::math::Point2;
use crate::path::fmt_number;

/// Formats a raster-space polyline as a percentage-coordinate
/// `polygon(...)` clip descriptor.
///
/// Boundary cells are sampled at pixel centers, hence the half-cell shift
/// before normalizing against the raster dimensions.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn to_clip_polygon(points: &[Point2], width: usize, height: usize) -> String {
    let w = width as f64;
    let h = height as f64;
    let vertices = points
        .iter()
        .map(|pt| {
            let px = (pt.x + 0.5) / w * 100.0;
            let py = (pt.y + 0.5) / h * 100.0;
            format!("{}% {}%", fmt_number(px), fmt_number(py))
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("polygon({vertices})")
}
