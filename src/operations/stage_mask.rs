use crate::geometry::{clamp_dimension, CornerRadii, Rect};
use crate::path::{Path, PathCommand};

use super::rect_path::rounded_rect_path;

/// Default padding between the target and the spotlight hole edge.
pub const DEFAULT_STAGE_PADDING: f64 = 10.0;

/// Default corner radius of the spotlight hole.
pub const DEFAULT_STAGE_RADIUS: f64 = 5.0;

/// Builds the rounded spotlight hole around a target rect.
///
/// The radius is clamped so opposite corners never overlap, then floored
/// to a whole pixel.
#[must_use]
pub fn stage_hole_path(target: &Rect, padding: f64, radius: f64) -> Path {
    let stage = target.inflated(padding);
    let clamped = radius
        .min(stage.width / 2.0)
        .min(stage.height / 2.0)
        .max(0.0)
        .floor();
    rounded_rect_path(&stage, &CornerRadii::uniform(clamped))
}

/// Builds the closed loop covering the whole viewport.
#[must_use]
pub fn viewport_path(width: f64, height: f64) -> Path {
    let width = clamp_dimension(width);
    let height = clamp_dimension(height);
    Path::from_commands(vec![
        PathCommand::MoveTo { x: width, y: 0.0 },
        PathCommand::LineTo { x: 0.0, y: 0.0 },
        PathCommand::LineTo { x: 0.0, y: height },
        PathCommand::LineTo {
            x: width,
            y: height,
        },
        PathCommand::LineTo { x: width, y: 0.0 },
        PathCommand::Close,
    ])
}

/// Composes the full-viewport mask with a spotlight hole punched over the
/// target. The two subpaths wind oppositely enough for an even-odd fill to
/// leave the hole transparent.
#[must_use]
pub fn stage_mask_path(
    target: &Rect,
    viewport_width: f64,
    viewport_height: f64,
    padding: f64,
    radius: f64,
) -> String {
    let viewport = viewport_path(viewport_width, viewport_height);
    let hole = stage_hole_path(target, padding, radius);
    format!("{viewport}\n{hole}")
}
