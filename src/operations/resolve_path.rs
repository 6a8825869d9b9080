use tracing::debug;

use crate::geometry::{resolve_radii, CornerRadii, Rect};
use crate::math::Point2;
use crate::path::{Path, PathCommand};
use crate::style::OutlineSpec;

use super::polygon_offset_2d::PolygonOffset2D;
use super::rect_path::rounded_rect_path;

/// Geometry of the element being outlined: its border box, its corner
/// radii, and an optional clip polygon in absolute screen coordinates.
#[derive(Debug, Clone)]
pub struct ElementGeometry {
    rect: Rect,
    corner_radii: CornerRadii,
    clip_polygon: Option<Vec<Point2>>,
}

impl ElementGeometry {
    /// Creates rect-based geometry. Radii are the element's own,
    /// un-inflated values.
    #[must_use]
    pub fn new(rect: Rect, corner_radii: CornerRadii) -> Self {
        Self {
            rect,
            corner_radii,
            clip_polygon: None,
        }
    }

    /// Attaches an already-parsed clip polygon (see
    /// [`crate::style::parse::parse_clip_polygon`]). A polygon with at
    /// least 3 vertices takes precedence over the rect geometry.
    #[must_use]
    pub fn with_clip_polygon(mut self, polygon: Vec<Point2>) -> Self {
        self.clip_polygon = Some(polygon);
        self
    }
}

/// The drawable result of outline resolution: a path plus the stroke
/// metadata the renderer applies to it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOutline {
    pub path: Path,
    pub stroke_width: f64,
    pub color: String,
    pub dash_pattern: Option<(f64, f64)>,
}

impl ResolvedOutline {
    /// The dash pattern as a stroke attribute value, e.g. `"8 5"`.
    #[must_use]
    pub fn dash_attribute(&self) -> Option<String> {
        self.dash_pattern.map(|(dash, gap)| format!("{dash} {gap}"))
    }
}

/// Top-level entry point: turns an element's geometry and an outline spec
/// into a drawable path plus stroke metadata.
///
/// The shape is grown by `inflate = offset + width / 2` so the stroke
/// centerline clears the element by exactly the configured offset.
#[derive(Debug)]
pub struct ResolveOutlinePath {
    geometry: ElementGeometry,
    spec: OutlineSpec,
}

impl ResolveOutlinePath {
    /// Creates a new resolution for one element.
    #[must_use]
    pub fn new(geometry: ElementGeometry, spec: OutlineSpec) -> Self {
        Self { geometry, spec }
    }

    /// Resolves the outline.
    #[must_use]
    pub fn execute(&self) -> ResolvedOutline {
        let inflate = self.spec.inflate();

        let path = match &self.geometry.clip_polygon {
            Some(polygon) if polygon.len() >= 3 => {
                let inflated = PolygonOffset2D::new(polygon.clone(), inflate).execute();
                polygon_path(&inflated)
            }
            Some(_) => {
                debug!("clip polygon has fewer than 3 vertices, using rect geometry");
                self.rect_outline(inflate)
            }
            None => self.rect_outline(inflate),
        };

        ResolvedOutline {
            path,
            stroke_width: self.spec.width(),
            color: self.spec.color().to_owned(),
            dash_pattern: self.spec.style().dash_pattern(),
        }
    }

    fn rect_outline(&self, inflate: f64) -> Path {
        let outer = self.geometry.rect.inflated(inflate);
        let inflated = self.geometry.corner_radii.inflated(inflate);
        let resolved = resolve_radii(&outer, &inflated);
        rounded_rect_path(&outer, &resolved)
    }
}

/// Emits a closed path of line commands through polygon vertices: the
/// first vertex moves, the rest draw lines, and the path closes back to
/// the start.
#[must_use]
pub fn polygon_path(points: &[Point2]) -> Path {
    let mut path = Path::new();
    let Some(first) = points.first() else {
        return path;
    };
    path.push(PathCommand::MoveTo {
        x: first.x,
        y: first.y,
    });
    for pt in &points[1..] {
        path.push(PathCommand::LineTo { x: pt.x, y: pt.y });
    }
    path.push(PathCommand::Close);
    path
}
