mod extract_clip;
mod normalize_polygon;
mod polygon_offset_2d;
mod rect_path;
mod resolve_path;
mod simplify_polyline;
mod stage_mask;
mod trace_boundary;

pub use extract_clip::{ExtractClipPolygon, DEFAULT_ALPHA_THRESHOLD, DEFAULT_SIMPLIFY_TOLERANCE};
pub use normalize_polygon::to_clip_polygon;
pub use polygon_offset_2d::PolygonOffset2D;
pub use rect_path::rounded_rect_path;
pub use resolve_path::{polygon_path, ElementGeometry, ResolveOutlinePath, ResolvedOutline};
pub use simplify_polyline::SimplifyPolyline;
pub use stage_mask::{
    stage_hole_path, stage_mask_path, viewport_path, DEFAULT_STAGE_PADDING, DEFAULT_STAGE_RADIUS,
};
pub use trace_boundary::TraceBoundary;
