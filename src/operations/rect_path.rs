use crate::geometry::{CornerRadii, Rect};
use crate::path::{Path, PathCommand};

/// Emits a closed rounded-rectangle path.
///
/// The path starts on the top edge just after the top-left corner and runs
/// clockwise on screen. A corner whose radii are both zero contributes no
/// arc; its adjoining line commands meet at a sharp corner.
///
/// Radii are used as given — run them through
/// [`crate::geometry::resolve_radii`] first so adjacent arcs cannot
/// overlap.
#[must_use]
pub fn rounded_rect_path(rect: &Rect, radii: &CornerRadii) -> Path {
    let Rect {
        x,
        y,
        width,
        height,
    } = *rect;

    let top_left_x = x + radii.top_left.x;
    let top_right_x = x + width - radii.top_right.x;
    let right_top_y = y + radii.top_right.y;
    let right_bottom_y = y + height - radii.bottom_right.y;
    let bottom_right_x = x + width - radii.bottom_right.x;
    let bottom_left_x = x + radii.bottom_left.x;
    let left_bottom_y = y + height - radii.bottom_left.y;
    let left_top_y = y + radii.top_left.y;

    let mut path = Path::new();
    path.push(PathCommand::MoveTo { x: top_left_x, y });
    path.push(PathCommand::HLineTo { x: top_right_x });
    if radii.top_right.is_rounded() {
        path.push(PathCommand::Arc {
            rx: radii.top_right.x,
            ry: radii.top_right.y,
            x: x + width,
            y: right_top_y,
        });
    }
    path.push(PathCommand::VLineTo { y: right_bottom_y });
    if radii.bottom_right.is_rounded() {
        path.push(PathCommand::Arc {
            rx: radii.bottom_right.x,
            ry: radii.bottom_right.y,
            x: bottom_right_x,
            y: y + height,
        });
    }
    path.push(PathCommand::HLineTo { x: bottom_left_x });
    if radii.bottom_left.is_rounded() {
        path.push(PathCommand::Arc {
            rx: radii.bottom_left.x,
            ry: radii.bottom_left.y,
            x,
            y: left_bottom_y,
        });
    }
    path.push(PathCommand::VLineTo { y: left_top_y });
    if radii.top_left.is_rounded() {
        path.push(PathCommand::Arc {
            rx: radii.top_left.x,
            ry: radii.top_left.y,
            x: top_left_x,
            y,
        });
    }
    path.push(PathCommand::Close);
    path
}
