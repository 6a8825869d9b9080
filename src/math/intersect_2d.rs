use super::Point2;

/// Determinant magnitude below which two lines are treated as parallel.
/// Coarser than [`crate::math::TOLERANCE`]: a nearly-parallel miter
/// intersection lands arbitrarily far from the shape.
const PARALLEL_EPS: f64 = 1e-5;

/// Intersection of the two infinite lines through `p1`–`p2` and `p3`–`p4`.
///
/// Uses the standard two-line determinant formula. Returns `None` when the
/// denominator magnitude falls below [`PARALLEL_EPS`] (parallel or
/// collinear lines); callers choose their own fallback point.
#[must_use]
pub fn line_line_intersect_2d(p1: &Point2, p2: &Point2, p3: &Point2, p4: &Point2) -> Option<Point2> {
    let denom = (p1.x - p2.x) * (p3.y - p4.y) - (p1.y - p2.y) * (p3.x - p4.x);
    if denom.abs() < PARALLEL_EPS {
        return None;
    }

    let det1 = p1.x * p2.y - p1.y * p2.x;
    let det2 = p3.x * p4.y - p3.y * p4.x;
    let x = (det1 * (p3.x - p4.x) - (p1.x - p2.x) * det2) / denom;
    let y = (det1 * (p3.y - p4.y) - (p1.y - p2.y) * det2) / denom;
    Some(Point2::new(x, y))
}
