use crate::math::intersect_2d::line_line_intersect_2d;
use crate::math::polygon_2d::orientation_2d;
use crate::math::{Point2, Vector2};

/// Offsets below this magnitude are treated as zero and return the input
/// unchanged.
const MIN_OFFSET: f64 = 1e-3;

/// Inflates or deflates a simple polygon by a scalar margin using
/// per-vertex miter offsetting.
///
/// Each vertex relocates to the intersection of its two adjacent edges
/// after both are translated along their outward normals. This is local,
/// closed-form geometry, not a true Minkowski offset: sharp concave
/// vertices, or offsets large relative to local feature size, can produce
/// a self-intersecting result. Accepted limitation, not repaired here.
///
/// # Sign Convention
///
/// Positive offsets move outward and negative inward, relative to the
/// polygon's own winding orientation — callers never need to know which
/// way the vertex list winds.
#[derive(Debug)]
pub struct PolygonOffset2D {
    points: Vec<Point2>,
    offset: f64,
}

impl PolygonOffset2D {
    /// Creates a new polygon offset operation.
    #[must_use]
    pub fn new(points: Vec<Point2>, offset: f64) -> Self {
        Self { points, offset }
    }

    /// Executes the offset, producing one relocated vertex per input
    /// vertex in the original order.
    ///
    /// Non-finite offsets and magnitudes below `1e-3` return the input
    /// unchanged.
    #[must_use]
    pub fn execute(&self) -> Vec<Point2> {
        if !self.offset.is_finite() || self.offset.abs() < MIN_OFFSET {
            return self.points.clone();
        }

        let n = self.points.len();
        let orientation = orientation_2d(&self.points);
        let mut result = Vec::with_capacity(n);

        for index in 0..n {
            let prev = self.points[(index + n - 1) % n];
            let current = self.points[index];
            let next = self.points[(index + 1) % n];

            let shift_prev = edge_normal(&prev, &current, orientation) * self.offset;
            let shift_next = edge_normal(&current, &next, orientation) * self.offset;

            let prev_start = prev + shift_prev;
            let prev_end = current + shift_prev;
            let next_start = current + shift_next;
            let next_end = next + shift_next;

            // Parallel or collinear edges: keep the corner on the previous
            // edge's offset instead of dividing by a near-zero determinant.
            let vertex = line_line_intersect_2d(&prev_start, &prev_end, &next_start, &next_end)
                .unwrap_or(prev_end);
            result.push(vertex);
        }

        result
    }
}

/// Outward unit normal of the edge `a`→`b` for the given winding
/// orientation sign. Zero-length edges yield a zero normal, leaving the
/// edge untranslated.
fn edge_normal(a: &Point2, b: &Point2, orientation: f64) -> Vector2 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let length = dx.hypot(dy);
    if length <= 0.0 {
        return Vector2::new(0.0, 0.0);
    }
    if orientation >= 0.0 {
        Vector2::new(dy / length, -dx / length)
    } else {
        Vector2::new(-dy / length, dx / length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(coords: &[(f64, f64)]) -> Vec<Point2> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    fn assert_point_near(a: &Point2, b: (f64, f64), tol: f64, msg: &str) {
        let d = ((a.x - b.0).powi(2) + (a.y - b.1).powi(2)).sqrt();
        assert!(
            d < tol,
            "{msg}: expected ({}, {}), got ({}, {}), dist={d}",
            b.0,
            b.1,
            a.x,
            a.y
        );
    }

    #[test]
    fn zero_offset_returns_input() {
        let square = points(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        let result = PolygonOffset2D::new(square.clone(), 0.0).execute();
        assert_eq!(result, square);
    }

    #[test]
    fn sub_threshold_offset_returns_input() {
        let square = points(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        let result = PolygonOffset2D::new(square.clone(), 5e-4).execute();
        assert_eq!(result, square);
    }

    #[test]
    fn non_finite_offset_returns_input() {
        let square = points(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        assert_eq!(
            PolygonOffset2D::new(square.clone(), f64::NAN).execute(),
            square
        );
        assert_eq!(
            PolygonOffset2D::new(square.clone(), f64::INFINITY).execute(),
            square
        );
    }

    #[test]
    fn square_outward_offset() {
        // Screen-clockwise square: positive offset expands on every side.
        let square = points(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        let result = PolygonOffset2D::new(square, 1.0).execute();
        assert_point_near(&result[0], (-1.0, -1.0), 1e-9, "corner 0");
        assert_point_near(&result[1], (11.0, -1.0), 1e-9, "corner 1");
        assert_point_near(&result[2], (11.0, 11.0), 1e-9, "corner 2");
        assert_point_near(&result[3], (-1.0, 11.0), 1e-9, "corner 3");
    }

    #[test]
    fn square_inward_offset() {
        let square = points(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        let result = PolygonOffset2D::new(square, -2.0).execute();
        assert_point_near(&result[0], (2.0, 2.0), 1e-9, "corner 0");
        assert_point_near(&result[2], (8.0, 8.0), 1e-9, "corner 2");
    }

    #[test]
    fn winding_does_not_change_outward_sense() {
        // The same square with reversed vertex order still grows outward
        // for a positive offset.
        let reversed = points(&[(0.0, 10.0), (10.0, 10.0), (10.0, 0.0), (0.0, 0.0)]);
        let result = PolygonOffset2D::new(reversed, 1.0).execute();
        assert_point_near(&result[0], (-1.0, 11.0), 1e-9, "corner 0");
        assert_point_near(&result[2], (11.0, -1.0), 1e-9, "corner 2");
    }

    #[test]
    fn triangle_apex_moves_along_miter() {
        // Apex of an isoceles triangle: the miter pushes it straight up
        // (y-down) by offset / sin(half apex angle) = √5.
        let triangle = points(&[(90.0, 75.0), (130.0, 155.0), (50.0, 155.0)]);
        let result = PolygonOffset2D::new(triangle, 1.0).execute();
        assert_point_near(&result[0], (90.0, 75.0 - 5.0_f64.sqrt()), 1e-9, "apex");
    }

    #[test]
    fn concave_vertex_moves_into_the_notch() {
        // L-shape, screen-clockwise; the inner corner (5,5) moves toward
        // the notch interior when offsetting outward.
        let l_shape = points(&[
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 5.0),
            (5.0, 5.0),
            (5.0, 10.0),
            (0.0, 10.0),
        ]);
        let result = PolygonOffset2D::new(l_shape, 1.0).execute();
        assert_point_near(&result[3], (6.0, 6.0), 1e-9, "inner corner");
        assert_point_near(&result[0], (-1.0, -1.0), 1e-9, "outer corner");
    }

    #[test]
    fn collinear_edges_fall_back_deterministically() {
        // The middle vertex sits on a straight run; parallel offset edges
        // cannot intersect, so the vertex lands on the shifted edge.
        let strip = points(&[(0.0, 0.0), (5.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        let result = PolygonOffset2D::new(strip, 1.0).execute();
        assert_point_near(&result[1], (5.0, -1.0), 1e-9, "collinear vertex");
        assert!(result.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }

    #[test]
    fn duplicate_vertex_keeps_finite_output() {
        // A zero-length edge produces a zero normal; no NaN may escape.
        let square = points(&[(0.0, 0.0), (10.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        let result = PolygonOffset2D::new(square, 1.0).execute();
        assert_eq!(result.len(), 5);
        assert!(result.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }

    #[test]
    fn vertex_count_is_preserved() {
        let pentagon = points(&[
            (0.0, 0.0),
            (4.0, -2.0),
            (8.0, 0.0),
            (6.0, 6.0),
            (2.0, 6.0),
        ]);
        assert_eq!(PolygonOffset2D::new(pentagon, 0.5).execute().len(), 5);
    }
}
