use super::{Point2, TOLERANCE};

/// Computes the signed area of a polygon (shoelace formula).
///
/// In the y-down screen coordinate system used throughout this crate a
/// positive sum corresponds to clockwise vertex order on screen.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns the winding orientation sign of a polygon: `1.0` when the
/// shoelace sum is non-negative, `-1.0` otherwise.
#[must_use]
pub fn orientation_2d(points: &[Point2]) -> f64 {
    if signed_area_2d(points) >= 0.0 {
        1.0
    } else {
        -1.0
    }
}

/// Removes consecutive duplicate points, keeping the first of each run.
///
/// Boundary traces revisit cells when the walk doubles back through a
/// one-pixel-wide neck; simplification requires those runs collapsed.
#[must_use]
pub fn dedup_consecutive(points: &[Point2]) -> Vec<Point2> {
    let mut out: Vec<Point2> = Vec::with_capacity(points.len());
    for &pt in points {
        if let Some(last) = out.last() {
            if (pt.x - last.x).abs() < TOLERANCE && (pt.y - last.y).abs() < TOLERANCE {
                continue;
            }
        }
        out.push(pt);
    }
    out
}
