use tracing::warn;

use crate::geometry::mask::{RasterMask, NEIGHBORS_8};
use crate::math::Point2;

/// Extracts one closed boundary polyline from a raster mask using
/// Moore-neighbor tracing.
///
/// Only the first boundary found in row-major scan order is traced; a mask
/// with multiple disconnected foreground regions yields a single region's
/// outline.
#[derive(Debug)]
pub struct TraceBoundary<'a> {
    mask: &'a RasterMask,
}

impl<'a> TraceBoundary<'a> {
    /// Creates a new boundary trace over `mask`.
    #[must_use]
    pub fn new(mask: &'a RasterMask) -> Self {
        Self { mask }
    }

    /// Walks the boundary and returns its lattice points in visit order.
    ///
    /// Returns an empty polyline when the mask has no foreground cell with
    /// a background 8-neighbor. A dead-end walk (isolated cell) returns
    /// the partial trace, as does exceeding the iteration cap of
    /// `4 · width · height` steps on cyclic or degenerate masks.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Vec<Point2> {
        let Some((start_x, start_y)) = self.find_start() else {
            return Vec::new();
        };

        let max_steps = 4 * self.mask.width() * self.mask.height();
        let mut boundary = Vec::new();
        let (mut x, mut y) = (start_x, start_y);
        // The walk conceptually enters the start cell from the west, so
        // the first neighbor scan begins just north of west.
        let mut backtrack = 4;
        let mut steps = 0usize;

        loop {
            boundary.push(Point2::new(x as f64, y as f64));

            let mut advanced = false;
            for step in 0..8 {
                let direction = (backtrack + 1 + step) % 8;
                let (dx, dy) = NEIGHBORS_8[direction];
                if self.mask.is_foreground(x + dx, y + dy) {
                    x += dx;
                    y += dy;
                    backtrack = (direction + 4) % 8;
                    advanced = true;
                    break;
                }
            }
            if !advanced {
                // Dead end: an isolated cell with no foreground neighbor.
                break;
            }

            steps += 1;
            if steps > max_steps {
                warn!(steps, "boundary trace exceeded iteration cap, returning partial trace");
                break;
            }
            if x == start_x && y == start_y {
                break;
            }
        }

        boundary
    }

    /// Finds the first foreground cell (row-major) with a background
    /// 8-neighbor.
    #[allow(clippy::cast_possible_wrap)]
    fn find_start(&self) -> Option<(i64, i64)> {
        for y in 0..self.mask.height() as i64 {
            for x in 0..self.mask.width() as i64 {
                if self.mask.has_background_neighbor(x, y) {
                    return Some((x, y));
                }
            }
        }
        None
    }
}
