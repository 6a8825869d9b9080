pub mod corner_radii;
pub mod mask;
pub mod rect;

pub use corner_radii::{resolve_radii, CornerRadii, CornerRadius};
pub use mask::RasterMask;
pub use rect::{clamp_dimension, Rect};
