//! Geometric value types: points, canonical edges and triangles.

mod edge;
mod point2;
mod triangle;

pub use edge::Edge;
pub use point2::Point2;
pub use triangle::{circumcircle, Triangle, DEFAULT_COLLINEAR_EPSILON};

pub(crate) use triangle::default_epsilon;
