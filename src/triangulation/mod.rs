//! Triangulation of point sets.
//!
//! This module computes the Delaunay triangulation of a planar point set by
//! incremental Bowyer-Watson insertion, and derives the finite edges of the
//! dual Voronoi diagram.

mod delaunay;
mod output;
mod voronoi;

pub use delaunay::{
    triangulate, InsertionStep, SuperTriangle, Triangulator, TriangulatorConfig,
    DEFAULT_HULL_RETRIES, DEFAULT_SUPER_TRIANGLE_SCALE, SUPER_TRIANGLE_GROWTH,
};
pub use output::{Metrics, Triangulation};
pub use voronoi::{voronoi_edges, EdgeAdjacency, VoronoiEdge};
