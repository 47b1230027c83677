//! bowyer-watson - Delaunay triangulation and Voronoi edges
//!
//! Computes the Delaunay triangulation of a planar point set with the
//! incremental Bowyer-Watson algorithm, then derives the finite edges of the
//! dual Voronoi diagram by joining the circumcenters of adjacent triangles.
//!
//! # Example
//!
//! ```
//! use bowyer_watson::triangulate;
//!
//! let triangulation = triangulate([
//!     (0.0_f64, 0.0),
//!     (1.0, 0.0),
//!     (1.0, 1.0),
//!     (0.0, 1.0),
//!     (0.5, 0.5),
//! ])
//! .unwrap();
//!
//! assert_eq!(triangulation.metrics().delaunay_triangles, 4);
//! assert_eq!(triangulation.metrics().voronoi_edges_created, 4);
//! ```

pub mod bounds;
pub mod error;
pub mod hull;
pub mod io;
pub mod primitives;
pub mod triangulation;

pub use error::TriangulationError;
pub use primitives::{circumcircle, Edge, Point2, Triangle};
pub use triangulation::{
    triangulate, Metrics, Triangulation, Triangulator, TriangulatorConfig, VoronoiEdge,
};
