//! Finished triangulation and its summary metrics.

use super::voronoi::{voronoi_edges, EdgeAdjacency, VoronoiEdge};
use crate::bounds::Aabb2;
use crate::primitives::{Point2, Triangle};
use num_traits::Float;

/// Summary counts of a finished triangulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Metrics {
    /// Distinct input sites.
    ///
    /// Unlike a plain count of the input, repeated coordinates are counted
    /// once; the input length is `num_sites + duplicate_sites`.
    pub num_sites: usize,
    /// Input points dropped because an equal point came earlier.
    pub duplicate_sites: usize,
    /// Triangles in the final Delaunay triangulation.
    pub delaunay_triangles: usize,
    /// One circumcenter per surviving triangle.
    pub voronoi_vertices: usize,
    /// Finite Voronoi edges derived from shared Delaunay edges.
    pub voronoi_edges_created: usize,
}

/// The result of a successful [`Triangulator::run`](super::Triangulator::run).
///
/// Triangles are sorted by their canonical vertex order; sites keep the order
/// in which they were first seen in the input.
#[derive(Debug, Clone)]
pub struct Triangulation<F> {
    sites: Vec<Point2<F>>,
    bounds: Aabb2<F>,
    triangles: Vec<Triangle<F>>,
    voronoi_edges: Vec<VoronoiEdge<F>>,
    metrics: Metrics,
}

impl<F: Float> Triangulation<F> {
    pub(crate) fn assemble(
        sites: Vec<Point2<F>>,
        bounds: Aabb2<F>,
        duplicate_sites: usize,
        triangles: Vec<Triangle<F>>,
    ) -> Self {
        let voronoi_edges = voronoi_edges(&triangles);
        let metrics = Metrics {
            num_sites: sites.len(),
            duplicate_sites,
            delaunay_triangles: triangles.len(),
            voronoi_vertices: triangles.len(),
            voronoi_edges_created: voronoi_edges.len(),
        };

        Self {
            sites,
            bounds,
            triangles,
            voronoi_edges,
            metrics,
        }
    }

    /// Distinct input sites in first-seen order.
    pub fn sites(&self) -> &[Point2<F>] {
        &self.sites
    }

    /// Bounding box of the sites.
    pub fn bounds(&self) -> Aabb2<F> {
        self.bounds
    }

    /// The Delaunay triangles.
    pub fn triangles(&self) -> &[Triangle<F>] {
        &self.triangles
    }

    /// The finite Voronoi edges.
    pub fn voronoi_edges(&self) -> &[VoronoiEdge<F>] {
        &self.voronoi_edges
    }

    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    /// Edge-to-triangle adjacency of the final triangles.
    pub fn edge_adjacency(&self) -> EdgeAdjacency<F> {
        EdgeAdjacency::from_triangles(&self.triangles)
    }

    /// Splits the result into sites, triangles, Voronoi edges and metrics.
    pub fn into_parts(
        self,
    ) -> (Vec<Point2<F>>, Vec<Triangle<F>>, Vec<VoronoiEdge<F>>, Metrics) {
        (self.sites, self.triangles, self.voronoi_edges, self.metrics)
    }
}
