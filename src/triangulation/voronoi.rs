//! Voronoi edges derived from a Delaunay triangulation.
//!
//! The Voronoi diagram is the dual of the Delaunay triangulation:
//! - Each Delaunay triangle's circumcenter becomes a Voronoi vertex
//! - Each Delaunay edge shared by two triangles becomes a Voronoi edge
//! - Edges on the convex hull border an unbounded cell and have no finite dual
//!
//! Only the finite edges are produced here.
//!
//! # Example
//!
//! ```
//! use bowyer_watson::triangulation::voronoi_edges;
//! use bowyer_watson::{Point2, Triangle};
//!
//! let p = |x: f64, y: f64| Point2::new(x, y).unwrap();
//!
//! // Two triangles sharing the diagonal (0,0)-(2,1).
//! let triangles = vec![
//!     Triangle::new(p(0.0, 0.0), p(2.0, 0.0), p(2.0, 1.0)).unwrap(),
//!     Triangle::new(p(0.0, 0.0), p(2.0, 1.0), p(0.0, 2.0)).unwrap(),
//! ];
//!
//! let edges = voronoi_edges(&triangles);
//! assert_eq!(edges.len(), 1);
//! ```

use crate::primitives::{Edge, Point2, Triangle};
use num_traits::Float;
use std::collections::BTreeMap;

/// A finite Voronoi edge joining the circumcenters of two adjacent triangles.
#[derive(Debug, Clone, Copy)]
pub struct VoronoiEdge<F> {
    /// Circumcenter of the first triangle.
    pub start: Point2<F>,
    /// Circumcenter of the second triangle.
    pub end: Point2<F>,
}

impl<F: Float> VoronoiEdge<F> {
    /// Both endpoints as coordinate pairs.
    pub fn coordinates(&self) -> [(F, F); 2] {
        [self.start.coordinates(), self.end.coordinates()]
    }

    pub fn length_squared(&self) -> F {
        self.start.distance_squared(self.end)
    }
}

impl<F: Float> PartialEq for VoronoiEdge<F> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

/// Maps every Delaunay edge to the triangles that contain it.
///
/// In a valid triangulation an edge belongs to one triangle (hull edge) or two
/// (interior edge). Iteration order follows the canonical edge order, so
/// everything derived from it is deterministic.
#[derive(Debug, Clone)]
pub struct EdgeAdjacency<F> {
    incident: BTreeMap<Edge<F>, Vec<usize>>,
}

impl<F: Float> EdgeAdjacency<F> {
    /// Builds the adjacency map. Indices refer to positions in `triangles`.
    pub fn from_triangles(triangles: &[Triangle<F>]) -> Self {
        let mut incident: BTreeMap<Edge<F>, Vec<usize>> = BTreeMap::new();

        for (index, tri) in triangles.iter().enumerate() {
            for edge in tri.edges() {
                incident.entry(edge).or_default().push(index);
            }
        }

        let overshared = incident.values().filter(|owners| owners.len() > 2).count();
        if overshared > 0 {
            tracing::warn!(
                edges = overshared,
                "edges shared by more than two triangles are ignored"
            );
        }

        Self { incident }
    }

    /// Interior edges together with the indices of their two triangles.
    pub fn shared_edges(&self) -> impl Iterator<Item = (&Edge<F>, usize, usize)> + '_ {
        self.incident.iter().filter_map(|(edge, owners)| match owners.as_slice() {
            [first, second] => Some((edge, *first, *second)),
            _ => None,
        })
    }

    /// Edges that belong to exactly one triangle (the convex hull boundary).
    pub fn hull_edges(&self) -> impl Iterator<Item = &Edge<F>> + '_ {
        self.incident
            .iter()
            .filter(|(_, owners)| owners.len() == 1)
            .map(|(edge, _)| edge)
    }

    pub fn interior_edge_count(&self) -> usize {
        self.shared_edges().count()
    }

    pub fn hull_edge_count(&self) -> usize {
        self.hull_edges().count()
    }

    /// Total number of distinct edges.
    pub fn len(&self) -> usize {
        self.incident.len()
    }

    pub fn is_empty(&self) -> bool {
        self.incident.is_empty()
    }
}

/// Derives the finite Voronoi edges of a Delaunay triangulation.
///
/// Emits one edge per interior Delaunay edge whose two triangles both have a
/// defined circumcenter. Pairs involving a collinear triangle are skipped and
/// hull edges produce nothing.
pub fn voronoi_edges<F: Float>(triangles: &[Triangle<F>]) -> Vec<VoronoiEdge<F>> {
    let adjacency = EdgeAdjacency::from_triangles(triangles);

    adjacency
        .shared_edges()
        .filter_map(|(_, first, second)| {
            let start = triangles[first].circumcenter()?;
            let end = triangles[second].circumcenter()?;
            Some(VoronoiEdge { start, end })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y).unwrap()
    }

    fn tri(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> Triangle<f64> {
        Triangle::new(p(a.0, a.1), p(b.0, b.1), p(c.0, c.1)).unwrap()
    }

    #[test]
    fn test_empty() {
        let triangles: Vec<Triangle<f64>> = vec![];
        assert!(voronoi_edges(&triangles).is_empty());
        assert!(EdgeAdjacency::from_triangles(&triangles).is_empty());
    }

    #[test]
    fn test_single_triangle_has_only_hull_edges() {
        let triangles = vec![tri((0.0, 0.0), (1.0, 0.0), (0.5, 1.0))];
        let adjacency = EdgeAdjacency::from_triangles(&triangles);

        assert_eq!(adjacency.len(), 3);
        assert_eq!(adjacency.hull_edge_count(), 3);
        assert_eq!(adjacency.interior_edge_count(), 0);
        assert!(voronoi_edges(&triangles).is_empty());
    }

    #[test]
    fn test_two_triangles_share_one_edge() {
        let triangles = vec![
            tri((0.0, 0.0), (1.0, 0.0), (0.0, 1.0)),
            tri((1.0, 0.0), (1.0, 1.0), (0.0, 1.0)),
        ];
        let adjacency = EdgeAdjacency::from_triangles(&triangles);

        assert_eq!(adjacency.len(), 5);
        assert_eq!(adjacency.interior_edge_count(), 1);
        assert_eq!(adjacency.hull_edge_count(), 4);

        let (edge, first, second) = adjacency.shared_edges().next().unwrap();
        assert_eq!(*edge, Edge::new(p(1.0, 0.0), p(0.0, 1.0)).unwrap());
        assert_eq!((first, second), (0, 1));

        // Both circumcenters of the unit square halves sit at its center.
        let edges = voronoi_edges(&triangles);
        assert_eq!(edges.len(), 1);
        assert_relative_eq!(edges[0].start.x(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(edges[0].end.y(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(edges[0].length_squared(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_voronoi_edge_joins_circumcenters() {
        let first = tri((0.0, 0.0), (2.0, 0.0), (2.0, 1.0));
        let second = tri((0.0, 0.0), (2.0, 1.0), (0.0, 2.0));
        let edges = voronoi_edges(&[first, second]);

        assert_eq!(edges.len(), 1);
        let [start, end] = edges[0].coordinates();
        assert_eq!(start, first.circumcenter().unwrap().coordinates());
        assert_eq!(end, second.circumcenter().unwrap().coordinates());

        let expected = VoronoiEdge {
            start: first.circumcenter().unwrap(),
            end: second.circumcenter().unwrap(),
        };
        assert_eq!(edges[0], expected);
        assert_ne!(
            edges[0],
            VoronoiEdge {
                start: expected.end,
                end: expected.start,
            }
        );
    }

    #[test]
    fn test_degenerate_neighbor_is_skipped() {
        // The collinear triangle shares the edge (0,0)-(2,0) with a proper one.
        let triangles = vec![
            tri((0.0, 0.0), (2.0, 0.0), (1.0, 1.0)),
            tri((0.0, 0.0), (2.0, 0.0), (1.0, 0.0)),
        ];
        let adjacency = EdgeAdjacency::from_triangles(&triangles);
        assert_eq!(adjacency.interior_edge_count(), 1);
        assert!(voronoi_edges(&triangles).is_empty());
    }

    #[test]
    fn test_fan_around_center() {
        // Square with center point: 4 triangles, 4 interior spokes.
        let c = (0.5, 0.5);
        let triangles = vec![
            tri((0.0, 0.0), (1.0, 0.0), c),
            tri((1.0, 0.0), (1.0, 1.0), c),
            tri((1.0, 1.0), (0.0, 1.0), c),
            tri((0.0, 1.0), (0.0, 0.0), c),
        ];
        let adjacency = EdgeAdjacency::from_triangles(&triangles);
        assert_eq!(adjacency.interior_edge_count(), 4);
        assert_eq!(adjacency.hull_edge_count(), 4);
        assert_eq!(voronoi_edges(&triangles).len(), 4);
    }
}
