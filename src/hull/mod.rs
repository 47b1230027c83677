//! Convex hull of a site set.
//!
//! The triangulator uses the hull boundary to confirm that cleanup kept every
//! triangle along the outside of the mesh.
//!
//! # Example
//!
//! ```
//! use bowyer_watson::hull::{convex_hull, hull_boundary_edges};
//! use bowyer_watson::Point2;
//!
//! let p = |x: f64, y: f64| Point2::new(x, y).unwrap();
//! let points = vec![p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0), p(1.0, 1.0), p(1.0, 0.5)];
//!
//! // Corners only; (1, 0) lies on the bottom side.
//! assert_eq!(convex_hull(&points).len(), 3);
//!
//! // The bottom side is split at (1, 0).
//! assert_eq!(hull_boundary_edges(&points).len(), 4);
//! ```

use crate::primitives::{Edge, Point2};
use num_traits::Float;

/// Computes the convex hull of a set of points using Andrew's monotone chain algorithm.
///
/// Returns the hull corners in counter-clockwise order, starting from the
/// lexicographically smallest point. Points lying exactly on a side are not
/// corners. The first and last points are NOT the same (the hull is
/// implicitly closed).
pub fn convex_hull<F: Float>(points: &[Point2<F>]) -> Vec<Point2<F>> {
    let mut sorted: Vec<Point2<F>> = points.to_vec();
    sorted.sort();
    sorted.dedup();

    if sorted.len() < 3 {
        return sorted;
    }

    // Build lower hull
    let mut lower: Vec<Point2<F>> = Vec::new();
    for &p in &sorted {
        while lower.len() >= 2
            && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= F::zero()
        {
            lower.pop();
        }
        lower.push(p);
    }

    // Build upper hull
    let mut upper: Vec<Point2<F>> = Vec::new();
    for &p in sorted.iter().rev() {
        while upper.len() >= 2
            && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= F::zero()
        {
            upper.pop();
        }
        upper.push(p);
    }

    // Remove last point of each half because it's repeated
    lower.pop();
    upper.pop();

    lower.extend(upper);
    lower
}

/// Edges between consecutive sites along the hull boundary.
///
/// Sites lying exactly on a hull side split that side, so every edge returned
/// must appear in a triangulation of `points`. Returns an empty list when the
/// points span no area (fewer than three corners).
pub fn hull_boundary_edges<F: Float>(points: &[Point2<F>]) -> Vec<Edge<F>> {
    let corners = convex_hull(points);
    if corners.len() < 3 {
        return Vec::new();
    }

    let mut edges = Vec::new();
    for (i, &a) in corners.iter().enumerate() {
        let b = corners[(i + 1) % corners.len()];
        let (dx, dy) = (b.x() - a.x(), b.y() - a.y());
        let length_sq = dx * dx + dy * dy;

        // Parameter along a -> b of every site on the side, endpoints included.
        let mut on_side: Vec<(F, Point2<F>)> = points
            .iter()
            .filter(|&&p| cross(a, b, p) == F::zero())
            .map(|&p| ((p.x() - a.x()) * dx + (p.y() - a.y()) * dy, p))
            .filter(|&(t, _)| t >= F::zero() && t <= length_sq)
            .collect();
        on_side.sort_by(|l, r| l.0.partial_cmp(&r.0).unwrap_or(std::cmp::Ordering::Equal));
        on_side.dedup_by(|l, r| l.1 == r.1);

        edges.extend(
            on_side
                .windows(2)
                .map(|pair| Edge::canonical(pair[0].1, pair[1].1)),
        );
    }
    edges
}

/// Cross product of vectors (a - o) and (b - o).
///
/// Positive if counter-clockwise, negative if clockwise, zero if collinear.
#[inline]
fn cross<F: Float>(o: Point2<F>, a: Point2<F>, b: Point2<F>) -> F {
    (a.x() - o.x()) * (b.y() - o.y()) - (a.y() - o.y()) * (b.x() - o.x())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y).unwrap()
    }

    #[test]
    fn test_convex_hull_small_inputs() {
        assert!(convex_hull::<f64>(&[]).is_empty());
        assert_eq!(convex_hull(&[p(1.0, 2.0)]), vec![p(1.0, 2.0)]);
        assert_eq!(convex_hull(&[p(0.0, 0.0), p(1.0, 1.0)]).len(), 2);
    }

    #[test]
    fn test_convex_hull_with_interior() {
        let points = vec![
            p(0.0, 0.0),
            p(2.0, 0.0),
            p(2.0, 2.0),
            p(0.0, 2.0),
            p(1.0, 1.0), // Interior point
        ];
        let hull = convex_hull(&points);
        assert_eq!(hull, vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 2.0)]);
    }

    #[test]
    fn test_convex_hull_collinear() {
        let points = vec![p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0), p(3.0, 0.0)];
        // Collinear points: hull is just the two endpoints
        assert_eq!(convex_hull(&points).len(), 2);
        assert!(hull_boundary_edges(&points).is_empty());
    }

    #[test]
    fn test_boundary_edges_square() {
        let points = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0), p(0.5, 0.5)];
        let edges = hull_boundary_edges(&points);
        assert_eq!(edges.len(), 4);
        assert!(edges.contains(&Edge::canonical(p(0.0, 1.0), p(0.0, 0.0))));
    }

    #[test]
    fn test_boundary_edges_split_at_side_sites() {
        // 4x4 grid: 12 sites on the boundary, so 12 boundary edges.
        let points: Vec<Point2<f64>> = (0..4)
            .flat_map(|i| (0..4).map(move |j| p(i as f64, j as f64)))
            .collect();

        let edges = hull_boundary_edges(&points);
        assert_eq!(edges.len(), 12);
        assert!(edges.iter().all(|e| e.length_squared() == 1.0));
    }
}
