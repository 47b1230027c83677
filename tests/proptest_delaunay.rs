//! Property-based tests for the triangulator.
//!
//! - Empty circumcircle condition (no site strictly inside any triangle's circle)
//! - Output vertices are input sites, and metrics agree with the output
//! - Voronoi edges are bounded by the interior Delaunay edges
//! - Triangles are canonical: vertex order never changes the stored values
//! - Sites in general position give `2n - 2 - h` triangles
//!
//! Most properties place sites on an integer lattice so orientation
//! determinants are exact and collinear triples are classified reliably. The
//! Euler count runs on unconstrained float sites.

use bowyer_watson::{triangulate, Point2, Triangle};
use proptest::prelude::*;
use std::collections::HashSet;

fn lattice_coordinate() -> impl Strategy<Value = f64> {
    (-50_i32..=50).prop_map(f64::from)
}

fn lattice_points(max: usize) -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((lattice_coordinate(), lattice_coordinate()), 1..=max)
}

fn scattered_points(max: usize) -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((0.0..800.0_f64, 0.0..600.0_f64), 3..=max)
}

fn orient(o: (f64, f64), a: (f64, f64), b: (f64, f64)) -> f64 {
    (a.0 - o.0) * (b.1 - o.1) - (a.1 - o.1) * (b.0 - o.0)
}

/// Strict hull corners in counter-clockwise order, by gift wrapping.
fn hull_corners(points: &[(f64, f64)]) -> Vec<(f64, f64)> {
    let Some(&start) = points
        .iter()
        .min_by(|l, r| l.partial_cmp(r).unwrap_or(std::cmp::Ordering::Equal))
    else {
        return Vec::new();
    };

    let mut corners = vec![start];
    let mut current = start;
    loop {
        let mut next = if points[0] == current { points[1] } else { points[0] };
        for &candidate in points {
            if candidate == current {
                continue;
            }
            let turn = orient(current, next, candidate);
            let farther = (candidate.0 - current.0).hypot(candidate.1 - current.1)
                > (next.0 - current.0).hypot(next.1 - current.1);
            if turn < 0.0 || (turn == 0.0 && farther) {
                next = candidate;
            }
        }
        if next == start || corners.len() > points.len() {
            break;
        }
        corners.push(next);
        current = next;
    }
    corners
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: no site lies strictly inside the circumcircle of a triangle.
    #[test]
    fn prop_empty_circumcircle(points in lattice_points(40)) {
        let triangulation = triangulate(points).unwrap();

        for tri in triangulation.triangles() {
            let Some(center) = tri.circumcenter() else {
                continue;
            };
            let limit = tri.circumradius_squared() * (1.0 - 1e-9);
            for &site in triangulation.sites() {
                if tri.contains_vertex(site) {
                    continue;
                }
                prop_assert!(
                    center.distance_squared(site) >= limit,
                    "site {:?} inside circumcircle of {:?}",
                    site.coordinates(),
                    tri.coordinates()
                );
            }
        }
    }

    /// Property: triangles are built from input sites only and listed once, in order.
    #[test]
    fn prop_vertices_are_sites(points in lattice_points(40)) {
        let triangulation = triangulate(points.clone()).unwrap();
        let sites: HashSet<Point2<f64>> = points
            .iter()
            .map(|&(x, y)| Point2::new(x, y).unwrap())
            .collect();

        for tri in triangulation.triangles() {
            for v in tri.vertices() {
                prop_assert!(sites.contains(&v));
            }
        }
        prop_assert!(triangulation.triangles().windows(2).all(|w| w[0] < w[1]));
    }

    /// Property: metrics agree with the returned collections.
    #[test]
    fn prop_metrics_consistent(points in lattice_points(40)) {
        let triangulation = triangulate(points.clone()).unwrap();
        let metrics = triangulation.metrics();

        prop_assert_eq!(metrics.num_sites + metrics.duplicate_sites, points.len());
        prop_assert_eq!(metrics.num_sites, triangulation.sites().len());
        prop_assert_eq!(metrics.delaunay_triangles, triangulation.triangles().len());
        prop_assert_eq!(metrics.voronoi_vertices, triangulation.triangles().len());
        prop_assert_eq!(metrics.voronoi_edges_created, triangulation.voronoi_edges().len());
    }

    /// Property: each Voronoi edge comes from a distinct interior Delaunay edge.
    #[test]
    fn prop_voronoi_bounded_by_interior_edges(points in lattice_points(40)) {
        let triangulation = triangulate(points).unwrap();
        let interior = triangulation.edge_adjacency().interior_edge_count();
        let voronoi = triangulation.voronoi_edges().len();

        prop_assert!(voronoi <= interior);
        if triangulation.triangles().iter().all(|tri| !tri.is_degenerate()) {
            prop_assert_eq!(voronoi, interior);
        }
    }

    /// Property: nothing in the output is NaN or infinite.
    #[test]
    fn prop_outputs_finite(points in lattice_points(40)) {
        let triangulation = triangulate(points).unwrap();

        for edge in triangulation.voronoi_edges() {
            prop_assert!(edge.start.is_finite() && edge.end.is_finite());
        }
        for tri in triangulation.triangles() {
            if let Some(center) = tri.circumcenter() {
                prop_assert!(center.is_finite());
                prop_assert!(tri.circumradius_squared().is_finite());
            }
        }
    }

    /// Property: repeating sites changes nothing but the duplicate count.
    #[test]
    fn prop_duplicates_ignored(points in lattice_points(20)) {
        let input_len = points.len();
        let mut doubled = points.clone();
        doubled.extend(points.iter().copied());

        let once = triangulate(points).unwrap();
        let twice = triangulate(doubled).unwrap();

        prop_assert_eq!(once.triangles(), twice.triangles());
        prop_assert_eq!(
            twice.metrics().duplicate_sites,
            once.metrics().duplicate_sites + input_len
        );
    }

    /// Property: every vertex permutation yields the same triangle, bit for bit.
    #[test]
    fn prop_triangle_permutation_invariant(
        a in (lattice_coordinate(), lattice_coordinate()),
        b in (lattice_coordinate(), lattice_coordinate()),
        c in (lattice_coordinate(), lattice_coordinate()),
    ) {
        let [a, b, c] = [a, b, c].map(|(x, y)| Point2::new(x, y).unwrap());
        prop_assume!(a != b && b != c && a != c);

        let reference = Triangle::new(a, b, c).unwrap();
        for (p, q, r) in [(a, c, b), (b, a, c), (b, c, a), (c, a, b), (c, b, a)] {
            let tri = Triangle::new(p, q, r).unwrap();
            prop_assert_eq!(tri, reference);
            prop_assert_eq!(tri.vertices(), reference.vertices());
            prop_assert_eq!(
                tri.circumradius_squared().to_bits(),
                reference.circumradius_squared().to_bits()
            );
            prop_assert_eq!(
                tri.circumcenter().map(|o| (o.x().to_bits(), o.y().to_bits())),
                reference.circumcenter().map(|o| (o.x().to_bits(), o.y().to_bits()))
            );
        }
    }

    /// Property: sites in general position follow Euler's triangle count.
    #[test]
    fn prop_scattered_sites_follow_euler_count(points in scattered_points(40)) {
        let mut distinct = points.clone();
        distinct.sort_by(|l, r| l.partial_cmp(r).unwrap());
        distinct.dedup();
        prop_assume!(distinct.len() == points.len());

        let corners = hull_corners(&points);
        let h = corners.len();
        prop_assume!(h >= 3);
        // Every other site must sit clearly inside each hull side.
        for (i, &a) in corners.iter().enumerate() {
            let b = corners[(i + 1) % h];
            for &site in &points {
                if corners.contains(&site) {
                    continue;
                }
                prop_assume!(orient(a, b, site) > 1e-6);
            }
        }

        let n = points.len();
        let triangulation = triangulate(points).unwrap();
        prop_assert_eq!(triangulation.triangles().len(), 2 * n - 2 - h);
        prop_assert_eq!(triangulation.edge_adjacency().hull_edge_count(), h);
    }
}
