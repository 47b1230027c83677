//! Canonical undirected edge between two points.

use super::Point2;
use crate::error::TriangulationError;
use num_traits::Float;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// An undirected edge, stored with the smaller endpoint first.
///
/// `Edge::new(a, b)` and `Edge::new(b, a)` produce identical values.
///
/// # Example
///
/// ```
/// use bowyer_watson::{Edge, Point2};
///
/// let a = Point2::new(2.0_f64, 0.0).unwrap();
/// let b = Point2::new(0.0_f64, 1.0).unwrap();
///
/// let e = Edge::new(a, b).unwrap();
/// assert_eq!(e, Edge::new(b, a).unwrap());
/// assert_eq!(e.a(), b);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Edge<F> {
    a: Point2<F>,
    b: Point2<F>,
}

impl<F: Float> Edge<F> {
    /// Creates an edge between two distinct points.
    ///
    /// Returns [`TriangulationError::DegenerateInput`] if the points coincide.
    pub fn new(v1: Point2<F>, v2: Point2<F>) -> Result<Self, TriangulationError> {
        if v1 == v2 {
            return Err(TriangulationError::DegenerateInput);
        }
        Ok(Self::canonical(v1, v2))
    }

    /// Orders the endpoints without checking that they are distinct.
    #[inline]
    pub(crate) fn canonical(v1: Point2<F>, v2: Point2<F>) -> Self {
        if v1 <= v2 {
            Self { a: v1, b: v2 }
        } else {
            Self { a: v2, b: v1 }
        }
    }

    /// The smaller endpoint.
    #[inline]
    pub fn a(&self) -> Point2<F> {
        self.a
    }

    /// The larger endpoint.
    #[inline]
    pub fn b(&self) -> Point2<F> {
        self.b
    }

    /// Both endpoints, smaller first.
    #[inline]
    pub fn endpoints(&self) -> [Point2<F>; 2] {
        [self.a, self.b]
    }

    #[inline]
    pub fn length_squared(&self) -> F {
        self.a.distance_squared(self.b)
    }

    /// Returns `true` if `p` is one of the endpoints.
    #[inline]
    pub fn contains_vertex(&self, p: Point2<F>) -> bool {
        self.a == p || self.b == p
    }
}

impl<F: Float> PartialEq for Edge<F> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.a == other.a && self.b == other.b
    }
}

impl<F: Float> Eq for Edge<F> {}

impl<F: Float> PartialOrd for Edge<F> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<F: Float> Ord for Edge<F> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.a.cmp(&other.a).then_with(|| self.b.cmp(&other.b))
    }
}

impl<F: Float> Hash for Edge<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.a.hash(state);
        self.b.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn p(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y).unwrap()
    }

    fn hash_of(edge: &Edge<f64>) -> u64 {
        let mut hasher = DefaultHasher::new();
        edge.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_edge_normalization() {
        let e1 = Edge::new(p(1.0, 2.0), p(0.0, 5.0)).unwrap();
        let e2 = Edge::new(p(0.0, 5.0), p(1.0, 2.0)).unwrap();
        assert_eq!(e1, e2);
        assert_eq!(hash_of(&e1), hash_of(&e2));
        assert_eq!(e1.a(), p(0.0, 5.0));
        assert_eq!(e1.b(), p(1.0, 2.0));
    }

    #[test]
    fn test_coincident_points_rejected() {
        assert_eq!(
            Edge::new(p(1.0, 1.0), p(1.0, 1.0)),
            Err(TriangulationError::DegenerateInput)
        );
    }

    #[test]
    fn test_contains_vertex() {
        let e = Edge::new(p(0.0, 0.0), p(1.0, 0.0)).unwrap();
        assert!(e.contains_vertex(p(0.0, 0.0)));
        assert!(e.contains_vertex(p(1.0, 0.0)));
        assert!(!e.contains_vertex(p(0.5, 0.0)));
        assert_eq!(e.length_squared(), 1.0);
    }

    #[test]
    fn test_ordering_follows_endpoints() {
        let e1 = Edge::new(p(0.0, 0.0), p(1.0, 0.0)).unwrap();
        let e2 = Edge::new(p(0.0, 0.0), p(2.0, 0.0)).unwrap();
        let e3 = Edge::new(p(0.5, 0.0), p(0.6, 0.0)).unwrap();
        assert!(e1 < e2);
        assert!(e2 < e3);
    }
}
