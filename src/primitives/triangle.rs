//! Triangle with cached circumcircle.

use super::{Edge, Point2};
use crate::error::TriangulationError;
use num_traits::Float;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Determinant magnitude below which three points are treated as collinear.
pub const DEFAULT_COLLINEAR_EPSILON: f64 = 1e-10;

/// A triangle stored as its three vertices in ascending order.
///
/// Any permutation of the same three points yields an identical value.
/// The circumcenter and squared circumradius are computed once, at
/// construction, from the sorted vertices. Collinear vertices leave the
/// circumcenter undefined and the squared radius at `+inf`; such a triangle is
/// still structurally valid but never contains a point in its circumcircle.
///
/// Equality, hashing and ordering only look at the vertices.
///
/// # Example
///
/// ```
/// use bowyer_watson::{Point2, Triangle};
///
/// let a = Point2::new(0.0_f64, 0.0).unwrap();
/// let b = Point2::new(1.0, 0.0).unwrap();
/// let c = Point2::new(0.0, 1.0).unwrap();
///
/// let t = Triangle::new(a, b, c).unwrap();
/// assert_eq!(t, Triangle::new(c, a, b).unwrap());
///
/// let center = t.circumcenter().unwrap();
/// assert_eq!(center.coordinates(), (0.5, 0.5));
/// assert!(t.point_in_circumcircle(Point2::new(0.5, 0.4).unwrap()));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Triangle<F> {
    vertices: [Point2<F>; 3],
    circumcenter: Option<Point2<F>>,
    circumradius_sq: F,
}

impl<F: Float> Triangle<F> {
    /// Creates a triangle using [`DEFAULT_COLLINEAR_EPSILON`].
    ///
    /// Returns [`TriangulationError::DegenerateInput`] if any two vertices
    /// coincide.
    pub fn new(v1: Point2<F>, v2: Point2<F>, v3: Point2<F>) -> Result<Self, TriangulationError> {
        Self::with_epsilon(v1, v2, v3, default_epsilon())
    }

    /// Creates a triangle with a custom collinearity threshold.
    pub fn with_epsilon(
        v1: Point2<F>,
        v2: Point2<F>,
        v3: Point2<F>,
        epsilon: F,
    ) -> Result<Self, TriangulationError> {
        if v1 == v2 || v2 == v3 || v1 == v3 {
            return Err(TriangulationError::DegenerateInput);
        }

        let mut vertices = [v1, v2, v3];
        vertices.sort();

        let (circumcenter, circumradius_sq) =
            match circumcircle(vertices[0], vertices[1], vertices[2], epsilon) {
                Some((center, radius_sq)) => (Some(center), radius_sq),
                None => (None, F::infinity()),
            };

        Ok(Self {
            vertices,
            circumcenter,
            circumradius_sq,
        })
    }

    /// The vertices in ascending order.
    #[inline]
    pub fn vertices(&self) -> [Point2<F>; 3] {
        self.vertices
    }

    /// The vertices as coordinate pairs.
    pub fn coordinates(&self) -> [(F, F); 3] {
        self.vertices.map(Point2::coordinates)
    }

    /// The circumcenter, or `None` if the vertices are collinear.
    #[inline]
    pub fn circumcenter(&self) -> Option<Point2<F>> {
        self.circumcenter
    }

    /// The squared circumradius; `+inf` if the vertices are collinear.
    #[inline]
    pub fn circumradius_squared(&self) -> F {
        self.circumradius_sq
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.circumcenter.is_none()
    }

    /// Returns `true` if `p` lies strictly inside the circumcircle.
    ///
    /// Points on the circle are outside. Collinear triangles contain nothing.
    #[inline]
    pub fn point_in_circumcircle(&self, p: Point2<F>) -> bool {
        match self.circumcenter {
            Some(center) => center.distance_squared(p) < self.circumradius_sq,
            None => false,
        }
    }

    /// The three edges `(v0, v1)`, `(v1, v2)`, `(v2, v0)`.
    pub fn edges(&self) -> [Edge<F>; 3] {
        let [a, b, c] = self.vertices;
        [
            Edge::canonical(a, b),
            Edge::canonical(b, c),
            Edge::canonical(c, a),
        ]
    }

    /// Checks if the triangle has `p` as a vertex.
    #[inline]
    pub fn contains_vertex(&self, p: Point2<F>) -> bool {
        self.vertices.contains(&p)
    }
}

/// Computes the circumcircle of three points.
///
/// Returns the circumcenter and the squared circumradius, or `None` when the
/// determinant `D = 2 (x1 (y2 - y3) + x2 (y3 - y1) + x3 (y1 - y2))` has
/// magnitude below `epsilon`, or when the coordinates are so large that the
/// circle overflows.
///
/// The result depends on argument order only through floating-point rounding;
/// [`Triangle`] always passes sorted vertices.
///
/// # Example
///
/// ```
/// use bowyer_watson::{circumcircle, Point2};
///
/// let a = Point2::new(0.0_f64, 0.0).unwrap();
/// let b = Point2::new(2.0, 0.0).unwrap();
/// let c = Point2::new(0.0, 2.0).unwrap();
///
/// let (center, radius_sq) = circumcircle(a, b, c, 1e-10).unwrap();
/// assert_eq!(center.coordinates(), (1.0, 1.0));
/// assert_eq!(radius_sq, 2.0);
///
/// let d = Point2::new(4.0, 0.0).unwrap();
/// assert!(circumcircle(a, b, d, 1e-10).is_none());
/// ```
pub fn circumcircle<F: Float>(
    p1: Point2<F>,
    p2: Point2<F>,
    p3: Point2<F>,
    epsilon: F,
) -> Option<(Point2<F>, F)> {
    let two = F::one() + F::one();
    let (x1, y1) = p1.coordinates();
    let (x2, y2) = p2.coordinates();
    let (x3, y3) = p3.coordinates();

    let d = two * (x1 * (y2 - y3) + x2 * (y3 - y1) + x3 * (y1 - y2));
    if d.abs() < epsilon {
        return None;
    }

    let p1_sq = p1.norm_squared();
    let p2_sq = p2.norm_squared();
    let p3_sq = p3.norm_squared();

    let ux = (p1_sq * (y2 - y3) + p2_sq * (y3 - y1) + p3_sq * (y1 - y2)) / d;
    let uy = (p1_sq * (x3 - x2) + p2_sq * (x1 - x3) + p3_sq * (x2 - x1)) / d;

    let center = Point2::from_raw(ux, uy);
    let radius_sq = center.distance_squared(p1);

    // Overflow in the squared norms leaves no usable circle.
    if center.is_finite() && radius_sq.is_finite() {
        Some((center, radius_sq))
    } else {
        None
    }
}

pub(crate) fn default_epsilon<F: Float>() -> F {
    F::from(DEFAULT_COLLINEAR_EPSILON).unwrap_or_else(F::epsilon)
}

impl<F: Float> PartialEq for Triangle<F> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
    }
}

impl<F: Float> Eq for Triangle<F> {}

impl<F: Float> PartialOrd for Triangle<F> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<F: Float> Ord for Triangle<F> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.vertices.cmp(&other.vertices)
    }
}

impl<F: Float> Hash for Triangle<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.vertices.hash(state);
    }
}
