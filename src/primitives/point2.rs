//! 2D point type used as a triangulation site.

use crate::error::TriangulationError;
use num_traits::Float;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// A 2D point with finite coordinates.
///
/// Points are immutable value types: two points with the same coordinates are
/// equal, hash identically and compare equal no matter how often they are
/// constructed. Ordering is lexicographic on `(x, y)`.
///
/// Generic over floating-point types (`f32` or `f64`).
///
/// # Example
///
/// ```
/// use bowyer_watson::Point2;
///
/// let a = Point2::new(1.0_f64, 2.0).unwrap();
/// let b = Point2::new(1.0_f64, 3.0).unwrap();
/// assert!(a < b);
///
/// assert!(Point2::new(f64::NAN, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Point2<F> {
    x: F,
    y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point, rejecting NaN and infinite coordinates.
    pub fn new(x: F, y: F) -> Result<Self, TriangulationError> {
        if x.is_finite() && y.is_finite() {
            Ok(Self { x, y })
        } else {
            Err(TriangulationError::InvalidInput {
                x: x.to_f64().unwrap_or(f64::NAN),
                y: y.to_f64().unwrap_or(f64::NAN),
            })
        }
    }

    /// Builds a point from coordinates that are finite by construction
    /// (derived geometry such as super-triangle corners and circumcenters).
    #[inline]
    pub(crate) fn from_raw(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Returns the x coordinate.
    #[inline]
    pub fn x(self) -> F {
        self.x
    }

    /// Returns the y coordinate.
    #[inline]
    pub fn y(self) -> F {
        self.y
    }

    /// Returns the coordinates as an `(x, y)` pair.
    #[inline]
    pub fn coordinates(self) -> (F, F) {
        (self.x, self.y)
    }

    /// Squared Euclidean distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Squared distance from the origin.
    #[inline]
    pub fn norm_squared(self) -> F {
        self.x * self.x + self.y * self.y
    }

    /// Midpoint between this point and another.
    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        let two = F::one() + F::one();
        Self {
            x: (self.x + other.x) / two,
            y: (self.y + other.y) / two,
        }
    }

    /// Returns `true` if both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<F: Float> TryFrom<(F, F)> for Point2<F> {
    type Error = TriangulationError;

    fn try_from((x, y): (F, F)) -> Result<Self, Self::Error> {
        Self::new(x, y)
    }
}

impl<F: Float> PartialEq for Point2<F> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl<F: Float> Eq for Point2<F> {}

impl<F: Float> PartialOrd for Point2<F> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<F: Float> Ord for Point2<F> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Coordinates are finite, so partial_cmp never fails.
        self.x
            .partial_cmp(&other.x)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.y.partial_cmp(&other.y).unwrap_or(Ordering::Equal))
    }
}

impl<F: Float> Hash for Point2<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_coordinate(self.x, state);
        hash_coordinate(self.y, state);
    }
}

/// Hashes a coordinate consistently with `==`: `0.0` and `-0.0` collapse.
fn hash_coordinate<F: Float, H: Hasher>(value: F, state: &mut H) {
    let value = if value == F::zero() { F::zero() } else { value };
    value.integer_decode().hash(state);
}
