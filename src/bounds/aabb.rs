//! Axis-aligned bounding box.

use crate::primitives::Point2;
use num_traits::Float;

/// A 2D axis-aligned bounding box.
///
/// Defined by minimum and maximum corners.
#[derive(Debug, Clone, Copy)]
pub struct Aabb2<F> {
    /// Minimum corner (smallest x and y values).
    pub min: Point2<F>,
    /// Maximum corner (largest x and y values).
    pub max: Point2<F>,
}

impl<F: Float> Aabb2<F> {
    /// Creates an AABB containing a single point.
    #[inline]
    pub fn from_point(p: Point2<F>) -> Self {
        Self { min: p, max: p }
    }

    /// Creates an AABB from an iterator of points.
    ///
    /// Returns `None` if the iterator is empty.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2<F>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;

        let mut aabb = Self::from_point(first);
        for p in iter {
            aabb = aabb.expand_to_include(p);
        }
        Some(aabb)
    }

    /// Returns the width of the AABB.
    #[inline]
    pub fn width(self) -> F {
        self.max.x() - self.min.x()
    }

    /// Returns the height of the AABB.
    #[inline]
    pub fn height(self) -> F {
        self.max.y() - self.min.y()
    }

    /// Returns the larger of width and height.
    #[inline]
    pub fn max_extent(self) -> F {
        self.width().max(self.height())
    }

    /// Returns the center point of the AABB.
    #[inline]
    pub fn center(self) -> Point2<F> {
        self.min.midpoint(self.max)
    }

    /// Returns a new AABB expanded to include the given point.
    #[inline]
    pub fn expand_to_include(self, p: Point2<F>) -> Self {
        Self {
            min: Point2::from_raw(self.min.x().min(p.x()), self.min.y().min(p.y())),
            max: Point2::from_raw(self.max.x().max(p.x()), self.max.y().max(p.y())),
        }
    }

    /// Returns a copy grown by `margin` on every side.
    #[inline]
    pub fn padded(self, margin: F) -> Self {
        Self {
            min: Point2::from_raw(self.min.x() - margin, self.min.y() - margin),
            max: Point2::from_raw(self.max.x() + margin, self.max.y() + margin),
        }
    }

    /// Returns `true` if this AABB contains the given point.
    #[inline]
    pub fn contains_point(self, p: Point2<F>) -> bool {
        p.x() >= self.min.x()
            && p.x() <= self.max.x()
            && p.y() >= self.min.y()
            && p.y() <= self.max.y()
    }
}

impl<F: Float> PartialEq for Aabb2<F> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.min == other.min && self.max == other.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y).unwrap()
    }

    #[test]
    fn test_from_points() {
        let aabb = Aabb2::from_points([p(1.0, 5.0), p(-2.0, 3.0), p(4.0, -1.0)]).unwrap();
        assert_eq!(aabb.min, p(-2.0, -1.0));
        assert_eq!(aabb.max, p(4.0, 5.0));
        assert_relative_eq!(aabb.width(), 6.0);
        assert_relative_eq!(aabb.height(), 6.0);
    }

    #[test]
    fn test_from_points_empty() {
        assert!(Aabb2::<f64>::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn test_single_point() {
        let aabb = Aabb2::from_point(p(3.0, 4.0));
        assert_eq!(aabb.max_extent(), 0.0);
        assert_eq!(aabb.center(), p(3.0, 4.0));
    }

    #[test]
    fn test_center_and_extent() {
        let aabb = Aabb2::from_points([p(0.0, 0.0), p(800.0, 600.0)]).unwrap();
        assert_eq!(aabb.center(), p(400.0, 300.0));
        assert_relative_eq!(aabb.max_extent(), 800.0);
    }

    #[test]
    fn test_equality() {
        let a = Aabb2::from_points([p(0.0, 0.0), p(2.0, 1.0)]).unwrap();
        let b = Aabb2::from_point(p(2.0, 1.0)).expand_to_include(p(0.0, 0.0));
        assert_eq!(a, b);
        assert_ne!(a, a.padded(0.5));
    }

    #[test]
    fn test_padded_contains() {
        let aabb = Aabb2::from_points([p(0.0, 0.0), p(1.0, 1.0)]).unwrap();
        assert!(!aabb.contains_point(p(1.05, 0.5)));
        assert!(aabb.padded(0.1).contains_point(p(1.05, 0.5)));
    }
}
