//! Delaunay triangulation using the Bowyer-Watson algorithm.
//!
//! Delaunay triangulation maximizes the minimum angle of all triangles,
//! avoiding skinny triangles when possible. It has the property that no
//! point lies inside the circumcircle of any triangle.
//!
//! # Algorithm
//!
//! The Bowyer-Watson algorithm is an incremental insertion algorithm:
//! 1. Start with a super-triangle containing all points
//! 2. Insert points one at a time: remove every triangle whose circumcircle
//!    contains the point, then connect the point to the boundary of the hole
//! 3. Remove triangles connected to the super-triangle vertices
//!
//! # Complexity
//!
//! - Time: O(n²) (every insertion scans the whole working set)
//! - Space: O(n)
//!
//! # Precision
//!
//! Predicates use plain floating-point arithmetic. Very large coordinates
//! lose precision in the circumcenter formula through cancellation.
//!
//! # Example
//!
//! ```
//! use bowyer_watson::triangulation::triangulate;
//!
//! let triangulation = triangulate([(0.0_f64, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)]).unwrap();
//!
//! let metrics = triangulation.metrics();
//! assert_eq!(metrics.delaunay_triangles, 2);
//! assert_eq!(metrics.voronoi_edges_created, 1);
//! ```

use super::output::Triangulation;
use crate::bounds::Aabb2;
use crate::error::TriangulationError;
use crate::hull::hull_boundary_edges;
use crate::primitives::{default_epsilon, Edge, Point2, Triangle};
use num_traits::Float;
use std::collections::{BTreeSet, HashSet};
use std::ops::ControlFlow;

/// Default super-triangle size, in multiples of the larger bounding-box side.
///
/// Small super-triangles put their corners inside the circumcircles of hull
/// triangles, which are then lost in cleanup.
pub const DEFAULT_SUPER_TRIANGLE_SCALE: f64 = 1000.0;

/// Factor applied to the scale each time the hull check fails.
pub const SUPER_TRIANGLE_GROWTH: f64 = 10.0;

/// Default number of reruns with a grown super-triangle.
pub const DEFAULT_HULL_RETRIES: usize = 3;

/// Tuning knobs for [`Triangulator`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangulatorConfig<F> {
    /// Super-triangle reach as a multiple of the larger bounding-box side.
    ///
    /// The corners sit at `(mid_x ∓ s·d, mid_y - s/2·d)` and
    /// `(mid_x, mid_y + s·d)`. Must be finite and at least 2.
    pub super_triangle_scale: F,
    /// Determinant magnitude below which a triangle counts as collinear.
    pub collinear_epsilon: F,
    /// How often a run is repeated with a [`SUPER_TRIANGLE_GROWTH`] times
    /// larger super-triangle when the result misses a convex hull edge.
    pub hull_retries: usize,
}

impl<F: Float> Default for TriangulatorConfig<F> {
    fn default() -> Self {
        Self {
            super_triangle_scale: F::from(DEFAULT_SUPER_TRIANGLE_SCALE).unwrap(),
            collinear_epsilon: default_epsilon(),
            hull_retries: DEFAULT_HULL_RETRIES,
        }
    }
}

impl<F: Float> TriangulatorConfig<F> {
    pub fn with_super_triangle_scale(mut self, scale: F) -> Self {
        self.super_triangle_scale = scale;
        self
    }

    pub fn with_collinear_epsilon(mut self, epsilon: F) -> Self {
        self.collinear_epsilon = epsilon;
        self
    }

    pub fn with_hull_retries(mut self, retries: usize) -> Self {
        self.hull_retries = retries;
        self
    }

    /// Checks that the configuration can produce a valid super-triangle.
    pub fn validate(&self) -> Result<(), TriangulationError> {
        validate_scale(self.super_triangle_scale)?;
        if !self.collinear_epsilon.is_finite() || self.collinear_epsilon < F::zero() {
            return Err(TriangulationError::InvalidConfig {
                reason: "collinear epsilon must be finite and non-negative",
            });
        }
        Ok(())
    }
}

fn validate_scale<F: Float>(scale: F) -> Result<(), TriangulationError> {
    let two = F::one() + F::one();
    if !scale.is_finite() || scale < two {
        return Err(TriangulationError::InvalidConfig {
            reason: "super-triangle scale must be finite and at least 2",
        });
    }
    Ok(())
}

/// The bootstrap triangle enclosing every site.
#[derive(Debug, Clone, Copy)]
pub struct SuperTriangle<F> {
    triangle: Triangle<F>,
}

impl<F: Float> SuperTriangle<F> {
    /// Builds a super-triangle around `bounds`.
    ///
    /// A zero-sized box (a single site) is treated as having unit extent.
    ///
    /// # Errors
    ///
    /// - [`TriangulationError::InvalidConfig`] if `scale` is not finite or below 2
    /// - [`TriangulationError::OutOfRange`] if the corners or the circumcircle
    ///   overflow the coordinate type
    pub fn enclosing(bounds: Aabb2<F>, scale: F, epsilon: F) -> Result<Self, TriangulationError> {
        validate_scale(scale)?;

        let extent = bounds.max_extent();
        let delta = if extent > F::zero() { extent } else { F::one() };
        let (mid_x, mid_y) = bounds.center().coordinates();

        let reach = scale * delta;
        let drop = reach / (F::one() + F::one());

        let left = Point2::from_raw(mid_x - reach, mid_y - drop);
        let right = Point2::from_raw(mid_x + reach, mid_y - drop);
        let top = Point2::from_raw(mid_x, mid_y + reach);
        if ![left, right, top].iter().all(|corner| corner.is_finite()) {
            return Err(TriangulationError::OutOfRange);
        }

        let triangle = Triangle::with_epsilon(left, right, top, epsilon)
            .map_err(|_| TriangulationError::OutOfRange)?;
        if triangle.is_degenerate() {
            return Err(TriangulationError::OutOfRange);
        }
        Ok(Self { triangle })
    }

    pub fn triangle(&self) -> Triangle<F> {
        self.triangle
    }

    pub fn corners(&self) -> [Point2<F>; 3] {
        self.triangle.vertices()
    }

    /// Returns `true` if `triangle` has a super-triangle corner as a vertex.
    pub fn touches(&self, triangle: &Triangle<F>) -> bool {
        self.corners()
            .iter()
            .any(|&corner| triangle.contains_vertex(corner))
    }
}

/// What happened while inserting one site.
///
/// Passed to the observer of [`Triangulator::run_with`] after the site has
/// been inserted.
#[derive(Debug, Clone, Copy)]
pub struct InsertionStep<'a, F> {
    /// Zero for the first pass; counts reruns with a grown super-triangle.
    pub attempt: usize,
    /// Position of the site among the distinct sites.
    pub index: usize,
    pub site: Point2<F>,
    /// Triangles whose circumcircle strictly contained the site.
    pub bad_triangles: &'a [Triangle<F>],
    /// Boundary of the cavity left by the bad triangles.
    pub boundary: &'a [Edge<F>],
    /// Triangles joining the site to the cavity boundary.
    pub created: &'a [Triangle<F>],
}

/// Incremental Bowyer-Watson triangulator.
///
/// After cleanup the result is checked against the convex hull of the sites.
/// If a hull edge is missing, the super-triangle was too small and the run is
/// repeated with a larger one, up to [`TriangulatorConfig::hull_retries`] times.
///
/// # Example
///
/// ```
/// use bowyer_watson::triangulation::{Triangulator, TriangulatorConfig};
///
/// let config = TriangulatorConfig::default().with_super_triangle_scale(50.0);
/// let triangulator = Triangulator::with_config(config).unwrap();
///
/// let result = triangulator
///     .run([(0.0_f64, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.5, 0.5)])
///     .unwrap();
/// assert_eq!(result.triangles().len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangulator<F> {
    config: TriangulatorConfig<F>,
}

impl<F: Float> Default for Triangulator<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> Triangulator<F> {
    /// Creates a triangulator with the default configuration.
    pub fn new() -> Self {
        Self {
            config: TriangulatorConfig::default(),
        }
    }

    /// Creates a triangulator after validating `config`.
    pub fn with_config(config: TriangulatorConfig<F>) -> Result<Self, TriangulationError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &TriangulatorConfig<F> {
        &self.config
    }

    /// Triangulates `points` and derives the Voronoi edges.
    ///
    /// Duplicate coordinates collapse to their first occurrence.
    ///
    /// # Errors
    ///
    /// - [`TriangulationError::InvalidInput`] if a coordinate is not finite
    /// - [`TriangulationError::EmptyInput`] if no point is supplied
    /// - [`TriangulationError::OutOfRange`] if the coordinates are too large
    ///   for an enclosing super-triangle
    pub fn run<I>(&self, points: I) -> Result<Triangulation<F>, TriangulationError>
    where
        I: IntoIterator<Item = (F, F)>,
    {
        self.run_with(points, |_| ControlFlow::Continue(()))
    }

    /// Like [`run`](Self::run), reporting every insertion to `observer`.
    ///
    /// Returning [`ControlFlow::Break`] from the observer stops the run with
    /// [`TriangulationError::Cancelled`]. When the hull check triggers a rerun
    /// the observer sees every site again, with [`InsertionStep::attempt`]
    /// incremented.
    pub fn run_with<I, O>(
        &self,
        points: I,
        mut observer: O,
    ) -> Result<Triangulation<F>, TriangulationError>
    where
        I: IntoIterator<Item = (F, F)>,
        O: FnMut(&InsertionStep<'_, F>) -> ControlFlow<()>,
    {
        let (sites, duplicate_sites) = collect_sites(points)?;
        let bounds =
            Aabb2::from_points(sites.iter().copied()).ok_or(TriangulationError::EmptyInput)?;

        let epsilon = self.config.collinear_epsilon;
        let growth = F::from(SUPER_TRIANGLE_GROWTH).unwrap_or_else(|| F::one() + F::one());
        let hull = hull_boundary_edges(&sites);

        let mut scale = self.config.super_triangle_scale;
        let mut super_triangle = SuperTriangle::enclosing(bounds, scale, epsilon)?;
        let mut attempt = 0;

        tracing::debug!(
            sites = sites.len(),
            duplicates = duplicate_sites,
            hull_edges = hull.len(),
            "bootstrapped super-triangle"
        );

        let triangles = loop {
            let triangles =
                insert_sites(&sites, &super_triangle, epsilon, attempt, &mut observer)?;

            let missing = missing_hull_edges(&triangles, &hull);
            if missing == 0 {
                break triangles;
            }
            if attempt == self.config.hull_retries {
                tracing::warn!(
                    missing,
                    attempt,
                    "hull edges still missing, keeping result"
                );
                break triangles;
            }

            let grown = scale * growth;
            match SuperTriangle::enclosing(bounds, grown, epsilon) {
                Ok(next) => {
                    tracing::debug!(
                        missing,
                        attempt,
                        "hull edges missing, growing super-triangle"
                    );
                    scale = grown;
                    super_triangle = next;
                    attempt += 1;
                }
                Err(_) => {
                    tracing::warn!(
                        missing,
                        attempt,
                        "hull edges missing, super-triangle cannot grow"
                    );
                    break triangles;
                }
            }
        };

        Ok(Triangulation::assemble(sites, bounds, duplicate_sites, triangles))
    }
}

/// Inserts every site into `super_triangle`, then drops the triangles that
/// touch its corners and sorts the rest.
fn insert_sites<F, O>(
    sites: &[Point2<F>],
    super_triangle: &SuperTriangle<F>,
    epsilon: F,
    attempt: usize,
    observer: &mut O,
) -> Result<Vec<Triangle<F>>, TriangulationError>
where
    F: Float,
    O: FnMut(&InsertionStep<'_, F>) -> ControlFlow<()>,
{
    let mut triangles: Vec<Triangle<F>> = vec![super_triangle.triangle()];

    for (index, &site) in sites.iter().enumerate() {
        let bad_indices: Vec<usize> = triangles
            .iter()
            .enumerate()
            .filter(|(_, tri)| tri.point_in_circumcircle(site))
            .map(|(ti, _)| ti)
            .collect();

        if bad_indices.is_empty() {
            tracing::warn!(index, "site lies in no circumcircle, skipping it");
        }

        let bad_triangles: Vec<Triangle<F>> =
            bad_indices.iter().map(|&ti| triangles[ti]).collect();
        let boundary = cavity_boundary(&bad_triangles);

        // Indices are ascending; removing from the back keeps the rest valid.
        for &ti in bad_indices.iter().rev() {
            triangles.swap_remove(ti);
        }

        let created = boundary
            .iter()
            .map(|edge| Triangle::with_epsilon(edge.a(), edge.b(), site, epsilon))
            .collect::<Result<Vec<_>, _>>()?;
        triangles.extend_from_slice(&created);

        tracing::trace!(
            index,
            bad = bad_triangles.len(),
            boundary = boundary.len(),
            created = created.len(),
            "inserted site"
        );

        let step = InsertionStep {
            attempt,
            index,
            site,
            bad_triangles: &bad_triangles,
            boundary: &boundary,
            created: &created,
        };
        if observer(&step).is_break() {
            tracing::debug!(inserted = index + 1, "triangulation cancelled");
            return Err(TriangulationError::Cancelled {
                inserted: index + 1,
            });
        }
    }

    let working = triangles.len();
    triangles.retain(|tri| !super_triangle.touches(tri));
    triangles.sort_unstable();

    tracing::debug!(
        removed = working - triangles.len(),
        triangles = triangles.len(),
        "removed super-triangle"
    );

    Ok(triangles)
}

/// Counts hull edges that no triangle has.
fn missing_hull_edges<F: Float>(triangles: &[Triangle<F>], hull: &[Edge<F>]) -> usize {
    if hull.is_empty() {
        return 0;
    }
    let present: HashSet<Edge<F>> = triangles.iter().flat_map(|tri| tri.edges()).collect();
    hull.iter().filter(|edge| !present.contains(edge)).count()
}

/// Triangulates `points` with the default configuration.
///
/// # Example
///
/// ```
/// use bowyer_watson::triangulation::triangulate;
///
/// // Square with center point
/// let triangulation = triangulate([
///     (0.0_f64, 0.0),
///     (1.0, 0.0),
///     (1.0, 1.0),
///     (0.0, 1.0),
///     (0.5, 0.5),
/// ])
/// .unwrap();
///
/// assert_eq!(triangulation.triangles().len(), 4);
/// ```
pub fn triangulate<F, I>(points: I) -> Result<Triangulation<F>, TriangulationError>
where
    F: Float,
    I: IntoIterator<Item = (F, F)>,
{
    Triangulator::new().run(points)
}

/// Validates the input and drops repeated coordinates, keeping input order.
fn collect_sites<F, I>(points: I) -> Result<(Vec<Point2<F>>, usize), TriangulationError>
where
    F: Float,
    I: IntoIterator<Item = (F, F)>,
{
    let mut seen: HashSet<Point2<F>> = HashSet::new();
    let mut sites = Vec::new();
    let mut duplicates = 0;

    for (x, y) in points {
        let site = Point2::new(x, y)?;
        if seen.insert(site) {
            sites.push(site);
        } else {
            duplicates += 1;
        }
    }

    if sites.is_empty() {
        return Err(TriangulationError::EmptyInput);
    }
    Ok((sites, duplicates))
}

/// Edges that belong to exactly one of `bad_triangles`.
///
/// Each edge is toggled in and out of the set; edges shared by two bad
/// triangles cancel out.
fn cavity_boundary<F: Float>(bad_triangles: &[Triangle<F>]) -> Vec<Edge<F>> {
    let mut boundary: BTreeSet<Edge<F>> = BTreeSet::new();

    for tri in bad_triangles {
        for edge in tri.edges() {
            if !boundary.remove(&edge) {
                boundary.insert(edge);
            }
        }
    }

    boundary.into_iter().collect()
}
