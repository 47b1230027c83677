//! SVG export of triangulations.
//!
//! Renders Delaunay triangles, Voronoi edges and sites as a standalone SVG
//! document. The view box is the site bounding box padded by 10% on every
//! side, with the y axis pointing up.
//!
//! # Example
//!
//! ```
//! use bowyer_watson::io::{triangulation_to_svg, SvgStyle};
//! use bowyer_watson::triangulate;
//!
//! let triangulation = triangulate([(0.0_f64, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0)]).unwrap();
//! let svg = triangulation_to_svg(&triangulation, &SvgStyle::default());
//!
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.trim_end().ends_with("</svg>"));
//! ```

use crate::bounds::Aabb2;
use crate::primitives::Point2;
use crate::triangulation::Triangulation;
use num_traits::Float;
use std::fmt::{self, Write};

/// Fraction of the larger bounds side added around the sites.
const VIEW_PADDING: f64 = 0.1;

/// Colors, stroke widths and layer switches for [`triangulation_to_svg`].
///
/// Widths and radii are fractions of the larger side of the view box, so the
/// drawing looks the same at any coordinate scale.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgStyle {
    /// Rendered width in pixels; the height follows the view box aspect.
    pub width: u32,
    pub background: String,
    pub triangle_color: String,
    pub triangle_width: f64,
    pub voronoi_color: String,
    pub voronoi_width: f64,
    pub site_color: String,
    pub site_radius: f64,
    pub show_triangles: bool,
    pub show_voronoi: bool,
    pub show_sites: bool,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            width: 800,
            background: "white".to_string(),
            triangle_color: "#1f77b4".to_string(),
            triangle_width: 0.001,
            voronoi_color: "#d62728".to_string(),
            voronoi_width: 0.0015,
            site_color: "black".to_string(),
            site_radius: 0.003,
            show_triangles: true,
            show_voronoi: true,
            show_sites: true,
        }
    }
}

/// Converts a polyline to an SVG path string.
///
/// # Example
///
/// ```
/// use bowyer_watson::io::polyline_to_svg_path;
/// use bowyer_watson::Point2;
///
/// let points = vec![
///     Point2::new(0.0, 0.0).unwrap(),
///     Point2::new(10.0, 0.0).unwrap(),
///     Point2::new(10.0, 10.0).unwrap(),
/// ];
///
/// let svg = polyline_to_svg_path(&points, true);
/// assert_eq!(svg, "M 0 0 L 10 0 L 10 10 Z");
/// ```
pub fn polyline_to_svg_path<F: Float + fmt::Display>(points: &[Point2<F>], closed: bool) -> String {
    let Some((first, rest)) = points.split_first() else {
        return String::new();
    };

    let mut result = format!("M {} {}", first.x(), first.y());
    for p in rest {
        // Writing to a String cannot fail.
        let _ = write!(result, " L {} {}", p.x(), p.y());
    }

    if closed {
        result.push_str(" Z");
    }

    result
}

/// Renders a triangulation as an SVG document.
///
/// Layers are drawn bottom to top: triangles, Voronoi edges, sites.
pub fn triangulation_to_svg<F: Float + fmt::Display>(
    triangulation: &Triangulation<F>,
    style: &SvgStyle,
) -> String {
    let view = view_box(triangulation.bounds());
    let flip = |p: Point2<F>| Point2::from_raw(p.x(), view.min.y() + view.max.y() - p.y());

    let span_x = view.width().to_f64().unwrap_or(1.0);
    let span_y = view.height().to_f64().unwrap_or(1.0);
    let unit = span_x.max(span_y);
    let height = (f64::from(style.width) * span_y / span_x).round().max(1.0);

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="{} {} {} {}">"#,
        style.width,
        height,
        view.min.x(),
        view.min.y(),
        view.width(),
        view.height()
    );
    let _ = writeln!(
        svg,
        r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
        view.min.x(),
        view.min.y(),
        view.width(),
        view.height(),
        style.background
    );

    if style.show_triangles {
        let _ = writeln!(
            svg,
            r#"  <g fill="none" stroke="{}" stroke-width="{}">"#,
            style.triangle_color,
            style.triangle_width * unit
        );
        for tri in triangulation.triangles() {
            let corners = tri.vertices().map(flip);
            let _ = writeln!(
                svg,
                r#"    <path d="{}"/>"#,
                polyline_to_svg_path(&corners, true)
            );
        }
        svg.push_str("  </g>\n");
    }

    if style.show_voronoi {
        let _ = writeln!(
            svg,
            r#"  <g stroke="{}" stroke-width="{}">"#,
            style.voronoi_color,
            style.voronoi_width * unit
        );
        for edge in triangulation.voronoi_edges() {
            let (start, end) = (flip(edge.start), flip(edge.end));
            let _ = writeln!(
                svg,
                r#"    <line x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
                start.x(),
                start.y(),
                end.x(),
                end.y()
            );
        }
        svg.push_str("  </g>\n");
    }

    if style.show_sites {
        let _ = writeln!(svg, r#"  <g fill="{}">"#, style.site_color);
        for &site in triangulation.sites() {
            let site = flip(site);
            let _ = writeln!(
                svg,
                r#"    <circle cx="{}" cy="{}" r="{}"/>"#,
                site.x(),
                site.y(),
                style.site_radius * unit
            );
        }
        svg.push_str("  </g>\n");
    }

    svg.push_str("</svg>\n");
    svg
}

/// Site bounds padded by [`VIEW_PADDING`] of the larger side.
fn view_box<F: Float>(bounds: Aabb2<F>) -> Aabb2<F> {
    let extent = bounds.max_extent();
    let extent = if extent > F::zero() { extent } else { F::one() };
    let padding = F::from(VIEW_PADDING).unwrap_or_else(F::zero);
    bounds.padded(extent * padding)
}
