//! Input/output utilities for geometric data.
//!
//! Provides SVG export of polylines and whole triangulations.

mod svg;

pub use svg::{polyline_to_svg_path, triangulation_to_svg, SvgStyle};
