//! Triangulates random sites and writes the Delaunay/Voronoi drawing to SVG.
//!
//! Run with: cargo run --example voronoi
//!
//! Set `RUST_LOG=bowyer_watson=debug` to see the triangulator's log output.

use bowyer_watson::io::{triangulation_to_svg, SvgStyle};
use bowyer_watson::Triangulator;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use std::time::Instant;

const NUM_SITES: usize = 500;
const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;
const SEED: u64 = 42;
const OUTPUT: &str = "voronoi.svg";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let mut rng = StdRng::seed_from_u64(SEED);
    let points: Vec<(f64, f64)> = (0..NUM_SITES)
        .map(|_| (rng.random_range(0.0..WIDTH), rng.random_range(0.0..HEIGHT)))
        .collect();

    println!("Triangulating {NUM_SITES} sites with Bowyer-Watson...");

    let start = Instant::now();
    let triangulation = Triangulator::new().run(points)?;
    let elapsed = start.elapsed();

    let metrics = triangulation.metrics();
    println!();
    println!("--- Metrics ---");
    println!("Sites:                 {}", metrics.num_sites);
    println!("Duplicate sites:       {}", metrics.duplicate_sites);
    println!("Delaunay triangles:    {}", metrics.delaunay_triangles);
    println!("Voronoi vertices:      {}", metrics.voronoi_vertices);
    println!("Voronoi edges created: {}", metrics.voronoi_edges_created);
    println!("Elapsed:               {:.4} s", elapsed.as_secs_f64());

    let svg = triangulation_to_svg(&triangulation, &SvgStyle::default());
    fs::write(OUTPUT, svg)?;
    println!();
    println!("Wrote {OUTPUT}");

    Ok(())
}
