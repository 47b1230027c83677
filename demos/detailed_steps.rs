//! Prints every step of a small Bowyer-Watson run.
//!
//! Run with: cargo run --example detailed_steps
//!
//! For each inserted site this shows the triangles whose circumcircle
//! contained it, the boundary of the resulting cavity, and the triangles
//! that fill it again.

use bowyer_watson::triangulation::InsertionStep;
use bowyer_watson::{Triangle, Triangulator};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::ControlFlow;

const NUM_SITES: usize = 4;
const SEED: u64 = 42;

fn describe(tri: &Triangle<f64>) -> String {
    let [a, b, c] = tri.coordinates();
    let circle = match tri.circumcenter() {
        Some(center) => format!(
            "center ({:.2}, {:.2}), r^2 = {:.4}",
            center.x(),
            center.y(),
            tri.circumradius_squared()
        ),
        None => "collinear, no circumcircle".to_string(),
    };
    format!(
        "({:.2}, {:.2}) ({:.2}, {:.2}) ({:.2}, {:.2}) | {}",
        a.0, a.1, b.0, b.1, c.0, c.1, circle
    )
}

fn print_step(step: &InsertionStep<'_, f64>) {
    let (x, y) = step.site.coordinates();
    println!();
    if step.attempt > 0 {
        println!(
            "--- Step {}: inserting ({x:.2}, {y:.2}), rerun {} ---",
            step.index + 1,
            step.attempt
        );
    } else {
        println!("--- Step {}: inserting ({x:.2}, {y:.2}) ---", step.index + 1);
    }

    println!("Bad triangles ({}):", step.bad_triangles.len());
    for tri in step.bad_triangles {
        println!("  {}", describe(tri));
    }

    println!("Cavity boundary ({} edges):", step.boundary.len());
    for edge in step.boundary {
        let (a, b) = (edge.a(), edge.b());
        println!(
            "  ({:.2}, {:.2}) - ({:.2}, {:.2})",
            a.x(),
            a.y(),
            b.x(),
            b.y()
        );
    }

    println!("New triangles ({}):", step.created.len());
    for tri in step.created {
        println!("  {}", describe(tri));
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let mut rng = StdRng::seed_from_u64(SEED);
    let points: Vec<(f64, f64)> = (0..NUM_SITES)
        .map(|_| (rng.random_range(0.0..10.0), rng.random_range(0.0..10.0)))
        .collect();

    println!("--- Bowyer-Watson, step by step ---");
    println!("Sites:");
    for (x, y) in &points {
        println!("  ({x:.2}, {y:.2})");
    }

    let triangulation = Triangulator::new().run_with(points, |step| {
        print_step(step);
        ControlFlow::Continue(())
    })?;

    println!();
    println!("--- Final triangulation ---");
    for tri in triangulation.triangles() {
        println!("  {}", describe(tri));
    }

    println!();
    println!("--- Voronoi edges ---");
    for edge in triangulation.voronoi_edges() {
        let [(x1, y1), (x2, y2)] = edge.coordinates();
        println!("  ({x1:.2}, {y1:.2}) - ({x2:.2}, {y2:.2})");
    }

    println!();
    println!("{:#?}", triangulation.metrics());
    Ok(())
}
