//! Checks that generated matrices are balanced: across several seeds the
//! fraction of set bits should sit close to one half.
//!
//! Run with `RUST_LOG=info` to see the per-seed results.

use std::time::Instant;

use bit_matrix::{RngBits, generate};
use clap::Parser;

const TOLERANCE: f64 = 0.02;

#[derive(Parser)]
#[command(about, long_about = None)]
struct Args {
    #[clap(long, default_value_t = 1000)]
    rows: usize,
    #[clap(long, default_value_t = 1000)]
    cols: usize,
    #[clap(long, default_value_t = 5)]
    runs: u64,
}

fn main() -> Result<(), String> {
    env_logger::init();
    let args = Args::parse();

    let mut failures = 0;
    for seed in 0..args.runs {
        let start = Instant::now();
        let matrix = generate(args.rows, args.cols, &mut RngBits::seeded(seed))
            .map_err(|e| e.to_string())?;
        let elapsed = start.elapsed();

        let fraction = matrix.set_fraction();
        let within = (fraction - 0.5).abs() <= TOLERANCE;
        if !within {
            failures += 1;
        }

        log::info!(
            "Seed {}: set fraction {:.4} ({}), generated in {:?}",
            seed,
            fraction,
            if within { "ok" } else { "out of tolerance" },
            elapsed
        );
    }

    if failures > 0 {
        return Err(format!(
            "{} of {} runs outside 0.5 +/- {}",
            failures, args.runs, TOLERANCE
        ));
    }

    println!("All {} runs within 0.5 +/- {}", args.runs, TOLERANCE);
    Ok(())
}
