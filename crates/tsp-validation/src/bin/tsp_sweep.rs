//! Solves seeded random instances with Held-Karp and brute force and prints
//! one CSV row per instance. Exits non-zero if any instance disagrees.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tsp_brute_force::{BruteForce, MAX_BRUTE_FORCE_CITIES};
use tsp_held_karp::HeldKarp;
use tsp_validation::{compare, Comparison, InstanceGenerator};

#[derive(Parser, Debug)]
#[command(name = "tsp-sweep", about = "Cross-check Held-Karp against brute force")]
struct Args {
    /// RNG seed for instance generation.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Smallest instance size.
    #[arg(long, default_value_t = 1)]
    min_cities: usize,

    /// Largest instance size (brute force caps this).
    #[arg(long, default_value_t = 9)]
    max_cities: usize,

    /// Instances generated per size.
    #[arg(long, default_value_t = 20)]
    instances: usize,

    /// Upper bound for generated distances.
    #[arg(long, default_value_t = 100)]
    max_distance: u32,

    /// Generate only symmetric matrices instead of alternating.
    #[arg(long)]
    symmetric: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let max_cities = args.max_cities.min(MAX_BRUTE_FORCE_CITIES);
    if max_cities < args.max_cities {
        tracing::warn!(requested = args.max_cities, max_cities, "clamped to brute-force limit");
    }

    let mut generator = InstanceGenerator::new(args.seed, args.max_distance);
    let mut disagreements = 0usize;

    println!("{}", Comparison::CSV_HEADER);
    for n in args.min_cities.max(1)..=max_cities {
        for instance in 0..args.instances {
            let symmetric = args.symmetric || instance % 2 == 0;
            let outcome = generator
                .matrix(n, symmetric)
                .map_err(|err| err.to_string())
                .and_then(|matrix| {
                    compare(&HeldKarp, &BruteForce, &matrix).map_err(|err| err.to_string())
                });
            match outcome {
                Ok(cmp) => {
                    if !cmp.agrees() {
                        tracing::error!(cities = n, instance, ?cmp, "solvers disagree");
                        disagreements += 1;
                    }
                    println!("{}", cmp.csv_row(instance, symmetric));
                }
                Err(err) => {
                    tracing::error!(cities = n, instance, %err, "solve failed");
                    disagreements += 1;
                }
            }
        }
        tracing::info!(cities = n, "size done");
    }

    if disagreements > 0 {
        tracing::error!(disagreements, "sweep failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
