extern crate rs_pinochle;

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use rs_pinochle::simulation::{
    MeldSimulationBuilder, Reporter, ScoreCategory, SimulationConfig, StatSummary,
};

#[derive(Parser, Debug)]
#[command(
    name = "meld_simulation",
    about = "Simulate pinochle meld scores using Monte Carlo simulation",
    long_about = "Deal a large number of pinochle hands, score the meld in each,\n\
                  and print the per-player, per-team, and overall score distributions."
)]
struct Args {
    /// Number of deals to simulate
    #[arg(short = 'n', long, default_value_t = 1_000_000)]
    iterations: u64,

    /// Histogram bucket width in points
    #[arg(short = 'w', long, default_value_t = 5)]
    bucket_width: u32,

    /// Drop histogram outliers beyond this many standard deviations
    /// above the mean
    #[arg(short = 'c', long = "outlier-cutoff")]
    outlier_cutoff: Option<f64>,

    /// Optional random seed for reproducibility
    #[arg(short = 's', long)]
    seed: Option<u64>,
}

/// A text reporter: the summary block plus a bar-per-bucket histogram.
struct TextReporter {
    histogram_columns: u64,
}

impl Reporter for TextReporter {
    fn report(&mut self, category: ScoreCategory, summary: &StatSummary) {
        println!();
        println!("=== {category} ({} deals) ===", summary.count);
        println!("  Min:        {}", summary.min);
        println!("  Max:        {}", summary.max);
        println!("  Mean:       {:.2}", summary.mean);
        println!("  Median:     {}", summary.median);
        println!("  Mode:       {}", summary.mode);
        println!("  Std. Dev.:  {:.2}", summary.std_dev);

        let tallest = summary
            .histogram
            .buckets()
            .iter()
            .map(|b| b.count)
            .max()
            .unwrap_or(0);
        if tallest == 0 {
            return;
        }
        for bucket in summary.histogram.buckets() {
            let width = bucket.count * self.histogram_columns / tallest;
            println!(
                "  {:>5} | {:<60} {}",
                bucket.start,
                "#".repeat(width as usize),
                bucket.count
            );
        }
    }
}

fn main() {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();

    let config = SimulationConfig {
        iterations: args.iterations,
        bucket_width: args.bucket_width,
        filter_outliers: args.outlier_cutoff.is_some(),
        outlier_std_devs: args.outlier_cutoff.unwrap_or(5.0),
        ..Default::default()
    };

    let mut sim = MeldSimulationBuilder::default()
        .config(config)
        .build()
        .expect("config should be valid");

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    println!("Simulating {} deals (seed {seed})...", args.iterations);

    let mut rng = StdRng::seed_from_u64(seed);
    sim.run(&mut rng).expect("simulation should complete");

    let mut reporter = TextReporter {
        histogram_columns: 60,
    };
    sim.report_to(&mut reporter);
}
