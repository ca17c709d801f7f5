//! Measure how well the network recovers stored patterns from noise
//!
//! Usage:
//!   cargo run --bin noise_recovery -- --neurons 256 --patterns 10 --noise 0.15

use anyhow::{anyhow, Result};
use clap::Parser;
use hopfield_memory::hopfield::{corrupt, hamming_distance, overlap, random_pattern};
use hopfield_memory::{HopfieldNetwork, MemoryConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Parser, Debug)]
#[command(name = "noise_recovery")]
#[command(about = "Store random patterns and recall them from corrupted probes")]
struct Args {
    /// Number of neurons
    #[arg(long, default_value = "256")]
    neurons: usize,

    /// Number of stored patterns
    #[arg(long, default_value = "10")]
    patterns: usize,

    /// Fraction of units flipped in each probe
    #[arg(long, default_value = "0.15")]
    noise: f64,

    /// Probes per stored pattern
    #[arg(long, default_value = "5")]
    trials: usize,

    /// Random seed
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Use the explicit per-neuron recall loop
    #[arg(long)]
    explicit: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if !(0.0..=1.0).contains(&args.noise) {
        return Err(anyhow!("Noise must be between 0 and 1, got {}", args.noise));
    }

    let config = MemoryConfig::default().with_neurons(args.neurons);
    let mut network = HopfieldNetwork::with_config(config.neurons, config.hopfield())?;
    let mut rng = StdRng::seed_from_u64(args.seed);

    log::info!(
        "Storing {} patterns in {} neurons (capacity ~{:.0})",
        args.patterns,
        network.size(),
        network.capacity()
    );

    let stored: Vec<Vec<i8>> = (0..args.patterns)
        .map(|_| random_pattern(network.size(), &mut rng))
        .collect();
    for pattern in &stored {
        network.learn(pattern)?;
    }

    let mut recovered = 0;
    let mut converged = 0;
    let mut total_iterations = 0;
    let mut total_overlap = 0.0;
    let mut total = 0;

    for pattern in &stored {
        for _ in 0..args.trials {
            let probe = corrupt(pattern, args.noise, &mut rng);
            let outcome = if args.explicit {
                network.recall_explicit(&probe)?
            } else {
                network.recall(&probe)?
            };

            if hamming_distance(&outcome.pattern, pattern) == 0 {
                recovered += 1;
            }
            if outcome.converged() {
                converged += 1;
            }
            total_iterations += outcome.iterations;
            total_overlap += overlap(&outcome.pattern, pattern);
            total += 1;
        }
    }

    if total == 0 {
        return Err(anyhow!("No probes were run"));
    }

    println!("\n=== Noise Recovery ===");
    println!("Neurons:        {}", network.size());
    println!("Patterns:       {}", args.patterns);
    println!("Load (P/N):     {:.3}", args.patterns as f64 / network.size() as f64);
    println!("Noise:          {:.1}%", args.noise * 100.0);
    println!("Probes:         {}", total);
    println!("Recovered:      {} ({:.1}%)", recovered, recovered as f64 / total as f64 * 100.0);
    println!("Converged:      {} ({:.1}%)", converged, converged as f64 / total as f64 * 100.0);
    println!("Avg iterations: {:.2}", total_iterations as f64 / total as f64);
    println!("Avg overlap:    {:.3}", total_overlap / total as f64);

    Ok(())
}
