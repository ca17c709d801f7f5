//! Learn grid patterns from a session file and recall noisy probes
//!
//! Usage:
//!   cargo run --bin recall_session -- --session sessions/letters.json
//!   cargo run --bin recall_session -- --session sessions/letters.json --explicit --json

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use hopfield_memory::{
    GridEncoder, MemoryConfig, PatternMemory, RecallOutcome, RecallStatus,
};
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "recall_session")]
#[command(about = "Learn grid patterns and recall noisy probes")]
struct Args {
    /// Session file (JSON) with patterns and probes
    #[arg(short, long)]
    session: String,

    /// Optional memory configuration file (JSON)
    #[arg(short, long)]
    config: Option<String>,

    /// Use the explicit per-neuron recall loop
    #[arg(long)]
    explicit: bool,

    /// Print results as JSON instead of grids
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Deserialize)]
struct Session {
    /// Overrides the configured neuron count
    neurons: Option<usize>,
    patterns: Vec<GridEntry>,
    #[serde(default)]
    probes: Vec<GridEntry>,
}

#[derive(Debug, Deserialize)]
struct GridEntry {
    id: String,
    rows: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ProbeReport {
    probe: String,
    status: RecallStatus,
    iterations: usize,
    energy: f64,
    recalled: Vec<String>,
    matched: Option<String>,
}

/// Neuron count precedence: session file, then config file, then grid area
fn resolve_config(
    session_neurons: Option<usize>,
    file_config: Option<MemoryConfig>,
    grid_area: usize,
) -> MemoryConfig {
    let config = file_config.unwrap_or_else(|| MemoryConfig::default().with_neurons(grid_area));
    match session_neurons {
        Some(neurons) => config.with_neurons(neurons),
        None => config,
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let json = std::fs::read_to_string(&args.session)
        .with_context(|| format!("reading session {}", args.session))?;
    let session: Session = serde_json::from_str(&json)?;

    let first = session
        .patterns
        .first()
        .ok_or_else(|| anyhow!("Session contains no patterns"))?;

    let file_config = match &args.config {
        Some(path) => Some(MemoryConfig::from_file(path)?),
        None => None,
    };
    let config = resolve_config(
        session.neurons,
        file_config,
        first.rows.len() * first.rows.len(),
    );

    log::info!("Creating memory with {} neurons", config.neurons);
    let memory = PatternMemory::new(&config)?;
    let side = memory.side_length()?;
    let encoder = GridEncoder::default();

    let mut learned = Vec::with_capacity(session.patterns.len());
    for entry in &session.patterns {
        let pattern = encoder
            .encode_rows(entry.rows.as_slice())
            .with_context(|| format!("encoding pattern {}", entry.id))?;
        memory.add_pattern(entry.id.as_str(), &pattern)?;
        learned.push((entry.id.clone(), pattern));
    }
    log::info!("Learned {} patterns", memory.patterns()?.len());

    let mut reports = Vec::with_capacity(session.probes.len());
    for probe in &session.probes {
        let pattern = encoder
            .encode_rows(probe.rows.as_slice())
            .with_context(|| format!("encoding probe {}", probe.id))?;

        let outcome: RecallOutcome = if args.explicit {
            memory.recognize_explicitly(&pattern)?
        } else {
            memory.recognize(&pattern)?
        };

        let matched = learned
            .iter()
            .find(|(_, p)| *p == outcome.pattern)
            .map(|(id, _)| id.clone());

        let rendered = encoder.render(&outcome.pattern, side)?;
        reports.push(ProbeReport {
            probe: probe.id.clone(),
            status: outcome.status,
            iterations: outcome.iterations,
            energy: outcome.energy,
            recalled: rendered.lines().map(str::to_string).collect(),
            matched,
        });
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    println!("\n=== Learned Patterns ===");
    for id in memory.patterns()? {
        println!("  {}", id);
    }

    for report in &reports {
        println!("\n=== Probe: {} ===", report.probe);
        println!("Status:     {:?}", report.status);
        println!("Iterations: {}", report.iterations);
        println!("Energy:     {:.1}", report.energy);
        println!(
            "Matched:    {}",
            report.matched.as_deref().unwrap_or("none (spurious state)")
        );
        for line in &report.recalled {
            println!("  {}", line);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_neurons_are_kept() {
        let file = MemoryConfig::default().with_neurons(25);
        assert_eq!(resolve_config(None, Some(file), 9).neurons, 25);
    }

    #[test]
    fn test_session_neurons_take_precedence() {
        let file = MemoryConfig::default().with_neurons(25);
        assert_eq!(resolve_config(Some(16), Some(file), 9).neurons, 16);
        assert_eq!(resolve_config(Some(16), None, 9).neurons, 16);
    }

    #[test]
    fn test_grid_area_without_overrides() {
        let config = resolve_config(None, None, 9);
        assert_eq!(config.neurons, 9);
        assert_eq!(config.max_iterations, 10);
    }
}
