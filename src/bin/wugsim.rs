//! Wugsim CLI - run directed-evolution simulations from the command line.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use wugsim::evolution::{MatingRules, UnmatchedPolicy};
use wugsim::simulation::{classic_evaluator, Simulation, SimulationParams};

/// Wugsim - directed evolution of wugs toward the superwug
#[derive(Parser, Debug)]
#[command(name = "wugsim")]
#[command(author, version, about = "Directed evolution of binary genomes", long_about = None)]
struct Cli {
    /// Initial population size
    #[arg(short = 'n', long, default_value = "16")]
    population_size: usize,

    /// Number of generations
    #[arg(short = 'g', long, default_value = "10")]
    generations: usize,

    /// Population capacity limit
    #[arg(short = 'l', long, default_value = "64")]
    limit: usize,

    /// Allow same-gender pairings
    #[arg(long)]
    hermaphrodite: bool,

    /// Suitability bonus per coinciding superiority entry
    #[arg(short = 'b', long, default_value = "0")]
    coincidence_bonus: i64,

    /// Abort the run when an individual finds no eligible partner
    /// (default: skip it and keep pairing)
    #[arg(long)]
    strict_pairing: bool,

    /// Random seed
    #[arg(short = 's', long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let policy = if cli.strict_pairing {
        UnmatchedPolicy::Abort
    } else {
        UnmatchedPolicy::Skip
    };
    let rules =
        MatingRules::new(cli.hermaphrodite, cli.coincidence_bonus).with_unmatched_policy(policy);
    let params = SimulationParams::new(cli.population_size, cli.generations, cli.seed)
        .with_limit(cli.limit);

    let mut sim = Simulation::new(classic_evaluator(), rules, params)
        .context("failed to seed initial population")?;

    for generation in 1..=cli.generations {
        sim.step()
            .with_context(|| format!("generation {generation} failed"))?;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(
        out,
        "Population after {} generations ({} individuals, limit {}):",
        sim.generation(),
        sim.population().len(),
        sim.population().limit()
    )?;

    let traits = sim.evaluator().zone_map().traits().join("/");
    writeln!(out, "  superiority ({traits})  gender  count")?;
    for entry in sim.report().context("failed to build population report")? {
        writeln!(
            out,
            "  {:<24} {:>5} {:>6}",
            entry.superiority.to_string(),
            entry.gender,
            entry.count
        )?;
    }

    if let Some(best) = sim.population().best() {
        writeln!(
            out,
            "Best individual: {} (rank {}/{})",
            best.individual(),
            best.rank(),
            sim.evaluator().trait_count()
        )?;
        if sim.converged() {
            writeln!(out, "Population converged on the superwug phenotype.")?;
        }
    }

    Ok(())
}
