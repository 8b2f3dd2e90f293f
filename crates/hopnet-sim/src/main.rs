//! Hopnet - structured P2P lookup simulator

use anyhow::Result;
use clap::{Parser, Subcommand};
use hopnet_core::NodeId;
use hopnet_ring::RingNetwork;
use hopnet_sim::scenario::{Placement, Query, QueryReport, Scenario};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "hopnet")]
#[command(about = "Structured P2P lookup simulator", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Print lookup outcomes as JSON, one object per query
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a ring, place files, and run a single lookup
    Lookup {
        /// Ring size (number of nodes)
        #[arg(short = 'n', long, default_value = "10")]
        size: usize,

        /// Placement in NODE=FILE form (repeatable)
        #[arg(short, long = "place", value_parser = parse_placement)]
        place: Vec<(NodeId, String)>,

        /// Node the lookup starts from
        #[arg(short, long, default_value = "0")]
        start: NodeId,

        /// File to locate
        #[arg(required = true)]
        file: String,
    },

    /// Execute a scenario file
    Run {
        /// Path to the scenario file (TOML)
        #[arg(required = true)]
        scenario: PathBuf,
    },

    /// Print the ring adjacency
    Topology {
        /// Ring size (number of nodes)
        #[arg(short = 'n', long, default_value = "10")]
        size: usize,
    },

    /// Run the built-in demo scenario
    Demo,
}

fn parse_placement(s: &str) -> Result<(NodeId, String), String> {
    let (node, file) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NODE=FILE, got '{s}'"))?;
    let node = node
        .trim()
        .parse()
        .map_err(|e| format!("invalid node id '{node}': {e}"))?;
    Ok((node, file.to_string()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Lookup {
            size,
            place,
            start,
            file,
        } => {
            run_lookup(size, place, start, file, cli.json)?;
        }
        Commands::Run { scenario } => {
            run_scenario_file(&scenario, cli.json)?;
        }
        Commands::Topology { size } => {
            print_topology(size)?;
        }
        Commands::Demo => {
            run_scenario(&Scenario::demo(), cli.json)?;
        }
    }

    Ok(())
}

fn run_lookup(
    size: usize,
    place: Vec<(NodeId, String)>,
    start: NodeId,
    file: String,
    json: bool,
) -> Result<()> {
    let scenario = Scenario {
        size,
        placements: place
            .into_iter()
            .map(|(node, file)| Placement { node, file })
            .collect(),
        queries: vec![Query { start, file }],
    };

    run_scenario(&scenario, json)
}

fn run_scenario_file(path: &std::path::Path, json: bool) -> Result<()> {
    let scenario = Scenario::load(path)?;
    tracing::info!(
        size = scenario.size,
        placements = scenario.placements.len(),
        queries = scenario.queries.len(),
        "scenario loaded"
    );
    run_scenario(&scenario, json)
}

fn run_scenario(scenario: &Scenario, json: bool) -> Result<()> {
    let reports = scenario.run()?;
    for report in &reports {
        print_report(report, json)?;
    }
    Ok(())
}

fn print_report(report: &QueryReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(report)?);
        return Ok(());
    }

    match report.found {
        Some(node) => println!(
            "File '{}' found on node {} (lookup started at node {})",
            report.file, node, report.start
        ),
        None => println!(
            "File '{}' not found; search exhausted after visiting {} nodes",
            report.file,
            report.trace.hops()
        ),
    }
    println!("Path: {}", report.trace);

    Ok(())
}

fn print_topology(size: usize) -> Result<()> {
    let network = RingNetwork::build(size)?;
    for node in network.nodes() {
        println!("{} -> {}", node.id(), node.successor());
    }
    Ok(())
}
