use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::info;

use report::format_report;
use scheduler::{Params, Policy, Time, DEFAULT_QUANTUM};

mod workload;

/// Output format of the results
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
enum Format {
    /// Gantt chart and tables
    Text,
    /// The simulations as JSON
    Json,
}

/// Simulate CPU scheduling policies over a set of processes
#[derive(Parser, Debug)]
#[command(name = "runner")]
#[command(about = "Simulate CPU scheduling policies over a set of processes", long_about = None)]
struct Args {
    /// Policy to run (fcfs, sjf, srtf, priority, rr) or `all`
    #[arg(short, long, default_value = "all")]
    policy: String,

    /// Round Robin time quantum
    #[arg(short, long, env = "QUANTUM", default_value_t = DEFAULT_QUANTUM, allow_negative_numbers = true)]
    quantum: Time,

    /// JSON file holding an array of processes; the built-in sample is used otherwise
    #[arg(short, long)]
    workload: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let processes = match &args.workload {
        Some(path) => workload::load(path)?,
        None => workload::sample(),
    };

    let policies = if args.policy.eq_ignore_ascii_case("all") {
        Policy::ALL.to_vec()
    } else {
        vec![args.policy.parse::<Policy>()?]
    };

    let params = Params {
        quantum: args.quantum,
    };
    info!(
        "running {} policies over {} processes",
        policies.len(),
        processes.len()
    );
    let simulations = policies
        .iter()
        .map(|policy| policy.simulate(&processes, &params))
        .collect::<Result<Vec<_>, _>>()?;

    match args.format {
        Format::Text => print!("{}", format_report(&simulations)),
        Format::Json => println!("{}", serde_json::to_string_pretty(&simulations)?),
    }

    Ok(())
}

#[cfg(test)]
mod tests;
