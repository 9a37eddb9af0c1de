//! Game balance simulator CLI.
//!
//! Run Monte Carlo simulations to analyze game balance.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                    # Default: 1000 runs
//!   cargo run --bin simulate -- -n 100 -d 20   # 100 runs, 20 dungeons each
//!   cargo run --bin simulate -- --seed 42      # Reproducible run

use rogue_slayer::simulator::{run_simulation, SimConfig};
use std::env;

/// Parsed command line.
struct Options {
    config: SimConfig,
    json: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Options { config, json } = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run with --help for usage.");
            std::process::exit(2);
        }
    };

    if config.verbosity >= 1 {
        println!("╔═══════════════════════════════════════════════════════════════╗");
        println!("║              ROGUE SLAYER BALANCE SIMULATOR                   ║");
        println!("╚═══════════════════════════════════════════════════════════════╝");
        println!();
        println!("Configuration:");
        println!("  Runs:           {}", config.num_runs);
        println!("  Max Dungeons:   {}", config.max_dungeons);
        if let Some(seed) = config.seed {
            println!("  Seed:           {}", seed);
        }
        println!();
    }

    let report = run_simulation(&config);

    if config.verbosity >= 1 {
        println!("{}", report.to_text());
    } else {
        println!(
            "won {}/{} ({:.1}%), died {}",
            report.runs_won,
            report.num_runs,
            report.win_rate * 100.0,
            report.runs_died
        );
    }

    if json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        if let Err(err) = std::fs::write(&filename, report.to_json()) {
            eprintln!("Failed to write JSON report: {}", err);
            std::process::exit(1);
        }
        println!("JSON report saved to: {}", filename);
    }
}

fn numeric<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("{} expects a value", flag))?;
    value
        .parse()
        .map_err(|_| format!("{} expects a number, got '{}'", flag, value))
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut config = SimConfig::default();
    let mut json = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-n" | "--runs" => config.num_runs = numeric(arg, iter.next())?,
            "-s" | "--seed" => config.seed = Some(numeric(arg, iter.next())?),
            "-d" | "--max-dungeons" => config.max_dungeons = numeric(arg, iter.next())?,
            "-q" | "--quiet" => config.verbosity = 0,
            "-v" | "--verbose" => config.verbosity = 2,
            "--json" => json = true,
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
    }

    Ok(Options { config, json })
}

fn print_help() {
    println!("Rogue Slayer Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>          Number of simulation runs (default: 1000)");
    println!("    -s, --seed <S>          Random seed for reproducibility");
    println!("    -d, --max-dungeons <D>  Dungeon attempts per run (default: 50)");
    println!("    -q, --quiet             One-line summary only");
    println!("    -v, --verbose           Print every run");
    println!("    --json                  Save JSON report");
    println!("    -h, --help              Show this help");
}
