//! CLI frontend for the Kitty Spin game engine.

mod commands;
mod tui;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "kittyspin",
    about = "Kitty Spin: keep a cat happy with a slot machine",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a headless game and print the final state
    Simulate {
        /// Simulated seconds to run
        #[arg(short = 't', long, default_value = "60")]
        seconds: u64,

        /// RNG seed (overrides the config file)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Turn auto-spin on at the start
        #[arg(short, long)]
        auto_spin: bool,

        /// Number of manual spins, each requested as soon as the reels are free
        #[arg(long, default_value = "0")]
        spins: u32,

        /// Buy an item at the start (growth, health, mood); repeatable
        #[arg(short, long)]
        buy: Vec<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Show all events (not just notable ones)
        #[arg(short, long)]
        verbose: bool,

        /// JSON game config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show symbol odds, theoretical and sampled
    Odds {
        /// Number of sample draws
        #[arg(short, long, default_value = "100000")]
        draws: u64,

        /// RNG seed for the sample
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },

    /// List the shop catalog
    Shop,

    /// Play in the terminal
    Play {
        /// RNG seed (overrides the config file)
        #[arg(short, long)]
        seed: Option<u64>,

        /// JSON game config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate {
            seconds,
            seed,
            auto_spin,
            spins,
            buy,
            json,
            verbose,
            config,
        } => commands::simulate::run(&commands::simulate::SimulateOptions {
            seconds,
            seed,
            auto_spin,
            spins,
            buy,
            json,
            verbose,
            config,
        }),
        Commands::Odds { draws, seed } => commands::odds::run(draws, seed),
        Commands::Shop => commands::shop::run(),
        Commands::Play { seed, config } => commands::play::run(config.as_deref(), seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
