//! Warsim - Entry Point
//!
//! Command-line front end: parses flags into battle parameters, runs one of
//! the attrition models and prints the trajectory.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use warsim::core::error::Result;
use warsim::core::load_scenario;
use warsim::{run_batch, run_stochastic, SimulationOutput, SquareLaw, StochasticParams, UpdateOrder};

/// Attrition battle simulator
#[derive(Parser, Debug)]
#[command(name = "warsim")]
#[command(about = "Simulate the course of a battle between two sides")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Per-unit casualty rolls, up to two unit groups per side
    Stochastic {
        #[command(flatten)]
        battle: BattleArgs,

        /// Random seed for deterministic runs
        #[arg(long)]
        seed: Option<u64>,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Lanchester square law
    Deterministic {
        /// Size of side r at the beginning of the battle
        #[arg(long)]
        r: f64,

        /// Size of side b at the beginning of the battle
        #[arg(long)]
        b: f64,

        /// Number of time units
        #[arg(long)]
        t: u32,

        /// Lethality of side r against side b
        #[arg(long)]
        a: f64,

        /// Lethality of side b against side r
        #[arg(long)]
        c: f64,

        /// Update both sides from the previous round instead of sequentially
        #[arg(long)]
        simultaneous: bool,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Run a battle described in a TOML scenario file
    Scenario {
        path: PathBuf,

        /// Overrides the seed in the file
        #[arg(long)]
        seed: Option<u64>,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Repeat a stochastic battle over a range of seeds
    Batch {
        #[command(flatten)]
        battle: BattleArgs,

        /// Number of runs
        #[arg(long, default_value_t = 1000)]
        runs: u64,

        /// Seed of the first run; run i uses first_seed + i
        #[arg(long, default_value_t = 0)]
        first_seed: u64,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Args, Debug)]
struct BattleArgs {
    /// Size of the first part of the units on side r
    #[arg(long)]
    size_r1: u32,

    /// Power of the first part of the units on side r
    #[arg(long)]
    power_r1: f64,

    /// Size of the first part of the units on side b
    #[arg(long)]
    size_b1: u32,

    /// Power of the first part of the units on side b
    #[arg(long)]
    power_b1: f64,

    /// Amount of battle rounds/time units
    #[arg(long)]
    time: u32,

    /// Bonus/malus (armour, training, position) of the first part of side r (maximum = 1)
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    coeff_r1: f64,

    /// Bonus/malus (armour, training, position) of the first part of side b (maximum = 1)
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    coeff_b1: f64,

    /// Size of the second part of the units on side r
    #[arg(long, default_value_t = 0)]
    size_r2: u32,

    /// Power of the second part of the units on side r
    #[arg(long, default_value_t = 0.0)]
    power_r2: f64,

    /// Bonus/malus (armour, training, position) of the second part of side r (maximum = 1)
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    coeff_r2: f64,

    /// Size of the second part of the units on side b
    #[arg(long, default_value_t = 0)]
    size_b2: u32,

    /// Power of the second part of the units on side b
    #[arg(long, default_value_t = 0.0)]
    power_b2: f64,

    /// Bonus/malus (armour, training, position) of the second part of side b (maximum = 1)
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    coeff_b2: f64,
}

impl From<&BattleArgs> for StochasticParams {
    fn from(args: &BattleArgs) -> Self {
        Self {
            size_r1: args.size_r1,
            power_r1: args.power_r1,
            size_b1: args.size_b1,
            power_b1: args.power_b1,
            time: args.time,
            coeff_r1: args.coeff_r1,
            coeff_b1: args.coeff_b1,
            size_r2: args.size_r2,
            power_r2: args.power_r2,
            coeff_r2: args.coeff_r2,
            size_b2: args.size_b2,
            power_b2: args.power_b2,
            coeff_b2: args.coeff_b2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn print_output(output: &SimulationOutput, format: Format) -> Result<()> {
    match format {
        Format::Text => println!("{}", output.summary()),
        Format::Json => println!("{}", output.to_json()?),
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Stochastic { battle, seed, format } => {
            let params = StochasticParams::from(&battle);
            let seed = seed.unwrap_or_else(rand::random);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let trajectory = run_stochastic(&params, &mut rng)?;
            print_output(&SimulationOutput::stochastic(trajectory, seed), format)
        }
        Command::Deterministic {
            r,
            b,
            t,
            a,
            c,
            simultaneous,
            format,
        } => {
            let order = if simultaneous {
                UpdateOrder::Simultaneous
            } else {
                UpdateOrder::Sequential
            };
            let run = SquareLaw::new(a, c)?.with_order(order).run(r, b, t)?;
            print_output(&SimulationOutput::deterministic(run.trajectory), format)
        }
        Command::Scenario { path, seed, format } => {
            let output = load_scenario(&path)?.run(seed)?;
            print_output(&output, format)
        }
        Command::Batch {
            battle,
            runs,
            first_seed,
            format,
        } => {
            let params = StochasticParams::from(&battle);
            let summary = run_batch(&params, first_seed..first_seed.saturating_add(runs))?;
            match format {
                Format::Text => println!("{}", summary.summary()),
                Format::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
            }
            Ok(())
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warsim=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
