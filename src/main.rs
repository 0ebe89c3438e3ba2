mod interface;

use anyhow::Result;
use clap::Parser;
use log::info;

use car_sim::simulation::SimWorld;

#[derive(Parser)]
#[command(name = "car_sim")]
#[command(about = "Grid car simulation with an interactive shell")]
struct Cli {
    /// Run a randomly generated fleet of this many cars instead of the
    /// interactive shell
    #[arg(long)]
    fleet: Option<usize>,

    /// Field width for fleet mode
    #[arg(long, default_value = "10")]
    width: i32,

    /// Field height for fleet mode
    #[arg(long, default_value = "10")]
    height: i32,

    /// RNG seed for fleet mode; the same seed reproduces the same run
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Command string length for generated cars
    #[arg(long, default_value = "20")]
    commands: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.fleet {
        Some(count) => run_fleet(count, cli.width, cli.height, cli.seed, cli.commands),
        None => interface::run(),
    }
}

/// Run a reproducible randomly generated scenario without any prompts
fn run_fleet(count: usize, width: i32, height: i32, seed: u64, command_len: usize) -> Result<()> {
    let world = SimWorld::random_fleet(width, height, count, command_len, seed)?;
    info!("generated {} cars on a {width} x {height} field with seed {seed}", world.cars().len());

    interface::print_car_list(world.cars());
    let report = world.run();
    interface::print_report(&report);

    Ok(())
}
