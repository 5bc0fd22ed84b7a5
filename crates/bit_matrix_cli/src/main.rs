// CLI for generating, saving and inspecting random bit matrices.

use std::path::{Path, PathBuf};
use std::time::Instant;

use bit_matrix::config::{DEFAULT_COLS, DEFAULT_OUTPUT_PATH, DEFAULT_ROWS};
use bit_matrix::{BitMatrix, GeneratorConfig, Report, RngBits, generate};
use clap::{Args, Parser, Subcommand};

// setup command line args

#[derive(Parser)]
#[command(about, long_about = None)]
pub struct CliArgs {
    /// Defaults to `generate` with default settings.
    #[clap(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a random bit matrix and save it as .npy.
    Generate(GenerateArgs),
    /// Load a saved matrix and print its statistics.
    Inspect(InspectArgs),
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[clap(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,
    #[clap(long, default_value_t = DEFAULT_COLS)]
    cols: usize,
    #[clap(long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,
    #[clap(long)]
    seed: Option<u64>,
}

#[derive(Debug, Args)]
pub struct InspectArgs {
    #[clap(required = true)]
    path: PathBuf,
}

impl From<GenerateArgs> for GeneratorConfig {
    fn from(args: GenerateArgs) -> Self {
        Self {
            rows: args.rows,
            cols: args.cols,
            output_path: args.output,
            seed: args.seed,
        }
    }
}

fn main() -> Result<(), String> {
    env_logger::init();
    let args = CliArgs::parse();
    run(args.command)
}

fn run(command: Option<Command>) -> Result<(), String> {
    let result = match command {
        Some(Command::Generate(args)) => generate_and_save(&args.into()),
        Some(Command::Inspect(args)) => inspect(&args.path),
        None => generate_and_save(&GeneratorConfig::default()),
    };

    result.map_err(|e| e.to_string())
}

fn generate_and_save(config: &GeneratorConfig) -> Result<(), bit_matrix::BitMatrixError> {
    println!("Generating {} x {} random bit matrix...", config.rows, config.cols);
    match config.seed {
        Some(seed) => log::info!("Using seed {}", seed),
        None => log::info!("Seeding from OS entropy"),
    }

    let start = Instant::now();
    let mut source = RngBits::from_seed_option(config.seed);
    let matrix = generate(config.rows, config.cols, &mut source)?;
    let elapsed = start.elapsed();

    println!("{}", Report::from_matrix(&matrix, Some(elapsed)));

    let save_start = Instant::now();
    matrix.save(&config.output_path)?;
    log::info!("Time to save matrix: {:?}", save_start.elapsed());

    println!("Matrix saved to {}", config.output_path.display());
    Ok(())
}

fn inspect(path: &Path) -> Result<(), bit_matrix::BitMatrixError> {
    println!("Loading matrix from {}...", path.display());
    let matrix = BitMatrix::load(path)?;
    println!("{}", Report::from_matrix(&matrix, None));
    Ok(())
}
