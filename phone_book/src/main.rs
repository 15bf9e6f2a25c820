use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::info;

use phone_book::input::InputReader;
use phone_book::logger::initialize_logger;
use phone_book::{report, run_all, InsertOptions, ProbeStrategy, Result, DEFAULT_CAPACITY};

#[derive(ValueEnum, Debug, Clone, Copy)]
enum StrategyArg {
    Linear,
    Quadratic,
    Both,
}

impl StrategyArg {
    fn strategies(self) -> Vec<ProbeStrategy> {
        match self {
            StrategyArg::Linear => vec![ProbeStrategy::Linear],
            StrategyArg::Quadratic => vec![ProbeStrategy::Quadratic],
            StrategyArg::Both => ProbeStrategy::ALL.to_vec(),
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Telephone book: hash table collision handling", long_about = None)]
struct Args {
    /// Number of slots in each hash table
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    #[arg(short, long, value_enum, default_value_t = StrategyArg::Both)]
    strategy: StrategyArg,

    /// Read the count and the numbers from a file instead of prompting
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Refuse numbers that are already in the table
    #[arg(long)]
    reject_duplicates: bool,
}

fn read_numbers(args: &Args) -> Result<Vec<u64>> {
    match &args.input {
        Some(path) => {
            info!("Reading telephone numbers from {}", path.display());
            let file = BufReader::new(File::open(path)?);
            InputReader::new(file, io::sink(), false).read_session(args.capacity)
        }
        None => {
            let stdin = io::stdin();
            InputReader::new(stdin.lock(), io::stdout(), true).read_session(args.capacity)
        }
    }
}

fn execute(args: &Args) -> Result<()> {
    println!("---- Telephone Book: Hash Table Collision Handling ----");
    let numbers = read_numbers(args)?;

    let options = InsertOptions {
        capacity: args.capacity,
        reject_duplicates: args.reject_duplicates,
    };
    let runs = run_all(&args.strategy.strategies(), &numbers, options)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_report(&mut out, &runs)?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    initialize_logger();
    let args = Args::parse();

    match execute(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
