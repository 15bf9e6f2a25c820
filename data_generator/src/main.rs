use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const FIRST_NUMBER: u64 = 2_000_000;
const LAST_NUMBER: u64 = 9_999_999;

/// Writes an input file for `phone_book --input`: the count on the first line,
/// then one telephone number per line.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short = 'n', long, default_value_t = 10)]
    count: usize,

    #[arg(short, long, default_value = "numbers.txt")]
    output: PathBuf,

    /// Table capacity the numbers are meant for
    #[arg(short, long, default_value_t = 10)]
    capacity: u64,

    /// Give every number the same home slot
    #[arg(long)]
    collide: bool,

    #[arg(long)]
    seed: Option<u64>,
}

fn generate<R: Rng>(rng: &mut R, args: &Args) -> Vec<u64> {
    let home = rng.gen_range(0..args.capacity);
    (0..args.count)
        .map(|_| {
            let number = rng.gen_range(FIRST_NUMBER..=LAST_NUMBER);
            if args.collide {
                // round down to the chosen residue
                number - number % args.capacity + home
            } else {
                number
            }
        })
        .collect()
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    if args.capacity == 0 {
        eprintln!("Error: capacity must be at least 1");
        std::process::exit(1);
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let numbers = generate(&mut rng, &args);

    let file = File::create(&args.output)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", numbers.len())?;
    for number in &numbers {
        writeln!(writer, "{}", number)?;
    }

    writer.flush()?;
    println!("File generated successfully: {}", args.output.display());
    Ok(())
}
