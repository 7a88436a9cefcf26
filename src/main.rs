#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use tictactoe::{cli, init_logging, FieldState, TicTacToeField, DEFAULT_COLUMNS, DEFAULT_ROWS};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use log::info;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Two players take turns on one terminal.
    Play {
        #[arg(long, default_value_t = DEFAULT_ROWS)]
        rows: usize,
        #[arg(long, default_value_t = DEFAULT_COLUMNS)]
        columns: usize,
    },
    /// Print a randomly sized, randomly filled field.
    Random {
        #[arg(long, help = "Fix RNG seed for a reproducible field (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Print the field as JSON instead of a grid")]
        json: bool,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { rows, columns } => {
            let mut field = TicTacToeField::new(rows, columns)?;
            info!("starting {}x{} game", rows, columns);
            println!("Enter moves as `row column`, or `quit`.");
            let stdin = std::io::stdin();
            cli::play(&mut field, stdin.lock())?;
        }
        Commands::Random { seed, json } => {
            let mut rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let field = TicTacToeField::random(&mut rng);
            if json {
                println!("{}", serde_json::to_string(&FieldState::from(&field))?);
            } else {
                print!("{}", cli::render(&field));
            }
        }
    }
    Ok(())
}
