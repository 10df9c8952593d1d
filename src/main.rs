use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use crucigrama::errors::GenerateError;
use crucigrama::generator::Generator;
use crucigrama::{puzzle, word_list};

/// Pictogram crossword layout generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed for the clue-square sample (fixed seed → identical output)
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Emit compact JSON instead of pretty-printed
    #[arg(short, long)]
    compact: bool,
}

/// Entry point of the crucigrama CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    // Set up logging
    let debug_enabled = std::env::var("CRUCIGRAMA_DEBUG").is_ok();
    crucigrama::log::init_logger(debug_enabled);

    log::debug!("Starting crucigrama generator");

    if let Err(e) = try_main() {
        // Print the error message to stderr, with detailed formatting if it's a GenerateError
        if let Some(gen_err) = e.downcast_ref::<GenerateError>() {
            eprintln!("Error: {}", gen_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        // Exit explicitly with a nonzero code so scripts can detect failure
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the crucigrama CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Run the placement engine over each embedded word set.
/// 3. Assemble the delivery records and print them as JSON on stdout.
/// 4. Print performance metrics (timings, counts) on stderr.
///
/// Returns `Ok(())` on success or an error (e.g., an empty word set)
/// which bubbles up to [`main`].
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let cli = Cli::parse();

    // One generator for the whole batch: the seeded RNG threads through
    // every puzzle, so the batch as a whole reproduces per seed.
    let mut generator = Generator::new(cli.seed);

    let t_generate = Instant::now();
    let mut puzzles = Vec::with_capacity(word_list::WORD_SETS.len());
    for (idx, set) in word_list::WORD_SETS.iter().enumerate() {
        let words: Vec<String> = set.iter().map(|s| (*s).to_string()).collect();
        let layout = generator.generate(&words)?;
        puzzles.push(puzzle::build_puzzle(idx + 1, &layout, |key| {
            word_list::emoji_for(key).map(str::to_string)
        }));
    }
    let generate_secs = t_generate.elapsed().as_secs_f64();

    let json = if cli.compact {
        serde_json::to_string(&puzzles)?
    } else {
        serde_json::to_string_pretty(&puzzles)?
    };
    println!("{json}");

    // Diagnostics (puzzle count, timing) go to stderr, not the payload
    eprintln!(
        "Generated {} crosswords in {:.3}s (seed {}).",
        puzzles.len(),
        generate_secs,
        cli.seed
    );

    Ok(())
}
