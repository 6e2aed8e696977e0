//! Wordle Assistant - CLI
//!
//! Suggests next guesses from `word:feedback` pairs, classifies guesses and
//! benchmarks the frequency heuristic.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_assistant::{
    commands::{analyze_word, run_benchmark, run_suggest},
    core::Word,
    output::{
        print_analysis_result, print_benchmark_result, print_classification, print_opener,
        print_suggestions,
    },
    solver::{DEFAULT_SUGGESTION_LIMIT, ScoringWindow, Solver},
    wordlists::{EmbeddedSource, FileSource},
};

#[derive(Parser)]
#[command(
    name = "wordle_assistant",
    about = "Wordle assistant: filters candidates by feedback and ranks them by letter frequency",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word-list document to load (bundled list if omitted or unreadable)
    #[arg(short = 'w', long, global = true, env = "WORDLE_WORDLIST")]
    wordlist: Option<PathBuf>,

    /// Number of suggestions to show
    #[arg(short = 'n', long, global = true, default_value_t = DEFAULT_SUGGESTION_LIMIT)]
    limit: usize,

    /// Score the whole candidate pool instead of the first 50 candidates
    #[arg(long, global = true)]
    full_ranking: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the recommended opening word
    First,

    /// Suggest next guesses for a history of `word:feedback` pairs
    ///
    /// Feedback is five symbols: G (correct), Y (present), - (absent), or
    /// comma-separated tokens such as `correct,absent,present,absent,absent`.
    Suggest {
        /// Guesses in play order, e.g. `crane:--Y-G slate:G----`
        guesses: Vec<String>,
    },

    /// Show the feedback `guess` would receive against `secret`
    Classify {
        /// The hidden answer
        secret: String,
        /// The word played
        guess: String,
    },

    /// Analyze the entropy of a word against the remaining candidates
    Analyze {
        /// Word to analyze
        word: String,
        /// Guesses already played, as `word:feedback`
        guesses: Vec<String>,
    },

    /// Benchmark the solver on random answer words
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'c', long, default_value = "100")]
        count: usize,

        /// Seed for a reproducible sample
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let window = if cli.full_ranking {
        ScoringWindow::FullPool
    } else {
        ScoringWindow::default()
    };
    let load = || load_solver(cli.wordlist.clone(), window);

    match cli.command {
        Commands::First => {
            let solver = load()?;
            let opener = solver.optimal_first_guess()?;
            print_opener(&opener, solver.corpus()?.answer_word_count());
        }
        Commands::Suggest { guesses } => {
            let mut solver = load()?;
            let result = run_suggest(&mut solver, &guesses, cli.limit)?;
            print_suggestions(solver.state()?.history(), &result);
        }
        Commands::Classify { secret, guess } => run_classify_command(&secret, &guess)?,
        Commands::Analyze { word, guesses } => {
            let mut solver = load()?;
            let result = analyze_word(&mut solver, &word, &guesses)?;
            print_analysis_result(&result);
        }
        Commands::Benchmark { count, seed } => {
            let solver = load()?;
            println!("Running benchmark on {count} random words...");
            let result = run_benchmark(&solver, count, seed)?;
            print_benchmark_result(&result);
        }
    }
    Ok(())
}

fn load_solver(wordlist: Option<PathBuf>, window: ScoringWindow) -> Result<Solver> {
    let mut solver = Solver::new().with_scoring_window(window);
    match wordlist {
        Some(path) => solver.initialize(&FileSource::new(path))?,
        None => solver.initialize(&EmbeddedSource)?,
    }
    Ok(solver)
}

fn run_classify_command(secret: &str, guess: &str) -> Result<()> {
    let secret = Word::new(secret).with_context(|| format!("invalid secret '{secret}'"))?;
    let guess = Word::new(guess).with_context(|| format!("invalid guess '{guess}'"))?;
    print_classification(&secret, &guess);
    Ok(())
}
