//! Wordle Solver - CLI
//!
//! Interactive solving, single-word solves, score analysis and leave-one-out
//! evaluation over the dictionary.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::io;
use std::path::{Path, PathBuf};
use wordle_solver::{
    commands::{
        EvaluationConfig, InteractiveConfig, SolveConfig, analyze_word,
        print_test_all_statistics, run_simple, run_test_all, solve_word,
    },
    output::{print_analysis_result, print_solve_result, print_word_lists},
    solver::Solver,
    wordlists::{DEFAULT_WORDS_PATH, WordLists},
};

#[derive(Parser)]
#[command(
    name = "wordle_solver",
    about = "Greedy Wordle solver scoring guesses by letter and positional frequency",
    long_about = "Greedy Wordle solver scoring guesses by letter and positional frequency.\n\n\
                  Running without a subcommand starts interactive mode, even when options \
                  such as --words are given. Leave-one-out evaluation over the dictionary \
                  runs only through the explicit `test-all` subcommand.",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary of five-letter words, one per line
    #[arg(short = 'w', long, global = true, default_value = DEFAULT_WORDS_PATH)]
    words: PathBuf,

    /// Words already used as answers; never guessed (default: usedwords.txt if present)
    #[arg(short = 'u', long, global = true)]
    used: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default): enter feedback after each suggested guess
    Play {
        /// Give up after this many guesses
        #[arg(long)]
        max_rounds: Option<usize>,
    },

    /// Solve a specific target word with simulated feedback
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts and top words for each guess
        #[arg(short, long)]
        verbose: bool,

        /// Stop after this many guesses
        #[arg(short = 'm', long)]
        max_guesses: Option<usize>,
    },

    /// Break down how a word scores as an opening guess
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Play every dictionary word as the secret and report statistics
    TestAll {
        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,

        /// Test a random sample of this many words
        #[arg(short = 'n', long)]
        sample: Option<usize>,

        /// Seed for --sample
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Solve targets in parallel, each with its own statistics cache
        #[arg(short, long)]
        parallel: bool,

        /// Recompute letter statistics every round
        #[arg(long)]
        no_cache: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { max_rounds: None });

    match command {
        Commands::Play { max_rounds } => {
            run_play_command(&cli.words, cli.used.as_deref(), max_rounds)
        }
        Commands::Solve {
            word,
            verbose,
            max_guesses,
        } => run_solve_command(&cli.words, cli.used.as_deref(), word, verbose, max_guesses),
        Commands::Analyze { word } => run_analyze_command(&cli.words, cli.used.as_deref(), &word),
        Commands::TestAll {
            limit,
            sample,
            seed,
            parallel,
            no_cache,
        } => run_test_all_command(
            &cli.words,
            &EvaluationConfig {
                limit,
                sample,
                seed,
                parallel,
                use_cache: !no_cache,
                show_progress: true,
            },
        ),
    }
}

fn load_lists(words: &Path, used: Option<&Path>) -> Result<WordLists> {
    WordLists::load(words, used).with_context(|| {
        format!(
            "could not load word lists (dictionary: {})",
            words.display()
        )
    })
}

fn run_play_command(words: &Path, used: Option<&Path>, max_rounds: Option<usize>) -> Result<()> {
    let lists = load_lists(words, used)?;
    print_word_lists(&lists);

    let solver = Solver::new(&lists.dictionary, &lists.playable);
    let outcome = run_simple(
        &solver,
        InteractiveConfig { max_rounds },
        io::stdin().lock(),
        io::stdout().lock(),
    )
    .context("interactive session failed")?;

    log::info!("interactive session ended: {outcome:?}");
    log::debug!("statistics cache: {:?}", solver.cache().stats());
    Ok(())
}

fn run_solve_command(
    words: &Path,
    used: Option<&Path>,
    word: String,
    verbose: bool,
    max_guesses: Option<usize>,
) -> Result<()> {
    let lists = load_lists(words, used)?;
    let solver = Solver::new(&lists.dictionary, &lists.playable);

    let config = SolveConfig {
        target: word,
        max_guesses,
    };
    let target = config.target.clone();
    let result = solve_word(config, &solver).with_context(|| format!("could not solve {target}"))?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_analyze_command(words: &Path, used: Option<&Path>, word: &str) -> Result<()> {
    let lists = load_lists(words, used)?;
    let solver = Solver::new(&lists.dictionary, &lists.playable);

    let result = analyze_word(word, &solver).with_context(|| format!("could not analyze {word}"))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_test_all_command(words: &Path, config: &EvaluationConfig) -> Result<()> {
    let dictionary = wordle_solver::wordlists::loader::load_dictionary(words)
        .with_context(|| format!("could not load dictionary {}", words.display()))?;

    println!("\n{}", "═".repeat(70));
    println!(" Leave-one-out testing mode ");
    println!("{}", "═".repeat(70));
    println!("\nTotal Words: {}", dictionary.len());
    if let Some(count) = config.sample {
        println!("Random sample: {count} words (seed {})", config.seed);
    }
    if config.parallel {
        println!("Parallel: one statistics cache per word");
    }
    if !config.use_cache {
        println!("Statistics cache disabled");
    }
    println!();

    let stats = run_test_all(&dictionary, config).context("evaluation aborted")?;
    print_test_all_statistics(&stats);
    Ok(())
}
