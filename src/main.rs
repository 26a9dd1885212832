//! Wordle Sampler - CLI
//!
//! Monte-Carlo Wordle solver with a terminal viewer, a stdin assistant and benchmarks.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wordle_sampler::{
    commands::{pick_targets, progress_bar, run_assist, run_benchmark, solve_word},
    core::{FeedbackRule, Word},
    output::{print_benchmark_result, print_seed_list, print_solution},
    solver::{SolverConfig, SolverContext},
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_sampler",
    about = "Wordle solver using letter-coverage openers and Monte-Carlo guess selection",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Letters per word
    #[arg(short = 'l', long, global = true, default_value_t = 5)]
    length: usize,

    /// Random seed (default: fresh entropy)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Duplicate-letter feedback rule
    #[arg(long, global = true, value_enum, default_value_t = Rule::Standard)]
    feedback: Rule,

    /// Score candidate guesses on a single thread
    #[arg(long, global = true)]
    sequential: bool,

    /// Monte-Carlo sample size for both candidate guesses and simulated targets
    #[arg(long, global = true, default_value_t = 100)]
    samples: usize,
}

#[derive(Clone, Copy, ValueEnum)]
enum Rule {
    /// Each target letter backs at most one green or yellow
    Standard,
    /// Yellow whenever the letter occurs elsewhere in the target
    Lenient,
}

impl From<Rule> for FeedbackRule {
    fn from(rule: Rule) -> Self {
        match rule {
            Rule::Standard => Self::Standard,
            Rule::Lenient => Self::Lenient,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Watch the solver play in a TUI (default)
    Watch {
        /// Secret word (default: random dictionary word)
        word: Option<String>,
    },

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Play many games against random dictionary words
    Benchmark {
        /// Number of games
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },

    /// Show the ranked opening words
    Seeds {
        /// Number of seed words to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Get suggestions while playing a real game
    Assist,
}

/// Load the dictionary selected by the -w flag
fn load_wordlist(wordlist: &str, length: usize) -> Result<Vec<Word>> {
    match wordlist {
        "embedded" => Ok(words_from_slice(WORDS)
            .into_iter()
            .filter(|word| word.len() == length)
            .collect()),
        path => load_from_file(path, length)
            .with_context(|| format!("failed to read word list from {path}")),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config = SolverConfig {
        word_length: cli.length,
        feedback_rule: cli.feedback.into(),
        parallel: !cli.sequential,
        ..SolverConfig::default()
    }
    .with_samples(cli.samples);

    let words = load_wordlist(&cli.wordlist, cli.length)?;
    let ctx = SolverContext::new(words, config).context("failed to build the dictionary")?;

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!("random seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);

    match cli.command.unwrap_or(Commands::Watch { word: None }) {
        Commands::Watch { word } => run_watch_command(&ctx, word.as_deref(), seed),
        Commands::Solve { word, verbose } => {
            let solution = solve_word(&ctx, &word, &mut rng)
                .with_context(|| format!("could not solve '{word}'"))?;
            print_solution(&solution, verbose);
            Ok(())
        }
        Commands::Benchmark { count } => {
            run_benchmark_command(&ctx, count, seed, &mut rng);
            Ok(())
        }
        Commands::Seeds { count } => {
            print_seed_list(ctx.seeds(), count);
            Ok(())
        }
        Commands::Assist => run_assist(&ctx, &mut rng),
    }
}

fn run_benchmark_command(ctx: &SolverContext, count: usize, seed: u64, rng: &mut StdRng) {
    println!(
        "Running benchmark on {} random words (seed {})...",
        count.to_string().bright_yellow(),
        seed
    );

    let targets = pick_targets(ctx, count, rng);
    let progress = progress_bar(targets.len());
    let result = run_benchmark(ctx, &targets, seed, &progress);
    print_benchmark_result(&result);
}

fn run_watch_command(ctx: &SolverContext, word: Option<&str>, seed: u64) -> Result<()> {
    use wordle_sampler::interactive::{App, run_tui};

    let target = word
        .map(|text| ctx.parse_word(text))
        .transpose()
        .context("invalid secret word")?;
    let app = App::new(ctx, target, seed)?;
    run_tui(app)
}
