//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, survival_bar};
use crate::commands::BenchmarkResult;
use crate::solver::{SeedList, Solution};
use colored::Colorize;

/// Print the rounds of a solved game
pub fn print_solution(solution: &Solution, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        solution.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for round in &solution.rounds {
        println!(
            "\nTurn {}: {} {}",
            round.number,
            colored_guess(&round.guess, &round.feedback),
            round.feedback.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                round.pool_before, round.pool_after
            );
            if let Some(score) = round.score {
                println!(
                    "  Expected:   [{}] {:.1}% of the pool survives",
                    survival_bar(score, 20).green(),
                    score * 100.0
                );
            }
        }
    }

    println!();
    let count = solution.guess_count();
    println!(
        "{}",
        format!(
            "✅ Solved in {count} {}!",
            if count == 1 { "guess" } else { "guesses" }
        )
        .green()
        .bold()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n🎯 {}", "Games:".bright_cyan().bold());
    for outcome in &result.outcomes {
        let target = outcome.target.text().to_uppercase();
        match &outcome.result {
            Ok(solution) => {
                let path: Vec<String> = solution
                    .rounds
                    .iter()
                    .map(|round| colored_guess(&round.guess, &round.feedback))
                    .collect();
                println!(
                    "   {target}: {} ({})",
                    path.join(" "),
                    solution.guess_count()
                );
            }
            Err(e) => println!("   {target}: {}", e.to_string().red()),
        }
    }

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    if result.failed > 0 {
        println!(
            "   Failures:         {}",
            format!("{}", result.failed).red().bold()
        );
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.total_words == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&guess_count, &count) in &result.distribution {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {guess_count:2}: {bar} {count:4} ({pct:5.1}%)");
    }
}

/// Print the top `limit` seed words with their coverage scores
pub fn print_seed_list(seeds: &SeedList, limit: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ({} of {}) ",
        "SEED WORDS".bright_cyan().bold(),
        limit.min(seeds.len()),
        seeds.len()
    );
    println!("{}", "═".repeat(60).cyan());

    let best = seeds.entries().first().map_or(1, |entry| entry.score.max(1));
    for (rank, entry) in seeds.entries().iter().take(limit).enumerate() {
        println!(
            "   {:3}. {} [{}] {}",
            rank + 1,
            entry.word.text().to_uppercase().bright_white().bold(),
            create_progress_bar(f64::from(entry.score), f64::from(best), 20)
                .green(),
            entry.score
        );
    }
}
