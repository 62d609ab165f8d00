//! Display functions for command results

use super::formatters::{create_progress_bar, format_frequency};
use crate::commands::{AnalysisResult, SolveResult};
use crate::wordlists::WordLists;
use colored::Colorize;

/// Print the startup banner with word list sizes
pub fn print_word_lists(lists: &WordLists) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ",
        "Wordle Solver - Letter Frequency Heuristic".bright_cyan().bold()
    );
    println!("{}", "═".repeat(60).cyan());
    println!("Total Words: {}", lists.dictionary.len());
    println!("Words Already Used: {}", lists.used.len());
    println!("Playable Words: {}\n", lists.playable.len());
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nGuess {}: {} {}",
            i + 1,
            step.word.to_uppercase(),
            step.feedback.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Score:      {:.4}", step.score);
            let top: Vec<String> = step
                .top
                .iter()
                .map(|(word, score)| format!("{word} ({score:.4})"))
                .collect();
            println!("  Top words:  {}", top.join(", "));
        }
    }

    println!();
    let attempts = result.attempts();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {attempts} attempts.").green().bold()
        );
    } else if result.solved {
        println!(
            "{}",
            format!("⚠️  Solved in {attempts} attempts (over the limit of six)")
                .yellow()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {attempts} guesses").red().bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SCORE ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 Opening guess against {} candidates:",
        result.total_candidates
    );
    println!("   Pos  Letter  Letter freq  Position freq  Contribution");
    for (position, c) in result.contributions.iter().enumerate() {
        println!(
            "   {}    {}       {}       {}         {:.4}",
            position + 1,
            c.letter.to_ascii_uppercase(),
            format_frequency(c.letter_frequency),
            format_frequency(c.position_frequency),
            c.contribution
        );
    }

    let max_score = result.contributions.len() as f64;
    println!(
        "\n   Score: [{}] {}",
        create_progress_bar(result.score, max_score, 30).green(),
        format!("{:.4}", result.score).bright_yellow()
    );

    match result.rank {
        Some(rank) => println!("   Rank:  {rank} of {} scored words", result.pool_size),
        None => println!(
            "   Rank:  not scored ({})",
            result.unranked_reason().unwrap_or_default()
        ),
    }
}
