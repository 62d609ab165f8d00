//! Test all words - leave-one-out solver evaluation
//!
//! Every dictionary word in turn becomes the secret and the solver plays
//! against it with simulated feedback.

use super::MAX_SUCCESSFUL_ATTEMPTS;
use crate::core::Word;
use crate::error::SolverError;
use crate::output::formatters::create_progress_bar;
use crate::solver::{CacheStats, Solver, StatsCache, play};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// A running summary is printed after this many words
pub const PROGRESS_INTERVAL: usize = 1000;

const HARDEST_WORDS: usize = 10;

/// How to run an evaluation
#[derive(Debug, Clone)]
pub struct EvaluationConfig {
    /// Only test the first `limit` words
    pub limit: Option<usize>,
    /// Test a random sample of this many words instead
    pub sample: Option<usize>,
    pub seed: u64,
    /// One solver and cache per target, spread over the rayon pool
    pub parallel: bool,
    pub use_cache: bool,
    pub show_progress: bool,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            limit: None,
            sample: None,
            seed: 42,
            parallel: false,
            use_cache: true,
            show_progress: true,
        }
    }
}

/// Result from testing a single word
#[derive(Debug, Clone)]
pub struct WordTestResult {
    pub word: String,
    pub guesses: Vec<String>,
    pub num_guesses: usize,
    /// Solved within [`MAX_SUCCESSFUL_ATTEMPTS`] guesses
    pub success: bool,
    pub duration: Duration,
}

/// Statistics from testing all words
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_words: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub failures: usize,
    pub failure_rate: f64,
    pub guess_distribution: BTreeMap<usize, usize>,
    pub max_guesses: usize,
    /// Words that took the most guesses, hardest first, with their solve time
    pub worst_words: Vec<(String, usize, Duration)>,
    pub total_time: Duration,
    /// Shared cache counters; `None` when each target had its own cache
    pub cache: Option<CacheStats>,
    pub results: Vec<WordTestResult>,
}

impl TestAllStatistics {
    fn from_results(
        results: Vec<WordTestResult>,
        total_time: Duration,
        cache: Option<CacheStats>,
    ) -> Self {
        let total_words = results.len();
        let total_guesses: usize = results.iter().map(|r| r.num_guesses).sum();
        let failures = results.iter().filter(|r| !r.success).count();

        let mut guess_distribution = BTreeMap::new();
        for result in &results {
            *guess_distribution.entry(result.num_guesses).or_insert(0) += 1;
        }

        let mut worst_words: Vec<(String, usize, Duration)> = results
            .iter()
            .map(|r| (r.word.clone(), r.num_guesses, r.duration))
            .collect();
        worst_words.sort_by_key(|(_, n, _)| std::cmp::Reverse(*n));
        worst_words.truncate(HARDEST_WORDS);

        Self {
            total_words,
            total_guesses,
            average_guesses: ratio(total_guesses, total_words),
            failures,
            failure_rate: ratio(failures, total_words),
            guess_distribution,
            max_guesses: results.iter().map(|r| r.num_guesses).max().unwrap_or(0),
            worst_words,
            total_time,
            cache,
            results,
        }
    }

    /// Average wall time per tested word
    #[must_use]
    pub fn time_per_word(&self) -> Duration {
        u32::try_from(self.total_words)
            .ok()
            .filter(|&n| n > 0)
            .map_or(Duration::ZERO, |n| self.total_time / n)
    }
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

/// Running totals shared by the sequential and parallel loops
struct Progress {
    bar: ProgressBar,
    show: bool,
    completed: AtomicUsize,
    guesses: AtomicUsize,
    failures: AtomicUsize,
}

impl Progress {
    fn new(total: usize, show: bool) -> Self {
        let bar = if show {
            ProgressBar::new(total as u64)
        } else {
            ProgressBar::hidden()
        };
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .map_or_else(
                    |_| ProgressStyle::default_bar(),
                    |style| style.progress_chars("█▓▒░"),
                ),
        );

        Self {
            bar,
            show,
            completed: AtomicUsize::new(0),
            guesses: AtomicUsize::new(0),
            failures: AtomicUsize::new(0),
        }
    }

    fn record(&self, result: &WordTestResult) {
        let guesses = self.guesses.fetch_add(result.num_guesses, Ordering::Relaxed)
            + result.num_guesses;
        let failures =
            self.failures.fetch_add(usize::from(!result.success), Ordering::Relaxed)
                + usize::from(!result.success);
        let completed = self.completed.fetch_add(1, Ordering::Relaxed) + 1;

        self.bar.inc(1);
        if completed % PROGRESS_INTERVAL == 0 {
            let line = format!(
                "Completed {completed} words. average guesses: {:.2}, failures: {failures} ({:.1}%)",
                ratio(guesses, completed),
                ratio(failures, completed) * 100.0
            );
            log::info!("{line}");
            if self.show {
                self.bar.suspend(|| println!("{line}"));
            }
            self.bar
                .set_message(format!("Avg: {:.2}", ratio(guesses, completed)));
        }
    }
}

/// Pick the words to test, in test order
///
/// A sample is drawn with a [`StdRng`] seeded from `config.seed`, so the same
/// seed always yields the same targets. Otherwise the dictionary order is kept.
#[must_use]
pub fn select_targets<'w>(dictionary: &'w [Word], config: &EvaluationConfig) -> Vec<&'w Word> {
    let targets: Vec<&Word> = match config.sample {
        Some(count) => {
            let mut rng = StdRng::seed_from_u64(config.seed);
            dictionary.choose_multiple(&mut rng, count).collect()
        }
        None => dictionary.iter().collect(),
    };

    match config.limit {
        Some(limit) => targets.into_iter().take(limit).collect(),
        None => targets,
    }
}

fn new_cache(enabled: bool) -> StatsCache {
    if enabled {
        StatsCache::new()
    } else {
        StatsCache::disabled()
    }
}

fn evaluate(
    solver: &Solver<'_>,
    target: &Word,
    progress: &Progress,
) -> Result<WordTestResult, SolverError> {
    let start = Instant::now();
    let record = play(solver, target, None)?;
    let num_guesses = record.attempts();

    let result = WordTestResult {
        word: target.text().to_string(),
        guesses: record
            .rounds
            .iter()
            .map(|round| round.guess.text().to_string())
            .collect(),
        num_guesses,
        success: record.solved && num_guesses <= MAX_SUCCESSFUL_ATTEMPTS,
        duration: start.elapsed(),
    };
    progress.record(&result);
    Ok(result)
}

/// Play every selected dictionary word against the solver
///
/// The dictionary is both the statistics source and the playable pool. In
/// sequential mode one cache is shared across targets; with
/// `config.parallel` each target gets a fresh solver and cache.
///
/// # Errors
///
/// Returns [`SolverError::NoCandidates`] if some target cannot be reached,
/// which only happens when a constraint update excludes the secret itself.
pub fn run_test_all(
    dictionary: &[Word],
    config: &EvaluationConfig,
) -> Result<TestAllStatistics, SolverError> {
    let targets = select_targets(dictionary, config);
    log::info!(
        "testing {} of {} words ({})",
        targets.len(),
        dictionary.len(),
        if config.parallel { "parallel" } else { "sequential" }
    );

    let progress = Progress::new(targets.len(), config.show_progress);
    let start = Instant::now();

    let (results, cache) = if config.parallel {
        let results = targets
            .par_iter()
            .map(|target| {
                let solver =
                    Solver::new(dictionary, dictionary).with_cache(new_cache(config.use_cache));
                evaluate(&solver, target, &progress)
            })
            .collect::<Result<Vec<_>, _>>()?;
        (results, None)
    } else {
        let solver = Solver::new(dictionary, dictionary).with_cache(new_cache(config.use_cache));
        let results = targets
            .iter()
            .map(|target| evaluate(&solver, target, &progress))
            .collect::<Result<Vec<_>, _>>()?;
        (results, Some(solver.cache().stats()))
    };

    progress.bar.finish_with_message("Complete!");
    let stats = TestAllStatistics::from_results(results, start.elapsed(), cache);
    log::info!(
        "tested {} words in {:.2?}, average guesses {:.2}",
        stats.total_words,
        stats.total_time,
        stats.average_guesses
    );
    Ok(stats)
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!(
        "  Completed {} words in {:.2} minutes ({:.3} milliseconds per word).",
        stats.total_words,
        stats.total_time.as_secs_f64() / 60.0,
        stats.time_per_word().as_secs_f64() * 1000.0
    );
    println!(
        "  Average guesses:     {}",
        format!("{:.2}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    let failures = format!(
        "{} ({:.1}%)",
        stats.failures,
        stats.failure_rate * 100.0
    );
    println!(
        "  Failures:            {}",
        if stats.failures > 0 {
            failures.red()
        } else {
            failures.green()
        }
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(1);
    for (guesses, &count) in &stats.guess_distribution {
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        let percentage = ratio(count, stats.total_words) * 100.0;
        let bar = if *guesses > MAX_SUCCESSFUL_ATTEMPTS {
            bar.red()
        } else {
            bar.green()
        };
        println!("  {guesses:2} guesses: {bar} {count:5} ({percentage:5.1}%)");
    }

    if !stats.worst_words.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for (word, guesses, duration) in &stats.worst_words {
            println!(
                "  {} ({} guesses, {:.3} ms)",
                word.to_uppercase().yellow(),
                guesses,
                duration.as_secs_f64() * 1000.0
            );
        }
    }

    if let Some(cache) = stats.cache {
        println!("\n🗃  {}", "Statistics Cache".bright_cyan().bold());
        println!("  Entries:             {}", cache.entries);
        println!(
            "  Hits / misses:       {} / {} ({:.1}% hit rate)",
            cache.hits,
            cache.misses,
            ratio(cache.hits, cache.hits + cache.misses) * 100.0
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    const WORDS: &[&str] = &[
        "crane", "slate", "irate", "crate", "grate", "plate", "spelt", "knelt", "ghost", "apple",
        "angle", "ankle", "zebra", "fight", "might", "night", "light", "sight",
    ];

    fn quiet() -> EvaluationConfig {
        EvaluationConfig {
            show_progress: false,
            ..EvaluationConfig::default()
        }
    }

    #[test]
    fn every_word_is_solved() {
        let words = words_from_slice(WORDS);
        let stats = run_test_all(&words, &quiet()).unwrap();

        assert_eq!(stats.total_words, words.len());
        assert_eq!(stats.results.len(), words.len());
        for (result, word) in stats.results.iter().zip(&words) {
            assert_eq!(result.word, word.text());
            assert_eq!(result.guesses.last().map(String::as_str), Some(word.text()));
        }
        assert_eq!(
            stats.guess_distribution.values().sum::<usize>(),
            words.len()
        );
        assert_eq!(
            stats.total_guesses,
            stats.results.iter().map(|r| r.num_guesses).sum::<usize>()
        );
    }

    #[test]
    fn failures_are_attempts_over_six() {
        let words = words_from_slice(WORDS);
        let stats = run_test_all(&words, &quiet()).unwrap();

        let over = stats
            .results
            .iter()
            .filter(|r| r.num_guesses > MAX_SUCCESSFUL_ATTEMPTS)
            .count();
        assert_eq!(stats.failures, over);
        assert!((stats.failure_rate - over as f64 / words.len() as f64).abs() < 1e-12);
    }

    #[test]
    fn limit_restricts_targets() {
        let words = words_from_slice(WORDS);
        let config = EvaluationConfig {
            limit: Some(3),
            ..quiet()
        };

        let stats = run_test_all(&words, &config).unwrap();
        assert_eq!(stats.total_words, 3);
        assert_eq!(stats.results[0].word, "crane");
    }

    #[test]
    fn sample_is_reproducible() {
        let words = words_from_slice(WORDS);
        let config = EvaluationConfig {
            sample: Some(5),
            seed: 7,
            ..quiet()
        };

        let first = select_targets(&words, &config);
        let second = select_targets(&words, &config);
        assert_eq!(first.len(), 5);
        assert_eq!(first, second);
    }

    #[test]
    fn parallel_matches_fresh_sequential_solvers() {
        let words = words_from_slice(WORDS);
        let parallel = run_test_all(
            &words,
            &EvaluationConfig {
                parallel: true,
                ..quiet()
            },
        )
        .unwrap();

        assert!(parallel.cache.is_none());
        for (result, word) in parallel.results.iter().zip(&words) {
            let solver = Solver::new(&words, &words);
            let record = play(&solver, word, None).unwrap();
            assert_eq!(result.num_guesses, record.attempts());
        }
    }

    #[test]
    fn repeated_runs_give_identical_attempts() {
        let words = words_from_slice(WORDS);
        let attempts = |config: &EvaluationConfig| -> Vec<usize> {
            run_test_all(&words, config)
                .unwrap()
                .results
                .iter()
                .map(|r| r.num_guesses)
                .collect()
        };

        let first = attempts(&quiet());
        assert_eq!(first, attempts(&quiet()));
        assert_eq!(
            first,
            attempts(&EvaluationConfig {
                parallel: true,
                ..quiet()
            })
        );
    }

    #[test]
    fn hardest_words_are_sorted_and_timed() {
        let words = words_from_slice(WORDS);
        let stats = run_test_all(&words, &quiet()).unwrap();

        assert_eq!(stats.worst_words.len(), HARDEST_WORDS);
        assert_eq!(stats.worst_words[0].1, stats.max_guesses);
        assert!(stats.worst_words.windows(2).all(|w| w[0].1 >= w[1].1));
        for (word, guesses, duration) in &stats.worst_words {
            let result = stats.results.iter().find(|r| &r.word == word).unwrap();
            assert_eq!(result.num_guesses, *guesses);
            assert_eq!(result.duration, *duration);
        }
    }

    #[test]
    fn sequential_run_shares_cache() {
        let words = words_from_slice(WORDS);
        let stats = run_test_all(&words, &quiet()).unwrap();

        let cache = stats.cache.unwrap();
        // Every target opens with the same state
        assert!(cache.hits >= words.len() - 1);
    }

    #[test]
    fn disabled_cache_is_exact_and_stays_empty() {
        let words = words_from_slice(WORDS);
        let config = EvaluationConfig {
            use_cache: false,
            ..quiet()
        };

        let stats = run_test_all(&words, &config).unwrap();
        assert_eq!(stats.cache.unwrap().entries, 0);
        assert_eq!(stats.total_words, words.len());
    }

    #[test]
    fn empty_run_has_zero_rates() {
        let stats = TestAllStatistics::from_results(Vec::new(), Duration::ZERO, None);
        assert!(stats.average_guesses.abs() < f64::EPSILON);
        assert!(stats.failure_rate.abs() < f64::EPSILON);
        assert_eq!(stats.time_per_word(), Duration::ZERO);
    }
}
