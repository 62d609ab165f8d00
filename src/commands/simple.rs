//! Interactive CLI mode
//!
//! The solver suggests a guess, the user plays it and types back the
//! feedback. Input and output are generic so the loop can be driven from
//! anything line oriented.

use crate::core::Feedback;
use crate::error::SolverError;
use crate::output::formatters::format_top_words;
use crate::solver::{Session, SessionState, Solver};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Options for the interactive loop
#[derive(Debug, Clone, Copy, Default)]
pub struct InteractiveConfig {
    /// Give up after this many guesses; `None` plays until solved
    pub max_rounds: Option<usize>,
}

/// How an interactive game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractiveOutcome {
    Solved { rounds: usize },
    Quit,
    GaveUp { rounds: usize },
}

enum Command {
    Quit,
    New,
    Undo,
    Feedback(Feedback),
}

/// Run the interactive mode
///
/// Commands accepted at the feedback prompt: `quit`, `new` and `undo`.
/// End of input counts as `quit`.
///
/// # Errors
///
/// Returns an error only if reading input or writing output fails.
#[allow(clippy::too_many_lines)]
pub fn run_simple<R: BufRead, W: Write>(
    solver: &Solver<'_>,
    config: InteractiveConfig,
    mut input: R,
    mut out: W,
) -> io::Result<InteractiveOutcome> {
    writeln!(out, "After each guess, enter the feedback as five symbols:")?;
    writeln!(out, "  ! correct letter in the correct position")?;
    writeln!(out, "  # letter in the word but in another position")?;
    writeln!(out, "  _ letter not in the word")?;
    writeln!(
        out,
        "Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n"
    )?;

    let mut session = Session::new(solver);

    loop {
        if let Some(limit) = config.max_rounds
            && session.rounds().len() >= limit
        {
            writeln!(out, "Giving up after {limit} guesses.")?;
            return Ok(InteractiveOutcome::GaveUp { rounds: limit });
        }

        let selection = match session.next_guess() {
            Ok(selection) => selection,
            Err(SolverError::NoCandidates) => {
                let hint = if session.constraints().is_contradictory() {
                    "The feedback contradicts itself: a position has no letters left."
                } else {
                    "Your feedback may be incorrect."
                };
                writeln!(out, "\n{} {hint}", "No candidates remain!".red().bold())?;
                writeln!(out, "Type 'undo' to go back, or 'new' to start over.\n")?;
                match read_command(&mut input, &mut out, "Command")? {
                    Command::Quit => return quit(&mut out),
                    Command::New => new_game(&mut session, &mut out)?,
                    Command::Undo => undo(&mut session, &mut out)?,
                    Command::Feedback(_) => {}
                }
                continue;
            }
            Err(e) => {
                writeln!(out, "{} {e}", "Error:".red())?;
                return Ok(InteractiveOutcome::Quit);
            }
        };

        writeln!(out, "\tChoosing next guess...")?;
        writeln!(out, "\tRemaining words: {}", selection.remaining)?;
        writeln!(
            out,
            "\tTop {} words: {}",
            selection.top.len(),
            format_top_words(&selection.top)
        )?;
        writeln!(
            out,
            "Guess {}: {}",
            session.attempts(),
            selection.guess.text().bright_yellow().bold()
        )?;

        let feedback = match read_command(&mut input, &mut out, "Enter feedback")? {
            Command::Quit => return quit(&mut out),
            Command::New => {
                new_game(&mut session, &mut out)?;
                continue;
            }
            Command::Undo => {
                undo(&mut session, &mut out)?;
                continue;
            }
            Command::Feedback(feedback) => feedback,
        };

        match session.submit(feedback) {
            Ok(SessionState::Solved { rounds }) => {
                writeln!(out, "\n{}", "═".repeat(40).bright_cyan())?;
                writeln!(out, "Solved in {rounds} attempts.")?;
                for (i, round) in session.rounds().iter().enumerate() {
                    writeln!(
                        out,
                        "  {}. {} {}",
                        i + 1,
                        round.guess.text().to_uppercase(),
                        round.feedback.to_emoji()
                    )?;
                }
                writeln!(out, "{}", "═".repeat(40).bright_cyan())?;
                return Ok(InteractiveOutcome::Solved { rounds });
            }
            Ok(SessionState::Guessing) => {
                log::debug!("constraints now {}", session.constraints());
            }
            Err(e) => writeln!(out, "{} {e}", "Error:".red())?,
        }
    }
}

/// Prompt until the user enters a command or well-formed feedback
fn read_command<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Command> {
    loop {
        write!(out, "{prompt}: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(Command::Quit);
        }

        match line.trim().to_lowercase().as_str() {
            "quit" | "q" | "exit" => return Ok(Command::Quit),
            "new" | "n" => return Ok(Command::New),
            "undo" | "u" => return Ok(Command::Undo),
            text => match text.parse::<Feedback>() {
                Ok(feedback) => return Ok(Command::Feedback(feedback)),
                Err(e) => writeln!(out, "{} {e}", "Invalid feedback:".red())?,
            },
        }
    }
}

fn quit<W: Write>(out: &mut W) -> io::Result<InteractiveOutcome> {
    writeln!(out, "\nThanks for playing!")?;
    Ok(InteractiveOutcome::Quit)
}

fn new_game<W: Write>(session: &mut Session<'_, '_>, out: &mut W) -> io::Result<()> {
    session.reset();
    writeln!(out, "\nNew game started!\n")
}

fn undo<W: Write>(session: &mut Session<'_, '_>, out: &mut W) -> io::Result<()> {
    if session.undo() {
        writeln!(out, "Undone! Back to guess {}\n", session.attempts() + 1)
    } else {
        writeln!(out, "Nothing to undo!\n")
    }
}
