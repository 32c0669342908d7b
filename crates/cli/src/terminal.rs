//! Terminal implementations of the flow's prompt and message traits.

use async_trait::async_trait;
use colored::Colorize;
use flow::{Notifier, Prompter};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader, Stdin};
use tokio::sync::Mutex;
use tracing::warn;

/// Result of interpreting one line of input
#[derive(Debug, PartialEq, Eq)]
pub enum Choice {
    Picked(String),
    Dismissed,
    Invalid,
}

/// Match a line against the options: a 1-based number or the exact text.
/// An empty line or `q` dismisses the prompt.
pub fn resolve_choice(input: &str, options: &[String]) -> Choice {
    let input = input.trim();
    if input.is_empty() || input.eq_ignore_ascii_case("q") {
        return Choice::Dismissed;
    }
    if let Ok(n) = input.parse::<usize>() {
        return match n.checked_sub(1).and_then(|i| options.get(i)) {
            Some(option) => Choice::Picked(option.clone()),
            None => Choice::Invalid,
        };
    }
    options
        .iter()
        .find(|option| option.as_str() == input)
        .map(|option| Choice::Picked(option.clone()))
        .unwrap_or(Choice::Invalid)
}

/// Numbered single-choice prompt on stdin/stdout
pub struct TerminalPrompter {
    input: Mutex<BufReader<Stdin>>,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            input: Mutex::new(BufReader::new(tokio::io::stdin())),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Prompter for TerminalPrompter {
    async fn pick(&self, placeholder: &str, options: &[String]) -> Option<String> {
        println!("{}", placeholder.bold().blue());
        for (i, option) in options.iter().enumerate() {
            println!("  {} {}", format!("{}.", i + 1).green(), option);
        }

        let mut input = self.input.lock().await;
        loop {
            print!("{} ", ">".cyan());
            flush_prompt(&mut std::io::stdout());

            let mut line = String::new();
            match input.read_line(&mut line).await {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => {
                    warn!("Failed to read answer: {}", e);
                    return None;
                }
            }

            match resolve_choice(&line, options) {
                Choice::Picked(option) => return Some(option),
                Choice::Dismissed => return None,
                Choice::Invalid => println!(
                    "Pick a number between 1 and {} (Enter to skip)",
                    options.len()
                ),
            }
        }
    }
}

/// Flush a pending prompt; a failure is logged and input is still read
fn flush_prompt(out: &mut impl Write) -> bool {
    match out.flush() {
        Ok(()) => true,
        Err(e) => {
            warn!("Failed to flush prompt: {}", e);
            false
        }
    }
}

/// Prints info to stdout and errors to stderr
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn info(&self, message: &str) {
        println!("{}", message);
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message.red());
    }
}
