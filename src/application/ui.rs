#[cfg(test)]
#[path = "ui_test.rs"]
mod tests;

use std::io::Write;

use anyhow::bail;
use anyhow::Result;
use tokio::io::AsyncBufReadExt;
use tokio::io::BufReader;
use tokio::sync::mpsc;
use yansi::Paint;

use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::SessionState;
use crate::domain::models::SlashCommand;
use crate::domain::models::Speaker;
use crate::domain::models::Utterance;
use crate::domain::services::actions::help_text;

pub const DEFAULT_OPENER: &str = "Hello Interview Bot";
const BUBBLE_WIDTH: usize = 76;

pub fn banner() -> String {
    return [
        "Interview Buddy: your virtual interview practice partner",
        "",
        "This chatbot simulates an interview experience. The interviewer will ask you to introduce yourself, \
find out which domain you want to be interviewed in, and then ask domain-specific questions one at a time. \
At the end, it gives you feedback on how the interview went.",
        "",
        "Press enter to say hello, or type /help for commands.",
    ]
    .join("\n");
}

pub fn format_utterance(utterance: &Utterance, width: usize) -> String {
    let label = match utterance.speaker() {
        Speaker::User => format!("{} 👤", utterance.speaker().display_name()),
        Speaker::Assistant => format!("{} 🤖", utterance.speaker().display_name()),
    };

    let body = utterance
        .as_string_lines(width)
        .iter()
        .map(|line| return format!("  {line}"))
        .collect::<Vec<String>>()
        .join("\n");

    return format!("{label}:\n{body}");
}

pub fn format_usage(usage: u64) -> String {
    return format!("Used {usage} tokens");
}

pub fn format_usage_report(usage: u64, state: SessionState) -> String {
    let note = match state {
        SessionState::Fresh => "the interview has not started",
        SessionState::Active => "interview in progress",
    };
    return format!("[{state}] {} ({note})", format_usage(usage));
}

/// Plain text for an event. Colour is applied when printing.
pub fn format_event(event: &Event) -> String {
    match event {
        Event::Reply(utterance, usage) => {
            return format!(
                "{}\n\n{}",
                format_utterance(utterance, BUBBLE_WIDTH),
                format_usage(*usage)
            );
        }
        Event::Failure(err) => {
            if err.is_recoverable() {
                return format!("{err}. Nothing was recorded, you can try again.");
            }
            return format!("{err}. Nothing was recorded.");
        }
        Event::ResetDone() => {
            return "You exited from the interview. You can start a new interview with /new."
                .to_string();
        }
        Event::RestartDone() => {
            return "Starting a new interview. Press enter to say hello.".to_string();
        }
        Event::Usage(usage, state) => return format_usage_report(*usage, *state),
        Event::History(utterances, transcript) => {
            if utterances.is_empty() {
                return "The conversation is empty.".to_string();
            }
            return transcript.to_string();
        }
    }
}

fn print_event(event: &Event) {
    let text = format_event(event);
    match event {
        Event::Failure(_) => println!("{}\n", Paint::red(text)),
        Event::Reply(..) => println!("{}\n", Paint::cyan(text)),
        _ => println!("{}\n", Paint::new(text).dimmed()),
    }
}

fn prompt() -> Result<()> {
    print!("{} ", Paint::green(">").bold());
    std::io::stdout().flush()?;
    return Ok(());
}

/// Reads answers from stdin and relays them to the session worker, waiting
/// for each answer before reading the next line.
pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    mut rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    println!("{}\n", Paint::new(banner()).bold());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt()?;
        let line = match lines.next_line().await? {
            Some(line) => line,
            None => break,
        };

        let action = match SlashCommand::parse(&line) {
            Some(cmd) => {
                if cmd.is_quit() {
                    break;
                }
                if cmd.is_help() {
                    println!("{}\n", help_text());
                    continue;
                }
                if cmd.is_exit_interview() {
                    Action::Reset()
                } else if cmd.is_new_interview() {
                    Action::Restart()
                } else if cmd.is_usage() {
                    Action::Usage()
                } else {
                    Action::History()
                }
            }
            None => {
                let text = if line.trim().is_empty() {
                    DEFAULT_OPENER.to_string()
                } else {
                    line
                };
                println!(
                    "{}\n",
                    format_utterance(&Utterance::new(Speaker::User, &text), BUBBLE_WIDTH)
                );
                Action::Submit(text)
            }
        };

        tx.send(action)?;
        match rx.recv().await {
            Some(event) => print_event(&event),
            None => bail!("The interview worker stopped unexpectedly"),
        }
    }

    println!("Goodbye!");
    return Ok(());
}
