//! Interactive chat loop: Read → Respond → Print.
//!
//! Every turn runs inside an error boundary: a failed turn is logged and
//! reported to the user, and the loop keeps going.

use crate::agent::session::CookingAgent;
use crate::inference::ChatBackend;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Inputs that end the session (compared case-insensitively).
pub const EXIT_COMMANDS: &[&str] = &["exit", "quit", "bye", "goodbye"];

pub fn is_exit_command(input: &str) -> bool {
    let lower = input.trim().to_lowercase();
    EXIT_COMMANDS.contains(&lower.as_str())
}

fn print_banner(out: &mut impl Write) -> Result<()> {
    let rule = "=".repeat(70);
    writeln!(out, "{}", rule)?;
    writeln!(out, "{}", "🍳 Welcome to the Cooking AI Agent! 👨‍🍳".bold())?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "\nI'm your personal cooking assistant powered by AI!")?;
    writeln!(out, "I can help you with:")?;
    writeln!(out, "  • Finding recipes by cuisine and difficulty")?;
    writeln!(out, "  • Extracting ingredients for specific recipes")?;
    writeln!(out, "  • Providing cooking tips and techniques")?;
    writeln!(out, "\nType 'exit' or 'quit' to end the conversation.")?;
    writeln!(out, "{}\n", rule)?;
    Ok(())
}

/// Run the conversation until an exit command, end of input, or `cancel`.
pub async fn run_chat_loop<B, R, W>(
    agent: &CookingAgent<B>,
    input: R,
    out: &mut W,
    cancel: CancellationToken,
) -> Result<()>
where
    B: ChatBackend,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    print_banner(out)?;
    let mut conversation = agent.new_conversation();
    writeln!(out, "✅ Cooking Agent is ready! Start chatting below:\n")?;

    let mut lines = input.lines();

    loop {
        write!(out, "{} ", "You:".green().bold())?;
        out.flush()?;

        let line = tokio::select! {
            _ = cancel.cancelled() => None,
            line = lines.next_line() => line.context("Failed to read input")?,
        };

        let Some(line) = line else {
            writeln!(out, "\n\n👋 Goodbye! Happy cooking!")?;
            break;
        };

        let user_input = line.trim();
        if user_input.is_empty() {
            continue;
        }

        if is_exit_command(user_input) {
            writeln!(out, "\n👋 Thanks for using the Cooking AI Agent! Happy cooking!")?;
            break;
        }

        write!(out, "{} ", "Assistant:".cyan().bold())?;
        out.flush()?;

        let turn = tokio::select! {
            _ = cancel.cancelled() => {
                writeln!(out, "\n\n👋 Goodbye! Happy cooking!")?;
                break;
            }
            turn = agent.respond(&mut conversation, user_input) => turn,
        };

        match turn {
            Ok(reply) => writeln!(out, "{}\n", reply)?,
            Err(e) => {
                error!("Turn failed in conversation {}: {:#}", conversation.id(), e);
                writeln!(out, "\n{} An error occurred: {}", "❌".red(), e)?;
                writeln!(out, "Please try again.\n")?;
            }
        }
    }

    info!(
        "Conversation {} ended ({} messages, {} tokens)",
        conversation.id(),
        conversation.history().len(),
        conversation.usage().total_tokens
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CookingConfig;
    use crate::inference::ScriptedBackend;

    async fn run(input: &str, backend: ScriptedBackend) -> String {
        let agent = CookingAgent::new(backend, &CookingConfig::default());
        let mut out = Vec::new();
        run_chat_loop(&agent, input.as_bytes(), &mut out, CancellationToken::new())
            .await
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn exit_commands_ignore_case_and_whitespace() {
        assert!(is_exit_command("quit"));
        assert!(is_exit_command("  Goodbye "));
        assert!(is_exit_command("EXIT"));
        assert!(!is_exit_command("exit now"));
    }

    #[tokio::test]
    async fn blank_lines_are_skipped_and_exit_stops_reading() {
        let backend = ScriptedBackend::new();
        backend.push_text("Let's make pasta!");
        let out = run("\n   \nhello\nquit\nnever read\n", backend).await;

        assert!(out.contains("Welcome to the Cooking AI Agent!"));
        assert!(out.contains("Let's make pasta!"));
        assert!(out.contains("Thanks for using the Cooking AI Agent! Happy cooking!"));
        assert!(!out.contains("An error occurred"));
    }

    #[tokio::test]
    async fn errors_are_reported_and_the_loop_continues() {
        let backend = ScriptedBackend::new();
        backend.push_error("rate limited");
        backend.push_text("Back online.");
        let out = run("first\nsecond\n", backend).await;

        assert!(out.contains("An error occurred: rate limited"));
        assert!(out.contains("Please try again."));
        assert!(out.contains("Back online."));
        assert!(out.contains("Goodbye! Happy cooking!"));
    }
}
