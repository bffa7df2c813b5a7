//! Interactive terminal session for the assistant.
//!
//! Stands in for the site's chat widget: one controller session driven by
//! stdin lines. All matching and composition happens in the library; this
//! module only moves strings.

use std::io::{self, BufRead};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::sync::broadcast;

use crate::assistant::core::config::AssistantConfig;
use crate::assistant::engine::controller::ConversationController;
use crate::assistant::knowledge::base::KnowledgeBase;
use crate::assistant::session::transcript::{ConversationTurn, TurnRole};

/// Run the terminal chat host until EOF or `/quit`.
///
/// # Returns
/// `ExitCode::SUCCESS` on a clean exit, `1` on failure.
#[must_use]
pub fn run() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    if let Err(err) = chat_loop() {
        tracing::error!("Chat session failed: {err:#}");
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

fn chat_loop() -> anyhow::Result<()> {
    let rt = tokio::runtime::Runtime::new().context("failed to create runtime")?;

    let knowledge = Arc::new(KnowledgeBase::builtin().context("invalid builtin content")?);
    let controller = rt
        .block_on(async {
            ConversationController::spawn(knowledge, AssistantConfig::default(), None)
        })
        .context("failed to start session")?;
    let mut events = controller.subscribe();

    for turn in rt.block_on(controller.transcript()) {
        print_turn(&turn);
    }
    println!("(type a question, /clear to reset, /quit to leave)\n");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        let input = line.trim();

        match input {
            "" => {}
            "/quit" | "/exit" => break,
            "/clear" => {
                controller.clear()?;
                rt.block_on(await_reset(&controller));
                for turn in rt.block_on(controller.transcript()) {
                    print_turn(&turn);
                }
            }
            _ => {
                if controller.submit(input)? {
                    if let Some(turn) = rt.block_on(next_assistant_turn(&mut events)) {
                        print_turn(&turn);
                    }
                }
            }
        }
    }

    controller.close();
    Ok(())
}

/// Wait for the next assistant turn on the event stream.
async fn next_assistant_turn(
    events: &mut broadcast::Receiver<ConversationTurn>,
) -> Option<ConversationTurn> {
    loop {
        match events.recv().await {
            Ok(turn) if turn.role == TurnRole::Assistant => return Some(turn),
            Ok(_) | Err(broadcast::error::RecvError::Lagged(_)) => {}
            Err(broadcast::error::RecvError::Closed) => return None,
        }
    }
}

/// Clears travel the command queue; poll until the reset has landed.
async fn await_reset(controller: &ConversationController) {
    for _ in 0..50 {
        if controller.transcript().await.len() == 1 {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

fn print_turn(turn: &ConversationTurn) {
    match turn.role {
        TurnRole::User => println!("you > {}", turn.text),
        TurnRole::Assistant => println!("folio > {}\n", turn.text),
    }
}
