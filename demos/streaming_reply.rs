//! Streaming reply example
//!
//! Starts a writing-help session and prints assistant text as it arrives,
//! handling session announcements and status changes event by event.
//!
//! ## Usage
//!
//! ```bash
//! export DRAFTSMITH_API_KEY=ds-...
//! cargo run --example streaming_reply
//! ```

use draftsmith_client::{
    create_client_from_env, DraftsmithClient, ReplyEvent, StartHelpRequest,
};
use futures::StreamExt;
use std::io::{self, Write};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("Draftsmith Streaming Reply Example");
    println!("==================================\n");

    let client = create_client_from_env()?;

    let request = StartHelpRequest::new(
        "doc_42",
        "node_7",
        "Tighten the introduction without losing the anecdote.",
    );

    println!("Requesting writing help (streaming)...\n");

    let mut stream = client.help().start_session(request).await?;

    while let Some(event) = stream.next().await {
        match event? {
            ReplyEvent::Session {
                session_id,
                message_id,
            } => {
                tracing::debug!(session_id, message_id, "session announced");
            }
            ReplyEvent::Status(status) => {
                println!("\n[status: {}]", status);
            }
            ReplyEvent::Delta(text) => {
                print!("{}", text);
                io::stdout().flush()?;
            }
        }
    }

    if let Some(outcome) = stream.take_outcome() {
        println!("\n---");
        println!("Session:    {}", outcome.session_id.as_deref().unwrap_or("-"));
        println!("Status:     {}", outcome.status);
        println!("Characters: {}", outcome.full_message.len());
    }

    Ok(())
}
