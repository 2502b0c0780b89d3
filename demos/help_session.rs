//! Multi-turn help session example
//!
//! Starts a writing-help session with the `process` convenience API, then
//! sends a follow-up turn within the same session.
//!
//! ## Usage
//!
//! ```bash
//! export DRAFTSMITH_API_KEY=ds-...
//! cargo run --example help_session
//! ```

use draftsmith_client::{
    create_client_from_env, DraftsmithClient, HelpTurnRequest, StartHelpRequest,
};
use std::io::{self, Write};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("Draftsmith Help Session Example");
    println!("===============================\n");

    let client = create_client_from_env()?;
    let help = client.help();

    println!("Turn 1: asking for help...\n");
    let stream = help
        .start_session(StartHelpRequest::new(
            "doc_42",
            "node_7",
            "Suggest a stronger opening sentence.",
        ))
        .await?;

    let outcome = stream
        .process(|text| {
            print!("{}", text);
            let _ = io::stdout().flush();
        })
        .await?;

    let session_id = outcome
        .session_id
        .ok_or("server did not announce a session")?;
    println!("\n\n[session {} | status {}]\n", session_id, outcome.status);

    println!("Turn 2: asking for a variation...\n");
    let stream = help
        .send_response(HelpTurnRequest::new(
            session_id,
            "Good, now make it half as long.",
        ))
        .await?;

    let outcome = stream
        .process(|text| {
            print!("{}", text);
            let _ = io::stdout().flush();
        })
        .await?;

    println!("\n\n[final status: {}]", outcome.status);

    Ok(())
}
