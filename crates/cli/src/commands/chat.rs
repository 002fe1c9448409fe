//! `craftsman chat` — interactive assistant session.
//!
//! A plain stdin read loop: each line is one question, one round trip. A
//! failed round trip prints the error and keeps the session alive with its
//! history unchanged.

use std::io::Write;
use std::sync::Arc;

use craftsman_assistant::Session;
use craftsman_core::sink::OutputSink;
use tokio::io::{self, AsyncBufReadExt, BufReader};

/// Recognized session-ending inputs.
fn is_exit(line: &str) -> bool {
    matches!(
        line.to_lowercase().as_str(),
        "exit" | "quit" | "/exit" | "/quit"
    )
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config_with_key()?;
    let sink = super::console();

    let provider = craftsman_providers::from_config(&config)?;
    let mut session = Session::new(Arc::new(provider), &config);

    println!();
    println!("  ╔══════════════════════════════════════════════╗");
    println!("  ║     Craftsman — Laravel Assistant            ║");
    println!("  ╚══════════════════════════════════════════════╝");
    println!();
    println!("  Model: {}", session.model());
    println!();
    println!("  Ask anything about Laravel, Filament, or Pest.");
    println!("  Type 'exit' or 'quit' to end the session.");
    println!();

    let stdin = io::stdin();
    let reader = BufReader::new(stdin);
    let mut lines = reader.lines();

    print!("  You > ");
    std::io::stdout().flush()?;

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();

        if line.is_empty() {
            print!("  You > ");
            std::io::stdout().flush()?;
            continue;
        }

        if is_exit(line) {
            break;
        }

        eprint!("  ...");
        match session.ask(line).await {
            Ok(reply) => {
                eprint!("\r     \r");
                sink.reply(&reply);
            }
            Err(e) => {
                eprint!("\r     \r");
                sink.error(&e.to_string());
            }
        }

        println!();
        print!("  You > ");
        std::io::stdout().flush()?;
    }

    println!();
    println!("  Thanks for using Craftsman. Goodbye!");
    println!();

    Ok(())
}
